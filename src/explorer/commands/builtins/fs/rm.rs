// Rm command

use anyhow::{Result, Context};
use colored::*;
use crate::explorer::commands::{Executable, Flow};
use crate::explorer::commands::builtins::common::{arg_or_ask, cancelled, success};
use crate::explorer::context::Session;
use crate::explorer::error::FsError;
use crate::explorer::guard::Outcome;
use crate::explorer::ops;

pub struct RmCommand;
impl Executable for RmCommand {
    fn execute(&self, args: &[String], session: &mut Session) -> Result<Flow> {
        let Some(name) = arg_or_ask(args, 1, session, "Enter file name to delete: ", "Name cannot be empty.")? else {
            return Ok(Flow::Continue);
        };

        let target = session.resolve(&name);
        let cursor = session.cursor.clone();
        match ops::delete(&target, &cursor, &mut |q| session.confirm(q)) {
            Ok(Outcome::Done(summary)) if summary.directories > 0 => {
                success(&format!("Directory deleted successfully ({} files removed).", summary.files));
            }
            Ok(Outcome::Done(_)) => success("File deleted successfully!"),
            Ok(Outcome::Aborted) => cancelled("Delete cancelled."),
            // Nothing to delete is an answer, not a failure
            Err(FsError::NotFound(_)) => println!("{}", "File/folder does not exist.".yellow()),
            Err(e) => return Err(e).with_context(|| format!("Error deleting {}", name)),
        }
        Ok(Flow::Continue)
    }
}
