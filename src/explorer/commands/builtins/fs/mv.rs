// Mv command

use anyhow::{Result, Context};
use crate::explorer::commands::{Executable, Flow};
use crate::explorer::commands::builtins::common::{cancelled, success};
use crate::explorer::context::Session;
use crate::explorer::guard::Outcome;
use crate::explorer::ops;
use super::source_and_dest;

pub struct MvCommand;
impl Executable for MvCommand {
    fn execute(&self, args: &[String], session: &mut Session) -> Result<Flow> {
        let Some((source, dest)) = source_and_dest(args, session, "Enter source file name (relative or absolute): ")? else {
            return Ok(Flow::Continue);
        };

        let source_path = session.resolve(&source);
        let dest_dir = session.resolve(&dest);
        let cursor = session.cursor.clone();
        let outcome = ops::move_entry(&source_path, &dest_dir, &cursor, &mut |q| session.confirm(q))
            .with_context(|| format!("Error moving {} to {}", source, dest))?;

        match outcome {
            Outcome::Done(target) => success(&format!("Moved to {}", target.display())),
            Outcome::Aborted => cancelled("Move cancelled."),
        }
        Ok(Flow::Continue)
    }
}
