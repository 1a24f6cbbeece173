// Cp command

use anyhow::{Result, Context};
use colored::*;
use crate::explorer::commands::{Executable, Flow};
use crate::explorer::commands::builtins::common::{cancelled, success};
use crate::explorer::context::Session;
use crate::explorer::guard::Outcome;
use crate::explorer::ops;
use super::source_and_dest;

pub struct CpCommand;
impl Executable for CpCommand {
    fn execute(&self, args: &[String], session: &mut Session) -> Result<Flow> {
        let Some((source, dest)) = source_and_dest(args, session, "Enter source folder name (relative or absolute): ")? else {
            return Ok(Flow::Continue);
        };

        let source_path = session.resolve(&source);
        let dest_dir = session.resolve(&dest);
        let cursor = session.cursor.clone();
        let options = session.copy_options();
        let outcome = ops::copy_folder(
            &source_path,
            &dest_dir,
            &cursor,
            &mut |q| session.confirm(q),
            options,
            &mut |rel| println!("   {} {}", "Copied:".dimmed(), rel.display()),
        )
        .with_context(|| format!("Error copying folder {} to {}", source, dest))?;

        match outcome {
            Outcome::Done(summary) => success(&format!(
                "Folder copied successfully! ({} files, {} directories)",
                summary.files, summary.directories
            )),
            Outcome::Aborted => cancelled("Copy cancelled."),
        }
        Ok(Flow::Continue)
    }
}
