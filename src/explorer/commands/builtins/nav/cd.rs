// Cd command

use anyhow::Result;
use crate::explorer::commands::{Executable, Flow};
use crate::explorer::commands::builtins::common::{arg_or_ask, success};
use crate::explorer::context::Session;
use crate::explorer::nav::descend;

pub struct CdCommand;
impl Executable for CdCommand {
    fn execute(&self, args: &[String], session: &mut Session) -> Result<Flow> {
        // args[0] is "cd". args[1] is path.
        let Some(raw) = arg_or_ask(args, 1, session, "Enter folder name to open (relative or absolute): ", "Folder name cannot be empty.")? else {
            return Ok(Flow::Continue);
        };

        session.cursor = descend(&raw, &session.cursor)?;
        success(&format!("Navigated to: {}", session.cursor));
        Ok(Flow::Continue)
    }
}
