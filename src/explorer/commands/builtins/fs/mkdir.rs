// Mkdir command

use anyhow::{Result, Context};
use crate::explorer::commands::{Executable, Flow};
use crate::explorer::commands::builtins::common::{arg_or_ask, success};
use crate::explorer::context::Session;
use crate::explorer::ops;

pub struct MkdirCommand;
impl Executable for MkdirCommand {
    fn execute(&self, args: &[String], session: &mut Session) -> Result<Flow> {
        let Some(name) = arg_or_ask(args, 1, session, "Enter directory name: ", "Directory name cannot be empty.")? else {
            return Ok(Flow::Continue);
        };

        let path = session.resolve(&name);
        ops::make_dir(&path).with_context(|| format!("Failed to create directory: {}", name))?;
        success(&format!("Directory created successfully: {}", path));
        Ok(Flow::Continue)
    }
}
