// Exit command

use anyhow::Result;
use crate::explorer::commands::{Executable, Flow};
use crate::explorer::context::Session;

pub struct ExitCommand;
impl Executable for ExitCommand {
    fn execute(&self, _args: &[String], _session: &mut Session) -> Result<Flow> {
        println!("Goodbye!");
        Ok(Flow::Exit)
    }
}
