// Pwd command

use anyhow::Result;
use crate::explorer::commands::{Executable, Flow};
use crate::explorer::context::Session;

pub struct PwdCommand;
impl Executable for PwdCommand {
    fn execute(&self, _args: &[String], session: &mut Session) -> Result<Flow> {
        println!("{}", session.cursor);
        Ok(Flow::Continue)
    }
}
