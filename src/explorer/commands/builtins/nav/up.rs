// Up command

use anyhow::Result;
use colored::*;
use crate::explorer::commands::{Executable, Flow};
use crate::explorer::commands::builtins::common::success;
use crate::explorer::context::Session;
use crate::explorer::error::NavError;
use crate::explorer::nav::ascend;

pub struct UpCommand;
impl Executable for UpCommand {
    fn execute(&self, _args: &[String], session: &mut Session) -> Result<Flow> {
        match ascend(&session.cursor) {
            Ok(parent) => {
                session.cursor = parent;
                success(&format!("Navigated to: {}", session.cursor));
            }
            Err(NavError::AtRoot) => println!("{}", "Already at root directory.".yellow()),
            Err(e) => return Err(e.into()),
        }
        Ok(Flow::Continue)
    }
}
