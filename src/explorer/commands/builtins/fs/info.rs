// Info command

use anyhow::{Result, Context};
use colored::*;
use crate::explorer::commands::{Executable, Flow};
use crate::explorer::commands::builtins::common::arg_or_ask;
use crate::explorer::context::Session;
use crate::explorer::ops;

pub struct InfoCommand;
impl Executable for InfoCommand {
    fn execute(&self, args: &[String], session: &mut Session) -> Result<Flow> {
        let Some(name) = arg_or_ask(args, 1, session, "Enter file name: ", "Name cannot be empty.")? else {
            return Ok(Flow::Continue);
        };

        let path = session.resolve(&name);
        let entry = ops::info(&path).with_context(|| format!("Cannot inspect {}", name))?;

        println!("\n{}", "File Information:".bold());
        println!("   Name:          {}", entry.name.bold());
        println!("   Path:          {}", entry.path.display());
        println!("   Type:          {}", if entry.is_dir() { "Directory" } else { entry.kind.label() });
        println!("   Size:          {} bytes", entry.size);
        if let Some(t) = entry.modified {
            println!("   Last modified: {}", t.format(&session.config.display.date_format));
        }
        Ok(Flow::Continue)
    }
}
