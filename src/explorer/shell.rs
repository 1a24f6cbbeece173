use anyhow::{Result, bail};
use colored::*;
use log::debug;
use crate::explorer::commands::{Flow, Registry, MENU};
use crate::explorer::context::Session;
use crate::explorer::parser::parse_command_line;

const PROMPT: &str = "Enter your choice (1-8) or a command (help): ";

/// Reads commands and dispatches them against one session.
pub struct Shell {
    session: Session,
    registry: Registry,
}

impl Shell {
    pub fn new(session: Session) -> Self {
        Self { session, registry: Registry::with_builtins() }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Runs one input line. Unknown commands are reported, not errors.
    pub fn run_line(&mut self, line: &str) -> Result<Flow> {
        let Some(args) = parse_command_line(line)? else {
            return Ok(Flow::Continue);
        };
        debug!("dispatch {:?}", args);
        match self.registry.get(&args[0]) {
            Some(command) => command.execute(&args, &mut self.session),
            None => {
                println!("{}", format!("Invalid choice '{}'! Please try again.", args[0]).yellow());
                Ok(Flow::Continue)
            }
        }
    }

    /// The menu loop. Errors are shown and the loop goes on; end of input exits.
    pub fn run_interactive(&mut self) -> Result<()> {
        loop {
            if self.session.config.shell.show_menu {
                self.print_menu();
            }
            let Some(line) = self.session.ask(PROMPT)? else {
                println!();
                break;
            };
            match self.run_line(&line) {
                Ok(Flow::Exit) => break,
                Ok(Flow::Continue) => {}
                Err(e) => eprintln!("{} {:#}", "❌".red(), e),
            }
        }
        Ok(())
    }

    /// Runs each line in order; stops at the first failure.
    pub fn run_script(&mut self, lines: &[String]) -> Result<()> {
        for line in lines {
            match self.run_line(line) {
                Ok(Flow::Exit) => break,
                Ok(Flow::Continue) => {}
                Err(e) => bail!("'{}' failed: {:#}", line, e),
            }
        }
        Ok(())
    }

    fn print_menu(&self) {
        println!("\n{}", "=== fexp: File Explorer ===".green().bold());
        println!("Current directory: {}", self.session.cursor.to_string().cyan());
        println!();
        for (n, _, label) in MENU {
            println!("{}. {}", n, label);
        }
    }
}
