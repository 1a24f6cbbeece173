// Help command

use anyhow::Result;
use colored::*;
use crate::explorer::commands::{Executable, Flow, MENU};
use crate::explorer::context::Session;

const USAGE: &[(&str, &str)] = &[
    ("ls|list [dir|pattern]", "List entries with type, size and modification time"),
    ("mkdir <name>", "Create a directory (and missing parents)"),
    ("rm|del <name>", "Delete a file, or a folder after confirmation"),
    ("mv|move <src> <dest-dir>", "Move into a directory, created if missing"),
    ("cd|open <dir>", "Open a folder"),
    ("cp|copy <src> <dest-dir>", "Copy a folder, replacing one of the same name"),
    ("up|..", "Go to the parent directory"),
    ("pwd", "Print the current directory"),
    ("info <name>", "Show details of one entry"),
    ("help", "Show this help"),
    ("exit|quit", "Leave the shell"),
];

pub struct HelpCommand;
impl Executable for HelpCommand {
    fn execute(&self, _args: &[String], _session: &mut Session) -> Result<Flow> {
        println!("{}", "Menu choices:".bold().underline());
        for (n, cmd, label) in MENU {
            println!("  {:<3} {:<8} {}", n, cmd.cyan(), label);
        }
        println!();
        println!("{}", "Commands:".bold().underline());
        let width = USAGE.iter().map(|(u, _)| u.len()).max().unwrap_or(0);
        for (usage, desc) in USAGE {
            println!("  {:<width$}  {}", usage.cyan(), desc.italic(), width = width);
        }
        println!("\nMissing arguments are asked for. Quote names with spaces: cd \"my folder\"");
        Ok(Flow::Continue)
    }
}
