// Ls command

use anyhow::{Result, Context};
use colored::*;
use crate::explorer::commands::{Executable, Flow};
use crate::explorer::context::Session;
use crate::explorer::ops::{self, EntryInfo, EntryKind};

pub struct LsCommand;
impl Executable for LsCommand {
    fn execute(&self, args: &[String], session: &mut Session) -> Result<Flow> {
        let mut options = session.list_options();

        // `ls *.rs` filters the current directory, `ls sub` lists another one
        let dir = match args.get(1) {
            Some(arg) if arg.contains(['*', '?', '[']) => {
                options.pattern = Some(glob::Pattern::new(arg).with_context(|| format!("Invalid pattern: {}", arg))?);
                session.cursor.as_path().to_path_buf()
            }
            Some(arg) => session.resolve(arg).into_path_buf(),
            None => session.cursor.as_path().to_path_buf(),
        };

        let entries = ops::list(&dir, &options)
            .with_context(|| format!("Error listing files in {}", dir.display()))?;

        println!("\n{}", format!("Files in {}:", dir.display()).bold());
        println!("{:<40} {:<10} {:<12} {}", "Name", "Type", "Size(B)", "Last Modified");
        println!("{}", "-".repeat(80));
        if entries.is_empty() {
            println!("{}", "(empty)".dimmed());
        }
        for entry in &entries {
            println!("{}", format_row(entry, &session.config.display.date_format));
        }
        Ok(Flow::Continue)
    }
}

fn format_row(entry: &EntryInfo, date_format: &str) -> String {
    let name = format!("{:<40}", entry.name);
    let name = match entry.kind {
        EntryKind::Dir => name.blue().bold(),
        EntryKind::Symlink => name.cyan(),
        EntryKind::File => name.normal(),
    };
    let modified = entry
        .modified
        .map(|t| t.format(date_format).to_string())
        .unwrap_or_default();
    format!("{} {:<10} {:<12} {}", name, entry.kind.label(), entry.size, modified)
}
