use anyhow::{Context, Result};
use crate::explorer::commands::menu_command;

/// Splits an input line with shell quoting rules. A leading menu number is
/// replaced by its command name. `None` for a blank line.
pub fn parse_command_line(line: &str) -> Result<Option<Vec<String>>> {
    let mut words = shell_words::split(line).context("Could not parse input")?;
    let Some(first) = words.first_mut() else {
        return Ok(None);
    };
    if let Some(cmd) = menu_command(first) {
        *first = cmd.to_string();
    }
    Ok(Some(words))
}
