pub mod cp;
pub mod info;
pub mod ls;
pub mod mkdir;
pub mod mv;
pub mod rm;

use anyhow::Result;
use crate::explorer::context::Session;

/// Source and destination from args, or asked for both. `None` when either is empty.
pub(crate) fn source_and_dest(
    args: &[String],
    session: &mut Session,
    source_prompt: &str,
) -> Result<Option<(String, String)>> {
    let source = match args.get(1) {
        Some(s) => s.clone(),
        None => session.ask(source_prompt)?.unwrap_or_default(),
    };
    let dest = match args.get(2) {
        Some(d) => d.clone(),
        None => session.ask("Enter destination path (directory): ")?.unwrap_or_default(),
    };
    if source.trim().is_empty() || dest.trim().is_empty() {
        super::common::cancelled("Source and destination must be provided.");
        return Ok(None);
    }
    Ok(Some((source.trim().to_string(), dest.trim().to_string())))
}
