use anyhow::Result;
use colored::*;
use crate::explorer::context::Session;

/// `args[index]` when given, otherwise asks for it. Returns `None` after
/// printing `empty_msg` when the user supplies nothing.
pub fn arg_or_ask(
    args: &[String],
    index: usize,
    session: &mut Session,
    prompt: &str,
    empty_msg: &str,
) -> Result<Option<String>> {
    let value = match args.get(index) {
        Some(v) => Some(v.trim().to_string()),
        None => session.ask(prompt)?,
    };
    match value {
        Some(v) if !v.is_empty() => Ok(Some(v)),
        _ => {
            println!("{}", empty_msg.yellow());
            Ok(None)
        }
    }
}

pub fn success(msg: &str) {
    println!("{} {}", "✔".green(), msg);
}

pub fn cancelled(msg: &str) {
    println!("{}", msg.yellow());
}
