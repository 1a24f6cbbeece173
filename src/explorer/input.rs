// Line-based user input

use std::io::{self, BufRead, Write};
#[cfg(test)]
use std::collections::VecDeque;

/// Where the shell reads commands and answers from.
pub trait LineSource {
    /// Shows `prompt` and reads one line without its terminator.
    /// `None` at end of input.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>>;
}

pub struct StdinSource;

impl LineSource for StdinSource {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        let mut out = io::stdout();
        write!(out, "{}", prompt)?;
        out.flush()?;

        let mut buf = String::new();
        if io::stdin().lock().read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(buf.trim_end_matches(['\r', '\n']).to_string()))
    }
}

/// Replays canned lines. Records the prompts it was shown.
#[cfg(test)]
#[derive(Default)]
pub struct ScriptedSource {
    lines: VecDeque<String>,
    pub prompts: std::rc::Rc<std::cell::RefCell<Vec<String>>>,
}

#[cfg(test)]
impl ScriptedSource {
    pub fn new(lines: &[&str]) -> Self {
        Self { lines: lines.iter().map(|s| s.to_string()).collect(), ..Default::default() }
    }
}

#[cfg(test)]
impl LineSource for ScriptedSource {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        self.prompts.borrow_mut().push(prompt.to_string());
        Ok(self.lines.pop_front())
    }
}
