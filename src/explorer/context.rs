use anyhow::{Context, Result};
use crate::config::ExplorerConfig;
use crate::explorer::input::LineSource;
use crate::explorer::nav::Cursor;
use crate::explorer::ops::ListOptions;
use crate::explorer::path::{resolve, PathRef};
use crate::explorer::walker::CopyOptions;

/// Everything one shell session owns: the cursor, the settings, and the input.
pub struct Session {
    pub cursor: Cursor,
    pub config: ExplorerConfig,
    input: Box<dyn LineSource>,
}

impl Session {
    pub fn new(cursor: Cursor, config: ExplorerConfig, input: Box<dyn LineSource>) -> Self {
        Self { cursor, config, input }
    }

    /// Asks for one line, trimmed. `None` at end of input.
    pub fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        let line = self.input.read_line(prompt).context("Failed to read input")?;
        Ok(line.map(|l| l.trim().to_string()))
    }

    /// Raw answer to a yes/no question. Unreadable or missing input reads as "".
    pub fn confirm(&mut self, question: &str) -> String {
        match self.input.read_line(question) {
            Ok(Some(answer)) => answer,
            Ok(None) => String::new(),
            Err(e) => {
                log::warn!("confirmation input failed: {}", e);
                String::new()
            }
        }
    }

    pub fn resolve(&self, raw: &str) -> PathRef {
        resolve(raw, &self.cursor)
    }

    pub fn list_options(&self) -> ListOptions {
        ListOptions {
            show_hidden: self.config.display.show_hidden,
            dirs_first: self.config.display.dirs_first,
            pattern: None,
        }
    }

    pub fn copy_options(&self) -> CopyOptions {
        CopyOptions { preserve_timestamps: self.config.copy.preserve_timestamps }
    }
}
