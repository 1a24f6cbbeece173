pub mod builtins;

use std::collections::HashMap;
use anyhow::Result;
use crate::explorer::context::Session;

/// What the shell loop does after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

pub trait Executable {
    /// `args[0]` is the command name as dispatched.
    fn execute(&self, args: &[String], session: &mut Session) -> Result<Flow>;
}

/// Numbered menu entries: (number, command, label).
pub const MENU: &[(&str, &str, &str)] = &[
    ("1", "ls", "List files in current directory"),
    ("2", "mkdir", "Create a new directory"),
    ("3", "rm", "Delete a file or folder"),
    ("4", "mv", "Move file"),
    ("5", "cd", "Open folder"),
    ("6", "cp", "Copy folder"),
    ("7", "up", "Go back to parent directory"),
    ("8", "exit", "Exit"),
];

/// Maps a menu number to its command name.
pub fn menu_command(choice: &str) -> Option<&'static str> {
    MENU.iter().find(|(n, _, _)| *n == choice).map(|(_, cmd, _)| *cmd)
}

#[derive(Default)]
pub struct Registry {
    commands: HashMap<String, Box<dyn Executable>>,
}

impl Registry {
    pub fn with_builtins() -> Self {
        let mut registry = Self::default();
        builtins::register_all_builtins(&mut registry);
        registry
    }

    pub fn register(&mut self, name: &str, command: Box<dyn Executable>) {
        self.commands.insert(name.to_string(), command);
    }

    pub fn get(&self, name: &str) -> Option<&dyn Executable> {
        self.commands.get(name).map(|c| c.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_menu_entry_is_registered() {
        let registry = Registry::with_builtins();
        for (n, cmd, _) in MENU {
            assert_eq!(menu_command(n), Some(*cmd));
            assert!(registry.get(cmd).is_some(), "{cmd} missing");
        }
        assert_eq!(menu_command("9"), None);
    }
}
