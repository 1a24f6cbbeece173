pub mod fs;
pub mod nav;
pub mod session;
pub mod common; // Private helpers

use crate::explorer::commands::Registry;

/// Helper to register all built-in commands at once
pub fn register_all_builtins(registry: &mut Registry) {
    // FS commands
    registry.register("ls", Box::new(fs::ls::LsCommand));
    registry.register("list", Box::new(fs::ls::LsCommand));
    registry.register("mkdir", Box::new(fs::mkdir::MkdirCommand));
    registry.register("rm", Box::new(fs::rm::RmCommand));
    registry.register("del", Box::new(fs::rm::RmCommand));
    registry.register("mv", Box::new(fs::mv::MvCommand));
    registry.register("move", Box::new(fs::mv::MvCommand));
    registry.register("cp", Box::new(fs::cp::CpCommand));
    registry.register("copy", Box::new(fs::cp::CpCommand));
    registry.register("info", Box::new(fs::info::InfoCommand));

    // Navigation
    registry.register("cd", Box::new(nav::cd::CdCommand));
    registry.register("open", Box::new(nav::cd::CdCommand));
    registry.register("up", Box::new(nav::up::UpCommand));
    registry.register("..", Box::new(nav::up::UpCommand));
    registry.register("pwd", Box::new(nav::pwd::PwdCommand));

    // Session
    registry.register("help", Box::new(session::help::HelpCommand));
    registry.register("exit", Box::new(session::exit::ExitCommand));
    registry.register("quit", Box::new(session::exit::ExitCommand));
}
