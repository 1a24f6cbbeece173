use clap::{ArgAction, Parser};
use std::path::PathBuf;
use crate::config::ExplorerConfig;

#[derive(Parser, Debug)]
#[command(name = "fx", version, about = "fexp: an interactive file explorer shell")]
pub struct Cli {
    /// Start in this directory instead of the working directory
    #[arg(short = 'd', long = "dir")]
    pub dir: Option<PathBuf>,

    /// Config file (defaults to $FEXP_CONFIG, then the user config directory)
    #[arg(long = "config")]
    pub config: Option<PathBuf>,

    /// Run a command line and exit (repeatable, runs in order)
    #[arg(short = 'c', long = "command")]
    pub commands: Vec<String>,

    /// Do not print the numbered menu before each prompt
    #[arg(long = "no-menu")]
    pub no_menu: bool,

    /// Disable colored output
    #[arg(long = "no-color")]
    pub no_color: bool,

    /// More log output (-v info, -vv debug)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Command-line flags win over the config file.
    pub fn apply(&self, config: &mut ExplorerConfig) {
        if self.no_menu {
            config.shell.show_menu = false;
        }
        if self.no_color {
            config.display.color = false;
        }
        if let Some(dir) = &self.dir {
            config.shell.start_dir = Some(dir.clone());
        }
    }

    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}
