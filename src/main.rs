mod cli;
mod config;
mod explorer;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use config::load_config;
use explorer::context::Session;
use explorer::input::StdinSource;
use explorer::nav::Cursor;
use explorer::shell::Shell;
use std::path::PathBuf;

fn main() -> Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(cli.log_level())).init();

    let mut config = load_config(cli.config.as_deref())?;
    cli.apply(&mut config);
    if !config.display.color {
        colored::control::set_override(false);
    }

    let start = config.shell.start_dir.clone().unwrap_or_else(|| PathBuf::from("."));
    let cursor = Cursor::open(&start)
        .with_context(|| format!("Cannot start in {}", start.display()))?;
    log::info!("starting in {}", cursor);

    let mut shell = Shell::new(Session::new(cursor, config, Box::new(StdinSource)));
    if cli.commands.is_empty() {
        shell.run_interactive()
    } else {
        shell.run_script(&cli.commands)
    }
}
