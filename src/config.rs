use anyhow::{Context, Result, bail};
use chrono::format::{Item, StrftimeItems};
use log::debug;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_ENV: &str = "FEXP_CONFIG";

#[derive(Debug, Deserialize, Default, Clone)]
#[serde(default)]
pub struct ExplorerConfig {
    pub display: DisplayConfig,
    pub copy: CopyConfig,
    pub shell: ShellConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct DisplayConfig {
    /// strftime pattern for "Last Modified".
    pub date_format: String,
    pub show_hidden: bool,
    pub dirs_first: bool,
    pub color: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            date_format: "%Y-%m-%d %H:%M:%S".to_string(),
            show_hidden: true,
            dirs_first: false,
            color: true,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct CopyConfig {
    pub preserve_timestamps: bool,
}

impl Default for CopyConfig {
    fn default() -> Self {
        Self { preserve_timestamps: true }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ShellConfig {
    pub start_dir: Option<PathBuf>,
    pub show_menu: bool,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self { start_dir: None, show_menu: true }
    }
}

/// `<user config dir>/fexp/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("fexp").join("config.toml"))
}

/// Loads settings from, in order: `explicit`, `$FEXP_CONFIG`, the user config dir.
/// A file named explicitly (flag or env) must exist; the default one may not.
pub fn load_config(explicit: Option<&Path>) -> Result<ExplorerConfig> {
    let named = explicit
        .map(Path::to_path_buf)
        .or_else(|| env::var_os(CONFIG_ENV).map(PathBuf::from));

    let (path, required) = match named {
        Some(p) => (p, true),
        None => match default_config_path() {
            Some(p) => (p, false),
            None => return Ok(ExplorerConfig::default()),
        },
    };

    if !path.exists() {
        if required {
            bail!("❌ Config file not found: {}", path.display());
        }
        debug!("no config at {}, using defaults", path.display());
        return Ok(ExplorerConfig::default());
    }

    let content = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let config = parse_config(&content)
        .with_context(|| format!("Invalid config file {}", path.display()))?;
    debug!("loaded config from {}", path.display());
    Ok(config)
}

pub fn parse_config(content: &str) -> Result<ExplorerConfig> {
    let config: ExplorerConfig = toml::from_str(content).context("Failed to parse TOML")?;

    // chrono panics when formatting with a broken pattern, so reject it up front
    if StrftimeItems::new(&config.display.date_format).any(|i| matches!(i, Item::Error)) {
        bail!("Invalid date_format: '{}'", config.display.date_format);
    }

    Ok(config)
}
