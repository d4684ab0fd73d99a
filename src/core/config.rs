//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.roster/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{Level, LevelFilter};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::directory::JsonDirectory;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct RosterConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub list: ListConfig,
    #[serde(default)]
    pub overlay: OverlayConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub data_dir: Option<String>,
    pub log_file: Option<String>,
    pub log_level: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ListConfig {
    pub width: Option<u16>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct OverlayConfig {
    pub prompt: Option<String>,
    pub width_percent: Option<u16>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_LIST_WIDTH: u16 = 30;
pub const DEFAULT_OVERLAY_PROMPT: &str = "username:";
pub const DEFAULT_OVERLAY_WIDTH_PERCENT: u16 = 60;
pub const DEFAULT_LOG_FILE: &str = "roster.log";
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub data_dir: PathBuf,
    pub log_file: PathBuf,
    pub log_level: LevelFilter,
    pub list_width: u16,
    pub overlay_prompt: String,
    pub overlay_width_percent: u16,
}

/// Values that came from the command line (None = not specified).
#[derive(Debug, Default)]
pub struct CliOverrides<'a> {
    pub data_dir: Option<&'a Path>,
    pub log_level: Option<&'a str>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Startup Log
// ============================================================================

/// Log records raised while loading config. The file logger is only set up
/// once config is resolved, so these are held and replayed into it.
#[derive(Debug, Default)]
pub struct StartupLog {
    records: Vec<(Level, String)>,
}

impl StartupLog {
    fn push(&mut self, level: Level, message: impl Into<String>) {
        self.records.push((level, message.into()));
    }

    pub fn records(&self) -> &[(Level, String)] {
        &self.records
    }

    /// Send the held records to the installed logger.
    pub fn replay(self) {
        for (level, message) in self.records {
            log::log!(level, "{}", message);
        }
    }
}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.roster/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".roster").join("config.toml"))
}

/// Load config from `path`, or `~/.roster/config.toml` when `path` is None.
///
/// If the default file doesn't exist, generates a commented-out default and
/// returns `RosterConfig::default()`. An explicit path that doesn't exist is
/// an I/O error. A malformed file returns `ConfigError::Parse`.
pub fn load_config(
    path: Option<&Path>,
    startup: &mut StartupLog,
) -> Result<RosterConfig, ConfigError> {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => match config_path() {
            Some(p) => {
                if !p.exists() {
                    startup.push(
                        Level::Info,
                        format!("No config file found, generating default at {}", p.display()),
                    );
                    generate_default_config(&p, startup);
                    return Ok(RosterConfig::default());
                }
                p
            }
            None => {
                startup.push(
                    Level::Warn,
                    "Could not determine home directory, using default config",
                );
                return Ok(RosterConfig::default());
            }
        },
    };

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config = parse_config(&contents)?;
    startup.push(Level::Info, format!("Loaded config from {}", path.display()));
    startup.push(Level::Debug, format!("Config: {:?}", config));
    Ok(config)
}

pub fn parse_config(contents: &str) -> Result<RosterConfig, ConfigError> {
    toml::from_str(contents).map_err(ConfigError::Parse)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path, startup: &mut StartupLog) {
    let default_content = r#"# Roster Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# data_dir = "/var/lib/roster"       # Or set ROSTER_DATA_DIR env var
# log_file = "roster.log"            # Relative paths land in data_dir
# log_level = "info"                 # "error", "warn", "info", "debug", "trace"

# [list]
# width = 30                         # Columns used by the account list

# [overlay]
# prompt = "username:"
# width_percent = 60                 # Share of the screen width for the add dialog
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            startup.push(Level::Warn, format!("Failed to create config directory: {}", e));
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        startup.push(Level::Warn, format!("Failed to write default config: {}", e));
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Parse a level name, ignoring case. Unknown names yield None.
pub fn parse_log_level(name: &str) -> Option<LevelFilter> {
    name.trim().parse().ok()
}

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(
    config: &RosterConfig,
    cli: &CliOverrides<'_>,
    startup: &mut StartupLog,
) -> ResolvedConfig {
    // Data dir: CLI → env → config → default
    let data_dir = cli
        .data_dir
        .map(Path::to_path_buf)
        .or_else(|| std::env::var("ROSTER_DATA_DIR").ok().map(PathBuf::from))
        .or_else(|| config.general.data_dir.as_ref().map(PathBuf::from))
        .unwrap_or_else(JsonDirectory::default_dir);

    // Log file: config → default, relative to the data dir
    let log_file = config
        .general
        .log_file
        .as_deref()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE));
    let log_file = if log_file.is_absolute() {
        log_file
    } else {
        data_dir.join(log_file)
    };

    // Log level: CLI → env → config → default
    let log_level = cli
        .log_level
        .map(str::to_string)
        .or_else(|| std::env::var("ROSTER_LOG_LEVEL").ok())
        .or_else(|| config.general.log_level.clone())
        .and_then(|name| {
            let level = parse_log_level(&name);
            if level.is_none() {
                startup.push(
                    Level::Warn,
                    format!("Unknown log level '{}', using default", name),
                );
            }
            level
        })
        .unwrap_or(DEFAULT_LOG_LEVEL);

    let overlay_width_percent = config
        .overlay
        .width_percent
        .unwrap_or(DEFAULT_OVERLAY_WIDTH_PERCENT)
        .clamp(10, 100);

    ResolvedConfig {
        data_dir,
        log_file,
        log_level,
        list_width: config.list.width.unwrap_or(DEFAULT_LIST_WIDTH).max(4),
        overlay_prompt: config
            .overlay
            .prompt
            .clone()
            .unwrap_or_else(|| DEFAULT_OVERLAY_PROMPT.to_string()),
        overlay_width_percent,
    }
}
