//! Configuration for the logging subsystem and the state writer.
//!
//! [`Settings::load`] reads `~/.config/seatlink/config.toml`, creating
//! it with hardcoded defaults if it does not yet exist.
//! [`Settings::defaults`] returns the same defaults without touching
//! the filesystem (useful in tests).

use serde::Deserialize;
use std::path::PathBuf;

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[log]
# Path of the rotating log file; empty selects ~/seatlink.log.
file = ""

[state]
# Mirror the active/inactive control state into a file.
to_file = false
# Path of the state file; empty selects the default under
# $XDG_STATE_HOME (or ~/.local/state).
file = ""
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level configuration, loaded from `~/.config/seatlink/config.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub log: LogConfig,
    #[serde(default)]
    pub state: StateConfig,
}

/// `[log]` section of `config.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LogConfig {
    /// Rotating log file path; empty selects the home-directory default.
    #[serde(default)]
    pub file: String,
}

/// `[state]` section of `config.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StateConfig {
    /// Mirror the active/inactive control state into a file.
    #[serde(default)]
    pub to_file: bool,
    /// State file path; empty selects [`default_state_file_path`].
    #[serde(default)]
    pub file: String,
}

impl Settings {
    /// Load from `~/.config/seatlink/config.toml`, layered on top of
    /// the built-in defaults. Creates the file with defaults if it
    /// does not exist.
    pub fn load() -> anyhow::Result<Self> {
        let path = config_path();

        if !path.exists() {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&path, DEFAULT_CONFIG.trim_start())?;
        }

        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(path.as_path()).required(false))
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

/// Documented default location of the state file:
/// `$XDG_STATE_HOME/seatlink/state`, falling back to
/// `~/.local/state/seatlink/state`.
pub fn default_state_file_path() -> PathBuf {
    std::env::var("XDG_STATE_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".local")
                .join("state")
        })
        .join("seatlink")
        .join("state")
}

fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("seatlink")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
