//! Configuration for the storefront
//!
//! Configuration is loaded in order of precedence:
//! 1. Environment variables (highest priority)
//! 2. Config file (~/.config/techshop/config.toml)
//! 3. Built-in defaults (lowest priority)

use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

// ─────────────────────────────────────────────────────────────────────────────
// Submodules
// ─────────────────────────────────────────────────────────────────────────────

mod logging;
mod serialization;

#[cfg(test)]
mod tests;

pub use logging::{FileLogging, LogRotation, LoggingConfig};

// ─────────────────────────────────────────────────────────────────────────────
// Constants
// ─────────────────────────────────────────────────────────────────────────────

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

const DEFAULT_SHOP_NAME: &str = "Tech Shop";
const DEFAULT_THEME: &str = "dark";
const DEFAULT_NOTICE_TTL_SECS: u64 = 3;

// ─────────────────────────────────────────────────────────────────────────────
// Application Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Name shown in the title bar and footer
    pub shop_name: String,

    /// JSON fixture to seed the catalog from (built-in products if unset)
    pub fixture: Option<PathBuf>,

    /// Theme name: "dark" or "light"
    pub theme: String,

    /// How long a success notice stays up, in seconds
    pub notice_ttl_secs: u64,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            shop_name: DEFAULT_SHOP_NAME.to_string(),
            fixture: None,
            theme: DEFAULT_THEME.to_string(),
            notice_ttl_secs: DEFAULT_NOTICE_TTL_SECS,
            logging: LoggingConfig::default(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// File Configuration (deserialization layer)
// ─────────────────────────────────────────────────────────────────────────────

/// Config file structure
#[derive(Debug, Deserialize, Default)]
pub(crate) struct FileConfig {
    pub shop_name: Option<String>,
    pub fixture: Option<String>,
    pub theme: Option<String>,
    pub notice_ttl_secs: Option<u64>,

    /// Optional [logging] section
    pub logging: Option<FileLogging>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Configuration Loading
// ─────────────────────────────────────────────────────────────────────────────

impl Config {
    /// Get the config file path: ~/.config/techshop/config.toml
    /// Uses Unix-style ~/.config on all platforms for consistency
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|p| p.join(".config").join("techshop").join("config.toml"))
    }

    /// Lifetime of success notices
    pub fn notice_ttl(&self) -> Duration {
        Duration::from_secs(self.notice_ttl_secs)
    }

    /// Load file config if it exists
    ///
    /// # Panics
    /// Exits the process if the config file exists but cannot be read or
    /// parsed. A broken config should fail loudly rather than fall back to
    /// defaults.
    fn load_file_config() -> FileConfig {
        let Some(path) = Self::config_path() else {
            return FileConfig::default();
        };

        match std::fs::read_to_string(&path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("\n  CONFIG ERROR - Failed to parse configuration file\n");
                    eprintln!("  File: {}\n", path.display());
                    eprintln!("  Error: {}\n", e);
                    eprintln!("  To reset, run `techshop config --reset`.\n");
                    std::process::exit(1);
                }
            },
            // Config file doesn't exist - use defaults
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => FileConfig::default(),
            Err(e) => {
                eprintln!("\n  CONFIG ERROR - Cannot read configuration file\n");
                eprintln!("  File: {}\n", path.display());
                eprintln!("  Error: {}\n", e);
                std::process::exit(1);
            }
        }
    }

    /// Load configuration: env vars -> file -> defaults
    pub fn from_env() -> Self {
        Self::resolve(Self::load_file_config(), |key| std::env::var(key).ok())
    }

    /// Merge a parsed file config with environment lookups
    pub(crate) fn resolve(file: FileConfig, env: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        // Shop name: env > file > default
        let shop_name = env("TECHSHOP_SHOP_NAME")
            .or(file.shop_name)
            .unwrap_or(defaults.shop_name);

        // Fixture: env > file > built-in
        let fixture = env("TECHSHOP_FIXTURE")
            .or(file.fixture)
            .filter(|p| !p.is_empty())
            .map(PathBuf::from);

        // Theme: env > file > default
        let theme = env("TECHSHOP_THEME")
            .or(file.theme)
            .unwrap_or(defaults.theme);

        // Notice lifetime: env > file > default (3 seconds)
        let notice_ttl_secs = env("TECHSHOP_NOTICE_TTL")
            .and_then(|v| v.parse().ok())
            .or(file.notice_ttl_secs)
            .unwrap_or(defaults.notice_ttl_secs);

        let logging = LoggingConfig::from_file(file.logging);

        Self {
            shop_name,
            fixture,
            theme,
            notice_ttl_secs,
            logging,
        }
    }
}
