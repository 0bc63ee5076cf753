//! Config serialization to TOML
//!
//! Single source of truth for config file format.

use super::Config;

/// Quote a value as a TOML string, escaping whatever TOML requires
fn quote(value: &str) -> String {
    toml::Value::String(value.to_string()).to_string()
}

impl Config {
    /// Render the full config file, with comments, from current values
    pub fn to_toml(&self) -> String {
        let fixture = match &self.fixture {
            Some(path) => format!("fixture = {}", quote(&path.display().to_string())),
            None => "# fixture = \"/path/to/products.json\"".to_string(),
        };

        format!(
            r#"# techshop configuration

# Name shown in the title bar and footer
shop_name = {shop_name}

# Seed the catalog from a JSON product list instead of the built-in products
{fixture}

# Theme: dark, light
theme = {theme}

# Seconds a "Review successfully submitted!" notice stays visible
notice_ttl_secs = {ttl}

# Logging configuration (RUST_LOG env var overrides)
[logging]
level = {level}
# File logging (in addition to the TUI buffer or stderr)
file_enabled = {file_enabled}
file_dir = {file_dir}
file_rotation = "{rotation}"  # hourly, daily, never
file_prefix = {prefix}
"#,
            shop_name = quote(&self.shop_name),
            fixture = fixture,
            theme = quote(&self.theme),
            ttl = self.notice_ttl_secs,
            level = quote(&self.logging.level),
            file_enabled = self.logging.file_enabled,
            file_dir = quote(&self.logging.file_dir.display().to_string()),
            rotation = self.logging.file_rotation.as_str(),
            prefix = quote(&self.logging.file_prefix),
        )
    }

    /// Create config file with defaults if it doesn't exist
    ///
    /// Called during startup to help users discover configuration options.
    pub fn ensure_config_exists() {
        let Some(path) = Self::config_path() else {
            return;
        };

        // Don't overwrite existing config
        if path.exists() {
            return;
        }

        if let Some(parent) = path.parent() {
            if std::fs::create_dir_all(parent).is_err() {
                return; // Config is optional
            }
        }

        if let Err(e) = std::fs::write(&path, Self::default().to_toml()) {
            tracing::debug!("Could not write config template {}: {}", path.display(), e);
        }
    }
}
