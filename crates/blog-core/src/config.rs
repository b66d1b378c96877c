//! Configuration management for blog.
//!
//! Loads configuration from ${BLOG_HOME}/config.toml with sensible defaults.

use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

/// Environment variable that overrides the configured API base URL.
pub const BASE_URL_ENV: &str = "BLOG_API_URL";

/// Returns the default config template with comments.
///
/// Embedded from default_config.toml at compile time.
fn default_config_template() -> &'static str {
    include_str!("../default_config.toml")
}

pub mod paths {
    //! Path resolution for blog configuration and data files.
    //!
    //! BLOG_HOME resolution order:
    //! 1. BLOG_HOME environment variable (if set)
    //! 2. ~/.config/blog (default)

    use std::path::PathBuf;

    /// Returns the blog home directory.
    pub fn blog_home() -> PathBuf {
        if let Ok(home) = std::env::var("BLOG_HOME")
            && !home.trim().is_empty()
        {
            return PathBuf::from(home);
        }

        dirs::home_dir()
            .map(|h| h.join(".config").join("blog"))
            .unwrap_or_else(|| PathBuf::from(".blog"))
    }

    /// Returns the path to the config.toml file.
    pub fn config_path() -> PathBuf {
        blog_home().join("config.toml")
    }

    /// Returns the path to the key-value store holding the session.
    pub fn storage_path() -> PathBuf {
        blog_home().join("storage.json")
    }

    /// Returns the directory log files are written to.
    pub fn logs_dir() -> PathBuf {
        blog_home().join("logs")
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// API base URL including the version prefix
    pub base_url: String,

    /// Request timeout in milliseconds (0 falls back to the default)
    pub timeout_ms: u64,

    /// Items per page for article and comment listings
    pub page_size: u32,

    /// Log filter directive for the log file
    pub log_level: String,
}

impl Config {
    pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/api/v1";
    const DEFAULT_TIMEOUT_MS: u64 = 10_000;
    const DEFAULT_PAGE_SIZE: u32 = 10;
    const DEFAULT_LOG_LEVEL: &str = "warn";

    /// Loads configuration from the default config path.
    pub fn load() -> Result<Self> {
        Self::load_from(&paths::config_path())
    }

    /// Loads configuration from a specific path.
    /// Returns defaults if file doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config from {}", path.display()))
    }

    /// Writes the commented default config to `path`. Refuses to overwrite.
    pub fn init(path: &Path) -> Result<()> {
        if path.exists() {
            bail!("Config file already exists at {}", path.display());
        }
        Self::write_config(path, default_config_template())
    }

    /// Resolves the API base URL with precedence: env > config > default.
    pub fn effective_base_url(&self) -> Result<String> {
        if let Ok(env_url) = std::env::var(BASE_URL_ENV) {
            let trimmed = env_url.trim();
            if !trimmed.is_empty() {
                return validate_base_url(trimmed);
            }
        }

        let configured = self.base_url.trim();
        if !configured.is_empty() {
            return validate_base_url(configured);
        }

        Ok(Self::DEFAULT_BASE_URL.to_string())
    }

    pub fn timeout(&self) -> Duration {
        let ms = if self.timeout_ms == 0 {
            Self::DEFAULT_TIMEOUT_MS
        } else {
            self.timeout_ms
        };
        Duration::from_millis(ms)
    }

    pub fn page_size(&self) -> u32 {
        if self.page_size == 0 {
            Self::DEFAULT_PAGE_SIZE
        } else {
            self.page_size
        }
    }

    /// Writes config content to a file, creating parent directories as needed.
    /// Uses atomic write (temp file + rename) to prevent corruption.
    fn write_config(path: &Path, content: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }

        let tmp_path = path.with_extension("toml.tmp");
        fs::write(&tmp_path, content)
            .with_context(|| format!("Failed to write config to {}", tmp_path.display()))?;
        fs::rename(&tmp_path, path).with_context(|| {
            format!(
                "Failed to rename {} to {}",
                tmp_path.display(),
                path.display()
            )
        })?;

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: Self::DEFAULT_BASE_URL.to_string(),
            timeout_ms: Self::DEFAULT_TIMEOUT_MS,
            page_size: Self::DEFAULT_PAGE_SIZE,
            log_level: Self::DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

/// Validates the URL and strips trailing slashes so paths can be appended.
fn validate_base_url(raw: &str) -> Result<String> {
    let parsed = url::Url::parse(raw).with_context(|| format!("Invalid API base URL: {raw}"))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        bail!("Invalid API base URL: {raw} (expected http or https)");
    }
    Ok(raw.trim_end_matches('/').to_string())
}
