//! Configuration management for the Arkivo service.
//!
//! This module handles loading configuration from TOML files and
//! environment variables, with sensible defaults for all settings.

use crate::core::archive::ArchiveSource;
use crate::core::error::{ArkivoError, Result};
use crate::core::xdg::XdgDirs;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub archives: ArchivesConfig,
    #[serde(default)]
    pub search: SearchConfig,
}

/// Archive source configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ArchivesConfig {
    /// Directory scanned for archive bundles when no explicit
    /// archive path is configured
    #[serde(default = "default_archive_dir")]
    pub dir: PathBuf,

    /// Explicit default archive bundle; takes precedence over `dir`
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// Search configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchConfig {
    /// Maximum query string length
    #[serde(default = "default_max_query_length")]
    pub max_query_length: usize,
}

// Default value functions
fn default_archive_dir() -> PathBuf {
    PathBuf::from("./archives")
}

fn default_max_query_length() -> usize {
    500
}

impl Default for ArchivesConfig {
    fn default() -> Self {
        Self {
            dir: default_archive_dir(),
            path: None,
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_query_length: default_max_query_length(),
        }
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| ArkivoError::ConfigError(format!("Failed to read config file: {e}")))?;

        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Create default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Load config with priority: env vars > TOML > defaults
    ///
    /// This method uses XDG Base Directory specification for file locations.
    pub fn load() -> Result<Self> {
        let xdg = XdgDirs::new();
        Self::load_with_xdg(&xdg)
    }

    /// Load config with explicit XDG directories
    ///
    /// Priority order:
    /// 1. ARKIVO_CONFIG env var (explicit file)
    /// 2. XDG config file (~/.config/arkivo/config.toml)
    /// 3. ./arkivo.toml in the working directory
    /// 4. Defaults
    pub fn load_with_xdg(xdg: &XdgDirs) -> Result<Self> {
        let mut config = if let Ok(config_path) = env::var("ARKIVO_CONFIG") {
            Self::from_file(config_path)?
        } else {
            let xdg_config = xdg.config_file();
            if xdg_config.exists() {
                Self::from_file(xdg_config)?
            } else if Path::new("arkivo.toml").exists() {
                Self::from_file("arkivo.toml")?
            } else {
                Self::default()
            }
        };

        // Point the archive directory at XDG data unless explicitly set
        if env::var("ARKIVO_ARCHIVE_DIR").is_err() && config.archives.dir == default_archive_dir()
        {
            config.archives.dir = xdg.archives_dir();
        }

        // Override with environment variables
        config.merge_env();

        // Validate configuration
        config.validate()?;

        Ok(config)
    }

    /// Merge configuration with environment variables
    pub fn merge_env(&mut self) {
        if let Ok(dir) = env::var("ARKIVO_ARCHIVE_DIR") {
            self.archives.dir = PathBuf::from(dir);
        }
        if let Ok(path) = env::var("ARKIVO_ARCHIVE_PATH") {
            self.archives.path = Some(PathBuf::from(path));
        }
        if let Ok(max_query_len) = env::var("ARKIVO_MAX_QUERY_LENGTH") {
            if let Ok(len) = max_query_len.parse() {
                self.search.max_query_length = len;
            }
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.search.max_query_length == 0 {
            return Err(ArkivoError::ConfigError(
                "Max query length must be non-zero".to_string(),
            ));
        }

        if self.archives.dir.as_os_str().is_empty() {
            return Err(ArkivoError::ConfigError(
                "Archive directory must not be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// The archive source used when the caller does not name one
    ///
    /// An explicitly configured archive path wins over directory
    /// discovery, mirroring the resolution order of the `Default`
    /// source variant.
    pub fn default_source(&self) -> ArchiveSource {
        match &self.archives.path {
            Some(path) => ArchiveSource::SinglePath(path.clone()),
            None => ArchiveSource::Directory(self.archives.dir.clone()),
        }
    }

    /// Log configuration (redacting sensitive values)
    pub fn log_config(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Archive dir: {:?}", self.archives.dir);
        tracing::info!("  Archive path: {:?}", self.archives.path);
        tracing::info!("  Max query length: {}", self.search.max_query_length);
    }
}
