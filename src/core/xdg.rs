//! XDG Base Directory Support
//!
//! Implements XDG Base Directory specification for proper file
//! organization on Linux/Unix systems.

use std::env;
use std::fs;
use std::path::PathBuf;

/// XDG directory structure for Arkivo
///
/// Resolution order (highest to lowest): explicit `ARKIVO_*` env vars,
/// `XDG_*` environment variables, then the XDG defaults.
#[derive(Debug, Clone)]
pub struct XdgDirs {
    pub config_dir: PathBuf,
    pub data_dir: PathBuf,
}

impl XdgDirs {
    /// Create new XDG directory structure with proper resolution order
    pub fn new() -> Self {
        Self {
            config_dir: Self::resolve_config_dir(),
            data_dir: Self::resolve_data_dir(),
        }
    }

    /// Resolve config directory
    fn resolve_config_dir() -> PathBuf {
        if let Ok(dir) = env::var("ARKIVO_CONFIG_DIR") {
            return PathBuf::from(dir);
        }

        if let Ok(xdg) = env::var("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg).join("arkivo");
        }

        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("arkivo")
    }

    /// Resolve data directory
    fn resolve_data_dir() -> PathBuf {
        if let Ok(dir) = env::var("ARKIVO_DATA_DIR") {
            return PathBuf::from(dir);
        }

        if let Ok(xdg) = env::var("XDG_DATA_HOME") {
            return PathBuf::from(xdg).join("arkivo");
        }

        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".local")
            .join("share")
            .join("arkivo")
    }

    /// Get config file path
    pub fn config_file(&self) -> PathBuf {
        // ARKIVO_CONFIG_FILE is an explicit override
        if let Ok(file) = env::var("ARKIVO_CONFIG_FILE") {
            return PathBuf::from(file);
        }

        self.config_dir.join("config.toml")
    }

    /// Get the default archives directory path
    pub fn archives_dir(&self) -> PathBuf {
        self.data_dir.join("archives")
    }

    /// Create all XDG directories if they don't exist
    pub fn ensure_dirs_exist(&self) -> std::io::Result<()> {
        fs::create_dir_all(&self.config_dir)?;
        fs::create_dir_all(self.archives_dir())?;
        Ok(())
    }

    /// Log the resolved XDG paths
    pub fn log_paths(&self) {
        tracing::info!("XDG directories resolved:");
        tracing::info!("  Config: {:?}", self.config_dir);
        tracing::info!("  Data: {:?}", self.data_dir);
        tracing::info!("  Config file: {:?}", self.config_file());
        tracing::info!("  Archives: {:?}", self.archives_dir());
    }
}

impl Default for XdgDirs {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    // Helper to clear all XDG-related env vars
    fn clear_env_vars() {
        env::remove_var("XDG_CONFIG_HOME");
        env::remove_var("XDG_DATA_HOME");
        env::remove_var("ARKIVO_CONFIG_DIR");
        env::remove_var("ARKIVO_CONFIG_FILE");
        env::remove_var("ARKIVO_DATA_DIR");
    }

    #[test]
    #[serial]
    fn test_xdg_defaults() {
        clear_env_vars();

        let xdg = XdgDirs::new();
        assert!(xdg.config_dir.ends_with(".config/arkivo"));
        assert!(xdg.data_dir.ends_with(".local/share/arkivo"));
    }

    #[test]
    #[serial]
    fn test_xdg_config_home_override() {
        clear_env_vars();
        env::set_var("XDG_CONFIG_HOME", "/custom/config");

        let xdg = XdgDirs::new();
        assert_eq!(xdg.config_dir, PathBuf::from("/custom/config/arkivo"));

        clear_env_vars();
    }

    #[test]
    #[serial]
    fn test_xdg_data_home_override() {
        clear_env_vars();
        env::set_var("XDG_DATA_HOME", "/custom/data");

        let xdg = XdgDirs::new();
        assert_eq!(xdg.data_dir, PathBuf::from("/custom/data/arkivo"));

        clear_env_vars();
    }

    #[test]
    #[serial]
    fn test_arkivo_config_dir_priority() {
        clear_env_vars();
        env::set_var("XDG_CONFIG_HOME", "/xdg/config");
        env::set_var("ARKIVO_CONFIG_DIR", "/arkivo/config");

        let xdg = XdgDirs::new();
        // ARKIVO_CONFIG_DIR should win
        assert_eq!(xdg.config_dir, PathBuf::from("/arkivo/config"));

        clear_env_vars();
    }

    #[test]
    #[serial]
    fn test_arkivo_data_dir_priority() {
        clear_env_vars();
        env::set_var("XDG_DATA_HOME", "/xdg/data");
        env::set_var("ARKIVO_DATA_DIR", "/arkivo/data");

        let xdg = XdgDirs::new();
        assert_eq!(xdg.data_dir, PathBuf::from("/arkivo/data"));

        clear_env_vars();
    }

    #[test]
    #[serial]
    fn test_config_file_resolution() {
        clear_env_vars();

        let xdg = XdgDirs::new();
        assert!(xdg.config_file().ends_with("arkivo/config.toml"));
    }

    #[test]
    #[serial]
    fn test_config_file_env_override() {
        clear_env_vars();
        env::set_var("ARKIVO_CONFIG_FILE", "/custom/my-config.toml");

        let xdg = XdgDirs::new();
        assert_eq!(xdg.config_file(), PathBuf::from("/custom/my-config.toml"));

        clear_env_vars();
    }

    #[test]
    #[serial]
    fn test_archives_dir_resolution() {
        clear_env_vars();
        env::set_var("ARKIVO_DATA_DIR", "/test/data");

        let xdg = XdgDirs::new();
        assert_eq!(xdg.archives_dir(), PathBuf::from("/test/data/archives"));

        clear_env_vars();
    }

    #[test]
    #[serial]
    fn test_ensure_dirs_exist_idempotent() {
        clear_env_vars();
        let temp = tempfile::tempdir().unwrap();
        let base = temp.path().join("xdg_test");

        env::set_var("ARKIVO_CONFIG_DIR", base.join("config").to_str().unwrap());
        env::set_var("ARKIVO_DATA_DIR", base.join("data").to_str().unwrap());

        let xdg = XdgDirs::new();
        xdg.ensure_dirs_exist().unwrap();
        // Call again -- should not error
        xdg.ensure_dirs_exist().unwrap();

        assert!(base.join("config").exists());
        assert!(base.join("data").join("archives").exists());

        clear_env_vars();
    }

    #[test]
    #[serial]
    fn test_xdg_default_impl() {
        clear_env_vars();
        let xdg = XdgDirs::default();
        assert!(xdg.config_dir.ends_with(".config/arkivo"));
    }
}
