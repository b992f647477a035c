//! core::config
//!
//! Configuration schema and loading.
//!
//! # Precedence
//!
//! Configuration values are resolved in this order (later overrides earlier):
//! 1. Default values
//! 2. Global config file
//! 3. CLI flags (not handled here)
//!
//! # Global Config Locations
//!
//! Searched in order:
//! 1. `$BUGSIFT_CONFIG` if set
//! 2. `$XDG_CONFIG_HOME/bugsift/config.toml`
//! 3. `~/.bugsift/config.toml` (canonical write location)
//!
//! # Example
//!
//! ```no_run
//! use bugsift::core::config::Config;
//!
//! let config = Config::load().unwrap();
//! println!("Data directory: {}", config.data_dir().display());
//! println!("Bug label: {}", config.bug_label());
//! ```

pub mod schema;

pub use schema::GlobalConfig;

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::core::types::RepoSlug;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "BUGSIFT_CONFIG";

/// Default root directory for fetched archives.
pub const DEFAULT_DATA_DIR: &str = "./github_data";

/// Default label marking an issue as a bug.
pub const DEFAULT_BUG_LABEL: &str = "bug";

/// Default GitHub REST API base URL.
pub const DEFAULT_API_BASE: &str = "https://api.github.com";

/// Errors from configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("failed to write config file '{path}': {source}")]
    WriteError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config value: {0}")]
    InvalidValue(String),

    #[error("home directory not found")]
    NoHomeDir,
}

/// Loaded configuration with defaults applied by accessors.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Global configuration
    pub global: GlobalConfig,
    /// Path to the global config file (if loaded)
    global_path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from the default locations.
    ///
    /// # Errors
    ///
    /// Returns an error if a config file exists but cannot be parsed or
    /// fails validation. A missing config file is not an error.
    pub fn load() -> Result<Self, ConfigError> {
        let path = resolve_global_path(|key| std::env::var(key).ok(), dirs::home_dir());
        match path {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from an explicit file.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let global = Self::read_global_config(path)?;
        global.validate()?;
        Ok(Self {
            global,
            global_path: Some(path.to_path_buf()),
        })
    }

    /// Configuration from values not backed by a file.
    pub fn from_global(global: GlobalConfig) -> Self {
        Self {
            global,
            global_path: None,
        }
    }

    /// Read and parse a global config file.
    fn read_global_config(path: &Path) -> Result<GlobalConfig, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Get the canonical path for global config.
    ///
    /// Returns `~/.bugsift/config.toml`.
    pub fn global_config_path() -> Result<PathBuf, ConfigError> {
        let home = dirs::home_dir().ok_or(ConfigError::NoHomeDir)?;
        Ok(home.join(".bugsift/config.toml"))
    }

    /// Write global config atomically to `path`.
    ///
    /// Creates parent directories if needed. Uses atomic write
    /// (write to temp file, then rename) to prevent corruption.
    pub fn write_global_to(path: &Path, config: &GlobalConfig) -> Result<(), ConfigError> {
        config.validate()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::WriteError {
                path: path.to_path_buf(),
                source: e,
            })?;
        }

        let contents =
            toml::to_string_pretty(config).map_err(|e| ConfigError::InvalidValue(e.to_string()))?;

        let temp_path = path.with_extension("toml.tmp");
        let mut file = fs::File::create(&temp_path).map_err(|e| ConfigError::WriteError {
            path: temp_path.clone(),
            source: e,
        })?;

        file.write_all(contents.as_bytes())
            .map_err(|e| ConfigError::WriteError {
                path: temp_path.clone(),
                source: e,
            })?;

        file.sync_all().map_err(|e| ConfigError::WriteError {
            path: temp_path.clone(),
            source: e,
        })?;

        fs::rename(&temp_path, path).map_err(|e| ConfigError::WriteError {
            path: path.to_path_buf(),
            source: e,
        })?;

        Ok(())
    }

    // =========================================================================
    // Accessor methods with defaults
    // =========================================================================

    /// Root directory of fetched archives.
    ///
    /// Defaults to `./github_data`.
    pub fn data_dir(&self) -> PathBuf {
        PathBuf::from(self.global.data_dir.as_deref().unwrap_or(DEFAULT_DATA_DIR))
    }

    /// Repository analyzed when none is given.
    pub fn default_repo(&self) -> Option<RepoSlug> {
        // Validated at load time.
        self.global
            .default_repo
            .as_deref()
            .and_then(|r| RepoSlug::parse(r).ok())
    }

    /// Label marking an issue as a bug.
    ///
    /// Defaults to `bug`.
    pub fn bug_label(&self) -> &str {
        self.global.bug_label.as_deref().unwrap_or(DEFAULT_BUG_LABEL)
    }

    /// REST API base URL.
    ///
    /// Defaults to `https://api.github.com`.
    pub fn api_base(&self) -> &str {
        self.global.api_base.as_deref().unwrap_or(DEFAULT_API_BASE)
    }

    /// GraphQL endpoint.
    ///
    /// Defaults to `<api_base>/graphql`.
    pub fn graphql_endpoint(&self) -> String {
        match &self.global.graphql_endpoint {
            Some(endpoint) => endpoint.clone(),
            None => format!("{}/graphql", self.api_base().trim_end_matches('/')),
        }
    }

    /// Get the path to the loaded global config file.
    pub fn global_config_loaded_from(&self) -> Option<&Path> {
        self.global_path.as_deref()
    }
}

/// Find the global config file that should be loaded, if any.
///
/// `env` looks up environment variables; `home` is the user's home
/// directory. Only existing files are returned.
pub fn resolve_global_path(
    env: impl Fn(&str) -> Option<String>,
    home: Option<PathBuf>,
) -> Option<PathBuf> {
    if let Some(path) = env(CONFIG_ENV).map(PathBuf::from) {
        if path.exists() {
            return Some(path);
        }
    }

    if let Some(xdg_home) = env("XDG_CONFIG_HOME") {
        let path = PathBuf::from(xdg_home).join("bugsift/config.toml");
        if path.exists() {
            return Some(path);
        }
    }

    if let Some(home) = home {
        let path = home.join(".bugsift/config.toml");
        if path.exists() {
            return Some(path);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn defaults_without_file() {
        let config = Config::default();

        assert_eq!(config.data_dir(), PathBuf::from("./github_data"));
        assert_eq!(config.bug_label(), "bug");
        assert_eq!(config.api_base(), "https://api.github.com");
        assert_eq!(config.graphql_endpoint(), "https://api.github.com/graphql");
        assert!(config.default_repo().is_none());
        assert!(config.global_config_loaded_from().is_none());
    }

    #[test]
    fn load_from_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(
            &path,
            r#"
            data_dir = "/srv/archives"
            default_repo = "octocat/hello-world"
            bug_label = "type: bug"
            api_base = "https://github.example.com/api/v3"
            "#,
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();

        assert_eq!(config.data_dir(), PathBuf::from("/srv/archives"));
        assert_eq!(config.default_repo().unwrap().owner(), "octocat");
        assert_eq!(config.bug_label(), "type: bug");
        assert_eq!(
            config.graphql_endpoint(),
            "https://github.example.com/api/v3/graphql"
        );
        assert_eq!(config.global_config_loaded_from(), Some(path.as_path()));
    }

    #[test]
    fn invalid_values_rejected() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "default_repo = \"not-a-slug\"").unwrap();

        assert!(matches!(
            Config::load_from(&path),
            Err(ConfigError::InvalidValue(_))
        ));
    }

    #[test]
    fn unknown_fields_rejected() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "trunk = \"main\"").unwrap();

        assert!(matches!(
            Config::load_from(&path),
            Err(ConfigError::ParseError { .. })
        ));
    }

    #[test]
    fn resolve_prefers_env_then_xdg_then_home() {
        let temp = TempDir::new().unwrap();
        let explicit = temp.path().join("explicit.toml");
        let xdg = temp.path().join("xdg");
        let home = temp.path().join("home");
        fs::create_dir_all(xdg.join("bugsift")).unwrap();
        fs::create_dir_all(home.join(".bugsift")).unwrap();
        fs::write(&explicit, "").unwrap();
        fs::write(xdg.join("bugsift/config.toml"), "").unwrap();
        fs::write(home.join(".bugsift/config.toml"), "").unwrap();

        let explicit_str = explicit.to_string_lossy().to_string();
        let xdg_str = xdg.to_string_lossy().to_string();

        let env_all = |key: &str| match key {
            CONFIG_ENV => Some(explicit_str.clone()),
            "XDG_CONFIG_HOME" => Some(xdg_str.clone()),
            _ => None,
        };
        assert_eq!(
            resolve_global_path(env_all, Some(home.clone())),
            Some(explicit.clone())
        );

        let env_xdg = |key: &str| match key {
            "XDG_CONFIG_HOME" => Some(xdg_str.clone()),
            _ => None,
        };
        assert_eq!(
            resolve_global_path(env_xdg, Some(home.clone())),
            Some(xdg.join("bugsift/config.toml"))
        );

        assert_eq!(
            resolve_global_path(no_env, Some(home.clone())),
            Some(home.join(".bugsift/config.toml"))
        );
    }

    #[test]
    fn resolve_skips_missing_files() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("missing.toml").to_string_lossy().to_string();
        let env = |key: &str| (key == CONFIG_ENV).then(|| missing.clone());

        assert_eq!(resolve_global_path(env, Some(temp.path().to_path_buf())), None);
    }

    #[test]
    fn write_global_atomic() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested/config.toml");

        let global = GlobalConfig {
            data_dir: Some("/tmp/data".to_string()),
            ..Default::default()
        };
        Config::write_global_to(&path, &global).unwrap();

        assert!(path.exists());
        assert!(!path.with_extension("toml.tmp").exists());
        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.data_dir(), PathBuf::from("/tmp/data"));
    }

    #[test]
    fn write_rejects_invalid_config() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        let global = GlobalConfig {
            default_repo: Some("bad".to_string()),
            ..Default::default()
        };

        assert!(Config::write_global_to(&path, &global).is_err());
        assert!(!path.exists());
    }
}
