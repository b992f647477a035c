//! core::config::schema
//!
//! Configuration schema types.
//!
//! # Global Config
//!
//! Located at (in order of precedence):
//! 1. `$BUGSIFT_CONFIG` if set
//! 2. `$XDG_CONFIG_HOME/bugsift/config.toml`
//! 3. `~/.bugsift/config.toml` (canonical write location)
//!
//! # Validation
//!
//! Config values are validated after parsing to ensure they conform to
//! expected formats (e.g., `default_repo` must be an `owner/repo` slug).

use serde::{Deserialize, Serialize};

use super::ConfigError;
use crate::core::types::RepoSlug;

/// Global configuration (user scope).
///
/// # Example
///
/// ```toml
/// data_dir = "./github_data"
/// default_repo = "Mentra-Community/MentraOS"
/// bug_label = "bug"
/// api_base = "https://api.github.com"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Root directory of fetched archives
    pub data_dir: Option<String>,

    /// Repository analyzed when none is given on the command line
    pub default_repo: Option<String>,

    /// Label that marks an issue as a bug
    pub bug_label: Option<String>,

    /// REST API base URL (GitHub Enterprise installs differ)
    pub api_base: Option<String>,

    /// GraphQL endpoint; derived from `api_base` when unset
    pub graphql_endpoint: Option<String>,
}

impl GlobalConfig {
    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(repo) = &self.default_repo {
            RepoSlug::parse(repo)
                .map_err(|e| ConfigError::InvalidValue(format!("default_repo: {}", e)))?;
        }

        if let Some(label) = &self.bug_label {
            if label.trim().is_empty() {
                return Err(ConfigError::InvalidValue(
                    "bug_label cannot be empty".to_string(),
                ));
            }
        }

        if let Some(dir) = &self.data_dir {
            if dir.is_empty() {
                return Err(ConfigError::InvalidValue(
                    "data_dir cannot be empty".to_string(),
                ));
            }
        }

        for (key, url) in [
            ("api_base", &self.api_base),
            ("graphql_endpoint", &self.graphql_endpoint),
        ] {
            if let Some(url) = url {
                if !(url.starts_with("https://") || url.starts_with("http://")) {
                    return Err(ConfigError::InvalidValue(format!(
                        "{} must be an http(s) URL, got '{}'",
                        key, url
                    )));
                }
            }
        }

        Ok(())
    }

    /// Keys accepted by [`get`](Self::get) and [`set`](Self::set).
    pub const KEYS: [&'static str; 5] = [
        "data_dir",
        "default_repo",
        "bug_label",
        "api_base",
        "graphql_endpoint",
    ];

    /// Value of `key`, `None` when unset.
    pub fn get(&self, key: &str) -> Result<Option<&str>, ConfigError> {
        Ok(self.field(key)?.as_deref())
    }

    /// Set `key` to `value`. Does not validate; call [`validate`](Self::validate).
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        *self.field_mut(key)? = Some(value.to_string());
        Ok(())
    }

    fn field(&self, key: &str) -> Result<&Option<String>, ConfigError> {
        Ok(match key {
            "data_dir" => &self.data_dir,
            "default_repo" => &self.default_repo,
            "bug_label" => &self.bug_label,
            "api_base" => &self.api_base,
            "graphql_endpoint" => &self.graphql_endpoint,
            _ => return Err(unknown_key(key)),
        })
    }

    fn field_mut(&mut self, key: &str) -> Result<&mut Option<String>, ConfigError> {
        Ok(match key {
            "data_dir" => &mut self.data_dir,
            "default_repo" => &mut self.default_repo,
            "bug_label" => &mut self.bug_label,
            "api_base" => &mut self.api_base,
            "graphql_endpoint" => &mut self.graphql_endpoint,
            _ => return Err(unknown_key(key)),
        })
    }
}

fn unknown_key(key: &str) -> ConfigError {
    ConfigError::InvalidValue(format!(
        "unknown key '{}' (expected one of: {})",
        key,
        GlobalConfig::KEYS.join(", ")
    ))
}
