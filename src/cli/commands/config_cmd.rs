//! config command - Get, set, or list configuration values

use std::path::PathBuf;

use anyhow::{Context as _, Result};

use super::Context;
use crate::core::config::{Config, GlobalConfig};
use crate::ui::output;

/// File `set` writes to: the loaded file, else the canonical location.
fn target_path(config: &Config) -> Result<PathBuf> {
    match config.global_config_loaded_from() {
        Some(path) => Ok(path.to_path_buf()),
        None => Config::global_config_path().context("Failed to locate config file"),
    }
}

/// Get a configuration value. Unset keys print nothing.
pub fn get(ctx: &Context, key: &str) -> Result<()> {
    if let Some(value) = ctx.config.global.get(key)? {
        println!("{}", value);
    }
    Ok(())
}

/// Set a configuration value.
pub fn set(ctx: &Context, key: &str, value: &str) -> Result<()> {
    let path = target_path(&ctx.config)?;
    set_in(&path, &ctx.config.global, key, value)?;
    output::print(format!("Set {} = {}", key, value), ctx.verbosity);
    Ok(())
}

/// Update `key` in a copy of `current` and write it to `path`.
pub fn set_in(path: &std::path::Path, current: &GlobalConfig, key: &str, value: &str) -> Result<()> {
    let mut updated = current.clone();
    updated.set(key, value)?;
    Config::write_global_to(path, &updated)
        .with_context(|| format!("Failed to write {}", path.display()))
}

/// List all configuration values.
pub fn list(ctx: &Context) -> Result<()> {
    match ctx.config.global_config_loaded_from() {
        Some(path) => println!("# {}", path.display()),
        None => println!("# (no config file; defaults)"),
    }

    for key in GlobalConfig::KEYS {
        match ctx.config.global.get(key)? {
            Some(value) => println!("{} = {}", key, value),
            None => println!("{} = (not set)", key),
        }
    }
    Ok(())
}
