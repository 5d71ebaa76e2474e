// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration loading and discovery.
//!
//! Server coordinates live in quarry.toml, found by walking from the
//! working directory up to the git root. An explicit path (from `--config`
//! or `QUARRY_CONFIG`) skips discovery and must exist.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;

/// Top-level configuration file contents.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
}

/// Coordinates and credentials of the artifact repository server.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Base URL, e.g. `https://repo.example.com/`.
    pub url: Option<String>,
    pub user: Option<String>,
    pub password: Option<String>,
    /// API key, sent instead of basic credentials when set.
    pub api_key: Option<String>,
}

/// Find quarry.toml starting from `start_dir` and walking up to git root.
pub fn find_config(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join("quarry.toml");
        if config_path.exists() {
            return Some(config_path);
        }

        // Stop at git root
        if current.join(".git").exists() {
            return None;
        }

        // Move up one directory
        match current.parent() {
            Some(parent) => current = parent.to_path_buf(),
            None => return None,
        }
    }
}

/// Load a config file from a known path.
pub fn load(path: &Path) -> anyhow::Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let config: Config = toml::from_str(&content)
        .with_context(|| format!("failed to parse config {}", path.display()))?;
    Ok(config)
}

/// Resolve the effective configuration: an explicit path when given,
/// otherwise discovery from `start_dir`, otherwise defaults.
pub fn resolve(explicit: Option<&Path>, start_dir: &Path) -> anyhow::Result<Config> {
    match explicit {
        Some(path) => load(path),
        None => match find_config(start_dir) {
            Some(path) => {
                tracing::debug!("using config {}", path.display());
                load(&path)
            }
            None => Ok(Config::default()),
        },
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
