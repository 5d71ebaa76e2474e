// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Build-info documents: what was built, from what, and in which
//! environment.
//!
//! The document layout follows the server's build-info wire format. Every
//! field is skipped when empty so a minimal publish stays minimal.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::Context;
use chrono::Local;
use serde::{Deserialize, Serialize};

pub mod env;
pub mod publish;

pub use env::{apply_exclude_filter, apply_include_filter};
pub use publish::{PublishError, publish_build_info};

/// Build agent name reported for builds assembled by this client.
pub const BUILD_AGENT_NAME: &str = "GENERIC";

/// Timestamp layout of the `started` field, e.g.
/// `2026-08-25T14:03:59.123+0200`.
pub const STARTED_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3f%z";

/// Captured environment, keyed by variable name.
pub type BuildEnv = BTreeMap<String, String>;

/// A build-info document.
#[derive(Debug, Clone, Serialize)]
pub struct BuildInfo {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub number: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agent: Option<Agent>,
    #[serde(rename = "buildAgent", skip_serializing_if = "Option::is_none")]
    pub build_agent: Option<Agent>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub modules: Vec<Module>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub started: String,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub properties: BuildEnv,
}

/// Name and version of a tool involved in producing the build.
#[derive(Debug, Clone, Serialize)]
pub struct Agent {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub version: String,
}

/// One module of a build. Builds published by this client carry a single
/// module named after the build.
#[derive(Debug, Default, Clone, Serialize)]
pub struct Module {
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub properties: BTreeMap<String, Vec<String>>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub artifacts: Vec<Artifact>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub dependencies: Vec<Dependency>,
}

/// An artifact produced by the build.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Artifact {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub sha1: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub md5: String,
}

/// An artifact the build depended on.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Dependency {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub sha1: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub md5: String,
}

impl BuildInfo {
    /// Start a document for the named build, stamped with the current local
    /// time and this client's agent details.
    pub fn new(name: &str, number: &str) -> Self {
        let agent = Agent {
            name: env!("CARGO_PKG_NAME").to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        };
        let build_agent = Agent {
            name: BUILD_AGENT_NAME.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        };
        BuildInfo {
            name: name.to_string(),
            number: number.to_string(),
            agent: Some(agent),
            build_agent: Some(build_agent),
            modules: Vec::new(),
            started: Local::now().format(STARTED_FORMAT).to_string(),
            properties: BuildEnv::new(),
        }
    }
}

/// Assemble the single default module of a build.
pub fn create_module(
    build_name: &str,
    artifacts: Vec<Artifact>,
    dependencies: Vec<Dependency>,
) -> Module {
    Module {
        properties: BTreeMap::new(),
        id: build_name.to_string(),
        artifacts,
        dependencies,
    }
}

/// Artifact and dependency lists loaded from a build data file.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct BuildData {
    pub artifacts: Vec<Artifact>,
    pub dependencies: Vec<Dependency>,
}

impl BuildData {
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read build data {}", path.display()))?;
        let data: BuildData = serde_json::from_str(&content)
            .with_context(|| format!("failed to parse build data {}", path.display()))?;
        Ok(data)
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
