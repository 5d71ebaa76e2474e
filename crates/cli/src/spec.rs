// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Spec files: JSON documents describing what to search for.
//!
//! A spec file holds a list of entries under `files`. Each entry carries
//! either a glob `pattern` or a pre-authored `aql` body, plus string-typed
//! option flags. Flags are strings rather than booleans on the wire so that
//! an absent flag and an explicit one can be told apart by other consumers
//! of the same format.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::aql::is_wildcard;

/// How a spec entry is resolved into server work.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecType {
    /// A glob pattern, compiled into a generated query.
    Wildcard,
    /// A literal path, resolved directly without a query.
    Simple,
    /// A pre-authored query body, passed through.
    Aql,
}

/// One entry of a spec file.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct SpecEntry {
    pub pattern: String,
    pub target: String,
    pub props: String,
    pub recursive: String,
    pub flat: String,
    pub regexp: String,
    pub aql: Option<serde_json::Value>,
}

impl SpecEntry {
    pub fn new(
        pattern: &str,
        target: &str,
        props: &str,
        recursive: bool,
        flat: bool,
        regexp: bool,
    ) -> Self {
        SpecEntry {
            pattern: pattern.to_string(),
            target: target.to_string(),
            props: props.to_string(),
            recursive: recursive.to_string(),
            flat: flat.to_string(),
            regexp: regexp.to_string(),
            aql: None,
        }
    }

    /// Classify the entry. `None` means it carries neither a pattern nor a
    /// query body and cannot be resolved.
    ///
    /// A non-empty pattern wins over an `aql` body; whether it is a
    /// wildcard or a literal is decided by the presence of glob characters.
    pub fn spec_type(&self) -> Option<SpecType> {
        if !self.pattern.is_empty() && is_wildcard(&self.pattern) {
            return Some(SpecType::Wildcard);
        }
        if !self.pattern.is_empty() {
            return Some(SpecType::Simple);
        }
        if self.aql_body().is_some() {
            return Some(SpecType::Aql);
        }
        None
    }

    /// The raw query body stored under `aql.items.find`, re-serialized
    /// compactly. `None` when the entry has no usable body.
    pub fn aql_body(&self) -> Option<String> {
        let body = self.aql.as_ref()?.get("items.find")?;
        if body.is_null() {
            return None;
        }
        serde_json::to_string(body).ok()
    }

    pub fn recursive(&self) -> bool {
        parse_flag(&self.recursive, true)
    }

    pub fn flat(&self) -> bool {
        parse_flag(&self.flat, false)
    }

    pub fn regexp(&self) -> bool {
        parse_flag(&self.regexp, false)
    }
}

// Flags are lenient: anything that is not a case-insensitive "true" or
// "false" falls back to the flag's default, including the empty string of
// an absent flag.
fn parse_flag(text: &str, default: bool) -> bool {
    if text.eq_ignore_ascii_case("true") {
        true
    } else if text.eq_ignore_ascii_case("false") {
        false
    } else {
        default
    }
}

/// A parsed spec file.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct SpecFiles {
    pub files: Vec<SpecEntry>,
}

/// Failures while loading or resolving a spec file.
#[derive(Debug, Error)]
pub enum SpecError {
    #[error("reading spec file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed spec file {}: {source}", path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("spec file {} contains no entries", path.display())]
    Empty { path: PathBuf },
    #[error("spec entry #{index} has neither a pattern nor an aql body")]
    Unresolvable { index: usize },
}

impl SpecFiles {
    /// Load and validate a spec file from disk.
    pub fn from_file(path: &Path) -> Result<Self, SpecError> {
        let content = fs::read_to_string(path).map_err(|source| SpecError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let spec: SpecFiles =
            serde_json::from_str(&content).map_err(|source| SpecError::Malformed {
                path: path.to_path_buf(),
                source,
            })?;
        if spec.files.is_empty() {
            return Err(SpecError::Empty {
                path: path.to_path_buf(),
            });
        }
        Ok(spec)
    }

    /// Build a single-entry spec from command-line arguments.
    pub fn from_pattern(
        pattern: &str,
        target: &str,
        props: &str,
        recursive: bool,
        flat: bool,
        regexp: bool,
    ) -> Self {
        SpecFiles {
            files: vec![SpecEntry::new(pattern, target, props, recursive, flat, regexp)],
        }
    }

    /// Entry access that never fails: an out-of-range index yields a
    /// default entry, which classifies as unresolvable.
    pub fn get(&self, index: usize) -> SpecEntry {
        self.files.get(index).cloned().unwrap_or_default()
    }
}

#[cfg(test)]
#[path = "spec_tests.rs"]
mod tests;
