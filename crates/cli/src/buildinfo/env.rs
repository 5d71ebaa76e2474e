// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Environment capture filters.
//!
//! Which variables end up in a published document is controlled by two
//! `;`-separated glob lists: an include list applied first and an exclude
//! list applied to what survives. Matching is against variable names only
//! and is case sensitive.

use globset::{Glob, GlobSet, GlobSetBuilder};

use crate::buildinfo::BuildEnv;

/// Keep only the variables whose name matches one of `patterns`.
pub fn apply_include_filter(patterns: &str, env: &BuildEnv) -> Result<BuildEnv, globset::Error> {
    let matchers = build_matcher_set(patterns)?;
    Ok(env
        .iter()
        .filter(|(name, _)| matchers.is_match(name))
        .map(|(name, value)| (name.clone(), value.clone()))
        .collect())
}

/// Drop the variables whose name matches one of `patterns`.
pub fn apply_exclude_filter(patterns: &str, env: &BuildEnv) -> Result<BuildEnv, globset::Error> {
    let matchers = build_matcher_set(patterns)?;
    Ok(env
        .iter()
        .filter(|(name, _)| !matchers.is_match(name))
        .map(|(name, value)| (name.clone(), value.clone()))
        .collect())
}

fn build_matcher_set(patterns: &str) -> Result<GlobSet, globset::Error> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns.split(';') {
        builder.add(Glob::new(pattern)?);
    }
    builder.build()
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
