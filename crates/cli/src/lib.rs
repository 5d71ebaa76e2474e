// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Library behind the quarry CLI.
//!
//! Compiles glob search patterns and spec files into the item query syntax
//! of artifactory-compatible servers, and assembles build-info documents
//! for publishing.

pub mod aql;
pub mod buildinfo;
pub mod cli;
pub mod config;
pub mod spec;

#[cfg(test)]
pub mod test_utils;
