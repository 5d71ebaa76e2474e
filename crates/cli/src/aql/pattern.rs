// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Search pattern normalization.
//!
//! Patterns arrive as `repository/path/glob` strings, optionally decorated
//! with parentheses used by placeholder-style targets. Queries are built from
//! a canonical form where the repository segment is always present and a
//! pattern never ends on a slash.

/// Returns true when the pattern contains a glob wildcard.
pub fn is_wildcard(pattern: &str) -> bool {
    pattern.contains('*')
}

/// Remove decorative parentheses from a pattern.
///
/// Parentheses mark capture groups for target placeholders; they carry no
/// meaning for matching and must not reach the server.
pub fn strip_parentheses(pattern: &str) -> String {
    pattern.replace(['(', ')'], "")
}

/// Canonicalize a file search pattern.
///
/// - parentheses are stripped,
/// - a bare repository name gains a trailing slash, so `repo` means
///   "everything in repo",
/// - a trailing slash gains a `*`, so `repo/dir/` means `repo/dir/*`.
pub fn prepare_search_pattern(pattern: &str) -> String {
    let mut prepared = strip_parentheses(pattern);
    if !prepared.contains('/') {
        prepared.push('/');
    }
    if prepared.ends_with('/') {
        prepared.push('*');
    }
    prepared
}

/// Split a canonical pattern into its repository segment and the remainder.
///
/// The split happens at the first slash; a pattern without one is treated as
/// a repository with an empty remainder.
pub fn split_repository(pattern: &str) -> (&str, &str) {
    match pattern.split_once('/') {
        Some((repo, rest)) => (repo, rest),
        None => (pattern, ""),
    }
}

#[cfg(test)]
#[path = "pattern_tests.rs"]
mod tests;
