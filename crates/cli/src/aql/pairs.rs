// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Decomposition of glob patterns into path and name pairs.
//!
//! The server indexes the directory path and the item name of every artifact
//! as two separate fields, so a single pattern like `a/*` has to become a
//! disjunction of field pairs: `*` may stop inside the name (`a/file.tgz`)
//! or span directories (`a/b/file.tgz`). Each returned pair is one branch of
//! that disjunction.

use crate::aql::pattern::strip_parentheses;

/// One candidate split of a pattern into a path glob and a name glob.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathNamePair {
    pub path: String,
    pub name: String,
}

impl PathNamePair {
    pub fn new(path: impl Into<String>, name: impl Into<String>) -> Self {
        PathNamePair {
            path: path.into(),
            name: name.into(),
        }
    }
}

/// Decompose a file search pattern into path and name pairs.
///
/// The pattern must already be canonical (see
/// [`prepare_search_pattern`](crate::aql::pattern::prepare_search_pattern))
/// and stripped of its repository segment. Always returns at least one pair:
/// the literal split at the last slash. In recursive mode, every `*` in the
/// name except the last one additionally yields a pair where the wildcard is
/// allowed to cross into the path.
pub fn generate_file_pairs(pattern: &str, recursive: bool) -> Vec<PathNamePair> {
    if pattern == "*" {
        let path = if recursive { "*" } else { "." };
        return vec![PathNamePair::new(path, "*")];
    }

    let mut pairs = Vec::new();
    let (path, name) = match pattern.rsplit_once('/') {
        Some((path, name)) => {
            pairs.push(PathNamePair::new(path, name));
            (path, name)
        }
        None => {
            pairs.push(PathNamePair::new(".", pattern));
            ("", pattern)
        }
    };

    if !recursive {
        return pairs;
    }
    if name == "*" {
        pairs.push(PathNamePair::new(format!("{path}/*"), "*"));
        return pairs;
    }

    let stars: Vec<usize> = name.match_indices('*').map(|(k, _)| k).collect();
    for &k in stars.iter().take(stars.len().saturating_sub(1)) {
        pairs.push(PathNamePair::new(
            prefix_with(path, &name[..=k]),
            &name[k..],
        ));
    }
    pairs
}

/// Decompose a folder search pattern into path and name pairs.
///
/// Takes the full pattern including the repository segment. The trailing
/// slash folder patterns carry is dropped, parentheses are stripped, and the
/// repository segment is cut at the first slash. Every `*` in the last
/// segment yields a pair that lets the wildcard extend into deeper folders.
pub fn generate_folder_pairs(pattern: &str) -> Vec<PathNamePair> {
    let stripped = strip_parentheses(pattern);
    let trimmed = stripped.strip_suffix('/').unwrap_or(&stripped);
    let remainder = match trimmed.split_once('/') {
        Some((_repo, rest)) => rest,
        None => trimmed,
    };

    let (path, last_seg) = match remainder.rsplit_once('/') {
        Some((path, seg)) => (path, seg),
        None => (".", remainder),
    };

    let mut pairs = vec![PathNamePair::new(path, last_seg)];
    for (k, _) in last_seg.match_indices('*') {
        pairs.push(PathNamePair::new(
            join_under(path, &last_seg[..=k]),
            &last_seg[k..],
        ));
    }
    pairs
}

/// Prepend the outer path to a candidate path glob. An empty outer path
/// contributes no prefix.
fn prefix_with(path: &str, candidate: &str) -> String {
    if path.is_empty() {
        candidate.to_string()
    } else {
        format!("{path}/{candidate}")
    }
}

/// Like [`prefix_with`], but also collapses the `.` placeholder used by
/// folder patterns for "directly under the repository".
fn join_under(path: &str, candidate: &str) -> String {
    if path.is_empty() || path == "." {
        candidate.to_string()
    } else {
        format!("{path}/{candidate}")
    }
}

#[cfg(test)]
#[path = "pairs_tests.rs"]
mod tests;
