// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Unit tests for spec file loading and classification.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use yare::parameterized;

use super::*;
use crate::test_utils::temp_file_with_content;

fn entry_with_pattern(pattern: &str) -> SpecEntry {
    SpecEntry {
        pattern: pattern.to_string(),
        ..SpecEntry::default()
    }
}

fn entry_with_aql(body: &str) -> SpecEntry {
    let body: serde_json::Value = serde_json::from_str(body).unwrap();
    SpecEntry {
        aql: Some(serde_json::json!({ "items.find": body })),
        ..SpecEntry::default()
    }
}

#[parameterized(
    wildcard = { "repo/*.zip", Some(SpecType::Wildcard) },
    wildcard_in_path = { "repo/a*/b.zip", Some(SpecType::Wildcard) },
    literal = { "repo/a/b.zip", Some(SpecType::Simple) },
    bare_repo = { "repo", Some(SpecType::Simple) },
)]
fn pattern_entries_classify_by_wildcards(pattern: &str, expected: Option<SpecType>) {
    assert_eq!(entry_with_pattern(pattern).spec_type(), expected);
}

#[test]
fn aql_entry_classifies_as_aql() {
    let entry = entry_with_aql("{\"repo\": \"libs\"}");
    assert_eq!(entry.spec_type(), Some(SpecType::Aql));
}

#[test]
fn pattern_wins_over_aql_body() {
    let mut entry = entry_with_aql("{\"repo\": \"libs\"}");
    entry.pattern = "repo/*".to_string();
    assert_eq!(entry.spec_type(), Some(SpecType::Wildcard));
}

#[test]
fn empty_entry_is_unclassified() {
    assert_eq!(SpecEntry::default().spec_type(), None);
}

#[test]
fn null_aql_body_is_unclassified() {
    let entry = SpecEntry {
        aql: Some(serde_json::json!({ "items.find": null })),
        ..SpecEntry::default()
    };
    assert_eq!(entry.spec_type(), None);
}

#[test]
fn aql_body_is_reserialized_compactly() {
    let entry = SpecEntry {
        aql: Some(serde_json::json!({ "items.find": { "repo": "libs" } })),
        ..SpecEntry::default()
    };
    assert_eq!(entry.aql_body().unwrap(), "{\"repo\":\"libs\"}");
}

#[parameterized(
    absent = { "", true },
    explicit_true = { "true", true },
    explicit_false = { "false", false },
    mixed_case = { "False", false },
    garbage = { "yes", true },
)]
fn recursive_flag_defaults_to_true(raw: &str, expected: bool) {
    let entry = SpecEntry {
        recursive: raw.to_string(),
        ..SpecEntry::default()
    };
    assert_eq!(entry.recursive(), expected);
}

#[test]
fn flat_and_regexp_flags_default_to_false() {
    let entry = SpecEntry::default();
    assert!(!entry.flat());
    assert!(!entry.regexp());
}

#[test]
fn from_pattern_builds_one_entry() {
    let spec = SpecFiles::from_pattern("repo/*", "", "os=linux", false, false, false);
    assert_eq!(spec.files.len(), 1);
    assert_eq!(spec.files[0].pattern, "repo/*");
    assert_eq!(spec.files[0].props, "os=linux");
    assert_eq!(spec.files[0].recursive, "false");
    assert!(!spec.files[0].recursive());
}

#[test]
fn from_file_parses_entries() {
    let file = temp_file_with_content(
        r#"{
            "files": [
                { "pattern": "libs/*.jar", "recursive": "false" },
                { "aql": { "items.find": { "repo": "libs" } } }
            ]
        }"#,
    );
    let spec = SpecFiles::from_file(file.path()).unwrap();
    assert_eq!(spec.files.len(), 2);
    assert_eq!(spec.files[0].spec_type(), Some(SpecType::Wildcard));
    assert!(!spec.files[0].recursive());
    assert_eq!(spec.files[1].spec_type(), Some(SpecType::Aql));
}

#[test]
fn from_file_ignores_unknown_keys() {
    let file = temp_file_with_content(
        r#"{ "files": [ { "pattern": "a/b", "build": "app/1" } ] }"#,
    );
    let spec = SpecFiles::from_file(file.path()).unwrap();
    assert_eq!(spec.files.len(), 1);
}

#[test]
fn from_file_reports_missing_file() {
    let err = SpecFiles::from_file(Path::new("/nonexistent/spec.json")).unwrap_err();
    assert!(matches!(err, SpecError::Read { .. }), "{err}");
}

#[test]
fn from_file_reports_invalid_json() {
    let file = temp_file_with_content("{ not json");
    let err = SpecFiles::from_file(file.path()).unwrap_err();
    assert!(matches!(err, SpecError::Malformed { .. }), "{err}");
}

#[test]
fn from_file_rejects_empty_specs() {
    let file = temp_file_with_content(r#"{ "files": [] }"#);
    let err = SpecFiles::from_file(file.path()).unwrap_err();
    assert!(matches!(err, SpecError::Empty { .. }), "{err}");
}

#[test]
fn get_returns_default_out_of_range() {
    let spec = SpecFiles::from_pattern("repo/*", "", "", true, false, false);
    assert_eq!(spec.get(0).pattern, "repo/*");
    let fallback = spec.get(7);
    assert_eq!(fallback.pattern, "");
    assert_eq!(fallback.spec_type(), None);
}
