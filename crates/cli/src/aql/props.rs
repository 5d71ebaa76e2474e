// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Property filters attached to search queries.
//!
//! Filters arrive as a single `key1=value1;key2=value2` string. Keys are
//! rendered with an `@` prefix so the server matches against item properties
//! rather than built-in fields.

use thiserror::Error;

/// A single `key=value` property filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    pub key: String,
    pub value: String,
}

/// A property filter entry without a `=` delimiter.
#[derive(Debug, Error)]
#[error("invalid property filter '{entry}': expected key=value")]
pub struct MalformedPropertyFilter {
    pub entry: String,
}

/// Split one `key=value` entry at its first `=`. The value may itself
/// contain `=` and may be empty; a missing delimiter is an error naming
/// the fragment.
fn split_property(entry: &str) -> Result<(&str, &str), MalformedPropertyFilter> {
    entry.split_once('=').ok_or_else(|| MalformedPropertyFilter {
        entry: entry.to_string(),
    })
}

/// Split a `;`-separated property filter string into parsed properties.
///
/// An empty input yields no properties. Duplicate keys are kept in order;
/// the server treats them conjunctively.
pub fn parse_properties(input: &str) -> Result<Vec<Property>, MalformedPropertyFilter> {
    if input.is_empty() {
        return Ok(Vec::new());
    }
    input
        .split(';')
        .map(|entry| {
            let (key, value) = split_property(entry)?;
            Ok(Property {
                key: key.to_string(),
                value: value.to_string(),
            })
        })
        .collect()
}

/// Render properties as the leading fragment of a query filter.
///
/// Each property becomes `"@key": {"$match": "value"},` with the trailing
/// comma included, so the fragment can be prepended to further clauses
/// as-is. No properties renders as an empty string.
pub fn clause_fragment(props: &[Property]) -> String {
    let mut fragment = String::new();
    for prop in props {
        fragment.push_str(&format!(
            "\"@{}\": {{\"$match\": \"{}\"}},",
            prop.key, prop.value
        ));
    }
    fragment
}

#[cfg(test)]
#[path = "props_tests.rs"]
mod tests;
