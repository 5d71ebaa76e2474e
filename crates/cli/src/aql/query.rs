// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Assembly and rendering of item queries.
//!
//! The server speaks a JSON-like query language: `items.find(<filter>)`
//! optionally followed by `.include(<fields>)`. Filters are rendered by
//! string concatenation rather than through a JSON serializer because the
//! server grammar is more relaxed than JSON and pre-authored bodies must
//! pass through untouched.

use crate::aql::pairs::{self, PathNamePair};
use crate::aql::pattern;
use crate::aql::props::{self, MalformedPropertyFilter, Property};

/// A compiled item query, ready to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AqlQuery {
    /// A pre-authored filter body, passed through verbatim.
    Raw(String),
    /// A filter generated from a decomposed search pattern.
    Generated(GeneratedQuery),
}

/// The pieces of a generated query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedQuery {
    pub repo: String,
    pub props: Vec<Property>,
    pub pairs: Vec<PathNamePair>,
    /// Server item type to constrain on, e.g. `folder`. `None` leaves the
    /// server default of matching files.
    pub item_type: Option<String>,
    pub fields: Vec<String>,
}

impl AqlQuery {
    /// Render the query in the server's wire syntax.
    pub fn render(&self) -> String {
        match self {
            AqlQuery::Raw(body) => format!("items.find({body})"),
            AqlQuery::Generated(query) => query.render(),
        }
    }
}

impl GeneratedQuery {
    fn render(&self) -> String {
        let mut filter = format!("{{\"repo\": \"{}\",", self.repo);
        filter.push_str(&props::clause_fragment(&self.props));
        filter.push_str("\"$or\": [");
        for (i, pair) in self.pairs.iter().enumerate() {
            if i > 0 {
                filter.push(',');
            }
            filter.push('{');
            filter.push_str(&inner_clause(pair, self.item_type.as_deref()));
            filter.push('}');
        }
        filter.push_str("]}");
        format!("items.find({filter}).include({})", self.fields.join(","))
    }
}

/// Render one `$or` branch: a path matcher and a name matcher, plus the item
/// type constraint when one is set.
///
/// The all-wildcard pair of a folder query gets an extra `$ne` clause so the
/// repository root itself is not reported as a folder.
fn inner_clause(pair: &PathNamePair, item_type: Option<&str>) -> String {
    let exclude_root = item_type == Some("folder") && pair.path == "*" && pair.name == "*";

    let mut clause = format!("\"$and\": [{{\"path\": {{\"$match\": \"{}\"}},", pair.path);
    if exclude_root {
        clause.push_str("\"path\": {\"$ne\": \".\"},");
    }
    clause.push_str(&format!("\"name\": {{\"$match\": \"{}\"}}", pair.name));
    if let Some(item_type) = item_type {
        clause.push_str(&format!(",\"type\": {{\"$eq\": \"{item_type}\"}}"));
    }
    clause.push_str("}]");
    clause
}

/// Compile a file search pattern into a query.
///
/// The pattern is canonicalized, split into its repository segment and
/// remainder, and the remainder decomposed into path and name pairs. Fails
/// only when the property filter string is malformed.
pub fn file_search_query(
    pattern: &str,
    recursive: bool,
    properties: &str,
    fields: &[String],
) -> Result<AqlQuery, MalformedPropertyFilter> {
    let prepared = pattern::prepare_search_pattern(pattern);
    let (repo, remainder) = pattern::split_repository(&prepared);
    Ok(AqlQuery::Generated(GeneratedQuery {
        repo: repo.to_string(),
        props: props::parse_properties(properties)?,
        pairs: pairs::generate_file_pairs(remainder, recursive),
        item_type: None,
        fields: fields.to_vec(),
    }))
}

/// Compile a folder search pattern into a query.
///
/// A bare repository name gets the same "everything in it" default as file
/// search. Folder queries carry no property filters.
pub fn folder_search_query(pattern: &str, fields: &[String]) -> AqlQuery {
    let stripped = pattern::strip_parentheses(pattern);
    let trimmed = stripped.strip_suffix('/').unwrap_or(&stripped);
    let normalized = if trimmed.contains('/') {
        trimmed.to_string()
    } else {
        format!("{trimmed}/*")
    };
    let (repo, _) = pattern::split_repository(&normalized);
    AqlQuery::Generated(GeneratedQuery {
        repo: repo.to_string(),
        props: Vec::new(),
        pairs: pairs::generate_folder_pairs(&normalized),
        item_type: Some("folder".to_string()),
        fields: fields.to_vec(),
    })
}

#[cfg(test)]
#[path = "query_tests.rs"]
mod tests;
