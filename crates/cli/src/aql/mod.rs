// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Compilation of glob search patterns into the server's item query syntax.

pub mod pairs;
pub mod pattern;
pub mod props;
pub mod query;

pub use pairs::{PathNamePair, generate_file_pairs, generate_folder_pairs};
pub use pattern::{is_wildcard, prepare_search_pattern, split_repository, strip_parentheses};
pub use props::{MalformedPropertyFilter, Property, parse_properties};
pub use query::{AqlQuery, GeneratedQuery, file_search_query, folder_search_query};
