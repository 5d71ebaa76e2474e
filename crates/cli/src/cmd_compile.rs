// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Compile command implementation.

use anyhow::Context;

use quarry::aql::{AqlQuery, file_search_query, folder_search_query, strip_parentheses};
use quarry::cli::{Cli, CompileArgs, OutputFormat};
use quarry::spec::{SpecEntry, SpecError, SpecFiles, SpecType};

/// What one spec entry compiles into.
enum Resolution {
    /// A query to run against the server.
    Query(String),
    /// A literal path, addressable without a query.
    Direct(String),
}

/// Run the compile command.
pub fn run(_cli: &Cli, args: &CompileArgs) -> anyhow::Result<()> {
    let spec = load_spec(args)?;

    let mut resolutions = Vec::new();
    for (index, entry) in spec.files.iter().enumerate() {
        resolutions.push(resolve_entry(entry, index, args)?);
    }

    match args.output {
        OutputFormat::Text => print_text(&resolutions),
        OutputFormat::Json => print_json(&resolutions)?,
    }
    Ok(())
}

/// Build the working spec: from a file when `--spec` is given, otherwise
/// one entry per pattern argument.
fn load_spec(args: &CompileArgs) -> anyhow::Result<SpecFiles> {
    if let Some(path) = &args.spec {
        return Ok(SpecFiles::from_file(path)?);
    }
    if args.patterns.is_empty() {
        anyhow::bail!("nothing to compile: pass a PATTERN or --spec FILE");
    }
    let props = args.props.as_deref().unwrap_or("");
    let recursive = !args.no_recursive;
    Ok(SpecFiles {
        files: args
            .patterns
            .iter()
            .map(|pattern| SpecEntry::new(pattern, "", props, recursive, false, false))
            .collect(),
    })
}

fn resolve_entry(
    entry: &SpecEntry,
    index: usize,
    args: &CompileArgs,
) -> anyhow::Result<Resolution> {
    match entry.spec_type() {
        Some(SpecType::Wildcard) => {
            if entry.regexp() {
                tracing::debug!(
                    "entry #{}: regexp flag is ignored for query compilation",
                    index + 1
                );
            }
            let query = if args.folders {
                folder_search_query(&entry.pattern, &args.fields)
            } else {
                file_search_query(&entry.pattern, entry.recursive(), &entry.props, &args.fields)
                    .with_context(|| {
                        format!("entry #{}: compiling pattern '{}'", index + 1, entry.pattern)
                    })?
            };
            Ok(Resolution::Query(query.render()))
        }
        Some(SpecType::Simple) => Ok(Resolution::Direct(strip_parentheses(&entry.pattern))),
        Some(SpecType::Aql) => {
            let body = entry.aql_body().unwrap_or_default();
            Ok(Resolution::Query(AqlQuery::Raw(body).render()))
        }
        None => Err(SpecError::Unresolvable { index: index + 1 }.into()),
    }
}

fn print_text(resolutions: &[Resolution]) {
    for resolution in resolutions {
        match resolution {
            Resolution::Query(query) => println!("{query}"),
            Resolution::Direct(path) => println!("{path}"),
        }
    }
}

fn print_json(resolutions: &[Resolution]) -> anyhow::Result<()> {
    let entries: Vec<serde_json::Value> = resolutions
        .iter()
        .map(|resolution| match resolution {
            Resolution::Query(query) => serde_json::json!({ "type": "query", "query": query }),
            Resolution::Direct(path) => serde_json::json!({ "type": "direct", "path": path }),
        })
        .collect();
    println!("{}", serde_json::to_string_pretty(&entries)?);
    Ok(())
}
