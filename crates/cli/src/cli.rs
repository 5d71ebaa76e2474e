//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// A command-line client for artifactory-compatible artifact repositories
#[derive(Parser)]
#[command(name = "quarry")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Use specific config file
    #[arg(short = 'C', long = "config", global = true, env = "QUARRY_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Compile search patterns or spec files into server queries
    Compile(CompileArgs),
    /// Assemble and publish build info
    Publish(PublishArgs),
}

#[derive(clap::Args)]
pub struct CompileArgs {
    /// Search patterns of the form repository/path/glob
    #[arg(value_name = "PATTERN")]
    pub patterns: Vec<String>,

    /// Compile the entries of a spec file instead of pattern arguments
    #[arg(long, value_name = "FILE", conflicts_with = "patterns")]
    pub spec: Option<PathBuf>,

    /// Property filters as key=value pairs separated by ';'
    #[arg(long, value_name = "LIST")]
    pub props: Option<String>,

    /// Do not descend into subdirectories
    #[arg(long)]
    pub no_recursive: bool,

    /// Search for folders instead of files
    #[arg(long)]
    pub folders: bool,

    /// Fields to request for every result
    #[arg(
        long,
        value_delimiter = ',',
        default_value = "name,repo,path,actual_md5,actual_sha1,size",
        value_name = "FIELDS"
    )]
    pub fields: Vec<String>,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,
}

#[derive(clap::Args)]
pub struct PublishArgs {
    /// Build name
    #[arg(value_name = "BUILD_NAME")]
    pub build_name: String,

    /// Build number
    #[arg(value_name = "BUILD_NUMBER")]
    pub build_number: String,

    /// Build data file with artifacts and dependencies
    #[arg(long, value_name = "FILE")]
    pub data: Option<PathBuf>,

    /// Environment variables to record, as ';'-separated globs
    #[arg(long, default_value = "*", value_name = "LIST")]
    pub env_include: String,

    /// Environment variables to withhold, as ';'-separated globs
    #[arg(
        long,
        default_value = "*password*;*secret*;*key*",
        value_name = "LIST"
    )]
    pub env_exclude: String,

    /// Print the document instead of sending it
    #[arg(long)]
    pub dry_run: bool,

    /// Server base URL (overrides configuration)
    #[arg(long, value_name = "URL")]
    pub url: Option<String>,

    /// Username for basic authentication (overrides configuration)
    #[arg(long, value_name = "NAME")]
    pub user: Option<String>,

    /// Password for basic authentication (overrides configuration)
    #[arg(long, value_name = "PASS")]
    pub password: Option<String>,

    /// API key sent instead of basic credentials (overrides configuration)
    #[arg(long, value_name = "KEY")]
    pub api_key: Option<String>,
}

#[derive(Clone, Copy, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
