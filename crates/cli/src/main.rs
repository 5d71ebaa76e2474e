// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Binary entry point: argument parsing, logging setup, and dispatch.

mod cmd_compile;
mod cmd_publish;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use quarry::cli::{Cli, Command};

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    match &cli.command {
        Command::Compile(args) => cmd_compile::run(&cli, args),
        Command::Publish(args) => cmd_publish::run(&cli, args),
    }
}

/// Log to stderr, filtered by QUARRY_LOG (defaults to warnings only).
fn init_tracing() {
    let filter = EnvFilter::try_from_env("QUARRY_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
