// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Publish command implementation.

use anyhow::Context;

use quarry::buildinfo::{
    BuildData, BuildEnv, BuildInfo, apply_exclude_filter, apply_include_filter, create_module,
    publish::browse_url, publish_build_info,
};
use quarry::cli::{Cli, PublishArgs};
use quarry::config;

/// Run the publish command.
pub fn run(cli: &Cli, args: &PublishArgs) -> anyhow::Result<()> {
    let cwd = std::env::current_dir()?;
    let mut config = config::resolve(cli.config.as_deref(), &cwd)?;
    if args.url.is_some() {
        config.server.url = args.url.clone();
    }
    if args.user.is_some() {
        config.server.user = args.user.clone();
    }
    if args.password.is_some() {
        config.server.password = args.password.clone();
    }
    if args.api_key.is_some() {
        config.server.api_key = args.api_key.clone();
    }

    let data = match &args.data {
        Some(path) => BuildData::from_file(path)?,
        None => BuildData::default(),
    };

    let env: BuildEnv = std::env::vars().collect();
    let env = apply_include_filter(&args.env_include, &env)
        .context("invalid --env-include pattern")?;
    let env = apply_exclude_filter(&args.env_exclude, &env)
        .context("invalid --env-exclude pattern")?;

    let mut build_info = BuildInfo::new(&args.build_name, &args.build_number);
    build_info.properties = env;
    build_info
        .modules
        .push(create_module(&args.build_name, data.artifacts, data.dependencies));

    if args.dry_run {
        println!("{}", serde_json::to_string_pretty(&build_info)?);
        return Ok(());
    }

    tracing::info!("publishing build info for {} #{}", args.build_name, args.build_number);
    publish_build_info(&config.server, &build_info)?;

    let base = config.server.url.as_deref().unwrap_or_default();
    println!(
        "build info published, browse it at {}",
        browse_url(base, &args.build_name, &args.build_number)
    );
    Ok(())
}
