//! Unit tests for CLI argument parsing.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use clap::Parser;

use super::*;

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(args).unwrap()
}

#[test]
fn compile_accepts_multiple_patterns() {
    let cli = parse(&["quarry", "compile", "repo/a/*", "repo/b/*.zip"]);
    let Command::Compile(args) = cli.command else {
        panic!("expected compile");
    };
    assert_eq!(args.patterns, ["repo/a/*", "repo/b/*.zip"]);
    assert!(!args.no_recursive);
    assert!(!args.folders);
}

#[test]
fn compile_fields_default_and_split_on_commas() {
    let cli = parse(&["quarry", "compile", "repo/*"]);
    let Command::Compile(args) = cli.command else {
        panic!("expected compile");
    };
    assert_eq!(
        args.fields,
        ["name", "repo", "path", "actual_md5", "actual_sha1", "size"]
    );

    let cli = parse(&["quarry", "compile", "repo/*", "--fields", "name,size"]);
    let Command::Compile(args) = cli.command else {
        panic!("expected compile");
    };
    assert_eq!(args.fields, ["name", "size"]);
}

#[test]
fn compile_spec_conflicts_with_patterns() {
    let result = Cli::try_parse_from(["quarry", "compile", "repo/*", "--spec", "x.json"]);
    assert!(result.is_err());
}

#[test]
fn compile_spec_alone_is_accepted() {
    let cli = parse(&["quarry", "compile", "--spec", "x.json"]);
    let Command::Compile(args) = cli.command else {
        panic!("expected compile");
    };
    assert_eq!(args.spec.unwrap(), PathBuf::from("x.json"));
    assert!(args.patterns.is_empty());
}

#[test]
fn publish_takes_name_and_number() {
    let cli = parse(&["quarry", "publish", "app", "42"]);
    let Command::Publish(args) = cli.command else {
        panic!("expected publish");
    };
    assert_eq!(args.build_name, "app");
    assert_eq!(args.build_number, "42");
    assert!(!args.dry_run);
    assert_eq!(args.env_include, "*");
    assert_eq!(args.env_exclude, "*password*;*secret*;*key*");
}

#[test]
fn publish_requires_the_build_number() {
    assert!(Cli::try_parse_from(["quarry", "publish", "app"]).is_err());
}

#[test]
fn config_flag_is_global() {
    let cli = parse(&["quarry", "compile", "repo/*", "--config", "custom.toml"]);
    assert_eq!(cli.config.unwrap(), PathBuf::from("custom.toml"));
}
