//! Tests for subcommand argument parsing.

use super::parse;
use crate::cli::{Cli, CliCommand};
use clap::Parser;
use clap_complete::Shell;

#[test]
fn cli_parse_parse() {
    match parse(&["bundle-url", "parse", "http://localhost:8081/index.bundle"]) {
        CliCommand::Parse {
            url,
            platforms,
            compact,
        } => {
            assert_eq!(url, "http://localhost:8081/index.bundle");
            assert!(platforms.is_empty());
            assert!(!compact);
        }
        _ => panic!("expected Parse"),
    }
}

#[test]
fn cli_parse_parse_platforms() {
    match parse(&[
        "bundle-url",
        "parse",
        "index.test.bundle",
        "--platform",
        "test",
        "--platform",
        "ios",
        "--compact",
    ]) {
        CliCommand::Parse {
            url,
            platforms,
            compact,
        } => {
            assert_eq!(url, "index.test.bundle");
            assert_eq!(platforms, vec!["test", "ios"]);
            assert!(compact);
        }
        _ => panic!("expected Parse with --platform"),
    }
}

#[test]
fn cli_parse_config() {
    match parse(&["bundle-url", "config"]) {
        CliCommand::Config => {}
        _ => panic!("expected Config"),
    }
}

#[test]
fn cli_parse_completions() {
    match parse(&["bundle-url", "completions", "bash"]) {
        CliCommand::Completions { shell } => assert_eq!(shell, Shell::Bash),
        _ => panic!("expected Completions"),
    }
}

#[test]
fn cli_parse_man() {
    match parse(&["bundle-url", "man"]) {
        CliCommand::Man => {}
        _ => panic!("expected Man"),
    }
}

#[test]
fn cli_rejects_missing_url() {
    assert!(Cli::try_parse_from(["bundle-url", "parse"]).is_err());
    assert!(Cli::try_parse_from(["bundle-url", "completions", "nosuchshell"]).is_err());
}
