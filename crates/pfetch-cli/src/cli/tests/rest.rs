//! Tests for status and sanitize.

use super::parse;
use crate::cli::{Cli, CliCommand};
use clap::Parser;
use std::path::Path;

#[test]
fn cli_parse_status() {
    match parse(&["pfetch", "status", "report.json"]) {
        CliCommand::Status { report, verify } => {
            assert_eq!(report, Path::new("report.json"));
            assert!(!verify);
        }
        _ => panic!("expected Status"),
    }
}

#[test]
fn cli_parse_status_verify() {
    match parse(&["pfetch", "status", "report.json", "--verify"]) {
        CliCommand::Status { verify, .. } => assert!(verify),
        _ => panic!("expected Status with --verify"),
    }
}

#[test]
fn cli_parse_sanitize_many() {
    match parse(&["pfetch", "sanitize", "Smith, John", "Doe & Partners"]) {
        CliCommand::Sanitize { names } => {
            assert_eq!(names, vec!["Smith, John", "Doe & Partners"]);
        }
        _ => panic!("expected Sanitize"),
    }
}

#[test]
fn cli_parse_sanitize_requires_a_name() {
    assert!(Cli::try_parse_from(["pfetch", "sanitize"]).is_err());
}

#[test]
fn cli_parse_unknown_subcommand_fails() {
    assert!(Cli::try_parse_from(["pfetch", "add", "https://example.test/"]).is_err());
}
