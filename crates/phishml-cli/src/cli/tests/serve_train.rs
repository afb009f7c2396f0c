//! Tests for serve and train subcommands.

use super::{parse, parse_cli};
use crate::cli::{Cli, CliCommand};
use clap::Parser;
use phishml_core::logging::LogTarget;
use std::path::Path;

#[test]
fn cli_parse_serve_defaults() {
    match parse(&["phishml", "serve"]) {
        CliCommand::Serve {
            bind,
            model,
            log_stderr,
        } => {
            assert!(bind.is_none());
            assert!(model.is_none());
            assert!(!log_stderr);
        }
        _ => panic!("expected Serve"),
    }
}

#[test]
fn cli_parse_serve_overrides() {
    match parse(&[
        "phishml",
        "serve",
        "--bind",
        "0.0.0.0:9000",
        "--model",
        "/srv/model.json",
        "--log-stderr",
    ]) {
        CliCommand::Serve {
            bind,
            model,
            log_stderr,
        } => {
            assert_eq!(bind.as_deref(), Some("0.0.0.0:9000"));
            assert_eq!(model.as_deref(), Some(Path::new("/srv/model.json")));
            assert!(log_stderr);
        }
        _ => panic!("expected Serve with overrides"),
    }
}

#[test]
fn log_target_follows_serve_flag() {
    assert_eq!(
        parse_cli(&["phishml", "serve", "--log-stderr"]).log_target(),
        LogTarget::Stderr
    );
    assert_eq!(parse_cli(&["phishml", "serve"]).log_target(), LogTarget::File);
    assert_eq!(
        parse_cli(&["phishml", "features", "x.com"]).log_target(),
        LogTarget::File
    );
}

#[test]
fn cli_parse_train_defaults() {
    match parse(&["phishml", "train", "--data", "training/urls.csv"]) {
        CliCommand::Train {
            data,
            out,
            test_size,
            seed,
            max_iter,
        } => {
            assert_eq!(data, Path::new("training/urls.csv"));
            assert!(out.is_none());
            assert!((test_size - 0.2).abs() < 1e-12);
            assert_eq!(seed, 42);
            assert_eq!(max_iter, 1000);
        }
        _ => panic!("expected Train"),
    }
}

#[test]
fn cli_parse_train_custom() {
    match parse(&[
        "phishml",
        "train",
        "--data",
        "d.csv",
        "--out",
        "m.json",
        "--test-size",
        "0.25",
        "--seed",
        "7",
        "--max-iter",
        "50",
    ]) {
        CliCommand::Train {
            out,
            test_size,
            seed,
            max_iter,
            ..
        } => {
            assert_eq!(out.as_deref(), Some(Path::new("m.json")));
            assert!((test_size - 0.25).abs() < 1e-12);
            assert_eq!(seed, 7);
            assert_eq!(max_iter, 50);
        }
        _ => panic!("expected Train with options"),
    }
}

#[test]
fn cli_train_requires_data() {
    assert!(Cli::try_parse_from(["phishml", "train"]).is_err());
}
