// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use yare::parameterized;

#[test]
fn config_error_display() {
    let err = Error::Config {
        message: "invalid version".into(),
        path: Some(PathBuf::from("config.toml")),
    };
    assert!(err.to_string().contains("invalid version"));
}

#[test]
fn dictionary_error_names_list_and_line() {
    let err = Error::Dictionary {
        list: "answers".into(),
        line: 12,
        message: "expected five letters, got `hello!`".into(),
    };
    assert_eq!(
        err.to_string(),
        "dictionary error: answers:12: expected five letters, got `hello!`"
    );
}

#[parameterized(
    config = { Error::Config { message: "x".into(), path: None }, ExitCode::ConfigError },
    argument = { Error::Argument("x".into()), ExitCode::ConfigError },
    dictionary = { Error::Dictionary { list: "x".into(), line: 1, message: "x".into() }, ExitCode::ConfigError },
    terminal = { Error::Terminal(std::io::Error::other("x")), ExitCode::InternalError },
    internal = { Error::Internal("x".into()), ExitCode::InternalError },
)]
fn exit_code_mapping(err: Error, expected: ExitCode) {
    assert_eq!(ExitCode::from(&err), expected);
}
