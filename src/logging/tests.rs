// project-accessors: Type-safe project accessor generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::path::{Path, PathBuf};

use super::{LogConfig, LogLevel, open_log_file};
use crate::config::Config;
use crate::config::types::GlobalConfig;

#[test]
fn test_log_level_directives() {
    let directives: Vec<_> = (0..=6)
        .map(|n| LogLevel::new(n).unwrap().directive())
        .collect();
    assert_eq!(
        directives,
        [
            "off",
            "project_accessors=error",
            "project_accessors=warn",
            "project_accessors=info",
            "project_accessors=debug",
            "project_accessors=trace",
            "trace",
        ]
    );
}

#[test]
fn test_log_level_new_rejects_out_of_range() {
    let err = LogLevel::new(9).unwrap_err();
    insta::assert_snapshot!(
        err.to_string(),
        @"invalid value for 'log_level' in section '[global]': log level must be 0-6, got 9"
    );
}

#[test]
fn test_log_level_from_config() {
    let config = Config::parse("[global]\noutput_log_level = 4\n").unwrap();
    assert_eq!(config.global.output_log_level, LogLevel::DEBUG);

    let err = Config::parse("[global]\nfile_log_level = 7\n").unwrap_err();
    assert!(format!("{err:#}").contains("log level must be 0-6, got 7"));
}

#[test]
fn test_log_config_from_global() {
    let config = LogConfig::from(&GlobalConfig::default());
    assert_eq!(config.console_level(), LogLevel::INFO);
    assert_eq!(config.file_level(), LogLevel::TRACE);
    assert!(config.log_file().is_none());

    let global = GlobalConfig {
        output_log_level: LogLevel::SILENT,
        file_log_level: LogLevel::DEBUG,
        log_file: Some(PathBuf::from("logs/accessors.log")),
        ..Default::default()
    };
    let config = LogConfig::from(&global);
    assert_eq!(config.console_level(), LogLevel::SILENT);
    assert_eq!(config.file_level(), LogLevel::DEBUG);
    assert_eq!(config.log_file(), Some(Path::new("logs/accessors.log")));
}

#[test]
fn test_open_log_file_creates_directory() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("logs/nested/accessors.log");

    open_log_file(&path).unwrap();

    assert!(path.is_file());
}

#[test]
fn test_open_log_file_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    // a directory where the file should go
    let err = open_log_file(dir.path()).unwrap_err();
    assert!(err.to_string().contains("failed to create log file"));
}
