// project-accessors: Type-safe project accessor generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration types.
//!
//! # Config Structure
//!
//! ```text
//! Config: GlobalConfig, GenerationConfig
//! Groups: group name → GroupConfig
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::logging::LogLevel;
use crate::render::OutputFormat;
use crate::version::HostVersion;

/// Default output directory, relative to the working directory.
pub const DEFAULT_OUTPUT_DIR: &str = "build/generated/project-accessors";

/// Global configuration options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Log what would be written without touching the filesystem.
    pub dry: bool,
    /// Log level for stdout output (0-6).
    pub output_log_level: LogLevel,
    /// Log level for file output (0-6).
    pub file_log_level: LogLevel,
    /// Path to log file; no file logging when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            dry: false,
            output_log_level: LogLevel::INFO,
            file_log_level: LogLevel::TRACE,
            log_file: None,
        }
    }
}

/// Defaults shared by every accessor group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GenerationConfig {
    /// Owning project label used in documentation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_name: Option<String>,
    /// Default package of generated files.
    pub package_name: String,
    /// Host build-tool version.
    pub gradle_version: HostVersion,
    /// Declared modules get a `path` field below this version.
    pub path_field_threshold: HostVersion,
    /// Root of all group output directories.
    pub output_dir: PathBuf,
    /// Output format.
    pub format: OutputFormat,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            project_name: None,
            package_name: String::new(),
            gradle_version: HostVersion::default(),
            path_field_threshold: HostVersion::default_threshold(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            format: OutputFormat::default(),
        }
    }
}

/// One `[groups.<name>]` table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GroupConfig {
    /// Module paths, colon-delimited.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub project_paths: Vec<String>,
    /// File with one module path per line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paths_file: Option<PathBuf>,
    /// Package override.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package_name: Option<String>,
    /// Root accessor property name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accessor_name: Option<String>,
    /// Root generated type name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
    /// Documentation label override.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_name: Option<String>,
}

/// Group tables keyed by group name, iterated in sorted order.
pub type Groups = BTreeMap<String, GroupConfig>;
