// project-accessors: Type-safe project accessor generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Arguments of the `generate` and `tree` commands.
//!
//! ```text
//! generate                       every [groups.*] table
//! generate 'plugin-*' app        selected groups
//! generate --path :app --path :lib:core --package com.example
//!                                implicit `parent` group, config groups ignored
//! ```

use std::path::PathBuf;

use clap::Args;

use crate::config::types::GroupConfig;
use crate::render::OutputFormat;

/// An accessor group given entirely on the command line.
#[derive(Debug, Clone, Default, Args)]
pub struct InlineGroupArgs {
    /// Module path such as ':lib:core'. Can be specified multiple times.
    #[arg(short = 'p', long = "path", value_name = "PATH", action = clap::ArgAction::Append)]
    pub paths: Vec<String>,

    /// File with one module path per line.
    #[arg(long = "paths-file", value_name = "FILE")]
    pub paths_file: Option<PathBuf>,

    /// Package of the generated file.
    #[arg(long = "package", value_name = "PACKAGE")]
    pub package_name: Option<String>,

    /// Root accessor property name (default: projects).
    #[arg(long = "accessor-name", value_name = "NAME")]
    pub accessor_name: Option<String>,

    /// Root generated type name (default: ParentProjectAccessors).
    #[arg(long = "class-name", value_name = "NAME")]
    pub class_name: Option<String>,

    /// Project label used in documentation.
    #[arg(long = "project-name", value_name = "NAME")]
    pub project_name: Option<String>,
}

impl InlineGroupArgs {
    /// Whether any module paths were given.
    #[must_use]
    pub fn has_paths(&self) -> bool {
        !self.paths.is_empty() || self.paths_file.is_some()
    }

    /// The equivalent `[groups.parent]` table.
    #[must_use]
    pub fn to_group_config(&self) -> GroupConfig {
        GroupConfig {
            project_paths: self.paths.clone(),
            paths_file: self.paths_file.clone(),
            package_name: self.package_name.clone(),
            accessor_name: self.accessor_name.clone(),
            class_name: self.class_name.clone(),
            project_name: self.project_name.clone(),
        }
    }
}

/// Arguments for the `generate` command.
#[derive(Debug, Clone, Default, Args)]
pub struct GenerateArgs {
    /// Groups to generate. Globs like 'plugin-*' are supported.
    /// All configured groups by default.
    #[arg(value_name = "GROUP", conflicts_with_all = ["paths", "paths_file"])]
    pub groups: Vec<String>,

    /// Implicit group from the command line.
    #[command(flatten)]
    pub inline: InlineGroupArgs,

    /// Host build-tool version, e.g. 8.10.2.
    #[arg(long = "gradle-version", value_name = "VERSION")]
    pub gradle_version: Option<String>,

    /// Output directory (each group writes to a subdirectory).
    #[arg(short = 'o', long = "output", value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Output format.
    #[arg(short = 'f', long = "format", value_enum)]
    pub format: Option<OutputFormat>,

    /// Print generated files to stdout instead of writing them.
    #[arg(long)]
    pub stdout: bool,
}

impl GenerateArgs {
    /// Converts generation flags to configuration overrides.
    #[must_use]
    pub fn to_config_overrides(&self) -> Vec<String> {
        let mut overrides = Vec::new();

        if let Some(ref version) = self.gradle_version {
            overrides.push(format!("generation.gradle_version={version}"));
        }

        if let Some(ref output) = self.output {
            overrides.push(format!("generation.output_dir={}", output.display()));
        }

        if let Some(format) = self.format {
            overrides.push(format!("generation.format={format}"));
        }

        overrides
    }
}

/// Arguments for the `tree` command.
#[derive(Debug, Clone, Default, Args)]
pub struct TreeArgs {
    /// Group to show (default: the only group, or 'parent').
    #[arg(value_name = "GROUP", conflicts_with_all = ["paths", "paths_file"])]
    pub group: Option<String>,

    /// Implicit group from the command line.
    #[command(flatten)]
    pub inline: InlineGroupArgs,
}
