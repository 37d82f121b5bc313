// project-accessors: Type-safe project accessor generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! project-accessors [global options] <command>
//! generate [groups...]
//! tree [group]
//! groups
//! options
//! configs
//! version
//! ```

pub mod generate;
pub mod global;


use crate::cli::generate::{GenerateArgs, TreeArgs};
use crate::cli::global::GlobalOptions;
use clap::{Parser, Subcommand};

/// Type-safe project accessor generator
///
/// Generates typed accessors that mirror the module hierarchy of a
/// multi-module build.
#[derive(Debug, Parser)]
#[command(
    name = "project-accessors",
    author,
    version,
    about = "Type-safe project accessor generator",
    long_about = "project-accessors Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Generates typed accessors that mirror the module hierarchy of a\n\
                  multi-module build.\n\n\
                  Invoking `project-accessors generate` generates every group of\n\
                  the configuration. Do `project-accessors generate --path :app`\n\
                  to generate from paths given on the command line. See\n\
                  `project-accessors <command> --help` for more information.",
    after_help = "CONFIG FILES:\n\n\
                  By default, project-accessors loads `project-accessors.toml` from\n\
                  the current directory if it exists. Additional files can be given\n\
                  with --config, those are loaded after it and override it. Use\n\
                  --no-default-config to only use --config. ACCESSORS_* environment\n\
                  variables and --set override all files."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    #[command(visible_alias = "-v")]
    Version,

    /// Lists all options and their values from the config files.
    Options,

    /// Lists the config files used.
    Configs,

    /// Lists accessor groups with their accessors and task names.
    Groups,

    /// Generates accessors.
    Generate(GenerateArgs),

    /// Prints the inferred module tree of a group.
    Tree(TreeArgs),
}

impl Command {
    /// Configuration overrides contributed by command flags.
    #[must_use]
    pub fn to_config_overrides(&self) -> Vec<String> {
        match self {
            Self::Generate(args) => args.to_config_overrides(),
            _ => Vec::new(),
        }
    }
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// Parses command-line arguments from an iterator.
pub fn parse_from<I, T>(iter: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::parse_from(iter)
}

/// Tries to parse command-line arguments, returning an error on failure.
///
/// # Errors
///
/// Returns a `clap::Error` if the arguments are invalid or if help/version information
/// was requested.
pub fn try_parse() -> Result<Cli, clap::Error> {
    Cli::try_parse()
}
