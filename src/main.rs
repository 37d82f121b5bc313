// project-accessors: Type-safe project accessor generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Config --> Logging --> Command Dispatch
//!   Generate | Tree | Groups | Options | Configs | Version
//! ```

use std::process::ExitCode;

use project_accessors::cli::{self, Cli, Command};
use project_accessors::cmd::config::{run_configs_command, run_options_command};
use project_accessors::cmd::generate::{run_generate_command, run_tree_command};
use project_accessors::cmd::groups::run_groups_command;
use project_accessors::config::loader::ConfigLoader;
use project_accessors::config::{Config, DEFAULT_CONFIG_FILE, ENV_PREFIX};
use project_accessors::logging::LogConfig;
use project_accessors::logging::init_logging;

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn main() -> ExitCode {
    let cli = cli::parse();

    if matches!(cli.command, Some(Command::Version)) {
        handle_version_command();
        return ExitCode::SUCCESS;
    }

    let loader = match build_config_loader(&cli) {
        Ok(loader) => loader,
        Err(e) => {
            eprintln!("Error: {e:#}");
            return ExitCode::FAILURE;
        }
    };
    let loaded_files = loader.format_loaded_files();
    let config = match loader.build() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    let log_config = LogConfig::from(&config.global);
    let _log_guard = match init_logging(&log_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    dispatch_command(&cli, &config, &loaded_files)
}

fn dispatch_command(cli: &Cli, config: &Config, loaded_files: &[String]) -> ExitCode {
    let result = match &cli.command {
        Some(Command::Version) => {
            handle_version_command();
            Ok(())
        }
        Some(Command::Options) => {
            run_options_command(config);
            Ok(())
        }
        Some(Command::Configs) => {
            run_configs_command(loaded_files);
            Ok(())
        }
        Some(Command::Groups) => run_groups_command(config),
        Some(Command::Generate(args)) => run_generate_command(args, config),
        Some(Command::Tree(args)) => run_tree_command(args, config),
        None => {
            eprintln!("No command specified. Use --help for usage information.");
            Err(anyhow::anyhow!("No command specified"))
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "Command failed");
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn handle_version_command() {
    println!("{}", env!("CARGO_PKG_VERSION"));
}

/// Layers: project-accessors.toml, --config files, env, then CLI overrides.
fn build_config_loader(cli: &Cli) -> project_accessors::error::Result<ConfigLoader> {
    let global = &cli.global;
    let mut loader = ConfigLoader::new();
    if !global.no_default_config {
        loader = loader.add_toml_file_optional(DEFAULT_CONFIG_FILE);
    }
    for config_path in &global.configs {
        loader = loader.add_toml_file(config_path);
    }
    loader = loader.with_env_prefix(ENV_PREFIX);

    let command_overrides = cli
        .command
        .as_ref()
        .map(Command::to_config_overrides)
        .unwrap_or_default();
    for option in global.to_config_overrides().iter().chain(&command_overrides) {
        loader = loader.set_option(option)?;
    }
    Ok(loader)
}
