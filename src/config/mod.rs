// project-accessors: Type-safe project accessor generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. local project-accessors.toml (cwd)
//! 3. --config
//! 4. ACCESSORS_* env vars
//! 5. CLI overrides (--set, dedicated flags)
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! ACCESSORS_GLOBAL__DRY=true                 → global.dry = true
//! ACCESSORS_GENERATION__GRADLE_VERSION=8.10  → generation.gradle_version = "8.10"
//! ACCESSORS_GROUPS__APP__ACCESSOR_NAME=apps  → groups.app.accessor_name = "apps"
//! ```
//!
//! # Groups
//!
//! ```toml
//! [generation]
//! package_name = "com.example"
//!
//! [groups.parent]
//! project_paths = [":", ":app", ":lib:core"]
//!
//! [groups.plugins]
//! paths_file = "plugins.txt"
//! accessor_name = "plugins"
//! ```

pub mod loader;
pub mod types;


use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::error::Result;

use loader::ConfigLoader;
use types::{GenerationConfig, GlobalConfig, Groups};

/// File name of the optional configuration in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "project-accessors.toml";

/// Prefix of configuration environment variables.
pub const ENV_PREFIX: &str = "ACCESSORS";

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Global options.
    pub global: GlobalConfig,
    /// Defaults for every group.
    pub generation: GenerationConfig,
    /// Accessor groups.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub groups: Groups,
}

impl Config {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use project_accessors::config::Config;
    ///
    /// let config = Config::builder()
    ///     .add_toml_file("config/accessors.toml")
    ///     .add_toml_file_optional("project-accessors.toml")
    ///     .with_env_prefix("ACCESSORS")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a single TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid TOML, or
    /// does not match the `Config` structure.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::builder().add_toml_file(path).build()
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match the
    /// `Config` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Format configuration options for display.
    ///
    /// Output is deterministically ordered using `BTreeMap`.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let mut options = BTreeMap::new();
        self.format_global_options(&mut options);
        self.format_generation_options(&mut options);
        self.format_group_options(&mut options);

        let max_key_len = options.keys().map(String::len).max().unwrap_or(0);

        options
            .into_iter()
            .map(|(key, value)| format!("{key:<max_key_len$} = {value}"))
            .collect()
    }

    fn format_global_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert("global.dry".into(), self.global.dry.to_string());
        options.insert(
            "global.output_log_level".into(),
            self.global.output_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.file_log_level".into(),
            self.global.file_log_level.as_u8().to_string(),
        );
        if let Some(log_file) = &self.global.log_file {
            options.insert("global.log_file".into(), log_file.display().to_string());
        }
    }

    fn format_generation_options(&self, options: &mut BTreeMap<String, String>) {
        let generation = &self.generation;
        if let Some(project_name) = &generation.project_name {
            options.insert("generation.project_name".into(), project_name.clone());
        }
        options.insert(
            "generation.package_name".into(),
            generation.package_name.clone(),
        );
        options.insert(
            "generation.gradle_version".into(),
            generation.gradle_version.to_string(),
        );
        options.insert(
            "generation.path_field_threshold".into(),
            generation.path_field_threshold.to_string(),
        );
        options.insert(
            "generation.output_dir".into(),
            generation.output_dir.display().to_string(),
        );
        options.insert("generation.format".into(), generation.format.to_string());
    }

    fn format_group_options(&self, options: &mut BTreeMap<String, String>) {
        for (name, group) in &self.groups {
            let key = |field: &str| format!("groups.{name}.{field}");
            if !group.project_paths.is_empty() {
                options.insert(key("project_paths"), group.project_paths.join(", "));
            }
            if let Some(file) = &group.paths_file {
                options.insert(key("paths_file"), file.display().to_string());
            }
            let optional = [
                ("package_name", &group.package_name),
                ("accessor_name", &group.accessor_name),
                ("class_name", &group.class_name),
                ("project_name", &group.project_name),
            ];
            for (field, value) in optional {
                if let Some(value) = value {
                    options.insert(key(field), value.clone());
                }
            }
        }
    }
}
