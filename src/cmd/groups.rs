// project-accessors: Type-safe project accessor generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Groups command implementation.

use crate::config::Config;
use crate::error::Result;
use crate::group::GroupRegistry;

/// List configured accessor groups.
///
/// # Errors
///
/// Returns an error if a group cannot be resolved or two groups share an
/// accessor identity.
pub fn run_groups_command(config: &Config) -> Result<()> {
    let registry = GroupRegistry::from_config(config)?;
    if registry.is_empty() {
        println!("No accessor groups configured");
    } else {
        for line in registry.format_groups() {
            println!("{line}");
        }
    }
    Ok(())
}
