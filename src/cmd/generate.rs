// project-accessors: Type-safe project accessor generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Generate and tree command implementations.

use anyhow::Context;
use tracing::{debug, info, info_span};

use crate::cli::generate::{GenerateArgs, InlineGroupArgs, TreeArgs};
use crate::config::Config;
use crate::error::{GroupError, Result};
use crate::group::{AccessorGroup, GroupRegistry, PARENT_GROUP};
use crate::output::OutputWriter;

/// Groups to work on: the implicit `parent` group when paths were given on
/// the command line, the configured groups otherwise.
///
/// # Errors
///
/// Returns an error if a group cannot be resolved or two groups share an
/// accessor identity.
pub fn resolve_registry(inline: &InlineGroupArgs, config: &Config) -> Result<GroupRegistry> {
    if inline.has_paths() {
        let group =
            AccessorGroup::resolve(PARENT_GROUP, &inline.to_group_config(), &config.generation)?;
        return Ok(GroupRegistry::new([group])?);
    }
    GroupRegistry::from_config(config)
}

/// Main handler for generate command.
///
/// Every selected group is generated before anything is written.
///
/// # Errors
///
/// Returns an error if group resolution, generation or writing fails.
pub fn run_generate_command(args: &GenerateArgs, config: &Config) -> Result<()> {
    let registry = resolve_registry(&args.inline, config)?;
    let selected = registry.select(&args.groups)?;
    let format = config.generation.format;

    info!(groups = selected.len(), %format, "Generating project accessors");

    let mut generations = Vec::with_capacity(selected.len());
    for group in selected {
        let _span = info_span!("group", name = %group.name()).entered();
        let generation = group.generate().with_context(|| {
            format!("failed to generate accessors for group '{}'", group.name())
        })?;
        debug!(
            modules = generation.tree().len(),
            types = generation.file().type_count(),
            "Built module tree"
        );
        generations.push((group, generation));
    }

    if args.stdout {
        for (_, generation) in &generations {
            print!("{}", generation.render(format)?);
        }
        return Ok(());
    }

    let writer =
        OutputWriter::new(&config.generation.output_dir).with_dry_run(config.global.dry);
    for (group, generation) in &generations {
        writer
            .write(group.name(), generation.file(), format)
            .with_context(|| format!("failed to write accessors for group '{}'", group.name()))?;
    }
    Ok(())
}

/// Main handler for tree command.
///
/// # Errors
///
/// Returns an error if the group does not exist or its tree cannot be built.
pub fn run_tree_command(args: &TreeArgs, config: &Config) -> Result<()> {
    let registry = resolve_registry(&args.inline, config)?;
    let group = match &args.group {
        Some(name) => registry
            .get(name)
            .ok_or_else(|| GroupError::NotFound(name.clone()))?,
        None => registry.default_group()?,
    };

    let generation = group.generate()?;
    let context = group.context();
    for line in generation
        .tree()
        .format_outline(context.accessor_name(), context.class_name())
    {
        println!("{line}");
    }
    Ok(())
}
