// project-accessors: Type-safe project accessor generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Accessor groups: one generation invocation each.
//!
//! ```text
//! [groups.parent]   --resolve-->  AccessorGroup { paths, GenerationContext }
//! [groups.plugins]  --resolve-->  AccessorGroup { ... }
//!                                        |
//!                                 GroupRegistry::new
//!                                 (package, accessor) unique?
//!                                        |
//!                          select(["plug*"]) --> [&AccessorGroup]
//! ```
//!
//! Defaults:
//!
//! ```text
//! accessor_name  required, "projects" for the group named "parent"
//! class_name     {Name}ProjectAccessors
//! package_name   generation.package_name
//! project_name   generation.project_name, else the group name
//! ```

use std::collections::{BTreeSet, HashMap};
use std::fmt;
use std::path::Path;

use anyhow::Context;
use tracing::{debug, warn};
use wax::{Glob, Program};

use crate::config::Config;
use crate::config::types::{GenerationConfig, GroupConfig};
use crate::emit::{DEFAULT_ACCESSOR_NAME, GenerationContext};
use crate::error::{AccessorResult, ConfigError, GroupError, Result};
use crate::generator::{self, Generation};
use crate::naming;
use crate::path::ProjectPathSet;

/// Name of the group whose accessor defaults to `projects`.
pub const PARENT_GROUP: &str = "parent";

/// The `(package, accessor)` pair that must be unique across groups.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identity {
    package: String,
    accessor: String,
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.package.is_empty() {
            f.write_str(&self.accessor)
        } else {
            write!(f, "{}.{}", self.package, self.accessor)
        }
    }
}

/// A named set of module paths with its own generation context.
#[derive(Debug, Clone)]
pub struct AccessorGroup {
    name: String,
    paths: ProjectPathSet,
    context: GenerationContext,
}

impl AccessorGroup {
    #[must_use]
    pub fn new(name: impl Into<String>, paths: ProjectPathSet, context: GenerationContext) -> Self {
        Self {
            name: name.into(),
            paths,
            context,
        }
    }

    /// Resolve a `[groups.<name>]` table against the `[generation]` defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if `accessor_name` is missing on a group other than
    /// `parent`, if the paths file cannot be read, or if a path is malformed.
    pub fn resolve(name: &str, group: &GroupConfig, generation: &GenerationConfig) -> Result<Self> {
        let accessor_name = match &group.accessor_name {
            Some(accessor) => accessor.clone(),
            None if name == PARENT_GROUP => DEFAULT_ACCESSOR_NAME.to_string(),
            None => {
                return Err(ConfigError::MissingKey {
                    section: format!("groups.{name}"),
                    key: "accessor_name".to_string(),
                }
                .into());
            }
        };

        let mut raw = group.project_paths.clone();
        if let Some(file) = &group.paths_file {
            raw.extend(read_paths_file(file)?);
        }
        let paths = ProjectPathSet::parse(&raw)
            .with_context(|| format!("invalid project path in group '{name}'"))?;

        let context = GenerationContext::builder()
            .project_name(
                group
                    .project_name
                    .clone()
                    .or_else(|| generation.project_name.clone())
                    .unwrap_or_else(|| name.to_string()),
            )
            .package_name(
                group
                    .package_name
                    .clone()
                    .unwrap_or_else(|| generation.package_name.clone()),
            )
            .accessor_name(accessor_name)
            .class_name(
                group
                    .class_name
                    .clone()
                    .unwrap_or_else(|| naming::root_type_name(name)),
            )
            .host_version(generation.gradle_version.clone())
            .path_field_threshold(generation.path_field_threshold.clone())
            .build();

        debug!(group = %name, paths = paths.len(), "resolved accessor group");
        Ok(Self::new(name, paths, context))
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn paths(&self) -> &ProjectPathSet {
        &self.paths
    }

    #[must_use]
    pub const fn context(&self) -> &GenerationContext {
        &self.context
    }

    #[must_use]
    pub fn identity(&self) -> Identity {
        Identity {
            package: self.context.package_name().to_string(),
            accessor: self.context.accessor_name().to_string(),
        }
    }

    /// Name of the equivalent build task, e.g. `generateParentProjectAccessors`.
    #[must_use]
    pub fn task_name(&self) -> String {
        naming::task_name(&self.name)
    }

    /// Build this group's tree and emit its accessors.
    ///
    /// # Errors
    ///
    /// Returns an error if two sibling modules fold to the same identifier.
    pub fn generate(&self) -> AccessorResult<Generation> {
        generator::generate(&self.paths, &self.context)
    }
}

/// Read one module path per line; blank lines and `#` comments are skipped.
///
/// # Errors
///
/// Returns [`ConfigError::ReadError`] if the file cannot be read.
pub fn read_paths_file(path: &Path) -> Result<Vec<String>> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadError {
        path: path.display().to_string(),
        source,
    })?;
    Ok(parse_paths_list(&content))
}

/// Split a paths list into entries.
#[must_use]
pub fn parse_paths_list(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

/// Fail if two groups share an [`Identity`].
///
/// # Errors
///
/// Returns [`GroupError::DuplicateAccessor`] naming the identity and both groups.
pub fn validate_unique(groups: &[AccessorGroup]) -> std::result::Result<(), GroupError> {
    let mut seen: HashMap<Identity, &str> = HashMap::with_capacity(groups.len());
    for group in groups {
        let identity = group.identity();
        if let Some(first) = seen.get(&identity) {
            return Err(GroupError::DuplicateAccessor {
                identity: identity.to_string(),
                first: (*first).to_string(),
                second: group.name.clone(),
            });
        }
        seen.insert(identity, &group.name);
    }
    Ok(())
}

/// Validated accessor groups in name order.
#[derive(Debug, Clone, Default)]
pub struct GroupRegistry {
    groups: Vec<AccessorGroup>,
}

impl GroupRegistry {
    /// Sort `groups` by name and check identities.
    ///
    /// # Errors
    ///
    /// Returns [`GroupError::DuplicateAccessor`] if two groups share an identity.
    pub fn new(
        groups: impl IntoIterator<Item = AccessorGroup>,
    ) -> std::result::Result<Self, GroupError> {
        let mut groups: Vec<_> = groups.into_iter().collect();
        groups.sort_by(|a, b| a.name.cmp(&b.name));
        validate_unique(&groups)?;
        Ok(Self { groups })
    }

    /// Resolve and validate every `[groups.*]` table.
    ///
    /// # Errors
    ///
    /// Returns the first resolution error, or a duplicate identity error.
    pub fn from_config(config: &Config) -> Result<Self> {
        let groups = config
            .groups
            .iter()
            .map(|(name, group)| AccessorGroup::resolve(name, group, &config.generation))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::new(groups)?)
    }

    #[must_use]
    pub fn groups(&self) -> &[AccessorGroup] {
        &self.groups
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&AccessorGroup> {
        self.groups.iter().find(|group| group.name == name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// One aligned line per group: identity, root type, task name, path count.
    #[must_use]
    pub fn format_groups(&self) -> Vec<String> {
        let width = self.groups.iter().map(|g| g.name.len()).max().unwrap_or(0);
        self.groups
            .iter()
            .map(|group| {
                format!(
                    "{:<width$}  {}: {}  {}  ({} paths)",
                    group.name,
                    group.identity(),
                    group.context.class_name(),
                    group.task_name(),
                    group.paths.len()
                )
            })
            .collect()
    }

    /// The group `tree` shows when none is named: the only one, else `parent`.
    ///
    /// # Errors
    ///
    /// Returns [`GroupError::NoGroups`] for an empty registry, or
    /// [`GroupError::NotFound`] if several groups exist and none is `parent`.
    pub fn default_group(&self) -> std::result::Result<&AccessorGroup, GroupError> {
        match self.groups.as_slice() {
            [] => Err(GroupError::NoGroups),
            [only] => Ok(only),
            _ => self
                .get(PARENT_GROUP)
                .ok_or_else(|| GroupError::NotFound(PARENT_GROUP.to_string())),
        }
    }

    /// Select groups by exact name or glob; no patterns selects all.
    ///
    /// Results keep pattern order and are deduplicated.
    ///
    /// # Errors
    ///
    /// Returns an error if a pattern is not a valid glob or matches no group.
    pub fn select(&self, patterns: &[String]) -> Result<Vec<&AccessorGroup>> {
        if patterns.is_empty() {
            if self.groups.is_empty() {
                return Err(GroupError::NoGroups.into());
            }
            return Ok(self.groups.iter().collect());
        }

        let mut selected = Vec::new();
        let mut seen = BTreeSet::new();
        for pattern in patterns {
            let matches: Vec<&AccessorGroup> = if let Some(group) = self.get(pattern) {
                vec![group]
            } else {
                let glob = Glob::new(pattern)
                    .with_context(|| format!("Invalid glob pattern: {pattern}"))?;
                self.groups
                    .iter()
                    .filter(|group| glob.is_match(group.name.as_str()))
                    .collect()
            };

            if matches.is_empty() {
                warn!(pattern = %pattern, "Pattern matched no groups");
                return Err(GroupError::NotFound(pattern.clone()).into());
            }

            for group in matches {
                if seen.insert(group.name.as_str()) {
                    selected.push(group);
                }
            }
        }
        Ok(selected)
    }
}
