// project-accessors: Type-safe project accessor generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Identifier derivation for path segments.
//!
//! ```text
//! "some-module" --fold--> "someModule"         (accessor)
//!               --cap---> "SomeModule" + "Project" (type)
//! ```
//!
//! `-` or `_` followed by a lowercase letter is dropped and the letter
//! uppercased. Uniqueness is the tree's job, not this module's.

use std::sync::OnceLock;

use regex::{Captures, Regex};

/// Suffix appended to every generated module type.
pub const TYPE_SUFFIX: &str = "Project";

/// Suffix of the default root type of an accessor group.
pub const ROOT_TYPE_SUFFIX: &str = "ProjectAccessors";

/// Identifiers derived from one raw segment name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedNames {
    /// Lower-initial property name, e.g. `someModule`.
    pub accessor: String,
    /// Upper-initial type name, e.g. `SomeModuleProject`.
    pub type_name: String,
}

fn camel_case_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"[-_]([a-z])").expect("literal pattern is valid"))
}

/// Fold kebab-case and snake_case separators into camelCase.
#[must_use]
pub fn to_accessor_name(raw: &str) -> String {
    camel_case_pattern()
        .replace_all(raw, |caps: &Captures<'_>| caps[1].to_ascii_uppercase())
        .into_owned()
}

/// Uppercase the first character of `name`.
#[must_use]
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

/// Type name for an already folded accessor name.
#[must_use]
pub fn to_type_name(accessor: &str) -> String {
    format!("{}{TYPE_SUFFIX}", capitalize(accessor))
}

/// Derive both identifiers for a raw segment.
#[must_use]
pub fn derive_names(raw: &str) -> DerivedNames {
    let accessor = to_accessor_name(raw);
    let type_name = to_type_name(&accessor);
    DerivedNames {
        accessor,
        type_name,
    }
}

/// Default root type of an accessor group: `parent` -> `ParentProjectAccessors`.
///
/// Group names fold like segments, so `build-logic` -> `BuildLogicProjectAccessors`.
#[must_use]
pub fn root_type_name(group: &str) -> String {
    format!("{}{ROOT_TYPE_SUFFIX}", capitalize(&to_accessor_name(group)))
}

/// Build task name of an accessor group: `parent` -> `generateParentProjectAccessors`.
#[must_use]
pub fn task_name(group: &str) -> String {
    format!("generate{}", root_type_name(group))
}

#[cfg(test)]
mod tests;
