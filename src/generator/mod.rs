// project-accessors: Type-safe project accessor generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! One generation invocation.
//!
//! ```text
//! ProjectPathSet --> ModuleTree::build --> emit(tree, ctx) --> Generation
//!                         |                                     tree, file
//!                    TreeError                                    |
//!                                                      render(format) --> String
//! ```
//!
//! The tree is built fresh for every call and shares nothing with other calls.

use crate::emit::{GeneratedFile, GenerationContext, emit};
use crate::error::{AccessorResult, Result};
use crate::path::ProjectPathSet;
use crate::render::OutputFormat;
use crate::tree::ModuleTree;

/// Result of one invocation: the inferred tree and the emitted artifact.
#[derive(Debug, Clone)]
pub struct Generation {
    tree: ModuleTree,
    file: GeneratedFile,
}

impl Generation {
    #[must_use]
    pub const fn tree(&self) -> &ModuleTree {
        &self.tree
    }

    #[must_use]
    pub const fn file(&self) -> &GeneratedFile {
        &self.file
    }

    #[must_use]
    pub fn into_file(self) -> GeneratedFile {
        self.file
    }

    /// Render the artifact in `format`.
    ///
    /// # Errors
    ///
    /// Returns an error if the renderer fails.
    pub fn render(&self, format: OutputFormat) -> Result<String> {
        format.renderer().render(&self.file)
    }
}

/// Build the tree for `paths` and emit its accessors.
///
/// # Errors
///
/// Returns [`crate::error::AccessorError::Tree`] if two sibling modules fold
/// to the same identifier.
pub fn generate(paths: &ProjectPathSet, context: &GenerationContext) -> AccessorResult<Generation> {
    let tree = ModuleTree::build(paths)?;
    let file = emit(&tree, context);
    Ok(Generation { tree, file })
}

/// Parse raw path strings, then [`generate`].
///
/// # Errors
///
/// Returns [`crate::error::AccessorError::Path`] for malformed paths, or any
/// error of [`generate`].
pub fn generate_from_strings<I, S>(raw: I, context: &GenerationContext) -> AccessorResult<Generation>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let paths = ProjectPathSet::parse(raw)?;
    generate(&paths, context)
}
