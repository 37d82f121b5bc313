// project-accessors: Type-safe project accessor generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Accessor emission: [`ModuleTree`] + [`GenerationContext`] -> [`GeneratedFile`].
//!
//! ```text
//! Project.projects ----------------> ProjectsAccessors      (root, Declared)
//!                                      path?               (version gated)
//!                                      module1 -> Module1Project   (Declared)
//!                                      module2 -> Module2Project   (Synthetic)
//!                                                   path            (always)
//!                                                   sub -> SubProject ...
//! ```
//!
//! The artifact is plain data; [`crate::render`] turns it into source text.
//! Declared and synthetic types are distinct variants so that only the
//! declared one carries the [`ModuleReference`] capability.

use bon::Builder;
use serde::Serialize;

use crate::path::ModulePath;
use crate::tree::{ModuleTree, NodeId};
use crate::version::HostVersion;

/// Root accessor property name of the implicit `parent` group.
pub const DEFAULT_ACCESSOR_NAME: &str = "projects";

/// Type that receives the root accessor property.
pub const DEFAULT_RECEIVER: &str = "org.gradle.api.Project";

/// Immutable configuration of one generation invocation.
#[derive(Debug, Clone, PartialEq, Eq, Builder, Serialize)]
pub struct GenerationContext {
    /// Owning project label, documentation only.
    #[builder(into)]
    project_name: String,
    /// Output namespace, used verbatim.
    #[builder(into, default)]
    package_name: String,
    /// Root accessor property name.
    #[builder(into, default = DEFAULT_ACCESSOR_NAME.to_string())]
    accessor_name: String,
    /// Root generated type name.
    #[builder(into)]
    class_name: String,
    /// Fully qualified receiver type of the root accessor.
    #[builder(into, default = DEFAULT_RECEIVER.to_string())]
    receiver: String,
    /// Host build-tool version.
    #[builder(default)]
    host_version: HostVersion,
    /// Declared modules get a `path` field on hosts older than this.
    #[builder(default)]
    path_field_threshold: HostVersion,
}

impl GenerationContext {
    #[must_use]
    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    #[must_use]
    pub fn package_name(&self) -> &str {
        &self.package_name
    }

    #[must_use]
    pub fn accessor_name(&self) -> &str {
        &self.accessor_name
    }

    #[must_use]
    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    #[must_use]
    pub fn receiver(&self) -> &str {
        &self.receiver
    }

    #[must_use]
    pub const fn host_version(&self) -> &HostVersion {
        &self.host_version
    }

    #[must_use]
    pub const fn path_field_threshold(&self) -> &HostVersion {
        &self.path_field_threshold
    }

    /// Whether declared modules need an explicit `path` field.
    ///
    /// Older hosts cannot derive the path from the module reference alone.
    #[must_use]
    pub fn declared_path_field(&self) -> bool {
        self.host_version < self.path_field_threshold
    }
}

/// A read-only property returning a generated type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccessorProperty {
    pub name: String,
    pub type_name: String,
    pub doc: Vec<String>,
}

/// The textual `path` field of a generated type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathField {
    pub value: String,
    pub doc: Vec<String>,
}

/// Members shared by both kinds of generated type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeBody {
    pub name: String,
    pub path: ModulePath,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path_field: Option<PathField>,
    pub accessors: Vec<AccessorProperty>,
    pub nested: Vec<ModuleType>,
}

impl TypeBody {
    /// No members at all; renderers may omit the body braces.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.path_field.is_none() && self.accessors.is_empty() && self.nested.is_empty()
    }
}

/// Capability of types usable directly wherever a module reference is expected.
pub trait ModuleReference {
    /// Path of the referenced module.
    fn module_path(&self) -> &ModulePath;
}

/// Generated type of a declared module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeclaredModule {
    #[serde(flatten)]
    pub body: TypeBody,
}

impl ModuleReference for DeclaredModule {
    fn module_path(&self) -> &ModulePath {
        &self.body.path
    }
}

/// Generated type of a synthetic intermediate node. Data only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SyntheticModule {
    #[serde(flatten)]
    pub body: TypeBody,
}

/// One generated type per tree node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ModuleType {
    Declared(DeclaredModule),
    Synthetic(SyntheticModule),
}

impl ModuleType {
    #[must_use]
    pub const fn body(&self) -> &TypeBody {
        match self {
            Self::Declared(module) => &module.body,
            Self::Synthetic(module) => &module.body,
        }
    }

    /// The module-reference capability, declared modules only.
    #[must_use]
    pub fn as_module_reference(&self) -> Option<&dyn ModuleReference> {
        match self {
            Self::Declared(module) => Some(module),
            Self::Synthetic(_) => None,
        }
    }

    #[must_use]
    pub const fn is_declared(&self) -> bool {
        matches!(self, Self::Declared(_))
    }

    /// This type and all nested types, pre-order.
    #[must_use]
    pub fn walk(&self) -> Vec<&Self> {
        let mut out = Vec::new();
        let mut stack = vec![self];
        while let Some(ty) = stack.pop() {
            out.push(ty);
            stack.extend(ty.body().nested.iter().rev());
        }
        out
    }
}

/// One compilation unit: the root accessor plus the nested type tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedFile {
    pub package: String,
    pub receiver: String,
    pub root_accessor: AccessorProperty,
    pub root_type: ModuleType,
}

impl GeneratedFile {
    /// Name of the root generated type, which also names the file.
    #[must_use]
    pub fn type_name(&self) -> &str {
        &self.root_type.body().name
    }

    /// Number of generated types.
    #[must_use]
    pub fn type_count(&self) -> usize {
        self.root_type.walk().len()
    }

    #[must_use]
    pub fn has_path_fields(&self) -> bool {
        self.root_type
            .walk()
            .iter()
            .any(|ty| ty.body().path_field.is_some())
    }

    #[must_use]
    pub fn has_module_references(&self) -> bool {
        self.root_type.walk().iter().any(|ty| ty.is_declared())
    }

    /// Find the generated type for a module path.
    #[must_use]
    pub fn find(&self, path: &ModulePath) -> Option<&ModuleType> {
        self.root_type
            .walk()
            .into_iter()
            .find(|ty| &ty.body().path == path)
    }
}

/// Render `tree` into a [`GeneratedFile`].
///
/// Never fails for a tree produced by [`ModuleTree::build`].
#[must_use]
pub fn emit(tree: &ModuleTree, context: &GenerationContext) -> GeneratedFile {
    let root_accessor = AccessorProperty {
        name: context.accessor_name().to_string(),
        type_name: context.class_name().to_string(),
        doc: vec![format!(
            "Returns the project dependencies for the {} project.",
            context.project_name()
        )],
    };

    GeneratedFile {
        package: context.package_name().to_string(),
        receiver: context.receiver().to_string(),
        root_accessor,
        root_type: emit_type(tree, NodeId::ROOT, context),
    }
}

fn emit_type(tree: &ModuleTree, id: NodeId, context: &GenerationContext) -> ModuleType {
    let node = tree.node(id);
    let name = if id == NodeId::ROOT {
        context.class_name()
    } else {
        node.type_name()
    };
    let declared = node.is_declared();

    let path_field = (!declared || context.declared_path_field()).then(|| {
        let mut doc = vec!["Returns the path to the project as a string.".to_string()];
        if !declared {
            doc.push(String::new());
            doc.push(format!(
                "Please note that \"{}\" is not a declared project so this path cannot be \
                 used as a dependency, this accessor is here for convenience.",
                node.path()
            ));
        }
        PathField {
            value: node.path().to_string(),
            doc,
        }
    });

    let accessors = tree
        .children(id)
        .map(|(_, child)| {
            let doc = if child.is_declared() {
                format!(
                    "Creates a project dependency on the project at path \"{}\"",
                    child.path()
                )
            } else {
                format!(
                    "Returns the accessors for the projects below path \"{}\"",
                    child.path()
                )
            };
            AccessorProperty {
                name: child.accessor_name().to_string(),
                type_name: child.type_name().to_string(),
                doc: vec![doc],
            }
        })
        .collect();

    let nested = tree
        .children(id)
        .map(|(child, _)| emit_type(tree, child, context))
        .collect();

    let body = TypeBody {
        name: name.to_string(),
        path: node.path().clone(),
        path_field,
        accessors,
        nested,
    };

    if declared {
        ModuleType::Declared(DeclaredModule { body })
    } else {
        ModuleType::Synthetic(SyntheticModule { body })
    }
}

#[cfg(test)]
mod tests;
