// project-accessors: Type-safe project accessor generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Module tree built from a flat path set.
//!
//! ```text
//! {":", ":a", ":b:c"}
//!
//!   nodes[0]  :      root   Declared
//!   nodes[1]  :a     a      Declared
//!   nodes[2]  :b     b      Synthetic   (only an ancestor of :b:c)
//!   nodes[3]  :b:c   c      Declared
//! ```
//!
//! Nodes live in an arena and refer to their children by [`NodeId`].
//! Children keep first-encounter order.

use std::collections::HashMap;

use crate::error::TreeError;
use crate::naming::{self, DerivedNames};
use crate::path::{ModulePath, ProjectPathSet};

/// Name of the root node.
pub const ROOT_NAME: &str = "root";

/// Members of every generated type: the `path` field and the `project`
/// constructor property. No child accessor may take these names.
pub const RESERVED_ACCESSORS: [&str; 2] = ["path", "project"];

/// Index of a node inside its [`ModuleTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

impl NodeId {
    /// The root node of every tree.
    pub const ROOT: Self = Self(0);

    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// Whether a node's exact path was present in the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModuleKind {
    /// Listed in the input set.
    Declared,
    /// Only exists as an ancestor of a declared path.
    Synthetic,
}

/// One path in the tree.
#[derive(Debug, Clone)]
pub struct ModuleNode {
    path: ModulePath,
    name: String,
    names: DerivedNames,
    kind: ModuleKind,
    children: Vec<NodeId>,
    by_name: HashMap<String, NodeId>,
    by_accessor: HashMap<String, NodeId>,
    by_type: HashMap<String, NodeId>,
}

impl ModuleNode {
    fn new(path: ModulePath, name: String, kind: ModuleKind) -> Self {
        let names = naming::derive_names(&name);
        Self {
            path,
            name,
            names,
            kind,
            children: Vec::new(),
            by_name: HashMap::new(),
            by_accessor: HashMap::new(),
            by_type: HashMap::new(),
        }
    }

    #[must_use]
    pub const fn path(&self) -> &ModulePath {
        &self.path
    }

    /// Raw segment name, [`ROOT_NAME`] for the root.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn accessor_name(&self) -> &str {
        &self.names.accessor
    }

    #[must_use]
    pub fn type_name(&self) -> &str {
        &self.names.type_name
    }

    #[must_use]
    pub const fn kind(&self) -> ModuleKind {
        self.kind
    }

    #[must_use]
    pub fn is_declared(&self) -> bool {
        self.kind == ModuleKind::Declared
    }

    /// Children in first-encounter order.
    #[must_use]
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Child with the given raw segment name.
    #[must_use]
    pub fn child(&self, name: &str) -> Option<NodeId> {
        self.by_name.get(name).copied()
    }
}

/// Arena-backed module tree. The root is always present and declared.
#[derive(Debug, Clone)]
pub struct ModuleTree {
    nodes: Vec<ModuleNode>,
}

impl Default for ModuleTree {
    fn default() -> Self {
        Self::new()
    }
}

impl ModuleTree {
    /// A tree holding only the root.
    #[must_use]
    pub fn new() -> Self {
        let root = ModuleNode::new(
            ModulePath::root(),
            ROOT_NAME.to_string(),
            ModuleKind::Declared,
        );
        Self { nodes: vec![root] }
    }

    /// Build a tree from a set of paths.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::NameCollision`] if two sibling segments fold to
    /// the same accessor or type name, or [`TreeError::ReservedName`] if a
    /// segment folds to one of [`RESERVED_ACCESSORS`].
    pub fn build(paths: &ProjectPathSet) -> Result<Self, TreeError> {
        let mut tree = Self::new();
        for path in paths {
            tree.insert(path)?;
        }
        Ok(tree)
    }

    /// Insert one path, creating synthetic ancestors as needed, and mark
    /// its node declared. Inserting the same path twice is harmless.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::NameCollision`] if a new child would share its
    /// accessor or type name with an existing sibling, or
    /// [`TreeError::ReservedName`] if it would take a reserved member name.
    pub fn insert(&mut self, path: &ModulePath) -> Result<NodeId, TreeError> {
        self.descend(path, NodeId::ROOT)
    }

    fn descend(&mut self, target: &ModulePath, from: NodeId) -> Result<NodeId, TreeError> {
        let mut current = from;
        loop {
            let node = &self.nodes[current.0];
            if node.path == *target {
                self.nodes[current.0].kind = ModuleKind::Declared;
                return Ok(current);
            }
            if !node.path.is_strict_prefix_of(target) {
                return Err(TreeError::PrefixViolation {
                    path: target.to_string(),
                    prefix: node.path.to_string(),
                });
            }

            let segment = &target.segments()[node.path.len()];
            current = match node.child(segment) {
                Some(child) => child,
                None => self.attach(current, segment)?,
            };
        }
    }

    fn attach(&mut self, parent: NodeId, segment: &str) -> Result<NodeId, TreeError> {
        let id = NodeId(self.nodes.len());
        let child = ModuleNode::new(
            self.nodes[parent.0].path.child(segment),
            segment.to_string(),
            ModuleKind::Synthetic,
        );

        let parent_node = &self.nodes[parent.0];
        if RESERVED_ACCESSORS.contains(&child.accessor_name()) {
            return Err(TreeError::ReservedName {
                parent: parent_node.path.to_string(),
                name: child.name.clone(),
                identifier: child.accessor_name().to_string(),
            });
        }
        let clash = parent_node
            .by_accessor
            .get(child.accessor_name())
            .map(|&existing| (existing, child.accessor_name()))
            .or_else(|| {
                parent_node
                    .by_type
                    .get(child.type_name())
                    .map(|&existing| (existing, child.type_name()))
            });
        if let Some((existing, identifier)) = clash {
            return Err(TreeError::NameCollision {
                parent: parent_node.path.to_string(),
                first: self.nodes[existing.0].name.clone(),
                second: child.name.clone(),
                identifier: identifier.to_string(),
            });
        }

        let parent_node = &mut self.nodes[parent.0];
        parent_node.children.push(id);
        parent_node.by_name.insert(child.name.clone(), id);
        parent_node
            .by_accessor
            .insert(child.names.accessor.clone(), id);
        parent_node.by_type.insert(child.names.type_name.clone(), id);

        self.nodes.push(child);
        Ok(id)
    }

    #[must_use]
    pub fn root(&self) -> &ModuleNode {
        &self.nodes[NodeId::ROOT.0]
    }

    /// Node by id.
    ///
    /// # Panics
    ///
    /// Panics if `id` belongs to a different tree and is out of range.
    #[must_use]
    pub fn node(&self, id: NodeId) -> &ModuleNode {
        &self.nodes[id.0]
    }

    /// Children of `id` in stored order.
    pub fn children(&self, id: NodeId) -> impl Iterator<Item = (NodeId, &ModuleNode)> {
        self.nodes[id.0]
            .children
            .iter()
            .map(|&child| (child, &self.nodes[child.0]))
    }

    /// Walk `path` from the root.
    #[must_use]
    pub fn find(&self, path: &ModulePath) -> Option<&ModuleNode> {
        let mut current = NodeId::ROOT;
        for segment in path.segments() {
            current = self.nodes[current.0].child(segment)?;
        }
        Some(&self.nodes[current.0])
    }

    /// Number of nodes, root included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always `false`: the root is always present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Pre-order traversal yielding each node with its depth.
    pub fn iter(&self) -> PreOrder<'_> {
        PreOrder {
            tree: self,
            stack: vec![(NodeId::ROOT, 0)],
        }
    }

    /// Depth of the deepest node; 0 for a root-only tree.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.nodes.iter().map(|node| node.path.len()).max().unwrap_or(0)
    }

    /// One line per node, indented by depth.
    ///
    /// ```text
    /// : projects (ParentProjectAccessors)
    ///   :app app (AppProject)
    ///   :lib lib (LibProject) [synthetic]
    /// ```
    #[must_use]
    pub fn format_outline(&self, root_accessor: &str, root_type: &str) -> Vec<String> {
        self.iter()
            .map(|(depth, node)| {
                let (accessor, type_name) = if depth == 0 {
                    (root_accessor, root_type)
                } else {
                    (node.accessor_name(), node.type_name())
                };
                let marker = if node.is_declared() {
                    ""
                } else {
                    " [synthetic]"
                };
                format!(
                    "{:indent$}{} {accessor} ({type_name}){marker}",
                    "",
                    node.path,
                    indent = depth * 2
                )
            })
            .collect()
    }
}

/// Pre-order iterator over a [`ModuleTree`].
pub struct PreOrder<'a> {
    tree: &'a ModuleTree,
    stack: Vec<(NodeId, usize)>,
}

impl<'a> Iterator for PreOrder<'a> {
    type Item = (usize, &'a ModuleNode);

    fn next(&mut self) -> Option<Self::Item> {
        let (id, depth) = self.stack.pop()?;
        let node = self.tree.node(id);
        // Reverse so the first child is visited first.
        for &child in node.children.iter().rev() {
            self.stack.push((child, depth + 1));
        }
        Some((depth, node))
    }
}

#[cfg(test)]
mod tests;
