// project-accessors: Type-safe project accessor generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::collections::HashSet;

use super::{ModuleKind, ModuleTree, NodeId, ROOT_NAME};
use crate::error::TreeError;
use crate::path::{ModulePath, ProjectPathSet};

fn build(paths: &[&str]) -> ModuleTree {
    ModuleTree::build(&ProjectPathSet::parse(paths).unwrap()).unwrap()
}

fn path(raw: &str) -> ModulePath {
    ModulePath::parse(raw).unwrap()
}

fn kind_of(tree: &ModuleTree, raw: &str) -> ModuleKind {
    tree.find(&path(raw)).unwrap().kind()
}

#[test]
fn test_root_only() {
    let tree = build(&[":"]);
    assert_eq!(tree.len(), 1);
    assert_eq!(tree.root().name(), ROOT_NAME);
    assert_eq!(tree.root().accessor_name(), "root");
    assert_eq!(tree.root().type_name(), "RootProject");
    assert!(tree.root().is_declared());
    assert!(tree.root().children().is_empty());
}

#[test]
fn test_root_is_declared_without_root_input() {
    let tree = build(&[":app"]);
    assert!(tree.root().is_declared());
    assert_eq!(kind_of(&tree, ":app"), ModuleKind::Declared);
}

#[test]
fn test_synthetic_intermediate_nodes() {
    let tree = build(&[":", ":module2:submodule3:subsubmodule1"]);

    assert_eq!(tree.len(), 4);
    assert_eq!(kind_of(&tree, ":module2"), ModuleKind::Synthetic);
    assert_eq!(kind_of(&tree, ":module2:submodule3"), ModuleKind::Synthetic);
    assert_eq!(
        kind_of(&tree, ":module2:submodule3:subsubmodule1"),
        ModuleKind::Declared
    );

    let module2 = tree.root().child("module2").unwrap();
    let submodule3 = tree.node(module2).child("submodule3").unwrap();
    let leaf = tree.node(submodule3).child("subsubmodule1").unwrap();
    assert_eq!(tree.node(leaf).path(), &path(":module2:submodule3:subsubmodule1"));
}

#[test]
fn test_declared_after_synthetic_is_promoted() {
    let mut tree = ModuleTree::new();
    tree.insert(&path(":a:b")).unwrap();
    assert_eq!(kind_of(&tree, ":a"), ModuleKind::Synthetic);

    tree.insert(&path(":a")).unwrap();
    assert_eq!(kind_of(&tree, ":a"), ModuleKind::Declared);
    assert_eq!(tree.len(), 3);
}

#[test]
fn test_every_input_declared_every_prefix_synthetic() {
    let inputs = [
        ":",
        ":module1",
        ":module2",
        ":module2:submodule1",
        ":module2:submodule2",
        ":module2:submodule2:subsubmodule1",
        ":module2:submodule3:subsubmodule1",
    ];
    let tree = build(&inputs);
    let declared: HashSet<ModulePath> = inputs.iter().map(|raw| path(raw)).collect();

    for (_, node) in tree.iter() {
        let expected = if declared.contains(node.path()) || node.path().is_root() {
            ModuleKind::Declared
        } else {
            ModuleKind::Synthetic
        };
        assert_eq!(node.kind(), expected, "kind of {}", node.path());
    }
    assert_eq!(kind_of(&tree, ":module2:submodule3"), ModuleKind::Synthetic);
}

#[test]
fn test_parent_path_invariant() {
    let tree = build(&[":a:b:c", ":a:d", ":e"]);
    for (_, node) in tree.iter() {
        for &child in node.children() {
            assert_eq!(tree.node(child).path().parent().as_ref(), Some(node.path()));
        }
    }
}

#[test]
fn test_duplicate_inputs_collapse() {
    let once = build(&[":a"]);
    let twice = build(&[":a", ":a"]);
    assert_eq!(once.len(), twice.len());
    assert_eq!(
        once.format_outline("projects", "Accessors"),
        twice.format_outline("projects", "Accessors")
    );

    let mut tree = ModuleTree::new();
    let first = tree.insert(&path(":a")).unwrap();
    let second = tree.insert(&path(":a")).unwrap();
    assert_eq!(first, second);
    assert_eq!(tree.root().children().len(), 1);
}

#[test]
fn test_children_keep_first_encounter_order() {
    let mut tree = ModuleTree::new();
    for raw in [":zeta", ":alpha", ":mid:x", ":alpha:y"] {
        tree.insert(&path(raw)).unwrap();
    }
    let names: Vec<&str> = tree.children(NodeId::ROOT).map(|(_, n)| n.name()).collect();
    assert_eq!(names, ["zeta", "alpha", "mid"]);
}

#[test]
fn test_order_independent_for_path_sets() {
    let forward = build(&[":b:c", ":a", ":b", ":a:z"]);
    let backward = build(&[":a:z", ":b", ":a", ":b:c"]);
    assert_eq!(
        forward.format_outline("projects", "Accessors"),
        backward.format_outline("projects", "Accessors")
    );
}

#[test]
fn test_sibling_identifiers_unique() {
    let tree = build(&[":some-module", ":other_module:x-y", ":other_module:z", ":plain"]);
    for (_, node) in tree.iter() {
        let children: Vec<_> = node.children().iter().map(|&id| tree.node(id)).collect();
        let accessors: HashSet<&str> = children.iter().map(|c| c.accessor_name()).collect();
        let types: HashSet<&str> = children.iter().map(|c| c.type_name()).collect();
        assert_eq!(accessors.len(), children.len(), "accessors under {}", node.path());
        assert_eq!(types.len(), children.len(), "types under {}", node.path());
    }
}

#[test]
fn test_kebab_snake_sibling_collision_rejected() {
    let err = ModuleTree::build(&ProjectPathSet::parse([":a-b", ":a_b"]).unwrap()).unwrap_err();
    assert_eq!(
        err,
        TreeError::NameCollision {
            parent: ":".to_string(),
            first: "a-b".to_string(),
            second: "a_b".to_string(),
            identifier: "aB".to_string(),
        }
    );
}

#[test]
fn test_type_name_collision_rejected() {
    // `aB` and `AB` have distinct accessors but the same type name.
    let err = ModuleTree::build(&ProjectPathSet::parse([":x:AB", ":x:aB"]).unwrap()).unwrap_err();
    match err {
        TreeError::NameCollision {
            parent, identifier, ..
        } => {
            assert_eq!(parent, ":x");
            assert_eq!(identifier, "ABProject");
        }
        other => panic!("expected collision, got {other:?}"),
    }
}

#[test]
fn test_path_segment_is_reserved() {
    let err = ModuleTree::build(&ProjectPathSet::parse([":a:path"]).unwrap()).unwrap_err();
    assert_eq!(
        err,
        TreeError::ReservedName {
            parent: ":a".to_string(),
            name: "path".to_string(),
            identifier: "path".to_string(),
        }
    );
}

#[test]
fn test_project_segment_is_reserved() {
    let err = ModuleTree::build(&ProjectPathSet::parse([":project"]).unwrap()).unwrap_err();
    match err {
        TreeError::ReservedName {
            parent, identifier, ..
        } => {
            assert_eq!(parent, ":");
            assert_eq!(identifier, "project");
        }
        other => panic!("expected reserved name, got {other:?}"),
    }
}

#[test]
fn test_names_close_to_reserved_are_fine() {
    let tree = build(&[":paths", ":Project", ":my-project:path-utils"]);
    assert_eq!(kind_of(&tree, ":paths"), ModuleKind::Declared);
    assert_eq!(kind_of(&tree, ":Project"), ModuleKind::Declared);
    assert_eq!(
        tree.find(&path(":my-project:path-utils")).unwrap().accessor_name(),
        "pathUtils"
    );
}

#[test]
fn test_same_name_in_different_branches_is_fine() {
    let tree = build(&[":a:core", ":b:core"]);
    assert_eq!(kind_of(&tree, ":a:core"), ModuleKind::Declared);
    assert_eq!(kind_of(&tree, ":b:core"), ModuleKind::Declared);
}

#[test]
fn test_prefix_violation_is_reported() {
    let mut tree = ModuleTree::new();
    let a = tree.insert(&path(":a")).unwrap();
    let err = tree.descend(&path(":b:c"), a).unwrap_err();
    assert_eq!(
        err,
        TreeError::PrefixViolation {
            path: ":b:c".to_string(),
            prefix: ":a".to_string(),
        }
    );
}

#[test]
fn test_depth_and_preorder() {
    let tree = build(&[":a:b:c", ":d"]);
    assert_eq!(tree.depth(), 3);
    let visited: Vec<String> = tree.iter().map(|(_, n)| n.path().to_string()).collect();
    assert_eq!(visited, [":", ":a", ":a:b", ":a:b:c", ":d"]);
}

#[test]
fn test_format_outline() {
    let tree = build(&[":", ":app", ":lib:core"]);
    let outline = tree.format_outline("projects", "ParentProjectAccessors").join("\n");
    insta::assert_snapshot!(outline, @r"
    : projects (ParentProjectAccessors)
      :app app (AppProject)
      :lib lib (LibProject) [synthetic]
        :lib:core core (CoreProject)
    ");
}
