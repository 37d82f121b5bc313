// project-accessors: Type-safe project accessor generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{GenerationContext, ModuleType, emit};
use crate::path::{ModulePath, ProjectPathSet};
use crate::tree::ModuleTree;
use crate::version::HostVersion;

fn tree(paths: &[&str]) -> ModuleTree {
    ModuleTree::build(&ProjectPathSet::parse(paths).unwrap()).unwrap()
}

fn context(version: &str) -> GenerationContext {
    GenerationContext::builder()
        .project_name("root")
        .class_name("ProjectsAccessors")
        .host_version(HostVersion::parse(version).unwrap())
        .build()
}

fn find<'a>(file: &'a super::GeneratedFile, raw: &str) -> &'a ModuleType {
    file.find(&ModulePath::parse(raw).unwrap()).unwrap()
}

#[test]
fn test_context_defaults() {
    let ctx = GenerationContext::builder()
        .project_name("demo")
        .class_name("ProjectsAccessors")
        .build();
    assert_eq!(ctx.accessor_name(), "projects");
    assert_eq!(ctx.package_name(), "");
    assert_eq!(ctx.receiver(), "org.gradle.api.Project");
    assert_eq!(ctx.path_field_threshold(), &HostVersion::default_threshold());
    assert!(!ctx.declared_path_field());
}

#[test]
fn test_declared_path_field_below_threshold() {
    assert!(context("8.10.2").declared_path_field());
    assert!(context("8.11-rc-1").declared_path_field());
    assert!(!context("8.11").declared_path_field());
    assert!(!context("9.0").declared_path_field());
}

#[test]
fn test_root_accessor_and_type() {
    let file = emit(&tree(&[":", ":app"]), &context("8.11"));

    assert_eq!(file.root_accessor.name, "projects");
    assert_eq!(file.root_accessor.type_name, "ProjectsAccessors");
    assert_eq!(
        file.root_accessor.doc,
        vec!["Returns the project dependencies for the root project.".to_string()]
    );
    assert_eq!(file.type_name(), "ProjectsAccessors");
    assert!(file.root_type.is_declared());
    assert_eq!(file.root_type.body().path, ModulePath::root());
}

#[test]
fn test_one_accessor_per_child_in_tree_order() {
    let file = emit(&tree(&[":b", ":a", ":c:d"]), &context("8.11"));
    let names: Vec<&str> = file
        .root_type
        .body()
        .accessors
        .iter()
        .map(|a| a.name.as_str())
        .collect();
    assert_eq!(names, ["a", "b", "c"]);

    let nested: Vec<&str> = file
        .root_type
        .body()
        .nested
        .iter()
        .map(|t| t.body().name.as_str())
        .collect();
    assert_eq!(nested, ["AProject", "BProject", "CProject"]);
}

#[test]
fn test_synthetic_always_has_path_field() {
    for version in ["8.0", "8.11", "9.1"] {
        let file = emit(&tree(&[":lib:core"]), &context(version));
        let lib = find(&file, ":lib");
        assert!(!lib.is_declared());
        let field = lib.body().path_field.as_ref().unwrap();
        assert_eq!(field.value, ":lib");
        assert_eq!(field.doc.len(), 3);
        assert!(field.doc[2].contains("\":lib\" is not a declared project"));
    }
}

#[test]
fn test_declared_path_field_is_version_gated() {
    let old = emit(&tree(&[":app"]), &context("8.10"));
    let new = emit(&tree(&[":app"]), &context("8.11"));

    let old_app = find(&old, ":app").body();
    let new_app = find(&new, ":app").body();
    assert_eq!(old_app.path_field.as_ref().unwrap().value, ":app");
    assert_eq!(
        old_app.path_field.as_ref().unwrap().doc,
        vec!["Returns the path to the project as a string.".to_string()]
    );
    assert!(new_app.path_field.is_none());
    assert!(new.root_type.body().path_field.is_none());
    assert_eq!(old.root_type.body().path_field.as_ref().unwrap().value, ":");
}

#[test]
fn test_module_reference_only_on_declared() {
    let file = emit(&tree(&[":lib:core"]), &context("8.11"));

    let core = find(&file, ":lib:core");
    let reference = core.as_module_reference().unwrap();
    assert_eq!(reference.module_path(), &ModulePath::parse(":lib:core").unwrap());

    assert!(find(&file, ":lib").as_module_reference().is_none());
    assert!(file.root_type.as_module_reference().is_some());
}

#[test]
fn test_accessor_docs_name_full_path() {
    let file = emit(&tree(&[":lib:core"]), &context("8.11"));
    let lib = &file.root_type.body().accessors[0];
    assert_eq!(lib.doc[0], "Returns the accessors for the projects below path \":lib\"");

    let core = &find(&file, ":lib").body().accessors[0];
    assert_eq!(
        core.doc[0],
        "Creates a project dependency on the project at path \":lib:core\""
    );
}

#[test]
fn test_file_summary_queries() {
    let new = emit(&tree(&[":", ":app"]), &context("8.11"));
    assert_eq!(new.type_count(), 2);
    assert!(!new.has_path_fields());
    assert!(new.has_module_references());

    let synthetic = emit(&tree(&[":lib:core"]), &context("8.11"));
    assert_eq!(synthetic.type_count(), 3);
    assert!(synthetic.has_path_fields());
}

#[test]
fn test_leaf_body_is_empty() {
    let file = emit(&tree(&[":app"]), &context("8.11"));
    assert!(find(&file, ":app").body().is_empty());

    let old = emit(&tree(&[":app"]), &context("8.10"));
    assert!(!find(&old, ":app").body().is_empty());
}

#[test]
fn test_walk_is_pre_order() {
    let file = emit(&tree(&[":a:x", ":b"]), &context("8.11"));
    let order: Vec<String> = file
        .root_type
        .walk()
        .iter()
        .map(|t| t.body().path.to_string())
        .collect();
    assert_eq!(order, [":", ":a", ":a:x", ":b"]);
}

#[test]
fn test_emit_is_deterministic() {
    let ctx = context("8.10");
    let first = emit(&tree(&[":z", ":a:b", ":m"]), &ctx);
    let second = emit(&tree(&[":m", ":a:b", ":z"]), &ctx);
    assert_eq!(first, second);
}
