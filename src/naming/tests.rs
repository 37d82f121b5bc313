// project-accessors: Type-safe project accessor generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{capitalize, derive_names, root_type_name, task_name, to_accessor_name};

#[test]
fn test_kebab_and_snake_fold_to_same_names() {
    for raw in ["some-module", "some_module"] {
        let names = derive_names(raw);
        assert_eq!(names.accessor, "someModule", "accessor for {raw}");
        assert_eq!(names.type_name, "SomeModuleProject", "type for {raw}");
    }
}

#[test]
fn test_plain_segment_passes_through() {
    let names = derive_names("module1");
    assert_eq!(names.accessor, "module1");
    assert_eq!(names.type_name, "Module1Project");
}

#[test]
fn test_multiple_separators() {
    assert_eq!(to_accessor_name("project-accessors_core-api"), "projectAccessorsCoreApi");
}

#[test]
fn test_separator_before_non_lowercase_is_kept() {
    // Only a separator followed by a lowercase letter is folded.
    assert_eq!(to_accessor_name("lib-2"), "lib-2");
    assert_eq!(to_accessor_name("lib_Core"), "lib_Core");
    assert_eq!(to_accessor_name("trailing-"), "trailing-");
}

#[test]
fn test_existing_camel_case_is_untouched() {
    let names = derive_names("alreadyCamel");
    assert_eq!(names.accessor, "alreadyCamel");
    assert_eq!(names.type_name, "AlreadyCamelProject");
}

#[test]
fn test_capitalize_edge_cases() {
    assert_eq!(capitalize(""), "");
    assert_eq!(capitalize("a"), "A");
    assert_eq!(capitalize("Root"), "Root");
}

#[test]
fn test_group_derived_names() {
    assert_eq!(root_type_name("parent"), "ParentProjectAccessors");
    assert_eq!(task_name("parent"), "generateParentProjectAccessors");
    assert_eq!(task_name("buildLogic"), "generateBuildLogicProjectAccessors");
    assert_eq!(root_type_name("build-logic"), "BuildLogicProjectAccessors");
}
