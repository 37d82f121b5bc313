// project-accessors: Type-safe project accessor generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::path::Path;

use super::{AccessorError, AccessorResult, ConfigError, FsError, GroupError, TreeError};

#[test]
fn test_config_error_display() {
    let err = ConfigError::MissingKey {
        section: "groups.app".to_string(),
        key: "accessor_name".to_string(),
    };
    insta::assert_snapshot!(
        err.to_string(),
        @"missing required config key 'accessor_name' in section '[groups.app]'"
    );
}

#[test]
fn test_duplicate_accessor_names_both_groups() {
    let err = GroupError::DuplicateAccessor {
        identity: "com.example.projects".to_string(),
        first: "app".to_string(),
        second: "lib".to_string(),
    };
    let message = err.to_string();
    assert!(message.contains("'app'"));
    assert!(message.contains("'lib'"));
    assert!(message.contains("com.example.projects"));
}

#[test]
fn test_prefix_violation_names_path_and_prefix() {
    let err = TreeError::PrefixViolation {
        path: ":b:c".to_string(),
        prefix: ":a".to_string(),
    };
    insta::assert_snapshot!(
        err.to_string(),
        @"internal consistency violation: module ':b:c' does not start with ':a'"
    );
}

#[test]
fn test_tree_error_is_boxed_into_accessor_error() {
    let err: AccessorError = TreeError::NameCollision {
        parent: ":".to_string(),
        first: "a-b".to_string(),
        second: "a_b".to_string(),
        identifier: "aB".to_string(),
    }
    .into();
    assert!(matches!(err, AccessorError::Tree(_)));
    assert!(err.to_string().starts_with("tree error: "));
}

#[test]
fn test_fs_error_classification() {
    let path = Path::new("/missing/dir");
    let not_found = FsError::from_io(path, std::io::Error::from(std::io::ErrorKind::NotFound));
    let denied = FsError::from_io(
        path,
        std::io::Error::from(std::io::ErrorKind::PermissionDenied),
    );
    let other = FsError::from_io(path, std::io::Error::other("disk on fire"));

    assert!(matches!(not_found, FsError::NotFound(_)));
    assert!(matches!(denied, FsError::PermissionDenied(_)));
    assert!(matches!(other, FsError::IoError { .. }));
}

#[test]
fn test_accessor_error_size() {
    // every variant is a thin Box, plus discriminant
    let size = std::mem::size_of::<AccessorError>();
    assert!(size <= 16, "AccessorError is {size} bytes, expected <= 16");
}

#[test]
fn test_accessor_result_size() {
    let size = std::mem::size_of::<AccessorResult<()>>();
    assert!(size <= 16, "AccessorResult<()> is {size} bytes, expected <= 16");
}
