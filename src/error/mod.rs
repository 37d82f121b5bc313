// project-accessors: Type-safe project accessor generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!            AccessorError (16 bytes)
//!                     |
//!   +------+------+---+---+------+------+
//!   |      |      |       |      |      |
//!   v      v      v       v      v      v
//! Path   Tree   Config  Group   Fs     Io
//! Box    Box     Box     Box    Box    Box
//!
//! Sub-errors (unboxed internally):
//!   Path    EmptySegment, InvalidCharacter
//!   Tree    PrefixViolation, NameCollision, ReservedName
//!   Config  ReadError, MissingKey, InvalidValue
//!   Group   DuplicateAccessor, NotFound, NoGroups
//!   Fs      NotFound, PermissionDenied, IoError
//!
//! All variants boxed => AccessorError fits in 16 bytes.
//! ```

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`AccessorError`].
pub type AccessorResult<T> = std::result::Result<T, AccessorError>;

/// Top-level library error type.
///
/// All sub-errors are boxed to keep this enum at 16 bytes on the stack.
#[derive(Debug, Error)]
pub enum AccessorError {
    /// A module path could not be parsed.
    #[error("path error: {0}")]
    Path(#[from] Box<PathError>),

    /// The module tree could not be built.
    #[error("tree error: {0}")]
    Tree(#[from] Box<TreeError>),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),

    /// Accessor group error.
    #[error("group error: {0}")]
    Group(#[from] Box<GroupError>),

    /// Filesystem error.
    #[error("filesystem error: {0}")]
    Fs(#[from] Box<FsError>),

    /// I/O error.
    #[error("io error: {0}")]
    Io(Box<std::io::Error>),
}

// --- From implementations for boxing ---

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for AccessorError {
                fn from(err: $error) -> Self {
                    AccessorError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    PathError => Path,
    TreeError => Tree,
    ConfigError => Config,
    GroupError => Group,
    FsError => Fs,
    std::io::Error => Io,
}

// --- Path Errors ---

/// Malformed module path input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    /// Two delimiters with nothing between them, or a trailing delimiter.
    #[error("module path '{path}' has an empty segment at position {position}")]
    EmptySegment { path: String, position: usize },

    /// A segment contains a character that cannot appear in an identifier.
    #[error("module path '{path}' has invalid character '{character}' in segment '{segment}'")]
    InvalidCharacter {
        path: String,
        segment: String,
        character: char,
    },
}

// --- Tree Errors ---

/// Module tree construction errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    /// Walking towards `path` reached a node whose path is not a prefix of it.
    ///
    /// The builder only extends paths it has just verified, so this is an
    /// internal consistency failure rather than bad input.
    #[error("internal consistency violation: module '{path}' does not start with '{prefix}'")]
    PrefixViolation { path: String, prefix: String },

    /// Two sibling segments fold to the same generated identifier.
    #[error(
        "modules '{first}' and '{second}' under '{parent}' both map to identifier '{identifier}'"
    )]
    NameCollision {
        parent: String,
        first: String,
        second: String,
        identifier: String,
    },

    /// A segment folds to the name of a member every generated type has.
    #[error(
        "module '{name}' under '{parent}' maps to identifier '{identifier}', \
         which is reserved for a generated member"
    )]
    ReservedName {
        parent: String,
        name: String,
        identifier: String,
    },
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read a file referenced from configuration.
    #[error("failed to read '{path}': {source}")]
    ReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Missing required configuration key.
    #[error("missing required config key '{key}' in section '[{section}]'")]
    MissingKey { section: String, key: String },

    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },
}

// --- Group Errors ---

/// Accessor group errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GroupError {
    /// Two groups would generate the same top-level accessor.
    #[error(
        "groups '{first}' and '{second}' both generate the accessor '{identity}'. \
         When adding multiple accessors, make sure to set explicit and unique accessor names."
    )]
    DuplicateAccessor {
        identity: String,
        first: String,
        second: String,
    },

    /// No group matched a selection.
    #[error("no accessor group matches '{0}'")]
    NotFound(String),

    /// Nothing to generate.
    #[error("no accessor groups configured and no project paths given")]
    NoGroups,
}

// --- Filesystem Errors ---

/// Filesystem operation errors.
#[derive(Debug, Error)]
pub enum FsError {
    /// Path not found.
    #[error("path not found: {0}")]
    NotFound(String),

    /// Permission denied.
    #[error("permission denied: {0}")]
    PermissionDenied(String),

    /// General I/O error.
    #[error("I/O error on '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl FsError {
    /// Classify an I/O error raised while operating on `path`.
    pub fn from_io(path: &std::path::Path, source: std::io::Error) -> Self {
        let path = path.display().to_string();
        match source.kind() {
            std::io::ErrorKind::NotFound => Self::NotFound(path),
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied(path),
            _ => Self::IoError { path, source },
        }
    }
}

#[cfg(test)]
mod tests;
