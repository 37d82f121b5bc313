// project-accessors: Type-safe project accessor generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Module paths.
//!
//! ```text
//! ":"              --> []                 (root)
//! ":module2:sub1"  --> ["module2", "sub1"]
//! "module2:sub1"   --> ["module2", "sub1"] (leading ':' optional)
//! ":a::b"          --> PathError::EmptySegment
//! ```
//!
//! [`ProjectPathSet`] deduplicates and orders paths canonically so the
//! generated output does not depend on the order callers supply them in.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::PathError;

/// Segment delimiter of module paths.
pub const DELIMITER: char = ':';

/// An ordered sequence of validated segments; empty for the root.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ModulePath {
    segments: Vec<String>,
}

impl ModulePath {
    /// The root path.
    #[must_use]
    pub const fn root() -> Self {
        Self {
            segments: Vec::new(),
        }
    }

    /// Parse a delimited path string.
    ///
    /// # Errors
    ///
    /// Returns [`PathError::EmptySegment`] for empty segments and
    /// [`PathError::InvalidCharacter`] for characters other than ASCII
    /// alphanumerics, `-` and `_`.
    pub fn parse(raw: &str) -> Result<Self, PathError> {
        let relative = raw.strip_prefix(DELIMITER).unwrap_or(raw);
        if relative.is_empty() {
            return Ok(Self::root());
        }

        let mut segments = Vec::new();
        for (position, segment) in relative.split(DELIMITER).enumerate() {
            if segment.is_empty() {
                return Err(PathError::EmptySegment {
                    path: raw.to_string(),
                    position,
                });
            }
            if let Some(character) = segment
                .chars()
                .find(|c| !(c.is_ascii_alphanumeric() || *c == '-' || *c == '_'))
            {
                return Err(PathError::InvalidCharacter {
                    path: raw.to_string(),
                    segment: segment.to_string(),
                    character,
                });
            }
            segments.push(segment.to_string());
        }
        Ok(Self { segments })
    }

    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    #[must_use]
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Last segment, `None` for the root.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.segments.last().map(String::as_str)
    }

    /// Path with the last segment removed, `None` for the root.
    #[must_use]
    pub fn parent(&self) -> Option<Self> {
        self.segments.split_last().map(|(_, rest)| Self {
            segments: rest.to_vec(),
        })
    }

    /// This path extended by one segment.
    ///
    /// `segment` is expected to come from an already validated path.
    #[must_use]
    pub fn child(&self, segment: &str) -> Self {
        let mut segments = self.segments.clone();
        segments.push(segment.to_string());
        Self { segments }
    }

    /// Whether `self` is a prefix of `other` (equality included).
    #[must_use]
    pub fn is_prefix_of(&self, other: &Self) -> bool {
        other.segments.starts_with(&self.segments)
    }

    /// Whether `self` is a prefix of `other` and shorter than it.
    #[must_use]
    pub fn is_strict_prefix_of(&self, other: &Self) -> bool {
        self.len() < other.len() && self.is_prefix_of(other)
    }
}

impl fmt::Display for ModulePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            return write!(f, "{DELIMITER}");
        }
        for segment in &self.segments {
            write!(f, "{DELIMITER}{segment}")?;
        }
        Ok(())
    }
}

impl FromStr for ModulePath {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for ModulePath {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

/// Deduplicated, canonically ordered set of module paths.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectPathSet {
    paths: BTreeSet<ModulePath>,
}

impl ProjectPathSet {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            paths: BTreeSet::new(),
        }
    }

    /// Parse every raw path; the first malformed one aborts.
    ///
    /// # Errors
    ///
    /// Returns the [`PathError`] of the first path that fails to parse.
    pub fn parse<I, S>(raw: I) -> Result<Self, PathError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        raw.into_iter()
            .map(|path| ModulePath::parse(path.as_ref()))
            .collect()
    }

    /// Returns `true` if the path was not present yet.
    pub fn insert(&mut self, path: ModulePath) -> bool {
        self.paths.insert(path)
    }

    #[must_use]
    pub fn contains(&self, path: &ModulePath) -> bool {
        self.paths.contains(path)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ModulePath> {
        self.paths.iter()
    }
}

impl FromIterator<ModulePath> for ProjectPathSet {
    fn from_iter<T: IntoIterator<Item = ModulePath>>(iter: T) -> Self {
        Self {
            paths: iter.into_iter().collect(),
        }
    }
}

impl Extend<ModulePath> for ProjectPathSet {
    fn extend<T: IntoIterator<Item = ModulePath>>(&mut self, iter: T) {
        self.paths.extend(iter);
    }
}

impl<'a> IntoIterator for &'a ProjectPathSet {
    type Item = &'a ModulePath;
    type IntoIter = std::collections::btree_set::Iter<'a, ModulePath>;

    fn into_iter(self) -> Self::IntoIter {
        self.paths.iter()
    }
}
