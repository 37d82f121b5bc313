// project-accessors: Type-safe project accessor generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Host build-tool version token.
//!
//! ```text
//! "8.10.2"     --> [8, 10, 2]
//! "8.11-rc-1"  --> [8, 11]  suffix "rc-1"
//!
//! 8.10.2 < 8.11-rc-1 < 8.11-rc-10 < 8.11 == 8.11.0 < 8.12
//! ```
//!
//! Suffixes compare run by run: digit runs numerically, text runs as
//! strings. In configuration a version must be a quoted string; TOML
//! would otherwise read `8.20` as the float `8.2`.
//!
//! Only ever compared against the path-field threshold of a
//! [`GenerationContext`](crate::emit::GenerationContext).

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// First host version on which declared modules omit the `path` field.
pub const DEFAULT_PATH_FIELD_THRESHOLD: [u64; 2] = [8, 11];

/// Opaque, ordered host-tool version.
#[derive(Debug, Clone, Serialize)]
#[serde(into = "String")]
pub struct HostVersion {
    numbers: Vec<u64>,
    suffix: Option<String>,
}

impl HostVersion {
    /// Release version from its numeric components.
    #[must_use]
    pub fn from_parts(numbers: impl Into<Vec<u64>>) -> Self {
        Self {
            numbers: numbers.into(),
            suffix: None,
        }
    }

    /// The default path-field threshold, `8.11`.
    #[must_use]
    pub fn default_threshold() -> Self {
        Self::from_parts(DEFAULT_PATH_FIELD_THRESHOLD)
    }

    /// Parse `MAJOR[.MINOR...][-SUFFIX]`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if a numeric component is
    /// missing or not a number, or if the suffix is empty.
    pub fn parse(raw: &str) -> Result<Self, ConfigError> {
        let invalid = |message: String| ConfigError::InvalidValue {
            section: "generation".to_string(),
            key: "gradle_version".to_string(),
            message,
        };

        let trimmed = raw.trim();
        let (base, suffix) = match trimmed.split_once('-') {
            Some((base, suffix)) => (base, Some(suffix)),
            None => (trimmed, None),
        };

        let numbers = base
            .split('.')
            .map(|part| {
                part.parse::<u64>()
                    .map_err(|_| invalid(format!("expected a version like '8.11', got '{raw}'")))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let suffix = match suffix {
            Some("") => return Err(invalid(format!("empty version suffix in '{raw}'"))),
            Some(suffix) => Some(suffix.to_string()),
            None => None,
        };

        Ok(Self { numbers, suffix })
    }

    #[must_use]
    pub fn numbers(&self) -> &[u64] {
        &self.numbers
    }

    /// Pre-release marker such as `rc-1`.
    #[must_use]
    pub fn suffix(&self) -> Option<&str> {
        self.suffix.as_deref()
    }

    #[must_use]
    pub const fn is_release(&self) -> bool {
        self.suffix.is_none()
    }
}

impl Default for HostVersion {
    fn default() -> Self {
        Self::default_threshold()
    }
}

impl Ord for HostVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        let width = self.numbers.len().max(other.numbers.len());
        let component = |numbers: &[u64], i: usize| numbers.get(i).copied().unwrap_or(0);
        (0..width)
            .map(|i| component(&self.numbers, i).cmp(&component(&other.numbers, i)))
            .find(|ordering| ordering.is_ne())
            .unwrap_or_else(|| match (&self.suffix, &other.suffix) {
                (None, None) => Ordering::Equal,
                (None, Some(_)) => Ordering::Greater,
                (Some(_), None) => Ordering::Less,
                (Some(a), Some(b)) => compare_suffix(a, b),
            })
    }
}

/// Alternating digit and non-digit runs of a suffix.
fn suffix_runs(suffix: &str) -> impl Iterator<Item = &str> {
    let mut rest = suffix;
    std::iter::from_fn(move || {
        let digits = rest.chars().next()?.is_ascii_digit();
        let end = rest
            .find(|c: char| c.is_ascii_digit() != digits)
            .unwrap_or(rest.len());
        let (run, tail) = rest.split_at(end);
        rest = tail;
        Some(run)
    })
}

fn compare_suffix(a: &str, b: &str) -> Ordering {
    let is_number = |run: &str| run.starts_with(|c: char| c.is_ascii_digit());
    let mut left = suffix_runs(a);
    let mut right = suffix_runs(b);
    loop {
        let ordering = match (left.next(), right.next()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) if is_number(x) && is_number(y) => {
                // arbitrary length: fewer significant digits is smaller
                let (x, y) = (x.trim_start_matches('0'), y.trim_start_matches('0'));
                x.len().cmp(&y.len()).then_with(|| x.cmp(y))
            }
            (Some(x), Some(y)) => x.cmp(y),
        };
        if ordering.is_ne() {
            return ordering;
        }
    }
}

impl PartialOrd for HostVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for HostVersion {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HostVersion {}

impl fmt::Display for HostVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for number in &self.numbers {
            if !first {
                write!(f, ".")?;
            }
            write!(f, "{number}")?;
            first = false;
        }
        if let Some(suffix) = &self.suffix {
            write!(f, "-{suffix}")?;
        }
        Ok(())
    }
}

impl FromStr for HostVersion {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl<'de> Deserialize<'de> for HostVersion {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct VersionVisitor;

        impl Visitor<'_> for VersionVisitor {
            type Value = HostVersion;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a quoted version string such as \"8.11\"")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<HostVersion, E> {
                HostVersion::parse(v).map_err(E::custom)
            }
        }

        // Numbers are rejected rather than stringified.
        deserializer.deserialize_any(VersionVisitor)
    }
}

impl From<HostVersion> for String {
    fn from(version: HostVersion) -> Self {
        version.to_string()
    }
}
