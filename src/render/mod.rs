// project-accessors: Type-safe project accessor generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Turning a [`GeneratedFile`] into text.
//!
//! ```text
//! GeneratedFile --+--> KotlinRenderer --> <Type>.kt
//!                 |
//!                 +--> JsonRenderer   --> <Type>.json
//! ```

pub mod kotlin;

use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::emit::GeneratedFile;
use crate::error::Result;

pub use kotlin::KotlinRenderer;

/// Output format of the generated file.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Kotlin source for inclusion in a build script classpath.
    #[default]
    Kotlin,
    /// Structured dump of the generated types.
    Json,
}

impl OutputFormat {
    #[must_use]
    pub fn renderer(self) -> &'static dyn Renderer {
        match self {
            Self::Kotlin => &KotlinRenderer,
            Self::Json => &JsonRenderer,
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Kotlin => "kotlin",
            Self::Json => "json",
        })
    }
}

/// A backend producing one source file from a [`GeneratedFile`].
pub trait Renderer {
    /// File extension without the dot.
    fn extension(&self) -> &'static str;

    /// Render the whole compilation unit.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails to serialize the file.
    fn render(&self, file: &GeneratedFile) -> Result<String>;
}

/// Pretty-printed JSON of the structured artifact.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn extension(&self) -> &'static str {
        "json"
    }

    fn render(&self, file: &GeneratedFile) -> Result<String> {
        let mut text = serde_json::to_string_pretty(file)?;
        text.push('\n');
        Ok(text)
    }
}

/// Line-oriented text buffer with indentation tracking.
#[derive(Debug)]
pub struct CodeWriter {
    buf: String,
    depth: usize,
    indent: &'static str,
}

impl CodeWriter {
    #[must_use]
    pub const fn new(indent: &'static str) -> Self {
        Self {
            buf: String::new(),
            depth: 0,
            indent,
        }
    }

    /// Write one line at the current indentation. Empty lines carry no indentation.
    pub fn line(&mut self, text: impl AsRef<str>) {
        let text = text.as_ref();
        if !text.is_empty() {
            for _ in 0..self.depth {
                self.buf.push_str(self.indent);
            }
            self.buf.push_str(text);
        }
        self.buf.push('\n');
    }

    pub fn blank(&mut self) {
        self.buf.push('\n');
    }

    pub const fn indent(&mut self) {
        self.depth += 1;
    }

    pub const fn dedent(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    #[must_use]
    pub fn finish(self) -> String {
        self.buf
    }
}
