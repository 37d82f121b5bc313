// project-accessors: Type-safe project accessor generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Writing rendered files below the output directory.
//!
//! ```text
//! <output_dir>/
//!   <group>/                      deleted and recreated per run
//!     com/example/                package as directories
//!       ProjectsAccessors.kt      tempfile in same dir, then persist
//! ```
//!
//! Dry runs log the target and touch nothing.

use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::emit::GeneratedFile;
use crate::error::{FsError, Result};
use crate::render::OutputFormat;

/// Package `com.example` as the relative directory `com/example`.
#[must_use]
pub fn package_dir(package: &str) -> PathBuf {
    package
        .split('.')
        .filter(|segment| !segment.is_empty())
        .collect()
}

/// Writes each group's file into its own directory.
#[derive(Debug, Clone)]
pub struct OutputWriter {
    root: PathBuf,
    dry_run: bool,
}

impl OutputWriter {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            dry_run: false,
        }
    }

    #[must_use]
    pub const fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    #[must_use]
    pub const fn is_dry_run(&self) -> bool {
        self.dry_run
    }

    #[must_use]
    pub fn group_dir(&self, group: &str) -> PathBuf {
        self.root.join(group)
    }

    /// Final location of `file` for `group` in `format`.
    #[must_use]
    pub fn target_path(&self, group: &str, file: &GeneratedFile, format: OutputFormat) -> PathBuf {
        self.group_dir(group)
            .join(package_dir(&file.package))
            .join(format!(
                "{}.{}",
                file.type_name(),
                format.renderer().extension()
            ))
    }

    /// Render and write `file`, replacing the group's previous output.
    ///
    /// Returns the path of the written file.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering fails or the group directory cannot be
    /// cleared, created or written.
    pub fn write(&self, group: &str, file: &GeneratedFile, format: OutputFormat) -> Result<PathBuf> {
        let contents = format.renderer().render(file)?;
        let target = self.target_path(group, file, format);
        let group_dir = self.group_dir(group);

        if self.dry_run {
            info!(
                path = %target.display(),
                bytes = contents.len(),
                "[DRY-RUN] would write accessors for group {}", group
            );
            return Ok(target);
        }

        if group_dir.exists() {
            debug!(path = %group_dir.display(), "Clearing previous output");
            std::fs::remove_dir_all(&group_dir)
                .map_err(|e| FsError::from_io(&group_dir, e))?;
        }

        let parent = target.parent().unwrap_or(&group_dir);
        std::fs::create_dir_all(parent).map_err(|e| FsError::from_io(parent, e))?;

        let mut temp = NamedTempFile::new_in(parent).map_err(|e| FsError::from_io(parent, e))?;
        temp.write_all(contents.as_bytes())
            .map_err(|e| FsError::from_io(temp.path(), e))?;
        temp.persist(&target)
            .map_err(|e| FsError::from_io(&target, e.error))?;

        info!(path = %target.display(), "Wrote accessors for group {}", group);
        Ok(target)
    }
}
