// project-accessors: Type-safe project accessor generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!                        main.rs
//!                           |
//!                +----------+----------+
//!                v                     v
//!             cli (clap)          cmd (handlers)
//!                |          generate / tree / groups
//!                +----------+----------+
//!                           v
//!              ,---------------------------,
//!              |          config           |
//!              |   TOML, layered settings  |
//!              '-------------+-------------'
//!                            v
//!                 group (registry, unique)
//!                            |
//!                            v
//!     generator:  path --> tree --> emit --> render --> output
//!                ModulePath  arena  GeneratedFile  .kt/.json
//!                            |
//!                         naming
//!
//!   +-----------------------------------------+
//!   |  foundation   error, logging, version   |
//!   +-----------------------------------------+
//! ```

pub mod cli;
pub mod cmd;
pub mod config;
pub mod emit;
pub mod error;
pub mod generator;
pub mod group;
pub mod logging;
pub mod naming;
pub mod output;
pub mod path;
pub mod render;
pub mod tree;
pub mod version;
