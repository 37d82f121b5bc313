// project-accessors: Type-safe project accessor generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Kotlin backend.
//!
//! ```text
//! package <package>                         (omitted when empty)
//!
//! import ...                                (sorted, only what is used)
//!
//! internal val Project.<accessor>: <Root>
//!   get() = <Root>(this)
//!
//! internal class <Root>(
//!   private val project: Project,
//! ) : ProjectDependencyInternal by ... {    (declared modules only)
//!   public val path: String = ":"           (synthetic, or old hosts)
//!   public val <child>: <Child>
//!     get() = <Child>(project)
//!   public class <Child>(...) ...
//! }
//! ```

use std::collections::BTreeSet;

use super::{CodeWriter, Renderer};
use crate::emit::{GeneratedFile, ModuleType};
use crate::error::Result;

const INDENT: &str = "  ";
const STRING_TYPE: &str = "kotlin.String";
const DEPENDENCY_TYPE: &str =
    "org.gradle.api.internal.artifacts.dependencies.ProjectDependencyInternal";

const HARD_KEYWORDS: &[&str] = &[
    "as", "break", "class", "continue", "do", "else", "false", "for", "fun", "if", "in",
    "interface", "is", "null", "object", "package", "return", "super", "this", "throw", "true",
    "try", "typealias", "typeof", "val", "var", "when", "while",
];

/// Modifier keywords, escaped only inside qualified names.
const MODIFIER_KEYWORDS: &[&str] = &[
    "abstract", "actual", "annotation", "companion", "const", "crossinline", "data", "enum",
    "expect", "external", "final", "infix", "inline", "inner", "internal", "lateinit",
    "noinline", "open", "operator", "out", "override", "private", "protected", "public",
    "reified", "sealed", "suspend", "tailrec", "value", "vararg",
];

/// Kotlin source renderer.
#[derive(Debug, Clone, Copy, Default)]
pub struct KotlinRenderer;

impl Renderer for KotlinRenderer {
    fn extension(&self) -> &'static str {
        "kt"
    }

    fn render(&self, file: &GeneratedFile) -> Result<String> {
        let mut w = CodeWriter::new(INDENT);
        let receiver = simple_name(&file.receiver);

        if !file.package.is_empty() {
            w.line(format!("package {}", qualified(&file.package)));
            w.blank();
        }

        let mut imports = BTreeSet::from([file.receiver.as_str()]);
        if file.has_path_fields() {
            imports.insert(STRING_TYPE);
        }
        if file.has_module_references() {
            imports.insert(DEPENDENCY_TYPE);
        }
        for import in imports {
            w.line(format!("import {}", qualified(import)));
        }
        w.blank();

        let root_type = identifier(&file.root_accessor.type_name);
        write_doc(&mut w, &file.root_accessor.doc);
        w.line(format!(
            "internal val {receiver}.{}: {root_type}",
            identifier(&file.root_accessor.name)
        ));
        w.indent();
        w.line(format!("get() = {root_type}(this)"));
        w.dedent();
        w.blank();

        write_type(&mut w, &file.root_type, "internal", receiver);
        Ok(w.finish())
    }
}

fn write_type(w: &mut CodeWriter, ty: &ModuleType, visibility: &str, receiver: &str) {
    let body = ty.body();
    let name = identifier(&body.name);

    w.line(format!("{visibility} class {name}("));
    w.indent();
    w.line(format!("private val project: {receiver},"));
    w.dedent();

    let delegation = ty
        .as_module_reference()
        .map(|reference| {
            format!(
                " : ProjectDependencyInternal by project.dependencies.project(mapOf(\"path\" to {})) \
                 as ProjectDependencyInternal",
                string_literal(&reference.module_path().to_string())
            )
        })
        .unwrap_or_default();

    if body.is_empty() {
        w.line(format!("){delegation}"));
        return;
    }
    w.line(format!("){delegation} {{"));
    w.indent();

    let mut first = true;
    if let Some(field) = &body.path_field {
        separate(w, &mut first);
        write_doc(w, &field.doc);
        w.line(format!(
            "public val path: String = {}",
            string_literal(&field.value)
        ));
    }
    for accessor in &body.accessors {
        separate(w, &mut first);
        let type_name = identifier(&accessor.type_name);
        write_doc(w, &accessor.doc);
        w.line(format!(
            "public val {}: {type_name}",
            identifier(&accessor.name)
        ));
        w.indent();
        w.line(format!("get() = {type_name}(project)"));
        w.dedent();
    }
    for nested in &body.nested {
        separate(w, &mut first);
        write_type(w, nested, "public", receiver);
    }

    w.dedent();
    w.line("}");
}

fn separate(w: &mut CodeWriter, first: &mut bool) {
    if !*first {
        w.blank();
    }
    *first = false;
}

fn write_doc(w: &mut CodeWriter, lines: &[String]) {
    if lines.is_empty() {
        return;
    }
    w.line("/**");
    for line in lines {
        let line = line.replace("*/", "*&#47;");
        if line.is_empty() {
            w.line(" *");
        } else {
            w.line(format!(" * {line}"));
        }
    }
    w.line(" */");
}

/// Last segment of a qualified name.
fn simple_name(qualified: &str) -> &str {
    qualified.rsplit('.').next().unwrap_or(qualified)
}

/// Escape an identifier with backticks when it is a keyword or not a plain name.
pub(crate) fn identifier(name: &str) -> String {
    if is_plain_identifier(name) && !HARD_KEYWORDS.contains(&name) {
        name.to_string()
    } else {
        format!("`{name}`")
    }
}

/// Escape each segment of a dotted name.
pub(crate) fn qualified(name: &str) -> String {
    name.split('.')
        .map(|segment| {
            if MODIFIER_KEYWORDS.contains(&segment) {
                format!("`{segment}`")
            } else {
                identifier(segment)
            }
        })
        .collect::<Vec<_>>()
        .join(".")
}

fn is_plain_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Double-quoted Kotlin string literal.
pub(crate) fn string_literal(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '$' => out.push_str("\\$"),
            '\n' => out.push_str("\\n"),
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}
