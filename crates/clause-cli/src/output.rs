//! Text and JSON rendering of catalog data
//!
//! Every writer takes `&mut dyn Write` so commands and the interactive
//! session share one presentation.

use clause_catalog::{ClauseTemplate, FieldSpec};
use serde::Serialize;
use std::collections::BTreeMap;
use std::io::{self, Write};

/// Message shown when a search has no hits
pub const NO_MATCHES: &str = "No clause templates found matching your search.";

/// JSON envelope for `--json` output
#[derive(Debug, Serialize)]
pub struct JsonOut<T: Serialize> {
    /// Whether the command succeeded
    pub ok: bool,
    /// Command payload
    pub data: T,
}

/// Summary row for template listings
#[derive(Debug, Serialize)]
pub struct TemplateSummary<'a> {
    /// Template id
    pub id: &'a str,
    /// Display name
    pub name: &'a str,
    /// Category
    pub category: &'a str,
    /// Description
    pub description: &'a str,
    /// Number of declared fields
    pub fields: usize,
}

impl<'a> From<&'a ClauseTemplate> for TemplateSummary<'a> {
    fn from(t: &'a ClauseTemplate) -> Self {
        Self {
            id: &t.id,
            name: &t.name,
            category: &t.category,
            description: &t.description,
            fields: t.field_count(),
        }
    }
}

/// Write `data` wrapped in [`JsonOut`], followed by a newline
///
/// # Errors
/// Returns an IO error from the writer.
pub fn write_json<T: Serialize>(out: &mut dyn Write, data: T) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, &JsonOut { ok: true, data })?;
    writeln!(out)
}

/// One line per template: id, name, category, field count
///
/// # Errors
/// Returns an IO error from the writer.
pub fn write_template_list(out: &mut dyn Write, templates: &[&ClauseTemplate]) -> io::Result<()> {
    if templates.is_empty() {
        return writeln!(out, "{NO_MATCHES}");
    }
    for t in templates {
        writeln!(
            out,
            "{:<16} {:<28} {:<22} {} fields",
            t.id,
            t.name,
            t.category,
            t.field_count()
        )?;
    }
    Ok(())
}

fn write_field(out: &mut dyn Write, field: &FieldSpec, value: Option<&str>) -> io::Result<()> {
    let marker = if field.required { " *" } else { "" };
    write!(out, "  {}{} ({}, {})", field.label, marker, field.name, field.kind)?;
    match value {
        Some(v) if !v.is_empty() => writeln!(out, " = {v}")?,
        _ => writeln!(out)?,
    }
    if !field.choices.is_empty() {
        writeln!(out, "      choices: {}", field.choices.join(" | "))?;
    }
    if let Some(hint) = &field.placeholder_hint {
        writeln!(out, "      hint: {hint}")?;
    }
    Ok(())
}

/// Template header and field schema, optionally with current values
///
/// Required fields are marked with `*`.
///
/// # Errors
/// Returns an IO error from the writer.
pub fn write_template_detail(
    out: &mut dyn Write,
    template: &ClauseTemplate,
    values: Option<&BTreeMap<String, String>>,
) -> io::Result<()> {
    writeln!(out, "{} ({})", template.name, template.id)?;
    writeln!(out, "Category: {}", template.category)?;
    if !template.description.is_empty() {
        writeln!(out, "{}", template.description)?;
    }
    writeln!(out)?;
    writeln!(out, "Fields:")?;
    for field in &template.fields {
        let value = values.and_then(|v| v.get(&field.name)).map(String::as_str);
        write_field(out, field, value)?;
    }
    Ok(())
}
