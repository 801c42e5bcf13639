//! One-shot subcommands

use crate::output::{write_json, write_template_detail, write_template_list, TemplateSummary};
use anyhow::{bail, Context};
use clause_catalog::{Catalog, CatalogLint};
use clause_form::{FieldIssue, FormEngine};
use serde::Serialize;
use std::io::Write;

/// `categories`
///
/// # Errors
/// Returns an IO error from the writer.
pub fn categories(catalog: &Catalog, json: bool, out: &mut dyn Write) -> anyhow::Result<()> {
    let categories = catalog.list_categories();
    if json {
        write_json(out, &categories)?;
    } else {
        for category in categories {
            writeln!(out, "{category}")?;
        }
    }
    Ok(())
}

/// `search`
///
/// # Errors
/// Returns an IO error from the writer.
pub fn search(
    catalog: &Catalog,
    query: &str,
    category: &str,
    json: bool,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    let hits = catalog.search(query, category);
    tracing::debug!("Search '{}' in '{}' matched {} templates", query, category, hits.len());
    if json {
        let rows: Vec<TemplateSummary<'_>> = hits.iter().map(|t| (*t).into()).collect();
        write_json(out, rows)?;
    } else {
        write_template_list(out, &hits)?;
    }
    Ok(())
}

/// `show`
///
/// # Errors
/// Returns an error for an unknown id, or an IO error from the writer.
pub fn show(catalog: &Catalog, id: &str, json: bool, out: &mut dyn Write) -> anyhow::Result<()> {
    let Some(template) = catalog.get(id) else {
        bail!("template not found: {id}");
    };
    if json {
        write_json(out, template)?;
    } else {
        write_template_detail(out, template, None)?;
    }
    Ok(())
}

#[derive(Debug, Serialize)]
struct RenderReport<'a> {
    template: &'a str,
    output: &'a str,
    missing_required: Vec<&'a str>,
    issues: Vec<FieldIssue>,
}

/// `render`
///
/// Renders regardless of missing values unless `strict` is set, in which case
/// any advisory issue aborts before output.
///
/// # Errors
/// Returns an error for an unknown id, a strict-mode validation failure, or an
/// IO error from the writer.
pub fn render(
    catalog: &Catalog,
    id: &str,
    assignments: &[(String, String)],
    strict: bool,
    json: bool,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    let mut engine = FormEngine::new(catalog);
    engine.select_template(id)?;
    for (name, value) in assignments {
        engine.set_field_value(name.as_str(), value.as_str());
    }

    let issues = engine.validate()?;
    if strict && !issues.is_empty() {
        let detail: Vec<String> = issues.iter().map(ToString::to_string).collect();
        bail!("{} invalid value(s): {}", issues.len(), detail.join("; "));
    }
    let missing_required: Vec<&str> = engine
        .missing_required()
        .into_iter()
        .map(|f| f.name.as_str())
        .collect();
    if !missing_required.is_empty() {
        tracing::warn!("Rendering with empty required fields: {}", missing_required.join(", "));
    }

    let output = engine.render()?;
    if json {
        write_json(
            out,
            RenderReport {
                template: id,
                output,
                missing_required,
                issues,
            },
        )?;
    } else {
        writeln!(out, "{output}")?;
    }
    Ok(())
}

#[derive(Debug, Serialize)]
struct CheckReport<'a> {
    templates: usize,
    categories: usize,
    lints: &'a [CatalogLint],
}

/// `check`
///
/// Reaching this point means the catalog loaded; only lints remain to report.
///
/// # Errors
/// Returns an IO error from the writer.
pub fn check(catalog: &Catalog, json: bool, out: &mut dyn Write) -> anyhow::Result<()> {
    let report = CheckReport {
        templates: catalog.len(),
        categories: catalog.list_categories().len(),
        lints: catalog.lints(),
    };
    if json {
        write_json(out, &report).context("writing check report")?;
        return Ok(());
    }
    writeln!(
        out,
        "catalog OK: {} templates, {} categories",
        report.templates, report.categories
    )?;
    for lint in report.lints {
        writeln!(out, "warning: {lint}")?;
    }
    Ok(())
}
