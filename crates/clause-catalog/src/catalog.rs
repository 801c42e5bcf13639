//! Template catalog
//!
//! Provides [`Catalog`], an immutable, validated collection of clause
//! templates with read-only queries. Catalog order is declaration order and
//! every query preserves it.

use crate::error::CatalogError;
use crate::loader::CatalogFormat;
use crate::model::ClauseTemplate;
use crate::validation::{validate_template, CatalogLint};
use once_cell::sync::OnceCell;
use std::collections::{HashMap, HashSet};

/// Built-in catalog document, compiled into the binary
pub const BUILTIN_CATALOG_YAML: &str = include_str!("../catalog/clauses.yaml");

static BUILTIN: OnceCell<Catalog> = OnceCell::new();

/// Validated, read-only collection of clause templates
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    templates: Vec<ClauseTemplate>,
    by_id: HashMap<String, usize>,
    lints: Vec<CatalogLint>,
}

impl Catalog {
    /// Build a catalog, validating every template
    ///
    /// Unreferenced fields are collected as lints and logged.
    ///
    /// # Errors
    /// Returns the first duplicate id or template schema violation.
    pub fn from_templates(templates: Vec<ClauseTemplate>) -> Result<Self, CatalogError> {
        let mut by_id = HashMap::with_capacity(templates.len());
        let mut lints = Vec::new();

        for (index, template) in templates.iter().enumerate() {
            lints.extend(validate_template(template)?);
            if by_id.insert(template.id.clone(), index).is_some() {
                return Err(CatalogError::DuplicateTemplate(template.id.clone()));
            }
        }

        for lint in &lints {
            tracing::warn!("{}", lint);
        }
        tracing::debug!("Catalog built with {} templates", templates.len());

        Ok(Self {
            templates,
            by_id,
            lints,
        })
    }

    /// Process-wide built-in catalog
    ///
    /// Parsed and validated on first use, then shared read-only.
    ///
    /// # Errors
    /// Returns an error if the embedded document is invalid.
    pub fn builtin() -> Result<&'static Catalog, CatalogError> {
        BUILTIN.get_or_try_init(|| {
            tracing::info!("Loading built-in clause catalog");
            Self::from_str_as(CatalogFormat::Yaml, BUILTIN_CATALOG_YAML)
        })
    }

    /// All templates in catalog order
    #[inline]
    #[must_use]
    pub fn templates(&self) -> &[ClauseTemplate] {
        &self.templates
    }

    /// Look up a template by id
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&ClauseTemplate> {
        self.by_id.get(id).map(|&i| &self.templates[i])
    }

    /// Check if a template id exists
    #[inline]
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    /// Get number of templates
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Check if catalog is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Non-fatal findings from load-time validation
    #[inline]
    #[must_use]
    pub fn lints(&self) -> &[CatalogLint] {
        &self.lints
    }

    /// Distinct categories, in order of first appearance
    #[must_use]
    pub fn list_categories(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.templates
            .iter()
            .map(|t| t.category.as_str())
            .filter(|c| seen.insert(*c))
            .collect()
    }

    /// Filter templates by text and category
    ///
    /// - `category`: empty matches all, otherwise exact and case-sensitive
    /// - `query`: empty matches all, otherwise a case-insensitive substring of
    ///   the name or the description
    ///
    /// Both filters must pass. Results keep catalog order; there is no ranking.
    #[must_use]
    pub fn search(&self, query: &str, category: &str) -> Vec<&ClauseTemplate> {
        let needle = query.to_lowercase();
        self.templates
            .iter()
            .filter(|t| category.is_empty() || t.category == category)
            .filter(|t| t.matches_text(&needle))
            .collect()
    }
}
