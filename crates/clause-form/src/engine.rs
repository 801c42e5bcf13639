//! Form-and-render engine
//!
//! Provides [`FormEngine`], which owns one session's [`FormState`] and
//! borrows a [`Catalog`]. The only transitions are
//! [`select_template`](FormEngine::select_template),
//! [`render`](FormEngine::render) and [`reset`](FormEngine::reset); field
//! edits only touch stored values.

use crate::error::FormError;
use crate::state::{FormState, Mode};
use crate::validate::{validate_values, FieldIssue};
use clause_catalog::placeholder;
use clause_catalog::{Catalog, ClauseTemplate, FieldSpec};
use std::collections::BTreeMap;

/// Substitute `values` into a template body
///
/// Each `{{name}}` becomes the stored value when non-empty, otherwise
/// `[name]`. No validation or coercion takes place.
#[must_use]
pub fn render_template(template: &ClauseTemplate, values: &BTreeMap<String, String>) -> String {
    placeholder::substitute(&template.body, |name| values.get(name).map(String::as_str))
}

/// Session engine over a read-only catalog
#[derive(Debug, Clone)]
pub struct FormEngine<'c> {
    catalog: &'c Catalog,
    state: FormState,
}

impl<'c> FormEngine<'c> {
    /// Create an engine in browsing mode
    #[inline]
    #[must_use]
    pub fn new(catalog: &'c Catalog) -> Self {
        Self {
            catalog,
            state: FormState::new(),
        }
    }

    /// Backing catalog
    #[inline]
    #[must_use]
    pub fn catalog(&self) -> &'c Catalog {
        self.catalog
    }

    /// Current state snapshot
    #[inline]
    #[must_use]
    pub fn state(&self) -> &FormState {
        &self.state
    }

    /// Current mode
    #[inline]
    #[must_use]
    pub fn mode(&self) -> Mode {
        self.state.mode()
    }

    /// Distinct catalog categories
    #[must_use]
    pub fn list_categories(&self) -> Vec<&'c str> {
        self.catalog.list_categories()
    }

    /// Filter the catalog, see [`Catalog::search`]
    #[must_use]
    pub fn search(&self, query: &str, category: &str) -> Vec<&'c ClauseTemplate> {
        self.catalog.search(query, category)
    }

    /// Selected template, if any
    #[must_use]
    pub fn active_template(&self) -> Option<&'c ClauseTemplate> {
        self.state
            .active_template_id()
            .and_then(|id| self.catalog.get(id))
    }

    /// Open a template's form
    ///
    /// Clears stored values and output.
    ///
    /// # Errors
    /// Returns [`FormError::TemplateNotFound`] for an unknown id; the state is
    /// left exactly as it was.
    pub fn select_template(&mut self, id: &str) -> Result<&'c ClauseTemplate, FormError> {
        let Some(template) = self.catalog.get(id) else {
            tracing::debug!("Ignoring selection of unknown template: {}", id);
            return Err(FormError::TemplateNotFound(id.to_string()));
        };
        self.state.clear();
        self.state.active_template_id = Some(template.id.clone());
        tracing::debug!("Selected template: {}", template.id);
        Ok(template)
    }

    /// Store a raw value
    ///
    /// Accepted in any mode and for any name; values that match no field are
    /// ignored at render time.
    pub fn set_field_value(&mut self, name: impl Into<String>, raw: impl Into<String>) {
        self.state.values.insert(name.into(), raw.into());
    }

    /// Stored value for a field; unset reads as empty
    #[must_use]
    pub fn value(&self, name: &str) -> &str {
        self.state.value(name)
    }

    /// All stored values
    #[inline]
    #[must_use]
    pub fn values(&self) -> &BTreeMap<String, String> {
        self.state.values()
    }

    /// Generate the clause text and keep it as the rendered output
    ///
    /// # Errors
    /// Returns [`FormError::NoActiveTemplate`] while browsing; the previous
    /// output is kept.
    pub fn render(&mut self) -> Result<&str, FormError> {
        let template = self.active_template().ok_or(FormError::NoActiveTemplate)?;
        self.state.rendered_output = render_template(template, &self.state.values);
        tracing::debug!(
            "Rendered template {} ({} bytes)",
            template.id,
            self.state.rendered_output.len()
        );
        Ok(&self.state.rendered_output)
    }

    /// Most recent render, or empty
    #[inline]
    #[must_use]
    pub fn rendered_output(&self) -> &str {
        self.state.rendered_output()
    }

    /// Return to browsing with an empty form
    pub fn reset(&mut self) {
        self.state.clear();
        tracing::debug!("Form reset");
    }

    /// Required fields of the active template that have no value
    ///
    /// Empty while browsing.
    #[must_use]
    pub fn missing_required(&self) -> Vec<&'c FieldSpec> {
        self.active_template()
            .map(|t| {
                t.required_fields()
                    .filter(|f| self.value(&f.name).trim().is_empty())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Advisory check of stored values against the active template
    ///
    /// # Errors
    /// Returns [`FormError::NoActiveTemplate`] while browsing.
    pub fn validate(&self) -> Result<Vec<FieldIssue>, FormError> {
        let template = self.active_template().ok_or(FormError::NoActiveTemplate)?;
        Ok(validate_values(template, self.state.values()))
    }
}
