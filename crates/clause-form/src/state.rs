//! Per-session form state

use serde::Serialize;
use std::collections::BTreeMap;

/// Interaction mode of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// No template selected
    Browsing,
    /// A template is selected and its form is open
    Editing,
}

/// Transient input of one session
///
/// Values are raw strings keyed by field name. Keys need not match the
/// active template's fields; unknown keys are ignored when rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FormState {
    pub(crate) active_template_id: Option<String>,
    pub(crate) values: BTreeMap<String, String>,
    pub(crate) rendered_output: String,
}

impl FormState {
    /// Create empty state
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Selected template id, if any
    #[inline]
    #[must_use]
    pub fn active_template_id(&self) -> Option<&str> {
        self.active_template_id.as_deref()
    }

    /// Current mode
    #[inline]
    #[must_use]
    pub fn mode(&self) -> Mode {
        if self.active_template_id.is_some() {
            Mode::Editing
        } else {
            Mode::Browsing
        }
    }

    /// All stored values, sorted by name
    #[inline]
    #[must_use]
    pub fn values(&self) -> &BTreeMap<String, String> {
        &self.values
    }

    /// Stored value for a field; unset reads as empty
    #[must_use]
    pub fn value(&self, name: &str) -> &str {
        self.values.get(name).map_or("", String::as_str)
    }

    /// Most recent render, or empty
    #[inline]
    #[must_use]
    pub fn rendered_output(&self) -> &str {
        &self.rendered_output
    }

    pub(crate) fn clear(&mut self) {
        self.active_template_id = None;
        self.values.clear();
        self.rendered_output.clear();
    }
}
