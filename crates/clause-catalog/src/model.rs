//! Clause template data model
//!
//! A [`ClauseTemplate`] is immutable once it has been admitted into a
//! [`Catalog`](crate::Catalog). Its [`FieldSpec`]s are ordered; the order is
//! the form layout.

use crate::placeholder;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

/// Input kind of a form field
///
/// The kind is presentation metadata. Rendering never parses or coerces
/// values by kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FieldKind {
    /// Single-line free text
    #[default]
    ShortText,
    /// Multi-line free text
    MultilineText,
    /// One value out of [`FieldSpec::choices`]
    SingleChoice,
    /// Calendar date (`YYYY-MM-DD`)
    Date,
    /// Number
    Numeric,
}

impl FieldKind {
    /// All kinds in declaration order
    pub const ALL: [FieldKind; 5] = [
        FieldKind::ShortText,
        FieldKind::MultilineText,
        FieldKind::SingleChoice,
        FieldKind::Date,
        FieldKind::Numeric,
    ];

    /// Stable identifier, as used in catalog files
    #[inline]
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ShortText => "short-text",
            Self::MultilineText => "multiline-text",
            Self::SingleChoice => "single-choice",
            Self::Date => "date",
            Self::Numeric => "numeric",
        }
    }
}

impl Display for FieldKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One named, typed input slot of a template
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSpec {
    /// Substitution key, unique within the owning template
    pub name: String,

    /// Display label
    pub label: String,

    /// Input kind
    #[serde(default)]
    pub kind: FieldKind,

    /// Whether the form marks this field as required
    #[serde(default)]
    pub required: bool,

    /// Allowed values, only for [`FieldKind::SingleChoice`]
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub choices: Vec<String>,

    /// Example input shown in an empty form field
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder_hint: Option<String>,
}

impl FieldSpec {
    /// Create a field of the given kind
    #[must_use]
    pub fn new(name: impl Into<String>, label: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            kind,
            required: false,
            choices: Vec::new(),
            placeholder_hint: None,
        }
    }

    /// Single-line text field
    #[inline]
    #[must_use]
    pub fn short_text(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(name, label, FieldKind::ShortText)
    }

    /// Single-choice field with its choices
    #[must_use]
    pub fn single_choice<I, S>(name: impl Into<String>, label: impl Into<String>, choices: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut field = Self::new(name, label, FieldKind::SingleChoice);
        field.choices = choices.into_iter().map(Into::into).collect();
        field
    }

    /// Mark as required
    #[inline]
    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// With placeholder hint
    #[inline]
    #[must_use]
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.placeholder_hint = Some(hint.into());
        self
    }
}

/// A named, categorized unit of clause boilerplate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClauseTemplate {
    /// Unique key
    pub id: String,

    /// Display name
    pub name: String,

    /// Category used by the catalog filter
    pub category: String,

    /// One-line description
    pub description: String,

    /// Ordered field schema
    #[serde(default)]
    pub fields: Vec<FieldSpec>,

    /// Body text containing `{{field}}` placeholders
    pub body: String,
}

impl ClauseTemplate {
    /// Create a template with no fields
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: category.into(),
            description: String::new(),
            fields: Vec::new(),
            body: body.into(),
        }
    }

    /// With description
    #[inline]
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Append a field
    #[inline]
    #[must_use]
    pub fn with_field(mut self, field: FieldSpec) -> Self {
        self.fields.push(field);
        self
    }

    /// Look up a declared field by name
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Number of declared fields
    #[inline]
    #[must_use]
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    /// Declared fields marked as required, in form order
    pub fn required_fields(&self) -> impl Iterator<Item = &FieldSpec> {
        self.fields.iter().filter(|f| f.required)
    }

    /// Distinct placeholder names in order of first appearance in the body
    #[must_use]
    pub fn placeholders(&self) -> Vec<&str> {
        placeholder::placeholders(&self.body)
    }

    /// Whether the text filter matches name or description, ignoring case
    ///
    /// `needle_lower` must already be lowercase.
    pub(crate) fn matches_text(&self, needle_lower: &str) -> bool {
        needle_lower.is_empty()
            || self.name.to_lowercase().contains(needle_lower)
            || self.description.to_lowercase().contains(needle_lower)
    }
}
