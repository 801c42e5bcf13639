//! Advisory value checks
//!
//! Rendering never consults this module. It exists for presentation layers
//! that want to flag input before the user copies a draft.

use chrono::NaiveDate;
use clause_catalog::{ClauseTemplate, FieldKind, FieldSpec};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt::{self, Display, Formatter};

/// Date format accepted for [`FieldKind::Date`]
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// What is wrong with a value
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    /// Required field is empty
    Missing,
    /// Numeric field does not parse as a number
    NotNumeric,
    /// Date field is not `YYYY-MM-DD`
    InvalidDate,
    /// Single-choice value is not one of the choices
    NotAChoice,
    /// Value stored under a name the template does not declare
    UnknownField,
}

/// One finding against one field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldIssue {
    /// Field name (or stray key)
    pub field: String,
    /// Problem found
    pub kind: IssueKind,
}

impl FieldIssue {
    fn new(field: &str, kind: IssueKind) -> Self {
        Self {
            field: field.to_string(),
            kind,
        }
    }
}

impl Display for FieldIssue {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let field = &self.field;
        match self.kind {
            IssueKind::Missing => write!(f, "{field}: required"),
            IssueKind::NotNumeric => write!(f, "{field}: not a number"),
            IssueKind::InvalidDate => write!(f, "{field}: expected a date as YYYY-MM-DD"),
            IssueKind::NotAChoice => write!(f, "{field}: not one of the listed choices"),
            IssueKind::UnknownField => write!(f, "{field}: not a field of this template"),
        }
    }
}

/// Check one raw value against its field declaration
#[must_use]
pub fn check_value(field: &FieldSpec, raw: &str) -> Option<IssueKind> {
    let value = raw.trim();
    if value.is_empty() {
        return field.required.then_some(IssueKind::Missing);
    }
    match field.kind {
        FieldKind::ShortText | FieldKind::MultilineText => None,
        FieldKind::Numeric => match value.parse::<f64>() {
            Ok(n) if n.is_finite() => None,
            _ => Some(IssueKind::NotNumeric),
        },
        FieldKind::Date => NaiveDate::parse_from_str(value, DATE_FORMAT)
            .is_err()
            .then_some(IssueKind::InvalidDate),
        FieldKind::SingleChoice => (!field.choices.iter().any(|c| c == value))
            .then_some(IssueKind::NotAChoice),
    }
}

/// Check a set of values against a template's schema
///
/// Declared fields are reported in form order, then non-empty stray keys in
/// name order.
#[must_use]
pub fn validate_values(
    template: &ClauseTemplate,
    values: &BTreeMap<String, String>,
) -> Vec<FieldIssue> {
    let mut issues: Vec<FieldIssue> = template
        .fields
        .iter()
        .filter_map(|field| {
            let raw = values.get(&field.name).map_or("", String::as_str);
            check_value(field, raw).map(|kind| FieldIssue::new(&field.name, kind))
        })
        .collect();

    issues.extend(
        values
            .iter()
            .filter(|(name, value)| !value.is_empty() && template.field(name).is_none())
            .map(|(name, _)| FieldIssue::new(name, IssueKind::UnknownField)),
    );
    issues
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(kind: FieldKind) -> FieldSpec {
        FieldSpec::new("f", "F", kind)
    }

    #[test]
    fn empty_optional_is_fine() {
        for kind in FieldKind::ALL {
            assert_eq!(check_value(&field(kind), ""), None);
        }
    }

    #[test]
    fn empty_required_is_missing() {
        let f = field(FieldKind::ShortText).required();
        assert_eq!(check_value(&f, "   "), Some(IssueKind::Missing));
    }

    #[test]
    fn numeric_values() {
        let f = field(FieldKind::Numeric);
        assert_eq!(check_value(&f, "1.5"), None);
        assert_eq!(check_value(&f, " 30 "), None);
        assert_eq!(check_value(&f, "thirty"), Some(IssueKind::NotNumeric));
        assert_eq!(check_value(&f, "inf"), Some(IssueKind::NotNumeric));
    }

    #[test]
    fn date_values() {
        let f = field(FieldKind::Date);
        assert_eq!(check_value(&f, "2024-02-29"), None);
        assert_eq!(check_value(&f, "2023-02-29"), Some(IssueKind::InvalidDate));
        assert_eq!(check_value(&f, "29/02/2024"), Some(IssueKind::InvalidDate));
    }

    #[test]
    fn choice_values_are_exact() {
        let f = FieldSpec::single_choice("c", "C", ["Net 30", "Net 60"]);
        assert_eq!(check_value(&f, "Net 30"), None);
        assert_eq!(check_value(&f, "net 30"), Some(IssueKind::NotAChoice));
    }

    #[test]
    fn surrounding_whitespace_is_ignored_for_every_kind() {
        let choice = FieldSpec::single_choice("c", "C", ["Net 30", "Net 60"]);
        assert_eq!(check_value(&choice, " Net 30 "), None);
        assert_eq!(check_value(&field(FieldKind::Numeric), " 30 "), None);
        assert_eq!(check_value(&field(FieldKind::Date), " 2024-02-29 "), None);
    }

    #[test]
    fn issue_display() {
        let issue = FieldIssue::new("lateFee", IssueKind::NotNumeric);
        assert_eq!(issue.to_string(), "lateFee: not a number");
    }
}
