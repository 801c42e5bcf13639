//! Load-time template checks
//!
//! Hard errors reject the catalog. Unreferenced fields are only linted: a
//! field may exist purely to collect information for the reviewer.

use crate::error::CatalogError;
use crate::model::{ClauseTemplate, FieldKind};
use crate::placeholder;
use serde::Serialize;
use std::collections::HashSet;
use std::fmt::{self, Display, Formatter};

/// Non-fatal finding about a template
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CatalogLint {
    /// Declared field never appears as a placeholder in the body
    UnreferencedField {
        /// Template id
        template: String,
        /// Field name
        field: String,
    },
}

impl Display for CatalogLint {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnreferencedField { template, field } => write!(
                f,
                "template '{template}' declares field '{field}' but its body never uses it"
            ),
        }
    }
}

/// Check one template in isolation
///
/// # Errors
/// Returns the first schema violation found.
pub fn validate_template(template: &ClauseTemplate) -> Result<Vec<CatalogLint>, CatalogError> {
    let id = template.id.as_str();
    if id.trim().is_empty() {
        return Err(CatalogError::InvalidTemplate {
            id: id.to_string(),
            reason: "id is empty".to_string(),
        });
    }
    if template.name.trim().is_empty() {
        return Err(CatalogError::InvalidTemplate {
            id: id.to_string(),
            reason: "name is empty".to_string(),
        });
    }

    let mut declared = HashSet::new();
    for field in &template.fields {
        if !placeholder::is_valid_name(&field.name) {
            return Err(CatalogError::invalid_field(
                id,
                &field.name,
                "name cannot be written as a placeholder",
            ));
        }
        if !declared.insert(field.name.as_str()) {
            return Err(CatalogError::DuplicateField {
                template: id.to_string(),
                field: field.name.clone(),
            });
        }
        match (field.kind, field.choices.is_empty()) {
            (FieldKind::SingleChoice, true) => {
                return Err(CatalogError::invalid_field(
                    id,
                    &field.name,
                    "single-choice field has no choices",
                ));
            }
            (kind, false) if kind != FieldKind::SingleChoice => {
                return Err(CatalogError::invalid_field(
                    id,
                    &field.name,
                    format!("{kind} field cannot declare choices"),
                ));
            }
            _ => {}
        }
    }

    let used = template.placeholders();
    if let Some(undeclared) = used.iter().find(|name| !declared.contains(*name)) {
        return Err(CatalogError::UndeclaredPlaceholder {
            template: id.to_string(),
            placeholder: (*undeclared).to_string(),
        });
    }

    let used: HashSet<&str> = used.into_iter().collect();
    Ok(template
        .fields
        .iter()
        .filter(|f| !used.contains(f.name.as_str()))
        .map(|f| CatalogLint::UnreferencedField {
            template: id.to_string(),
            field: f.name.clone(),
        })
        .collect())
}
