//! Error types for the clause catalog
//!
//! Covers:
//! - Reading and parsing catalog documents
//! - Load-time schema checks on templates

use crate::loader::CatalogFormat;
use std::path::PathBuf;

/// Errors raised while loading or building a [`Catalog`](crate::Catalog)
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// IO error during file read
    #[error("io error reading {path}: {source}")]
    Io {
        /// File that failed to read
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// File extension does not map to a known format
    #[error("unsupported catalog format: '{0}'")]
    UnsupportedFormat(String),

    /// Document could not be deserialized
    #[error("failed to parse {format} catalog: {message}")]
    Parse {
        /// Format the document was parsed as
        format: CatalogFormat,
        /// Deserializer message
        message: String,
    },

    /// Template id is used more than once
    #[error("duplicate template id: {0}")]
    DuplicateTemplate(String),

    /// Template metadata is unusable
    #[error("invalid template '{id}': {reason}")]
    InvalidTemplate {
        /// Template id, possibly empty
        id: String,
        /// What is wrong
        reason: String,
    },

    /// Field name is declared twice on one template
    #[error("template '{template}' declares field '{field}' more than once")]
    DuplicateField {
        /// Template id
        template: String,
        /// Repeated field name
        field: String,
    },

    /// Field schema is inconsistent
    #[error("invalid field '{field}' on template '{template}': {reason}")]
    InvalidField {
        /// Template id
        template: String,
        /// Field name
        field: String,
        /// What is wrong
        reason: String,
    },

    /// Body references a placeholder with no declared field
    #[error("template '{template}' uses placeholder '{{{{{placeholder}}}}}' with no matching field")]
    UndeclaredPlaceholder {
        /// Template id
        template: String,
        /// Placeholder name without braces
        placeholder: String,
    },
}

impl CatalogError {
    /// Create IO error for path
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create parse error
    pub fn parse(format: CatalogFormat, message: impl ToString) -> Self {
        Self::Parse {
            format,
            message: message.to_string(),
        }
    }

    /// Create invalid field error
    pub fn invalid_field(
        template: impl Into<String>,
        field: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidField {
            template: template.into(),
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Whether the error comes from template content rather than IO or syntax
    #[inline]
    #[must_use]
    pub fn is_schema_error(&self) -> bool {
        !matches!(
            self,
            Self::Io { .. } | Self::UnsupportedFormat(_) | Self::Parse { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn undeclared_placeholder_display() {
        let err = CatalogError::UndeclaredPlaceholder {
            template: "nda".to_string(),
            placeholder: "party".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "template 'nda' uses placeholder '{{party}}' with no matching field"
        );
    }

    #[test]
    fn schema_classification() {
        assert!(CatalogError::DuplicateTemplate("x".into()).is_schema_error());
        assert!(!CatalogError::UnsupportedFormat("ini".into()).is_schema_error());
        assert!(!CatalogError::parse(CatalogFormat::Yaml, "bad").is_schema_error());
    }
}
