//! Error types for the form engine

/// Errors from [`FormEngine`](crate::FormEngine) transitions
///
/// Both variants leave the form state untouched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    /// Requested template id is not in the catalog
    #[error("template not found: {0}")]
    TemplateNotFound(String),

    /// Render requested while browsing
    #[error("no template selected")]
    NoActiveTemplate,
}
