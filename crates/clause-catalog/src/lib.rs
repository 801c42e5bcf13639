//! Clause Catalog
//!
//! Immutable clause templates and the read-only queries over them.
//!
//! # Overview
//!
//! - **ClauseTemplate / FieldSpec**: template metadata, ordered field schema
//!   and a body with `{{field}}` placeholders
//! - **Catalog**: validated collection with `list_categories` and `search`
//! - **placeholder**: scanning and single-pass substitution
//!
//! Every placeholder in a body must name a declared field; catalogs that
//! violate this are rejected when built.
//!
//! # Example
//!
//! ```rust
//! use clause_catalog::Catalog;
//!
//! let catalog = Catalog::builtin().unwrap();
//! let hits = catalog.search("confidential", "");
//! assert_eq!(hits[0].id, "nda");
//! ```

#![warn(missing_docs)]

pub mod catalog;
pub mod error;
pub mod loader;
pub mod model;
pub mod placeholder;
pub mod validation;

// Re-exports
pub use catalog::{Catalog, BUILTIN_CATALOG_YAML};
pub use error::CatalogError;
pub use loader::{CatalogDocument, CatalogFormat};
pub use model::{ClauseTemplate, FieldKind, FieldSpec};
pub use validation::CatalogLint;

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for catalog queries
    pub use crate::{Catalog, CatalogError, ClauseTemplate, FieldKind, FieldSpec};
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
