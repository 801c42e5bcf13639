//! Clause Form - session state and rendering
//!
//! Holds one user's transient form input, filters the catalog, and renders
//! the selected template by placeholder substitution.
//!
//! # Modes
//!
//! - **Browsing**: no template selected
//! - **Editing**: a template is selected
//!
//! Unknown template ids and renders while browsing are signaled with
//! [`FormError`] and never change state.
//!
//! # Example
//!
//! ```rust
//! use clause_catalog::Catalog;
//! use clause_form::FormEngine;
//!
//! let catalog = Catalog::builtin().unwrap();
//! let mut engine = FormEngine::new(catalog);
//! engine.select_template("payment").unwrap();
//! engine.set_field_value("payer", "Acme Corp");
//! let text = engine.render().unwrap();
//! assert!(text.contains("Acme Corp shall pay [payee]"));
//! ```

#![warn(unreachable_pub)]

pub mod engine;
pub mod error;
pub mod state;
pub mod validate;

// Re-exports for convenience
pub use engine::{render_template, FormEngine};
pub use error::FormError;
pub use state::{FormState, Mode};
pub use validate::{check_value, validate_values, FieldIssue, IssueKind};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
