//! Clausegen CLI
//!
//! Thin presentation layer over [`clause_catalog`] and [`clause_form`]:
//! argument parsing, configuration, logging, text/JSON output and an
//! interactive session. Clipboard access is left to the user's terminal.

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod logging;
pub mod output;
pub mod session;

pub use cli::build_cli;
pub use config::CliConfig;
pub use session::{Session, SessionCommand};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
