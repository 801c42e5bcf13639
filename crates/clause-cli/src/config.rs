//! Runtime configuration for the `clausegen` binary

use anyhow::Context;
use clap::ArgMatches;
use clause_catalog::Catalog;
use std::borrow::Cow;
use std::path::{Path, PathBuf};

/// Environment variable naming a catalog file
pub const CATALOG_ENV: &str = "CLAUSEGEN_CATALOG";

/// Environment variable holding a log filter directive
pub const LOG_ENV: &str = "CLAUSEGEN_LOG";

/// CLI configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliConfig {
    /// Catalog file; the built-in catalog when unset
    pub catalog_path: Option<PathBuf>,
    /// Emit JSON instead of text
    pub json: bool,
    /// Explicit `tracing` filter directive
    pub log_filter: Option<String>,
    /// Number of `-v` flags
    pub verbosity: u8,
}

impl CliConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With catalog file
    #[inline]
    #[must_use]
    pub fn with_catalog_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.catalog_path = Some(path.into());
        self
    }

    /// With JSON output
    #[inline]
    #[must_use]
    pub fn with_json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }

    /// With log filter
    #[inline]
    #[must_use]
    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = Some(filter.into());
        self
    }

    /// With verbosity
    #[inline]
    #[must_use]
    pub fn with_verbosity(mut self, verbosity: u8) -> Self {
        self.verbosity = verbosity;
        self
    }

    /// Read global options from parsed arguments
    ///
    /// Environment fallbacks are resolved by clap.
    #[must_use]
    pub fn from_matches(matches: &ArgMatches) -> Self {
        Self {
            catalog_path: matches.get_one::<PathBuf>("catalog").cloned(),
            json: matches.get_flag("json"),
            log_filter: matches.get_one::<String>("log").cloned(),
            verbosity: matches.get_count("verbose"),
        }
    }

    /// Filter directive for the log subscriber
    ///
    /// An explicit filter wins; otherwise verbosity picks the level.
    #[must_use]
    pub fn log_directive(&self) -> String {
        match &self.log_filter {
            Some(filter) if !filter.trim().is_empty() => filter.clone(),
            _ => match self.verbosity {
                0 => "warn",
                1 => "info",
                _ => "debug",
            }
            .to_string(),
        }
    }

    /// Load the configured catalog
    ///
    /// # Errors
    /// Returns an error if the file cannot be read, parsed or validated.
    pub fn load_catalog(&self) -> anyhow::Result<Cow<'static, Catalog>> {
        match &self.catalog_path {
            Some(path) => load_file(path).map(Cow::Owned),
            None => Catalog::builtin()
                .map(Cow::Borrowed)
                .context("built-in catalog is invalid"),
        }
    }
}

fn load_file(path: &Path) -> anyhow::Result<Catalog> {
    Catalog::from_path(path).with_context(|| format!("loading catalog {}", path.display()))
}
