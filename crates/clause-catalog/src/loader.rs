//! Catalog documents
//!
//! A catalog document is a single mapping with a `templates` list. It can be
//! written as YAML, TOML or JSON; the format of a file is taken from its
//! extension.

use crate::catalog::Catalog;
use crate::error::CatalogError;
use crate::model::ClauseTemplate;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::path::Path;
use std::str::FromStr;

/// Serialization format of a catalog document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CatalogFormat {
    /// `.yaml` / `.yml`
    Yaml,
    /// `.toml`
    Toml,
    /// `.json`
    Json,
}

impl CatalogFormat {
    /// Detect format from a file extension
    ///
    /// # Errors
    /// Returns [`CatalogError::UnsupportedFormat`] for unknown or missing extensions.
    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default();
        ext.parse()
    }

    /// Deserialize a document
    ///
    /// # Errors
    /// Returns [`CatalogError::Parse`] when the text is not a valid document.
    pub fn parse_document(self, text: &str) -> Result<CatalogDocument, CatalogError> {
        match self {
            Self::Yaml => serde_yaml::from_str(text).map_err(|e| CatalogError::parse(self, e)),
            Self::Toml => toml::from_str(text).map_err(|e| CatalogError::parse(self, e)),
            Self::Json => serde_json::from_str(text).map_err(|e| CatalogError::parse(self, e)),
        }
    }
}

impl FromStr for CatalogFormat {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "yaml" | "yml" => Ok(Self::Yaml),
            "toml" => Ok(Self::Toml),
            "json" => Ok(Self::Json),
            other => Err(CatalogError::UnsupportedFormat(other.to_string())),
        }
    }
}

impl Display for CatalogFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Yaml => "yaml",
            Self::Toml => "toml",
            Self::Json => "json",
        })
    }
}

/// On-disk shape of a catalog
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogDocument {
    /// Templates in catalog order
    #[serde(default)]
    pub templates: Vec<ClauseTemplate>,
}

impl Catalog {
    /// Parse and validate a catalog document
    ///
    /// # Errors
    /// Returns a parse error or the first schema violation.
    pub fn from_str_as(format: CatalogFormat, text: &str) -> Result<Self, CatalogError> {
        let document = format.parse_document(text)?;
        Self::from_templates(document.templates)
    }

    /// Read, parse and validate a catalog file
    ///
    /// # Errors
    /// Returns an IO error, an unsupported-format error, a parse error or the
    /// first schema violation.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let format = CatalogFormat::from_path(path)?;
        let text =
            std::fs::read_to_string(path).map_err(|e| CatalogError::io_error(path, e))?;
        tracing::info!("Loading {} catalog from {}", format, path.display());
        Self::from_str_as(format, &text)
    }

    /// Export the catalog as a document
    #[must_use]
    pub fn to_document(&self) -> CatalogDocument {
        CatalogDocument {
            templates: self.templates().to_vec(),
        }
    }
}
