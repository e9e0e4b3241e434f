//! Career catalog: typed entries, the built-in reference table and file loading

pub mod entry;
mod reference;

pub use entry::{CatalogEntry, Education, Experience, Profile};

use crate::error::{RecommenderError, Result};
use log::info;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Ordered, immutable list of candidate careers.
///
/// Insertion order is the only stable order and is used to break score ties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    pub fn new(entries: Vec<CatalogEntry>) -> Self {
        Self { entries }
    }

    /// The ten-row table the recommender ships with
    pub fn reference() -> Self {
        Self::new(reference::entries())
    }

    /// Load a catalog from a `.toml` or `.json` file holding an `entries` array
    pub fn from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(RecommenderError::InvalidInput(format!(
                "Catalog file does not exist: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_lowercase());

        let catalog: Catalog = match extension.as_deref() {
            Some("toml") => toml::from_str(&content).map_err(|e| {
                RecommenderError::Configuration(format!("Failed to parse catalog: {}", e))
            })?,
            Some("json") => serde_json::from_str(&content).map_err(|e| {
                RecommenderError::Configuration(format!("Failed to parse catalog: {}", e))
            })?,
            _ => {
                return Err(RecommenderError::InvalidInput(format!(
                    "Unsupported catalog format: {}. Allowed: toml, json",
                    path.display()
                )))
            }
        };

        info!("Loaded {} catalog entries from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    pub fn get(&self, index: usize) -> Option<&CatalogEntry> {
        self.entries.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CatalogEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn find_by_label(&self, label: &str) -> Option<&CatalogEntry> {
        self.entries.iter().find(|e| e.label.eq_ignore_ascii_case(label))
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::reference()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a CatalogEntry;
    type IntoIter = std::slice::Iter<'a, CatalogEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
