//! Command implementations for the Folio CLI

pub mod inspect;
pub mod render;

use std::path::Path;

use anyhow::{Context, Result};
use folio_ast::Document;
use folio_core::DocumentConfig;

/// Read a document tree from a JSON file.
pub fn read_document(path: &Path) -> Result<Document> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read document tree {}", path.display()))?;
    Document::from_json(&json)
        .with_context(|| format!("Invalid document tree {}", path.display()))
}

/// Read the document configuration, or the defaults if no file is given.
pub fn read_config(path: Option<&Path>) -> Result<DocumentConfig> {
    match path {
        Some(path) => Ok(DocumentConfig::from_file(path)?),
        None => Ok(DocumentConfig::default()),
    }
}
