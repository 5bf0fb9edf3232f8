/*
 * error.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Error types for template processing.

use thiserror::Error;

/// Errors that can occur while processing a template.
#[derive(Debug, Error)]
pub enum TemplateError {
    /// A scalar placeholder is used by the template but no value was supplied.
    #[error("No value supplied for required template placeholder [[{key}]]")]
    MissingValue { key: String },

    /// A conditional or iterable block is used but its key was never configured.
    #[error("No value supplied for template block [[{marker}:{key}]]")]
    UnresolvedBlock { marker: &'static str, key: String },

    /// A block opens but its closing marker is missing.
    #[error("Template block [[{marker}:{key}]] is never closed")]
    UnterminatedBlock { marker: &'static str, key: String },

    /// A closing marker appears without a matching opening one.
    #[error("Unexpected template marker [[{marker}:{key}]]")]
    StrayMarker { marker: &'static str, key: String },

    /// I/O error while reading a template file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl TemplateError {
    /// The placeholder key this error is about, if any.
    pub fn key(&self) -> Option<&str> {
        match self {
            TemplateError::MissingValue { key }
            | TemplateError::UnresolvedBlock { key, .. }
            | TemplateError::UnterminatedBlock { key, .. }
            | TemplateError::StrayMarker { key, .. } => Some(key),
            TemplateError::Io(_) => None,
        }
    }
}

/// Result type for template operations.
pub type TemplateResult<T> = Result<T, TemplateError>;
