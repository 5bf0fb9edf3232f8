/*
 * error.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Error types for folio-core

use std::path::PathBuf;

use folio_template::TemplateError;
use thiserror::Error;

/// Invalid or incomplete document configuration.
///
/// These are raised before any artifact is produced.
#[derive(Error, Debug)]
pub enum ConfigurationError {
    #[error("Template error: {0}")]
    Template(#[from] TemplateError),

    #[error("Invalid {component} theme name '{name}': expected lowercase letters, digits and dashes")]
    InvalidThemeComponent {
        component: &'static str,
        name: String,
    },

    #[error("Invalid size '{0}': expected a number followed by px, pt, cm, mm, in, em, rem or %")]
    InvalidSize(String),

    #[error("Invalid numbering format '{0}'")]
    InvalidNumberingFormat(String),

    #[error("Failed to read configuration {}: {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid configuration: {0}")]
    Invalid(#[from] serde_yaml::Error),
}

/// Failure while assembling the output resource tree.
#[derive(Error, Debug)]
pub enum PackagingError {
    #[error("Resource '{path}' is referenced but not found in the resource catalogue")]
    MissingResource { path: String },

    #[error("Duplicate artifact name '{name}' in group '{group}'")]
    DuplicateName { group: String, name: String },
}

#[derive(Error, Debug)]
pub enum RenderError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error(transparent)]
    Packaging(#[from] PackagingError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<TemplateError> for RenderError {
    fn from(err: TemplateError) -> Self {
        RenderError::Configuration(ConfigurationError::Template(err))
    }
}

pub type Result<T> = std::result::Result<T, RenderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_resource_names_path() {
        let err: RenderError = PackagingError::MissingResource {
            path: "script/mermaid.js".to_string(),
        }
        .into();
        assert!(err.to_string().contains("script/mermaid.js"));
    }

    #[test]
    fn test_template_error_is_configuration_error() {
        let err: RenderError = TemplateError::MissingValue {
            key: "TITLE".to_string(),
        }
        .into();
        assert!(matches!(
            err,
            RenderError::Configuration(ConfigurationError::Template(_))
        ));
        assert!(err.to_string().contains("TITLE"));
    }
}
