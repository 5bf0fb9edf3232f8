/*
 * context.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Per-job render context.
 */

//! Render context.
//!
//! A [`Context`] is created once per render job. It owns the attribute store
//! that discovery populates and carries the document configuration plus
//! shared handles to the numbering and localization services. Discovery
//! takes it by `&mut`; every later stage only reads it.

use std::fmt;
use std::sync::Arc;

use folio_ast::{AstAttributes, Heading, LocationKind};

use crate::config::{DocumentConfig, DocumentInfo, DocumentType, RenderOptions};
use crate::error::ConfigurationError;
use crate::localization::{BuiltinLocalizer, Localizer};
use crate::numbering::{DocumentNumbering, NumberingService};

pub struct Context {
    pub document: DocumentInfo,
    pub options: RenderOptions,
    pub attributes: AstAttributes,
    numbering: Arc<dyn NumberingService + Send + Sync>,
    localizer: Arc<dyn Localizer + Send + Sync>,
}

impl Context {
    /// Build a context with the default numbering and localization services.
    ///
    /// Fails if a numbering format in the configuration cannot be parsed.
    pub fn new(config: DocumentConfig) -> Result<Self, ConfigurationError> {
        let numbering = DocumentNumbering::from_config(&config.document.numbering_or_default())?;
        Ok(Self {
            document: config.document,
            options: config.options,
            attributes: AstAttributes::new(),
            numbering: Arc::new(numbering),
            localizer: Arc::new(BuiltinLocalizer),
        })
    }

    pub fn with_numbering(mut self, numbering: Arc<dyn NumberingService + Send + Sync>) -> Self {
        self.numbering = numbering;
        self
    }

    pub fn with_localizer(mut self, localizer: Arc<dyn Localizer + Send + Sync>) -> Self {
        self.localizer = localizer;
        self
    }

    /// Localized text for `key` in the document locale.
    ///
    /// Always `None` when the document sets no locale.
    pub fn localize(&self, key: &str) -> Option<String> {
        let locale = self.document.locale.as_deref()?;
        self.localizer.localize(key, locale)
    }

    /// Label of the `index`-th node of `kind`, in document order.
    ///
    /// `None` when location awareness is disabled, when discovery recorded
    /// no such node, or when the numbering service does not number it.
    pub fn location_label(&self, kind: LocationKind, index: usize) -> Option<String> {
        if !self.options.location_awareness {
            return None;
        }
        let location = self.attributes.location(kind, index)?;
        self.numbering
            .label(kind, location)
            .filter(|label| !label.is_empty())
    }

    /// Whether a page break is inserted before `heading`.
    pub fn should_auto_page_break(&self, heading: &Heading) -> bool {
        let depth = self.document.layout.auto_page_break_heading_depth;
        matches!(
            self.document.doc_type,
            DocumentType::Paged | DocumentType::Slides
        ) && !heading.is_marker()
            && heading.depth <= depth
    }
}

impl fmt::Debug for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Context")
            .field("document", &self.document)
            .field("options", &self.options)
            .field("attributes", &self.attributes)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_ast::Location;

    fn heading(depth: u8) -> Heading {
        Heading {
            depth,
            content: Vec::new(),
            custom_id: None,
        }
    }

    #[test]
    fn test_localize_requires_locale() {
        let mut config = DocumentConfig::default();
        let context = Context::new(config.clone()).unwrap();
        assert_eq!(context.localize("figure"), None);

        config.document.locale = Some("de".to_string());
        let context = Context::new(config).unwrap();
        assert_eq!(context.localize("figure").as_deref(), Some("Abbildung"));
    }

    #[test]
    fn test_location_label_respects_option() {
        let mut config = DocumentConfig::default();
        let mut context = Context::new(config.clone()).unwrap();
        context.attributes.record_location(
            LocationKind::Figure,
            Location {
                sections: Vec::new(),
                ordinals: vec![1],
            },
        );
        assert_eq!(context.location_label(LocationKind::Figure, 0).as_deref(), Some("1"));
        assert_eq!(context.location_label(LocationKind::Figure, 1), None);

        config.options.location_awareness = false;
        let mut context = Context::new(config).unwrap();
        context.attributes.record_location(LocationKind::Figure, Location::default());
        assert_eq!(context.location_label(LocationKind::Figure, 0), None);
    }

    #[test]
    fn test_auto_page_break() {
        let mut config = DocumentConfig::default();
        let plain = Context::new(config.clone()).unwrap();
        assert!(!plain.should_auto_page_break(&heading(1)));

        config.document.doc_type = DocumentType::Paged;
        let paged = Context::new(config).unwrap();
        assert!(paged.should_auto_page_break(&heading(1)));
        assert!(!paged.should_auto_page_break(&heading(2)));
        assert!(!paged.should_auto_page_break(&heading(0)));
    }

    #[test]
    fn test_invalid_numbering_format() {
        let mut config = DocumentConfig::default();
        config.document.numbering = Some(crate::config::NumberingConfig {
            headings: Some("??".to_string()),
            ..Default::default()
        });
        assert!(matches!(
            Context::new(config),
            Err(ConfigurationError::InvalidNumberingFormat(_))
        ));
    }
}
