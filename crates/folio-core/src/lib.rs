/*
 * lib.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Core rendering pipeline for Folio.
//!
//! Turns a [`folio_ast::Document`] into a self-contained HTML bundle:
//!
//! 1. **Discovery**: one pre-order traversal with a list of
//!    [`TreeHook`](hooks::TreeHook)s populates the attribute store (presence
//!    flags, identifiers, link definitions, locations).
//! 2. **Render**: [`HtmlRenderer`](html::HtmlRenderer) writes the body,
//!    reading the store but never changing it.
//! 3. **Assemble**: [`HtmlPostRenderer`](post::HtmlPostRenderer) fills the
//!    page template and collects the theme and the scripts the document
//!    needs into an [`OutputResource`](output::OutputResource) tree.
//!
//! [`job::RenderJob`] sequences the three phases.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use folio_ast::{Block, Document, MermaidDiagram};
//! use folio_core::{DocumentConfig, EmbeddedCatalogue, render_document};
//!
//! let document = Document::new(vec![Block::MermaidDiagram(MermaidDiagram {
//!     code: "graph TD; A-->B".to_string(),
//! })]);
//! let output = render_document(&document, DocumentConfig::default(), Arc::new(EmbeddedCatalogue)).unwrap();
//!
//! let scripts = output.resources.as_group().unwrap().group("script").unwrap();
//! assert_eq!(scripts.names(), vec!["script", "mermaid"]);
//! ```

pub mod catalogue;
pub mod config;
pub mod context;
pub mod error;
pub mod hooks;
pub mod html;
pub mod iterator;
pub mod job;
pub mod localization;
pub mod numbering;
pub mod output;
pub mod post;
pub mod warning;

pub use catalogue::{
    DirectoryCatalogue, EmbeddedCatalogue, LayeredCatalogue, MemoryCatalogue, ResourceCatalogue,
};
pub use config::{DocumentConfig, DocumentInfo, DocumentType, RenderOptions};
pub use context::Context;
pub use error::{ConfigurationError, PackagingError, RenderError, Result};
pub use iterator::{ObservableTreeIterator, TreeIteratorFactory};
pub use job::{DiscoveredJob, RenderJob, RenderOutput, RenderedJob, render_document};
pub use output::{OutputResource, ResourceGroup, write_bundle};
pub use post::{HtmlPostRenderer, MediaStorageOptions, PostRenderer};
pub use warning::{ContentWarning, WarningKind};
