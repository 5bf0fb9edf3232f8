/*
 * job.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Render job state machine.
 */

//! Render jobs.
//!
//! A job moves through `DISCOVERY -> RENDER -> ASSEMBLE -> DONE`, one type per
//! state:
//!
//! ```text
//! RenderJob --discover()--> DiscoveredJob --render()--> RenderedJob --assemble()--> RenderOutput
//! ```
//!
//! Each transition consumes the previous state. The attribute store is only
//! mutable before `discover()` returns; the later states hand out shared
//! references to the [`Context`] only.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use folio_ast::{AstAttributes, Document};

use crate::catalogue::{EmbeddedCatalogue, ResourceCatalogue};
use crate::config::DocumentConfig;
use crate::context::Context;
use crate::error::Result;
use crate::html::HtmlRenderer;
use crate::iterator::{ObservableTreeIterator, TreeIteratorFactory};
use crate::output::{OutputResource, write_bundle};
use crate::post::{HtmlPostRenderer, MediaStorageOptions, PostRenderer};
use crate::warning::ContentWarning;

/// A job that has not run discovery yet.
pub struct RenderJob<'d> {
    document: &'d Document,
    context: Context,
    catalogue: Arc<dyn ResourceCatalogue>,
}

impl<'d> RenderJob<'d> {
    /// Start a job with a fresh context built from `config`.
    pub fn new(document: &'d Document, config: DocumentConfig) -> Result<Self> {
        Ok(Self::with_context(document, Context::new(config)?))
    }

    /// Start a job with a caller-built context, e.g. one with custom services.
    pub fn with_context(document: &'d Document, context: Context) -> Self {
        Self {
            document,
            context,
            catalogue: Arc::new(EmbeddedCatalogue),
        }
    }

    /// Catalogue used for the page template, themes and scripts.
    pub fn with_catalogue(mut self, catalogue: Arc<dyn ResourceCatalogue>) -> Self {
        self.catalogue = catalogue;
        self
    }

    /// Run discovery with the default hook set.
    pub fn discover(self) -> DiscoveredJob<'d> {
        self.discover_with(TreeIteratorFactory::default_iterator())
    }

    /// Run discovery with a custom iterator.
    pub fn discover_with(mut self, mut iterator: ObservableTreeIterator) -> DiscoveredJob<'d> {
        let _span = tracing::info_span!("discovery").entered();
        let visited = iterator.traverse(self.document, &mut self.context.attributes);
        tracing::info!(
            nodes = visited,
            hooks = iterator.len(),
            capabilities = ?self.context.attributes.present_capabilities().collect::<Vec<_>>(),
            "Discovery complete"
        );

        DiscoveredJob {
            document: self.document,
            context: self.context,
            catalogue: self.catalogue,
        }
    }
}

/// A job whose attribute store is complete.
pub struct DiscoveredJob<'d> {
    document: &'d Document,
    context: Context,
    catalogue: Arc<dyn ResourceCatalogue>,
}

impl<'d> DiscoveredJob<'d> {
    pub fn context(&self) -> &Context {
        &self.context
    }

    pub fn attributes(&self) -> &AstAttributes {
        &self.context.attributes
    }

    /// Render the document body.
    pub fn render(self) -> Result<RenderedJob> {
        let _span = tracing::info_span!("render").entered();
        let mut renderer = HtmlRenderer::new(&self.context);
        let body = renderer.render(self.document)?;
        let warnings = renderer.into_warnings();
        tracing::info!(bytes = body.len(), warnings = warnings.len(), "Render complete");

        Ok(RenderedJob {
            context: self.context,
            catalogue: self.catalogue,
            body,
            warnings,
        })
    }
}

/// A job with a rendered body, ready to be assembled.
pub struct RenderedJob {
    context: Context,
    catalogue: Arc<dyn ResourceCatalogue>,
    body: String,
    warnings: Vec<ContentWarning>,
}

impl RenderedJob {
    pub fn context(&self) -> &Context {
        &self.context
    }

    /// Rendered body, before it is wrapped in the page template.
    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn warnings(&self) -> &[ContentWarning] {
        &self.warnings
    }

    /// Wrap the body and assemble the resource tree with the HTML post-renderer.
    pub fn assemble(self) -> Result<RenderOutput> {
        let _span = tracing::info_span!("assemble").entered();
        let post = HtmlPostRenderer::new(&self.context, Arc::clone(&self.catalogue));

        let page = post.wrap(&self.body)?;
        let resources = post.generate_resources(&page)?;
        let root = post.wrap_resources(&self.context.document.output_name(), resources)?;
        let media_storage = post.preferred_media_storage_options();
        tracing::info!(root = root.name(), "Assembly complete");

        Ok(RenderOutput {
            resources: root,
            warnings: self.warnings,
            media_storage,
            attributes: self.context.attributes,
        })
    }
}

/// The result of a finished job.
#[derive(Debug)]
pub struct RenderOutput {
    pub resources: OutputResource,
    pub warnings: Vec<ContentWarning>,
    pub media_storage: MediaStorageOptions,
    /// The attribute store as discovery left it.
    pub attributes: AstAttributes,
}

impl RenderOutput {
    /// The final HTML page.
    pub fn page(&self) -> Option<&str> {
        self.resources
            .as_group()
            .and_then(|group| group.get("index"))
            .and_then(OutputResource::as_text)
            .map(|artifact| artifact.content.as_str())
    }

    /// Write the resource tree under `output_dir`.
    pub fn write_to(self, output_dir: &Path) -> Result<PathBuf> {
        write_bundle(self.resources, output_dir)
    }
}

/// Run a whole job over `document` with the given configuration and catalogue.
pub fn render_document(
    document: &Document,
    config: DocumentConfig,
    catalogue: Arc<dyn ResourceCatalogue>,
) -> Result<RenderOutput> {
    RenderJob::new(document, config)?
        .with_catalogue(catalogue)
        .discover()
        .render()?
        .assemble()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DocumentType;
    use folio_ast::{Block, Capability, Heading, Inline, Paragraph};

    fn document() -> Document {
        Document::new(vec![
            Block::Heading(Heading {
                depth: 1,
                content: vec![Inline::text("Intro")],
                custom_id: None,
            }),
            Block::Paragraph(Paragraph {
                content: vec![Inline::text("hello")],
            }),
        ])
    }

    #[test]
    fn test_discovery_populates_attributes() {
        let document = document();
        let job = RenderJob::new(&document, DocumentConfig::default())
            .unwrap()
            .discover();
        assert!(job.attributes().identifier("intro").is_some());
        assert!(!job.attributes().has_presence(Capability::Code));
    }

    #[test]
    fn test_states_run_in_order() {
        let document = document();
        let rendered = RenderJob::new(&document, DocumentConfig::default())
            .unwrap()
            .discover()
            .render()
            .unwrap();
        assert!(rendered.body().contains("<h1 id=\"intro\""));

        let output = rendered.assemble().unwrap();
        let page = output.page().unwrap();
        assert!(page.contains("<p>hello</p>"));
        assert_eq!(output.resources.name(), "document");
        assert!(output.warnings.is_empty());
    }

    #[test]
    fn test_named_document_names_root_group() {
        let document = document();
        let mut config = DocumentConfig::default();
        config.document.name = Some("My Report".to_string());
        config.document.doc_type = DocumentType::Paged;
        let output = render_document(&document, config, Arc::new(EmbeddedCatalogue)).unwrap();
        assert_eq!(output.resources.name(), "my-report");
        assert!(output.page().unwrap().contains("<title>My Report</title>"));
    }
}
