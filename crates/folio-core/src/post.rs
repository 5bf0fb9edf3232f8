/*
 * post.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Post-rendering: page template and resource assembly.
 */

//! Post-rendering.
//!
//! After the body has been rendered, a [`PostRenderer`] wraps it in the
//! page template and assembles the output resources that must ship with
//! it. [`HtmlPostRenderer`] produces:
//!
//! ```text
//! <document>/
//!   index.html
//!   theme/    global.css, layout/<layout>.css, color/<color>.css, theme.css
//!   script/   script.js, then only the scripts the document needs
//! ```
//!
//! Which scripts ship depends on the document type, on the presence flags
//! set during discovery and on whether a preview server is attached.

use std::sync::Arc;

use folio_template::TemplateProcessor;

use crate::catalogue::ResourceCatalogue;
use crate::config::{DocumentTheme, DocumentType};
use crate::context::Context;
use crate::error::{PackagingError, Result};
use crate::html::{escape_html, escape_js};
use crate::output::{ArtifactType, LazyArtifact, OutputResource, ResourceGroup, TextArtifact};

/// Catalogue path of the page template.
pub const HTML_WRAPPER_TEMPLATE: &str = "html-wrapper.html.template";

/// Title used when the document has no name.
const DEFAULT_TITLE: &str = "Untitled";

/// How media referenced by the document should be stored.
///
/// `None` leaves the choice to the media collaborator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MediaStorageOptions {
    pub enable_local: Option<bool>,
    pub enable_remote: Option<bool>,
}

/// Turns a rendered body into the final output resources.
pub trait PostRenderer {
    /// Media storage this output format needs.
    fn preferred_media_storage_options(&self) -> MediaStorageOptions;

    /// The page template with every placeholder except `CONTENT` filled in.
    fn create_template_processor(&self) -> Result<TemplateProcessor>;

    /// Resources for the given final page, in output order.
    fn generate_resources(&self, page: &str) -> Result<Vec<OutputResource>>;

    /// Wrap resources into a single named group.
    fn wrap_resources(&self, name: &str, resources: Vec<OutputResource>) -> Result<OutputResource> {
        Ok(ResourceGroup::new(name, resources)?.into())
    }

    /// Inject `body` into the page template.
    fn wrap(&self, body: &str) -> Result<String> {
        let mut processor = self.create_template_processor()?;
        processor.value("CONTENT", body);
        Ok(processor.process()?)
    }
}

/// A catalogue entry to ship as a lazy artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentRef {
    pub name: String,
    pub path: String,
    pub artifact_type: ArtifactType,
}

impl ComponentRef {
    fn theme(name: String) -> Self {
        Self {
            path: format!("theme/{}.css", name),
            name,
            artifact_type: ArtifactType::Css,
        }
    }

    fn script(name: &str) -> Self {
        Self {
            name: name.to_string(),
            path: format!("script/{}.js", name),
            artifact_type: ArtifactType::Javascript,
        }
    }
}

/// Post-renderer for HTML output.
pub struct HtmlPostRenderer<'a> {
    context: &'a Context,
    catalogue: Arc<dyn ResourceCatalogue>,
}

impl<'a> HtmlPostRenderer<'a> {
    pub fn new(context: &'a Context, catalogue: Arc<dyn ResourceCatalogue>) -> Self {
        Self { context, catalogue }
    }

    /// The configured theme with missing components taken from the built-in one.
    pub fn theme(&self) -> DocumentTheme {
        self.context
            .document
            .theme
            .or_default(&DocumentTheme::builtin())
    }

    /// Theme stylesheets, in import order: global, layout, color.
    pub fn theme_components(&self) -> Result<Vec<ComponentRef>> {
        let theme = self.theme();
        theme.validate()?;

        let mut components = vec![ComponentRef::theme("global".to_string())];
        if let Some(layout) = &theme.layout {
            components.push(ComponentRef::theme(format!("layout/{}", layout)));
        }
        if let Some(color) = &theme.color {
            components.push(ComponentRef::theme(format!("color/{}", color)));
        }
        Ok(components)
    }

    /// Scripts the document needs, in load order.
    pub fn script_components(&self) -> Vec<ComponentRef> {
        let doc_type = self.context.document.doc_type;
        let attributes = &self.context.attributes;
        [
            ("script", true),
            ("slides", doc_type == DocumentType::Slides),
            ("paged", doc_type == DocumentType::Paged),
            ("math", attributes.has_math()),
            ("mermaid", attributes.has_mermaid_diagram()),
            ("tikz", attributes.has_tikz_diagram()),
            ("code", attributes.has_code()),
            ("websockets", self.context.options.use_server()),
        ]
        .into_iter()
        .filter(|(_, needed)| *needed)
        .map(|(name, _)| ComponentRef::script(name))
        .collect()
    }

    /// Fail if any component is absent from the catalogue.
    fn check_available(&self, components: &[ComponentRef]) -> Result<()> {
        match components.iter().find(|c| !self.catalogue.contains(&c.path)) {
            Some(component) => Err(PackagingError::MissingResource {
                path: component.path.clone(),
            }
            .into()),
            None => Ok(()),
        }
    }

    fn lazy_artifacts(&self, components: &[ComponentRef]) -> Vec<OutputResource> {
        components
            .iter()
            .map(|component| {
                let catalogue = Arc::clone(&self.catalogue);
                let path = component.path.clone();
                LazyArtifact::new(&component.name, component.artifact_type, move || {
                    catalogue.load(&path)
                })
                .into()
            })
            .collect()
    }

    /// `"key": "value"` object entries for the TeX macro table.
    fn tex_macro_entries(&self) -> Vec<String> {
        self.context
            .document
            .tex_macros
            .iter()
            .map(|(name, expansion)| format!("\"{}\": \"{}\"", escape_js(name), escape_js(expansion)))
            .collect()
    }
}

impl PostRenderer for HtmlPostRenderer<'_> {
    fn preferred_media_storage_options(&self) -> MediaStorageOptions {
        // Pages load media relative to the bundle, so local files must be copied.
        MediaStorageOptions {
            enable_local: Some(true),
            enable_remote: None,
        }
    }

    fn create_template_processor(&self) -> Result<TemplateProcessor> {
        let mut processor = TemplateProcessor::new(self.catalogue.load(HTML_WRAPPER_TEMPLATE)?);
        let document = &self.context.document;
        let attributes = &self.context.attributes;
        let page = &document.layout.page_format;
        let paragraph = &document.layout.paragraph_style;
        let em = |value: Option<f64>| value.map(|v| format!("{}em", v));

        processor
            .optional_value("SERVER_PORT", self.context.options.server_port)
            .value("TITLE", escape_html(document.name.as_deref().unwrap_or(DEFAULT_TITLE)))
            .optional_value("LANG", document.locale.as_deref().map(escape_html))
            .value("DOCTYPE", document.doc_type.as_str())
            .conditional("IS_PAGED", document.doc_type == DocumentType::Paged)
            .conditional("IS_SLIDES", document.doc_type == DocumentType::Slides)
            .conditional("HAS_CODE", attributes.has_code())
            .conditional("HAS_MERMAID_DIAGRAM", attributes.has_mermaid_diagram())
            .conditional("HAS_TIKZ_DIAGRAM", attributes.has_tikz_diagram())
            .conditional("HAS_MATH", attributes.has_math())
            .conditional("HAS_PAGE_SIZE", page.has_size())
            .optional_value("PAGE_WIDTH", page.width)
            .optional_value("PAGE_HEIGHT", page.height)
            .optional_value("PAGE_MARGIN", page.margin.as_ref())
            .optional_value("COLUMN_COUNT", page.columns)
            .optional_value("HORIZONTAL_ALIGNMENT", page.alignment.map(|a| a.as_css()))
            .optional_value("PARAGRAPH_SPACING", em(paragraph.spacing))
            .optional_value("PARAGRAPH_LINE_HEIGHT", paragraph.line_height)
            .optional_value("PARAGRAPH_LETTER_SPACING", em(paragraph.letter_spacing))
            .optional_value("PARAGRAPH_INDENT", em(paragraph.indent))
            .iterable("TEX_MACROS", self.tex_macro_entries());

        Ok(processor)
    }

    fn generate_resources(&self, page: &str) -> Result<Vec<OutputResource>> {
        let theme = self.theme_components()?;
        let scripts = self.script_components();
        self.check_available(&theme)?;
        self.check_available(&scripts)?;

        let manifest = theme
            .iter()
            .map(|component| format!("@import url('{}.css');", component.name))
            .collect::<Vec<_>>()
            .join("\n");
        let mut theme_resources = self.lazy_artifacts(&theme);
        theme_resources.push(TextArtifact::new("theme", manifest, ArtifactType::Css).into());

        tracing::debug!(
            theme = ?theme.iter().map(|c| c.name.as_str()).collect::<Vec<_>>(),
            scripts = ?scripts.iter().map(|c| c.name.as_str()).collect::<Vec<_>>(),
            "Assembling resources"
        );

        Ok(vec![
            TextArtifact::new("index", page, ArtifactType::Html).into(),
            ResourceGroup::new("theme", theme_resources)?.into(),
            ResourceGroup::new("script", self.lazy_artifacts(&scripts))?.into(),
        ])
    }
}
