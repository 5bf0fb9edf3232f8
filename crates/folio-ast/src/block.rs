/*
 * block.rs
 * Copyright (c) 2025 Posit, PBC
 */

use crate::inline::Inlines;
use crate::table::Table;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Block {
    Paragraph(Paragraph),
    Heading(Heading),
    BlockQuote(BlockQuote),
    CodeBlock(CodeBlock),
    OrderedList(OrderedList),
    UnorderedList(UnorderedList),
    HorizontalRule,
    Html(RawHtml),
    Table(Table),

    // folio extensions
    Figure(Figure),
    Math(Math),
    MermaidDiagram(MermaidDiagram),
    TikzDiagram(TikzDiagram),
    Container(Container),
    Callout(Callout),
    Collapse(Collapse),
    FullColumnSpan(FullColumnSpan),
    /// Content that is numbered by a custom key. Renders as its children.
    Numbered(Numbered),
    /// The output of an already-evaluated function call. Renders as its children.
    Expanded(Expanded),
    PageBreak,
    TableOfContents(TableOfContents),

    // invisible nodes: they carry information for discovery or for
    // runtime scripts, but produce no visible content of their own
    LinkDefinition(LinkDefinition),
    PageMarginContent(PageMarginContent),
    SlidesConfiguration(SlidesConfiguration),
}

pub type Blocks = Vec<Block>;

impl Block {
    /// Shorthand for a paragraph holding a single text run.
    pub fn paragraph(text: impl Into<String>) -> Self {
        Block::Paragraph(Paragraph {
            content: vec![crate::inline::Inline::text(text)],
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paragraph {
    pub content: Inlines,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Heading {
    /// Depth 1 to 6. Depth 0 is an invisible marker that only carries an identifier.
    pub depth: u8,
    pub content: Inlines,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_id: Option<String>,
}

impl Heading {
    pub fn is_marker(&self) -> bool {
        self.depth == 0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuoteKind {
    Tip,
    Note,
    Warning,
    Important,
}

impl QuoteKind {
    /// CSS class, also used as localization key for the quote label.
    pub fn as_css(&self) -> &'static str {
        match self {
            QuoteKind::Tip => "tip",
            QuoteKind::Note => "note",
            QuoteKind::Warning => "warning",
            QuoteKind::Important => "important",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockQuote {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<QuoteKind>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attribution: Option<Inlines>,
    pub content: Blocks,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CodeBlock {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    pub text: String,
    #[serde(default = "default_true")]
    pub line_numbers: bool,
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListItem {
    pub content: Blocks,
    /// Task list state, if this is a task item.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checked: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderedList {
    #[serde(default = "default_start")]
    pub start: u32,
    pub items: Vec<ListItem>,
}

fn default_start() -> u32 {
    1
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnorderedList {
    pub items: Vec<ListItem>,
}

/// HTML written by the author in the source document, emitted verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawHtml {
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Figure {
    pub child: Box<Block>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Math {
    pub expression: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MermaidDiagram {
    pub code: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TikzDiagram {
    pub code: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Container {
    pub children: Blocks,
    pub full_width: bool,
    pub width: Option<String>,
    pub height: Option<String>,
    pub foreground_color: Option<String>,
    pub background_color: Option<String>,
    pub margin: Option<String>,
    pub padding: Option<String>,
    pub border_color: Option<String>,
    pub border_width: Option<String>,
    pub corner_radius: Option<String>,
    pub text_alignment: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CalloutKind {
    #[default]
    Callout,
    Tip,
    Note,
    Warning,
    Error,
}

impl CalloutKind {
    pub fn as_css(&self) -> &'static str {
        match self {
            CalloutKind::Callout => "callout",
            CalloutKind::Tip => "tip",
            CalloutKind::Note => "note",
            CalloutKind::Warning => "warning",
            CalloutKind::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Callout {
    #[serde(default)]
    pub kind: CalloutKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<Inlines>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding: Option<String>,
    pub children: Blocks,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Collapse {
    pub title: Inlines,
    #[serde(default)]
    pub open: bool,
    pub children: Blocks,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FullColumnSpan {
    pub children: Blocks,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Numbered {
    pub key: String,
    pub children: Blocks,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expanded {
    pub children: Blocks,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableOfContents {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<Inlines>,
    #[serde(default = "default_toc_depth")]
    pub max_depth: u8,
}

fn default_toc_depth() -> u8 {
    3
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkDefinition {
    pub label: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MarginPosition {
    TopLeft,
    TopCenter,
    TopRight,
    BottomLeft,
    BottomCenter,
    BottomRight,
}

impl MarginPosition {
    pub fn as_css(&self) -> &'static str {
        match self {
            MarginPosition::TopLeft => "top-left",
            MarginPosition::TopCenter => "top-center",
            MarginPosition::TopRight => "top-right",
            MarginPosition::BottomLeft => "bottom-left",
            MarginPosition::BottomCenter => "bottom-center",
            MarginPosition::BottomRight => "bottom-right",
        }
    }
}

/// Content copied to every page margin by the paged or slides script.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageMarginContent {
    pub position: MarginPosition,
    pub children: Blocks,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TransitionStyle {
    None,
    Fade,
    Slide,
    Convex,
    Concave,
    Zoom,
}

impl TransitionStyle {
    pub fn as_css(&self) -> &'static str {
        match self {
            TransitionStyle::None => "none",
            TransitionStyle::Fade => "fade",
            TransitionStyle::Slide => "slide",
            TransitionStyle::Convex => "convex",
            TransitionStyle::Concave => "concave",
            TransitionStyle::Zoom => "zoom",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TransitionSpeed {
    #[default]
    Default,
    Fast,
    Slow,
}

impl TransitionSpeed {
    pub fn as_css(&self) -> &'static str {
        match self {
            TransitionSpeed::Default => "default",
            TransitionSpeed::Fast => "fast",
            TransitionSpeed::Slow => "slow",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transition {
    pub style: TransitionStyle,
    #[serde(default)]
    pub speed: TransitionSpeed,
}

/// Properties read by the slides script once the document is loaded.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlidesConfiguration {
    pub center_vertically: Option<bool>,
    pub show_controls: Option<bool>,
    pub transition: Option<Transition>,
}
