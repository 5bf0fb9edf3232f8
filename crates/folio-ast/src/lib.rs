/*
 * lib.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Document tree type definitions for Folio.
 *
 * This crate provides the node model produced by the Folio parser and
 * function evaluator, plus the per-render attribute store that discovery
 * hooks populate. It has minimal dependencies (serde, indexmap) and can be
 * used by any crate that needs to build or inspect document trees.
 */

pub mod attributes;
pub mod block;
pub mod document;
pub mod inline;
pub mod location;
pub mod node;
pub mod table;

// Re-export commonly used types at the crate root
pub use attributes::{
    AstAttributes, Capability, IdentifierKind, IdentifierTarget, normalize_identifier,
    normalize_label,
};
pub use block::{
    Block, BlockQuote, Blocks, Callout, CalloutKind, CodeBlock, Collapse, Container, Expanded,
    Figure, FullColumnSpan, Heading, LinkDefinition, ListItem, MarginPosition, Math,
    MermaidDiagram, Numbered, OrderedList, PageMarginContent, Paragraph, QuoteKind, RawHtml,
    SlidesConfiguration, TableOfContents, TikzDiagram, Transition, TransitionSpeed,
    TransitionStyle, UnorderedList,
};
pub use document::Document;
pub use inline::{
    CodeSpan, Emphasis, Image, Inline, InlineCollapse, Inlines, Link, MathSpan, PageCounter,
    PageCounterTarget, ReferenceLink, Strikethrough, Strong, Text, TextCase, TextDecoration,
    TextSize, TextStyle, TextTransform, TextTransformData, TextVariant, TextWeight, Whitespace,
    inlines_to_plain_text,
};
pub use location::{Location, LocationKind};
pub use node::NodeRef;
pub use table::{Alignment, Table, TableCell, TableRow};
