/*
 * inline.rs
 * Copyright (c) 2025 Posit, PBC
 */

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Inline {
    Text(Text),
    CodeSpan(CodeSpan),
    Emphasis(Emphasis),
    Strong(Strong),
    Strikethrough(Strikethrough),
    LineBreak,
    Link(Link),
    /// A link whose target is looked up in the link definition registry.
    ReferenceLink(ReferenceLink),
    Image(Image),

    // folio extensions
    MathSpan(MathSpan),
    TextTransform(TextTransform),
    Whitespace(Whitespace),
    InlineCollapse(InlineCollapse),
    /// Current or total page number, filled in at runtime by the paged or slides script.
    PageCounter(PageCounter),
}

pub type Inlines = Vec<Inline>;

impl Inline {
    /// Shorthand for a plain text inline.
    pub fn text(text: impl Into<String>) -> Self {
        Inline::Text(Text { text: text.into() })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Text {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CodeSpan {
    pub text: String,
    /// Set when the code is a color literal, rendered with a preview swatch.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Emphasis {
    pub content: Inlines,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Strong {
    pub content: Inlines,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Strikethrough {
    pub content: Inlines,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    pub content: Inlines,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceLink {
    pub content: Inlines,
    /// Label of the link definition, matched after normalization.
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Image {
    pub url: String,
    #[serde(default)]
    pub alt: Inlines,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MathSpan {
    pub expression: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextTransform {
    pub data: TextTransformData,
    pub content: Inlines,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct TextTransformData {
    pub size: Option<TextSize>,
    pub weight: Option<TextWeight>,
    pub style: Option<TextStyle>,
    pub variant: Option<TextVariant>,
    pub decoration: Option<TextDecoration>,
    pub case: Option<TextCase>,
    pub color: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TextSize {
    Tiny,
    Small,
    Normal,
    Medium,
    Larger,
    Large,
    Huge,
}

impl TextSize {
    /// CSS class applied to the transformed span, e.g. `size-small`.
    pub fn as_css_class(&self) -> &'static str {
        match self {
            TextSize::Tiny => "size-tiny",
            TextSize::Small => "size-small",
            TextSize::Normal => "size-normal",
            TextSize::Medium => "size-medium",
            TextSize::Larger => "size-larger",
            TextSize::Large => "size-large",
            TextSize::Huge => "size-huge",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TextWeight {
    Normal,
    Bold,
}

impl TextWeight {
    pub fn as_css(&self) -> &'static str {
        match self {
            TextWeight::Normal => "normal",
            TextWeight::Bold => "bold",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TextStyle {
    Normal,
    Italic,
}

impl TextStyle {
    pub fn as_css(&self) -> &'static str {
        match self {
            TextStyle::Normal => "normal",
            TextStyle::Italic => "italic",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TextVariant {
    Normal,
    SmallCaps,
}

impl TextVariant {
    pub fn as_css(&self) -> &'static str {
        match self {
            TextVariant::Normal => "normal",
            TextVariant::SmallCaps => "small-caps",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TextDecoration {
    None,
    Underline,
    Overline,
    UnderOverline,
    Strikethrough,
    All,
}

impl TextDecoration {
    pub fn as_css(&self) -> &'static str {
        match self {
            TextDecoration::None => "none",
            TextDecoration::Underline => "underline",
            TextDecoration::Overline => "overline",
            TextDecoration::UnderOverline => "underline overline",
            TextDecoration::Strikethrough => "line-through",
            TextDecoration::All => "underline overline line-through",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TextCase {
    None,
    Uppercase,
    Lowercase,
    Capitalize,
}

impl TextCase {
    pub fn as_css(&self) -> &'static str {
        match self {
            TextCase::None => "none",
            TextCase::Uppercase => "uppercase",
            TextCase::Lowercase => "lowercase",
            TextCase::Capitalize => "capitalize",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Whitespace {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InlineCollapse {
    pub text: Inlines,
    pub placeholder: Inlines,
    #[serde(default)]
    pub open: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PageCounterTarget {
    Current,
    Total,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageCounter {
    pub target: PageCounterTarget,
}

/// Flatten inlines to their plain-text content.
///
/// Used for identifiers, table of contents entries and `alt` attributes.
pub fn inlines_to_plain_text(inlines: &[Inline]) -> String {
    let mut out = String::new();
    push_plain_text(inlines, &mut out);
    out
}

fn push_plain_text(inlines: &[Inline], out: &mut String) {
    for inline in inlines {
        match inline {
            Inline::Text(t) => out.push_str(&t.text),
            Inline::CodeSpan(c) => out.push_str(&c.text),
            Inline::MathSpan(m) => out.push_str(&m.expression),
            Inline::Emphasis(e) => push_plain_text(&e.content, out),
            Inline::Strong(s) => push_plain_text(&s.content, out),
            Inline::Strikethrough(s) => push_plain_text(&s.content, out),
            Inline::Link(l) => push_plain_text(&l.content, out),
            Inline::ReferenceLink(l) => push_plain_text(&l.content, out),
            Inline::Image(i) => push_plain_text(&i.alt, out),
            Inline::TextTransform(t) => push_plain_text(&t.content, out),
            Inline::InlineCollapse(c) => push_plain_text(&c.text, out),
            Inline::LineBreak | Inline::Whitespace(_) => out.push(' '),
            Inline::PageCounter(_) => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_flattens_nested_inlines() {
        let inlines = vec![
            Inline::text("Hello "),
            Inline::Strong(Strong {
                content: vec![Inline::text("big")],
            }),
            Inline::LineBreak,
            Inline::CodeSpan(CodeSpan {
                text: "x".to_string(),
                color: None,
            }),
        ];
        assert_eq!(inlines_to_plain_text(&inlines), "Hello big x");
    }

    #[test]
    fn test_text_decoration_css() {
        assert_eq!(TextDecoration::Strikethrough.as_css(), "line-through");
        assert_eq!(TextSize::Small.as_css_class(), "size-small");
    }
}
