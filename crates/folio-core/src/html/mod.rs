/*
 * html/mod.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * HTML writer for evaluated document trees.
 */

//! HTML rendering.
//!
//! [`HtmlRenderer`] walks the tree once and writes HTML for every node into
//! any [`std::io::Write`]. Dispatch is an exhaustive `match` over the node
//! enums, so adding a node kind without a rendering rule does not compile.
//!
//! Rendering reads the attributes discovery produced. Identifiers and
//! locations are consumed in document order: the n-th heading the writer
//! meets receives the n-th registered identifier, and likewise for the
//! locations of headings, figures and tables.

mod block;
mod escape;
mod inline;

pub use escape::{escape_html, escape_js};

use std::io::{self, Write};

use folio_ast::{Document, LocationKind};

use crate::context::Context;
use crate::warning::ContentWarning;

/// Writes a document as HTML body content.
pub struct HtmlRenderer<'a> {
    context: &'a Context,
    next_identifier: usize,
    next_location: [usize; 3],
    warnings: Vec<ContentWarning>,
}

impl<'a> HtmlRenderer<'a> {
    pub fn new(context: &'a Context) -> Self {
        Self {
            context,
            next_identifier: 0,
            next_location: [0; 3],
            warnings: Vec::new(),
        }
    }

    /// Write the whole document.
    pub fn write<W: Write>(&mut self, document: &Document, buf: &mut W) -> io::Result<()> {
        self.write_blocks(&document.blocks, buf)
    }

    /// Render the whole document to a string.
    pub fn render(&mut self, document: &Document) -> io::Result<String> {
        let mut buf = Vec::new();
        self.write(document, &mut buf)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    /// Content warnings recorded so far, in document order.
    pub fn warnings(&self) -> &[ContentWarning] {
        &self.warnings
    }

    pub fn into_warnings(self) -> Vec<ContentWarning> {
        self.warnings
    }

    fn warn(&mut self, warning: ContentWarning) {
        tracing::warn!("{}", warning.to_text());
        self.warnings.push(warning);
    }

    /// Identifier registered for the next heading.
    fn take_identifier(&mut self) -> Option<String> {
        let id = self
            .context
            .attributes
            .identifier_at(self.next_identifier)
            .map(|(id, _)| id.to_string());
        self.next_identifier += 1;
        id
    }

    /// Location label of the next node of `kind`.
    fn take_location_label(&mut self, kind: LocationKind) -> Option<String> {
        let slot = match kind {
            LocationKind::Heading => 0,
            LocationKind::Figure => 1,
            LocationKind::Table => 2,
        };
        let index = self.next_location[slot];
        self.next_location[slot] += 1;
        self.context.location_label(kind, index)
    }
}

/// Write ` name="value"` with the value escaped.
fn write_attribute<W: Write>(name: &str, value: &str, buf: &mut W) -> io::Result<()> {
    write!(buf, " {}=\"{}\"", name, escape_html(value))
}

/// Write the attribute only if the value is present.
fn write_optional_attribute<W: Write>(
    name: &str,
    value: Option<&str>,
    buf: &mut W,
) -> io::Result<()> {
    match value {
        Some(value) => write_attribute(name, value, buf),
        None => Ok(()),
    }
}

/// Write a ` style="..."` attribute from the declarations that have a value.
/// Nothing is written if none has.
fn write_style<W: Write>(declarations: &[(&str, Option<&str>)], buf: &mut W) -> io::Result<()> {
    let style = declarations
        .iter()
        .filter_map(|(property, value)| value.map(|v| format!("{}: {};", property, v)))
        .collect::<Vec<_>>()
        .join(" ");
    if style.is_empty() {
        return Ok(());
    }
    write_attribute("style", &style, buf)
}

/// Write a ` class="..."` attribute from the classes that are present.
fn write_classes<W: Write>(classes: &[Option<&str>], buf: &mut W) -> io::Result<()> {
    let classes = classes.iter().flatten().copied().collect::<Vec<_>>();
    if classes.is_empty() {
        return Ok(());
    }
    write_attribute("class", &classes.join(" "), buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn to_string(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_write_style_skips_missing_values() {
        assert_eq!(
            to_string(|buf| write_style(&[("width", Some("10px")), ("height", None)], buf)),
            " style=\"width: 10px;\""
        );
        assert_eq!(to_string(|buf| write_style(&[("width", None)], buf)), "");
    }

    #[test]
    fn test_write_classes() {
        assert_eq!(
            to_string(|buf| write_classes(&[Some("box"), None, Some("tip")], buf)),
            " class=\"box tip\""
        );
    }
}
