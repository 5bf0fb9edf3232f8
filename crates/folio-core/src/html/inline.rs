/*
 * html/inline.rs
 * Copyright (c) 2025 Posit, PBC
 */

use std::io::{self, Write};

use folio_ast::{Inline, PageCounterTarget, inlines_to_plain_text};

use super::{
    HtmlRenderer, escape_html, write_attribute, write_classes, write_optional_attribute,
    write_style,
};
use crate::warning::ContentWarning;

impl HtmlRenderer<'_> {
    pub(super) fn write_inlines<W: Write>(&mut self, inlines: &[Inline], buf: &mut W) -> io::Result<()> {
        for inline in inlines {
            self.write_inline(inline, buf)?;
        }
        Ok(())
    }

    fn inlines_to_html(&mut self, inlines: &[Inline]) -> io::Result<String> {
        let mut buf = Vec::new();
        self.write_inlines(inlines, &mut buf)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    fn write_inline<W: Write>(&mut self, inline: &Inline, buf: &mut W) -> io::Result<()> {
        match inline {
            Inline::Text(text) => {
                write!(buf, "{}", escape_html(&text.text))?;
            }
            Inline::CodeSpan(code) => {
                // Wrapped so that a color preview can sit next to the code.
                write!(
                    buf,
                    "<span class=\"codespan-content\"><code>{}</code>",
                    escape_html(&code.text)
                )?;
                if let Some(color) = &code.color {
                    write!(buf, "<span class=\"color-preview\"")?;
                    write_style(&[("background-color", Some(color.as_str()))], buf)?;
                    write!(buf, "></span>")?;
                }
                write!(buf, "</span>")?;
            }
            Inline::Emphasis(emphasis) => {
                write!(buf, "<em>")?;
                self.write_inlines(&emphasis.content, buf)?;
                write!(buf, "</em>")?;
            }
            Inline::Strong(strong) => {
                write!(buf, "<strong>")?;
                self.write_inlines(&strong.content, buf)?;
                write!(buf, "</strong>")?;
            }
            Inline::Strikethrough(strike) => {
                write!(buf, "<del>")?;
                self.write_inlines(&strike.content, buf)?;
                write!(buf, "</del>")?;
            }
            Inline::LineBreak => {
                writeln!(buf, "<br />")?;
            }
            Inline::Link(link) => {
                write!(buf, "<a")?;
                write_attribute("href", &link.url, buf)?;
                write_optional_attribute("title", link.title.as_deref(), buf)?;
                write!(buf, ">")?;
                self.write_inlines(&link.content, buf)?;
                write!(buf, "</a>")?;
            }
            Inline::ReferenceLink(reference) => {
                let context = self.context;
                match context.attributes.link_definition(&reference.label) {
                    Some(definition) => {
                        write!(buf, "<a")?;
                        write_attribute("href", &definition.url, buf)?;
                        write_optional_attribute("title", definition.title.as_deref(), buf)?;
                        write!(buf, ">")?;
                        self.write_inlines(&reference.content, buf)?;
                        write!(buf, "</a>")?;
                    }
                    None => {
                        self.warn(ContentWarning::unresolved_reference(&reference.label));
                        write!(buf, "<span class=\"unresolved-reference\">")?;
                        self.write_inlines(&reference.content, buf)?;
                        write!(buf, "</span>")?;
                    }
                }
            }
            Inline::Image(image) => {
                write!(buf, "<img")?;
                write_attribute("src", &image.url, buf)?;
                write_attribute("alt", &inlines_to_plain_text(&image.alt), buf)?;
                write_optional_attribute("title", image.title.as_deref(), buf)?;
                write_style(
                    &[
                        ("width", image.width.as_deref()),
                        ("height", image.height.as_deref()),
                    ],
                    buf,
                )?;
                write!(buf, " />")?;
            }
            Inline::MathSpan(math) => {
                if math.expression.trim().is_empty() {
                    self.warn(ContentWarning::empty_source("inline formula"));
                }
                write!(buf, "<formula>{}</formula>", escape_html(&math.expression))?;
            }
            Inline::TextTransform(transform) => {
                let data = &transform.data;
                write!(buf, "<span")?;
                write_classes(&[data.size.as_ref().map(|s| s.as_css_class())], buf)?;
                write_style(
                    &[
                        ("font-weight", data.weight.as_ref().map(|w| w.as_css())),
                        ("font-style", data.style.as_ref().map(|s| s.as_css())),
                        ("font-variant", data.variant.as_ref().map(|v| v.as_css())),
                        ("text-decoration", data.decoration.as_ref().map(|d| d.as_css())),
                        ("text-transform", data.case.as_ref().map(|c| c.as_css())),
                        ("color", data.color.as_deref()),
                    ],
                    buf,
                )?;
                write!(buf, ">")?;
                self.write_inlines(&transform.content, buf)?;
                write!(buf, "</span>")?;
            }
            Inline::Whitespace(space) => {
                if space.width.is_none() && space.height.is_none() {
                    write!(buf, "<span>&nbsp;</span>")?;
                } else {
                    write!(buf, "<div")?;
                    write_style(
                        &[
                            ("width", space.width.as_deref()),
                            ("height", space.height.as_deref()),
                        ],
                        buf,
                    )?;
                    write!(buf, "></div>")?;
                }
            }
            Inline::InlineCollapse(collapse) => {
                // The runtime script swaps between the two versions.
                let full = self.inlines_to_html(&collapse.text)?;
                let collapsed = self.inlines_to_html(&collapse.placeholder)?;
                write!(buf, "<span class=\"inline-collapse\"")?;
                write_attribute("data-full-text", &full, buf)?;
                write_attribute("data-collapsed-text", &collapsed, buf)?;
                write!(buf, " data-collapsed=\"{}\">", !collapse.open)?;
                write!(buf, "{}</span>", if collapse.open { full } else { collapsed })?;
            }
            Inline::PageCounter(counter) => {
                // Filled in at runtime by the paged or slides script.
                let class = match counter.target {
                    PageCounterTarget::Current => "current-page-number",
                    PageCounterTarget::Total => "total-page-number",
                };
                write!(buf, "<span class=\"{}\">-</span>", class)?;
            }
        }
        Ok(())
    }
}
