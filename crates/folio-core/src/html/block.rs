/*
 * html/block.rs
 * Copyright (c) 2025 Posit, PBC
 */

use std::io::{self, Write};

use folio_ast::{
    Block, BlockQuote, Blocks, Callout, CodeBlock, Figure, Heading, ListItem, LocationKind, Table,
    TableOfContents, TableRow,
};

use super::{
    HtmlRenderer, escape_html, write_attribute, write_classes, write_optional_attribute,
    write_style,
};
use crate::config::CaptionPosition;
use crate::warning::ContentWarning;

/// Identifier of the heading generated for a table of contents.
const TOC_HEADING_ID: &str = "table-of-contents";

/// A numbered caption for a figure or table.
struct NumberedCaption<'c> {
    tag: &'static str,
    /// Localization key of the element kind, also the id prefix.
    kind: &'static str,
    text: Option<&'c str>,
    label: Option<String>,
    position: CaptionPosition,
}

impl NumberedCaption<'_> {
    fn id(&self) -> Option<String> {
        self.label.as_ref().map(|label| format!("{}-{}", self.kind, label))
    }
}

impl HtmlRenderer<'_> {
    pub(super) fn write_blocks<W: Write>(&mut self, blocks: &[Block], buf: &mut W) -> io::Result<()> {
        for block in blocks {
            self.write_block(block, buf)?;
        }
        Ok(())
    }

    fn write_block<W: Write>(&mut self, block: &Block, buf: &mut W) -> io::Result<()> {
        match block {
            Block::Paragraph(paragraph) => {
                write!(buf, "<p>")?;
                self.write_inlines(&paragraph.content, buf)?;
                writeln!(buf, "</p>")?;
            }
            Block::Heading(heading) => self.write_heading(heading, buf)?,
            Block::BlockQuote(quote) => self.write_block_quote(quote, buf)?,
            Block::CodeBlock(code) => write_code_block(code, buf)?,
            Block::OrderedList(list) => {
                write!(buf, "<ol")?;
                if list.start != 1 {
                    write!(buf, " start=\"{}\"", list.start)?;
                }
                writeln!(buf, ">")?;
                self.write_list_items(&list.items, buf)?;
                writeln!(buf, "</ol>")?;
            }
            Block::UnorderedList(list) => {
                writeln!(buf, "<ul>")?;
                self.write_list_items(&list.items, buf)?;
                writeln!(buf, "</ul>")?;
            }
            Block::HorizontalRule => {
                writeln!(buf, "<hr />")?;
            }
            Block::Html(raw) => {
                writeln!(buf, "{}", raw.content)?;
            }
            Block::Table(table) => self.write_table(table, buf)?,
            Block::Figure(figure) => self.write_figure(figure, buf)?,
            Block::Math(math) => {
                if math.expression.trim().is_empty() {
                    self.warn(ContentWarning::empty_source("formula"));
                }
                writeln!(
                    buf,
                    "<formula data-block=\"\">{}</formula>",
                    escape_html(&math.expression)
                )?;
            }
            Block::MermaidDiagram(diagram) => {
                if diagram.code.trim().is_empty() {
                    self.warn(ContentWarning::empty_source("mermaid diagram"));
                }
                writeln!(
                    buf,
                    "<pre class=\"mermaid fill-height\">{}</pre>",
                    escape_html(&diagram.code)
                )?;
            }
            Block::TikzDiagram(diagram) => {
                if diagram.code.trim().is_empty() {
                    self.warn(ContentWarning::empty_source("tikz diagram"));
                }
                writeln!(
                    buf,
                    "<script type=\"text/tikz\">{}</script>",
                    escape_html(&diagram.code)
                )?;
            }
            Block::Container(container) => {
                write!(buf, "<div")?;
                write_classes(
                    &[Some("container"), container.full_width.then_some("fullwidth")],
                    buf,
                )?;
                let border_style = (container.border_color.is_some()
                    || container.border_width.is_some())
                .then_some("solid");
                write_style(
                    &[
                        ("width", container.width.as_deref()),
                        ("height", container.height.as_deref()),
                        ("color", container.foreground_color.as_deref()),
                        ("background-color", container.background_color.as_deref()),
                        ("margin", container.margin.as_deref()),
                        ("padding", container.padding.as_deref()),
                        ("border-color", container.border_color.as_deref()),
                        ("border-width", container.border_width.as_deref()),
                        ("border-style", border_style),
                        ("border-radius", container.corner_radius.as_deref()),
                        ("text-align", container.text_alignment.as_deref()),
                    ],
                    buf,
                )?;
                writeln!(buf, ">")?;
                self.write_blocks(&container.children, buf)?;
                writeln!(buf, "</div>")?;
            }
            Block::Callout(callout) => self.write_callout(callout, buf)?,
            Block::Collapse(collapse) => {
                write!(buf, "<details")?;
                if collapse.open {
                    write!(buf, " open")?;
                }
                write!(buf, "><summary>")?;
                self.write_inlines(&collapse.title, buf)?;
                writeln!(buf, "</summary>")?;
                self.write_blocks(&collapse.children, buf)?;
                writeln!(buf, "</details>")?;
            }
            Block::FullColumnSpan(span) => {
                writeln!(buf, "<div class=\"full-column-span\">")?;
                self.write_blocks(&span.children, buf)?;
                writeln!(buf, "</div>")?;
            }
            // Transparent wrappers.
            Block::Numbered(numbered) => self.write_blocks(&numbered.children, buf)?,
            Block::Expanded(expanded) => self.write_blocks(&expanded.children, buf)?,
            Block::PageBreak => write_page_break(buf)?,
            Block::TableOfContents(toc) => self.write_table_of_contents(toc, buf)?,
            Block::LinkDefinition(_) => {}
            Block::PageMarginContent(margin) => {
                writeln!(
                    buf,
                    "<div class=\"page-margin-content page-margin-{}\">",
                    margin.position.as_css()
                )?;
                self.write_blocks(&margin.children, buf)?;
                writeln!(buf, "</div>")?;
            }
            Block::SlidesConfiguration(config) => {
                // Values come from enums and booleans, not from user text.
                write!(buf, "<script>")?;
                if let Some(center) = config.center_vertically {
                    write!(buf, "const slides_center = {};", center)?;
                }
                if let Some(controls) = config.show_controls {
                    write!(buf, "const slides_showControls = {};", controls)?;
                }
                if let Some(transition) = &config.transition {
                    write!(
                        buf,
                        "const slides_transitionStyle = '{}';",
                        transition.style.as_css()
                    )?;
                    write!(
                        buf,
                        "const slides_transitionSpeed = '{}';",
                        transition.speed.as_css()
                    )?;
                }
                writeln!(buf, "</script>")?;
            }
        }
        Ok(())
    }

    fn write_heading<W: Write>(&mut self, heading: &Heading, buf: &mut W) -> io::Result<()> {
        let identifier = self.take_identifier();
        let id = identifier
            .filter(|_| self.context.options.automatic_identifiers || heading.custom_id.is_some());

        if heading.is_marker() {
            write!(buf, "<div class=\"marker\" hidden")?;
            write_optional_attribute("id", id.as_deref(), buf)?;
            writeln!(buf, "></div>")?;
            return Ok(());
        }

        let location = self.take_location_label(LocationKind::Heading);
        if self.context.should_auto_page_break(heading) {
            write_page_break(buf)?;
        }

        let level = heading.depth.min(6);
        write!(buf, "<h{}", level)?;
        write_optional_attribute("id", id.as_deref(), buf)?;
        write_optional_attribute("data-location", location.as_deref(), buf)?;
        write!(buf, ">")?;
        self.write_inlines(&heading.content, buf)?;
        writeln!(buf, "</h{}>", level)
    }

    fn write_block_quote<W: Write>(&mut self, quote: &BlockQuote, buf: &mut W) -> io::Result<()> {
        write!(buf, "<blockquote")?;
        if let Some(kind) = quote.kind {
            write_attribute("class", kind.as_css(), buf)?;
            // Themes show the localized label through a CSS variable.
            if let Some(label) = self.context.localize(kind.as_css()) {
                let label = format!("'{}'", label);
                write_style(&[("--quote-type-label", Some(label.as_str()))], buf)?;
                write!(buf, " data-labeled=\"\"")?;
            }
        }
        writeln!(buf, ">")?;
        self.write_blocks(&quote.content, buf)?;
        if let Some(attribution) = &quote.attribution {
            write!(buf, "<p class=\"attribution\">")?;
            self.write_inlines(attribution, buf)?;
            writeln!(buf, "</p>")?;
        }
        writeln!(buf, "</blockquote>")
    }

    fn write_list_items<W: Write>(&mut self, items: &[ListItem], buf: &mut W) -> io::Result<()> {
        for item in items {
            write!(buf, "<li")?;
            if let Some(checked) = item.checked {
                write!(buf, " class=\"task-list-item\"><input type=\"checkbox\" disabled")?;
                if checked {
                    write!(buf, " checked")?;
                }
                write!(buf, " /")?;
            }
            write!(buf, ">")?;
            self.write_list_item_content(&item.content, buf)?;
            writeln!(buf, "</li>")?;
        }
        Ok(())
    }

    /// A single paragraph is written without its `<p>` so tight lists stay tight.
    fn write_list_item_content<W: Write>(&mut self, content: &Blocks, buf: &mut W) -> io::Result<()> {
        match content.as_slice() {
            [Block::Paragraph(paragraph)] => self.write_inlines(&paragraph.content, buf),
            blocks => self.write_blocks(blocks, buf),
        }
    }

    fn write_figure<W: Write>(&mut self, figure: &Figure, buf: &mut W) -> io::Result<()> {
        let caption = NumberedCaption {
            tag: "figcaption",
            kind: "figure",
            text: figure.caption.as_deref(),
            label: self.take_location_label(LocationKind::Figure),
            position: self.context.document.layout.caption_position.figures,
        };

        write!(buf, "<figure")?;
        write_optional_attribute("id", caption.id().as_deref(), buf)?;
        writeln!(buf, ">")?;
        if caption.position == CaptionPosition::Top {
            self.write_caption(&caption, buf)?;
            self.write_block(&figure.child, buf)?;
        } else {
            self.write_block(&figure.child, buf)?;
            self.write_caption(&caption, buf)?;
        }
        writeln!(buf, "</figure>")
    }

    fn write_table<W: Write>(&mut self, table: &Table, buf: &mut W) -> io::Result<()> {
        let caption = NumberedCaption {
            tag: "caption",
            kind: "table",
            text: table.caption.as_deref(),
            label: self.take_location_label(LocationKind::Table),
            position: self.context.document.layout.caption_position.tables,
        };

        write!(buf, "<table")?;
        write_optional_attribute("id", caption.id().as_deref(), buf)?;
        writeln!(buf, ">")?;
        // `<caption>` must be the first child of a table; its class carries the position.
        self.write_caption(&caption, buf)?;

        writeln!(buf, "<thead>")?;
        self.write_table_row(table, &table.header, "th", buf)?;
        writeln!(buf, "</thead>")?;
        writeln!(buf, "<tbody>")?;
        for row in &table.rows {
            self.write_table_row(table, row, "td", buf)?;
        }
        writeln!(buf, "</tbody>")?;
        writeln!(buf, "</table>")
    }

    fn write_table_row<W: Write>(
        &mut self,
        table: &Table,
        row: &TableRow,
        cell_tag: &str,
        buf: &mut W,
    ) -> io::Result<()> {
        write!(buf, "<tr>")?;
        for (column, cell) in row.cells.iter().enumerate() {
            write!(buf, "<{}", cell_tag)?;
            write_style(&[("text-align", table.alignment(column).as_css())], buf)?;
            write!(buf, ">")?;
            self.write_inlines(&cell.content, buf)?;
            write!(buf, "</{}>", cell_tag)?;
        }
        writeln!(buf, "</tr>")
    }

    /// Write the caption element, if the node has a caption.
    ///
    /// The label and the localized kind are exposed as data attributes so
    /// the theme can display `<kind> <label>: <caption>`.
    fn write_caption<W: Write>(&self, caption: &NumberedCaption<'_>, buf: &mut W) -> io::Result<()> {
        let Some(text) = caption.text else {
            return Ok(());
        };
        write!(
            buf,
            "<{} class=\"caption-{}\"",
            caption.tag,
            caption.position.as_css()
        )?;
        write_optional_attribute("data-element-label", caption.label.as_deref(), buf)?;
        write_optional_attribute(
            "data-localized-kind",
            self.context.localize(caption.kind).as_deref(),
            buf,
        )?;
        writeln!(buf, ">{}</{}>", escape_html(text), caption.tag)
    }

    fn write_callout<W: Write>(&mut self, callout: &Callout, buf: &mut W) -> io::Result<()> {
        write!(buf, "<div")?;
        write_classes(&[Some("box"), Some(callout.kind.as_css())], buf)?;
        writeln!(buf, ">")?;
        if let Some(title) = &callout.title {
            write!(buf, "<header")?;
            write_style(&[("padding", callout.padding.as_deref())], buf)?;
            write!(buf, "><h4>")?;
            self.write_inlines(title, buf)?;
            writeln!(buf, "</h4></header>")?;
        }
        write!(buf, "<div class=\"box-content\"")?;
        write_style(&[("padding", callout.padding.as_deref())], buf)?;
        writeln!(buf, ">")?;
        self.write_blocks(&callout.children, buf)?;
        writeln!(buf, "</div>")?;
        writeln!(buf, "</div>")
    }

    /// A heading plus nested lists of links to every heading up to the
    /// configured depth that is written with an id. Nothing is written if
    /// there are none.
    fn write_table_of_contents<W: Write>(
        &mut self,
        toc: &TableOfContents,
        buf: &mut W,
    ) -> io::Result<()> {
        let context = self.context;
        let automatic = context.options.automatic_identifiers;
        let entries: Vec<(&str, u8, &str)> = context
            .attributes
            .identifiers()
            .filter(|(_, target)| target.depth >= 1 && target.depth <= toc.max_depth)
            .filter(|(_, target)| automatic || target.explicit)
            .map(|(id, target)| (id, target.depth, target.text.as_str()))
            .collect();
        if entries.is_empty() {
            return Ok(());
        }

        // The generated heading is not part of the tree, so it consumes no
        // identifier or location.
        write!(buf, "<h1 id=\"{}\">", TOC_HEADING_ID)?;
        match &toc.title {
            Some(title) => self.write_inlines(title, buf)?,
            None => {
                if let Some(title) = context.localize("tableofcontents") {
                    write!(buf, "{}", escape_html(&title))?;
                }
            }
        }
        writeln!(buf, "</h1>")?;

        writeln!(buf, "<nav>")?;
        let mut open: Vec<u8> = Vec::new();
        for (id, depth, text) in entries {
            while open.last().is_some_and(|&top| top > depth) {
                writeln!(buf, "</li></ol>")?;
                open.pop();
            }
            if open.last() == Some(&depth) {
                writeln!(buf, "</li>")?;
            } else {
                writeln!(buf, "<ol>")?;
                open.push(depth);
            }
            write!(
                buf,
                "<li><a href=\"#{}\">{}</a>",
                escape_html(id),
                escape_html(text)
            )?;
        }
        while open.pop().is_some() {
            writeln!(buf, "</li></ol>")?;
        }
        writeln!(buf, "</nav>")
    }
}

fn write_page_break<W: Write>(buf: &mut W) -> io::Result<()> {
    writeln!(buf, "<div class=\"page-break\" hidden></div>")
}

fn write_code_block<W: Write>(code: &CodeBlock, buf: &mut W) -> io::Result<()> {
    write!(buf, "<pre><code")?;
    let language = code.language.as_ref().map(|l| format!("language-{}", l));
    write_classes(
        &[
            language.as_deref(),
            (!code.line_numbers).then_some("nohljsln"),
        ],
        buf,
    )?;
    writeln!(buf, ">{}</code></pre>", escape_html(&code.text))
}

#[cfg(test)]
mod tests {
    use crate::config::{DocumentConfig, DocumentType};
    use crate::context::Context;
    use crate::html::HtmlRenderer;
    use crate::iterator::TreeIteratorFactory;
    use folio_ast::{
        Alignment, Block, BlockQuote, Document, Figure, Heading, Inline, ListItem, Math, MathSpan,
        MermaidDiagram, Paragraph, QuoteKind, Table, TableCell, TableOfContents, TableRow,
        TikzDiagram, UnorderedList,
    };
    use pretty_assertions::assert_eq;

    fn heading(depth: u8, text: &str, custom_id: Option<&str>) -> Block {
        Block::Heading(Heading {
            depth,
            content: vec![Inline::text(text)],
            custom_id: custom_id.map(str::to_string),
        })
    }

    fn row(cells: &[&str]) -> TableRow {
        TableRow {
            cells: cells
                .iter()
                .map(|c| TableCell {
                    content: vec![Inline::text(*c)],
                })
                .collect(),
        }
    }

    /// Discover and render, as a job does.
    fn render(mut context: Context, blocks: Vec<Block>) -> (String, usize) {
        let document = Document::new(blocks);
        TreeIteratorFactory::default_iterator().traverse(&document, &mut context.attributes);
        let mut renderer = HtmlRenderer::new(&context);
        let html = renderer.render(&document).unwrap();
        (html, renderer.warnings().len())
    }

    fn context_with(yaml: &str) -> Context {
        Context::new(DocumentConfig::from_yaml(yaml).unwrap()).unwrap()
    }

    #[test]
    fn test_marker_and_custom_id() {
        let (html, _) = render(
            context_with(""),
            vec![heading(0, "", Some("anchor")), heading(1, "Intro", Some("start"))],
        );
        assert_eq!(
            html,
            "<div class=\"marker\" hidden id=\"anchor\"></div>\n<h1 id=\"start\">Intro</h1>\n"
        );
    }

    #[test]
    fn test_automatic_identifiers_can_be_disabled() {
        let mut config = DocumentConfig::default();
        config.options.automatic_identifiers = false;
        let (html, _) = render(
            Context::new(config).unwrap(),
            vec![heading(2, "Auto", None), heading(2, "Custom", Some("mine"))],
        );
        assert_eq!(html, "<h2>Auto</h2>\n<h2 id=\"mine\">Custom</h2>\n");
    }

    #[test]
    fn test_slides_break_only_up_to_configured_depth() {
        let mut config = DocumentConfig::default();
        config.document.doc_type = DocumentType::Slides;
        config.document.layout.auto_page_break_heading_depth = 2;
        let (html, _) = render(
            Context::new(config).unwrap(),
            vec![heading(2, "Two", None), heading(3, "Three", None)],
        );
        assert_eq!(
            html,
            "<div class=\"page-break\" hidden></div>\n<h2 id=\"two\">Two</h2>\n<h3 id=\"three\">Three</h3>\n"
        );
    }

    #[test]
    fn test_table_of_contents() {
        let (html, _) = render(
            context_with("locale: en"),
            vec![
                Block::TableOfContents(TableOfContents {
                    title: None,
                    max_depth: 2,
                }),
                heading(1, "A", None),
                heading(2, "B", None),
                heading(3, "C", None),
                heading(1, "D", None),
            ],
        );
        assert!(html.starts_with(concat!(
            "<h1 id=\"table-of-contents\">Table of Contents</h1>\n",
            "<nav>\n<ol>\n",
            "<li><a href=\"#a\">A</a><ol>\n",
            "<li><a href=\"#b\">B</a></li></ol>\n",
            "</li>\n",
            "<li><a href=\"#d\">D</a></li></ol>\n",
            "</nav>\n",
            "<h1 id=\"a\">A</h1>\n",
        )));
    }

    #[test]
    fn test_table_of_contents_skips_headings_without_id() {
        let mut config = DocumentConfig::from_yaml("locale: en").unwrap();
        config.options.automatic_identifiers = false;
        let (html, _) = render(
            Context::new(config).unwrap(),
            vec![
                Block::TableOfContents(TableOfContents {
                    title: None,
                    max_depth: 2,
                }),
                heading(1, "Intro", None),
                heading(1, "Usage", Some("usage")),
            ],
        );
        assert_eq!(
            html,
            concat!(
                "<h1 id=\"table-of-contents\">Table of Contents</h1>\n",
                "<nav>\n<ol>\n",
                "<li><a href=\"#usage\">Usage</a></li></ol>\n",
                "</nav>\n",
                "<h1>Intro</h1>\n",
                "<h1 id=\"usage\">Usage</h1>\n",
            )
        );
    }

    #[test]
    fn test_table_of_contents_without_any_id_writes_nothing() {
        let mut config = DocumentConfig::default();
        config.options.automatic_identifiers = false;
        let (html, _) = render(
            Context::new(config).unwrap(),
            vec![
                Block::TableOfContents(TableOfContents {
                    title: None,
                    max_depth: 2,
                }),
                heading(1, "Intro", None),
            ],
        );
        assert_eq!(html, "<h1>Intro</h1>\n");
    }

    #[test]
    fn test_empty_table_of_contents_writes_nothing() {
        let (html, _) = render(
            context_with(""),
            vec![Block::TableOfContents(TableOfContents {
                title: None,
                max_depth: 3,
            })],
        );
        assert_eq!(html, "");
    }

    #[test]
    fn test_numbered_table_with_caption() {
        let (html, _) = render(
            context_with("type: paged"),
            vec![
                heading(1, "Data", None),
                Block::Table(Table {
                    alignments: vec![Alignment::Left],
                    header: row(&["x", "y"]),
                    rows: vec![row(&["1", "2"])],
                    caption: Some("Values".to_string()),
                }),
            ],
        );
        assert!(html.ends_with(concat!(
            "<table id=\"table-1.1\">\n",
            "<caption class=\"caption-bottom\" data-element-label=\"1.1\">Values</caption>\n",
            "<thead>\n",
            "<tr><th style=\"text-align: left;\">x</th><th>y</th></tr>\n",
            "</thead>\n",
            "<tbody>\n",
            "<tr><td style=\"text-align: left;\">1</td><td>2</td></tr>\n",
            "</tbody>\n",
            "</table>\n",
        )));
    }

    #[test]
    fn test_location_awareness_off_drops_labels() {
        let mut config = DocumentConfig::from_yaml("type: paged").unwrap();
        config.options.location_awareness = false;
        let (html, _) = render(Context::new(config).unwrap(), vec![heading(1, "Plain", None)]);
        assert!(html.contains("<h1 id=\"plain\">Plain</h1>"));
    }

    #[test]
    fn test_typed_quote_with_localized_label() {
        let (html, _) = render(
            context_with("locale: en"),
            vec![Block::BlockQuote(BlockQuote {
                kind: Some(QuoteKind::Tip),
                attribution: Some(vec![Inline::text("Someone")]),
                content: vec![Block::paragraph("Hydrate.")],
            })],
        );
        assert_eq!(
            html,
            concat!(
                "<blockquote class=\"tip\" style=\"--quote-type-label: &#39;Tip&#39;;\" data-labeled=\"\">\n",
                "<p>Hydrate.</p>\n",
                "<p class=\"attribution\">Someone</p>\n",
                "</blockquote>\n",
            )
        );
    }

    #[test]
    fn test_task_list() {
        let (html, _) = render(
            context_with(""),
            vec![Block::UnorderedList(UnorderedList {
                items: vec![
                    ListItem {
                        content: vec![Block::paragraph("done")],
                        checked: Some(true),
                    },
                    ListItem {
                        content: vec![Block::paragraph("plain")],
                        checked: None,
                    },
                ],
            })],
        );
        assert_eq!(
            html,
            concat!(
                "<ul>\n",
                "<li class=\"task-list-item\"><input type=\"checkbox\" disabled checked />done</li>\n",
                "<li>plain</li>\n",
                "</ul>\n",
            )
        );
    }

    #[test]
    fn test_empty_diagram_warns_and_still_renders() {
        let (html, warnings) = render(
            context_with(""),
            vec![Block::MermaidDiagram(MermaidDiagram {
                code: " ".to_string(),
            })],
        );
        assert_eq!(html, "<pre class=\"mermaid fill-height\"> </pre>\n");
        assert_eq!(warnings, 1);
    }

    #[test]
    fn test_raw_sources_are_escaped() {
        let (html, warnings) = render(
            context_with(""),
            vec![
                Block::MermaidDiagram(MermaidDiagram {
                    code: "A-->B & C<D".to_string(),
                }),
                Block::TikzDiagram(TikzDiagram {
                    code: "\\draw (0,0) -- (1,1) node {<x>};".to_string(),
                }),
                Block::Math(Math {
                    expression: "a < b > c".to_string(),
                }),
                Block::Paragraph(Paragraph {
                    content: vec![Inline::MathSpan(MathSpan {
                        expression: "x<y&z".to_string(),
                    })],
                }),
            ],
        );
        assert_eq!(
            html,
            concat!(
                "<pre class=\"mermaid fill-height\">A--&gt;B &amp; C&lt;D</pre>\n",
                "<script type=\"text/tikz\">\\draw (0,0) -- (1,1) node {&lt;x&gt;};</script>\n",
                "<formula data-block=\"\">a &lt; b &gt; c</formula>\n",
                "<p><formula>x&lt;y&amp;z</formula></p>\n",
            )
        );
        assert_eq!(warnings, 0);
    }

    #[test]
    fn test_captioned_tikz_figure() {
        let (html, _) = render(
            context_with("type: paged"),
            vec![
                heading(1, "Results", None),
                Block::Figure(Figure {
                    child: Box::new(Block::TikzDiagram(TikzDiagram {
                        code: "\\draw (0,0) -> (1,0);".to_string(),
                    })),
                    caption: Some("My graph".to_string()),
                }),
            ],
        );
        assert!(html.ends_with(concat!(
            "<figure id=\"figure-1.1\">\n",
            "<script type=\"text/tikz\">\\draw (0,0) -&gt; (1,0);</script>\n",
            "<figcaption class=\"caption-bottom\" data-element-label=\"1.1\">My graph</figcaption>\n",
            "</figure>\n",
        )));
    }
}
