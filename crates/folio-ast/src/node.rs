/*
 * node.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Borrowed, kind-agnostic view over tree nodes.
 */

use crate::block::Block;
use crate::inline::Inline;

/// A shared reference to any node of the tree.
///
/// Discovery hooks receive nodes through this view. It only hands out
/// shared borrows, so an observer can never change the tree structure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NodeRef<'a> {
    Block(&'a Block),
    Inline(&'a Inline),
}

impl<'a> NodeRef<'a> {
    /// Direct children of this node, in document order.
    ///
    /// This ordering defines the pre-order traversal used by discovery
    /// and must match the order in which the HTML writer emits children.
    pub fn children(&self) -> Vec<NodeRef<'a>> {
        match *self {
            NodeRef::Block(block) => block_children(block),
            NodeRef::Inline(inline) => inline_children(inline),
        }
    }

    pub fn as_block(&self) -> Option<&'a Block> {
        match *self {
            NodeRef::Block(block) => Some(block),
            NodeRef::Inline(_) => None,
        }
    }

    pub fn as_inline(&self) -> Option<&'a Inline> {
        match *self {
            NodeRef::Inline(inline) => Some(inline),
            NodeRef::Block(_) => None,
        }
    }
}

fn blocks(blocks: &[Block]) -> impl Iterator<Item = NodeRef<'_>> {
    blocks.iter().map(NodeRef::Block)
}

fn inlines(inlines: &[Inline]) -> impl Iterator<Item = NodeRef<'_>> {
    inlines.iter().map(NodeRef::Inline)
}

fn block_children(block: &Block) -> Vec<NodeRef<'_>> {
    match block {
        Block::Paragraph(p) => inlines(&p.content).collect(),
        Block::Heading(h) => inlines(&h.content).collect(),
        Block::BlockQuote(q) => {
            let mut out: Vec<_> = blocks(&q.content).collect();
            if let Some(attribution) = &q.attribution {
                out.extend(inlines(attribution));
            }
            out
        }
        Block::OrderedList(list) => list
            .items
            .iter()
            .flat_map(|item| blocks(&item.content))
            .collect(),
        Block::UnorderedList(list) => list
            .items
            .iter()
            .flat_map(|item| blocks(&item.content))
            .collect(),
        Block::Table(table) => table
            .header
            .cells
            .iter()
            .chain(table.rows.iter().flat_map(|row| row.cells.iter()))
            .flat_map(|cell| inlines(&cell.content))
            .collect(),
        Block::Figure(figure) => vec![NodeRef::Block(&figure.child)],
        Block::Container(c) => blocks(&c.children).collect(),
        Block::Callout(c) => {
            let mut out: Vec<_> = c.title.iter().flat_map(|t| inlines(t)).collect();
            out.extend(blocks(&c.children));
            out
        }
        Block::Collapse(c) => inlines(&c.title).chain(blocks(&c.children)).collect(),
        Block::FullColumnSpan(s) => blocks(&s.children).collect(),
        Block::Numbered(n) => blocks(&n.children).collect(),
        Block::Expanded(e) => blocks(&e.children).collect(),
        Block::PageMarginContent(m) => blocks(&m.children).collect(),
        Block::TableOfContents(toc) => toc.title.iter().flat_map(|t| inlines(t)).collect(),
        Block::CodeBlock(_)
        | Block::HorizontalRule
        | Block::Html(_)
        | Block::Math(_)
        | Block::MermaidDiagram(_)
        | Block::TikzDiagram(_)
        | Block::PageBreak
        | Block::LinkDefinition(_)
        | Block::SlidesConfiguration(_) => Vec::new(),
    }
}

fn inline_children(inline: &Inline) -> Vec<NodeRef<'_>> {
    match inline {
        Inline::Emphasis(e) => inlines(&e.content).collect(),
        Inline::Strong(s) => inlines(&s.content).collect(),
        Inline::Strikethrough(s) => inlines(&s.content).collect(),
        Inline::Link(l) => inlines(&l.content).collect(),
        Inline::ReferenceLink(l) => inlines(&l.content).collect(),
        Inline::Image(i) => inlines(&i.alt).collect(),
        Inline::TextTransform(t) => inlines(&t.content).collect(),
        Inline::InlineCollapse(c) => inlines(&c.text).chain(inlines(&c.placeholder)).collect(),
        Inline::Text(_)
        | Inline::CodeSpan(_)
        | Inline::LineBreak
        | Inline::MathSpan(_)
        | Inline::Whitespace(_)
        | Inline::PageCounter(_) => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::{BlockQuote, Figure, MermaidDiagram};
    use crate::inline::{Inline, Strong};

    #[test]
    fn test_leaf_nodes_have_no_children() {
        let block = Block::MermaidDiagram(MermaidDiagram {
            code: "graph TD".to_string(),
        });
        assert!(NodeRef::Block(&block).children().is_empty());
    }

    #[test]
    fn test_figure_child_is_visited() {
        let block = Block::Figure(Figure {
            child: Box::new(Block::paragraph("inside")),
            caption: None,
        });
        let children = NodeRef::Block(&block).children();
        assert_eq!(children.len(), 1);
        assert!(matches!(children[0], NodeRef::Block(Block::Paragraph(_))));
    }

    #[test]
    fn test_block_quote_content_precedes_attribution() {
        let block = Block::BlockQuote(BlockQuote {
            kind: None,
            attribution: Some(vec![Inline::text("someone")]),
            content: vec![Block::paragraph("quoted")],
        });
        let children = NodeRef::Block(&block).children();
        assert!(matches!(children[0], NodeRef::Block(_)));
        assert!(matches!(children[1], NodeRef::Inline(Inline::Text(_))));
    }

    #[test]
    fn test_inline_children() {
        let inline = Inline::Strong(Strong {
            content: vec![Inline::text("a"), Inline::text("b")],
        });
        assert_eq!(NodeRef::Inline(&inline).children().len(), 2);
    }
}
