/*
 * presence_properties.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Property tests: presence flags drive the shipped scripts.
 */

use std::sync::Arc;

use folio_ast::{
    Block, Capability, CodeSpan, Document, FullColumnSpan, Inline, Math, MathSpan, MermaidDiagram,
    Paragraph, TikzDiagram,
};
use folio_core::{DocumentConfig, EmbeddedCatalogue, OutputResource, ResourceGroup, render_document};
use proptest::prelude::*;

/// A generated node and the capability it requires, if any.
#[derive(Debug, Clone)]
struct Node {
    block: Block,
    capability: Option<Capability>,
}

fn leaf() -> impl Strategy<Value = Node> {
    prop_oneof![
        "[a-z ]{1,8}".prop_map(|text| Node {
            block: Block::paragraph(text),
            capability: None,
        }),
        "[a-z]{1,4}".prop_map(|text| Node {
            block: Block::Paragraph(Paragraph {
                content: vec![Inline::CodeSpan(CodeSpan { text, color: None })],
            }),
            capability: Some(Capability::Code),
        }),
        "[a-z^]{1,4}".prop_map(|expression| Node {
            block: Block::Math(Math { expression }),
            capability: Some(Capability::Math),
        }),
        "[a-z]{1,4}".prop_map(|expression| Node {
            block: Block::Paragraph(Paragraph {
                content: vec![Inline::MathSpan(MathSpan { expression })],
            }),
            capability: Some(Capability::Math),
        }),
        "[A-Z]{1,4}".prop_map(|code| Node {
            block: Block::MermaidDiagram(MermaidDiagram { code }),
            capability: Some(Capability::MermaidDiagram),
        }),
        "[a-z]{1,4}".prop_map(|code| Node {
            block: Block::TikzDiagram(TikzDiagram { code }),
            capability: Some(Capability::TikzDiagram),
        }),
    ]
}

/// A leaf, possibly nested one level inside a wrapper block.
fn node() -> impl Strategy<Value = Node> {
    (leaf(), any::<bool>()).prop_map(|(node, nested)| {
        if nested {
            Node {
                block: Block::FullColumnSpan(FullColumnSpan {
                    children: vec![node.block],
                }),
                capability: node.capability,
            }
        } else {
            node
        }
    })
}

fn script_name(capability: Capability) -> &'static str {
    match capability {
        Capability::Code => "code",
        Capability::Math => "math",
        Capability::MermaidDiagram => "mermaid",
        Capability::TikzDiagram => "tikz",
    }
}

fn assert_unique_names(group: &ResourceGroup) {
    let names = group.names();
    for (i, name) in names.iter().enumerate() {
        assert!(!names[..i].contains(name), "duplicate '{}' in '{}'", name, group.name());
    }
    for resource in group.resources() {
        if let OutputResource::Group(child) = resource {
            assert_unique_names(child);
        }
    }
}

proptest! {
    #[test]
    fn presence_matches_tree_and_scripts(nodes in proptest::collection::vec(node(), 0..12)) {
        let document = Document::new(nodes.iter().map(|n| n.block.clone()).collect());
        let output = render_document(&document, DocumentConfig::default(), Arc::new(EmbeddedCatalogue))
            .unwrap();

        let root = output.resources.as_group().unwrap();
        let scripts = root.group("script").unwrap().names();
        for capability in Capability::ALL {
            let in_tree = nodes.iter().any(|n| n.capability == Some(capability));
            prop_assert_eq!(output.attributes.has_presence(capability), in_tree);
            prop_assert_eq!(scripts.contains(&script_name(capability)), in_tree);
        }
        prop_assert_eq!(scripts[0], "script");
    }

    #[test]
    fn artifact_names_are_unique(nodes in proptest::collection::vec(node(), 0..8), port in proptest::option::of(1024u16..9000)) {
        let document = Document::new(nodes.into_iter().map(|n| n.block).collect());
        let mut config = DocumentConfig::default();
        config.options.server_port = port;
        let output = render_document(&document, config, Arc::new(EmbeddedCatalogue)).unwrap();

        assert_unique_names(output.resources.as_group().unwrap());
    }
}
