/*
 * attributes_properties.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Property tests for the attribute store and JSON tree input.
 */

use folio_ast::{AstAttributes, Block, Capability, Document, Inline};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn capability() -> impl Strategy<Value = Capability> {
    prop_oneof![
        Just(Capability::Code),
        Just(Capability::Math),
        Just(Capability::MermaidDiagram),
        Just(Capability::TikzDiagram),
    ]
}

proptest! {
    #[test]
    fn presence_flags_never_unset(marks in proptest::collection::vec(capability(), 0..32)) {
        let mut attributes = AstAttributes::new();
        let mut seen = Vec::new();
        for capability in marks {
            attributes.mark_presence(capability);
            seen.push(capability);
            for earlier in &seen {
                prop_assert!(attributes.has_presence(*earlier));
            }
        }
        for capability in Capability::ALL {
            prop_assert_eq!(attributes.has_presence(capability), seen.contains(&capability));
        }
    }

    #[test]
    fn registered_identifiers_are_unique(names in proptest::collection::vec("[A-Za-z ]{0,6}", 1..24)) {
        let mut attributes = AstAttributes::new();
        let mut assigned = std::collections::HashSet::new();
        for name in &names {
            let id = attributes.register_identifier(
                name,
                folio_ast::IdentifierTarget {
                    kind: folio_ast::IdentifierKind::Heading,
                    depth: 1,
                    text: name.clone(),
                    explicit: false,
                },
            );
            prop_assert!(assigned.insert(id));
        }
        prop_assert_eq!(attributes.identifiers().count(), names.len());
    }
}

#[test]
fn test_document_from_json() {
    let json = r#"{
        "blocks": [
            { "MermaidDiagram": { "code": "graph TD; A-->B" } },
            { "Paragraph": { "content": [ { "Text": { "text": "hello" } } ] } },
            "PageBreak",
            { "CodeBlock": { "language": "rust", "text": "fn main() {}" } }
        ]
    }"#;

    let document = Document::from_json(json).unwrap();
    assert_eq!(document.blocks.len(), 4);
    assert_eq!(document.blocks[1], Block::paragraph("hello"));
    assert_eq!(document.blocks[2], Block::PageBreak);
    match &document.blocks[3] {
        Block::CodeBlock(code) => {
            assert_eq!(code.language.as_deref(), Some("rust"));
            assert!(code.line_numbers);
        }
        other => panic!("expected code block, got {:?}", other),
    }
}

#[test]
fn test_unknown_node_kind_is_rejected() {
    let json = r#"{ "blocks": [ { "Sparkline": { "data": [] } } ] }"#;
    assert!(Document::from_json(json).is_err());
}

#[test]
fn test_inline_text_shorthand() {
    assert_eq!(
        Inline::text("x"),
        Inline::Text(folio_ast::Text {
            text: "x".to_string()
        })
    );
}
