/*
 * hooks/identifier.rs
 * Copyright (c) 2025 Posit, PBC
 */

use folio_ast::{AstAttributes, Block, IdentifierKind, IdentifierTarget, NodeRef, inlines_to_plain_text};

use super::TreeHook;

/// Assigns a unique identifier to every heading, markers included.
///
/// Headings with a custom id are registered under it; others under their
/// text. The renderer reads the registry back in the same order, so the
/// n-th heading it writes gets the n-th identifier.
#[derive(Debug, Default)]
pub struct IdentifierRegistrationHook;

impl TreeHook for IdentifierRegistrationHook {
    fn name(&self) -> &str {
        "identifiers"
    }

    fn visit(&mut self, node: NodeRef<'_>, attributes: &mut AstAttributes) {
        let Some(Block::Heading(heading)) = node.as_block() else {
            return;
        };
        let text = inlines_to_plain_text(&heading.content);
        let name = heading.custom_id.as_deref().unwrap_or(&text);
        let id = attributes.register_identifier(
            name,
            IdentifierTarget {
                kind: IdentifierKind::Heading,
                depth: heading.depth,
                text: text.clone(),
                explicit: heading.custom_id.is_some(),
            },
        );
        tracing::trace!(id = %id, "Registered heading identifier");
    }
}
