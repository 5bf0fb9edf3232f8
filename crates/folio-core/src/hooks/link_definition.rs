/*
 * hooks/link_definition.rs
 * Copyright (c) 2025 Posit, PBC
 */

use folio_ast::{AstAttributes, Block, NodeRef};

use super::TreeHook;

/// Registers every link definition so reference links can resolve
/// regardless of where the definition appears.
#[derive(Debug, Default)]
pub struct LinkDefinitionRegistrationHook;

impl TreeHook for LinkDefinitionRegistrationHook {
    fn name(&self) -> &str {
        "link-definitions"
    }

    fn visit(&mut self, node: NodeRef<'_>, attributes: &mut AstAttributes) {
        if let Some(Block::LinkDefinition(definition)) = node.as_block() {
            if !attributes.register_link_definition(definition.clone()) {
                tracing::debug!(label = %definition.label, "Ignoring duplicate link definition");
            }
        }
    }
}
