/*
 * hooks/presence.rs
 * Copyright (c) 2025 Posit, PBC
 */

use folio_ast::{AstAttributes, Block, Capability, Inline, NodeRef};

use super::TreeHook;

/// Marks a capability as present when a node that needs it is found.
///
/// Once marked, further matches are no-ops.
#[derive(Debug)]
pub struct PresenceHook {
    capability: Capability,
    name: String,
}

impl PresenceHook {
    pub fn new(capability: Capability) -> Self {
        Self {
            capability,
            name: format!("{}-presence", capability.as_str()),
        }
    }

    pub fn capability(&self) -> Capability {
        self.capability
    }

    /// Whether `node` requires this hook's capability.
    pub fn matches(&self, node: NodeRef<'_>) -> bool {
        match (self.capability, node) {
            (Capability::Code, NodeRef::Block(Block::CodeBlock(_)))
            | (Capability::Code, NodeRef::Inline(Inline::CodeSpan(_)))
            | (Capability::Math, NodeRef::Block(Block::Math(_)))
            | (Capability::Math, NodeRef::Inline(Inline::MathSpan(_)))
            | (Capability::MermaidDiagram, NodeRef::Block(Block::MermaidDiagram(_)))
            | (Capability::TikzDiagram, NodeRef::Block(Block::TikzDiagram(_))) => true,
            _ => false,
        }
    }
}

impl TreeHook for PresenceHook {
    fn name(&self) -> &str {
        &self.name
    }

    fn visit(&mut self, node: NodeRef<'_>, attributes: &mut AstAttributes) {
        if attributes.has_presence(self.capability) {
            return;
        }
        if self.matches(node) {
            tracing::debug!(capability = self.capability.as_str(), "Capability present");
            attributes.mark_presence(self.capability);
        }
    }
}
