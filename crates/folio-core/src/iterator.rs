/*
 * iterator.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Discovery pass: a single pre-order walk with attached hooks.
 */

//! Tree iterator for the discovery pass.
//!
//! - [`ObservableTreeIterator`] - Ordered collection of hooks plus the walk
//! - [`TreeIteratorFactory`] - Builds the iterator with the standard hooks
//!
//! The walk is depth-first pre-order, following
//! [`NodeRef::children`](folio_ast::NodeRef::children). Every hook sees every
//! node, in attachment order, before the walk moves to the node's children.

use folio_ast::{AstAttributes, Capability, Document, NodeRef};

use crate::hooks::{
    IdentifierRegistrationHook, LinkDefinitionRegistrationHook, LocationTrackingHook, PresenceHook,
    TreeHook,
};

/// A tree walker that notifies its hooks of every node.
pub struct ObservableTreeIterator {
    hooks: Vec<Box<dyn TreeHook>>,
}

impl ObservableTreeIterator {
    pub fn new() -> Self {
        Self { hooks: Vec::new() }
    }

    /// Attach a hook. Hooks run in the order they are attached.
    pub fn attach(&mut self, hook: Box<dyn TreeHook>) -> &mut Self {
        self.hooks.push(hook);
        self
    }

    pub fn len(&self) -> usize {
        self.hooks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }

    /// Names of the attached hooks in execution order.
    pub fn hook_names(&self) -> Vec<&str> {
        self.hooks.iter().map(|h| h.name()).collect()
    }

    /// Walk `document` once, invoking every hook on every node.
    ///
    /// Returns the number of nodes visited.
    pub fn traverse(&mut self, document: &Document, attributes: &mut AstAttributes) -> usize {
        tracing::debug!(hooks = ?self.hook_names(), "Starting discovery traversal");
        let mut visited = 0;
        for root in document.roots() {
            visited += self.visit(root, attributes);
        }
        tracing::debug!(nodes = visited, "Discovery traversal complete");
        visited
    }

    fn visit(&mut self, node: NodeRef<'_>, attributes: &mut AstAttributes) -> usize {
        for hook in &mut self.hooks {
            hook.visit(node, attributes);
        }
        let mut visited = 1;
        for child in node.children() {
            visited += self.visit(child, attributes);
        }
        visited
    }
}

impl Default for ObservableTreeIterator {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds tree iterators with the standard discovery hooks.
pub struct TreeIteratorFactory;

impl TreeIteratorFactory {
    /// Iterator with link definition, identifier and location registration,
    /// followed by presence detection for code, mermaid, tikz and math.
    pub fn default_iterator() -> ObservableTreeIterator {
        let mut iterator = ObservableTreeIterator::new();
        iterator
            .attach(Box::new(LinkDefinitionRegistrationHook))
            .attach(Box::new(IdentifierRegistrationHook))
            .attach(Box::new(LocationTrackingHook::new()))
            .attach(Box::new(PresenceHook::new(Capability::Code)))
            .attach(Box::new(PresenceHook::new(Capability::MermaidDiagram)))
            .attach(Box::new(PresenceHook::new(Capability::TikzDiagram)))
            .attach(Box::new(PresenceHook::new(Capability::Math)));
        iterator
    }
}
