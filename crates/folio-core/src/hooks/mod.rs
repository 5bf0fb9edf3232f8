/*
 * hooks/mod.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Discovery hooks.
 */

//! Discovery hooks.
//!
//! A [`TreeHook`] observes every node of the tree during the discovery pass
//! and records what it learns in the [`AstAttributes`] of the job. Hooks
//! receive shared references only: they can never change the tree.
//!
//! Hooks are attached to an
//! [`ObservableTreeIterator`](crate::iterator::ObservableTreeIterator) in an
//! explicit order and invoked in that order for every node.

mod identifier;
mod link_definition;
mod location;
mod presence;

pub use identifier::IdentifierRegistrationHook;
pub use link_definition::LinkDefinitionRegistrationHook;
pub use location::LocationTrackingHook;
pub use presence::PresenceHook;

use folio_ast::{AstAttributes, NodeRef};

/// An observer invoked for each node during discovery.
///
/// Hooks never fail. Anything they cannot resolve is left for the renderer
/// to report as a content warning.
pub trait TreeHook: Send {
    /// Human-readable name, used for logging.
    fn name(&self) -> &str;

    /// Observe one node.
    fn visit(&mut self, node: NodeRef<'_>, attributes: &mut AstAttributes);
}
