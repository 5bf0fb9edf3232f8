/*
 * document.rs
 * Copyright (c) 2025 Posit, PBC
 */

use crate::block::Blocks;
use crate::node::NodeRef;
use serde::{Deserialize, Serialize};

/// Root of a fully evaluated document tree.
///
/// The parser and function evaluator produce this structure; by the time it
/// reaches the renderer no unresolved function calls remain.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub blocks: Blocks,
}

impl Document {
    pub fn new(blocks: Blocks) -> Self {
        Self { blocks }
    }

    /// Top-level nodes, in document order.
    pub fn roots(&self) -> impl Iterator<Item = NodeRef<'_>> {
        self.blocks.iter().map(NodeRef::Block)
    }

    /// Parse a tree from its JSON serialization.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
