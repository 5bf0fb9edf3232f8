/*
 * location.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Positions of location-trackable nodes within the section structure.
 */

use serde::{Deserialize, Serialize};

/// Node kinds whose position in the document is recorded during discovery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LocationKind {
    Heading,
    Figure,
    Table,
}

impl LocationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            LocationKind::Heading => "heading",
            LocationKind::Figure => "figure",
            LocationKind::Table => "table",
        }
    }
}

/// Where a node sits in the document.
///
/// `sections` is the heading counter path at the node: `[2, 1]` is inside
/// the first subsection of the second section. For headings this is the
/// heading's own number.
///
/// `ordinals[d]` is the 1-based count of nodes of the same kind seen since
/// the last heading of depth `d` or shallower; `ordinals[0]` is never reset
/// and counts from the start of the document. Headings have no ordinals.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub sections: Vec<usize>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ordinals: Vec<usize>,
}

impl Location {
    /// Section counter at `depth` (0-based), or 0 if the node is shallower.
    pub fn section(&self, depth: usize) -> usize {
        self.sections.get(depth).copied().unwrap_or(0)
    }

    /// Ordinal relative to headings of `depth` or shallower.
    pub fn ordinal(&self, depth: usize) -> usize {
        self.ordinals
            .get(depth)
            .or_else(|| self.ordinals.last())
            .copied()
            .unwrap_or(0)
    }
}
