/*
 * hooks/location.rs
 * Copyright (c) 2025 Posit, PBC
 */

use folio_ast::{AstAttributes, Block, Location, LocationKind, NodeRef};

use super::TreeHook;

const MAX_DEPTH: usize = 6;

/// Per-kind counters of figures or tables.
///
/// `counts[d]` is reset whenever a heading of depth `d` or shallower is met;
/// `counts[0]` never is.
#[derive(Debug, Default, Clone)]
struct Ordinals {
    counts: [usize; MAX_DEPTH + 1],
}

impl Ordinals {
    fn reset_from(&mut self, depth: usize) {
        for count in &mut self.counts[depth..] {
            *count = 0;
        }
    }

    fn next(&mut self) -> Vec<usize> {
        for count in &mut self.counts {
            *count += 1;
        }
        self.counts.to_vec()
    }
}

/// Records the section position of headings, figures and tables.
#[derive(Debug, Default)]
pub struct LocationTrackingHook {
    sections: [usize; MAX_DEPTH],
    current_depth: usize,
    figures: Ordinals,
    tables: Ordinals,
}

impl LocationTrackingHook {
    pub fn new() -> Self {
        Self::default()
    }

    fn current_sections(&self) -> Vec<usize> {
        self.sections[..self.current_depth].to_vec()
    }
}

impl TreeHook for LocationTrackingHook {
    fn name(&self) -> &str {
        "locations"
    }

    fn visit(&mut self, node: NodeRef<'_>, attributes: &mut AstAttributes) {
        match node.as_block() {
            Some(Block::Heading(heading)) if !heading.is_marker() => {
                let depth = usize::from(heading.depth).min(MAX_DEPTH);
                self.sections[depth - 1] += 1;
                for counter in &mut self.sections[depth..] {
                    *counter = 0;
                }
                self.current_depth = depth;
                self.figures.reset_from(depth);
                self.tables.reset_from(depth);

                attributes.record_location(
                    LocationKind::Heading,
                    Location {
                        sections: self.current_sections(),
                        ordinals: Vec::new(),
                    },
                );
            }
            Some(Block::Figure(_)) => {
                let ordinals = self.figures.next();
                attributes.record_location(
                    LocationKind::Figure,
                    Location {
                        sections: self.current_sections(),
                        ordinals,
                    },
                );
            }
            Some(Block::Table(_)) => {
                let ordinals = self.tables.next();
                attributes.record_location(
                    LocationKind::Table,
                    Location {
                        sections: self.current_sections(),
                        ordinals,
                    },
                );
            }
            _ => {}
        }
    }
}
