/*
 * attributes.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Per-render discovery results.
 */

//! Attribute store populated during discovery.
//!
//! [`AstAttributes`] collects what the discovery pass learns about a
//! document: which optional capabilities it uses (presence flags), the link
//! definitions and identifiers it declares, and where location-trackable
//! nodes sit. It is created empty for every render job, written only while
//! the tree iterator runs, and read-only from rendering onward.
//!
//! Registries are insertion-ordered so that their contents always follow
//! document order.

use std::collections::{BTreeMap, BTreeSet};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::block::LinkDefinition;
use crate::location::{Location, LocationKind};

/// An optional capability whose client-side support ships only when used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Capability {
    /// Code blocks or code spans (syntax highlighting).
    Code,
    /// Block or inline formulas.
    Math,
    MermaidDiagram,
    TikzDiagram,
}

impl Capability {
    pub const ALL: [Capability; 4] = [
        Capability::Code,
        Capability::Math,
        Capability::MermaidDiagram,
        Capability::TikzDiagram,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Capability::Code => "code",
            Capability::Math => "math",
            Capability::MermaidDiagram => "mermaid-diagram",
            Capability::TikzDiagram => "tikz-diagram",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IdentifierKind {
    Heading,
}

/// What a registered identifier points at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentifierTarget {
    pub kind: IdentifierKind,
    /// Heading depth, used to build the table of contents.
    pub depth: u8,
    /// Plain-text content of the target.
    pub text: String,
    /// The id was set by the author rather than derived from the text.
    #[serde(default)]
    pub explicit: bool,
}

/// Discovery results for one render job.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AstAttributes {
    presence: BTreeSet<Capability>,
    link_definitions: IndexMap<String, LinkDefinition>,
    identifiers: IndexMap<String, IdentifierTarget>,
    locations: BTreeMap<LocationKind, Vec<Location>>,
}

impl AstAttributes {
    pub fn new() -> Self {
        Self::default()
    }

    // Presence flags

    /// Record that `capability` occurs in the document. Idempotent.
    pub fn mark_presence(&mut self, capability: Capability) {
        self.presence.insert(capability);
    }

    /// Whether `capability` was marked. False if never marked.
    pub fn has_presence(&self, capability: Capability) -> bool {
        self.presence.contains(&capability)
    }

    /// All marked capabilities, in [`Capability`] order.
    pub fn present_capabilities(&self) -> impl Iterator<Item = Capability> + '_ {
        self.presence.iter().copied()
    }

    pub fn has_code(&self) -> bool {
        self.has_presence(Capability::Code)
    }

    pub fn has_math(&self) -> bool {
        self.has_presence(Capability::Math)
    }

    pub fn has_mermaid_diagram(&self) -> bool {
        self.has_presence(Capability::MermaidDiagram)
    }

    pub fn has_tikz_diagram(&self) -> bool {
        self.has_presence(Capability::TikzDiagram)
    }

    // Link definitions

    /// Register a link definition under its normalized label.
    ///
    /// The first definition of a label wins; later duplicates are ignored
    /// and `false` is returned.
    pub fn register_link_definition(&mut self, definition: LinkDefinition) -> bool {
        let key = normalize_label(&definition.label);
        if self.link_definitions.contains_key(&key) {
            return false;
        }
        self.link_definitions.insert(key, definition);
        true
    }

    pub fn link_definition(&self, label: &str) -> Option<&LinkDefinition> {
        self.link_definitions.get(&normalize_label(label))
    }

    pub fn link_definitions(&self) -> impl Iterator<Item = (&str, &LinkDefinition)> {
        self.link_definitions.iter().map(|(k, v)| (k.as_str(), v))
    }

    // Identifiers

    /// Register an identifier derived from `name` and return the one assigned.
    ///
    /// The name is normalized first. If the result is already taken, a
    /// numeric suffix is appended (`intro-1`, `intro-2`, ...), so every
    /// target gets a unique identifier in first-encounter order.
    pub fn register_identifier(&mut self, name: &str, target: IdentifierTarget) -> String {
        let base = normalize_identifier(name);
        let mut candidate = base.clone();
        let mut suffix = 1;
        while self.identifiers.contains_key(&candidate) {
            candidate = format!("{}-{}", base, suffix);
            suffix += 1;
        }
        self.identifiers.insert(candidate.clone(), target);
        candidate
    }

    pub fn identifier(&self, id: &str) -> Option<&IdentifierTarget> {
        self.identifiers.get(id)
    }

    /// The `index`-th registered identifier, in document order.
    pub fn identifier_at(&self, index: usize) -> Option<(&str, &IdentifierTarget)> {
        self.identifiers
            .get_index(index)
            .map(|(k, v)| (k.as_str(), v))
    }

    pub fn identifiers(&self) -> impl Iterator<Item = (&str, &IdentifierTarget)> {
        self.identifiers.iter().map(|(k, v)| (k.as_str(), v))
    }

    // Locations

    pub fn record_location(&mut self, kind: LocationKind, location: Location) {
        self.locations.entry(kind).or_default().push(location);
    }

    /// Location of the `index`-th node of `kind`, in document order.
    pub fn location(&self, kind: LocationKind, index: usize) -> Option<&Location> {
        self.locations.get(&kind).and_then(|l| l.get(index))
    }

    pub fn location_count(&self, kind: LocationKind) -> usize {
        self.locations.get(&kind).map_or(0, Vec::len)
    }
}

/// Normalize a link label for matching: trimmed, lowercase, inner
/// whitespace collapsed to single spaces.
pub fn normalize_label(label: &str) -> String {
    label
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Normalize text into an identifier: lowercase alphanumerics separated by
/// single dashes. Text with no usable characters becomes `section`.
pub fn normalize_identifier(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut pending_dash = false;
    for c in name.chars() {
        if c.is_alphanumeric() {
            if pending_dash && !out.is_empty() {
                out.push('-');
            }
            pending_dash = false;
            out.extend(c.to_lowercase());
        } else if c.is_whitespace() || c == '-' || c == '_' {
            pending_dash = true;
        }
    }
    if out.is_empty() {
        "section".to_string()
    } else {
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn heading_target(text: &str) -> IdentifierTarget {
        IdentifierTarget {
            kind: IdentifierKind::Heading,
            depth: 1,
            text: text.to_string(),
            explicit: false,
        }
    }

    #[test]
    fn test_presence_defaults_to_false() {
        let attributes = AstAttributes::new();
        for capability in Capability::ALL {
            assert!(!attributes.has_presence(capability));
        }
    }

    #[test]
    fn test_mark_presence_is_idempotent() {
        let mut attributes = AstAttributes::new();
        attributes.mark_presence(Capability::Math);
        attributes.mark_presence(Capability::Math);
        assert!(attributes.has_math());
        assert_eq!(attributes.present_capabilities().count(), 1);
    }

    #[test]
    fn test_first_link_definition_wins() {
        let mut attributes = AstAttributes::new();
        assert!(attributes.register_link_definition(LinkDefinition {
            label: "Home  Page".to_string(),
            url: "https://a.example".to_string(),
            title: None,
        }));
        assert!(!attributes.register_link_definition(LinkDefinition {
            label: "home page".to_string(),
            url: "https://b.example".to_string(),
            title: None,
        }));
        let def = attributes.link_definition(" HOME page ").unwrap();
        assert_eq!(def.url, "https://a.example");
    }

    #[test]
    fn test_duplicate_identifiers_get_suffixes() {
        let mut attributes = AstAttributes::new();
        assert_eq!(
            attributes.register_identifier("Intro", heading_target("Intro")),
            "intro"
        );
        assert_eq!(
            attributes.register_identifier("intro", heading_target("intro")),
            "intro-1"
        );
        assert_eq!(
            attributes.register_identifier("Intro", heading_target("Intro")),
            "intro-2"
        );
        assert_eq!(attributes.identifier_at(1).unwrap().0, "intro-1");
    }

    #[test]
    fn test_normalize_identifier() {
        assert_eq!(normalize_identifier("Hello, World!"), "hello-world");
        assert_eq!(normalize_identifier("  a -- b_c "), "a-b-c");
        assert_eq!(normalize_identifier("Café 2"), "café-2");
        assert_eq!(normalize_identifier("!!!"), "section");
    }

    #[test]
    fn test_locations_in_document_order() {
        let mut attributes = AstAttributes::new();
        attributes.record_location(
            LocationKind::Figure,
            Location {
                sections: vec![1],
                ordinals: vec![1, 1],
            },
        );
        attributes.record_location(
            LocationKind::Figure,
            Location {
                sections: vec![1],
                ordinals: vec![2, 2],
            },
        );
        assert_eq!(attributes.location_count(LocationKind::Figure), 2);
        assert_eq!(
            attributes.location(LocationKind::Figure, 1).unwrap().ordinal(1),
            2
        );
        assert!(attributes.location(LocationKind::Table, 0).is_none());
    }
}
