/*
 * warning.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Non-fatal problems found while rendering content.
 */

use serde::Serialize;

/// What kind of content problem was recovered from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum WarningKind {
    /// A reference link whose label has no matching link definition.
    UnresolvedReference,
    /// A diagram or formula with empty source.
    EmptySource,
}

impl WarningKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            WarningKind::UnresolvedReference => "unresolved-reference",
            WarningKind::EmptySource => "empty-source",
        }
    }
}

/// A content problem the renderer worked around with a fallback fragment.
///
/// Warnings never stop a render; they are collected on the render output
/// and reported as a summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContentWarning {
    pub kind: WarningKind,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl ContentWarning {
    pub fn new(kind: WarningKind, title: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            detail: None,
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    pub fn unresolved_reference(label: &str) -> Self {
        Self::new(
            WarningKind::UnresolvedReference,
            format!("Unresolved reference '{}'", label),
        )
        .with_detail("No link definition with this label exists in the document")
    }

    pub fn empty_source(node: &str) -> Self {
        Self::new(WarningKind::EmptySource, format!("Empty {} source", node))
    }

    /// Render as a single line of plain text, e.g.
    /// `warning[unresolved-reference]: Unresolved reference 'x' (...)`.
    pub fn to_text(&self) -> String {
        match &self.detail {
            Some(detail) => format!(
                "warning[{}]: {} ({})",
                self.kind.as_str(),
                self.title,
                detail
            ),
            None => format!("warning[{}]: {}", self.kind.as_str(), self.title),
        }
    }
}

impl std::fmt::Display for ContentWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_text())
    }
}
