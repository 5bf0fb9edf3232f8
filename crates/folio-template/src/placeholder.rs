/*
 * placeholder.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Placeholder descriptors and iterable rows.

use indexmap::IndexMap;

/// How a placeholder key is resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlaceholderKind {
    /// `[[KEY]]` that must be given a value.
    Value,
    /// `[[KEY]]` whose value may be absent; absent resolves to an empty string.
    OptionalValue,
    /// `[[if:KEY]]...[[endif:KEY]]`
    Conditional,
    /// `[[for:KEY]]...[[endfor:KEY]]`
    Iterable,
}

/// A placeholder found in a template.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TemplatePlaceholder {
    pub key: String,
    pub kind: PlaceholderKind,
}

impl TemplatePlaceholder {
    pub fn new(key: impl Into<String>, kind: PlaceholderKind) -> Self {
        Self {
            key: key.into(),
            kind,
        }
    }
}

/// One repetition of an iterable block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateRow {
    /// A single value, bound to the iterable's own key inside the block.
    Scalar(String),
    /// Named values, each bound to `[[FIELD]]` inside the block.
    Fields(IndexMap<String, String>),
}

impl TemplateRow {
    /// Value bound to `key` inside a block of the iterable `iterable_key`.
    pub(crate) fn lookup(&self, iterable_key: &str, key: &str) -> Option<&str> {
        match self {
            TemplateRow::Scalar(value) if key == iterable_key => Some(value),
            TemplateRow::Scalar(_) => None,
            TemplateRow::Fields(fields) => fields.get(key).map(String::as_str),
        }
    }
}

impl From<String> for TemplateRow {
    fn from(value: String) -> Self {
        TemplateRow::Scalar(value)
    }
}

impl From<&str> for TemplateRow {
    fn from(value: &str) -> Self {
        TemplateRow::Scalar(value.to_string())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for TemplateRow {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        TemplateRow::Fields(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}
