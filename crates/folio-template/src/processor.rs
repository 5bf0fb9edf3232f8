/*
 * processor.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Single-pass placeholder resolution.
 */

use std::path::Path;

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::error::{TemplateError, TemplateResult};
use crate::placeholder::{PlaceholderKind, TemplatePlaceholder, TemplateRow};

static SCALAR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[\[([A-Za-z0-9_-]+)\]\]").unwrap());
static MARKER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[\[(if|endif|for|endfor):(!?[A-Za-z0-9_-]+)\]\]").unwrap());

const IF_OPEN: &str = "[[if:";
const FOR_OPEN: &str = "[[for:";
const MARKER_CLOSE: &str = "]]";

/// A template plus the values to inject into it.
///
/// Values are registered with [`value`](Self::value),
/// [`optional_value`](Self::optional_value), [`conditional`](Self::conditional)
/// and [`iterable`](Self::iterable), then [`process`](Self::process) produces
/// the final text. The processor is not consumed, so the same configuration
/// can be processed repeatedly with identical output.
#[derive(Debug, Clone)]
pub struct TemplateProcessor {
    text: String,
    values: IndexMap<String, String>,
    optional_keys: Vec<String>,
    conditionals: IndexMap<String, bool>,
    iterables: IndexMap<String, Vec<TemplateRow>>,
}

impl TemplateProcessor {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            values: IndexMap::new(),
            optional_keys: Vec::new(),
            conditionals: IndexMap::new(),
            iterables: IndexMap::new(),
        }
    }

    /// Load a template from a file.
    pub fn from_file(path: &Path) -> TemplateResult<Self> {
        Ok(Self::new(std::fs::read_to_string(path)?))
    }

    /// The unprocessed template text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Set a required scalar.
    pub fn value(&mut self, key: &str, value: impl ToString) -> &mut Self {
        self.values.insert(key.to_string(), value.to_string());
        self
    }

    /// Set a scalar that may be absent. Absent values resolve to an empty string.
    pub fn optional_value<V: ToString>(&mut self, key: &str, value: Option<V>) -> &mut Self {
        let value = value.map_or_else(String::new, |v| v.to_string());
        self.values.insert(key.to_string(), value);
        if !self.optional_keys.iter().any(|k| k == key) {
            self.optional_keys.push(key.to_string());
        }
        self
    }

    /// Include (`true`) or remove (`false`) the blocks marked with `key`.
    pub fn conditional(&mut self, key: &str, value: bool) -> &mut Self {
        self.conditionals.insert(key.to_string(), value);
        self
    }

    /// Repeat the blocks marked with `key` once per row.
    pub fn iterable<R: Into<TemplateRow>>(
        &mut self,
        key: &str,
        rows: impl IntoIterator<Item = R>,
    ) -> &mut Self {
        self.iterables
            .insert(key.to_string(), rows.into_iter().map(Into::into).collect());
        self
    }

    /// Placeholders used by the template, in order of first appearance.
    pub fn placeholders(&self) -> Vec<TemplatePlaceholder> {
        let mut found: Vec<TemplatePlaceholder> = Vec::new();
        let mut push = |placeholder: TemplatePlaceholder| {
            if !found.contains(&placeholder) {
                found.push(placeholder);
            }
        };

        let mut markers: Vec<(usize, TemplatePlaceholder)> = MARKER_RE
            .captures_iter(&self.text)
            .filter_map(|caps| {
                let start = caps.get(0)?.start();
                let key = caps[2].trim_start_matches('!');
                match &caps[1] {
                    "if" => Some((start, TemplatePlaceholder::new(key, PlaceholderKind::Conditional))),
                    "for" => Some((start, TemplatePlaceholder::new(key, PlaceholderKind::Iterable))),
                    _ => None,
                }
            })
            .collect();

        for caps in SCALAR_RE.captures_iter(&self.text) {
            let key = &caps[1];
            let kind = if self.optional_keys.iter().any(|k| k == key) {
                PlaceholderKind::OptionalValue
            } else {
                PlaceholderKind::Value
            };
            let start = caps.get(0).map_or(0, |m| m.start());
            markers.push((start, TemplatePlaceholder::new(key, kind)));
        }

        markers.sort_by_key(|(start, _)| *start);
        let iterable_keys: Vec<String> = markers
            .iter()
            .filter(|(_, p)| p.kind == PlaceholderKind::Iterable)
            .map(|(_, p)| p.key.clone())
            .collect();
        for (_, placeholder) in markers {
            // Inside `[[for:K]]`, `[[K]]` is the row value, not a scalar.
            if placeholder.kind == PlaceholderKind::Value && iterable_keys.contains(&placeholder.key)
            {
                continue;
            }
            push(placeholder);
        }
        found
    }

    /// Resolve every placeholder and return the resulting text.
    ///
    /// Conditional blocks are resolved first, then iterable blocks, then
    /// scalars. A block may contain one nested block of a different key.
    pub fn process(&self) -> TemplateResult<String> {
        let conditioned = self.resolve_conditionals(&self.text)?;
        let output = self.resolve_iterables(&conditioned)?;
        tracing::debug!(
            values = self.values.len(),
            conditionals = self.conditionals.len(),
            iterables = self.iterables.len(),
            "Processed template"
        );
        Ok(output)
    }

    fn resolve_conditionals(&self, text: &str) -> TemplateResult<String> {
        let mut out = String::with_capacity(text.len());
        let mut rest = text;

        while let Some(start) = rest.find(IF_OPEN) {
            out.push_str(&rest[..start]);
            let block = split_block(&rest[start + IF_OPEN.len()..], "if", "endif")?;

            let (inverted, key) = match block.key.strip_prefix('!') {
                Some(key) => (true, key),
                None => (false, block.key),
            };
            let value = *self
                .conditionals
                .get(key)
                .ok_or_else(|| TemplateError::UnresolvedBlock {
                    marker: "if",
                    key: key.to_string(),
                })?;

            if value != inverted {
                out.push_str(&self.resolve_conditionals(block.inner)?);
            }
            rest = block.rest;
        }

        out.push_str(rest);
        Ok(out)
    }

    fn resolve_iterables(&self, text: &str) -> TemplateResult<String> {
        let mut out = String::with_capacity(text.len());
        let mut rest = text;

        while let Some(start) = rest.find(FOR_OPEN) {
            out.push_str(&self.substitute_scalars(&rest[..start], None)?);
            let block = split_block(&rest[start + FOR_OPEN.len()..], "for", "endfor")?;

            let rows = self
                .iterables
                .get(block.key)
                .ok_or_else(|| TemplateError::UnresolvedBlock {
                    marker: "for",
                    key: block.key.to_string(),
                })?;
            for row in rows {
                out.push_str(&self.substitute_scalars(block.inner, Some((block.key, row)))?);
            }
            rest = block.rest;
        }

        out.push_str(&self.substitute_scalars(rest, None)?);
        Ok(out)
    }

    /// Replace scalar placeholders in a segment that contains no blocks.
    ///
    /// Substituted values are never scanned again, so user content that
    /// happens to look like a placeholder is left as is.
    fn substitute_scalars(&self, text: &str, row: Option<(&str, &TemplateRow)>) -> TemplateResult<String> {
        if let Some(caps) = MARKER_RE.captures(text) {
            return Err(TemplateError::StrayMarker {
                marker: marker_name(&caps[1]),
                key: caps[2].to_string(),
            });
        }

        let mut missing: Option<String> = None;
        let output = SCALAR_RE.replace_all(text, |caps: &Captures| {
            let key = &caps[1];
            if let Some(value) = row.and_then(|(iterable, row)| row.lookup(iterable, key)) {
                return value.to_string();
            }
            if let Some(value) = self.values.get(key) {
                return value.clone();
            }
            missing.get_or_insert_with(|| key.to_string());
            caps[0].to_string()
        });

        match missing {
            Some(key) => Err(TemplateError::MissingValue { key }),
            None => Ok(output.into_owned()),
        }
    }
}

/// A block split out of the text following its opening `[[marker:`.
struct SplitBlock<'a> {
    key: &'a str,
    inner: &'a str,
    rest: &'a str,
}

fn split_block<'a>(
    after_open: &'a str,
    marker: &'static str,
    end_marker: &'static str,
) -> TemplateResult<SplitBlock<'a>> {
    let key_end = after_open
        .find(MARKER_CLOSE)
        .ok_or_else(|| TemplateError::UnterminatedBlock {
            marker,
            key: after_open.chars().take_while(|c| !c.is_whitespace()).collect(),
        })?;
    let key = &after_open[..key_end];
    let body = &after_open[key_end + MARKER_CLOSE.len()..];

    let close = format!("[[{}:{}]]", end_marker, key);
    let close_at = body
        .find(&close)
        .ok_or_else(|| TemplateError::UnterminatedBlock {
            marker,
            key: key.to_string(),
        })?;

    Ok(SplitBlock {
        key,
        inner: &body[..close_at],
        rest: &body[close_at + close.len()..],
    })
}

fn marker_name(marker: &str) -> &'static str {
    match marker {
        "if" => "if",
        "endif" => "endif",
        "for" => "for",
        _ => "endfor",
    }
}
