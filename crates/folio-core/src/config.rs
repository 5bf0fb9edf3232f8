/*
 * config.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Document configuration and render options.
 */

//! Document configuration.
//!
//! A [`DocumentConfig`] is read from YAML with kebab-case keys. Every key is
//! optional:
//!
//! ```yaml
//! name: Quarterly report
//! type: paged
//! locale: en-US
//! numbering:
//!   headings: "1.1"
//!   figures: "1.a"
//! theme:
//!   color: darko
//! layout:
//!   page-format: { width: 21cm, height: 29.7cm, margin: 2cm }
//!   caption-position: { tables: top }
//! tex-macros:
//!   \R: \mathbb{R}
//! options:
//!   server-port: 8089
//! ```

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::ConfigurationError;

static THEME_COMPONENT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-z0-9-]+$").unwrap());
static SIZE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d+(?:\.\d+)?)(px|pt|cm|mm|in|em|rem|%)$").unwrap());

/// Color scheme used when the configuration names none.
pub const DEFAULT_THEME_COLOR: &str = "paperwhite";
/// Layout used when the configuration names none.
pub const DEFAULT_THEME_LAYOUT: &str = "latex";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DocumentType {
    #[default]
    Plain,
    Paged,
    Slides,
}

impl DocumentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentType::Plain => "plain",
            DocumentType::Paged => "paged",
            DocumentType::Slides => "slides",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CaptionPosition {
    Top,
    #[default]
    Bottom,
}

impl CaptionPosition {
    pub fn as_css(&self) -> &'static str {
        match self {
            CaptionPosition::Top => "top",
            CaptionPosition::Bottom => "bottom",
        }
    }
}

/// Caption position per captionable kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct CaptionPositionInfo {
    pub figures: CaptionPosition,
    pub tables: CaptionPosition,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HorizontalAlignment {
    Start,
    Center,
    End,
    Justify,
}

impl HorizontalAlignment {
    pub fn as_css(&self) -> &'static str {
        match self {
            HorizontalAlignment::Start => "start",
            HorizontalAlignment::Center => "center",
            HorizontalAlignment::End => "end",
            HorizontalAlignment::Justify => "justify",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeUnit {
    Px,
    Pt,
    Cm,
    Mm,
    In,
    Em,
    Rem,
    Percent,
}

impl SizeUnit {
    pub fn as_css(&self) -> &'static str {
        match self {
            SizeUnit::Px => "px",
            SizeUnit::Pt => "pt",
            SizeUnit::Cm => "cm",
            SizeUnit::Mm => "mm",
            SizeUnit::In => "in",
            SizeUnit::Em => "em",
            SizeUnit::Rem => "rem",
            SizeUnit::Percent => "%",
        }
    }

    fn from_css(unit: &str) -> Option<Self> {
        match unit {
            "px" => Some(SizeUnit::Px),
            "pt" => Some(SizeUnit::Pt),
            "cm" => Some(SizeUnit::Cm),
            "mm" => Some(SizeUnit::Mm),
            "in" => Some(SizeUnit::In),
            "em" => Some(SizeUnit::Em),
            "rem" => Some(SizeUnit::Rem),
            "%" => Some(SizeUnit::Percent),
            _ => None,
        }
    }
}

/// A CSS length such as `21cm` or `1.5em`.
///
/// Parsing accepts only a non-negative number followed by a known unit, so
/// a size can be written into a stylesheet as is.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Size {
    pub value: f64,
    pub unit: SizeUnit,
}

impl FromStr for Size {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ConfigurationError::InvalidSize(s.to_string());
        let captures = SIZE_RE.captures(s.trim()).ok_or_else(invalid)?;
        let value = captures[1].parse::<f64>().map_err(|_| invalid())?;
        let unit = SizeUnit::from_css(&captures[2]).ok_or_else(invalid)?;
        Ok(Size { value, unit })
    }
}

impl TryFrom<String> for Size {
    type Error = ConfigurationError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Size> for String {
    fn from(size: Size) -> Self {
        size.to_string()
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value, self.unit.as_css())
    }
}

/// One to four sizes, in CSS shorthand order (`2cm`, `1cm 2cm`, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Sizes(Vec<Size>);

impl Sizes {
    pub fn values(&self) -> &[Size] {
        &self.0
    }
}

impl FromStr for Sizes {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let sizes = s
            .split_whitespace()
            .map(Size::from_str)
            .collect::<Result<Vec<_>, _>>()?;
        if !(1..=4).contains(&sizes.len()) {
            return Err(ConfigurationError::InvalidSize(s.to_string()));
        }
        Ok(Sizes(sizes))
    }
}

impl TryFrom<String> for Sizes {
    type Error = ConfigurationError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Sizes> for String {
    fn from(sizes: Sizes) -> Self {
        sizes.to_string()
    }
}

impl fmt::Display for Sizes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.0.iter().map(Size::to_string).collect();
        write!(f, "{}", parts.join(" "))
    }
}

/// Page size and margins.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct PageFormat {
    pub width: Option<Size>,
    pub height: Option<Size>,
    pub margin: Option<Sizes>,
    pub columns: Option<u32>,
    pub alignment: Option<HorizontalAlignment>,
}

impl PageFormat {
    pub fn has_size(&self) -> bool {
        self.width.is_some() || self.height.is_some()
    }
}

/// Paragraph spacing values, in `em` except for the unitless line height.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ParagraphStyle {
    pub spacing: Option<f64>,
    pub line_height: Option<f64>,
    pub letter_spacing: Option<f64>,
    pub indent: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct DocumentLayout {
    pub page_format: PageFormat,
    pub paragraph_style: ParagraphStyle,
    pub caption_position: CaptionPositionInfo,
    /// Headings up to this depth start on a new page in paged and slides
    /// documents. 0 disables automatic page breaks.
    pub auto_page_break_heading_depth: u8,
}

impl Default for DocumentLayout {
    fn default() -> Self {
        Self {
            page_format: PageFormat::default(),
            paragraph_style: ParagraphStyle::default(),
            caption_position: CaptionPositionInfo::default(),
            auto_page_break_heading_depth: 1,
        }
    }
}

/// Theme components. Missing components fall back to the defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct DocumentTheme {
    pub color: Option<String>,
    pub layout: Option<String>,
}

impl DocumentTheme {
    /// Fill missing components from `default`.
    pub fn or_default(&self, default: &DocumentTheme) -> DocumentTheme {
        DocumentTheme {
            color: self.color.clone().or_else(|| default.color.clone()),
            layout: self.layout.clone().or_else(|| default.layout.clone()),
        }
    }

    /// The built-in theme: `paperwhite` colors on the `latex` layout.
    pub fn builtin() -> DocumentTheme {
        DocumentTheme {
            color: Some(DEFAULT_THEME_COLOR.to_string()),
            layout: Some(DEFAULT_THEME_LAYOUT.to_string()),
        }
    }

    /// Check that every component name can be used as a catalogue path segment.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        for (component, name) in [("layout", &self.layout), ("color", &self.color)] {
            if let Some(name) = name {
                if !THEME_COMPONENT_RE.is_match(name) {
                    return Err(ConfigurationError::InvalidThemeComponent {
                        component,
                        name: name.clone(),
                    });
                }
            }
        }
        Ok(())
    }
}

/// Numbering format strings per location-trackable kind, e.g. `1.1` or `I.a`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct NumberingConfig {
    pub headings: Option<String>,
    pub figures: Option<String>,
    pub tables: Option<String>,
}

impl NumberingConfig {
    /// Formats applied when a document does not configure numbering.
    pub fn default_for(doc_type: DocumentType) -> Self {
        match doc_type {
            DocumentType::Paged => Self {
                headings: Some("1.1.1".to_string()),
                figures: Some("1.1".to_string()),
                tables: Some("1.1".to_string()),
            },
            DocumentType::Plain | DocumentType::Slides => Self {
                headings: None,
                figures: Some("1".to_string()),
                tables: Some("1".to_string()),
            },
        }
    }
}

/// Document metadata and layout.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct DocumentInfo {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub doc_type: DocumentType,
    /// Language tag such as `en` or `it-IT`.
    pub locale: Option<String>,
    pub numbering: Option<NumberingConfig>,
    pub layout: DocumentLayout,
    pub theme: DocumentTheme,
    pub tex_macros: IndexMap<String, String>,
}

impl DocumentInfo {
    /// Numbering formats in effect: configured ones, or the type default.
    pub fn numbering_or_default(&self) -> NumberingConfig {
        self.numbering
            .clone()
            .unwrap_or_else(|| NumberingConfig::default_for(self.doc_type))
    }

    /// File-system friendly name for the output bundle.
    pub fn output_name(&self) -> String {
        self.name
            .as_deref()
            .map_or_else(|| "document".to_string(), folio_ast::normalize_identifier)
    }
}

/// Pipeline options that are not part of the document itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct RenderOptions {
    /// Attach location labels to headings, figures and tables.
    pub location_awareness: bool,
    /// Give every heading an identifier, not just those with a custom id.
    pub automatic_identifiers: bool,
    /// Port of the preview server the document should connect to.
    pub server_port: Option<u16>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            location_awareness: true,
            automatic_identifiers: true,
            server_port: None,
        }
    }
}

impl RenderOptions {
    pub fn use_server(&self) -> bool {
        self.server_port.is_some()
    }
}

/// Everything a render job is configured with.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct DocumentConfig {
    #[serde(flatten)]
    pub document: DocumentInfo,
    pub options: RenderOptions,
}

impl DocumentConfig {
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigurationError> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigurationError> {
        let yaml =
            std::fs::read_to_string(path).map_err(|source| ConfigurationError::Unreadable {
                path: path.to_path_buf(),
                source,
            })?;
        Self::from_yaml(&yaml)
    }
}
