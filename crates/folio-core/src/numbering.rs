/*
 * numbering.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Location labels for headings, figures and tables.
 */

//! Numbering service.
//!
//! A [`NumberingService`] turns the [`Location`] recorded for a node during
//! discovery into a label such as `1.2` or `II.b`. [`DocumentNumbering`] is
//! the default implementation, driven by format strings.
//!
//! Format strings mix counter symbols with literal separators:
//!
//! | Symbol | Counter        |
//! |--------|----------------|
//! | `1`    | decimal        |
//! | `a`    | lowercase alpha|
//! | `A`    | uppercase alpha|
//! | `i`    | lowercase roman|
//! | `I`    | uppercase roman|
//!
//! A heading is labeled with its section counters, one per counter symbol.
//! A figure or table in a format with N symbols is labeled with the first
//! N-1 section counters followed by its ordinal within that section.

use folio_ast::{Location, LocationKind};

use crate::config::NumberingConfig;
use crate::error::ConfigurationError;

/// Produces labels for location-trackable nodes.
pub trait NumberingService {
    /// Label for a node of `kind` at `location`, or `None` if it is not numbered.
    fn label(&self, kind: LocationKind, location: &Location) -> Option<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CounterStyle {
    Decimal,
    LowerAlpha,
    UpperAlpha,
    LowerRoman,
    UpperRoman,
}

impl CounterStyle {
    fn from_symbol(c: char) -> Option<Self> {
        match c {
            '1' => Some(CounterStyle::Decimal),
            'a' => Some(CounterStyle::LowerAlpha),
            'A' => Some(CounterStyle::UpperAlpha),
            'i' => Some(CounterStyle::LowerRoman),
            'I' => Some(CounterStyle::UpperRoman),
            _ => None,
        }
    }

    fn format(&self, value: usize) -> String {
        if value == 0 {
            return "0".to_string();
        }
        match self {
            CounterStyle::Decimal => value.to_string(),
            CounterStyle::LowerAlpha => to_alpha(value),
            CounterStyle::UpperAlpha => to_alpha(value).to_uppercase(),
            CounterStyle::LowerRoman => to_roman(value).to_lowercase(),
            CounterStyle::UpperRoman => to_roman(value),
        }
    }
}

fn to_alpha(mut value: usize) -> String {
    let mut out = Vec::new();
    while value > 0 {
        value -= 1;
        out.push(b'a' + (value % 26) as u8);
        value /= 26;
    }
    out.reverse();
    String::from_utf8_lossy(&out).into_owned()
}

fn to_roman(mut value: usize) -> String {
    const NUMERALS: [(usize, &str); 13] = [
        (1000, "M"),
        (900, "CM"),
        (500, "D"),
        (400, "CD"),
        (100, "C"),
        (90, "XC"),
        (50, "L"),
        (40, "XL"),
        (10, "X"),
        (9, "IX"),
        (5, "V"),
        (4, "IV"),
        (1, "I"),
    ];
    let mut out = String::new();
    for (amount, numeral) in NUMERALS {
        while value >= amount {
            out.push_str(numeral);
            value -= amount;
        }
    }
    out
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Symbol {
    Counter(CounterStyle),
    Literal(char),
}

/// A parsed numbering format such as `1.1` or `A-i`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberingFormat {
    symbols: Vec<Symbol>,
}

impl NumberingFormat {
    pub fn parse(format: &str) -> Result<Self, ConfigurationError> {
        let symbols: Vec<Symbol> = format
            .chars()
            .map(|c| match CounterStyle::from_symbol(c) {
                Some(style) => Symbol::Counter(style),
                None => Symbol::Literal(c),
            })
            .collect();
        if !symbols.iter().any(|s| matches!(s, Symbol::Counter(_))) {
            return Err(ConfigurationError::InvalidNumberingFormat(format.to_string()));
        }
        Ok(Self { symbols })
    }

    /// Number of counter symbols.
    pub fn depth(&self) -> usize {
        self.symbols
            .iter()
            .filter(|s| matches!(s, Symbol::Counter(_)))
            .count()
    }

    /// Format `counters` in order. When there are fewer counters than
    /// symbols, the label stops after the last counter, dropping trailing
    /// separators.
    pub fn format(&self, counters: &[usize]) -> String {
        let mut out = String::new();
        let mut pending = String::new();
        let mut values = counters.iter();
        for symbol in &self.symbols {
            match symbol {
                Symbol::Literal(c) => pending.push(*c),
                Symbol::Counter(style) => match values.next() {
                    Some(value) => {
                        out.push_str(&pending);
                        pending.clear();
                        out.push_str(&style.format(*value));
                    }
                    None => break,
                },
            }
        }
        out
    }
}

/// Format-string driven numbering, one optional format per kind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentNumbering {
    pub headings: Option<NumberingFormat>,
    pub figures: Option<NumberingFormat>,
    pub tables: Option<NumberingFormat>,
}

impl DocumentNumbering {
    pub fn from_config(config: &NumberingConfig) -> Result<Self, ConfigurationError> {
        let parse = |format: &Option<String>| format.as_deref().map(NumberingFormat::parse).transpose();
        Ok(Self {
            headings: parse(&config.headings)?,
            figures: parse(&config.figures)?,
            tables: parse(&config.tables)?,
        })
    }

    fn format_for(&self, kind: LocationKind) -> Option<&NumberingFormat> {
        match kind {
            LocationKind::Heading => self.headings.as_ref(),
            LocationKind::Figure => self.figures.as_ref(),
            LocationKind::Table => self.tables.as_ref(),
        }
    }
}

impl NumberingService for DocumentNumbering {
    fn label(&self, kind: LocationKind, location: &Location) -> Option<String> {
        let format = self.format_for(kind)?;
        let depth = format.depth();

        let counters: Vec<usize> = match kind {
            LocationKind::Heading => {
                if location.sections.is_empty()
                    || location.sections.len() > depth
                    || location.sections.contains(&0)
                {
                    return None;
                }
                location.sections.clone()
            }
            LocationKind::Figure | LocationKind::Table => {
                let section_depth = depth - 1;
                let mut counters: Vec<usize> =
                    (0..section_depth).map(|d| location.section(d)).collect();
                counters.push(location.ordinal(section_depth));
                counters
            }
        };

        Some(format.format(&counters))
    }
}
