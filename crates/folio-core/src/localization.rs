/*
 * localization.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Localized labels for element kinds and quote types.

/// Looks up localized strings by key.
pub trait Localizer {
    /// Localized text for `key` in `locale` (a language tag such as `it-IT`).
    fn localize(&self, key: &str, locale: &str) -> Option<String>;
}

/// Built-in labels for a handful of languages.
///
/// Lookups try the full tag first, then its language subtag.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinLocalizer;

impl BuiltinLocalizer {
    fn lookup(language: &str, key: &str) -> Option<&'static str> {
        let label = match (language, key) {
            ("en", "figure") => "Figure",
            ("en", "table") => "Table",
            ("en", "tableofcontents") => "Table of Contents",
            ("en", "tip") => "Tip",
            ("en", "note") => "Note",
            ("en", "warning") => "Warning",
            ("en", "important") => "Important",

            ("it", "figure") => "Figura",
            ("it", "table") => "Tabella",
            ("it", "tableofcontents") => "Indice",
            ("it", "tip") => "Suggerimento",
            ("it", "note") => "Nota",
            ("it", "warning") => "Attenzione",
            ("it", "important") => "Importante",

            ("de", "figure") => "Abbildung",
            ("de", "table") => "Tabelle",
            ("de", "tableofcontents") => "Inhaltsverzeichnis",
            ("de", "tip") => "Tipp",
            ("de", "note") => "Hinweis",
            ("de", "warning") => "Warnung",
            ("de", "important") => "Wichtig",

            ("fr", "figure") => "Figure",
            ("fr", "table") => "Tableau",
            ("fr", "tableofcontents") => "Table des matières",
            ("fr", "tip") => "Astuce",
            ("fr", "note") => "Remarque",
            ("fr", "warning") => "Avertissement",
            ("fr", "important") => "Important",

            ("es", "figure") => "Figura",
            ("es", "table") => "Tabla",
            ("es", "tableofcontents") => "Índice",
            ("es", "tip") => "Consejo",
            ("es", "note") => "Nota",
            ("es", "warning") => "Advertencia",
            ("es", "important") => "Importante",

            _ => return None,
        };
        Some(label)
    }
}

impl Localizer for BuiltinLocalizer {
    fn localize(&self, key: &str, locale: &str) -> Option<String> {
        let tag = locale.trim().to_lowercase().replace('_', "-");
        Self::lookup(&tag, key)
            .or_else(|| {
                let language = tag.split('-').next()?;
                Self::lookup(language, key)
            })
            .map(str::to_string)
    }
}
