/*
 * catalogue.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Sources of templates, themes and scripts.
 */

//! Resource catalogues.
//!
//! A [`ResourceCatalogue`] maps slash-separated paths such as
//! `theme/color/paperwhite.css` to text content. The built-in catalogue is
//! compiled into the binary; a directory catalogue layered on top of it lets
//! users override or add entries.
//!
//! Catalogue layout:
//!
//! ```text
//! html-wrapper.html.template
//! theme/global.css
//! theme/layout/<name>.css
//! theme/color/<name>.css
//! script/<name>.js
//! ```

use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

use include_dir::{Dir, include_dir};
use indexmap::IndexMap;

use crate::error::{PackagingError, Result};

/// Resources compiled into the binary.
static EMBEDDED_RESOURCES: Dir = include_dir!("$CARGO_MANIFEST_DIR/resources");

/// Read-only store of text resources addressed by relative path.
pub trait ResourceCatalogue: Send + Sync {
    fn contains(&self, path: &str) -> bool;

    /// Load the content at `path`. A missing entry is
    /// [`PackagingError::MissingResource`].
    fn load(&self, path: &str) -> Result<String>;
}

fn missing(path: &str) -> crate::error::RenderError {
    PackagingError::MissingResource {
        path: path.to_string(),
    }
    .into()
}

/// The resources shipped with folio.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedCatalogue;

impl ResourceCatalogue for EmbeddedCatalogue {
    fn contains(&self, path: &str) -> bool {
        EMBEDDED_RESOURCES.get_file(path).is_some()
    }

    fn load(&self, path: &str) -> Result<String> {
        EMBEDDED_RESOURCES
            .get_file(path)
            .and_then(|f| f.contents_utf8())
            .map(str::to_string)
            .ok_or_else(|| missing(path))
    }
}

/// Resources read from a directory on disk.
#[derive(Debug, Clone)]
pub struct DirectoryCatalogue {
    root: PathBuf,
}

impl DirectoryCatalogue {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of an entry, or `None` if it would escape the root.
    fn resolve(&self, path: &str) -> Option<PathBuf> {
        let relative = Path::new(path);
        relative
            .components()
            .all(|c| matches!(c, Component::Normal(_)))
            .then(|| self.root.join(relative))
    }
}

impl ResourceCatalogue for DirectoryCatalogue {
    fn contains(&self, path: &str) -> bool {
        self.resolve(path).is_some_and(|p| p.is_file())
    }

    fn load(&self, path: &str) -> Result<String> {
        let file = self.resolve(path).ok_or_else(|| missing(path))?;
        match std::fs::read_to_string(&file) {
            Ok(content) => Ok(content),
            Err(err) if err.kind() == ErrorKind::NotFound => Err(missing(path)),
            Err(err) => Err(err.into()),
        }
    }
}

/// In-memory resources.
#[derive(Debug, Clone, Default)]
pub struct MemoryCatalogue {
    entries: IndexMap<String, String>,
}

impl MemoryCatalogue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, path: impl Into<String>, content: impl Into<String>) -> &mut Self {
        self.entries.insert(path.into(), content.into());
        self
    }

    pub fn remove(&mut self, path: &str) -> Option<String> {
        self.entries.shift_remove(path)
    }

    /// A copy of the embedded catalogue, for tests that tweak single entries.
    pub fn from_embedded() -> Self {
        let mut catalogue = Self::new();
        collect_embedded(&EMBEDDED_RESOURCES, &mut catalogue);
        catalogue
    }
}

fn collect_embedded(dir: &Dir<'_>, catalogue: &mut MemoryCatalogue) {
    for file in dir.files() {
        if let (Some(path), Some(content)) = (file.path().to_str(), file.contents_utf8()) {
            catalogue.insert(path.replace('\\', "/"), content);
        }
    }
    for sub in dir.dirs() {
        collect_embedded(sub, catalogue);
    }
}

impl ResourceCatalogue for MemoryCatalogue {
    fn contains(&self, path: &str) -> bool {
        self.entries.contains_key(path)
    }

    fn load(&self, path: &str) -> Result<String> {
        self.entries.get(path).cloned().ok_or_else(|| missing(path))
    }
}

/// Catalogues searched in order; the first one containing a path wins.
#[derive(Clone, Default)]
pub struct LayeredCatalogue {
    layers: Vec<Arc<dyn ResourceCatalogue>>,
}

impl LayeredCatalogue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(mut self, layer: Arc<dyn ResourceCatalogue>) -> Self {
        self.layers.push(layer);
        self
    }

    /// `dir` entries first, then the embedded resources.
    pub fn with_overrides(dir: impl Into<PathBuf>) -> Self {
        Self::new()
            .push(Arc::new(DirectoryCatalogue::new(dir)))
            .push(Arc::new(EmbeddedCatalogue))
    }
}

impl ResourceCatalogue for LayeredCatalogue {
    fn contains(&self, path: &str) -> bool {
        self.layers.iter().any(|layer| layer.contains(path))
    }

    fn load(&self, path: &str) -> Result<String> {
        match self.layers.iter().find(|layer| layer.contains(path)) {
            Some(layer) => layer.load(path),
            None => Err(missing(path)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RenderError;
    use tempfile::TempDir;

    #[test]
    fn test_embedded_catalogue_has_builtin_entries() {
        let catalogue = EmbeddedCatalogue;
        for path in [
            "html-wrapper.html.template",
            "theme/global.css",
            "theme/layout/latex.css",
            "theme/color/paperwhite.css",
            "script/script.js",
            "script/mermaid.js",
        ] {
            assert!(catalogue.contains(path), "missing {}", path);
        }
        assert!(catalogue.load("html-wrapper.html.template").unwrap().contains("[[CONTENT]]"));
    }

    #[test]
    fn test_missing_entry_names_path() {
        let err = EmbeddedCatalogue.load("theme/color/nope.css").unwrap_err();
        assert!(matches!(
            err,
            RenderError::Packaging(PackagingError::MissingResource { ref path })
                if path == "theme/color/nope.css"
        ));
    }

    #[test]
    fn test_directory_catalogue_rejects_escaping_paths() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("a.css"), "a").unwrap();
        let catalogue = DirectoryCatalogue::new(temp.path().join("sub"));
        assert!(!catalogue.contains("../a.css"));

        let catalogue = DirectoryCatalogue::new(temp.path());
        assert_eq!(catalogue.load("a.css").unwrap(), "a");
        assert!(catalogue.load("b.css").is_err());
    }

    #[test]
    fn test_layered_catalogue_prefers_first_layer() {
        let temp = TempDir::new().unwrap();
        std::fs::create_dir_all(temp.path().join("theme/color")).unwrap();
        std::fs::write(temp.path().join("theme/color/paperwhite.css"), "/* mine */").unwrap();

        let catalogue = LayeredCatalogue::with_overrides(temp.path());
        assert_eq!(
            catalogue.load("theme/color/paperwhite.css").unwrap(),
            "/* mine */"
        );
        assert!(catalogue.load("theme/global.css").unwrap().contains(":root"));
    }

    #[test]
    fn test_memory_catalogue_from_embedded() {
        let mut catalogue = MemoryCatalogue::from_embedded();
        assert!(catalogue.contains("script/code.js"));
        catalogue.remove("script/code.js");
        assert!(!catalogue.contains("script/code.js"));
    }
}
