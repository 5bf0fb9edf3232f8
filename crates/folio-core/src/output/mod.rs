/*
 * output/mod.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Output resource tree.
 */

//! Output resources produced by a render job.
//!
//! The result of a render is a tree of [`OutputResource`]s:
//! - [`TextArtifact`] - content generated during the render (e.g. the page)
//! - [`LazyArtifact`] - content loaded on demand (e.g. a stylesheet from the
//!   resource catalogue); its producer runs exactly once, when written
//! - [`ResourceGroup`] - a named, ordered collection, written as a directory
//!
//! Names are unique within a group. This is checked when the group is built.

mod writer;

pub use writer::write_bundle;

use std::fmt;

use crate::error::{PackagingError, Result};

/// Kind of a file artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactType {
    Html,
    Css,
    Javascript,
}

impl ArtifactType {
    /// File extension, without the dot.
    pub fn extension(&self) -> &'static str {
        match self {
            ArtifactType::Html => "html",
            ArtifactType::Css => "css",
            ArtifactType::Javascript => "js",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            ArtifactType::Html => "text/html",
            ArtifactType::Css => "text/css",
            ArtifactType::Javascript => "text/javascript",
        }
    }
}

/// An artifact whose content is already known.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextArtifact {
    pub name: String,
    pub content: String,
    pub artifact_type: ArtifactType,
}

impl TextArtifact {
    pub fn new(name: impl Into<String>, content: impl Into<String>, artifact_type: ArtifactType) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
            artifact_type,
        }
    }
}

type Producer = Box<dyn FnOnce() -> Result<String> + Send>;

/// An artifact whose content is produced when it is written.
pub struct LazyArtifact {
    pub name: String,
    pub artifact_type: ArtifactType,
    producer: Producer,
}

impl LazyArtifact {
    pub fn new(
        name: impl Into<String>,
        artifact_type: ArtifactType,
        producer: impl FnOnce() -> Result<String> + Send + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            artifact_type,
            producer: Box::new(producer),
        }
    }

    /// Run the producer. Consumes the artifact, so this happens at most once.
    pub fn produce(self) -> Result<String> {
        (self.producer)()
    }
}

impl fmt::Debug for LazyArtifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LazyArtifact")
            .field("name", &self.name)
            .field("artifact_type", &self.artifact_type)
            .finish_non_exhaustive()
    }
}

/// A named collection of resources.
#[derive(Debug)]
pub struct ResourceGroup {
    name: String,
    resources: Vec<OutputResource>,
}

impl ResourceGroup {
    /// Build a group, rejecting duplicate resource names.
    pub fn new(name: impl Into<String>, resources: Vec<OutputResource>) -> Result<Self> {
        let name = name.into();
        for (i, resource) in resources.iter().enumerate() {
            if resources[..i].iter().any(|r| r.name() == resource.name()) {
                return Err(PackagingError::DuplicateName {
                    group: name,
                    name: resource.name().to_string(),
                }
                .into());
            }
        }
        Ok(Self { name, resources })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn resources(&self) -> &[OutputResource] {
        &self.resources
    }

    pub fn into_resources(self) -> Vec<OutputResource> {
        self.resources
    }

    /// Names of the direct children, in order.
    pub fn names(&self) -> Vec<&str> {
        self.resources.iter().map(OutputResource::name).collect()
    }

    pub fn get(&self, name: &str) -> Option<&OutputResource> {
        self.resources.iter().find(|r| r.name() == name)
    }

    /// Nested group `name`, if any.
    pub fn group(&self, name: &str) -> Option<&ResourceGroup> {
        self.get(name).and_then(OutputResource::as_group)
    }
}

/// A node of the output resource tree.
#[derive(Debug)]
pub enum OutputResource {
    Text(TextArtifact),
    Lazy(LazyArtifact),
    Group(ResourceGroup),
}

impl OutputResource {
    pub fn name(&self) -> &str {
        match self {
            OutputResource::Text(artifact) => &artifact.name,
            OutputResource::Lazy(artifact) => &artifact.name,
            OutputResource::Group(group) => &group.name,
        }
    }

    /// Name on disk: `name.ext` for artifacts, `name` for groups.
    pub fn file_name(&self) -> String {
        match self {
            OutputResource::Text(artifact) => {
                format!("{}.{}", artifact.name, artifact.artifact_type.extension())
            }
            OutputResource::Lazy(artifact) => {
                format!("{}.{}", artifact.name, artifact.artifact_type.extension())
            }
            OutputResource::Group(group) => group.name.clone(),
        }
    }

    pub fn artifact_type(&self) -> Option<ArtifactType> {
        match self {
            OutputResource::Text(artifact) => Some(artifact.artifact_type),
            OutputResource::Lazy(artifact) => Some(artifact.artifact_type),
            OutputResource::Group(_) => None,
        }
    }

    pub fn as_group(&self) -> Option<&ResourceGroup> {
        match self {
            OutputResource::Group(group) => Some(group),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&TextArtifact> {
        match self {
            OutputResource::Text(artifact) => Some(artifact),
            _ => None,
        }
    }
}

impl From<TextArtifact> for OutputResource {
    fn from(artifact: TextArtifact) -> Self {
        OutputResource::Text(artifact)
    }
}

impl From<LazyArtifact> for OutputResource {
    fn from(artifact: LazyArtifact) -> Self {
        OutputResource::Lazy(artifact)
    }
}

impl From<ResourceGroup> for OutputResource {
    fn from(group: ResourceGroup) -> Self {
        OutputResource::Group(group)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RenderError;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn css(name: &str) -> OutputResource {
        TextArtifact::new(name, "", ArtifactType::Css).into()
    }

    #[test]
    fn test_duplicate_names_are_rejected() {
        let err = ResourceGroup::new("theme", vec![css("global"), css("global")]).unwrap_err();
        assert!(matches!(
            err,
            RenderError::Packaging(PackagingError::DuplicateName { ref group, ref name })
                if group == "theme" && name == "global"
        ));
    }

    #[test]
    fn test_lazy_producer_runs_once_on_produce() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let artifact = LazyArtifact::new("code", ArtifactType::Javascript, move || {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok("hljs();".to_string())
        });
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert_eq!(artifact.produce().unwrap(), "hljs();");
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_file_names() {
        assert_eq!(css("theme").file_name(), "theme.css");
        let group = ResourceGroup::new("script", Vec::new()).unwrap();
        assert_eq!(OutputResource::from(group).file_name(), "script");
        assert_eq!(ArtifactType::Javascript.mime_type(), "text/javascript");
    }
}
