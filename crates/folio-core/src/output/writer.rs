/*
 * output/writer.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Writing a resource tree to disk.
 */

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;

use super::OutputResource;

/// Write `resource` into `output_dir` and return the path of the result.
///
/// Everything is first written to a temporary directory next to the final
/// location and moved into place only once every artifact, lazy ones
/// included, has been written. On error the temporary directory is removed
/// and the previous bundle, if any, is left in place.
pub fn write_bundle(resource: OutputResource, output_dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(output_dir)?;
    let staging = tempfile::Builder::new()
        .prefix(".folio-")
        .tempdir_in(output_dir)?;

    let file_name = resource.file_name();
    write_resource(resource, staging.path())?;

    let target = output_dir.join(&file_name);
    replace(&staging.path().join(&file_name), &target, staging.path())?;
    tracing::info!(path = %target.display(), "Wrote output bundle");

    Ok(target)
}

/// Move `staged` to `target`.
///
/// An existing `target` is first moved into `backup_dir` and moved back if
/// the final rename fails. `backup_dir` must be on the same file system.
fn replace(staged: &Path, target: &Path, backup_dir: &Path) -> Result<()> {
    let previous = if target.exists() {
        let previous = backup_dir.join(".previous");
        fs::rename(target, &previous)?;
        Some(previous)
    } else {
        None
    };

    if let Err(err) = fs::rename(staged, target) {
        if let Some(previous) = previous {
            fs::rename(previous, target)?;
        }
        return Err(err.into());
    }
    Ok(())
}

fn write_resource(resource: OutputResource, dir: &Path) -> Result<()> {
    let path = dir.join(resource.file_name());
    match resource {
        OutputResource::Text(artifact) => {
            create_parent(&path)?;
            fs::write(&path, artifact.content)?;
        }
        OutputResource::Lazy(artifact) => {
            let content = artifact.produce()?;
            create_parent(&path)?;
            fs::write(&path, content)?;
        }
        OutputResource::Group(group) => {
            fs::create_dir(&path)?;
            for child in group.into_resources() {
                write_resource(child, &path)?;
            }
        }
    }
    tracing::debug!(path = %path.display(), "Wrote resource");
    Ok(())
}

/// Artifact names may contain `/`, e.g. `layout/latex`.
fn create_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}
