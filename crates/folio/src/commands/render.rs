/*
 * render.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Render command implementation
 */

//! Render command implementation.
//!
//! Reads a document tree and its configuration, runs a render job and
//! writes the resulting bundle. Content warnings are printed as a summary;
//! they never fail the command.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{debug, info};

use folio_core::{EmbeddedCatalogue, LayeredCatalogue, ResourceCatalogue, render_document};

use super::{read_config, read_document};

/// Arguments for the render command
#[derive(Debug)]
pub struct RenderArgs {
    pub input: PathBuf,
    pub config: Option<PathBuf>,
    pub output_dir: PathBuf,
    pub port: Option<u16>,
    /// Directory of resources overriding the embedded ones
    pub resources: Option<PathBuf>,
    pub location_awareness: bool,
    pub automatic_identifiers: bool,
}

/// Execute the render command
pub fn execute(args: RenderArgs) -> Result<()> {
    let document = read_document(&args.input)?;
    let mut config = read_config(args.config.as_deref())?;
    config.options.server_port = args.port.or(config.options.server_port);
    config.options.location_awareness &= args.location_awareness;
    config.options.automatic_identifiers &= args.automatic_identifiers;
    debug!(?config, "Loaded configuration");

    let catalogue: Arc<dyn ResourceCatalogue> = match &args.resources {
        Some(dir) => Arc::new(LayeredCatalogue::with_overrides(dir)),
        None => Arc::new(EmbeddedCatalogue),
    };

    let output = render_document(&document, config, catalogue)
        .with_context(|| format!("Failed to render {}", args.input.display()))?;

    if !output.warnings.is_empty() {
        eprintln!("{} warning(s):", output.warnings.len());
        for warning in &output.warnings {
            eprintln!("  {}", warning);
        }
    }

    let path = output
        .write_to(&args.output_dir)
        .with_context(|| format!("Failed to write output to {}", args.output_dir.display()))?;
    info!(path = %path.display(), "Rendered");
    println!("{}", path.display());

    Ok(())
}
