/*
 * inspect.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Inspect command: run discovery only and print the attribute store.

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use serde_json::json;

use folio_core::{EmbeddedCatalogue, HtmlPostRenderer, RenderJob};

use super::{read_config, read_document};

pub fn execute(input: &Path, config: Option<&Path>) -> Result<()> {
    let document = read_document(input)?;
    let config = read_config(config)?;

    let job = RenderJob::new(&document, config)?.discover();
    let post = HtmlPostRenderer::new(job.context(), Arc::new(EmbeddedCatalogue));
    let scripts: Vec<String> = post
        .script_components()
        .into_iter()
        .map(|component| component.name)
        .collect();
    let theme: Vec<String> = post
        .theme_components()?
        .into_iter()
        .map(|component| component.name)
        .collect();

    let report = json!({
        "attributes": job.attributes(),
        "scripts": scripts,
        "theme": theme,
    });
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
