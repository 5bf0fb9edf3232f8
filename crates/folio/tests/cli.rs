/*
 * cli.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Tests for the folio binary.
 */

use std::fs;
use std::process::Command;

use tempfile::TempDir;

const TREE: &str = r#"{
    "blocks": [
        { "Heading": { "depth": 1, "content": [ { "Text": { "text": "Intro" } } ] } },
        { "MermaidDiagram": { "code": "graph TD; A-->B" } },
        { "Paragraph": { "content": [ { "Text": { "text": "hello" } } ] } }
    ]
}"#;

fn folio() -> Command {
    Command::new(env!("CARGO_BIN_EXE_folio"))
}

fn write_tree(dir: &TempDir) -> std::path::PathBuf {
    let path = dir.path().join("tree.json");
    fs::write(&path, TREE).unwrap();
    path
}

#[test]
fn render_writes_bundle() {
    let dir = TempDir::new().unwrap();
    let tree = write_tree(&dir);
    let config = dir.path().join("config.yaml");
    fs::write(&config, "name: Field Notes\ntype: paged\n").unwrap();
    let out = dir.path().join("out");

    let status = folio()
        .arg("render")
        .arg(&tree)
        .arg("-c")
        .arg(&config)
        .arg("-o")
        .arg(&out)
        .arg("--no-location-awareness")
        .status()
        .unwrap();
    assert!(status.success());

    let bundle = out.join("field-notes");
    let page = fs::read_to_string(bundle.join("index.html")).unwrap();
    assert!(page.contains("<h1 id=\"intro\">Intro</h1>"));
    assert!(bundle.join("script/mermaid.js").is_file());
    assert!(bundle.join("script/paged.js").is_file());
}

#[test]
fn render_fails_on_invalid_tree() {
    let dir = TempDir::new().unwrap();
    let tree = dir.path().join("tree.json");
    fs::write(&tree, "{ \"blocks\": [ { \"Sparkline\": {} } ] }").unwrap();

    let output = folio()
        .arg("render")
        .arg(&tree)
        .arg("-o")
        .arg(dir.path())
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Invalid document tree"));
}

#[test]
fn inspect_prints_attributes() {
    let dir = TempDir::new().unwrap();
    let tree = write_tree(&dir);

    let output = folio().arg("inspect").arg(&tree).output().unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["scripts"], serde_json::json!(["script", "mermaid"]));
    assert_eq!(
        report["theme"],
        serde_json::json!(["global", "layout/latex", "color/paperwhite"])
    );
    assert_eq!(report["attributes"]["presence"], serde_json::json!(["mermaid-diagram"]));
    assert!(report["attributes"]["identifiers"]["intro"].is_object());
}
