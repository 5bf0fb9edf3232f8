/*
 * processor_tests.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Integration tests for template processing.
 */

use folio_template::{PlaceholderKind, TemplateError, TemplateProcessor, TemplateRow};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

const PAGE: &str = r#"<html lang="[[LANG]]">
<head><title>[[TITLE]]</title>
[[if:HAS_MATH]]<script>
const macros = {
[[for:TEX_MACROS]]    [[TEX_MACROS]],
[[endfor:TEX_MACROS]]};
</script>
[[endif:HAS_MATH]]</head>
<body>[[CONTENT]]</body>
</html>"#;

fn page(has_math: bool, macros: &[&str]) -> TemplateProcessor {
    let mut processor = TemplateProcessor::new(PAGE);
    processor
        .value("TITLE", "Notes")
        .optional_value::<&str>("LANG", None)
        .value("CONTENT", "<p>[[TITLE]]</p>")
        .conditional("HAS_MATH", has_math)
        .iterable("TEX_MACROS", macros.iter().copied());
    processor
}

#[test]
fn full_page_with_math() {
    let output = page(true, &["\"\\\\R\": \"\\\\mathbb{R}\"", "\"\\\\N\": \"\\\\mathbb{N}\""])
        .process()
        .unwrap();
    assert_eq!(
        output,
        r#"<html lang="">
<head><title>Notes</title>
<script>
const macros = {
    "\\R": "\\mathbb{R}",
    "\\N": "\\mathbb{N}",
};
</script>
</head>
<body><p>[[TITLE]]</p></body>
</html>"#
    );
}

#[test]
fn full_page_without_math_drops_block() {
    let output = page(false, &[]).process().unwrap();
    assert_eq!(
        output,
        "<html lang=\"\">\n<head><title>Notes</title>\n</head>\n<body><p>[[TITLE]]</p></body>\n</html>"
    );
}

#[test]
fn processing_is_repeatable() {
    let processor = page(true, &["\"a\": \"b\""]);
    assert_eq!(processor.process().unwrap(), processor.process().unwrap());
}

#[test]
fn placeholders_in_document_order() {
    let placeholders = TemplateProcessor::new(PAGE).placeholders();
    let keys: Vec<(&str, PlaceholderKind)> = placeholders
        .iter()
        .map(|p| (p.key.as_str(), p.kind))
        .collect();
    assert_eq!(
        keys,
        vec![
            ("LANG", PlaceholderKind::Value),
            ("TITLE", PlaceholderKind::Value),
            ("HAS_MATH", PlaceholderKind::Conditional),
            ("TEX_MACROS", PlaceholderKind::Iterable),
            ("CONTENT", PlaceholderKind::Value),
        ]
    );
}

#[test]
fn field_rows() {
    let mut processor =
        TemplateProcessor::new("[[for:LINKS]]<a href=\"[[URL]]\">[[LABEL]]</a>[[endfor:LINKS]]");
    processor.iterable(
        "LINKS",
        vec![
            [("URL", "/a"), ("LABEL", "A")].into_iter().collect::<TemplateRow>(),
            [("URL", "/b"), ("LABEL", "B")].into_iter().collect::<TemplateRow>(),
        ],
    );
    assert_eq!(
        processor.process().unwrap(),
        "<a href=\"/a\">A</a><a href=\"/b\">B</a>"
    );
}

#[test]
fn errors_name_their_key() {
    let mut processor = TemplateProcessor::new("[[if:DRAFT]]x");
    processor.conditional("DRAFT", true);
    let err = processor.process().unwrap_err();
    assert!(matches!(err, TemplateError::UnterminatedBlock { marker: "if", .. }));
    assert_eq!(err.key(), Some("DRAFT"));

    let err = TemplateProcessor::new("[[for:ROWS]][[endfor:ROWS]]")
        .process()
        .unwrap_err();
    assert!(matches!(err, TemplateError::UnresolvedBlock { marker: "for", .. }));
    assert_eq!(err.key(), Some("ROWS"));
}

#[test]
fn from_file_reads_template() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("page.html.template");
    std::fs::write(&path, "<h1>[[TITLE]]</h1>").unwrap();

    let mut processor = TemplateProcessor::from_file(&path).unwrap();
    processor.value("TITLE", "Loaded");
    assert_eq!(processor.process().unwrap(), "<h1>Loaded</h1>");

    let missing = TemplateProcessor::from_file(&dir.path().join("nope.template"));
    assert!(matches!(missing, Err(TemplateError::Io(_))));
}

proptest! {
    #[test]
    fn conditional_false_removes_block(
        before in "[a-z <>]{0,12}",
        inside in "[a-z <>]{0,12}",
        after in "[a-z <>]{0,12}",
    ) {
        let text = format!("{}[[if:K]]{}[[endif:K]]{}", before, inside, after);
        let mut processor = TemplateProcessor::new(text);
        processor.conditional("K", false);
        prop_assert_eq!(processor.process().unwrap(), format!("{}{}", before, after));
    }

    #[test]
    fn conditional_true_removes_only_markers(
        before in "[a-z <>]{0,12}",
        inside in "[a-z <>]{0,12}",
        after in "[a-z <>]{0,12}",
    ) {
        let text = format!("{}[[if:K]]{}[[endif:K]]{}", before, inside, after);
        let mut processor = TemplateProcessor::new(text);
        processor.conditional("K", true);
        prop_assert_eq!(processor.process().unwrap(), format!("{}{}{}", before, inside, after));
    }

    #[test]
    fn values_are_inserted_verbatim(value in "\\PC{0,24}") {
        let mut processor = TemplateProcessor::new("<[[V]]>");
        processor.value("V", &value);
        prop_assert_eq!(processor.process().unwrap(), format!("<{}>", value));
    }
}
