use mdhtml_engine::{Error, ParseError, extract_title, markdown_to_html};

#[test]
fn fixture_paragraphs() {
    assert_fixture("paragraphs");
}

#[test]
fn fixture_code_block() {
    assert_fixture("code_block");
}

#[test]
fn fixture_sample_page() {
    assert_fixture("sample_page");
}

#[test]
fn fixture_fallbacks() {
    assert_fixture("fallbacks");
}

fn read_fixture(file: &str) -> String {
    std::fs::read_to_string(format!(
        "{}/tests/fixtures/{file}",
        env!("CARGO_MANIFEST_DIR")
    ))
    .unwrap()
}

fn assert_fixture(name: &str) {
    let md = read_fixture(&format!("{name}.md"));
    let expected = read_fixture(&format!("{name}.html"));

    let html = markdown_to_html(&md).unwrap();
    pretty_assertions::assert_eq!(html, expected.trim_end());
}

#[test]
fn sample_page_title() {
    let md = read_fixture("sample_page.md");
    assert_eq!(extract_title(&md).unwrap(), "Sample Page");
}

/// An odd delimiter anywhere aborts the whole document with no partial output.
#[test]
fn unmatched_delimiter_aborts_document() {
    let md = format!("{}\n\nbroken **bold", read_fixture("paragraphs.md"));
    let err = markdown_to_html(&md).unwrap_err();
    assert_eq!(
        err,
        Error::Parse(ParseError::UnmatchedDelimiter {
            delimiter: "**",
            text: "broken **bold".to_string(),
        })
    );
}
