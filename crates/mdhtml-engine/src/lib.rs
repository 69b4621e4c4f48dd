//! # mdhtml engine
//!
//! Converts a restricted Markdown dialect into an element tree and renders it
//! to HTML.
//!
//! ## Modules
//!
//! - **`parsing`**: block segmentation, classification and inline tokenizing
//! - **`tree`**: `ElementNode` and its HTML serializer
//! - **`error`**: `ParseError`, `RenderError` and the unified `Error`

pub mod error;
pub mod parsing;
pub mod tree;

use log::debug;

pub use error::{Error, ParseError, RenderError};
pub use parsing::blocks::{BlockType, build, classify, segment};
pub use parsing::document_to_element_tree;
pub use parsing::inline::{
    TextFragment, TextKind, extract_markdown_images, extract_markdown_links, split_delimiter,
    split_images, split_links, tokenize,
};
pub use tree::ElementNode;

use parsing::blocks::kinds::Heading;

/// Parses and renders a whole document.
pub fn markdown_to_html(markdown: &str) -> Result<String, Error> {
    let tree = document_to_element_tree(markdown)?;
    let html = tree.render()?;
    debug!("rendered {} bytes of html", html.len());
    Ok(html)
}

/// Text of the first level 1 heading, trimmed.
///
/// Only the heading's first line is used and inline markup is left as written.
pub fn extract_title(markdown: &str) -> Result<String, Error> {
    segment(markdown)
        .iter()
        .filter(|block| classify(block) == BlockType::Heading && Heading::level(block) == 1)
        .find_map(|block| block.split('\n').next())
        .map(|line| Heading::strip_marker(line).trim().to_string())
        .ok_or(Error::MissingTitle)
}
