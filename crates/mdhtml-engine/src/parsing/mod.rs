pub mod blocks;
pub mod inline;

use log::debug;

use crate::error::ParseError;
use crate::tree::ElementNode;

use blocks::{BlockBuilder, MarkdownBlockClassifier, segment};

/// Parses a whole document into a `<div>` element tree.
///
/// The first inline error aborts the parse.
pub fn document_to_element_tree(markdown: &str) -> Result<ElementNode, ParseError> {
    let classifier = MarkdownBlockClassifier;
    let mut builder = BlockBuilder::new();

    let blocks = segment(markdown);
    debug!("segmented document into {} blocks", blocks.len());

    for block in &blocks {
        let block_type = classifier.classify(block);
        builder.push(block, block_type)?;
    }

    Ok(builder.finish())
}
