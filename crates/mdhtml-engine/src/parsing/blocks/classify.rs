use super::kinds::{BlockQuote, CodeFence, Heading, OrderedList, UnorderedList};

/// The kind of a segmented block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockType {
    Paragraph,
    Heading,
    Code,
    Quote,
    UnorderedList,
    OrderedList,
}

/// Classifies whole blocks produced by the segmenter.
pub struct MarkdownBlockClassifier;

impl MarkdownBlockClassifier {
    /// Classifies a block. Rules are checked in order and the first match wins:
    /// heading, code, quote, unordered list, ordered list, then paragraph.
    pub fn classify(&self, block: &str) -> BlockType {
        let first_line = block.split('\n').next().unwrap_or_default();

        if Heading::opener_level(first_line).is_some() {
            return BlockType::Heading;
        }
        if CodeFence::encloses(block) {
            return BlockType::Code;
        }
        if block.split('\n').all(BlockQuote::is_quote_line) {
            return BlockType::Quote;
        }
        if block.split('\n').all(UnorderedList::is_item) {
            return BlockType::UnorderedList;
        }
        if OrderedList::is_sequence(block.split('\n')) {
            return BlockType::OrderedList;
        }
        BlockType::Paragraph
    }
}

/// Shorthand for [`MarkdownBlockClassifier::classify`].
pub fn classify(block: &str) -> BlockType {
    MarkdownBlockClassifier.classify(block)
}
