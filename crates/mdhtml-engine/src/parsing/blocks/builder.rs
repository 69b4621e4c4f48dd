use log::trace;

use crate::error::ParseError;
use crate::parsing::inline::{Delimited, TextFragment, tokenize};
use crate::tree::ElementNode;

use super::{
    classify::BlockType,
    kinds::{BlockQuote, CodeFence, Heading, strip_item_marker},
};

/// Collects block nodes in document order and wraps them in a `<div>` root.
pub struct BlockBuilder {
    out: Vec<ElementNode>,
}

impl BlockBuilder {
    pub fn new() -> Self {
        Self { out: vec![] }
    }

    /// Converts one classified block and appends it.
    pub fn push(&mut self, block: &str, block_type: BlockType) -> Result<(), ParseError> {
        trace!("block {} as {:?}: {:?}", self.out.len(), block_type, block);
        let node = block_to_node(block, block_type)?;
        self.out.push(node);
        Ok(())
    }

    pub fn finish(self) -> ElementNode {
        ElementNode::parent("div", self.out)
    }
}

impl Default for BlockBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds the `<div>` root from classified blocks in order.
pub fn build<I, S>(blocks: I) -> Result<ElementNode, ParseError>
where
    I: IntoIterator<Item = (S, BlockType)>,
    S: AsRef<str>,
{
    let mut builder = BlockBuilder::new();
    for (block, block_type) in blocks {
        builder.push(block.as_ref(), block_type)?;
    }
    Ok(builder.finish())
}

fn block_to_node(block: &str, block_type: BlockType) -> Result<ElementNode, ParseError> {
    let node = match block_type {
        BlockType::Paragraph => ElementNode::parent("p", text_to_children(block)?),
        BlockType::Heading => {
            let tag = format!("h{}", Heading::level(block));
            ElementNode::parent(tag, text_to_children(Heading::strip_marker(block))?)
        }
        BlockType::Code => {
            let code = TextFragment::styled(CodeFence::code_text(block), Delimited::Code);
            ElementNode::parent("pre", vec![code.into()])
        }
        BlockType::Quote => {
            let text = block
                .split('\n')
                .map(BlockQuote::strip_prefix)
                .collect::<Vec<_>>()
                .join("\n");
            ElementNode::parent("blockquote", text_to_children(&text)?)
        }
        BlockType::UnorderedList => ElementNode::parent("ul", list_items(block)?),
        BlockType::OrderedList => ElementNode::parent("ol", list_items(block)?),
    };
    Ok(node)
}

fn list_items(block: &str) -> Result<Vec<ElementNode>, ParseError> {
    block
        .split('\n')
        .map(|line| Ok(ElementNode::parent("li", text_to_children(strip_item_marker(line))?)))
        .collect()
}

/// Tokenizes inline text into leaves. Empty plain text makes no leaf.
fn text_to_children(text: &str) -> Result<Vec<ElementNode>, ParseError> {
    Ok(tokenize(text)?
        .into_iter()
        .filter(|fragment| !(fragment.is_plain() && fragment.content().is_empty()))
        .map(ElementNode::from)
        .collect())
}
