/// Errors raised while turning Markdown text into an element tree.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("Unmatched delimiter `{delimiter}` in: {text:?}")]
    UnmatchedDelimiter {
        delimiter: &'static str,
        text: String,
    },
}

/// Errors raised while serializing an element tree to HTML.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    #[error("A leaf node without a tag must have a value")]
    EmptyLeafValue,
    #[error("A parent node must have a tag")]
    MissingTag,
    #[error("Parent node <{tag}> must have children")]
    EmptyChildren { tag: String },
}

/// Any failure of a whole-document conversion.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),
    #[error("Render error: {0}")]
    Render(#[from] RenderError),
    #[error("Document has no level 1 heading to use as a title")]
    MissingTitle,
}
