use crate::error::ParseError;

use super::{
    delimiter::split_delimiter,
    kinds::Delimited,
    markers::{split_images, split_links},
    types::TextFragment,
};

/// Tokenizes a span of inline text into typed fragments.
///
/// Newlines are replaced by single spaces first, then the stages run in a
/// fixed order, each only splitting fragments that are still plain:
///
/// 1. `**` → bold
/// 2. `_` → italic
/// 3. `` ` `` → code
/// 4. `![alt](url)` → image
/// 5. `[text](url)` → link
///
/// # Errors
/// [`ParseError::UnmatchedDelimiter`] when any stage meets an odd number of
/// its delimiter in a plain fragment. The whole call fails; there is no
/// partial result.
pub fn tokenize(text: &str) -> Result<Vec<TextFragment>, ParseError> {
    let mut fragments = vec![TextFragment::plain(text.replace('\n', " "))];

    for style in Delimited::PIPELINE {
        fragments = split_delimiter(fragments, style)?;
    }

    let fragments = split_images(fragments);
    Ok(split_links(fragments))
}
