use crate::error::ParseError;

use super::{kinds::Delimited, types::TextFragment};

/// Splits every plain fragment on `style`'s delimiter.
///
/// Pieces alternate plain / styled, starting and ending with plain, so
/// `"a **b** c"` becomes `["a ", Bold("b"), " c"]` and `"**b**"` becomes
/// `["", Bold("b"), ""]`. Empty plain pieces are kept. Fragments that are
/// already styled pass through untouched.
///
/// # Errors
/// [`ParseError::UnmatchedDelimiter`] when a plain fragment holds an odd number
/// of delimiters.
pub fn split_delimiter(
    fragments: Vec<TextFragment>,
    style: Delimited,
) -> Result<Vec<TextFragment>, ParseError> {
    let delimiter = style.delimiter();
    let mut out = Vec::with_capacity(fragments.len());

    for fragment in fragments {
        if !fragment.is_plain() {
            out.push(fragment);
            continue;
        }

        let parts: Vec<&str> = fragment.content().split(delimiter).collect();
        if parts.len() % 2 == 0 {
            return Err(ParseError::UnmatchedDelimiter {
                delimiter,
                text: fragment.content().to_string(),
            });
        }

        out.extend(parts.into_iter().enumerate().map(|(i, part)| {
            if i % 2 == 0 {
                TextFragment::plain(part)
            } else {
                TextFragment::styled(part, style)
            }
        }));
    }

    Ok(out)
}
