/// Splits a document into trimmed block strings.
///
/// The document is trimmed, split on blank lines, and every line of every
/// block is trimmed. Blocks left empty are dropped, so runs of three or more
/// newlines count as a single break. CRLF line endings are treated as LF.
pub fn segment(document: &str) -> Vec<String> {
    let normalized = document.replace("\r\n", "\n");
    normalized
        .trim()
        .split("\n\n")
        .filter_map(clean_block)
        .collect()
}

fn clean_block(raw: &str) -> Option<String> {
    let lines: Vec<&str> = raw.split('\n').map(str::trim).collect();
    let joined = lines.join("\n");
    let block = joined.trim_matches('\n');
    (!block.is_empty()).then(|| block.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn splits_on_blank_lines() {
        let md = "
This is **bolded** paragraph

This is another paragraph with _italic_ text and `code` here
This is the same paragraph on a new line

- This is a list
- with items
";
        assert_eq!(
            segment(md),
            vec![
                "This is **bolded** paragraph",
                "This is another paragraph with _italic_ text and `code` here\nThis is the same paragraph on a new line",
                "- This is a list\n- with items",
            ]
        );
    }

    #[test]
    fn extra_newlines_are_one_break() {
        assert_eq!(segment("a\n\n\n\nb\n\n\nc"), vec!["a", "b", "c"]);
    }

    #[test]
    fn lines_are_trimmed() {
        assert_eq!(segment("   first  \n\tsecond\t"), vec!["first\nsecond"]);
    }

    #[test]
    fn crlf_is_normalized() {
        assert_eq!(segment("one\r\n\r\ntwo\r\nlines"), vec!["one", "two\nlines"]);
    }

    #[test]
    fn whitespace_only_lines_between_blocks() {
        assert_eq!(segment("a\n  \n\nb"), vec!["a", "b"]);
    }

    #[test]
    fn empty_document_has_no_blocks() {
        assert!(segment("").is_empty());
        assert!(segment(" \n\n \n").is_empty());
    }
}
