/// ATX heading block type with owned marker constants.
pub struct Heading;

impl Heading {
    pub const MARKER: char = '#';
    pub const MAX_LEVEL: usize = 6;

    /// Level of a heading opener line: 1 to 6 `#` immediately followed by a
    /// space. `None` for anything else.
    pub fn opener_level(line: &str) -> Option<usize> {
        let hashes = Self::count_markers(line);
        let opens = (1..=Self::MAX_LEVEL).contains(&hashes) && line[hashes..].starts_with(' ');
        opens.then_some(hashes)
    }

    /// Heading level of a block: leading `#` count capped at [`Self::MAX_LEVEL`].
    pub fn level(block: &str) -> usize {
        Self::count_markers(block.trim()).min(Self::MAX_LEVEL)
    }

    /// Removes the leading `#` run and the whitespace after it.
    pub fn strip_marker(block: &str) -> &str {
        block.trim_start_matches(Self::MARKER).trim_start()
    }

    fn count_markers(s: &str) -> usize {
        s.chars().take_while(|&c| c == Self::MARKER).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("# Title", Some(1))]
    #[case("###### Six", Some(6))]
    #[case("####### Seven", None)]
    #[case("#NoSpace", None)]
    #[case("#", None)]
    #[case("Not # a heading", None)]
    #[case("", None)]
    fn opener_level(#[case] line: &str, #[case] expected: Option<usize>) {
        assert_eq!(Heading::opener_level(line), expected);
    }

    #[rstest]
    #[case("# One", 1)]
    #[case("### Three", 3)]
    #[case("######## Eight", 6)]
    fn level_is_capped(#[case] block: &str, #[case] expected: usize) {
        assert_eq!(Heading::level(block), expected);
    }

    #[test]
    fn strip_marker_removes_hashes_and_spaces() {
        assert_eq!(Heading::strip_marker("##   Spaced out"), "Spaced out");
        assert_eq!(Heading::strip_marker("# a\n## b"), "a\n## b");
    }
}
