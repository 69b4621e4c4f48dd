/// Blockquote block type with owned prefix constant.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix character.
    pub const PREFIX: char = '>';

    pub fn is_quote_line(line: &str) -> bool {
        line.starts_with(Self::PREFIX)
    }

    /// Strips the `>` prefix and at most one whitespace character after it.
    ///
    /// Lines without the prefix are returned unchanged.
    pub fn strip_prefix(line: &str) -> &str {
        let Some(rest) = line.strip_prefix(Self::PREFIX) else {
            return line;
        };
        let mut chars = rest.chars();
        match chars.next() {
            Some(c) if c.is_whitespace() => chars.as_str(),
            _ => rest,
        }
    }
}
