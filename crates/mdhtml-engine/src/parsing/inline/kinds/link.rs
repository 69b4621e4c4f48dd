/// Link marker `[text](url)`.
///
/// The text may not contain `[` or `]`; the url may not contain `(` or `)`.
pub struct Link;

impl Link {
    pub const OPEN: u8 = b'[';
    pub const CLOSE: u8 = b']';
    pub const URL_OPEN: u8 = b'(';
    pub const URL_CLOSE: u8 = b')';
}
