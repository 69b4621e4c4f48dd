/// Image marker `![alt](url)`: a [`Link`](super::Link) marker prefixed by `!`.
pub struct Image;

impl Image {
    pub const BANG: u8 = b'!';
}
