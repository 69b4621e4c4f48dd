//! # Inline Parsing
//!
//! Turns the text of a paragraph, heading, quote or list item into an ordered
//! sequence of [`TextFragment`]s.
//!
//! ## Architecture
//!
//! Tokenizing is a fixed pipeline of split stages. Each stage only looks at
//! fragments that are still `Plain`; anything an earlier stage tagged passes
//! through untouched, so styles never nest.
//!
//! - delimiter stages (`**`, `_`, `` ` ``) split on paired delimiters and
//!   reject odd counts
//! - marker stages (`![alt](url)`, `[text](url)`) scan with a [`cursor::Cursor`]
//!   and keep the surrounding text as plain fragments
//!
//! ## Modules
//!
//! - **`types`**: `TextFragment`, `TextKind` and the fragment to leaf mapping
//! - **`kinds`**: delimiter and marker constants (`Delimited`, `Link`, `Image`)
//! - **`cursor`**: byte `Cursor` used by the marker scanner
//! - **`delimiter`**: `split_delimiter()`
//! - **`markers`**: `extract_markdown_images/links()`, `split_images/links()`
//! - **`parser`**: `tokenize()` main entry point
//!
//! Code blocks never reach this module; their text is kept verbatim.

pub mod cursor;
pub mod delimiter;
pub mod kinds;
pub mod markers;
pub mod parser;
pub mod types;

pub use delimiter::split_delimiter;
pub use kinds::Delimited;
pub use markers::{extract_markdown_images, extract_markdown_links, split_images, split_links};
pub use parser::tokenize;
pub use types::{TextFragment, TextKind};
