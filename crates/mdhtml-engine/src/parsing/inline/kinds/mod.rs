//! # Inline Kinds
//!
//! Inline-specific types that own their syntax delimiters.
//!
//! ## Types
//!
//! - **`Delimited`**: paired delimiters `**`, `_` and `` ` `` with their fragment kinds
//! - **`Link`**: `OPEN = b'['`, `CLOSE = b']'`, `URL_OPEN = b'('`, `URL_CLOSE = b')'`
//! - **`Image`**: `BANG = b'!'` in front of a link marker
//!
//! The tokenizer and scanner read these constants; they never hardcode `[` or `**`.

pub mod delimited;
pub mod image;
pub mod link;

pub use delimited::Delimited;
pub use image::Image;
pub use link::Link;
