//! # Block Parsing
//!
//! Three phases turn a document into block nodes.
//!
//! ## Parsing Phases
//!
//! 1. **Segmentation** (`segment`): the document is split on blank lines into
//!    trimmed block strings
//!
//! 2. **Classification** (`classify`): each block gets exactly one `BlockType`,
//!    decided from the whole block
//!
//! 3. **Construction** (`builder`): a `BlockBuilder` turns each classified block
//!    into an `ElementNode` and wraps them all in a `<div>` root
//!
//! ## Modules
//!
//! - **`kinds`**: block types with owned markers (Heading, CodeFence, BlockQuote, lists)
//! - **`segment`**: `segment()` splits a document into blocks
//! - **`classify`**: `MarkdownBlockClassifier` and `BlockType`
//! - **`builder`**: `BlockBuilder` and `build()`
//!
//! ## Key Invariants
//!
//! - Blocks never nest: a quote or list item holds inline content only
//! - Fenced code blocks are raw zones: no inline parsing inside

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod segment;

pub use builder::{BlockBuilder, build};
pub use classify::{BlockType, MarkdownBlockClassifier, classify};
pub use segment::segment;
