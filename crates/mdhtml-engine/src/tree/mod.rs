//! # Element Tree
//!
//! The output data model: an owned tree of [`ElementNode`]s and its HTML
//! serialization.
//!
//! ## Modules
//!
//! - **`node`**: `ElementNode` (Leaf / Parent) with constructors and accessors
//! - **`render`**: `ElementNode::render()` producing the HTML string
//!
//! ## Render Rules
//!
//! - Tagged leaf: `<tag attrs>value</tag>`
//! - Untagged leaf: `value` verbatim (must be non-empty)
//! - Parent: `<tag attrs>` + children + `</tag>` (tag and children required)

pub mod node;
pub mod render;

pub use node::{Attributes, ElementNode};
