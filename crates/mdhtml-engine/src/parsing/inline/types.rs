use crate::tree::ElementNode;

use super::kinds::Delimited;

/// The closed set of inline fragment kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextKind {
    Plain,
    Bold,
    Italic,
    Code,
    Link,
    Image,
}

impl TextKind {
    /// Whether fragments of this kind carry a target URL.
    pub const fn has_target(self) -> bool {
        matches!(self, TextKind::Link | TextKind::Image)
    }
}

/// A typed span of inline text produced by the tokenizer.
///
/// `target` is present exactly when the kind is `Link` or `Image`; the
/// constructors are the only way to build one, so the pairing always holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextFragment {
    content: String,
    kind: TextKind,
    target: Option<String>,
}

impl TextFragment {
    pub fn plain(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            kind: TextKind::Plain,
            target: None,
        }
    }

    /// A bold, italic or code span.
    pub fn styled(content: impl Into<String>, style: Delimited) -> Self {
        Self {
            content: content.into(),
            kind: style.kind(),
            target: None,
        }
    }

    pub fn link(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            content: text.into(),
            kind: TextKind::Link,
            target: Some(url.into()),
        }
    }

    pub fn image(alt: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            content: alt.into(),
            kind: TextKind::Image,
            target: Some(url.into()),
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn kind(&self) -> TextKind {
        self.kind
    }

    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }

    pub fn is_plain(&self) -> bool {
        self.kind == TextKind::Plain
    }
}

/// Fixed fragment to leaf mapping.
///
/// The match is exhaustive over [`TextKind`], so a new kind cannot be added
/// without deciding its HTML form here.
impl From<TextFragment> for ElementNode {
    fn from(fragment: TextFragment) -> Self {
        let TextFragment {
            content,
            kind,
            target,
        } = fragment;
        debug_assert_eq!(kind.has_target(), target.is_some());
        let target = target.unwrap_or_default();
        match kind {
            TextKind::Plain => ElementNode::text(content),
            TextKind::Bold => ElementNode::leaf("b", content),
            TextKind::Italic => ElementNode::leaf("i", content),
            TextKind::Code => ElementNode::leaf("code", content),
            TextKind::Link => ElementNode::leaf("a", content).with_attribute("href", target),
            TextKind::Image => ElementNode::leaf("img", "")
                .with_attribute("src", target)
                .with_attribute("alt", content),
        }
    }
}
