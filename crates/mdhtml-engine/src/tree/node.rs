/// Ordered `key -> value` attribute pairs. Insertion order is kept and
/// reproduced verbatim when rendering.
pub type Attributes = Vec<(String, String)>;

/// A node in the output HTML tree.
///
/// Each `Parent` owns its children by value, so a tree has no sharing and no
/// cycles. The root of a converted document is always a `div` parent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ElementNode {
    /// An element without children, or raw text when `tag` is `None`.
    Leaf {
        tag: Option<String>,
        value: String,
        attributes: Attributes,
    },
    /// An element wrapping an ordered sequence of child nodes.
    Parent {
        tag: String,
        children: Vec<ElementNode>,
        attributes: Attributes,
    },
}

impl ElementNode {
    /// A tagged leaf, e.g. `<b>value</b>`.
    pub fn leaf(tag: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Leaf {
            tag: Some(tag.into()),
            value: value.into(),
            attributes: Attributes::new(),
        }
    }

    /// An untagged leaf that renders as raw text.
    pub fn text(value: impl Into<String>) -> Self {
        Self::Leaf {
            tag: None,
            value: value.into(),
            attributes: Attributes::new(),
        }
    }

    pub fn parent(tag: impl Into<String>, children: Vec<ElementNode>) -> Self {
        Self::Parent {
            tag: tag.into(),
            children,
            attributes: Attributes::new(),
        }
    }

    /// Appends an attribute, keeping any previously added ones first.
    #[must_use]
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        match &mut self {
            Self::Leaf { attributes, .. } | Self::Parent { attributes, .. } => {
                attributes.push((key.into(), value.into()));
            }
        }
        self
    }

    pub fn tag(&self) -> Option<&str> {
        match self {
            Self::Leaf { tag, .. } => tag.as_deref(),
            Self::Parent { tag, .. } => Some(tag),
        }
    }

    /// The literal text of a leaf; `None` for parents.
    pub fn value(&self) -> Option<&str> {
        match self {
            Self::Leaf { value, .. } => Some(value),
            Self::Parent { .. } => None,
        }
    }

    /// Children of a parent; always empty for leaves.
    pub fn children(&self) -> &[ElementNode] {
        match self {
            Self::Leaf { .. } => &[],
            Self::Parent { children, .. } => children,
        }
    }

    pub fn attributes(&self) -> &[(String, String)] {
        match self {
            Self::Leaf { attributes, .. } | Self::Parent { attributes, .. } => attributes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn leaf_accessors() {
        let node = ElementNode::leaf("p", "Hello");
        assert_eq!(node.tag(), Some("p"));
        assert_eq!(node.value(), Some("Hello"));
        assert!(node.children().is_empty());
        assert!(node.attributes().is_empty());
    }

    #[test]
    fn text_leaf_has_no_tag() {
        let node = ElementNode::text("raw");
        assert_eq!(node.tag(), None);
        assert_eq!(node.value(), Some("raw"));
    }

    #[test]
    fn parent_accessors() {
        let node = ElementNode::parent("div", vec![ElementNode::text("a")]);
        assert_eq!(node.tag(), Some("div"));
        assert_eq!(node.value(), None);
        assert_eq!(node.children(), &[ElementNode::text("a")]);
    }

    #[test]
    fn attributes_keep_insertion_order() {
        let node = ElementNode::leaf("img", "")
            .with_attribute("src", "url")
            .with_attribute("alt", "text");
        assert_eq!(
            node.attributes(),
            &[
                ("src".to_string(), "url".to_string()),
                ("alt".to_string(), "text".to_string()),
            ]
        );
    }
}
