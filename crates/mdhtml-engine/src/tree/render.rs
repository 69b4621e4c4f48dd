use crate::error::RenderError;

use super::node::ElementNode;

impl ElementNode {
    /// Serializes this node and its descendants to an HTML string.
    ///
    /// No escaping is applied: leaf values and attribute values are emitted
    /// verbatim.
    ///
    /// # Errors
    /// - [`RenderError::EmptyLeafValue`] for an untagged leaf with an empty value
    /// - [`RenderError::MissingTag`] for a parent with an empty tag
    /// - [`RenderError::EmptyChildren`] for a parent without children
    pub fn render(&self) -> Result<String, RenderError> {
        let mut out = String::new();
        self.render_into(&mut out)?;
        Ok(out)
    }

    /// Appends the HTML for this node to `out`.
    ///
    /// On error `out` may hold a partial rendering; callers discard it.
    pub fn render_into(&self, out: &mut String) -> Result<(), RenderError> {
        match self {
            ElementNode::Leaf {
                tag,
                value,
                attributes,
            } => match tag.as_deref() {
                None | Some("") => {
                    if value.is_empty() {
                        return Err(RenderError::EmptyLeafValue);
                    }
                    out.push_str(value);
                }
                Some(tag) => {
                    open_tag(tag, attributes, out);
                    out.push_str(value);
                    close_tag(tag, out);
                }
            },
            ElementNode::Parent {
                tag,
                children,
                attributes,
            } => {
                if tag.is_empty() {
                    return Err(RenderError::MissingTag);
                }
                if children.is_empty() {
                    return Err(RenderError::EmptyChildren { tag: tag.clone() });
                }
                open_tag(tag, attributes, out);
                for child in children {
                    child.render_into(out)?;
                }
                close_tag(tag, out);
            }
        }
        Ok(())
    }
}

fn open_tag(tag: &str, attributes: &[(String, String)], out: &mut String) {
    out.push('<');
    out.push_str(tag);
    attributes_to_html(attributes, out);
    out.push('>');
}

fn close_tag(tag: &str, out: &mut String) {
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

/// Each attribute renders as ` key="value"`.
fn attributes_to_html(attributes: &[(String, String)], out: &mut String) {
    for (key, value) in attributes {
        out.push(' ');
        out.push_str(key);
        out.push_str("=\"");
        out.push_str(value);
        out.push('"');
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn attrs_html(node: &ElementNode) -> String {
        let mut out = String::new();
        attributes_to_html(node.attributes(), &mut out);
        out
    }

    #[test]
    fn attributes_render_in_order() {
        let node = ElementNode::parent("div", vec![ElementNode::text("x")])
            .with_attribute("href", "https://google.com")
            .with_attribute("target", "_blank");
        assert_eq!(
            attrs_html(&node),
            r#" href="https://google.com" target="_blank""#
        );
    }

    #[test]
    fn no_attributes_render_nothing() {
        assert_eq!(attrs_html(&ElementNode::leaf("p", "x")), "");
    }

    #[test]
    fn tagged_leaf() {
        assert_eq!(
            ElementNode::leaf("p", "Hello, world!").render().unwrap(),
            "<p>Hello, world!</p>"
        );
    }

    #[test]
    fn leaf_with_attribute() {
        let node =
            ElementNode::leaf("a", "test links").with_attribute("href", "https://www.google.com");
        assert_eq!(
            node.render().unwrap(),
            r#"<a href="https://www.google.com">test links</a>"#
        );
    }

    #[test]
    fn untagged_leaf_is_raw_text() {
        assert_eq!(
            ElementNode::text("Hello, world!").render().unwrap(),
            "Hello, world!"
        );
    }

    #[test]
    fn untagged_empty_leaf_is_an_error() {
        assert_eq!(
            ElementNode::text("").render(),
            Err(RenderError::EmptyLeafValue)
        );
    }

    #[test]
    fn tagged_empty_leaf_renders_empty_element() {
        let img = ElementNode::leaf("img", "")
            .with_attribute("src", "cat.png")
            .with_attribute("alt", "a cat");
        assert_eq!(
            img.render().unwrap(),
            r#"<img src="cat.png" alt="a cat"></img>"#
        );
    }

    #[test]
    fn parent_with_children() {
        let parent = ElementNode::parent(
            "hehe",
            vec![
                ElementNode::leaf("span", "child"),
                ElementNode::leaf("spa", "chil"),
                ElementNode::leaf("sp", "chi"),
                ElementNode::leaf("s", "ch"),
            ],
        );
        assert_eq!(
            parent.render().unwrap(),
            "<hehe><span>child</span><spa>chil</spa><sp>chi</sp><s>ch</s></hehe>"
        );
    }

    #[test]
    fn parent_with_grandchildren() {
        let child = ElementNode::parent("span", vec![ElementNode::leaf("b", "grandchild")]);
        let parent = ElementNode::parent("div", vec![child]);
        assert_eq!(
            parent.render().unwrap(),
            "<div><span><b>grandchild</b></span></div>"
        );
    }

    #[test]
    fn parent_without_tag_is_an_error() {
        let node = ElementNode::parent("", vec![ElementNode::text("x")]);
        assert_eq!(node.render(), Err(RenderError::MissingTag));
    }

    #[test]
    fn parent_without_children_is_an_error() {
        let node = ElementNode::parent("ul", vec![]);
        assert_eq!(
            node.render(),
            Err(RenderError::EmptyChildren { tag: "ul".into() })
        );
    }

    #[test]
    fn error_in_nested_child_propagates() {
        let node = ElementNode::parent(
            "div",
            vec![
                ElementNode::leaf("p", "ok"),
                ElementNode::parent("p", vec![ElementNode::text("")]),
            ],
        );
        assert_eq!(node.render(), Err(RenderError::EmptyLeafValue));
    }
}
