//! Element attributes.

use crate::node::Node;

/// A `name="value"` pair attached to an element.
///
/// Names are not validated against any markup grammar; the caller supplies
/// well-formed identifiers. Values are escaped at render time.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Attribute {
    name: String,
    value: String,
}

impl Attribute {
    /// Create an attribute from a name and an unescaped value.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Attribute name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Attribute value, unescaped.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Express this attribute as a sibling node.
    ///
    /// When the node ends up among an element's children, the renderer hoists
    /// it into that element's start tag after the element's own attributes.
    ///
    /// ```
    /// use weave_markup::{AnyContext, Attribute, Element, Node, render};
    ///
    /// let node = Element::<AnyContext>::new(
    ///     "feed",
    ///     [],
    ///     [Attribute::new("xmlns", "urn:a").into_node::<AnyContext>(), Node::text("x")],
    /// )
    /// .into_node();
    /// assert_eq!(render(&node), r#"<feed xmlns="urn:a">x</feed>"#);
    /// ```
    pub fn into_node<C>(self) -> Node<C> {
        Node::from_attribute(self)
    }
}

impl<N: Into<String>, V: Into<String>> From<(N, V)> for Attribute {
    fn from((name, value): (N, V)) -> Self {
        Self::new(name, value)
    }
}
