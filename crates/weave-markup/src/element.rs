//! Elements and closing modes.

use std::fmt;
use std::marker::PhantomData;

use crate::attribute::Attribute;
use crate::error::MarkupError;
use crate::node::{AnyNode, Node};

/// How an element's tag is closed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ClosingMode {
    /// `<name>children</name>`.
    #[default]
    Standard,
    /// `<name/>`, no content.
    SelfClosing,
    /// `<name>` with no closing tag and no content (HTML void elements).
    NeverClosed,
}

/// Untyped element: name, attributes, children and closing mode.
///
/// Only obtainable through [`Element`] constructors, which enforce that
/// self-closing and never-closed elements carry no content.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnyElement {
    name: String,
    attributes: Vec<Attribute>,
    children: Vec<AnyNode>,
    closing_mode: ClosingMode,
}

impl AnyElement {
    /// Element name as written in the tag.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared attributes in insertion order. Duplicates are kept.
    #[must_use]
    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    /// Child nodes in insertion order, groups not flattened.
    #[must_use]
    pub fn children(&self) -> &[AnyNode] {
        &self.children
    }

    /// Closing mode.
    #[must_use]
    pub fn closing_mode(&self) -> ClosingMode {
        self.closing_mode
    }
}

/// A named element that may appear in context `C`.
///
/// The context of the children is independent of `C`: a `channel` element
/// tagged as legal inside `<rss>` takes children tagged as legal inside a
/// channel.
pub struct Element<C> {
    element: AnyElement,
    context: PhantomData<fn() -> C>,
}

impl<C> Element<C> {
    /// Create an element with an explicit closing mode.
    ///
    /// Self-closing and never-closed elements cannot hold content: `children`
    /// may then only contain attribute nodes, empty nodes and groups of
    /// those. Anything else is rejected instead of being silently dropped.
    ///
    /// ```
    /// use weave_markup::{ClosingMode, Element, MarkupError, Node};
    ///
    /// let result = Element::<()>::try_new(
    ///     "atom:link",
    ///     [],
    ///     [Node::<()>::text("oops")],
    ///     ClosingMode::SelfClosing,
    /// );
    /// assert!(matches!(result, Err(MarkupError::ContentInSelfClosing { .. })));
    /// ```
    pub fn try_new<T>(
        name: impl Into<String>,
        attributes: impl IntoIterator<Item = Attribute>,
        children: impl IntoIterator<Item = Node<T>>,
        closing_mode: ClosingMode,
    ) -> Result<Self, MarkupError> {
        let name = name.into();
        let children: Vec<AnyNode> = children.into_iter().map(Node::into_any).collect();

        if children.iter().any(AnyNode::has_content) {
            match closing_mode {
                ClosingMode::Standard => {}
                ClosingMode::SelfClosing => {
                    return Err(MarkupError::ContentInSelfClosing { element: name });
                }
                ClosingMode::NeverClosed => {
                    return Err(MarkupError::ContentInVoidElement { element: name });
                }
            }
        }

        Ok(Self::from_parts(
            name,
            attributes.into_iter().collect(),
            children,
            closing_mode,
        ))
    }

    /// Create a standard `<name>…</name>` element.
    pub fn new<T>(
        name: impl Into<String>,
        attributes: impl IntoIterator<Item = Attribute>,
        children: impl IntoIterator<Item = Node<T>>,
    ) -> Self {
        Self::from_parts(
            name.into(),
            attributes.into_iter().collect(),
            children.into_iter().map(Node::into_any).collect(),
            ClosingMode::Standard,
        )
    }

    /// Create a `<name/>` element. It has no children by construction.
    pub fn self_closing(
        name: impl Into<String>,
        attributes: impl IntoIterator<Item = Attribute>,
    ) -> Self {
        Self::from_parts(
            name.into(),
            attributes.into_iter().collect(),
            Vec::new(),
            ClosingMode::SelfClosing,
        )
    }

    /// Create a `<name>` element without a closing tag.
    pub fn never_closed(
        name: impl Into<String>,
        attributes: impl IntoIterator<Item = Attribute>,
    ) -> Self {
        Self::from_parts(
            name.into(),
            attributes.into_iter().collect(),
            Vec::new(),
            ClosingMode::NeverClosed,
        )
    }

    fn from_parts(
        name: String,
        attributes: Vec<Attribute>,
        children: Vec<AnyNode>,
        closing_mode: ClosingMode,
    ) -> Self {
        Self {
            element: AnyElement {
                name,
                attributes,
                children,
                closing_mode,
            },
            context: PhantomData,
        }
    }

    /// Borrow the untyped element.
    #[must_use]
    pub fn as_any(&self) -> &AnyElement {
        &self.element
    }

    /// Wrap into a node of the same context.
    #[must_use]
    pub fn into_node(self) -> Node<C> {
        Node::from_element(self.element)
    }
}

impl<C> Clone for Element<C> {
    fn clone(&self) -> Self {
        Self {
            element: self.element.clone(),
            context: PhantomData,
        }
    }
}

impl<C> fmt::Debug for Element<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Element").field(&self.element).finish()
    }
}

impl<C> PartialEq for Element<C> {
    fn eq(&self, other: &Self) -> bool {
        self.element == other.element
    }
}

impl<C> Eq for Element<C> {}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    enum Ctx {}

    #[test]
    fn test_new_preserves_order_and_duplicates() {
        let element = Element::<Ctx>::new(
            "a",
            [
                Attribute::new("x", "1"),
                Attribute::new("y", "2"),
                Attribute::new("x", "3"),
            ],
            [Node::<Ctx>::text("t"), Node::raw("r")],
        );
        let any = element.as_any();
        assert_eq!(any.name(), "a");
        assert_eq!(
            any.attributes(),
            &[
                Attribute::new("x", "1"),
                Attribute::new("y", "2"),
                Attribute::new("x", "3"),
            ]
        );
        assert_eq!(
            any.children(),
            &[AnyNode::Text("t".to_owned()), AnyNode::Raw("r".to_owned())]
        );
        assert_eq!(any.closing_mode(), ClosingMode::Standard);
    }

    #[test]
    fn test_self_closing_has_no_children() {
        let element = Element::<Ctx>::self_closing("br", [Attribute::new("a", "b")]);
        assert!(element.as_any().children().is_empty());
        assert_eq!(element.as_any().closing_mode(), ClosingMode::SelfClosing);
    }

    #[test]
    fn test_try_new_rejects_content_in_self_closing() {
        let err = Element::<Ctx>::try_new(
            "img",
            [],
            [Node::<Ctx>::group([Node::text("caption")])],
            ClosingMode::SelfClosing,
        )
        .unwrap_err();
        assert!(matches!(err, MarkupError::ContentInSelfClosing { ref element } if element == "img"));
        assert!(err.to_string().contains("img"));
    }

    #[test]
    fn test_try_new_rejects_content_in_void_element() {
        let err = Element::<Ctx>::try_new(
            "meta",
            [],
            [Node::<Ctx>::raw("<x/>")],
            ClosingMode::NeverClosed,
        )
        .unwrap_err();
        assert!(matches!(err, MarkupError::ContentInVoidElement { .. }));
    }

    #[test]
    fn test_try_new_allows_attribute_children_in_self_closing() {
        let element = Element::<Ctx>::try_new(
            "link",
            [],
            [Node::<Ctx>::attribute("rel", "self"), Node::empty()],
            ClosingMode::SelfClosing,
        )
        .unwrap();
        assert_eq!(element.as_any().children().len(), 2);
    }

    #[test]
    fn test_try_new_standard_accepts_anything() {
        let element = Element::<Ctx>::try_new(
            "p",
            [],
            [Node::<Ctx>::text("hi")],
            ClosingMode::Standard,
        )
        .unwrap();
        assert_eq!(element.as_any().children().len(), 1);
    }
}
