//! Typed and untyped tree nodes.

use std::fmt;
use std::marker::PhantomData;

use crate::attribute::Attribute;
use crate::element::{AnyElement, Element};
use crate::render::Renderer;

/// Untyped markup node.
///
/// This is the runtime shape shared by every dialect. Typed code works with
/// [`Node<C>`], which wraps an `AnyNode` together with a compile-time context
/// tag; the tag is erased here, so two nodes built in different contexts with
/// the same payload are equal and render identically.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AnyNode {
    /// A named element with attributes and children.
    Element(AnyElement),
    /// An attribute expressed as a sibling node.
    Attribute(Attribute),
    /// Text content, escaped on output.
    Text(String),
    /// Markup emitted verbatim.
    Raw(String),
    /// Sibling nodes rendered as one unit.
    Group(Vec<AnyNode>),
    /// Renders to nothing.
    Empty,
}

impl AnyNode {
    /// Call `visit` for every node in document order, looking through groups.
    ///
    /// Group nodes themselves are never passed to `visit`; nested groups are
    /// flattened recursively.
    pub fn for_each_flattened<'a>(&'a self, visit: &mut impl FnMut(&'a AnyNode)) {
        match self {
            Self::Group(members) => {
                for member in members {
                    member.for_each_flattened(visit);
                }
            }
            other => visit(other),
        }
    }

    /// Whether this node produces element content (element, text or raw).
    ///
    /// Attribute and empty nodes do not, and a group does only if one of its
    /// members does.
    #[must_use]
    pub fn has_content(&self) -> bool {
        match self {
            Self::Element(_) | Self::Text(_) | Self::Raw(_) => true,
            Self::Attribute(_) | Self::Empty => false,
            Self::Group(members) => members.iter().any(Self::has_content),
        }
    }
}

/// A markup node tagged with the context it is legal in.
///
/// `C` is a marker type with no runtime representation. Dialect vocabularies
/// define one marker per structural position and only hand out constructors
/// returning `Node<Marker>` for the positions where a construct is valid, so a
/// misplaced construct fails to type-check:
///
/// ```compile_fail
/// use weave_markup::{Element, Node};
///
/// enum ChannelContext {}
/// enum UrlSetContext {}
///
/// fn loc(url: &str) -> Node<UrlSetContext> {
///     Element::new("loc", [], [Node::<()>::text(url)]).into_node()
/// }
///
/// fn channel(children: Vec<Node<ChannelContext>>) -> Node<()> {
///     Element::new("channel", [], children).into_node()
/// }
///
/// channel(vec![loc("https://example.com")]);
/// ```
pub struct Node<C> {
    node: AnyNode,
    context: PhantomData<fn() -> C>,
}

impl<C> Node<C> {
    fn from_any(node: AnyNode) -> Self {
        Self {
            node,
            context: PhantomData,
        }
    }

    pub(crate) fn from_attribute(attribute: Attribute) -> Self {
        Self::from_any(AnyNode::Attribute(attribute))
    }

    pub(crate) fn from_element(element: AnyElement) -> Self {
        Self::from_any(AnyNode::Element(element))
    }

    /// An attribute node, hoisted into the enclosing element's start tag.
    pub fn attribute(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::from_attribute(Attribute::new(name, value))
    }

    /// Text content. `&`, `<`, `>` and `"` are escaped on output.
    pub fn text(text: impl Into<String>) -> Self {
        Self::from_any(AnyNode::Text(text.into()))
    }

    /// Markup emitted exactly as given, without escaping.
    ///
    /// The caller is responsible for the well-formedness of `markup`.
    pub fn raw(markup: impl Into<String>) -> Self {
        Self::from_any(AnyNode::Raw(markup.into()))
    }

    /// Several sibling nodes treated as one.
    ///
    /// A group renders exactly like its members passed individually; it is
    /// flattened by the renderer, not here.
    pub fn group(nodes: impl IntoIterator<Item = Node<C>>) -> Self {
        Self::from_any(AnyNode::Group(
            nodes.into_iter().map(Node::into_any).collect(),
        ))
    }

    /// A node that renders to nothing.
    #[must_use]
    pub fn empty() -> Self {
        Self::from_any(AnyNode::Empty)
    }

    /// `node` if present, otherwise [`Node::empty`].
    pub fn optional(node: Option<Node<C>>) -> Self {
        node.unwrap_or_else(Self::empty)
    }

    /// The node produced by `build` if `condition` holds, otherwise empty.
    pub fn when(condition: bool, build: impl FnOnce() -> Node<C>) -> Self {
        if condition { build() } else { Self::empty() }
    }

    /// Borrow the untyped node.
    #[must_use]
    pub fn as_any(&self) -> &AnyNode {
        &self.node
    }

    /// Discard the context tag.
    #[must_use]
    pub fn into_any(self) -> AnyNode {
        self.node
    }

    /// Render this node compactly.
    #[must_use]
    pub fn render(&self) -> String {
        Renderer::new().render(&self.node)
    }
}

impl<C> Clone for Node<C> {
    fn clone(&self) -> Self {
        Self::from_any(self.node.clone())
    }
}

impl<C> fmt::Debug for Node<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Node").field(&self.node).finish()
    }
}

impl<C> PartialEq for Node<C> {
    fn eq(&self, other: &Self) -> bool {
        self.node == other.node
    }
}

impl<C> Eq for Node<C> {}

impl<C> Default for Node<C> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<C> From<Element<C>> for Node<C> {
    fn from(element: Element<C>) -> Self {
        element.into_node()
    }
}

impl<C> FromIterator<Node<C>> for Node<C> {
    fn from_iter<I: IntoIterator<Item = Node<C>>>(iter: I) -> Self {
        Self::group(iter)
    }
}
