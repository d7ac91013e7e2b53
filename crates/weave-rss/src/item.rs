//! Item-level constructors.

use weave_markup::{Element, Node, render_nodes};

use crate::{ChannelContext, GuidContext, ItemContext};

/// `<item>`.
pub fn item(nodes: impl IntoIterator<Item = Node<ItemContext>>) -> Node<ChannelContext> {
    Element::new("item", [], nodes).into_node()
}

/// `<guid>`, usually a text node plus an optional [`is_perma_link`].
pub fn guid(nodes: impl IntoIterator<Item = Node<GuidContext>>) -> Node<ItemContext> {
    Element::new("guid", [], nodes).into_node()
}

/// `isPermaLink` attribute of a `<guid>`.
pub fn is_perma_link(value: bool) -> Node<GuidContext> {
    Node::attribute("isPermaLink", if value { "true" } else { "false" })
}

/// `<content:encoded>` holding `html` in a CDATA section, unescaped.
///
/// ```
/// use weave_markup::render;
///
/// assert_eq!(
///     render(&weave_rss::content("<p>hi</p>")),
///     "<content:encoded><![CDATA[<p>hi</p>]]></content:encoded>"
/// );
/// ```
pub fn content(html: &str) -> Node<ItemContext> {
    Element::new("content:encoded", [], [cdata(html)]).into_node()
}

/// `<content:encoded>` holding `nodes` rendered as a fragment.
pub fn content_nodes<T>(nodes: &[Node<T>]) -> Node<ItemContext> {
    content(&render_nodes(nodes))
}

/// Wrap `text` in CDATA. A literal `]]>` is split across two sections.
fn cdata(text: &str) -> Node<ItemContext> {
    Node::raw(format!(
        "<![CDATA[{}]]>",
        text.replace("]]>", "]]]]><![CDATA[>")
    ))
}
