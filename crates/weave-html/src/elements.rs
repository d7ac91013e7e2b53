//! Body elements.

use weave_markup::{Attribute, Element, Node, UrlRepresentable};

use crate::{BodyContext, FlowContent, ListContext, PhrasingContent, PhrasingContext};

fn container<T, C>(name: &str, nodes: impl IntoIterator<Item = Node<T>>) -> Node<C> {
    Element::new(name, [], nodes).into_node()
}

/// `<div>`.
pub fn div<C: FlowContent>(nodes: impl IntoIterator<Item = Node<BodyContext>>) -> Node<C> {
    container("div", nodes)
}

/// `<p>`.
pub fn p<C: FlowContent>(nodes: impl IntoIterator<Item = Node<PhrasingContext>>) -> Node<C> {
    container("p", nodes)
}

/// `<h1>`.
pub fn h1<C: FlowContent>(nodes: impl IntoIterator<Item = Node<PhrasingContext>>) -> Node<C> {
    container("h1", nodes)
}

/// `<h2>`.
pub fn h2<C: FlowContent>(nodes: impl IntoIterator<Item = Node<PhrasingContext>>) -> Node<C> {
    container("h2", nodes)
}

/// `<h3>`.
pub fn h3<C: FlowContent>(nodes: impl IntoIterator<Item = Node<PhrasingContext>>) -> Node<C> {
    container("h3", nodes)
}

/// `<pre>`.
pub fn pre<C: FlowContent>(nodes: impl IntoIterator<Item = Node<PhrasingContext>>) -> Node<C> {
    container("pre", nodes)
}

/// `<ul>`.
pub fn ul<C: FlowContent>(items: impl IntoIterator<Item = Node<ListContext>>) -> Node<C> {
    container("ul", items)
}

/// `<ol>`.
pub fn ol<C: FlowContent>(items: impl IntoIterator<Item = Node<ListContext>>) -> Node<C> {
    container("ol", items)
}

/// `<li>`; list items hold flow content.
pub fn li(nodes: impl IntoIterator<Item = Node<BodyContext>>) -> Node<ListContext> {
    Element::new("li", [], nodes).into_node()
}

/// `<a href>`.
pub fn a<C: PhrasingContent>(
    href: impl UrlRepresentable,
    nodes: impl IntoIterator<Item = Node<PhrasingContext>>,
) -> Node<C> {
    Element::new("a", [Attribute::new("href", href.url_string())], nodes).into_node()
}

/// `<strong>`.
pub fn strong<C: PhrasingContent>(
    nodes: impl IntoIterator<Item = Node<PhrasingContext>>,
) -> Node<C> {
    container("strong", nodes)
}

/// `<em>`.
pub fn em<C: PhrasingContent>(nodes: impl IntoIterator<Item = Node<PhrasingContext>>) -> Node<C> {
    container("em", nodes)
}

/// `<code>`.
pub fn code<C: PhrasingContent>(
    nodes: impl IntoIterator<Item = Node<PhrasingContext>>,
) -> Node<C> {
    container("code", nodes)
}

/// `<img>`, a void element.
pub fn img<C: PhrasingContent>(src: impl UrlRepresentable, alt: impl Into<String>) -> Node<C> {
    Element::never_closed(
        "img",
        [
            Attribute::new("src", src.url_string()),
            Attribute::new("alt", alt),
        ],
    )
    .into_node()
}

/// `<br>`, a void element.
pub fn br<C: PhrasingContent>() -> Node<C> {
    Element::never_closed("br", []).into_node()
}
