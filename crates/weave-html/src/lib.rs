//! HTML vocabulary.
//!
//! A compact subset of HTML5, enough for page shells and for the article
//! bodies embedded in feeds. Block-level constructors are bounded by
//! [`FlowContent`], inline ones by [`PhrasingContent`], so a `<div>` inside a
//! `<p>` does not compile:
//!
//! ```compile_fail
//! use weave_html::{div, p, BodyContext};
//! use weave_markup::Node;
//!
//! let _: Node<BodyContext> = p([div([])]);
//! ```
//!
//! # Example
//!
//! ```
//! use weave_html::{a, body, class, head, html, lang, meta_charset, p, page, title};
//! use weave_markup::Node;
//!
//! let doc = page([
//!     lang("en"),
//!     head([meta_charset("UTF-8"), title("Hello")]),
//!     body([p([class("lead"), Node::text("Read "), a("/docs", [Node::text("the docs")])])]),
//! ]);
//!
//! assert_eq!(
//!     doc.render(),
//!     concat!(
//!         r#"<!DOCTYPE html><html lang="en"><head><meta charset="UTF-8"><title>Hello</title></head>"#,
//!         r#"<body><p class="lead">Read <a href="/docs">the docs</a></p></body></html>"#,
//!     )
//! );
//! ```

mod elements;

use weave_markup::{Document, DocumentFormat, Element, Node};

pub use elements::{a, br, code, div, em, h1, h2, h3, img, li, ol, p, pre, strong, ul};

/// Top level of an HTML document.
pub enum DocumentContext {}

/// Inside `<html>`.
pub enum HtmlContext {}

/// Inside `<head>`.
pub enum HeadContext {}

/// Inside `<body>` and other flow containers (`<div>`, `<li>`).
pub enum BodyContext {}

/// Inside phrasing containers (`<p>`, headings, `<a>`, `<strong>`, …).
pub enum PhrasingContext {}

/// Inside `<ul>` and `<ol>`.
pub enum ListContext {}

/// Positions accepting block-level content.
pub trait FlowContent: HtmlContent {}

/// Positions accepting inline content.
pub trait PhrasingContent: HtmlContent {}

/// Any position inside an HTML element. Global attributes are legal here.
pub trait HtmlContent {}

impl HtmlContent for HtmlContext {}
impl HtmlContent for HeadContext {}
impl HtmlContent for BodyContext {}
impl HtmlContent for PhrasingContext {}
impl HtmlContent for ListContext {}

impl FlowContent for BodyContext {}

impl PhrasingContent for BodyContext {}
impl PhrasingContent for PhrasingContext {}

/// HTML document format. Rendered without an XML declaration.
#[derive(Debug)]
pub struct Html;

impl DocumentFormat for Html {
    type RootContext = DocumentContext;
    const NAME: &'static str = "html";
    const XML_DECLARATION: bool = false;
}

/// A complete HTML5 page: doctype followed by `<html>`.
pub fn page(nodes: impl IntoIterator<Item = Node<HtmlContext>>) -> Document<Html> {
    Document::new([Node::raw("<!DOCTYPE html>"), html(nodes)])
}

/// `<html>` root element.
pub fn html(nodes: impl IntoIterator<Item = Node<HtmlContext>>) -> Node<DocumentContext> {
    Element::new("html", [], nodes).into_node()
}

/// `lang` attribute of `<html>`.
pub fn lang(code: impl Into<String>) -> Node<HtmlContext> {
    Node::attribute("lang", code)
}

/// `<head>`.
pub fn head(nodes: impl IntoIterator<Item = Node<HeadContext>>) -> Node<HtmlContext> {
    Element::new("head", [], nodes).into_node()
}

/// `<body>`.
pub fn body(nodes: impl IntoIterator<Item = Node<BodyContext>>) -> Node<HtmlContext> {
    Element::new("body", [], nodes).into_node()
}

/// `<title>` of the page.
pub fn title(text: impl Into<String>) -> Node<HeadContext> {
    Element::new("title", [], [Node::<HeadContext>::text(text)]).into_node()
}

/// `<meta charset>`, a void element.
pub fn meta_charset(charset: impl Into<String>) -> Node<HeadContext> {
    Element::never_closed("meta", [weave_markup::Attribute::new("charset", charset)]).into_node()
}

/// `<link rel="stylesheet">`, a void element.
pub fn stylesheet(href: impl weave_markup::UrlRepresentable) -> Node<HeadContext> {
    Element::never_closed(
        "link",
        [
            weave_markup::Attribute::new("rel", "stylesheet"),
            weave_markup::Attribute::new("href", href.url_string()),
        ],
    )
    .into_node()
}

/// `class` attribute.
pub fn class<C: HtmlContent>(names: impl Into<String>) -> Node<C> {
    Node::attribute("class", names)
}

/// `id` attribute.
pub fn id<C: HtmlContent>(value: impl Into<String>) -> Node<C> {
    Node::attribute("id", value)
}
