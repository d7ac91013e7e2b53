//! Sitemap vocabulary.
//!
//! Constructors for the [sitemaps.org](https://www.sitemaps.org/protocol.html)
//! format plus the Google image extension. Each constructor returns a node
//! tagged with the position it is legal in, so a `<priority>` can only be
//! placed inside a `<url>` and a `<url>` only inside a `<urlset>`.
//!
//! # Example
//!
//! ```
//! use weave_markup::render;
//! use weave_sitemap::{loc, url, urlset};
//!
//! let tree = urlset([url([loc("https://example.com")])]);
//! assert_eq!(
//!     render(&tree),
//!     concat!(
//!         r#"<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9" "#,
//!         r#"xmlns:image="http://www.google.com/schemas/sitemap-image/1.1">"#,
//!         "<url><loc>https://example.com</loc></url></urlset>",
//!     )
//! );
//! ```
//!
//! Misplaced constructs do not compile:
//!
//! ```compile_fail
//! use weave_sitemap::{priority, urlset};
//!
//! urlset([priority(0.5)]);
//! ```

mod change_frequency;

use std::fmt::Display;

use chrono::{DateTime, TimeZone, Utc};
use weave_markup::{Document, DocumentFormat, Element, Node, UrlRepresentable};

pub use change_frequency::{ChangeFrequency, UnknownChangeFrequency};

/// Default namespace of sitemap documents.
pub const SITEMAP_NAMESPACE: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// Namespace of the image extension, bound to the `image` prefix.
pub const IMAGE_NAMESPACE: &str = "http://www.google.com/schemas/sitemap-image/1.1";

/// Top level of a sitemap document.
pub enum SitemapContext {}

/// Inside `<urlset>`.
pub enum UrlSetContext {}

/// Inside `<url>`.
pub enum UrlContext {}

/// Inside `<image:image>`.
pub enum ImageContext {}

/// Sitemap document format.
#[derive(Debug)]
pub struct Sitemap;

impl DocumentFormat for Sitemap {
    type RootContext = SitemapContext;
    const NAME: &'static str = "sitemap";
}

/// Build a complete sitemap document around a `<urlset>`.
pub fn sitemap(nodes: impl IntoIterator<Item = Node<UrlSetContext>>) -> Document<Sitemap> {
    Document::new([urlset(nodes)])
}

/// `<urlset>` root element.
///
/// The sitemap and image namespace declarations are always emitted first, in
/// that order, ahead of anything the caller passes.
pub fn urlset(nodes: impl IntoIterator<Item = Node<UrlSetContext>>) -> Node<SitemapContext> {
    Element::new(
        "urlset",
        [],
        [
            Node::<UrlSetContext>::attribute("xmlns", SITEMAP_NAMESPACE),
            Node::attribute("xmlns:image", IMAGE_NAMESPACE),
            Node::group(nodes),
        ],
    )
    .into_node()
}

/// `<url>` entry.
pub fn url(nodes: impl IntoIterator<Item = Node<UrlContext>>) -> Node<UrlSetContext> {
    Element::new("url", [], nodes).into_node()
}

/// `<loc>` with the page URL.
pub fn loc(location: impl UrlRepresentable) -> Node<UrlContext> {
    text_element("loc", location.url_string())
}

/// `<lastmod>` with the calendar date of `instant` in `zone`.
pub fn lastmod<Tz>(instant: &DateTime<Utc>, zone: &Tz) -> Node<UrlContext>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    text_element("lastmod", weave_date::format_sitemap_date(instant, zone))
}

/// `<changefreq>`.
pub fn changefreq(frequency: ChangeFrequency) -> Node<UrlContext> {
    text_element("changefreq", frequency.as_str())
}

/// `<priority>`, written with one decimal place.
pub fn priority(priority: f64) -> Node<UrlContext> {
    text_element("priority", format!("{priority:.1}"))
}

/// `<image:image>` entry.
pub fn image(nodes: impl IntoIterator<Item = Node<ImageContext>>) -> Node<UrlContext> {
    Element::new("image:image", [], nodes).into_node()
}

/// `<image:loc>` with the image URL.
pub fn image_loc(location: impl UrlRepresentable) -> Node<ImageContext> {
    text_element("image:loc", location.url_string())
}

fn text_element<C>(name: &str, text: impl Into<String>) -> Node<C> {
    Element::new(name, [], [Node::<C>::text(text)]).into_node()
}
