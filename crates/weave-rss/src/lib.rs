//! RSS 2.0 vocabulary.
//!
//! Constructors for RSS feeds with the Atom `self` link and the
//! `content:encoded` module. Constructors are tagged with the position they
//! are legal in: channel metadata only type-checks inside [`channel`], item
//! fields only inside [`item`], and shared fields such as [`title`] in both.
//!
//! # Example
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use weave_rss::{atom_link, content, feed, guid, is_perma_link, item, link, pub_date, title};
//! use weave_markup::Node;
//!
//! let published = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
//! let doc = feed([
//!     title("Example"),
//!     link("https://example.com"),
//!     atom_link("https://example.com/feed.rss"),
//!     item([
//!         guid([Node::text("https://example.com/a"), is_perma_link(true)]),
//!         title("A & B"),
//!         pub_date(&published, &Utc),
//!         content("<p>hi</p>"),
//!     ]),
//! ]);
//!
//! let xml = doc.render();
//! assert!(xml.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?><rss version="2.0""#));
//! assert!(xml.contains("<title>A &amp; B</title>"));
//! assert!(xml.contains("<pubDate>Tue, 02 Jan 2024 03:04:05 +0000</pubDate>"));
//! assert!(xml.contains("<content:encoded><![CDATA[<p>hi</p>]]></content:encoded>"));
//! ```
//!
//! Item fields are rejected at channel level:
//!
//! ```compile_fail
//! use weave_rss::{channel, content};
//!
//! channel([content("<p>not here</p>")]);
//! ```

mod channel;
mod item;

use weave_markup::{Document, DocumentFormat, Element, Node};

pub use channel::{Channel, atom_link, channel, language, last_build_date, ttl};
pub use item::{content, content_nodes, guid, is_perma_link, item};

/// Atom namespace, bound to the `atom` prefix.
pub const ATOM_NAMESPACE: &str = "http://www.w3.org/2005/Atom";

/// Content module namespace, bound to the `content` prefix.
pub const CONTENT_NAMESPACE: &str = "http://purl.org/rss/1.0/modules/content/";

/// Top level of an RSS document.
pub enum RssContext {}

/// Inside `<rss>`, the position of its one [`Channel`].
pub enum FeedContext {}

/// Inside `<channel>`.
pub enum ChannelContext {}

/// Inside `<item>`.
pub enum ItemContext {}

/// Inside `<guid>`.
pub enum GuidContext {}

/// Positions accepting the fields shared by channels and items.
pub trait ContentContext {}

impl ContentContext for ChannelContext {}
impl ContentContext for ItemContext {}

/// RSS document format.
#[derive(Debug)]
pub struct Rss;

impl DocumentFormat for Rss {
    type RootContext = RssContext;
    const NAME: &'static str = "rss";
}

/// Build a complete RSS document: `<rss>` with exactly one `<channel>`.
pub fn feed(nodes: impl IntoIterator<Item = Node<ChannelContext>>) -> Document<Rss> {
    Document::new([rss(channel(nodes))])
}

/// `<rss>` root element with version and namespace declarations around its
/// single channel.
///
/// ```
/// use weave_rss::{channel, rss, title};
///
/// let root = rss(channel([title("News")]));
/// assert!(weave_markup::render(&root).ends_with("<channel><title>News</title></channel></rss>"));
/// ```
///
/// A second channel is rejected:
///
/// ```compile_fail
/// use weave_rss::{channel, rss};
///
/// rss([channel([]), channel([])]);
/// ```
///
/// So is a bare node in place of the channel:
///
/// ```compile_fail
/// use weave_markup::Node;
/// use weave_rss::rss;
///
/// rss(Node::empty());
/// ```
pub fn rss(channel: Channel) -> Node<RssContext> {
    Element::new(
        "rss",
        [],
        [
            Node::<FeedContext>::attribute("version", "2.0"),
            Node::attribute("xmlns:atom", ATOM_NAMESPACE),
            Node::attribute("xmlns:content", CONTENT_NAMESPACE),
            channel.into_node(),
        ],
    )
    .into_node()
}

/// `<title>`.
pub fn title<C: ContentContext>(text: impl Into<String>) -> Node<C> {
    text_element("title", text)
}

/// `<description>`.
pub fn description<C: ContentContext>(text: impl Into<String>) -> Node<C> {
    text_element("description", text)
}

/// `<link>` with a URL.
pub fn link<C: ContentContext>(url: impl weave_markup::UrlRepresentable) -> Node<C> {
    text_element("link", url.url_string())
}

/// `<pubDate>` with `instant` formatted as an RFC 822 date in `zone`.
pub fn pub_date<C, Tz>(instant: &chrono::DateTime<chrono::Utc>, zone: &Tz) -> Node<C>
where
    C: ContentContext,
    Tz: chrono::TimeZone,
    Tz::Offset: std::fmt::Display,
{
    text_element("pubDate", weave_date::format_rfc822(instant, zone))
}

pub(crate) fn text_element<C>(name: &str, text: impl Into<String>) -> Node<C> {
    Element::new(name, [], [Node::<C>::text(text)]).into_node()
}
