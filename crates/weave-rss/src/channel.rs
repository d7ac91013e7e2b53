//! Channel-level constructors.

use std::fmt::Display;

use chrono::{DateTime, TimeZone, Utc};
use weave_markup::{Attribute, Element, Node, UrlRepresentable};

use crate::{ChannelContext, FeedContext, text_element};

/// A `<channel>` element.
///
/// Not a plain node: [`rss`](crate::rss) takes exactly one by value, so a
/// feed with no channel or several channels does not type-check.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Channel(Node<FeedContext>);

impl Channel {
    /// The `<channel>` element as a node.
    #[must_use]
    pub fn as_node(&self) -> &Node<FeedContext> {
        &self.0
    }

    pub(crate) fn into_node(self) -> Node<FeedContext> {
        self.0
    }
}

/// `<channel>`.
pub fn channel(nodes: impl IntoIterator<Item = Node<ChannelContext>>) -> Channel {
    Channel(Element::new("channel", [], nodes).into_node())
}

/// `<language>`, e.g. `en-us`.
pub fn language(code: impl Into<String>) -> Node<ChannelContext> {
    text_element("language", code)
}

/// `<lastBuildDate>` with `instant` formatted as an RFC 822 date in `zone`.
pub fn last_build_date<Tz>(instant: &DateTime<Utc>, zone: &Tz) -> Node<ChannelContext>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    text_element("lastBuildDate", weave_date::format_rfc822(instant, zone))
}

/// `<ttl>`: minutes a reader may cache the feed.
pub fn ttl(minutes: u32) -> Node<ChannelContext> {
    text_element("ttl", minutes.to_string())
}

/// Self-closing `<atom:link>` pointing at the feed itself.
///
/// ```
/// use weave_markup::render;
///
/// assert_eq!(
///     render(&weave_rss::atom_link("https://example.com/feed")),
///     r#"<atom:link href="https://example.com/feed" rel="self" type="application/rss+xml"/>"#
/// );
/// ```
pub fn atom_link(href: impl UrlRepresentable) -> Node<ChannelContext> {
    Element::self_closing(
        "atom:link",
        [
            Attribute::new("href", href.url_string()),
            Attribute::new("rel", "self"),
            Attribute::new("type", "application/rss+xml"),
        ],
    )
    .into_node()
}
