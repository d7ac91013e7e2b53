//! Builds feed and sitemap documents from the site configuration.

use chrono::{DateTime, FixedOffset, Utc};
use weave_config::{Config, ConfigError, PageConfig, SiteConfig};
use weave_markup::{Document, Indentation, Node, Renderer};
use weave_rss::{
    ChannelContext, Rss, atom_link, content, description, feed, guid, is_perma_link, item,
    language, last_build_date, link, pub_date, title, ttl,
};
use weave_sitemap::{Sitemap, UrlSetContext, changefreq, lastmod, loc, priority, sitemap, url};

/// Renderer configured from `[render]`.
pub(crate) fn renderer(config: &Config) -> Renderer {
    Renderer::new().with_optional_indentation(config.indent().map(Indentation::spaces))
}

/// RSS feed of the pages listed in the feed, newest first.
///
/// At most `feed.max_items` items are included. `<lastBuildDate>` is the most
/// recent publication or modification among them and is omitted for an empty
/// feed.
pub(crate) fn feed_document(config: &Config) -> Result<Document<Rss>, ConfigError> {
    let zone = config.site.utc_offset()?;
    let site = &config.site;

    let mut pages: Vec<&PageConfig> = config.pages.iter().filter(|page| page.in_feed).collect();
    pages.sort_by(|a, b| b.published.cmp(&a.published));
    pages.truncate(config.feed.max_items);

    let last_build = pages.iter().map(|page| page.last_modified()).max();

    tracing::debug!(items = pages.len(), "Building feed");

    Ok(feed([
        title(site.name.as_str()),
        link(site.absolute_url("")),
        description(site.description.as_str()),
        Node::optional(site.language.as_deref().map(language)),
        atom_link(site.absolute_url(&config.feed.path)),
        Node::optional(config.feed.ttl.map(ttl)),
        Node::optional(last_build.map(|instant| last_build_date(&utc(instant), &zone))),
        Node::group(pages.into_iter().map(|page| feed_item(site, page, &zone))),
    ]))
}

fn feed_item(site: &SiteConfig, page: &PageConfig, zone: &FixedOffset) -> Node<ChannelContext> {
    let page_url = site.absolute_url(&page.path);
    item([
        title(page.title.as_str()),
        link(&page_url),
        Node::when(!page.description.is_empty(), || {
            description(page.description.as_str())
        }),
        guid([Node::text(page_url.as_str()), is_perma_link(true)]),
        pub_date(&utc(page.published), zone),
        Node::optional(page.content.as_deref().map(content)),
    ])
}

/// Sitemap listing every page in configuration order.
pub(crate) fn sitemap_document(config: &Config) -> Result<Document<Sitemap>, ConfigError> {
    let zone = config.site.utc_offset()?;

    tracing::debug!(urls = config.pages.len(), "Building sitemap");

    Ok(sitemap(
        config
            .pages
            .iter()
            .map(|page| sitemap_entry(&config.site, page, &zone)),
    ))
}

fn sitemap_entry(site: &SiteConfig, page: &PageConfig, zone: &FixedOffset) -> Node<UrlSetContext> {
    url([
        loc(site.absolute_url(&page.path)),
        lastmod(&utc(page.last_modified()), zone),
        Node::optional(page.change_frequency.map(changefreq)),
        Node::optional(page.priority.map(priority)),
    ])
}

fn utc(instant: DateTime<FixedOffset>) -> DateTime<Utc> {
    instant.with_timezone(&Utc)
}
