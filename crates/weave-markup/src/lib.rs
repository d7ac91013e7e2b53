//! Typed markup trees and their renderer.
//!
//! This crate is the dialect-independent core of weave. A document is a tree
//! of [`Node<C>`] values: elements, attribute nodes, text, raw fragments,
//! groups and empty nodes. The `C` parameter is a compile-time context tag
//! (see [`context`]) that lets dialect vocabularies such as RSS or sitemaps
//! reject structurally invalid nesting at compile time, at zero runtime cost.
//!
//! # Architecture
//!
//! - [`Node`] / [`Element`] / [`Attribute`]: immutable tree values
//! - [`AnyNode`] / [`AnyElement`]: the same tree with the context erased
//! - [`Renderer`]: compact or indented serialization with escaping
//! - [`Document`] / [`DocumentFormat`]: a rooted document with an optional
//!   XML declaration
//!
//! The renderer knows nothing about any dialect. Format quirks (namespace
//! declarations, CDATA, self-closing tags) are expressed by vocabularies
//! through attribute nodes, raw nodes and [`ClosingMode`].
//!
//! # Example
//!
//! ```
//! use weave_markup::{Attribute, Element, Node, render};
//!
//! let link = Element::<()>::self_closing(
//!     "atom:link",
//!     [Attribute::new("href", "https://example.com/feed"), Attribute::new("rel", "self")],
//! );
//! let title = Element::<()>::new("title", [], [Node::<()>::text("A & B")]);
//!
//! assert_eq!(
//!     render(&link.into_node()),
//!     r#"<atom:link href="https://example.com/feed" rel="self"/>"#
//! );
//! assert_eq!(render(&title.into_node()), "<title>A &amp; B</title>");
//! ```

mod attribute;
pub mod context;
mod document;
mod element;
mod error;
mod escape;
mod node;
mod render;
mod url;

pub use attribute::Attribute;
pub use context::AnyContext;
pub use document::{Document, DocumentFormat, XML_DECLARATION};
pub use element::{AnyElement, ClosingMode, Element};
pub use error::MarkupError;
pub use escape::escape_text;
pub use node::{AnyNode, Node};
pub use render::{Indentation, Renderer, render, render_nodes};
pub use url::UrlRepresentable;
