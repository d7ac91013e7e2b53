//! Compile-time context tags.
//!
//! A context tag is any type used as the `C` parameter of
//! [`Node<C>`](crate::Node) or [`Element<C>`](crate::Element). It carries no
//! data and has no runtime effect; it only decides which constructors
//! type-check in which position. Dialects declare one uninhabited enum per
//! structural position and, where a construct is legal in several positions,
//! a marker trait implemented by each of them:
//!
//! ```
//! use weave_markup::{Element, Node};
//!
//! pub enum ChannelContext {}
//! pub enum ItemContext {}
//!
//! /// Positions that accept a `<title>`.
//! pub trait TitleContext {}
//! impl TitleContext for ChannelContext {}
//! impl TitleContext for ItemContext {}
//!
//! pub fn title<C: TitleContext>(text: &str) -> Node<C> {
//!     Element::new("title", [], [Node::<()>::text(text)]).into_node()
//! }
//!
//! pub fn item(nodes: Vec<Node<ItemContext>>) -> Node<ChannelContext> {
//!     Element::new("item", [], nodes).into_node()
//! }
//!
//! let channel_children: Vec<Node<ChannelContext>> = vec![
//!     title("Feed"),
//!     item(vec![title("Entry")]),
//! ];
//! assert_eq!(
//!     weave_markup::render_nodes(&channel_children),
//!     "<title>Feed</title><item><title>Entry</title></item>"
//! );
//! ```
//!
//! Placing an item inside an item is rejected by the compiler:
//!
//! ```compile_fail
//! # use weave_markup::{Element, Node};
//! # pub enum ChannelContext {}
//! # pub enum ItemContext {}
//! # pub fn item(nodes: Vec<Node<ItemContext>>) -> Node<ChannelContext> {
//! #     Element::new("item", [], nodes).into_node()
//! # }
//! item(vec![item(vec![])]);
//! ```

/// Context tag for untyped fragments that are not tied to any dialect.
#[derive(Debug)]
pub enum AnyContext {}
