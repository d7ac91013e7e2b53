//! Tree serialization.
//!
//! Depth-first, pre-order walk over [`AnyNode`] trees. Groups are flattened
//! here, attribute nodes found among an element's children are hoisted into
//! its start tag, and closing modes decide how (and whether) the element is
//! closed. Output is compact unless an [`Indentation`] is configured.

use crate::element::{AnyElement, ClosingMode};
use crate::escape::{escape_attribute_into, escape_text_into};
use crate::node::{AnyNode, Node};

/// Pretty-print indentation, in spaces per nesting level.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Indentation {
    width: usize,
}

impl Indentation {
    /// Indent each nesting level by `width` spaces.
    #[must_use]
    pub fn spaces(width: usize) -> Self {
        Self { width }
    }

    /// Spaces per level.
    #[must_use]
    pub fn width(self) -> usize {
        self.width
    }
}

/// Markup renderer.
///
/// Compact by default: no whitespace is inserted between tags. With
/// [`with_indentation`](Self::with_indentation) every element starts on its
/// own line, and elements containing other elements close on their own line.
/// Elements with text or raw children are mixed content: everything inside
/// them is written inline.
///
/// ```
/// use weave_markup::{Element, Indentation, Node, Renderer};
///
/// let tree = Element::<()>::new(
///     "channel",
///     [],
///     [Element::<()>::new("title", [], [Node::<()>::text("News")]).into_node()],
/// )
/// .into_node();
///
/// assert_eq!(
///     Renderer::new().render(tree.as_any()),
///     "<channel><title>News</title></channel>"
/// );
/// assert_eq!(
///     Renderer::new()
///         .with_indentation(Indentation::spaces(2))
///         .render(tree.as_any()),
///     "<channel>\n  <title>News</title>\n</channel>"
/// );
/// ```
#[derive(Clone, Debug, Default)]
pub struct Renderer {
    indentation: Option<Indentation>,
}

impl Renderer {
    /// Create a compact renderer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable pretty-printing.
    #[must_use]
    pub fn with_indentation(mut self, indentation: Indentation) -> Self {
        self.indentation = Some(indentation);
        self
    }

    /// Set or clear pretty-printing.
    #[must_use]
    pub fn with_optional_indentation(mut self, indentation: Option<Indentation>) -> Self {
        self.indentation = indentation;
        self
    }

    /// Render a single node.
    #[must_use]
    pub fn render(&self, node: &AnyNode) -> String {
        self.render_all(std::slice::from_ref(node))
    }

    /// Render a sequence of sibling nodes.
    #[must_use]
    pub fn render_all<'a>(&self, nodes: impl IntoIterator<Item = &'a AnyNode>) -> String {
        let mut out = String::with_capacity(1024);
        for node in nodes {
            self.write_node(node, 0, false, &mut out);
        }
        out
    }

    /// Append a rendered node to `out`.
    pub fn render_into(&self, node: &AnyNode, out: &mut String) {
        self.write_node(node, 0, false, out);
    }

    fn write_node(&self, node: &AnyNode, depth: usize, inline: bool, out: &mut String) {
        match node {
            AnyNode::Element(element) => self.write_element(element, depth, inline, out),
            AnyNode::Attribute(attribute) => {
                write_attribute(attribute.name(), attribute.value(), out);
            }
            AnyNode::Text(text) => escape_text_into(text, out),
            AnyNode::Raw(markup) => out.push_str(markup),
            AnyNode::Group(members) => {
                for member in members {
                    self.write_node(member, depth, inline, out);
                }
            }
            AnyNode::Empty => {}
        }
    }

    /// Write `element`. Inside mixed content (`inline`) no line breaks are
    /// inserted, so text stays byte-for-byte as given.
    fn write_element(&self, element: &AnyElement, depth: usize, inline: bool, out: &mut String) {
        if !inline {
            self.write_line_break(depth, out);
        }

        out.push('<');
        out.push_str(element.name());
        for attribute in element.attributes() {
            write_attribute(attribute.name(), attribute.value(), out);
        }

        let mut content: Vec<&AnyNode> = Vec::with_capacity(element.children().len());
        for child in element.children() {
            child.for_each_flattened(&mut |node| match node {
                AnyNode::Attribute(attribute) => {
                    write_attribute(attribute.name(), attribute.value(), out);
                }
                AnyNode::Empty => {}
                _ => content.push(node),
            });
        }

        match element.closing_mode() {
            ClosingMode::SelfClosing => out.push_str("/>"),
            ClosingMode::NeverClosed => out.push('>'),
            ClosingMode::Standard => {
                out.push('>');
                let mixed = content
                    .iter()
                    .any(|node| matches!(node, AnyNode::Text(_) | AnyNode::Raw(_)));
                let children_inline = inline || mixed;
                let mut has_element_child = false;
                for node in content {
                    has_element_child |= matches!(node, AnyNode::Element(_));
                    self.write_node(node, depth + 1, children_inline, out);
                }
                if has_element_child && !children_inline {
                    self.write_line_break(depth, out);
                }
                out.push_str("</");
                out.push_str(element.name());
                out.push('>');
            }
        }
    }

    /// In pretty mode, start a new indented line unless at the very start.
    fn write_line_break(&self, depth: usize, out: &mut String) {
        if let Some(indentation) = self.indentation
            && !out.is_empty()
        {
            out.push('\n');
            out.extend(std::iter::repeat_n(' ', depth * indentation.width()));
        }
    }
}

fn write_attribute(name: &str, value: &str, out: &mut String) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    escape_attribute_into(value, out);
    out.push('"');
}

/// Render a node compactly.
#[must_use]
pub fn render<C>(node: &Node<C>) -> String {
    Renderer::new().render(node.as_any())
}

/// Render a sequence of sibling nodes compactly, as a fragment.
///
/// ```
/// use weave_markup::{Node, render_nodes};
///
/// let nodes: [Node<()>; 2] = [Node::text("a & "), Node::raw("<b>b</b>")];
/// assert_eq!(render_nodes(&nodes), "a &amp; <b>b</b>");
/// ```
#[must_use]
pub fn render_nodes<C>(nodes: &[Node<C>]) -> String {
    Renderer::new().render_all(nodes.iter().map(Node::as_any))
}
