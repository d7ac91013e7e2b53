//! Whole documents.

use std::fmt;

use crate::node::Node;
use crate::render::{Indentation, Renderer};

/// XML declaration emitted ahead of XML-family documents.
pub const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

/// A markup format a [`Document`] can be rendered as.
///
/// Implemented by each dialect on a marker type. `RootContext` is the context
/// tag of the nodes allowed at the top level of the document.
pub trait DocumentFormat {
    /// Context tag for top-level nodes.
    type RootContext;

    /// Short format name, used in diagnostics.
    const NAME: &'static str;

    /// Whether rendering starts with [`XML_DECLARATION`].
    const XML_DECLARATION: bool = true;
}

/// A complete document in format `F`.
pub struct Document<F: DocumentFormat> {
    nodes: Vec<Node<F::RootContext>>,
}

impl<F: DocumentFormat> Document<F> {
    /// Create a document from its top-level nodes.
    pub fn new(nodes: impl IntoIterator<Item = Node<F::RootContext>>) -> Self {
        Self {
            nodes: nodes.into_iter().collect(),
        }
    }

    /// Top-level nodes.
    #[must_use]
    pub fn nodes(&self) -> &[Node<F::RootContext>] {
        &self.nodes
    }

    /// Render compactly.
    #[must_use]
    pub fn render(&self) -> String {
        self.render_with(&Renderer::new())
    }

    /// Render with one element per line.
    #[must_use]
    pub fn render_indented(&self, indentation: Indentation) -> String {
        self.render_with(&Renderer::new().with_indentation(indentation))
    }

    /// Render with a configured renderer.
    #[must_use]
    pub fn render_with(&self, renderer: &Renderer) -> String {
        let mut out = String::with_capacity(4096);
        if F::XML_DECLARATION {
            out.push_str(XML_DECLARATION);
        }
        for node in &self.nodes {
            renderer.render_into(node.as_any(), &mut out);
        }
        tracing::debug!(format = F::NAME, bytes = out.len(), "Rendered document");
        out
    }
}

impl<F: DocumentFormat> Clone for Document<F> {
    fn clone(&self) -> Self {
        Self {
            nodes: self.nodes.clone(),
        }
    }
}

impl<F: DocumentFormat> fmt::Debug for Document<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Document")
            .field("format", &F::NAME)
            .field("nodes", &self.nodes)
            .finish()
    }
}

impl<F: DocumentFormat> PartialEq for Document<F> {
    fn eq(&self, other: &Self) -> bool {
        self.nodes == other.nodes
    }
}
