//! Error types for tree construction.

/// Error raised while building a markup tree.
///
/// Rendering itself cannot fail; every error surfaces at construction time.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum MarkupError {
    /// Content supplied to an element that renders as `<name/>`.
    #[error("self-closing element <{element}/> cannot have content")]
    ContentInSelfClosing {
        /// Element name.
        element: String,
    },

    /// Content supplied to an element that is never closed.
    #[error("void element <{element}> cannot have content")]
    ContentInVoidElement {
        /// Element name.
        element: String,
    },
}
