//! Error types for measurement and markup validation.
//!
//! The measurement path never surfaces these to the widget: a failed pass
//! degrades to showing the full content. They exist so hosts and callers
//! that want to know *why* a pass was skipped can find out.

use thiserror::Error;

/// Reasons a recompute pass could not measure anything.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EllipsisError {
    /// The container has not been laid out yet (first frame, hidden panel).
    #[error("container is not available for measurement")]
    ContainerUnavailable,

    /// The container was laid out with no usable width.
    #[error("container width {width} is not measurable")]
    ZeroWidth { width: f32 },

    /// Strict validation rejected the markup.
    #[error(transparent)]
    Markup(#[from] MarkupError),
}

/// Problems reported by [`crate::markup::validate_markup`].
///
/// The lenient engine path normalizes all of these away; only callers that
/// opt into strict validation ever see them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MarkupError {
    #[error("closing tag </{name}> at byte {offset} has no matching opening tag")]
    UnmatchedClose { name: String, offset: usize },

    #[error("tag <{name}> opened at byte {offset} is never closed")]
    Unclosed { name: String, offset: usize },

    #[error("tag starting at byte {offset} is not terminated")]
    UnterminatedTag { offset: usize },
}
