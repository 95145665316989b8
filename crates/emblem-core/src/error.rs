//! Error types for Emblem core operations.
//!
//! All failures here are precondition failures raised at the point of
//! detection. Nothing is retried or logged-and-swallowed: either a theme
//! and tree are fully constructed, or an error is returned before any
//! document text exists.

use thiserror::Error;

/// The main error type for theme resolution and tree construction.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A referenced color name is absent from the static color table.
    #[error("unknown color name '{0}'")]
    UnknownColor(String),

    /// A palette identifier does not match any built-in palette.
    #[error("unknown palette '{0}'")]
    UnknownPalette(String),

    /// A background selector was neither light, dark, nor transparent.
    #[error("unrecognized background '{0}' (expected light, dark, or transparent)")]
    UnknownBackground(String),

    /// The supplied node styles disagree with the fixed child count.
    #[error("the logo requires exactly {expected} child nodes, {actual} were supplied")]
    ChildCountMismatch { expected: usize, actual: usize },

    /// A label override sequence disagrees with the child count.
    #[error("{labels} labels supplied for {children} child nodes")]
    LabelCountMismatch { labels: usize, children: usize },

    /// No layout parameters are defined for the requested shape.
    #[error(
        "no layout parameters defined for {children} children with \
         {grandchildren} grandchildren each"
    )]
    UnsupportedShape {
        children: usize,
        grandchildren: usize,
    },
}
