//! Emblem Core Types and Definitions
//!
//! This crate provides the foundational types for the Emblem logo
//! generator. It includes:
//!
//! - **Colors**: TikZ color entries and numeric codes ([`color`] module)
//! - **Palettes**: the static color table and built-in palettes ([`palette`] module)
//! - **Themes**: resolved color bundles for one logo instance ([`theme`] module)
//! - **Tree**: the fixed-shape mindmap hierarchy ([`tree`] module)
//! - **Layout**: per-level distance and angle lookup ([`layout`] module)

pub mod color;
pub mod error;
pub mod layout;
pub mod palette;
pub mod theme;
pub mod tree;

pub use error::Error;
