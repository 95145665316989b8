//! Document exporters.
//!
//! Emblem emits LaTeX/TikZ source text; compiling it to an image is the
//! job of an external typesetting engine, outside this crate.

pub mod tex;
