//! Error types for Emblem operations.
//!
//! This module provides the main error type [`EmblemError`] which wraps
//! the error conditions that can occur while resolving, building, and
//! serializing a logo document.

use std::io;

use thiserror::Error;

/// The main error type for Emblem operations.
#[derive(Debug, Error)]
pub enum EmblemError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("theme error: {0}")]
    Theme(#[from] emblem_core::Error),

    #[error("configuration error: {0}")]
    Config(String),
}
