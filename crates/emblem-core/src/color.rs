//! Color entries for TikZ documents.
//!
//! A [`ColorEntry`] pairs a TikZ-visible color name with the code used to
//! declare it in the document preamble. Two entries refer to the same
//! declared color when their names match; the document serializer declares
//! each distinct name exactly once.

use std::fmt;

/// The code backing a declared color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorCode {
    /// A numeric triple, declared with `\definecolor`.
    Rgb(u8, u8, u8),

    /// A symbolic color expression such as `rgb:black,1.25;white,1`,
    /// declared with `\colorlet`.
    Formula(String),
}

impl fmt::Display for ColorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorCode::Rgb(r, g, b) => write!(f, "{r}, {g}, {b}"),
            ColorCode::Formula(expr) => write!(f, "{expr}"),
        }
    }
}

/// A named color together with its declaration code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorEntry {
    name: String,
    code: ColorCode,
}

impl ColorEntry {
    /// Creates a color entry from a name and an explicit code.
    pub fn new(name: impl Into<String>, code: ColorCode) -> Self {
        Self {
            name: name.into(),
            code,
        }
    }

    /// Creates a color entry backed by an RGB triple.
    pub fn rgb(name: impl Into<String>, r: u8, g: u8, b: u8) -> Self {
        Self::new(name, ColorCode::Rgb(r, g, b))
    }

    /// Creates a color entry backed by a symbolic expression.
    pub fn formula(name: impl Into<String>, expr: impl Into<String>) -> Self {
        Self::new(name, ColorCode::Formula(expr.into()))
    }

    /// Returns the TikZ-visible color name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the declaration code.
    pub fn code(&self) -> &ColorCode {
        &self.code
    }
}

impl fmt::Display for ColorEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
