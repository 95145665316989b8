//! Configuration types for Emblem logo rendering.
//!
//! This module provides configuration structures that control how the
//! logo document is styled and emitted. All types implement
//! [`serde::Deserialize`] for flexible loading from external sources.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level application configuration combining style and document settings.
//! - [`StyleConfig`] - Controls background selection and the document font.
//! - [`DocumentConfig`] - Controls root text, root font, output format, and the navigation variant.
//!
//! # Example
//!
//! ```
//! # use emblem::config::AppConfig;
//! // Use default configuration
//! let config = AppConfig::default();
//! assert!(config.style().background().is_ok());
//! ```

use serde::Deserialize;

use emblem_core::palette::Background;

use crate::export::tex::OutputFormat;

/// Fallback document font, the M+ monospace face the logo was designed with.
const DEFAULT_FONT: &str = "M+ 1mn";

/// Top-level application configuration combining style and document settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,

    /// Document configuration section.
    #[serde(default)]
    document: DocumentConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified style and document configurations.
    pub fn new(style: StyleConfig, document: DocumentConfig) -> Self {
        Self { style, document }
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    /// Returns the document configuration.
    pub fn document(&self) -> &DocumentConfig {
        &self.document
    }
}

/// Visual styling configuration for the rendered logo.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct StyleConfig {
    /// Background selection: `light`, `dark`, or `transparent`.
    #[serde(default)]
    background: Option<String>,

    /// Document font name.
    #[serde(default)]
    font: Option<String>,
}

impl StyleConfig {
    /// Creates a new [`StyleConfig`] from raw option values.
    pub fn new(background: Option<String>, font: Option<String>) -> Self {
        Self { background, font }
    }

    /// Returns the parsed [`Background`] selection, defaulting to
    /// transparent when none is configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured background string is not one
    /// of `light`, `dark`, `transparent`, or `none`.
    pub fn background(&self) -> Result<Background, String> {
        self.background
            .as_deref()
            .map(str::parse)
            .transpose()
            .map_err(|err| format!("Invalid background in config: {err}"))
            .map(Option::unwrap_or_default)
    }

    /// Returns the document font, falling back to the default face.
    pub fn font(&self) -> &str {
        self.font.as_deref().unwrap_or(DEFAULT_FONT)
    }

    /// Returns the raw configured background string, if any.
    pub fn background_name(&self) -> Option<&str> {
        self.background.as_deref()
    }

    /// Returns the raw configured font, if any.
    pub fn font_name(&self) -> Option<&str> {
        self.font.as_deref()
    }
}

/// Document emission options for the rendered logo.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct DocumentConfig {
    /// Text placed inside the root concept node.
    #[serde(default)]
    root_text: Option<String>,

    /// Font style command for the root text, e.g. `bfseries`.
    #[serde(default)]
    root_font_style: Option<String>,

    /// Font size command for the root text, e.g. `large`.
    #[serde(default)]
    root_font_size: Option<String>,

    /// Conversion format requested from the typesetting engine:
    /// `png`, `svg`, or `jpg`.
    #[serde(default)]
    format: Option<String>,

    /// Navigation-variant text; lines separated by `|`.
    #[serde(default)]
    nav_text: Option<String>,
}

impl DocumentConfig {
    /// Creates a new [`DocumentConfig`] from raw option values.
    pub fn new(
        root_text: Option<String>,
        root_font_style: Option<String>,
        root_font_size: Option<String>,
        format: Option<String>,
        nav_text: Option<String>,
    ) -> Self {
        Self {
            root_text,
            root_font_style,
            root_font_size,
            format,
            nav_text,
        }
    }

    /// Returns the root node text, empty when none is configured.
    pub fn root_text(&self) -> &str {
        self.root_text.as_deref().unwrap_or("")
    }

    /// Returns the root font style command.
    pub fn root_font_style(&self) -> &str {
        self.root_font_style.as_deref().unwrap_or("bfseries")
    }

    /// Returns the root font size command.
    pub fn root_font_size(&self) -> &str {
        self.root_font_size.as_deref().unwrap_or("large")
    }

    /// Returns the parsed conversion format, or `None` when the document
    /// should not request a conversion.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured format string is not one of
    /// `png`, `svg`, or `jpg`.
    pub fn format(&self) -> Result<Option<OutputFormat>, String> {
        self.format
            .as_deref()
            .map(str::parse)
            .transpose()
            .map_err(|err| format!("Invalid output format in config: {err}"))
    }

    /// Returns the navigation-variant text, if one is configured.
    pub fn nav_text(&self) -> Option<&str> {
        self.nav_text.as_deref()
    }

    /// Returns the raw configured root text, if any.
    pub fn root_text_raw(&self) -> Option<&str> {
        self.root_text.as_deref()
    }

    /// Returns the raw configured format string, if any.
    pub fn format_raw(&self) -> Option<&str> {
        self.format.as_deref()
    }
}
