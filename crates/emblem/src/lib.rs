//! Emblem - a TikZ mindmap logo generator.
//!
//! Emblem composes the LaTeX/TikZ source for a fixed-shape mindmap logo
//! from themed palettes. It resolves colors, builds the diagram tree, and
//! serializes the document text; compiling that text to an image is left
//! to an external typesetting engine.

pub mod config;
pub mod export;

mod error;

pub use emblem_core::{color, layout, palette, theme, tree};

pub use error::EmblemError;

use log::{debug, info, trace};

use emblem_core::{
    layout::LayoutParameters,
    theme::{Theme, ThemeSpec},
    tree::Shape,
};

use config::AppConfig;
use export::tex::{NavVariant, TexBuilder};

/// Builder for resolving and rendering Emblem logos.
///
/// This provides an API for processing a logo through theme resolution,
/// tree construction, and document serialization.
///
/// # Examples
///
/// ```rust
/// use emblem::{LogoBuilder, config::AppConfig};
/// use emblem::palette::BuiltinPalette;
/// use emblem::theme::ThemeSpec;
///
/// let spec = ThemeSpec::Builtin(BuiltinPalette::Canon2020);
///
/// // With custom config
/// let config = AppConfig::default();
/// let builder = LogoBuilder::new(config);
///
/// // Resolve the theme
/// let theme = builder.resolve(&spec)
///     .expect("Failed to resolve");
///
/// // Render the theme to document text
/// let tex = builder.render_tex(&theme)
///     .expect("Failed to render");
///
/// // Or use default config
/// let builder = LogoBuilder::default();
/// ```
#[derive(Default)]
pub struct LogoBuilder {
    config: AppConfig,
}

impl LogoBuilder {
    /// Create a new logo builder with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Application configuration including style and document settings
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Resolve a theme specification into a concrete theme.
    ///
    /// Color names are looked up in the static color table and the
    /// configured background selection is normalized to a concrete fill
    /// (or to no fill at all for a transparent canvas).
    ///
    /// # Errors
    ///
    /// Returns `EmblemError` for unknown color names or an invalid
    /// background selection in the configuration.
    pub fn resolve(&self, spec: &ThemeSpec) -> Result<Theme, EmblemError> {
        info!("Resolving theme");

        let background = self
            .config
            .style()
            .background()
            .map_err(EmblemError::Config)?;

        let theme = Theme::resolve(spec, background)?;

        debug!("Theme resolved successfully");
        trace!(theme:?; "Resolved theme");

        Ok(theme)
    }

    /// Render a resolved theme to the complete document text.
    ///
    /// This builds the fixed-shape diagram tree, looks up the layout
    /// parameters for that shape, and serializes the document in one
    /// pass. No external process is invoked; the caller decides what to
    /// do with the text.
    ///
    /// # Errors
    ///
    /// Returns `EmblemError` if the theme's node count disagrees with
    /// the fixed shape, or for invalid document options in the
    /// configuration.
    pub fn render_tex(&self, theme: &Theme) -> Result<String, EmblemError> {
        let document = self.config.document();
        let shape = Shape::default();

        info!(root_text = document.root_text(); "Building diagram tree");
        let root = tree::build(theme, document.root_text(), shape)?;

        let layout = LayoutParameters::for_shape(shape)?;
        debug!("Layout parameters resolved");

        let nav = document
            .nav_text()
            .map(|text| NavVariant::new(text.split('|').map(String::from).collect()));

        let tex = TexBuilder::new()
            .with_font(self.config.style().font())
            .with_convert(document.format().map_err(EmblemError::Config)?)
            .with_root_font(document.root_font_style(), document.root_font_size())
            .with_nav(nav)
            .render(theme, &root, &layout);

        info!(bytes = tex.len(); "Document rendered successfully");
        Ok(tex)
    }
}
