//! CLI logic for the Emblem logo tool.
//!
//! This module contains the core CLI logic for the Emblem logo tool.

mod args;
mod config;

pub use args::Args;

use std::fs;

use log::info;

use emblem::{
    EmblemError, LogoBuilder,
    config::{AppConfig, DocumentConfig, StyleConfig},
    palette::{self, BuiltinPalette},
    theme::ThemeSpec,
};

/// Run the Emblem CLI application
///
/// This function resolves the selected palette through the Emblem
/// pipeline and writes the resulting TeX document to the output file.
/// Compiling the document and converting the artifact are left to the
/// external typesetting toolchain.
///
/// # Errors
///
/// Returns `EmblemError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Unknown palette, color, background, or label-set names
/// - Shape or layout errors
pub fn run(args: &Args) -> Result<(), EmblemError> {
    info!(
        palette = args.palette,
        output_path = args.output;
        "Generating logo document"
    );

    // Load configuration and apply command-line overrides
    let file_config = config::load_config(args.config.as_ref())?;
    let app_config = merge_config(&file_config, args);

    let selected: BuiltinPalette = args.palette.parse()?;

    // Process the logo using the LogoBuilder API
    let builder = LogoBuilder::new(app_config);
    let theme = builder.resolve(&ThemeSpec::Builtin(selected))?;
    let theme = match args.labels.as_str() {
        "none" => theme,
        "greek" => theme.with_labels(&palette::greek_labels())?,
        "bullets" => theme.with_labels(&palette::bullet_labels())?,
        other => {
            return Err(EmblemError::Config(format!(
                "unrecognized label set '{other}' (expected none, greek, or bullets)"
            )));
        }
    };
    let tex = builder.render_tex(&theme)?;

    // Write output file
    fs::write(&args.output, tex)?;

    info!(output_file = args.output; "Document written successfully");

    Ok(())
}

/// Overlay command-line selections on top of the loaded configuration.
fn merge_config(file: &AppConfig, args: &Args) -> AppConfig {
    let style = StyleConfig::new(
        args.background
            .clone()
            .or_else(|| file.style().background_name().map(String::from)),
        file.style().font_name().map(String::from),
    );
    let document = DocumentConfig::new(
        args.root_text
            .clone()
            .or_else(|| file.document().root_text_raw().map(String::from)),
        Some(file.document().root_font_style().to_string()),
        Some(file.document().root_font_size().to_string()),
        args.format
            .clone()
            .or_else(|| file.document().format_raw().map(String::from)),
        args.nav_text
            .clone()
            .or_else(|| file.document().nav_text().map(String::from)),
    );
    AppConfig::new(style, document)
}
