//! Integration tests for the LogoBuilder API
//!
//! These tests verify that the public API works and that the emitted
//! document satisfies its structural guarantees.

use emblem::{
    LogoBuilder,
    config::{AppConfig, DocumentConfig, StyleConfig},
    palette::BuiltinPalette,
    theme::{NodeStyle, ThemeSpec},
};
use emblem_core::color::ColorEntry;

fn config_with_background(background: &str) -> AppConfig {
    AppConfig::new(
        StyleConfig::new(Some(background.to_string()), None),
        DocumentConfig::default(),
    )
}

#[test]
fn test_builder_api_exists() {
    // Just verify the API compiles and can be constructed
    let _builder = LogoBuilder::default();
}

#[test]
fn test_render_builtin_palette() {
    let builder = LogoBuilder::default();
    let theme = builder
        .resolve(&ThemeSpec::Builtin(BuiltinPalette::Canon2020))
        .expect("Failed to resolve theme");
    let tex = builder.render_tex(&theme).expect("Failed to render");

    assert!(tex.starts_with("\\documentclass"), "Output should be a document");
    assert!(tex.ends_with("\\end{document}\n"), "Output should be complete");
    assert!(tex.contains("\\begin{tikzpicture}"), "Output should open a picture");
}

#[test]
fn test_rendering_twice_is_byte_identical() {
    let builder = LogoBuilder::default();
    let theme = builder
        .resolve(&ThemeSpec::Builtin(BuiltinPalette::Traditional))
        .expect("Failed to resolve theme");

    let first = builder.render_tex(&theme).expect("Failed to render");
    let second = builder.render_tex(&theme).expect("Failed to render");
    assert_eq!(first, second, "Rendering must be deterministic");
}

#[test]
fn test_seven_children_each_with_three_leaves() {
    let builder = LogoBuilder::new(config_with_background("light"));
    let theme = builder
        .resolve(&ThemeSpec::Builtin(BuiltinPalette::Canon2020))
        .expect("Failed to resolve theme");
    let tex = builder.render_tex(&theme).expect("Failed to render");

    assert_eq!(tex.matches("child [concept color=").count(), 7);
    assert_eq!(tex.matches("child { node { }}").count(), 21);

    // Each child directive is immediately followed by exactly three leaves
    for block in tex.split("child [concept color=").skip(1) {
        let body = block.split("        }").next().expect("child block is closed");
        assert_eq!(body.matches("child { node { }}").count(), 3);
    }
}

#[test]
fn test_light_background_paints_the_canvas_once() {
    let builder = LogoBuilder::new(config_with_background("light"));
    let theme = builder
        .resolve(&ThemeSpec::Builtin(BuiltinPalette::Canon2020))
        .expect("Failed to resolve theme");
    let tex = builder.render_tex(&theme).expect("Failed to render");

    assert_eq!(
        tex.matches("background rectangle/.style={fill=white}").count(),
        1,
        "Exactly one background directive should appear"
    );
    assert!(
        tex.contains("\\definecolor{white}{RGB}{255, 255, 255}"),
        "The background color should be declared"
    );
}

#[test]
fn test_transparent_background_omits_the_directive() {
    let builder = LogoBuilder::new(config_with_background("transparent"));
    let theme = builder
        .resolve(&ThemeSpec::Builtin(BuiltinPalette::Canon2020))
        .expect("Failed to resolve theme");
    let tex = builder.render_tex(&theme).expect("Failed to render");

    assert!(
        !tex.contains("background rectangle"),
        "Transparent canvas must not emit a background directive"
    );
}

#[test]
fn test_each_distinct_color_is_declared_once() {
    let builder = LogoBuilder::new(config_with_background("light"));
    let theme = builder
        .resolve(&ThemeSpec::Builtin(BuiltinPalette::Canon2020))
        .expect("Failed to resolve theme");
    let tex = builder.render_tex(&theme).expect("Failed to render");

    // 7 node colors + white (background and text share it) + dimgray
    assert_eq!(tex.matches("\\definecolor{").count(), 9);
    for name in ["metallic", "tc", "yellow", "shamrock", "nvy", "vio", "orng"] {
        assert_eq!(
            tex.matches(&format!("\\definecolor{{{name}}}")).count(),
            1,
            "color '{name}' should be declared exactly once"
        );
    }
    assert_eq!(tex.matches("\\definecolor{white}").count(), 1);
    assert_eq!(tex.matches("\\definecolor{dimgray}").count(), 1);
}

#[test]
fn test_unknown_color_is_rejected_before_rendering() {
    let builder = LogoBuilder::default();
    let result = builder.resolve(&ThemeSpec::Named(vec![
        "blue".to_string(),
        "heliotrope".to_string(),
    ]));
    assert!(result.is_err(), "Unknown colors must fail resolution");
}

#[test]
fn test_wrong_child_count_is_rejected() {
    let builder = LogoBuilder::default();

    for count in [6, 8] {
        let styles: Vec<NodeStyle> = (0..count)
            .map(|i| NodeStyle::new(ColorEntry::rgb(format!("c{i}"), 1, 2, 3), ""))
            .collect();
        let theme = builder
            .resolve(&ThemeSpec::Explicit(styles))
            .expect("Explicit specs resolve without shape checks");

        let result = builder.render_tex(&theme);
        assert!(
            result.is_err(),
            "{count} children should be rejected by the tree builder"
        );
    }
}

#[test]
fn test_invalid_background_in_config_is_reported() {
    let builder = LogoBuilder::new(config_with_background("plaid"));
    let result = builder.resolve(&ThemeSpec::Builtin(BuiltinPalette::Canon2020));
    assert!(result.is_err(), "Invalid background selection should fail");
}

#[test]
fn test_root_text_and_nav_variant() {
    let config = AppConfig::new(
        StyleConfig::default(),
        DocumentConfig::new(
            Some("PySAL".to_string()),
            None,
            None,
            Some("svg".to_string()),
            Some("PySAL|spatial analysis".to_string()),
        ),
    );
    let builder = LogoBuilder::new(config);
    let theme = builder
        .resolve(&ThemeSpec::Builtin(BuiltinPalette::Canon2020))
        .expect("Failed to resolve theme");
    let tex = builder.render_tex(&theme).expect("Failed to render");

    assert!(tex.contains("{\\large\\bfseries{PySAL}}"), "Root text should appear");
    assert!(
        tex.contains("convert={outfile=\\jobname.svg}"),
        "Conversion directive should request svg output"
    );
    assert!(
        tex.contains(r"PySAL\\spatial analysis"),
        "Nav lines should be joined with a line break"
    );
}

#[test]
fn test_builder_reusability() {
    let builder = LogoBuilder::default();

    let theme1 = builder
        .resolve(&ThemeSpec::Builtin(BuiltinPalette::CbQualPairedN7))
        .expect("Failed to resolve theme1");
    let theme2 = builder
        .resolve(&ThemeSpec::Builtin(BuiltinPalette::CbQualSet1N7))
        .expect("Failed to resolve theme2");

    let tex1 = builder.render_tex(&theme1).expect("Failed to render theme1");
    let tex2 = builder.render_tex(&theme2).expect("Failed to render theme2");

    assert!(tex1.contains("\\definecolor{beige}"), "First render should be valid");
    assert!(tex2.contains("\\definecolor{purple}"), "Second render should be valid");
}
