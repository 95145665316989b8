//! LaTeX/TikZ document serialization.
//!
//! [`TexBuilder`] walks a resolved theme and its diagram tree and emits
//! the complete document text in one pass: preamble, color declarations,
//! the mindmap picture, the optional navigation block, and the document
//! close. The output is a pure function of its inputs; rendering the same
//! theme and tree twice yields byte-identical text.

use std::{fmt, str::FromStr};

use indexmap::IndexMap;
use log::debug;

use emblem_core::{
    color::{ColorCode, ColorEntry},
    layout::LayoutParameters,
    theme::Theme,
    tree::DiagramNode,
};

/// Conversion format requested from the typesetting engine through the
/// document class options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Png,
    Svg,
    Jpg,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ext = match self {
            OutputFormat::Png => "png",
            OutputFormat::Svg => "svg",
            OutputFormat::Jpg => "jpg",
        };
        write!(f, "{ext}")
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "png" => Ok(OutputFormat::Png),
            "svg" => Ok(OutputFormat::Svg),
            "jpg" => Ok(OutputFormat::Jpg),
            other => Err(format!(
                "unrecognized output format '{other}' (expected png, svg, or jpg)"
            )),
        }
    }
}

/// The auxiliary navigation variant: a simplified text-only block
/// rendered alongside the main diagram for index and navigation contexts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavVariant {
    lines: Vec<String>,
    font_style: String,
    font_size: String,
}

impl NavVariant {
    /// Creates a navigation variant from its text lines.
    pub fn new(lines: Vec<String>) -> Self {
        Self {
            lines,
            font_style: "bfseries".to_string(),
            font_size: "Huge".to_string(),
        }
    }

    /// Replaces the font style and size commands.
    pub fn with_font(mut self, style: impl Into<String>, size: impl Into<String>) -> Self {
        self.font_style = style.into();
        self.font_size = size.into();
        self
    }
}

/// Font size command for the child level, matching the published logo.
const LEVEL1_FONT_SIZE: &str = "Huge";

/// Builder for the logo document text.
///
/// # Examples
///
/// ```
/// use emblem::export::tex::TexBuilder;
/// use emblem_core::{
///     layout::LayoutParameters,
///     palette::{Background, BuiltinPalette},
///     theme::{Theme, ThemeSpec},
///     tree::{self, Shape},
/// };
///
/// # fn main() -> Result<(), emblem_core::Error> {
/// let theme = Theme::resolve(
///     &ThemeSpec::Builtin(BuiltinPalette::Canon2020),
///     Background::Transparent,
/// )?;
/// let root = tree::build(&theme, "PySAL", Shape::default())?;
/// let layout = LayoutParameters::for_shape(Shape::default())?;
///
/// let tex = TexBuilder::new().render(&theme, &root, &layout);
/// assert!(tex.starts_with(r"\documentclass"));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct TexBuilder {
    font: String,
    color_model: String,
    convert: Option<OutputFormat>,
    root_font_style: String,
    root_font_size: String,
    nav: Option<NavVariant>,
}

impl Default for TexBuilder {
    fn default() -> Self {
        Self {
            font: "M+ 1mn".to_string(),
            color_model: "RGB".to_string(),
            convert: None,
            root_font_style: "bfseries".to_string(),
            root_font_size: "large".to_string(),
            nav: None,
        }
    }
}

impl TexBuilder {
    /// Creates a builder with the published logo's defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the document font.
    pub fn with_font(mut self, font: impl Into<String>) -> Self {
        self.font = font.into();
        self
    }

    /// Sets the color coordinate system used in `\definecolor`.
    pub fn with_color_model(mut self, model: impl Into<String>) -> Self {
        self.color_model = model.into();
        self
    }

    /// Requests a format conversion from the typesetting engine, or
    /// `None` to emit only the primary artifact.
    pub fn with_convert(mut self, format: Option<OutputFormat>) -> Self {
        self.convert = format;
        self
    }

    /// Sets the font style and size commands for the root text.
    pub fn with_root_font(mut self, style: impl Into<String>, size: impl Into<String>) -> Self {
        self.root_font_style = style.into();
        self.root_font_size = size.into();
        self
    }

    /// Attaches the navigation variant block.
    pub fn with_nav(mut self, nav: Option<NavVariant>) -> Self {
        self.nav = nav;
        self
    }

    /// Serializes the complete document text.
    ///
    /// Emission order is fixed: preamble and color declarations, the
    /// picture environment (with the background directive omitted for a
    /// transparent canvas), the root node, each child with its leaves in
    /// tree order, the picture close, the optional navigation block, and
    /// the document close.
    pub fn render(&self, theme: &Theme, root: &DiagramNode, layout: &LayoutParameters) -> String {
        let mut out = String::new();

        self.write_preamble(&mut out, theme, root);
        self.write_picture_open(&mut out, theme, layout);
        self.write_nodes(&mut out, root);
        out.push_str("    ;\n");
        out.push_str("\\end{tikzpicture}\n");
        if let Some(nav) = &self.nav {
            self.write_nav_block(&mut out, theme, nav);
        }
        out.push_str("\\end{document}\n");

        debug!(bytes = out.len(); "Document text serialized");
        out
    }

    fn write_preamble(&self, out: &mut String, theme: &Theme, root: &DiagramNode) {
        match self.convert {
            Some(format) => out.push_str(&format!(
                "\\documentclass[tikz,convert={{outfile=\\jobname.{format}}}]{{standalone}}\n"
            )),
            None => out.push_str("\\documentclass[tikz]{standalone}\n"),
        }
        out.push_str("\\usetikzlibrary{mindmap,trees,backgrounds}\n");
        out.push_str("\\usepackage{fontspec}\n");
        out.push_str("\\defaultfontfeatures{Ligatures=TeX,Scale=3}\n");
        out.push_str(&format!("\\setmainfont{{{}}}\n", self.font));

        for (name, code) in declared_colors(theme, root) {
            match code {
                ColorCode::Rgb(..) => out.push_str(&format!(
                    "\\definecolor{{{name}}}{{{}}}{{{code}}}\n",
                    self.color_model
                )),
                ColorCode::Formula(expr) => {
                    out.push_str(&format!("\\colorlet{{{name}}}[rgb]{{{expr}}}\n"));
                }
            }
        }

        out.push_str("\\begin{document}\n");
    }

    fn write_picture_open(&self, out: &mut String, theme: &Theme, layout: &LayoutParameters) {
        out.push_str("\\begin{tikzpicture}[\n");
        if let Some(background) = theme.background() {
            out.push_str(&format!(
                "    background rectangle/.style={{fill={}}},\n",
                background.name()
            ));
            out.push_str("    show background rectangle,\n");
        }
        out.push_str("    mindmap,\n");
        out.push_str("    grow cyclic,\n");
        out.push_str("    every node/.style=concept,\n");
        out.push_str(&format!("    concept color={},\n", theme.concept().name()));
        out.push_str(&format!("    text={},\n", theme.text().name()));
        out.push_str(&format!(
            "    level 1/.append style={{\n        level distance={},\n        \
             sibling angle={},\n        font=\\{}\n    }},\n",
            layout.level1().distance(),
            layout.level1().angle(),
            LEVEL1_FONT_SIZE
        ));
        out.push_str(&format!(
            "    level 2/.append style={{\n        level distance={},\n        \
             sibling angle={}\n    }}\n",
            layout.level2().distance(),
            layout.level2().angle()
        ));
        out.push_str("]\n");
    }

    fn write_nodes(&self, out: &mut String, root: &DiagramNode) {
        let concept = root.color().map(ColorEntry::name).unwrap_or_default();
        out.push_str(&format!(
            "    \\node[concept color={concept}]{{\\{}\\{}{{{}}}}}\n",
            self.root_font_size,
            self.root_font_style,
            root.label().unwrap_or_default()
        ));

        for child in root.children() {
            out.push_str(&format!(
                "        child [concept color={}]{{ node {{{}}}\n",
                child.color().map(ColorEntry::name).unwrap_or_default(),
                child.label().unwrap_or_default()
            ));
            for _ in child.children() {
                out.push_str("            child { node { }}\n");
            }
            out.push_str("        }\n");
        }
    }

    fn write_nav_block(&self, out: &mut String, theme: &Theme, nav: &NavVariant) {
        out.push_str("\\begin{tikzpicture}\n");
        out.push_str(&format!(
            "    \\node[text={}, align=center, font=\\{}\\{}]{{{}}};\n",
            theme.concept().name(),
            nav.font_size,
            nav.font_style,
            nav.lines.join(r"\\")
        ));
        out.push_str("\\end{tikzpicture}\n");
    }
}

/// Collects every distinct color referenced by the theme or tree, keyed
/// by name in first-seen order. A name referenced from several positions
/// is declared exactly once.
fn declared_colors<'a>(theme: &'a Theme, root: &'a DiagramNode) -> IndexMap<&'a str, &'a ColorCode> {
    let mut declared = IndexMap::new();

    for style in theme.nodes() {
        declared
            .entry(style.color().name())
            .or_insert(style.color().code());
    }
    for entry in [theme.background(), Some(theme.concept()), Some(theme.text())]
        .into_iter()
        .flatten()
    {
        declared.entry(entry.name()).or_insert(entry.code());
    }
    for node in std::iter::once(root).chain(root.children()) {
        if let Some(color) = node.color() {
            declared.entry(color.name()).or_insert(color.code());
        }
    }

    declared
}
