//! Theme resolution.
//!
//! A [`Theme`] is the fully resolved color bundle for one logo instance:
//! an ordered sequence of child-node styles, an optional background fill,
//! and the concept and text colors for the root. Themes are built once,
//! rendered once, and discarded; nothing mutates them after construction.
//!
//! Ordering is semantically meaningful. The position of a node style in
//! the sequence is its angular position around the root, so resolution
//! preserves input order exactly.

use log::debug;

use crate::{
    color::ColorEntry,
    error::Error,
    palette::{self, Background, BuiltinPalette},
};

/// The color and label for one child node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeStyle {
    color: ColorEntry,
    label: String,
}

impl NodeStyle {
    /// Creates a node style from a color entry and a label.
    pub fn new(color: ColorEntry, label: impl Into<String>) -> Self {
        Self {
            color,
            label: label.into(),
        }
    }

    /// Returns the node's color entry.
    pub fn color(&self) -> &ColorEntry {
        &self.color
    }

    /// Returns the node's label text.
    pub fn label(&self) -> &str {
        &self.label
    }
}

/// Specification of the child-node colors for a logo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThemeSpec {
    /// A named built-in palette; labels default to empty.
    Builtin(BuiltinPalette),

    /// Positional color names, each looked up in the static color table;
    /// labels default to empty.
    Named(Vec<String>),

    /// Fully specified node styles, passed through unchanged.
    Explicit(Vec<NodeStyle>),
}

/// A resolved, concrete color bundle for one logo instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    nodes: Vec<NodeStyle>,
    background: Option<ColorEntry>,
    concept: ColorEntry,
    text: ColorEntry,
}

impl Theme {
    /// Resolves a theme specification against the static color table.
    ///
    /// Input order is preserved: the first node style ends up at the
    /// first angular position. Duplicate color names are kept as-is;
    /// deduplication happens only when declarations are emitted.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownColor`] if a referenced name is absent
    /// from the color table. No tree or document construction happens
    /// after a resolution failure.
    pub fn resolve(spec: &ThemeSpec, background: Background) -> Result<Self, Error> {
        let nodes = match spec {
            ThemeSpec::Builtin(palette) => palette
                .node_colors()
                .into_iter()
                .map(|color| NodeStyle::new(color, ""))
                .collect(),
            ThemeSpec::Named(names) => names
                .iter()
                .map(|name| Ok(NodeStyle::new(palette::lookup(name)?, "")))
                .collect::<Result<Vec<_>, Error>>()?,
            ThemeSpec::Explicit(styles) => styles.clone(),
        };

        debug!(node_count = nodes.len(), background:?; "Theme resolved");

        Ok(Self {
            nodes,
            background: background.fill(),
            concept: palette::default_concept_color(),
            text: palette::default_text_color(),
        })
    }

    /// Replaces the child-node labels, keeping colors and order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::LabelCountMismatch`] if the label count differs
    /// from the node count.
    pub fn with_labels<S: AsRef<str>>(mut self, labels: &[S]) -> Result<Self, Error> {
        if labels.len() != self.nodes.len() {
            return Err(Error::LabelCountMismatch {
                labels: labels.len(),
                children: self.nodes.len(),
            });
        }
        for (node, label) in self.nodes.iter_mut().zip(labels) {
            node.label = label.as_ref().to_string();
        }
        Ok(self)
    }

    /// Replaces the root concept color.
    pub fn with_concept_color(mut self, concept: ColorEntry) -> Self {
        self.concept = concept;
        self
    }

    /// Replaces the root text color.
    pub fn with_text_color(mut self, text: ColorEntry) -> Self {
        self.text = text;
        self
    }

    /// Returns the child-node styles in angular order.
    pub fn nodes(&self) -> &[NodeStyle] {
        &self.nodes
    }

    /// Returns the background fill, or `None` for a transparent canvas.
    pub fn background(&self) -> Option<&ColorEntry> {
        self.background.as_ref()
    }

    /// Returns the root concept color.
    pub fn concept(&self) -> &ColorEntry {
        &self.concept
    }

    /// Returns the root text color.
    pub fn text(&self) -> &ColorEntry {
        &self.text
    }
}
