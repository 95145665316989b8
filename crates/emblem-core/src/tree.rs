//! The fixed-shape mindmap tree.
//!
//! The logo is a depth-three hierarchy: one root, a fixed number of
//! children, and a fixed number of unlabeled grandchild leaves per child.
//! The builder performs no rebalancing and no sharing of structurally
//! identical subtrees; every grandchild is a distinct leaf. The tree is
//! tiny and built fresh for every render, so there is nothing to optimize.

use log::debug;

use crate::{
    color::ColorEntry,
    error::Error,
    palette::{CHILD_NODES, GRANDCHILD_NODES},
    theme::Theme,
};

/// Position of a node within the hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Root,
    Child,
    Grandchild,
}

/// The fixed child and grandchild counts for a logo.
///
/// Centralized here so the counts are validated once, at the tree-builder
/// boundary, rather than hard-coded at each use site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shape {
    /// Number of children attached to the root (K).
    pub children: usize,

    /// Number of grandchild leaves attached to each child (G).
    pub grandchildren: usize,
}

impl Default for Shape {
    fn default() -> Self {
        Self {
            children: CHILD_NODES,
            grandchildren: GRANDCHILD_NODES,
        }
    }
}

/// One node of the mindmap tree.
///
/// Root and child nodes carry a color and a label. Grandchildren are
/// bare leaves; they inherit their parent's color visually through the
/// rendering engine's gradient, which is a rendering-time effect and not
/// a stored attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagramNode {
    kind: NodeKind,
    color: Option<ColorEntry>,
    label: Option<String>,
    children: Vec<DiagramNode>,
}

impl DiagramNode {
    /// Returns the node's position within the hierarchy.
    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    /// Returns the node's color, if it carries one.
    pub fn color(&self) -> Option<&ColorEntry> {
        self.color.as_ref()
    }

    /// Returns the node's label, if it carries one.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Returns the node's children in angular order.
    pub fn children(&self) -> &[DiagramNode] {
        &self.children
    }
}

/// Builds the mindmap tree for a resolved theme.
///
/// The root carries the theme's concept color and the given label; each
/// theme node style becomes one child, in input order, with `shape.grandchildren`
/// unlabeled leaves attached.
///
/// # Errors
///
/// Returns [`Error::ChildCountMismatch`] if the theme's node count
/// disagrees with `shape.children`.
pub fn build(theme: &Theme, root_label: &str, shape: Shape) -> Result<DiagramNode, Error> {
    if theme.nodes().len() != shape.children {
        return Err(Error::ChildCountMismatch {
            expected: shape.children,
            actual: theme.nodes().len(),
        });
    }

    let children = theme
        .nodes()
        .iter()
        .map(|style| {
            let leaves = (0..shape.grandchildren)
                .map(|_| DiagramNode {
                    kind: NodeKind::Grandchild,
                    color: None,
                    label: None,
                    children: Vec::new(),
                })
                .collect();
            DiagramNode {
                kind: NodeKind::Child,
                color: Some(style.color().clone()),
                label: Some(style.label().to_string()),
                children: leaves,
            }
        })
        .collect();

    debug!(
        children = shape.children,
        grandchildren = shape.grandchildren;
        "Diagram tree built"
    );

    Ok(DiagramNode {
        kind: NodeKind::Root,
        color: Some(theme.concept().clone()),
        label: Some(root_label.to_string()),
        children,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        palette::{Background, BuiltinPalette},
        theme::{NodeStyle, ThemeSpec},
    };

    fn explicit_theme(count: usize) -> Theme {
        let styles = (0..count)
            .map(|i| NodeStyle::new(ColorEntry::rgb(format!("c{i}"), i as u8, 0, 0), ""))
            .collect();
        Theme::resolve(&ThemeSpec::Explicit(styles), Background::Transparent)
            .expect("explicit specs always resolve")
    }

    #[test]
    fn standard_shape_builds_one_root_seven_children_21_leaves() {
        let theme = Theme::resolve(
            &ThemeSpec::Builtin(BuiltinPalette::Traditional),
            Background::Transparent,
        )
        .unwrap();
        let root = build(&theme, "PySAL", Shape::default()).expect("standard shape builds");

        assert_eq!(root.kind(), NodeKind::Root);
        assert_eq!(root.label(), Some("PySAL"));
        assert_eq!(root.children().len(), 7);
        for child in root.children() {
            assert_eq!(child.kind(), NodeKind::Child);
            assert_eq!(child.children().len(), 3);
            for leaf in child.children() {
                assert_eq!(leaf.kind(), NodeKind::Grandchild);
                assert_eq!(leaf.color(), None);
                assert_eq!(leaf.label(), None);
                assert!(leaf.children().is_empty());
            }
        }
    }

    #[test]
    fn children_keep_the_input_order() {
        let theme = explicit_theme(7);
        let root = build(&theme, "", Shape::default()).unwrap();

        let names: Vec<&str> = root
            .children()
            .iter()
            .filter_map(|c| c.color().map(ColorEntry::name))
            .collect();
        assert_eq!(names, ["c0", "c1", "c2", "c3", "c4", "c5", "c6"]);
    }

    #[test]
    fn six_or_eight_children_are_rejected() {
        for count in [6, 8] {
            let err = build(&explicit_theme(count), "", Shape::default()).unwrap_err();
            assert_eq!(
                err,
                Error::ChildCountMismatch {
                    expected: 7,
                    actual: count
                }
            );
        }
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn shape_validation_matches_node_count(count in 0usize..12) {
                let result = build(&explicit_theme(count), "", Shape::default());
                if count == 7 {
                    let root = result.expect("seven children fit the standard shape");
                    prop_assert_eq!(root.children().len(), 7);
                    let leaves: usize = root.children().iter().map(|c| c.children().len()).sum();
                    prop_assert_eq!(leaves, 21);
                } else {
                    prop_assert!(result.is_err());
                }
            }
        }
    }
}
