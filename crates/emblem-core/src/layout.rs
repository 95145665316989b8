//! Per-level layout parameters for the mindmap picture.
//!
//! Layout is a small explicit table keyed by the tree shape, not a
//! geometry solver. Each level pairs a radial distance with a sibling
//! angle (the angular spread between adjacent nodes on that level).

use crate::{error::Error, tree::Shape};

/// Radial distance and sibling angle for one tree level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelLayout {
    distance: &'static str,
    angle: &'static str,
}

impl LevelLayout {
    /// Returns the radial distance from the parent level, e.g. `5cm`.
    pub fn distance(&self) -> &'static str {
        self.distance
    }

    /// Returns the sibling angle in degrees, e.g. `51`.
    pub fn angle(&self) -> &'static str {
        self.angle
    }
}

/// Layout parameters for the child and grandchild levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutParameters {
    level1: LevelLayout,
    level2: LevelLayout,
}

impl LayoutParameters {
    /// Looks up the layout parameters for a tree shape.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedShape`] for shapes with no table
    /// entry. Only the standard seven-children, three-grandchildren
    /// shape is defined.
    pub fn for_shape(shape: Shape) -> Result<Self, Error> {
        match (shape.children, shape.grandchildren) {
            (7, 3) => Ok(Self {
                level1: LevelLayout {
                    distance: "5cm",
                    angle: "51",
                },
                level2: LevelLayout {
                    distance: "3cm",
                    angle: "45",
                },
            }),
            (children, grandchildren) => Err(Error::UnsupportedShape {
                children,
                grandchildren,
            }),
        }
    }

    /// Returns the layout for the child level.
    pub fn level1(&self) -> &LevelLayout {
        &self.level1
    }

    /// Returns the layout for the grandchild level.
    pub fn level2(&self) -> &LevelLayout {
        &self.level2
    }
}
