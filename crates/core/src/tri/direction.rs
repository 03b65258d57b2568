use crate::{direction::GridDirection, tri::unit::TriOrientation};
use serde::{Deserialize, Serialize};
use strum::EnumIter;

/// The three directions to a triangle's edge-adjacent neighbors.
///
/// Unlike hex directions these have no fixed vectors: the step depends
/// on which way the cell points, so every vector lookup takes the
/// orientation, and callers must derive that orientation from the
/// coordinate being stepped. An upward and a downward cell use mirrored
/// vertical steps, which is exactly what makes edge crossings flip
/// orientation.
#[derive(
    Copy, Clone, Debug, EnumIter, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum TriDirection {
    /// Across the left slanted edge
    Left,
    /// Across the right slanted edge
    Right,
    /// Across the horizontal edge: downward on screen for an upward
    /// cell, upward for a downward cell
    Base,
}

impl TriDirection {
    /// Get the axial vector that moves a coordinate of the given
    /// orientation one step across this edge
    pub const fn to_axial_vector(
        self,
        orientation: TriOrientation,
    ) -> (i32, i32) {
        match (self, orientation) {
            (Self::Left, _) => (-1, 0),
            (Self::Right, _) => (1, 0),
            (Self::Base, TriOrientation::Up) => (0, -1),
            (Self::Base, TriOrientation::Down) => (0, 1),
        }
    }

    /// Get the cube vector for this edge at the given orientation.
    /// Always sums to zero.
    pub const fn to_cube_vector(
        self,
        orientation: TriOrientation,
    ) -> (i32, i32, i32) {
        let (q, r) = self.to_axial_vector(orientation);
        (q, -q - r, r)
    }

    /// Get the direction that steps back across the same edge from the
    /// neighbor's side. The neighbor points the other way, so its base
    /// is our base and its left is our right.
    pub const fn mirrored(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
            Self::Base => Self::Base,
        }
    }
}

impl GridDirection for TriDirection {
    const ALL: &'static [Self] = &[Self::Left, Self::Right, Self::Base];

    fn index(self) -> usize {
        self as usize
    }
}
