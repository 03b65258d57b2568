//! Coordinate types and algorithms for triangular grids.
//!
//! ## The Orientation Rule
//!
//! A triangular tessellation alternates cells that point up with cells
//! that point down, and nearly everything interesting about the grid
//! flows from one rule: **orientation is a function of position, never
//! stored**. A cell points up iff `q + r` is even (equivalently, iff its
//! cube `y` component is even). The parity check reads the low bit, so
//! it gives the right answer for negative coordinates, where truncating
//! division would not.
//!
//! Deriving orientation instead of storing it means the two can never
//! disagree, conversions never have to carry a flag along, and any code
//! that needs the pointing direction asks the coordinate
//! ([TriAxial::orientation]). The price is that direction vectors are
//! not constants: stepping "across the base" from an upward cell moves
//! the other way than from a downward one, so every vector lookup in
//! [TriDirection] takes the orientation as an argument.
//!
//! ## Coordinate Systems
//!
//! The cube, axial, and offset systems mirror their hex counterparts,
//! including the rule that axial is the canonical pivot for all
//! conversions and algorithms. Cells sit on the same `x + y + z = 0`
//! lattice a hex grid uses; the tessellations differ in adjacency, not
//! in algebra, which is why distance and region queries carry over
//! nearly unchanged. There is no doubled form for triangles.
//!
//! Rows map to horizontal strips of the plane. An offset coordinate is
//! a column index within a row, shifted every other row; since the
//! shift depends only on row parity there is a single offset scheme,
//! not the odd/even pair hexes need.
//!
//! ## Adjacency
//!
//! A triangle touches three cells over its edges ([TriAxial::neighbors])
//! but shares corners with nine more ([TriAxial::vertex_neighbors]), a
//! much richer corner adjacency than hexes have. Distance is the same
//! Chebyshev metric as the hex grid, measured on the shared cube
//! lattice; see the [algorithm module notes](TriAxial::distance_to) for
//! how that interacts with edge-only movement.

mod algorithm;
mod direction;
mod layout;
mod unit;

pub use self::{algorithm::*, direction::*, layout::*, unit::*};

use fnv::FnvBuildHasher;
use indexmap::IndexMap;
use std::collections::{HashMap, HashSet};

/// A set of triangle cells, keyed in the canonical axial form
pub type TriPointSet = HashSet<TriAxial, FnvBuildHasher>;
/// A map of triangle cells to some `T`
pub type TriPointMap<T> = HashMap<TriAxial, T, FnvBuildHasher>;
/// An ORDERED map of triangle cells to some `T`. The ordering costs
/// extra memory, so reach for this only when iteration order actually
/// matters.
pub type TriPointIndexMap<T> = IndexMap<TriAxial, T, FnvBuildHasher>;
/// A map of triangle directions to some `T`
pub type TriDirectionMap<T> = HashMap<TriDirection, T, FnvBuildHasher>;
