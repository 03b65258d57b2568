//! Coordinate types and algorithms for hexagonal grids.
//!
//! ## Coordinate Systems
//!
//! Hex grids get talked about in several coordinate systems, and this
//! module supports the four that show up in practice. They all describe
//! the same grid; they differ in what they make easy. The systems (and
//! most of the math behind them) follow [Amit Patel's hexagon
//! guide](https://www.redblobgames.com/grids/hexagons/), which explains
//! all of this far better than a doc comment can.
//!
//! ### Cube
//!
//! Each cell has three components with `x + y + z = 0`. The redundancy
//! buys symmetry: distance, rotation, and rounding all fall out of
//! treating cells as points on a diagonal plane through a 3D integer
//! lattice. [HexCube] enforces the zero-sum invariant at every
//! construction site, so no reachable value can violate it.
//!
//! ### Axial
//!
//! [HexAxial] keeps two of the cube components (`q = x`, `r = z`) and
//! drops the third, which is always recoverable as `-q - r`. This is the
//! **canonical pivot**: every conversion between any two systems routes
//! through axial, and the algorithms are implemented against axial with
//! the other systems delegating. Two conversions are cheaper to verify
//! than a full pairwise matrix, and it keeps subtle parity bugs confined
//! to one file.
//!
//! ### Offset
//!
//! [HexOffset] addresses cells by column and row the way a 2D array
//! would, which is what you want for rectangular map storage or
//! interchange with tools that think in rows. The catch is that every
//! other column is shifted half a cell, so there are two bookkeeping
//! conventions ([OffsetScheme::OddQ] and [OffsetScheme::EvenQ]) and
//! every conversion branches on column parity. Offset coordinates never
//! do their own geometry; even stepping to a neighbor goes through a
//! parity-indexed table derived from the axial vectors.
//!
//! ### Doubled
//!
//! [HexDoubled] doubles the row component (`col = q`, `row = 2r + q`) so
//! that `col + row` is always even. Interleaving like this keeps simple
//! integer arithmetic honest on grids that store two cells per logical
//! row. It is the one system where invalid values are representable
//! (odd `col + row`), so it carries validity checks and a
//! [HexDoubled::nearest_valid] repair.
//!
//! ## World Space
//!
//! Grid coordinates are pure algebra; [HexLayout] is what pins them to
//! continuous positions, with pointy-top and flat-top orientations and
//! an invertible pair of transforms. Boundary points resolve by a fixed
//! rounding priority, so the inverse is total over finite inputs.

mod algorithm;
mod direction;
mod layout;
mod unit;

pub use self::{algorithm::*, direction::*, layout::*, unit::*};

use fnv::FnvBuildHasher;
use indexmap::IndexMap;
use std::collections::{HashMap, HashSet};

/// A set of hex cells, keyed in the canonical axial form
pub type HexPointSet = HashSet<HexAxial, FnvBuildHasher>;
/// A map of hex cells to some `T`
pub type HexPointMap<T> = HashMap<HexAxial, T, FnvBuildHasher>;
/// An ORDERED map of hex cells to some `T`. The ordering costs extra
/// memory, so reach for this only when iteration order actually matters.
pub type HexPointIndexMap<T> = IndexMap<HexAxial, T, FnvBuildHasher>;
/// A map of hex directions to some `T`
pub type HexDirectionMap<T> = HashMap<HexDirection, T, FnvBuildHasher>;
