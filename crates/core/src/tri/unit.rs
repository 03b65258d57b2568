//! Basic value types for the triangular coordinate system. The defining
//! quirk of this tessellation is orientation: every cell points up or
//! down, and which one is a pure function of the coordinate value. See
//! the parent module documentation for the full picture.

use crate::{config::GridConfig, error::GridError};
use derive_more::{Display, From};
use serde::{Deserialize, Serialize};
use strum::EnumIter;

/// Which way a triangle points. Never stored anywhere: always derived
/// from the coordinate itself, so two representations of the same cell
/// cannot disagree.
#[derive(
    Copy,
    Clone,
    Debug,
    Display,
    EnumIter,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum TriOrientation {
    /// Apex away from the row base
    #[display(fmt = "up")]
    Up,
    /// Apex toward the row base
    #[display(fmt = "down")]
    Down,
}

impl TriOrientation {
    /// The opposite orientation. Every edge crossing flips it.
    pub const fn flipped(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
        }
    }
}

/// A triangle cell in cube form, on the same `x + y + z = 0` plane the
/// hex system uses. The lattice algebra carries over wholesale; what
/// changes is adjacency, which is orientation-dependent and narrower
/// (three edges, not six).
///
/// Orientation falls out of component parity: `y` even means upward.
/// `y = -(x + z) = -(q + r)`, so this is the same rule as the axial
/// parity test, just read off a different encoding.
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, Hash, Display, Serialize, Deserialize,
)]
#[display(fmt = "({}, {}, {})", "self.x()", "self.y()", "self.z()")]
pub struct TriCube {
    x: i32,
    y: i32,
}

impl TriCube {
    pub const ORIGIN: Self = Self::new_xy(0, 0);

    /// Construct a cell from all three components, validating the
    /// zero-sum invariant
    pub fn new(x: i32, y: i32, z: i32) -> Result<Self, GridError> {
        if x + y + z != 0 {
            Err(GridError::ZeroSumViolation { x, y, z })
        } else {
            Ok(Self::new_xy(x, y))
        }
    }

    pub const fn new_xy(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub const fn new_xz(x: i32, z: i32) -> Self {
        Self::new_xy(x, -x - z)
    }

    pub const fn new_yz(y: i32, z: i32) -> Self {
        Self::new_xy(-y - z, y)
    }

    pub const fn x(&self) -> i32 {
        self.x
    }

    pub const fn y(&self) -> i32 {
        self.y
    }

    pub const fn z(&self) -> i32 {
        -self.x - self.y
    }

    /// Orientation of this cell, read from the parity of `y`
    pub const fn orientation(&self) -> TriOrientation {
        if self.y & 1 == 0 {
            TriOrientation::Up
        } else {
            TriOrientation::Down
        }
    }

    pub const fn is_upward(&self) -> bool {
        matches!(self.orientation(), TriOrientation::Up)
    }

    /// Round fractional cube components to the nearest cell, recomputing
    /// the largest-error axis so the zero-sum invariant holds exactly.
    /// Ties resolve x first, then y, then z, same as the hex system.
    pub fn round(x: f64, y: f64, z: f64) -> Self {
        let rx = x.round();
        let ry = y.round();
        let rz = z.round();
        let dx = (rx - x).abs();
        let dy = (ry - y).abs();
        let dz = (rz - z).abs();
        if dx >= dy && dx >= dz {
            Self::new_yz(ry as i32, rz as i32)
        } else if dy >= dz {
            Self::new_xz(rx as i32, rz as i32)
        } else {
            Self::new_xy(rx as i32, ry as i32)
        }
    }

    pub const fn add(self, other: Self) -> Self {
        Self::new_xy(self.x + other.x, self.y + other.y)
    }

    pub const fn subtract(self, other: Self) -> Self {
        Self::new_xy(self.x - other.x, self.y - other.y)
    }

    pub const fn scale(self, factor: i32) -> Self {
        Self::new_xy(self.x * factor, self.y * factor)
    }

    pub fn check_in(&self, config: &GridConfig) -> Result<(), GridError> {
        self.to_axial().check_in(config)
    }

    pub fn check(&self) -> Result<(), GridError> {
        self.check_in(&GridConfig::default())
    }

    pub fn is_valid_in(&self, config: &GridConfig) -> bool {
        self.check_in(config).is_ok()
    }

    pub fn is_valid(&self) -> bool {
        self.check().is_ok()
    }

    pub const fn to_axial(self) -> TriAxial {
        TriAxial::new(self.x, self.z())
    }
}

/// A triangle cell in axial form, the canonical pivot for this
/// tessellation.
///
/// `r` indexes the horizontal strip, `q` the position within it, in
/// half-edge steps: neighboring cells in a strip overlap horizontally,
/// which is why consecutive `q` values alternate orientation. A cell
/// points up exactly when `q + r` is even.
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, Hash, Display, Serialize, Deserialize,
)]
#[display(fmt = "({}, {})", "self.q", "self.r")]
pub struct TriAxial {
    pub q: i32,
    pub r: i32,
}

impl TriAxial {
    pub const ORIGIN: Self = Self::new(0, 0);

    pub const fn new(q: i32, r: i32) -> Self {
        Self { q, r }
    }

    /// Orientation of this cell, read from the parity of `q + r`
    pub const fn orientation(&self) -> TriOrientation {
        if (self.q + self.r) & 1 == 0 {
            TriOrientation::Up
        } else {
            TriOrientation::Down
        }
    }

    pub const fn is_upward(&self) -> bool {
        matches!(self.orientation(), TriOrientation::Up)
    }

    pub const fn to_cube(self) -> TriCube {
        TriCube::new_xz(self.q, self.r)
    }

    pub const fn to_offset(self) -> TriOffset {
        TriOffset::from_axial(self)
    }

    /// Round fractional axial components to the nearest cell
    pub fn round(q: f64, r: f64) -> Self {
        TriCube::round(q, -q - r, r).to_axial()
    }

    pub const fn add(self, other: Self) -> Self {
        Self::new(self.q + other.q, self.r + other.r)
    }

    pub const fn subtract(self, other: Self) -> Self {
        Self::new(self.q - other.q, self.r - other.r)
    }

    pub const fn scale(self, factor: i32) -> Self {
        Self::new(self.q * factor, self.r * factor)
    }

    pub fn check_in(&self, config: &GridConfig) -> Result<(), GridError> {
        check_component(self.q, config.max_coordinate)?;
        check_component(-self.q - self.r, config.max_coordinate)?;
        check_component(self.r, config.max_coordinate)?;
        Ok(())
    }

    pub fn check(&self) -> Result<(), GridError> {
        self.check_in(&GridConfig::default())
    }

    pub fn is_valid_in(&self, config: &GridConfig) -> bool {
        self.check_in(config).is_ok()
    }

    pub fn is_valid(&self) -> bool {
        self.check().is_ok()
    }

    /// The cell's three lattice vertices as `(u, v)` pairs, where `u`
    /// counts half-edges horizontally and `v` counts strip lines
    /// vertically. Exact integers, so vertex incidence between cells can
    /// be tested without any floating point.
    pub(crate) fn lattice_vertices(self) -> [(i64, i64); 3] {
        let q = i64::from(self.q);
        let r = i64::from(self.r);
        match self.orientation() {
            TriOrientation::Up => {
                [(q, r), (q + 2, r), (q + 1, r + 1)]
            }
            TriOrientation::Down => {
                [(q, r + 1), (q + 2, r + 1), (q + 1, r)]
            }
        }
    }
}

/// A triangle cell in offset form: rectangular `(col, row)` addressing.
/// The conversion shifts alternating rows by half a step, mirroring the
/// hex offset trick with the parity read from the row instead of the
/// column.
///
/// Orientation is not visible in this encoding; it re-derives through
/// the axial image like everything else.
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, Hash, Display, Serialize, Deserialize,
)]
#[display(fmt = "({}, {})", "self.col", "self.row")]
pub struct TriOffset {
    pub col: i32,
    pub row: i32,
}

impl TriOffset {
    pub const fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }

    pub const fn from_axial(axial: TriAxial) -> Self {
        let r = axial.r;
        Self {
            col: axial.q + (r - (r & 1)) / 2,
            row: r,
        }
    }

    /// Reconstruct the axial form. `row - (row & 1)` is always even, so
    /// the division is exact for negative rows too.
    pub const fn to_axial(self) -> TriAxial {
        let row = self.row;
        TriAxial::new(self.col - (row - (row & 1)) / 2, row)
    }

    pub const fn orientation(&self) -> TriOrientation {
        self.to_axial().orientation()
    }

    pub const fn is_upward(&self) -> bool {
        matches!(self.orientation(), TriOrientation::Up)
    }

    /// Row-major position of this coordinate in a `width`-column grid
    /// whose top-left cell is `(0, 0)`. Coordinates left of column zero,
    /// above row zero, or at or beyond `width` have no index.
    pub fn to_index(&self, width: u16) -> Result<usize, GridError> {
        if width == 0 {
            return Err(GridError::DegenerateWidth);
        }
        if self.col < 0 || self.col >= i32::from(width) || self.row < 0 {
            return Err(GridError::OffsetOutsideGrid {
                col: self.col,
                row: self.row,
                width,
            });
        }
        Ok(self.row as usize * usize::from(width) + self.col as usize)
    }

    /// Invert [Self::to_index] for a `width`-column grid
    pub fn from_index(
        index: usize,
        width: u16,
    ) -> Result<Self, GridError> {
        if width == 0 {
            return Err(GridError::DegenerateWidth);
        }
        let row = index / usize::from(width);
        let col = index % usize::from(width);
        if row > i32::MAX as usize {
            return Err(GridError::IndexOverflow { index });
        }
        Ok(Self::new(col as i32, row as i32))
    }

    pub fn check_in(&self, config: &GridConfig) -> Result<(), GridError> {
        self.to_axial().check_in(config)
    }

    pub fn check(&self) -> Result<(), GridError> {
        self.check_in(&GridConfig::default())
    }

    pub fn is_valid_in(&self, config: &GridConfig) -> bool {
        self.check_in(config).is_ok()
    }

    pub fn is_valid(&self) -> bool {
        self.check().is_ok()
    }
}

/// Any triangle coordinate, tagged by representation. The triangular
/// system has no doubled form; everything else mirrors the hex tagged
/// type, including the rule that operations route through the axial
/// pivot.
#[derive(
    Copy,
    Clone,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Display,
    From,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum TriCoord {
    #[display(fmt = "{}", _0)]
    Cube(TriCube),
    #[display(fmt = "{}", _0)]
    Axial(TriAxial),
    #[display(fmt = "{}", _0)]
    Offset(TriOffset),
}

impl TriCoord {
    pub fn to_axial(self) -> TriAxial {
        match self {
            Self::Cube(cube) => cube.to_axial(),
            Self::Axial(axial) => axial,
            Self::Offset(offset) => offset.to_axial(),
        }
    }

    pub fn to_cube(self) -> TriCube {
        self.to_axial().to_cube()
    }

    pub fn to_offset(self) -> TriOffset {
        self.to_axial().to_offset()
    }

    pub fn orientation(self) -> TriOrientation {
        self.to_axial().orientation()
    }

    pub fn is_upward(self) -> bool {
        self.to_axial().is_upward()
    }

    pub fn check_in(&self, config: &GridConfig) -> Result<(), GridError> {
        self.to_axial().check_in(config)
    }

    pub fn check(&self) -> Result<(), GridError> {
        self.check_in(&GridConfig::default())
    }

    pub fn is_valid_in(&self, config: &GridConfig) -> bool {
        self.check_in(config).is_ok()
    }

    pub fn is_valid(&self) -> bool {
        self.check().is_ok()
    }
}

fn check_component(value: i32, max: i32) -> Result<(), GridError> {
    if value.abs() > max {
        Err(GridError::OutOfBounds { value, max })
    } else {
        Ok(())
    }
}
