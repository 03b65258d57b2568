//! Basic value types for the hexagonal coordinate system. See the parent
//! module documentation for an overview of the representations and how they
//! relate.

use crate::{config::GridConfig, error::GridError};
use derive_more::{Display, From};
use serde::{Deserialize, Serialize};
use strum::EnumIter;

/// A hex cell in cube form: three axes on the plane `x + y + z = 0`.
///
/// Only `x` and `y` are stored; `z` is derived on demand, which makes the
/// zero-sum invariant hold by construction and shrinks the footprint by a
/// third. Use [Self::new] when the three components come from outside and
/// need checking, or the `new_*` constructors when two components are
/// already trusted.
///
/// Cube form is where vector arithmetic lives: directions, distance, and
/// region generation all operate on cube (or axial) values. Derived forms
/// must convert here first.
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, Hash, Display, Serialize, Deserialize,
)]
#[display(fmt = "({}, {}, {})", "self.x()", "self.y()", "self.z()")]
pub struct HexCube {
    x: i32,
    y: i32,
}

impl HexCube {
    pub const ORIGIN: Self = Self::new_xy(0, 0);

    /// Construct a point from all three components, validating the zero-sum
    /// invariant
    pub fn new(x: i32, y: i32, z: i32) -> Result<Self, GridError> {
        if x + y + z != 0 {
            Err(GridError::ZeroSumViolation { x, y, z })
        } else {
            Ok(Self::new_xy(x, y))
        }
    }

    /// Construct a point from x and y. Since x+y+z=0 always holds, z is
    /// derived.
    pub const fn new_xy(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Construct a point from x and z. Since x+y+z=0 always holds, y is
    /// derived.
    pub const fn new_xz(x: i32, z: i32) -> Self {
        Self::new_xy(x, -x - z)
    }

    /// Construct a point from y and z. Since x+y+z=0 always holds, x is
    /// derived.
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

    /// Round fractional cube components to the nearest cell on the plane.
    ///
    /// Each component rounds to its nearest integer independently, then the
    /// component that moved furthest is recomputed from the other two so
    /// the zero-sum invariant holds exactly. When two rounding errors tie
    /// for largest, the recomputed axis is chosen by fixed priority: x,
    /// then y, then z. Boundary points (cell edges and corners) resolve
    /// deterministically because of that ordering.
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

    /// Add another cube value component-wise. The plane is closed under
    /// addition, so the result needs no re-validation.
    pub const fn add(self, other: Self) -> Self {
        Self::new_xy(self.x + other.x, self.y + other.y)
    }

    /// Subtract another cube value component-wise
    pub const fn subtract(self, other: Self) -> Self {
        Self::new_xy(self.x - other.x, self.y - other.y)
    }

    /// Multiply every component by an integer factor
    pub const fn scale(self, factor: i32) -> Self {
        Self::new_xy(self.x * factor, self.y * factor)
    }

    /// Check that every component sits within the configured bounding
    /// range. The zero-sum invariant itself cannot be violated by a
    /// constructed value, but runaway arithmetic can still push components
    /// past any sensible grid, and callers are expected to skip such
    /// values rather than crash.
    pub fn check_in(&self, config: &GridConfig) -> Result<(), GridError> {
        check_component(self.x(), config.max_coordinate)?;
        check_component(self.y(), config.max_coordinate)?;
        check_component(self.z(), config.max_coordinate)?;
        Ok(())
    }

    /// [Self::check_in] against the default bounding range
    pub fn check(&self) -> Result<(), GridError> {
        self.check_in(&GridConfig::default())
    }

    pub fn is_valid_in(&self, config: &GridConfig) -> bool {
        self.check_in(config).is_ok()
    }

    pub fn is_valid(&self) -> bool {
        self.check().is_ok()
    }

    pub const fn to_axial(self) -> HexAxial {
        HexAxial::new(self.x, self.z())
    }
}

/// A hex cell in axial form: the minimal two-integer encoding, with
/// `q = cube.x` and `r = cube.z`. This is the canonical pivot for every
/// conversion in the hex module; derived forms convert to axial and back
/// rather than directly to each other.
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, Hash, Display, Serialize, Deserialize,
)]
#[display(fmt = "({}, {})", "self.q", "self.r")]
pub struct HexAxial {
    pub q: i32,
    pub r: i32,
}

impl HexAxial {
    pub const ORIGIN: Self = Self::new(0, 0);

    pub const fn new(q: i32, r: i32) -> Self {
        Self { q, r }
    }

    /// Reconstruct the cube form. The dropped axis comes back as
    /// `y = -q - r`, so the zero-sum invariant holds by construction and
    /// this conversion cannot fail.
    pub const fn to_cube(self) -> HexCube {
        HexCube::new_xz(self.q, self.r)
    }

    pub const fn to_offset(self, scheme: OffsetScheme) -> HexOffset {
        HexOffset::from_axial(self, scheme)
    }

    pub const fn to_doubled(self) -> HexDoubled {
        HexDoubled::from_axial(self)
    }

    /// Round fractional axial components to the nearest cell, routing
    /// through cube form so the shared tie-break policy applies
    pub fn round(q: f64, r: f64) -> Self {
        HexCube::round(q, -q - r, r).to_axial()
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
        self.to_cube().check_in(config)
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

/// The two offset layouts. Both shove alternating columns a half-row so
/// the grid fits a rectangular array; they differ only in which parity
/// class gets shoved.
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
pub enum OffsetScheme {
    /// Odd columns are shifted
    #[display(fmt = "odd-q")]
    OddQ,
    /// Even columns are shifted
    #[display(fmt = "even-q")]
    EvenQ,
}

impl OffsetScheme {
    /// Map a column to its row in the shared offset delta table: 0 for
    /// unshifted columns, 1 for shifted ones. `col & 1` is 0 or 1 for
    /// negative columns too, so no euclidean remainder is needed.
    pub(crate) const fn parity_class(self, col: i32) -> usize {
        let odd = (col & 1) as usize;
        match self {
            Self::OddQ => odd,
            Self::EvenQ => 1 - odd,
        }
    }

    /// The column-dependent half of the axial row shift. Always even, so
    /// dividing by two is exact for every column, negative ones included.
    const fn row_shift(self, col: i32) -> i32 {
        match self {
            Self::OddQ => col - (col & 1),
            Self::EvenQ => col + (col & 1),
        }
    }
}

/// A hex cell in offset form: rectangular `(col, row)` addressing with a
/// parity-dependent conversion to axial. The scheme travels with the value
/// so a coordinate can never be reinterpreted under the wrong parity rule.
///
/// Equality is structural: the same cell addressed under odd-q and even-q
/// compares unequal. Convert to axial to compare across schemes.
///
/// Offset form has no direction vectors of its own. Stepping an offset
/// coordinate goes through the parity-indexed delta table, never through
/// raw component arithmetic.
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, Hash, Display, Serialize, Deserialize,
)]
#[display(fmt = "{}({}, {})", "self.scheme", "self.col", "self.row")]
pub struct HexOffset {
    pub scheme: OffsetScheme,
    pub col: i32,
    pub row: i32,
}

impl HexOffset {
    pub const fn new(scheme: OffsetScheme, col: i32, row: i32) -> Self {
        Self { scheme, col, row }
    }

    pub const fn from_axial(axial: HexAxial, scheme: OffsetScheme) -> Self {
        let col = axial.q;
        Self {
            scheme,
            col,
            row: axial.r + scheme.row_shift(col) / 2,
        }
    }

    pub const fn to_axial(self) -> HexAxial {
        HexAxial::new(
            self.col,
            self.row - self.scheme.row_shift(self.col) / 2,
        )
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
        scheme: OffsetScheme,
    ) -> Result<Self, GridError> {
        if width == 0 {
            return Err(GridError::DegenerateWidth);
        }
        let row = index / usize::from(width);
        let col = index % usize::from(width);
        if row > i32::MAX as usize {
            return Err(GridError::IndexOverflow { index });
        }
        Ok(Self::new(scheme, col as i32, row as i32))
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

/// A hex cell in doubled form: `col = q` and `row = 2r + q`, which keeps
/// row math integral at the cost of a parity invariant, `(col + row)` must
/// be even. Unlike the other forms this one can hold an invalid value, so
/// [Self::check] does real work here and [Self::nearest_valid] offers an
/// opt-in repair.
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, Hash, Display, Serialize, Deserialize,
)]
#[display(fmt = "({}, {})", "self.col", "self.row")]
pub struct HexDoubled {
    pub col: i32,
    pub row: i32,
}

impl HexDoubled {
    pub const fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }

    pub const fn from_axial(axial: HexAxial) -> Self {
        Self {
            col: axial.q,
            row: 2 * axial.r + axial.q,
        }
    }

    /// Collapse back to axial form. For a valid value `row - col` is even
    /// and the division is exact; an invalid value floors toward negative
    /// infinity, so run [Self::check] first when the provenance of the
    /// value is unknown.
    pub fn to_axial(self) -> HexAxial {
        HexAxial::new(self.col, (self.row - self.col).div_euclid(2))
    }

    /// Parity invariant plus the bounding range of the axial image
    pub fn check_in(&self, config: &GridConfig) -> Result<(), GridError> {
        if (self.col + self.row).rem_euclid(2) != 0 {
            return Err(GridError::ParityViolation {
                col: self.col,
                row: self.row,
            });
        }
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

    /// Repair a parity violation by moving exactly one component one step.
    ///
    /// The smaller-magnitude component moves, away from zero so its sign
    /// never flips (zero counts as non-negative and moves up). An exact
    /// magnitude tie cannot occur here: equal magnitudes sum to an even
    /// value, which passes the parity check untouched. Valid values come
    /// back unchanged. This is an opt-in utility: no conversion calls it
    /// implicitly, and callers wanting strict behavior should use
    /// [Self::check] instead.
    pub fn nearest_valid(self) -> Self {
        if (self.col + self.row).rem_euclid(2) == 0 {
            return self;
        }
        let nudge = |value: i32| {
            if value < 0 {
                value - 1
            } else {
                value + 1
            }
        };
        if self.col.abs() <= self.row.abs() {
            Self::new(nudge(self.col), self.row)
        } else {
            Self::new(self.col, nudge(self.row))
        }
    }
}

/// Any hex coordinate, tagged by representation.
///
/// This is the seam for callers that keep mixed representations in one
/// collection or dispatch on a runtime-selected form. The variants hold
/// the concrete types unchanged, and every operation routes through the
/// axial pivot exactly as calling the concrete type directly would.
/// Vector arithmetic is deliberately absent here; convert to cube or
/// axial to add, subtract, or scale.
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
pub enum HexCoord {
    #[display(fmt = "{}", _0)]
    Cube(HexCube),
    #[display(fmt = "{}", _0)]
    Axial(HexAxial),
    #[display(fmt = "{}", _0)]
    Offset(HexOffset),
    #[display(fmt = "{}", _0)]
    Doubled(HexDoubled),
}

impl HexCoord {
    /// Convert to the canonical axial pivot, whatever the current form
    pub fn to_axial(self) -> HexAxial {
        match self {
            Self::Cube(cube) => cube.to_axial(),
            Self::Axial(axial) => axial,
            Self::Offset(offset) => offset.to_axial(),
            Self::Doubled(doubled) => doubled.to_axial(),
        }
    }

    pub fn to_cube(self) -> HexCube {
        self.to_axial().to_cube()
    }

    pub fn to_offset(self, scheme: OffsetScheme) -> HexOffset {
        self.to_axial().to_offset(scheme)
    }

    pub fn to_doubled(self) -> HexDoubled {
        self.to_axial().to_doubled()
    }

    /// Validity of the underlying representation: the doubled parity rule
    /// for doubled values, plus the bounding range for every form
    pub fn check_in(&self, config: &GridConfig) -> Result<(), GridError> {
        match self {
            Self::Cube(cube) => cube.check_in(config),
            Self::Axial(axial) => axial.check_in(config),
            Self::Offset(offset) => offset.check_in(config),
            Self::Doubled(doubled) => doubled.check_in(config),
        }
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

/// Bounding-range check shared by every representation's validity path
fn check_component(value: i32, max: i32) -> Result<(), GridError> {
    if value.abs() > max {
        Err(GridError::OutOfBounds { value, max })
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GridErrorKind;
    use serde_test::{assert_tokens, Token};
    use strum::IntoEnumIterator;

    #[test]
    fn test_cube_new() {
        let cube = HexCube::new(2, -3, 1).unwrap();
        assert_eq!((cube.x(), cube.y(), cube.z()), (2, -3, 1));

        let error = HexCube::new(1, 1, 1).unwrap_err();
        assert_eq!(
            error,
            GridError::ZeroSumViolation { x: 1, y: 1, z: 1 }
        );
        assert_eq!(error.kind(), GridErrorKind::InvariantViolation);
    }

    #[test]
    fn test_cube_constructors_agree() {
        let cube = HexCube::new_xy(3, -5);
        assert_eq!(HexCube::new_xz(3, 2), cube);
        assert_eq!(HexCube::new_yz(-5, 2), cube);
        assert_eq!(cube.x() + cube.y() + cube.z(), 0);
    }

    #[test]
    fn test_cube_axial_round_trip() {
        for q in -50..=50 {
            for r in -50..=50 {
                let axial = HexAxial::new(q, r);
                let cube = axial.to_cube();
                assert_eq!(cube.x() + cube.y() + cube.z(), 0);
                assert_eq!(cube.to_axial(), axial);
            }
        }
    }

    #[test]
    fn test_cube_arithmetic() {
        let a = HexCube::new_xz(1, -2);
        let b = HexCube::new_xz(-3, 1);
        assert_eq!(a.add(b), HexCube::new_xz(-2, -1));
        assert_eq!(a.subtract(b), HexCube::new_xz(4, -3));
        assert_eq!(a.scale(3), HexCube::new_xz(3, -6));
        assert_eq!(a.scale(0), HexCube::ORIGIN);
    }

    #[test]
    fn test_offset_round_trip() {
        for scheme in OffsetScheme::iter() {
            for col in -50..=50 {
                for row in -50..=50 {
                    let offset = HexOffset::new(scheme, col, row);
                    assert_eq!(
                        offset.to_axial().to_offset(scheme),
                        offset,
                        "{offset}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_offset_schemes_disagree_on_odd_columns() {
        let axial = HexAxial::new(3, -2);
        let odd = axial.to_offset(OffsetScheme::OddQ);
        let even = axial.to_offset(OffsetScheme::EvenQ);
        assert_eq!((odd.col, odd.row), (3, -1));
        assert_eq!((even.col, even.row), (3, 0));
        // Both address the same cell
        assert_eq!(odd.to_axial(), even.to_axial());

        // Even columns need no shift, so the schemes agree
        let axial = HexAxial::new(4, -2);
        let odd = axial.to_offset(OffsetScheme::OddQ);
        let even = axial.to_offset(OffsetScheme::EvenQ);
        assert_eq!((odd.col, odd.row), (even.col, even.row));
    }

    #[test]
    fn test_offset_index() {
        let offset = HexOffset::new(OffsetScheme::OddQ, 2, 3);
        assert_eq!(offset.to_index(5).unwrap(), 17);
        assert_eq!(
            HexOffset::from_index(17, 5, OffsetScheme::OddQ).unwrap(),
            offset
        );

        assert_eq!(
            offset.to_index(0).unwrap_err(),
            GridError::DegenerateWidth
        );
        assert_eq!(
            offset.to_index(2).unwrap_err(),
            GridError::OffsetOutsideGrid {
                col: 2,
                row: 3,
                width: 2
            }
        );
        let negative = HexOffset::new(OffsetScheme::OddQ, -1, 0);
        assert!(matches!(
            negative.to_index(5).unwrap_err(),
            GridError::OffsetOutsideGrid { .. }
        ));
    }

    #[test]
    fn test_doubled_round_trip() {
        for q in -50..=50 {
            for r in -50..=50 {
                let axial = HexAxial::new(q, r);
                let doubled = axial.to_doubled();
                assert!(doubled.is_valid(), "{doubled}");
                assert_eq!(doubled.to_axial(), axial);
            }
        }
    }

    #[test]
    fn test_doubled_validity() {
        assert!(HexDoubled::new(4, -2).is_valid());
        let invalid = HexDoubled::new(3, -2);
        assert!(!invalid.is_valid());
        assert_eq!(
            invalid.check().unwrap_err(),
            GridError::ParityViolation { col: 3, row: -2 }
        );
    }

    #[test]
    fn test_doubled_nearest_valid() {
        // Valid values pass through untouched
        let valid = HexDoubled::new(4, -2);
        assert_eq!(valid.nearest_valid(), valid);

        // The smaller-magnitude component moves away from zero
        assert_eq!(
            HexDoubled::new(3, -2).nearest_valid(),
            HexDoubled::new(3, -3)
        );
        assert_eq!(
            HexDoubled::new(-2, 5).nearest_valid(),
            HexDoubled::new(-3, 5)
        );
        // Zero moves up
        assert_eq!(
            HexDoubled::new(0, 3).nearest_valid(),
            HexDoubled::new(1, 3)
        );
        // The row moves when it has the smaller magnitude
        assert_eq!(
            HexDoubled::new(2, -1).nearest_valid(),
            HexDoubled::new(2, -2)
        );

        // The repair always moves exactly one component by exactly one
        for col in -9..=9 {
            for row in -9..=9 {
                let doubled = HexDoubled::new(col, row);
                let repaired = doubled.nearest_valid();
                assert!(repaired.is_valid(), "{doubled}");
                let moved = (repaired.col - col).abs()
                    + (repaired.row - row).abs();
                let expected = i32::from(!doubled.is_valid());
                assert_eq!(moved, expected, "{doubled}");
            }
        }
    }

    #[test]
    fn test_cube_round() {
        // Interior points round to the obvious cell
        assert_eq!(
            HexCube::round(0.1, -0.2, 0.1),
            HexCube::new_xy(0, 0)
        );
        assert_eq!(
            HexCube::round(2.9, -1.1, -1.8),
            HexCube::new_xz(3, -2)
        );
        // The axis with the largest rounding error gets recomputed
        assert_eq!(
            HexCube::round(1.6, -0.7, -0.9),
            HexCube::new_yz(-1, -1)
        );
        // Equal largest errors resolve x first, then y, then z
        assert_eq!(
            HexCube::round(0.5, 0.5, -1.0),
            HexCube::new_yz(1, -1)
        );
        assert_eq!(HexCube::round(0.5, 0.5, -1.0).x(), 0);
    }

    #[test]
    fn test_round_result_on_plane() {
        for i in -20..=20 {
            for j in -20..=20 {
                let x = f64::from(i) * 0.37;
                let z = f64::from(j) * 0.29;
                let cube = HexCube::round(x, -x - z, z);
                assert_eq!(cube.x() + cube.y() + cube.z(), 0);
            }
        }
    }

    #[test]
    fn test_bounds_check() {
        assert!(HexCube::new_xy(10_000, -10_000).is_valid());
        // The derived component can leave the range on its own
        let cube = HexCube::new_xy(8_000, 8_000);
        assert_eq!(
            cube.check().unwrap_err(),
            GridError::OutOfBounds {
                value: -16_000,
                max: 10_000
            }
        );
        assert_eq!(
            cube.check().unwrap_err().kind(),
            GridErrorKind::InvariantViolation
        );

        let config = GridConfig {
            max_coordinate: 5,
            ..GridConfig::default()
        };
        assert!(HexAxial::new(5, -5).is_valid_in(&config));
        assert!(!HexAxial::new(6, 0).is_valid_in(&config));
    }

    #[test]
    fn test_coord_dispatch() {
        let axial = HexAxial::new(3, -2);
        let coords = [
            HexCoord::from(axial.to_cube()),
            HexCoord::from(axial),
            HexCoord::from(axial.to_offset(OffsetScheme::EvenQ)),
            HexCoord::from(axial.to_doubled()),
        ];
        for coord in coords {
            assert_eq!(coord.to_axial(), axial, "{coord}");
            assert_eq!(coord.to_cube(), axial.to_cube());
            assert_eq!(
                coord.to_offset(OffsetScheme::OddQ),
                axial.to_offset(OffsetScheme::OddQ)
            );
            assert_eq!(coord.to_doubled(), axial.to_doubled());
            assert!(coord.is_valid());
        }

        assert!(!HexCoord::from(HexDoubled::new(3, -2)).is_valid());
    }

    #[test]
    fn test_display() {
        assert_eq!(HexCube::new_xz(1, -2).to_string(), "(1, 1, -2)");
        assert_eq!(HexAxial::new(3, -2).to_string(), "(3, -2)");
        assert_eq!(
            HexOffset::new(OffsetScheme::OddQ, 3, -1).to_string(),
            "odd-q(3, -1)"
        );
        assert_eq!(
            HexOffset::new(OffsetScheme::EvenQ, 3, 0).to_string(),
            "even-q(3, 0)"
        );
        assert_eq!(HexDoubled::new(4, -2).to_string(), "(4, -2)");
        assert_eq!(
            HexCoord::from(HexAxial::new(3, -2)).to_string(),
            "(3, -2)"
        );
    }

    #[test]
    fn test_serde_axial() {
        assert_tokens(
            &HexAxial::new(3, -2),
            &[
                Token::Struct {
                    name: "HexAxial",
                    len: 2,
                },
                Token::Str("q"),
                Token::I32(3),
                Token::Str("r"),
                Token::I32(-2),
                Token::StructEnd,
            ],
        );
    }
}
