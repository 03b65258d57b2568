use crate::{direction::GridDirection, hex::unit::OffsetScheme};
use serde::{Deserialize, Serialize};
use strum::EnumIter;

/// Neighbor deltas for offset coordinates, indexed by column parity class
/// and then by direction in [HexDirection::ALL] order. Class 0 holds the
/// unshifted columns, class 1 the shifted ones; the odd-q and even-q
/// schemes read the same table through opposite classes (see
/// [OffsetScheme::parity_class]).
///
/// Derived by pushing each axial direction vector through the offset
/// conversion at both column parities. Offset coordinates lose the
/// uniform-vector property that cube and axial enjoy, so these deltas are
/// the only legal way to step an offset coordinate without converting.
pub(crate) const OFFSET_DELTAS: [[(i32, i32); 6]; 2] = [
    [(1, 0), (0, 1), (-1, 0), (-1, -1), (0, -1), (1, -1)],
    [(1, 1), (0, 1), (-1, 1), (-1, 0), (0, -1), (1, 0)],
];

/// The six directions to a hex's edge-adjacent neighbors, in rotational
/// order. Names follow the pointy-top compass with `+q` pointing east and
/// `+r` pointing southeast; under a flat-top layout the same variants
/// simply rotate with the grid.
///
/// The rotational ordering is relied upon by ring traversal: for any
/// direction `d`, `d.to_axial_vector() + d.rotated(2).to_axial_vector()`
/// equals `d.rotated(1).to_axial_vector()`, which is what lets an edge
/// walk turn corners exactly.
#[derive(
    Copy, Clone, Debug, EnumIter, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum HexDirection {
    /// +q
    East,
    /// +r
    Southeast,
    /// -q +r
    Southwest,
    /// -q
    West,
    /// -r
    Northwest,
    /// +q -r
    Northeast,
}

impl HexDirection {
    /// Get the axial vector that moves a coordinate one step in this
    /// direction
    pub const fn to_axial_vector(self) -> (i32, i32) {
        match self {
            Self::East => (1, 0),
            Self::Southeast => (0, 1),
            Self::Southwest => (-1, 1),
            Self::West => (-1, 0),
            Self::Northwest => (0, -1),
            Self::Northeast => (1, -1),
        }
    }

    /// Get the cube vector that moves a coordinate one step in this
    /// direction. Always sums to zero.
    pub const fn to_cube_vector(self) -> (i32, i32, i32) {
        let (q, r) = self.to_axial_vector();
        (q, -q - r, r)
    }

    /// Get the doubled-form vector that moves a coordinate one step in
    /// this direction. Doubled deltas are uniform across the grid and
    /// always shift `col + row` by an even amount.
    pub const fn to_doubled_vector(self) -> (i32, i32) {
        let (q, r) = self.to_axial_vector();
        (q, 2 * r + q)
    }

    /// Get the direction directly opposite this one
    pub fn opposite(self) -> Self {
        self.rotated(3)
    }

    /// Get the `(col, row)` delta that moves an offset coordinate one step
    /// in this direction, given the scheme and the starting column. The
    /// delta depends on the column's parity, so it must be re-fetched after
    /// every step.
    pub(crate) const fn offset_delta(
        self,
        scheme: OffsetScheme,
        col: i32,
    ) -> (i32, i32) {
        OFFSET_DELTAS[scheme.parity_class(col)][self as usize]
    }
}

impl GridDirection for HexDirection {
    const ALL: &'static [Self] = &[
        Self::East,
        Self::Southeast,
        Self::Southwest,
        Self::West,
        Self::Northwest,
        Self::Northeast,
    ];

    fn index(self) -> usize {
        self as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hex::unit::HexAxial;
    use strum::IntoEnumIterator;

    #[test]
    fn test_vectors_sum_to_zero() {
        for dir in HexDirection::iter() {
            let (x, y, z) = dir.to_cube_vector();
            assert_eq!(x + y + z, 0, "{dir:?}");
        }
    }

    #[test]
    fn test_opposite() {
        assert_eq!(HexDirection::East.opposite(), HexDirection::West);
        assert_eq!(HexDirection::Southeast.opposite(), HexDirection::Northwest);
        for dir in HexDirection::iter() {
            let (q, r) = dir.to_axial_vector();
            let (oq, or) = dir.opposite().to_axial_vector();
            assert_eq!((q + oq, r + or), (0, 0), "{dir:?}");
        }
    }

    #[test]
    fn test_rotational_order() {
        // A step in direction i followed by a step in direction i+2 must
        // land where a single scaled step in direction i+1 would, for every
        // sector. Ring traversal turns corners on this identity.
        for dir in HexDirection::iter() {
            let (aq, ar) = dir.to_axial_vector();
            let (bq, br) = dir.rotated(2).to_axial_vector();
            let (cq, cr) = dir.rotated(1).to_axial_vector();
            assert_eq!((aq + bq, ar + br), (cq, cr), "{dir:?}");
        }
    }

    #[test]
    fn test_from_index() {
        assert_eq!(
            HexDirection::from_index(0).unwrap(),
            HexDirection::East
        );
        assert_eq!(
            HexDirection::from_index(5).unwrap(),
            HexDirection::Northeast
        );
        assert!(HexDirection::from_index(6).is_err());
    }

    #[test]
    fn test_offset_deltas_match_axial_vectors() {
        // Every offset delta must describe the same neighbor the axial
        // vector does, at both column parities and under both schemes
        for scheme in [OffsetScheme::OddQ, OffsetScheme::EvenQ] {
            for col in [-3, -2, 0, 1] {
                for dir in HexDirection::iter() {
                    let (dq, dr) = dir.to_axial_vector();
                    let axial = HexAxial::new(col, 4);
                    let offset = axial.to_offset(scheme);
                    let (dcol, drow) = dir.offset_delta(scheme, offset.col);
                    let expected =
                        HexAxial::new(axial.q + dq, axial.r + dr)
                            .to_offset(scheme);
                    assert_eq!(
                        (offset.col + dcol, offset.row + drow),
                        (expected.col, expected.row),
                        "{scheme} col {col} {dir:?}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_serde_names() {
        use serde_test::{assert_tokens, Token};
        assert_tokens(
            &HexDirection::Northwest,
            &[Token::UnitVariant {
                name: "HexDirection",
                variant: "northwest",
            }],
        );
    }
}
