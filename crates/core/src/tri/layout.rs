//! Mapping between triangle coordinates and world positions.
//!
//! The grid sits in horizontal strips of height `size * sqrt(3) / 2`,
//! one strip per row, with cells alternating point-up and point-down
//! along each strip. Unlike the hex layouts there is no orientation
//! parameter: a cell's orientation comes from its coordinate, and the
//! whole placement is fixed by the side length alone.
//!
//! Cell vertices live on a half-unit lattice: horizontal positions are
//! multiples of half a side, vertical positions are whole strips. The
//! inverse mapping exploits that directly. Within a strip the slanted
//! cell edges are lines of constant `u - t` (rising) and `u + t`
//! (falling), where `u` is the horizontal position in half-sides and
//! `t` the height within the strip, so locating a point is two floors
//! and a comparison, no rounding search.

use crate::{
    error::GridError,
    tri::unit::{TriAxial, TriCoord, TriCube, TriOffset, TriOrientation},
    util::point::{Point2, Point3},
};

/// A concrete placement of the triangle grid on the plane, fixed by a
/// cell side length. Constructed through [Self::new] so a degenerate
/// size can never reach the transforms.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TriLayout {
    size: f64,
}

impl TriLayout {
    /// Build a layout, rejecting zero, negative, and non-finite sizes
    pub fn new(size: f64) -> Result<Self, GridError> {
        if !size.is_finite() || size <= 0.0 {
            return Err(GridError::DegenerateSize { value: size });
        }
        Ok(Self { size })
    }

    pub fn size(&self) -> f64 {
        self.size
    }

    /// Height of one row strip, also the height of every cell
    pub fn row_height(&self) -> f64 {
        self.size * 3.0_f64.sqrt() / 2.0
    }

    /// World position of a cell's centroid, at elevation zero. Upward
    /// and downward cells in the same row share a horizontal spacing of
    /// half a side but sit at different heights within the strip.
    pub fn axial_to_world(&self, axial: TriAxial) -> Point3 {
        let x = self.size * (f64::from(axial.q) + 1.0) / 2.0;
        let v = match axial.orientation() {
            TriOrientation::Up => f64::from(axial.r) + 1.0 / 3.0,
            TriOrientation::Down => f64::from(axial.r) + 2.0 / 3.0,
        };
        Point3::from_plane(Point2::new(x, self.row_height() * v))
    }

    /// The cell containing a world position. Elevation is ignored; the
    /// point projects onto the layout plane. Points exactly on an edge
    /// resolve deterministically, always to the upward cell of the
    /// adjacent pair.
    pub fn world_to_axial(
        &self,
        point: Point3,
    ) -> Result<TriAxial, GridError> {
        let plane = point.to_plane();
        if !plane.x.is_finite() || !plane.y.is_finite() {
            return Err(GridError::NonFinitePoint {
                x: plane.x,
                y: plane.y,
            });
        }
        let u = 2.0 * plane.x / self.size;
        let v = plane.y / self.row_height();
        let row = v.floor();
        let t = v - row;
        // Largest rising-edge intercept at or left of the point. The
        // intercepts carry the row's parity, so the match keeps the
        // produced coordinate's orientation consistent with the
        // geometry. Arithmetic stays in floats until the end so wild
        // inputs saturate instead of overflowing.
        let parity = row.rem_euclid(2.0);
        let k = 2.0 * ((u - t - parity) / 2.0).floor() + parity;
        let q = if u + t <= k + 2.0 { k } else { k + 1.0 };
        Ok(TriAxial::new(q as i32, row as i32))
    }

    /// World positions of a cell's three corners, at elevation zero, in
    /// vertex lattice order: base corners first, apex last for an
    /// upward cell and first for a downward one
    pub fn corners(&self, axial: TriAxial) -> [Point3; 3] {
        let vertices = axial.lattice_vertices();
        std::array::from_fn(|i| {
            let (u, v) = vertices[i];
            Point3::from_plane(Point2::new(
                u as f64 * self.size / 2.0,
                v as f64 * self.row_height(),
            ))
        })
    }
}

impl TriAxial {
    /// World position of this cell's centroid under the given layout
    pub fn to_world(self, layout: &TriLayout) -> Point3 {
        layout.axial_to_world(self)
    }

    /// The cell containing a world position under the given layout
    pub fn from_world(
        point: Point3,
        layout: &TriLayout,
    ) -> Result<Self, GridError> {
        layout.world_to_axial(point)
    }
}

impl TriCube {
    pub fn to_world(self, layout: &TriLayout) -> Point3 {
        layout.axial_to_world(self.to_axial())
    }

    pub fn from_world(
        point: Point3,
        layout: &TriLayout,
    ) -> Result<Self, GridError> {
        Ok(layout.world_to_axial(point)?.to_cube())
    }
}

impl TriOffset {
    pub fn to_world(self, layout: &TriLayout) -> Point3 {
        layout.axial_to_world(self.to_axial())
    }

    pub fn from_world(
        point: Point3,
        layout: &TriLayout,
    ) -> Result<Self, GridError> {
        Ok(layout.world_to_axial(point)?.to_offset())
    }
}

impl TriCoord {
    /// World position of this cell's centroid, whatever the
    /// representation
    pub fn to_world(self, layout: &TriLayout) -> Point3 {
        layout.axial_to_world(self.to_axial())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn test_centroids() {
        let layout = TriLayout::new(2.0).unwrap();
        let sqrt3 = 3.0_f64.sqrt();

        let up = layout.axial_to_world(TriAxial::new(0, 0));
        assert_approx_eq!(up.x, 1.0);
        assert_approx_eq!(up.y, sqrt3 / 3.0);

        let down = layout.axial_to_world(TriAxial::new(1, 0));
        assert_approx_eq!(down.x, 2.0);
        assert_approx_eq!(down.y, 2.0 * sqrt3 / 3.0);

        let negative = layout.axial_to_world(TriAxial::new(-2, -1));
        assert_approx_eq!(negative.x, -1.0);
        assert_approx_eq!(negative.y, -sqrt3 / 3.0);
    }

    #[test]
    fn test_world_round_trip() {
        for size in [0.5, 1.0, 17.25] {
            let layout = TriLayout::new(size).unwrap();
            for cell in TriAxial::ORIGIN.range(5) {
                let recovered =
                    TriAxial::from_world(cell.to_world(&layout), &layout)
                        .unwrap();
                assert_eq!(recovered, cell, "{size}");
            }
        }
    }

    #[test]
    fn test_interior_points() {
        // Points near a centroid still land in the same cell; the
        // inradius at size one is about 0.29
        let layout = TriLayout::new(1.0).unwrap();
        for cell in [TriAxial::new(0, 0), TriAxial::new(2, -1)] {
            let center = cell.to_world(&layout);
            for dx in [-0.1, 0.0, 0.1] {
                for dy in [-0.1, 0.0, 0.1] {
                    let point =
                        Point3::new(center.x + dx, center.y + dy, 0.0);
                    let located = layout.world_to_axial(point).unwrap();
                    assert_eq!(located, cell, "{dx} {dy}");
                }
            }
        }
    }

    #[test]
    fn test_degenerate_size() {
        for size in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let result = TriLayout::new(size);
            assert!(
                matches!(result, Err(GridError::DegenerateSize { .. })),
                "{size}"
            );
        }
        assert_eq!(
            TriLayout::new(-1.0).unwrap_err(),
            GridError::DegenerateSize { value: -1.0 }
        );
    }

    #[test]
    fn test_non_finite_point() {
        let layout = TriLayout::new(1.0).unwrap();
        let result =
            layout.world_to_axial(Point3::new(f64::NAN, 0.0, 0.0));
        assert!(matches!(
            result,
            Err(GridError::NonFinitePoint { .. })
        ));
    }

    #[test]
    fn test_corners() {
        let layout = TriLayout::new(2.0).unwrap();
        let sqrt3 = 3.0_f64.sqrt();

        let up = layout.corners(TriAxial::new(0, 0));
        assert_approx_eq!(up[0].x, 0.0);
        assert_approx_eq!(up[0].y, 0.0);
        assert_approx_eq!(up[1].x, 2.0);
        assert_approx_eq!(up[1].y, 0.0);
        assert_approx_eq!(up[2].x, 1.0);
        assert_approx_eq!(up[2].y, sqrt3);

        // A downward cell in the same row shares two of those corners
        let down = layout.corners(TriAxial::new(1, 0));
        assert_approx_eq!(down[0].x, 1.0);
        assert_approx_eq!(down[0].y, sqrt3);
        assert_approx_eq!(down[1].x, 3.0);
        assert_approx_eq!(down[1].y, sqrt3);
        assert_approx_eq!(down[2].x, 2.0);
        assert_approx_eq!(down[2].y, 0.0);

        // Every corner sits one side length from the other two
        for corners in [up, down] {
            for i in 0..3 {
                let a = corners[i];
                let b = corners[(i + 1) % 3];
                let side = ((a.x - b.x).powi(2) + (a.y - b.y).powi(2))
                    .sqrt();
                assert_approx_eq!(side, 2.0);
            }
        }
    }

    #[test]
    fn test_boundary_points_resolve_upward() {
        // Midpoints of all three edges of an upward cell are exact
        // boundary points shared with downward neighbors; each resolves
        // to the upward cell
        let layout = TriLayout::new(1.0).unwrap();
        let cell = TriAxial::new(0, 0);
        let corners = layout.corners(cell);
        for i in 0..3 {
            let a = corners[i];
            let b = corners[(i + 1) % 3];
            let midpoint =
                Point3::new((a.x + b.x) / 2.0, (a.y + b.y) / 2.0, 0.0);
            let first = layout.world_to_axial(midpoint).unwrap();
            let second = layout.world_to_axial(midpoint).unwrap();
            assert_eq!(first, second);
            assert_eq!(first, cell, "{i}");
        }
    }

    #[test]
    fn test_from_world_conversions() {
        let layout = TriLayout::new(3.0).unwrap();
        let cube = TriCube::new_xz(2, -1);
        assert_eq!(
            TriCube::from_world(cube.to_world(&layout), &layout).unwrap(),
            cube
        );
        let offset = TriOffset::new(-1, 2);
        assert_eq!(
            TriOffset::from_world(offset.to_world(&layout), &layout)
                .unwrap(),
            offset
        );
    }
}
