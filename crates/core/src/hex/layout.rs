//! Mapping between hex coordinates and continuous world positions.
//!
//! A [HexLayout] bundles an orientation with a cell size. The forward
//! transform is exact linear algebra; the inverse transform lands on
//! fractional cube components and snaps to a cell with the shared
//! rounding policy, so a world point always resolves to exactly one
//! coordinate.

use crate::{
    error::GridError,
    hex::unit::{
        HexAxial, HexCoord, HexCube, HexDoubled, HexOffset, OffsetScheme,
    },
    util::point::{Point2, Point3},
};
use derive_more::Display;
use nalgebra::{Matrix2, Vector2};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use strum::{EnumIter, EnumString};

/// The two ways a hex grid can face the world. The orientation fixes the
/// forward and inverse transform matrices and where the first corner
/// sits on the circle. Parses from its display form, for callers reading
/// orientations out of config files.
#[derive(
    Copy,
    Clone,
    Debug,
    Display,
    EnumIter,
    EnumString,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum HexOrientation {
    /// Corner at the top; rows interlock
    #[display(fmt = "pointy")]
    Pointy,
    /// Edge at the top; columns interlock
    #[display(fmt = "flat")]
    Flat,
}

impl HexOrientation {
    /// The matrix taking axial `(q, r)` to plane coordinates, before
    /// scaling by cell size
    pub fn forward(self) -> Matrix2<f64> {
        let sqrt3 = 3.0_f64.sqrt();
        match self {
            Self::Pointy => {
                Matrix2::new(sqrt3, sqrt3 / 2.0, 0.0, 3.0 / 2.0)
            }
            Self::Flat => {
                Matrix2::new(3.0 / 2.0, 0.0, sqrt3 / 2.0, sqrt3)
            }
        }
    }

    /// The matrix taking plane coordinates back to fractional axial
    /// `(q, r)`, after unscaling by cell size
    pub fn inverse(self) -> Matrix2<f64> {
        let sqrt3 = 3.0_f64.sqrt();
        match self {
            Self::Pointy => {
                Matrix2::new(sqrt3 / 3.0, -1.0 / 3.0, 0.0, 2.0 / 3.0)
            }
            Self::Flat => {
                Matrix2::new(2.0 / 3.0, 0.0, -1.0 / 3.0, sqrt3 / 3.0)
            }
        }
    }

    /// Angular position of corner zero, in sixths of a turn
    pub fn start_angle(self) -> f64 {
        match self {
            Self::Pointy => 0.5,
            Self::Flat => 0.0,
        }
    }
}

/// A concrete placement of the hex grid on the plane: an orientation plus
/// a cell size (center-to-corner distance). Constructed through
/// [Self::new] so a degenerate size can never reach the transforms.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct HexLayout {
    orientation: HexOrientation,
    size: f64,
}

impl HexLayout {
    /// Build a layout, rejecting zero, negative, and non-finite sizes
    pub fn new(
        orientation: HexOrientation,
        size: f64,
    ) -> Result<Self, GridError> {
        if !size.is_finite() || size <= 0.0 {
            return Err(GridError::DegenerateSize { value: size });
        }
        Ok(Self { orientation, size })
    }

    pub fn orientation(&self) -> HexOrientation {
        self.orientation
    }

    pub fn size(&self) -> f64 {
        self.size
    }

    /// World position of a cell's center, at elevation zero
    pub fn axial_to_world(&self, axial: HexAxial) -> Point3 {
        let fractional = self.orientation.forward()
            * Vector2::new(f64::from(axial.q), f64::from(axial.r));
        Point3::from_plane(Point2::from(fractional * self.size))
    }

    /// The cell containing a world position. Elevation is ignored; the
    /// point projects onto the layout plane, the inverse matrix recovers
    /// fractional cube components, and rounding snaps to the nearest
    /// cell. Points exactly on a cell boundary resolve by the fixed
    /// rounding priority.
    pub fn world_to_axial(
        &self,
        point: Point3,
    ) -> Result<HexAxial, GridError> {
        let plane = point.to_plane();
        if !plane.x.is_finite() || !plane.y.is_finite() {
            return Err(GridError::NonFinitePoint {
                x: plane.x,
                y: plane.y,
            });
        }
        let fractional = self.orientation.inverse()
            * Vector2::new(plane.x / self.size, plane.y / self.size);
        Ok(HexAxial::round(fractional.x, fractional.y))
    }

    /// Plane offset from a cell center to the corner at the given index.
    /// Corner zero sits at the orientation's start angle; the rest
    /// follow at sixth-of-a-turn steps.
    pub fn corner_offset(&self, corner: usize) -> Point2 {
        let angle = 2.0 * PI
            * (self.orientation.start_angle() + corner as f64)
            / 6.0;
        Point2::new(self.size * angle.cos(), self.size * angle.sin())
    }

    /// World positions of a cell's six corners, at elevation zero
    pub fn corners(&self, axial: HexAxial) -> [Point3; 6] {
        let center = self.axial_to_world(axial).to_plane();
        std::array::from_fn(|i| {
            let offset = self.corner_offset(i);
            Point3::from_plane(Point2::new(
                center.x + offset.x,
                center.y + offset.y,
            ))
        })
    }
}

impl HexAxial {
    /// World position of this cell's center under the given layout
    pub fn to_world(self, layout: &HexLayout) -> Point3 {
        layout.axial_to_world(self)
    }

    /// The cell containing a world position under the given layout
    pub fn from_world(
        point: Point3,
        layout: &HexLayout,
    ) -> Result<Self, GridError> {
        layout.world_to_axial(point)
    }
}

impl HexCube {
    pub fn to_world(self, layout: &HexLayout) -> Point3 {
        layout.axial_to_world(self.to_axial())
    }

    pub fn from_world(
        point: Point3,
        layout: &HexLayout,
    ) -> Result<Self, GridError> {
        Ok(layout.world_to_axial(point)?.to_cube())
    }
}

impl HexOffset {
    pub fn to_world(self, layout: &HexLayout) -> Point3 {
        layout.axial_to_world(self.to_axial())
    }

    /// The cell containing a world position, addressed under the given
    /// scheme
    pub fn from_world(
        point: Point3,
        layout: &HexLayout,
        scheme: OffsetScheme,
    ) -> Result<Self, GridError> {
        Ok(layout.world_to_axial(point)?.to_offset(scheme))
    }
}

impl HexDoubled {
    pub fn to_world(self, layout: &HexLayout) -> Point3 {
        layout.axial_to_world(self.to_axial())
    }

    pub fn from_world(
        point: Point3,
        layout: &HexLayout,
    ) -> Result<Self, GridError> {
        Ok(layout.world_to_axial(point)?.to_doubled())
    }
}

impl HexCoord {
    /// World position of this cell's center, whatever the representation
    pub fn to_world(self, layout: &HexLayout) -> Point3 {
        layout.axial_to_world(self.to_axial())
    }
}
