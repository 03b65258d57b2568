use derive_more::{
    Add, AddAssign, Display, Div, DivAssign, From, Into, Mul, MulAssign, Neg,
    Sub, SubAssign, Sum,
};
use serde::{Deserialize, Serialize};

/// A continuous 2D point on the layout plane. Unlike grid coordinates,
/// plane points carry ordinary vector arithmetic; they live on the far side
/// of the layout transforms where the grid structure no longer applies.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    Display,
    PartialEq,
    PartialOrd,
    From,
    Into,
    Neg,
    Add,
    Sub,
    Mul,
    Div,
    AddAssign,
    SubAssign,
    MulAssign,
    DivAssign,
    Sum,
    Serialize,
    Deserialize,
)]
#[display(fmt = "({}, {})", "self.x", "self.y")]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

impl Point2 {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<nalgebra::Vector2<f64>> for Point2 {
    fn from(other: nalgebra::Vector2<f64>) -> Self {
        Self {
            x: other.x,
            y: other.y,
        }
    }
}

/// A continuous 3D world-space point. The layout transforms span the grid
/// across `x`/`y` and leave `z` at zero, so consumers that stack elevation
/// or depth on top of the grid have a slot for it.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    Display,
    PartialEq,
    PartialOrd,
    From,
    Into,
    Neg,
    Add,
    Sub,
    Mul,
    Div,
    AddAssign,
    SubAssign,
    MulAssign,
    DivAssign,
    Sum,
    Serialize,
    Deserialize,
)]
#[display(fmt = "({}, {}, {})", "self.x", "self.y", "self.z")]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3 {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Place a plane point into world space at elevation zero
    pub const fn from_plane(point: Point2) -> Self {
        Self {
            x: point.x,
            y: point.y,
            z: 0.0,
        }
    }

    /// Project back onto the layout plane, discarding elevation
    pub const fn to_plane(self) -> Point2 {
        Point2 {
            x: self.x,
            y: self.y,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point2_arithmetic() {
        let a = Point2::new(1.0, -2.0);
        let b = Point2::new(0.5, 4.0);
        assert_eq!(a + b, Point2::new(1.5, 2.0));
        assert_eq!(a - b, Point2::new(0.5, -6.0));
        assert_eq!(a * 2.0, Point2::new(2.0, -4.0));
    }

    #[test]
    fn test_plane_round_trip() {
        let plane = Point2::new(3.25, -1.5);
        let world = Point3::from_plane(plane);
        assert_eq!(world, Point3::new(3.25, -1.5, 0.0));
        assert_eq!(world.to_plane(), plane);
    }

    #[test]
    fn test_display() {
        assert_eq!(Point2::new(1.5, -2.0).to_string(), "(1.5, -2)");
        assert_eq!(Point3::new(0.0, 1.0, 0.0).to_string(), "(0, 1, 0)");
    }
}
