//! Small helpers shared across the coordinate modules.

pub mod point;

/// Number of cells in a filled hexagonal region of the given radius.
/// Radius 0 means 1 cell, 1 => 7 cells, 2 => 19, etc.
pub fn range_len(radius: u16) -> usize {
    // We'll always have 3r^2+3r+1 cells (a reduction of a geometric sum).
    // f(0) = 1, and we add 6r cells for every step after that
    let r = radius as usize;
    3 * r * r + 3 * r + 1
}

/// Number of cells in the shell at exactly the given radius. Radius 0 is
/// the center cell alone.
pub fn ring_len(radius: u16) -> usize {
    if radius == 0 {
        1
    } else {
        6 * radius as usize
    }
}

/// Linear interpolation between two lattice components
pub(crate) fn lerp(start: i32, end: i32, amount: f64) -> f64 {
    f64::from(start) + (f64::from(end) - f64::from(start)) * amount
}
