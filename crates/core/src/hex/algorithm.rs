//! Adjacency, distance, and region queries for hex coordinates.
//!
//! The heavy lifting happens on [HexAxial], the canonical pivot. Cube
//! values translate for free, and the tagged [HexCoord] dispatches here
//! and converts results back to the caller's representation. Offset
//! adjacency is the one deliberate exception: it steps through the
//! parity-indexed delta table so values never leave offset form.
//!
//! Region queries filter out coordinates that land outside the bounding
//! range instead of returning them, so callers near the edge of the
//! representable grid get a clipped region rather than garbage.

use crate::{
    cache::GridCache,
    config::GridConfig,
    direction::GridDirection,
    error::GridError,
    hex::{
        direction::HexDirection,
        unit::{HexAxial, HexCoord, HexCube, HexDoubled, HexOffset},
    },
    util,
};
use log::debug;
use std::array;

/// Cache for filled-range queries, keyed by center and radius. Use one
/// instance per query family and per config; the key does not encode
/// either.
pub type HexRegionCache = GridCache<(HexAxial, u16), Vec<HexAxial>>;

impl HexAxial {
    /// Number of hops between two cells: the Chebyshev metric on the cube
    /// lattice, `max(|dx|, |dy|, |dz|)`. Zero exactly on equal
    /// coordinates, symmetric, and triangle-inequality clean. Deltas are
    /// widened before the derived component is computed, so no input can
    /// overflow; distances beyond `u32::MAX` saturate, which only absurd
    /// out-of-range inputs can reach.
    pub fn distance_to(self, other: Self) -> u32 {
        let dq = i64::from(self.q) - i64::from(other.q);
        let dr = i64::from(self.r) - i64::from(other.r);
        let dy = -dq - dr;
        let max = dq.abs().max(dr.abs()).max(dy.abs());
        u32::try_from(max).unwrap_or(u32::MAX)
    }

    /// The adjacent cell one step in the given direction
    pub const fn neighbor(self, direction: HexDirection) -> Self {
        let (dq, dr) = direction.to_axial_vector();
        Self::new(self.q + dq, self.r + dr)
    }

    /// All six edge-adjacent cells, in direction order
    pub fn neighbors(self) -> [Self; 6] {
        array::from_fn(|i| self.neighbor(HexDirection::ALL[i]))
    }

    /// All cells within `radius` hops, the center included, filtered
    /// against the default bounding range
    pub fn range(self, radius: u16) -> Vec<Self> {
        self.range_in(radius, &GridConfig::default())
    }

    /// All cells within `radius` hops of this one, the center included.
    ///
    /// An unclipped result holds exactly `3r^2 + 3r + 1` cells. Cells
    /// that fall outside the configured bounding range are skipped, not
    /// returned, so the result may be smaller near the representable
    /// edge. The caller bounds the radius; see [Self::range_checked] for
    /// a variant that enforces the configured maximum.
    pub fn range_in(self, radius: u16, config: &GridConfig) -> Vec<Self> {
        let r = i32::from(radius);
        let mut results = Vec::with_capacity(util::range_len(radius));
        for dq in -r..=r {
            // Clamp the second axis so the third stays within the disk
            let lo = (-r).max(-dq - r);
            let hi = r.min(-dq + r);
            for dy in lo..=hi {
                let dr = -dq - dy;
                let cell = Self::new(self.q + dq, self.r + dr);
                if cell.is_valid_in(config) {
                    results.push(cell);
                }
            }
        }
        let clipped = util::range_len(radius) - results.len();
        if clipped > 0 {
            debug!(
                "range({}, {}) clipped {} out-of-bounds cells",
                self, radius, clipped
            );
        }
        results
    }

    /// [Self::range_in], but rejecting radii beyond the configured
    /// maximum instead of trying to materialize them
    pub fn range_checked(
        self,
        radius: u16,
        config: &GridConfig,
    ) -> Result<Vec<Self>, GridError> {
        if radius > config.max_region_radius {
            return Err(GridError::RadiusOutOfBounds {
                radius,
                max: config.max_region_radius,
            });
        }
        Ok(self.range_in(radius, config))
    }

    /// [Self::range_in] backed by a cache. A hit returns the stored
    /// region unchanged; a miss computes, stores, and returns it. The
    /// result is identical to calling [Self::range_in] directly.
    pub fn range_cached(
        self,
        radius: u16,
        config: &GridConfig,
        cache: &mut HexRegionCache,
    ) -> Vec<Self> {
        let key = (self, radius);
        if let Some(region) = cache.try_get(&key) {
            return region;
        }
        let region = self.range_in(radius, config);
        cache.set(key, region.clone());
        region
    }

    /// The shell at exactly `radius` hops, filtered against the default
    /// bounding range
    pub fn ring(self, radius: u16) -> Vec<Self> {
        self.ring_in(radius, &GridConfig::default())
    }

    /// All cells at exactly `radius` hops from this one.
    ///
    /// Radius zero is the center alone. Otherwise the walk starts at the
    /// eastern corner of the shell and follows the six edges in direction
    /// order, emitting `6r` cells in a consistent winding with no
    /// duplicates. Out-of-bounds cells are skipped, same as
    /// [Self::range_in].
    pub fn ring_in(self, radius: u16, config: &GridConfig) -> Vec<Self> {
        if radius == 0 {
            return if self.is_valid_in(config) {
                vec![self]
            } else {
                Vec::new()
            };
        }
        let r = i32::from(radius);
        let (eq, er) = HexDirection::East.to_axial_vector();
        let mut pos = Self::new(self.q + eq * r, self.r + er * r);
        let mut results = Vec::with_capacity(util::ring_len(radius));
        for edge in HexDirection::ALL {
            // Stepping two sectors past the corner direction follows the
            // edge to the next corner
            let step = edge.rotated(2);
            for _ in 0..radius {
                if pos.is_valid_in(config) {
                    results.push(pos);
                }
                pos = pos.neighbor(step);
            }
        }
        let clipped = util::ring_len(radius) - results.len();
        if clipped > 0 {
            debug!(
                "ring({}, {}) clipped {} out-of-bounds cells",
                self, radius, clipped
            );
        }
        results
    }

    /// [Self::ring_in], but rejecting radii beyond the configured maximum
    pub fn ring_checked(
        self,
        radius: u16,
        config: &GridConfig,
    ) -> Result<Vec<Self>, GridError> {
        if radius > config.max_region_radius {
            return Err(GridError::RadiusOutOfBounds {
                radius,
                max: config.max_region_radius,
            });
        }
        Ok(self.ring_in(radius, config))
    }

    /// [Self::ring_in] backed by a cache, same contract as
    /// [Self::range_cached]
    pub fn ring_cached(
        self,
        radius: u16,
        config: &GridConfig,
        cache: &mut HexRegionCache,
    ) -> Vec<Self> {
        let key = (self, radius);
        if let Some(shell) = cache.try_get(&key) {
            return shell;
        }
        let shell = self.ring_in(radius, config);
        cache.set(key, shell.clone());
        shell
    }

    /// The cells a straight line from here to `other` passes through,
    /// endpoints included.
    ///
    /// With `n = distance_to(other)`, the line samples `n + 1` evenly
    /// spaced fractional points and rounds each to its cell, so the
    /// result has length `n + 1`, starts exactly here, and ends exactly
    /// at `other`. Samples that land on a cell boundary resolve by the
    /// fixed rounding priority, keeping paths deterministic.
    pub fn line_to(self, other: Self) -> Vec<Self> {
        let n = self.distance_to(other);
        if n == 0 {
            return vec![self];
        }
        let start = self.to_cube();
        let end = other.to_cube();
        (0..=n)
            .map(|i| {
                let t = f64::from(i) / f64::from(n);
                HexCube::round(
                    util::lerp(start.x(), end.x(), t),
                    util::lerp(start.y(), end.y(), t),
                    util::lerp(start.z(), end.z(), t),
                )
                .to_axial()
            })
            .collect()
    }
}

impl HexCube {
    /// Number of hops between two cells; see [HexAxial::distance_to]
    pub fn distance_to(self, other: Self) -> u32 {
        self.to_axial().distance_to(other.to_axial())
    }

    /// The adjacent cell one step in the given direction
    pub const fn neighbor(self, direction: HexDirection) -> Self {
        let (dx, dy, _) = direction.to_cube_vector();
        Self::new_xy(self.x() + dx, self.y() + dy)
    }

    /// All six edge-adjacent cells, in direction order
    pub fn neighbors(self) -> [Self; 6] {
        array::from_fn(|i| self.neighbor(HexDirection::ALL[i]))
    }

    pub fn range(self, radius: u16) -> Vec<Self> {
        self.range_in(radius, &GridConfig::default())
    }

    pub fn range_in(self, radius: u16, config: &GridConfig) -> Vec<Self> {
        self.to_axial()
            .range_in(radius, config)
            .into_iter()
            .map(HexAxial::to_cube)
            .collect()
    }

    pub fn ring(self, radius: u16) -> Vec<Self> {
        self.ring_in(radius, &GridConfig::default())
    }

    pub fn ring_in(self, radius: u16, config: &GridConfig) -> Vec<Self> {
        self.to_axial()
            .ring_in(radius, config)
            .into_iter()
            .map(HexAxial::to_cube)
            .collect()
    }

    pub fn line_to(self, other: Self) -> Vec<Self> {
        self.to_axial()
            .line_to(other.to_axial())
            .into_iter()
            .map(HexAxial::to_cube)
            .collect()
    }
}

impl HexOffset {
    /// Number of hops between two cells. The other coordinate may use
    /// either scheme; both resolve through axial before measuring.
    pub fn distance_to(self, other: Self) -> u32 {
        self.to_axial().distance_to(other.to_axial())
    }

    /// The adjacent cell one step in the given direction, staying in
    /// offset form.
    ///
    /// The delta comes from the parity-indexed table for this scheme and
    /// column. Offset components never take raw direction vectors; the
    /// table is the only legal step.
    pub const fn neighbor(self, direction: HexDirection) -> Self {
        let (dcol, drow) = direction.offset_delta(self.scheme, self.col);
        Self::new(self.scheme, self.col + dcol, self.row + drow)
    }

    /// All six edge-adjacent cells, in direction order
    pub fn neighbors(self) -> [Self; 6] {
        array::from_fn(|i| self.neighbor(HexDirection::ALL[i]))
    }
}

impl HexDoubled {
    /// Number of hops between two cells. Both values are assumed valid;
    /// check parity first when in doubt.
    pub fn distance_to(self, other: Self) -> u32 {
        self.to_axial().distance_to(other.to_axial())
    }

    /// The adjacent cell one step in the given direction. Doubled deltas
    /// are uniform (no parity split) and always move `col + row` by an
    /// even amount, so stepping preserves validity and never silently
    /// repairs an invalid value.
    pub const fn neighbor(self, direction: HexDirection) -> Self {
        let (dcol, drow) = direction.to_doubled_vector();
        Self::new(self.col + dcol, self.row + drow)
    }

    /// All six edge-adjacent cells, in direction order
    pub fn neighbors(self) -> [Self; 6] {
        array::from_fn(|i| self.neighbor(HexDirection::ALL[i]))
    }
}

impl HexCoord {
    /// Number of hops between two cells, whatever their representations
    pub fn distance_to(self, other: Self) -> u32 {
        self.to_axial().distance_to(other.to_axial())
    }

    /// The adjacent cell one step in the given direction, in the same
    /// representation as this value
    pub fn neighbor(self, direction: HexDirection) -> Self {
        match self {
            Self::Cube(cube) => Self::Cube(cube.neighbor(direction)),
            Self::Axial(axial) => Self::Axial(axial.neighbor(direction)),
            Self::Offset(offset) => Self::Offset(offset.neighbor(direction)),
            Self::Doubled(doubled) => {
                Self::Doubled(doubled.neighbor(direction))
            }
        }
    }

    /// All six edge-adjacent cells, in direction order and in this
    /// value's representation
    pub fn neighbors(self) -> [Self; 6] {
        array::from_fn(|i| self.neighbor(HexDirection::ALL[i]))
    }

    pub fn range(self, radius: u16) -> Vec<Self> {
        self.range_in(radius, &GridConfig::default())
    }

    /// [HexAxial::range_in], with results converted back to this value's
    /// representation
    pub fn range_in(self, radius: u16, config: &GridConfig) -> Vec<Self> {
        let region = self.to_axial().range_in(radius, config);
        self.convert_region(region)
    }

    pub fn ring(self, radius: u16) -> Vec<Self> {
        self.ring_in(radius, &GridConfig::default())
    }

    /// [HexAxial::ring_in], with results converted back to this value's
    /// representation
    pub fn ring_in(self, radius: u16, config: &GridConfig) -> Vec<Self> {
        let shell = self.to_axial().ring_in(radius, config);
        self.convert_region(shell)
    }

    /// [HexAxial::line_to], with results converted back to this value's
    /// representation
    pub fn line_to(self, other: Self) -> Vec<Self> {
        let path = self.to_axial().line_to(other.to_axial());
        self.convert_region(path)
    }

    /// Map a batch of axial results into this value's representation
    fn convert_region(self, region: Vec<HexAxial>) -> Vec<Self> {
        region
            .into_iter()
            .map(|axial| match self {
                Self::Cube(_) => Self::Cube(axial.to_cube()),
                Self::Axial(_) => Self::Axial(axial),
                Self::Offset(offset) => {
                    Self::Offset(axial.to_offset(offset.scheme))
                }
                Self::Doubled(_) => Self::Doubled(axial.to_doubled()),
            })
            .collect()
    }
}
