//! Adjacency, distance, and region queries for triangle coordinates.
//!
//! Distance here is the Chebyshev metric on the shared cube lattice, the
//! same algebra the hex system uses. It is a coordinate metric, not a
//! hop count: the three edge-adjacent cells sit at distance one, but so
//! do three vertex-adjacent ones, so a distance-one cell is not
//! necessarily reachable in one edge crossing. Regions, rings, and lines
//! are all defined against this metric.
//!
//! Ring enumeration filters the disk for exact distance rather than
//! walking a shell corner-to-corner. The hex-style edge walk assumes
//! every direction vector is position-independent, which triangle
//! directions are not.

use crate::{
    cache::GridCache,
    config::GridConfig,
    direction::GridDirection,
    error::GridError,
    tri::{
        direction::TriDirection,
        unit::{TriAxial, TriCoord, TriCube, TriOffset},
    },
    util,
};
use log::debug;
use std::array;

/// Cache for triangle region queries, keyed by center and radius. One
/// instance per query family and per config.
pub type TriRegionCache = GridCache<(TriAxial, u16), Vec<TriAxial>>;

impl TriAxial {
    /// Chebyshev distance on the cube lattice, `max(|dx|, |dy|, |dz|)`.
    /// Symmetric, zero only on equal coordinates. Widened internally so
    /// no input can overflow; absurd deltas saturate.
    pub fn distance_to(self, other: Self) -> u32 {
        let dq = i64::from(self.q) - i64::from(other.q);
        let dr = i64::from(self.r) - i64::from(other.r);
        let dy = -dq - dr;
        let max = dq.abs().max(dr.abs()).max(dy.abs());
        u32::try_from(max).unwrap_or(u32::MAX)
    }

    /// The cell across the given edge. The step vector is chosen by this
    /// cell's own orientation, so the same direction walks opposite ways
    /// from an upward and a downward cell.
    pub const fn neighbor(self, direction: TriDirection) -> Self {
        let (dq, dr) = direction.to_axial_vector(self.orientation());
        Self::new(self.q + dq, self.r + dr)
    }

    /// The three edge-adjacent cells, in direction order. Each points
    /// the other way from this cell.
    pub fn neighbors(self) -> [Self; 3] {
        array::from_fn(|i| self.neighbor(TriDirection::ALL[i]))
    }

    /// Cells sharing at least one lattice vertex with this one, edge
    /// neighbors and self excluded.
    ///
    /// Derived by exact incidence: a candidate qualifies iff one of its
    /// three vertices coincides with one of ours, tested on integer
    /// half-unit vertex coordinates. Every cell of the unbounded lattice
    /// has nine; twelve is the ceiling when the edge-adjacent cells are
    /// counted too, since those share two vertices each. Returned in row
    /// scan order, duplicates impossible by construction.
    pub fn vertex_neighbors(self) -> Vec<Self> {
        let own = self.lattice_vertices();
        let edge = self.neighbors();
        let mut results = Vec::new();
        for dr in -1..=1 {
            for dq in -2..=2 {
                if dq == 0 && dr == 0 {
                    continue;
                }
                let cell = Self::new(self.q + dq, self.r + dr);
                if edge.contains(&cell) {
                    continue;
                }
                let shares = cell
                    .lattice_vertices()
                    .iter()
                    .any(|vertex| own.contains(vertex));
                if shares {
                    results.push(cell);
                }
            }
        }
        results
    }

    /// All cells within `radius` of this one, the center included,
    /// filtered against the default bounding range
    pub fn range(self, radius: u16) -> Vec<Self> {
        self.range_in(radius, &GridConfig::default())
    }

    /// All cells within `radius` of this one under the distance metric.
    /// Unclipped, that is `3r^2 + 3r + 1` cells of alternating
    /// orientation; out-of-bounds cells are skipped.
    pub fn range_in(self, radius: u16, config: &GridConfig) -> Vec<Self> {
        let r = i32::from(radius);
        let mut results = Vec::with_capacity(util::range_len(radius));
        for dq in -r..=r {
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
    /// maximum
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

    /// [Self::range_in] backed by a cache; identical results
    pub fn range_cached(
        self,
        radius: u16,
        config: &GridConfig,
        cache: &mut TriRegionCache,
    ) -> Vec<Self> {
        let key = (self, radius);
        if let Some(region) = cache.try_get(&key) {
            return region;
        }
        let region = self.range_in(radius, config);
        cache.set(key, region.clone());
        region
    }

    /// The cells at exactly `radius`, filtered against the default
    /// bounding range
    pub fn ring(self, radius: u16) -> Vec<Self> {
        self.ring_in(radius, &GridConfig::default())
    }

    /// All cells at exactly `radius` from this one: the disk minus its
    /// interior, enumerated in one pass with an exact distance filter.
    /// Unclipped, that is `6r` cells for positive radii and the center
    /// alone for radius zero.
    pub fn ring_in(self, radius: u16, config: &GridConfig) -> Vec<Self> {
        if radius == 0 {
            return if self.is_valid_in(config) {
                vec![self]
            } else {
                Vec::new()
            };
        }
        let r = i32::from(radius);
        let mut results = Vec::with_capacity(util::ring_len(radius));
        for dq in -r..=r {
            let lo = (-r).max(-dq - r);
            let hi = r.min(-dq + r);
            for dy in lo..=hi {
                let dr = -dq - dy;
                if dq.abs().max(dy.abs()).max(dr.abs()) != r {
                    continue;
                }
                let cell = Self::new(self.q + dq, self.r + dr);
                if cell.is_valid_in(config) {
                    results.push(cell);
                }
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

    /// [Self::ring_in], but rejecting radii beyond the configured
    /// maximum
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

    /// [Self::ring_in] backed by a cache; identical results
    pub fn ring_cached(
        self,
        radius: u16,
        config: &GridConfig,
        cache: &mut TriRegionCache,
    ) -> Vec<Self> {
        let key = (self, radius);
        if let Some(shell) = cache.try_get(&key) {
            return shell;
        }
        let shell = self.ring_in(radius, config);
        cache.set(key, shell.clone());
        shell
    }

    /// The lattice cells a straight line to `other` passes through,
    /// endpoints included: `distance + 1` cells, each a Chebyshev step
    /// from the last. Steps may cross a vertex rather than an edge;
    /// this is a rasterization over the coordinate lattice, not an
    /// edge-walkable path.
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
                TriCube::round(
                    util::lerp(start.x(), end.x(), t),
                    util::lerp(start.y(), end.y(), t),
                    util::lerp(start.z(), end.z(), t),
                )
                .to_axial()
            })
            .collect()
    }
}

impl TriCube {
    pub fn distance_to(self, other: Self) -> u32 {
        self.to_axial().distance_to(other.to_axial())
    }

    /// The cell across the given edge, stepping by this cell's own
    /// orientation
    pub const fn neighbor(self, direction: TriDirection) -> Self {
        let (dx, dy, _) = direction.to_cube_vector(self.orientation());
        Self::new_xy(self.x() + dx, self.y() + dy)
    }

    pub fn neighbors(self) -> [Self; 3] {
        array::from_fn(|i| self.neighbor(TriDirection::ALL[i]))
    }

    pub fn vertex_neighbors(self) -> Vec<Self> {
        self.to_axial()
            .vertex_neighbors()
            .into_iter()
            .map(TriAxial::to_cube)
            .collect()
    }

    pub fn range(self, radius: u16) -> Vec<Self> {
        self.range_in(radius, &GridConfig::default())
    }

    pub fn range_in(self, radius: u16, config: &GridConfig) -> Vec<Self> {
        self.to_axial()
            .range_in(radius, config)
            .into_iter()
            .map(TriAxial::to_cube)
            .collect()
    }

    pub fn ring(self, radius: u16) -> Vec<Self> {
        self.ring_in(radius, &GridConfig::default())
    }

    pub fn ring_in(self, radius: u16, config: &GridConfig) -> Vec<Self> {
        self.to_axial()
            .ring_in(radius, config)
            .into_iter()
            .map(TriAxial::to_cube)
            .collect()
    }

    pub fn line_to(self, other: Self) -> Vec<Self> {
        self.to_axial()
            .line_to(other.to_axial())
            .into_iter()
            .map(TriAxial::to_cube)
            .collect()
    }
}

impl TriOffset {
    /// Chebyshev distance through the axial images
    pub fn distance_to(self, other: Self) -> u32 {
        self.to_axial().distance_to(other.to_axial())
    }

    /// The cell across the given edge. Offset form has no step table of
    /// its own; the move resolves through axial and converts back.
    pub const fn neighbor(self, direction: TriDirection) -> Self {
        self.to_axial().neighbor(direction).to_offset()
    }

    pub fn neighbors(self) -> [Self; 3] {
        array::from_fn(|i| self.neighbor(TriDirection::ALL[i]))
    }

    pub fn vertex_neighbors(self) -> Vec<Self> {
        self.to_axial()
            .vertex_neighbors()
            .into_iter()
            .map(TriAxial::to_offset)
            .collect()
    }
}

impl TriCoord {
    pub fn distance_to(self, other: Self) -> u32 {
        self.to_axial().distance_to(other.to_axial())
    }

    /// The cell across the given edge, in this value's representation
    pub fn neighbor(self, direction: TriDirection) -> Self {
        match self {
            Self::Cube(cube) => Self::Cube(cube.neighbor(direction)),
            Self::Axial(axial) => Self::Axial(axial.neighbor(direction)),
            Self::Offset(offset) => Self::Offset(offset.neighbor(direction)),
        }
    }

    pub fn neighbors(self) -> [Self; 3] {
        array::from_fn(|i| self.neighbor(TriDirection::ALL[i]))
    }

    pub fn vertex_neighbors(self) -> Vec<Self> {
        let cells = self.to_axial().vertex_neighbors();
        self.convert_region(cells)
    }

    pub fn range(self, radius: u16) -> Vec<Self> {
        self.range_in(radius, &GridConfig::default())
    }

    pub fn range_in(self, radius: u16, config: &GridConfig) -> Vec<Self> {
        let region = self.to_axial().range_in(radius, config);
        self.convert_region(region)
    }

    pub fn ring(self, radius: u16) -> Vec<Self> {
        self.ring_in(radius, &GridConfig::default())
    }

    pub fn ring_in(self, radius: u16, config: &GridConfig) -> Vec<Self> {
        let shell = self.to_axial().ring_in(radius, config);
        self.convert_region(shell)
    }

    pub fn line_to(self, other: Self) -> Vec<Self> {
        let path = self.to_axial().line_to(other.to_axial());
        self.convert_region(path)
    }

    fn convert_region(self, region: Vec<TriAxial>) -> Vec<Self> {
        region
            .into_iter()
            .map(|axial| match self {
                Self::Cube(_) => Self::Cube(axial.to_cube()),
                Self::Axial(_) => Self::Axial(axial),
                Self::Offset(_) => Self::Offset(axial.to_offset()),
            })
            .collect()
    }
}
