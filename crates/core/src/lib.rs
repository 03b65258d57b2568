//! Lattica is a coordinate algebra for discrete grids: hexagonal and
//! triangular tessellations, each with interchangeable coordinate
//! systems, exact conversions between them, and the standard grid
//! algorithms (distance, neighbors, ranges, rings, line paths, and
//! world-space mapping).
//!
//! ```
//! use lattica::{HexAxial, HexLayout, HexOrientation};
//!
//! let center = HexAxial::new(2, -1);
//! assert_eq!(center.range(2).len(), 19);
//!
//! // Pin the grid to the plane and map both ways
//! let layout = HexLayout::new(HexOrientation::Pointy, 1.0).unwrap();
//! let world = center.to_world(&layout);
//! assert_eq!(HexAxial::from_world(world, &layout).unwrap(), center);
//! ```
//!
//! Every coordinate system converts through its tessellation's canonical
//! axial form, and every algorithm is defined against that form with the
//! other systems delegating. See the [hex] and [tri] module docs for the
//! coordinate systems themselves and the rules they keep.
//!
//! Coordinates are pure values; nothing here owns a grid. Operations
//! that need bounds take a [GridConfig], and region queries can be
//! memoized through an injected [GridCache] so callers decide where
//! state lives.

mod cache;
mod config;
mod direction;
mod error;
mod util;

pub mod hex;
pub mod tri;

pub use crate::{
    cache::{CacheStats, GridCache},
    config::GridConfig,
    direction::GridDirection,
    error::{GridError, GridErrorKind},
    hex::*,
    tri::*,
    util::{
        point::{Point2, Point3},
        range_len, ring_len,
    },
};
