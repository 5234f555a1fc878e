//! Robust planar predicates and algorithms over flat coordinate buffers.
//!
//! 1. [Orientation](#orientation)
//! 1. [Segment intersection](#segment-intersection)
//! 1. [Point location](#point-location)
//! 1. [Convex hull](#convex-hull)
//! 1. [Centroids](#centroids)
//!
//! Geometries are read from [`FlatCoords`]: a slice of `f64` holding
//! `N * stride` ordinates, where the [`Layout`] fixes the stride and the
//! meaning of the ordinates after `X` and `Y`. Optional `ends` offsets
//! split the buffer into parts (the rings of a polygon, say). Only the
//! `X` and `Y` ordinates take part in any computation.
//!
//! ```rust
//! use flat_cga::{orientation, FlatCoords, Layout, Orientation};
//! let coords = [0., 0., 1., 0., 1., 1.];
//! let ring = FlatCoords::new(Layout::XY, &coords).unwrap();
//! assert_eq!(
//!     orientation(ring.coord(0), ring.coord(1), ring.coord(2)),
//!     Orientation::CounterClockwise
//! );
//! ```
//!
//! # Orientation
//!
//! [`orientation`] decides on which side of a directed line a point
//! lies. A floating point filter answers almost every query; the rest
//! are evaluated exactly with big rationals. Everything else in the
//! crate is built on this predicate, so the answers of the other
//! algorithms are consistent with each other.
//!
//! # Segment intersection
//!
//! [`segments_intersect`] classifies a pair of segments as disjoint,
//! meeting in a point, or overlapping along a sub-segment. See
//! [`LineIntersection`].
//!
//! # Point location
//!
//! [`locate_point_in_ring`] and [`locate_point_in_polygon`] classify a
//! point as [`Location::Interior`], [`Location::Boundary`] or
//! [`Location::Exterior`] by counting ray crossings.
//!
//! # Convex hull
//!
//! [`convex_hull`] runs a Graham scan, after discarding the points
//! inside an extremal octagon when the input is large.
//!
//! ```rust
//! use flat_cga::{convex_hull, ConvexHull, FlatCoords, Layout};
//! let coords = [1., 1., 3., 3., 4., 4., 2., 5.];
//! let hull = convex_hull(FlatCoords::new(Layout::XY, &coords).unwrap());
//! assert!(matches!(hull, ConvexHull::Polygon(_)));
//! assert_eq!(hull.coords(), &[1., 1., 2., 5., 4., 4., 1., 1.]);
//! ```
//!
//! # Centroids
//!
//! [`PointCentroid`], [`LineCentroid`] and [`AreaCentroid`] accumulate
//! weighted sums and may be merged. [`centroid`] picks the right one for
//! a `geo` geometry.

mod coord;
pub use coord::{Coord, CoordBuf, FlatCoords, Layout};

mod error;
pub use error::{GeometryError, Result};

mod envelope;
pub use envelope::Envelope;

mod ordered;

pub mod orientation;
pub use orientation::{orientation, ring_is_ccw, signed_area, Orientation};

pub mod angle;

pub mod distance;

pub mod intersection;
pub use intersection::{is_on_line, point_on_segment, segments_intersect, LineIntersection};

pub mod locate;
pub use locate::{
    locate_point_in_polygon, locate_point_in_polygons, locate_point_in_ring, Location,
    RayCrossingCounter,
};

pub mod hull;
pub use hull::{convex_hull, ConvexHull};

pub mod centroid;
pub use centroid::{centroid, AreaCentroid, LineCentroid, PointCentroid};

#[cfg(test)]
#[path = "../benches/utils/random.rs"]
pub mod random;

pub(crate) mod utils;
