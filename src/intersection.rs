//! Robust point-segment and segment-segment intersection.
//!
//! All decisions (whether segments meet, whether they are collinear,
//! whether an endpoint lies on the other segment) are taken with the
//! exact [`orientation`] predicate, so they are consistent with each
//! other and symmetric in the inputs. Only the location of a proper
//! crossing point is computed in floating point.
//!
//! Intersection points that coincide with an input endpoint are copied
//! from the input verbatim and keep its full stride. Proper crossing
//! points are computed and are 2-D.

use itertools::Itertools;
use log::debug;

use crate::{
    coord::xy_equal,
    envelope::Envelope,
    orientation::{orientation, Orientation},
    Coord, FlatCoords,
};

mod central_endpoint;
mod hcoords;

/// Result of intersecting two segments.
#[derive(Debug, Clone, PartialEq)]
pub enum LineIntersection {
    NoIntersection,
    /// The segments meet in exactly one point.
    PointIntersection(Coord),
    /// The segments overlap along a sub-segment, given by its endpoints
    /// in the direction of the first segment.
    CollinearIntersection(Coord, Coord),
}

impl LineIntersection {
    #[inline]
    pub fn has_intersection(&self) -> bool {
        !matches!(self, LineIntersection::NoIntersection)
    }

    /// Number of points describing the intersection (0, 1 or 2).
    pub fn num_points(&self) -> usize {
        match self {
            LineIntersection::NoIntersection => 0,
            LineIntersection::PointIntersection(_) => 1,
            LineIntersection::CollinearIntersection(..) => 2,
        }
    }
}

/// Whether `point` lies on the closed segment `start -> end`.
///
/// A degenerate segment (`start == end`) contains only its own point.
pub fn point_on_segment(point: &[f64], start: &[f64], end: &[f64]) -> bool {
    // envelope first, it is cheaper than the orientation tests
    Envelope::of_segment(start, end).contains_point(point)
        && orientation(start, end, point).is_collinear()
        && orientation(end, start, point).is_collinear()
}

/// Whether `point` is a vertex of `line` or lies in the interior of one
/// of its segments.
///
/// Always `false` for lines of fewer than two coordinates.
pub fn is_on_line(point: &[f64], line: FlatCoords<'_>) -> bool {
    line.iter()
        .tuple_windows()
        .any(|(start, end)| point_on_segment(point, start, end))
}

/// Intersect the segments `a_start -> a_end` and `b_start -> b_end`.
pub fn segments_intersect(
    a_start: &[f64],
    a_end: &[f64],
    b_start: &[f64],
    b_end: &[f64],
) -> LineIntersection {
    let a_env = Envelope::of_segment(a_start, a_end);
    let b_env = Envelope::of_segment(b_start, b_end);
    if !a_env.intersects(&b_env) {
        return LineIntersection::NoIntersection;
    }

    // For each endpoint, compute which side of the other segment it
    // lies on. If both endpoints lie on the same side, the segments do
    // not intersect.
    let o1 = orientation(a_start, a_end, b_start);
    let o2 = orientation(a_start, a_end, b_end);
    if o1 == o2 && !o1.is_collinear() {
        return LineIntersection::NoIntersection;
    }

    let o3 = orientation(b_start, b_end, a_start);
    let o4 = orientation(b_start, b_end, a_end);
    if o3 == o4 && !o3.is_collinear() {
        return LineIntersection::NoIntersection;
    }

    let collinear = [o1, o2, o3, o4].iter().all(|o| o.is_collinear());
    if collinear {
        return collinear_intersection(a_start, a_end, b_start, b_end);
    }

    // Exactly one intersection point. If it is an endpoint, copy it so
    // that it has the exact value.
    if [o1, o2, o3, o4].contains(&Orientation::Collinear) {
        // Shared endpoints are checked explicitly, not through the
        // orientations.
        let pt = if xy_equal(a_start, b_start) || xy_equal(a_start, b_end) {
            a_start
        } else if xy_equal(a_end, b_start) || xy_equal(a_end, b_end) {
            a_end
        } else if o1.is_collinear() {
            b_start
        } else if o2.is_collinear() {
            b_end
        } else if o3.is_collinear() {
            a_start
        } else {
            a_end
        };
        return LineIntersection::PointIntersection(Coord::from_slice(pt));
    }

    LineIntersection::PointIntersection(proper_intersection(
        a_start, a_end, &a_env, b_start, b_end, &b_env,
    ))
}

/// Overlap of two collinear segments whose envelopes intersect.
///
/// Both segments are projected on the axis with the larger extent and
/// their intervals intersected there. The overlap endpoints are always
/// input endpoints, preferring those of `a`.
fn collinear_intersection(
    a_start: &[f64],
    a_end: &[f64],
    b_start: &[f64],
    b_end: &[f64],
) -> LineIntersection {
    let mut env = Envelope::of_segment(a_start, a_end);
    env.expand_to_include(b_start);
    env.expand_to_include(b_end);
    let axis = if env.width() >= env.height() { 0 } else { 1 };

    let a_forward = a_start[axis] <= a_end[axis];
    let (a_lo, a_hi) = if a_forward {
        (a_start, a_end)
    } else {
        (a_end, a_start)
    };
    let (b_lo, b_hi) = if b_start[axis] <= b_end[axis] {
        (b_start, b_end)
    } else {
        (b_end, b_start)
    };

    let lo = if b_lo[axis] > a_lo[axis] { b_lo } else { a_lo };
    let (hi, hi_from_a) = if b_hi[axis] < a_hi[axis] {
        (b_hi, false)
    } else {
        (a_hi, true)
    };

    if lo[axis] > hi[axis] {
        LineIntersection::NoIntersection
    } else if lo[axis] == hi[axis] {
        let pt = if hi_from_a { hi } else { lo };
        LineIntersection::PointIntersection(Coord::from_slice(pt))
    } else if a_forward {
        LineIntersection::CollinearIntersection(Coord::from_slice(lo), Coord::from_slice(hi))
    } else {
        LineIntersection::CollinearIntersection(Coord::from_slice(hi), Coord::from_slice(lo))
    }
}

/// Crossing point of two segments that cross at a single interior
/// point.
///
/// The inputs are translated so that the center of the intersection of
/// their envelopes is at the origin, which removes common significant
/// digits before the homogeneous-coordinates computation.
fn proper_intersection(
    a_start: &[f64],
    a_end: &[f64],
    a_env: &Envelope,
    b_start: &[f64],
    b_end: &[f64],
    b_env: &Envelope,
) -> Coord {
    let [cx, cy] = a_env
        .intersection(b_env)
        .map(|env| env.center())
        .unwrap_or([0., 0.]);
    let shift = |c: &[f64]| [c[0] - cx, c[1] - cy];

    let pt = hcoords::intersection(
        &shift(a_start),
        &shift(a_end),
        &shift(b_start),
        &shift(b_end),
    )
    .map(|[x, y]| [x + cx, y + cy]);

    match pt {
        Some(pt) if a_env.contains_point(&pt) && b_env.contains_point(&pt) => {
            Coord::xy(pt[0], pt[1])
        }
        pt => {
            let fallback = central_endpoint::intersection(a_start, a_end, b_start, b_end);
            debug!(
                "intersection: computed point {:?} is unusable, using endpoint {:?}",
                pt, fallback
            );
            Coord::from_slice(fallback)
        }
    }
}
