//! Convex hull by Graham scan, with Akl-Toussaint point reduction.
//!
//! The hull is computed on a working list of references into the input
//! buffer; the input itself is never reordered. Output coordinates are
//! copied from the input and keep its layout.
//!
//! # Orientation of the result
//!
//! Points are sorted by decreasing angle around the pivot (the lowest,
//! then leftmost point) and the scan discards every vertex at which the
//! boundary turns counter-clockwise. The resulting ring therefore
//! starts and ends at the pivot and runs clockwise. For example the
//! hull of `(1 1, 3 3, 4 4, 2 5)` is the ring `(1 1, 2 5, 4 4, 1 1)`.

use std::cmp::Ordering;

use itertools::Itertools;
use log::debug;

use crate::{
    coord::xy_equal,
    locate::{locate_point_in_ring, Location},
    orientation::{orientation, Orientation},
    ordered::sort_unique,
    utils::orientation_as_ordering,
    Coord, CoordBuf, FlatCoords, Layout,
};

/// Inputs with more distinct points than this are first reduced with
/// the octagon heuristic.
pub const REDUCE_THRESHOLD: usize = 50;

/// The convex hull of a set of points.
#[derive(Debug, Clone, PartialEq)]
pub enum ConvexHull {
    /// The input had no coordinates.
    Empty,
    /// All input points coincide.
    Point(Coord),
    /// All input points lie on a line; the two extreme points.
    LineString(CoordBuf),
    /// A closed, clockwise ring.
    Polygon(CoordBuf),
}

impl ConvexHull {
    /// The coordinates of the hull, in the layout of the input.
    pub fn coords(&self) -> &[f64] {
        match self {
            ConvexHull::Empty => &[],
            ConvexHull::Point(c) => c.as_slice(),
            ConvexHull::LineString(buf) | ConvexHull::Polygon(buf) => buf.flat_coords(),
        }
    }
}

/// Compute the convex hull of `points`.
///
/// Parts (`ends`) of the buffer are ignored: every coordinate is a
/// point. Duplicate points (equal in `X` and `Y`) are considered once;
/// the first occurrence in sorted order is the one copied to the
/// output.
pub fn convex_hull(points: FlatCoords<'_>) -> ConvexHull {
    let layout = points.layout();
    let mut pts: Vec<&[f64]> = points.iter().collect();
    sort_unique(&mut pts);

    match pts.len() {
        0 => return ConvexHull::Empty,
        1 => {
            debug!("convex_hull: all {} points coincide", points.num_coords());
            return ConvexHull::Point(Coord::from_slice(pts[0]));
        }
        2 => return ConvexHull::LineString(to_buf(layout, &pts)),
        _ => {}
    }

    if pts.len() > REDUCE_THRESHOLD {
        pts = reduce(layout, pts);
    }

    let ring = graham_scan(pts);
    line_or_polygon(layout, &ring)
}

/// Graham scan over at least three distinct points.
///
/// Returns the hull ring, closed by repeating the pivot. Collinear
/// runs may survive; they are removed by [`clean_ring`].
fn graham_scan(mut pts: Vec<&[f64]>) -> Vec<&[f64]> {
    debug_assert!(pts.len() >= 3);

    // lowest point, leftmost among the lowest
    if let Some(pivot) = pts.iter().position_min_by(|a, b| cmp_yx(a, b)) {
        pts.swap(0, pivot);
    }
    let pivot = pts[0];
    pts[1..].sort_by(|a, b| radial_cmp(pivot, a, b));

    let mut stack: Vec<&[f64]> = Vec::with_capacity(pts.len() + 1);
    stack.extend_from_slice(&pts[..3]);
    for &c in &pts[3..] {
        while stack.len() >= 2
            && orientation(stack[stack.len() - 2], stack[stack.len() - 1], c)
                == Orientation::CounterClockwise
        {
            stack.pop();
        }
        stack.push(c);
    }
    stack.push(pivot);
    stack
}

#[inline]
fn cmp_yx(a: &[f64], b: &[f64]) -> Ordering {
    a[1]
        .partial_cmp(&b[1])
        .unwrap_or(Ordering::Equal)
        .then_with(|| a[0].partial_cmp(&b[0]).unwrap_or(Ordering::Equal))
}

/// Order points by decreasing angle around `pivot`, nearer points first
/// on ties.
///
/// All points lie in the half-plane above the pivot, so comparing by
/// orientation is a total order.
fn radial_cmp(pivot: &[f64], a: &[f64], b: &[f64]) -> Ordering {
    match orientation_as_ordering(orientation(pivot, a, b)) {
        Ordering::Equal => {
            let dist2 = |p: &[f64]| {
                let dx = p[0] - pivot[0];
                let dy = p[1] - pivot[1];
                dx * dx + dy * dy
            };
            dist2(a).partial_cmp(&dist2(b)).unwrap_or(Ordering::Equal)
        }
        ord => ord,
    }
}

/// Remove repeated coordinates, and coordinates lying on the segment
/// between their neighbours, from a closed ring.
fn clean_ring<'a>(ring: &[&'a [f64]]) -> Vec<&'a [f64]> {
    let mut cleaned = Vec::with_capacity(ring.len());
    let mut prev_distinct: Option<&[f64]> = None;
    for (&curr, &next) in ring.iter().tuple_windows() {
        if xy_equal(curr, next) {
            continue;
        }
        if let Some(prev) = prev_distinct {
            if is_between(prev, curr, next) {
                continue;
            }
        }
        cleaned.push(curr);
        prev_distinct = Some(curr);
    }
    if let Some(&last) = ring.last() {
        cleaned.push(last);
    }
    cleaned
}

/// Whether `c2` lies on the segment `c1 -> c3`.
fn is_between(c1: &[f64], c2: &[f64], c3: &[f64]) -> bool {
    if !orientation(c1, c2, c3).is_collinear() {
        return false;
    }
    let within = |i: usize| {
        c1[i] != c3[i]
            && ((c1[i] <= c2[i] && c2[i] <= c3[i]) || (c3[i] <= c2[i] && c2[i] <= c1[i]))
    };
    within(0) || within(1)
}

fn line_or_polygon(layout: Layout, ring: &[&[f64]]) -> ConvexHull {
    let cleaned = clean_ring(ring);
    if cleaned.len() == 3 {
        debug!("convex_hull: points are collinear");
        ConvexHull::LineString(to_buf(layout, &cleaned[..2]))
    } else {
        ConvexHull::Polygon(to_buf(layout, &cleaned))
    }
}

fn to_buf(layout: Layout, coords: &[&[f64]]) -> CoordBuf {
    let mut buf = CoordBuf::with_capacity(layout, coords.len());
    for c in coords {
        buf.push(c);
    }
    buf
}

/// Drop the points strictly inside the octagon spanned by the extreme
/// points in the eight principal directions. Those points cannot be
/// hull vertices.
///
/// `pts` must be sorted and unique; so is the result.
fn reduce<'a>(layout: Layout, pts: Vec<&'a [f64]>) -> Vec<&'a [f64]> {
    let ring = match oct_ring(&pts) {
        Some(ring) => ring,
        None => {
            debug!("convex_hull: octagon is degenerate, skipping reduction");
            return pts;
        }
    };
    let ring_buf = to_buf(layout, &ring);

    let mut reduced: Vec<&[f64]> = ring[..ring.len() - 1].to_vec();
    reduced.extend(
        pts.iter()
            .copied()
            .filter(|p| locate_point_in_ring(p, ring_buf.as_flat()) == Location::Exterior),
    );
    sort_unique(&mut reduced);

    debug!(
        "convex_hull: octagon reduction kept {} of {} points",
        reduced.len(),
        pts.len()
    );
    reduced
}

/// The extreme points in the order: min `x`, min `x - y`, max `y`,
/// max `x + y`, max `x`, max `x - y`, min `y`, min `x + y`. The first
/// point attaining each extreme wins.
fn oct_points<'a>(pts: &[&'a [f64]]) -> [&'a [f64]; 8] {
    let key = |p: &[f64], i: usize| match i {
        0 => -p[0],
        1 => -(p[0] - p[1]),
        2 => p[1],
        3 => p[0] + p[1],
        4 => p[0],
        5 => p[0] - p[1],
        6 => -p[1],
        _ => -(p[0] + p[1]),
    };

    let mut best = [pts[0]; 8];
    for &p in &pts[1..] {
        for (i, b) in best.iter_mut().enumerate() {
            if key(p, i) > key(*b, i) {
                *b = p;
            }
        }
    }
    best
}

/// The closed ring of distinct octagon points, or `None` if it has
/// fewer than three distinct points or no area.
fn oct_ring<'a>(pts: &[&'a [f64]]) -> Option<Vec<&'a [f64]>> {
    let mut ring = oct_points(pts).to_vec();
    ring.dedup_by(|a, b| xy_equal(a, b));

    if ring.len() < 3 {
        return None;
    }
    let (p0, p1) = (ring[0], ring[1]);
    if ring[2..].iter().all(|p| orientation(p0, p1, p).is_collinear()) {
        return None;
    }

    ring.push(p0);
    Some(ring)
}
