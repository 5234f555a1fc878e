//! Planar distances between points and segments.
//!
//! These are plain floating-point computations; they are not robust
//! and do not use the orientation predicate.

use itertools::Itertools;

use crate::{coord::xy_equal, envelope::Envelope, FlatCoords};

#[inline]
fn distance_2d(a: &[f64], b: &[f64]) -> f64 {
    (a[0] - b[0]).hypot(a[1] - b[1])
}

/// Distance from `p` to the segment `start -> end`.
///
/// A zero-length segment is treated as the point `start`.
pub fn distance_point_segment(p: &[f64], start: &[f64], end: &[f64]) -> f64 {
    if xy_equal(start, end) {
        return distance_2d(p, start);
    }

    // Parameter of the projection of `p` on the line; 0 at start, 1 at
    // end.
    let dx = end[0] - start[0];
    let dy = end[1] - start[1];
    let len2 = dx * dx + dy * dy;
    let r = ((p[0] - start[0]) * dx + (p[1] - start[1]) * dy) / len2;

    if r <= 0. {
        return distance_2d(p, start);
    }
    if r >= 1. {
        return distance_2d(p, end);
    }

    let s = ((start[1] - p[1]) * dx - (start[0] - p[0]) * dy) / len2;
    s.abs() * len2.sqrt()
}

/// Distance from `p` to the infinite line through `start` and `end`.
///
/// `NaN` if `start == end`.
pub fn perpendicular_distance(p: &[f64], start: &[f64], end: &[f64]) -> f64 {
    let dx = end[0] - start[0];
    let dy = end[1] - start[1];
    let len2 = dx * dx + dy * dy;
    let s = ((start[1] - p[1]) * dx - (start[0] - p[0]) * dy) / len2;
    s.abs() * len2.sqrt()
}

/// Distance from `p` to a sequence of contiguous segments.
///
/// A single-coordinate line is a point. Returns `None` for an empty
/// line.
pub fn distance_point_line_string(p: &[f64], line: FlatCoords<'_>) -> Option<f64> {
    let first = line.iter().next()?;
    let dist = line
        .iter()
        .tuple_windows()
        .map(|(start, end)| distance_point_segment(p, start, end))
        .fold(distance_2d(p, first), f64::min);
    Some(dist)
}

/// Distance between the segments `a_start -> a_end` and
/// `b_start -> b_end`; zero if they intersect.
pub fn distance_segment_segment(
    a_start: &[f64],
    a_end: &[f64],
    b_start: &[f64],
    b_end: &[f64],
) -> f64 {
    if xy_equal(a_start, a_end) {
        return distance_point_segment(a_start, b_start, b_end);
    }
    if xy_equal(b_start, b_end) {
        return distance_point_segment(b_end, a_start, a_end);
    }

    if segments_cross(a_start, a_end, b_start, b_end) {
        return 0.;
    }

    distance_point_segment(a_start, b_start, b_end)
        .min(distance_point_segment(a_end, b_start, b_end))
        .min(distance_point_segment(b_start, a_start, a_end))
        .min(distance_point_segment(b_end, a_start, a_end))
}

/// Parametric crossing test; parallel segments never cross here.
fn segments_cross(a_start: &[f64], a_end: &[f64], b_start: &[f64], b_end: &[f64]) -> bool {
    let a_env = Envelope::of_segment(a_start, a_end);
    let b_env = Envelope::of_segment(b_start, b_end);
    if !a_env.intersects(&b_env) {
        return false;
    }

    let denom = (a_end[0] - a_start[0]) * (b_end[1] - b_start[1])
        - (a_end[1] - a_start[1]) * (b_end[0] - b_start[0]);
    if denom == 0. {
        return false;
    }

    let r_num = (a_start[1] - b_start[1]) * (b_end[0] - b_start[0])
        - (a_start[0] - b_start[0]) * (b_end[1] - b_start[1]);
    let s_num = (a_start[1] - b_start[1]) * (a_end[0] - a_start[0])
        - (a_start[0] - b_start[0]) * (a_end[1] - a_start[1]);
    let r = r_num / denom;
    let s = s_num / denom;

    (0. ..=1.).contains(&r) && (0. ..=1.).contains(&s)
}
