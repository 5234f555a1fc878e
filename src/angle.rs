//! Planar angles between points, in radians.
//!
//! Like [`crate::distance`], these are plain floating-point functions
//! and only read the `X` and `Y` ordinates.

use std::f64::consts::{PI, TAU};

use crate::Orientation;

/// Angle of the vector `p0 -> p1` from the positive `X` axis, in
/// `(-PI, PI]`.
#[inline]
pub fn angle(p0: &[f64], p1: &[f64]) -> f64 {
    (p1[1] - p0[1]).atan2(p1[0] - p0[0])
}

/// Angle of the vector from the origin to `p`.
#[inline]
pub fn angle_from_origin(p: &[f64]) -> f64 {
    p[1].atan2(p[0])
}

#[inline]
fn dot_at(p0: &[f64], p1: &[f64], p2: &[f64]) -> f64 {
    (p0[0] - p1[0]) * (p2[0] - p1[0]) + (p0[1] - p1[1]) * (p2[1] - p1[1])
}

/// Whether the angle `p0, p1, p2` (at `p1`) is less than a right angle.
#[inline]
pub fn is_acute(p0: &[f64], p1: &[f64], p2: &[f64]) -> bool {
    dot_at(p0, p1, p2) > 0.
}

/// Whether the angle `p0, p1, p2` (at `p1`) is more than a right angle.
#[inline]
pub fn is_obtuse(p0: &[f64], p1: &[f64], p2: &[f64]) -> bool {
    dot_at(p0, p1, p2) < 0.
}

/// Unoriented smallest angle between the vectors `tail -> tip1` and
/// `tail -> tip2`, in `[0, PI]`.
pub fn angle_between(tip1: &[f64], tail: &[f64], tip2: &[f64]) -> f64 {
    diff(angle(tail, tip1), angle(tail, tip2))
}

/// Oriented smallest angle from `tail -> tip1` to `tail -> tip2`, in
/// `(-PI, PI]`. Positive when the turn is counter-clockwise.
pub fn angle_between_oriented(tip1: &[f64], tail: &[f64], tip2: &[f64]) -> f64 {
    let delta = angle(tail, tip2) - angle(tail, tip1);
    if delta <= -PI {
        delta + TAU
    } else if delta > PI {
        delta - TAU
    } else {
        delta
    }
}

/// Angle at `p1` between the segments to `p0` and `p2`, as the absolute
/// difference of their directions. The result lies in `[0, 2 * PI)`.
pub fn interior_angle(p0: &[f64], p1: &[f64], p2: &[f64]) -> f64 {
    (angle(p1, p2) - angle(p1, p0)).abs()
}

/// Whether turning from direction `ang1` to `ang2` is clockwise or
/// counter-clockwise.
pub fn angle_orientation(ang1: f64, ang2: f64) -> Orientation {
    let cross = (ang2 - ang1).sin();
    if cross > 0. {
        Orientation::CounterClockwise
    } else if cross < 0. {
        Orientation::Clockwise
    } else {
        Orientation::Collinear
    }
}

/// Bring an angle into `(-PI, PI]`.
pub fn normalize(angle: f64) -> f64 {
    let a = angle % TAU;
    if a > PI {
        a - TAU
    } else if a <= -PI {
        a + TAU
    } else {
        a
    }
}

/// Bring an angle into `[0, 2 * PI)`.
pub fn normalize_positive(angle: f64) -> f64 {
    let mut a = angle % TAU;
    if a < 0. {
        a += TAU;
    }
    // `a + TAU` may round up to `TAU`
    if a >= TAU {
        a = 0.;
    }
    a
}

/// Unoriented difference of two angles.
///
/// For angles in `(-PI, PI]` the result is the smallest angle between
/// the two directions, in `[0, PI]`.
pub fn diff(ang1: f64, ang2: f64) -> f64 {
    let delta = if ang1 < ang2 { ang2 - ang1 } else { ang1 - ang2 };
    if delta > PI {
        TAU - delta
    } else {
        delta
    }
}
