//! The robust orientation predicate.
//!
//! [`orientation`] reports the turn direction of a point relative to a
//! directed line. The answer always agrees with the sign of the exact
//! determinant: a cheap floating-point filter certifies the sign in the
//! common case, and only inputs that the filter cannot certify (nearly
//! collinear points with large, cancelling terms) are re-evaluated with
//! arbitrary-precision rationals.

use log::trace;
use num_rational::BigRational;
use num_traits::Signed;

use crate::{coord::xy_equal, FlatCoords};

/// A value which is safely greater than the relative round-off error
/// of the filter's determinant in double precision.
pub const DP_SAFE_EPSILON: f64 = 1e-15;

/// Turn direction of three points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    Clockwise,
    Collinear,
    CounterClockwise,
}

impl Orientation {
    /// The orientation seen with the directed line reversed.
    #[inline]
    pub fn reverse(self) -> Self {
        match self {
            Orientation::Clockwise => Orientation::CounterClockwise,
            Orientation::CounterClockwise => Orientation::Clockwise,
            Orientation::Collinear => Orientation::Collinear,
        }
    }

    #[inline]
    pub fn is_collinear(self) -> bool {
        self == Orientation::Collinear
    }

    #[inline]
    fn from_sign(det: f64) -> Self {
        if det > 0. {
            Orientation::CounterClockwise
        } else if det < 0. {
            Orientation::Clockwise
        } else {
            Orientation::Collinear
        }
    }
}

/// Orientation of `point` relative to the directed segment
/// `origin -> target`.
///
/// Only the `x` and `y` ordinates are read. If `origin == target` the
/// line is undefined and the result is `Collinear`; callers that must
/// reject such input check it themselves.
pub fn orientation(origin: &[f64], target: &[f64], point: &[f64]) -> Orientation {
    orientation_filter(origin, target, point)
        .unwrap_or_else(|| orientation_exact(origin, target, point))
}

/// Fast filter due to Shewchuk.
///
/// Returns `None` when double precision cannot certify the sign.
#[inline]
fn orientation_filter(origin: &[f64], target: &[f64], point: &[f64]) -> Option<Orientation> {
    let det_left = (origin[0] - point[0]) * (target[1] - point[1]);
    let det_right = (origin[1] - point[1]) * (target[0] - point[0]);
    let det = det_left - det_right;

    let det_sum = if det_left > 0. {
        if det_right <= 0. {
            return Some(Orientation::from_sign(det));
        }
        det_left + det_right
    } else if det_left < 0. {
        if det_right >= 0. {
            return Some(Orientation::from_sign(det));
        }
        -det_left - det_right
    } else {
        return Some(Orientation::from_sign(det));
    };

    let err_bound = DP_SAFE_EPSILON * det_sum;
    if det >= err_bound || -det >= err_bound {
        Some(Orientation::from_sign(det))
    } else {
        None
    }
}

/// Evaluate the filter's determinant exactly.
///
/// Every finite `f64` is a dyadic rational, so the conversion and the
/// arithmetic below are exact. Non-finite ordinates have no exact value
/// and are reported as `Collinear`.
#[cold]
fn orientation_exact(origin: &[f64], target: &[f64], point: &[f64]) -> Orientation {
    trace!(
        "orientation: exact fallback for {origin:?} -> {target:?}, {point:?}",
        origin = &origin[..2],
        target = &target[..2],
        point = &point[..2],
    );

    let ordinates = [origin[0], origin[1], target[0], target[1], point[0], point[1]];
    let exact: Option<Vec<BigRational>> = ordinates
        .iter()
        .map(|&v| BigRational::from_float(v))
        .collect();
    let v = match exact {
        Some(v) => v,
        None => return Orientation::Collinear,
    };

    let det_left = (&v[0] - &v[4]) * (&v[3] - &v[5]);
    let det_right = (&v[1] - &v[5]) * (&v[2] - &v[4]);
    let det = det_left - det_right;

    if det.is_positive() {
        Orientation::CounterClockwise
    } else if det.is_negative() {
        Orientation::Clockwise
    } else {
        Orientation::Collinear
    }
}

/// Whether a closed ring is oriented counter-clockwise.
///
/// The ring must repeat its first coordinate at the end and may contain
/// repeated points. Uses the turn at the highest vertex, between its
/// nearest distinct neighbours. Rings with fewer than three distinct
/// points, or an `A-B-A` spike at the highest vertex, report `false`.
///
/// Only guaranteed for valid rings; the result for self-crossing rings
/// is unspecified.
pub fn ring_is_ccw(ring: FlatCoords<'_>) -> bool {
    // # of points without closing endpoint
    let num_pts = match ring.num_coords().checked_sub(1) {
        Some(n) if n >= 3 => n,
        _ => return false,
    };

    // find highest point
    let mut hi_idx = 0;
    for i in 1..=num_pts {
        if ring.coord(i)[1] > ring.coord(hi_idx)[1] {
            hi_idx = i;
        }
    }
    let hi = ring.coord(hi_idx);

    // find distinct point before highest point
    let mut prev_idx = hi_idx;
    loop {
        prev_idx = if prev_idx == 0 { num_pts } else { prev_idx - 1 };
        if !xy_equal(ring.coord(prev_idx), hi) || prev_idx == hi_idx {
            break;
        }
    }

    // find distinct point after highest point
    let mut next_idx = hi_idx;
    loop {
        next_idx = (next_idx + 1) % num_pts;
        if !xy_equal(ring.coord(next_idx), hi) || next_idx == hi_idx {
            break;
        }
    }

    let prev = ring.coord(prev_idx);
    let next = ring.coord(next_idx);

    // A-B-A configuration: fewer than 3 distinct points, or coincident
    // segments at the highest point.
    if xy_equal(prev, hi) || xy_equal(next, hi) || xy_equal(prev, next) {
        return false;
    }

    match orientation(prev, hi, next) {
        // Both edges lie on one horizontal line in opposite directions.
        Orientation::Collinear => prev[0] > next[0],
        ori => ori == Orientation::CounterClockwise,
    }
}

/// Signed area of a closed ring by the shoelace formula.
///
/// Positive for clockwise rings, negative for counter-clockwise rings,
/// zero for degenerate (flat) rings.
pub fn signed_area(ring: FlatCoords<'_>) -> f64 {
    let n = ring.num_coords();
    if n < 3 {
        return 0.;
    }
    let x0 = ring.coord(0)[0];
    let sum: f64 = (1..n - 1)
        .map(|i| {
            let x = ring.coord(i)[0] - x0;
            x * (ring.coord(i - 1)[1] - ring.coord(i + 1)[1])
        })
        .sum();
    sum / 2.
}
