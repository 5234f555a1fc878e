use std::cmp::Ordering;

use crate::distance::distance_point_segment;

/// Approximate the intersection of two segments known to intersect by
/// the input endpoint nearest to the other segment.
///
/// Used when the computed intersection is not trustworthy. The answer
/// is one of the inputs, so it is always within both envelopes up to
/// the distance between the segments at that endpoint.
pub(super) fn intersection<'a>(
    a_start: &'a [f64],
    a_end: &'a [f64],
    b_start: &'a [f64],
    b_end: &'a [f64],
) -> &'a [f64] {
    let candidates = [
        (a_start, distance_point_segment(a_start, b_start, b_end)),
        (a_end, distance_point_segment(a_end, b_start, b_end)),
        (b_start, distance_point_segment(b_start, a_start, a_end)),
        (b_end, distance_point_segment(b_end, a_start, a_end)),
    ];
    candidates
        .iter()
        .min_by(|l, r| l.1.partial_cmp(&r.1).unwrap_or(Ordering::Equal))
        .map(|&(pt, _)| pt)
        .unwrap_or(a_start)
}
