/// Intersection of the infinite lines through `p1, p2` and `q1, q2`
/// using homogeneous coordinates.
///
/// Not numerically stable: the result may lie outside the segments'
/// envelopes, so inputs should be translated near the origin first.
/// Returns `None` when the result is not finite (parallel lines, or
/// overflow).
pub(super) fn intersection(p1: &[f64], p2: &[f64], q1: &[f64], q2: &[f64]) -> Option<[f64; 2]> {
    let px = p1[1] - p2[1];
    let py = p2[0] - p1[0];
    let pw = p1[0] * p2[1] - p2[0] * p1[1];

    let qx = q1[1] - q2[1];
    let qy = q2[0] - q1[0];
    let qw = q1[0] * q2[1] - q2[0] * q1[1];

    let x = py * qw - qy * pw;
    let y = qx * pw - px * qw;
    let w = px * qy - qx * py;

    let x_int = x / w;
    let y_int = y / w;
    if x_int.is_finite() && y_int.is_finite() {
        Some([x_int, y_int])
    } else {
        None
    }
}
