use itertools::Itertools;

use crate::{Coord, FlatCoords};

/// Running centroid of a set of line strings.
///
/// Each segment contributes its midpoint weighted by its length.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LineCentroid {
    cent_sum: [f64; 2],
    total_length: f64,
}

impl LineCentroid {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add every part of `line` as a line string.
    ///
    /// Polygon rings may be passed as well; the result is then the
    /// centroid of the boundary.
    pub fn add_line(&mut self, line: FlatCoords<'_>) {
        for part in line.parts() {
            for (p, q) in part.iter().tuple_windows() {
                self.add_segment(p, q);
            }
        }
    }

    #[inline]
    pub fn add_segment(&mut self, p: &[f64], q: &[f64]) {
        let len = (q[0] - p[0]).hypot(q[1] - p[1]);
        self.total_length += len;
        self.cent_sum[0] += len * (p[0] + q[0]) / 2.;
        self.cent_sum[1] += len * (p[1] + q[1]) / 2.;
    }

    /// Fold in the sums of another accumulator.
    pub fn merge(&mut self, other: &Self) {
        self.cent_sum[0] += other.cent_sum[0];
        self.cent_sum[1] += other.cent_sum[1];
        self.total_length += other.total_length;
    }

    #[inline]
    pub fn total_length(&self) -> f64 {
        self.total_length
    }

    /// The length-weighted mean of the segment midpoints.
    ///
    /// `NaN` ordinates if the total length is zero.
    pub fn centroid(&self) -> Coord {
        Coord::xy(
            self.cent_sum[0] / self.total_length,
            self.cent_sum[1] / self.total_length,
        )
    }
}
