use crate::{Coord, FlatCoords};

/// Running centroid of a set of points: the mean of their `X` and `Y`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointCentroid {
    sum: [f64; 2],
    count: usize,
}

impl PointCentroid {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn add_point(&mut self, point: &[f64]) {
        self.sum[0] += point[0];
        self.sum[1] += point[1];
        self.count += 1;
    }

    /// Add every coordinate of `points` (parts are ignored).
    pub fn add_points(&mut self, points: FlatCoords<'_>) {
        for p in points.iter() {
            self.add_point(p);
        }
    }

    /// Fold in the sums of another accumulator.
    pub fn merge(&mut self, other: &Self) {
        self.sum[0] += other.sum[0];
        self.sum[1] += other.sum[1];
        self.count += other.count;
    }

    #[inline]
    pub fn count(&self) -> usize {
        self.count
    }

    /// The mean point; `NaN` ordinates if no point was added.
    pub fn centroid(&self) -> Coord {
        let n = self.count as f64;
        Coord::xy(self.sum[0] / n, self.sum[1] / n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Layout;

    #[test]
    fn mean_of_points() {
        let data = [0., 0., 7., 2., 0., 7., 2., 2., 7., 0., 2., 7.];
        let mut acc = PointCentroid::new();
        acc.add_points(FlatCoords::new(Layout::XYZ, &data).unwrap());
        assert_eq!(acc.count(), 4);
        assert_eq!(acc.centroid(), Coord::xy(1., 1.));
    }

    #[test]
    fn merge_shards() {
        let mut a = PointCentroid::new();
        a.add_point(&[0., 0.]);
        a.add_point(&[3., 0.]);
        let mut b = PointCentroid::new();
        b.add_point(&[0., 6.]);

        a.merge(&b);
        assert_eq!(a.count(), 3);
        assert_eq!(a.centroid(), Coord::xy(1., 2.));
    }

    #[test]
    fn empty_is_nan() {
        let c = PointCentroid::new().centroid();
        assert!(c.x().is_nan() && c.y().is_nan());
    }
}
