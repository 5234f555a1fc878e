/// An axis-aligned bounding box in the `XY` plane.
///
/// All containment and overlap tests are inclusive of the boundary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Envelope {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Envelope {
    /// The box spanned by two corner points (in any order).
    #[inline]
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Envelope {
            min_x: x1.min(x2),
            min_y: y1.min(y2),
            max_x: x1.max(x2),
            max_y: y1.max(y2),
        }
    }

    /// The box of a segment.
    #[inline]
    pub fn of_segment(start: &[f64], end: &[f64]) -> Self {
        Envelope::new(start[0], start[1], end[0], end[1])
    }

    pub fn from_coords<'a, I: IntoIterator<Item = &'a [f64]>>(coords: I) -> Option<Self> {
        let mut iter = coords.into_iter();
        let first = iter.next()?;
        let mut env = Envelope::new(first[0], first[1], first[0], first[1]);
        for c in iter {
            env.expand_to_include(c);
        }
        Some(env)
    }

    #[inline]
    pub fn expand_to_include(&mut self, c: &[f64]) {
        self.min_x = self.min_x.min(c[0]);
        self.min_y = self.min_y.min(c[1]);
        self.max_x = self.max_x.max(c[0]);
        self.max_y = self.max_y.max(c[1]);
    }

    #[inline]
    pub fn contains_point(&self, p: &[f64]) -> bool {
        p[0] >= self.min_x && p[0] <= self.max_x && p[1] >= self.min_y && p[1] <= self.max_y
    }

    #[inline]
    pub fn intersects(&self, other: &Envelope) -> bool {
        !(other.min_x > self.max_x
            || other.max_x < self.min_x
            || other.min_y > self.max_y
            || other.max_y < self.min_y)
    }

    /// The overlap of two boxes, if they intersect.
    pub fn intersection(&self, other: &Envelope) -> Option<Envelope> {
        if !self.intersects(other) {
            return None;
        }
        Some(Envelope {
            min_x: self.min_x.max(other.min_x),
            min_y: self.min_y.max(other.min_y),
            max_x: self.max_x.min(other.max_x),
            max_y: self.max_y.min(other.max_y),
        })
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    #[inline]
    pub fn center(&self) -> [f64; 2] {
        [
            (self.min_x + self.max_x) / 2.,
            (self.min_y + self.max_y) / 2.,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlap_is_inclusive() {
        let a = Envelope::of_segment(&[0., 0.], &[1., 1.]);
        let b = Envelope::of_segment(&[1., 1.], &[2., 0.]);
        let c = Envelope::of_segment(&[1.5, 1.5], &[2., 2.]);

        assert!(a.intersects(&b));
        assert!(!a.intersects(&c));
        assert_eq!(a.intersection(&b), Some(Envelope::new(1., 0., 1., 1.)));
        assert_eq!(a.intersection(&c), None);
        // corners touching
        let d = Envelope::of_segment(&[1., 1.], &[3., 3.]);
        assert_eq!(a.intersection(&d), Some(Envelope::new(1., 1., 1., 1.)));
        assert!(a.contains_point(&[1., 0.]));
        assert!(!a.contains_point(&[1., 1.5]));
    }

    #[test]
    fn from_coords() {
        let data = [3., -1., 0., 4., 2., 2.];
        let env = Envelope::from_coords(data.chunks_exact(2)).unwrap();
        assert_eq!(env, Envelope::new(0., -1., 3., 4.));
        assert_eq!(env.center(), [1.5, 1.5]);
        assert_eq!(env.width(), 3.);
        assert_eq!(env.height(), 5.);
    }
}
