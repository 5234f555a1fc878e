use std::cmp::Ordering;

/// Wraps a coordinate slice to support lexicographic ordering.
///
/// The ordering is by `x` and then by `y`; further ordinates are
/// ignored. Implements `Ord` and `Eq` even though `f64` doesn't, which
/// lets coordinates be sorted and de-duplicated. We must ensure that
/// any wrapped coordinate only contains values that can be consistently
/// ordered, i.e. finite `x` and `y`.
#[derive(Debug, Clone, Copy)]
pub(crate) struct LexPoint<'a>(pub &'a [f64]);

/// Equality of the `x` and `y` ordinates, consistent with `Ord`.
impl PartialEq for LexPoint<'_> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.0[0] == other.0[0] && self.0[1] == other.0[1]
    }
}

/// We derive `Eq` manually to not require `T: Eq`.
impl Eq for LexPoint<'_> {}

impl PartialOrd for LexPoint<'_> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Implement lexicographic ordering by `x` and then by `y`
/// coordinate. Incomparable (`NaN`) ordinates compare equal.
impl Ord for LexPoint<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.0[0].partial_cmp(&other.0[0]) {
            Some(Ordering::Equal) => self.0[1]
                .partial_cmp(&other.0[1])
                .unwrap_or(Ordering::Equal),
            Some(o) => o,
            None => Ordering::Equal,
        }
    }
}

/// Sort coordinates lexicographically and drop exact `XY` duplicates.
///
/// Of several coordinates sharing `x` and `y`, the first in input
/// order is kept (the sort is stable).
pub(crate) fn sort_unique<C: AsRef<[f64]>>(coords: &mut Vec<C>) {
    coords.sort_by(|a, b| LexPoint(a.as_ref()).cmp(&LexPoint(b.as_ref())));
    coords.dedup_by(|a, b| LexPoint(a.as_ref()) == LexPoint(b.as_ref()));
}
