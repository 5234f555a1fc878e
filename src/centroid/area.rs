use log::debug;

use super::LineCentroid;
use crate::{orientation::ring_is_ccw, Coord, FlatCoords};

/// Running centroid of a set of polygons.
///
/// Every ring is fanned into triangles from a fixed base point (the first
/// coordinate of the first polygon added). Shells and holes contribute
/// with opposite signs, whatever their winding. The ring boundaries are
/// accumulated as lines too, so a collection with zero total area falls
/// back to the centroid of its boundary.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AreaCentroid {
    base: Option<[f64; 2]>,
    cg3: [f64; 2],
    area_sum2: f64,
    lines: LineCentroid,
}

impl AreaCentroid {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a polygon: the first part is the shell, later parts are holes.
    pub fn add_polygon(&mut self, polygon: FlatCoords<'_>) {
        let mut rings = polygon.parts();
        if let Some(shell) = rings.next() {
            self.add_shell(shell);
        }
        for hole in rings {
            self.add_hole(hole);
        }
    }

    /// Add a closed ring bounding area.
    pub fn add_shell(&mut self, ring: FlatCoords<'_>) {
        let positive = !ring_is_ccw(ring);
        self.add_ring(ring, positive);
    }

    /// Add a closed ring removing area.
    pub fn add_hole(&mut self, ring: FlatCoords<'_>) {
        let positive = ring_is_ccw(ring);
        self.add_ring(ring, positive);
    }

    fn add_ring(&mut self, ring: FlatCoords<'_>, positive: bool) {
        let first = match ring.iter().next() {
            Some(first) => first,
            None => return,
        };
        let base = *self.base.get_or_insert([first[0], first[1]]);
        let sign = if positive { -1. } else { 1. };

        let mut prev = first;
        for curr in ring.iter().skip(1) {
            let area2 = area2(&base, prev, curr);
            self.cg3[0] += sign * area2 * (base[0] + prev[0] + curr[0]);
            self.cg3[1] += sign * area2 * (base[1] + prev[1] + curr[1]);
            self.area_sum2 += sign * area2;
            prev = curr;
        }
        self.lines.add_line(ring);
    }

    /// Fold in the sums of another accumulator. The base point of `self`
    /// is kept (or taken from `other` if `self` is empty).
    pub fn merge(&mut self, other: &Self) {
        if self.base.is_none() {
            self.base = other.base;
        }
        self.cg3[0] += other.cg3[0];
        self.cg3[1] += other.cg3[1];
        self.area_sum2 += other.area_sum2;
        self.lines.merge(&other.lines);
    }

    /// Whether no ring has been added.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.base.is_none()
    }

    /// Twice the accumulated area.
    #[inline]
    pub fn area2(&self) -> f64 {
        self.area_sum2
    }

    /// The area-weighted centroid, or the boundary centroid if the total
    /// area is zero. `NaN` ordinates if nothing was added.
    pub fn centroid(&self) -> Coord {
        if self.area_sum2 != 0. {
            Coord::xy(
                self.cg3[0] / 3. / self.area_sum2,
                self.cg3[1] / 3. / self.area_sum2,
            )
        } else {
            debug!("zero area, using boundary centroid");
            self.lines.centroid()
        }
    }
}

/// Twice the signed area of the triangle `p1, p2, p3`.
#[inline]
fn area2(p1: &[f64], p2: &[f64], p3: &[f64]) -> f64 {
    (p2[0] - p1[0]) * (p3[1] - p1[1]) - (p3[0] - p1[0]) * (p2[1] - p1[1])
}
