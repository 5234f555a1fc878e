//! Point-in-ring and point-in-polygon classification by ray crossing.

use crate::{coord::xy_equal, orientation::orientation, FlatCoords, Orientation};

/// Topological location of a point relative to an areal geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Location {
    Interior,
    Boundary,
    Exterior,
}

/// Counts crossings of the ray from a point in the `+X` direction with
/// a sequence of segments, and detects whether the point lies on one of
/// them.
///
/// The segments must form one or more closed rings for the parity to be
/// meaningful. Horizontal segments and segments touching the ray at a
/// vertex are handled so that every vertex is counted exactly once.
/// Once the point is found on a segment the counter stays on the
/// boundary and later segments are ignored.
#[derive(Debug, Clone)]
pub struct RayCrossingCounter<'a> {
    point: &'a [f64],
    crossings: usize,
    on_boundary: bool,
}

impl<'a> RayCrossingCounter<'a> {
    pub fn new(point: &'a [f64]) -> Self {
        RayCrossingCounter {
            point,
            crossings: 0,
            on_boundary: false,
        }
    }

    /// Account for the segment `p1 -> p2`.
    pub fn count_segment(&mut self, p1: &[f64], p2: &[f64]) {
        if self.on_boundary {
            return;
        }
        let p = self.point;

        // segment strictly to the left of the point
        if p1[0] < p[0] && p2[0] < p[0] {
            return;
        }

        if xy_equal(p, p2) {
            self.on_boundary = true;
            return;
        }

        // Horizontal segments at the point's height: on the boundary or
        // irrelevant.
        if p1[1] == p[1] && p2[1] == p[1] {
            let min_x = p1[0].min(p2[0]);
            let max_x = p1[0].max(p2[0]);
            if p[0] >= min_x && p[0] <= max_x {
                self.on_boundary = true;
            }
            return;
        }

        // The segment straddles the ray: one endpoint strictly above,
        // the other on or below. The lower endpoint of the segment is
        // included and the upper one excluded.
        if (p1[1] > p[1] && p2[1] <= p[1]) || (p2[1] > p[1] && p1[1] <= p[1]) {
            let mut orient = orientation(p1, p2, p);
            if orient == Orientation::Collinear {
                self.on_boundary = true;
                return;
            }
            // Make the test independent of the segment direction.
            if p2[1] < p1[1] {
                orient = orient.reverse();
            }
            if orient == Orientation::CounterClockwise {
                self.crossings += 1;
            }
        }
    }

    #[inline]
    pub fn is_on_boundary(&self) -> bool {
        self.on_boundary
    }

    /// Location of the point, given the segments counted so far.
    pub fn location(&self) -> Location {
        if self.on_boundary {
            Location::Boundary
        } else if self.crossings % 2 == 1 {
            Location::Interior
        } else {
            Location::Exterior
        }
    }
}

/// Locate `point` relative to `ring`.
///
/// The ring is closed implicitly: the segment from the last coordinate
/// back to the first is always counted, whether or not the ring already
/// repeats its first coordinate. The point is not checked against the
/// ring's envelope first.
pub fn locate_point_in_ring(point: &[f64], ring: FlatCoords<'_>) -> Location {
    let mut counter = RayCrossingCounter::new(point);
    let first = match ring.iter().next() {
        Some(first) => first,
        None => return Location::Exterior,
    };

    let mut prev = first;
    for curr in ring.iter().skip(1).chain(std::iter::once(first)) {
        counter.count_segment(prev, curr);
        if counter.is_on_boundary() {
            break;
        }
        prev = curr;
    }
    counter.location()
}

/// Like [`locate_point_in_ring`], but rejects points outside the ring's
/// envelope without walking it.
fn locate_point_in_ring_env(point: &[f64], ring: FlatCoords<'_>) -> Location {
    match ring.envelope() {
        Some(env) if env.contains_point(point) => locate_point_in_ring(point, ring),
        _ => Location::Exterior,
    }
}

/// Locate `point` relative to a polygon.
///
/// The first part of `polygon` is the shell and later parts are holes.
/// A point inside a hole is in the exterior; a point on the boundary of
/// the shell or of a hole is on the boundary.
pub fn locate_point_in_polygon(point: &[f64], polygon: FlatCoords<'_>) -> Location {
    let mut rings = polygon.parts();
    let shell = match rings.next() {
        Some(shell) => shell,
        None => return Location::Exterior,
    };

    match locate_point_in_ring_env(point, shell) {
        Location::Interior => {}
        loc => return loc,
    }

    for hole in rings {
        match locate_point_in_ring_env(point, hole) {
            Location::Interior => return Location::Exterior,
            Location::Boundary => return Location::Boundary,
            Location::Exterior => {}
        }
    }
    Location::Interior
}

/// Locate `point` relative to a collection of polygons.
///
/// Interior if it is in the interior of any polygon, otherwise Boundary
/// if it is on the boundary of any polygon, otherwise Exterior.
pub fn locate_point_in_polygons<'a, I>(point: &[f64], polygons: I) -> Location
where
    I: IntoIterator<Item = FlatCoords<'a>>,
{
    let mut on_boundary = false;
    for polygon in polygons {
        match locate_point_in_polygon(point, polygon) {
            Location::Interior => return Location::Interior,
            Location::Boundary => on_boundary = true,
            Location::Exterior => {}
        }
    }
    if on_boundary {
        Location::Boundary
    } else {
        Location::Exterior
    }
}

#[cfg(test)]
mod tests {
    use geo::Rect;
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;
    use crate::{random::uniform_point, Layout};

    fn ring(coords: &[f64]) -> FlatCoords<'_> {
        FlatCoords::new(Layout::XY, coords).unwrap()
    }

    #[test]
    fn small_rings() {
        let o = [0., 0.];
        let cases: [(&[f64], Location); 13] = [
            (&[], Location::Exterior),
            (&[0., 0.], Location::Boundary),
            (&[0., 0., 0., 0.], Location::Boundary),
            (&[-1., -1.], Location::Exterior),
            (&[0., 0., -1., -1.], Location::Boundary),
            (&[0., 0., 1., 1.], Location::Boundary),
            (&[-1., -1., 1., 1.], Location::Boundary),
            (&[0., 1., 0., -1.], Location::Boundary),
            (&[1., 0., -1., 0.], Location::Boundary),
            (&[1., -1., -1., -1.], Location::Exterior),
            // a flat ring has no interior: its two edges cross the ray
            (&[1., 1., 1., -1.], Location::Exterior),
            (
                &[-1., 1., 1., 1., 1., -1., -1., -1., -1., 1.],
                Location::Interior,
            ),
            (
                &[1., 1., 2., 1., 2., -1., 1., -1., 1., 1.],
                Location::Exterior,
            ),
        ];
        for (coords, expected) in cases.iter() {
            assert_eq!(
                locate_point_in_ring(&o, ring(coords)),
                *expected,
                "{:?}",
                coords
            );
        }
    }

    #[test]
    fn implicit_closure() {
        let open = [-1., 1., 1., 1., 1., -1., -1., -1.];
        assert_eq!(locate_point_in_ring(&[0., 0.], ring(&open)), Location::Interior);
        // on the closing edge
        assert_eq!(locate_point_in_ring(&[-1., 0.], ring(&open)), Location::Boundary);
        assert_eq!(locate_point_in_ring(&[-2., 0.], ring(&open)), Location::Exterior);
    }

    #[test]
    fn ray_through_vertices() {
        // diamond: the ray from the center passes through the right vertex
        let diamond = [0., -2., 2., 0., 0., 2., -2., 0., 0., -2.];
        assert_eq!(locate_point_in_ring(&[0., 0.], ring(&diamond)), Location::Interior);
        assert_eq!(locate_point_in_ring(&[-3., 0.], ring(&diamond)), Location::Exterior);
        assert_eq!(locate_point_in_ring(&[1., 1.], ring(&diamond)), Location::Boundary);

        // the ray runs along a horizontal edge
        let notch = [0., 0., 4., 0., 4., 2., 3., 2., 3., 1., 2., 1., 2., 3., 0., 3., 0., 0.];
        assert_eq!(locate_point_in_ring(&[1., 1.], ring(&notch)), Location::Interior);
        assert_eq!(locate_point_in_ring(&[1., 2.], ring(&notch)), Location::Interior);
        assert_eq!(locate_point_in_ring(&[2.5, 1.], ring(&notch)), Location::Boundary);
        assert_eq!(locate_point_in_ring(&[2.5, 2.], ring(&notch)), Location::Exterior);
        assert_eq!(locate_point_in_ring(&[3.5, 1.], ring(&notch)), Location::Interior);
    }

    #[test]
    fn vertices_are_boundary() {
        let mut rng = StdRng::seed_from_u64(3);
        let bounds = Rect::new([-10., -10.], [10., 10.]);
        let coords: Vec<f64> = (0..32)
            .flat_map(|_| {
                let c = uniform_point(&mut rng, bounds);
                vec![c.x, c.y]
            })
            .collect();
        let r = ring(&coords);
        for v in r.iter() {
            assert_eq!(locate_point_in_ring(v, r), Location::Boundary);
        }
    }

    #[test]
    fn ignores_extra_ordinates() {
        let data = [0., 0., 5., 4., 0., 5., 4., 4., 5., 0., 4., 5., 0., 0., 5.];
        let r = FlatCoords::new(Layout::XYM, &data).unwrap();
        assert_eq!(locate_point_in_ring(&[2., 2.], r), Location::Interior);
        assert_eq!(locate_point_in_ring(&[2., 2., 99.], r), Location::Interior);
        assert_eq!(locate_point_in_ring(&[4., 2.], r), Location::Boundary);
    }

    #[test]
    fn polygon_with_hole() {
        let data = [
            0., 0., 10., 0., 10., 10., 0., 10., 0., 0., // shell
            4., 4., 4., 6., 6., 6., 6., 4., 4., 4., // hole
        ];
        let ends = [10, 20];
        let poly = FlatCoords::with_ends(Layout::XY, &data, &ends).unwrap();

        assert_eq!(locate_point_in_polygon(&[1., 1.], poly), Location::Interior);
        assert_eq!(locate_point_in_polygon(&[0., 5.], poly), Location::Boundary);
        assert_eq!(locate_point_in_polygon(&[5., 5.], poly), Location::Exterior);
        assert_eq!(locate_point_in_polygon(&[4., 5.], poly), Location::Boundary);
        assert_eq!(locate_point_in_polygon(&[11., 5.], poly), Location::Exterior);
        assert_eq!(locate_point_in_polygon(&[5., -1.], poly), Location::Exterior);

        let empty = FlatCoords::new(Layout::XY, &[]).unwrap();
        assert_eq!(locate_point_in_polygon(&[0., 0.], empty), Location::Exterior);
    }

    #[test]
    fn several_polygons() {
        let a = [0., 0., 2., 0., 2., 2., 0., 2., 0., 0.];
        let b = [2., 0., 4., 0., 4., 2., 2., 2., 2., 0.];
        let polys = || vec![ring(&a), ring(&b)];

        assert_eq!(locate_point_in_polygons(&[1., 1.], polys()), Location::Interior);
        assert_eq!(locate_point_in_polygons(&[3., 1.], polys()), Location::Interior);
        // on the shared edge of both
        assert_eq!(locate_point_in_polygons(&[2., 1.], polys()), Location::Boundary);
        assert_eq!(locate_point_in_polygons(&[5., 1.], polys()), Location::Exterior);
        assert_eq!(
            locate_point_in_polygons(&[1., 1.], Vec::new()),
            Location::Exterior
        );
    }
}
