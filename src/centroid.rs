//! Centroid accumulators and a dispatcher over `geo` geometries.
//!
//! The accumulators keep raw (weight, moment) sums, so independent
//! accumulators may be filled separately and combined with `merge`
//! before taking the centroid.

use geo::{Geometry, LineString, Polygon};

use crate::{Coord, CoordBuf};

mod area;
mod line;
mod point;

pub use area::AreaCentroid;
pub use line::LineCentroid;
pub use point::PointCentroid;

/// Centroid of a `geo` geometry.
///
/// Only the components of the highest dimension present contribute:
/// areas over lines, lines over points. Returns `None` if the geometry
/// has no coordinates.
pub fn centroid(geom: &Geometry<f64>) -> Option<Coord> {
    let mut acc = Accumulators::default();
    acc.add(geom);
    acc.centroid()
}

#[derive(Debug, Default)]
struct Accumulators {
    points: PointCentroid,
    lines: LineCentroid,
    // vertices of the lines, for lines of zero length
    line_points: PointCentroid,
    areas: AreaCentroid,
}

impl Accumulators {
    fn add(&mut self, geom: &Geometry<f64>) {
        match geom {
            Geometry::Point(p) => self.points.add_point(&[p.x(), p.y()]),
            Geometry::MultiPoint(mp) => {
                for p in mp.iter() {
                    self.points.add_point(&[p.x(), p.y()]);
                }
            }
            Geometry::Line(l) => {
                let (p, q) = ([l.start.x, l.start.y], [l.end.x, l.end.y]);
                self.lines.add_segment(&p, &q);
                self.line_points.add_point(&p);
                self.line_points.add_point(&q);
            }
            Geometry::LineString(ls) => self.add_line_string(ls),
            Geometry::MultiLineString(mls) => {
                for ls in mls.iter() {
                    self.add_line_string(ls);
                }
            }
            Geometry::Polygon(poly) => self.add_polygon(poly),
            Geometry::MultiPolygon(mp) => {
                for poly in mp.iter() {
                    self.add_polygon(poly);
                }
            }
            Geometry::Rect(r) => self.add_polygon(&r.to_polygon()),
            Geometry::Triangle(t) => self.add_polygon(&t.to_polygon()),
            Geometry::GeometryCollection(gc) => {
                for g in gc.iter() {
                    self.add(g);
                }
            }
        }
    }

    fn add_line_string(&mut self, ls: &LineString<f64>) {
        let buf = CoordBuf::from(ls);
        self.lines.add_line(buf.as_flat());
        self.line_points.add_points(buf.as_flat());
    }

    fn add_polygon(&mut self, poly: &Polygon<f64>) {
        let shell = CoordBuf::from(poly.exterior());
        if shell.is_empty() {
            return;
        }
        self.areas.add_shell(shell.as_flat());
        for hole in poly.interiors() {
            self.areas.add_hole(CoordBuf::from(hole).as_flat());
        }
    }

    fn centroid(&self) -> Option<Coord> {
        if !self.areas.is_empty() {
            Some(self.areas.centroid())
        } else if self.lines.total_length() > 0. {
            Some(self.lines.centroid())
        } else if self.line_points.count() > 0 {
            Some(self.line_points.centroid())
        } else if self.points.count() > 0 {
            Some(self.points.centroid())
        } else {
            None
        }
    }
}
