use std::{fmt, iter::FromIterator, ops::Deref};

use geo::{Coordinate, LineString, MultiPoint};
use smallvec::{smallvec, SmallVec};

use crate::{envelope::Envelope, GeometryError, Result};

/// Selects which of the `X`, `Y`, `Z` and `M` axes a coordinate carries.
///
/// `X` and `Y` are always the first two ordinates. The layout is fixed
/// for a geometry; all coordinates of one buffer share it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layout {
    XY,
    XYZ,
    XYM,
    XYZM,
}

impl Layout {
    /// Number of `f64` values per coordinate.
    #[inline]
    pub fn stride(self) -> usize {
        match self {
            Layout::XY => 2,
            Layout::XYZ | Layout::XYM => 3,
            Layout::XYZM => 4,
        }
    }

    #[inline]
    pub fn has_z(self) -> bool {
        matches!(self, Layout::XYZ | Layout::XYZM)
    }

    #[inline]
    pub fn has_m(self) -> bool {
        matches!(self, Layout::XYM | Layout::XYZM)
    }

    /// Position of the `Z` ordinate, if any.
    pub fn z_index(self) -> Option<usize> {
        self.has_z().then(|| 2)
    }

    /// Position of the `M` ordinate, if any.
    pub fn m_index(self) -> Option<usize> {
        match self {
            Layout::XYM => Some(2),
            Layout::XYZM => Some(3),
            _ => None,
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Layout::XY => write!(f, "XY"),
            Layout::XYZ => write!(f, "XYZ"),
            Layout::XYM => write!(f, "XYM"),
            Layout::XYZM => write!(f, "XYZM"),
        }
    }
}

/// A single coordinate: `stride` ordinates stored inline.
///
/// Coordinates are plain values; equality is ordinate-wise. The
/// predicates in this crate accept any `&[f64]` with at least two
/// ordinates, so a `Coord` is usually passed by deref.
#[derive(Debug, Clone, PartialEq)]
pub struct Coord(SmallVec<[f64; 4]>);

impl Coord {
    /// A 2-D coordinate.
    #[inline]
    pub fn xy(x: f64, y: f64) -> Self {
        Coord(smallvec![x, y])
    }

    /// Create a coordinate for `layout`, checking the ordinate count.
    pub fn new(layout: Layout, ordinates: &[f64]) -> Result<Self> {
        if ordinates.len() != layout.stride() {
            return Err(GeometryError::InvalidStride {
                layout,
                len: ordinates.len(),
            });
        }
        Ok(Coord::from_slice(ordinates))
    }

    /// Copy the ordinates verbatim.
    #[inline]
    pub(crate) fn from_slice(ordinates: &[f64]) -> Self {
        debug_assert!(ordinates.len() >= 2);
        Coord(SmallVec::from_slice(ordinates))
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.0[0]
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.0[1]
    }

    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }
}

impl Deref for Coord {
    type Target = [f64];

    #[inline]
    fn deref(&self) -> &[f64] {
        &self.0
    }
}

impl AsRef<[f64]> for Coord {
    fn as_ref(&self) -> &[f64] {
        &self.0
    }
}

impl From<[f64; 2]> for Coord {
    fn from([x, y]: [f64; 2]) -> Self {
        Coord::xy(x, y)
    }
}

impl From<(f64, f64)> for Coord {
    fn from((x, y): (f64, f64)) -> Self {
        Coord::xy(x, y)
    }
}

impl From<Coordinate<f64>> for Coord {
    fn from(c: Coordinate<f64>) -> Self {
        Coord::xy(c.x, c.y)
    }
}

/// Drops any ordinate beyond `X` and `Y`.
impl From<&Coord> for Coordinate<f64> {
    fn from(c: &Coord) -> Self {
        Coordinate { x: c.x(), y: c.y() }
    }
}

/// Compare the `X` and `Y` ordinates of two coordinates.
#[inline]
pub(crate) fn xy_equal(a: &[f64], b: &[f64]) -> bool {
    a[0] == b[0] && a[1] == b[1]
}

/// A borrowed flat coordinate buffer.
///
/// Holds `N * stride` ordinates and an optional sequence of `ends`
/// offsets that split the buffer into parts (rings of a polygon, lines
/// of a multi-line). The buffer is never mutated through this view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlatCoords<'a> {
    layout: Layout,
    coords: &'a [f64],
    ends: &'a [usize],
}

impl<'a> FlatCoords<'a> {
    /// Wrap a buffer holding a single part.
    pub fn new(layout: Layout, coords: &'a [f64]) -> Result<Self> {
        Self::with_ends(layout, coords, &[])
    }

    /// Wrap a buffer split into parts by `ends`.
    ///
    /// Every end must be stride-aligned, the ends must be
    /// non-decreasing, and the last end must equal the buffer length.
    pub fn with_ends(layout: Layout, coords: &'a [f64], ends: &'a [usize]) -> Result<Self> {
        let stride = layout.stride();
        if coords.len() % stride != 0 {
            return Err(GeometryError::InvalidStride {
                layout,
                len: coords.len(),
            });
        }

        let mut previous = 0;
        for &end in ends {
            if end % stride != 0 {
                return Err(GeometryError::MisalignedEnd { end, stride });
            }
            if end < previous {
                return Err(GeometryError::DecreasingEnds { previous, end });
            }
            if end > coords.len() {
                return Err(GeometryError::EndOutOfBounds {
                    end,
                    len: coords.len(),
                });
            }
            previous = end;
        }
        if let Some(&end) = ends.last() {
            if end != coords.len() {
                return Err(GeometryError::EndOutOfBounds {
                    end,
                    len: coords.len(),
                });
            }
        }

        Ok(FlatCoords {
            layout,
            coords,
            ends,
        })
    }

    #[inline]
    pub(crate) fn new_unchecked(layout: Layout, coords: &'a [f64]) -> Self {
        debug_assert_eq!(coords.len() % layout.stride(), 0);
        FlatCoords {
            layout,
            coords,
            ends: &[],
        }
    }

    #[inline]
    pub fn layout(&self) -> Layout {
        self.layout
    }

    #[inline]
    pub fn stride(&self) -> usize {
        self.layout.stride()
    }

    /// The raw ordinates.
    #[inline]
    pub fn flat_coords(&self) -> &'a [f64] {
        self.coords
    }

    #[inline]
    pub fn ends(&self) -> &'a [usize] {
        self.ends
    }

    #[inline]
    pub fn num_coords(&self) -> usize {
        self.coords.len() / self.stride()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// The `idx`-th coordinate (panics if out of range).
    #[inline]
    pub fn coord(&self, idx: usize) -> &'a [f64] {
        let stride = self.stride();
        &self.coords[idx * stride..(idx + 1) * stride]
    }

    /// Iterate over the coordinates as `stride`-long slices.
    #[inline]
    pub fn iter(&self) -> std::slice::ChunksExact<'a, f64> {
        self.coords.chunks_exact(self.stride())
    }

    /// Split the buffer by its ends.
    ///
    /// A buffer without ends is a single part (none, if it is empty).
    pub fn parts(&self) -> impl Iterator<Item = FlatCoords<'a>> + 'a {
        let FlatCoords {
            layout,
            coords,
            ends,
        } = *self;
        let whole = if ends.is_empty() && !coords.is_empty() {
            Some(*self)
        } else {
            None
        };
        let starts = std::iter::once(0).chain(ends.iter().copied());
        whole.into_iter().chain(
            starts
                .zip(ends.iter().copied())
                .map(move |(start, end)| FlatCoords::new_unchecked(layout, &coords[start..end])),
        )
    }

    /// The bounding box of all coordinates, or `None` if empty.
    pub fn envelope(&self) -> Option<Envelope> {
        Envelope::from_coords(self.iter())
    }
}

/// An owned flat coordinate buffer (single part).
///
/// This is what the algorithms hand back; use [`CoordBuf::as_flat`] to
/// feed it into another algorithm.
#[derive(Debug, Clone, PartialEq)]
pub struct CoordBuf {
    layout: Layout,
    coords: Vec<f64>,
}

impl CoordBuf {
    pub fn new(layout: Layout, coords: Vec<f64>) -> Result<Self> {
        FlatCoords::new(layout, &coords)?;
        Ok(CoordBuf { layout, coords })
    }

    pub fn with_capacity(layout: Layout, num_coords: usize) -> Self {
        CoordBuf {
            layout,
            coords: Vec::with_capacity(num_coords * layout.stride()),
        }
    }

    #[inline]
    pub fn layout(&self) -> Layout {
        self.layout
    }

    #[inline]
    pub fn flat_coords(&self) -> &[f64] {
        &self.coords
    }

    pub fn into_flat_coords(self) -> Vec<f64> {
        self.coords
    }

    #[inline]
    pub fn num_coords(&self) -> usize {
        self.coords.len() / self.layout.stride()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    #[inline]
    pub fn coord(&self, idx: usize) -> &[f64] {
        self.as_flat().coord(idx)
    }

    /// Append one coordinate; it must have exactly `stride` ordinates.
    pub fn push(&mut self, coord: &[f64]) {
        debug_assert_eq!(coord.len(), self.layout.stride());
        self.coords.extend_from_slice(coord);
    }

    /// Append every coordinate of `other`, which must share this layout.
    pub fn extend_from(&mut self, other: FlatCoords<'_>) -> Result<()> {
        if other.layout() != self.layout {
            return Err(GeometryError::LayoutMismatch {
                expected: self.layout,
                found: other.layout(),
            });
        }
        self.coords.extend_from_slice(other.flat_coords());
        Ok(())
    }

    #[inline]
    pub fn as_flat(&self) -> FlatCoords<'_> {
        FlatCoords::new_unchecked(self.layout, &self.coords)
    }
}

impl FromIterator<Coordinate<f64>> for CoordBuf {
    fn from_iter<I: IntoIterator<Item = Coordinate<f64>>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut buf = CoordBuf::with_capacity(Layout::XY, iter.size_hint().0);
        for c in iter {
            buf.coords.extend_from_slice(&[c.x, c.y]);
        }
        buf
    }
}

impl From<&LineString<f64>> for CoordBuf {
    fn from(ls: &LineString<f64>) -> Self {
        ls.0.iter().copied().collect()
    }
}

impl From<&MultiPoint<f64>> for CoordBuf {
    fn from(mp: &MultiPoint<f64>) -> Self {
        mp.0.iter().map(|p| p.0).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_stride_and_axes() {
        assert_eq!(Layout::XY.stride(), 2);
        assert_eq!(Layout::XYZ.stride(), 3);
        assert_eq!(Layout::XYM.stride(), 3);
        assert_eq!(Layout::XYZM.stride(), 4);

        assert!(!Layout::XYM.has_z());
        assert!(Layout::XYM.has_m());
        assert_eq!(Layout::XYM.m_index(), Some(2));
        assert_eq!(Layout::XYZM.m_index(), Some(3));
        assert_eq!(Layout::XYZM.z_index(), Some(2));
        assert_eq!(Layout::XY.z_index(), None);
        assert_eq!(Layout::XYZM.to_string(), "XYZM");
    }

    #[test]
    fn coord_checks_stride() {
        let c = Coord::new(Layout::XYZ, &[1., 2., 3.]).unwrap();
        assert_eq!(c.x(), 1.);
        assert_eq!(c.y(), 2.);
        assert_eq!(&c[..], &[1., 2., 3.]);

        assert_eq!(
            Coord::new(Layout::XYZM, &[1., 2., 3.]),
            Err(GeometryError::InvalidStride {
                layout: Layout::XYZM,
                len: 3
            })
        );
    }

    #[test]
    fn flat_coords_validation() {
        let data = [0., 0., 1., 0., 1., 1., 0., 0.];

        assert!(FlatCoords::new(Layout::XY, &data).is_ok());
        assert!(matches!(
            FlatCoords::new(Layout::XYZ, &data),
            Err(GeometryError::InvalidStride { .. })
        ));
        assert!(FlatCoords::with_ends(Layout::XY, &data, &[4, 8]).is_ok());
        assert_eq!(
            FlatCoords::with_ends(Layout::XY, &data, &[3, 8]),
            Err(GeometryError::MisalignedEnd { end: 3, stride: 2 })
        );
        assert_eq!(
            FlatCoords::with_ends(Layout::XY, &data, &[6, 4]),
            Err(GeometryError::DecreasingEnds {
                previous: 6,
                end: 4
            })
        );
        assert_eq!(
            FlatCoords::with_ends(Layout::XY, &data, &[4, 6]),
            Err(GeometryError::EndOutOfBounds { end: 6, len: 8 })
        );
        assert_eq!(
            FlatCoords::with_ends(Layout::XY, &data, &[10]),
            Err(GeometryError::EndOutOfBounds { end: 10, len: 8 })
        );
    }

    #[test]
    fn flat_coords_parts() {
        let data = [0., 0., 1., 0., 2., 0., 3., 0., 4., 0.];
        let flat = FlatCoords::with_ends(Layout::XY, &data, &[4, 4, 10]).unwrap();
        let parts: Vec<_> = flat.parts().map(|p| p.num_coords()).collect();
        assert_eq!(parts, vec![2, 0, 3]);

        let whole = FlatCoords::new(Layout::XY, &data).unwrap();
        assert_eq!(whole.parts().count(), 1);
        assert_eq!(whole.coord(3), &[3., 0.]);

        let empty = FlatCoords::new(Layout::XY, &[]).unwrap();
        assert_eq!(empty.parts().count(), 0);
        assert!(empty.envelope().is_none());
    }

    #[test]
    fn coord_buf_layout_mismatch() {
        let mut buf = CoordBuf::with_capacity(Layout::XY, 2);
        buf.push(&[1., 2.]);
        let other = [1., 2., 3.];
        let other = FlatCoords::new(Layout::XYM, &other).unwrap();
        assert_eq!(
            buf.extend_from(other),
            Err(GeometryError::LayoutMismatch {
                expected: Layout::XY,
                found: Layout::XYM
            })
        );
        assert_eq!(buf.num_coords(), 1);
    }

    #[test]
    fn from_geo_line_string() {
        let ls = LineString::from(vec![(0., 0.), (1., 2.)]);
        let buf = CoordBuf::from(&ls);
        assert_eq!(buf.layout(), Layout::XY);
        assert_eq!(buf.flat_coords(), &[0., 0., 1., 2.]);
    }
}
