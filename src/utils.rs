use std::cmp::Ordering;

use geo::kernels::Orientation as GeoOrientation;

use crate::Orientation;

/// Helper to convert an orientation into an ordering.
///
/// Used by the radial sort of the hull: a counter-clockwise turn from
/// `a` to `b` (seen from the pivot) puts `a` after `b`.
#[inline]
pub(crate) fn orientation_as_ordering(orientation: Orientation) -> Ordering {
    match orientation {
        Orientation::CounterClockwise => Ordering::Greater,
        Orientation::Clockwise => Ordering::Less,
        Orientation::Collinear => Ordering::Equal,
    }
}

impl From<GeoOrientation> for Orientation {
    fn from(ori: GeoOrientation) -> Self {
        match ori {
            GeoOrientation::CounterClockwise => Orientation::CounterClockwise,
            GeoOrientation::Clockwise => Orientation::Clockwise,
            GeoOrientation::Collinear => Orientation::Collinear,
        }
    }
}

impl From<Orientation> for GeoOrientation {
    fn from(ori: Orientation) -> Self {
        match ori {
            Orientation::CounterClockwise => GeoOrientation::CounterClockwise,
            Orientation::Clockwise => GeoOrientation::Clockwise,
            Orientation::Collinear => GeoOrientation::Collinear,
        }
    }
}
