//! Defines [`GeometryError`], the errors returned when a coordinate
//! buffer does not satisfy the layout invariants.

use thiserror::Error;

use crate::Layout;

/// Violations of the flat coordinate buffer contract.
///
/// Only the constructors that accept caller data ([`crate::Coord::new`],
/// [`crate::FlatCoords::new`], [`crate::FlatCoords::with_ends`],
/// [`crate::CoordBuf::new`]) return these. The predicates themselves
/// are total.
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum GeometryError {
    /// Buffer length is not a multiple of the layout stride.
    #[error("buffer of length {len} is not a multiple of the {layout} stride")]
    InvalidStride { layout: Layout, len: usize },

    /// An end offset does not fall on a coordinate boundary.
    #[error("end offset {end} is not aligned to stride {stride}")]
    MisalignedEnd { end: usize, stride: usize },

    /// End offsets must be non-decreasing.
    #[error("end offset {end} is smaller than the previous end {previous}")]
    DecreasingEnds { previous: usize, end: usize },

    /// The last end must be the buffer length, and no end may exceed it.
    #[error("end offset {end} does not match buffer length {len}")]
    EndOutOfBounds { end: usize, len: usize },

    /// Two inputs of the same call were built with different layouts.
    #[error("expected layout {expected}, found {found}")]
    LayoutMismatch { expected: Layout, found: Layout },
}

/// Crate-specific result type.
pub type Result<T> = std::result::Result<T, GeometryError>;
