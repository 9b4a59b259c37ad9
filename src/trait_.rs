use std::fmt::Debug;

use crate::algorithm::BoundingRect;
use crate::array::SoaCoordSequence;
use crate::dimension::Dimension;
use crate::error::{CoordSeqError, CoordSeqResult};
use crate::scalar::Coord;

/// An ordered sequence of coordinates with optional Z and M ordinates.
///
/// This is the surface that geometry types and format readers/writers program against. It makes
/// no assumption about how the ordinates are laid out in memory.
///
/// Ordinates are addressed by point index and by ordinate index, where `0` is X, `1` is Y, `2` is
/// Z and `3` is M. On a sequence without Z, ordinate index `2` addresses the M slot instead.
/// Reading an ordinate the sequence does not store returns [`NULL_ORDINATE`][crate::NULL_ORDINATE];
/// writing one is silently ignored.
pub trait CoordSequence: Debug {
    /// The number of coordinates in this sequence.
    fn len(&self) -> usize;

    /// Whether this sequence holds no coordinates.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The ordinate set of this sequence.
    fn dim(&self) -> Dimension;

    /// The number of ordinates per coordinate.
    fn dimension(&self) -> usize {
        self.dim().size()
    }

    /// The number of measure ordinates per coordinate.
    fn measures(&self) -> usize {
        self.dim().measures()
    }

    /// Whether this sequence reports an elevation for its coordinates.
    fn has_z(&self) -> bool {
        self.dim().has_z()
    }

    /// Whether this sequence reports a measure for its coordinates.
    fn has_m(&self) -> bool {
        self.dim().has_m()
    }

    /// The x ordinate of the coordinate at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    fn x(&self, index: usize) -> f64;

    /// The y ordinate of the coordinate at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    fn y(&self, index: usize) -> f64;

    /// The z ordinate of the coordinate at `index`, or
    /// [`NULL_ORDINATE`][crate::NULL_ORDINATE] if no elevation is stored.
    fn z(&self, index: usize) -> f64;

    /// The measure of the coordinate at `index`, or
    /// [`NULL_ORDINATE`][crate::NULL_ORDINATE] if no measure is stored.
    fn m(&self, index: usize) -> f64;

    /// Read a single ordinate.
    ///
    /// # Errors
    ///
    /// - [`CoordSeqError::UnsupportedOrdinate`] if `ordinate_index > 3`
    /// - [`CoordSeqError::IndexOutOfRange`] if `index >= self.len()`
    fn ordinate(&self, index: usize, ordinate_index: usize) -> CoordSeqResult<f64>;

    /// Write a single ordinate.
    ///
    /// Writing an ordinate that this sequence does not store is a no-op.
    ///
    /// # Errors
    ///
    /// - [`CoordSeqError::UnsupportedOrdinate`] if `ordinate_index > 3`
    /// - [`CoordSeqError::IndexOutOfRange`] if `index >= self.len()`
    fn set_ordinate(
        &mut self,
        index: usize,
        ordinate_index: usize,
        value: f64,
    ) -> CoordSeqResult<()>;

    /// A fresh coordinate value for `index`, with the variant given by [`Self::dim`].
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    fn coord(&self, index: usize) -> Coord {
        Coord::new(
            self.dim(),
            self.x(index),
            self.y(index),
            self.z(index),
            self.m(index),
        )
    }

    /// Copy the coordinate at `index` into an existing value.
    ///
    /// X and Y are always written. Z is written only if [`Self::has_z`] and M only if
    /// [`Self::has_m`]; otherwise the existing value in `coord` is left as it was. Writing Z or M
    /// into a `coord` variant that has no such field does nothing.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    fn coord_into(&self, index: usize, coord: &mut Coord) {
        coord.set_x(self.x(index));
        coord.set_y(self.y(index));
        if self.has_z() {
            coord.set_z(self.z(index));
        }
        if self.has_m() {
            coord.set_m(self.m(index));
        }
    }

    /// All coordinates of this sequence as values.
    ///
    /// Implementations may cache the result; any write through this trait must invalidate it.
    fn to_coord_array(&self) -> &[Coord];

    /// Expand `rect` to include the x/y extent of every coordinate, returning `rect`.
    fn expand_bounding_rect<'a>(&self, rect: &'a mut BoundingRect) -> &'a mut BoundingRect {
        for i in 0..self.len() {
            rect.expand_to_include(self.x(i), self.y(i));
        }
        rect
    }

    /// A new sequence with the coordinates in reverse order.
    fn reversed(&self) -> Self
    where
        Self: Sized;

    /// An independent sequence with the same ordinate set and values.
    fn copy(&self) -> Self
    where
        Self: Sized;

    /// Access to the structure-of-arrays layout, if this sequence is stored that way.
    ///
    /// Used to select bulk copies over per-coordinate reads.
    fn as_soa(&self) -> Option<&SoaCoordSequence> {
        None
    }
}

/// Check that `index` addresses a coordinate of a sequence with `len` coordinates.
pub(crate) fn check_index(index: usize, len: usize) -> CoordSeqResult<()> {
    if index < len {
        Ok(())
    } else {
        Err(CoordSeqError::IndexOutOfRange { index, len })
    }
}
