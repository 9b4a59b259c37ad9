//! Concrete coordinate sequences.
//!
//! Coordinates can be stored either as a _structure of arrays_, where each ordinate axis has its
//! own buffer (with X and Y interleaved), or as an _array of structs_, with one [`Coord`] value
//! per coordinate.
//!
//! [`Coord`]: crate::scalar::Coord

mod soa;
mod vec;

pub use soa::SoaCoordSequence;
pub use vec::CoordVecSequence;
