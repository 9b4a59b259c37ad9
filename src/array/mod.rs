//! Contains implementations of coordinate sequences.

pub use coord::{CoordVecSequence, SoaCoordSequence};

pub mod coord;
