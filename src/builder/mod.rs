//! Builders for coordinate sequences.

mod soa;

pub use soa::SoaCoordSequenceBuilder;
