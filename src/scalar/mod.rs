//! Materialized coordinate values.

mod coord;

pub use coord::{Coord, NULL_ORDINATE};
pub(crate) use coord::z_ordinate;
