mod owned;

pub use owned::{Coord, NULL_ORDINATE};
pub(crate) use owned::z_ordinate;
