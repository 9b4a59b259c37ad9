#![doc = include_str!("../README.md")]
#![warn(missing_docs)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(not(test), deny(unused_crate_dependencies))]

pub use dimension::{Dimension, Ordinate};
pub use scalar::{Coord, NULL_ORDINATE};
pub use trait_::CoordSequence;

pub mod algorithm;
pub mod array;
pub mod builder;
mod dimension;
mod eq;
pub mod error;
pub mod scalar;
#[cfg(test)]
pub(crate) mod test;
mod trait_;
