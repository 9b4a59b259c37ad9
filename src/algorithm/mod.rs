//! Algorithms implemented on coordinate sequences.

mod bounding_rect;

pub use bounding_rect::BoundingRect;
