//! Defines [`CoordSeqError`], representing all errors returned by this crate.

use std::fmt::Debug;

use thiserror::Error;

/// Enum with all errors in this crate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CoordSeqError {
    /// An ordinate index other than 0 (X), 1 (Y), 2 (Z) or 3 (M).
    #[error("Unsupported ordinate index {0}; expected one of 0 (X), 1 (Y), 2 (Z), 3 (M)")]
    UnsupportedOrdinate(usize),

    /// A point index outside of `[0, len)`.
    #[error("Index {index} out of range for coordinate sequence of length {len}")]
    IndexOutOfRange {
        /// The requested point index
        index: usize,
        /// The number of points in the sequence
        len: usize,
    },

    /// A dimension/measures combination that does not name an ordinate set, or a coordinate whose
    /// dimension does not match its destination.
    #[error("Invalid dimension: {0}")]
    InvalidDimension(String),

    /// Raw ordinate buffers whose lengths disagree with each other.
    #[error("Invalid coordinate buffers: {0}")]
    InvalidBuffers(String),
}

/// Crate-specific result type.
pub type CoordSeqResult<T> = std::result::Result<T, CoordSeqError>;

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(
            CoordSeqError::UnsupportedOrdinate(7).to_string(),
            "Unsupported ordinate index 7; expected one of 0 (X), 1 (Y), 2 (Z), 3 (M)"
        );
        assert_eq!(
            CoordSeqError::IndexOutOfRange { index: 3, len: 2 }.to_string(),
            "Index 3 out of range for coordinate sequence of length 2"
        );
    }
}
