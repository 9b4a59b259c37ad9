use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::error::{CoordSeqError, CoordSeqResult};

/// The set of ordinates stored for every coordinate of a sequence.
///
/// Every ordinate set has an integer form of `(dimension, measures)`: the total number of
/// ordinates per coordinate and how many of them are measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dimension {
    /// Two-dimensional.
    XY,

    /// Three-dimensional.
    XYZ,

    /// XYM (2D with measure).
    XYM,

    /// XYZM (3D with measure).
    XYZM,
}

impl Dimension {
    /// Returns the number of ordinates per coordinate, between 2 and 4.
    pub fn size(&self) -> usize {
        match self {
            Dimension::XY => 2,
            Dimension::XYZ => 3,
            Dimension::XYM => 3,
            Dimension::XYZM => 4,
        }
    }

    /// Returns the number of measure ordinates, 0 or 1.
    pub fn measures(&self) -> usize {
        match self {
            Dimension::XY | Dimension::XYZ => 0,
            Dimension::XYM | Dimension::XYZM => 1,
        }
    }

    /// Returns the number of spatial (non-measure) ordinates.
    pub fn spatial(&self) -> usize {
        self.size() - self.measures()
    }

    /// Whether coordinates carry an elevation.
    pub fn has_z(&self) -> bool {
        matches!(self, Dimension::XYZ | Dimension::XYZM)
    }

    /// Whether coordinates carry a measure.
    pub fn has_m(&self) -> bool {
        matches!(self, Dimension::XYM | Dimension::XYZM)
    }

    /// The ordinate set containing X and Y plus whichever of Z and M are requested.
    pub fn from_flags(has_z: bool, has_m: bool) -> Self {
        match (has_z, has_m) {
            (false, false) => Dimension::XY,
            (true, false) => Dimension::XYZ,
            (false, true) => Dimension::XYM,
            (true, true) => Dimension::XYZM,
        }
    }

    /// Converts the integer `(dimension, measures)` form into an ordinate set.
    ///
    /// # Errors
    ///
    /// - if the pair is not one of `(2, 0)`, `(3, 0)`, `(3, 1)` or `(4, 1)`.
    pub fn try_from_dimension_and_measures(
        dimension: usize,
        measures: usize,
    ) -> CoordSeqResult<Self> {
        match (dimension, measures) {
            (2, 0) => Ok(Dimension::XY),
            (3, 0) => Ok(Dimension::XYZ),
            (3, 1) => Ok(Dimension::XYM),
            (4, 1) => Ok(Dimension::XYZM),
            _ => Err(CoordSeqError::InvalidDimension(format!(
                "no ordinate set has dimension {dimension} with {measures} measures"
            ))),
        }
    }
}

impl From<Dimension> for geo_traits::Dimensions {
    fn from(value: Dimension) -> Self {
        match value {
            Dimension::XY => geo_traits::Dimensions::Xy,
            Dimension::XYZ => geo_traits::Dimensions::Xyz,
            Dimension::XYM => geo_traits::Dimensions::Xym,
            Dimension::XYZM => geo_traits::Dimensions::Xyzm,
        }
    }
}

impl TryFrom<geo_traits::Dimensions> for Dimension {
    type Error = CoordSeqError;

    fn try_from(value: geo_traits::Dimensions) -> std::result::Result<Self, Self::Error> {
        match value {
            geo_traits::Dimensions::Xy | geo_traits::Dimensions::Unknown(2) => Ok(Dimension::XY),
            geo_traits::Dimensions::Xyz | geo_traits::Dimensions::Unknown(3) => Ok(Dimension::XYZ),
            geo_traits::Dimensions::Xym => Ok(Dimension::XYM),
            geo_traits::Dimensions::Xyzm | geo_traits::Dimensions::Unknown(4) => {
                Ok(Dimension::XYZM)
            }
            _ => Err(CoordSeqError::InvalidDimension(format!(
                "Unsupported dimension {value:?}"
            ))),
        }
    }
}

impl Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Dimension::XY => write!(f, "XY"),
            Dimension::XYZ => write!(f, "XYZ"),
            Dimension::XYM => write!(f, "XYM"),
            Dimension::XYZM => write!(f, "XYZM"),
        }
    }
}

/// A single ordinate slot addressed by the integer index used in
/// [`CoordSequence::ordinate`][crate::CoordSequence::ordinate].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ordinate {
    /// Index 0
    X,
    /// Index 1
    Y,
    /// Index 2
    Z,
    /// Index 3
    M,
}

impl TryFrom<usize> for Ordinate {
    type Error = CoordSeqError;

    fn try_from(value: usize) -> std::result::Result<Self, Self::Error> {
        match value {
            0 => Ok(Ordinate::X),
            1 => Ok(Ordinate::Y),
            2 => Ok(Ordinate::Z),
            3 => Ok(Ordinate::M),
            n => Err(CoordSeqError::UnsupportedOrdinate(n)),
        }
    }
}

#[cfg(test)]
mod test {
    use std::iter::zip;

    use super::*;

    const ALL: [Dimension; 4] = [
        Dimension::XY,
        Dimension::XYZ,
        Dimension::XYM,
        Dimension::XYZM,
    ];

    #[test]
    fn dimension_and_measures() {
        let pairs = [(2, 0), (3, 0), (3, 1), (4, 1)];
        for (dim, (dimension, measures)) in zip(ALL, pairs) {
            assert_eq!(dim.size(), dimension);
            assert_eq!(dim.measures(), measures);
            assert_eq!(
                Dimension::try_from_dimension_and_measures(dimension, measures).unwrap(),
                dim
            );
        }
    }

    #[test]
    fn bad_dimension_and_measures() {
        assert!(Dimension::try_from_dimension_and_measures(4, 0).is_err());
        assert!(Dimension::try_from_dimension_and_measures(2, 1).is_err());
        assert!(Dimension::try_from_dimension_and_measures(5, 1).is_err());
        assert!(Dimension::try_from_dimension_and_measures(1, 0).is_err());
    }

    #[test]
    fn flags() {
        for dim in ALL {
            assert_eq!(Dimension::from_flags(dim.has_z(), dim.has_m()), dim);
            assert_eq!(dim.spatial(), if dim.has_z() { 3 } else { 2 });
        }
    }

    #[test]
    fn geotraits_dimensions() {
        let geotraits_dims = [
            geo_traits::Dimensions::Xy,
            geo_traits::Dimensions::Xyz,
            geo_traits::Dimensions::Xym,
            geo_traits::Dimensions::Xyzm,
        ];

        for (dim, geotraits_dim) in zip(ALL, geotraits_dims) {
            let into_geotraits_dim: geo_traits::Dimensions = dim.into();
            assert_eq!(into_geotraits_dim, geotraits_dim);

            let back: Dimension = geotraits_dim.try_into().unwrap();
            assert_eq!(back, dim);
            assert_eq!(dim.size(), geotraits_dim.size());
        }

        let dims_err: Result<Dimension, CoordSeqError> =
            geo_traits::Dimensions::Unknown(0).try_into();
        assert_eq!(
            dims_err.unwrap_err().to_string(),
            "Invalid dimension: Unsupported dimension Unknown(0)"
        );
    }

    #[test]
    fn ordinate_indices() {
        assert_eq!(Ordinate::try_from(0).unwrap(), Ordinate::X);
        assert_eq!(Ordinate::try_from(3).unwrap(), Ordinate::M);
        assert_eq!(
            Ordinate::try_from(4).unwrap_err(),
            CoordSeqError::UnsupportedOrdinate(4)
        );
    }
}
