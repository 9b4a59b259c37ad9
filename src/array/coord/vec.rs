use geo_traits::CoordTrait;
use serde::{Deserialize, Serialize};

use crate::dimension::{Dimension, Ordinate};
use crate::error::{CoordSeqError, CoordSeqResult};
use crate::scalar::{Coord, NULL_ORDINATE};
use crate::trait_::{check_index, CoordSequence};

/// A coordinate sequence stored as one [`Coord`] value per coordinate.
///
/// Every stored value has the variant matching the sequence's [`Dimension`]. Since the storage
/// already is an array of coordinates, [`to_coord_array`][CoordSequence::to_coord_array] borrows
/// it directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "CoordVecParts", into = "CoordVecParts")]
pub struct CoordVecSequence {
    coords: Vec<Coord>,
    dim: Dimension,
}

impl CoordVecSequence {
    /// Construct a sequence of `len` coordinates with X and Y set to `0.0` and Z and M, when
    /// `dim` includes them, set to [`NULL_ORDINATE`].
    pub fn new(len: usize, dim: Dimension) -> Self {
        Self {
            coords: vec![Coord::new(dim, 0.0, 0.0, NULL_ORDINATE, NULL_ORDINATE); len],
            dim,
        }
    }

    /// Construct from any coordinates, converting each to the variant for `dim`.
    pub fn from_coords<C: CoordTrait<T = f64>>(coords: &[C], dim: Dimension) -> Self {
        Self {
            coords: coords
                .iter()
                .map(|coord| Coord::from_coord(coord, dim))
                .collect(),
            dim,
        }
    }

    /// Construct from any other sequence, reading one coordinate at a time.
    pub fn from_sequence<S: CoordSequence + ?Sized>(source: &S, dim: Dimension) -> Self {
        Self {
            coords: (0..source.len())
                .map(|i| Coord::new(dim, source.x(i), source.y(i), source.z(i), source.m(i)))
                .collect(),
            dim,
        }
    }

    /// Consume the sequence and return its coordinates.
    pub fn into_inner(self) -> Vec<Coord> {
        self.coords
    }
}

impl CoordSequence for CoordVecSequence {
    fn len(&self) -> usize {
        self.coords.len()
    }

    fn dim(&self) -> Dimension {
        self.dim
    }

    fn x(&self, index: usize) -> f64 {
        self.coords[index].x()
    }

    fn y(&self, index: usize) -> f64 {
        self.coords[index].y()
    }

    fn z(&self, index: usize) -> f64 {
        self.coords[index].z().unwrap_or(NULL_ORDINATE)
    }

    fn m(&self, index: usize) -> f64 {
        self.coords[index].m().unwrap_or(NULL_ORDINATE)
    }

    fn ordinate(&self, index: usize, ordinate_index: usize) -> CoordSeqResult<f64> {
        let ordinate = Ordinate::try_from(ordinate_index)?;
        check_index(index, self.len())?;
        let value = match ordinate {
            Ordinate::X => self.x(index),
            Ordinate::Y => self.y(index),
            Ordinate::Z if self.has_z() => self.z(index),
            Ordinate::Z | Ordinate::M => self.m(index),
        };
        Ok(value)
    }

    fn set_ordinate(
        &mut self,
        index: usize,
        ordinate_index: usize,
        value: f64,
    ) -> CoordSeqResult<()> {
        let ordinate = Ordinate::try_from(ordinate_index)?;
        check_index(index, self.len())?;
        let has_z = self.has_z();
        let coord = &mut self.coords[index];
        match ordinate {
            Ordinate::X => coord.set_x(value),
            Ordinate::Y => coord.set_y(value),
            Ordinate::Z if has_z => coord.set_z(value),
            Ordinate::Z | Ordinate::M => coord.set_m(value),
        }
        Ok(())
    }

    fn coord(&self, index: usize) -> Coord {
        self.coords[index]
    }

    fn to_coord_array(&self) -> &[Coord] {
        &self.coords
    }

    fn reversed(&self) -> Self {
        Self {
            coords: self.coords.iter().rev().copied().collect(),
            dim: self.dim,
        }
    }

    fn copy(&self) -> Self {
        self.clone()
    }
}

/// Serialized form of a [`CoordVecSequence`], checked against its dimension on the way in.
#[derive(Serialize, Deserialize)]
struct CoordVecParts {
    coords: Vec<Coord>,
    dim: Dimension,
}

impl From<CoordVecSequence> for CoordVecParts {
    fn from(value: CoordVecSequence) -> Self {
        Self {
            coords: value.coords,
            dim: value.dim,
        }
    }
}

impl TryFrom<CoordVecParts> for CoordVecSequence {
    type Error = CoordSeqError;

    fn try_from(value: CoordVecParts) -> CoordSeqResult<Self> {
        if let Some((i, coord)) = value
            .coords
            .iter()
            .enumerate()
            .find(|(_, coord)| coord.dimension() != value.dim)
        {
            return Err(CoordSeqError::InvalidDimension(format!(
                "coord {i} has dimension {} in a {} sequence",
                coord.dimension(),
                value.dim
            )));
        }
        Ok(Self {
            coords: value.coords,
            dim: value.dim,
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::algorithm::BoundingRect;
    use crate::test::sequence::{rectangle, xyzm_sequence};

    #[test]
    fn mirrors_soa_reads() {
        let soa = xyzm_sequence();
        let seq = CoordVecSequence::from_sequence(&soa, soa.dim());
        assert_eq!(seq.len(), soa.len());
        for i in 0..seq.len() {
            assert_eq!(seq.coord(i), soa.coord(i));
            for k in 0..4 {
                assert_eq!(seq.ordinate(i, k).unwrap(), soa.ordinate(i, k).unwrap());
            }
        }
        assert_eq!(seq.to_coord_array(), soa.to_coord_array());
    }

    #[test]
    fn ordinal_two_falls_through_to_measure() {
        let mut seq = CoordVecSequence::new(1, Dimension::XYM);
        seq.set_ordinate(0, 2, 42.).unwrap();
        assert_eq!(seq.m(0), 42.);
        assert!(seq.z(0).is_nan());
    }

    #[test]
    fn missing_ordinates() {
        let mut seq = CoordVecSequence::from_sequence(&rectangle(), Dimension::XY);
        seq.set_ordinate(0, 3, 1.).unwrap();
        assert!(seq.m(0).is_nan());
        assert!(seq.ordinate(0, 2).unwrap().is_nan());
        assert!(seq.set_ordinate(0, 4, 1.).is_err());
        assert!(seq.ordinate(4, 0).is_err());
    }

    #[test]
    fn default_bounding_rect_and_reverse() {
        let seq = CoordVecSequence::from_sequence(&rectangle(), Dimension::XY);
        let mut rect = BoundingRect::new();
        seq.expand_bounding_rect(&mut rect);
        assert_eq!(<([f64; 2], [f64; 2])>::from(rect), ([0., 0.], [4., 3.]));

        let reversed = seq.reversed();
        assert_eq!(reversed.coord(0), seq.coord(3));
        assert_eq!(reversed.reversed(), seq);
    }

    #[test]
    fn serde_round_trip() {
        let seq = CoordVecSequence::from_sequence(&xyzm_sequence(), Dimension::XYZM);
        let json = serde_json::to_string(&seq).unwrap();
        let back: CoordVecSequence = serde_json::from_str(&json).unwrap();
        assert_eq!(back, seq);
        assert_eq!(back.dim(), Dimension::XYZM);
    }

    #[test]
    fn deserialize_rejects_mismatched_variant() {
        let json = r#"{"coords":[{"XY":{"x":1.0,"y":2.0}}],"dim":"XYZM"}"#;
        assert!(serde_json::from_str::<CoordVecSequence>(json).is_err());

        let json = r#"{"coords":[{"XY":{"x":1.0,"y":2.0}}],"dim":"XY"}"#;
        let seq: CoordVecSequence = serde_json::from_str(json).unwrap();
        assert_eq!(seq.coord(0).dimension(), seq.dim());
    }
}
