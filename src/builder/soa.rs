use geo_traits::{CoordTrait, Dimensions};

use crate::array::SoaCoordSequence;
use crate::dimension::Dimension;
use crate::error::{CoordSeqError, CoordSeqResult};
use crate::scalar::{Coord, NULL_ORDINATE};

/// A growable [`SoaCoordSequence`].
///
/// Unlike [`SoaCoordSequence::from_coords`], pushing a coordinate stores every ordinate of the
/// builder's dimension, measures included.
///
/// Converting a [`SoaCoordSequenceBuilder`] into a [`SoaCoordSequence`] is `O(1)`.
#[derive(Debug, Clone)]
pub struct SoaCoordSequenceBuilder {
    xy: Vec<f64>,
    z: Option<Vec<f64>>,
    m: Option<Vec<f64>>,
    dim: Dimension,
}

impl SoaCoordSequenceBuilder {
    /// Create a new empty builder with the given dimension
    pub fn new(dim: Dimension) -> Self {
        Self::with_capacity(0, dim)
    }

    /// Create a new builder with the given capacity and dimension
    pub fn with_capacity(capacity: usize, dim: Dimension) -> Self {
        // z and m are only allocated for stored ordinates
        Self {
            xy: Vec::with_capacity(2 * capacity),
            z: dim.has_z().then(|| Vec::with_capacity(capacity)),
            m: dim.has_m().then(|| Vec::with_capacity(capacity)),
            dim,
        }
    }

    /// Reserves capacity for at least `additional` more coordinates.
    pub fn reserve(&mut self, additional: usize) {
        self.xy.reserve(2 * additional);
        self.z.iter_mut().for_each(|z| z.reserve(additional));
        self.m.iter_mut().for_each(|m| m.reserve(additional));
    }

    /// Returns the total number of coordinates the builder can hold without reallocating.
    pub fn capacity(&self) -> usize {
        self.xy.capacity() / 2
    }

    /// The number of coordinates in this builder
    pub fn len(&self) -> usize {
        self.xy.len() / 2
    }

    /// Whether this builder is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The dimension of this builder
    pub fn dim(&self) -> Dimension {
        self.dim
    }

    /// Push a new coordinate from its ordinates. `z` and `m` are ignored if the builder's
    /// dimension does not have them.
    pub fn push_ordinates(&mut self, x: f64, y: f64, z: f64, m: f64) {
        self.xy.push(x);
        self.xy.push(y);
        if let Some(buffer) = self.z.as_mut() {
            buffer.push(z);
        }
        if let Some(buffer) = self.m.as_mut() {
            buffer.push(m);
        }
    }

    /// Push a new coord onto the end of this builder
    ///
    /// A coordinate of [`Dimensions::Unknown`] is accepted when its ordinate count matches the
    /// builder's dimension. For an XYM builder, the third ordinate of such a coordinate is the
    /// measure.
    ///
    /// ## Errors
    ///
    /// - If the added coordinate does not have the same dimension as the builder.
    pub fn try_push_coord(&mut self, coord: &impl CoordTrait<T = f64>) -> CoordSeqResult<()> {
        let accepted = match self.dim {
            Dimension::XY => matches!(coord.dim(), Dimensions::Xy | Dimensions::Unknown(2)),
            Dimension::XYZ => matches!(coord.dim(), Dimensions::Xyz | Dimensions::Unknown(3)),
            Dimension::XYM => matches!(coord.dim(), Dimensions::Xym | Dimensions::Unknown(3)),
            Dimension::XYZM => matches!(coord.dim(), Dimensions::Xyzm | Dimensions::Unknown(4)),
        };
        if !accepted {
            return Err(CoordSeqError::InvalidDimension(format!(
                "coord dimension must be {} for this builder; got {:?}.",
                self.dim,
                coord.dim()
            )));
        }

        let coord = Coord::from_coord(coord, self.dim);
        self.push_ordinates(
            coord.x(),
            coord.y(),
            coord.z().unwrap_or(NULL_ORDINATE),
            coord.m().unwrap_or(NULL_ORDINATE),
        );
        Ok(())
    }

    /// Construct a new builder and pre-fill it with coordinates from the provided iterator
    ///
    /// ## Errors
    ///
    /// - If any coordinate does not have the builder's dimension.
    pub fn from_coords<'a>(
        coords: impl ExactSizeIterator<Item = &'a (impl CoordTrait<T = f64> + 'a)>,
        dim: Dimension,
    ) -> CoordSeqResult<Self> {
        let mut builder = SoaCoordSequenceBuilder::with_capacity(coords.len(), dim);
        for coord in coords {
            builder.try_push_coord(coord)?;
        }
        Ok(builder)
    }

    /// Consume the builder and convert to a [`SoaCoordSequence`]
    pub fn finish(self) -> SoaCoordSequence {
        SoaCoordSequence::from_parts(self.xy, self.z, self.m, self.dim)
    }
}

impl From<SoaCoordSequenceBuilder> for SoaCoordSequence {
    fn from(value: SoaCoordSequenceBuilder) -> Self {
        value.finish()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::trait_::CoordSequence;

    #[test]
    fn errors_when_pushing_incompatible_coord() {
        let mut builder = SoaCoordSequenceBuilder::new(Dimension::XY);
        builder
            .try_push_coord(&Coord::new(Dimension::XYZ, 0., 0., 0., 0.))
            .expect_err("Should err pushing XYZ to XY builder");

        let mut builder = SoaCoordSequenceBuilder::new(Dimension::XYZ);
        builder
            .try_push_coord(&Coord::XY { x: 0., y: 0. })
            .expect_err("Should err pushing XY to XYZ builder");
        builder
            .try_push_coord(&Coord::new(Dimension::XYZ, 0., 0., 0., 0.))
            .unwrap();
        assert_eq!(builder.len(), 1);
    }

    #[test]
    fn carries_measures() {
        let coords = [
            Coord::new(Dimension::XYM, 1., 2., f64::NAN, 3.),
            Coord::new(Dimension::XYM, 4., 5., f64::NAN, 6.),
        ];
        let seq = SoaCoordSequenceBuilder::from_coords(coords.iter(), Dimension::XYM)
            .unwrap()
            .finish();
        assert_eq!(seq.dim(), Dimension::XYM);
        assert_eq!(seq.m_buffer(), Some(&[3., 6.][..]));
        assert!(seq.z_buffer().is_none());
        assert_eq!(seq.to_coord_array(), &coords);
    }

    #[test]
    fn capacity_and_reserve() {
        let mut builder = SoaCoordSequenceBuilder::with_capacity(4, Dimension::XYZM);
        assert!(builder.capacity() >= 4);
        assert!(builder.is_empty());
        builder.reserve(10);
        assert!(builder.capacity() >= 10);
        builder.push_ordinates(1., 2., 3., 4.);
        let seq: SoaCoordSequence = builder.into();
        assert_eq!(seq.coord(0), Coord::new(Dimension::XYZM, 1., 2., 3., 4.));
    }

    struct Untyped(Vec<f64>);

    impl CoordTrait for Untyped {
        type T = f64;

        fn dim(&self) -> Dimensions {
            Dimensions::Unknown(self.0.len())
        }

        fn nth_or_panic(&self, n: usize) -> f64 {
            self.0[n]
        }

        fn x(&self) -> f64 {
            self.0[0]
        }

        fn y(&self) -> f64 {
            self.0[1]
        }
    }

    #[test]
    fn accepts_unknown_dimension_by_size() {
        let mut builder = SoaCoordSequenceBuilder::new(Dimension::XYM);
        builder.try_push_coord(&Untyped(vec![1., 2., 3.])).unwrap();
        builder
            .try_push_coord(&Untyped(vec![1., 2., 3., 4.]))
            .expect_err("Should err pushing 4 ordinates to XYM builder");
        let seq = builder.finish();
        assert_eq!(seq.m_buffer(), Some(&[3.][..]));
        assert_eq!(seq.coord(0), Coord::new(Dimension::XYM, 1., 2., f64::NAN, 3.));

        let mut builder = SoaCoordSequenceBuilder::new(Dimension::XYZ);
        builder.try_push_coord(&Untyped(vec![1., 2., 3.])).unwrap();
        assert_eq!(builder.finish().z_buffer(), Some(&[3.][..]));

        let mut builder = SoaCoordSequenceBuilder::new(Dimension::XY);
        builder.try_push_coord(&Untyped(vec![1., 2.])).unwrap();
        assert_eq!(builder.len(), 1);
    }
}
