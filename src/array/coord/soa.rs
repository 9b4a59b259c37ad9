use std::cell::OnceCell;

use geo_traits::CoordTrait;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::algorithm::BoundingRect;
use crate::dimension::{Dimension, Ordinate};
use crate::eq::{optional_ordinates_eq, ordinates_eq};
use crate::error::{CoordSeqError, CoordSeqResult};
use crate::scalar::{z_ordinate, Coord, NULL_ORDINATE};
use crate::trait_::{check_index, CoordSequence};

/// A coordinate sequence stored as a structure of arrays.
///
/// X and Y are interleaved in one buffer as `xyxyxy`. Z and M, when stored, each live in their own
/// buffer with one value per coordinate. Buffers for ordinates that are not stored are not
/// allocated.
///
/// The sequence lazily materializes its coordinates as [`Coord`] values in
/// [`to_coord_array`][CoordSequence::to_coord_array] and keeps them until the next write.
#[derive(Debug, Serialize, Deserialize)]
#[serde(try_from = "SoaBuffers", into = "SoaBuffers")]
pub struct SoaCoordSequence {
    xy: Vec<f64>,
    z: Option<Vec<f64>>,
    m: Option<Vec<f64>>,
    dim: Dimension,
    coords: OnceCell<Vec<Coord>>,
}

fn check(xy: &[f64], z: Option<&[f64]>, m: Option<&[f64]>) -> CoordSeqResult<()> {
    if xy.len() % 2 != 0 {
        return Err(CoordSeqError::InvalidBuffers(format!(
            "xy buffer must have an even length; got {}",
            xy.len()
        )));
    }

    let len = xy.len() / 2;
    for (name, buffer) in [("z", z), ("m", m)] {
        if let Some(buffer) = buffer {
            if buffer.len() != len {
                return Err(CoordSeqError::InvalidBuffers(format!(
                    "{name} buffer has length {} but xy holds {len} coordinates",
                    buffer.len()
                )));
            }
        }
    }

    Ok(())
}

impl SoaCoordSequence {
    pub(crate) fn from_parts(
        xy: Vec<f64>,
        z: Option<Vec<f64>>,
        m: Option<Vec<f64>>,
        dim: Dimension,
    ) -> Self {
        Self {
            xy,
            z,
            m,
            dim,
            coords: OnceCell::new(),
        }
    }

    /// Construct a sequence of `len` coordinates.
    ///
    /// X and Y are set to `0.0`; Z and M, when `dim` includes them, are set to
    /// [`NULL_ORDINATE`].
    pub fn new(len: usize, dim: Dimension) -> Self {
        let z = dim.has_z().then(|| vec![NULL_ORDINATE; len]);
        let m = dim.has_m().then(|| vec![NULL_ORDINATE; len]);
        Self::from_parts(vec![0.0; 2 * len], z, m, dim)
    }

    /// Construct a sequence holding the given coordinates with the ordinate set `dim`.
    ///
    /// X and Y are copied from every coordinate, and Z as well if `dim` has Z (coordinates
    /// without Z contribute [`NULL_ORDINATE`]). Measures are never read from `coords`: if `dim`
    /// has M, every measure is set to [`NULL_ORDINATE`]. Use
    /// [`SoaCoordSequenceBuilder`][crate::builder::SoaCoordSequenceBuilder] to carry measures.
    pub fn from_coords<C: CoordTrait<T = f64>>(coords: &[C], dim: Dimension) -> Self {
        let mut xy = Vec::with_capacity(2 * coords.len());
        for coord in coords {
            xy.push(coord.x());
            xy.push(coord.y());
        }

        let z = dim.has_z().then(|| coords.iter().map(z_ordinate).collect());
        let m = dim.has_m().then(|| vec![NULL_ORDINATE; coords.len()]);

        Self::from_parts(xy, z, m, dim)
    }

    /// Construct a sequence with the ordinate set `dim` from any other sequence.
    ///
    /// If `source` is stored as a structure of arrays, its buffers are copied in bulk. Otherwise
    /// the ordinates are read one coordinate at a time. Either way, Z and M values that `source`
    /// does not store become [`NULL_ORDINATE`].
    pub fn from_sequence<S: CoordSequence + ?Sized>(source: &S, dim: Dimension) -> Self {
        let len = source.len();

        if let Some(soa) = source.as_soa() {
            trace!(len, %dim, "copying coordinate sequence buffers in bulk");
            let z = dim.has_z().then(|| match &soa.z {
                Some(z) => z.clone(),
                None => vec![NULL_ORDINATE; len],
            });
            let m = dim.has_m().then(|| match &soa.m {
                Some(m) => m.clone(),
                None => vec![NULL_ORDINATE; len],
            });
            return Self::from_parts(soa.xy.clone(), z, m, dim);
        }

        trace!(len, %dim, "copying coordinate sequence per coordinate");
        let mut xy = Vec::with_capacity(2 * len);
        let mut z = dim.has_z().then(|| Vec::with_capacity(len));
        let mut m = dim.has_m().then(|| Vec::with_capacity(len));
        for i in 0..len {
            xy.push(source.x(i));
            xy.push(source.y(i));
            if let Some(z) = z.as_mut() {
                z.push(source.z(i));
            }
            if let Some(m) = m.as_mut() {
                m.push(source.m(i));
            }
        }
        Self::from_parts(xy, z, m, dim)
    }

    /// Construct a sequence that takes ownership of existing buffers without copying them.
    ///
    /// The ordinate set is derived from which buffers are present as
    /// `dimension = 2 + (z is None) + (m is None)` and `measures = (m is None)`. That is, the
    /// sequence reports Z exactly when `z` is `None` and M exactly when `m` is `None`. Ordinate
    /// reads and writes always go through the buffers that are actually present, so a reported
    /// ordinate without a buffer reads as [`NULL_ORDINATE`] and ignores writes.
    ///
    /// # Errors
    ///
    /// - if `xy` has an odd length
    /// - if `z` or `m` do not hold exactly one value per coordinate
    pub fn try_from_raw_buffers(
        xy: Vec<f64>,
        z: Option<Vec<f64>>,
        m: Option<Vec<f64>>,
    ) -> CoordSeqResult<Self> {
        check(&xy, z.as_deref(), m.as_deref())?;
        let dimension = 2 + usize::from(z.is_none()) + usize::from(m.is_none());
        let measures = usize::from(m.is_none());
        let dim = Dimension::try_from_dimension_and_measures(dimension, measures)?;
        Ok(Self::from_parts(xy, z, m, dim))
    }

    /// Consume the sequence and return its `(xy, z, m)` buffers.
    pub fn into_raw_buffers(self) -> (Vec<f64>, Option<Vec<f64>>, Option<Vec<f64>>) {
        (self.xy, self.z, self.m)
    }

    /// The interleaved x/y buffer
    pub fn xy_buffer(&self) -> &[f64] {
        &self.xy
    }

    /// The z buffer, if allocated
    pub fn z_buffer(&self) -> Option<&[f64]> {
        self.z.as_deref()
    }

    /// The m buffer, if allocated
    pub fn m_buffer(&self) -> Option<&[f64]> {
        self.m.as_deref()
    }

    /// Mutable access to the interleaved x/y buffer.
    ///
    /// Releases the materialized coordinate array.
    pub fn xy_buffer_mut(&mut self) -> &mut [f64] {
        self.release_coord_array();
        &mut self.xy
    }

    /// Mutable access to the z buffer, if allocated.
    ///
    /// Releases the materialized coordinate array.
    pub fn z_buffer_mut(&mut self) -> Option<&mut [f64]> {
        self.release_coord_array();
        self.z.as_deref_mut()
    }

    /// Mutable access to the m buffer, if allocated.
    ///
    /// Releases the materialized coordinate array.
    pub fn m_buffer_mut(&mut self) -> Option<&mut [f64]> {
        self.release_coord_array();
        self.m.as_deref_mut()
    }

    /// Drop the materialized coordinate array, if any.
    ///
    /// The next call to [`to_coord_array`][CoordSequence::to_coord_array] rebuilds it from the
    /// buffers.
    pub fn release_coord_array(&mut self) {
        if self.coords.take().is_some() {
            trace!(len = self.len(), "released materialized coordinate array");
        }
    }

    /// Whether a materialized coordinate array is currently held.
    pub fn is_coord_array_cached(&self) -> bool {
        self.coords.get().is_some()
    }

    /// Set the x ordinate of the coordinate at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn set_x(&mut self, index: usize, value: f64) {
        self.xy[2 * index] = value;
        self.release_coord_array();
    }

    /// Set the y ordinate of the coordinate at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn set_y(&mut self, index: usize, value: f64) {
        self.xy[2 * index + 1] = value;
        self.release_coord_array();
    }

    /// Set the z ordinate of the coordinate at `index`. Does nothing if no z buffer is allocated.
    ///
    /// # Panics
    ///
    /// Panics if a z buffer is allocated and `index` is out of bounds.
    pub fn set_z(&mut self, index: usize, value: f64) {
        if let Some(z) = self.z.as_mut() {
            z[index] = value;
        }
        self.release_coord_array();
    }

    /// Set the measure of the coordinate at `index`. Does nothing if no m buffer is allocated.
    ///
    /// # Panics
    ///
    /// Panics if an m buffer is allocated and `index` is out of bounds.
    pub fn set_m(&mut self, index: usize, value: f64) {
        if let Some(m) = self.m.as_mut() {
            m[index] = value;
        }
        self.release_coord_array();
    }
}

impl CoordSequence for SoaCoordSequence {
    fn len(&self) -> usize {
        self.xy.len() / 2
    }

    fn dim(&self) -> Dimension {
        self.dim
    }

    fn x(&self, index: usize) -> f64 {
        self.xy[2 * index]
    }

    fn y(&self, index: usize) -> f64 {
        self.xy[2 * index + 1]
    }

    fn z(&self, index: usize) -> f64 {
        self.z.as_ref().map_or(NULL_ORDINATE, |z| z[index])
    }

    fn m(&self, index: usize) -> f64 {
        self.m.as_ref().map_or(NULL_ORDINATE, |m| m[index])
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
        match ordinate {
            Ordinate::X => self.set_x(index, value),
            Ordinate::Y => self.set_y(index, value),
            Ordinate::Z if self.has_z() => self.set_z(index, value),
            Ordinate::Z | Ordinate::M => self.set_m(index, value),
        }
        Ok(())
    }

    fn to_coord_array(&self) -> &[Coord] {
        self.coords.get_or_init(|| {
            trace!(len = self.len(), "materializing coordinate array");
            (0..self.len()).map(|i| self.coord(i)).collect()
        })
    }

    fn expand_bounding_rect<'a>(&self, rect: &'a mut BoundingRect) -> &'a mut BoundingRect {
        for xy in self.xy.chunks_exact(2) {
            rect.expand_to_include(xy[0], xy[1]);
        }
        rect
    }

    fn reversed(&self) -> Self {
        let xy = self.xy.chunks_exact(2).rev().flatten().copied().collect();
        let z = self.z.as_ref().map(|z| z.iter().rev().copied().collect());
        let m = self.m.as_ref().map(|m| m.iter().rev().copied().collect());
        Self::from_parts(xy, z, m, self.dim)
    }

    fn copy(&self) -> Self {
        Self::from_sequence(self, self.dim)
    }

    fn as_soa(&self) -> Option<&SoaCoordSequence> {
        Some(self)
    }
}

impl Clone for SoaCoordSequence {
    /// Clones the buffers as they are. The clone starts without a materialized coordinate array.
    fn clone(&self) -> Self {
        Self::from_parts(self.xy.clone(), self.z.clone(), self.m.clone(), self.dim)
    }
}

impl PartialEq for SoaCoordSequence {
    fn eq(&self, other: &Self) -> bool {
        self.dim == other.dim
            && ordinates_eq(&self.xy, &other.xy)
            && optional_ordinates_eq(self.z.as_deref(), other.z.as_deref())
            && optional_ordinates_eq(self.m.as_deref(), other.m.as_deref())
    }
}

/// Serialized form of a [`SoaCoordSequence`]: the buffers and the ordinate set, without the
/// materialized coordinate array.
#[derive(Serialize, Deserialize)]
struct SoaBuffers {
    xy: Vec<f64>,
    z: Option<Vec<f64>>,
    m: Option<Vec<f64>>,
    dim: Dimension,
}

impl From<SoaCoordSequence> for SoaBuffers {
    fn from(value: SoaCoordSequence) -> Self {
        let dim = value.dim;
        let (xy, z, m) = value.into_raw_buffers();
        Self { xy, z, m, dim }
    }
}

impl TryFrom<SoaBuffers> for SoaCoordSequence {
    type Error = CoordSeqError;

    fn try_from(value: SoaBuffers) -> CoordSeqResult<Self> {
        check(&value.xy, value.z.as_deref(), value.m.as_deref())?;
        Ok(Self::from_parts(value.xy, value.z, value.m, value.dim))
    }
}
