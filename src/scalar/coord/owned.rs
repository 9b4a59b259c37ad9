use geo_traits::{CoordTrait, Dimensions};
use serde::{Deserialize, Serialize};

use crate::dimension::Dimension;
use crate::eq::coord_eq;

/// The reserved ordinate value meaning "this ordinate is not present".
///
/// It is returned for Z or M reads from sequences that do not store that ordinate and is used to
/// fill Z and M buffers that have no source values. Being NaN, it is distinct from every valid
/// ordinate value, including zero; test for it with [`f64::is_nan`].
pub const NULL_ORDINATE: f64 = f64::NAN;

/// A materialized coordinate.
///
/// The variant records which of Z and M the coordinate carries. A `Coord` is a snapshot: it never
/// aliases the buffers of the sequence it was read from.
///
/// This implements [CoordTrait], which you can use to extract data.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub enum Coord {
    /// A planar coordinate
    XY {
        /// x ordinate
        x: f64,
        /// y ordinate
        y: f64,
    },
    /// A coordinate with an elevation
    XYZ {
        /// x ordinate
        x: f64,
        /// y ordinate
        y: f64,
        /// z ordinate
        z: f64,
    },
    /// A planar coordinate with a measure
    XYM {
        /// x ordinate
        x: f64,
        /// y ordinate
        y: f64,
        /// measure
        m: f64,
    },
    /// A coordinate with both elevation and measure
    XYZM {
        /// x ordinate
        x: f64,
        /// y ordinate
        y: f64,
        /// z ordinate
        z: f64,
        /// measure
        m: f64,
    },
}

impl Coord {
    /// Construct the variant for `dim`, dropping whichever of `z` and `m` it does not carry.
    pub fn new(dim: Dimension, x: f64, y: f64, z: f64, m: f64) -> Self {
        match dim {
            Dimension::XY => Coord::XY { x, y },
            Dimension::XYZ => Coord::XYZ { x, y, z },
            Dimension::XYM => Coord::XYM { x, y, m },
            Dimension::XYZM => Coord::XYZM { x, y, z, m },
        }
    }

    /// Convert any [CoordTrait] implementation into the variant for `dim`.
    ///
    /// Ordinates the source does not carry are filled with [`NULL_ORDINATE`].
    pub fn from_coord(coord: &impl CoordTrait<T = f64>, dim: Dimension) -> Self {
        let (z, m) = match (dim, coord.dim()) {
            // three untyped ordinates read as XYM when converting to XYM
            (Dimension::XYM, Dimensions::Unknown(3)) => (NULL_ORDINATE, coord.nth_or_panic(2)),
            _ => (z_ordinate(coord), m_ordinate(coord)),
        };
        Self::new(dim, coord.x(), coord.y(), z, m)
    }

    /// The ordinate set of this coordinate
    pub fn dimension(&self) -> Dimension {
        match self {
            Coord::XY { .. } => Dimension::XY,
            Coord::XYZ { .. } => Dimension::XYZ,
            Coord::XYM { .. } => Dimension::XYM,
            Coord::XYZM { .. } => Dimension::XYZM,
        }
    }

    /// The elevation, if this variant carries one.
    pub fn z(&self) -> Option<f64> {
        match self {
            Coord::XYZ { z, .. } | Coord::XYZM { z, .. } => Some(*z),
            Coord::XY { .. } | Coord::XYM { .. } => None,
        }
    }

    /// The measure, if this variant carries one.
    pub fn m(&self) -> Option<f64> {
        match self {
            Coord::XYM { m, .. } | Coord::XYZM { m, .. } => Some(*m),
            Coord::XY { .. } | Coord::XYZ { .. } => None,
        }
    }

    /// Set the x ordinate
    pub fn set_x(&mut self, value: f64) {
        match self {
            Coord::XY { x, .. }
            | Coord::XYZ { x, .. }
            | Coord::XYM { x, .. }
            | Coord::XYZM { x, .. } => *x = value,
        }
    }

    /// Set the y ordinate
    pub fn set_y(&mut self, value: f64) {
        match self {
            Coord::XY { y, .. }
            | Coord::XYZ { y, .. }
            | Coord::XYM { y, .. }
            | Coord::XYZM { y, .. } => *y = value,
        }
    }

    /// Set the elevation. Does nothing on variants without one.
    pub fn set_z(&mut self, value: f64) {
        if let Coord::XYZ { z, .. } | Coord::XYZM { z, .. } = self {
            *z = value;
        }
    }

    /// Set the measure. Does nothing on variants without one.
    pub fn set_m(&mut self, value: f64) {
        if let Coord::XYM { m, .. } | Coord::XYZM { m, .. } = self {
            *m = value;
        }
    }
}

/// The Z ordinate of any coordinate, or [`NULL_ORDINATE`] if it has none.
pub(crate) fn z_ordinate(coord: &impl CoordTrait<T = f64>) -> f64 {
    match coord.dim() {
        Dimensions::Xyz | Dimensions::Xyzm | Dimensions::Unknown(3) | Dimensions::Unknown(4) => {
            coord.nth_or_panic(2)
        }
        _ => NULL_ORDINATE,
    }
}

/// The M ordinate of any coordinate, or [`NULL_ORDINATE`] if it has none.
pub(crate) fn m_ordinate(coord: &impl CoordTrait<T = f64>) -> f64 {
    match coord.dim() {
        Dimensions::Xym => coord.nth_or_panic(2),
        Dimensions::Xyzm | Dimensions::Unknown(4) => coord.nth_or_panic(3),
        _ => NULL_ORDINATE,
    }
}

impl From<geo::Coord> for Coord {
    fn from(value: geo::Coord) -> Self {
        Coord::XY {
            x: value.x,
            y: value.y,
        }
    }
}

impl From<(f64, f64)> for Coord {
    fn from((x, y): (f64, f64)) -> Self {
        Coord::XY { x, y }
    }
}

impl From<Coord> for geo::Coord {
    fn from(value: Coord) -> Self {
        geo::coord! { x: value.x(), y: value.y() }
    }
}

impl PartialEq for Coord {
    /// Two coordinates are equal when they have the same variant and the same ordinates, with
    /// [`NULL_ORDINATE`] equal to itself.
    fn eq(&self, other: &Self) -> bool {
        coord_eq(self, other)
    }
}

impl CoordTrait for Coord {
    type T = f64;

    fn dim(&self) -> Dimensions {
        self.dimension().into()
    }

    fn nth_or_panic(&self, n: usize) -> Self::T {
        match (self, n) {
            (_, 0) => self.x(),
            (_, 1) => self.y(),
            (Coord::XYZ { z, .. } | Coord::XYZM { z, .. }, 2) => *z,
            (Coord::XYM { m, .. }, 2) | (Coord::XYZM { m, .. }, 3) => *m,
            _ => panic!("n out of range for {} coordinate: {n}", self.dimension()),
        }
    }

    fn x(&self) -> Self::T {
        match self {
            Coord::XY { x, .. }
            | Coord::XYZ { x, .. }
            | Coord::XYM { x, .. }
            | Coord::XYZM { x, .. } => *x,
        }
    }

    fn y(&self) -> Self::T {
        match self {
            Coord::XY { y, .. }
            | Coord::XYZ { y, .. }
            | Coord::XYM { y, .. }
            | Coord::XYZM { y, .. } => *y,
        }
    }
}

impl CoordTrait for &Coord {
    type T = f64;

    fn dim(&self) -> Dimensions {
        (*self).dim()
    }

    fn nth_or_panic(&self, n: usize) -> Self::T {
        (*self).nth_or_panic(n)
    }

    fn x(&self) -> Self::T {
        (*self).x()
    }

    fn y(&self) -> Self::T {
        (*self).y()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn nth_follows_variant_layout() {
        let xym = Coord::XYM {
            x: 1.,
            y: 2.,
            m: 3.,
        };
        assert_eq!(xym.nth(2), Some(3.));
        assert_eq!(xym.nth(3), None);
        assert!(z_ordinate(&xym).is_nan());
        assert_eq!(m_ordinate(&xym), 3.);

        let xyzm = Coord::new(Dimension::XYZM, 1., 2., 3., 4.);
        assert_eq!(z_ordinate(&xyzm), 3.);
        assert_eq!(m_ordinate(&xyzm), 4.);
    }

    #[test]
    fn setters_ignore_missing_ordinates() {
        let mut coord = Coord::XY { x: 1., y: 2. };
        coord.set_z(10.);
        coord.set_m(20.);
        assert_eq!(coord, Coord::XY { x: 1., y: 2. });

        let mut coord = Coord::new(Dimension::XYZ, 1., 2., 3., NULL_ORDINATE);
        coord.set_z(10.);
        coord.set_m(20.);
        assert_eq!(coord.z(), Some(10.));
        assert_eq!(coord.m(), None);
    }

    #[test]
    fn from_coord_fills_sentinel() {
        let coord = Coord::from_coord(&Coord::XY { x: 1., y: 2. }, Dimension::XYZM);
        assert_eq!(coord.x(), 1.);
        assert!(coord.z().unwrap().is_nan());
        assert!(coord.m().unwrap().is_nan());
    }

    #[test]
    fn eq_treats_sentinel_as_equal() {
        let a = Coord::new(Dimension::XYZ, 1., 2., NULL_ORDINATE, 0.);
        let b = Coord::new(Dimension::XYZ, 1., 2., NULL_ORDINATE, 5.);
        assert_eq!(a, b);
        assert_ne!(a, Coord::XY { x: 1., y: 2. });
    }
}
