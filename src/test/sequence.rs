use crate::array::SoaCoordSequence;
use crate::builder::SoaCoordSequenceBuilder;
use crate::dimension::Dimension;
use crate::scalar::Coord;

/// `[(0,0), (4,0), (4,3), (0,3)]`
pub(crate) fn rectangle() -> SoaCoordSequence {
    let coords: Vec<Coord> = vec![
        (0., 0.).into(),
        (4., 0.).into(),
        (4., 3.).into(),
        (0., 3.).into(),
    ];
    SoaCoordSequence::from_coords(&coords, Dimension::XY)
}

pub(crate) fn xyzm_coords() -> Vec<Coord> {
    vec![
        Coord::new(Dimension::XYZM, 0., 1., 10., 100.),
        Coord::new(Dimension::XYZM, 1., 2., 11., 101.),
        Coord::new(Dimension::XYZM, 2., 3., 12., 102.),
        Coord::new(Dimension::XYZM, 3., 5., 13., 103.),
    ]
}

pub(crate) fn xyzm_sequence() -> SoaCoordSequence {
    let coords = xyzm_coords();
    SoaCoordSequenceBuilder::from_coords(coords.iter(), Dimension::XYZM)
        .unwrap()
        .finish()
}
