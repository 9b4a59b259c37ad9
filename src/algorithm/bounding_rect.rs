use geo::{coord, Rect};
use geo_traits::CoordTrait;
use serde::{Deserialize, Serialize};

/// An axis-aligned bounding rectangle that grows as points are folded into it.
///
/// A new rectangle is empty: its minimums are `+inf` and its maximums `-inf`, so the first point
/// included becomes both corners.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingRect {
    minx: f64,
    miny: f64,
    maxx: f64,
    maxy: f64,
}

impl BoundingRect {
    /// New empty rectangle
    pub fn new() -> Self {
        BoundingRect {
            minx: f64::INFINITY,
            miny: f64::INFINITY,
            maxx: -f64::INFINITY,
            maxy: -f64::INFINITY,
        }
    }

    /// Expand this rectangle to include the point `(x, y)`.
    pub fn expand_to_include(&mut self, x: f64, y: f64) {
        if x < self.minx {
            self.minx = x;
        }
        if y < self.miny {
            self.miny = y;
        }
        if x > self.maxx {
            self.maxx = x;
        }
        if y > self.maxy {
            self.maxy = y;
        }
    }

    /// Expand this rectangle to include the x/y position of `coord`.
    pub fn expand_to_include_coord(&mut self, coord: &impl CoordTrait<T = f64>) {
        self.expand_to_include(coord.x(), coord.y());
    }

    /// Expand this rectangle to include all of `other`.
    pub fn merge(&mut self, other: &BoundingRect) {
        if other.is_empty() {
            return;
        }
        self.expand_to_include(other.minx, other.miny);
        self.expand_to_include(other.maxx, other.maxy);
    }

    /// Whether no point has been included yet.
    pub fn is_empty(&self) -> bool {
        self.minx > self.maxx
    }

    /// Minimum x
    pub fn minx(&self) -> f64 {
        self.minx
    }

    /// Minimum y
    pub fn miny(&self) -> f64 {
        self.miny
    }

    /// Maximum x
    pub fn maxx(&self) -> f64 {
        self.maxx
    }

    /// Maximum y
    pub fn maxy(&self) -> f64 {
        self.maxy
    }

    /// Extent along x, `0.0` when empty.
    pub fn width(&self) -> f64 {
        if self.is_empty() {
            0.0
        } else {
            self.maxx - self.minx
        }
    }

    /// Extent along y, `0.0` when empty.
    pub fn height(&self) -> f64 {
        if self.is_empty() {
            0.0
        } else {
            self.maxy - self.miny
        }
    }

    /// This rectangle as a [`geo::Rect`], or `None` if it is empty.
    pub fn to_rect(&self) -> Option<Rect> {
        if self.is_empty() {
            return None;
        }
        let min_coord = coord! { x: self.minx, y: self.miny };
        let max_coord = coord! { x: self.maxx, y: self.maxy };
        Some(Rect::new(min_coord, max_coord))
    }
}

impl Default for BoundingRect {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Rect> for BoundingRect {
    fn from(value: Rect) -> Self {
        let mut rect = BoundingRect::new();
        rect.expand_to_include(value.min().x, value.min().y);
        rect.expand_to_include(value.max().x, value.max().y);
        rect
    }
}

impl From<BoundingRect> for ([f64; 2], [f64; 2]) {
    fn from(value: BoundingRect) -> Self {
        ([value.minx, value.miny], [value.maxx, value.maxy])
    }
}
