//! Axis-aligned rectangles used for layout, hit-testing and region composition.
//!
//! A [`Rect`] stores an origin and a directed extent. The extent may be negative,
//! in which case the rectangle spans from `x + width` to `x` (and likewise for `y`).
//! Every geometric predicate works on the normalized form, so callers can pass
//! raw drag rectangles straight in.

use crate::point::Point;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A 2D axis-aligned rectangle with single-precision fields.
///
/// Rects are plain values: every transform returns a new rect and nothing
/// modifies an existing one. Equality is exact on all four raw fields, so two
/// rects covering the same area with differently signed extents are not equal
/// until both are normalized.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
}

impl Rect {
    /// Creates a rect from its origin and extent.
    ///
    /// Values are stored verbatim. Negative extents are allowed and describe a
    /// span running towards smaller coordinates.
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Creates a rect of the given size whose center is `(cx, cy)`.
    ///
    /// # Arguments
    ///
    /// * `cx` - Horizontal center
    /// * `cy` - Vertical center
    /// * `width` - Width, passed through unchanged
    /// * `height` - Height, passed through unchanged
    ///
    /// # Returns
    ///
    /// A rect with origin `(cx - width / 2, cy - height / 2)`.
    pub fn centered(cx: f32, cy: f32, width: f32, height: f32) -> Self {
        Self::new(cx - width / 2.0, cy - height / 2.0, width, height)
    }

    /// Computes the bounding union of every rect yielded by `rects`.
    ///
    /// Returns `None` when the iterator is empty.
    pub fn bounding<I>(rects: I) -> Option<Self>
    where
        I: IntoIterator<Item = Rect>,
    {
        let mut rects = rects.into_iter();
        let first = rects.next()?.normalized();
        Some(rects.fold(first, |acc, r| acc.united(&r)))
    }

    /// Horizontal origin.
    pub fn x(&self) -> f32 {
        self.x
    }

    /// Vertical origin.
    pub fn y(&self) -> f32 {
        self.y
    }

    /// Horizontal extent, possibly negative.
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Vertical extent, possibly negative.
    pub fn height(&self) -> f32 {
        self.height
    }

    /// The raw origin.
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// The midpoint of the span.
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Returns an equivalent rect with non-negative width and height.
    ///
    /// A negative extent is flipped and the origin moved to the far edge, so the
    /// result covers the same span as `self`.
    pub fn normalized(&self) -> Self {
        let (x, width) = if self.width < 0.0 {
            (self.x + self.width, -self.width)
        } else {
            (self.x, self.width)
        };
        let (y, height) = if self.height < 0.0 {
            (self.y + self.height, -self.height)
        } else {
            (self.y, self.height)
        };
        Self::new(x, y, width, height)
    }

    /// Returns `true` if the normalized rect has no area.
    ///
    /// A degenerate line or point counts as empty.
    pub fn is_empty(&self) -> bool {
        let n = self.normalized();
        n.width <= 0.0 || n.height <= 0.0
    }

    /// Returns the smallest rect enclosing both `self` and `other`.
    ///
    /// Both operands are normalized first. Empty operands still contribute
    /// their origin, so the union of two distant points spans the distance
    /// between them. A NaN in either operand makes the affected fields NaN.
    pub fn united(&self, other: &Rect) -> Self {
        let a = self.normalized();
        let b = other.normalized();
        let x = nan_min(a.x, b.x);
        let y = nan_min(a.y, b.y);
        let right = nan_max(a.x + a.width, b.x + b.width);
        let bottom = nan_max(a.y + a.height, b.y + b.height);
        Self::new(x, y, right - x, bottom - y)
    }

    /// Returns `true` if the normalized rects overlap on both axes.
    ///
    /// Touching edges do not count as overlap, and an empty rect overlaps
    /// nothing.
    pub fn intersects(&self, other: &Rect) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        let a = self.normalized();
        let b = other.normalized();
        a.x < b.x + b.width
            && b.x < a.x + a.width
            && a.y < b.y + b.height
            && b.y < a.y + a.height
    }

    /// Returns `true` if `point` lies inside the normalized rect.
    ///
    /// All four edges are inclusive.
    pub fn contains_point(&self, point: impl Into<Point>) -> bool {
        let p = point.into();
        let r = self.normalized();
        p.x >= r.x && p.x <= r.x + r.width && p.y >= r.y && p.y <= r.y + r.height
    }

    /// Returns `true` if `other` lies entirely inside `self`, both normalized.
    pub fn contains_rect(&self, other: &Rect) -> bool {
        let outer = self.normalized();
        let inner = other.normalized();
        inner.x >= outer.x
            && inner.x + inner.width <= outer.x + outer.width
            && inner.y >= outer.y
            && inner.y + inner.height <= outer.y + outer.height
    }

    /// Grows the normalized rect by `dx` on the left and right and `dy` on the top and bottom.
    pub fn expanded(&self, dx: f32, dy: f32) -> Self {
        let n = self.normalized();
        Self::new(
            n.x - dx,
            n.y - dy,
            n.width + 2.0 * dx,
            n.height + 2.0 * dy,
        )
    }

    /// Iterates over `[x, y, width, height]` in that order.
    ///
    /// Each call starts a fresh iterator, so the sequence can be walked any
    /// number of times.
    pub fn components(&self) -> std::array::IntoIter<f32, 4> {
        <[f32; 4]>::from(*self).into_iter()
    }
}

// `f32::min`/`f32::max` return the non-NaN operand; unions must propagate NaN instead.
fn nan_min(a: f32, b: f32) -> f32 {
    if a.is_nan() || b.is_nan() {
        f32::NAN
    } else {
        a.min(b)
    }
}

fn nan_max(a: f32, b: f32) -> f32 {
    if a.is_nan() || b.is_nan() {
        f32::NAN
    } else {
        a.max(b)
    }
}

impl From<[f32; 4]> for Rect {
    fn from([x, y, width, height]: [f32; 4]) -> Self {
        Self::new(x, y, width, height)
    }
}

impl From<Rect> for [f32; 4] {
    fn from(r: Rect) -> Self {
        [r.x, r.y, r.width, r.height]
    }
}

impl IntoIterator for Rect {
    type Item = f32;
    type IntoIter = std::array::IntoIter<f32, 4>;

    fn into_iter(self) -> Self::IntoIter {
        self.components()
    }
}

impl IntoIterator for &Rect {
    type Item = f32;
    type IntoIter = std::array::IntoIter<f32, 4>;

    fn into_iter(self) -> Self::IntoIter {
        self.components()
    }
}

/// Formats as `Rect(x, y, width, height)` from the raw fields.
///
/// Each field uses the `f32` debug format: whole numbers keep a trailing `.0`
/// (`1.0`, `100000000.0`) and very small or very large magnitudes switch to
/// exponent form (`1e-8`, `1e20`).
impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Rect({:?}, {:?}, {:?}, {:?})",
            self.x, self.y, self.width, self.height
        )
    }
}
