//! Conversions between [`Rect`] and the rectangle types of the host graphics stack.
//!
//! The canvas is drawn with egui and raster exports go through tiny-skia. Both
//! describe rectangles differently (corner pairs versus left/top/right/bottom),
//! so they are read through the common [`HostRect`] view. [`DoubleRect`] is the
//! owned double-precision form that carries the raw fields across unchanged.

use crate::rect::Rect;
use serde::{Deserialize, Serialize};

/// A host rectangle exposing its origin and extent in double precision.
pub trait HostRect {
    /// Horizontal origin
    fn x(&self) -> f64;
    /// Vertical origin
    fn y(&self) -> f64;
    /// Horizontal extent
    fn width(&self) -> f64;
    /// Vertical extent
    fn height(&self) -> f64;
}

/// An origin-and-extent rectangle in double precision.
///
/// Unlike the egui and tiny-skia rects it stores width and height directly, so
/// converting a [`Rect`] to it and back returns the exact same fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DoubleRect {
    /// Horizontal origin
    pub x: f64,
    /// Vertical origin
    pub y: f64,
    /// Horizontal extent, possibly negative
    pub width: f64,
    /// Vertical extent, possibly negative
    pub height: f64,
}

impl HostRect for DoubleRect {
    fn x(&self) -> f64 {
        self.x
    }

    fn y(&self) -> f64 {
        self.y
    }

    fn width(&self) -> f64 {
        self.width
    }

    fn height(&self) -> f64 {
        self.height
    }
}

impl From<[f64; 4]> for DoubleRect {
    fn from([x, y, width, height]: [f64; 4]) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

impl HostRect for egui::Rect {
    fn x(&self) -> f64 {
        self.min.x as f64
    }

    fn y(&self) -> f64 {
        self.min.y as f64
    }

    fn width(&self) -> f64 {
        egui::Rect::width(self) as f64
    }

    fn height(&self) -> f64 {
        egui::Rect::height(self) as f64
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl HostRect for tiny_skia::Rect {
    fn x(&self) -> f64 {
        self.left() as f64
    }

    fn y(&self) -> f64 {
        self.top() as f64
    }

    fn width(&self) -> f64 {
        tiny_skia::Rect::width(self) as f64
    }

    fn height(&self) -> f64 {
        tiny_skia::Rect::height(self) as f64
    }
}

impl Rect {
    /// Creates a rect from a host rectangle, narrowing each component to `f32`.
    pub fn from_host(host: &impl HostRect) -> Self {
        Rect::new(
            host.x() as f32,
            host.y() as f32,
            host.width() as f32,
            host.height() as f32,
        )
    }

    /// Widens the raw fields into a [`DoubleRect`].
    ///
    /// The conversion is exact, and [`Rect::from_host`] turns the result back
    /// into an identical rect.
    pub fn to_host(&self) -> DoubleRect {
        DoubleRect {
            x: self.x() as f64,
            y: self.y() as f64,
            width: self.width() as f64,
            height: self.height() as f64,
        }
    }

    /// Converts the normalized rect into a tiny-skia rect for raster export.
    ///
    /// # Returns
    ///
    /// `None` if tiny-skia rejects the bounds, which happens for non-finite values.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn to_skia(&self) -> Option<tiny_skia::Rect> {
        let n = self.normalized();
        tiny_skia::Rect::from_xywh(n.x(), n.y(), n.width(), n.height())
    }
}

impl From<egui::Rect> for Rect {
    fn from(rect: egui::Rect) -> Self {
        Rect::from_host(&rect)
    }
}

impl From<Rect> for egui::Rect {
    /// Builds the egui corner pair from the raw fields, so a negative extent
    /// yields an inverted egui rect rather than being normalized away.
    ///
    /// Lossy: egui stores `x + width` as the far corner, and reading the width
    /// back as `max - min` drops the low bits when the origin is large next to
    /// the extent. Use [`Rect::to_host`] when the fields must survive.
    fn from(rect: Rect) -> Self {
        egui::Rect::from_min_max(
            egui::pos2(rect.x(), rect.y()),
            egui::pos2(rect.x() + rect.width(), rect.y() + rect.height()),
        )
    }
}
