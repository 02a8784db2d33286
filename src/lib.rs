//! # NodeBox Graphics
//!
//! Rectangle algebra for the node editor's graphics layer. The core is [`Rect`],
//! an axis-aligned rectangle value with single-precision fields:
//! - **Construction**: from origin and extent, from a center, or from a host rectangle
//! - **Normalization**: canonical form with non-negative width and height
//! - **Union**: the smallest rect enclosing two (or many) rects
//! - **Predicates**: emptiness, overlap, point and rect containment
//!
//! ## Features
//! - Conversions to and from egui and tiny-skia rectangles
//! - Canvas layout queries (hit-testing, marquee selection, group framing)
//! - JSON serialization through serde

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod constants;
mod host;
mod layout;
mod point;
mod rect;

// Re-export public types and functions
pub use host::*;
pub use layout::*;
pub use point::*;
pub use rect::*;
