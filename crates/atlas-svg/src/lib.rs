//! `atlas-svg` — typed SVG primitives and text-serialized documents.
//!
//! Covers exactly the SVG surface the map renderer emits: circles,
//! polylines, text with an underlay convention, and fill rectangles, each
//! carrying the shared styling attributes.  Shapes use value-returning
//! fluent setters so a fully-styled object reads as one expression.
//!
//! # Crate layout
//!
//! | Module       | Contents                                       |
//! |--------------|------------------------------------------------|
//! | [`color`]    | `Color` (named / rgb / rgba)                   |
//! | [`shape`]    | `Point`, `Circle`, `Polyline`, `Text`, `Rectangle` |
//! | [`document`] | ordered shape list, truncation, serialization  |

pub mod color;
pub mod document;
pub mod shape;

#[cfg(test)]
mod tests;

pub use color::Color;
pub use document::Document;
pub use shape::{Circle, Point, Polyline, Rectangle, Shape, Text};
