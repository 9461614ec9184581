//! `atlas-render` — screen-space layout and SVG rendering.
//!
//! # Crate layout
//!
//! | Module       | Contents                                               |
//! |--------------|--------------------------------------------------------|
//! | [`settings`] | `RenderSettings`, `Layer`                              |
//! | [`layout`]   | `MapLayout` — rank compression + interpolation         |
//! | [`map`]      | `NetworkMap` — the layered base map, rendered once     |
//! | [`overlay`]  | per-query route overlay on top of the base map         |
//! | [`error`]    | `RenderError`, `RenderResult<T>`                       |
//!
//! The base map is built and serialized a single time.  Route overlays
//! append to the same document and truncate back afterwards, so the base
//! bytes are reusable across any number of queries.

pub mod error;
pub mod layout;
pub mod map;
pub mod overlay;
pub mod settings;

#[cfg(test)]
mod tests;

pub use error::{RenderError, RenderResult};
pub use layout::MapLayout;
pub use map::NetworkMap;
pub use settings::{Layer, RenderSettings};
