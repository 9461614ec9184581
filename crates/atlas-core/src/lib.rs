//! `atlas-core` — foundational types for the `transit-atlas` query engine.
//!
//! This crate is a dependency of every other `atlas-*` crate.  It
//! intentionally has no `atlas-*` dependencies and minimal external ones
//! (only `thiserror`).
//!
//! # What lives here
//!
//! | Module    | Contents                                          |
//! |-----------|---------------------------------------------------|
//! | [`geo`]   | `Coord`, `GeoRect`, great-circle distance         |
//! | [`ids`]   | `VertexId`, `EdgeId`, `RouteId`                   |
//! | [`error`] | `AtlasError`, `AtlasResult`                       |

pub mod error;
pub mod geo;
pub mod ids;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{AtlasError, AtlasResult};
pub use geo::{Coord, GeoRect};
pub use ids::{EdgeId, RouteId, VertexId};
