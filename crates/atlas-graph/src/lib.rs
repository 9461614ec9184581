//! `atlas-graph` — weighted transit multigraph and shortest-path router.
//!
//! # Crate layout
//!
//! | Module     | Contents                                            |
//! |------------|-----------------------------------------------------|
//! | [`graph`]  | `TransitGraph`, `Edge`, `EdgeKind`                  |
//! | [`router`] | `Router`, `RouteSummary` (one-to-all Dijkstra)      |
//!
//! The graph is append-only: once a [`Router`] has been built over it the
//! edge set is frozen and every query is answered from the router's
//! precomputed per-source tables.

pub mod graph;
pub mod router;


pub use graph::{Edge, EdgeKind, TransitGraph};
pub use router::{RouteSummary, Router};
