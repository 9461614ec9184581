//! A named stop: coordinate, declared road distances, graph vertex pair.

use std::collections::HashMap;

use atlas_core::{Coord, VertexId};

/// A stop and everything declared about it.
///
/// The two vertex indices are assigned at insertion time and never change:
/// `wait_vertex` models standing at the stop, `board_vertex` models sitting
/// on a bus there.  Road distances are directed; the symmetric fallback is
/// applied at lookup time by the store, not here.
#[derive(Clone, Debug)]
pub struct Stop {
    name: String,
    coord: Coord,
    distances: HashMap<String, i32>,
    wait_vertex: VertexId,
    board_vertex: VertexId,
}

impl Stop {
    pub(crate) fn new(name: String, coord: Coord, wait_vertex: VertexId) -> Self {
        Self {
            name,
            coord,
            distances: HashMap::new(),
            wait_vertex,
            board_vertex: VertexId(wait_vertex.0 + 1),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn coord(&self) -> Coord {
        self.coord
    }

    /// Declared road distance to `to` in metres, if any.
    pub fn distance_to(&self, to: &str) -> Option<i32> {
        self.distances.get(to).copied()
    }

    pub(crate) fn add_distance(&mut self, to: String, metres: i32) {
        self.distances.insert(to, metres);
    }

    /// The wait-in vertex (`2k` for the k-th inserted stop).
    pub fn wait_vertex(&self) -> VertexId {
        self.wait_vertex
    }

    /// The board vertex (`2k + 1`).
    pub fn board_vertex(&self) -> VertexId {
        self.board_vertex
    }
}
