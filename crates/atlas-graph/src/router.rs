//! One-to-all shortest-path router with route reconstruction.
//!
//! # Filling strategy
//!
//! The router is built once over a frozen [`TransitGraph`].  Construction
//! runs one Dijkstra pass per source vertex and keeps the full V×V table of
//! `(weight, edge_count, predecessor edge)` records, so every later query is
//! a table lookup plus a predecessor walk.
//!
//! # Determinism
//!
//! All weights are nonnegative, so best-first relaxation is exact.  The
//! frontier heap is keyed `(weight, insertion sequence)`: equal-weight
//! entries pop in the order they were pushed, and relaxation replaces a
//! record only on strictly smaller weight.  Together these make the chosen
//! path for any `(source, target)` pair identical across runs — a tie
//! between two parallel edges resolves to the one added to the graph first.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};

use ordered_float::NotNan;

use atlas_core::{EdgeId, RouteId, VertexId};

use crate::graph::TransitGraph;

// ── Route records ─────────────────────────────────────────────────────────────

/// One cell of the per-source table: the best known way to reach a vertex.
#[derive(Copy, Clone, Debug)]
struct RouteRecord {
    weight: f64,
    edge_count: u32,
    /// `None` only at the source vertex itself.
    prev_edge: Option<EdgeId>,
}

/// The answer to a routing query, plus a handle for edge-by-edge readout.
#[derive(Copy, Clone, Debug)]
pub struct RouteSummary {
    /// Handle into the router's cache of reconstructed routes.
    pub id: RouteId,
    /// Total travel time in minutes.
    pub weight: f64,
    pub edge_count: u32,
}

// ── Router ────────────────────────────────────────────────────────────────────

/// Precomputed all-pairs router over an owned, frozen graph.
pub struct Router {
    graph: TransitGraph,
    /// `table[source][target]`, `None` when unreachable.
    table: Vec<Vec<Option<RouteRecord>>>,
    expanded: HashMap<RouteId, Vec<EdgeId>>,
    next_route_id: u64,
}

impl Router {
    /// Take ownership of `graph` and fill the routing table.
    ///
    /// Time complexity: O(V · E log E); memory O(V²).
    pub fn new(graph: TransitGraph) -> Self {
        let vertex_count = graph.vertex_count();
        let mut table = Vec::with_capacity(vertex_count);
        for source in 0..vertex_count {
            table.push(relax_from(&graph, VertexId(source as u32)));
        }
        Self {
            graph,
            table,
            expanded: HashMap::new(),
            next_route_id: 0,
        }
    }

    /// The graph the router was built over.
    pub fn graph(&self) -> &TransitGraph {
        &self.graph
    }

    /// Reconstruct the minimum-weight path `from → to`.
    ///
    /// Returns `None` iff `to` is unreachable from `from`.  The edge list is
    /// cached under the returned [`RouteId`] until [`release_route`] is
    /// called.
    ///
    /// [`release_route`]: Self::release_route
    pub fn build_route(&mut self, from: VertexId, to: VertexId) -> Option<RouteSummary> {
        let record = self.table[from.index()][to.index()]?;

        let mut edges = Vec::with_capacity(record.edge_count as usize);
        let mut cursor = to;
        while let Some(edge_id) = self.table[from.index()][cursor.index()]?.prev_edge {
            edges.push(edge_id);
            cursor = self.graph.edge(edge_id).from;
        }
        edges.reverse();

        let id = RouteId(self.next_route_id);
        self.next_route_id += 1;
        self.expanded.insert(id, edges);

        Some(RouteSummary {
            id,
            weight: record.weight,
            edge_count: record.edge_count,
        })
    }

    /// The `k`-th edge of a reconstructed route.
    ///
    /// # Panics
    ///
    /// Panics if `id` is not a live route handle or `k >= edge_count`.
    pub fn route_edge(&self, id: RouteId, k: usize) -> EdgeId {
        self.expanded[&id][k]
    }

    /// Drop the cached edge list for `id`.  Releasing an unknown handle is a
    /// no-op.
    pub fn release_route(&mut self, id: RouteId) {
        self.expanded.remove(&id);
    }
}

// ── Dijkstra internals ────────────────────────────────────────────────────────

/// Frontier key: weight first, then push sequence so equal-weight entries
/// pop first-inserted-first.
type FrontierKey = (NotNan<f64>, u64, VertexId);

fn relax_from(graph: &TransitGraph, source: VertexId) -> Vec<Option<RouteRecord>> {
    let mut row: Vec<Option<RouteRecord>> = vec![None; graph.vertex_count()];
    row[source.index()] = Some(RouteRecord {
        weight: 0.0,
        edge_count: 0,
        prev_edge: None,
    });

    let zero = NotNan::new(0.0).unwrap();
    let mut sequence = 0u64;
    let mut heap: BinaryHeap<Reverse<FrontierKey>> = BinaryHeap::new();
    heap.push(Reverse((zero, sequence, source)));

    while let Some(Reverse((weight, _, vertex))) = heap.pop() {
        let Some(settled) = row[vertex.index()] else {
            continue;
        };
        // Skip stale heap entries.
        if settled.weight < weight.into_inner() {
            continue;
        }

        for &edge_id in graph.incident(vertex) {
            let edge = graph.edge(edge_id);
            let candidate = settled.weight + edge.weight;
            let better = match row[edge.to.index()] {
                None => true,
                Some(existing) => candidate < existing.weight,
            };
            if better {
                row[edge.to.index()] = Some(RouteRecord {
                    weight: candidate,
                    edge_count: settled.edge_count + 1,
                    prev_edge: Some(edge_id),
                });
                sequence += 1;
                // Edge weights are finite, so the sum never becomes NaN.
                heap.push(Reverse((NotNan::new(candidate).unwrap(), sequence, edge.to)));
            }
        }
    }

    row
}
