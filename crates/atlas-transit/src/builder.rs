//! Lowering the transit model into the routing graph.
//!
//! One pass: a wait edge per stop, then for every bus one ride edge per
//! `(board index, alight index)` pair along its traversal.  A bus of length
//! L therefore contributes O(L²) ride edges — the graph encodes directly
//! that a passenger who boards at some stop may stay on through any number
//! of later stops without paying the wait cost again.

use log::info;

use atlas_core::{AtlasError, VertexId};
use atlas_graph::{Edge, Router, TransitGraph};

use crate::error::TransitResult;
use crate::settings::RoutingSettings;
use crate::store::TransitStore;

fn vertex_pair(store: &TransitStore, name: &str) -> TransitResult<(VertexId, VertexId)> {
    let stop = store
        .stop(name)
        .ok_or_else(|| AtlasError::StopNotFound(name.to_string()))?;
    Ok((stop.wait_vertex(), stop.board_vertex()))
}

/// Build the wait/ride graph for `store` under `settings`.
///
/// Stops are walked in insertion order, then buses in insertion order, so
/// edge ids are deterministic; the router's equal-weight tie-breaking
/// therefore favors the bus that was added first.
pub fn lower_to_graph(
    store: &TransitStore,
    settings: &RoutingSettings,
) -> TransitResult<TransitGraph> {
    let mut graph = TransitGraph::new(store.vertex_count());

    for stop in store.stops() {
        graph.add_edge(Edge::wait(
            stop.wait_vertex(),
            stop.board_vertex(),
            settings.bus_wait_time,
            stop.name(),
        ));
    }

    for bus in store.buses() {
        let stops = bus.stops();
        if stops.len() < 2 {
            continue;
        }

        // Forward traversal: board at j, alight at any i + 1 > j.
        for j in 0..stops.len() - 1 {
            let (_, board) = vertex_pair(store, &stops[j])?;
            let mut metres = 0.0;
            let mut segments = Vec::new();
            for i in j..stops.len() - 1 {
                metres += store.distance_between(&stops[i], &stops[i + 1])? as f64;
                segments.push((stops[i].clone(), stops[i + 1].clone()));
                let (alight, _) = vertex_pair(store, &stops[i + 1])?;
                graph.add_edge(Edge::ride(
                    board,
                    alight,
                    settings.ride_minutes(metres),
                    bus.name(),
                    segments.clone(),
                ));
            }
        }

        // Return traversal of a there-and-back line, walked symmetrically.
        if bus.is_reversed() {
            for j in (1..stops.len()).rev() {
                let (_, board) = vertex_pair(store, &stops[j])?;
                let mut metres = 0.0;
                let mut segments = Vec::new();
                for i in (0..j).rev() {
                    metres += store.distance_between(&stops[i + 1], &stops[i])? as f64;
                    segments.push((stops[i + 1].clone(), stops[i].clone()));
                    let (alight, _) = vertex_pair(store, &stops[i])?;
                    graph.add_edge(Edge::ride(
                        board,
                        alight,
                        settings.ride_minutes(metres),
                        bus.name(),
                        segments.clone(),
                    ));
                }
            }
        }
    }

    info!(
        "lowered {} stops / {} buses into {} vertices and {} edges",
        store.stop_count(),
        store.bus_count(),
        graph.vertex_count(),
        graph.edge_count()
    );
    Ok(graph)
}

/// Lower the store and precompute the all-pairs router over the result.
pub fn build_router(store: &TransitStore, settings: &RoutingSettings) -> TransitResult<Router> {
    Ok(Router::new(lower_to_graph(store, settings)?))
}
