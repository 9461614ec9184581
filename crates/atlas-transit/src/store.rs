//! The named sets of stops and buses, with insertion order preserved.

use std::collections::HashMap;

use atlas_core::{AtlasError, Coord, GeoRect, VertexId};

use crate::bus::Bus;
use crate::error::{TransitError, TransitResult};
use crate::stop::Stop;

/// Owner of all stop and bus records.
///
/// Lookups are by name; iteration helpers expose both insertion order (for
/// vertex/edge stability) and lexicographic order (for rendering and
/// responses).  Re-adding an existing name overwrites the record but keeps
/// the original slot, so vertex indices never shift.
#[derive(Debug, Default)]
pub struct TransitStore {
    stops: HashMap<String, Stop>,
    stop_order: Vec<String>,
    buses: HashMap<String, Bus>,
    bus_order: Vec<String>,
    coverage: GeoRect,
}

impl TransitStore {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Mutation (load phase) ─────────────────────────────────────────────

    /// Insert a stop, allocating its wait-in/board vertex pair and growing
    /// the coverage rect.
    pub fn add_stop(&mut self, name: impl Into<String>, coord: Coord) {
        let name = name.into();
        self.coverage.extend(coord);
        let wait_vertex = match self.stops.get(&name) {
            Some(existing) => existing.wait_vertex(),
            None => {
                self.stop_order.push(name.clone());
                VertexId(2 * (self.stop_order.len() as u32 - 1))
            }
        };
        self.stops
            .insert(name.clone(), Stop::new(name, coord, wait_vertex));
    }

    /// Record the directed road distance `from → to` in metres.
    pub fn add_distance(&mut self, from: &str, to: impl Into<String>, metres: i32) -> TransitResult<()> {
        let stop = self
            .stops
            .get_mut(from)
            .ok_or_else(|| AtlasError::StopNotFound(from.to_string()))?;
        stop.add_distance(to.into(), metres);
        Ok(())
    }

    pub fn add_bus(&mut self, name: impl Into<String>, stops: Vec<String>, is_reversed: bool) {
        let name = name.into();
        if !self.buses.contains_key(&name) {
            self.bus_order.push(name.clone());
        }
        self.buses.insert(name.clone(), Bus::new(name, stops, is_reversed));
    }

    // ── Lookups ───────────────────────────────────────────────────────────

    pub fn stop(&self, name: &str) -> Option<&Stop> {
        self.stops.get(name)
    }

    pub fn bus(&self, name: &str) -> Option<&Bus> {
        self.buses.get(name)
    }

    pub fn stop_count(&self) -> usize {
        self.stop_order.len()
    }

    pub fn bus_count(&self) -> usize {
        self.bus_order.len()
    }

    /// Two vertices per stop.
    pub fn vertex_count(&self) -> usize {
        2 * self.stop_order.len()
    }

    /// Bounding box over every inserted stop coordinate.
    pub fn coverage(&self) -> GeoRect {
        self.coverage
    }

    /// Road distance between two stops with the symmetric fallback:
    /// `d(from, to)` if declared, else `d(to, from)`, else an error.
    pub fn distance_between(&self, from: &str, to: &str) -> TransitResult<i32> {
        let forward = self
            .stops
            .get(from)
            .ok_or_else(|| AtlasError::StopNotFound(from.to_string()))?;
        if let Some(metres) = forward.distance_to(to) {
            return Ok(metres);
        }
        let reverse = self
            .stops
            .get(to)
            .ok_or_else(|| AtlasError::StopNotFound(to.to_string()))?;
        reverse
            .distance_to(from)
            .ok_or_else(|| TransitError::MissingDistance {
                from: from.to_string(),
                to: to.to_string(),
            })
    }

    // ── Iteration ─────────────────────────────────────────────────────────

    /// Stops in insertion order (vertex-index order).
    pub fn stops(&self) -> impl Iterator<Item = &Stop> {
        self.stop_order.iter().filter_map(|name| self.stops.get(name))
    }

    /// Buses in insertion order (graph-lowering order).
    pub fn buses(&self) -> impl Iterator<Item = &Bus> {
        self.bus_order.iter().filter_map(|name| self.buses.get(name))
    }

    /// Stop names, lexicographically.
    pub fn stop_names_sorted(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.stop_order.iter().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Bus names, lexicographically.  Palette indices key off positions in
    /// this list.
    pub fn bus_names_sorted(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.bus_order.iter().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Names of buses that serve `stop`, lexicographically.
    pub fn buses_serving(&self, stop: &str) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .buses
            .values()
            .filter(|bus| bus.contains(stop))
            .map(Bus::name)
            .collect();
        names.sort_unstable();
        names
    }
}
