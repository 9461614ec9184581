//! A named bus route and its derived quantities.

use std::collections::HashSet;

use atlas_core::AtlasError;

use crate::error::TransitResult;
use crate::store::TransitStore;

/// A bus: an ordered stop sequence plus the traversal shape.
///
/// With `is_reversed` set the bus runs the listed sequence and then back
/// again (a there-and-back line); otherwise the sequence is a closed loop
/// visited once per round trip.
#[derive(Clone, Debug)]
pub struct Bus {
    name: String,
    stops: Vec<String>,
    is_reversed: bool,
}

impl Bus {
    pub(crate) fn new(name: String, stops: Vec<String>, is_reversed: bool) -> Self {
        Self {
            name,
            stops,
            is_reversed,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The declared stop sequence (one direction only for reversed buses).
    pub fn stops(&self) -> &[String] {
        &self.stops
    }

    pub fn is_reversed(&self) -> bool {
        self.is_reversed
    }

    pub fn contains(&self, stop: &str) -> bool {
        self.stops.iter().any(|s| s == stop)
    }

    /// Stops visited per round trip: each intermediate stop of a reversed
    /// bus is counted on both the outbound and return legs.
    pub fn total_stops(&self) -> usize {
        if self.stops.is_empty() {
            0
        } else if self.is_reversed {
            self.stops.len() * 2 - 1
        } else {
            self.stops.len()
        }
    }

    pub fn unique_stops(&self) -> usize {
        self.stops.iter().collect::<HashSet<_>>().len()
    }

    /// The full round-trip walk: the listed sequence, then (for reversed
    /// buses) the same stops again in reverse, sharing the turnaround stop.
    pub fn traversal(&self) -> Vec<&str> {
        let mut walk: Vec<&str> = self.stops.iter().map(String::as_str).collect();
        if self.is_reversed {
            walk.extend(self.stops.iter().rev().skip(1).map(String::as_str));
        }
        walk
    }

    /// Whether `stop` is a terminal of this bus: the first stop, or the
    /// last stop of a reversed line whose ends differ.  Terminals are the
    /// only stops that get this bus's name drawn on the map.
    pub fn is_terminal(&self, stop: &str) -> bool {
        self.terminals().contains(&stop)
    }

    /// One terminal for loops, up to two for reversed lines.
    pub fn terminals(&self) -> Vec<&str> {
        let mut ends = Vec::with_capacity(2);
        let Some(first) = self.stops.first() else {
            return ends;
        };
        ends.push(first.as_str());
        if self.is_reversed {
            if let Some(last) = self.stops.last() {
                if last != first {
                    ends.push(last.as_str());
                }
            }
        }
        ends
    }

    /// Road length of one full round trip in metres.
    ///
    /// Reversed buses walk both directions, resolving each hop's distance
    /// independently, so asymmetric declarations contribute asymmetrically.
    pub fn road_length(&self, store: &TransitStore) -> TransitResult<i32> {
        let mut length = 0;
        for pair in self.stops.windows(2) {
            length += store.distance_between(&pair[0], &pair[1])?;
        }
        if self.is_reversed {
            for pair in self.stops.windows(2).rev() {
                length += store.distance_between(&pair[1], &pair[0])?;
            }
        }
        Ok(length)
    }

    /// Great-circle length of one full round trip in metres.
    pub fn geographic_length(&self, store: &TransitStore) -> TransitResult<f64> {
        let mut length = 0.0;
        for pair in self.stops.windows(2) {
            let from = store
                .stop(&pair[0])
                .ok_or_else(|| AtlasError::StopNotFound(pair[0].clone()))?;
            let to = store
                .stop(&pair[1])
                .ok_or_else(|| AtlasError::StopNotFound(pair[1].clone()))?;
            length += from.coord().distance_m(to.coord());
        }
        if self.is_reversed {
            length *= 2.0;
        }
        Ok(length)
    }

    /// Ratio of road length to great-circle length.  At least 1 for sane
    /// inputs, since roads cannot be shorter than the great circle.
    ///
    /// A route with no traversed segments (or one whose stops coincide)
    /// has zero great-circle length; its curvature is defined as 1 so the
    /// ratio stays finite and the ≥ 1 bound holds.
    pub fn curvature(&self, store: &TransitStore) -> TransitResult<f64> {
        let road = self.road_length(store)? as f64;
        let geographic = self.geographic_length(store)?;
        if geographic == 0.0 {
            return Ok(1.0);
        }
        Ok(road / geographic)
    }
}
