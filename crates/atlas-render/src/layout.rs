//! Screen-space layout: rank-by-axis compression with adjacency collisions.
//!
//! Raw geography makes poor diagrams — dense clusters collapse into blobs
//! while one far-out terminus pushes everything else into a corner.  The
//! layout engine therefore projects stops by *ordinal rank* per axis rather
//! than by linear scaling:
//!
//! 1. mark stop pairs that are consecutive on some bus as "nearby";
//! 2. pick the pivot ("base") stops whose geography must be respected:
//!    bus terminals, transfer stops, and stops a single bus revisits;
//! 3. replace every non-pivot coordinate by linear interpolation between
//!    the surrounding pivots along its bus;
//! 4. per axis (longitude then latitude), sort stops by interpolated value
//!    and assign `rank(s) = 1 + max(rank(p))` over nearby stops `p` earlier
//!    in the sort, or 0 with no such neighbor;
//! 5. project ranks onto the padded canvas, y inverted.
//!
//! Stops consecutive on a bus always land on distinct ranks, so no route
//! segment ever collapses to zero length on either axis.

use std::collections::{HashMap, HashSet};

use log::debug;

use atlas_core::Coord;
use atlas_svg::Point;
use atlas_transit::TransitStore;

use crate::settings::RenderSettings;

/// The finished projection: one screen point per stop name.
#[derive(Clone, Debug, Default)]
pub struct MapLayout {
    positions: HashMap<String, Point>,
}

impl MapLayout {
    /// Compute the layout for every stop in `store`.
    pub fn compute(store: &TransitStore, settings: &RenderSettings) -> Self {
        let nearby = nearby_pairs(store);
        let pivots = pivot_stops(store);
        let coords = interpolate(store, &pivots);

        let (lon_ranks, lon_count) =
            compress_axis(&coords, &nearby, |coord| coord.longitude);
        let (lat_ranks, lat_count) =
            compress_axis(&coords, &nearby, |coord| coord.latitude);

        let x_step = axis_step(settings.width, settings.padding, lon_count);
        let y_step = axis_step(settings.height, settings.padding, lat_count);
        debug!(
            "layout: {} stops, {} longitude ranks, {} latitude ranks",
            coords.len(),
            lon_count,
            lat_count
        );

        let mut positions = HashMap::with_capacity(coords.len());
        for name in coords.keys() {
            let x = settings.padding + lon_ranks[name] as f64 * x_step;
            let y = settings.height - settings.padding - lat_ranks[name] as f64 * y_step;
            positions.insert(name.clone(), Point::new(x, y));
        }
        Self { positions }
    }

    pub fn position(&self, stop: &str) -> Option<Point> {
        self.positions.get(stop).copied()
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

fn axis_step(extent: f64, padding: f64, rank_count: usize) -> f64 {
    if rank_count > 1 {
        (extent - 2.0 * padding) / (rank_count - 1) as f64
    } else {
        0.0
    }
}

// ── Step 1: nearby pairs ──────────────────────────────────────────────────────

/// Undirected adjacency over stops consecutive on some bus.
fn nearby_pairs(store: &TransitStore) -> HashMap<String, HashSet<String>> {
    let mut nearby: HashMap<String, HashSet<String>> = HashMap::new();
    for bus in store.buses() {
        for pair in bus.stops().windows(2) {
            if pair[0] == pair[1] {
                continue;
            }
            nearby
                .entry(pair[0].clone())
                .or_default()
                .insert(pair[1].clone());
            nearby
                .entry(pair[1].clone())
                .or_default()
                .insert(pair[0].clone());
        }
    }
    nearby
}

// ── Step 2: pivot selection ───────────────────────────────────────────────────

/// A stop is a pivot when its true position matters: it terminates a bus,
/// transfers between buses, or is revisited by a single bus beyond what its
/// traversal shape already implies (twice for a there-and-back walk, once
/// for a loop).
fn pivot_stops(store: &TransitStore) -> HashSet<String> {
    let mut serving: HashMap<&str, u32> = HashMap::new();
    for bus in store.buses() {
        let unique: HashSet<&str> = bus.stops().iter().map(String::as_str).collect();
        for stop in unique {
            *serving.entry(stop).or_default() += 1;
        }
    }

    let mut pivots: HashSet<String> = HashSet::new();
    for (stop, buses) in &serving {
        if *buses > 1 {
            pivots.insert((*stop).to_string());
        }
    }

    for bus in store.buses() {
        for terminal in bus.terminals() {
            pivots.insert(terminal.to_string());
        }

        let mut visits: HashMap<&str, u32> = HashMap::new();
        for stop in bus.traversal() {
            *visits.entry(stop).or_default() += 1;
        }
        let threshold = if bus.is_reversed() { 2 } else { 1 };
        for (stop, count) in visits {
            if count > threshold {
                pivots.insert(stop.to_string());
            }
        }
    }
    pivots
}

// ── Step 3: interpolation ─────────────────────────────────────────────────────

/// Working coordinates: pivots keep their geography, every other stop is
/// replaced by a linear blend between the pivots around it on some bus.
/// Buses are walked in lexicographic name order so the result is stable.
fn interpolate(store: &TransitStore, pivots: &HashSet<String>) -> HashMap<String, Coord> {
    let mut coords: HashMap<String, Coord> = store
        .stops()
        .map(|stop| (stop.name().to_string(), stop.coord()))
        .collect();

    for name in store.bus_names_sorted() {
        let Some(bus) = store.bus(name) else {
            continue;
        };
        let stops = bus.stops();
        let pivot_indices: Vec<usize> = (0..stops.len())
            .filter(|&i| pivots.contains(&stops[i]))
            .collect();

        for window in pivot_indices.windows(2) {
            let (i, j) = (window[0], window[1]);
            let (Some(from), Some(to)) = (
                coords.get(&stops[i]).copied(),
                coords.get(&stops[j]).copied(),
            ) else {
                continue;
            };
            for k in i + 1..j {
                if !coords.contains_key(&stops[k]) {
                    continue;
                }
                let t = (k - i) as f64 / (j - i) as f64;
                coords.insert(
                    stops[k].clone(),
                    Coord::new(
                        from.latitude + (to.latitude - from.latitude) * t,
                        from.longitude + (to.longitude - from.longitude) * t,
                    ),
                );
            }
        }
    }
    coords
}

// ── Step 4: axis compression ──────────────────────────────────────────────────

/// Sort stops along one axis and assign collision-aware ranks.
///
/// Returns the rank of every stop plus the number of distinct ranks.  Ties
/// in the sort break on the stop name, keeping the walk deterministic.
fn compress_axis(
    coords: &HashMap<String, Coord>,
    nearby: &HashMap<String, HashSet<String>>,
    axis: impl Fn(&Coord) -> f64,
) -> (HashMap<String, usize>, usize) {
    let mut order: Vec<&String> = coords.keys().collect();
    order.sort_unstable_by(|a, b| {
        axis(&coords[*a])
            .total_cmp(&axis(&coords[*b]))
            .then_with(|| a.cmp(b))
    });

    let mut ranks: HashMap<String, usize> = HashMap::with_capacity(order.len());
    let mut rank_count = 0;
    for name in order {
        let rank = nearby
            .get(name)
            .map(|neighbors| {
                neighbors
                    .iter()
                    .filter_map(|n| ranks.get(n))
                    .map(|&r| r + 1)
                    .max()
                    .unwrap_or(0)
            })
            .unwrap_or(0);
        rank_count = rank_count.max(rank + 1);
        ranks.insert(name.clone(), rank);
    }
    (ranks, rank_count)
}
