//! The input document.
//!
//! ```json
//! {
//!   "routing_settings": { "bus_wait_time": 6, "bus_velocity": 40 },
//!   "render_settings":  { "width": 1200, "height": 500, ... },
//!   "base_requests": [
//!     { "type": "Stop", "name": "A", "latitude": 55.6, "longitude": 37.6,
//!       "road_distances": { "B": 1000 } },
//!     { "type": "Bus", "name": "99", "is_roundtrip": false,
//!       "stops": ["A", "B"] }
//!   ],
//!   "stat_requests": [
//!     { "id": 1, "type": "Route", "from": "A", "to": "B" }
//!   ]
//! }
//! ```
//!
//! `is_roundtrip: false` declares a there-and-back line (the bus traverses
//! the listed stops and then the reverse), `true` a closed loop.

use std::collections::HashMap;

use serde::Deserialize;

use atlas_render::RenderSettings;
use atlas_transit::RoutingSettings;

/// The whole batch: settings, network declarations, queries.
#[derive(Debug, Deserialize)]
pub struct InputDocument {
    pub routing_settings: RoutingSettings,
    pub render_settings: RenderSettings,
    pub base_requests: Vec<BaseRequest>,
    pub stat_requests: Vec<StatRequest>,
}

/// A network declaration, applied in document order.
#[derive(Debug, Deserialize)]
#[serde(tag = "type")]
pub enum BaseRequest {
    Stop {
        name: String,
        latitude: f64,
        longitude: f64,
        #[serde(default)]
        road_distances: HashMap<String, i32>,
    },
    Bus {
        name: String,
        is_roundtrip: bool,
        stops: Vec<String>,
    },
}

/// An information query, answered in document order.
#[derive(Debug, Deserialize)]
#[serde(tag = "type")]
pub enum StatRequest {
    Bus { id: u64, name: String },
    Stop { id: u64, name: String },
    Route { id: u64, from: String, to: String },
    Map { id: u64 },
}

impl StatRequest {
    pub fn id(&self) -> u64 {
        match self {
            StatRequest::Bus { id, .. }
            | StatRequest::Stop { id, .. }
            | StatRequest::Route { id, .. }
            | StatRequest::Map { id } => *id,
        }
    }
}
