//! The output document: one element per stat request, in request order.

use serde::Serialize;

/// A single response.  Serialization is untagged — each variant carries
/// exactly the keys its request type promises, plus `request_id`.
#[derive(Debug, Serialize, PartialEq)]
#[serde(untagged)]
pub enum Response {
    /// The referenced bus, stop, or route does not exist.
    NotFound {
        request_id: u64,
        error_message: String,
    },
    Bus {
        request_id: u64,
        stop_count: usize,
        unique_stop_count: usize,
        route_length: i32,
        curvature: f64,
    },
    Stop {
        request_id: u64,
        buses: Vec<String>,
    },
    Route {
        request_id: u64,
        total_time: f64,
        items: Vec<RouteItem>,
        map: String,
    },
    Map {
        request_id: u64,
        map: String,
    },
}

impl Response {
    pub fn not_found(request_id: u64) -> Self {
        Response::NotFound {
            request_id,
            error_message: "not found".to_string(),
        }
    }
}

/// One leg of an itinerary: wait at a stop, then ride a bus some number of
/// consecutive segments.
#[derive(Debug, Serialize, PartialEq)]
#[serde(tag = "type")]
pub enum RouteItem {
    Wait {
        stop_name: String,
        time: f64,
    },
    Bus {
        bus: String,
        span_count: u32,
        time: f64,
    },
}
