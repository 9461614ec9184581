//! Routing parameters shared by every bus.

use serde::Deserialize;

/// The two scalars of the passenger model: a fixed boarding penalty and a
/// uniform cruising speed.
#[derive(Copy, Clone, Debug, Deserialize)]
pub struct RoutingSettings {
    /// Minutes spent waiting whenever a passenger boards any bus.
    pub bus_wait_time: f64,
    /// Uniform bus speed in km/h.
    pub bus_velocity: f64,
}

impl RoutingSettings {
    /// Minutes needed to ride `metres` at the configured velocity.
    #[inline]
    pub fn ride_minutes(&self, metres: f64) -> f64 {
        metres / (self.bus_velocity * 1000.0) * 60.0
    }
}
