//! Geographic coordinate type and great-circle distance.
//!
//! Coordinates are double-precision decimal degrees.  Distances come out in
//! metres on a 6 371 000 m sphere via the spherical law of cosines; at
//! city-scale stop spacing the deviation from an ellipsoidal model is far
//! below declared road-distance granularity.

/// Mean Earth radius in metres.
const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Convert decimal degrees to radians.
#[inline]
pub fn deg_to_rad(degrees: f64) -> f64 {
    degrees * std::f64::consts::PI / 180.0
}

/// A geographic coordinate in decimal degrees.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Coord {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coord {
    #[inline]
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// Great-circle distance to `other` in metres.
    pub fn distance_m(self, other: Coord) -> f64 {
        let lat1 = deg_to_rad(self.latitude);
        let lat2 = deg_to_rad(other.latitude);
        let d_lon = (deg_to_rad(self.longitude) - deg_to_rad(other.longitude)).abs();

        (lat1.sin() * lat2.sin() + lat1.cos() * lat2.cos() * d_lon.cos()).acos() * EARTH_RADIUS_M
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.latitude, self.longitude)
    }
}

// ── GeoRect ───────────────────────────────────────────────────────────────────

/// Axis-aligned bounding box over geographic coordinates.
///
/// Grown one coordinate at a time as stops are inserted; the empty rect has
/// inverted bounds so the first `extend` snaps it onto that point.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GeoRect {
    min: Coord,
    max: Coord,
}

impl GeoRect {
    /// The empty rect.  `contains` is false for every point.
    pub fn empty() -> Self {
        Self {
            min: Coord::new(f64::INFINITY, f64::INFINITY),
            max: Coord::new(f64::NEG_INFINITY, f64::NEG_INFINITY),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.min.latitude > self.max.latitude
    }

    /// Grow the rect to cover `coord`.
    pub fn extend(&mut self, coord: Coord) {
        self.min.latitude = self.min.latitude.min(coord.latitude);
        self.min.longitude = self.min.longitude.min(coord.longitude);
        self.max.latitude = self.max.latitude.max(coord.latitude);
        self.max.longitude = self.max.longitude.max(coord.longitude);
    }

    pub fn contains(&self, coord: Coord) -> bool {
        !self.is_empty()
            && (self.min.latitude..=self.max.latitude).contains(&coord.latitude)
            && (self.min.longitude..=self.max.longitude).contains(&coord.longitude)
    }

    pub fn min(&self) -> Coord {
        self.min
    }

    pub fn max(&self) -> Coord {
        self.max
    }
}

impl Default for GeoRect {
    fn default() -> Self {
        Self::empty()
    }
}
