use std::ops::Add;

use serde::{Deserialize, Serialize};

/// Mean Earth radius used by the haversine formula.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Plain latitude/longitude pair in degrees. Serialized as `[lat, lon]`,
/// which is the shape Leaflet accepts for every layer constructor.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct LatLon {
    pub lat: f64,
    pub lon: f64,
}

impl LatLon {
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

impl From<[f64; 2]> for LatLon {
    fn from([lat, lon]: [f64; 2]) -> Self {
        Self { lat, lon }
    }
}

impl From<LatLon> for [f64; 2] {
    fn from(p: LatLon) -> Self {
        [p.lat, p.lon]
    }
}

/// Rendering displacement in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Offset {
    pub lat: f64,
    pub lon: f64,
}

impl Offset {
    pub const ZERO: Offset = Offset { lat: 0.0, lon: 0.0 };

    pub fn is_zero(&self) -> bool {
        self.lat == 0.0 && self.lon == 0.0
    }

    pub fn magnitude(&self) -> f64 {
        (self.lat * self.lat + self.lon * self.lon).sqrt()
    }
}

impl Add<Offset> for LatLon {
    type Output = LatLon;

    fn add(self, rhs: Offset) -> LatLon {
        LatLon {
            lat: self.lat + rhs.lat,
            lon: self.lon + rhs.lon,
        }
    }
}

/// Great-circle distance between two points in kilometres.
pub fn haversine_km(a: LatLon, b: LatLon) -> f64 {
    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();
    let dlat = lat2 - lat1;
    let dlon = b.lon.to_radians() - a.lon.to_radians();

    let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_KM * c
}
