use serde::Deserialize;

use crate::geo::LatLon;

/// One row of the league table.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Team {
    #[serde(rename = "Team")]
    pub name: String,
    #[serde(rename = "Conference")]
    pub conference: String,
    #[serde(rename = "Division")]
    pub division: String,
    #[serde(rename = "Latitude")]
    pub latitude: f64,
    #[serde(rename = "Longitude")]
    pub longitude: f64,
    #[serde(rename = "LogoURL")]
    pub logo_url: String,
}

impl Team {
    pub fn position(&self) -> LatLon {
        LatLon::new(self.latitude, self.longitude)
    }

    /// Conference-qualified division name, e.g. `"AFC East"`.
    pub fn full_division(&self) -> String {
        format!("{} {}", self.conference, self.division)
    }

    pub fn to_point(&self) -> Point {
        Point {
            name: self.name.clone(),
            position: self.position(),
        }
    }
}

/// Named location fed to the offset solver.
#[derive(Debug, Clone, PartialEq)]
pub struct Point {
    pub name: String,
    pub position: LatLon,
}

impl Point {
    pub fn new(name: impl Into<String>, lat: f64, lon: f64) -> Self {
        Self {
            name: name.into(),
            position: LatLon::new(lat, lon),
        }
    }
}
