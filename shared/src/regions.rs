use crate::colors::Rgba;
use crate::geo::LatLon;

/// Hand-drawn overlay polygon with its legend entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Region {
    pub name: &'static str,
    /// Stroke and fill color of the polygon.
    pub color: &'static str,
    /// Swatch shown in the legend.
    pub legend_swatch: Rgba,
    pub vertices: Vec<LatLon>,
}

// Vertices shared between neighbouring regions.
const WEST_SOUTH_CORNER: LatLon = LatLon::new(32.0, -110.0);
const NORTH_EAST_LAKES: LatLon = LatLon::new(42.5, -81.5);
const NORTH_EAST_COAST: LatLon = LatLon::new(39.2, -75.8);
const NORTH_EAST_INLAND: LatLon = LatLon::new(38.7, -84.0);

pub fn western() -> Region {
    Region {
        name: "Western Region",
        color: "purple",
        legend_swatch: Rgba::new(100, 0, 255, 0.3),
        vertices: vec![
            LatLon::new(49.0, -125.0),
            LatLon::new(49.0, -95.0),
            LatLon::new(40.5, -95.0),
            LatLon::new(40.5, -92.5),
            LatLon::new(38.0, -92.5),
            WEST_SOUTH_CORNER,
            LatLon::new(32.0, -125.0),
        ],
    }
}

pub fn north() -> Region {
    Region {
        name: "North Region",
        color: "yellow",
        legend_swatch: Rgba::new(255, 255, 0, 0.3),
        vertices: vec![
            LatLon::new(49.0, -95.0),
            NORTH_EAST_LAKES,
            NORTH_EAST_COAST,
            NORTH_EAST_INLAND,
            LatLon::new(38.7, -85.0),
            LatLon::new(40.5, -85.0),
            LatLon::new(40.5, -95.0),
        ],
    }
}

/// Green polygon: the Atlantic seaboard down to Florida plus the Texas strip.
pub fn south() -> Region {
    Region {
        name: "South Region",
        color: "green",
        legend_swatch: Rgba::new(0, 255, 0, 0.3),
        vertices: vec![
            NORTH_EAST_LAKES,
            LatLon::new(43.5, -79.0),
            LatLon::new(43.5, -69.5),
            LatLon::new(25.5, -79.0),
            LatLon::new(25.5, -81.5),
            LatLon::new(37.8, -75.0),
            LatLon::new(31.9, -98.0),
            LatLon::new(32.8, -98.0),
            LatLon::new(36.5, -84.0),
            NORTH_EAST_INLAND,
            NORTH_EAST_COAST,
        ],
    }
}

pub fn eastern() -> Region {
    Region {
        name: "Eastern Region",
        color: "cyan",
        legend_swatch: Rgba::new(0, 255, 255, 0.3),
        vertices: vec![
            LatLon::new(40.5, -92.5),
            LatLon::new(40.5, -85.0),
            LatLon::new(38.7, -85.0),
            NORTH_EAST_INLAND,
            LatLon::new(36.5, -84.0),
            LatLon::new(32.8, -98.0),
            LatLon::new(31.9, -98.0),
            LatLon::new(37.8, -75.0),
            LatLon::new(25.5, -81.5),
            WEST_SOUTH_CORNER,
            LatLon::new(38.0, -92.5),
            LatLon::new(40.5, -92.5),
        ],
    }
}

/// All overlays in draw order.
pub fn all_regions() -> Vec<Region> {
    vec![western(), north(), south(), eastern()]
}
