use std::collections::HashMap;

use chrono::{DateTime, Utc};
use gridiron_shared::{
    LatLon, Offset, OffsetMap, Region, Team, group_divisions, line_color, resolve_path,
};
use serde::Serialize;
use tracing::{debug, warn};

use crate::config::{MAP_CENTER, MAP_FIT_BOUNDS, MAP_ZOOM, PAGE_TITLE, TILE_ATTRIBUTION, TILE_URL};
use crate::page::escape_html;

const DIVISION_LINE_WEIGHT: f64 = 2.5;
const DIVISION_LINE_OPACITY: f64 = 0.8;
const REGION_FILL_OPACITY: f64 = 0.3;
const REGION_BORDER_WEIGHT: f64 = 1.0;

/// Everything the page script needs to draw the map, serialized as JSON.
#[derive(Debug, Clone, Serialize)]
pub struct MapDocument {
    pub title: String,
    pub generated_at: String,
    pub center: [f64; 2],
    pub zoom: u8,
    pub fit_bounds: [[f64; 2]; 2],
    pub tiles: TileLayer,
    pub anchors: Vec<AnchorDot>,
    pub markers: Vec<LogoMarker>,
    pub division_lines: Vec<DivisionLine>,
    pub regions: Vec<RegionLayer>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TileLayer {
    pub url: String,
    pub attribution: String,
}

/// True location of a team.
#[derive(Debug, Clone, Serialize)]
pub struct AnchorDot {
    pub position: LatLon,
    pub tooltip: String,
}

/// Logo drawn at the separated position.
#[derive(Debug, Clone, Serialize)]
pub struct LogoMarker {
    pub team: String,
    pub position: LatLon,
    pub logo_url: String,
    pub tooltip: String,
    pub popup: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct DivisionLine {
    pub division: String,
    pub color: String,
    pub weight: f64,
    pub opacity: f64,
    pub points: Vec<LatLon>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RegionLayer {
    pub name: String,
    pub color: String,
    pub fill_opacity: f64,
    pub weight: f64,
    pub points: Vec<LatLon>,
}

/// Separated position of every loaded team. A repeated name keeps the last
/// row's position.
pub fn rendered_positions(teams: &[Team], offsets: &OffsetMap) -> HashMap<String, LatLon> {
    teams
        .iter()
        .map(|team| (team.name.clone(), rendered_position(team, offsets)))
        .collect()
}

fn rendered_position(team: &Team, offsets: &OffsetMap) -> LatLon {
    let offset = offsets.get(&team.name).copied().unwrap_or(Offset::ZERO);
    team.position() + offset
}

fn team_layers(teams: &[Team], offsets: &OffsetMap) -> (Vec<AnchorDot>, Vec<LogoMarker>) {
    let mut anchors = Vec::with_capacity(teams.len());
    let mut markers = Vec::with_capacity(teams.len());

    for team in teams {
        let name = escape_html(&team.name);
        anchors.push(AnchorDot {
            position: team.position(),
            tooltip: format!("Original location: {name}"),
        });
        markers.push(LogoMarker {
            team: team.name.clone(),
            position: rendered_position(team, offsets),
            logo_url: team.logo_url.clone(),
            tooltip: name.clone(),
            popup: format!(
                "<b>{name}</b><br>{}",
                escape_html(&team.division)
            ),
        });
    }

    (anchors, markers)
}

/// Resolve one line per division, skipping those that cannot be drawn.
pub fn division_lines(
    teams: &[Team],
    orders: &HashMap<String, Vec<String>>,
    positions: &HashMap<String, LatLon>,
) -> Vec<DivisionLine> {
    let mut lines = Vec::new();

    for division in group_divisions(teams) {
        if division.members.len() < 2 {
            warn!(
                division = %division.name,
                "division has fewer than 2 teams, skipping its line"
            );
            continue;
        }

        let path = resolve_path(&division, orders, positions);
        for team in &path.missing {
            warn!("team '{team}' not found in division '{}'", division.name);
        }
        if !path.is_drawable() {
            warn!(
                "not enough valid points for division '{}' to draw a line",
                division.name
            );
            continue;
        }

        debug!(
            division = %division.name,
            points = path.points.len(),
            custom_order = path.custom_order,
            "division line resolved"
        );
        lines.push(DivisionLine {
            color: line_color(&division.conference).to_string(),
            division: division.name,
            weight: DIVISION_LINE_WEIGHT,
            opacity: DIVISION_LINE_OPACITY,
            points: path.points,
        });
    }

    lines
}

fn region_layers(regions: &[Region]) -> Vec<RegionLayer> {
    regions
        .iter()
        .map(|region| RegionLayer {
            name: region.name.to_string(),
            color: region.color.to_string(),
            fill_opacity: REGION_FILL_OPACITY,
            weight: REGION_BORDER_WEIGHT,
            points: region.vertices.clone(),
        })
        .collect()
}

pub fn build_document(
    teams: &[Team],
    offsets: &OffsetMap,
    orders: &HashMap<String, Vec<String>>,
    regions: &[Region],
    generated_at: DateTime<Utc>,
) -> MapDocument {
    let positions = rendered_positions(teams, offsets);
    let (anchors, markers) = team_layers(teams, offsets);

    MapDocument {
        title: PAGE_TITLE.to_string(),
        generated_at: generated_at.to_rfc3339(),
        center: MAP_CENTER,
        zoom: MAP_ZOOM,
        fit_bounds: MAP_FIT_BOUNDS,
        tiles: TileLayer {
            url: TILE_URL.to_string(),
            attribution: TILE_ATTRIBUTION.to_string(),
        },
        anchors,
        markers,
        division_lines: division_lines(teams, orders, &positions),
        regions: region_layers(regions),
    }
}
