//! Self-contained HTML page around the map document.
//!
//! The page pulls Leaflet from a CDN and draws every layer from the JSON
//! document embedded in its script element.

use std::fmt::Write;

use gridiron_shared::Region;
use gridiron_shared::colors::CONFERENCES;

use crate::layers::MapDocument;

const LEAFLET_CSS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.css";
const LEAFLET_JS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.js";

const PAGE_TEMPLATE: &str = r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <meta name="generator" content="gridiron-render" />
  <title>{{TITLE}}</title>
  <link rel="stylesheet" href="{{LEAFLET_CSS}}" />
  <script src="{{LEAFLET_JS}}"></script>
  <style>
    html, body { height: 100%; margin: 0; padding: 0; }
    #map { position: absolute; inset: 0; }
    .map-legend {
      position: fixed;
      bottom: 30px; left: 30px; width: 180px;
      border: 2px solid grey; z-index: 9999; font-size: 14px;
      background-color: white; opacity: 0.85; padding: 10px;
    }
  </style>
</head>
<body>
<div id="map"></div>
{{LEGEND}}
<script>
const MAP = {{MAP_DATA}};

const map = L.map('map').setView(MAP.center, MAP.zoom);
L.tileLayer(MAP.tiles.url, {
  attribution: MAP.tiles.attribution,
  subdomains: 'abcd',
  maxZoom: 20,
}).addTo(map);
map.fitBounds(MAP.fit_bounds);

for (const dot of MAP.anchors) {
  L.circleMarker(dot.position, {
    radius: 3,
    color: 'black',
    fill: true,
    fillColor: 'black',
    fillOpacity: 0.8,
    weight: 1,
  }).bindTooltip(dot.tooltip).addTo(map);
}

for (const marker of MAP.markers) {
  const icon = L.icon({
    iconUrl: marker.logo_url,
    iconSize: [30, 30],
    iconAnchor: [15, 15],
    popupAnchor: [0, -15],
  });
  L.marker(marker.position, { icon })
    .bindPopup(marker.popup)
    .bindTooltip(marker.tooltip)
    .addTo(map);
}

for (const line of MAP.division_lines) {
  L.polyline(line.points, {
    color: line.color,
    weight: line.weight,
    opacity: line.opacity,
  }).addTo(map);
}

for (const region of MAP.regions) {
  L.polygon(region.points, {
    color: region.color,
    fillColor: region.color,
    fillOpacity: region.fill_opacity,
    weight: region.weight,
  }).addTo(map);
}
</script>
</body>
</html>
"#;

/// Escape text for use inside HTML element content or quoted attributes.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Legend box listing conference line colors and region swatches.
pub fn legend_html(regions: &[Region]) -> String {
    let mut out = String::from("<div class=\"map-legend\">\n<b>Legend</b><br>\n");
    for conference in CONFERENCES {
        let _ = writeln!(
            out,
            "<i style=\"color:{};\">&#8212;</i> {} <br>",
            conference.color,
            escape_html(conference.label)
        );
    }
    for region in regions {
        let _ = writeln!(
            out,
            "<i style=\"background-color:{}; border: 1px solid grey;\">&nbsp;&nbsp;&nbsp;</i> {} <br>",
            region.legend_swatch,
            escape_html(region.name)
        );
    }
    out.push_str("</div>");
    out
}

/// Serialize the document for embedding in a `<script>` element.
fn script_json(doc: &MapDocument) -> serde_json::Result<String> {
    let json = serde_json::to_string(doc)?;
    Ok(json.replace("</", "<\\/"))
}

pub fn render_page(doc: &MapDocument, regions: &[Region]) -> serde_json::Result<String> {
    let data = script_json(doc)?;
    Ok(PAGE_TEMPLATE
        .replace("{{TITLE}}", &escape_html(&doc.title))
        .replace("{{LEAFLET_CSS}}", LEAFLET_CSS)
        .replace("{{LEAFLET_JS}}", LEAFLET_JS)
        .replace("{{LEGEND}}", &legend_html(regions))
        .replace("{{MAP_DATA}}", &data))
}
