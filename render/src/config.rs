use std::path::PathBuf;

use gridiron_shared::SeparationParams;

pub const DEFAULT_DATA_PATH: &str = "data/nfl.csv";
pub const DEFAULT_OUTPUT_PATH: &str = "index.html";

pub const DEFAULT_MIN_DISTANCE_KM: f64 = 70.0; // markers closer than this get separated
pub const DEFAULT_SEPARATION_ITERATIONS: u32 = 2;
pub const DEFAULT_DIV_FACTOR: f64 = 70.0; // lower pushes harder

// Map view
pub const MAP_CENTER: [f64; 2] = [38.0, -97.0];
pub const MAP_ZOOM: u8 = 4;
pub const MAP_FIT_BOUNDS: [[f64; 2]; 2] = [[47.0, -90.0], [25.0, -105.0]];
pub const TILE_URL: &str = "https://{s}.basemaps.cartocdn.com/light_all/{z}/{x}/{y}{r}.png";
pub const TILE_ATTRIBUTION: &str = "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors &copy; <a href=\"https://carto.com/attributions\">CARTO</a>";
pub const PAGE_TITLE: &str = "NFL Divisions and Conferences";

#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    pub data_path: PathBuf,
    pub output_path: PathBuf,
    pub separation: SeparationParams,
}

impl RenderConfig {
    pub fn from_env() -> Self {
        Self {
            data_path: data_path(),
            output_path: output_path(),
            separation: SeparationParams {
                min_distance_km: min_distance_km(),
                iterations: separation_iterations(),
                div_factor: div_factor(),
            },
        }
    }
}

fn path_var(name: &str, default: &str) -> PathBuf {
    std::env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(default))
}

fn positive_f64_var(name: &str, default: f64) -> f64 {
    std::env::var(name)
        .ok()
        .and_then(|value| value.trim().parse::<f64>().ok())
        .filter(|value| value.is_finite() && *value > 0.0)
        .unwrap_or(default)
}

pub fn data_path() -> PathBuf {
    path_var("GRIDIRON_DATA_PATH", DEFAULT_DATA_PATH)
}

pub fn output_path() -> PathBuf {
    path_var("GRIDIRON_OUTPUT_PATH", DEFAULT_OUTPUT_PATH)
}

pub fn min_distance_km() -> f64 {
    positive_f64_var("GRIDIRON_MIN_DISTANCE_KM", DEFAULT_MIN_DISTANCE_KM)
}

pub fn separation_iterations() -> u32 {
    std::env::var("GRIDIRON_SEPARATION_ITERATIONS")
        .ok()
        .and_then(|value| value.trim().parse::<u32>().ok())
        .filter(|value| *value > 0)
        .unwrap_or(DEFAULT_SEPARATION_ITERATIONS)
}

pub fn div_factor() -> f64 {
    positive_f64_var("GRIDIRON_DIV_FACTOR", DEFAULT_DIV_FACTOR)
}
