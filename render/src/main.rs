mod config;
mod layers;
mod loader;
mod page;

use std::process::ExitCode;

use anyhow::{Context, Result};
use chrono::Utc;
use gridiron_shared::{Point, compute_offsets, league, regions};
use tracing_subscriber::EnvFilter;

use crate::config::RenderConfig;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    match run(&RenderConfig::from_env()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("failed to render map: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cfg: &RenderConfig) -> Result<()> {
    let teams = loader::load_teams(&cfg.data_path)?;

    let rules = league::custom_directions();
    let points: Vec<Point> = teams.iter().map(|team| team.to_point()).collect();
    let offsets = compute_offsets(&points, &cfg.separation, &rules);
    let displaced = offsets.values().filter(|offset| !offset.is_zero()).count();
    tracing::info!(
        displaced,
        min_distance_km = cfg.separation.min_distance_km,
        iterations = cfg.separation.iterations,
        div_factor = cfg.separation.div_factor,
        "computed marker offsets"
    );

    let overlays = regions::all_regions();
    let doc = layers::build_document(
        &teams,
        &offsets,
        &league::division_orders(),
        &overlays,
        Utc::now(),
    );
    let html = page::render_page(&doc, &overlays).context("failed to serialize map document")?;

    std::fs::write(&cfg.output_path, html)
        .with_context(|| format!("failed to write {}", cfg.output_path.display()))?;

    tracing::info!("Success! Map has been saved to '{}'", cfg.output_path.display());
    log_custom_separations();
    Ok(())
}

/// One line per separation override, in registration order.
fn custom_separation_lines() -> Vec<String> {
    league::CUSTOM_SEPARATIONS
        .iter()
        .map(|(a, b, angle, strength)| {
            format!("{a} ↔ {b}: {angle}° direction, {strength}x strength")
        })
        .collect()
}

fn log_custom_separations() {
    tracing::info!("Custom separations applied for:");
    for line in custom_separation_lines() {
        tracing::info!("  {line}");
    }
}
