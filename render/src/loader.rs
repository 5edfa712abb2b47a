use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result, bail};
use gridiron_shared::Team;
use tracing::info;

/// Load every row of the league table at `path`.
pub fn load_teams(path: &Path) -> Result<Vec<Team>> {
    let file = File::open(path)
        .with_context(|| format!("failed to open team table {}", path.display()))?;
    let teams = read_teams(file).with_context(|| format!("invalid team table {}", path.display()))?;
    info!(count = teams.len(), path = %path.display(), "loaded teams");
    Ok(teams)
}

/// Header names every table must carry.
pub const REQUIRED_COLUMNS: [&str; 6] = [
    "Team",
    "Conference",
    "Division",
    "Latitude",
    "Longitude",
    "LogoURL",
];

/// Parse a CSV with [`REQUIRED_COLUMNS`] headers. Extra columns are ignored;
/// a missing column is an error even when the table has no rows.
pub fn read_teams<R: Read>(reader: R) -> Result<Vec<Team>> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = rdr.headers().context("failed to read header row")?;
    let missing: Vec<&str> = REQUIRED_COLUMNS
        .into_iter()
        .filter(|column| !headers.iter().any(|h| h == *column))
        .collect();
    if !missing.is_empty() {
        bail!("missing required column(s): {}", missing.join(", "));
    }

    let mut teams = Vec::new();
    for (i, row) in rdr.deserialize::<Team>().enumerate() {
        // Row 1 is the header.
        let team = row.with_context(|| format!("row {}", i + 2))?;
        teams.push(team);
    }
    Ok(teams)
}
