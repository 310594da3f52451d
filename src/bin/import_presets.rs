//! Batch import: build one competition per CSV row and report what was generated.
//! Run with: cargo run --bin import_presets -- data/presets.csv
//!
//! Columns: season,name,format,num_teams,num_teams_per_group,num_advances_from_group,num_matches_per_fixture
//! Empty cells count as absent. Rejected rows are reported and skipped.

use competition_engine::{create_competition, BuildError, CompetitionParams, MemoryStore};
use serde::Deserialize;
use serde_json::Value;
use std::error::Error;
use std::path::Path;

#[derive(Deserialize, Debug)]
struct PresetRow {
    season: Option<String>,
    name: Option<String>,
    format: Option<String>,
    num_teams: Option<String>,
    num_teams_per_group: Option<String>,
    num_advances_from_group: Option<String>,
    num_matches_per_fixture: Option<String>,
}

impl From<PresetRow> for CompetitionParams {
    fn from(row: PresetRow) -> Self {
        let cell = |c: Option<String>| c.map(Value::String);
        CompetitionParams {
            season: cell(row.season),
            name: row.name,
            format: row.format,
            num_teams: cell(row.num_teams),
            num_teams_per_group: cell(row.num_teams_per_group),
            num_advances_from_group: cell(row.num_advances_from_group),
            num_matches_per_fixture: cell(row.num_matches_per_fixture),
        }
    }
}

fn import_presets(path: &Path, store: &MemoryStore) -> Result<(usize, usize), Box<dyn Error>> {
    let mut created = 0;
    let mut rejected = 0;

    let mut rdr = csv::Reader::from_path(path)?;
    for (i, row) in rdr.deserialize::<PresetRow>().enumerate() {
        let line = i + 2;
        let params: CompetitionParams = row?.into();
        let result = params
            .into_competition()
            .map_err(BuildError::Invalid)
            .and_then(|competition| create_competition(store, competition));
        match result {
            Ok(c) => {
                created += 1;
                log::info!("line {}: {} {} [{}] {}", line, c.season, c.name, c.format(), c.summary());
            }
            Err(BuildError::Invalid(errors)) => {
                rejected += 1;
                log::warn!("line {}: rejected: {}", line, errors);
            }
            Err(e) => return Err(e.into()),
        }
    }

    Ok((created, rejected))
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "data/presets.csv".to_string());
    let store = MemoryStore::new();
    let (created, rejected) = import_presets(Path::new(&path), &store)?;
    log::info!(
        "Imported {} competition(s) from {}, rejected {}",
        created,
        path,
        rejected
    );
    Ok(())
}
