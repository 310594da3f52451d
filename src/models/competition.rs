//! Competition, its format and preset, and the structure state.

use crate::models::stage::Stage;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a competition.
pub type CompetitionId = Uuid;

/// How a competition is played.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum CompetitionFormat {
    /// Single table, everyone plays everyone.
    League,
    /// Single-elimination bracket.
    Cup,
    /// Group tables feeding a knockout bracket.
    GroupKnockout,
}

impl CompetitionFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            CompetitionFormat::League => "League",
            CompetitionFormat::Cup => "Cup",
            CompetitionFormat::GroupKnockout => "GroupKnockout",
        }
    }
}

impl std::fmt::Display for CompetitionFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for CompetitionFormat {
    type Err = String;

    /// Accepts the enum names plus the record-keeping spellings (`Knockout`, `Group + Knockout`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "League" => Ok(CompetitionFormat::League),
            "Cup" | "Knockout" => Ok(CompetitionFormat::Cup),
            "GroupKnockout" | "Group + Knockout" => Ok(CompetitionFormat::GroupKnockout),
            other => Err(other.to_string()),
        }
    }
}

/// Numeric parameters describing a competition's shape before any structure exists.
///
/// Fields stay optional and signed so that the validator can report missing or
/// non-positive values instead of rejecting them at the type level.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Preset {
    pub format: CompetitionFormat,
    #[serde(default)]
    pub num_teams: Option<i64>,
    #[serde(default)]
    pub num_teams_per_group: Option<i64>,
    #[serde(default)]
    pub num_advances_from_group: Option<i64>,
    #[serde(default)]
    pub num_matches_per_fixture: Option<i64>,
}

impl Preset {
    pub fn league(num_teams: i64) -> Self {
        Self {
            format: CompetitionFormat::League,
            num_teams: Some(num_teams),
            num_teams_per_group: None,
            num_advances_from_group: None,
            num_matches_per_fixture: None,
        }
    }

    pub fn cup(num_teams: i64, num_matches_per_fixture: i64) -> Self {
        Self {
            format: CompetitionFormat::Cup,
            num_teams: Some(num_teams),
            num_teams_per_group: None,
            num_advances_from_group: None,
            num_matches_per_fixture: Some(num_matches_per_fixture),
        }
    }

    pub fn group_knockout(
        num_teams: i64,
        num_teams_per_group: i64,
        num_advances_from_group: i64,
        num_matches_per_fixture: i64,
    ) -> Self {
        Self {
            format: CompetitionFormat::GroupKnockout,
            num_teams: Some(num_teams),
            num_teams_per_group: Some(num_teams_per_group),
            num_advances_from_group: Some(num_advances_from_group),
            num_matches_per_fixture: Some(num_matches_per_fixture),
        }
    }
}

/// Whether a competition's stages have been generated. There is no way back to `Ungenerated`.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StructureState {
    Ungenerated,
    Generated,
}

/// Counts over a competition's generated structure (for logs and list views).
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct CompetitionSummary {
    pub table_stages: usize,
    pub knockout_stages: usize,
    pub table_rows: usize,
    pub fixtures: usize,
    pub legs: usize,
}

impl std::fmt::Display for CompetitionSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} table stage(s), {} knockout stage(s), {} table row(s), {} fixture(s), {} leg(s)",
            self.table_stages, self.knockout_stages, self.table_rows, self.fixtures, self.legs
        )
    }
}

/// A tournament within one season. Stages are ordered by play order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Competition {
    pub id: CompetitionId,
    pub season: i32,
    pub name: String,
    pub preset: Preset,
    /// Set by whatever process records the final result.
    pub champion: Option<String>,
    pub stages: Vec<Stage>,
    /// None while the structure is ungenerated.
    pub generated_at: Option<DateTime<Utc>>,
}

impl Competition {
    /// Create an ungenerated competition.
    pub fn new(season: i32, name: impl Into<String>, preset: Preset) -> Self {
        Self {
            id: Uuid::new_v4(),
            season,
            name: name.into(),
            preset,
            champion: None,
            stages: Vec::new(),
            generated_at: None,
        }
    }

    pub fn format(&self) -> CompetitionFormat {
        self.preset.format
    }

    pub fn state(&self) -> StructureState {
        match self.generated_at {
            Some(_) => StructureState::Generated,
            None => StructureState::Ungenerated,
        }
    }

    /// Table stages (league table or groups) in play order.
    pub fn tables(&self) -> impl Iterator<Item = &Stage> {
        self.stages.iter().filter(|s| s.is_table())
    }

    /// Knockout rounds in play order, first round first.
    pub fn rounds(&self) -> impl Iterator<Item = &Stage> {
        self.stages.iter().filter(|s| !s.is_table())
    }

    pub fn summary(&self) -> CompetitionSummary {
        let mut summary = CompetitionSummary::default();
        for stage in &self.stages {
            if stage.is_table() {
                summary.table_stages += 1;
            } else {
                summary.knockout_stages += 1;
            }
            summary.table_rows += stage.table_rows.len();
            summary.fixtures += stage.fixtures.len();
            summary.legs += stage.num_legs();
        }
        summary
    }

    /// Record the champion. The structure itself is immutable once generated.
    pub fn set_champion(&mut self, champion: impl Into<String>) {
        self.champion = Some(champion.into());
    }
}
