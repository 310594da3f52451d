//! Stage, TableRow, Fixture and FixtureLeg: the generated structure of a competition.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a stage.
pub type StageId = Uuid;

/// Unique identifier for a fixture.
pub type FixtureId = Uuid;

/// One leg of a fixture. Scores stay `None` until the leg is played.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct FixtureLeg {
    pub id: Uuid,
    pub fixture_id: FixtureId,
    pub home_score: Option<u32>,
    pub away_score: Option<u32>,
}

impl FixtureLeg {
    pub fn new(fixture_id: FixtureId) -> Self {
        Self {
            id: Uuid::new_v4(),
            fixture_id,
            home_score: None,
            away_score: None,
        }
    }

    pub fn is_played(&self) -> bool {
        self.home_score.is_some() && self.away_score.is_some()
    }
}

/// A tie between two teams within a knockout stage.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Fixture {
    pub id: FixtureId,
    pub stage_id: StageId,
    /// None until seeding assigns a team.
    pub home_team: Option<String>,
    pub away_team: Option<String>,
    pub legs: Vec<FixtureLeg>,
}

impl Fixture {
    /// Create an unseeded fixture with `num_legs` unplayed legs.
    pub fn new(stage_id: StageId, num_legs: u32) -> Self {
        let id = Uuid::new_v4();
        Self {
            id,
            stage_id,
            home_team: None,
            away_team: None,
            legs: (0..num_legs).map(|_| FixtureLeg::new(id)).collect(),
        }
    }
}

/// One team's slot in a table stage. Counters start at zero.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct TableRow {
    pub stage_id: StageId,
    pub team: Option<String>,
    pub played: u32,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
    pub goals_for: u32,
    pub goals_against: u32,
    pub points: u32,
}

impl TableRow {
    pub fn new(stage_id: StageId) -> Self {
        Self {
            stage_id,
            ..Self::default()
        }
    }
}

/// One phase of a competition: a standings table or a single knockout round.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Stage {
    pub id: StageId,
    pub name: String,
    /// Play order within the competition; 0 is the earliest.
    pub order: u32,
    pub table: bool,
    /// Only populated for table stages.
    pub table_rows: Vec<TableRow>,
    /// Only populated for knockout stages.
    pub fixtures: Vec<Fixture>,
}

impl Stage {
    /// Table stage with `num_rows` empty rows.
    pub fn table(name: impl Into<String>, order: u32, num_rows: u32) -> Self {
        let id = Uuid::new_v4();
        Self {
            id,
            name: name.into(),
            order,
            table: true,
            table_rows: (0..num_rows).map(|_| TableRow::new(id)).collect(),
            fixtures: Vec::new(),
        }
    }

    /// Knockout stage with `num_fixtures` fixtures of `num_legs` legs each.
    ///
    /// The builder passes `ties * legs` fixtures, so a tie of `m` legs owns `m * m` legs in total.
    pub fn knockout(name: impl Into<String>, order: u32, num_fixtures: u32, num_legs: u32) -> Self {
        let id = Uuid::new_v4();
        Self {
            id,
            name: name.into(),
            order,
            table: false,
            table_rows: Vec::new(),
            fixtures: (0..num_fixtures).map(|_| Fixture::new(id, num_legs)).collect(),
        }
    }

    pub fn is_table(&self) -> bool {
        self.table
    }

    pub fn num_legs(&self) -> usize {
        self.fixtures.iter().map(|f| f.legs.len()).sum()
    }
}
