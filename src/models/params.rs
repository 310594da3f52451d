//! Incoming competition record: loosely typed fields as received from a client or CSV row.

use crate::models::competition::{Competition, CompetitionFormat, Preset};
use crate::models::validation::{Field, ValidationErrors, Violation};
use serde::Deserialize;
use serde_json::Value;

/// Largest team, group or qualifier-per-group count accepted from a request.
pub const MAX_TEAMS: i64 = 1024;

/// Largest legs-per-fixture count accepted from a request.
pub const MAX_MATCHES_PER_FIXTURE: i64 = 4;

/// Raw create request. Numeric fields are kept as JSON values so that a
/// non-integer can be reported against its field instead of failing the whole body.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct CompetitionParams {
    #[serde(default)]
    pub season: Option<Value>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, alias = "preset_format")]
    pub format: Option<String>,
    #[serde(default)]
    pub num_teams: Option<Value>,
    #[serde(default)]
    pub num_teams_per_group: Option<Value>,
    #[serde(default)]
    pub num_advances_from_group: Option<Value>,
    #[serde(default)]
    pub num_matches_per_fixture: Option<Value>,
}

/// Read an optional integer field. `null` counts as absent.
fn integer_field(value: &Option<Value>, field: Field, errors: &mut ValidationErrors) -> Option<i64> {
    match value {
        None | Some(Value::Null) => None,
        Some(Value::Number(n)) => match n.as_i64() {
            Some(i) => Some(i),
            None => {
                errors.push(Violation::NotInteger(field));
                None
            }
        },
        Some(Value::String(s)) => match s.trim().parse::<i64>() {
            Ok(i) => Some(i),
            Err(_) if s.trim().is_empty() => None,
            Err(_) => {
                errors.push(Violation::NotInteger(field));
                None
            }
        },
        Some(_) => {
            errors.push(Violation::NotInteger(field));
            None
        }
    }
}

/// Request-size limit. Checked only when the value is present; the preset validator owns the rest.
fn at_most(value: Option<i64>, field: Field, max: i64, errors: &mut ValidationErrors) -> Option<i64> {
    match value {
        Some(v) if v > max => {
            errors.push(Violation::TooLarge { field, max });
            None
        }
        other => other,
    }
}

impl CompetitionParams {
    /// Check record-level fields and coerce the preset fields to integers.
    ///
    /// Preset rules (power of two, group division, ...) are not checked here; the
    /// builder runs the preset validator before generating anything. Counts above
    /// `MAX_TEAMS` / `MAX_MATCHES_PER_FIXTURE` are refused so one request stays small.
    pub fn into_competition(self) -> Result<Competition, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let season = match integer_field(&self.season, Field::Season, &mut errors) {
            Some(s) => match i32::try_from(s) {
                Ok(s) => Some(s),
                Err(_) => {
                    errors.push(Violation::TooLarge {
                        field: Field::Season,
                        max: i32::MAX as i64,
                    });
                    None
                }
            },
            None => {
                if !errors.has(Field::Season) {
                    errors.push(Violation::Missing(Field::Season));
                }
                None
            }
        };

        let name = self.name.as_deref().map(str::trim).unwrap_or("");
        if name.is_empty() {
            errors.push(Violation::Blank(Field::Name));
        }

        let format = match self.format.as_deref() {
            None => {
                errors.push(Violation::Missing(Field::Format));
                None
            }
            Some(s) => match s.parse::<CompetitionFormat>() {
                Ok(f) => Some(f),
                Err(unknown) => {
                    errors.push(Violation::UnknownFormat(unknown));
                    None
                }
            },
        };

        let num_teams = integer_field(&self.num_teams, Field::NumTeams, &mut errors);
        let num_teams = at_most(num_teams, Field::NumTeams, MAX_TEAMS, &mut errors);
        let num_teams_per_group =
            integer_field(&self.num_teams_per_group, Field::NumTeamsPerGroup, &mut errors);
        let num_teams_per_group = at_most(
            num_teams_per_group,
            Field::NumTeamsPerGroup,
            MAX_TEAMS,
            &mut errors,
        );
        let num_advances_from_group = integer_field(
            &self.num_advances_from_group,
            Field::NumAdvancesFromGroup,
            &mut errors,
        );
        let num_advances_from_group = at_most(
            num_advances_from_group,
            Field::NumAdvancesFromGroup,
            MAX_TEAMS,
            &mut errors,
        );
        let num_matches_per_fixture = integer_field(
            &self.num_matches_per_fixture,
            Field::NumMatchesPerFixture,
            &mut errors,
        );
        let num_matches_per_fixture = at_most(
            num_matches_per_fixture,
            Field::NumMatchesPerFixture,
            MAX_MATCHES_PER_FIXTURE,
            &mut errors,
        );

        let (season, format) = match (season, format) {
            (Some(season), Some(format)) => (season, format),
            _ => return Err(errors),
        };
        let preset = Preset {
            format,
            num_teams,
            num_teams_per_group,
            num_advances_from_group,
            num_matches_per_fixture,
        };
        errors.into_result(Competition::new(season, name, preset))
    }
}
