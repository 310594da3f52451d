//! Competition structure generation: validate the preset, then lay out every stage.

use crate::logic::bracket::plan_bracket;
use crate::logic::groups::{allocate_groups, AllocationError};
use crate::logic::validator::{validate_preset, ValidPreset};
use crate::models::{Competition, Stage, StructureState, ValidationErrors};
use chrono::Utc;
use log::{debug, info, warn};

/// Errors from building a competition's structure.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum BuildError {
    /// The preset was rejected; nothing was generated.
    Invalid(ValidationErrors),
    /// Structure is generated exactly once per competition.
    AlreadyGenerated,
    /// Group allocation failed after validation passed.
    Allocation(AllocationError),
    /// The generated structure could not be stored.
    Storage(String),
}

impl std::fmt::Display for BuildError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BuildError::Invalid(errors) => write!(f, "Invalid preset: {}", errors),
            BuildError::AlreadyGenerated => write!(f, "Competition structure was already generated"),
            BuildError::Allocation(e) => write!(f, "Group allocation failed: {}", e),
            BuildError::Storage(msg) => write!(f, "Could not store competition: {}", msg),
        }
    }
}

impl std::error::Error for BuildError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BuildError::Invalid(e) => Some(e),
            BuildError::Allocation(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ValidationErrors> for BuildError {
    fn from(e: ValidationErrors) -> Self {
        BuildError::Invalid(e)
    }
}

impl From<AllocationError> for BuildError {
    fn from(e: AllocationError) -> Self {
        BuildError::Allocation(e)
    }
}

/// Append one knockout stage per planned round, continuing the stage order.
fn push_knockout_rounds(stages: &mut Vec<Stage>, num_participants: u32, num_matches_per_fixture: u32) {
    for round in plan_bracket(num_participants, num_matches_per_fixture) {
        debug!(
            "Round {} ({}): {} ties, {} fixtures",
            round.round_index,
            round.name(),
            round.num_ties,
            round.num_fixtures
        );
        let order = stages.len() as u32;
        stages.push(Stage::knockout(
            round.name(),
            order,
            round.num_fixtures,
            num_matches_per_fixture,
        ));
    }
}

/// Lay out every stage for a validated preset, in play order.
///
/// Pure apart from id generation: the result is only handed back once every
/// stage exists, so a failure leaves nothing behind.
pub fn generate_stages(preset: &ValidPreset) -> Result<Vec<Stage>, BuildError> {
    let mut stages = Vec::new();
    match *preset {
        ValidPreset::League { num_teams } => {
            stages.push(Stage::table("League", 0, num_teams));
        }
        ValidPreset::Cup {
            num_teams,
            num_matches_per_fixture,
        } => {
            push_knockout_rounds(&mut stages, num_teams, num_matches_per_fixture);
        }
        ValidPreset::GroupKnockout {
            num_teams,
            num_teams_per_group,
            num_advances_from_group,
            num_matches_per_fixture,
        } => {
            let groups = allocate_groups(num_teams, num_teams_per_group)?;
            for group in &groups {
                debug!("{}: {} teams", group.name(), group.size);
                stages.push(Stage::table(group.name(), group.group_index, group.size));
            }
            let qualifiers = groups.len() as u32 * num_advances_from_group;
            push_knockout_rounds(&mut stages, qualifiers, num_matches_per_fixture);
        }
    }
    Ok(stages)
}

/// Generate the full structure of an ungenerated competition.
///
/// Runs preset validation first. On any error the competition is left exactly as it was.
pub fn build_competition(competition: &mut Competition) -> Result<(), BuildError> {
    if competition.state() == StructureState::Generated {
        return Err(BuildError::AlreadyGenerated);
    }
    let valid = validate_preset(&competition.preset).map_err(|errors| {
        warn!("Rejected preset for '{}': {}", competition.name, errors);
        BuildError::Invalid(errors)
    })?;
    let stages = generate_stages(&valid)?;

    competition.stages = stages;
    competition.generated_at = Some(Utc::now());
    info!(
        "Generated {} competition '{}' ({}): {}",
        valid.format(),
        competition.name,
        competition.season,
        competition.summary()
    );
    Ok(())
}
