//! Preset validation: reject configurations that cannot describe a realizable tournament.

use crate::models::{CompetitionFormat, Field, Preset, ValidationErrors, Violation};

/// A preset that passed validation, narrowed to the fields its format uses.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ValidPreset {
    League {
        num_teams: u32,
    },
    Cup {
        num_teams: u32,
        num_matches_per_fixture: u32,
    },
    GroupKnockout {
        num_teams: u32,
        num_teams_per_group: u32,
        num_advances_from_group: u32,
        num_matches_per_fixture: u32,
    },
}

impl ValidPreset {
    pub fn format(&self) -> CompetitionFormat {
        match self {
            ValidPreset::League { .. } => CompetitionFormat::League,
            ValidPreset::Cup { .. } => CompetitionFormat::Cup,
            ValidPreset::GroupKnockout { .. } => CompetitionFormat::GroupKnockout,
        }
    }
}

/// `n > 0 && n & (n - 1) == 0`
pub fn is_power_of_two(n: i64) -> bool {
    n > 0 && (n & (n - 1)) == 0
}

/// Present, at least `min`, and representable as a count. Values below 1 are reported as non-positive.
fn counted(value: Option<i64>, field: Field, min: i64, errors: &mut ValidationErrors) -> Option<u32> {
    let v = match value {
        Some(v) => v,
        None => {
            errors.push(Violation::Missing(field));
            return None;
        }
    };
    if v < 1 {
        errors.push(Violation::NotPositive(field));
        return None;
    }
    if v < min {
        errors.push(Violation::TooSmall { field, min });
        return None;
    }
    match u32::try_from(v) {
        Ok(n) => Some(n),
        Err(_) => {
            errors.push(Violation::TooLarge {
                field,
                max: u32::MAX as i64,
            });
            None
        }
    }
}

fn validate_league(preset: &Preset, errors: &mut ValidationErrors) -> Option<ValidPreset> {
    let num_teams = counted(preset.num_teams, Field::NumTeams, 2, errors)?;
    Some(ValidPreset::League { num_teams })
}

fn validate_cup(preset: &Preset, errors: &mut ValidationErrors) -> Option<ValidPreset> {
    let num_teams = counted(preset.num_teams, Field::NumTeams, 1, errors).and_then(|n| {
        if is_power_of_two(n as i64) {
            Some(n)
        } else {
            errors.push(Violation::NotPowerOfTwo {
                field: Field::NumTeams,
                value: n as i64,
            });
            None
        }
    });
    let legs = counted(preset.num_matches_per_fixture, Field::NumMatchesPerFixture, 1, errors);
    Some(ValidPreset::Cup {
        num_teams: num_teams?,
        num_matches_per_fixture: legs?,
    })
}

fn validate_group_knockout(preset: &Preset, errors: &mut ValidationErrors) -> Option<ValidPreset> {
    let num_teams = counted(preset.num_teams, Field::NumTeams, 1, errors);
    let per_group = counted(preset.num_teams_per_group, Field::NumTeamsPerGroup, 1, errors);
    let advances = counted(
        preset.num_advances_from_group,
        Field::NumAdvancesFromGroup,
        1,
        errors,
    );
    let legs = counted(preset.num_matches_per_fixture, Field::NumMatchesPerFixture, 1, errors);

    let mut structural_ok = true;
    if let (Some(num_teams), Some(per_group)) = (num_teams, per_group) {
        if num_teams % per_group != 0 {
            errors.push(Violation::UnevenGroups {
                num_teams: num_teams as i64,
                teams_per_group: per_group as i64,
            });
            structural_ok = false;
        } else if let Some(advances) = advances {
            let num_groups = num_teams / per_group;
            let qualifiers = num_groups as u64 * advances as u64;
            if !qualifiers.is_power_of_two() {
                errors.push(Violation::QualifiersNotPowerOfTwo {
                    num_groups: num_groups as i64,
                    advances: advances as i64,
                });
                structural_ok = false;
            } else if qualifiers > u32::MAX as u64 {
                errors.push(Violation::TooManyQualifiers { qualifiers });
                structural_ok = false;
            }
        }
    }

    if !structural_ok {
        return None;
    }
    Some(ValidPreset::GroupKnockout {
        num_teams: num_teams?,
        num_teams_per_group: per_group?,
        num_advances_from_group: advances?,
        num_matches_per_fixture: legs?,
    })
}

/// Check a preset against the rules of its format.
///
/// Never mutates anything. On failure every broken rule is returned, per field,
/// with cross-field rules reported against `Field::Base`.
pub fn validate_preset(preset: &Preset) -> Result<ValidPreset, ValidationErrors> {
    let mut errors = ValidationErrors::new();
    let valid = match preset.format {
        CompetitionFormat::League => validate_league(preset, &mut errors),
        CompetitionFormat::Cup => validate_cup(preset, &mut errors),
        CompetitionFormat::GroupKnockout => validate_group_knockout(preset, &mut errors),
    };
    match valid {
        Some(valid) if errors.is_empty() => Ok(valid),
        _ => Err(errors),
    }
}
