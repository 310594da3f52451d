//! Knockout bracket planning: rounds and fixture counts for a power-of-two field.

use serde::Serialize;

/// Shape of one knockout round.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct RoundPlan {
    /// 0 is the first round; the last index is the final.
    pub round_index: u32,
    /// Teams still in the competition when the round starts.
    pub num_teams: u32,
    pub num_ties: u32,
    pub num_fixtures: u32,
}

impl RoundPlan {
    /// Display name derived from how many teams enter the round.
    pub fn name(&self) -> String {
        match self.num_teams {
            2 => "Final".to_string(),
            4 => "Semi-Final".to_string(),
            8 => "Quarter-Final".to_string(),
            n => format!("Round of {}", n),
        }
    }
}

/// Plan every round of a knockout phase, first round first.
///
/// `num_participants` must already be a power of two; it is not re-checked here.
/// With one participant (or none) there is nothing to play and the plan is empty.
pub fn plan_bracket(num_participants: u32, num_matches_per_fixture: u32) -> Vec<RoundPlan> {
    if num_participants < 2 {
        return Vec::new();
    }
    let num_rounds = num_participants.ilog2();
    (0..num_rounds)
        .map(|i| {
            let num_teams = num_participants >> i;
            let num_ties = num_teams / 2;
            RoundPlan {
                round_index: i,
                num_teams,
                num_ties,
                num_fixtures: num_ties.saturating_mul(num_matches_per_fixture),
            }
        })
        .collect()
}
