//! Group allocation: split a flat team count into equal groups.

use serde::Serialize;

/// One group table to create.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct GroupPlan {
    pub group_index: u32,
    pub size: u32,
}

impl GroupPlan {
    /// `Group A`, `Group B`, ... continuing `Group AA`, `Group AB` past Z.
    pub fn name(&self) -> String {
        format!("Group {}", group_letters(self.group_index))
    }
}

fn group_letters(mut index: u32) -> String {
    let mut letters = Vec::new();
    loop {
        letters.push((b'A' + (index % 26) as u8) as char);
        if index < 26 {
            break;
        }
        index = index / 26 - 1;
    }
    letters.iter().rev().collect()
}

/// Errors from group allocation.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum AllocationError {
    /// Group size of zero.
    EmptyGroups,
    /// Group size does not divide the team count.
    Indivisible { num_teams: u32, teams_per_group: u32 },
}

impl std::fmt::Display for AllocationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AllocationError::EmptyGroups => write!(f, "Groups must hold at least one team"),
            AllocationError::Indivisible {
                num_teams,
                teams_per_group,
            } => write!(
                f,
                "Cannot split {} teams into groups of {}",
                num_teams, teams_per_group
            ),
        }
    }
}

impl std::error::Error for AllocationError {}

/// Split `num_teams` into `num_teams / teams_per_group` groups of identical size.
///
/// Uneven groups are not supported; an indivisible count is an error rather than a remainder group.
pub fn allocate_groups(num_teams: u32, teams_per_group: u32) -> Result<Vec<GroupPlan>, AllocationError> {
    if teams_per_group == 0 {
        return Err(AllocationError::EmptyGroups);
    }
    if num_teams % teams_per_group != 0 {
        return Err(AllocationError::Indivisible {
            num_teams,
            teams_per_group,
        });
    }
    Ok((0..num_teams / teams_per_group)
        .map(|group_index| GroupPlan {
            group_index,
            size: teams_per_group,
        })
        .collect())
}
