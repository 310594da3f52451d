//! Integration tests for bracket planning and group allocation.

use competition_engine::{allocate_groups, plan_bracket, AllocationError, GroupPlan, RoundPlan};

#[test]
fn eight_team_single_leg_bracket() {
    let plan = plan_bracket(8, 1);
    assert_eq!(
        plan,
        vec![
            RoundPlan { round_index: 0, num_teams: 8, num_ties: 4, num_fixtures: 4 },
            RoundPlan { round_index: 1, num_teams: 4, num_ties: 2, num_fixtures: 2 },
            RoundPlan { round_index: 2, num_teams: 2, num_ties: 1, num_fixtures: 1 },
        ]
    );
}

#[test]
fn round_counts_follow_halving_rule() {
    for num_rounds in 1..=6u32 {
        let n = 2u32.pow(num_rounds);
        for legs in 1..=2 {
            let plan = plan_bracket(n, legs);
            assert_eq!(plan.len() as u32, num_rounds);
            for (i, round) in plan.iter().enumerate() {
                assert_eq!(round.round_index, i as u32);
                assert_eq!(round.num_ties, (n >> i) / 2);
                assert_eq!(round.num_fixtures, (n >> i) * legs / 2);
            }
            assert_eq!(plan.last().unwrap().num_ties, 1);
        }
    }
}

#[test]
fn two_legged_ties_double_fixtures() {
    let fixtures: Vec<u32> = plan_bracket(16, 2).iter().map(|r| r.num_fixtures).collect();
    assert_eq!(fixtures, vec![16, 8, 4, 2]);
}

#[test]
fn degenerate_brackets_have_no_rounds() {
    assert!(plan_bracket(0, 1).is_empty());
    assert!(plan_bracket(1, 1).is_empty());
}

#[test]
fn round_names() {
    let names: Vec<String> = plan_bracket(32, 1).iter().map(RoundPlan::name).collect();
    assert_eq!(
        names,
        vec!["Round of 32", "Round of 16", "Quarter-Final", "Semi-Final", "Final"]
    );
}

#[test]
fn allocates_uniform_groups() {
    let groups = allocate_groups(32, 4).unwrap();
    assert_eq!(groups.len(), 8);
    for (i, g) in groups.iter().enumerate() {
        assert_eq!(g.group_index, i as u32);
        assert_eq!(g.size, 4);
    }
    assert_eq!(allocate_groups(24, 3).unwrap().len(), 8);
}

#[test]
fn allocation_rejects_indivisible_and_empty_groups() {
    assert_eq!(
        allocate_groups(32, 6),
        Err(AllocationError::Indivisible { num_teams: 32, teams_per_group: 6 })
    );
    assert_eq!(allocate_groups(8, 0), Err(AllocationError::EmptyGroups));
}

#[test]
fn group_names_run_past_z() {
    let name = |i| GroupPlan { group_index: i, size: 4 }.name();
    assert_eq!(name(0), "Group A");
    assert_eq!(name(7), "Group H");
    assert_eq!(name(25), "Group Z");
    assert_eq!(name(26), "Group AA");
    assert_eq!(name(27), "Group AB");
}
