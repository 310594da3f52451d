//! Integration tests for structure generation: stages, table rows, fixtures and legs per format.

use competition_engine::{
    build_competition, BuildError, Competition, Field, Preset, Stage, StructureState,
};

fn built(preset: Preset) -> Competition {
    let mut c = Competition::new(2024, "Test Competition", preset);
    build_competition(&mut c).unwrap();
    c
}

fn assert_graph_consistent(c: &Competition) {
    for (i, stage) in c.stages.iter().enumerate() {
        assert_eq!(stage.order, i as u32, "stages are stored in play order");
        if stage.is_table() {
            assert!(stage.fixtures.is_empty());
            assert!(stage.table_rows.iter().all(|r| r.stage_id == stage.id));
        } else {
            assert!(stage.table_rows.is_empty());
            for fixture in &stage.fixtures {
                assert_eq!(fixture.stage_id, stage.id);
                assert!(fixture.home_team.is_none() && fixture.away_team.is_none());
                assert!(fixture.legs.iter().all(|l| l.fixture_id == fixture.id && !l.is_played()));
            }
        }
    }
}

fn fixture_counts(c: &Competition) -> Vec<usize> {
    c.rounds().map(|s| s.fixtures.len()).collect()
}

#[test]
fn league_builds_one_table() {
    let c = built(Preset::league(17));
    assert_eq!(c.stages.len(), 1);
    let table = &c.stages[0];
    assert!(table.is_table());
    assert_eq!(table.name, "League");
    assert_eq!(table.table_rows.len(), 17);
    assert!(table.table_rows.iter().all(|r| r.team.is_none() && r.points == 0));
    assert_eq!(c.summary().fixtures, 0);
    assert_graph_consistent(&c);
}

#[test]
fn league_sizes() {
    for n in 2..=30 {
        let c = built(Preset::league(n));
        assert_eq!(c.stages.len(), 1);
        assert_eq!(c.stages[0].table_rows.len(), n as usize);
    }
}

#[test]
fn eight_team_cup() {
    let c = built(Preset::cup(8, 1));
    assert_eq!(c.tables().count(), 0);
    assert_eq!(fixture_counts(&c), vec![4, 2, 1]);
    let names: Vec<&str> = c.stages.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["Quarter-Final", "Semi-Final", "Final"]);
    assert_graph_consistent(&c);
}

#[test]
fn cup_rounds_follow_halving_rule() {
    for num_rounds in 1..=6u32 {
        let n = 2i64.pow(num_rounds);
        for m in 1..=2i64 {
            let c = built(Preset::cup(n, m));
            assert_eq!(c.stages.len() as u32, num_rounds);
            for (i, round) in c.rounds().enumerate() {
                let teams = n / 2i64.pow(i as u32);
                assert_eq!(round.fixtures.len() as i64, teams / 2 * m);
                assert!(round.fixtures.iter().all(|f| f.legs.len() as i64 == m));
            }
        }
    }
}

#[test]
fn cup_with_fourteen_teams_is_rejected() {
    let mut c = Competition::new(2024, "Odd Cup", Preset::cup(14, 1));
    match build_competition(&mut c) {
        Err(BuildError::Invalid(errors)) => assert!(errors.has(Field::Base)),
        other => panic!("expected rejection, got {:?}", other),
    }
    assert!(c.stages.is_empty());
    assert_eq!(c.state(), StructureState::Ungenerated);
}

#[test]
fn group_knockout_thirty_two_teams() {
    let c = built(Preset::group_knockout(32, 4, 2, 1));
    let tables: Vec<&Stage> = c.tables().collect();
    assert_eq!(tables.len(), 8);
    assert!(tables.iter().all(|t| t.table_rows.len() == 4));
    assert_eq!(tables[0].name, "Group A");
    assert_eq!(tables[7].name, "Group H");

    assert_eq!(fixture_counts(&c), vec![8, 4, 2, 1]);
    assert_eq!(c.rounds().next().map(|s| s.name.as_str()), Some("Round of 16"));
    assert_graph_consistent(&c);
}

#[test]
fn group_knockout_presets() {
    let presets = [(32, 4, 2, 1), (8, 4, 2, 1), (24, 3, 2, 1), (16, 4, 2, 2)];
    for (teams, per_group, advances, legs) in presets {
        let c = built(Preset::group_knockout(teams, per_group, advances, legs));
        let num_groups = teams / per_group;
        assert_eq!(c.tables().count() as i64, num_groups);
        assert!(c.tables().all(|t| t.table_rows.len() as i64 == per_group));

        let qualifiers = num_groups * advances;
        let num_rounds = qualifiers.ilog2() as usize;
        let rounds: Vec<&Stage> = c.rounds().collect();
        assert_eq!(rounds.len(), num_rounds);
        for (i, round) in rounds.iter().enumerate() {
            let teams_in_round = qualifiers >> i;
            assert_eq!(round.fixtures.len() as i64, teams_in_round * legs / 2);
        }
        assert_graph_consistent(&c);
    }
}

#[test]
fn knockout_rounds_come_after_groups() {
    let c = built(Preset::group_knockout(8, 4, 2, 1));
    let tables: Vec<bool> = c.stages.iter().map(|s| s.is_table()).collect();
    assert_eq!(tables, vec![true, true, false, false]);
}

#[test]
fn single_qualifier_has_no_knockout_phase() {
    let c = built(Preset::group_knockout(6, 6, 1, 1));
    assert_eq!(c.tables().count(), 1);
    assert_eq!(c.rounds().count(), 0);
}

#[test]
fn rejected_group_knockout_creates_nothing() {
    let mut c = Competition::new(2024, "Bad Groups", Preset::group_knockout(30, 6, 2, 1));
    let err = build_competition(&mut c).unwrap_err();
    assert!(matches!(err, BuildError::Invalid(ref e) if e.has(Field::Base)));
    assert!(c.stages.is_empty());
    assert!(c.generated_at.is_none());
}

#[test]
fn structure_is_generated_once() {
    let mut c = built(Preset::cup(4, 1));
    assert_eq!(c.state(), StructureState::Generated);
    let stage_ids: Vec<_> = c.stages.iter().map(|s| s.id).collect();

    assert_eq!(build_competition(&mut c), Err(BuildError::AlreadyGenerated));
    let after: Vec<_> = c.stages.iter().map(|s| s.id).collect();
    assert_eq!(stage_ids, after);
}

#[test]
fn summary_counts_everything() {
    let c = built(Preset::group_knockout(16, 4, 2, 2));
    let s = c.summary();
    assert_eq!(s.table_stages, 4);
    assert_eq!(s.table_rows, 16);
    assert_eq!(s.knockout_stages, 3);
    assert_eq!(s.fixtures, 8 + 4 + 2);
    assert_eq!(s.legs, (8 + 4 + 2) * 2);
}

#[test]
fn two_legged_final_holds_four_legs() {
    // one tie, two fixtures for it, two legs on each
    let c = built(Preset::cup(2, 2));
    let final_round = &c.stages[0];
    assert_eq!(final_round.name, "Final");
    assert_eq!(final_round.fixtures.len(), 2);
    assert!(final_round.fixtures.iter().all(|f| f.legs.len() == 2));
    assert_eq!(final_round.num_legs(), 4);
}
