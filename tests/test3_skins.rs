use pretty_assertions::assert_eq;
use rusty_disc::model::{GameMode, Roster, ScoreTable};
use rusty_disc::score::{live_rankings, matchplay_standings};

mod common;

fn players(names: &[&str]) -> Vec<String> {
    names.iter().map(ToString::to_string).collect()
}

#[test]
fn win_then_tie_leaves_pot_of_two_for_hole_three() {
    // Hole 1 (par 3): A 3, B 4 -> A takes the pot of 1, pot resets.
    // Hole 2: both 3 -> nobody scores, stake for hole 3 is 2.
    let course = common::course_with_pars(&[3, 3, 4]);
    let field = players(&["A", "B"]);
    let mut table = ScoreTable::new();
    table.record("A", 1, 3);
    table.record("B", 1, 4);
    table.record("A", 2, 3);
    table.record("B", 2, 3);

    let standings = matchplay_standings(&table, &course, &field);
    assert_eq!(standings.points_for("A"), 1);
    assert_eq!(standings.points_for("B"), 0);
    assert_eq!(standings.current_pot, 2);
}

#[test]
fn three_way_tie_carries_like_a_two_way_tie() {
    let course = common::course_with_pars(&[3, 3]);
    let field = players(&["A", "B", "C"]);
    let mut table = ScoreTable::new();
    for p in ["A", "B", "C"] {
        table.record(p, 1, 3);
    }

    let standings = matchplay_standings(&table, &course, &field);
    assert_eq!(standings.points_for("A"), 0);
    assert_eq!(standings.current_pot, 2);
}

#[test]
fn evaluation_halts_at_first_hole_missing_a_score() {
    // Hole 2 is missing C's score, so holes 2 and 3 stay unevaluated and
    // the hole-1 payout is all anyone has.
    let course = common::course_with_pars(&[3, 3, 3]);
    let field = players(&["A", "B", "C"]);
    let mut table = ScoreTable::new();
    for (p, s) in [("A", 2), ("B", 3), ("C", 4)] {
        table.record(p, 1, s);
    }
    table.record("A", 2, 3);
    table.record("B", 2, 3);
    // hole 3 fully scored, but it must wait on hole 2
    for (p, s) in [("A", 5), ("B", 2), ("C", 3)] {
        table.record(p, 3, s);
    }

    let standings = matchplay_standings(&table, &course, &field);
    assert_eq!(standings.points_for("A"), 1);
    assert_eq!(standings.points_for("B"), 0);
    assert_eq!(standings.current_pot, 1);
}

#[test]
fn match_play_rankings_are_points_descending() {
    let course = common::mountain_valley();
    let roster = Roster::solo(players(&["A", "B", "C"])).unwrap();
    let mut table = ScoreTable::new();
    // B takes holes 1 and 2, C takes hole 3.
    for (hole, scores) in [(1u8, [4, 2, 3]), (2, [3, 2, 4]), (3, [5, 5, 4])] {
        table.record("A", hole, scores[0]);
        table.record("B", hole, scores[1]);
        table.record("C", hole, scores[2]);
    }

    let ranked = live_rankings(GameMode::MatchPlay, &roster, &table, &course, 3);
    let names: Vec<&str> = ranked.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, ["B", "C", "A"]);
    assert_eq!(ranked[0].sort_key, 2);
    assert_eq!(ranked[0].display, "2");
}
