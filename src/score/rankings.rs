use std::cmp::Reverse;

use crate::model::{Course, GameMode, Roster, ScoreTable};
use crate::score::skins::matchplay_standings;
use crate::score::stats::{individual_stats, team_stats};

/// One standings line: the roster entry's name, what the UI shows for it,
/// and the numeric key the ordering used.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RankedEntry {
    pub name: String,
    pub display: String,
    pub sort_key: i32,
}

/// Fully ordered standings for the active mode, rebuilt on every call.
///
/// Stroke play and best ball order ascending by relation to par; match play
/// orders descending by points. Sorting is stable, so ties keep roster
/// (insertion) order.
///
/// # Panics
///
/// Panics if the roster shape does not match the mode (teams in a solo mode
/// or vice versa) or if `current_hole` is off the course. Setup fixes both,
/// so a mismatch here is a bug.
#[must_use]
pub fn live_rankings(
    mode: GameMode,
    roster: &Roster,
    table: &ScoreTable,
    course: &Course,
    current_hole: u8,
) -> Vec<RankedEntry> {
    let mut entries = match (mode, roster) {
        (GameMode::StrokePlay, Roster::Solo(names)) => names
            .iter()
            .map(|name| {
                let stats = individual_stats(table, course, name);
                RankedEntry {
                    name: name.clone(),
                    display: stats.to_par_display(),
                    sort_key: stats.to_par,
                }
            })
            .collect::<Vec<_>>(),
        (GameMode::MatchPlay, Roster::Solo(names)) => {
            let standings = matchplay_standings(table, course, names);
            names
                .iter()
                .map(|name| {
                    let points = standings.points_for(name);
                    RankedEntry {
                        name: name.clone(),
                        display: points.to_string(),
                        sort_key: points,
                    }
                })
                .collect()
        }
        (GameMode::BestBallDoubles | GameMode::BestBallTriples, Roster::Teams(teams)) => teams
            .iter()
            .map(|team| {
                let stats = team_stats(table, course, team, current_hole);
                RankedEntry {
                    name: team.name.clone(),
                    display: stats.to_par_display(),
                    sort_key: stats.to_par,
                }
            })
            .collect(),
        (mode, _) => panic!("roster shape does not match game mode {mode}"),
    };

    if mode == GameMode::MatchPlay {
        entries.sort_by_key(|e| Reverse(e.sort_key));
    } else {
        entries.sort_by_key(|e| e.sort_key);
    }
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Hole, TeeDistances};

    fn course(pars: &[i32]) -> Course {
        Course {
            name: "test".to_string(),
            version: 1,
            holes: pars
                .iter()
                .enumerate()
                .map(|(i, &par)| Hole {
                    hole: u8::try_from(i + 1).unwrap(),
                    par,
                    distances: TeeDistances {
                        red: 200,
                        white: 240,
                        blue: 385,
                    },
                    info: String::new(),
                    image: String::new(),
                })
                .collect(),
        }
    }

    #[test]
    fn stroke_play_orders_ascending_by_relation() {
        let course = course(&[3, 3]);
        let roster = Roster::solo(vec!["Bob".to_string(), "Ann".to_string()]).unwrap();
        let mut table = ScoreTable::new();
        table.record("Ann", 1, 2);
        table.record("Ann", 2, 2);
        table.record("Bob", 1, 4);

        let ranked = live_rankings(GameMode::StrokePlay, &roster, &table, &course, 2);
        assert_eq!(ranked[0].name, "Ann");
        assert_eq!(ranked[0].display, "-2");
        assert_eq!(ranked[1].name, "Bob");
        assert_eq!(ranked[1].display, "+1");
    }

    #[test]
    fn match_play_orders_descending_by_points() {
        let course = course(&[3, 3]);
        let roster = Roster::solo(vec!["Ann".to_string(), "Bob".to_string()]).unwrap();
        let mut table = ScoreTable::new();
        table.record("Ann", 1, 4);
        table.record("Bob", 1, 3);

        let ranked = live_rankings(GameMode::MatchPlay, &roster, &table, &course, 1);
        assert_eq!(ranked[0].name, "Bob");
        assert_eq!(ranked[0].sort_key, 1);
    }

    #[test]
    fn ties_keep_roster_order() {
        let course = course(&[3]);
        let roster =
            Roster::solo(vec!["Cal".to_string(), "Ann".to_string(), "Bob".to_string()]).unwrap();
        let table = ScoreTable::new();

        let ranked = live_rankings(GameMode::StrokePlay, &roster, &table, &course, 1);
        let names: Vec<&str> = ranked.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["Cal", "Ann", "Bob"]);
    }

    #[test]
    #[should_panic(expected = "roster shape does not match game mode")]
    fn team_roster_in_stroke_play_panics() {
        let course = course(&[3]);
        let team = crate::model::Team {
            name: "Team One".to_string(),
            members: vec!["Ann".to_string(), "Bob".to_string()],
        };
        let roster = Roster::teams(vec![team], GameMode::BestBallDoubles).unwrap();
        let table = ScoreTable::new();
        let _ = live_rankings(GameMode::StrokePlay, &roster, &table, &course, 1);
    }
}
