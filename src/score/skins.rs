use ahash::RandomState;
use std::collections::HashMap;

use crate::model::{Course, ScoreTable};

/// Match-play ("skins") standings. Points are won skins; higher is better.
#[derive(Clone, Debug)]
pub struct SkinsStandings {
    pub points: HashMap<String, i32, RandomState>,
    /// The stake riding on the next hole to be resolved.
    pub current_pot: i32,
}

impl SkinsStandings {
    #[must_use]
    pub fn points_for(&self, player: &str) -> i32 {
        self.points.get(player).copied().unwrap_or(0)
    }
}

/// Evaluate skins hole by hole in ascending order.
///
/// A hole resolves only once every player has recorded a score for it; the
/// sole lowest score takes the pot (default 1) and the pot resets, while a
/// tie rolls the pot plus one into the next hole. Evaluation stops at the
/// first unresolved hole even if later holes already have scores, because the
/// pot has to carry in hole order.
#[must_use]
pub fn matchplay_standings(
    table: &ScoreTable,
    course: &Course,
    players: &[String],
) -> SkinsStandings {
    let mut points: HashMap<String, i32, RandomState> =
        players.iter().map(|p| (p.clone(), 0)).collect();
    let mut pot = 1;

    for hole in &course.holes {
        let recorded: Vec<(&str, i32)> = players
            .iter()
            .filter_map(|p| table.recorded(p, hole.hole).map(|s| (p.as_str(), s)))
            .collect();
        if recorded.len() != players.len() {
            break;
        }

        let Some(low) = recorded.iter().map(|&(_, s)| s).min() else {
            break;
        };
        let leaders: Vec<&str> = recorded
            .iter()
            .filter(|&&(_, s)| s == low)
            .map(|&(p, _)| p)
            .collect();

        if let [winner] = leaders[..] {
            *points.entry(winner.to_string()).or_insert(0) += pot;
            pot = 1;
        } else {
            pot += 1;
        }
    }

    SkinsStandings {
        points,
        current_pot: pot,
    }
}
