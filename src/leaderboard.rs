use ahash::RandomState;
use std::collections::HashMap;

use crate::model::{ScorecardRow, TeeColor};

/// Leaderboard tee filter: every round, or only rounds played from one tee.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum TeeFilter {
    #[default]
    All,
    Tee(TeeColor),
}

impl TeeFilter {
    #[must_use]
    pub fn matches(self, row: &ScorecardRow) -> bool {
        match self {
            TeeFilter::All => true,
            TeeFilter::Tee(tee) => row.tee_color == tee,
        }
    }
}

/// One player's line on the all-time leaderboard.
#[derive(Clone, Debug, PartialEq)]
pub struct PlayerSummary {
    pub name: String,
    pub rounds: u32,
    pub total_strokes: i64,
    pub best_score: i32,
    pub average: f64,
}

impl PlayerSummary {
    /// Average strokes per round as shown on the leaderboard, one decimal.
    #[must_use]
    pub fn average_display(&self) -> String {
        format!("{:.1}", self.average)
    }
}

/// Group stored rounds by player name (after the tee filter) and rank
/// ascending by average strokes per round. Ties keep first-seen order, which
/// for newest-first input means the player with the more recent round ranks
/// first among equals.
#[must_use]
pub fn summarize(rows: &[ScorecardRow], filter: TeeFilter) -> Vec<PlayerSummary> {
    let mut by_player: HashMap<String, PlayerSummary, RandomState> = HashMap::default();
    let mut order: Vec<String> = vec![];

    for row in rows.iter().filter(|r| filter.matches(r)) {
        let entry = by_player
            .entry(row.player_name.clone())
            .or_insert_with(|| {
                order.push(row.player_name.clone());
                PlayerSummary {
                    name: row.player_name.clone(),
                    rounds: 0,
                    total_strokes: 0,
                    best_score: i32::MAX,
                    average: 0.0,
                }
            });
        entry.rounds += 1;
        entry.total_strokes += i64::from(row.total_score);
        entry.best_score = entry.best_score.min(row.total_score);
    }

    let mut summaries: Vec<PlayerSummary> = order
        .into_iter()
        .filter_map(|name| by_player.remove(&name))
        .map(|mut s| {
            s.average = s.total_strokes as f64 / f64::from(s.rounds);
            s
        })
        .collect();

    summaries.sort_by(|a, b| a.average.total_cmp(&b.average));
    summaries
}
