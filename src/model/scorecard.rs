use serde::{Deserialize, Serialize};

use crate::model::course::TeeColor;
use crate::model::roster::GameMode;

/// One finalized roster entry, in the shape the record store persists:
/// `player_name, tee_color, game_mode, total_score, hole_1..hole_N`.
///
/// `hole_scores[i]` is the score for hole `i + 1`. Holes nobody recorded get
/// the hole's par here, even though live aggregation excluded them; a stored
/// scorecard always covers the full course.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ScorecardRow {
    /// Assigned by the store; `None` until the row has been inserted.
    pub id: Option<i64>,
    pub player_name: String,
    pub tee_color: TeeColor,
    pub game_mode: GameMode,
    pub total_score: i32,
    pub hole_scores: Vec<i32>,
    /// RFC 3339, assigned by the store at insert time.
    pub created_at: Option<String>,
}

impl ScorecardRow {
    #[must_use]
    pub fn new(
        player_name: String,
        tee_color: TeeColor,
        game_mode: GameMode,
        hole_scores: Vec<i32>,
    ) -> Self {
        let total_score = hole_scores.iter().sum();
        Self {
            id: None,
            player_name,
            tee_color,
            game_mode,
            total_score,
            hole_scores,
            created_at: None,
        }
    }
}
