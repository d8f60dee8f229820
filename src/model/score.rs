use ahash::RandomState;
use std::collections::HashMap;

/// Sparse table of recorded strokes: player name -> hole number -> strokes.
///
/// A player/hole pair with no entry is "unplayed": it displays as the hole's
/// par, but live aggregation skips it. Entries are only added or overwritten,
/// never removed, until the round is finalized.
#[derive(Clone, Debug, Default)]
pub struct ScoreTable {
    scores: HashMap<String, HashMap<u8, i32, RandomState>, RandomState>,
}

impl ScoreTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn recorded(&self, player: &str, hole: u8) -> Option<i32> {
        self.scores.get(player).and_then(|h| h.get(&hole)).copied()
    }

    /// Recorded strokes, or the hole's par when nothing is recorded yet.
    #[must_use]
    pub fn displayed(&self, player: &str, hole: u8, par: i32) -> i32 {
        self.recorded(player, hole).unwrap_or(par)
    }

    /// Apply a +1/-1 stroke adjustment. A player with no entry on the hole
    /// starts from par. Strokes never go below 1; a decrement at 1 records 1.
    /// Returns the value now recorded.
    ///
    /// # Panics
    ///
    /// Panics if `delta` is not -1 or +1.
    pub fn adjust(&mut self, player: &str, hole: u8, delta: i32, par: i32) -> i32 {
        assert!(delta == 1 || delta == -1, "stroke delta must be +1 or -1");
        let current = self.recorded(player, hole).unwrap_or(par);
        let next = (current + delta).max(1);
        self.record(player, hole, next);
        next
    }

    /// Overwrite a recorded score directly (scorecard edits).
    ///
    /// # Panics
    ///
    /// Panics if `strokes` is below 1.
    pub fn record(&mut self, player: &str, hole: u8, strokes: i32) {
        assert!(strokes >= 1, "recorded strokes must be at least 1");
        self.scores
            .entry(player.to_string())
            .or_default()
            .insert(hole, strokes);
    }

    #[must_use]
    pub fn holes_recorded(&self, player: &str) -> usize {
        self.scores.get(player).map_or(0, HashMap::len)
    }
}

/// Relation-to-par display contract: 0 is `"E"`, otherwise a signed integer
/// (`"+3"`, `"-2"`).
#[must_use]
pub fn format_to_par(rel: i32) -> String {
    if rel == 0 {
        "E".to_string()
    } else if rel > 0 {
        format!("+{rel}")
    } else {
        format!("{rel}")
    }
}
