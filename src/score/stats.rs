use crate::model::{Course, ScoreTable, Team, format_to_par};

/// Running totals for one player, over recorded holes only.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IndividualStats {
    pub total_strokes: i32,
    pub to_par: i32,
}

impl IndividualStats {
    #[must_use]
    pub fn to_par_display(&self) -> String {
        format_to_par(self.to_par)
    }
}

/// Sum strokes and par across the holes this player has recorded. Unplayed
/// holes contribute nothing, so a player two holes in shows their relation
/// over those two holes, not over the whole course.
#[must_use]
pub fn individual_stats(table: &ScoreTable, course: &Course, player: &str) -> IndividualStats {
    let mut total_strokes = 0;
    let mut total_par = 0;
    for hole in &course.holes {
        if let Some(strokes) = table.recorded(player, hole.hole) {
            total_strokes += strokes;
            total_par += hole.par;
        }
    }
    IndividualStats {
        total_strokes,
        to_par: total_strokes - total_par,
    }
}

/// Best-ball running totals for one team.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TeamStats {
    pub total_strokes: i32,
    pub to_par: i32,
    /// Live best ball on the hole being played: unrecorded members count at
    /// par so the estimate renders before everyone has entered a score.
    pub current_hole_best: i32,
}

impl TeamStats {
    #[must_use]
    pub fn to_par_display(&self) -> String {
        format_to_par(self.to_par)
    }
}

/// Best-ball rule: a hole's team score is the minimum among members with a
/// recorded score there. Holes where no member recorded anything are left out
/// of the running total. Ties for best need no resolution; only the value
/// matters.
///
/// # Panics
///
/// Panics if `current_hole` is not on the course.
#[must_use]
pub fn team_stats(
    table: &ScoreTable,
    course: &Course,
    team: &Team,
    current_hole: u8,
) -> TeamStats {
    let mut total_strokes = 0;
    let mut total_par = 0;
    for hole in &course.holes {
        let best = team
            .members
            .iter()
            .filter_map(|m| table.recorded(m, hole.hole))
            .min();
        if let Some(best) = best {
            total_strokes += best;
            total_par += hole.par;
        }
    }

    let hole = course.hole(current_hole);
    let current_hole_best = team
        .members
        .iter()
        .map(|m| table.displayed(m, hole.hole, hole.par))
        .min()
        .unwrap_or(hole.par);

    TeamStats {
        total_strokes,
        to_par: total_strokes - total_par,
        current_hole_best,
    }
}

/// Whether `player` currently holds (or shares) the best ball for their team
/// on the given hole. Drives the scorer highlight in team modes.
///
/// # Panics
///
/// Panics if `hole` is not on the course.
#[must_use]
pub fn holds_best_ball(
    table: &ScoreTable,
    course: &Course,
    team: &Team,
    player: &str,
    hole: u8,
) -> bool {
    let stats = team_stats(table, course, team, hole);
    let par = course.hole(hole).par;
    table.displayed(player, hole, par) == stats.current_hole_best
}
