use crate::model::{Course, GameMode, Roster, ScoreTable, ScorecardRow, TeeColor};

/// Turn a finished round into one persistable row per roster entry.
///
/// Per-hole values fall back to the hole's par wherever nothing was recorded.
/// That differs on purpose from the live aggregation rule (which skips
/// unplayed holes): a stored scorecard covers the whole course, and the total
/// is the sum of the stored per-hole values.
///
/// Team entries store the team name with best-ball per-hole values, again at
/// par for holes no member recorded.
#[must_use]
pub fn finalize_round(
    course: &Course,
    tee: TeeColor,
    mode: GameMode,
    roster: &Roster,
    table: &ScoreTable,
) -> Vec<ScorecardRow> {
    match roster {
        Roster::Solo(names) => names
            .iter()
            .map(|name| {
                let hole_scores = course
                    .holes
                    .iter()
                    .map(|h| table.recorded(name, h.hole).unwrap_or(h.par))
                    .collect();
                ScorecardRow::new(name.clone(), tee, mode, hole_scores)
            })
            .collect(),
        Roster::Teams(teams) => teams
            .iter()
            .map(|team| {
                let hole_scores = course
                    .holes
                    .iter()
                    .map(|h| {
                        team.members
                            .iter()
                            .filter_map(|m| table.recorded(m, h.hole))
                            .min()
                            .unwrap_or(h.par)
                    })
                    .collect();
                ScorecardRow::new(team.name.clone(), tee, mode, hole_scores)
            })
            .collect(),
    }
}
