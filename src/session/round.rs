use sql_middleware::middleware::ConfigAndPool;

use crate::error::AppError;
use crate::model::{Course, GameMode, Hole, Roster, ScoreTable, ScorecardRow, TeeColor};
use crate::score::finalize::finalize_round;
use crate::score::rankings::{RankedEntry, live_rankings};
use crate::score::stats::{IndividualStats, individual_stats};
use crate::storage::insert_scorecards;

/// In-memory state for one round in progress. Owned by a single scoring
/// session; every mutation happens through [`update`] in response to one
/// discrete user action.
#[derive(Debug, Clone)]
pub struct RoundModel {
    pub course: Course,
    pub tee: TeeColor,
    pub mode: GameMode,
    pub roster: Roster,
    pub scores: ScoreTable,
    /// 1-based number of the hole being played.
    pub current_hole: u8,
    pub finalized: bool,
    pub error: Option<AppError>,
}

impl RoundModel {
    /// Start a round on hole 1 with an empty score table. The roster and
    /// mode are fixed from here on.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the roster shape does not match the mode.
    pub fn new(
        course: Course,
        tee: TeeColor,
        mode: GameMode,
        roster: Roster,
    ) -> Result<Self, AppError> {
        match (&roster, mode.is_team_mode()) {
            (Roster::Solo(_), false) | (Roster::Teams(_), true) => {}
            _ => {
                return Err(AppError::Config(format!(
                    "roster shape does not match game mode {mode}"
                )));
            }
        }
        Ok(Self {
            course,
            tee,
            mode,
            roster,
            scores: ScoreTable::new(),
            current_hole: 1,
            finalized: false,
            error: None,
        })
    }

    #[must_use]
    pub fn hole(&self) -> &Hole {
        self.course.hole(self.current_hole)
    }

    /// What the scorer shows for a player on the current hole: recorded
    /// strokes, or par while nothing is recorded.
    #[must_use]
    pub fn displayed_score(&self, player: &str) -> i32 {
        let hole = self.hole();
        self.scores.displayed(player, hole.hole, hole.par)
    }

    #[must_use]
    pub fn individual(&self, player: &str) -> IndividualStats {
        individual_stats(&self.scores, &self.course, player)
    }

    #[must_use]
    pub fn rankings(&self) -> Vec<RankedEntry> {
        live_rankings(
            self.mode,
            &self.roster,
            &self.scores,
            &self.course,
            self.current_hole,
        )
    }
}

#[derive(Debug, Clone)]
pub enum Msg {
    /// One press of the +/- control for a player on a hole.
    AdjustStroke { player: String, hole: u8, delta: i32 },
    NextHole,
    PrevHole,
    Finalize,
    Persisted,
    Failed(AppError),
}

#[derive(Debug, Clone)]
pub enum Effect {
    Persist(Vec<ScorecardRow>),
}

/// Apply one message to the round state and return any effects to run.
///
/// # Panics
///
/// Panics on programming-contract violations: adjusting a stroke after
/// finalization, for a name not on the roster, or on a hole that is not on
/// the course.
pub fn update(model: &mut RoundModel, msg: Msg) -> Vec<Effect> {
    match msg {
        Msg::AdjustStroke {
            player,
            hole,
            delta,
        } => {
            assert!(!model.finalized, "round is already finalized");
            assert!(
                model.roster.contains_player(&player),
                "'{player}' is not on the roster"
            );
            let par = model.course.hole(hole).par;
            model.scores.adjust(&player, hole, delta, par);
            vec![]
        }
        Msg::NextHole => {
            if model.current_hole < model.course.hole_count() {
                model.current_hole += 1;
            }
            vec![]
        }
        Msg::PrevHole => {
            if model.current_hole > 1 {
                model.current_hole -= 1;
            }
            vec![]
        }
        Msg::Finalize => {
            assert!(!model.finalized, "round is already finalized");
            model.finalized = true;
            let rows = finalize_round(
                &model.course,
                model.tee,
                model.mode,
                &model.roster,
                &model.scores,
            );
            log::info!(
                "round finalized: {} scorecard(s) for course '{}'",
                rows.len(),
                model.course.name
            );
            vec![Effect::Persist(rows)]
        }
        Msg::Persisted => vec![],
        Msg::Failed(e) => {
            model.error = Some(e);
            vec![]
        }
    }
}

#[derive(Clone, Copy)]
pub struct Deps<'a> {
    pub config_and_pool: &'a ConfigAndPool,
}

/// Run one effect. Persistence is fire and forget from the round's point of
/// view: a failure is recorded on the model but nothing is retried.
pub async fn run_effect(effect: Effect, model: &RoundModel, deps: Deps<'_>) -> Msg {
    match effect {
        Effect::Persist(rows) => {
            match insert_scorecards(deps.config_and_pool, &model.course, &rows).await {
                Ok(()) => Msg::Persisted,
                Err(e) => Msg::Failed(AppError::from(e)),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{TeeDistances, Team};

    fn course() -> Course {
        Course {
            name: "test".to_string(),
            version: 1,
            holes: (1..=3)
                .map(|n| Hole {
                    hole: n,
                    par: 3,
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

    fn solo_model() -> RoundModel {
        let roster = Roster::solo(vec!["Ann".to_string(), "Bob".to_string()]).unwrap();
        RoundModel::new(course(), TeeColor::White, GameMode::StrokePlay, roster).unwrap()
    }

    #[test]
    fn hole_navigation_clamps_to_course() {
        let mut model = solo_model();
        update(&mut model, Msg::PrevHole);
        assert_eq!(model.current_hole, 1);
        for _ in 0..10 {
            update(&mut model, Msg::NextHole);
        }
        assert_eq!(model.current_hole, 3);
    }

    #[test]
    fn finalize_emits_one_persist_effect_with_all_rows() {
        let mut model = solo_model();
        update(
            &mut model,
            Msg::AdjustStroke {
                player: "Ann".to_string(),
                hole: 1,
                delta: 1,
            },
        );
        let effects = update(&mut model, Msg::Finalize);
        assert!(model.finalized);
        let [Effect::Persist(rows)] = &effects[..] else {
            panic!("expected a single persist effect");
        };
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].hole_scores, vec![4, 3, 3]);
    }

    #[test]
    #[should_panic(expected = "is not on the roster")]
    fn adjust_for_unknown_player_panics() {
        let mut model = solo_model();
        update(
            &mut model,
            Msg::AdjustStroke {
                player: "Zed".to_string(),
                hole: 1,
                delta: 1,
            },
        );
    }

    #[test]
    fn team_roster_in_solo_mode_is_rejected() {
        let team = Team {
            name: "Team One".to_string(),
            members: vec!["Ann".to_string(), "Bob".to_string()],
        };
        let roster = Roster::teams(vec![team], GameMode::BestBallDoubles).unwrap();
        let res = RoundModel::new(course(), TeeColor::Red, GameMode::StrokePlay, roster);
        assert!(res.is_err());
    }
}
