use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::error::AppError;

/// Scoring rule for the round. Fixed at setup; also fixes whether the roster
/// holds solo players or teams.
#[derive(
    Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumString,
)]
pub enum GameMode {
    #[strum(serialize = "stroke_play")]
    StrokePlay,
    #[strum(serialize = "match_play")]
    MatchPlay,
    #[strum(serialize = "best_ball_doubles")]
    BestBallDoubles,
    #[strum(serialize = "best_ball_triples")]
    BestBallTriples,
}

impl GameMode {
    #[must_use]
    pub fn team_size(self) -> Option<usize> {
        match self {
            GameMode::BestBallDoubles => Some(2),
            GameMode::BestBallTriples => Some(3),
            GameMode::StrokePlay | GameMode::MatchPlay => None,
        }
    }

    #[must_use]
    pub fn is_team_mode(self) -> bool {
        self.team_size().is_some()
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Team {
    pub name: String,
    pub members: Vec<String>,
}

/// Round roster: entirely solo players or entirely teams, never mixed.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub enum Roster {
    Solo(Vec<String>),
    Teams(Vec<Team>),
}

impl Roster {
    /// # Errors
    ///
    /// Will return `Err` if `names` is empty or contains a duplicate.
    pub fn solo(names: Vec<String>) -> Result<Self, AppError> {
        if names.is_empty() {
            return Err(AppError::Config("roster needs at least one player".into()));
        }
        check_unique(&names)?;
        Ok(Roster::Solo(names))
    }

    /// # Errors
    ///
    /// Will return `Err` if `mode` is not a team mode, a team has the wrong
    /// member count for the mode, or any team or member name repeats.
    pub fn teams(teams: Vec<Team>, mode: GameMode) -> Result<Self, AppError> {
        let Some(size) = mode.team_size() else {
            return Err(AppError::Config(format!(
                "{mode} takes solo players, not teams"
            )));
        };
        if teams.is_empty() {
            return Err(AppError::Config("roster needs at least one team".into()));
        }
        for team in &teams {
            if team.members.len() != size {
                return Err(AppError::Config(format!(
                    "team '{}' has {} members, {mode} needs {size}",
                    team.name,
                    team.members.len()
                )));
            }
        }
        let team_names: Vec<String> = teams.iter().map(|t| t.name.clone()).collect();
        check_unique(&team_names)?;
        let members: Vec<String> = teams.iter().flat_map(|t| t.members.clone()).collect();
        check_unique(&members)?;
        Ok(Roster::Teams(teams))
    }

    /// Every individual in the round, in roster order.
    #[must_use]
    pub fn player_names(&self) -> Vec<&str> {
        match self {
            Roster::Solo(names) => names.iter().map(String::as_str).collect(),
            Roster::Teams(teams) => teams
                .iter()
                .flat_map(|t| t.members.iter().map(String::as_str))
                .collect(),
        }
    }

    /// One name per roster entry: player names for solo rounds, team names
    /// for team rounds.
    #[must_use]
    pub fn entry_names(&self) -> Vec<&str> {
        match self {
            Roster::Solo(names) => names.iter().map(String::as_str).collect(),
            Roster::Teams(teams) => teams.iter().map(|t| t.name.as_str()).collect(),
        }
    }

    #[must_use]
    pub fn contains_player(&self, name: &str) -> bool {
        self.player_names().iter().any(|n| *n == name)
    }
}

fn check_unique(names: &[String]) -> Result<(), AppError> {
    for (i, name) in names.iter().enumerate() {
        if names[..i].contains(name) {
            return Err(AppError::Config(format!(
                "name '{name}' appears more than once in the roster"
            )));
        }
    }
    Ok(())
}
