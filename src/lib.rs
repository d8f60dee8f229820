pub mod error;
pub mod leaderboard;
pub mod model;
pub mod score;
pub mod session;
pub mod storage;

pub use error::AppError;
pub use model::{Course, GameMode, Roster, ScoreTable, ScorecardRow, TeeColor};
pub use session::{Msg, RoundModel, run_round};
