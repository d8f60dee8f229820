pub mod course;
pub mod roster;
pub mod score;
pub mod scorecard;

pub use course::*;
pub use roster::*;
pub use score::*;
pub use scorecard::*;
