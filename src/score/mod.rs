pub mod finalize;
pub mod rankings;
pub mod skins;
pub mod stats;

pub use finalize::*;
pub use rankings::*;
pub use skins::*;
pub use stats::*;
