//! Type-safe wrappers for values accepted on the command line.

pub mod gameweeks;
pub mod ids;
pub mod time;

pub use gameweeks::{format_gameweeks, GameweekFilter, GameweekRange};
pub use ids::{PlayerId, PositionId, TeamId};
pub use time::CacheTtl;
