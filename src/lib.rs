//! Fantasy Premier League CLI Library
//!
//! Looks up a Premier League fantasy player by ID or fuzzy name match and
//! reports their gameweek-by-gameweek performance.
//!
//! ## Features
//!
//! - **Fuzzy Name Resolution**: Matches web name, full name, last name and
//!   known-as aliases, case and accent insensitive, with close alternatives
//! - **Gameweek Filters**: Repeatable `--gw` values such as `1-3`, `5|7`, `1,4 6-8`
//! - **Bootstrap Caching**: Time-boxed in-memory cache of the player snapshot
//! - **Flexible Output**: Aligned text tables or indented JSON
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use fpl_cli::{commands::player::*, CacheTtl, GameweekFilter};
//! use std::str::FromStr;
//!
//! # async fn example() -> fpl_cli::Result<()> {
//! let params = PlayerParams {
//!     id: None,
//!     name: Some("Haaland".to_string()),
//!     gameweeks: GameweekFilter::from_str("1-3")?,
//!     as_json: false,
//!     cache_ttl: CacheTtl::default(),
//!     base_url: fpl_cli::fpl::http::resolve_base_url(),
//! };
//!
//! handle_player(params).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Point the client at a different API root (a mirror or a local stub):
//! ```bash
//! export FPL_API_BASE_URL=http://localhost:8080/api
//! ```

pub mod cli;
pub mod commands;
pub mod core;
pub mod error;
pub mod fpl;

// Re-export commonly used types
pub use cli::types::{CacheTtl, GameweekFilter, GameweekRange, PlayerId, PositionId, TeamId};
pub use error::{FplError, Result};
pub use fpl::types::{Bootstrap, HistoryEntry, Player, Position, Team};

pub const BASE_URL_ENV_VAR: &str = "FPL_API_BASE_URL";
