//! ID types for Fantasy Premier League entities.

use crate::error::{FplError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for FPL player (element) IDs.
///
/// The bootstrap snapshot calls players "elements"; the id is the stable
/// identity used by `/element-summary/{id}/`.
///
/// # Examples
///
/// ```rust
/// use fpl_cli::PlayerId;
///
/// let id = PlayerId::new(355);
/// assert_eq!(id.as_u32(), 355);
/// assert_eq!(id.to_string(), "355");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u32);

impl PlayerId {
    /// Create a new PlayerId from a u32 value.
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the underlying u32 value.
    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PlayerId {
    type Err = FplError;

    fn from_str(s: &str) -> Result<Self> {
        s.trim()
            .parse()
            .map(Self)
            .map_err(|_| FplError::InvalidInput {
                message: format!("player ID must be a non-negative integer: {}", s),
            })
    }
}

/// Type-safe wrapper for Premier League team IDs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TeamId(pub u32);

impl TeamId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }
}

/// Type-safe wrapper for position (element type) IDs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PositionId(pub u32);

impl PositionId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }
}
