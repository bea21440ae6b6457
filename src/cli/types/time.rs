//! Time-related types: cache durations.

use crate::error::{FplError, Result};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Time-to-live for the bootstrap cache.
///
/// Parses Go-style durations as accepted on the command line: `30s`, `2m`,
/// `1h`, `500ms`, compound forms such as `1m30s`, or a bare number of
/// seconds. A zero duration disables caching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CacheTtl(pub Duration);

impl CacheTtl {
    pub fn new(duration: Duration) -> Self {
        Self(duration)
    }

    pub fn as_duration(&self) -> Duration {
        self.0
    }

    pub fn is_disabled(&self) -> bool {
        self.0.is_zero()
    }
}

impl Default for CacheTtl {
    fn default() -> Self {
        Self(Duration::from_secs(30))
    }
}

impl fmt::Display for CacheTtl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let millis = self.0.as_millis();
        if millis % 1000 == 0 {
            write!(f, "{}s", millis / 1000)
        } else {
            write!(f, "{}ms", millis)
        }
    }
}

impl FromStr for CacheTtl {
    type Err = FplError;

    fn from_str(s: &str) -> Result<Self> {
        let value = s.trim();
        let invalid = || FplError::InvalidDuration {
            value: s.to_string(),
        };

        if value.is_empty() {
            return Err(invalid());
        }
        if let Ok(secs) = value.parse::<u64>() {
            return Ok(Self(Duration::from_secs(secs)));
        }

        let mut total = Duration::ZERO;
        let mut rest = value;
        while !rest.is_empty() {
            let digits = rest
                .find(|c: char| !c.is_ascii_digit())
                .ok_or_else(invalid)?;
            if digits == 0 {
                return Err(invalid());
            }
            let amount: u64 = rest[..digits].parse().map_err(|_| invalid())?;
            rest = &rest[digits..];

            let unit_len = rest
                .find(|c: char| c.is_ascii_digit())
                .unwrap_or(rest.len());
            let unit = &rest[..unit_len];
            rest = &rest[unit_len..];

            let part = match unit {
                "ms" => Some(Duration::from_millis(amount)),
                "s" => Some(Duration::from_secs(amount)),
                "m" => amount.checked_mul(60).map(Duration::from_secs),
                "h" => amount.checked_mul(3600).map(Duration::from_secs),
                _ => return Err(invalid()),
            };
            total = part
                .and_then(|part| total.checked_add(part))
                .ok_or_else(invalid)?;
        }

        Ok(Self(total))
    }
}
