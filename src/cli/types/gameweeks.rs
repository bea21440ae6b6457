//! Gameweek filters: parsing, merging and compact formatting of inclusive ranges.
//!
//! A filter is built from one or more `--gw` values. Each value may hold
//! several tokens separated by `,`, `|` or whitespace, and each token is a
//! single gameweek (`5`) or an inclusive range (`1-3`). After every
//! successful [`GameweekFilter::add`] the stored ranges are sorted and
//! overlapping or adjacent ranges are merged, so the list is always the
//! minimal ordered cover of the requested gameweeks.
//!
//! # Examples
//!
//! ```rust
//! use fpl_cli::GameweekFilter;
//!
//! let mut filter = GameweekFilter::default();
//! filter.add("1|3-4").unwrap();
//! filter.add("2").unwrap();
//! assert_eq!(filter.to_string(), "1-4");
//! assert!(filter.includes(3));
//! assert!(!filter.includes(5));
//! ```

use crate::error::{FplError, Result};
use std::fmt;
use std::str::FromStr;

/// Inclusive range of gameweeks, `start <= end`, both at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameweekRange {
    pub start: u16,
    pub end: u16,
}

impl GameweekRange {
    pub fn new(start: u16, end: u16) -> Self {
        Self { start, end }
    }

    pub fn single(week: u16) -> Self {
        Self {
            start: week,
            end: week,
        }
    }

    pub fn contains(&self, round: u16) -> bool {
        round >= self.start && round <= self.end
    }
}

impl fmt::Display for GameweekRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.start == self.end {
            write!(f, "{}", self.start)
        } else {
            write!(f, "{}-{}", self.start, self.end)
        }
    }
}

impl FromStr for GameweekRange {
    type Err = FplError;

    fn from_str(token: &str) -> Result<Self> {
        let token = token.trim();
        if token.is_empty() {
            return Err(FplError::invalid_gameweek("gameweek token cannot be empty"));
        }

        if let Some((start, end)) = token.split_once('-') {
            let start = parse_gameweek(start)?;
            let end = parse_gameweek(end)?;
            if end < start {
                return Err(FplError::invalid_gameweek(format!(
                    "invalid gameweek range {}: end before start",
                    token
                )));
            }
            return Ok(Self { start, end });
        }

        parse_gameweek(token).map(Self::single)
    }
}

fn parse_gameweek(value: &str) -> Result<u16> {
    let value = value.trim();
    if value.is_empty() {
        return Err(FplError::invalid_gameweek("gameweek value cannot be empty"));
    }
    match value.parse::<u16>() {
        Ok(week) if week > 0 => Ok(week),
        _ => Err(FplError::invalid_gameweek(format!(
            "gameweek must be a positive integer: {}",
            value
        ))),
    }
}

fn split_tokens(value: &str) -> impl Iterator<Item = &str> {
    value
        .split(|c: char| c == ',' || c == '|' || c.is_whitespace())
        .filter(|token| !token.is_empty())
}

/// Normalized set of gameweek ranges. An empty filter matches every gameweek.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameweekFilter {
    ranges: Vec<GameweekRange>,
}

impl GameweekFilter {
    /// Parse every token in `value` and merge the result into the filter.
    ///
    /// Either all tokens are applied or, on the first malformed token, none are.
    pub fn add(&mut self, value: &str) -> Result<()> {
        if value.trim().is_empty() {
            return Err(FplError::invalid_gameweek("gameweek value cannot be empty"));
        }

        let parsed = split_tokens(value)
            .map(GameweekRange::from_str)
            .collect::<Result<Vec<_>>>()?;

        self.ranges.extend(parsed);
        self.normalize();
        Ok(())
    }

    /// Merge another filter's ranges into this one.
    pub fn extend(&mut self, other: &GameweekFilter) {
        self.ranges.extend_from_slice(&other.ranges);
        self.normalize();
    }

    pub fn includes(&self, round: u16) -> bool {
        self.ranges.is_empty() || self.ranges.iter().any(|r| r.contains(round))
    }

    pub fn ranges(&self) -> &[GameweekRange] {
        &self.ranges
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    fn normalize(&mut self) {
        self.ranges = merge_ranges(std::mem::take(&mut self.ranges));
    }
}

impl fmt::Display for GameweekFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.ranges.iter().map(|r| r.to_string()).collect();
        write!(f, "{}", parts.join(","))
    }
}

impl FromStr for GameweekFilter {
    type Err = FplError;

    fn from_str(s: &str) -> Result<Self> {
        let mut filter = Self::default();
        filter.add(s)?;
        Ok(filter)
    }
}

/// Sort by start (then end) and collapse ranges that overlap or touch.
fn merge_ranges(mut ranges: Vec<GameweekRange>) -> Vec<GameweekRange> {
    ranges.sort_by_key(|r| (r.start, r.end));

    let mut merged: Vec<GameweekRange> = Vec::with_capacity(ranges.len());
    for range in ranges {
        if let Some(current) = merged.last_mut() {
            if u32::from(range.start) <= u32::from(current.end) + 1 {
                current.end = current.end.max(range.end);
                continue;
            }
        }
        merged.push(range);
    }
    merged
}

/// Render observed gameweeks compactly, e.g. `[7, 1, 2, 3, 5, 8]` -> `"1-3,5,7-8"`.
///
/// Returns `"-"` when there is nothing to show.
pub fn format_gameweeks(weeks: &[u16]) -> String {
    if weeks.is_empty() {
        return "-".to_string();
    }

    let singles = weeks.iter().map(|&w| GameweekRange::single(w)).collect();
    merge_ranges(singles)
        .iter()
        .map(|r| r.to_string())
        .collect::<Vec<_>>()
        .join(",")
}
