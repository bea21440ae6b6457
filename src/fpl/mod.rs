//! Fantasy Premier League data source, name matching and report assembly.

pub mod http;
pub mod report;
pub mod search;
pub mod types;
