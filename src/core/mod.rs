//! Core utilities for the FPL CLI
//!
//! This module consolidates common utilities that are used across
//! the application:
//! - `cache`: Time-boxed in-memory caching with an injectable clock
//! - `http`: Default request headers and response helpers

pub mod cache;
pub mod http;

// Re-export commonly used items for convenience
pub use cache::{Clock, SystemClock, TtlCache};
pub use http::{default_header_map, truncate_body};
