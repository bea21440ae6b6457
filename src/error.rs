//! Error types for the FPL CLI

use thiserror::Error;

#[cfg(test)]
mod tests;

pub type Result<T> = std::result::Result<T, FplError>;

#[derive(Error, Debug)]
pub enum FplError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error("fpl api {path}: {status}: {body}")]
    Api {
        path: String,
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("{message}")]
    InvalidInput { message: String },

    #[error("{message}")]
    InvalidGameweek { message: String },

    #[error("Invalid duration: {value}")]
    InvalidDuration { value: String },

    #[error("player name cannot be empty")]
    EmptyQuery,

    #[error("no players found matching {query:?}")]
    NoMatch { query: String },

    #[error("player with ID {id} not found in bootstrap data")]
    PlayerNotFound { id: u32 },
}

impl FplError {
    pub(crate) fn invalid_gameweek(message: impl Into<String>) -> Self {
        FplError::InvalidGameweek {
            message: message.into(),
        }
    }
}
