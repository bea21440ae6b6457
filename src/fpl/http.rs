//! HTTP access to the public FPL API.

use std::sync::Arc;
use std::time::Duration;

use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::{
    cli::types::PlayerId,
    core::{
        cache::{Clock, SystemClock, TtlCache},
        http::{default_header_map, truncate_body, ERROR_BODY_LIMIT, REQUEST_TIMEOUT_SECS},
    },
    error::FplError,
    fpl::types::{Bootstrap, HistoryEntry, PlayerSummary},
    Result, BASE_URL_ENV_VAR,
};


/// Root of the public Fantasy Premier League API.
pub const FPL_BASE_URL: &str = "https://fantasy.premierleague.com/api";

/// Base URL from `FPL_API_BASE_URL`, falling back to [`FPL_BASE_URL`].
pub fn resolve_base_url() -> String {
    std::env::var(BASE_URL_ENV_VAR)
        .ok()
        .map(|url| url.trim().to_string())
        .filter(|url| !url.is_empty())
        .unwrap_or_else(|| FPL_BASE_URL.to_string())
}

/// Read-only client for `/bootstrap-static/` and `/element-summary/{id}/`.
///
/// The bootstrap snapshot is kept in a [`TtlCache`]; player histories are
/// always fetched fresh.
pub struct FplClient<C: Clock = SystemClock> {
    client: Client,
    base_url: String,
    bootstrap_cache: TtlCache<Arc<Bootstrap>, C>,
}

impl FplClient<SystemClock> {
    pub fn new(base_url: impl Into<String>, cache_ttl: Duration) -> Result<Self> {
        Self::with_clock(base_url, cache_ttl, SystemClock)
    }
}

impl<C: Clock> FplClient<C> {
    pub fn with_clock(base_url: impl Into<String>, cache_ttl: Duration, clock: C) -> Result<Self> {
        let client = Client::builder()
            .default_headers(default_header_map()?)
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            bootstrap_cache: TtlCache::with_clock(cache_ttl, clock),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the bootstrap snapshot, serving it from cache while fresh.
    pub async fn bootstrap(&mut self) -> Result<Arc<Bootstrap>> {
        if let Some(cached) = self.bootstrap_cache.get() {
            debug!("bootstrap cache hit");
            return Ok(Arc::clone(cached));
        }

        debug!(
            ttl_ms = self.bootstrap_cache.ttl().as_millis() as u64,
            "bootstrap cache miss"
        );
        let bootstrap = Arc::new(self.get_json::<Bootstrap>("/bootstrap-static/").await?);
        debug!(
            players = bootstrap.players.len(),
            teams = bootstrap.teams.len(),
            positions = bootstrap.positions.len(),
            "bootstrap loaded"
        );

        self.bootstrap_cache.put(Arc::clone(&bootstrap));
        Ok(bootstrap)
    }

    /// Fetch the per-gameweek history for one player.
    pub async fn player_history(&self, id: PlayerId) -> Result<Vec<HistoryEntry>> {
        let summary: PlayerSummary = self
            .get_json(&format!("/element-summary/{}/", id))
            .await?;
        debug!(player = id.as_u32(), entries = summary.history.len(), "history loaded");
        Ok(summary.history)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "GET");

        let res = self.client.get(&url).send().await?;
        let status = res.status();
        if !status.is_success() {
            let body = read_error_body(res).await;
            return Err(FplError::Api {
                path: path.to_string(),
                status,
                body: truncate_body(&body).to_string(),
            });
        }

        let bytes = res.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

/// Read at most [`ERROR_BODY_LIMIT`] bytes of a failed response for diagnostics.
async fn read_error_body(mut res: Response) -> String {
    let mut buf = Vec::with_capacity(ERROR_BODY_LIMIT);
    while buf.len() < ERROR_BODY_LIMIT {
        match res.chunk().await {
            Ok(Some(chunk)) => buf.extend_from_slice(&chunk),
            _ => break,
        }
    }
    buf.truncate(ERROR_BODY_LIMIT);
    String::from_utf8_lossy(&buf).into_owned()
}
