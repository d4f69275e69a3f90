//! # Pokemon Data Lookup
//!
//! Read-only, unauthenticated source of Pokemon data.
//!
//! Failures are kept apart so the error screen can say what went wrong:
//! an unknown name is not the same as an unreachable API or a payload we
//! cannot read. Nothing is retried.
use reqwest::{Client, StatusCode};
use thiserror::Error;
use tracing::error;

use crate::{models::Pokemon, utils::sanitize};

#[derive(Error, Debug)]
pub enum LookupError {
    #[error("Nothing to search for")]
    EmptyQuery,

    #[error("No Pokemon named {0:?}")]
    NotFound(String),

    #[error("Pokemon data unavailable (HTTP {0})")]
    Unavailable(StatusCode),

    #[error("Unreadable Pokemon data: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

#[derive(Clone)]
pub struct PokeApi {
    http: Client,
    base_url: String,
}

impl PokeApi {
    pub fn new(http: Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub async fn fetch(&self, query: &str) -> Result<Pokemon, LookupError> {
        self.fetch_inner(query)
            .await
            .inspect_err(|e| error!("Fetch error: {e}"))
    }

    async fn fetch_inner(&self, query: &str) -> Result<Pokemon, LookupError> {
        let clean = sanitize(query);
        if clean.is_empty() {
            return Err(LookupError::EmptyQuery);
        }

        let res = self
            .http
            .get(format!("{}/{clean}", self.base_url))
            .send()
            .await?;

        match res.status() {
            StatusCode::NOT_FOUND => return Err(LookupError::NotFound(clean)),
            status if !status.is_success() => return Err(LookupError::Unavailable(status)),
            _ => {}
        }

        let body = res.bytes().await?;

        Ok(serde_json::from_slice(&body)?)
    }
}
