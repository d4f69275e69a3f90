//! # Favorites Sync
//!
//! Local mirror of the favorites server.
//!
//! ## Flow
//!
//! - Mirror is filled once from `GET /api/favorites` at startup
//! - Membership checks only look at the mirror, no round trip
//! - Toggling sends an add or a remove depending on membership
//! - The mirror only changes from a successful response body, never from
//!   what we asked for
//! - Any failure leaves the mirror as it was
//!
//! Mutations take `&mut self`, so one favorite action has to finish before
//! the next can start.
use dex::{FAVORITES_PATH, Failure, FavoriteChange, FavoriteEntry, FavoritesList, NewFavorite};
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{error, info};

use crate::models::Pokemon;

#[derive(Error, Debug)]
pub enum SyncError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("{error}")]
    Rejected { status: StatusCode, error: String },

    #[error("Unexpected status {0}")]
    UnexpectedStatus(StatusCode),

    #[error("Malformed response: {0}")]
    Malformed(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Toggled {
    Added(FavoriteEntry),
    Removed(FavoriteEntry),
}

pub struct FavoritesSync {
    http: Client,
    base_url: String,
    mirror: Vec<FavoriteEntry>,
}

impl FavoritesSync {
    pub fn new(http: Client, backend_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: backend_url.into().trim_end_matches('/').to_string(),
            mirror: Vec::new(),
        }
    }

    pub fn favorites(&self) -> &[FavoriteEntry] {
        &self.mirror
    }

    pub fn is_favorite(&self, id: u32) -> bool {
        self.mirror.iter().any(|entry| entry.id == id)
    }

    pub async fn load(&mut self) -> Result<usize, SyncError> {
        let res = self.http.get(self.url(None)).send().await;
        let list: FavoritesList = read(res, StatusCode::OK)
            .await
            .inspect_err(|e| error!("Failed to fetch favorites: {e}"))?;

        info!("Loaded {} favorites", list.data.len());
        self.mirror = list.data;

        Ok(self.mirror.len())
    }

    pub async fn add(&mut self, pokemon: &Pokemon) -> Result<FavoriteEntry, SyncError> {
        let new = NewFavorite::new(
            pokemon.id,
            pokemon.name.clone(),
            pokemon.sprites.front_default.clone(),
        );

        let res = self.http.post(self.url(None)).json(&new).send().await;
        let change: FavoriteChange = read(res, StatusCode::CREATED)
            .await
            .inspect_err(|e| error!("Failed to add favorite: {e}"))?;

        if !self.is_favorite(change.data.id) {
            self.mirror.push(change.data.clone());
        }

        Ok(change.data)
    }

    pub async fn remove(&mut self, id: u32) -> Result<FavoriteEntry, SyncError> {
        let res = self.http.delete(self.url(Some(id))).send().await;
        let change: FavoriteChange = read(res, StatusCode::OK)
            .await
            .inspect_err(|e| error!("Failed to remove favorite: {e}"))?;

        self.mirror.retain(|entry| entry.id != change.data.id);

        Ok(change.data)
    }

    pub async fn toggle(&mut self, pokemon: &Pokemon) -> Result<Toggled, SyncError> {
        if self.is_favorite(pokemon.id) {
            self.remove(pokemon.id).await.map(Toggled::Removed)
        } else {
            self.add(pokemon).await.map(Toggled::Added)
        }
    }

    fn url(&self, id: Option<u32>) -> String {
        match id {
            Some(id) => format!("{}{FAVORITES_PATH}/{id}", self.base_url),
            None => format!("{}{FAVORITES_PATH}", self.base_url),
        }
    }
}

async fn read<T: DeserializeOwned>(
    res: Result<Response, reqwest::Error>,
    expected: StatusCode,
) -> Result<T, SyncError> {
    let res = res?;
    let status = res.status();
    let body = res.bytes().await?;

    if status == expected {
        return Ok(serde_json::from_slice(&body)?);
    }

    match serde_json::from_slice::<Failure>(&body) {
        Ok(failure) => Err(SyncError::Rejected {
            status,
            error: failure.error,
        }),
        Err(_) => Err(SyncError::UnexpectedStatus(status)),
    }
}
