//! # Favorites Store
//!
//! Process-lifetime collection of favorite entries.
//!
//! ## Requirements
//!
//! - Insertion order is kept, entries are never reordered
//! - At most one entry per id
//! - Add and remove are all-or-nothing
//!
//! ## Implementation
//!
//! - Plain `Vec`, the collection is small (bounded by the number of Pokemon)
//! - Linear scans for lookups
//! - Nothing is persisted, a restart starts empty
use chrono::{DateTime, Utc};
use dex::{FavoriteEntry, NewFavorite};
use thiserror::Error;

pub const REQUIRED_FIELDS: &str = "id and name are required";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("{0}")]
    Validation(&'static str),

    #[error("Already in favorites")]
    Conflict,

    #[error("Not found in favorites")]
    NotFound,
}

#[derive(Debug, Default)]
pub struct FavoritesStore {
    entries: Vec<FavoriteEntry>,
}

impl FavoritesStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn list(&self) -> &[FavoriteEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, id: u32) -> bool {
        self.position(id).is_some()
    }

    pub fn add(&mut self, new: NewFavorite) -> Result<FavoriteEntry, StoreError> {
        self.add_at(new, Utc::now())
    }

    pub fn add_at(
        &mut self,
        new: NewFavorite,
        now: DateTime<Utc>,
    ) -> Result<FavoriteEntry, StoreError> {
        let (id, name) = match (new.id, new.name) {
            (Some(id), Some(name)) if id != 0 && !name.trim().is_empty() => (id, name),
            _ => return Err(StoreError::Validation(REQUIRED_FIELDS)),
        };

        if self.contains(id) {
            return Err(StoreError::Conflict);
        }

        let entry = FavoriteEntry {
            id,
            name,
            sprite: new.sprite.filter(|sprite| !sprite.is_empty()),
            added_at: now,
        };
        self.entries.push(entry.clone());

        Ok(entry)
    }

    pub fn remove(&mut self, id: u32) -> Result<FavoriteEntry, StoreError> {
        let index = self.position(id).ok_or(StoreError::NotFound)?;

        Ok(self.entries.remove(index))
    }

    fn position(&self, id: u32) -> Option<usize> {
        self.entries.iter().position(|entry| entry.id == id)
    }
}
