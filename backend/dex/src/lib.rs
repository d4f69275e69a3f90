//! # Dex
//!
//! Wire types shared by the favorites server and its clients.
//!
//! Every JSON body that crosses the HTTP boundary is one of these, so the
//! server and the client agree on the contract at compile time.
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize, Serializer};

pub const FAVORITES_PATH: &str = "/api/favorites";

/// A favorited Pokemon as held by the server.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteEntry {
    pub id: u32,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sprite: Option<String>,
    #[serde(serialize_with = "iso_millis")]
    pub added_at: DateTime<Utc>,
}

/// Body of an add request. Fields stay optional so that presence is checked
/// by the store rather than by the decoder.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct NewFavorite {
    #[serde(default)]
    pub id: Option<u32>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sprite: Option<String>,
}

impl NewFavorite {
    pub fn new(id: u32, name: impl Into<String>, sprite: Option<String>) -> Self {
        Self {
            id: Some(id),
            name: Some(name.into()),
            sprite,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct FavoritesList {
    pub success: bool,
    pub count: usize,
    pub data: Vec<FavoriteEntry>,
}

impl FavoritesList {
    pub fn new(data: Vec<FavoriteEntry>) -> Self {
        Self {
            success: true,
            count: data.len(),
            data,
        }
    }
}

/// Response to a successful add or remove, carrying the affected entry.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct FavoriteChange {
    pub success: bool,
    pub message: String,
    pub data: FavoriteEntry,
}

impl FavoriteChange {
    pub fn added(data: FavoriteEntry) -> Self {
        Self {
            success: true,
            message: format!("{} added to favorites!", data.name),
            data,
        }
    }

    pub fn removed(data: FavoriteEntry) -> Self {
        Self {
            success: true,
            message: format!("{} removed from favorites", data.name),
            data,
        }
    }
}

/// Error envelope, `{"success": false, "error": "..."}`.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Failure {
    pub success: bool,
    pub error: String,
}

impl Failure {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Endpoints {
    pub get_all_favorites: String,
    pub add_favorite: String,
    pub remove_favorite: String,
}

/// Served from `GET /`.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Index {
    pub message: String,
    pub endpoints: Endpoints,
}

impl Default for Index {
    fn default() -> Self {
        Self {
            message: "Pokedex API is running!".to_string(),
            endpoints: Endpoints {
                get_all_favorites: format!("GET {FAVORITES_PATH}"),
                add_favorite: format!("POST {FAVORITES_PATH}"),
                remove_favorite: format!("DELETE {FAVORITES_PATH}/:id"),
            },
        }
    }
}

// Same shape as a browser's `Date.toISOString()`.
fn iso_millis<S: Serializer>(time: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&time.to_rfc3339_opts(SecondsFormat::Millis, true))
}
