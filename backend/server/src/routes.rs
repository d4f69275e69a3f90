use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State as AxumState, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use dex::{FavoriteChange, FavoritesList, Index, NewFavorite};
use tracing::{info, warn};

use crate::{
    error::AppError,
    state::State,
    utils::{get_new_favorite, parse_id},
};

pub async fn index_handler() -> impl IntoResponse {
    Json(Index::default())
}

pub async fn list_handler(AxumState(state): AxumState<Arc<State>>) -> impl IntoResponse {
    let data = state.favorites.lock().list().to_vec();

    #[cfg(feature = "verbose")]
    info!("Listing {} favorites", data.len());

    Json(FavoritesList::new(data))
}

pub async fn add_handler(
    AxumState(state): AxumState<Arc<State>>,
    payload: Result<Json<NewFavorite>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let new = get_new_favorite(payload).inspect_err(|e| warn!("Rejected add: {e}"))?;

    let entry = {
        let mut favorites = state.favorites.lock();
        let entry = favorites.add(new);

        #[cfg(feature = "verbose")]
        info!("Favorites now holds {}", favorites.len());

        entry
    }
    .inspect_err(|e| warn!("Rejected add: {e}"))?;

    info!("Added favorite {} ({})", entry.id, entry.name);

    Ok((StatusCode::CREATED, Json(FavoriteChange::added(entry))))
}

pub async fn remove_handler(
    AxumState(state): AxumState<Arc<State>>,
    Path(raw_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&raw_id).inspect_err(|_| warn!("Rejected remove of {raw_id:?}"))?;

    let removed = state
        .favorites
        .lock()
        .remove(id)
        .inspect_err(|e| warn!("Rejected remove of {id}: {e}"))?;

    info!("Removed favorite {} ({})", removed.id, removed.name);

    Ok(Json(FavoriteChange::removed(removed)))
}

pub async fn fallback_handler() -> AppError {
    AppError::RouteNotFound
}

pub async fn method_not_allowed_handler() -> AppError {
    AppError::MethodNotAllowed
}
