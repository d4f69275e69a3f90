use axum::{Json, extract::rejection::JsonRejection};
use dex::NewFavorite;

use crate::error::AppError::{self, InvalidId, MalformedPayload};

/// Strict id parsing for path segments: ASCII digits only, no sign, no
/// surrounding text, non-zero and within `u32`.
pub fn parse_id(raw: &str) -> Result<u32, AppError> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(InvalidId);
    }

    match raw.parse::<u32>() {
        Ok(0) | Err(_) => Err(InvalidId),
        Ok(id) => Ok(id),
    }
}

pub fn get_new_favorite(
    payload: Result<Json<NewFavorite>, JsonRejection>,
) -> Result<NewFavorite, AppError> {
    payload
        .map(|Json(new)| new)
        .map_err(|rejection| MalformedPayload(rejection.body_text()))
}
