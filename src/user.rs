//! # Viewer Specifications
//!
//! Client logic/relevant structures.
//!
//! ## Payloads
//!
//! Responses/requests between the viewer and the favorites server. All JSON.
//!
//! ### List
//! - `GET /api/favorites`
//! - 200 `{"success": true, "count": 2, "data": [entry, ...]}`, insertion order
//!
//! ### Add
//! - `POST /api/favorites` with `{"id": 25, "name": "pikachu", "sprite": "..."}`, sprite optional
//! - 201 `{"success": true, "message": "pikachu added to favorites!", "data": entry}`
//! - 400 when id or name is missing, 409 `"Already in favorites"` for a duplicate id
//!
//! ### Remove
//! - `DELETE /api/favorites/25`
//! - 200 `{"success": true, "message": "pikachu removed from favorites", "data": entry}`
//! - 404 `"Not found in favorites"`, 400 when the id is not a positive integer
//!
//! ### Entry
//! - `{"id": 25, "name": "pikachu", "sprite": "...", "addedAt": "2025-01-01T12:00:00.000Z"}`
//! - `addedAt` is set by the server, `sprite` is left out when absent
//!
//! ### Failure
//! - `{"success": false, "error": "..."}` for every error status
//!
//!
//!
//! ## Flow
//!
//! - On startup fetch the favorites list once and keep it as the mirror
//! - Searching shows a loading screen, then either the card or the error screen
//! - Left/right step through dex numbers 1 to 1010
//! - Shiny toggle swaps the sprite, showing a new Pokemon turns it off again
//! - The favorite button adds the shown Pokemon, or removes it if the mirror has it
//! - Only a successful response changes the mirror, using the entry the server sent back
//! - A failed favorite request leaves the mirror alone and shows an error notice
//!
//!
//!
//! ## Card
//!
//! - Number as `#025`, name upper-cased
//! - Sprite: official artwork, falling back to the plain front sprite
//! - Shiny sprite: official artwork shiny, then front shiny, then official artwork
//! - Stats labelled HP/ATK/DEF/SPA/SPD/SPE, bars scaled to 150
//! - Bars below 50 are low, below 80 medium, otherwise high
//! - Height and weight converted from decimetres and hectograms
