//! # Pokedex Client
//!
//! Everything the viewer does that is not drawing.
//!
//! - [`lookup`] queries the public Pokemon data API
//! - [`favorites`] mirrors the favorites server and sends add/remove requests
//! - [`viewer`] holds the Pokemon on screen and projects it into a plain [`viewer::Card`]
//! - [`view`] is the presentation boundary, a terminal implementation lives in the binary
//! - [`session`] ties these together the way the page controller does
//!
//! ## Failure handling
//!
//! Every network failure is logged and turned into either the error screen
//! (lookups) or an error notice (favorites). Nothing is retried and a failed
//! favorite request never touches the mirror.
pub mod favorites;
pub mod lookup;
pub mod models;
pub mod session;
pub mod utils;
pub mod view;
pub mod viewer;
