//! # Pokedex Documentation
//!
//! Pokemon viewer backed by a public Pokemon data API, with an optional
//! favorites list kept by a small server.
//!
//!
//!
//! # General Infrastructure
//! - The viewer talks to the public Pokemon data API directly for lookups
//! - Favorites go through our own server (`backend`), which keeps them in memory
//! - The server allows any origin, the viewer is hosted separately
//! - No database, a server restart empties the favorites list
//!
//!
//!
//! # Crates
//!
//! - `backend`: server binary, `pokedex-server`
//! - `server`: favorites store and HTTP routes
//! - `dex`: JSON bodies shared by server and client
//! - `client`: lookups, favorites mirror, viewer model and the `pokedex` CLI
//! - `tester`: replays the add/list/remove scenario against a running server
//!
//!
//!
//! # Notes
//!
//! ## Single lock
//! The favorites list is one `Vec` behind one mutex. Every request holds the
//! lock for its whole operation, so a duplicate add racing another add still
//! leaves exactly one entry. Lookups are linear, which is fine for a list
//! bounded by the number of Pokemon.
//!
//! ## Lookup errors
//! Unknown Pokemon, an unreachable data API and an unreadable payload are
//! separate errors. The viewer shows one error screen either way but says
//! which one happened.
//!
//!
//!
//! # Setup
//!
//! View current docs.
//! ```sh
//! cargo doc --open
//! ```
//!
//! Generate docs in `target/doc/pokedex/index.html`.
//! ```sh
//! cargo doc
//! ```
//!
//!
//!
//! ## Running
//!
//! Start the server.
//! ```sh
//! RUST_LOG=info cargo run -p backend
//! ```
//!
//! Look up a Pokemon.
//! ```sh
//! cargo run -p client -- show pikachu --shiny
//! ```
//!
//! Browse interactively.
//! ```sh
//! cargo run -p client -- --backend http://localhost:3000 browse
//! ```
//!
//! Smoke test a running server.
//! ```sh
//! BACKEND_URL=http://localhost:3000 cargo run -p tester
//! ```
//!
//!
//!
//! ## Configuration
//!
//! Server
//! - `PORT`: listen port, default `3000`
//! - `HOST`: bind address, default `0.0.0.0`
//! - `CORS_MAX_AGE_SECS`: preflight cache, default `3600`
//! - `RUST_LOG`: log filter, default `info`
//!
//! Client
//! - `POKEDEX_BACKEND` / `--backend`: favorites server, default `http://localhost:3000`
//! - `POKEDEX_POKEAPI` / `--pokeapi`: Pokemon data API base
//! - `RUST_LOG`: log filter, default `warn`

pub mod user;
