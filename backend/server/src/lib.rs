//! Favorites service for the Pokedex viewer.
//!
//! # Endpoints
//!
//! | Method & Path | Success | Failure |
//! |---|---|---|
//! | `GET /` | 200, endpoint listing | |
//! | `GET /api/favorites` | 200 `{success, count, data}` | |
//! | `POST /api/favorites` | 201 `{success, message, data}` | 400 missing id/name, 409 duplicate |
//! | `DELETE /api/favorites/{id}` | 200 `{success, message, data}` | 400 bad id, 404 unknown id |
//!
//! Every failure body is `{"success": false, "error": "..."}`.
//!
//! # Notes
//!
//! - Favorites only live as long as the process, a restart starts from an empty list
//! - Any origin may call the API, the frontend is served from elsewhere
//! - The store sits behind one mutex, each request holds it for the whole operation
//!
//! # Setup
//!
//! Run locally.
//! ```sh
//! RUST_LOG=info PORT=3000 cargo run -p backend
//! ```
//!
//! Run with collection size logging.
//! ```sh
//! cargo run -p backend --features server/verbose
//! ```
use std::sync::Arc;

use anyhow::Context;
use axum::{
    Router,
    http::{Method, header::CONTENT_TYPE},
    routing::{delete, get},
};
use tokio::{net::TcpListener, signal::ctrl_c};
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

pub mod config;
pub mod error;
pub mod routes;
pub mod state;
pub mod store;
pub mod utils;

use config::Config;
use dex::FAVORITES_PATH;
use routes::{
    add_handler, fallback_handler, index_handler, list_handler, method_not_allowed_handler,
    remove_handler,
};
use state::State;

pub fn build_router(state: Arc<State>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(state.config.cors_max_age);

    Router::new()
        .route(
            "/",
            get(index_handler).fallback(method_not_allowed_handler),
        )
        .route(
            FAVORITES_PATH,
            get(list_handler)
                .post(add_handler)
                .fallback(method_not_allowed_handler),
        )
        .route(
            &format!("{FAVORITES_PATH}/{{id}}"),
            delete(remove_handler).fallback(method_not_allowed_handler),
        )
        .fallback(fallback_handler)
        .layer(cors)
        .with_state(state)
}

pub async fn start_server() -> anyhow::Result<()> {
    info!("Loading config...");
    let config = Config::load()?;

    info!("Initializing state...");
    let state = State::new(config);

    info!("Starting server...");
    let app = build_router(state.clone());

    let address = state.config.address();
    info!("Binding to {address}");

    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {address}"))?;
    info!("Server running on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down"),
            Err(e) => {
                tracing::error!("Failed to install Ctrl+C handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};

        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                tracing::error!("Failed to install signal handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
