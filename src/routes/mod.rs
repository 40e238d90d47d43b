//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the board API under `/api` and serves the static browser
//! front end as the router fallback. The API is the rendering collaborator
//! contract: any UI that can issue these requests and display the snapshot
//! can drive the board.

pub mod board;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{delete, get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Directory holding the static front end, overridable via `STATIC_DIR`.
fn static_dir() -> String {
    std::env::var("STATIC_DIR").unwrap_or_else(|_| "www".to_owned())
}

pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let static_service = ServeDir::new(static_dir()).append_index_html_on_directories(true);

    Router::new()
        .route("/api/board", get(board::get_board))
        .route("/api/lists", post(board::create_list))
        .route("/api/lists/{id}", delete(board::delete_list))
        .route("/api/lists/{id}/cards", post(board::create_card))
        .route("/api/cards/{id}", delete(board::delete_card))
        .route("/api/cards/{id}/move", post(board::move_card))
        .route("/healthz", get(healthz))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
        .fallback_service(static_service)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
