pub mod gallery;
pub mod lyrics;
pub mod releases;
pub mod store;

use axum::{response::IntoResponse, routing::get, Json, Router};

use crate::state::{AppState, HealthResponse};

pub fn api_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/releases", get(releases::list_releases))
        .route("/songs/:slug", get(releases::get_song))
        .route("/lyrics", get(lyrics::list_lyrics))
        .route("/gallery", get(gallery::list_gallery))
        .route("/store", get(store::list_merch))
        .with_state(state)
}

async fn health() -> impl IntoResponse {
    Json(HealthResponse { status: "ok" })
}
