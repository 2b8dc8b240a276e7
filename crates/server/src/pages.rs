use axum::{
    extract::{Path as AxumPath, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, get_service},
    Form, Router,
};
use tower_http::services::ServeFile;
use tracing::{error, info, warn};

use crate::booking::append_booking;
use crate::state::{AppState, BookingForm};
use crate::utils::{blocking, html_response, json_error_response, redirect_to};

pub const PLAYER_PAGE: &str = "player.html";
pub const LYRICS_LISTING: &str = "/lyrics";

pub fn pages_router(state: AppState) -> Router {
    let request_page = ServeFile::new(state.paths.web_root.join("request.html"));
    Router::new()
        .route("/request", get_service(request_page).post(submit_booking))
        .route("/lyrics/:slug", get(player_page))
        .with_state(state)
}

async fn submit_booking(State(state): State<AppState>, Form(form): Form<BookingForm>) -> Response {
    let writer = state.clone();
    let stored = blocking(move || {
        append_booking(&writer.requests_lock, &writer.paths.requests, &form)
    })
    .await;
    match stored {
        Err(rejection) => rejection.into_response(),
        Ok(Ok(())) => {
            info!("Stored booking request in {}", state.paths.requests.display());
            redirect_to("/")
        }
        Ok(Err(err)) => {
            error!(
                "Failed to append booking request to {}: {}",
                state.paths.requests.display(),
                err
            );
            json_error_response(StatusCode::INTERNAL_SERVER_ERROR, "failed to store request")
        }
    }
}

/// Player page for a known song; unknown slugs go back to the lyrics listing.
async fn player_page(State(state): State<AppState>, AxumPath(slug): AxumPath<String>) -> Response {
    if state.resolver.key_for_slug(&slug).is_none() {
        return redirect_to(LYRICS_LISTING);
    }
    let path = state.paths.web_root.join(PLAYER_PAGE);
    match tokio::fs::read_to_string(&path).await {
        Ok(html) => html_response(StatusCode::OK, html),
        Err(err) => {
            warn!("Failed to read {}: {}", path.display(), err);
            json_error_response(StatusCode::NOT_FOUND, "player page not found")
        }
    }
}
