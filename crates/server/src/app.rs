use axum::Router;
use tower_http::request_id::{MakeRequestUuid, SetRequestIdLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::api::api_router;
use crate::assets::STATIC_MOUNT;
use crate::pages::pages_router;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let web_root = state.paths.web_root.clone();
    let page = |name: &str| ServeFile::new(web_root.join(name));

    Router::new()
        .nest("/api/v1", api_router(state.clone()))
        .merge(pages_router(state.clone()))
        .route_service("/lyrics", page("lyrics.html"))
        .route_service("/gallery", page("gallery.html"))
        .route_service("/store", page("store.html"))
        .nest_service(STATIC_MOUNT, ServeDir::new(&state.paths.static_root))
        .fallback_service(ServeDir::new(&web_root))
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(TraceLayer::new_for_http())
}
