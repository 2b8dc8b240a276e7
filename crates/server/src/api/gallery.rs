use axum::{extract::State, Json};
use serde::Serialize;

use crate::assets::{is_gallery_image, list_files, static_url};
use crate::state::{AppState, JsonResult, ListResponse};
use crate::utils::blocking;

#[derive(Serialize)]
pub struct GalleryImage {
    pub file: String,
    pub url: String,
    pub thumb_url: Option<String>,
}

pub async fn list_gallery(State(state): State<AppState>) -> JsonResult<ListResponse<GalleryImage>> {
    let items = blocking(move || gallery_images(&state)).await?;
    Ok(Json(ListResponse::new(items)))
}

fn gallery_images(state: &AppState) -> Vec<GalleryImage> {
    let config = &state.config;
    let thumbs_dir = format!("{}/thumbs", config.gallery_dir.trim_end_matches('/'));
    list_files(&state.paths.gallery)
        .into_iter()
        .filter(|name| is_gallery_image(name))
        .filter(|name| !config.gallery_exclude.iter().any(|excluded| excluded == name))
        .map(|file| GalleryImage {
            url: static_url(&config.gallery_dir, &file),
            thumb_url: state
                .paths
                .thumbs
                .join(&file)
                .is_file()
                .then(|| static_url(&thumbs_dir, &file)),
            file,
        })
        .collect()
}
