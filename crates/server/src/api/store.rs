use axum::{extract::State, Json};
use common::url_path;
use serde::Serialize;

use crate::assets::STATIC_MOUNT;
use crate::state::{AppState, JsonResult, ListResponse};

#[derive(Serialize)]
pub struct MerchView {
    pub name: String,
    pub description: String,
    pub main_image: String,
    pub gallery: Vec<String>,
}

pub async fn list_merch(State(state): State<AppState>) -> JsonResult<ListResponse<MerchView>> {
    let items = state
        .config
        .merch
        .iter()
        .map(|item| MerchView {
            name: item.name.clone(),
            description: item.description.clone(),
            main_image: url_path(STATIC_MOUNT, &[item.main_image.as_str()]),
            gallery: item
                .gallery
                .iter()
                .map(|image| url_path(STATIC_MOUNT, &[image.as_str()]))
                .collect(),
        })
        .collect();
    Ok(Json(ListResponse::new(items)))
}
