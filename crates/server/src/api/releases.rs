use axum::{
    extract::{Path as AxumPath, State},
    http::StatusCode,
    Json,
};
use resolver::PlaylistEntry;
use serde::Serialize;
use tracing::debug;

use crate::assets::{static_url, FsAssets};
use crate::state::{AppState, JsonResult, ListResponse};
use crate::utils::{blocking, json_error};

use super::lyrics::read_lyrics;

#[derive(Serialize)]
pub struct ReleaseItem {
    pub name: String,
    pub slug: String,
    pub cover_url: Option<String>,
    pub songs: Vec<TrackItem>,
}

#[derive(Serialize, Clone)]
pub struct TrackItem {
    pub slug: String,
    pub title: String,
    pub content_key: String,
    pub has_audio: bool,
    pub audio_url: Option<String>,
}

#[derive(Serialize)]
pub struct SongResponse {
    pub slug: String,
    pub title: String,
    pub content_key: String,
    pub release: String,
    pub cover_url: Option<String>,
    pub audio_url: Option<String>,
    pub lyrics: Option<String>,
    pub description: Option<String>,
    pub index: usize,
    pub total: usize,
    pub prev: Option<String>,
    pub next: Option<String>,
    pub playlist: Vec<TrackItem>,
}

pub async fn list_releases(State(state): State<AppState>) -> JsonResult<ListResponse<ReleaseItem>> {
    let scan = state.clone();
    let releases = blocking(move || scan.resolver.releases(&FsAssets::new(&scan.paths))).await?;
    let items = releases
        .into_iter()
        .map(|release| ReleaseItem {
            cover_url: release
                .cover
                .as_deref()
                .map(|file| static_url(&state.config.covers_dir, file)),
            songs: track_items(&state, &release.songs),
            name: release.name,
            slug: release.slug,
        })
        .collect();
    Ok(Json(ListResponse::new(items)))
}

pub async fn get_song(
    State(state): State<AppState>,
    AxumPath(slug): AxumPath<String>,
) -> JsonResult<SongResponse> {
    let scan = state.clone();
    let wanted = slug.clone();
    let song = blocking(move || scan.resolver.song(&wanted, &FsAssets::new(&scan.paths))).await?;
    let Some(song) = song else {
        debug!("Unknown song slug {:?}", slug);
        return Err(json_error(StatusCode::NOT_FOUND, "song not found"));
    };

    let (lyrics, description) = read_lyrics(&state.paths, &song.content_key).await;
    let config = &state.config;
    Ok(Json(SongResponse {
        cover_url: song
            .cover
            .as_deref()
            .map(|file| static_url(&config.covers_dir, file)),
        audio_url: song
            .audio_file
            .as_deref()
            .map(|file| static_url(&config.audio_dir, file)),
        playlist: track_items(&state, &song.playlist),
        index: song.navigation.index,
        total: song.navigation.total,
        prev: song.navigation.prev,
        next: song.navigation.next,
        slug: song.slug,
        title: song.title,
        content_key: song.content_key,
        release: song.release,
        lyrics,
        description,
    }))
}

fn track_items(state: &AppState, playlist: &[PlaylistEntry]) -> Vec<TrackItem> {
    playlist
        .iter()
        .map(|entry| TrackItem {
            slug: entry.slug.clone(),
            title: entry.title.clone(),
            content_key: entry.content_key.clone(),
            has_audio: entry.has_audio,
            audio_url: entry
                .audio_file
                .as_deref()
                .map(|file| static_url(&state.config.audio_dir, file)),
        })
        .collect()
}
