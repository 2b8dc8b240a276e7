use axum::{extract::State, Json};
use resolver::{song_title, LYRICS_EXTENSION};
use serde::Serialize;

use crate::assets::{list_files, read_optional_text};
use crate::config::SitePaths;
use crate::state::{AppState, JsonResult, ListResponse};
use crate::utils::blocking;

#[derive(Serialize)]
pub struct LyricsItem {
    pub file: String,
    pub title: String,
    pub slug: Option<String>,
    pub content: Option<String>,
    pub description: Option<String>,
}

/// Every lyrics file on disk, whether or not a release lists it.
pub async fn list_lyrics(State(state): State<AppState>) -> JsonResult<ListResponse<LyricsItem>> {
    let suffix = format!(".{}", LYRICS_EXTENSION);
    let lyrics_dir = state.paths.lyrics.clone();
    let files: Vec<String> = blocking(move || list_files(&lyrics_dir))
        .await?
        .into_iter()
        .filter(|name| name.ends_with(&suffix))
        .collect();

    let mut items = Vec::with_capacity(files.len());
    for file in files {
        let (content, description) = read_lyrics(&state.paths, &file).await;
        items.push(LyricsItem {
            title: song_title(&file).to_string(),
            slug: state.resolver.slug_for_key(&file).map(str::to_string),
            file,
            content,
            description,
        });
    }
    Ok(Json(ListResponse::new(items)))
}

/// Lyrics text and the optional `descriptions/<title>_description.txt` for a song.
pub async fn read_lyrics(
    paths: &SitePaths,
    content_key: &str,
) -> (Option<String>, Option<String>) {
    let content = read_optional_text(&paths.lyrics.join(content_key)).await;
    let description_file = format!(
        "{}_description.{}",
        song_title(content_key),
        LYRICS_EXTENSION
    );
    let description = read_optional_text(&paths.descriptions.join(description_file)).await;
    (content, description)
}
