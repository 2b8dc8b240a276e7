use std::path::Path;

use common::url_path;
use resolver::AssetProbe;
use tracing::warn;
use walkdir::WalkDir;

use crate::config::SitePaths;

pub const STATIC_MOUNT: &str = "/static";
pub const AUDIO_EXTENSIONS: &[&str] = &["mp3", "flac"];

/// Filesystem-backed [`AssetProbe`]. Reads the directories on every call,
/// so files added between requests show up without a restart.
pub struct FsAssets<'a> {
    paths: &'a SitePaths,
}

impl<'a> FsAssets<'a> {
    pub fn new(paths: &'a SitePaths) -> Self {
        Self { paths }
    }
}

impl AssetProbe for FsAssets<'_> {
    fn cover_listing(&self) -> Vec<String> {
        list_files(&self.paths.covers)
    }

    fn audio_file(&self, title: &str) -> Option<String> {
        AUDIO_EXTENSIONS
            .iter()
            .map(|ext| format!("{}.{}", title, ext))
            .find(|name| self.paths.audio.join(name).is_file())
    }
}

/// Plain file names directly inside `dir`, sorted. A missing directory is empty.
pub fn list_files(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = WalkDir::new(dir)
        .follow_links(true)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .filter_map(|entry| entry.file_name().to_str().map(str::to_string))
        .collect();
    names.sort();
    names
}

/// Reads a text asset. Missing files are `None`; other failures are logged
/// and also reported as `None`.
pub async fn read_optional_text(path: &Path) -> Option<String> {
    match tokio::fs::read_to_string(path).await {
        Ok(text) => Some(text),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => None,
        Err(err) => {
            warn!("Failed to read {}: {}", path.display(), err);
            None
        }
    }
}

/// Public URL of a file below the static root, given its directory relative
/// to that root.
pub fn static_url(dir: &str, file: &str) -> String {
    url_path(STATIC_MOUNT, &[dir, file])
}

/// JPEG, PNG or WebP by extension, in any case (`jpg`, `jpeg`, `jpe`,
/// `png`, `webp`).
pub fn is_gallery_image(name: &str) -> bool {
    matches!(
        mime_guess::from_path(name).first_raw(),
        Some("image/jpeg") | Some("image/png") | Some("image/webp")
    )
}
