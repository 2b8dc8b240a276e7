//! Release catalog lookups for the site: song slugs, playlists with
//! previous/next navigation, and cover images matched from a directory
//! listing.
//!
//! Nothing here touches the filesystem. Directory listings and audio lookups
//! come in through [`AssetProbe`], so every operation is a plain computation
//! over in-memory data and "not found" is always `None`.

mod cover;
mod index;
mod normalize;
mod playlist;
mod slug;

pub use cover::{find_cover_for_release, is_cover_image, COVER_EXTENSIONS};
pub use index::SlugIndex;
pub use normalize::{ascii_normalize, strip_parentheticals};
pub use playlist::{navigate, song_title, Navigation, PlaylistEntry, LYRICS_EXTENSION};
pub use slug::{slugify, strip_extension};

use common::{Release, ReleaseCatalog};
use serde::Serialize;

/// Filesystem facts the resolver needs, supplied per request by the caller.
pub trait AssetProbe {
    /// File names in the cover image directory.
    fn cover_listing(&self) -> Vec<String>;
    /// File name of the audio for a song title (`<title>.mp3`, then
    /// `<title>.flac`), if one exists.
    fn audio_file(&self, title: &str) -> Option<String>;
}

#[derive(Clone, Debug, Serialize)]
pub struct ReleaseView {
    pub name: String,
    /// `slugify(name)`, for anchors and display only. It is not deduplicated,
    /// may be empty, and no route resolves it.
    pub slug: String,
    pub cover: Option<String>,
    pub songs: Vec<PlaylistEntry>,
}

#[derive(Clone, Debug, Serialize)]
pub struct SongView {
    pub slug: String,
    pub content_key: String,
    pub title: String,
    pub release: String,
    pub cover: Option<String>,
    pub audio_file: Option<String>,
    pub navigation: Navigation,
    pub playlist: Vec<PlaylistEntry>,
}

/// Immutable catalog plus the slug index derived from it.
#[derive(Clone, Debug)]
pub struct Resolver {
    catalog: ReleaseCatalog,
    index: SlugIndex,
}

impl Resolver {
    pub fn new(catalog: ReleaseCatalog) -> Self {
        let index = SlugIndex::build(&catalog);
        Self { catalog, index }
    }

    pub fn catalog(&self) -> &ReleaseCatalog {
        &self.catalog
    }

    pub fn index(&self) -> &SlugIndex {
        &self.index
    }

    pub fn key_for_slug(&self, slug: &str) -> Option<&str> {
        self.index.key_for_slug(slug)
    }

    pub fn slug_for_key(&self, key: &str) -> Option<&str> {
        self.index.slug_for_key(key)
    }

    /// First release, in catalog order, listing the song behind `slug`.
    pub fn release_of(&self, slug: &str) -> Option<&Release> {
        let key = self.index.key_for_slug(slug)?;
        self.catalog
            .releases()
            .iter()
            .find(|release| release.songs.iter().any(|song| song == key))
    }

    pub fn playlist<P: AssetProbe + ?Sized>(
        &self,
        release_name: &str,
        probe: &P,
    ) -> Option<Vec<PlaylistEntry>> {
        let release = self.catalog.get(release_name)?;
        Some(self.build_playlist(release, probe))
    }

    pub fn cover_for<P: AssetProbe + ?Sized>(&self, release_name: &str, probe: &P) -> Option<String> {
        find_cover_for_release(release_name, &probe.cover_listing())
    }

    /// Every release in catalog order with its cover and playlist.
    pub fn releases<P: AssetProbe + ?Sized>(&self, probe: &P) -> Vec<ReleaseView> {
        let listing = probe.cover_listing();
        self.catalog
            .releases()
            .iter()
            .map(|release| ReleaseView {
                name: release.name.clone(),
                slug: slugify(&release.name),
                cover: find_cover_for_release(&release.name, &listing),
                songs: self.build_playlist(release, probe),
            })
            .collect()
    }

    /// Player data for one song, or `None` when the slug is unknown.
    pub fn song<P: AssetProbe + ?Sized>(&self, slug: &str, probe: &P) -> Option<SongView> {
        let key = self.index.key_for_slug(slug)?;
        let release = self.release_of(slug)?;
        let playlist = self.build_playlist(release, probe);
        let navigation = navigate(&playlist, slug)?;
        let entry = playlist[navigation.index].clone();
        Some(SongView {
            slug: slug.to_string(),
            content_key: key.to_string(),
            title: entry.title,
            release: release.name.clone(),
            cover: self.cover_for(&release.name, probe),
            audio_file: entry.audio_file,
            navigation,
            playlist,
        })
    }

    fn build_playlist<P: AssetProbe + ?Sized>(
        &self,
        release: &Release,
        probe: &P,
    ) -> Vec<PlaylistEntry> {
        release
            .songs
            .iter()
            .filter_map(|key| {
                let slug = self.index.slug_for_key(key)?;
                let title = song_title(key);
                let audio_file = probe.audio_file(title);
                Some(PlaylistEntry {
                    content_key: key.clone(),
                    slug: slug.to_string(),
                    title: title.to_string(),
                    has_audio: audio_file.is_some(),
                    audio_file,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use common::{Release, ReleaseCatalog};

    use super::{AssetProbe, Resolver};

    struct MemoryProbe {
        covers: Vec<String>,
        audio: HashSet<String>,
    }

    impl AssetProbe for MemoryProbe {
        fn cover_listing(&self) -> Vec<String> {
            self.covers.clone()
        }

        fn audio_file(&self, title: &str) -> Option<String> {
            ["mp3", "flac"]
                .iter()
                .map(|ext| format!("{}.{}", title, ext))
                .find(|name| self.audio.contains(name))
        }
    }

    fn resolver() -> Resolver {
        Resolver::new(ReleaseCatalog::new(vec![
            Release::new("Bludný kruh (single)", vec!["bludný kruh.txt".to_string()]),
            Release::new(
                "Night Drive",
                vec![
                    "Intro.txt".to_string(),
                    "bludný kruh.txt".to_string(),
                    "Night Drive.txt".to_string(),
                    "Outro.txt".to_string(),
                ],
            ),
        ]))
    }

    fn probe() -> MemoryProbe {
        MemoryProbe {
            covers: vec!["bludny-kruh.jpg".to_string(), "night-drive.webp".to_string()],
            audio: ["Intro.flac", "Night Drive.mp3", "Night Drive.flac"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }

    #[test]
    fn song_view_uses_first_release_listing_the_song() {
        let resolver = resolver();
        let song = resolver.song("bludn-kruh", &probe()).unwrap();
        assert_eq!(song.release, "Bludný kruh (single)");
        assert_eq!(song.title, "bludný kruh");
        assert_eq!(song.cover.as_deref(), Some("bludny-kruh.jpg"));
        assert_eq!(song.navigation.total, 1);
        assert_eq!(song.navigation.prev, None);
        assert_eq!(song.navigation.next, None);
    }

    #[test]
    fn playlist_reports_audio_in_release_order() {
        let resolver = resolver();
        let playlist = resolver.playlist("Night Drive", &probe()).unwrap();
        let slugs: Vec<&str> = playlist.iter().map(|e| e.slug.as_str()).collect();
        assert_eq!(slugs, vec!["intro", "bludn-kruh", "night-drive", "outro"]);
        assert_eq!(playlist[0].audio_file.as_deref(), Some("Intro.flac"));
        assert!(!playlist[1].has_audio);
        assert_eq!(playlist[2].audio_file.as_deref(), Some("Night Drive.mp3"));
        assert!(resolver.playlist("Missing", &probe()).is_none());
    }

    #[test]
    fn unknown_slug_is_none() {
        let resolver = resolver();
        assert!(resolver.song("nope", &probe()).is_none());
        assert!(resolver.release_of("nope").is_none());
        assert!(resolver.key_for_slug("nope").is_none());
    }

    #[test]
    fn releases_listing_resolves_covers() {
        let resolver = resolver();
        let releases = resolver.releases(&probe());
        assert_eq!(releases.len(), 2);
        assert_eq!(releases[0].slug, "bludn-kruh-single");
        assert_eq!(releases[1].cover.as_deref(), Some("night-drive.webp"));
        assert_eq!(releases[1].songs.len(), 4);
        assert_eq!(resolver.index().len(), 4);
    }

    #[test]
    fn release_slugs_are_display_only() {
        let resolver = Resolver::new(ReleaseCatalog::new(vec![
            Release::new("Live!", vec!["a.txt".to_string()]),
            Release::new("Live?", vec!["b.txt".to_string()]),
            Release::new("Žíř", vec!["c.txt".to_string()]),
        ]));
        let slugs: Vec<String> = resolver
            .releases(&probe())
            .into_iter()
            .map(|release| release.slug)
            .collect();
        assert_eq!(slugs, vec!["live", "live", ""]);
        assert!(resolver.key_for_slug("live").is_none());
        assert_eq!(resolver.song("c", &probe()).unwrap().release, "Žíř");
    }
}
