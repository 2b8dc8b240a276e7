use serde::Serialize;

pub const LYRICS_EXTENSION: &str = "txt";

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PlaylistEntry {
    pub content_key: String,
    pub slug: String,
    pub title: String,
    pub has_audio: bool,
    pub audio_file: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Navigation {
    pub index: usize,
    pub total: usize,
    pub prev: Option<String>,
    pub next: Option<String>,
}

/// Display title of a song: its content key without the lyrics extension.
pub fn song_title(content_key: &str) -> &str {
    match content_key.rsplit_once('.') {
        Some((stem, ext)) if ext.eq_ignore_ascii_case(LYRICS_EXTENSION) => stem,
        _ => content_key,
    }
}

/// Position of `slug` in the playlist with its neighbours.
pub fn navigate(playlist: &[PlaylistEntry], slug: &str) -> Option<Navigation> {
    let index = playlist.iter().position(|entry| entry.slug == slug)?;
    let prev = index
        .checked_sub(1)
        .and_then(|i| playlist.get(i))
        .map(|entry| entry.slug.clone());
    let next = playlist.get(index + 1).map(|entry| entry.slug.clone());
    Some(Navigation {
        index,
        total: playlist.len(),
        prev,
        next,
    })
}

#[cfg(test)]
mod tests {
    use super::{navigate, song_title, PlaylistEntry};

    fn entry(slug: &str) -> PlaylistEntry {
        PlaylistEntry {
            content_key: format!("{}.txt", slug),
            slug: slug.to_string(),
            title: slug.to_string(),
            has_audio: false,
            audio_file: None,
        }
    }

    #[test]
    fn four_song_navigation() {
        let playlist: Vec<PlaylistEntry> = ["a", "b", "c", "d"].iter().map(|s| entry(s)).collect();

        let first = navigate(&playlist, "a").unwrap();
        assert_eq!(first.index, 0);
        assert_eq!(first.prev, None);
        assert_eq!(first.next.as_deref(), Some("b"));

        let second = navigate(&playlist, "b").unwrap();
        assert_eq!(second.prev.as_deref(), Some("a"));
        assert_eq!(second.next.as_deref(), Some("c"));

        let third = navigate(&playlist, "c").unwrap();
        assert_eq!(third.prev.as_deref(), Some("b"));
        assert_eq!(third.next.as_deref(), Some("d"));

        let last = navigate(&playlist, "d").unwrap();
        assert_eq!(last.index, 3);
        assert_eq!(last.total, 4);
        assert_eq!(last.prev.as_deref(), Some("c"));
        assert_eq!(last.next, None);
    }

    #[test]
    fn unknown_slug_has_no_position() {
        let playlist = vec![entry("a")];
        assert!(navigate(&playlist, "z").is_none());
        assert!(navigate(&[], "a").is_none());
    }

    #[test]
    fn title_drops_lyrics_extension_only() {
        assert_eq!(song_title("bludný kruh.txt"), "bludný kruh");
        assert_eq!(song_title("Intro.TXT"), "Intro");
        assert_eq!(song_title("demo.mp3"), "demo.mp3");
        assert_eq!(song_title("untitled"), "untitled");
    }
}
