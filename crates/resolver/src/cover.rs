use std::collections::HashSet;

use crate::normalize::{ascii_normalize, strip_parentheticals, tokens};
use crate::slug::{slugify, strip_extension};

/// Cover extensions in lookup priority order.
pub const COVER_EXTENSIONS: &[&str] = &["webp", "jpg", "jpeg", "png"];

/// Finds the cover image for a release in a directory listing.
///
/// Tries `<slug>.<ext>` for each supported extension first. Failing that,
/// picks the first image (in lexicographic order) whose normalized name
/// contains every word of the normalized release name, ignoring
/// parenthesized qualifiers. Returns the matching file name.
pub fn find_cover_for_release(release_name: &str, listing: &[String]) -> Option<String> {
    let slug = slugify(release_name);
    if !slug.is_empty() {
        for ext in COVER_EXTENSIONS {
            let candidate = format!("{}.{}", slug, ext);
            if listing.iter().any(|name| *name == candidate) {
                return Some(candidate);
            }
        }
    }

    let target = ascii_normalize(&strip_parentheticals(release_name));
    let target_tokens = tokens(&target);
    if target_tokens.is_empty() {
        return None;
    }

    let mut candidates: Vec<&String> = listing.iter().filter(|name| is_cover_image(name)).collect();
    candidates.sort();

    candidates
        .into_iter()
        .find(|name| {
            let normalized = ascii_normalize(strip_extension(name));
            let file_tokens: HashSet<&str> = tokens(&normalized).into_iter().collect();
            target_tokens.iter().all(|token| file_tokens.contains(token))
        })
        .cloned()
}

pub fn is_cover_image(name: &str) -> bool {
    match name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() => COVER_EXTENSIONS
            .iter()
            .any(|supported| ext.eq_ignore_ascii_case(supported)),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::{find_cover_for_release, is_cover_image};

    fn listing(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn falls_back_to_token_match_for_diacritics() {
        let files = listing(&["bludny-kruh.jpg"]);
        assert_eq!(
            find_cover_for_release("Bludný kruh (single)", &files),
            Some("bludny-kruh.jpg".to_string())
        );
    }

    #[test]
    fn exact_slug_prefers_webp() {
        let files = listing(&["night-drive.png", "night-drive.jpg", "night-drive.webp"]);
        assert_eq!(
            find_cover_for_release("Night Drive", &files),
            Some("night-drive.webp".to_string())
        );
        let files = listing(&["night-drive.png", "night-drive.jpeg"]);
        assert_eq!(
            find_cover_for_release("Night Drive", &files),
            Some("night-drive.jpeg".to_string())
        );
    }

    #[test]
    fn token_match_allows_extra_words() {
        let files = listing(&["cover - Night Drive EP 2023.PNG", "other.jpg"]);
        assert_eq!(
            find_cover_for_release("Night Drive", &files),
            Some("cover - Night Drive EP 2023.PNG".to_string())
        );
    }

    #[test]
    fn token_match_is_deterministic() {
        let files = listing(&["z night drive.jpg", "a night drive.jpg"]);
        assert_eq!(
            find_cover_for_release("Night Drive (live)", &files),
            Some("a night drive.jpg".to_string())
        );
    }

    #[test]
    fn missing_cover_is_none() {
        let files = listing(&["night.jpg", "drive.txt", "night drive.txt"]);
        assert_eq!(find_cover_for_release("Night Drive", &files), None);
        assert_eq!(find_cover_for_release("(single)", &files), None);
        assert_eq!(find_cover_for_release("Night Drive", &[]), None);
    }

    #[test]
    fn recognizes_image_names() {
        assert!(is_cover_image("a.JPG"));
        assert!(is_cover_image("a.webp"));
        assert!(!is_cover_image(".png"));
        assert!(!is_cover_image("a.gif"));
        assert!(!is_cover_image("png"));
    }
}
