use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// A named, ordered set of songs. Songs are identified by their lyrics file
/// name (the content key), e.g. `bludny kruh.txt`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Release {
    pub name: String,
    #[serde(default)]
    pub songs: Vec<String>,
}

impl Release {
    pub fn new(name: impl Into<String>, songs: Vec<String>) -> Self {
        Self {
            name: name.into(),
            songs,
        }
    }
}

/// Releases in display order. The order decides which song wins a contested slug.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReleaseCatalog {
    releases: Vec<Release>,
}

impl ReleaseCatalog {
    pub fn new(releases: Vec<Release>) -> Self {
        Self { releases }
    }

    pub fn releases(&self) -> &[Release] {
        &self.releases
    }

    pub fn get(&self, name: &str) -> Option<&Release> {
        self.releases.iter().find(|release| release.name == name)
    }

    pub fn is_empty(&self) -> bool {
        self.releases.is_empty()
    }

    pub fn len(&self) -> usize {
        self.releases.len()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MerchItem {
    pub name: String,
    pub main_image: String,
    #[serde(default)]
    pub gallery: Vec<String>,
    #[serde(default)]
    pub description: String,
}

pub fn default_merch() -> Vec<MerchItem> {
    vec![
        MerchItem {
            name: "Black Logo T-Shirt".to_string(),
            main_image: "img/merch/tshirt-black/main.jpg".to_string(),
            gallery: vec![
                "img/merch/tshirt-black/main.jpg".to_string(),
                "img/merch/tshirt-black/front.jpg".to_string(),
                "img/merch/tshirt-black/back.jpg".to_string(),
                "img/merch/tshirt-black/detail.jpg".to_string(),
            ],
            description: "T-shirt with \"Silent Cry\" prints".to_string(),
        },
        MerchItem {
            name: "Coffee Mug".to_string(),
            main_image: "img/merch/mug/main.jpg".to_string(),
            gallery: vec!["img/merch/mug/main.jpg".to_string()],
            description: "Mug with logo".to_string(),
        },
        MerchItem {
            name: "Stickers Pack".to_string(),
            main_image: "img/merch/stickers/main.jpg".to_string(),
            gallery: vec!["img/merch/stickers/main.jpg".to_string()],
            description: "Set of stickers with band designs".to_string(),
        },
    ]
}

pub fn join_relpath(root: &Path, relpath: &str) -> PathBuf {
    let mut out = PathBuf::from(root);
    for part in relpath.split('/') {
        if part.is_empty() {
            continue;
        }
        out.push(part);
    }
    out
}

/// Builds a `/`-separated URL path from a mount point and relative segments,
/// percent-encoding each segment.
pub fn url_path(mount: &str, parts: &[&str]) -> String {
    let mut out = mount.trim_end_matches('/').to_string();
    for part in parts {
        for segment in part.split('/') {
            if segment.is_empty() {
                continue;
            }
            out.push('/');
            out.push_str(&url_escape(segment));
        }
    }
    out
}

pub fn url_escape(input: &str) -> String {
    let mut out = String::new();
    for byte in input.as_bytes() {
        match byte {
            b'A'..=b'Z'
            | b'a'..=b'z'
            | b'0'..=b'9'
            | b'-'
            | b'_'
            | b'.'
            | b'~' => out.push(*byte as char),
            b' ' => out.push_str("%20"),
            _ => out.push_str(&format!("%{:02X}", byte)),
        }
    }
    out
}
