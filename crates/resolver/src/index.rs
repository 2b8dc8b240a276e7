use std::collections::HashMap;

use common::ReleaseCatalog;
use tracing::debug;

use crate::slug::slugify;

/// Bidirectional content key ↔ slug mapping, built once from the catalog.
#[derive(Clone, Debug, Default)]
pub struct SlugIndex {
    slug_to_key: HashMap<String, String>,
    key_to_slug: HashMap<String, String>,
}

impl SlugIndex {
    /// Walks releases in catalog order and songs in release order. The first
    /// song to claim a slug keeps it; later collisions get `-1`, `-2`, ...
    /// A key listed by several releases is indexed once.
    pub fn build(catalog: &ReleaseCatalog) -> Self {
        let mut index = Self::default();
        for release in catalog.releases() {
            for key in &release.songs {
                if index.key_to_slug.contains_key(key) {
                    continue;
                }
                let base = slugify(key);
                let slug = index.free_slug(&base);
                if slug != base {
                    debug!("Slug collision for {:?}; using {:?}", key, slug);
                }
                index.slug_to_key.insert(slug.clone(), key.clone());
                index.key_to_slug.insert(key.clone(), slug);
            }
        }
        index
    }

    /// `base`, or the first free numbered variant of it. An empty slug can't
    /// be routed, so an empty base always gets a number.
    fn free_slug(&self, base: &str) -> String {
        if !base.is_empty() && !self.slug_to_key.contains_key(base) {
            return base.to_string();
        }
        let mut n = 1usize;
        loop {
            let candidate = if base.is_empty() {
                n.to_string()
            } else {
                format!("{}-{}", base, n)
            };
            if !self.slug_to_key.contains_key(&candidate) {
                return candidate;
            }
            n += 1;
        }
    }

    pub fn key_for_slug(&self, slug: &str) -> Option<&str> {
        self.slug_to_key.get(slug).map(String::as_str)
    }

    pub fn slug_for_key(&self, key: &str) -> Option<&str> {
        self.key_to_slug.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.key_to_slug.len()
    }

    pub fn is_empty(&self) -> bool {
        self.key_to_slug.is_empty()
    }
}
