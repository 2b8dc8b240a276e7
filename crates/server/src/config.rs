use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use common::{default_merch, join_relpath, MerchItem, ReleaseCatalog};
use serde::{Deserialize, Serialize};

pub const CONFIG_VERSION: u32 = 1;

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub version: u32,
    pub bind_host: String,
    pub port: u16,
    pub web_root: String,
    pub static_root: String,
    pub lyrics_dir: String,
    pub audio_dir: String,
    pub covers_dir: String,
    pub gallery_dir: String,
    pub gallery_exclude: Vec<String>,
    pub requests_path: String,
    pub releases: ReleaseCatalog,
    pub merch: Vec<MerchItem>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            bind_host: "0.0.0.0".to_string(),
            port: 3000,
            web_root: "web".to_string(),
            static_root: "static".to_string(),
            lyrics_dir: "lyrics".to_string(),
            audio_dir: "audio".to_string(),
            covers_dir: "img/albums".to_string(),
            gallery_dir: "gallery".to_string(),
            gallery_exclude: vec!["IMG_3209.webp".to_string()],
            requests_path: "requests.txt".to_string(),
            releases: ReleaseCatalog::default(),
            merch: default_merch(),
        }
    }
}

/// Absolute locations derived from a [`SiteConfig`]. Content directories are
/// relative to the static root, everything else to the config file.
#[derive(Clone, Debug)]
pub struct SitePaths {
    pub web_root: PathBuf,
    pub static_root: PathBuf,
    pub lyrics: PathBuf,
    pub descriptions: PathBuf,
    pub audio: PathBuf,
    pub covers: PathBuf,
    pub gallery: PathBuf,
    pub thumbs: PathBuf,
    pub requests: PathBuf,
}

impl SitePaths {
    pub fn resolve(config_path: &Path, config: &SiteConfig) -> Self {
        let static_root = resolve_path(config_path, &config.static_root);
        let lyrics = join_relpath(&static_root, &config.lyrics_dir);
        let gallery = join_relpath(&static_root, &config.gallery_dir);
        Self {
            web_root: resolve_path(config_path, &config.web_root),
            descriptions: lyrics.join("descriptions"),
            audio: join_relpath(&static_root, &config.audio_dir),
            covers: join_relpath(&static_root, &config.covers_dir),
            thumbs: gallery.join("thumbs"),
            requests: resolve_path(config_path, &config.requests_path),
            lyrics,
            gallery,
            static_root,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Yaml(serde_yaml::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(err) => write!(f, "io error: {}", err),
            ConfigError::Yaml(err) => write!(f, "yaml error: {}", err),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::Io(err)
    }
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::Yaml(err)
    }
}

pub fn config_path_from_env() -> PathBuf {
    match env::var("BANDSITE_CONFIG") {
        Ok(value) if !value.trim().is_empty() => PathBuf::from(value),
        _ => default_config_path(),
    }
}

fn default_config_path() -> PathBuf {
    match env::current_exe() {
        Ok(exe) => exe
            .parent()
            .map(|dir| dir.join("config.yaml"))
            .unwrap_or_else(|| PathBuf::from("config.yaml")),
        Err(_) => PathBuf::from("config.yaml"),
    }
}

pub fn load_or_create_config(path: &Path) -> Result<(SiteConfig, bool), ConfigError> {
    if path.exists() {
        let contents = fs::read_to_string(path)?;
        let mut config: SiteConfig = serde_yaml::from_str(&contents)?;
        apply_fixups(&mut config);
        return Ok((config, false));
    }

    let config = SiteConfig::default();
    save_config(path, &config)?;
    Ok((config, true))
}

fn apply_fixups(config: &mut SiteConfig) {
    let defaults = SiteConfig::default();
    if config.version < CONFIG_VERSION {
        config.version = CONFIG_VERSION;
    }
    if config.port == 0 {
        config.port = defaults.port;
    }
    if config.bind_host.trim().is_empty() {
        config.bind_host = defaults.bind_host;
    }
    for (value, fallback) in [
        (&mut config.web_root, defaults.web_root),
        (&mut config.static_root, defaults.static_root),
        (&mut config.lyrics_dir, defaults.lyrics_dir),
        (&mut config.audio_dir, defaults.audio_dir),
        (&mut config.covers_dir, defaults.covers_dir),
        (&mut config.gallery_dir, defaults.gallery_dir),
        (&mut config.requests_path, defaults.requests_path),
    ] {
        if value.trim().is_empty() {
            *value = fallback;
        }
    }
}

pub fn save_config(path: &Path, config: &SiteConfig) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let contents = serde_yaml::to_string(config)?;
    fs::write(path, contents)?;
    Ok(())
}

pub fn resolve_path(config_path: &Path, value: &str) -> PathBuf {
    let raw = PathBuf::from(value);
    if raw.is_absolute() {
        return raw;
    }
    let base = config_path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    base.join(raw)
}
