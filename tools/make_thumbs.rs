use std::env;
use std::path::{Path, PathBuf};

use image::imageops::FilterType;
use image::{DynamicImage, ImageFormat};
use tracing::warn;
use tracing_subscriber::EnvFilter;
use walkdir::WalkDir;

const MAX_EDGE: u32 = 800;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into());
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let gallery_dir = env::args()
        .nth(1)
        .or_else(|| env::var("GALLERY_DIR").ok())
        .unwrap_or_else(|| "gallery".to_string());

    let saved = make_thumbs(Path::new(&gallery_dir))?;
    for path in &saved {
        println!("Saved: {}", path.display());
    }
    println!("Thumbnails written: {}", saved.len());
    Ok(())
}

/// Writes `<gallery>/thumbs/<name>` for every WebP image directly in `gallery`.
fn make_thumbs(gallery: &Path) -> Result<Vec<PathBuf>, std::io::Error> {
    let out_dir = gallery.join("thumbs");
    std::fs::create_dir_all(&out_dir)?;

    let mut saved = Vec::new();
    for entry in WalkDir::new(gallery)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_map(Result::ok)
    {
        if !entry.file_type().is_file() || !is_webp(entry.path()) {
            continue;
        }
        let output = out_dir.join(entry.file_name());
        match write_thumb(entry.path(), &output) {
            Ok(()) => saved.push(output),
            Err(err) => warn!("Skipping {}: {}", entry.path().display(), err),
        }
    }
    Ok(saved)
}

fn is_webp(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("webp"))
        .unwrap_or(false)
}

fn write_thumb(input: &Path, output: &Path) -> Result<(), image::ImageError> {
    let img = DynamicImage::ImageRgb8(image::open(input)?.to_rgb8());
    let (width, height) = fit_within(img.width(), img.height(), MAX_EDGE);
    let thumb = if (width, height) == (img.width(), img.height()) {
        img
    } else {
        img.resize_exact(width, height, FilterType::Lanczos3)
    };
    thumb.save_with_format(output, ImageFormat::WebP)
}

/// Scales down to fit a `max`×`max` box, keeping the aspect ratio. Never enlarges.
fn fit_within(width: u32, height: u32, max: u32) -> (u32, u32) {
    if width <= max && height <= max {
        return (width, height);
    }
    let scale = f64::min(
        f64::from(max) / f64::from(width),
        f64::from(max) / f64::from(height),
    );
    let scaled = |value: u32| ((f64::from(value) * scale).round() as u32).clamp(1, max);
    (scaled(width), scaled(height))
}
