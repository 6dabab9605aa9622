/// Artwork loading and thumbnail cache
///
/// Project artwork ships as ordinary image files under `assets/images`.
/// At startup the application warms a thumbnail cache in the background so
/// grids render downscaled JPEGs instead of decoding full-size artwork on
/// the UI thread. A missing or undecodable file is skipped; the views draw
/// a placeholder for any artwork without a cached thumbnail.

use image::imageops::FilterType;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Bounding box of generated thumbnails (longest side)
pub const THUMBNAIL_SIZE: u32 = 512;

/// Where the bundled artwork lives, relative to the working directory
const ASSETS_DIR: &str = "assets/images";

/// Artwork formats picked up by the cache warmer
const IMAGE_EXTENSIONS: [&str; 5] = ["jpg", "jpeg", "png", "webp", "bmp"];

/// The bundled artwork directory.
pub fn assets_dir() -> PathBuf {
    PathBuf::from(ASSETS_DIR)
}

/// Full path of a bundled artwork file referenced by the catalog.
pub fn resolve(file_name: &str) -> PathBuf {
    assets_dir().join(file_name)
}

/// The thumbnail cache directory, created on first use.
/// Returns ~/.cache/atelier/thumbnails on Linux.
pub fn thumbnail_cache_dir() -> PathBuf {
    let mut path = dirs::cache_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(std::env::temp_dir);

    path.push("atelier");
    path.push("thumbnails");

    // Best effort; generation falls through to None if this failed
    let _ = fs::create_dir_all(&path);

    path
}

/// Expected thumbnail path for an artwork file (does not generate).
pub fn thumbnail_path(file_name: &str) -> PathBuf {
    let stem = Path::new(file_name)
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| file_name.to_string());
    thumbnail_cache_dir().join(format!("{stem}.jpg"))
}

/// Check if a thumbnail already exists for an artwork file.
pub fn thumbnail_exists(file_name: &str) -> bool {
    thumbnail_path(file_name).exists()
}

/// The best available full-size source for the detail view: the original
/// artwork if it exists, else the cached thumbnail, else nothing.
pub fn display_source(file_name: &str) -> Option<PathBuf> {
    let original = resolve(file_name);
    if original.exists() {
        return Some(original);
    }
    let thumbnail = thumbnail_path(file_name);
    thumbnail.exists().then_some(thumbnail)
}

/// Scan the assets directory and generate any missing thumbnails.
/// Runs in a background thread to avoid blocking the UI.
///
/// Returns `(artwork file name, thumbnail path)` pairs for every artwork
/// with a usable thumbnail.
pub async fn warm_cache() -> Vec<(String, PathBuf)> {
    tokio::task::spawn_blocking(warm_cache_blocking)
        .await
        .unwrap_or_default()
}

/// Blocking implementation of the cache warm scan.
fn warm_cache_blocking() -> Vec<(String, PathBuf)> {
    let root = assets_dir();
    let mut entries = Vec::new();

    for entry in WalkDir::new(&root)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();
        if !path.is_file() {
            continue;
        }

        // Only artwork formats; skip stray files in the assets tree
        match path.extension() {
            Some(extension) => {
                let ext = extension.to_string_lossy().to_lowercase();
                if !IMAGE_EXTENSIONS.contains(&ext.as_str()) {
                    continue;
                }
            }
            None => continue,
        }

        let file_name = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();

        if let Some(thumbnail) = generate_thumbnail(path) {
            entries.push((file_name, thumbnail));
        }
    }

    println!(
        "✅ Thumbnail cache warm: {} artwork files ready",
        entries.len()
    );

    entries
}

/// Generate (or reuse) a thumbnail for one artwork file.
/// Returns the path to the cached thumbnail, or None if the source is
/// missing or cannot be decoded.
pub fn generate_thumbnail(source: &Path) -> Option<PathBuf> {
    let file_name = source.file_name()?.to_string_lossy().to_string();

    let target = thumbnail_path(&file_name);
    if thumbnail_exists(&file_name) {
        return Some(target);
    }

    let img = image::open(source).ok()?;
    // JPEG output cannot carry an alpha channel, so flatten to RGB first
    let thumbnail = img
        .resize(THUMBNAIL_SIZE, THUMBNAIL_SIZE, FilterType::Lanczos3)
        .to_rgb8();
    thumbnail.save(&target).ok()?;

    println!("📸 Generated thumbnail: {}", target.display());
    Some(target)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thumbnail_paths_derive_from_the_file_stem() {
        let path = thumbnail_path("portfolio-01.jpg");
        assert_eq!(path.file_name().unwrap(), "portfolio-01.jpg");

        let png = thumbnail_path("cover.png");
        assert_eq!(png.file_name().unwrap(), "cover.jpg");
    }

    #[test]
    fn generating_from_a_missing_file_yields_none() {
        let missing = Path::new("assets/images/does-not-exist.jpg");
        assert!(generate_thumbnail(missing).is_none());
    }

    #[test]
    fn display_source_is_none_when_nothing_exists() {
        assert!(display_source("does-not-exist-anywhere.jpg").is_none());
    }

    #[tokio::test]
    async fn warming_never_fails_and_only_reports_real_thumbnails() {
        let entries = warm_cache().await;
        for (name, thumb) in entries {
            assert!(!name.is_empty());
            assert!(thumb.exists());
        }
    }
}
