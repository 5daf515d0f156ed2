// SPDX-License-Identifier: MPL-2.0
//! Photo album construction and navigation.
//!
//! The album is built once at startup by probing which files in the album
//! directory actually decode as images, then navigated with wrapping index
//! arithmetic by the carousel. Probing failures are expected and silently
//! shrink the usable set; they are never surfaced to the user.

use crate::error::Result;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Maximum time one candidate image may take to decode before it is skipped.
pub const PROBE_TIMEOUT: Duration = Duration::from_secs(2);

/// Extensions considered as photo candidates during the directory scan.
const PHOTO_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp", "bmp", "heic"];

/// Extension excluded from the fallback list when probing finds nothing,
/// because the decoder cannot handle it anyway.
const FALLBACK_EXCLUDED_EXTENSION: &str = "heic";

/// Ordered set of usable photos with a current position.
///
/// Invariant: `current_index < photos.len()` whenever the album is non-empty.
#[derive(Debug, Clone, PartialEq)]
pub struct PhotoAlbum {
    photos: Vec<PathBuf>,
    current_index: usize,
}

impl PhotoAlbum {
    /// Creates a new empty album.
    pub fn new() -> Self {
        Self {
            photos: Vec::new(),
            current_index: 0,
        }
    }

    /// Builds an album from an already-probed list of paths, starting at the
    /// first photo.
    pub fn from_paths(photos: Vec<PathBuf>) -> Self {
        Self {
            photos,
            current_index: 0,
        }
    }

    /// Returns the path of the current photo, if the album is non-empty.
    pub fn current(&self) -> Option<&Path> {
        self.photos.get(self.current_index).map(|p| p.as_path())
    }

    /// Returns the current index. Meaningless when the album is empty.
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Advances by one photo, wrapping from the last back to the first.
    pub fn advance(&mut self) {
        if !self.photos.is_empty() {
            self.current_index = (self.current_index + 1) % self.photos.len();
        }
    }

    /// Steps back by one photo, wrapping from the first to the last.
    pub fn retreat(&mut self) {
        if !self.photos.is_empty() {
            let len = self.photos.len();
            self.current_index = (self.current_index + len - 1) % len;
        }
    }

    /// Jumps directly to `index` if it is in range; out-of-range jumps are
    /// ignored rather than raised as errors.
    pub fn set_current_index(&mut self, index: usize) {
        if index < self.photos.len() {
            self.current_index = index;
        }
    }

    /// Returns the path at the specified index.
    pub fn get(&self, index: usize) -> Option<&Path> {
        self.photos.get(index).map(|p| p.as_path())
    }

    /// Returns the total number of photos in the album.
    pub fn len(&self) -> usize {
        self.photos.len()
    }

    /// Checks if the album is empty.
    pub fn is_empty(&self) -> bool {
        self.photos.is_empty()
    }
}

impl Default for PhotoAlbum {
    fn default() -> Self {
        Self::new()
    }
}

/// Probes every candidate in `dir` and returns the album of photos that
/// decoded successfully within [`PROBE_TIMEOUT`].
///
/// If no candidate passes the probe, the full candidate list minus
/// `.heic` files is substituted so the gallery still has something to show.
/// If the directory itself cannot be read, the album is empty and the caller
/// renders a loading placeholder instead.
pub async fn probe_directory(dir: PathBuf) -> PhotoAlbum {
    let candidates = match list_candidates(&dir) {
        Ok(candidates) => candidates,
        Err(err) => {
            eprintln!("Failed to scan album directory {:?}: {}", dir, err);
            return PhotoAlbum::new();
        }
    };

    let mut usable = Vec::new();
    for path in &candidates {
        if probe_one(path.clone()).await {
            usable.push(path.clone());
        } else {
            eprintln!("Skipping {:?}", path);
        }
    }

    if usable.is_empty() {
        usable = candidates
            .into_iter()
            .filter(|p| !has_extension(p, FALLBACK_EXCLUDED_EXTENSION))
            .collect();
    }

    PhotoAlbum::from_paths(usable)
}

/// Lists photo candidates in `dir`, sorted by file name for a stable order.
fn list_candidates(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut candidates = Vec::new();

    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();

        if path.is_file() && is_photo_candidate(&path) {
            candidates.push(path);
        }
    }

    candidates.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(candidates)
}

/// Attempts to decode one image within the probe timeout.
///
/// Decoding runs on the blocking pool; a timeout, a decode error, or a
/// cancelled task all count as a failed probe.
async fn probe_one(path: PathBuf) -> bool {
    let decode = tokio::task::spawn_blocking(move || image_rs::open(&path).map(|_| ()));
    matches!(
        tokio::time::timeout(PROBE_TIMEOUT, decode).await,
        Ok(Ok(Ok(())))
    )
}

fn is_photo_candidate(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            PHOTO_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}

fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|ext| ext.eq_ignore_ascii_case(extension))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Write;
    use tempfile::tempdir;

    fn paths(names: &[&str]) -> Vec<PathBuf> {
        names.iter().map(PathBuf::from).collect()
    }

    fn create_real_png(path: &Path, width: u32, height: u32) {
        let buffer =
            image_rs::ImageBuffer::from_pixel(width, height, image_rs::Rgba([255u8, 0, 0, 255]));
        image_rs::DynamicImage::ImageRgba8(buffer)
            .save(path)
            .expect("failed to write test png");
    }

    #[test]
    fn new_album_is_empty() {
        let album = PhotoAlbum::new();
        assert!(album.is_empty());
        assert_eq!(album.len(), 0);
        assert_eq!(album.current(), None);
    }

    #[test]
    fn advance_wraps_to_first() {
        let mut album = PhotoAlbum::from_paths(paths(&["a.jpg", "b.jpg", "c.jpg"]));
        album.set_current_index(2);
        album.advance();
        assert_eq!(album.current_index(), 0);
    }

    #[test]
    fn retreat_wraps_to_last() {
        let mut album = PhotoAlbum::from_paths(paths(&["a.jpg", "b.jpg", "c.jpg"]));
        album.retreat();
        assert_eq!(album.current_index(), 2);
    }

    #[test]
    fn three_advances_return_to_start() {
        let mut album = PhotoAlbum::from_paths(paths(&["a.jpg", "b.jpg", "c.jpg"]));
        album.advance();
        album.advance();
        album.advance();
        assert_eq!(album.current_index(), 0);
    }

    #[test]
    fn set_current_index_ignores_out_of_range() {
        let mut album = PhotoAlbum::from_paths(paths(&["a.jpg", "b.jpg"]));
        album.set_current_index(1);
        album.set_current_index(7);
        assert_eq!(album.current_index(), 1);
    }

    #[test]
    fn advance_on_empty_album_is_noop() {
        let mut album = PhotoAlbum::new();
        album.advance();
        album.retreat();
        assert_eq!(album.current(), None);
    }

    #[test]
    fn is_photo_candidate_filters_extensions() {
        assert!(is_photo_candidate(Path::new("photo.jpg")));
        assert!(is_photo_candidate(Path::new("photo.PNG")));
        assert!(is_photo_candidate(Path::new("photo.heic")));
        assert!(!is_photo_candidate(Path::new("notes.txt")));
        assert!(!is_photo_candidate(Path::new("noextension")));
    }

    #[tokio::test]
    async fn probe_keeps_decodable_images_only() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let good = temp_dir.path().join("a.png");
        create_real_png(&good, 2, 2);

        let bad = temp_dir.path().join("b.jpg");
        let mut file = fs::File::create(&bad).expect("failed to create bad file");
        file.write_all(b"not an image")
            .expect("failed to write bad file");

        let album = probe_directory(temp_dir.path().to_path_buf()).await;
        assert_eq!(album.len(), 1);
        assert_eq!(album.current(), Some(good.as_path()));
    }

    #[tokio::test]
    async fn probe_falls_back_to_candidates_when_nothing_decodes() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        for name in ["a.jpg", "b.heic"] {
            let path = temp_dir.path().join(name);
            let mut file = fs::File::create(&path).expect("failed to create file");
            file.write_all(b"bogus").expect("failed to write file");
        }

        let album = probe_directory(temp_dir.path().to_path_buf()).await;
        // Fallback keeps undecodable candidates but drops .heic files.
        assert_eq!(album.len(), 1);
        assert!(album.current().map(|p| p.ends_with("a.jpg")).unwrap_or(false));
    }

    #[tokio::test]
    async fn probe_of_missing_directory_yields_empty_album() {
        let album = probe_directory(PathBuf::from("/definitely/not/here")).await;
        assert!(album.is_empty());
    }
}
