//! Flat directory of saved drawings.
//!
//! Entries are `drawing_<n>.png` files. The directory listing is rescanned on
//! every call; there is no index file and no locking, so edits made behind our
//! back are simply picked up (or tolerated) on the next call.

use std::cmp::Ordering;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use image::imageops::FilterType;
use image::{ImageFormat, RgbImage};

use crate::error::GalleryError;

const PREFIX: &str = "drawing_";
const EXTENSION: &str = "png";

/// One stored drawing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryEntry {
    path: PathBuf,
    file_name: String,
    /// The `<n>` of `drawing_<n>.png`, if the name follows that pattern.
    index: Option<u64>,
}

impl GalleryEntry {
    fn from_path(path: PathBuf) -> Option<Self> {
        if path.extension().and_then(|ext| ext.to_str()) != Some(EXTENSION) {
            return None;
        }
        let file_name = path.file_name()?.to_str()?.to_owned();
        let index = parse_index(&file_name);
        Some(Self {
            path,
            file_name,
            index,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn index(&self) -> Option<u64> {
        self.index
    }
}

/// Gallery order: stray PNGs first (by name), then numbered drawings by number,
/// so `drawing_10.png` comes after `drawing_9.png`.
impl Ord for GalleryEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.index
            .cmp(&other.index)
            .then_with(|| self.file_name.cmp(&other.file_name))
    }
}

impl PartialOrd for GalleryEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

fn parse_index(file_name: &str) -> Option<u64> {
    let digits = file_name.strip_prefix(PREFIX)?.strip_suffix(".png")?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

pub fn entry_file_name(index: u64) -> String {
    format!("{PREFIX}{index}.{EXTENSION}")
}

/// A downscaled copy of an entry, ready for the gallery strip.
#[derive(Debug, Clone)]
pub struct Thumbnail {
    pub entry: GalleryEntry,
    pub image: RgbImage,
}

#[derive(Debug, Clone)]
pub struct GalleryStore {
    dir: PathBuf,
}

impl GalleryStore {
    /// Opens the gallery, creating the directory if needed.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, GalleryError> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir).map_err(|source| GalleryError::CreateDir {
            path: dir.clone(),
            source,
        })?;
        log::debug!("Gallery opened at {}", dir.display());
        Ok(Self { dir })
    }

    /// All PNG entries in gallery order.
    pub fn list_all(&self) -> Result<Vec<GalleryEntry>, GalleryError> {
        let read_dir_error = |source| GalleryError::ReadDir {
            path: self.dir.clone(),
            source,
        };

        let mut entries = Vec::new();
        for dir_entry in std::fs::read_dir(&self.dir).map_err(read_dir_error)? {
            let dir_entry = dir_entry.map_err(read_dir_error)?;
            // a directory named like a drawing is not a drawing
            if !dir_entry.path().is_file() {
                continue;
            }
            if let Some(entry) = GalleryEntry::from_path(dir_entry.path()) {
                entries.push(entry);
            }
        }
        entries.sort();
        Ok(entries)
    }

    /// Writes `image` as `drawing_<count + 1>.png`.
    ///
    /// If that name is already taken the number is bumped until it is free,
    /// so an existing drawing is never overwritten.
    pub fn save(&self, image: &RgbImage) -> Result<GalleryEntry, GalleryError> {
        let entries = self.list_all()?;
        let mut index = entries.len() as u64 + 1;
        while self.dir.join(entry_file_name(index)).exists() {
            index += 1;
        }

        let path = self.dir.join(entry_file_name(index));
        image
            .save_with_format(&path, ImageFormat::Png)
            .map_err(|source| GalleryError::Write {
                path: path.clone(),
                source,
            })?;
        log::info!("Saved drawing to {}", path.display());

        Ok(GalleryEntry {
            file_name: entry_file_name(index),
            index: Some(index),
            path,
        })
    }

    /// Decodes the last entry, or `None` for an empty gallery.
    pub fn load_latest(&self) -> Result<Option<(GalleryEntry, RgbImage)>, GalleryError> {
        let Some(entry) = self.list_all()?.pop() else {
            return Ok(None);
        };
        let image = decode(entry.path())?;
        Ok(Some((entry, image)))
    }

    /// Removes the last entry. Returns the removed entry, or `None` when the
    /// gallery was already empty.
    pub fn delete_latest(&self) -> Result<Option<GalleryEntry>, GalleryError> {
        let Some(entry) = self.list_all()?.pop() else {
            return Ok(None);
        };
        std::fs::remove_file(entry.path()).map_err(|source| GalleryError::Remove {
            path: entry.path.clone(),
            source,
        })?;
        log::info!("Deleted {}", entry.path().display());
        Ok(Some(entry))
    }

    /// Every entry stretched to a `size`×`size` square, in gallery order.
    ///
    /// Files that fail to decode are skipped.
    pub fn thumbnails(&self, size: u32) -> Result<Vec<Thumbnail>, GalleryError> {
        let mut thumbnails = Vec::new();
        for entry in self.list_all()? {
            match decode(entry.path()) {
                Ok(image) => {
                    let image = image::imageops::resize(&image, size, size, FilterType::Triangle);
                    thumbnails.push(Thumbnail { entry, image });
                }
                Err(err) => log::warn!("Skipping thumbnail: {}", err),
            }
        }
        Ok(thumbnails)
    }
}

/// Reads a PNG file. Other formats are rejected even if the name ends in `.png`.
pub fn decode(path: &Path) -> Result<RgbImage, GalleryError> {
    let decode_error = |source| GalleryError::Decode {
        path: path.to_owned(),
        source,
    };
    let file = File::open(path).map_err(|err| decode_error(image::ImageError::IoError(err)))?;
    let image = image::load(BufReader::new(file), ImageFormat::Png).map_err(decode_error)?;
    Ok(image.to_rgb8())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str) -> GalleryEntry {
        GalleryEntry::from_path(PathBuf::from(name)).unwrap()
    }

    #[test]
    fn test_parse_index() {
        assert_eq!(parse_index("drawing_1.png"), Some(1));
        assert_eq!(parse_index("drawing_42.png"), Some(42));
        assert_eq!(parse_index("drawing_.png"), None);
        assert_eq!(parse_index("drawing_x1.png"), None);
        assert_eq!(parse_index("drawing_-1.png"), None);
        assert_eq!(parse_index("sketch.png"), None);
    }

    #[test]
    fn test_only_png_files_are_entries() {
        assert!(GalleryEntry::from_path(PathBuf::from("notes.txt")).is_none());
        assert!(GalleryEntry::from_path(PathBuf::from("drawing_1.jpg")).is_none());
        assert!(GalleryEntry::from_path(PathBuf::from("drawing_1.png")).is_some());
    }

    #[test]
    fn test_numeric_order_past_nine() {
        let mut entries = vec![entry("drawing_10.png"), entry("drawing_2.png"), entry("drawing_9.png")];
        entries.sort();
        let names: Vec<_> = entries.iter().map(GalleryEntry::file_name).collect();
        assert_eq!(names, ["drawing_2.png", "drawing_9.png", "drawing_10.png"]);
    }

    #[test]
    fn test_stray_pngs_sort_first() {
        let mut entries = vec![entry("drawing_1.png"), entry("zebra.png"), entry("apple.png")];
        entries.sort();
        let names: Vec<_> = entries.iter().map(GalleryEntry::file_name).collect();
        assert_eq!(names, ["apple.png", "zebra.png", "drawing_1.png"]);
    }

    #[test]
    fn test_entry_file_name_is_unpadded() {
        assert_eq!(entry_file_name(3), "drawing_3.png");
        assert_eq!(entry_file_name(12), "drawing_12.png");
    }
}
