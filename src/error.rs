use std::path::PathBuf;

use thiserror::Error;

/// Failures while touching the gallery directory.
#[derive(Error, Debug)]
pub enum GalleryError {
    #[error("cannot create gallery directory {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot list gallery directory {}: {source}", .path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("failed to decode {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("failed to delete {}: {source}", .path.display())]
    Remove {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors surfaced to the user by the editor. None of them are fatal.
#[derive(Error, Debug)]
pub enum PaintError {
    #[error(transparent)]
    Gallery(#[from] GalleryError),
}

pub type PaintResult<T> = Result<T, PaintError>;
