#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod brush;
pub mod command;
pub mod components;
pub mod config;
pub mod editor;
pub mod error;
pub mod gallery;
pub mod input;
pub mod panels;
pub mod raster;
pub mod stroke;
pub mod surface;
pub mod texture_manager;

pub use app::PaintApp;
pub use brush::BrushState;
pub use command::{Command, CommandOutcome};
pub use config::PaintConfig;
pub use editor::Editor;
pub use error::{GalleryError, PaintError};
pub use gallery::{GalleryEntry, GalleryStore};
pub use input::{InputEvent, InputHandler, InputRouter};
pub use raster::RasterModel;
pub use stroke::StrokeSegment;
pub use surface::{CanvasSurface, DisplaySurface};
