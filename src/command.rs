use egui::Color32;

use crate::gallery::GalleryEntry;

/// Everything the controls bar can ask the editor to do. Each UI control maps
/// to exactly one variant.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    SetBrushSize(u32),
    /// Result of the color dialog; `None` when it was cancelled.
    ChooseColor(Option<Color32>),
    ToggleEraser,
    Clear,
    Save,
    Load,
    Delete,
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Self::SetBrushSize(_) => "set brush size",
            Self::ChooseColor(_) => "choose color",
            Self::ToggleEraser => "toggle eraser",
            Self::Clear => "clear",
            Self::Save => "save",
            Self::Load => "load",
            Self::Delete => "delete",
        }
    }
}

/// What a successfully executed command did.
#[derive(Debug, Clone, PartialEq)]
pub enum CommandOutcome {
    Done,
    Saved(GalleryEntry),
    Loaded(GalleryEntry),
    Deleted(GalleryEntry),
    /// Load or delete on an empty gallery
    GalleryEmpty,
}

impl CommandOutcome {
    /// Whether the gallery directory changed and thumbnails must be rebuilt.
    pub fn changes_gallery(&self) -> bool {
        matches!(self, Self::Saved(_) | Self::Deleted(_))
    }

    /// Short user-facing description, if the outcome is worth telling.
    pub fn message(&self) -> Option<String> {
        match self {
            Self::Done => None,
            Self::Saved(entry) => Some(format!("Saved {}", entry.file_name())),
            Self::Loaded(entry) => Some(format!("Loaded {}", entry.file_name())),
            Self::Deleted(entry) => Some(format!("Deleted {}", entry.file_name())),
            Self::GalleryEmpty => Some("The gallery is empty".to_owned()),
        }
    }
}
