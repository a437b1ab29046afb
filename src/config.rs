use std::path::PathBuf;

use egui::Color32;

/// Smallest brush/eraser size the size slider allows.
pub const MIN_BRUSH_SIZE: u32 = 1;
/// Largest brush/eraser size the size slider allows.
pub const MAX_BRUSH_SIZE: u32 = 30;

/// Static settings for a paint session.
///
/// Nothing here is persisted between runs; the gallery directory is the only
/// state that outlives the process.
#[derive(serde::Deserialize, serde::Serialize, Debug, Clone, PartialEq)]
#[serde(default)] // missing fields fall back to the defaults below
pub struct PaintConfig {
    pub canvas_width: u32,
    pub canvas_height: u32,
    /// Canvas fill color, also used by the eraser.
    pub background: Color32,
    /// Ink used at startup and whenever the eraser is toggled off.
    pub default_color: Color32,
    pub default_brush_size: u32,
    pub gallery_dir: PathBuf,
    /// Edge length of the square gallery thumbnails, in pixels.
    pub thumbnail_size: u32,
}

impl Default for PaintConfig {
    fn default() -> Self {
        Self {
            canvas_width: 500,
            canvas_height: 500,
            background: Color32::WHITE,
            default_color: Color32::BLACK,
            default_brush_size: 5,
            gallery_dir: PathBuf::from("gallery"),
            thumbnail_size: 100,
        }
    }
}

impl PaintConfig {
    pub fn canvas_size(&self) -> egui::Vec2 {
        egui::vec2(self.canvas_width as f32, self.canvas_height as f32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: PaintConfig =
            serde_json::from_str(r#"{ "canvas_width": 640, "gallery_dir": "/tmp/art" }"#).unwrap();

        assert_eq!(config.canvas_width, 640);
        assert_eq!(config.canvas_height, 500);
        assert_eq!(config.gallery_dir, PathBuf::from("/tmp/art"));
        assert_eq!(config.background, Color32::WHITE);
        assert_eq!(config.default_brush_size, 5);
    }

    #[test]
    fn test_canvas_size() {
        let config = PaintConfig::default();
        assert_eq!(config.canvas_size(), egui::vec2(500.0, 500.0));
    }
}
