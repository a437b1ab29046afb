use egui::Color32;

use crate::config::{MAX_BRUSH_SIZE, MIN_BRUSH_SIZE, PaintConfig};

/// Current brush settings, mutated by the controls bar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BrushState {
    size: u32,
    color: Color32,
    eraser_mode: bool,
}

impl BrushState {
    pub fn new(size: u32, color: Color32) -> Self {
        Self {
            size: size.clamp(MIN_BRUSH_SIZE, MAX_BRUSH_SIZE),
            color,
            eraser_mode: false,
        }
    }

    pub fn from_config(config: &PaintConfig) -> Self {
        Self::new(config.default_brush_size, config.default_color)
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn is_eraser(&self) -> bool {
        self.eraser_mode
    }

    /// Sets the brush size, clamped to the slider range.
    pub fn set_size(&mut self, size: u32) {
        self.size = size.clamp(MIN_BRUSH_SIZE, MAX_BRUSH_SIZE);
    }

    /// Applies the result of the color dialog.
    ///
    /// `None` means the dialog was cancelled and leaves everything untouched.
    /// Picking a color always leaves eraser mode.
    pub fn choose_color(&mut self, choice: Option<Color32>) {
        if let Some(color) = choice {
            self.color = color;
            self.eraser_mode = false;
        }
    }

    /// Flips eraser mode.
    ///
    /// On: ink becomes the background color. Off: ink resets to `default_color`.
    /// The previously chosen color is not remembered across the cycle.
    pub fn toggle_eraser(&mut self, background: Color32, default_color: Color32) {
        self.eraser_mode = !self.eraser_mode;
        self.color = if self.eraser_mode { background } else { default_color };
    }
}

/// Parses `#rrggbb`, `#rgb` or one of a handful of color names.
pub fn parse_color(text: &str) -> Option<Color32> {
    let text = text.trim();
    if let Some(hex) = text.strip_prefix('#') {
        return parse_hex(hex);
    }
    let color = match text.to_ascii_lowercase().as_str() {
        "black" => Color32::BLACK,
        "white" => Color32::WHITE,
        "red" => Color32::from_rgb(255, 0, 0),
        "green" => Color32::from_rgb(0, 128, 0),
        "blue" => Color32::from_rgb(0, 0, 255),
        "yellow" => Color32::from_rgb(255, 255, 0),
        "orange" => Color32::from_rgb(255, 165, 0),
        "purple" => Color32::from_rgb(128, 0, 128),
        "gray" | "grey" => Color32::from_rgb(128, 128, 128),
        _ => return None,
    };
    Some(color)
}

fn parse_hex(hex: &str) -> Option<Color32> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    match hex.len() {
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some(Color32::from_rgb(r, g, b))
        }
        3 => {
            // each nibble is doubled: #f80 == #ff8800
            let mut channels = [0u8; 3];
            for (channel, digit) in channels.iter_mut().zip(hex.chars()) {
                let value = digit.to_digit(16)? as u8;
                *channel = value * 17;
            }
            Some(Color32::from_rgb(channels[0], channels[1], channels[2]))
        }
        _ => None,
    }
}

/// Formats a color as `#rrggbb`.
pub fn to_hex(color: Color32) -> String {
    format!("#{:02x}{:02x}{:02x}", color.r(), color.g(), color.b())
}

#[cfg(test)]
mod tests {
    use super::*;

    const BACKGROUND: Color32 = Color32::WHITE;
    const INK: Color32 = Color32::BLACK;

    #[test]
    fn test_size_is_clamped() {
        let mut brush = BrushState::new(0, INK);
        assert_eq!(brush.size(), 1);

        brush.set_size(99);
        assert_eq!(brush.size(), 30);

        brush.set_size(12);
        assert_eq!(brush.size(), 12);
    }

    #[test]
    fn test_eraser_cycle_forgets_explicit_color() {
        let mut brush = BrushState::new(5, INK);
        let red = Color32::from_rgb(255, 0, 0);

        brush.toggle_eraser(BACKGROUND, INK);
        assert!(brush.is_eraser());
        assert_eq!(brush.color(), BACKGROUND);

        brush.choose_color(Some(red));
        assert!(!brush.is_eraser());
        assert_eq!(brush.color(), red);

        brush.toggle_eraser(BACKGROUND, INK);
        assert!(brush.is_eraser());
        assert_eq!(brush.color(), BACKGROUND);

        // toggling off goes back to the default ink, not to red
        brush.toggle_eraser(BACKGROUND, INK);
        assert!(!brush.is_eraser());
        assert_eq!(brush.color(), INK);
    }

    #[test]
    fn test_cancelled_color_choice_is_noop() {
        let mut brush = BrushState::new(5, INK);
        brush.toggle_eraser(BACKGROUND, INK);
        let before = brush;

        brush.choose_color(None);
        assert_eq!(brush, before);
    }

    #[test]
    fn test_parse_color() {
        assert_eq!(parse_color("#ff8000"), Some(Color32::from_rgb(255, 128, 0)));
        assert_eq!(parse_color("#f80"), Some(Color32::from_rgb(255, 136, 0)));
        assert_eq!(parse_color(" White "), Some(Color32::WHITE));
        assert_eq!(parse_color("#12345"), None);
        assert_eq!(parse_color("#zzzzzz"), None);
        assert_eq!(parse_color("chartreuse"), None);
    }

    #[test]
    fn test_hex_formatting() {
        assert_eq!(to_hex(Color32::from_rgb(255, 128, 0)), "#ff8000");
        assert_eq!(parse_color(&to_hex(Color32::from_rgb(1, 2, 3))), Some(Color32::from_rgb(1, 2, 3)));
    }
}
