use egui::{Color32, Pos2};

/// One straight piece of a stroke, from the previous pointer position to the
/// current one.
///
/// Produced per pointer move and handed to both the display surface and the
/// raster model; never stored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeSegment {
    pub from: Pos2,
    pub to: Pos2,
    pub width: u32,
    pub color: Color32,
}

impl StrokeSegment {
    pub fn new(from: Pos2, to: Pos2, width: u32, color: Color32) -> Self {
        Self {
            from,
            to,
            width,
            color,
        }
    }

    /// Half the stroke width; the round caps use this as their radius.
    pub fn radius(&self) -> f32 {
        self.width as f32 / 2.0
    }

    /// Axis-aligned bounds including the caps.
    pub fn bounds(&self) -> egui::Rect {
        egui::Rect::from_two_pos(self.from, self.to).expand(self.radius())
    }

    /// Distance from `p` to the closest point of the segment.
    pub fn distance_to(&self, p: Pos2) -> f32 {
        let d = self.to - self.from;
        let len_sq = d.length_sq();
        if len_sq == 0.0 {
            return self.from.distance(p);
        }
        let t = ((p - self.from).dot(d) / len_sq).clamp(0.0, 1.0);
        (self.from + d * t).distance(p)
    }
}
