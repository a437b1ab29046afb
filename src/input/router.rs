use egui::{Color32, Pos2};

use crate::brush::BrushState;
use crate::raster::RasterModel;
use crate::stroke::StrokeSegment;
use crate::surface::{DisplaySurface, ShapeId};

use super::InputEvent;

const PREVIEW_COLOR: Color32 = Color32::BLACK;
const PREVIEW_OUTLINE_WIDTH: f32 = 1.0;

/// Turns pointer events into stroke segments and the cursor preview.
///
/// Owns the brush settings and the stroke anchor (the last pointer position of
/// the stroke being drawn).
#[derive(Debug, Clone)]
pub struct InputRouter {
    brush: BrushState,
    anchor: Option<Pos2>,
    preview: Option<ShapeId>,
}

impl InputRouter {
    pub fn new(brush: BrushState) -> Self {
        Self {
            brush,
            anchor: None,
            preview: None,
        }
    }

    pub fn brush(&self) -> &BrushState {
        &self.brush
    }

    pub fn brush_mut(&mut self) -> &mut BrushState {
        &mut self.brush
    }

    pub fn anchor(&self) -> Option<Pos2> {
        self.anchor
    }

    /// Dispatches one event.
    pub fn route_event(&mut self, event: &InputEvent, surface: &mut dyn DisplaySurface, raster: &mut RasterModel) {
        match *event {
            InputEvent::PointerDown { position } => self.on_pointer_down(position),
            InputEvent::PointerMove { position, dragging } => {
                self.on_pointer_move(position, dragging, surface, raster);
            }
        }
    }

    /// Starts a new stroke at `pos`. Nothing is drawn yet.
    pub fn on_pointer_down(&mut self, pos: Pos2) {
        self.anchor = Some(pos);
    }

    /// While dragging with an anchor, draws a segment from the anchor to `pos`
    /// on both sinks and moves the anchor. Always refreshes the preview.
    pub fn on_pointer_move(
        &mut self,
        pos: Pos2,
        dragging: bool,
        surface: &mut dyn DisplaySurface,
        raster: &mut RasterModel,
    ) -> Option<StrokeSegment> {
        let segment = match self.anchor {
            Some(anchor) if dragging => {
                let segment = StrokeSegment::new(anchor, pos, self.brush.size(), self.brush.color());
                surface.draw_line(&segment);
                raster.draw_segment(&segment);
                self.anchor = Some(pos);
                Some(segment)
            }
            _ => None,
        };

        self.update_preview(pos, surface);
        segment
    }

    /// Replaces the cursor outline with one centered on `pos`.
    pub fn update_preview(&mut self, pos: Pos2, surface: &mut dyn DisplaySurface) {
        if let Some(id) = self.preview.take() {
            surface.delete(id);
        }
        let radius = self.brush.size() as f32;
        self.preview = Some(surface.draw_oval(pos, radius, PREVIEW_COLOR, PREVIEW_OUTLINE_WIDTH));
    }

    /// Forgets the preview handle after the surface was wiped.
    pub fn forget_preview(&mut self) {
        self.preview = None;
    }
}
