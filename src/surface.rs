use egui::{Color32, ColorImage, Painter, Pos2, Rect, Stroke, pos2};
use image::RgbImage;

use crate::stroke::StrokeSegment;
use crate::texture_manager::TextureManager;

/// Handle to a shape previously drawn on a surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShapeId(u64);

/// The on-screen canvas as seen by the input router: a retained list of
/// shapes that can be added and removed individually.
pub trait DisplaySurface {
    /// Draws a round-capped line.
    fn draw_line(&mut self, segment: &StrokeSegment) -> ShapeId;

    /// Draws a circle outline (used for the cursor preview).
    fn draw_oval(&mut self, center: Pos2, radius: f32, color: Color32, outline_width: f32) -> ShapeId;

    /// Removes one shape. Unknown ids are ignored.
    fn delete(&mut self, id: ShapeId);

    /// Removes every shape and any blitted image.
    fn delete_all(&mut self);

    /// Shows `image` at the canvas origin, replacing any previous blit.
    fn blit(&mut self, image: &RgbImage);
}

#[derive(Debug, Clone, PartialEq)]
pub enum CanvasShape {
    Line(StrokeSegment),
    Oval {
        center: Pos2,
        radius: f32,
        color: Color32,
        outline_width: f32,
    },
}

/// A blitted image, owned by value for as long as it is shown.
#[derive(Clone)]
pub struct Backdrop {
    image: ColorImage,
    version: u64,
}

impl Backdrop {
    pub fn size(&self) -> [usize; 2] {
        self.image.size
    }

    pub fn version(&self) -> u64 {
        self.version
    }
}

const BACKDROP_TEXTURE: &str = "canvas_backdrop";

/// egui implementation of [`DisplaySurface`]. Shapes are kept in draw order and
/// repainted each frame.
pub struct CanvasSurface {
    background: Color32,
    shapes: Vec<(ShapeId, CanvasShape)>,
    backdrop: Option<Backdrop>,
    next_id: u64,
    blit_count: u64,
}

impl CanvasSurface {
    pub fn new(background: Color32) -> Self {
        Self {
            background,
            shapes: Vec::new(),
            backdrop: None,
            next_id: 1,
            blit_count: 0,
        }
    }

    fn push(&mut self, shape: CanvasShape) -> ShapeId {
        let id = ShapeId(self.next_id);
        self.next_id += 1;
        self.shapes.push((id, shape));
        id
    }

    pub fn shapes(&self) -> impl Iterator<Item = &CanvasShape> {
        self.shapes.iter().map(|(_, shape)| shape)
    }

    pub fn shape(&self, id: ShapeId) -> Option<&CanvasShape> {
        self.shapes.iter().find(|(sid, _)| *sid == id).map(|(_, shape)| shape)
    }

    pub fn shape_count(&self) -> usize {
        self.shapes.len()
    }

    pub fn backdrop(&self) -> Option<&Backdrop> {
        self.backdrop.as_ref()
    }

    /// Paints background, backdrop and shapes into `rect`, with canvas
    /// coordinates relative to `rect.min`.
    pub fn paint(&self, painter: &Painter, rect: Rect, textures: &mut TextureManager) {
        let painter = painter.with_clip_rect(rect);
        let origin = rect.min.to_vec2();

        painter.rect_filled(rect, 0.0, self.background);

        if let Some(backdrop) = &self.backdrop {
            let result = textures.get_or_create_texture(
                BACKDROP_TEXTURE,
                backdrop.version,
                || Ok(backdrop.image.clone()),
                painter.ctx(),
            );
            match result {
                Ok(texture_id) => {
                    let [w, h] = backdrop.image.size;
                    let image_rect = Rect::from_min_size(rect.min, egui::vec2(w as f32, h as f32));
                    let uv = Rect::from_min_max(pos2(0.0, 0.0), pos2(1.0, 1.0));
                    painter.image(texture_id, image_rect, uv, Color32::WHITE);
                }
                Err(err) => log::warn!("Cannot show loaded drawing: {}", err),
            }
        }

        for (_, shape) in &self.shapes {
            match shape {
                CanvasShape::Line(seg) => {
                    let from = seg.from + origin;
                    let to = seg.to + origin;
                    let width = seg.width as f32;
                    painter.line_segment([from, to], Stroke::new(width, seg.color));
                    // egui has no round caps, so cap both ends with discs
                    painter.circle_filled(from, width / 2.0, seg.color);
                    painter.circle_filled(to, width / 2.0, seg.color);
                }
                CanvasShape::Oval {
                    center,
                    radius,
                    color,
                    outline_width,
                } => {
                    painter.circle_stroke(*center + origin, *radius, Stroke::new(*outline_width, *color));
                }
            }
        }
    }
}

impl DisplaySurface for CanvasSurface {
    fn draw_line(&mut self, segment: &StrokeSegment) -> ShapeId {
        self.push(CanvasShape::Line(*segment))
    }

    fn draw_oval(&mut self, center: Pos2, radius: f32, color: Color32, outline_width: f32) -> ShapeId {
        self.push(CanvasShape::Oval {
            center,
            radius,
            color,
            outline_width,
        })
    }

    fn delete(&mut self, id: ShapeId) {
        self.shapes.retain(|(sid, _)| *sid != id);
    }

    fn delete_all(&mut self) {
        self.shapes.clear();
        self.backdrop = None;
    }

    fn blit(&mut self, image: &RgbImage) {
        self.blit_count += 1;
        let size = [image.width() as usize, image.height() as usize];
        self.backdrop = Some(Backdrop {
            image: ColorImage::from_rgb(size, image.as_raw()),
            version: self.blit_count,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    fn segment() -> StrokeSegment {
        StrokeSegment::new(pos2(1.0, 1.0), pos2(5.0, 5.0), 3, Color32::BLACK)
    }

    #[test]
    fn test_shapes_keep_draw_order() {
        let mut surface = CanvasSurface::new(Color32::WHITE);
        let line = surface.draw_line(&segment());
        let oval = surface.draw_oval(pos2(3.0, 3.0), 5.0, Color32::BLACK, 1.0);

        assert_ne!(line, oval);
        let shapes: Vec<_> = surface.shapes().collect();
        assert!(matches!(shapes[0], CanvasShape::Line(_)));
        assert!(matches!(shapes[1], CanvasShape::Oval { .. }));
    }

    #[test]
    fn test_delete_single_shape() {
        let mut surface = CanvasSurface::new(Color32::WHITE);
        let line = surface.draw_line(&segment());
        let oval = surface.draw_oval(pos2(3.0, 3.0), 5.0, Color32::BLACK, 1.0);

        surface.delete(oval);
        assert_eq!(surface.shape_count(), 1);
        assert!(surface.shape(line).is_some());

        // deleting twice is harmless
        surface.delete(oval);
        assert_eq!(surface.shape_count(), 1);
    }

    #[test]
    fn test_delete_all_drops_backdrop() {
        let mut surface = CanvasSurface::new(Color32::WHITE);
        surface.draw_line(&segment());
        surface.blit(&RgbImage::from_pixel(4, 2, Rgb([9, 9, 9])));
        assert_eq!(surface.backdrop().map(Backdrop::size), Some([4, 2]));

        surface.delete_all();
        assert_eq!(surface.shape_count(), 0);
        assert!(surface.backdrop().is_none());
    }

    #[test]
    fn test_each_blit_gets_a_new_version() {
        let mut surface = CanvasSurface::new(Color32::WHITE);
        surface.blit(&RgbImage::new(2, 2));
        let first = surface.backdrop().map(Backdrop::version);
        surface.blit(&RgbImage::new(2, 2));
        let second = surface.backdrop().map(Backdrop::version);
        assert_ne!(first, second);
    }

    #[test]
    fn test_paint_headless() {
        let ctx = egui::Context::default();
        let rect = Rect::from_min_size(pos2(10.0, 10.0), egui::vec2(50.0, 50.0));
        let painter = Painter::new(ctx.clone(), egui::LayerId::background(), rect);
        let mut textures = TextureManager::new(4);

        let mut surface = CanvasSurface::new(Color32::WHITE);
        surface.blit(&RgbImage::from_pixel(8, 8, Rgb([200, 0, 0])));
        surface.draw_line(&segment());
        surface.paint(&painter, rect, &mut textures);

        assert_eq!(textures.cache_size(), 1);
    }
}
