use egui::{Color32, pos2};
use image::{Rgb, RgbImage};

use crate::stroke::StrokeSegment;

pub fn to_rgb(color: Color32) -> Rgb<u8> {
    Rgb([color.r(), color.g(), color.b()])
}

/// The authoritative pixel state of the drawing.
///
/// Segments are rasterized with a plain distance test (no antialiasing), while
/// the display surface draws antialiased egui lines. Saved images can therefore
/// differ from the screen by a pixel along stroke edges.
#[derive(Debug, Clone)]
pub struct RasterModel {
    width: u32,
    height: u32,
    background: Color32,
    image: RgbImage,
}

impl RasterModel {
    pub fn new(width: u32, height: u32, background: Color32) -> Self {
        Self {
            width,
            height,
            background,
            image: Self::blank(width, height, background),
        }
    }

    fn blank(width: u32, height: u32, background: Color32) -> RgbImage {
        RgbImage::from_pixel(width, height, to_rgb(background))
    }

    /// Size of the current buffer, which differs from the canvas after loading
    /// an image of another size.
    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    /// Paints a round-capped line: every pixel whose center lies within
    /// `width / 2` of the segment takes the segment color.
    pub fn draw_segment(&mut self, seg: &StrokeSegment) {
        let (w, h) = self.image.dimensions();
        if w == 0 || h == 0 {
            return;
        }

        let bounds = seg.bounds();
        let x0 = (bounds.min.x.floor() as i64).max(0);
        let y0 = (bounds.min.y.floor() as i64).max(0);
        let x1 = (bounds.max.x.ceil() as i64).min(w as i64 - 1);
        let y1 = (bounds.max.y.ceil() as i64).min(h as i64 - 1);

        let radius = seg.radius();
        let color = to_rgb(seg.color);
        for y in y0..=y1 {
            for x in x0..=x1 {
                if seg.distance_to(pos2(x as f32, y as f32)) <= radius {
                    self.image.put_pixel(x as u32, y as u32, color);
                }
            }
        }
    }

    /// Starts over with a blank buffer of the configured canvas size.
    pub fn clear(&mut self) {
        self.image = Self::blank(self.width, self.height, self.background);
    }

    /// Replaces the buffer wholesale. No resizing or cropping is applied.
    pub fn load(&mut self, image: RgbImage) {
        self.image = image;
    }

    pub fn snapshot(&self) -> &RgbImage {
        &self.image
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seg(from: (f32, f32), to: (f32, f32), width: u32, color: Color32) -> StrokeSegment {
        StrokeSegment::new(pos2(from.0, from.1), pos2(to.0, to.1), width, color)
    }

    #[test]
    fn test_new_is_filled_with_background() {
        let raster = RasterModel::new(20, 10, Color32::WHITE);
        assert_eq!(raster.dimensions(), (20, 10));
        assert!(raster.snapshot().pixels().all(|p| *p == Rgb([255, 255, 255])));
    }

    #[test]
    fn test_thin_horizontal_line() {
        let mut raster = RasterModel::new(20, 20, Color32::WHITE);
        raster.draw_segment(&seg((2.0, 5.0), (8.0, 5.0), 1, Color32::BLACK));

        let img = raster.snapshot();
        for x in 2..=8 {
            assert_eq!(*img.get_pixel(x, 5), Rgb([0, 0, 0]), "x = {x}");
        }
        assert_eq!(*img.get_pixel(1, 5), Rgb([255, 255, 255]));
        assert_eq!(*img.get_pixel(9, 5), Rgb([255, 255, 255]));
        assert_eq!(*img.get_pixel(5, 4), Rgb([255, 255, 255]));
        assert_eq!(*img.get_pixel(5, 6), Rgb([255, 255, 255]));
    }

    #[test]
    fn test_round_cap_extends_past_endpoint() {
        let mut raster = RasterModel::new(30, 30, Color32::WHITE);
        raster.draw_segment(&seg((10.0, 10.0), (20.0, 10.0), 6, Color32::BLACK));

        let img = raster.snapshot();
        // cap reaches 3 pixels past the end along the axis
        assert_eq!(*img.get_pixel(23, 10), Rgb([0, 0, 0]));
        assert_eq!(*img.get_pixel(24, 10), Rgb([255, 255, 255]));
        // but the corner of the square end stays empty
        assert_eq!(*img.get_pixel(23, 13), Rgb([255, 255, 255]));
    }

    #[test]
    fn test_segment_partly_off_canvas_is_clipped() {
        let mut raster = RasterModel::new(10, 10, Color32::WHITE);
        raster.draw_segment(&seg((-5.0, 5.0), (50.0, 5.0), 3, Color32::BLACK));

        let img = raster.snapshot();
        assert_eq!(*img.get_pixel(0, 5), Rgb([0, 0, 0]));
        assert_eq!(*img.get_pixel(9, 5), Rgb([0, 0, 0]));
    }

    #[test]
    fn test_clear_restores_blank_canvas_size() {
        let mut raster = RasterModel::new(10, 10, Color32::WHITE);
        raster.load(RgbImage::from_pixel(4, 3, Rgb([1, 2, 3])));
        assert_eq!(raster.dimensions(), (4, 3));

        raster.clear();
        let fresh = RasterModel::new(10, 10, Color32::WHITE);
        assert_eq!(raster.snapshot(), fresh.snapshot());
    }

    #[test]
    fn test_later_segments_paint_over_earlier_ones() {
        let red = Color32::from_rgb(255, 0, 0);
        let mut raster = RasterModel::new(10, 10, Color32::WHITE);
        raster.draw_segment(&seg((0.0, 5.0), (9.0, 5.0), 1, Color32::BLACK));
        raster.draw_segment(&seg((5.0, 0.0), (5.0, 9.0), 1, red));

        assert_eq!(*raster.snapshot().get_pixel(5, 5), to_rgb(red));
    }
}
