use image::{Rgba, RgbaImage};
use rusttype::{point, Font, Scale};

use crate::config::preset::Background;
use crate::error::{IconError, Result};
use crate::imaging::layout::Placement;

/// Largest side we are willing to allocate.
pub const MAX_CANVAS_SIDE: u32 = 16384;

pub const BLACK: [u8; 3] = [0, 0, 0];

/// Square RGBA8 surface, prefilled with its background.
pub struct Canvas {
    image: RgbaImage,
}

impl Canvas {
    pub fn new(size: u32, background: Background) -> Result<Self> {
        if size == 0 || size > MAX_CANVAS_SIDE {
            return Err(IconError::Canvas { size });
        }
        Ok(Self {
            image: RgbaImage::from_pixel(size, size, Rgba(background.fill())),
        })
    }

    pub fn size(&self) -> u32 {
        self.image.width()
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    /// Draws `text` with its pen starting at `at`, compositing `color` over
    /// whatever is already there. Zero-coverage pixels are left untouched and
    /// anything outside the canvas is clipped.
    pub fn draw_text(
        &mut self,
        font: &Font<'_>,
        scale: Scale,
        text: &str,
        at: Placement,
        color: [u8; 3],
    ) {
        let side = self.size() as i32;
        let origin = point(at.x as f32, at.baseline as f32);

        for glyph in font.layout(text, scale, origin) {
            let Some(bb) = glyph.pixel_bounding_box() else {
                continue;
            };
            let image = &mut self.image;
            glyph.draw(|gx, gy, coverage| {
                let x = bb.min.x + gx as i32;
                let y = bb.min.y + gy as i32;
                if x < 0 || y < 0 || x >= side || y >= side || coverage <= 0.0 {
                    return;
                }
                let px = image.get_pixel_mut(x as u32, y as u32);
                *px = blend_over(*px, color, coverage);
            });
        }
    }
}

/// Source-over of an opaque colour at `coverage` alpha onto a straight-alpha pixel.
pub fn blend_over(dst: Rgba<u8>, color: [u8; 3], coverage: f32) -> Rgba<u8> {
    let sa = coverage.clamp(0.0, 1.0);
    if sa == 0.0 {
        return dst;
    }
    let da = dst[3] as f32 / 255.0;
    let out_a = sa + da * (1.0 - sa);

    let mut out = [0u8; 4];
    for c in 0..3 {
        let v = (color[c] as f32 * sa + dst[c] as f32 * da * (1.0 - sa)) / out_a;
        out[c] = v.round().clamp(0.0, 255.0) as u8;
    }
    out[3] = (out_a * 255.0).round().clamp(0.0, 255.0) as u8;
    Rgba(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transparent_canvas_is_fully_clear() {
        let canvas = Canvas::new(32, Background::Transparent).unwrap();
        assert_eq!(canvas.size(), 32);
        assert!(canvas.image().pixels().all(|p| p.0 == [0, 0, 0, 0]));
    }

    #[test]
    fn solid_canvas_is_opaque_fill() {
        let canvas = Canvas::new(17, Background::Solid([64, 224, 208])).unwrap();
        let image = canvas.into_image();
        assert_eq!(image.dimensions(), (17, 17));
        assert!(image.pixels().all(|p| p.0 == [64, 224, 208, 255]));
    }

    #[test]
    fn zero_and_oversized_canvases_are_rejected() {
        assert!(matches!(
            Canvas::new(0, Background::Transparent),
            Err(IconError::Canvas { size: 0 })
        ));
        assert!(matches!(
            Canvas::new(MAX_CANVAS_SIDE + 1, Background::Transparent),
            Err(IconError::Canvas { .. })
        ));
    }

    #[test]
    fn full_coverage_is_solid_ink() {
        let over_clear = blend_over(Rgba([0, 0, 0, 0]), BLACK, 1.0);
        let over_fill = blend_over(Rgba([64, 224, 208, 255]), BLACK, 1.0);
        assert_eq!(over_clear.0, [0, 0, 0, 255]);
        assert_eq!(over_fill.0, [0, 0, 0, 255]);
    }

    #[test]
    fn zero_coverage_leaves_pixel_alone() {
        let px = Rgba([64, 224, 208, 255]);
        assert_eq!(blend_over(px, BLACK, 0.0), px);
        assert_eq!(blend_over(px, BLACK, -0.5), px);
    }

    #[test]
    fn partial_coverage_over_clear_only_sets_alpha() {
        let px = blend_over(Rgba([0, 0, 0, 0]), BLACK, 0.5);
        assert_eq!(px.0, [0, 0, 0, 128]);
    }

    #[test]
    fn partial_coverage_over_opaque_darkens() {
        let px = blend_over(Rgba([64, 224, 208, 255]), BLACK, 0.5);
        assert_eq!(px.0, [32, 112, 104, 255]);
    }

    #[test]
    fn coverage_above_one_is_clamped() {
        let px = blend_over(Rgba([200, 200, 200, 255]), BLACK, 1.7);
        assert_eq!(px.0, [0, 0, 0, 255]);
    }
}
