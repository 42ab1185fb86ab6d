//! Text measurement and metrics-based centring.
//!
//! Centring never inspects pixels: the box is ascent + descent + leading tall
//! and as wide as the kerned advances, and that box is what gets centred.

use rusttype::{point, Font, Scale};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TextMetrics {
    pub width: i32,
    pub ascent: i32,
    pub descent: i32,
    pub leading: i32,
}

impl TextMetrics {
    pub fn height(&self) -> i32 {
        self.ascent + self.descent + self.leading
    }
}

/// Pen position for the first glyph: left edge and baseline.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Placement {
    pub x: i32,
    pub baseline: i32,
}

pub fn measure(font: &Font<'_>, scale: Scale, text: &str) -> TextMetrics {
    let v = font.v_metrics(scale);

    let width = font
        .layout(text, scale, point(0.0, 0.0))
        .last()
        .map(|g| g.position().x + g.unpositioned().h_metrics().advance_width)
        .unwrap_or(0.0);

    TextMetrics {
        width: width.round() as i32,
        ascent: v.ascent.ceil() as i32,
        descent: (-v.descent).ceil() as i32,
        leading: v.line_gap.max(0.0).round() as i32,
    }
}

/// Floor division throughout, so oversized text lands at a negative offset
/// rather than being nudged toward the origin.
pub fn center(side: u32, metrics: &TextMetrics) -> Placement {
    let side = side as i32;
    Placement {
        x: (side - metrics.width).div_euclid(2),
        baseline: (side - metrics.height()).div_euclid(2) + metrics.ascent,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics(width: i32, ascent: i32, descent: i32, leading: i32) -> TextMetrics {
        TextMetrics { width, ascent, descent, leading }
    }

    #[test]
    fn height_sums_vertical_metrics() {
        assert_eq!(metrics(10, 40, 12, 3).height(), 55);
    }

    #[test]
    fn horizontal_offset_is_floor_half_of_slack() {
        for side in [1u32, 2, 17, 432, 1024] {
            for width in 0..=side as i32 {
                let p = center(side, &metrics(width, 0, 0, 0));
                assert_eq!(p.x, (side as i32 - width) / 2);
                assert!(p.x >= 0);
            }
        }
    }

    #[test]
    fn baseline_centres_the_box() {
        // 432 - (140 + 40 + 0) = 252, half is 126, plus ascent
        let p = center(432, &metrics(300, 140, 40, 0));
        assert_eq!(p, Placement { x: 66, baseline: 266 });
    }

    #[test]
    fn odd_slack_rounds_down() {
        let p = center(432, &metrics(301, 141, 40, 0));
        assert_eq!(p.x, 65);
        assert_eq!(p.baseline, 125 + 141);
    }

    #[test]
    fn oversized_text_floors_negative_offset() {
        let p = center(10, &metrics(13, 10, 3, 0));
        assert_eq!(p.x, -2);
        assert_eq!(p.baseline, -2 + 10);
    }

    #[test]
    fn box_centre_matches_canvas_centre() {
        let m = metrics(200, 90, 30, 10);
        let p = center(400, &m);
        let top = p.baseline - m.ascent;
        assert_eq!(p.x * 2 + m.width, 400);
        assert_eq!(top * 2 + m.height(), 400);
    }
}
