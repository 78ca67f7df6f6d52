//! Shared glyph rasterization for slides.
//!
//! Lines arrive here already wrapped and positioned; this module only
//! stamps them onto the pixel buffer. Glyph coverage is alpha-blended
//! directly into the opaque RGB destination.

use crate::colour::Colour;
use crate::font::Font;
use crate::layout::TextLayout;
use crate::units::Px;
use image::RgbImage;
use rusttype::{point, Scale};

/// Draw a single run of text with the top-left corner of its line box at
/// `(x, y)`. Pixels outside the image bounds are discarded, which is how
/// accepted block overflow leaves the canvas cleanly.
pub(crate) fn draw_text_run(
    img: &mut RgbImage,
    font: &Font,
    size: f32,
    x: Px,
    y: Px,
    colour: Colour,
    text: &str,
) {
    let scale = Scale::uniform(size);
    let v_metrics = font.face().v_metrics(scale);
    let baseline = y.0 as f32 + v_metrics.ascent;
    let mut caret = x.0 as f32;

    for ch in text.chars() {
        let glyph = font
            .face()
            .glyph(ch)
            .scaled(scale)
            .positioned(point(caret, baseline));

        if let Some(bb) = glyph.pixel_bounding_box() {
            glyph.draw(|gx, gy, coverage| {
                let px = gx as i32 + bb.min.x;
                let py = gy as i32 + bb.min.y;
                if px < 0 || py < 0 {
                    return;
                }
                let (px, py) = (px as u32, py as u32);
                if px >= img.width() || py >= img.height() {
                    return;
                }
                if coverage <= 0.0 {
                    return;
                }

                let dst = img.get_pixel_mut(px, py);
                let inv = 1.0 - coverage;
                dst.0[0] = (colour.r as f32 * coverage + dst.0[0] as f32 * inv) as u8;
                dst.0[1] = (colour.g as f32 * coverage + dst.0[1] as f32 * inv) as u8;
                dst.0[2] = (colour.b as f32 * coverage + dst.0[2] as f32 * inv) as u8;
            });
        }

        caret += glyph.unpositioned().h_metrics().advance_width;
    }
}

/// Draw every placed line of a laid-out text block.
pub(crate) fn draw_layout(
    img: &mut RgbImage,
    font: &Font,
    size: f32,
    colour: Colour,
    layout: &TextLayout,
) {
    for line in &layout.lines {
        draw_text_run(img, font, size, line.x, line.y, colour, &line.text);
    }
}
