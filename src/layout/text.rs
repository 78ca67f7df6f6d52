use crate::font::FontMetrics;
use crate::layout::Alignment;
use crate::rect::Rect;
use crate::units::Px;

/// A single wrapped line with its resolved draw position. `x` and `y` are
/// the top-left corner of the line's box on the canvas.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedLine {
    pub text: String,
    pub x: Px,
    pub y: Px,
}

/// The result of laying out one text region: the placed lines in input
/// order, the per-line advance, and the height of the whole block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextLayout {
    pub lines: Vec<PlacedLine>,
    pub line_height: Px,
    pub block_height: Px,
}

/// Breaks an input string into the minimal-height sequence of lines such
/// that each line's measured width does not exceed `max_width`.
///
/// Tokenization is on whitespace and non-destructive: no words are
/// dropped, no hyphenation is performed, and joining the returned lines
/// with single spaces reconstructs the whitespace-normalized input. A
/// single word whose measured width alone exceeds `max_width` is still
/// placed as its own line. That is the documented overflow behaviour,
/// not something to correct here.
///
/// Empty (or all-whitespace) input produces zero lines; callers treat
/// that as a no-op, not an error.
pub fn wrap_words<M: FontMetrics + ?Sized>(
    text: &str,
    metrics: &M,
    size: f32,
    max_width: Px,
) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{current} {word}")
        };

        if metrics.measure(&candidate, size).width <= max_width {
            current = candidate;
        } else {
            // line is full; close it out and start over with this word
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            current = word.to_string();
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}

/// Wraps `text` to the width of `region` and positions the resulting block
/// so it is vertically centered within the region:
/// `start_y = region_top + (usable_height - block_height) / 2`, each
/// subsequent line one `line_height` further down. The line height is the
/// font's reference-glyph span plus the fixed `line_spacing`.
///
/// No clamping is performed if the block is taller than the region; lines
/// may land outside the canvas. That is accepted overflow behaviour.
pub fn layout_block<M: FontMetrics + ?Sized>(
    text: &str,
    metrics: &M,
    size: f32,
    region: Rect,
    line_spacing: Px,
    align: Alignment,
) -> TextLayout {
    let lines = wrap_words(text, metrics, size, region.width());

    let line_height = metrics.reference_height(size) + line_spacing;
    let block_height = line_height * lines.len() as i32;
    let start_y = region.y1 + (region.height() - block_height) / 2;

    let lines = lines
        .into_iter()
        .enumerate()
        .map(|(index, text)| {
            let x = match align {
                Alignment::Center => {
                    let line_width = metrics.measure(&text, size).width;
                    region.x1 + (region.width() - line_width) / 2
                }
                Alignment::Left => region.x1,
            };
            let y = start_y + line_height * index as i32;
            PlacedLine { text, x, y }
        })
        .collect();

    TextLayout {
        lines,
        line_height,
        block_height,
    }
}
