use crate::canvas::Canvas;
use crate::error::SlideError;
use crate::rect::Rect;
use crate::units::Px;

/// Margins are used when laying out text regions on a slide. There is no
/// control preventing a text block from overflowing the margins—the
/// margins define the usable region handed to the layout functions, and a
/// block taller than that region renders past it unchanged.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Margins {
    pub top: Px,
    pub right: Px,
    pub bottom: Px,
    pub left: Px,
}

impl Margins {
    /// Create margins by specifying individual components in a clockwise
    /// fashion starting at the top (in the same order as CSS margins)
    pub fn trbl(top: Px, right: Px, bottom: Px, left: Px) -> Margins {
        Margins {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Create margins where all values are equal
    pub fn all(value: Px) -> Margins {
        Margins {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    /// Create margins by specifying different values for vertical (top and
    /// bottom) and horizontal (left and right) margins
    pub fn symmetric(vertical: Px, horizontal: Px) -> Margins {
        Margins {
            top: vertical,
            right: horizontal,
            bottom: vertical,
            left: horizontal,
        }
    }

    /// Create margins where all values are 0
    pub fn empty() -> Margins {
        Margins::default()
    }
}

/// How the usable layout region is carved out of the canvas: either a
/// single percentage of the canvas width kept clear on each horizontal
/// edge (the full canvas height stays usable), or four explicit pixel
/// offsets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MarginSpec {
    /// Percentage of the canvas width applied symmetrically to the left
    /// and right edges. Top and bottom margins are zero.
    Percent(f32),
    /// Explicit pixel offsets on all four edges.
    Absolute(Margins),
}

impl Default for MarginSpec {
    fn default() -> Self {
        MarginSpec::Percent(10.0)
    }
}

impl MarginSpec {
    /// Resolve the spec against a canvas, yielding the usable content box.
    /// A spec that leaves no usable width or height is a configuration
    /// error, not a layout outcome.
    pub fn content_box(&self, canvas: Canvas) -> Result<Rect, SlideError> {
        let margins = match *self {
            MarginSpec::Percent(percentage) => {
                let horizontal = Px((canvas.width.0 as f32 * percentage / 100.0) as i32);
                Margins::symmetric(Px(0), horizontal)
            }
            MarginSpec::Absolute(margins) => margins,
        };

        let content = Rect {
            x1: margins.left,
            y1: margins.top,
            x2: canvas.width - margins.right,
            y2: canvas.height - margins.bottom,
        };

        if !content.width().is_positive() || !content.height().is_positive() {
            return Err(SlideError::Configuration(format!(
                "margins leave no usable region on a {}x{} canvas",
                canvas.width, canvas.height
            )));
        }

        Ok(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_margins_keep_full_height() {
        let canvas = Canvas::new(Px(1000), Px(800));
        let content = MarginSpec::Percent(10.0).content_box(canvas).unwrap();
        assert_eq!(content.x1, Px(100));
        assert_eq!(content.x2, Px(900));
        assert_eq!(content.y1, Px(0));
        assert_eq!(content.y2, Px(800));
    }

    #[test]
    fn absolute_margins_apply_all_four_edges() {
        let canvas = Canvas::new(Px(1080), Px(1080));
        let spec = MarginSpec::Absolute(Margins::trbl(Px(200), Px(200), Px(200), Px(200)));
        let content = spec.content_box(canvas).unwrap();
        assert_eq!(content.width(), Px(680));
        assert_eq!(content.height(), Px(680));
    }

    #[test]
    fn degenerate_margins_are_a_configuration_error() {
        let canvas = Canvas::new(Px(300), Px(300));
        let spec = MarginSpec::Absolute(Margins::symmetric(Px(0), Px(150)));
        assert!(matches!(
            spec.content_box(canvas),
            Err(SlideError::Configuration(_))
        ));

        let spec = MarginSpec::Percent(50.0);
        assert!(matches!(
            spec.content_box(canvas),
            Err(SlideError::Configuration(_))
        ));
    }
}
