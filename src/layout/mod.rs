//! Utility functions and structures to lay out wrapped text within a
//! margin-constrained region of a slide canvas.

mod margins;
pub use margins::*;

mod text;
pub use text::*;

/// Horizontal placement of each wrapped line within the usable region.
/// Alignment is a per-call configuration option, not a property of the
/// text; different slides in one story may align differently.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum Alignment {
    /// `x = region_left + (usable_width - line_width) / 2`
    #[default]
    Center,
    /// `x = region_left`, regardless of line width
    Left,
}
