//! Pre-defined canvas sizes for the common feed formats.
//!
//! All sizes are the pixel dimensions the upload service expects for each
//! format. Slides rendered at other sizes are uploaded as-is; the service
//! may recrop them.
//!
//! # Available Sizes
//!
//! `SQUARE` (1:1 feed post), `PORTRAIT` (4:5 feed post), `LANDSCAPE`
//! (1.91:1 feed post), `STORY` (9:16 full-screen story)
//!
//! # Example
//!
//! ```
//! use slide_gen::canvas::{Canvas, SQUARE, STORY};
//!
//! // use a standard size
//! let canvas = SQUARE;
//! assert_eq!(canvas.width, canvas.height);
//! ```

use crate::units::*;

/// The pixel dimensions of the target image. Immutable for the duration of
/// one layout call; usually taken from the base background image itself.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Canvas {
    pub width: Px,
    pub height: Px,
}

impl Canvas {
    pub fn new(width: Px, height: Px) -> Canvas {
        Canvas { width, height }
    }

    /// The canvas of an already-loaded image.
    pub fn of_image(image: &image::DynamicImage) -> Canvas {
        use image::GenericImageView;
        let (width, height) = image.dimensions();
        Canvas {
            width: width.into(),
            height: height.into(),
        }
    }
}

pub const SQUARE: Canvas = Canvas {
    width: Px(1080),
    height: Px(1080),
};
pub const PORTRAIT: Canvas = Canvas {
    width: Px(1080),
    height: Px(1350),
};
pub const LANDSCAPE: Canvas = Canvas {
    width: Px(1080),
    height: Px(566),
};
pub const STORY: Canvas = Canvas {
    width: Px(1080),
    height: Px(1920),
};
