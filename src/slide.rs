use crate::canvas::Canvas;
use crate::colour::Colour;
use crate::content::draw_layout;
use crate::error::SlideError;
use crate::font::{FontBook, FontRole};
use crate::layout::{layout_block, Alignment, MarginSpec};
use crate::units::Px;
use image::{DynamicImage, RgbImage};

/// The role a slide plays within a story. The role determines the output
/// file name within the story's directory.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SlideKind {
    Title,
    /// 1-based position among the story's content slides.
    Content { index: usize },
    /// Marker slide appended when the sentence cap truncated the story.
    Overflow,
    Cta,
}

impl SlideKind {
    pub fn file_name(&self) -> String {
        match self {
            SlideKind::Title => "output_title.jpg".into(),
            SlideKind::Content { index } => format!("output_{index}.jpg"),
            SlideKind::Overflow => "output_more.jpg".into(),
            SlideKind::Cta => "output_cta.jpg".into(),
        }
    }
}

/// One independently-positioned block of text on a slide: its own font,
/// size, colour, margins, alignment, and line spacing. Regions on the same
/// slide share nothing but the base canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct TextRegion {
    pub text: String,
    pub font: FontRole,
    pub size: f32,
    pub colour: Colour,
    pub margins: MarginSpec,
    pub align: Alignment,
    pub line_spacing: Px,
}

/// A logical slide: a role plus the text regions to stamp onto a copy of
/// the base background image.
#[derive(Debug, Clone, PartialEq)]
pub struct Slide {
    pub kind: SlideKind,
    pub regions: Vec<TextRegion>,
}

impl Slide {
    pub fn new(kind: SlideKind) -> Slide {
        Slide {
            kind,
            regions: Vec::new(),
        }
    }

    pub fn with_region(mut self, region: TextRegion) -> Slide {
        self.regions.push(region);
        self
    }

    /// Render the slide onto a copy of `base`. Each region is wrapped and
    /// positioned independently, then rasterized. The output is opaque
    /// RGB, ready to be saved as JPEG for the upload collaborator.
    pub fn render(&self, base: &DynamicImage, book: &FontBook) -> Result<RgbImage, SlideError> {
        let mut img = base.to_rgb8();
        let canvas = Canvas::new(img.width().into(), img.height().into());

        for region in &self.regions {
            let font = book.resolve(region.font);
            let content_box = region.margins.content_box(canvas)?;
            let layout = layout_block(
                &region.text,
                font,
                region.size,
                content_box,
                region.line_spacing,
                region.align,
            );
            draw_layout(&mut img, font, region.size, region.colour, &layout);
        }

        Ok(img)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_names_follow_slide_roles() {
        assert_eq!(SlideKind::Title.file_name(), "output_title.jpg");
        assert_eq!(SlideKind::Content { index: 3 }.file_name(), "output_3.jpg");
        assert_eq!(SlideKind::Overflow.file_name(), "output_more.jpg");
        assert_eq!(SlideKind::Cta.file_name(), "output_cta.jpg");
    }
}
