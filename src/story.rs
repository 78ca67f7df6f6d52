use crate::config::{RegionStyle, RenderConfig};
use crate::error::SlideError;
use crate::font::{Font, FontBook};
use crate::slide::{Slide, SlideKind, TextRegion};
use image::DynamicImage;
use log::{debug, info};
use std::path::{Path, PathBuf};

/// One input record: the narrative to render plus its optional metadata.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StoryRecord {
    /// Label shown on the title slide (a country name in the reference
    /// dataset).
    pub location: String,
    pub narrative: String,
    pub title: Option<String>,
    pub caption: Option<String>,
}

/// An ordered set of slides sharing one caption, posted as a single upload
/// unit. Constructed per record, rendered once, handed to the publisher,
/// then discarded. Nothing persists beyond the output image files.
#[derive(Debug, Clone, PartialEq)]
pub struct Story {
    pub slides: Vec<Slide>,
    pub caption: String,
}

/// Marker drawn on the overflow slide that stands in for the sentences
/// dropped by the cap.
const OVERFLOW_MARKER: &str = "...";

/// Turn one record and its tokenized sentences into the ordered slide
/// sequence: title, one content slide per sentence up to the configured
/// cap, a single overflow marker replacing anything beyond the cap, then
/// the call-to-action. Pure sequencing; no I/O happens here.
pub fn assemble_story(
    config: &RenderConfig,
    record: &StoryRecord,
    sentences: &[String],
    caption: String,
) -> Story {
    let cap = config.sentence_cap;
    let mut slides = Vec::with_capacity(sentences.len().min(cap) + 3);

    slides.push(title_slide(config, record));

    for (index, sentence) in sentences.iter().take(cap).enumerate() {
        slides.push(
            Slide::new(SlideKind::Content { index: index + 1 }).with_region(region(
                sentence.clone(),
                &config.content,
                config,
            )),
        );
    }

    if sentences.len() > cap {
        info!(
            "story has {} sentences; keeping {cap} and appending an overflow slide",
            sentences.len()
        );
        slides.push(Slide::new(SlideKind::Overflow).with_region(region(
            OVERFLOW_MARKER.into(),
            &config.content,
            config,
        )));
    }

    slides.push(Slide::new(SlideKind::Cta).with_region(region(
        config.cta_text.clone(),
        &config.cta,
        config,
    )));

    Story { slides, caption }
}

fn region(text: String, style: &RegionStyle, config: &RenderConfig) -> TextRegion {
    TextRegion {
        text,
        font: style.font,
        size: style.size,
        colour: config.text_colour,
        margins: style.margins,
        align: style.align,
        line_spacing: config.line_spacing,
    }
}

fn title_slide(config: &RenderConfig, record: &StoryRecord) -> Slide {
    let title = record
        .title
        .clone()
        .unwrap_or_else(|| config.default_title.clone());

    Slide::new(SlideKind::Title)
        .with_region(region(title, &config.title, config))
        .with_region(region(record.location.clone(), &config.location, config))
        .with_region(region(
            config.read_more_text.clone(),
            &config.read_more,
            config,
        ))
}

/// Rendering seam between the batch driver and the raster pipeline: turn
/// an assembled story into one image file per slide under `dir`.
pub trait Renderer {
    fn render_story(&self, story: &Story, dir: &Path) -> Result<Vec<PathBuf>, SlideError>;
}

/// Loads the shared render assets once and renders assembled stories into
/// per-story directories.
pub struct StoryRenderer<'a> {
    config: &'a RenderConfig,
    book: FontBook,
    slide_base: DynamicImage,
    title_base: DynamicImage,
}

impl<'a> StoryRenderer<'a> {
    /// Load the fonts and base images named by the configuration. A
    /// missing required asset is a configuration error; a missing bold
    /// face is not (regions asking for bold fall back to the regular
    /// face).
    pub fn new(config: &'a RenderConfig) -> Result<StoryRenderer<'a>, SlideError> {
        let mut book = FontBook::new(Font::load_from_disk(&config.font)?);
        if let Some(path) = &config.bold_font {
            match Font::load_optional(path)? {
                Some(bold) => {
                    book.set_bold(bold);
                }
                None => debug!(
                    "bold font {} not present, falling back to regular",
                    path.display()
                ),
            }
        }

        let slide_base = open_base_image(&config.slide_background)?;
        let title_base = match &config.title_background {
            Some(path) => open_base_image(path)?,
            None => slide_base.clone(),
        };

        Ok(StoryRenderer {
            config,
            book,
            slide_base,
            title_base,
        })
    }

    pub fn config(&self) -> &RenderConfig {
        self.config
    }

    pub fn fonts(&self) -> &FontBook {
        &self.book
    }

    /// Render every slide of the story into `dir` (created if needed),
    /// returning the image paths in slide order.
    pub fn render_story(&self, story: &Story, dir: &Path) -> Result<Vec<PathBuf>, SlideError> {
        std::fs::create_dir_all(dir)?;

        let mut paths = Vec::with_capacity(story.slides.len());
        for slide in &story.slides {
            let base = match slide.kind {
                SlideKind::Title => &self.title_base,
                _ => &self.slide_base,
            };
            let rendered = slide.render(base, &self.book)?;
            let path = dir.join(slide.kind.file_name());
            rendered.save_with_format(&path, image::ImageFormat::Jpeg)?;
            debug!("saved {}", path.display());
            paths.push(path);
        }

        Ok(paths)
    }
}

impl Renderer for StoryRenderer<'_> {
    fn render_story(&self, story: &Story, dir: &Path) -> Result<Vec<PathBuf>, SlideError> {
        StoryRenderer::render_story(self, story, dir)
    }
}

fn open_base_image(path: &Path) -> Result<DynamicImage, SlideError> {
    image::open(path).map_err(|e| {
        SlideError::Configuration(format!(
            "unable to open base image {}: {e}",
            path.display()
        ))
    })
}
