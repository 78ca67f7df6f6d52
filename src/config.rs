use crate::colour::{colours, Colour};
use crate::error::SlideError;
use crate::font::FontRole;
use crate::layout::{Alignment, MarginSpec, Margins};
use crate::units::Px;
use std::path::PathBuf;

/// Presentation preset for one slide role: which face, at what size,
/// within which margins, aligned how.
#[derive(Debug, Clone, PartialEq)]
pub struct RegionStyle {
    pub font: FontRole,
    pub size: f32,
    pub margins: MarginSpec,
    pub align: Alignment,
}

/// Immutable rendering configuration, passed by reference into every
/// compose and render call. There is no process-wide state; two runs with
/// different configurations can coexist in one process.
///
/// The defaults mirror the reference presets: white text, 10% symmetric
/// content margins, 10px line spacing, title slide regions positioned for
/// a 1080x1080 canvas, ten content slides before the overflow marker.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    /// Base background duplicated under every content/overflow/CTA slide.
    pub slide_background: PathBuf,
    /// Distinct background for the title slide; the content background is
    /// reused when absent.
    pub title_background: Option<PathBuf>,
    pub font: PathBuf,
    /// Optional bold display face; regions asking for bold fall back to
    /// the regular face when this is absent.
    pub bold_font: Option<PathBuf>,
    pub text_colour: Colour,
    pub line_spacing: Px,
    pub title: RegionStyle,
    pub location: RegionStyle,
    pub read_more: RegionStyle,
    pub content: RegionStyle,
    pub cta: RegionStyle,
    pub cta_text: String,
    pub read_more_text: String,
    /// Title used when a record carries none.
    pub default_title: String,
    /// Content slides per story before the overflow marker takes over.
    pub sentence_cap: usize,
    pub output_dir: PathBuf,
}

impl RenderConfig {
    pub fn new<P: Into<PathBuf>, Q: Into<PathBuf>>(slide_background: P, font: Q) -> RenderConfig {
        RenderConfig {
            slide_background: slide_background.into(),
            title_background: None,
            font: font.into(),
            bold_font: None,
            text_colour: colours::WHITE,
            line_spacing: Px(10),
            title: RegionStyle {
                font: FontRole::Bold,
                size: 40.0,
                margins: MarginSpec::Absolute(Margins::trbl(Px(250), Px(100), Px(500), Px(150))),
                align: Alignment::Left,
            },
            location: RegionStyle {
                font: FontRole::Regular,
                size: 30.0,
                margins: MarginSpec::Absolute(Margins::trbl(Px(680), Px(50), Px(200), Px(540))),
                align: Alignment::Left,
            },
            read_more: RegionStyle {
                font: FontRole::Regular,
                size: 20.0,
                margins: MarginSpec::Absolute(Margins::trbl(Px(920), Px(50), Px(80), Px(830))),
                align: Alignment::Left,
            },
            content: RegionStyle {
                font: FontRole::Regular,
                size: 30.0,
                margins: MarginSpec::Percent(10.0),
                align: Alignment::Center,
            },
            cta: RegionStyle {
                font: FontRole::Regular,
                size: 35.0,
                margins: MarginSpec::Percent(10.0),
                align: Alignment::Center,
            },
            cta_text: "Read more on Lumina.".into(),
            read_more_text: "read experience \u{2192}".into(),
            default_title: "I am more than stereotypes and assumptions...".into(),
            sentence_cap: 10,
            output_dir: PathBuf::from("output_images"),
        }
    }

    /// Build a configuration from the environment (a `.env` file is
    /// honoured when present). `SLIDE_BACKGROUND` and `FONT_PATH` are
    /// required; the rest of the presets are overridable individually.
    pub fn from_env() -> Result<RenderConfig, SlideError> {
        dotenvy::dotenv().ok();

        let mut config = RenderConfig::new(
            require_env("SLIDE_BACKGROUND")?,
            require_env("FONT_PATH")?,
        );
        config.title_background = std::env::var("TITLE_BACKGROUND").ok().map(PathBuf::from);
        config.bold_font = std::env::var("BOLD_FONT_PATH").ok().map(PathBuf::from);
        if let Ok(dir) = std::env::var("OUTPUT_DIR") {
            config.output_dir = dir.into();
        }
        if let Ok(text) = std::env::var("CTA_TEXT") {
            config.cta_text = text;
        }
        Ok(config)
    }
}

/// Upload credentials, loaded from the environment rather than carried in
/// configuration files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn from_env() -> Result<Credentials, SlideError> {
        dotenvy::dotenv().ok();

        Ok(Credentials {
            username: require_env("IG_USERNAME")?,
            password: require_env("IG_PASSWORD")?,
        })
    }
}

fn require_env(key: &str) -> Result<String, SlideError> {
    std::env::var(key).map_err(|_| {
        SlideError::Configuration(format!("required environment variable '{key}' is not set"))
    })
}
