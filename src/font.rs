use crate::{SlideError, Px};
use id_arena::{Arena, Id};
use rusttype::Scale;
use std::path::Path;

/// The rendered bounding box of a piece of text: the advance width of the
/// glyph run and the vertical span of the face at that size.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Extent {
    pub width: Px,
    pub height: Px,
}

/// The measurement capability the layout engine depends on. The shipped
/// implementation is [`Font`]; tests substitute a deterministic
/// fixed-advance implementation. Text shaping is not reimplemented here;
/// whatever the face reports is treated as ground truth.
pub trait FontMetrics {
    /// Measure the rendered bounding box of `text` at the nominal `size`.
    fn measure(&self, text: &str, size: f32) -> Extent;

    /// The height of the `"Aj"` reference sample: the ascender-to-descender
    /// span used as the base line height for a block of wrapped text.
    fn reference_height(&self, size: f32) -> Px;
}

/// A parsed font face. Fonts can be TTF or OTF fonts; the face is kept in
/// memory for the lifetime of the [`FontBook`] that owns it.
///
/// Typically, fonts are referred to throughout user applications by their
/// [`Id`] within the font book, and not by value.
pub struct Font {
    face: rusttype::Font<'static>,
}

impl Font {
    /// Load a font from raw bytes, parsing the font and returning an error
    /// if the font could not be parsed
    pub fn load(bytes: Vec<u8>) -> Result<Font, SlideError> {
        let face = rusttype::Font::try_from_vec(bytes).ok_or(SlideError::FontParsing)?;
        Ok(Font { face })
    }

    /// Load and parse a font file from disk. A missing or unreadable file
    /// is a configuration error naming the path, not a bare I/O error.
    pub fn load_from_disk<P: AsRef<Path>>(path: P) -> Result<Font, SlideError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|e| {
            SlideError::Configuration(format!("font file {} not found: {e}", path.display()))
        })?;
        Font::load(bytes)
    }

    /// Explicit optional-asset lookup for style variants: an absent file is
    /// a normal answer, while a present but unparseable file is still an
    /// error.
    pub fn load_optional<P: AsRef<Path>>(path: P) -> Result<Option<Font>, SlideError> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(None);
        }
        Font::load(std::fs::read(path)?).map(Some)
    }

    /// Calculate the ascent (distance from the baseline to the top of the
    /// font) for the given font size
    pub fn ascent(&self, size: f32) -> f32 {
        self.face.v_metrics(Scale::uniform(size)).ascent
    }

    /// Calculate the descent (distance from the baseline to the bottom of
    /// the font) for the given font size. Note: this is usually negative
    pub fn descent(&self, size: f32) -> f32 {
        self.face.v_metrics(Scale::uniform(size)).descent
    }

    /// Calculate the default line height of the font for the given size:
    /// the full ascender-to-descender span plus the face's line gap.
    pub fn line_height(&self, size: f32) -> f32 {
        let v = self.face.v_metrics(Scale::uniform(size));
        v.ascent - v.descent + v.line_gap
    }

    /// Calculate the advance width of a given string of text at the given
    /// font size. Ignores newlines / any glyphs not in the font.
    pub fn width_of_text(&self, text: &str, size: f32) -> f32 {
        let scale = Scale::uniform(size);
        text.chars()
            .map(|ch| self.face.glyph(ch).scaled(scale).h_metrics().advance_width)
            .sum()
    }

    pub(crate) fn face(&self) -> &rusttype::Font<'static> {
        &self.face
    }
}

impl FontMetrics for Font {
    fn measure(&self, text: &str, size: f32) -> Extent {
        Extent {
            width: Px::ceil_from(self.width_of_text(text, size)),
            height: self.reference_height(size),
        }
    }

    fn reference_height(&self, size: f32) -> Px {
        let v = self.face.v_metrics(Scale::uniform(size));
        Px::ceil_from(v.ascent - v.descent)
    }
}

/// Which face a text region asks for. Regions carry a role rather than a
/// font id so that slide assembly stays independent of asset loading;
/// resolution happens at render time.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum FontRole {
    #[default]
    Regular,
    /// The display variant. Falls back to the regular face when no bold
    /// asset was loaded; an explicit present/absent lookup, not an error.
    Bold,
}

/// All fonts loaded for a render run. The book owns the faces; text
/// regions refer to them by [`FontRole`], and further faces can be added
/// and referenced by [`Id`].
pub struct FontBook {
    fonts: Arena<Font>,
    regular: Id<Font>,
    bold: Option<Id<Font>>,
}

impl FontBook {
    /// Create a book around the required regular face.
    pub fn new(regular: Font) -> FontBook {
        let mut fonts = Arena::new();
        let regular = fonts.alloc(regular);
        FontBook {
            fonts,
            regular,
            bold: None,
        }
    }

    /// Register the optional bold display variant. At most one bold face
    /// is tracked; registering another replaces the earlier one.
    pub fn set_bold(&mut self, font: Font) -> Id<Font> {
        let id = self.fonts.alloc(font);
        self.bold = Some(id);
        id
    }

    /// Add a further font to the book, returning its id.
    pub fn add(&mut self, font: Font) -> Id<Font> {
        self.fonts.alloc(font)
    }

    pub fn get(&self, id: Id<Font>) -> &Font {
        &self.fonts[id]
    }

    pub fn regular(&self) -> Id<Font> {
        self.regular
    }

    /// The bold face, if one was loaded.
    pub fn bold(&self) -> Option<Id<Font>> {
        self.bold
    }

    /// Resolve a role to a loaded face.
    pub fn resolve(&self, role: FontRole) -> &Font {
        match role {
            FontRole::Regular => &self.fonts[self.regular],
            FontRole::Bold => &self.fonts[self.bold.unwrap_or(self.regular)],
        }
    }
}
