use derive_more::{Add, AddAssign, Display, Div, From, Into, Mul, MulAssign, Sub, Sum};

/// A distance in whole device pixels. All layout arithmetic happens in
/// integer pixels so that placements match the raster grid exactly;
/// measured glyph extents are rounded up on conversion.
#[derive(
    Debug,
    Default,
    Copy,
    Clone,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Add,
    AddAssign,
    Sub,
    Mul,
    MulAssign,
    Div,
    Sum,
    From,
    Into,
    Display,
)]
pub struct Px(pub i32);

impl Px {
    /// Round a fractional measurement up to the next whole pixel. Widths
    /// are always rounded up so a line that "just fits" never spills.
    pub fn ceil_from(value: f32) -> Px {
        Px(value.ceil() as i32)
    }

    pub fn is_positive(self) -> bool {
        self.0 > 0
    }
}

impl From<u32> for Px {
    fn from(value: u32) -> Px {
        Px(value as i32)
    }
}
