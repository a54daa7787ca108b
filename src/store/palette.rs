use std::collections::HashMap;
use std::fmt;

/// An RGB color with optional alpha, serialized as `#RRGGBB` or
/// `#RRGGBBAA`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba {
    red: u8,
    green: u8,
    blue: u8,
    alpha: Option<u8>,
}

impl Rgba {
    /// Opaque black, the default stroke.
    pub const BLACK: Self = Self {
        red: 0,
        green: 0,
        blue: 0,
        alpha: None,
    };

    /// Fully transparent, the default for done-state colors.
    pub const TRANSPARENT: Self = Self {
        red: 0,
        green: 0,
        blue: 0,
        alpha: Some(0),
    };

    /// Creates an opaque color (three-channel hex form).
    #[must_use]
    pub fn opaque(red: u8, green: u8, blue: u8) -> Self {
        Self {
            red,
            green,
            blue,
            alpha: None,
        }
    }

    /// Creates a color with an explicit alpha channel.
    #[must_use]
    pub fn with_alpha(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self {
            red,
            green,
            blue,
            alpha: Some(alpha),
        }
    }

    /// Parses `#RRGGBB` or `#RRGGBBAA`.
    #[must_use]
    pub fn parse_hex(text: &str) -> Option<Self> {
        let hex = text.strip_prefix('#')?;
        let channel = |i: usize| u8::from_str_radix(hex.get(2 * i..2 * i + 2)?, 16).ok();
        match hex.len() {
            6 => Some(Self {
                red: channel(0)?,
                green: channel(1)?,
                blue: channel(2)?,
                alpha: None,
            }),
            8 => Some(Self {
                red: channel(0)?,
                green: channel(1)?,
                blue: channel(2)?,
                alpha: Some(channel(3)?),
            }),
            _ => None,
        }
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.alpha {
            Some(a) => write!(
                f,
                "#{:02X}{:02X}{:02X}{:02X}",
                self.red, self.green, self.blue, a
            ),
            None => write!(f, "#{:02X}{:02X}{:02X}", self.red, self.green, self.blue),
        }
    }
}

/// The four display-state colors serialized with each tile.
///
/// A rendering client draws a tile in its "start" colors when it first
/// appears and fades it to the "done" colors afterwards; done-state
/// colors default to fully transparent.
#[derive(Debug, Clone, Copy)]
pub struct TileStyle {
    pub start_fill: Rgba,
    pub start_stroke: Rgba,
    pub done_fill: Rgba,
    pub done_stroke: Rgba,
}

impl TileStyle {
    /// Style with the given start fill and the default stroke and
    /// done-state colors.
    #[must_use]
    pub fn from_fill(fill: Rgba) -> Self {
        Self {
            start_fill: fill,
            start_stroke: Rgba::BLACK,
            done_fill: Rgba::TRANSPARENT,
            done_stroke: Rgba::TRANSPARENT,
        }
    }
}

/// Pure display-tag to fill-color lookup, supplied as configuration.
#[derive(Debug, Clone, Default)]
pub struct Palette {
    fills: HashMap<String, Rgba>,
}

impl Palette {
    /// Creates an empty palette.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a fill color for a display tag (builder form).
    #[must_use]
    pub fn with_fill(mut self, tag: impl Into<String>, color: Rgba) -> Self {
        self.fills.insert(tag.into(), color);
        self
    }

    /// Adds a fill color for a display tag.
    pub fn insert(&mut self, tag: impl Into<String>, color: Rgba) {
        self.fills.insert(tag.into(), color);
    }

    /// Looks up the fill color for a display tag.
    #[must_use]
    pub fn fill_for(&self, tag: &str) -> Option<Rgba> {
        self.fills.get(tag).copied()
    }
}
