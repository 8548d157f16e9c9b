// src/color.rs

//! Color references carried by canvas cells.
//!
//! The drawing core treats colors as opaque ids: it copies and compares them but
//! never mixes them. Only the text renderer resolves a `Color` to RGB.

use log::warn;
use serde::{Deserialize, Serialize};

/// The 16 standard palette entries (8 normal, 8 bright).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum NamedColor {
    Black = 0,
    Red = 1,
    Green = 2,
    Yellow = 3,
    Blue = 4,
    Magenta = 5,
    Cyan = 6,
    White = 7,
    BrightBlack = 8,
    BrightRed = 9,
    BrightGreen = 10,
    BrightYellow = 11,
    BrightBlue = 12,
    BrightMagenta = 13,
    BrightCyan = 14,
    BrightWhite = 15,
}

const NAMED_COLORS: [NamedColor; 16] = [
    NamedColor::Black,
    NamedColor::Red,
    NamedColor::Green,
    NamedColor::Yellow,
    NamedColor::Blue,
    NamedColor::Magenta,
    NamedColor::Cyan,
    NamedColor::White,
    NamedColor::BrightBlack,
    NamedColor::BrightRed,
    NamedColor::BrightGreen,
    NamedColor::BrightYellow,
    NamedColor::BrightBlue,
    NamedColor::BrightMagenta,
    NamedColor::BrightCyan,
    NamedColor::BrightWhite,
];

impl NamedColor {
    /// Looks up a palette entry by index. Returns `None` above 15.
    pub fn from_index(idx: u8) -> Option<Self> {
        NAMED_COLORS.get(idx as usize).copied()
    }

    /// sRGB values used by most VGA-style palettes.
    pub fn to_rgb(self) -> (u8, u8, u8) {
        match self {
            NamedColor::Black => (0, 0, 0),
            NamedColor::Red => (170, 0, 0),
            NamedColor::Green => (0, 170, 0),
            NamedColor::Yellow => (170, 85, 0),
            NamedColor::Blue => (0, 0, 170),
            NamedColor::Magenta => (170, 0, 170),
            NamedColor::Cyan => (0, 170, 170),
            NamedColor::White => (170, 170, 170),
            NamedColor::BrightBlack => (85, 85, 85),
            NamedColor::BrightRed => (255, 85, 85),
            NamedColor::BrightGreen => (85, 255, 85),
            NamedColor::BrightYellow => (255, 255, 85),
            NamedColor::BrightBlue => (85, 85, 255),
            NamedColor::BrightMagenta => (255, 85, 255),
            NamedColor::BrightCyan => (85, 255, 255),
            NamedColor::BrightWhite => (255, 255, 255),
        }
    }
}

/// An opaque color reference stored in a cell's foreground or background slot.
///
/// An absent color (`Option<Color>::None` in a cell) means "nothing painted";
/// `Color::Default` means "whatever the presentation layer uses by default".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Color {
    #[default]
    Default,
    Named(NamedColor),
    /// Entry of the 256-color palette.
    Indexed(u8),
    Rgb(u8, u8, u8),
}

const COLOR_CUBE_OFFSET: u8 = 16;
const COLOR_CUBE_SIZE: u8 = 6;
const GRAYSCALE_OFFSET: u8 = COLOR_CUBE_OFFSET + COLOR_CUBE_SIZE * COLOR_CUBE_SIZE * COLOR_CUBE_SIZE;

/// Resolves a color reference to a concrete RGB triple.
///
/// `fallback` is returned for `Color::Default`, which has no RGB value of its own.
pub fn convert_to_rgb_color(color: Color, fallback: (u8, u8, u8)) -> (u8, u8, u8) {
    match color {
        Color::Default => fallback,
        Color::Named(named) => named.to_rgb(),
        Color::Rgb(r, g, b) => (r, g, b),
        Color::Indexed(idx) if idx < COLOR_CUBE_OFFSET => match NamedColor::from_index(idx) {
            Some(named) => named.to_rgb(),
            None => {
                warn!("palette index {} has no named color, using fallback", idx);
                fallback
            }
        },
        Color::Indexed(idx) if idx < GRAYSCALE_OFFSET => {
            let cube = idx - COLOR_CUBE_OFFSET;
            let level = |c: u8| if c == 0 { 0 } else { c * 40 + 55 };
            (
                level(cube / (COLOR_CUBE_SIZE * COLOR_CUBE_SIZE)),
                level((cube / COLOR_CUBE_SIZE) % COLOR_CUBE_SIZE),
                level(cube % COLOR_CUBE_SIZE),
            )
        }
        Color::Indexed(idx) => {
            let level = (idx - GRAYSCALE_OFFSET) * 10 + 8;
            (level, level, level)
        }
    }
}
