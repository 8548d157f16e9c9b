// src/lineset/tables.rs

//! Constant connectivity and best-fit data for the four box-drawing families.
//!
//! Glyph ids are code page 437 codes. Masks use `RIGHT=1, TOP=2, LEFT=4, BOTTOM=8`.
//! The best-fit tables are authored data, not derived from the connectivity maps:
//! straight runs in the mixed families reuse the plain single/double glyphs.

use super::LineFamily;
use crate::glyph::GlyphId;

const R: u8 = 0b0001;
const T: u8 = 0b0010;
const L: u8 = 0b0100;
const B: u8 = 0b1000;

pub(super) const SINGLE_CONNECTIVITY: &[(GlyphId, u8)] = &[
    (179, T | B),         // │
    (180, T | L | B),     // ┤
    (191, L | B),         // ┐
    (192, R | T),         // └
    (193, R | T | L),     // ┴
    (194, R | L | B),     // ┬
    (195, R | T | B),     // ├
    (196, R | L),         // ─
    (197, R | T | L | B), // ┼
    (217, T | L),         // ┘
    (218, R | B),         // ┌
];

pub(super) const SINGLE_BEST_FIT: [GlyphId; 16] = [
    196, 196, 179, 192, 196, 196, 217, 193, 179, 218, 179, 195, 191, 194, 180, 197,
];

pub(super) const DOUBLE_CONNECTIVITY: &[(GlyphId, u8)] = &[
    (185, T | L | B),     // ╣
    (186, T | B),         // ║
    (187, L | B),         // ╗
    (188, T | L),         // ╝
    (200, R | T),         // ╚
    (201, R | B),         // ╔
    (202, R | T | L),     // ╩
    (203, R | L | B),     // ╦
    (204, R | T | B),     // ╠
    (205, R | L),         // ═
    (206, R | T | L | B), // ╬
];

pub(super) const DOUBLE_BEST_FIT: [GlyphId; 16] = [
    205, 205, 186, 200, 205, 205, 188, 202, 186, 201, 186, 204, 187, 203, 185, 206,
];

/// Double horizontal strokes, single vertical strokes.
pub(super) const DOUBLE_HORIZONTAL_CONNECTIVITY: &[(GlyphId, u8)] = &[
    (181, T | L | B),     // ╡
    (184, L | B),         // ╕
    (190, T | L),         // ╛
    (198, R | T | B),     // ╞
    (207, R | T | L),     // ╧
    (209, R | L | B),     // ╤
    (212, R | T),         // ╘
    (213, R | B),         // ╒
    (216, R | T | L | B), // ╪
];

pub(super) const DOUBLE_HORIZONTAL_BEST_FIT: [GlyphId; 16] = [
    205, 205, 179, 212, 205, 205, 190, 207, 179, 213, 179, 198, 184, 209, 181, 216,
];

/// Single horizontal strokes, double vertical strokes.
pub(super) const DOUBLE_VERTICAL_CONNECTIVITY: &[(GlyphId, u8)] = &[
    (182, T | L | B),     // ╢
    (183, L | B),         // ╖
    (189, T | L),         // ╜
    (199, R | T | B),     // ╟
    (208, R | T | L),     // ╨
    (210, R | L | B),     // ╥
    (211, R | T),         // ╙
    (214, R | B),         // ╓
    (215, R | T | L | B), // ╫
];

pub(super) const DOUBLE_VERTICAL_BEST_FIT: [GlyphId; 16] = [
    196, 196, 186, 211, 196, 196, 189, 208, 186, 214, 186, 199, 183, 210, 182, 215,
];

use LineFamily::{Double as D, DoubleHorizontal as H, DoubleVertical as V, Single as S};

/// Family to draw with when connecting along TOP/BOTTOM, indexed
/// `[current][neighbor]` in `LineFamily::ALL` order.
pub(super) const VERTICAL_INTERPOLATION: [[LineFamily; 4]; 4] = [
    // neighbor:  S  D  H  V
    /* S */ [S, V, S, V],
    /* D */ [H, D, H, D],
    /* H */ [H, D, H, D],
    /* V */ [S, V, S, V],
];

/// Family to draw with when connecting along RIGHT/LEFT, indexed
/// `[current][neighbor]` in `LineFamily::ALL` order.
pub(super) const HORIZONTAL_INTERPOLATION: [[LineFamily; 4]; 4] = [
    // neighbor:  S  D  H  V
    /* S */ [S, H, H, S],
    /* D */ [V, D, D, V],
    /* H */ [S, H, H, S],
    /* V */ [V, D, D, V],
];
