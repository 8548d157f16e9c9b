// src/config.rs

//! Configuration for a drawing session.
//!
//! Every struct deserializes from JSON with `#[serde(default)]`, so a config
//! file only needs the fields it wants to change.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use log::{info, warn};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::color::{Color, NamedColor};
use crate::glyph::{Cell, GlyphId, EMPTY_GLYPH};
use crate::grid::check_dimensions;
use crate::lineset::LineFamily;
use crate::shapes::{CURSOR_OFF_GLYPH, CURSOR_ON_GLYPH};

/// Built-in defaults.
pub static CONFIG: Lazy<Config> = Lazy::new(Config::default);

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub canvas: CanvasConfig,
    pub brush: BrushConfig,
    pub text: TextConfig,
    pub lines: LinesConfig,
}

/// Initial canvas size.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CanvasConfig {
    pub columns: usize,
    pub rows: usize,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        CanvasConfig {
            columns: 80,
            rows: 25,
        }
    }
}

/// The cell painted by shape tools until the user picks another.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct BrushConfig {
    /// Code page 437 code; 219 is the full block.
    pub glyph: GlyphId,
    pub foreground: Option<Color>,
    pub background: Option<Color>,
}

impl Default for BrushConfig {
    fn default() -> Self {
        BrushConfig {
            glyph: 219,
            foreground: Some(Color::Named(NamedColor::White)),
            background: None,
        }
    }
}

impl BrushConfig {
    pub fn cell(&self) -> Cell {
        Cell::new(Some(self.glyph), self.foreground, self.background)
    }
}

/// Text tool cursor glyphs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TextConfig {
    pub cursor_on_glyph: GlyphId,
    pub cursor_off_glyph: GlyphId,
}

impl Default for TextConfig {
    fn default() -> Self {
        TextConfig {
            cursor_on_glyph: CURSOR_ON_GLYPH,
            cursor_off_glyph: CURSOR_OFF_GLYPH,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct LinesConfig {
    /// Family a smart line starts drawing with.
    pub family: LineFamily,
}

impl Config {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(json).context("Failed to parse configuration")?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)
            .with_context(|| format!("Failed to read configuration from {}", path.display()))?;
        let config = Self::from_json_str(&json)
            .with_context(|| format!("Invalid configuration in {}", path.display()))?;
        info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Rejects settings the editor cannot start with.
    pub fn validate(&self) -> Result<()> {
        check_dimensions(self.canvas.columns, self.canvas.rows)?;
        if self.text.cursor_on_glyph == EMPTY_GLYPH {
            warn!("text.cursor_on_glyph is the empty glyph; the text cursor will be invisible");
        }
        Ok(())
    }
}
