use colored::Colorize;

use crate::color::Rgb;
use crate::glyph::GlyphAssigner;
use crate::history::{HistoryEntry, HistoryError};

pub const GRASS_CAPTION: &str = "You're standing on a patch of grass in a field of wildflowers.";
pub const PATH_CAPTION: &str = "You're standing by a wildflower garden. There is a light breeze.";
pub const EDGE_CAPTION: &str = "You're standing at the edge of the garden.";

const SIGNPOST_COLOR: Rgb = Rgb {
    r: 139,
    g: 69,
    b: 19,
};

/// A history entry ready to be planted: glyph chosen, color decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bloom {
    pub short_hash: String,
    pub handle: String,
    pub glyph: char,
    pub tint: Rgb,
}

impl Bloom {
    /// # Errors
    /// [`HistoryError::MalformedHash`] if the short hash cannot be colored.
    pub fn from_entry(entry: &HistoryEntry, glyphs: &mut GlyphAssigner) -> Result<Self, HistoryError> {
        let tint = Rgb::from_short_hash(&entry.short_hash)?;
        Ok(Self {
            short_hash: entry.short_hash.clone(),
            handle: entry.handle().to_string(),
            glyph: glyphs.glyph_for(&entry.author_email),
            tint,
        })
    }

    pub fn painted(&self) -> String {
        self.tint.paint(self.glyph)
    }
}

/// Turn every entry into a [`Bloom`], failing on the first malformed hash.
pub fn prepare_blooms(
    entries: &[HistoryEntry],
    glyphs: &mut GlyphAssigner,
) -> Result<Vec<Bloom>, HistoryError> {
    entries
        .iter()
        .map(|e| Bloom::from_entry(e, glyphs))
        .collect()
}

/// One square of the garden.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    Flower(Bloom),
    Grass,
    /// Bare ground in the signpost row.
    Path,
    Signpost(String),
}

impl Cell {
    /// The styled glyph drawn for this cell.
    pub fn glyph(&self, grass: char) -> String {
        match self {
            Cell::Flower(bloom) => bloom.painted(),
            Cell::Grass => grass.to_string().green().to_string(),
            Cell::Path => " ".to_string(),
            Cell::Signpost(_) => SIGNPOST_COLOR.paint('+'),
        }
    }

    /// The status line shown while the player stands here.
    pub fn caption(&self) -> String {
        match self {
            Cell::Flower(bloom) => format!(
                "You're standing at a flower called {} planted by {}.",
                bloom.short_hash, bloom.handle
            ),
            Cell::Grass => GRASS_CAPTION.to_string(),
            Cell::Path => PATH_CAPTION.to_string(),
            Cell::Signpost(label) => format!(
                "You're standing in front of a weather-beaten sign that says {}.",
                label
            ),
        }
    }
}
