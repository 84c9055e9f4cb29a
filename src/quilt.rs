use anyhow::Result;
use std::io::{self, Write};

use crate::color::colorize;
use crate::glyph::GlyphAssigner;
use crate::history::{HistoryEntry, HistoryError, HistorySource, load_history};
use crate::terminal::require_tty;

/// Options for `wildflower quilt`.
#[derive(Debug, Clone)]
pub struct QuiltOptions {
    pub source: HistorySource,
    pub legend: bool,
}

/// One tinted glyph per entry, in history order, as a single line.
///
/// # Errors
/// [`HistoryError::MalformedHash`] for the first entry whose hash can't be colored.
pub fn stitch(entries: &[HistoryEntry], glyphs: &mut GlyphAssigner) -> Result<String, HistoryError> {
    entries
        .iter()
        .map(|e| colorize(&e.short_hash, glyphs.glyph_for(&e.author_email)))
        .collect()
}

/// Write the quilt line, then optionally a `<glyph> <email>` legend.
pub fn write_quilt<W: Write>(
    out: &mut W,
    entries: &[HistoryEntry],
    legend: bool,
) -> Result<()> {
    let mut glyphs = GlyphAssigner::new();
    let line = stitch(entries, &mut glyphs)?;
    writeln!(out, "{}", line)?;
    if legend {
        for (glyph, email) in glyphs.legend() {
            writeln!(out, "{} {}", glyph, email)?;
        }
    }
    Ok(())
}

/// CLI command: print the commit history as a single strip of colored glyphs.
///
/// The line is meant to wrap in the terminal, top-left to bottom-right.
///
/// # Errors
/// - stdout is not a terminal.
/// - History cannot be loaded, or a short hash cannot be colored.
pub fn cmd_quilt(opts: QuiltOptions) -> Result<()> {
    require_tty()?;
    let history = load_history(&opts.source)?;
    let mut out = io::stdout().lock();
    write_quilt(&mut out, &history.entries, opts.legend)
}
