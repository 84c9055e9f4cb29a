//! The interactive garden walk.
//!
//! History entries become [`Bloom`]s, get scattered across a terminal-sized
//! field by [`plant`], and the player wanders around it one keystroke at a
//! time (see `input::walk`).

mod cell;
mod input;
mod plant;
mod player;
mod render;

use anyhow::Result;
use colored::Colorize;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;
use tracing::{debug, info};

use crate::config::load_config;
use crate::glyph::GlyphAssigner;
use crate::history::{HistorySource, load_history};
use crate::terminal::{RawMode, require_tty, terminal_size};

use cell::{Bloom, prepare_blooms};
use input::{TerminalKeys, walk};
use plant::{Garden, Geometry, plant};
use player::Player;

const FAREWELL: &str = "You turn and walk away from the wildflower garden...";

/// Options for `wildflower garden`; `None` falls back to config, then defaults.
#[derive(Debug, Clone)]
pub struct GardenOptions {
    pub source: HistorySource,
    pub seed: Option<u64>,
    pub density: Option<f64>,
}

/// Plant the whole garden, with a signpost row on top when `signpost` names one.
///
/// The signpost row counts toward the geometry's height.
pub fn grow(blooms: &[Bloom], geo: &Geometry, signpost: Option<&str>, seed: u64) -> Garden {
    let mut rng = StdRng::seed_from_u64(seed);
    match signpost {
        Some(label) if geo.height > 0 => {
            let field = Geometry {
                height: geo.height - 1,
                ..*geo
            };
            plant(blooms, &field, &mut rng).with_signpost(label, geo.width)
        }
        _ => plant(blooms, geo, &mut rng),
    }
}

/// CLI command: walk around a garden grown from the commit history.
///
/// 1. Require a TTY, load config and history, apply overrides and pick the seed.
/// 2. Color every entry (a malformed hash aborts here, before any drawing).
/// 3. Size the garden to the terminal and plant it from a seeded RNG.
/// 4. Enter raw mode and walk until `q`; the terminal is restored on every exit path.
///
/// # Errors
/// - stdout is not a terminal, or its size cannot be read.
/// - Config or history cannot be loaded.
/// - A short hash cannot be turned into a color.
pub fn cmd_garden(opts: GardenOptions) -> Result<()> {
    require_tty()?;

    let mut settings = load_config()?.garden;
    let history = load_history(&opts.source)?;
    let seed = settings.resolve(opts.density, opts.seed, history.name.as_deref())?;

    let mut glyphs = GlyphAssigner::new();
    let blooms = prepare_blooms(&history.entries, &mut glyphs)?;
    debug!(authors = glyphs.len(), "glyphs assigned");

    let (cols, rows) = terminal_size()?;
    let geo = Geometry::from_terminal(cols, rows, settings.margin, settings.density);
    let signpost = history.name.as_deref().filter(|_| settings.signpost);
    let garden = grow(&blooms, &geo, signpost, seed).with_grass(settings.grass);
    info!(
        seed,
        width = geo.width,
        height = geo.height,
        flowers = garden.flower_count(),
        "garden planted"
    );

    let mut player = Player::new(settings.avatar, &geo);
    {
        let _raw = RawMode::enable()?;
        let mut out = io::stdout().lock();
        walk(&garden, &mut player, &mut TerminalKeys, &mut out)?;
    }

    println!();
    println!("{}", FAREWELL.bold());
    Ok(())
}
