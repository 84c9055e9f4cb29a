//! Crate entry point for **wildflower**.
//!
//! This library provides the internals of the `wildflower` CLI, which turns
//! a repository's commit history into ASCII art: a walkable garden of
//! colored glyphs, or a one-line quilt of them.
//! Each submodule encapsulates one responsibility (history loading, glyphs,
//! colors, the garden walk, etc.).
//! The `pub use` re-exports make the commands and building blocks
//! accessible directly from the crate root.

mod color;
mod config;
mod garden;
mod glyph;
mod history;
mod logging;
mod quilt;
mod seed;
mod terminal;

/// Re-export commonly used types and commands so they can be accessed from `wildflower::*`.
pub use color::{Rgb, colorize};
pub use config::{Config, GardenSettings, wildflower_home};
pub use garden::{GardenOptions, cmd_garden};
pub use glyph::{GlyphAssigner, assign_glyph};
pub use history::{History, HistoryEntry, HistoryError, HistorySource, load_history, parse_log};
pub use logging::init_logging;
pub use quilt::{QuiltOptions, cmd_quilt, stitch};
pub use seed::derive_seed;
