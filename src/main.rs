//! # wildflower
//!
//! **wildflower** grows ASCII art out of git history.
//!
//! Features:
//! - `wildflower garden` walks an avatar around a field of commit flowers
//! - `wildflower quilt` prints every commit as one colored glyph on a single line
//! - `wildflower home` prints the configuration directory
//!
//! Settings live in `$(wildflower home)/config.toml`.
//! This CLI is built with [clap](https://docs.rs/clap).

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use wildflower::{
    GardenOptions, HistorySource, QuiltOptions, cmd_garden, cmd_quilt, init_logging,
    wildflower_home,
};

/// Command-line interface definition.
///
/// Parsed using `clap` derive macros.
#[derive(Parser, Debug)]
#[command(
    name = "wildflower",
    version,
    about = "wildflower - a unique piece of art derived from git history",
    arg_required_else_help = true
)]
struct Cli {
    /// Log pipeline details to stderr (adds to RUST_LOG when set)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Cmd,
}

/// Where the history comes from.
#[derive(Args, Debug)]
struct SourceArgs {
    /// Repository to read (defaults to the current directory)
    #[arg(long, value_name = "PATH")]
    repo: Option<PathBuf>,

    /// Read `git log --pretty=format:%h,%ae` output from a file (`-` for stdin)
    #[arg(long, value_name = "FILE", conflicts_with = "repo")]
    log: Option<PathBuf>,
}

impl SourceArgs {
    fn into_source(self) -> HistorySource {
        HistorySource::from_args(self.repo, self.log)
    }
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Cmd {
    /// Walk around a garden grown from the commit history
    Garden {
        #[command(flatten)]
        source: SourceArgs,
        /// Fix the RNG seed (defaults to one derived from the repository name)
        #[arg(long)]
        seed: Option<u64>,
        /// Chance that a cell holds a flower, between 0 and 1
        #[arg(long)]
        density: Option<f64>,
    },
    /// Print the commit history as a single line of colored glyphs
    Quilt {
        #[command(flatten)]
        source: SourceArgs,
        /// Also list which glyph belongs to which author
        #[arg(long)]
        legend: bool,
    },
    /// Print the wildflower configuration directory
    Home,
}

/// CLI entry point.
///
/// Parses arguments with `clap` and executes the selected subcommand.
fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.cmd {
        Cmd::Garden {
            source,
            seed,
            density,
        } => cmd_garden(GardenOptions {
            source: source.into_source(),
            seed,
            density,
        }),
        Cmd::Quilt { source, legend } => cmd_quilt(QuiltOptions {
            source: source.into_source(),
            legend,
        }),
        Cmd::Home => {
            println!("{}", wildflower_home().display());
            Ok(())
        }
    }
}
