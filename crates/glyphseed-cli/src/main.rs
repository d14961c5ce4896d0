//! Glyphseed CLI - deterministic avatars, icons, and connectors from seeds
//!
//! This binary renders the visuals for an identifier and inspects the
//! palette and output digests.

use clap::{Parser, Subcommand};
use glyphseed_core::{IconCategory, Paint};
use std::process::ExitCode;

use glyphseed_cli::commands;
use glyphseed_cli::commands::connector::ConnectorFlags;
use glyphseed_cli::commands::crystal::CrystalFlags;
use glyphseed_cli::commands::icon::IconFlags;
use glyphseed_cli::commands::sheet::SheetKind;

/// Glyphseed - Procedural Visual Identities
#[derive(Parser)]
#[command(name = "glyphseed")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a crystal avatar
    Crystal {
        /// Seed identifier
        seed: String,

        /// Pixel size (default: 48)
        #[arg(long)]
        size: Option<u32>,

        /// Colour token (hex, palette name, CSS keyword, currentColor)
        #[arg(long, value_parser = Paint::parse_strict)]
        color: Option<Paint>,

        /// Paint with the seed's palette colour
        #[arg(long)]
        palette_color: bool,

        /// Disable the glow filter
        #[arg(long)]
        no_glow: bool,

        /// Derive the glow filter id from the seed alone
        #[arg(long)]
        legacy_filter_id: bool,

        /// Render config JSON file
        #[arg(long)]
        config: Option<String>,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Render a semantic icon
    Icon {
        /// Seed identifier
        seed: String,

        /// Icon catalog (memory, search, write, connect, arcane, mixed)
        #[arg(long, default_value_t = IconCategory::Mixed)]
        category: IconCategory,

        /// Pixel size (default: 24)
        #[arg(long)]
        size: Option<u32>,

        /// Colour token (hex, palette name, CSS keyword, currentColor)
        #[arg(long, value_parser = Paint::parse_strict)]
        color: Option<Paint>,

        /// Emit only the inner fragment
        #[arg(long, conflicts_with = "json")]
        inner: bool,

        /// Output composition metadata as JSON
        #[arg(long)]
        json: bool,

        /// Render config JSON file
        #[arg(long)]
        config: Option<String>,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Render a message-chain connector
    Connector {
        /// Seed identifier
        seed: String,

        /// Colour token (default: the seed's palette colour)
        #[arg(long, value_parser = Paint::parse_strict)]
        color: Option<Paint>,

        /// Render the active state
        #[arg(long)]
        active: bool,

        /// Emit only the marker polygon, optionally at a given size
        #[arg(long, num_args = 0..=1, conflicts_with = "clip_path")]
        marker: Option<Option<f64>>,

        /// Emit only the CSS clip-path value
        #[arg(long)]
        clip_path: bool,

        /// Render config JSON file
        #[arg(long)]
        config: Option<String>,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Show the palette colour for a seed
    Color {
        /// Seed identifier
        seed: String,

        /// Output machine-readable JSON
        #[arg(long)]
        json: bool,
    },

    /// List palette groups or the colours of one group
    Palette {
        /// Group name (reds, oranges, yellows, greens, teals, blues, purples, pinks)
        #[arg(long)]
        group: Option<String>,

        /// Output machine-readable JSON
        #[arg(long)]
        json: bool,
    },

    /// Render an HTML contact sheet of many seeds
    Sheet {
        /// Seeds to render
        seeds: Vec<String>,

        /// Number of extra random seeds to render
        #[arg(long, default_value_t = 0)]
        random: usize,

        /// Seed for the random seed generator
        #[arg(long, default_value_t = 0)]
        sample_seed: u64,

        /// What each cell shows
        #[arg(long, value_enum, default_value_t = SheetKind::Crystal)]
        kind: SheetKind,

        /// Render config JSON file
        #[arg(long)]
        config: Option<String>,

        /// Output HTML path
        #[arg(short, long)]
        output: String,
    },

    /// Print output digests for seeds
    Manifest {
        /// Seeds to digest
        #[arg(required = true)]
        seeds: Vec<String>,

        /// Render config JSON file
        #[arg(long)]
        config: Option<String>,

        /// Output machine-readable JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Crystal {
            seed,
            size,
            color,
            palette_color,
            no_glow,
            legacy_filter_id,
            config,
            output,
        } => commands::crystal::run(
            &seed,
            CrystalFlags {
                size,
                color,
                palette_color,
                no_glow,
                legacy_filter_id,
            },
            config.as_deref(),
            output.as_deref(),
        ),
        Commands::Icon {
            seed,
            category,
            size,
            color,
            inner,
            json,
            config,
            output,
        } => commands::icon::run(
            &seed,
            IconFlags {
                category,
                size,
                color,
                inner,
                json,
            },
            config.as_deref(),
            output.as_deref(),
        ),
        Commands::Connector {
            seed,
            color,
            active,
            marker,
            clip_path,
            config,
            output,
        } => commands::connector::run(
            &seed,
            ConnectorFlags {
                color,
                active,
                marker,
                clip_path,
            },
            config.as_deref(),
            output.as_deref(),
        ),
        Commands::Color { seed, json } => commands::color::run(&seed, json),
        Commands::Palette { group, json } => commands::palette::run(group.as_deref(), json),
        Commands::Sheet {
            seeds,
            random,
            sample_seed,
            kind,
            config,
            output,
        } => commands::sheet::run(
            &seeds,
            random,
            sample_seed,
            kind,
            config.as_deref(),
            &output,
        ),
        Commands::Manifest {
            seeds,
            config,
            json,
        } => commands::manifest::run(&seeds, config.as_deref(), json),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
