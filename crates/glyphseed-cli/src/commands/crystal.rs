//! Crystal command implementation
//!
//! Renders a standalone crystal avatar for a seed.

use anyhow::Result;
use glyphseed_core::{crystal, CrystalOptions, FilterIdScope, Paint};
use std::process::ExitCode;

use super::output::{emit, load_config};

/// Flag overrides applied on top of the config file.
#[derive(Debug, Clone, Default)]
pub struct CrystalFlags {
    /// Pixel size override.
    pub size: Option<u32>,
    /// Explicit colour.
    pub color: Option<Paint>,
    /// Use the seed's palette colour (ignored when `color` is set).
    pub palette_color: bool,
    /// Disable the glow filter.
    pub no_glow: bool,
    /// Derive the glow filter id from the seed alone.
    pub legacy_filter_id: bool,
}

/// Run the crystal command
///
/// # Arguments
/// * `seed` - Identifier to render
/// * `flags` - Flag overrides
/// * `config` - Optional render config JSON path
/// * `output` - Output file path (default: stdout)
pub fn run(
    seed: &str,
    flags: CrystalFlags,
    config: Option<&str>,
    output: Option<&str>,
) -> Result<ExitCode> {
    let base = load_config(config)?.crystal;
    let options = resolve_options(seed, base, flags);
    emit(&crystal::generate(seed, &options), output)?;
    Ok(ExitCode::SUCCESS)
}

fn resolve_options(seed: &str, mut options: CrystalOptions, flags: CrystalFlags) -> CrystalOptions {
    if let Some(size) = flags.size {
        options.size = size;
    }
    if let Some(color) = flags.color {
        options.color = color;
    } else if flags.palette_color {
        options.color = Paint::from_seed(seed);
    }
    if flags.no_glow {
        options.glow = false;
    }
    if flags.legacy_filter_id {
        options.filter_ids = FilterIdScope::PerSeed;
    }
    options
}
