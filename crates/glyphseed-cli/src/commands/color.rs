//! Color command implementation
//!
//! Shows the palette colour a seed maps to.

use anyhow::Result;
use colored::Colorize;
use glyphseed_core::{palette, Seed, PALETTE};
use serde::Serialize;
use std::process::ExitCode;

use super::output::to_json;

#[derive(Debug, Serialize)]
struct ColorReport<'a> {
    seed: &'a str,
    index: usize,
    name: &'static str,
    hex: &'static str,
    rgb: [u8; 3],
}

/// Run the color command
///
/// # Arguments
/// * `seed` - Identifier to look up
/// * `json` - Output machine-readable JSON
pub fn run(seed: &str, json: bool) -> Result<ExitCode> {
    let report = lookup(seed);

    if json {
        println!("{}", to_json(&report)?);
        return Ok(ExitCode::SUCCESS);
    }

    let [r, g, b] = report.rgb;
    println!(
        "{} {} {} {}",
        "      ".on_truecolor(r, g, b),
        report.name.bold(),
        report.hex.dimmed(),
        format!("(#{} of {})", report.index, PALETTE.len()).dimmed()
    );
    Ok(ExitCode::SUCCESS)
}

fn lookup(seed: &str) -> ColorReport<'_> {
    let color = palette::pick_color(seed);
    ColorReport {
        seed,
        index: Seed::from(seed).index_for(PALETTE.len()),
        name: color.name,
        hex: color.hex,
        rgb: color.rgb(),
    }
}
