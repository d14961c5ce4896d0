//! Palette command implementation
//!
//! Lists the colour groups, or the colours of one group.

use anyhow::{bail, Result};
use colored::Colorize;
use glyphseed_core::{palette, PaletteColor, COLOR_GROUPS};
use serde::Serialize;
use std::process::ExitCode;

use super::output::to_json;

#[derive(Debug, Serialize)]
struct GroupReport<'a> {
    name: &'a str,
    colors: &'static [PaletteColor],
}

/// Run the palette command
///
/// # Arguments
/// * `group` - Group to list (default: all group names)
/// * `json` - Output machine-readable JSON
pub fn run(group: Option<&str>, json: bool) -> Result<ExitCode> {
    match group {
        Some(name) => {
            let Some(colors) = palette::get_color_group(name) else {
                bail!(
                    "unknown colour group '{}' (expected one of: {})",
                    name,
                    palette::get_group_names().join(", ")
                );
            };
            if json {
                let report = GroupReport { name, colors };
                println!("{}", to_json(&report)?);
            } else {
                println!("{} {}", "Group:".cyan().bold(), name);
                for color in colors {
                    println!("  {} {:<16} {}", swatch(color), color.name, color.hex.dimmed());
                }
            }
        }
        None => {
            if json {
                println!("{}", to_json(&palette::get_group_names())?);
            } else {
                for group in &COLOR_GROUPS {
                    let strip: String = group.colors().iter().map(swatch).collect();
                    println!("  {:<10} {}", group.name, strip);
                }
            }
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn swatch(color: &PaletteColor) -> String {
    let [r, g, b] = color.rgb();
    "  ".on_truecolor(r, g, b).to_string()
}
