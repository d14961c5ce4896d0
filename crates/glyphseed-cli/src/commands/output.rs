//! Shared output and config plumbing for the commands.

use anyhow::{Context, Result};
use colored::Colorize;
use glyphseed_core::RenderConfig;
use std::fs;

/// Load a render config, or the defaults when no path is given.
pub(crate) fn load_config(path: Option<&str>) -> Result<RenderConfig> {
    let Some(path) = path else {
        return Ok(RenderConfig::default());
    };
    let content =
        fs::read_to_string(path).with_context(|| format!("Failed to read config file: {}", path))?;
    RenderConfig::from_json_str(&content)
        .with_context(|| format!("Failed to load config file: {}", path))
}

/// Write `content` to `output`, or to stdout when no path is given.
///
/// A status line is printed only when writing to a file, so stdout stays
/// pipeable.
pub(crate) fn emit(content: &str, output: Option<&str>) -> Result<()> {
    match output {
        Some(path) => {
            fs::write(path, content).with_context(|| format!("Failed to write to: {}", path))?;
            println!("{} Wrote {}", "SUCCESS".green().bold(), path);
        }
        None => println!("{}", content),
    }
    Ok(())
}

/// Serialize a report as pretty JSON.
pub(crate) fn to_json<T: serde::Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).context("Failed to serialize JSON output")
}
