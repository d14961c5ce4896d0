//! Manifest command implementation
//!
//! Prints BLAKE3 digests of every visual a seed produces. Committing the
//! manifest for a set of known seeds turns any change in generated output
//! into a reviewable diff.

use anyhow::Result;
use colored::Colorize;
use glyphseed_core::{
    connector, crystal, icon, markup_digest, palette, ConnectorShape, IconCategory, Paint,
    RenderConfig,
};
use serde::Serialize;
use std::process::ExitCode;

use super::output::{load_config, to_json};

/// Digests for one seed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ManifestEntry {
    /// The seed as given.
    pub seed: String,
    /// Palette colour name.
    pub color: &'static str,
    /// Connector shape.
    pub shape: ConnectorShape,
    /// Digest of the crystal markup.
    pub crystal: String,
    /// Digest of the mixed-category icon markup.
    pub icon: String,
    /// Digest of the idle connector markup.
    pub connector: String,
}

/// Build the manifest entry for one seed.
pub fn entry(seed: &str, config: &RenderConfig) -> ManifestEntry {
    let paint = Paint::from_seed(seed);
    ManifestEntry {
        seed: seed.to_string(),
        color: palette::pick_color(seed).name,
        shape: connector::shape_for(seed),
        crystal: markup_digest(&crystal::generate(seed, &config.crystal)),
        icon: markup_digest(&icon::generate(seed, IconCategory::Mixed, &config.icon)),
        connector: markup_digest(&connector::create(&paint, false, seed)),
    }
}

/// Run the manifest command
///
/// # Arguments
/// * `seeds` - Seeds to digest
/// * `config` - Optional render config JSON path
/// * `json` - Output machine-readable JSON
pub fn run(seeds: &[String], config: Option<&str>, json: bool) -> Result<ExitCode> {
    let config = load_config(config)?;
    let entries: Vec<ManifestEntry> = seeds.iter().map(|seed| entry(seed, &config)).collect();

    if json {
        println!("{}", to_json(&entries)?);
        return Ok(ExitCode::SUCCESS);
    }

    for e in &entries {
        println!("{} ({}, {})", e.seed.bold(), e.color, e.shape.name());
        println!("  {:<10} {}", "crystal".dimmed(), e.crystal);
        println!("  {:<10} {}", "icon".dimmed(), e.icon);
        println!("  {:<10} {}", "connector".dimmed(), e.connector);
    }
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_entry_is_deterministic() {
        let config = RenderConfig::default();
        assert_eq!(entry("jaskier", &config), entry("jaskier", &config));
    }

    #[test]
    fn test_entry_reports_identity() {
        let e = entry("jaskier", &RenderConfig::default());
        assert_eq!(e.color, "Jade");
        assert_eq!(e.shape, ConnectorShape::Hexagon);
        assert_eq!(e.crystal.len(), 64);
    }

    #[test]
    fn test_config_changes_crystal_digest_only() {
        let mut config = RenderConfig::default();
        let before = entry("jaskier", &config);
        config.crystal.size = 96;
        let after = entry("jaskier", &config);
        assert_ne!(before.crystal, after.crystal);
        assert_eq!(before.icon, after.icon);
        assert_eq!(before.connector, after.connector);
    }
}
