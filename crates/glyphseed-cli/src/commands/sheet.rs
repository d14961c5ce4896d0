//! Sheet command implementation
//!
//! Renders many seeds into one HTML contact sheet for reviewing how
//! distinct neighbouring identities look.

use anyhow::{bail, Result};
use clap::ValueEnum;
use colored::Colorize;
use glyphseed_core::markup::escape_attr;
use glyphseed_core::{crystal, icon, IconCategory, Mulberry32, Paint, RenderConfig};
use rand::distributions::Alphanumeric;
use rand::{Rng, SeedableRng};
use std::process::ExitCode;

use super::output::{emit, load_config};

/// Length of generated sample seeds.
const SAMPLE_SEED_LEN: usize = 8;

/// What each sheet cell shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum SheetKind {
    /// Crystal avatars in their palette colour.
    #[default]
    Crystal,
    /// Mixed-category icons in their palette colour.
    Icon,
}

/// Run the sheet command
///
/// # Arguments
/// * `seeds` - Explicit seeds, rendered first
/// * `random` - Number of extra sample seeds to generate
/// * `sample_seed` - Seed for the sample seed generator
/// * `kind` - Crystal or icon cells
/// * `config` - Optional render config JSON path
/// * `output` - HTML output path
pub fn run(
    seeds: &[String],
    random: usize,
    sample_seed: u64,
    kind: SheetKind,
    config: Option<&str>,
    output: &str,
) -> Result<ExitCode> {
    let mut all: Vec<String> = seeds.to_vec();
    all.extend(sample_seeds(random, sample_seed));
    if all.is_empty() {
        bail!("no seeds given (pass seeds or --random N)");
    }

    let config = load_config(config)?;
    println!(
        "{} {} {:?} cells",
        "Rendering:".cyan().bold(),
        all.len(),
        kind
    );
    emit(&render_sheet(&all, kind, &config), Some(output))?;
    Ok(ExitCode::SUCCESS)
}

/// `count` alphanumeric seeds drawn from a stream keyed by `sample_seed`.
pub fn sample_seeds(count: usize, sample_seed: u64) -> Vec<String> {
    let mut rng = Mulberry32::seed_from_u64(sample_seed);
    (0..count)
        .map(|_| {
            (&mut rng)
                .sample_iter(&Alphanumeric)
                .take(SAMPLE_SEED_LEN)
                .map(char::from)
                .collect()
        })
        .collect()
}

fn render_cell(seed: &str, kind: SheetKind, config: &RenderConfig) -> String {
    let color = Paint::from_seed(seed);
    match kind {
        SheetKind::Crystal => {
            let options = config.crystal.clone().color(color);
            crystal::generate(seed, &options)
        }
        SheetKind::Icon => {
            let options = config.icon.clone().color(color);
            icon::generate(seed, IconCategory::Mixed, &options)
        }
    }
}

fn render_sheet(seeds: &[String], kind: SheetKind, config: &RenderConfig) -> String {
    let mut html = String::from(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n\
         <title>glyphseed sheet</title>\n<style>\n\
         body { background: #14161a; color: #c8ccd4; font-family: monospace; }\n\
         .grid { display: flex; flex-wrap: wrap; gap: 16px; }\n\
         figure { margin: 0; text-align: center; width: 96px; }\n\
         figcaption { font-size: 11px; overflow: hidden; text-overflow: ellipsis; }\n\
         </style>\n</head>\n<body>\n<div class=\"grid\">\n",
    );
    for seed in seeds {
        html.push_str(&format!(
            "<figure>{}<figcaption title=\"{seed}\">{seed}</figcaption></figure>\n",
            render_cell(seed, kind, config),
            seed = escape_attr(seed)
        ));
    }
    html.push_str("</div>\n</body>\n</html>\n");
    html
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_seeds_are_reproducible() {
        let a = sample_seeds(5, 7);
        assert_eq!(a, sample_seeds(5, 7));
        assert_ne!(a, sample_seeds(5, 8));
        for seed in &a {
            assert_eq!(seed.len(), SAMPLE_SEED_LEN);
            assert!(seed.chars().all(|c| c.is_ascii_alphanumeric()));
        }
    }

    #[test]
    fn test_sheet_has_one_cell_per_seed() {
        let seeds = vec!["alpha".to_string(), "beta".to_string(), "<gamma>".to_string()];
        let html = render_sheet(&seeds, SheetKind::Icon, &RenderConfig::default());
        assert_eq!(html.matches("<figure>").count(), 3);
        assert_eq!(html.matches("<svg").count(), 3);
        assert!(html.contains("&lt;gamma&gt;"));
        assert!(!html.contains("<gamma>"));
    }

    #[test]
    fn test_crystal_cells_use_distinct_filter_ids() {
        let seeds = vec!["alpha".to_string(), "beta".to_string()];
        let html = render_sheet(&seeds, SheetKind::Crystal, &RenderConfig::default());
        let ids: Vec<&str> = html
            .match_indices("<filter id=\"")
            .map(|(i, m)| {
                let rest = &html[i + m.len()..];
                &rest[..rest.find('"').unwrap()]
            })
            .collect();
        assert_eq!(ids.len(), 2);
        assert_ne!(ids[0], ids[1]);
    }

    #[test]
    fn test_empty_input_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sheet.html");
        assert!(run(&[], 0, 1, SheetKind::Crystal, None, path.to_str().unwrap()).is_err());
        assert!(!path.exists());
    }

    #[test]
    fn test_run_writes_html() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sheet.html");
        run(
            &["jaskier".to_string()],
            3,
            42,
            SheetKind::Crystal,
            None,
            path.to_str().unwrap(),
        )
        .unwrap();
        let html = std::fs::read_to_string(&path).unwrap();
        assert_eq!(html.matches("<figure>").count(), 4);
    }
}
