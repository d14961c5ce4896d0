//! Icon command implementation
//!
//! Renders a semantic icon, its inner fragment, or its composition metadata.

use anyhow::Result;
use glyphseed_core::{icon, IconCategory, IconComposition, IconOptions, Paint};
use serde::Serialize;
use std::process::ExitCode;

use super::output::{emit, load_config, to_json};

/// Flag overrides applied on top of the config file.
#[derive(Debug, Clone, Default)]
pub struct IconFlags {
    /// Catalog to draw from.
    pub category: IconCategory,
    /// Pixel size override.
    pub size: Option<u32>,
    /// Explicit colour.
    pub color: Option<Paint>,
    /// Emit only the inner fragment.
    pub inner: bool,
    /// Emit composition metadata as JSON.
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct IconReport<'a> {
    seed: &'a str,
    size: u32,
    #[serde(flatten)]
    composition: IconComposition,
}

/// Run the icon command
///
/// # Arguments
/// * `seed` - Identifier to render
/// * `flags` - Category and flag overrides
/// * `config` - Optional render config JSON path
/// * `output` - Output file path (default: stdout)
pub fn run(
    seed: &str,
    flags: IconFlags,
    config: Option<&str>,
    output: Option<&str>,
) -> Result<ExitCode> {
    let mut options = load_config(config)?.icon;
    if let Some(size) = flags.size {
        options.size = size;
    }
    if let Some(color) = flags.color {
        options.color = color;
    }

    let content = render(seed, flags.category, &options, flags.inner, flags.json)?;
    emit(&content, output)?;
    Ok(ExitCode::SUCCESS)
}

fn render(
    seed: &str,
    category: IconCategory,
    options: &IconOptions,
    inner: bool,
    json: bool,
) -> Result<String> {
    if json {
        let report = IconReport {
            seed,
            size: options.effective_size(),
            composition: icon::compose(seed, category, &options.color),
        };
        return to_json(&report);
    }
    Ok(if inner {
        icon::generate_inner(seed, category, &options.color)
    } else {
        icon::generate(seed, category, options)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_report_fields() {
        let text = render(
            "vault_search",
            IconCategory::Search,
            &IconOptions::default(),
            false,
            true,
        )
        .unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["seed"], "vault_search");
        assert_eq!(value["category"], "search");
        assert_eq!(value["size"], 24);
        assert!(value["template"].is_string());
        assert!(value["fragment"].as_str().unwrap().starts_with('<'));
    }

    #[test]
    fn test_inner_has_no_svg_wrapper() {
        let text = render(
            "vault_search",
            IconCategory::Memory,
            &IconOptions::default(),
            true,
            false,
        )
        .unwrap();
        assert!(!text.contains("<svg"));
    }

    #[test]
    fn test_standalone_matches_library() {
        let options = IconOptions::default().size(40);
        let text = render("agent-x", IconCategory::Mixed, &options, false, false).unwrap();
        assert_eq!(text, icon::generate("agent-x", IconCategory::Mixed, &options));
    }
}
