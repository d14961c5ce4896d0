//! Connector command implementation
//!
//! Renders a connector glyph, a bare marker fragment, or the CSS clip-path
//! for a seed.

use anyhow::Result;
use glyphseed_core::{connector, Paint};
use std::process::ExitCode;

use super::output::{emit, load_config};

/// Flag overrides applied on top of the config file.
#[derive(Debug, Clone, Default)]
pub struct ConnectorFlags {
    /// Explicit colour. Defaults to the seed's palette colour.
    pub color: Option<Paint>,
    /// Render the active state.
    pub active: bool,
    /// Emit only the marker polygon. `Some(None)` uses the configured size.
    pub marker: Option<Option<f64>>,
    /// Emit only the CSS clip-path value.
    pub clip_path: bool,
}

/// Run the connector command
///
/// # Arguments
/// * `seed` - Identifier to render
/// * `flags` - Output mode and flag overrides
/// * `config` - Optional render config JSON path
/// * `output` - Output file path (default: stdout)
pub fn run(
    seed: &str,
    flags: ConnectorFlags,
    config: Option<&str>,
    output: Option<&str>,
) -> Result<ExitCode> {
    let options = load_config(config)?.connector;
    let content = render(seed, &flags, options.marker_size);
    emit(&content, output)?;
    Ok(ExitCode::SUCCESS)
}

fn render(seed: &str, flags: &ConnectorFlags, default_marker: f64) -> String {
    if flags.clip_path {
        return connector::get_clip_path(seed).to_string();
    }
    let color = flags
        .color
        .clone()
        .unwrap_or_else(|| Paint::from_seed(seed));
    match flags.marker {
        Some(size) => connector::create_marker(&color, seed, size.unwrap_or(default_marker)),
        None => connector::create(&color, flags.active, seed),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_clip_path_mode() {
        let flags = ConnectorFlags {
            clip_path: true,
            ..ConnectorFlags::default()
        };
        assert_eq!(render("jaskier", &flags, 12.0), connector::get_clip_path("jaskier"));
    }

    #[test]
    fn test_default_color_is_palette_pick() {
        let text = render("jaskier", &ConnectorFlags::default(), 12.0);
        assert!(text.contains("fill=\"#00a86b\""));
        assert!(text.contains("data-shape=\"hexagon\""));
    }

    #[test]
    fn test_marker_uses_configured_size() {
        let flags = ConnectorFlags {
            marker: Some(None),
            color: Some(Paint::CurrentColor),
            ..ConnectorFlags::default()
        };
        assert_eq!(
            render("x", &flags, 20.0),
            connector::create_marker(&Paint::CurrentColor, "x", 20.0)
        );
    }
}
