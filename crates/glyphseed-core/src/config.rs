//! Typed render options.
//!
//! Each generator takes an explicit options struct instead of a loose map.
//! Every field has a default and unknown keys in serialized configs are
//! ignored, so partial configs always load.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::paint::Paint;

/// Default crystal edge length in pixels.
pub const DEFAULT_CRYSTAL_SIZE: u32 = 48;
/// Default icon edge length in pixels.
pub const DEFAULT_ICON_SIZE: u32 = 24;
/// Default connector marker edge length in pixels.
pub const DEFAULT_MARKER_SIZE: f64 = 12.0;

/// How crystal glow-filter ids are derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterIdScope {
    /// From the seed, size, and colour: unique per distinct render.
    #[default]
    PerRender,
    /// From the seed alone. Two renders of one seed in the same document
    /// share an id.
    PerSeed,
}

/// Options for crystal avatars.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CrystalOptions {
    /// Pixel edge length. Zero falls back to [`DEFAULT_CRYSTAL_SIZE`].
    pub size: u32,
    /// Fill and stroke colour.
    pub color: Paint,
    /// Wrap the crystal in a glow filter.
    pub glow: bool,
    /// Glow filter id derivation.
    pub filter_ids: FilterIdScope,
}

impl Default for CrystalOptions {
    fn default() -> Self {
        Self {
            size: DEFAULT_CRYSTAL_SIZE,
            color: Paint::CurrentColor,
            glow: true,
            filter_ids: FilterIdScope::PerRender,
        }
    }
}

impl CrystalOptions {
    /// Builder-style size override.
    pub fn size(mut self, size: u32) -> Self {
        self.size = size;
        self
    }

    /// Builder-style colour override.
    pub fn color(mut self, color: impl Into<Paint>) -> Self {
        self.color = color.into();
        self
    }

    /// Builder-style glow toggle.
    pub fn glow(mut self, glow: bool) -> Self {
        self.glow = glow;
        self
    }

    /// Builder-style filter id scope.
    pub fn filter_ids(mut self, scope: FilterIdScope) -> Self {
        self.filter_ids = scope;
        self
    }

    /// The size actually rendered.
    pub fn effective_size(&self) -> u32 {
        if self.size == 0 {
            DEFAULT_CRYSTAL_SIZE
        } else {
            self.size
        }
    }
}

/// Options for semantic icons.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IconOptions {
    /// Pixel edge length. Zero falls back to [`DEFAULT_ICON_SIZE`].
    pub size: u32,
    /// Stroke and fill colour.
    pub color: Paint,
}

impl Default for IconOptions {
    fn default() -> Self {
        Self {
            size: DEFAULT_ICON_SIZE,
            color: Paint::CurrentColor,
        }
    }
}

impl IconOptions {
    /// Builder-style size override.
    pub fn size(mut self, size: u32) -> Self {
        self.size = size;
        self
    }

    /// Builder-style colour override.
    pub fn color(mut self, color: impl Into<Paint>) -> Self {
        self.color = color.into();
        self
    }

    /// The size actually rendered.
    pub fn effective_size(&self) -> u32 {
        if self.size == 0 {
            DEFAULT_ICON_SIZE
        } else {
            self.size
        }
    }
}

/// Options for connector glyphs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConnectorOptions {
    /// Marker edge length. Non-positive or non-finite values fall back to
    /// [`DEFAULT_MARKER_SIZE`].
    pub marker_size: f64,
}

impl Default for ConnectorOptions {
    fn default() -> Self {
        Self {
            marker_size: DEFAULT_MARKER_SIZE,
        }
    }
}

/// All generator options, loadable from one JSON document.
///
/// ```
/// use glyphseed_core::RenderConfig;
///
/// let config = RenderConfig::from_json_str(r#"{"crystal": {"size": 64}}"#).unwrap();
/// assert_eq!(config.crystal.size, 64);
/// assert!(config.crystal.glow);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Crystal avatar options.
    pub crystal: CrystalOptions,
    /// Icon options.
    pub icon: IconOptions,
    /// Connector options.
    pub connector: ConnectorOptions,
}

impl RenderConfig {
    /// Parse a JSON config. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize to pretty JSON.
    pub fn to_json_pretty(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let crystal = CrystalOptions::default();
        assert_eq!(crystal.size, 48);
        assert!(crystal.glow);
        assert_eq!(crystal.color, Paint::CurrentColor);
        assert_eq!(IconOptions::default().size, 24);
    }

    #[test]
    fn test_zero_size_falls_back() {
        assert_eq!(CrystalOptions::default().size(0).effective_size(), 48);
        assert_eq!(IconOptions::default().size(0).effective_size(), 24);
        assert_eq!(IconOptions::default().size(32).effective_size(), 32);
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let config = RenderConfig::from_json_str(
            r##"{"icon": {"color": "#FF0000", "shimmer": true}, "extra": 1}"##,
        )
        .unwrap();
        assert_eq!(config.icon.color, Paint::Hex("#ff0000".to_string()));
        assert_eq!(config.icon.size, 24);
        assert_eq!(config.crystal, CrystalOptions::default());
    }

    #[test]
    fn test_filter_scope_names() {
        let config =
            RenderConfig::from_json_str(r#"{"crystal": {"filter_ids": "per_seed"}}"#).unwrap();
        assert_eq!(config.crystal.filter_ids, FilterIdScope::PerSeed);
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        let err = RenderConfig::from_json_str("{").unwrap_err();
        assert!(err.to_string().starts_with("invalid render config"));
    }

    #[test]
    fn test_round_trip() {
        let config = RenderConfig::default();
        let json = config.to_json_pretty().unwrap();
        assert_eq!(RenderConfig::from_json_str(&json).unwrap(), config);
    }
}
