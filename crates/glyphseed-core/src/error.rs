//! Error types for strict parsing.
//!
//! The generators themselves are total and never return these. They are only
//! produced by the opt-in strict parsers used by callers that want to reject
//! bad input before it reaches the lenient generator surface.

use thiserror::Error;

/// An icon category name that is not one of the known catalogs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown icon category '{name}' (expected one of: memory, search, write, connect, arcane, mixed)")]
pub struct ParseCategoryError {
    /// The rejected name.
    pub name: String,
}

/// A colour token rejected by [`Paint::parse_strict`](crate::Paint::parse_strict).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaintError {
    /// The token was empty or whitespace.
    #[error("colour token is empty")]
    Empty,

    /// A `#` token that is not `#rgb` or `#rrggbb`.
    #[error("invalid hex colour '{0}' (expected #rgb or #rrggbb)")]
    InvalidHex(String),

    /// Anything else that does not look like a colour.
    #[error("unrecognised colour token '{0}'")]
    Unrecognised(String),
}

/// Errors loading a [`RenderConfig`](crate::RenderConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The JSON document could not be parsed.
    #[error("invalid render config: {0}")]
    Json(#[from] serde_json::Error),
}
