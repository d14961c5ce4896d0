//! Glyphseed Core
//!
//! Deterministic procedural visual identities. Any identifier (an agent
//! name, a tool name, a message id) maps to reproducible SVG markup:
//!
//! - **Crystals**: gem-silhouette avatars from eight families
//! - **Icons**: semantic icons from five 8-template catalogs
//! - **Connectors**: small hash-chosen polygons for message chains
//! - **Palette**: a 64-colour table with a seed-to-colour picker
//!
//! # Example
//!
//! ```
//! use glyphseed_core::{crystal, icon, palette, CrystalOptions, IconCategory, IconOptions, Paint};
//!
//! let avatar = crystal::generate(
//!     "jaskier",
//!     &CrystalOptions::default().color(Paint::from_seed("jaskier")),
//! );
//! let badge = icon::generate("vault_search", IconCategory::Search, &IconOptions::default());
//! let color = palette::pick_color("jaskier");
//!
//! assert!(avatar.starts_with("<svg"));
//! assert!(badge.starts_with("<svg"));
//! assert_eq!(color.name, "Jade");
//! ```
//!
//! # Determinism
//!
//! - Same seed + same options = byte-identical markup
//! - Seeds are reduced with a 32-bit rolling hash over UTF-16 code units
//! - All randomness comes from a per-call mulberry32 stream
//! - Coordinates are clamped to the viewBox and written with one decimal
//!
//! Nothing is cached or shared between calls, so every entry point is safe
//! to call from any number of threads.

pub mod config;
pub mod connector;
pub mod crystal;
pub mod digest;
pub mod error;
pub mod icon;
pub mod markup;
pub mod paint;
pub mod palette;
pub mod rng;
pub mod seed;

// Re-export main types for convenience
pub use config::{ConnectorOptions, CrystalOptions, FilterIdScope, IconOptions, RenderConfig};
pub use connector::ConnectorShape;
pub use crystal::{CrystalComposition, CrystalKind};
pub use digest::markup_digest;
pub use error::{ConfigError, PaintError, ParseCategoryError};
pub use icon::{IconCategory, IconComposition};
pub use paint::Paint;
pub use palette::{ColorGroup, PaletteColor, COLOR_GROUPS, PALETTE};
pub use rng::Mulberry32;
pub use seed::{string_hash, Seed};
