//! Semantic icon generation.
//!
//! Five catalogs of eight templates each, drawn on a 24x24 canvas:
//!
//! | Category | Visual family |
//! |---|---|
//! | `memory` | rounded: orbs, rings, capsules |
//! | `search` | angular: triangles, arrows, prisms, chevrons |
//! | `write` | rectangular: pages, grids, bars |
//! | `connect` | organic: nodes, waves, branches |
//! | `arcane` | sigils: stars, seals, runes |
//!
//! `mixed` lets the RNG choose the category too. The draw order per call is
//! fixed: category (mixed only), template, the template's own draws, then
//! the rotation roll.

mod arcane;
mod connect;
mod memory;
mod search;
mod write;

use std::f64::consts::TAU;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::IconOptions;
use crate::error::ParseCategoryError;
use crate::markup::{document, rotate_group, Canvas, Style};
use crate::paint::Paint;
use crate::rng::Mulberry32;
use crate::seed::Seed;

/// Icon viewBox edge length.
pub const ICON_EXTENT: u32 = 24;

/// Probability that a composed icon is rotated.
pub const ROTATION_CHANCE: f64 = 0.15;

/// Rotations drawn when the rotation roll succeeds. Quarter turns about the
/// centre keep every shape inside the viewBox.
pub const ROTATIONS: [u16; 3] = [90, 180, 270];

const STROKE_WIDTH: f64 = 1.5;

/// A template draws one icon onto a canvas.
pub type IconDrawFn = fn(&mut Mulberry32, &Paint, &mut Canvas);

/// One catalog entry.
#[derive(Clone, Copy)]
pub struct IconTemplate {
    /// Stable template name.
    pub name: &'static str,
    /// Drawing function.
    pub draw: IconDrawFn,
}

impl fmt::Debug for IconTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IconTemplate").field("name", &self.name).finish()
    }
}

/// Icon catalog selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconCategory {
    /// Rounded shapes.
    Memory,
    /// Angular shapes.
    Search,
    /// Rectangular shapes.
    Write,
    /// Organic shapes.
    Connect,
    /// Sigils.
    Arcane,
    /// Let the RNG choose one of the above.
    #[default]
    Mixed,
}

impl IconCategory {
    /// The five concrete categories, in draw order for `Mixed`.
    pub const CONCRETE: [IconCategory; 5] = [
        IconCategory::Memory,
        IconCategory::Search,
        IconCategory::Write,
        IconCategory::Connect,
        IconCategory::Arcane,
    ];

    /// Lowercase category name.
    pub fn name(self) -> &'static str {
        match self {
            IconCategory::Memory => "memory",
            IconCategory::Search => "search",
            IconCategory::Write => "write",
            IconCategory::Connect => "connect",
            IconCategory::Arcane => "arcane",
            IconCategory::Mixed => "mixed",
        }
    }

    /// The visual family of the category.
    pub fn style(self) -> &'static str {
        match self {
            IconCategory::Memory => "rounded",
            IconCategory::Search => "angular",
            IconCategory::Write => "rectangular",
            IconCategory::Connect => "organic",
            IconCategory::Arcane => "sigil",
            IconCategory::Mixed => "mixed",
        }
    }

    /// The catalog for a concrete category. Empty for `Mixed`.
    pub fn templates(self) -> &'static [IconTemplate] {
        match self {
            IconCategory::Memory => &memory::TEMPLATES,
            IconCategory::Search => &search::TEMPLATES,
            IconCategory::Write => &write::TEMPLATES,
            IconCategory::Connect => &connect::TEMPLATES,
            IconCategory::Arcane => &arcane::TEMPLATES,
            IconCategory::Mixed => &[],
        }
    }

    /// Parse a name, falling back to `Mixed` for anything unrecognised.
    pub fn from_name_lossy(name: &str) -> Self {
        name.parse().unwrap_or(IconCategory::Mixed)
    }
}

impl fmt::Display for IconCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for IconCategory {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "memory" => Ok(IconCategory::Memory),
            "search" => Ok(IconCategory::Search),
            "write" => Ok(IconCategory::Write),
            "connect" => Ok(IconCategory::Connect),
            "arcane" => Ok(IconCategory::Arcane),
            "mixed" | "" => Ok(IconCategory::Mixed),
            _ => Err(ParseCategoryError {
                name: s.to_string(),
            }),
        }
    }
}

/// What a single icon generation chose, plus the fragment it drew.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IconComposition {
    /// The concrete category drawn from.
    pub category: IconCategory,
    /// Template name within the category.
    pub template: &'static str,
    /// Quarter-turn rotation, if the rotation roll succeeded.
    pub rotation: Option<u16>,
    /// Inner SVG fragment (24x24 user space).
    pub fragment: String,
}

/// Draw an icon and report which catalog entry was used.
pub fn compose(seed: impl Into<Seed>, category: IconCategory, color: &Paint) -> IconComposition {
    let seed = seed.into();
    let mut rng = seed.rng();

    let category = match category {
        IconCategory::Mixed => *rng.pick(&IconCategory::CONCRETE),
        concrete => concrete,
    };
    let template = rng.pick(category.templates());

    let mut canvas = Canvas::new(ICON_EXTENT);
    (template.draw)(&mut rng, color, &mut canvas);
    if canvas.is_empty() {
        canvas.circle(12.0, 12.0, 1.0, &Style::fill(color));
    }
    let drawn = canvas.finish();

    let rotation = if rng.chance(ROTATION_CHANCE) {
        Some(*rng.pick(&ROTATIONS))
    } else {
        None
    };
    let fragment = match rotation {
        Some(degrees) => rotate_group(&drawn, degrees, ICON_EXTENT),
        None => drawn,
    };

    IconComposition {
        category,
        template: template.name,
        rotation,
        fragment,
    }
}

/// Standalone icon markup.
///
/// ```
/// use glyphseed_core::{icon, IconCategory, IconOptions};
///
/// let svg = icon::generate("vault_search", IconCategory::Search, &IconOptions::default());
/// assert!(svg.starts_with("<svg"));
/// assert!(!svg.contains("<rect"));
/// ```
pub fn generate(seed: impl Into<Seed>, category: IconCategory, options: &IconOptions) -> String {
    let composition = compose(seed, category, &options.color);
    document(
        options.effective_size(),
        ICON_EXTENT,
        None,
        &composition.fragment,
    )
}

/// Inner fragment for embedding in a caller-owned `<svg>` with a
/// `0 0 24 24` viewBox.
pub fn generate_inner(seed: impl Into<Seed>, category: IconCategory, color: &Paint) -> String {
    compose(seed, category, color).fragment
}

// Shared drawing helpers for the catalogs.

fn line_style(color: &Paint) -> Style {
    Style::stroke(color, STROKE_WIDTH)
}

fn polar(cx: f64, cy: f64, radius: f64, angle: f64) -> (f64, f64) {
    (cx + radius * angle.cos(), cy + radius * angle.sin())
}

fn regular_polygon(sides: usize, radius: f64, rotation: f64) -> Vec<(f64, f64)> {
    (0..sides)
        .map(|i| polar(12.0, 12.0, radius, rotation + TAU * i as f64 / sides as f64))
        .collect()
}
