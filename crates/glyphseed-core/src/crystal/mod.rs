//! Crystal avatar generation.
//!
//! A crystal is a gem silhouette from one of eight families, drawn on a
//! 100x100 canvas, with up to three facet lines and an optional glow filter.
//!
//! Draw order per call: family, then `apex`, `waist`, `waist_half`,
//! `base_half`, `base`, `skew` from the family's declared spans, then fill
//! opacity, then the facet count.

mod families;

pub use families::{CrystalFamily, Span};

use serde::Serialize;

use crate::config::{CrystalOptions, FilterIdScope};
use crate::markup::{document, Canvas, Style};
use crate::paint::Paint;
use crate::rng::Mulberry32;
use crate::seed::{string_hash, Seed};

use families::FAMILIES;

/// Crystal viewBox edge length.
pub const CRYSTAL_EXTENT: u32 = 100;

/// Maximum facet lines per crystal.
pub const MAX_FACETS: i32 = 3;

/// Glow blur radius in user units.
const GLOW_DEVIATION: f64 = 3.0;

type Point = (f64, f64);
type Segment = (Point, Point);

/// Crystal family identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CrystalKind {
    /// Table-cut gem with a pointed pavilion.
    Brilliant,
    /// Tall asymmetric splinter.
    Shard,
    /// Hexagonal column pointed at both ends.
    Prism,
    /// Rhombus with a centred waist.
    Octahedron,
    /// Pointed top, flat base.
    Pillar,
    /// Double-terminated hexagon.
    Twin,
    /// High-waisted rhombus.
    Kite,
    /// Three peaks on a shared base.
    Cluster,
}

/// Proportions drawn for one crystal, in 100x100 user space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Proportions {
    /// Y of the topmost point.
    pub apex: f64,
    /// Y of the widest band.
    pub waist: f64,
    /// Half width at the waist.
    pub waist_half: f64,
    /// Half width of the table or base.
    pub base_half: f64,
    /// Y of the lowest point.
    pub base: f64,
    /// Family-specific asymmetry.
    pub skew: f64,
}

impl Proportions {
    fn draw(family: &CrystalFamily, rng: &mut Mulberry32) -> Self {
        let mut within = |s: Span| rng.float(s.min, s.max);
        Self {
            apex: within(family.apex),
            waist: within(family.waist),
            waist_half: within(family.waist_half),
            base_half: within(family.base_half),
            base: within(family.base),
            skew: within(family.skew),
        }
    }
}

/// What a single crystal generation chose, plus the fragment it drew.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CrystalComposition {
    /// Family drawn from.
    pub family: CrystalKind,
    /// Drawn proportions.
    pub proportions: Proportions,
    /// Number of facet lines drawn (0-3).
    pub facets: u8,
    /// Inner SVG fragment (100x100 user space, no filter).
    pub fragment: String,
}

/// The family table, in draw order.
pub fn families() -> &'static [CrystalFamily] {
    &FAMILIES
}

/// Draw a crystal and report which family and proportions were used.
pub fn compose(seed: impl Into<Seed>, color: &Paint) -> CrystalComposition {
    let seed = seed.into();
    let mut rng = seed.rng();

    let family = rng.pick(&FAMILIES);
    let proportions = Proportions::draw(family, &mut rng);
    let fill_opacity = rng.float(0.7, 0.9);
    let facets = rng.int(0, MAX_FACETS);

    let mut canvas = Canvas::new(CRYSTAL_EXTENT);
    canvas.polygon(
        &(family.outline)(&proportions),
        &Style::stroke(color, 2.0)
            .with_fill(color)
            .with_fill_opacity(fill_opacity),
    );
    let highlight = Paint::Hex("#ffffff".to_string());
    for &((x1, y1), (x2, y2)) in (family.facets)(&proportions).iter().take(facets as usize) {
        canvas.line(
            x1,
            y1,
            x2,
            y2,
            &Style::stroke(&highlight, 1.5).with_stroke_opacity(0.45),
        );
    }

    CrystalComposition {
        family: family.kind,
        proportions,
        facets: facets as u8,
        fragment: canvas.finish(),
    }
}

/// Id of the glow filter for a render.
///
/// With [`FilterIdScope::PerRender`] the id covers seed, size, and colour so
/// different renders of one seed can share a document. With
/// [`FilterIdScope::PerSeed`] only the seed is used.
pub fn glow_filter_id(seed: &Seed, options: &CrystalOptions) -> String {
    let key = match options.filter_ids {
        FilterIdScope::PerSeed => seed.hash(),
        FilterIdScope::PerRender => string_hash(&format!(
            "{}:{}:{}",
            seed.hash(),
            options.effective_size(),
            options.color
        )),
    };
    format!("glyphseed-glow-{:08x}", key as u32)
}

fn glow_filter(id: &str) -> String {
    format!(
        "<filter id=\"{}\" x=\"-50%\" y=\"-50%\" width=\"200%\" height=\"200%\">\
         <feGaussianBlur stdDeviation=\"{:.1}\" result=\"blur\"/>\
         <feMerge><feMergeNode in=\"blur\"/><feMergeNode in=\"SourceGraphic\"/></feMerge>\
         </filter>",
        id, GLOW_DEVIATION
    )
}

/// Standalone crystal markup.
///
/// ```
/// use glyphseed_core::{crystal, CrystalOptions};
///
/// let svg = crystal::generate("jaskier", &CrystalOptions::default());
/// assert!(svg.contains("width=\"48\""));
/// assert!(svg.contains("<defs><filter"));
/// ```
pub fn generate(seed: impl Into<Seed>, options: &CrystalOptions) -> String {
    let seed = seed.into();
    let composition = compose(&seed, &options.color);
    let size = options.effective_size();

    if options.glow {
        let id = glow_filter_id(&seed, options);
        let body = format!("<g filter=\"url(#{})\">{}</g>", id, composition.fragment);
        document(size, CRYSTAL_EXTENT, Some(&glow_filter(&id)), &body)
    } else {
        document(size, CRYSTAL_EXTENT, None, &composition.fragment)
    }
}

/// Inner fragment for embedding in a caller-owned `<svg>` with a
/// `0 0 100 100` viewBox. Never includes the glow filter.
pub fn generate_inner(seed: impl Into<Seed>, color: &Paint) -> String {
    compose(seed, color).fragment
}
