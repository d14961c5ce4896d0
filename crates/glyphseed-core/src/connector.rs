//! Connector glyphs for message chains.
//!
//! Six hand-authored polygons on a 12x12 grid. The shape is chosen by
//! `|hash(seed)| mod 6` without creating an RNG, so a seed always gets the
//! same shape whatever colour or active state it is drawn with.

use serde::Serialize;

use crate::config::DEFAULT_MARKER_SIZE;
use crate::markup::{escape_attr, fmt_num, SVG_NS};
use crate::paint::Paint;
use crate::seed::Seed;

/// Edge length of the shape grid.
pub const SHAPE_EXTENT: f64 = 12.0;

/// Height of the line glyph below the node.
pub const LINE_LENGTH: f64 = 16.0;

const INACTIVE_OPACITY: f64 = 0.4;

/// Connector node shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConnectorShape {
    /// Square turned on its corner.
    Diamond,
    /// Flat-topped hexagon.
    Hexagon,
    /// Upward-pointing triangle.
    Triangle,
    /// Pentagon with a point at the top.
    Pentagon,
    /// Octagon with flat sides on every axis.
    Octagon,
    /// Flat top tapering to a point below.
    Shield,
}

struct ShapeDef {
    shape: ConnectorShape,
    points: &'static [(f64, f64)],
    clip_path: &'static str,
}

static SHAPES: [ShapeDef; 6] = [
    ShapeDef {
        shape: ConnectorShape::Diamond,
        points: &[(6.0, 0.0), (12.0, 6.0), (6.0, 12.0), (0.0, 6.0)],
        clip_path: "polygon(50% 0%, 100% 50%, 50% 100%, 0% 50%)",
    },
    ShapeDef {
        shape: ConnectorShape::Hexagon,
        points: &[
            (3.0, 0.0),
            (9.0, 0.0),
            (12.0, 6.0),
            (9.0, 12.0),
            (3.0, 12.0),
            (0.0, 6.0),
        ],
        clip_path: "polygon(25% 0%, 75% 0%, 100% 50%, 75% 100%, 25% 100%, 0% 50%)",
    },
    ShapeDef {
        shape: ConnectorShape::Triangle,
        points: &[(6.0, 0.0), (12.0, 12.0), (0.0, 12.0)],
        clip_path: "polygon(50% 0%, 100% 100%, 0% 100%)",
    },
    ShapeDef {
        shape: ConnectorShape::Pentagon,
        points: &[(6.0, 0.0), (12.0, 4.6), (9.7, 12.0), (2.3, 12.0), (0.0, 4.6)],
        clip_path: "polygon(50% 0%, 100% 38%, 81% 100%, 19% 100%, 0% 38%)",
    },
    ShapeDef {
        shape: ConnectorShape::Octagon,
        points: &[
            (3.5, 0.0),
            (8.5, 0.0),
            (12.0, 3.5),
            (12.0, 8.5),
            (8.5, 12.0),
            (3.5, 12.0),
            (0.0, 8.5),
            (0.0, 3.5),
        ],
        clip_path: "polygon(30% 0%, 70% 0%, 100% 30%, 100% 70%, 70% 100%, 30% 100%, 0% 70%, 0% 30%)",
    },
    ShapeDef {
        shape: ConnectorShape::Shield,
        points: &[(0.0, 0.0), (12.0, 0.0), (12.0, 7.0), (6.0, 12.0), (0.0, 7.0)],
        clip_path: "polygon(0% 0%, 100% 0%, 100% 58%, 50% 100%, 0% 58%)",
    },
];

impl ConnectorShape {
    /// All shapes in table order.
    pub const ALL: [ConnectorShape; 6] = [
        ConnectorShape::Diamond,
        ConnectorShape::Hexagon,
        ConnectorShape::Triangle,
        ConnectorShape::Pentagon,
        ConnectorShape::Octagon,
        ConnectorShape::Shield,
    ];

    fn def(self) -> &'static ShapeDef {
        // SHAPES is ordered like ALL.
        &SHAPES[self as usize]
    }

    /// Lowercase shape name.
    pub fn name(self) -> &'static str {
        match self {
            ConnectorShape::Diamond => "diamond",
            ConnectorShape::Hexagon => "hexagon",
            ConnectorShape::Triangle => "triangle",
            ConnectorShape::Pentagon => "pentagon",
            ConnectorShape::Octagon => "octagon",
            ConnectorShape::Shield => "shield",
        }
    }

    /// Vertices on the 12x12 grid.
    pub fn points(self) -> &'static [(f64, f64)] {
        self.def().points
    }

    /// CSS `clip-path` value with the same outline.
    pub fn clip_path(self) -> &'static str {
        self.def().clip_path
    }

    /// The `points` attribute value, scaled from the 12x12 grid to `size`.
    pub fn points_attr(self, size: f64) -> String {
        let scale = size / SHAPE_EXTENT;
        self.points()
            .iter()
            .map(|&(x, y)| format!("{},{}", fmt_num(x * scale), fmt_num(y * scale)))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// The shape a seed maps to. Hash-driven; consumes no randomness.
pub fn shape_for(seed: impl Into<Seed>) -> ConnectorShape {
    SHAPES[seed.into().index_for(SHAPES.len())].shape
}

/// A connector: the seed's node polygon above a vertical line glyph.
///
/// `is_active` only switches the class and opacity attributes; the geometry
/// depends on the seed alone.
pub fn create(color: &Paint, is_active: bool, seed: impl Into<Seed>) -> String {
    let shape = shape_for(seed);
    let paint = color.as_attr();
    let state = if is_active { "active" } else { "idle" };
    let opacity = if is_active {
        String::new()
    } else {
        format!(" opacity=\"{:.2}\"", INACTIVE_OPACITY)
    };
    let mid = fmt_num(SHAPE_EXTENT / 2.0);
    format!(
        "<svg xmlns=\"{ns}\" class=\"glyphseed-connector glyphseed-connector--{state}\" \
         data-shape=\"{name}\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\
         <polygon class=\"glyphseed-connector__node\" points=\"{points}\" fill=\"{paint}\"{opacity}/>\
         <line class=\"glyphseed-connector__line\" x1=\"{mid}\" y1=\"{top}\" x2=\"{mid}\" y2=\"{bottom}\" \
         stroke=\"{paint}\" stroke-width=\"1.5\" stroke-linecap=\"round\"{opacity}/>\
         </svg>",
        ns = SVG_NS,
        state = state,
        name = escape_attr(shape.name()),
        w = fmt_num(SHAPE_EXTENT),
        h = fmt_num(SHAPE_EXTENT + LINE_LENGTH),
        points = shape.points_attr(SHAPE_EXTENT),
        paint = paint,
        opacity = opacity,
        mid = mid,
        top = fmt_num(SHAPE_EXTENT),
        bottom = fmt_num(SHAPE_EXTENT + LINE_LENGTH),
    )
}

/// The seed's polygon alone, scaled to `size`, as an inner fragment.
///
/// Non-positive or non-finite sizes fall back to the default marker size.
pub fn create_marker(color: &Paint, seed: impl Into<Seed>, size: f64) -> String {
    let size = if size.is_finite() && size > 0.0 {
        size
    } else {
        DEFAULT_MARKER_SIZE
    };
    let shape = shape_for(seed);
    format!(
        "<polygon points=\"{}\" fill=\"{}\"/>",
        shape.points_attr(size),
        color.as_attr()
    )
}

/// CSS clip-path for the seed's shape.
pub fn get_clip_path(seed: impl Into<Seed>) -> &'static str {
    shape_for(seed).clip_path()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn points_of(markup: &str) -> &str {
        let start = markup.find("points=\"").map(|i| i + 8).unwrap();
        let end = markup[start..].find('"').unwrap();
        &markup[start..start + end]
    }

    #[test]
    fn test_table_matches_all() {
        for (i, shape) in ConnectorShape::ALL.iter().enumerate() {
            assert_eq!(SHAPES[i].shape, *shape);
        }
    }

    #[test]
    fn test_shape_for_is_hash_modulo() {
        assert_eq!(shape_for("jaskier"), ConnectorShape::Hexagon);
        assert_eq!(shape_for(""), ConnectorShape::Diamond);
        assert_eq!(shape_for(4), ConnectorShape::Octagon);
        assert_eq!(shape_for(-5), ConnectorShape::Shield);
    }

    #[test]
    fn test_active_state_does_not_change_geometry() {
        let a = create(&Paint::from("#ff0000"), true, "seed1");
        let b = create(&Paint::from("#0000ff"), false, "seed1");
        assert_eq!(points_of(&a), points_of(&b));
        assert!(a.contains("glyphseed-connector--active"));
        assert!(b.contains("glyphseed-connector--idle"));
        assert!(b.contains("opacity=\"0.40\""));
        assert!(!a.contains("opacity="));
    }

    #[test]
    fn test_marker_scales_points() {
        let marker = create_marker(&Paint::CurrentColor, "", 24.0);
        assert_eq!(
            marker,
            "<polygon points=\"12.0,0.0 24.0,12.0 12.0,24.0 0.0,12.0\" fill=\"currentColor\"/>"
        );
    }

    #[test]
    fn test_marker_size_fallback() {
        let fallback = create_marker(&Paint::CurrentColor, "x", f64::NAN);
        let default = create_marker(&Paint::CurrentColor, "x", DEFAULT_MARKER_SIZE);
        assert_eq!(fallback, default);
        assert_eq!(create_marker(&Paint::CurrentColor, "x", -3.0), default);
    }

    #[test]
    fn test_clip_path_is_stable() {
        assert_eq!(get_clip_path(""), get_clip_path(""));
        assert_eq!(get_clip_path(""), "polygon(50% 0%, 100% 50%, 50% 100%, 0% 50%)");
    }

    #[test]
    fn test_clip_paths_have_one_vertex_per_point() {
        for shape in ConnectorShape::ALL {
            assert_eq!(
                shape.clip_path().matches(',').count() + 1,
                shape.points().len(),
                "{}",
                shape.name()
            );
        }
    }
}
