//! The crystal family table.
//!
//! Each family declares the range of every proportion it draws and two pure
//! functions: the silhouette outline and three candidate facet lines. Adding
//! a family is a new row here plus a [`CrystalKind`] variant.

use serde::Serialize;

use super::{CrystalKind, Point, Proportions, Segment};

/// A declared `[min, max)` range for one proportion.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Span {
    /// Inclusive lower bound.
    pub min: f64,
    /// Exclusive upper bound.
    pub max: f64,
}

const fn span(min: f64, max: f64) -> Span {
    Span { min, max }
}

/// One crystal family.
#[derive(Clone, Copy)]
pub struct CrystalFamily {
    /// Family identifier.
    pub kind: CrystalKind,
    /// Y of the topmost point.
    pub apex: Span,
    /// Y of the widest band.
    pub waist: Span,
    /// Half width at the waist.
    pub waist_half: Span,
    /// Half width of the table or base.
    pub base_half: Span,
    /// Y of the lowest point.
    pub base: Span,
    /// Family-specific asymmetry.
    pub skew: Span,
    pub(super) outline: fn(&Proportions) -> Vec<Point>,
    pub(super) facets: fn(&Proportions) -> [Segment; 3],
}

impl std::fmt::Debug for CrystalFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CrystalFamily")
            .field("kind", &self.kind)
            .finish_non_exhaustive()
    }
}

const C: f64 = 50.0;

pub(super) static FAMILIES: [CrystalFamily; 8] = [
    CrystalFamily {
        kind: CrystalKind::Brilliant,
        apex: span(12.0, 20.0),
        waist: span(30.0, 40.0),
        waist_half: span(34.0, 42.0),
        base_half: span(14.0, 20.0),
        base: span(86.0, 92.0),
        skew: span(0.0, 0.0),
        outline: brilliant_outline,
        facets: brilliant_facets,
    },
    CrystalFamily {
        kind: CrystalKind::Shard,
        apex: span(6.0, 14.0),
        waist: span(40.0, 55.0),
        waist_half: span(14.0, 20.0),
        base_half: span(10.0, 16.0),
        base: span(88.0, 94.0),
        skew: span(-8.0, 8.0),
        outline: shard_outline,
        facets: shard_facets,
    },
    CrystalFamily {
        kind: CrystalKind::Prism,
        apex: span(6.0, 14.0),
        waist: span(20.0, 30.0),
        waist_half: span(18.0, 26.0),
        base_half: span(18.0, 26.0),
        base: span(84.0, 92.0),
        skew: span(0.0, 0.0),
        outline: prism_outline,
        facets: prism_facets,
    },
    CrystalFamily {
        kind: CrystalKind::Octahedron,
        apex: span(6.0, 14.0),
        waist: span(45.0, 55.0),
        waist_half: span(28.0, 38.0),
        base_half: span(0.0, 0.0),
        base: span(86.0, 94.0),
        skew: span(-4.0, 4.0),
        outline: octahedron_outline,
        facets: octahedron_facets,
    },
    CrystalFamily {
        kind: CrystalKind::Pillar,
        apex: span(6.0, 14.0),
        waist: span(24.0, 34.0),
        waist_half: span(16.0, 24.0),
        base_half: span(16.0, 24.0),
        base: span(88.0, 94.0),
        skew: span(0.0, 0.0),
        outline: pillar_outline,
        facets: pillar_facets,
    },
    CrystalFamily {
        kind: CrystalKind::Twin,
        apex: span(4.0, 10.0),
        waist: span(26.0, 34.0),
        waist_half: span(20.0, 28.0),
        base_half: span(0.0, 0.0),
        base: span(90.0, 96.0),
        skew: span(0.0, 0.0),
        outline: twin_outline,
        facets: twin_facets,
    },
    CrystalFamily {
        kind: CrystalKind::Kite,
        apex: span(4.0, 10.0),
        waist: span(26.0, 36.0),
        waist_half: span(26.0, 36.0),
        base_half: span(0.0, 0.0),
        base: span(90.0, 96.0),
        skew: span(-6.0, 6.0),
        outline: kite_outline,
        facets: kite_facets,
    },
    CrystalFamily {
        kind: CrystalKind::Cluster,
        apex: span(6.0, 14.0),
        waist: span(26.0, 38.0),
        waist_half: span(26.0, 34.0),
        base_half: span(34.0, 40.0),
        base: span(86.0, 92.0),
        skew: span(-6.0, 6.0),
        outline: cluster_outline,
        facets: cluster_facets,
    },
];

fn brilliant_outline(p: &Proportions) -> Vec<Point> {
    vec![
        (C - p.base_half, p.apex),
        (C + p.base_half, p.apex),
        (C + p.waist_half, p.waist),
        (C, p.base),
        (C - p.waist_half, p.waist),
    ]
}

fn brilliant_facets(p: &Proportions) -> [Segment; 3] {
    [
        ((C - p.waist_half, p.waist), (C + p.waist_half, p.waist)),
        ((C - p.base_half, p.apex), (C, p.base)),
        ((C + p.base_half, p.apex), (C, p.base)),
    ]
}

fn shard_outline(p: &Proportions) -> Vec<Point> {
    vec![
        (C + p.skew, p.apex),
        (C + p.waist_half, p.waist),
        (C + p.base_half, p.base),
        (C - p.base_half * 0.6, p.base),
        (C - p.waist_half * 0.8, p.waist + 8.0),
    ]
}

fn shard_facets(p: &Proportions) -> [Segment; 3] {
    [
        ((C + p.skew, p.apex), (C, p.base)),
        ((C - p.waist_half * 0.8, p.waist + 8.0), (C + p.waist_half, p.waist)),
        ((C + p.skew, p.apex), (C + p.base_half * 0.5, p.base)),
    ]
}

fn prism_lower(p: &Proportions) -> f64 {
    p.base - (p.waist - p.apex)
}

fn prism_outline(p: &Proportions) -> Vec<Point> {
    let lower = prism_lower(p);
    vec![
        (C, p.apex),
        (C + p.waist_half, p.waist),
        (C + p.base_half, lower),
        (C, p.base),
        (C - p.base_half, lower),
        (C - p.waist_half, p.waist),
    ]
}

fn prism_facets(p: &Proportions) -> [Segment; 3] {
    let lower = prism_lower(p);
    [
        ((C, p.apex), (C, p.base)),
        ((C - p.waist_half, p.waist), (C + p.waist_half, p.waist)),
        ((C - p.base_half, lower), (C + p.base_half, lower)),
    ]
}

fn octahedron_outline(p: &Proportions) -> Vec<Point> {
    vec![
        (C, p.apex),
        (C + p.waist_half + p.skew, p.waist),
        (C, p.base),
        (C - p.waist_half + p.skew, p.waist),
    ]
}

fn octahedron_facets(p: &Proportions) -> [Segment; 3] {
    [
        ((C - p.waist_half + p.skew, p.waist), (C + p.waist_half + p.skew, p.waist)),
        ((C, p.apex), (C, p.base)),
        ((C, p.apex), (C + p.waist_half * 0.35 + p.skew, p.waist)),
    ]
}

fn pillar_outline(p: &Proportions) -> Vec<Point> {
    vec![
        (C, p.apex),
        (C + p.waist_half, p.waist),
        (C + p.base_half, p.base),
        (C - p.base_half, p.base),
        (C - p.waist_half, p.waist),
    ]
}

fn pillar_facets(p: &Proportions) -> [Segment; 3] {
    [
        ((C - p.waist_half, p.waist), (C + p.waist_half, p.waist)),
        ((C, p.apex), (C, p.base)),
        ((C, p.apex), (C + p.base_half, p.base)),
    ]
}

fn twin_outline(p: &Proportions) -> Vec<Point> {
    let lower = 100.0 - p.waist;
    vec![
        (C, p.apex),
        (C + p.waist_half, p.waist),
        (C + p.waist_half, lower),
        (C, p.base),
        (C - p.waist_half, lower),
        (C - p.waist_half, p.waist),
    ]
}

fn twin_facets(p: &Proportions) -> [Segment; 3] {
    let lower = 100.0 - p.waist;
    [
        ((C - p.waist_half, p.waist), (C + p.waist_half, p.waist)),
        ((C - p.waist_half, lower), (C + p.waist_half, lower)),
        ((C, p.apex), (C, p.base)),
    ]
}

fn kite_outline(p: &Proportions) -> Vec<Point> {
    vec![
        (C, p.apex),
        (C + p.waist_half, p.waist + p.skew),
        (C, p.base),
        (C - p.waist_half, p.waist - p.skew),
    ]
}

fn kite_facets(p: &Proportions) -> [Segment; 3] {
    [
        ((C - p.waist_half, p.waist - p.skew), (C + p.waist_half, p.waist + p.skew)),
        ((C, p.apex), (C, p.base)),
        ((C - p.waist_half * 0.5, (p.apex + p.waist) / 2.0), (C, p.base)),
    ]
}

fn cluster_outline(p: &Proportions) -> Vec<Point> {
    vec![
        (C - p.base_half, p.base),
        (C - p.waist_half, p.waist + p.skew),
        (C - p.waist_half + 10.0, p.waist + 12.0),
        (C - 6.0, p.apex + 16.0),
        (C, p.apex),
        (C + 6.0, p.apex + 16.0),
        (C + p.waist_half - 10.0, p.waist + 12.0 - p.skew),
        (C + p.waist_half, p.waist - p.skew),
        (C + p.base_half, p.base),
    ]
}

fn cluster_facets(p: &Proportions) -> [Segment; 3] {
    [
        ((C, p.apex), (C, p.base)),
        ((C - p.waist_half, p.waist + p.skew), (C - p.base_half * 0.5, p.base)),
        ((C + p.waist_half, p.waist - p.skew), (C + p.base_half * 0.5, p.base)),
    ]
}
