//! Organic templates: nodes, waves, branches.

use std::f64::consts::{PI, TAU};

use super::{line_style, polar, IconTemplate};
use crate::markup::{Canvas, PathData, Style};
use crate::paint::Paint;
use crate::rng::Mulberry32;

pub(super) const TEMPLATES: [IconTemplate; 8] = [
    IconTemplate { name: "nodes", draw: nodes },
    IconTemplate { name: "wave", draw: wave },
    IconTemplate { name: "chain", draw: chain },
    IconTemplate { name: "branch", draw: branch },
    IconTemplate { name: "spiral", draw: spiral },
    IconTemplate { name: "hub", draw: hub },
    IconTemplate { name: "leaf", draw: leaf },
    IconTemplate { name: "link", draw: link },
];

fn nodes(rng: &mut Mulberry32, color: &Paint, canvas: &mut Canvas) {
    let count = rng.int(3, 4);
    let radius = rng.float(6.0, 8.5);
    let offset = rng.float(0.0, TAU);
    let points: Vec<(f64, f64)> = (0..count)
        .map(|i| polar(12.0, 12.0, radius, offset + TAU * f64::from(i) / f64::from(count)))
        .collect();
    let ring = points[1..]
        .iter()
        .fold(PathData::new().move_to(points[0].0, points[0].1), |path, &(x, y)| {
            path.line_to(x, y)
        })
        .close();
    canvas.path(&ring, &line_style(color).with_opacity(0.7));
    if rng.chance(0.5) {
        let spokes = points.iter().fold(PathData::new(), |path, &(x, y)| {
            path.move_to(x, y).line_to(12.0, 12.0)
        });
        canvas.path(&spokes, &line_style(color).with_opacity(0.5));
    }
    for &(x, y) in &points {
        let r = rng.float(1.6, 2.4);
        canvas.circle(x, y, r, &Style::fill(color));
    }
}

fn wave(rng: &mut Mulberry32, color: &Paint, canvas: &mut Canvas) {
    // Crests sit at `row +- 2 * amplitude`; the lower row is at 15.
    let amplitude = rng.float(2.0, 4.5);
    let periods = rng.int(1, 3);
    let doubled = rng.chance(0.4);
    let rows: &[f64] = if doubled { &[9.0, 15.0] } else { &[12.0] };
    let segment = 20.0 / f64::from(periods * 2);
    for &row in rows {
        let mut path = PathData::new().move_to(2.0, row);
        for s in 0..periods * 2 {
            let x0 = 2.0 + segment * f64::from(s);
            let crest = if s % 2 == 0 { -amplitude } else { amplitude };
            path = path.quad_to(x0 + segment / 2.0, row + 2.0 * crest, x0 + segment, row);
        }
        canvas.path(&path, &line_style(color));
    }
}

fn chain(rng: &mut Mulberry32, color: &Paint, canvas: &mut Canvas) {
    let count = rng.int(2, 3);
    let r = rng.float(3.5, 5.0);
    let spacing = r * 1.4;
    let span = spacing * f64::from(count - 1);
    let tilt = rng.float(-2.0, 2.0);
    for i in 0..count {
        let t = f64::from(i) - f64::from(count - 1) / 2.0;
        let x = 12.0 - span / 2.0 + spacing * f64::from(i);
        canvas.circle(x, 12.0 + tilt * t, r, &line_style(color));
    }
}

fn branch(rng: &mut Mulberry32, color: &Paint, canvas: &mut Canvas) {
    let sway = rng.float(-3.0, 3.0);
    let trunk = PathData::new()
        .move_to(12.0, 21.0)
        .quad_to(12.0 + sway, 12.0, 12.0, 4.0);
    canvas.path(&trunk, &line_style(color));
    let count = rng.int(2, 4);
    let mut twigs = PathData::new();
    let mut buds = Vec::with_capacity(count as usize);
    for i in 0..count {
        let y = 17.0 - 10.0 * f64::from(i) / f64::from(count);
        let side = if i % 2 == 0 { 1.0 } else { -1.0 };
        let reach = rng.float(4.0, 7.0);
        let lift = rng.float(2.0, 4.0);
        let (tx, ty) = (12.0 + side * reach, y - lift);
        twigs = twigs
            .move_to(12.0, y)
            .quad_to(12.0 + side * reach * 0.5, y, tx, ty);
        buds.push((tx, ty));
    }
    canvas.path(&twigs, &line_style(color));
    for (x, y) in buds {
        canvas.circle(x, y, 1.3, &Style::fill(color));
    }
}

fn spiral(rng: &mut Mulberry32, color: &Paint, canvas: &mut Canvas) {
    let start = rng.float(8.0, 9.5);
    let decay = rng.float(0.82, 0.9);
    let steps = rng.int(8, 14);
    let offset = rng.float(0.0, TAU);
    let points: Vec<(f64, f64)> = (0..steps)
        .map(|i| {
            let radius = start * decay.powi(i);
            polar(12.0, 12.0, radius, offset + f64::from(i) * PI / 3.0)
        })
        .collect();
    let mut path = PathData::new().move_to(points[0].0, points[0].1);
    for pair in points.windows(2) {
        let (cx, cy) = pair[0];
        let (nx, ny) = pair[1];
        path = path.quad_to(cx, cy, (cx + nx) / 2.0, (cy + ny) / 2.0);
    }
    canvas.path(&path, &line_style(color));
}

fn hub(rng: &mut Mulberry32, color: &Paint, canvas: &mut Canvas) {
    let core = rng.float(2.5, 3.5);
    let spokes = rng.int(3, 4);
    let reach = rng.float(7.0, 9.0);
    let bend = rng.float(-0.5, 0.5);
    canvas.circle(12.0, 12.0, core, &Style::fill(color));
    let mut wheel = PathData::new();
    let mut ends = Vec::with_capacity(spokes as usize);
    for i in 0..spokes {
        let angle = TAU * f64::from(i) / f64::from(spokes);
        let (ex, ey) = polar(12.0, 12.0, reach, angle);
        let (cx, cy) = polar(12.0, 12.0, reach * 0.5, angle + bend);
        wheel = wheel.move_to(12.0, 12.0).quad_to(cx, cy, ex, ey);
        ends.push((ex, ey));
    }
    canvas.path(&wheel, &line_style(color).with_opacity(0.8));
    for (x, y) in ends {
        canvas.circle(x, y, 1.5, &Style::fill(color));
    }
}

fn leaf(rng: &mut Mulberry32, color: &Paint, canvas: &mut Canvas) {
    let tip = rng.float(3.0, 5.0);
    let stem = rng.float(16.0, 18.0);
    let width = rng.float(5.0, 8.0);
    let mid = (tip + stem) / 2.0;
    let blade = PathData::new()
        .move_to(12.0, tip)
        .quad_to(12.0 + width * 1.4, mid, 12.0, stem)
        .quad_to(12.0 - width * 1.4, mid, 12.0, tip)
        .close();
    canvas.path(&blade, &line_style(color));
    canvas.line(12.0, tip + 2.0, 12.0, 21.0, &line_style(color).with_opacity(0.8));
}

fn link(rng: &mut Mulberry32, color: &Paint, canvas: &mut Canvas) {
    let inset = rng.float(4.0, 6.0);
    let r = rng.float(2.0, 3.0);
    let pull = rng.float(4.0, 10.0);
    let (x1, y1) = (inset, 24.0 - inset);
    let (x2, y2) = (24.0 - inset, inset);
    let curve = PathData::new()
        .move_to(x1, y1)
        .cubic_to(x1 + pull, y1, x2 - pull, y2, x2, y2);
    canvas.path(&curve, &line_style(color));
    canvas.circle(x1, y1, r, &Style::fill(color));
    canvas.circle(x2, y2, r, &line_style(color).with_fill(color).with_fill_opacity(0.3));
}
