//! Angular templates: triangles, arrows, prisms, chevrons.
//!
//! Only polygons, lines, and straight paths. No rects and no circles.

use std::f64::consts::{FRAC_PI_4, PI, TAU};

use super::{line_style, polar, regular_polygon, IconTemplate};
use crate::markup::{Canvas, PathData, Style};
use crate::paint::Paint;
use crate::rng::Mulberry32;

pub(super) const TEMPLATES: [IconTemplate; 8] = [
    IconTemplate { name: "delta", draw: delta },
    IconTemplate { name: "arrow", draw: arrow },
    IconTemplate { name: "prism", draw: prism },
    IconTemplate { name: "chevrons", draw: chevrons },
    IconTemplate { name: "rhombus", draw: rhombus },
    IconTemplate { name: "compass", draw: compass },
    IconTemplate { name: "lens", draw: lens },
    IconTemplate { name: "arrowheads", draw: arrowheads },
];

fn delta(rng: &mut Mulberry32, color: &Paint, canvas: &mut Canvas) {
    let apex = rng.float(3.0, 6.0);
    let base = rng.float(17.0, 21.0);
    let half = rng.float(6.0, 9.0);
    canvas.polygon(
        &[(12.0, apex), (12.0 + half, base), (12.0 - half, base)],
        &line_style(color),
    );
    if rng.chance(0.5) {
        let inset = (base - apex) * 0.45;
        canvas.polygon(
            &[
                (12.0, apex + inset),
                (12.0 + half * 0.45, base - 1.5),
                (12.0 - half * 0.45, base - 1.5),
            ],
            &Style::fill(color).with_opacity(0.35),
        );
    }
}

fn arrow(rng: &mut Mulberry32, color: &Paint, canvas: &mut Canvas) {
    let top = rng.float(3.0, 6.0);
    let bottom = rng.float(18.0, 21.0);
    let head_w = rng.float(4.0, 6.0);
    let head_h = rng.float(4.0, 6.0);
    canvas.line(12.0, bottom, 12.0, top + head_h, &line_style(color));
    canvas.polygon(
        &[
            (12.0, top),
            (12.0 + head_w, top + head_h),
            (12.0 - head_w, top + head_h),
        ],
        &Style::fill(color),
    );
    if rng.chance(0.5) {
        let fletch = rng.float(2.0, 3.5);
        canvas.line(12.0, bottom, 12.0 - fletch, bottom + 1.5, &line_style(color));
        canvas.line(12.0, bottom, 12.0 + fletch, bottom + 1.5, &line_style(color));
    }
}

fn prism(rng: &mut Mulberry32, color: &Paint, canvas: &mut Canvas) {
    let apex = rng.float(3.0, 5.5);
    let base = rng.float(17.5, 20.5);
    let half = rng.float(7.0, 9.0);
    canvas.polygon(
        &[(12.0, apex), (12.0 + half, base), (12.0 - half, base)],
        &line_style(color),
    );
    let facets = rng.int(1, 2);
    for _ in 0..facets {
        let foot = rng.float(-half * 0.6, half * 0.6);
        canvas.line(12.0, apex, 12.0 + foot, base, &line_style(color).with_opacity(0.6));
    }
    let ray_y = rng.float(9.0, 13.0);
    canvas.line(
        12.0 + half * 0.5,
        ray_y,
        22.0,
        ray_y + rng.float(-3.0, 3.0),
        &line_style(color),
    );
}

fn chevrons(rng: &mut Mulberry32, color: &Paint, canvas: &mut Canvas) {
    let count = rng.int(1, 3);
    let half = rng.float(5.0, 8.0);
    let rise = rng.float(3.0, 5.0);
    let gap = rng.float(3.5, 5.0);
    let span = rise + gap * f64::from(count - 1);
    let mut y = 12.0 + span / 2.0;
    for i in 0..count {
        let chevron = PathData::new()
            .move_to(12.0 - half, y)
            .line_to(12.0, y - rise)
            .line_to(12.0 + half, y);
        let opacity = 1.0 - 0.25 * f64::from(i);
        canvas.path(&chevron, &line_style(color).with_opacity(opacity));
        y -= gap;
    }
}

fn rhombus(rng: &mut Mulberry32, color: &Paint, canvas: &mut Canvas) {
    let half_w = rng.float(5.0, 9.0);
    let half_h = rng.float(7.0, 10.0);
    canvas.polygon(
        &[
            (12.0, 12.0 - half_h),
            (12.0 + half_w, 12.0),
            (12.0, 12.0 + half_h),
            (12.0 - half_w, 12.0),
        ],
        &line_style(color),
    );
    let tick = rng.float(1.5, 3.0);
    canvas.line(12.0 - tick, 12.0, 12.0 + tick, 12.0, &line_style(color));
    canvas.line(12.0, 12.0 - tick, 12.0, 12.0 + tick, &line_style(color));
}

fn compass(rng: &mut Mulberry32, color: &Paint, canvas: &mut Canvas) {
    let outer = rng.float(8.0, 10.0);
    let inner = rng.float(2.0, 3.5);
    let turn = *rng.pick(&[0.0, FRAC_PI_4]);
    let points: Vec<(f64, f64)> = (0..8_u32)
        .map(|i| {
            let radius = if i % 2 == 0 { outer } else { inner };
            polar(12.0, 12.0, radius, turn - PI / 2.0 + TAU * f64::from(i) / 8.0)
        })
        .collect();
    let style = if rng.chance(0.5) {
        Style::fill(color).with_opacity(0.85)
    } else {
        line_style(color)
    };
    canvas.polygon(&points, &style);
}

fn lens(rng: &mut Mulberry32, color: &Paint, canvas: &mut Canvas) {
    let radius = rng.float(5.0, 7.0);
    let reach = rng.float(5.0, 8.0);
    let hexagon: Vec<(f64, f64)> = regular_polygon(6, radius, 0.0)
        .into_iter()
        .map(|(x, y)| (x - 2.0, y - 2.0))
        .collect();
    canvas.polygon(&hexagon, &line_style(color));
    let (sx, sy) = polar(10.0, 10.0, radius, FRAC_PI_4);
    let (ex, ey) = polar(sx, sy, reach, FRAC_PI_4);
    canvas.line(sx, sy, ex, ey, &Style::stroke(color, 2.5));
}

fn arrowheads(rng: &mut Mulberry32, color: &Paint, canvas: &mut Canvas) {
    let reach = rng.float(8.0, 10.0);
    let depth = rng.float(3.5, 5.5);
    let half = rng.float(3.5, 6.0);
    for side in [-1.0, 1.0] {
        let tip = 12.0 + side * reach;
        let back = tip - side * depth;
        canvas.polygon(
            &[(tip, 12.0), (back, 12.0 - half), (back, 12.0 + half)],
            &line_style(color),
        );
    }
    if rng.chance(0.5) {
        canvas.line(12.0, 12.0 - half, 12.0, 12.0 + half, &line_style(color));
    }
}
