//! Sigil templates: stars, seals, runes.

use std::f64::consts::{FRAC_PI_2, PI, TAU};

use super::{line_style, polar, regular_polygon, IconTemplate};
use crate::markup::{Canvas, PathData, Style};
use crate::paint::Paint;
use crate::rng::Mulberry32;

pub(super) const TEMPLATES: [IconTemplate; 8] = [
    IconTemplate { name: "star", draw: star },
    IconTemplate { name: "seal", draw: seal },
    IconTemplate { name: "rune", draw: rune },
    IconTemplate { name: "eye", draw: eye },
    IconTemplate { name: "crescent", draw: crescent },
    IconTemplate { name: "triad", draw: triad },
    IconTemplate { name: "constellation", draw: constellation },
    IconTemplate { name: "sun", draw: sun },
];

fn star(rng: &mut Mulberry32, color: &Paint, canvas: &mut Canvas) {
    let points = *rng.pick(&[5_usize, 7, 8]);
    let step = if points == 8 { 3 } else { 2 };
    let radius = rng.float(8.0, 10.0);
    let vertices = regular_polygon(points, radius, -FRAC_PI_2);
    let ordered: Vec<(f64, f64)> = (0..points).map(|i| vertices[(i * step) % points]).collect();
    canvas.polygon(&ordered, &line_style(color));
}

fn seal(rng: &mut Mulberry32, color: &Paint, canvas: &mut Canvas) {
    let radius = rng.float(8.5, 10.0);
    let sides = rng.int(3, 6) as usize;
    canvas.circle(12.0, 12.0, radius, &line_style(color));
    canvas.polygon(
        &regular_polygon(sides, radius * 0.85, -FRAC_PI_2),
        &line_style(color).with_opacity(0.8),
    );
    if rng.chance(0.5) {
        canvas.circle(12.0, 12.0, 1.5, &Style::fill(color));
    }
}

fn rune(rng: &mut Mulberry32, color: &Paint, canvas: &mut Canvas) {
    let top = rng.float(3.0, 5.0);
    let bottom = rng.float(19.0, 21.0);
    canvas.line(12.0, top, 12.0, bottom, &line_style(color));
    let strokes = rng.int(1, 3);
    let mirrored = rng.chance(0.5);
    let mut branches = PathData::new();
    for _ in 0..strokes {
        let y = rng.float(top + 1.0, bottom - 4.0);
        let reach = rng.float(4.0, 7.0);
        let drop = rng.float(-4.0, 4.0);
        branches = branches.move_to(12.0, y).line_to(12.0 + reach, y + drop);
        if mirrored {
            branches = branches.move_to(12.0, y).line_to(12.0 - reach, y + drop);
        }
    }
    canvas.path(&branches, &line_style(color));
}

fn eye(rng: &mut Mulberry32, color: &Paint, canvas: &mut Canvas) {
    let half = rng.float(8.0, 10.0);
    let lid = rng.float(3.0, 5.0);
    let pupil = rng.float(2.0, 3.5);
    let almond = PathData::new()
        .move_to(12.0 - half, 12.0)
        .quad_to(12.0, 12.0 - 2.0 * lid, 12.0 + half, 12.0)
        .quad_to(12.0, 12.0 + 2.0 * lid, 12.0 - half, 12.0)
        .close();
    canvas.path(&almond, &line_style(color));
    canvas.circle(12.0, 12.0, pupil, &Style::fill(color));
    if rng.chance(0.4) {
        for dx in [-4.0, 0.0, 4.0] {
            canvas.line(
                12.0 + dx,
                12.0 - lid - 1.0,
                12.0 + dx * 1.3,
                12.0 - lid - 3.5,
                &line_style(color),
            );
        }
    }
}

fn crescent(rng: &mut Mulberry32, color: &Paint, canvas: &mut Canvas) {
    let bulge = rng.float(2.0, 4.0);
    let inner = rng.float(7.0, 10.0);
    let moon = PathData::new()
        .move_to(14.0, 3.0)
        .cubic_to(bulge, 3.0, bulge, 21.0, 14.0, 21.0)
        .cubic_to(inner, 17.0, inner, 7.0, 14.0, 3.0)
        .close();
    canvas.path(&moon, &Style::fill(color).with_opacity(0.9));
    if rng.chance(0.6) {
        let (x, y) = (rng.float(16.0, 20.0), rng.float(5.0, 10.0));
        canvas.circle(x, y, 1.2, &Style::fill(color));
    }
}

fn triad(rng: &mut Mulberry32, color: &Paint, canvas: &mut Canvas) {
    let distance = rng.float(3.0, 4.5);
    let r = rng.float(4.0, 5.5);
    let turn = rng.float(0.0, TAU / 3.0);
    for i in 0..3_u32 {
        let (x, y) = polar(12.0, 12.0, distance, turn - FRAC_PI_2 + TAU * f64::from(i) / 3.0);
        canvas.circle(x, y, r, &line_style(color));
    }
}

fn constellation(rng: &mut Mulberry32, color: &Paint, canvas: &mut Canvas) {
    let count = rng.int(4, 5);
    let stars: Vec<(f64, f64)> = (0..count)
        .map(|_| (rng.float(3.0, 21.0), rng.float(3.0, 21.0)))
        .collect();
    let figure = stars[1..]
        .iter()
        .fold(PathData::new().move_to(stars[0].0, stars[0].1), |path, &(x, y)| {
            path.line_to(x, y)
        });
    canvas.path(&figure, &line_style(color).with_opacity(0.6));
    for &(x, y) in &stars {
        canvas.circle(x, y, 1.4, &Style::fill(color));
    }
}

fn sun(rng: &mut Mulberry32, color: &Paint, canvas: &mut Canvas) {
    let core = rng.float(3.5, 5.0);
    let rays = *rng.pick(&[6_u32, 8, 12]);
    let length = rng.float(2.5, 4.5);
    let alternate = rng.chance(0.5);
    canvas.circle(12.0, 12.0, core, &line_style(color));
    let mut beams = PathData::new();
    for i in 0..rays {
        let angle = TAU * f64::from(i) / f64::from(rays) - PI / 2.0;
        let inner = core + 1.5;
        let outer = if alternate && i % 2 == 1 {
            inner + length * 0.5
        } else {
            inner + length
        };
        let (x1, y1) = polar(12.0, 12.0, inner, angle);
        let (x2, y2) = polar(12.0, 12.0, outer, angle);
        beams = beams.move_to(x1, y1).line_to(x2, y2);
    }
    canvas.path(&beams, &line_style(color));
}
