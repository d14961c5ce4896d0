//! Rounded templates: orbs, rings, capsules.

use std::f64::consts::TAU;

use super::{line_style, polar, IconTemplate};
use crate::markup::{Canvas, PathData, Style};
use crate::paint::Paint;
use crate::rng::Mulberry32;

pub(super) const TEMPLATES: [IconTemplate; 8] = [
    IconTemplate { name: "orb", draw: orb },
    IconTemplate { name: "rings", draw: rings },
    IconTemplate { name: "bubbles", draw: bubbles },
    IconTemplate { name: "capsule", draw: capsule },
    IconTemplate { name: "lobes", draw: lobes },
    IconTemplate { name: "orbit", draw: orbit },
    IconTemplate { name: "droplet", draw: droplet },
    IconTemplate { name: "discs", draw: discs },
];

fn orb(rng: &mut Mulberry32, color: &Paint, canvas: &mut Canvas) {
    let r = rng.float(6.0, 9.0);
    let core = r * rng.float(0.35, 0.6);
    canvas.circle(12.0, 12.0, r, &line_style(color));
    canvas.circle(12.0, 12.0, core, &Style::fill(color).with_opacity(0.8));
}

fn rings(rng: &mut Mulberry32, color: &Paint, canvas: &mut Canvas) {
    let count = rng.int(2, 4);
    let outer = rng.float(8.0, 9.5);
    let step = (outer - 1.5) / f64::from(count);
    for i in 0..count {
        let r = outer - step * f64::from(i);
        let opacity = 1.0 - 0.2 * f64::from(i);
        canvas.circle(12.0, 12.0, r, &line_style(color).with_opacity(opacity));
    }
}

fn bubbles(rng: &mut Mulberry32, color: &Paint, canvas: &mut Canvas) {
    let count = rng.int(3, 5);
    let distance = rng.float(4.0, 6.0);
    let offset = rng.float(0.0, TAU);
    for i in 0..count {
        let angle = offset + TAU * f64::from(i) / f64::from(count);
        let (x, y) = polar(12.0, 12.0, distance, angle);
        let r = rng.float(1.5, 3.0);
        canvas.circle(x, y, r, &line_style(color));
    }
    let center = rng.float(1.5, 2.5);
    canvas.circle(12.0, 12.0, center, &Style::fill(color));
}

fn capsule(rng: &mut Mulberry32, color: &Paint, canvas: &mut Canvas) {
    let width = rng.float(14.0, 20.0);
    let height = rng.float(6.0, 10.0);
    let x = 12.0 - width / 2.0;
    let y = 12.0 - height / 2.0;
    canvas.rect(x, y, width, height, height / 2.0, &line_style(color));
    let dot_x = if rng.chance(0.5) {
        x + height / 2.0
    } else {
        x + width - height / 2.0
    };
    canvas.circle(dot_x, 12.0, height * 0.2, &Style::fill(color));
}

fn lobes(rng: &mut Mulberry32, color: &Paint, canvas: &mut Canvas) {
    let offset = rng.float(2.5, 4.0);
    let r = rng.float(4.5, 6.5);
    let bend = rng.float(-2.0, 2.0);
    canvas.circle(12.0 - offset, 12.0, r, &line_style(color));
    canvas.circle(12.0 + offset, 12.0, r, &line_style(color));
    let fold = PathData::new()
        .move_to(12.0, 12.0 - r * 0.6)
        .quad_to(12.0 + bend, 12.0, 12.0, 12.0 + r * 0.6);
    canvas.path(&fold, &line_style(color));
}

fn orbit(rng: &mut Mulberry32, color: &Paint, canvas: &mut Canvas) {
    let core = rng.float(2.5, 4.0);
    let rx = rng.float(7.0, 10.0);
    let ry = rng.float(2.5, 5.0);
    let angle = rng.float(0.0, TAU);
    canvas.circle(12.0, 12.0, core, &Style::fill(color));
    // Quad control points at twice the radius put the curve's peak at ry.
    let ellipse = PathData::new()
        .move_to(12.0 - rx, 12.0)
        .quad_to(12.0, 12.0 - 2.0 * ry, 12.0 + rx, 12.0)
        .quad_to(12.0, 12.0 + 2.0 * ry, 12.0 - rx, 12.0)
        .close();
    canvas.path(&ellipse, &line_style(color).with_opacity(0.7));
    let (x, y) = (12.0 + rx * angle.cos(), 12.0 + ry * angle.sin());
    canvas.circle(x, y, 1.2, &Style::fill(color));
}

fn droplet(rng: &mut Mulberry32, color: &Paint, canvas: &mut Canvas) {
    let top = rng.float(3.0, 6.0);
    let bottom = rng.float(18.0, 21.0);
    let width = rng.float(5.0, 8.0);
    let drop = PathData::new()
        .move_to(12.0, top)
        .quad_to(12.0 + width * 1.4, bottom, 12.0, bottom)
        .quad_to(12.0 - width * 1.4, bottom, 12.0, top)
        .close();
    canvas.path(&drop, &line_style(color));
    if rng.chance(0.6) {
        let glint = rng.float(0.8, 1.4);
        canvas.circle(12.0 - width * 0.3, bottom - 4.0, glint, &Style::fill(color));
    }
}

fn discs(rng: &mut Mulberry32, color: &Paint, canvas: &mut Canvas) {
    let count = rng.int(2, 4);
    let height = rng.float(3.0, 4.5);
    let width = rng.float(12.0, 18.0);
    let gap = rng.float(0.8, 1.6);
    let total = f64::from(count) * height + f64::from(count - 1) * gap;
    let x = 12.0 - width / 2.0;
    let mut y = 12.0 - total / 2.0;
    for _ in 0..count {
        canvas.rect(x, y, width, height, height / 2.0, &line_style(color));
        y += height + gap;
    }
}
