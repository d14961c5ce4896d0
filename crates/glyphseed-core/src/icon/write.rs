//! Rectangular templates: pages, grids, bars.

use super::{line_style, IconTemplate};
use crate::markup::{Canvas, PathData, Style};
use crate::paint::Paint;
use crate::rng::Mulberry32;

pub(super) const TEMPLATES: [IconTemplate; 8] = [
    IconTemplate { name: "page", draw: page },
    IconTemplate { name: "pencil", draw: pencil },
    IconTemplate { name: "grid", draw: grid },
    IconTemplate { name: "sheets", draw: sheets },
    IconTemplate { name: "card", draw: card },
    IconTemplate { name: "bars", draw: bars },
    IconTemplate { name: "frame", draw: frame },
    IconTemplate { name: "text_block", draw: text_block },
];

fn page(rng: &mut Mulberry32, color: &Paint, canvas: &mut Canvas) {
    let width = rng.float(12.0, 16.0);
    let height = rng.float(16.0, 19.0);
    let x = 12.0 - width / 2.0;
    let y = 12.0 - height / 2.0;
    canvas.rect(x, y, width, height, 1.5, &line_style(color));
    let lines = rng.int(2, 4);
    let spacing = (height - 6.0) / f64::from(lines);
    for i in 0..lines {
        let ly = y + 4.0 + spacing * f64::from(i);
        let length = rng.float(width * 0.4, width - 5.0);
        canvas.line(x + 2.5, ly, x + 2.5 + length, ly, &line_style(color));
    }
}

fn pencil(rng: &mut Mulberry32, color: &Paint, canvas: &mut Canvas) {
    let start = rng.float(4.5, 6.5);
    let half = rng.float(1.8, 2.6);
    let base = (start, 24.0 - start);
    let tip = (24.0 - start, start);
    let end = (
        base.0 + (tip.0 - base.0) * 0.75,
        base.1 + (tip.1 - base.1) * 0.75,
    );
    // Perpendicular to the 45 degree axis.
    let n = half / std::f64::consts::SQRT_2;
    canvas.polygon(
        &[
            (base.0 + n, base.1 + n),
            (end.0 + n, end.1 + n),
            (end.0 - n, end.1 - n),
            (base.0 - n, base.1 - n),
        ],
        &line_style(color),
    );
    canvas.polygon(
        &[(end.0 + n, end.1 + n), tip, (end.0 - n, end.1 - n)],
        &Style::fill(color),
    );
    if rng.chance(0.5) {
        let length = rng.float(4.0, 8.0);
        canvas.line(3.0, 21.0, 3.0 + length, 21.0, &line_style(color));
    }
}

fn grid(rng: &mut Mulberry32, color: &Paint, canvas: &mut Canvas) {
    let cells = rng.int(2, 3);
    let gap = rng.float(1.5, 2.5);
    let span = 16.0;
    let cell = (span - gap * f64::from(cells - 1)) / f64::from(cells);
    let origin = 12.0 - span / 2.0;
    let mut outlined = PathData::new();
    let mut filled = PathData::new();
    for row in 0..cells {
        for col in 0..cells {
            let x = origin + f64::from(col) * (cell + gap);
            let y = origin + f64::from(row) * (cell + gap);
            let target = if rng.chance(0.3) {
                &mut filled
            } else {
                &mut outlined
            };
            *target = std::mem::take(target)
                .move_to(x, y)
                .line_to(x + cell, y)
                .line_to(x + cell, y + cell)
                .line_to(x, y + cell)
                .close();
        }
    }
    if !outlined.is_empty() {
        canvas.path(&outlined, &line_style(color));
    }
    if !filled.is_empty() {
        canvas.path(&filled, &Style::fill(color).with_opacity(0.6));
    }
}

fn sheets(rng: &mut Mulberry32, color: &Paint, canvas: &mut Canvas) {
    let count = rng.int(2, 3);
    let offset = rng.float(1.5, 2.5);
    let width = rng.float(11.0, 14.0);
    let height = rng.float(13.0, 15.0);
    let shift = offset * f64::from(count - 1);
    let x0 = 12.0 - (width + shift) / 2.0;
    let y0 = 12.0 - (height + shift) / 2.0;
    for i in (0..count).rev() {
        let step = offset * f64::from(i);
        let opacity = 1.0 - 0.3 * f64::from(i);
        canvas.rect(
            x0 + shift - step,
            y0 + step,
            width,
            height,
            1.0,
            &line_style(color).with_opacity(opacity),
        );
    }
}

fn card(rng: &mut Mulberry32, color: &Paint, canvas: &mut Canvas) {
    let width = rng.float(16.0, 19.0);
    let height = rng.float(12.0, 16.0);
    let x = 12.0 - width / 2.0;
    let y = 12.0 - height / 2.0;
    let header = rng.float(3.0, 5.0);
    canvas.rect(x, y, width, height, 1.5, &line_style(color));
    canvas.rect(x, y, width, header, 1.5, &Style::fill(color).with_opacity(0.7));
    let lines = rng.int(1, 2);
    for i in 0..lines {
        let ly = y + header + 3.0 + 3.0 * f64::from(i);
        canvas.line(x + 2.5, ly, x + width * 0.7, ly, &line_style(color));
    }
}

fn bars(rng: &mut Mulberry32, color: &Paint, canvas: &mut Canvas) {
    let count = rng.int(3, 5);
    let baseline = 20.0;
    let span = 16.0;
    let gap = 1.5;
    let width = (span - gap * f64::from(count - 1)) / f64::from(count);
    for i in 0..count {
        let height = rng.float(4.0, 16.0);
        let x = 4.0 + f64::from(i) * (width + gap);
        canvas.rect(x, baseline - height, width, height, 0.5, &Style::fill(color));
    }
    canvas.line(3.0, baseline + 1.0, 21.0, baseline + 1.0, &line_style(color));
}

fn frame(rng: &mut Mulberry32, color: &Paint, canvas: &mut Canvas) {
    let outer = rng.float(2.5, 4.0);
    let inner = outer + rng.float(2.5, 4.0);
    canvas.rect(outer, outer, 24.0 - 2.0 * outer, 24.0 - 2.0 * outer, 1.5, &line_style(color));
    canvas.rect(
        inner,
        inner,
        24.0 - 2.0 * inner,
        24.0 - 2.0 * inner,
        0.5,
        &line_style(color).with_opacity(0.7),
    );
    if rng.chance(0.4) {
        canvas.line(inner, 24.0 - inner, 24.0 - inner, inner, &line_style(color));
    }
}

fn text_block(rng: &mut Mulberry32, color: &Paint, canvas: &mut Canvas) {
    let lines = rng.int(3, 5);
    let spacing = 14.0 / f64::from(lines);
    let mut end = 4.0;
    let mut last_y = 5.0;
    for i in 0..lines {
        let y = 5.0 + spacing * f64::from(i);
        let length = rng.float(6.0, 16.0);
        canvas.line(4.0, y, 4.0 + length, y, &line_style(color));
        end = 4.0 + length;
        last_y = y;
    }
    canvas.rect(end + 1.5, last_y - 2.0, 1.5, 4.0, 0.0, &Style::fill(color));
}
