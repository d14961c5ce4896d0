//! SVG markup builder.
//!
//! Templates draw onto a [`Canvas`] with a fixed square extent. The canvas
//! clamps every coordinate into `[0, extent]` and shrinks circles and rects
//! until they fit, so no seed can push geometry outside the viewport. All
//! numbers are written with exactly one decimal place.
//!
//! Every value the canvas has to change is counted in
//! [`Canvas::adjustments`]. Catalog templates keep that count at zero.

use std::cell::Cell;

use crate::paint::Paint;

/// SVG namespace for standalone documents.
pub const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Format a coordinate with one decimal place.
pub fn fmt_num(value: f64) -> String {
    if !value.is_finite() {
        return "0.0".to_string();
    }
    let text = format!("{:.1}", value);
    if text == "-0.0" {
        "0.0".to_string()
    } else {
        text
    }
}

/// Escape a string for use inside a double-quoted attribute.
pub fn escape_attr(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Presentation attributes for one primitive.
#[derive(Debug, Clone, Default)]
pub struct Style {
    fill: Option<String>,
    fill_opacity: Option<f64>,
    stroke: Option<String>,
    stroke_width: Option<f64>,
    stroke_opacity: Option<f64>,
    opacity: Option<f64>,
    round: bool,
}

impl Style {
    /// Solid fill, no stroke.
    pub fn fill(paint: &Paint) -> Self {
        Self {
            fill: Some(paint.as_attr()),
            ..Self::default()
        }
    }

    /// Stroke only, round caps and joins.
    pub fn stroke(paint: &Paint, width: f64) -> Self {
        Self {
            stroke: Some(paint.as_attr()),
            stroke_width: Some(width),
            round: true,
            ..Self::default()
        }
    }

    /// Add a fill to an existing style.
    pub fn with_fill(mut self, paint: &Paint) -> Self {
        self.fill = Some(paint.as_attr());
        self
    }

    /// Add a fill with an opacity.
    pub fn with_fill_opacity(mut self, opacity: f64) -> Self {
        self.fill_opacity = Some(opacity.clamp(0.0, 1.0));
        self
    }

    /// Set stroke opacity.
    pub fn with_stroke_opacity(mut self, opacity: f64) -> Self {
        self.stroke_opacity = Some(opacity.clamp(0.0, 1.0));
        self
    }

    /// Set the whole-element opacity.
    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = Some(opacity.clamp(0.0, 1.0));
        self
    }

    fn write_attrs(&self, out: &mut String) {
        match &self.fill {
            Some(fill) => out.push_str(&format!(" fill=\"{}\"", fill)),
            None => out.push_str(" fill=\"none\""),
        }
        if let Some(opacity) = self.fill_opacity {
            out.push_str(&format!(" fill-opacity=\"{:.2}\"", opacity));
        }
        if let Some(stroke) = &self.stroke {
            out.push_str(&format!(" stroke=\"{}\"", stroke));
        }
        if let Some(width) = self.stroke_width {
            out.push_str(&format!(" stroke-width=\"{}\"", fmt_num(width)));
        }
        if let Some(opacity) = self.stroke_opacity {
            out.push_str(&format!(" stroke-opacity=\"{:.2}\"", opacity));
        }
        if self.round {
            out.push_str(" stroke-linecap=\"round\" stroke-linejoin=\"round\"");
        }
        if let Some(opacity) = self.opacity {
            out.push_str(&format!(" opacity=\"{:.2}\"", opacity));
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum PathCmd {
    Move(f64, f64),
    Line(f64, f64),
    Quad(f64, f64, f64, f64),
    Cubic(f64, f64, f64, f64, f64, f64),
    Close,
}

/// Absolute path data built from move/line/quad/cubic/close commands.
#[derive(Debug, Clone, Default)]
pub struct PathData {
    cmds: Vec<PathCmd>,
}

impl PathData {
    /// Empty path.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a subpath.
    pub fn move_to(mut self, x: f64, y: f64) -> Self {
        self.cmds.push(PathCmd::Move(x, y));
        self
    }

    /// Straight segment.
    pub fn line_to(mut self, x: f64, y: f64) -> Self {
        self.cmds.push(PathCmd::Line(x, y));
        self
    }

    /// Quadratic Bezier through control `(cx, cy)`.
    pub fn quad_to(mut self, cx: f64, cy: f64, x: f64, y: f64) -> Self {
        self.cmds.push(PathCmd::Quad(cx, cy, x, y));
        self
    }

    /// Cubic Bezier.
    pub fn cubic_to(mut self, c1x: f64, c1y: f64, c2x: f64, c2y: f64, x: f64, y: f64) -> Self {
        self.cmds.push(PathCmd::Cubic(c1x, c1y, c2x, c2y, x, y));
        self
    }

    /// Close the current subpath.
    pub fn close(mut self) -> Self {
        self.cmds.push(PathCmd::Close);
        self
    }

    /// Number of commands.
    pub fn len(&self) -> usize {
        self.cmds.len()
    }

    /// True if no commands were added.
    pub fn is_empty(&self) -> bool {
        self.cmds.is_empty()
    }
}

/// A square drawing surface that accumulates an inner SVG fragment.
#[derive(Debug, Clone)]
pub struct Canvas {
    extent: f64,
    body: String,
    marks: usize,
    adjusted: Cell<usize>,
}

impl Canvas {
    /// New canvas spanning `[0, extent]` on both axes.
    pub fn new(extent: u32) -> Self {
        Self {
            extent: f64::from(extent),
            body: String::new(),
            marks: 0,
            adjusted: Cell::new(0),
        }
    }

    /// Edge length in user units.
    pub fn extent(&self) -> f64 {
        self.extent
    }

    /// Centre coordinate on either axis.
    pub fn center(&self) -> f64 {
        self.extent / 2.0
    }

    fn clamp(&self, value: f64) -> f64 {
        if value.is_nan() {
            self.adjust();
            0.0
        } else if value < 0.0 || value > self.extent {
            self.adjust();
            value.clamp(0.0, self.extent)
        } else {
            value
        }
    }

    // Shrink a length to `limit`, counting the change.
    fn fit(&self, length: f64, limit: f64) -> f64 {
        if length.is_nan() {
            self.adjust();
            0.0
        } else if length > limit {
            self.adjust();
            limit.max(0.0)
        } else {
            length.max(0.0)
        }
    }

    fn adjust(&self) {
        self.adjusted.set(self.adjusted.get() + 1);
    }

    fn point(&self, x: f64, y: f64) -> String {
        format!("{} {}", fmt_num(self.clamp(x)), fmt_num(self.clamp(y)))
    }

    /// Circle, shrunk so it stays inside the canvas.
    pub fn circle(&mut self, cx: f64, cy: f64, r: f64, style: &Style) {
        let cx = self.clamp(cx);
        let cy = self.clamp(cy);
        let limit = cx.min(cy).min(self.extent - cx).min(self.extent - cy);
        let r = self.fit(r, limit);
        self.marks += 1;
        self.body.push_str(&format!(
            "<circle cx=\"{}\" cy=\"{}\" r=\"{}\"",
            fmt_num(cx),
            fmt_num(cy),
            fmt_num(r)
        ));
        style.write_attrs(&mut self.body);
        self.body.push_str("/>");
    }

    /// Straight line.
    pub fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, style: &Style) {
        self.marks += 1;
        self.body.push_str(&format!(
            "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\"",
            fmt_num(self.clamp(x1)),
            fmt_num(self.clamp(y1)),
            fmt_num(self.clamp(x2)),
            fmt_num(self.clamp(y2))
        ));
        style.write_attrs(&mut self.body);
        self.body.push_str("/>");
    }

    /// Closed polygon.
    pub fn polygon(&mut self, points: &[(f64, f64)], style: &Style) {
        let points: Vec<String> = points
            .iter()
            .map(|&(x, y)| format!("{},{}", fmt_num(self.clamp(x)), fmt_num(self.clamp(y))))
            .collect();
        self.marks += 1;
        self.body
            .push_str(&format!("<polygon points=\"{}\"", points.join(" ")));
        style.write_attrs(&mut self.body);
        self.body.push_str("/>");
    }

    /// Rectangle with corner radius, shrunk so it stays inside the canvas.
    pub fn rect(&mut self, x: f64, y: f64, width: f64, height: f64, rx: f64, style: &Style) {
        let x = self.clamp(x);
        let y = self.clamp(y);
        let width = self.fit(width, self.extent - x);
        let height = self.fit(height, self.extent - y);
        let rx = if rx.is_nan() {
            0.0
        } else {
            rx.clamp(0.0, width.min(height) / 2.0)
        };
        self.marks += 1;
        self.body.push_str(&format!(
            "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\"",
            fmt_num(x),
            fmt_num(y),
            fmt_num(width),
            fmt_num(height)
        ));
        if rx > 0.0 {
            self.body.push_str(&format!(" rx=\"{}\"", fmt_num(rx)));
        }
        style.write_attrs(&mut self.body);
        self.body.push_str("/>");
    }

    /// Path.
    pub fn path(&mut self, data: &PathData, style: &Style) {
        let mut d = Vec::with_capacity(data.cmds.len());
        for cmd in &data.cmds {
            d.push(match *cmd {
                PathCmd::Move(x, y) => format!("M{}", self.point(x, y)),
                PathCmd::Line(x, y) => format!("L{}", self.point(x, y)),
                PathCmd::Quad(cx, cy, x, y) => {
                    format!("Q{} {}", self.point(cx, cy), self.point(x, y))
                }
                PathCmd::Cubic(c1x, c1y, c2x, c2y, x, y) => format!(
                    "C{} {} {}",
                    self.point(c1x, c1y),
                    self.point(c2x, c2y),
                    self.point(x, y)
                ),
                PathCmd::Close => "Z".to_string(),
            });
        }
        self.marks += 1;
        self.body.push_str(&format!("<path d=\"{}\"", d.join(" ")));
        style.write_attrs(&mut self.body);
        self.body.push_str("/>");
    }

    /// Number of primitives drawn so far.
    pub fn marks(&self) -> usize {
        self.marks
    }

    /// Number of coordinates and lengths that had to be clamped or shrunk
    /// to keep the geometry inside the canvas.
    pub fn adjustments(&self) -> usize {
        self.adjusted.get()
    }

    /// True if nothing has been drawn.
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// The accumulated fragment.
    pub fn finish(self) -> String {
        self.body
    }
}

/// Wrap a fragment in a `<g>` rotated about the centre of a square extent.
pub fn rotate_group(fragment: &str, degrees: u16, extent: u32) -> String {
    let c = f64::from(extent) / 2.0;
    format!(
        "<g transform=\"rotate({} {} {})\">{}</g>",
        degrees,
        fmt_num(c),
        fmt_num(c),
        fragment
    )
}

/// A standalone SVG document with a square viewport.
pub fn document(size: u32, extent: u32, defs: Option<&str>, body: &str) -> String {
    let mut out = format!(
        "<svg xmlns=\"{}\" width=\"{}\" height=\"{}\" viewBox=\"0 0 {} {}\" fill=\"none\">",
        SVG_NS, size, size, extent, extent
    );
    if let Some(defs) = defs {
        out.push_str("<defs>");
        out.push_str(defs);
        out.push_str("</defs>");
    }
    out.push_str(body);
    out.push_str("</svg>");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fmt_num() {
        assert_eq!(fmt_num(1.0), "1.0");
        assert_eq!(fmt_num(12.345), "12.3");
        assert_eq!(fmt_num(-0.01), "0.0");
        assert_eq!(fmt_num(f64::NAN), "0.0");
        assert_eq!(fmt_num(f64::INFINITY), "0.0");
    }

    #[test]
    fn test_circle_is_shrunk_to_fit() {
        let mut canvas = Canvas::new(24);
        canvas.circle(2.0, 12.0, 10.0, &Style::fill(&Paint::CurrentColor));
        assert_eq!(
            canvas.finish(),
            "<circle cx=\"2.0\" cy=\"12.0\" r=\"2.0\" fill=\"currentColor\"/>"
        );
    }

    #[test]
    fn test_coordinates_are_clamped() {
        let mut canvas = Canvas::new(24);
        canvas.line(-5.0, 30.0, 12.0, f64::NAN, &Style::stroke(&Paint::CurrentColor, 1.5));
        let out = canvas.finish();
        assert!(out.starts_with("<line x1=\"0.0\" y1=\"24.0\" x2=\"12.0\" y2=\"0.0\""));
        assert!(out.contains("fill=\"none\""));
        assert!(out.contains("stroke-linecap=\"round\""));
    }

    #[test]
    fn test_rect_is_shrunk_to_fit() {
        let mut canvas = Canvas::new(24);
        canvas.rect(20.0, 20.0, 10.0, 2.0, 5.0, &Style::fill(&Paint::CurrentColor));
        assert_eq!(
            canvas.finish(),
            "<rect x=\"20.0\" y=\"20.0\" width=\"4.0\" height=\"2.0\" rx=\"1.0\" fill=\"currentColor\"/>"
        );
    }

    #[test]
    fn test_adjustments_count_every_clamped_value() {
        let mut canvas = Canvas::new(24);
        let style = Style::fill(&Paint::CurrentColor);
        canvas.line(0.0, 24.0, 12.0, 12.0, &style);
        canvas.rect(2.0, 2.0, 20.0, 20.0, 1.0, &style);
        assert_eq!(canvas.adjustments(), 0);

        canvas.line(-5.0, 30.0, 12.0, f64::NAN, &style);
        assert_eq!(canvas.adjustments(), 3);
        canvas.circle(2.0, 12.0, 10.0, &style);
        assert_eq!(canvas.adjustments(), 4);
        canvas.rect(20.0, 20.0, 10.0, 2.0, 0.0, &style);
        assert_eq!(canvas.adjustments(), 5);
        let path = PathData::new().move_to(12.0, 2.0).quad_to(24.8, 12.0, 12.0, 22.0);
        canvas.path(&path, &style);
        assert_eq!(canvas.adjustments(), 6);
        assert_eq!(canvas.marks(), 6);
    }

    #[test]
    fn test_path_serialisation() {
        let mut canvas = Canvas::new(24);
        let path = PathData::new()
            .move_to(1.0, 2.0)
            .quad_to(3.0, 4.0, 5.0, 6.0)
            .close();
        canvas.path(&path, &Style::fill(&Paint::CurrentColor));
        assert_eq!(
            canvas.finish(),
            "<path d=\"M1.0 2.0 Q3.0 4.0 5.0 6.0 Z\" fill=\"currentColor\"/>"
        );
    }

    #[test]
    fn test_document_wrapper() {
        let doc = document(48, 100, Some("<x/>"), "<y/>");
        assert_eq!(
            doc,
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"48\" height=\"48\" \
             viewBox=\"0 0 100 100\" fill=\"none\"><defs><x/></defs><y/></svg>"
        );
    }

    #[test]
    fn test_rotate_group() {
        assert_eq!(
            rotate_group("<z/>", 90, 24),
            "<g transform=\"rotate(90 12.0 12.0)\"><z/></g>"
        );
    }
}
