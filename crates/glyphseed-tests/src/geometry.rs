//! Coordinate extraction from generated markup.
//!
//! Pulls every geometric number out of an inner fragment so tests can check
//! it against the viewBox. `transform` attributes are not geometry and are
//! skipped, as are presentation attributes like `stroke-width`.

use regex::Regex;
use std::sync::OnceLock;

/// Rounding slack for values written with one decimal place.
pub const TOLERANCE: f64 = 0.1;

fn scalar_attr() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"\s(cx|cy|r|x|y|x1|y1|x2|y2|width|height|rx)="([^"]*)""#)
            .expect("valid regex")
    })
}

fn list_attr() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#"\s(points|d)="([^"]*)""#).expect("valid regex"))
}

fn number() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"-?\d+(?:\.\d+)?").expect("valid regex"))
}

fn element() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"<(circle|rect)\s[^>]*>").expect("valid regex"))
}

fn primitive() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"<(circle|line|polygon|rect|path)[\s/>]").expect("valid regex")
    })
}

fn any_attr() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#"\s([a-z-]+)="([^"]*)""#).expect("valid regex"))
}

fn attr(tag: &str, name: &str) -> Option<f64> {
    any_attr()
        .captures_iter(tag)
        .find(|cap| &cap[1] == name)?
        .get(2)?
        .as_str()
        .parse()
        .ok()
}

/// Every number in a geometry attribute, tagged with its attribute name.
pub fn coordinates(fragment: &str) -> Vec<(String, f64)> {
    let mut out = Vec::new();
    for cap in scalar_attr().captures_iter(fragment) {
        if let Ok(value) = cap[2].parse() {
            out.push((cap[1].to_string(), value));
        }
    }
    for cap in list_attr().captures_iter(fragment) {
        for m in number().find_iter(&cap[2]) {
            if let Ok(value) = m.as_str().parse() {
                out.push((cap[1].to_string(), value));
            }
        }
    }
    out
}

/// Geometry values outside `[0, extent]`, beyond rounding slack.
pub fn out_of_range(fragment: &str, extent: f64) -> Vec<(String, f64)> {
    coordinates(fragment)
        .into_iter()
        .filter(|(_, v)| !v.is_finite() || *v < -TOLERANCE || *v > extent + TOLERANCE)
        .collect()
}

/// Circles and rects whose full extent leaves `[0, extent]`.
pub fn overflowing_shapes(fragment: &str, extent: f64) -> Vec<String> {
    let inside = |lo: f64, hi: f64| lo >= -TOLERANCE && hi <= extent + TOLERANCE;
    element()
        .find_iter(fragment)
        .filter(|m| {
            let tag = m.as_str();
            let fits = if tag.starts_with("<circle") {
                match (attr(tag, "cx"), attr(tag, "cy"), attr(tag, "r")) {
                    (Some(cx), Some(cy), Some(r)) => {
                        inside(cx - r, cx + r) && inside(cy - r, cy + r)
                    }
                    _ => false,
                }
            } else {
                match (
                    attr(tag, "x"),
                    attr(tag, "y"),
                    attr(tag, "width"),
                    attr(tag, "height"),
                ) {
                    (Some(x), Some(y), Some(w), Some(h)) => inside(x, x + w) && inside(y, y + h),
                    _ => false,
                }
            };
            !fits
        })
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Number of drawn primitives in a fragment. Groups are not counted.
pub fn mark_count(fragment: &str) -> usize {
    primitive().find_iter(fragment).count()
}

/// The `viewBox` of a standalone document.
pub fn view_box(markup: &str) -> Option<String> {
    let start = markup.find("viewBox=\"")? + "viewBox=\"".len();
    let end = markup[start..].find('"')?;
    Some(markup[start..start + end].to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skips_presentation_and_transform() {
        let fragment = "<g transform=\"rotate(90 12.0 12.0)\"><line x1=\"1.0\" y1=\"2.0\" \
                        x2=\"3.0\" y2=\"4.0\" stroke-width=\"1.5\"/></g>";
        let values: Vec<f64> = coordinates(fragment).into_iter().map(|(_, v)| v).collect();
        assert_eq!(values, vec![1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_parses_lists() {
        let fragment = "<polygon points=\"1.0,2.0 3.0,4.0\"/><path d=\"M1.0 2.0 Q3.0 4.0 5.0 6.0 Z\"/>";
        assert_eq!(coordinates(fragment).len(), 10);
    }

    #[test]
    fn test_flags_out_of_range() {
        let fragment = "<circle cx=\"30.0\" cy=\"2.0\" r=\"1.0\"/>";
        assert_eq!(out_of_range(fragment, 24.0).len(), 1);
        assert_eq!(overflowing_shapes(fragment, 24.0).len(), 1);
    }

    #[test]
    fn test_overflowing_circle() {
        let fragment = "<circle cx=\"2.0\" cy=\"12.0\" r=\"3.0\" fill=\"none\"/>";
        assert!(out_of_range(fragment, 24.0).is_empty());
        assert_eq!(overflowing_shapes(fragment, 24.0).len(), 1);
    }

    #[test]
    fn test_mark_count_skips_groups() {
        let fragment = "<g transform=\"rotate(90 12.0 12.0)\"><circle cx=\"1.0\" cy=\"1.0\" r=\"1.0\"/>\
                        <path d=\"M1.0 1.0 L2.0 2.0 M3.0 3.0 L4.0 4.0\"/><line x1=\"0.0\"/></g>";
        assert_eq!(mark_count(fragment), 3);
    }

    #[test]
    fn test_view_box() {
        assert_eq!(
            view_box("<svg viewBox=\"0 0 24 24\"></svg>").as_deref(),
            Some("0 0 24 24")
        );
    }
}
