//! Connector shape independence tests.
//!
//! The connector shape is hash-driven: colour, active state, and any RNG
//! use elsewhere must never change which polygon a seed gets.

use glyphseed_core::connector::{self, ConnectorShape};
use glyphseed_core::{icon, IconCategory, Paint, Seed};
use glyphseed_tests::fixtures::random_seeds;
use pretty_assertions::assert_eq;
use regex::Regex;

fn node_points(markup: &str) -> String {
    let re = Regex::new(r#"<polygon[^>]*\spoints="([^"]*)""#).unwrap();
    re.captures(markup).unwrap()[1].to_string()
}

fn strip_styling(markup: &str) -> String {
    let re = Regex::new(r#"\s(fill|stroke|opacity|class)="[^"]*""#).unwrap();
    re.replace_all(markup, "").into_owned()
}

#[test]
fn test_color_and_state_keep_the_polygon() {
    let a = connector::create(&Paint::from("#ff0000"), true, "seed1");
    let b = connector::create(&Paint::from("#0000ff"), false, "seed1");
    assert_eq!(node_points(&a), node_points(&b));
    assert_eq!(strip_styling(&a), strip_styling(&b));
}

#[test]
fn test_shape_matches_hash_modulo_six() {
    for seed in random_seeds(2_000, 6) {
        let index = Seed::from(&seed).hash().unsigned_abs() as usize % 6;
        assert_eq!(connector::shape_for(&seed), ConnectorShape::ALL[index]);

        let markup = connector::create(&Paint::CurrentColor, false, &seed);
        assert!(markup.contains(&format!(
            "data-shape=\"{}\"",
            ConnectorShape::ALL[index].name()
        )));
        assert_eq!(
            node_points(&markup),
            ConnectorShape::ALL[index].points_attr(connector::SHAPE_EXTENT)
        );
    }
}

#[test]
fn test_shape_ignores_rng_consumers() {
    let before = connector::shape_for("agent-x");
    let _ = icon::generate_inner("agent-x", IconCategory::Arcane, &Paint::CurrentColor);
    assert_eq!(connector::shape_for("agent-x"), before);
    assert_eq!(connector::get_clip_path("agent-x"), before.clip_path());
}

#[test]
fn test_all_shapes_are_reachable() {
    let mut seen = [false; 6];
    for seed in 0..60 {
        seen[connector::shape_for(seed) as usize] = true;
    }
    assert!(seen.iter().all(|s| *s));
}

#[test]
fn test_clip_path_is_stable() {
    assert_eq!(connector::get_clip_path(""), connector::get_clip_path(""));
}
