//! Catalog coverage tests.
//!
//! Sampling seeds `0..N` must reach every category through `Mixed`, every
//! template within each category, and every crystal family.

use std::collections::{HashMap, HashSet};

use glyphseed_core::crystal;
use glyphseed_core::icon::{self, IconCategory};
use glyphseed_core::{CrystalKind, Paint};
use glyphseed_tests::geometry::mark_count;

const SAMPLE: i64 = 4_000;

#[test]
fn test_mixed_visits_every_category() {
    let mut counts: HashMap<IconCategory, usize> = HashMap::new();
    for seed in 0..SAMPLE {
        let composition = icon::compose(seed, IconCategory::Mixed, &Paint::CurrentColor);
        assert_ne!(composition.category, IconCategory::Mixed);
        *counts.entry(composition.category).or_default() += 1;
    }
    for category in IconCategory::CONCRETE {
        let count = counts.get(&category).copied().unwrap_or(0);
        // Roughly uniform: each of five categories near SAMPLE / 5.
        assert!(count > SAMPLE as usize / 10, "{} drawn {} times", category, count);
    }
}

#[test]
fn test_every_template_is_reachable() {
    for category in IconCategory::CONCRETE {
        let expected: HashSet<&str> = category.templates().iter().map(|t| t.name).collect();
        assert_eq!(expected.len(), 8, "{}", category);

        let seen: HashSet<&str> = (0..SAMPLE)
            .map(|seed| icon::compose(seed, category, &Paint::CurrentColor).template)
            .collect();
        assert_eq!(seen, expected, "{}", category);
    }
}

#[test]
fn test_every_template_draws_one_to_six_marks() {
    for category in IconCategory::CONCRETE {
        for seed in 0..SAMPLE {
            let composition = icon::compose(seed, category, &Paint::CurrentColor);
            let marks = mark_count(&composition.fragment);
            assert!(
                (1..=6).contains(&marks),
                "{}/{} drew {} marks for seed {}",
                category,
                composition.template,
                marks,
                seed
            );
        }
    }
}

#[test]
fn test_every_crystal_family_is_reachable() {
    let seen: HashSet<CrystalKind> = (0..SAMPLE)
        .map(|seed| crystal::compose(seed, &Paint::CurrentColor).family)
        .collect();
    assert_eq!(seen.len(), crystal::families().len());
}

#[test]
fn test_rotation_is_occasional() {
    let rotated = (0..SAMPLE)
        .filter(|&seed| {
            icon::compose(seed, IconCategory::Mixed, &Paint::CurrentColor)
                .rotation
                .is_some()
        })
        .count();
    let share = rotated as f64 / SAMPLE as f64;
    assert!(share > 0.08 && share < 0.22, "rotation share {}", share);
}

#[test]
fn test_search_icons_never_use_rectangles() {
    for seed in ["vault_search", "grep", "find_symbol", "lookup"] {
        let svg = icon::generate(seed, IconCategory::Search, &Default::default());
        assert!(!svg.contains("<rect"), "{}: {}", seed, svg);
    }
    for seed in 0..SAMPLE {
        let fragment = icon::generate_inner(seed, IconCategory::Search, &Paint::CurrentColor);
        assert!(!fragment.contains("<rect"), "seed {}", seed);
    }
}

#[test]
fn test_category_styles_are_distinct() {
    let styles: HashSet<&str> = IconCategory::CONCRETE.iter().map(|c| c.style()).collect();
    assert_eq!(styles.len(), 5);
}
