//! Golden value tests for the identity contract.
//!
//! These values pin the hash, the RNG stream, and every hash-driven
//! assignment. If one of these fails, previously generated visuals would
//! change for existing seeds.
//!
//! ```bash
//! cargo test -p glyphseed-tests --test golden_values
//! ```

use glyphseed_core::crystal::glow_filter_id;
use glyphseed_core::{
    connector, markup_digest, palette, string_hash, CrystalOptions, FilterIdScope, Mulberry32,
    Seed, PALETTE,
};
use glyphseed_tests::fixtures::{
    EMPTY_DIGEST, GOLDEN_HASHES, GOLDEN_SEEDS, GOLDEN_STREAMS,
};
use pretty_assertions::assert_eq;

#[test]
fn test_string_hashes() {
    for &(text, expected) in GOLDEN_HASHES {
        assert_eq!(string_hash(text), expected, "hash({:?})", text);
    }
}

#[test]
fn test_rng_streams() {
    for &(state, expected) in GOLDEN_STREAMS {
        let mut rng = Mulberry32::new(state);
        let actual = [rng.next_raw(), rng.next_raw(), rng.next_raw()];
        assert_eq!(actual, expected, "stream for state {}", state);
    }
}

#[test]
fn test_seed_rng_uses_absolute_hash() {
    let mut from_seed = Seed::from("jaskier").rng();
    let mut direct = Mulberry32::new(1_822_333_273);
    for _ in 0..8 {
        assert_eq!(from_seed.next_raw(), direct.next_raw());
    }
}

#[test]
fn test_zero_hash_seeds_start_at_state_one() {
    for seed in ["", "\u{0}"] {
        assert_eq!(Seed::from(seed).hash(), 0);
        let mut rng = Seed::from(seed).rng();
        assert_eq!(rng.next_raw(), 2_693_262_067, "seed {:?}", seed);
    }
}

#[test]
fn test_golden_seed_assignments() {
    for golden in GOLDEN_SEEDS {
        assert_eq!(string_hash(golden.seed), golden.hash, "{}", golden.seed);
        let color = palette::pick_color(golden.seed);
        assert_eq!(color, PALETTE[golden.palette_index], "{}", golden.seed);
        assert_eq!(color.name, golden.color_name, "{}", golden.seed);
        assert_eq!(connector::shape_for(golden.seed), golden.shape, "{}", golden.seed);
    }
}

#[test]
fn test_jaskier_is_jade() {
    let color = palette::pick_color("jaskier");
    assert_eq!(color.hex, "#00a86b");
    assert_eq!(palette::get_color_by_hex("#00A86B"), Some(color));
}

#[test]
fn test_integer_seeds_use_value_as_hash() {
    assert_eq!(Seed::from(42).hash(), 42);
    assert_eq!(Seed::from(-7).hash(), -7);
    assert_eq!(Seed::from(1_i64 << 32).hash(), 0);
    assert_eq!(palette::pick_color(65), PALETTE[1]);
    assert_eq!(palette::pick_color(-65), PALETTE[1]);
}

#[test]
fn test_per_seed_filter_id() {
    let options = CrystalOptions::default().filter_ids(FilterIdScope::PerSeed);
    assert_eq!(
        glow_filter_id(&Seed::from("jaskier"), &options),
        "glyphseed-glow-936166a7"
    );
}

#[test]
fn test_digest_of_empty_markup() {
    assert_eq!(markup_digest(""), EMPTY_DIGEST);
}
