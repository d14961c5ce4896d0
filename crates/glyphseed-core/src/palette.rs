//! Curated colour palette and the seed-to-colour picker.
//!
//! The flattened table is the ordered concatenation of eight hue groups of
//! eight colours. [`pick_color`] indexes it by `|hash(seed)| mod 64`, so the
//! length and order of [`PALETTE`] are part of the output contract: editing
//! either reassigns the colour of every existing seed.

use serde::Serialize;

use crate::seed::Seed;

/// A named palette colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct PaletteColor {
    /// Display name, unique across the palette.
    pub name: &'static str,
    /// Lowercase `#rrggbb`.
    pub hex: &'static str,
}

impl PaletteColor {
    const fn new(name: &'static str, hex: &'static str) -> Self {
        Self { name, hex }
    }

    /// The colour as 8-bit RGB.
    pub fn rgb(&self) -> [u8; 3] {
        let channel = |i: usize| {
            self.hex
                .get(i..i + 2)
                .and_then(|digits| u8::from_str_radix(digits, 16).ok())
                .unwrap_or(0)
        };
        [channel(1), channel(3), channel(5)]
    }
}

/// A named hue group: a contiguous run of [`PALETTE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorGroup {
    /// Group name.
    pub name: &'static str,
    start: usize,
    len: usize,
}

impl ColorGroup {
    const fn new(name: &'static str, start: usize) -> Self {
        Self {
            name,
            start,
            len: GROUP_LEN,
        }
    }

    /// The colours of this group, in table order.
    pub fn colors(&self) -> &'static [PaletteColor] {
        &PALETTE[self.start..self.start + self.len]
    }
}

const GROUP_LEN: usize = 8;

/// The flattened palette.
pub static PALETTE: [PaletteColor; 64] = [
    // reds
    PaletteColor::new("Crimson", "#dc143c"),
    PaletteColor::new("Scarlet", "#ff2400"),
    PaletteColor::new("Ruby", "#e0115f"),
    PaletteColor::new("Garnet", "#733635"),
    PaletteColor::new("Cardinal", "#c41e3a"),
    PaletteColor::new("Cherry", "#de3163"),
    PaletteColor::new("Vermilion", "#e34234"),
    PaletteColor::new("Carmine", "#960018"),
    // oranges
    PaletteColor::new("Tangerine", "#f28500"),
    PaletteColor::new("Amber", "#ffbf00"),
    PaletteColor::new("Coral", "#ff7f50"),
    PaletteColor::new("Copper", "#b87333"),
    PaletteColor::new("Rust", "#b7410e"),
    PaletteColor::new("Apricot", "#fbceb1"),
    PaletteColor::new("Persimmon", "#ec5800"),
    PaletteColor::new("Saffron", "#f4c430"),
    // yellows
    PaletteColor::new("Lemon", "#fff44f"),
    PaletteColor::new("Gold", "#ffd700"),
    PaletteColor::new("Mustard", "#ffdb58"),
    PaletteColor::new("Citrine", "#e4d00a"),
    PaletteColor::new("Flax", "#eedc82"),
    PaletteColor::new("Maize", "#fbec5d"),
    PaletteColor::new("Canary", "#ffef00"),
    PaletteColor::new("Goldenrod", "#daa520"),
    // greens
    PaletteColor::new("Emerald", "#50c878"),
    PaletteColor::new("Jade", "#00a86b"),
    PaletteColor::new("Sage", "#9caf88"),
    PaletteColor::new("Moss", "#8a9a5b"),
    PaletteColor::new("Mint", "#3eb489"),
    PaletteColor::new("Olive", "#808000"),
    PaletteColor::new("Forest", "#228b22"),
    PaletteColor::new("Malachite", "#0bda51"),
    // teals
    PaletteColor::new("Teal", "#008080"),
    PaletteColor::new("Turquoise", "#40e0d0"),
    PaletteColor::new("Aquamarine", "#7fffd4"),
    PaletteColor::new("Cyan", "#00b7eb"),
    PaletteColor::new("Seafoam", "#93e9be"),
    PaletteColor::new("Viridian", "#40826d"),
    PaletteColor::new("Celadon", "#ace1af"),
    PaletteColor::new("Verdigris", "#43b3ae"),
    // blues
    PaletteColor::new("Sapphire", "#0f52ba"),
    PaletteColor::new("Cobalt", "#0047ab"),
    PaletteColor::new("Azure", "#007fff"),
    PaletteColor::new("Cerulean", "#007ba7"),
    PaletteColor::new("Indigo", "#4b0082"),
    PaletteColor::new("Navy", "#000080"),
    PaletteColor::new("Periwinkle", "#ccccff"),
    PaletteColor::new("Steel", "#4682b4"),
    // purples
    PaletteColor::new("Amethyst", "#9966cc"),
    PaletteColor::new("Violet", "#8f00ff"),
    PaletteColor::new("Lavender", "#b57edc"),
    PaletteColor::new("Plum", "#8e4585"),
    PaletteColor::new("Orchid", "#da70d6"),
    PaletteColor::new("Mauve", "#e0b0ff"),
    PaletteColor::new("Heliotrope", "#df73ff"),
    PaletteColor::new("Byzantium", "#702963"),
    // pinks
    PaletteColor::new("Rose", "#ff007f"),
    PaletteColor::new("Blush", "#de5d83"),
    PaletteColor::new("Fuchsia", "#ff00ff"),
    PaletteColor::new("Magenta", "#ca1f7b"),
    PaletteColor::new("Flamingo", "#fc8eac"),
    PaletteColor::new("Salmon", "#fa8072"),
    PaletteColor::new("Raspberry", "#e30b5c"),
    PaletteColor::new("Thulian", "#de6fa1"),
];

/// The hue groups, in table order.
pub static COLOR_GROUPS: [ColorGroup; 8] = [
    ColorGroup::new("reds", 0),
    ColorGroup::new("oranges", 8),
    ColorGroup::new("yellows", 16),
    ColorGroup::new("greens", 24),
    ColorGroup::new("teals", 32),
    ColorGroup::new("blues", 40),
    ColorGroup::new("purples", 48),
    ColorGroup::new("pinks", 56),
];

/// The palette colour assigned to a seed.
///
/// One hash, one lookup. No RNG is created.
pub fn pick_color(seed: impl Into<Seed>) -> PaletteColor {
    PALETTE[seed.into().index_for(PALETTE.len())]
}

/// Look up a colour by hex, ignoring ASCII case.
pub fn get_color_by_hex(hex: &str) -> Option<PaletteColor> {
    PALETTE
        .iter()
        .find(|color| color.hex.eq_ignore_ascii_case(hex))
        .copied()
}

/// Look up a colour by its exact name.
pub fn get_color_by_name(name: &str) -> Option<PaletteColor> {
    PALETTE.iter().find(|color| color.name == name).copied()
}

/// The colours of a named group.
pub fn get_color_group(name: &str) -> Option<&'static [PaletteColor]> {
    COLOR_GROUPS
        .iter()
        .find(|group| group.name == name)
        .map(ColorGroup::colors)
}

/// Group names, in table order.
pub fn get_group_names() -> Vec<&'static str> {
    COLOR_GROUPS.iter().map(|group| group.name).collect()
}
