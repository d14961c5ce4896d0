#![no_main]

use glyphseed_core::{connector, crystal, icon, CrystalOptions, IconCategory, IconOptions, Paint};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let seed = String::from_utf8_lossy(data);
    let first = crystal::generate(&*seed, &CrystalOptions::default());
    assert_eq!(first, crystal::generate(&*seed, &CrystalOptions::default()));

    let first = icon::generate(&*seed, IconCategory::Mixed, &IconOptions::default());
    assert_eq!(
        first,
        icon::generate(&*seed, IconCategory::Mixed, &IconOptions::default())
    );

    let _ = connector::create(&Paint::from(&*seed), true, &*seed);
});
