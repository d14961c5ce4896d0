#![no_main]

use glyphseed_core::{connector, crystal, icon, IconCategory, RenderConfig};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(config) = RenderConfig::from_json_str(text) else {
        return;
    };
    let _ = crystal::generate("fuzz", &config.crystal);
    let _ = icon::generate("fuzz", IconCategory::Mixed, &config.icon);
    let _ = connector::create_marker(&config.icon.color, "fuzz", config.connector.marker_size);
});
