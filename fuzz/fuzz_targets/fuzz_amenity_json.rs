#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Fuzz the amenity JSON wire shape - this should never panic
        if let Ok(set) = serde_json::from_str::<cascada::AmenitySet>(content) {
            let _ = cascada::amenity::encode(&set);
        }
    }
});
