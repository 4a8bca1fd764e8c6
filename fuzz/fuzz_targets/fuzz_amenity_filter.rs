#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Fuzz amenity filter parsing - this should never panic, and the
        // parsed set must always re-encode cleanly.
        let set = cascada::amenity::parse(content.lines());
        let _ = cascada::amenity::encode(&set);
    }
});
