#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Fuzz location catalog parsing and the forest transform - this
        // should never panic
        if let Ok(provinces) = serde_json::from_str::<Vec<cascada::RawProvince>>(content) {
            let _ = cascada::model::location_forest(&provinces);
        }
    }
});
