#![no_main]

use bitcraft_map_editor::storage::decode_record;
use bitcraft_map_editor::CategoryScheme;
use libfuzzer_sys::fuzz_target;
use std::collections::HashSet;

fuzz_target!(|data: &[u8]| {
    let Ok(payload) = std::str::from_utf8(data) else {
        return;
    };

    for scheme in [CategoryScheme::Color, CategoryScheme::Icon] {
        if let Ok(markers) = decode_record(payload, scheme) {
            let mut ids = HashSet::new();
            for marker in &markers {
                assert!(ids.insert(marker.id), "doppelte Marker-ID nach dem Laden");
                assert!(scheme.contains(marker.category));
            }
        }
    }
});
