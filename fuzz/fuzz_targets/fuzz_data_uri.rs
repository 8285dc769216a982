#![no_main]

use libfuzzer_sys::fuzz_target;
use voxcraft_audio::{decode_base64, parse_data_uri};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let _ = decode_base64(s);
        let _ = parse_data_uri(s);
    }
});
