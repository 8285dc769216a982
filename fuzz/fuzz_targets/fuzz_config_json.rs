#![no_main]

use libfuzzer_sys::fuzz_target;
use voxcraft_audio::PipelineConfig;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(config) = PipelineConfig::from_json(s) {
            let json = config.to_json_pretty().expect("valid config serializes");
            let _ = serde_json::from_str::<serde_json::Value>(&json);
        }
    }
});
