#![no_main]

use libfuzzer_sys::fuzz_target;
use voxcraft_audio::wav::{decode_wav, extract_pcm_data, read_wav_header};

fuzz_target!(|data: &[u8]| {
    if let Ok(info) = read_wav_header(data) {
        let _ = info.frame_count();
        let _ = info.duration_seconds();
    }
    if let Some(pcm) = extract_pcm_data(data) {
        assert!(pcm.len() <= data.len());
    }
    let _ = decode_wav(data);
});
