#![no_main]

use libfuzzer_sys::fuzz_target;
use voxcraft_audio::{decode_synthesis_pcm, encode_synthesis_wav, extract_pcm_data};
use voxcraft_voice::resolve_index;

fuzz_target!(|data: &[u8]| {
    let buffer = decode_synthesis_pcm(data).expect("synthesis format is valid");
    assert_eq!(buffer.frame_count(), data.len() / 2);

    let wav = encode_synthesis_wav(data);
    assert_eq!(extract_pcm_data(&wav), Some(data));

    if let Ok(name) = std::str::from_utf8(data) {
        let index = resolve_index(name, 5).expect("catalog is non-empty");
        assert!(index < 5);
    }
});
