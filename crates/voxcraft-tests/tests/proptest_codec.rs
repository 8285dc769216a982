//! Property tests for the codec, PCM and resolver invariants.

use proptest::prelude::*;
use voxcraft_audio::pcm::quantize_sample;
use voxcraft_audio::{
    decode_base64, decode_synthesis_pcm, encode_base64, encode_synthesis_wav, extract_pcm_data,
};
use voxcraft_voice::{name_hash, resolve_index, TrainingSample, VoiceRegistry};

proptest! {
    #[test]
    fn base64_round_trips(bytes in proptest::collection::vec(any::<u8>(), 0..512)) {
        prop_assert_eq!(decode_base64(&encode_base64(&bytes)).unwrap(), bytes);
    }

    #[test]
    fn odd_trailing_byte_is_ignored(bytes in proptest::collection::vec(any::<u8>(), 1..512)) {
        let bytes = if bytes.len() % 2 == 0 { bytes[..bytes.len() - 1].to_vec() } else { bytes };
        let full = decode_synthesis_pcm(&bytes).unwrap();
        let trimmed = decode_synthesis_pcm(&bytes[..bytes.len() - 1]).unwrap();
        prop_assert_eq!(full, trimmed);
    }

    #[test]
    fn wav_payload_is_verbatim(bytes in proptest::collection::vec(any::<u8>(), 0..512)) {
        let wav = encode_synthesis_wav(&bytes);
        prop_assert_eq!(wav.len(), 44 + bytes.len());
        prop_assert_eq!(extract_pcm_data(&wav), Some(&bytes[..]));
    }

    #[test]
    fn decoded_samples_stay_in_range(bytes in proptest::collection::vec(any::<u8>(), 0..512)) {
        let buffer = decode_synthesis_pcm(&bytes).unwrap();
        if let Some(samples) = buffer.channel(0) {
            for &s in samples {
                prop_assert!((-1.0..1.0).contains(&s));
            }
        }
    }

    #[test]
    fn requantize_inverts_decode(value in any::<i16>()) {
        let sample = value as f32 / 32768.0;
        let back = quantize_sample(sample);
        // Negative samples are exact; positive ones lose at most one step.
        if value < 0 {
            prop_assert_eq!(back, value);
        } else {
            prop_assert!(value - back <= 1 && back <= value);
        }
    }

    #[test]
    fn resolver_is_total_and_in_range(name in ".*", len in 1usize..16) {
        let index = resolve_index(&name, len).unwrap();
        prop_assert!(index < len);
        prop_assert_eq!(resolve_index(&name, len), Some(index));
    }

    #[test]
    fn single_bmp_char_hashes_to_its_code_unit(c in proptest::char::range('\u{0}', '\u{D7FF}')) {
        prop_assert_eq!(name_hash(&c.to_string()), c as i32);
    }

    #[test]
    fn registry_resolves_every_name(name in "\\PC{0,24}") {
        let registry = VoiceRegistry::new();
        match registry.resolve_name(&name) {
            Ok(voice) => prop_assert!(registry.system_voices().iter().any(|v| v.id == voice)),
            Err(_) => prop_assert!(name.trim().is_empty()),
        }
    }

    #[test]
    fn name_resolution_agrees_with_created_profile(name in "\\s{0,2}[A-Za-z ]{1,12}\\s{0,2}") {
        prop_assume!(!name.trim().is_empty());
        let mut registry = VoiceRegistry::new();
        let sample = TrainingSample::uploaded("take.wav", vec![0; 4]);
        let profile = registry.create_profile(&name, &[sample]).unwrap();
        prop_assert_eq!(registry.resolve_name(&name).unwrap(), registry.resolve(&profile));
    }
}

#[test]
fn empty_catalog_has_no_index() {
    assert_eq!(resolve_index("Ava", 0), None);
}
