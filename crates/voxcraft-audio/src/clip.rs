//! The per-generation audio asset.
//!
//! A clip keeps the original PCM16 bytes next to the decoded buffer. Playback
//! uses the buffer; export always encodes the original bytes, so exported
//! files never pick up float quantization drift.

use std::sync::Arc;

use crate::codec::decode_base64;
use crate::error::AudioResult;
use crate::format::AudioFormat;
use crate::pcm::{PlayableBuffer, RawAudio};
use crate::upload::UploadDecoder;
use crate::wav::WavExport;

/// Raw PCM16 bytes and their decoded, playable form.
#[derive(Debug, Clone)]
pub struct AudioClip {
    raw: RawAudio,
    playable: Arc<PlayableBuffer>,
}

impl AudioClip {
    /// Builds a clip from raw PCM16 bytes.
    pub fn from_pcm(bytes: Vec<u8>, format: AudioFormat) -> AudioResult<Self> {
        let raw = RawAudio::new(bytes, format)?;
        let playable = Arc::new(raw.decode()?);
        Ok(Self { raw, playable })
    }

    /// Builds a clip from a base64 synthesis payload.
    pub fn from_base64(payload: &str, format: AudioFormat) -> AudioResult<Self> {
        let bytes = decode_base64(payload)?;
        tracing::debug!(bytes = bytes.len(), "decoded synthesis payload");
        Self::from_pcm(bytes, format)
    }

    /// Builds a clip from an uploaded file.
    ///
    /// The decoded audio is re-quantized to mono PCM16 at its own sample rate
    /// and then handled like synthesis output.
    pub fn from_upload<D: UploadDecoder + ?Sized>(bytes: &[u8], decoder: &D) -> AudioResult<Self> {
        let decoded = decoder.decode(bytes)?;
        let format = AudioFormat::new(decoded.sample_rate(), 1)?;
        Self::from_pcm(decoded.to_mono_pcm16(), format)
    }

    /// The original PCM16 bytes.
    pub fn raw(&self) -> &RawAudio {
        &self.raw
    }

    /// The decoded buffer, shareable with the playback controller.
    pub fn playable(&self) -> Arc<PlayableBuffer> {
        Arc::clone(&self.playable)
    }

    /// Encodes the original bytes as WAV.
    pub fn to_wav(&self) -> WavExport {
        WavExport::from_raw(&self.raw)
    }

    /// Duration in seconds.
    pub fn duration_seconds(&self) -> f64 {
        self.raw.duration_seconds()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::encode_base64;
    use crate::upload::HoundDecoder;
    use crate::wav::{encode_wav, extract_pcm_data};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_from_base64_one_second() {
        let payload = encode_base64(&vec![0u8; 48000]);
        let clip = AudioClip::from_base64(&payload, AudioFormat::synthesis()).unwrap();
        assert_eq!(clip.playable().frame_count(), 24000);
        assert_eq!(clip.to_wav().file_size(), 48044);
    }

    #[test]
    fn test_export_uses_original_bytes() {
        let bytes: Vec<u8> = (0..200u8).collect();
        let clip = AudioClip::from_pcm(bytes.clone(), AudioFormat::synthesis()).unwrap();
        let export = clip.to_wav();
        assert_eq!(extract_pcm_data(&export.wav_data), Some(bytes.as_slice()));
    }

    #[test]
    fn test_odd_payload_loses_last_byte() {
        let payload = encode_base64(&[1, 2, 3]);
        let clip = AudioClip::from_base64(&payload, AudioFormat::synthesis()).unwrap();
        assert_eq!(clip.raw().bytes(), &[1, 2]);
    }

    #[test]
    fn test_bad_base64_is_decode_error() {
        let err = AudioClip::from_base64("@@@@", AudioFormat::synthesis()).unwrap_err();
        assert!(err.is_decode());
    }

    #[test]
    fn test_from_upload_requantizes_to_mono() {
        let stereo: Vec<u8> = [1000i16, -1000, 2000, -2000]
            .iter()
            .flat_map(|v| v.to_le_bytes())
            .collect();
        let wav = encode_wav(&stereo, &AudioFormat::new(16000, 2).unwrap());

        let clip = AudioClip::from_upload(&wav, &HoundDecoder).unwrap();
        assert_eq!(clip.raw().format(), AudioFormat::mono(16000));
        assert_eq!(clip.raw().frame_count(), 2);
    }
}
