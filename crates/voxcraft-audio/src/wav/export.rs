//! WAV export result type.

use crate::codec::wav_data_uri;
use crate::format::AudioFormat;
use crate::pcm::RawAudio;

use super::writer::encode_wav;

/// A WAV container ready for the storage collaborator.
#[derive(Debug, Clone)]
pub struct WavExport {
    /// Complete WAV file bytes.
    pub wav_data: Vec<u8>,
    /// BLAKE3 hash of the PCM payload only.
    pub pcm_hash: String,
    /// Payload format.
    pub format: AudioFormat,
    /// Number of frames in the payload.
    pub frame_count: usize,
}

impl WavExport {
    /// Encodes raw PCM16 audio.
    pub fn from_raw(raw: &RawAudio) -> Self {
        let format = raw.format();
        Self {
            wav_data: encode_wav(raw.bytes(), &format),
            pcm_hash: blake3::hash(raw.bytes()).to_hex().to_string(),
            format,
            frame_count: raw.frame_count(),
        }
    }

    /// Wraps the container as a `data:audio/wav;base64,` URI.
    pub fn to_data_uri(&self) -> String {
        wav_data_uri(&self.wav_data)
    }

    /// Duration in seconds.
    pub fn duration_seconds(&self) -> f64 {
        self.format.frames_to_seconds(self.frame_count)
    }

    /// Total container size in bytes.
    pub fn file_size(&self) -> usize {
        self.wav_data.len()
    }
}
