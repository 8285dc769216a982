//! WAV container parsing for stored assets.

use serde::Serialize;

use crate::error::{AudioError, AudioResult};
use crate::format::AudioFormat;
use crate::pcm::RawAudio;

/// Header fields of a WAV file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WavInfo {
    /// Format tag (1 = integer PCM, 3 = IEEE float).
    pub audio_format: u16,
    /// Number of channels.
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Declared bytes per second.
    pub byte_rate: u32,
    /// Declared bytes per frame.
    pub block_align: u16,
    /// Bits per sample.
    pub bits_per_sample: u16,
    /// Length of the `data` chunk payload in bytes.
    pub data_len: usize,
}

impl WavInfo {
    /// True for 16-bit integer PCM, the only layout the pipeline stores.
    pub fn is_pcm16(&self) -> bool {
        self.audio_format == 1 && self.bits_per_sample == 16
    }

    /// Frames in the data chunk.
    pub fn frame_count(&self) -> usize {
        match self.block_align {
            0 => 0,
            align => self.data_len / align as usize,
        }
    }

    /// Duration in seconds.
    pub fn duration_seconds(&self) -> f64 {
        if self.sample_rate == 0 {
            return 0.0;
        }
        self.frame_count() as f64 / self.sample_rate as f64
    }
}

struct Chunk<'a> {
    id: &'a [u8],
    body: &'a [u8],
}

/// Iterates RIFF sub-chunks, stopping at the first one that overruns the buffer.
fn chunks(wav_data: &[u8]) -> impl Iterator<Item = Chunk<'_>> {
    let mut pos = 12;
    std::iter::from_fn(move || {
        if pos + 8 > wav_data.len() {
            return None;
        }
        let id = &wav_data[pos..pos + 4];
        let size = u32::from_le_bytes([
            wav_data[pos + 4],
            wav_data[pos + 5],
            wav_data[pos + 6],
            wav_data[pos + 7],
        ]) as usize;

        let start = pos + 8;
        let end = start.checked_add(size)?;
        if end > wav_data.len() {
            return None;
        }

        pos = end + size % 2; // word alignment
        Some(Chunk {
            id,
            body: &wav_data[start..end],
        })
    })
}

fn has_riff_header(wav_data: &[u8]) -> bool {
    wav_data.len() >= 12 && &wav_data[0..4] == b"RIFF" && &wav_data[8..12] == b"WAVE"
}

/// Extracts the `data` chunk payload from a WAV file buffer.
///
/// Returns None if the buffer is not RIFF/WAVE or has no complete data chunk.
pub fn extract_pcm_data(wav_data: &[u8]) -> Option<&[u8]> {
    if !has_riff_header(wav_data) {
        return None;
    }
    chunks(wav_data)
        .find(|chunk| chunk.id == b"data")
        .map(|chunk| chunk.body)
}

/// Parses the `fmt ` and `data` chunks of a WAV file, in either order.
pub fn read_wav_header(wav_data: &[u8]) -> AudioResult<WavInfo> {
    if !has_riff_header(wav_data) {
        return Err(AudioError::invalid_wav("missing RIFF/WAVE header"));
    }

    let mut fmt = None;
    let mut data_len = None;
    for chunk in chunks(wav_data) {
        match chunk.id {
            b"fmt " if fmt.is_none() => fmt = Some(chunk.body),
            b"data" if data_len.is_none() => data_len = Some(chunk.body.len()),
            _ => {}
        }
        if fmt.is_some() && data_len.is_some() {
            break;
        }
    }

    let fmt = fmt.ok_or_else(|| AudioError::invalid_wav("missing fmt chunk"))?;
    if fmt.len() < 16 {
        return Err(AudioError::invalid_wav(format!(
            "fmt chunk too short: {} bytes",
            fmt.len()
        )));
    }
    let data_len = data_len.ok_or_else(|| AudioError::invalid_wav("missing data chunk"))?;

    let u16_at = |i: usize| u16::from_le_bytes([fmt[i], fmt[i + 1]]);
    let u32_at = |i: usize| u32::from_le_bytes([fmt[i], fmt[i + 1], fmt[i + 2], fmt[i + 3]]);

    Ok(WavInfo {
        audio_format: u16_at(0),
        channels: u16_at(2),
        sample_rate: u32_at(4),
        byte_rate: u32_at(8),
        block_align: u16_at(12),
        bits_per_sample: u16_at(14),
        data_len,
    })
}

/// Loads a stored PCM16 WAV back into [`RawAudio`].
///
/// Only 16-bit integer PCM is accepted; other layouts go through an
/// [`UploadDecoder`](crate::upload::UploadDecoder) instead.
pub fn decode_wav(wav_data: &[u8]) -> AudioResult<RawAudio> {
    let info = read_wav_header(wav_data)?;
    if !info.is_pcm16() {
        return Err(AudioError::invalid_wav(format!(
            "expected 16-bit PCM, found format {} with {} bits",
            info.audio_format, info.bits_per_sample
        )));
    }
    let format = AudioFormat::new(info.sample_rate, info.channels)?;
    let pcm = extract_pcm_data(wav_data).unwrap_or_default();
    RawAudio::new(pcm.to_vec(), format)
}
