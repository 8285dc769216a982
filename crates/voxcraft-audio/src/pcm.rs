//! PCM16 decoding and float re-quantization.
//!
//! Decoding normalizes with `value / 32768.0`, so the float range is
//! `[-1.0, 32767/32768]`. Re-quantization scales negative samples by 32768 and
//! non-negative samples by 32767 and truncates toward zero. Stored assets
//! depend on this exact asymmetric mapping.

use crate::error::{AudioError, AudioResult};
use crate::format::{AudioFormat, BYTES_PER_SAMPLE};

/// Raw interleaved little-endian PCM16 bytes plus their format.
///
/// The byte length is always a whole number of frames.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawAudio {
    bytes: Vec<u8>,
    format: AudioFormat,
}

impl RawAudio {
    /// Wraps PCM16 bytes, discarding any trailing partial frame.
    pub fn new(mut bytes: Vec<u8>, format: AudioFormat) -> AudioResult<Self> {
        format.validate()?;
        let whole = bytes.len() - bytes.len() % format.block_align();
        bytes.truncate(whole);
        Ok(Self { bytes, format })
    }

    /// The PCM payload.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Consumes self, returning the PCM payload.
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Stream format.
    pub fn format(&self) -> AudioFormat {
        self.format
    }

    /// Number of frames.
    pub fn frame_count(&self) -> usize {
        self.bytes.len() / self.format.block_align()
    }

    /// Duration in seconds.
    pub fn duration_seconds(&self) -> f64 {
        self.format.frames_to_seconds(self.frame_count())
    }

    /// Decodes into a playable buffer.
    pub fn decode(&self) -> AudioResult<PlayableBuffer> {
        decode_pcm(&self.bytes, self.format)
    }
}

/// Decoded audio: one array of normalized float samples per channel.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayableBuffer {
    channels: Vec<Vec<f32>>,
    frame_count: usize,
    sample_rate: u32,
}

impl PlayableBuffer {
    /// Builds a buffer from per-channel sample arrays.
    ///
    /// Channels longer than the shortest one are truncated to it.
    pub fn from_channels(mut channels: Vec<Vec<f32>>, sample_rate: u32) -> AudioResult<Self> {
        let count = u16::try_from(channels.len()).map_err(|_| AudioError::InvalidChannels {
            channels: channels.len(),
        })?;
        AudioFormat::new(sample_rate, count)?;

        let frame_count = channels.iter().map(Vec::len).min().unwrap_or(0);
        for channel in &mut channels {
            channel.truncate(frame_count);
        }

        Ok(Self {
            channels,
            frame_count,
            sample_rate,
        })
    }

    /// Number of frames.
    pub fn frame_count(&self) -> usize {
        self.frame_count
    }

    /// Sample rate in Hz.
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Number of channels.
    pub fn num_channels(&self) -> usize {
        self.channels.len()
    }

    /// Samples of one channel.
    pub fn channel(&self, index: usize) -> Option<&[f32]> {
        self.channels.get(index).map(Vec::as_slice)
    }

    /// True when the buffer holds no frames.
    pub fn is_empty(&self) -> bool {
        self.frame_count == 0
    }

    /// Duration in seconds.
    pub fn duration_seconds(&self) -> f64 {
        self.frame_count as f64 / self.sample_rate as f64
    }

    /// Re-quantizes the first channel to mono PCM16 bytes.
    ///
    /// Used for decoded uploads, which may carry any channel layout.
    pub fn to_mono_pcm16(&self) -> Vec<u8> {
        self.channel(0).map(samples_to_pcm16).unwrap_or_default()
    }
}

/// Decodes interleaved little-endian PCM16 bytes into a [`PlayableBuffer`].
///
/// A trailing odd byte is discarded, as are samples that do not fill a whole
/// frame. Empty input yields a zero-frame buffer.
///
/// # Errors
/// `InvalidChannels` or `InvalidSampleRate` if the format has a zero field.
pub fn decode_pcm(bytes: &[u8], format: AudioFormat) -> AudioResult<PlayableBuffer> {
    format.validate()?;

    let channels = format.channels as usize;
    let sample_count = bytes.len() / BYTES_PER_SAMPLE;
    let frame_count = sample_count / channels;

    let mut data: Vec<Vec<f32>> = (0..channels)
        .map(|_| Vec::with_capacity(frame_count))
        .collect();
    for (index, pair) in bytes
        .chunks_exact(BYTES_PER_SAMPLE)
        .take(frame_count * channels)
        .enumerate()
    {
        let value = i16::from_le_bytes([pair[0], pair[1]]);
        data[index % channels].push(value as f32 / 32768.0);
    }

    Ok(PlayableBuffer {
        channels: data,
        frame_count,
        sample_rate: format.sample_rate,
    })
}

/// Decodes synthesis output (24 kHz mono).
pub fn decode_synthesis_pcm(bytes: &[u8]) -> AudioResult<PlayableBuffer> {
    decode_pcm(bytes, AudioFormat::synthesis())
}

/// Converts one float sample to PCM16.
///
/// Clamps to [-1, 1], scales negatives by 32768 and the rest by 32767, and
/// truncates toward zero.
pub fn quantize_sample(sample: f32) -> i16 {
    let clamped = if sample.is_nan() {
        0.0
    } else {
        sample.clamp(-1.0, 1.0)
    };
    let scaled = if clamped < 0.0 {
        clamped * 32768.0
    } else {
        clamped * 32767.0
    };
    scaled as i16
}

/// Converts float samples to little-endian PCM16 bytes.
pub fn samples_to_pcm16(samples: &[f32]) -> Vec<u8> {
    let mut pcm = Vec::with_capacity(samples.len() * BYTES_PER_SAMPLE);
    for &sample in samples {
        pcm.extend_from_slice(&quantize_sample(sample).to_le_bytes());
    }
    pcm
}

/// Reads a PCM16 payload back as integers, ignoring a trailing odd byte.
pub fn pcm16_values(bytes: &[u8]) -> Vec<i16> {
    bytes
        .chunks_exact(BYTES_PER_SAMPLE)
        .map(|pair| i16::from_le_bytes([pair[0], pair[1]]))
        .collect()
}

impl TryFrom<&RawAudio> for PlayableBuffer {
    type Error = AudioError;

    fn try_from(raw: &RawAudio) -> AudioResult<Self> {
        raw.decode()
    }
}
