//! PCM16 stream format parameters.

use serde::{Deserialize, Serialize};

use crate::error::{AudioError, AudioResult};

/// Sample rate of synthesis output in Hz.
pub const SYNTHESIS_SAMPLE_RATE: u32 = 24_000;

/// Channel count of synthesis output.
pub const SYNTHESIS_CHANNELS: u16 = 1;

/// Bytes per PCM16 sample.
pub const BYTES_PER_SAMPLE: usize = 2;

/// Format of a PCM16 stream: sample rate and channel count.
///
/// Bit depth is fixed at 16; there is no other sample width in the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudioFormat {
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Number of interleaved channels.
    pub channels: u16,
}

impl Default for AudioFormat {
    fn default() -> Self {
        Self::synthesis()
    }
}

impl AudioFormat {
    /// Creates a format, rejecting a zero sample rate or channel count.
    pub fn new(sample_rate: u32, channels: u16) -> AudioResult<Self> {
        let format = Self {
            sample_rate,
            channels,
        };
        format.validate()?;
        Ok(format)
    }

    /// Mono at the given rate.
    pub fn mono(sample_rate: u32) -> Self {
        Self {
            sample_rate,
            channels: 1,
        }
    }

    /// The fixed synthesis output format (24 kHz mono).
    pub fn synthesis() -> Self {
        Self {
            sample_rate: SYNTHESIS_SAMPLE_RATE,
            channels: SYNTHESIS_CHANNELS,
        }
    }

    /// Checks that both fields are non-zero.
    pub fn validate(&self) -> AudioResult<()> {
        if self.channels == 0 {
            return Err(AudioError::InvalidChannels { channels: 0 });
        }
        if self.sample_rate == 0 {
            return Err(AudioError::InvalidSampleRate {
                rate: self.sample_rate,
            });
        }
        Ok(())
    }

    /// Bytes per frame (one sample per channel).
    pub fn block_align(&self) -> usize {
        self.channels as usize * BYTES_PER_SAMPLE
    }

    /// Bytes per second.
    pub fn byte_rate(&self) -> u32 {
        self.sample_rate
            .wrapping_mul(self.channels as u32)
            .wrapping_mul(BYTES_PER_SAMPLE as u32)
    }

    /// Duration of `frames` frames in seconds.
    pub fn frames_to_seconds(&self, frames: usize) -> f64 {
        if self.sample_rate == 0 {
            return 0.0;
        }
        frames as f64 / self.sample_rate as f64
    }
}
