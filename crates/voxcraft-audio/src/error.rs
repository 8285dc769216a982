//! Error types for the audio pipeline.

use thiserror::Error;

/// Result type for audio operations.
pub type AudioResult<T> = Result<T, AudioError>;

/// Errors with a stable, machine-readable code.
///
/// Every library error in the workspace implements this so callers can report
/// failures uniformly regardless of which crate produced them.
///
/// # Example
///
/// ```
/// use voxcraft_audio::{AudioError, CodedError};
///
/// let err = AudioError::EmptyBuffer;
/// assert_eq!(err.code(), "AUDIO_006");
/// assert_eq!(err.category(), "playback");
/// ```
pub trait CodedError: std::error::Error {
    /// Stable error code such as "AUDIO_001" or "VOICE_003".
    fn code(&self) -> &'static str;

    /// Error category ("decode", "playback", "permission", ...).
    fn category(&self) -> &'static str;

    /// Human-readable message, the same as `Display`.
    fn message(&self) -> String {
        self.to_string()
    }
}

/// Errors that can occur while decoding, encoding or playing audio.
#[derive(Debug, Error)]
pub enum AudioError {
    /// Malformed base64 input.
    #[error("invalid base64 payload: {message}")]
    InvalidBase64 {
        /// Decoder diagnostic.
        message: String,
    },

    /// Channel count of zero, or more channels than a WAV header can declare.
    #[error("invalid channel count: {channels}")]
    InvalidChannels {
        /// The rejected channel count.
        channels: usize,
    },

    /// Sample rate of zero.
    #[error("invalid sample rate: {rate}")]
    InvalidSampleRate {
        /// The rejected sample rate.
        rate: u32,
    },

    /// A data URI that is not `data:<mime>;base64,<payload>`.
    #[error("invalid data URI: {message}")]
    InvalidDataUri {
        /// What was wrong with it.
        message: String,
    },

    /// A container that could not be parsed as WAV.
    #[error("invalid WAV data: {message}")]
    InvalidWav {
        /// Parser diagnostic.
        message: String,
    },

    /// Attempt to play a buffer with no frames.
    #[error("cannot play an empty buffer")]
    EmptyBuffer,

    /// `toggle()` with nothing played before.
    #[error("no previous buffer to replay")]
    NothingToReplay,

    /// The platform audio output refused an operation.
    #[error("audio platform error: {message}")]
    Platform {
        /// Platform diagnostic.
        message: String,
    },

    /// Configuration file could not be parsed.
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AudioError {
    /// Creates an invalid WAV error.
    pub fn invalid_wav(message: impl Into<String>) -> Self {
        Self::InvalidWav {
            message: message.into(),
        }
    }

    /// Creates an invalid data URI error.
    pub fn invalid_data_uri(message: impl Into<String>) -> Self {
        Self::InvalidDataUri {
            message: message.into(),
        }
    }

    /// Creates a platform error.
    pub fn platform(message: impl Into<String>) -> Self {
        Self::Platform {
            message: message.into(),
        }
    }

    /// Returns true for the decode family of errors.
    pub fn is_decode(&self) -> bool {
        self.category() == "decode"
    }
}

impl CodedError for AudioError {
    fn code(&self) -> &'static str {
        match self {
            AudioError::InvalidBase64 { .. } => "AUDIO_001",
            AudioError::InvalidChannels { .. } => "AUDIO_002",
            AudioError::InvalidSampleRate { .. } => "AUDIO_003",
            AudioError::InvalidDataUri { .. } => "AUDIO_004",
            AudioError::InvalidWav { .. } => "AUDIO_005",
            AudioError::EmptyBuffer => "AUDIO_006",
            AudioError::NothingToReplay => "AUDIO_007",
            AudioError::Platform { .. } => "AUDIO_008",
            AudioError::Config(_) => "AUDIO_009",
            AudioError::Io(_) => "AUDIO_010",
        }
    }

    fn category(&self) -> &'static str {
        match self {
            AudioError::InvalidBase64 { .. }
            | AudioError::InvalidChannels { .. }
            | AudioError::InvalidSampleRate { .. }
            | AudioError::InvalidDataUri { .. }
            | AudioError::InvalidWav { .. } => "decode",
            AudioError::EmptyBuffer | AudioError::NothingToReplay | AudioError::Platform { .. } => {
                "playback"
            }
            AudioError::Config(_) => "config",
            AudioError::Io(_) => "io",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_wav_helper() {
        let err = AudioError::invalid_wav("missing fmt chunk");
        assert!(err.to_string().contains("missing fmt chunk"));
        assert!(err.is_decode());
    }

    #[test]
    fn test_codes_are_unique() {
        let errors = [
            AudioError::InvalidBase64 {
                message: String::new(),
            },
            AudioError::InvalidChannels { channels: 0 },
            AudioError::InvalidSampleRate { rate: 0 },
            AudioError::invalid_data_uri(""),
            AudioError::invalid_wav(""),
            AudioError::EmptyBuffer,
            AudioError::NothingToReplay,
            AudioError::platform(""),
            AudioError::Io(std::io::Error::other("x")),
        ];
        let mut codes: Vec<_> = errors.iter().map(|e| e.code()).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), errors.len());
    }

    #[test]
    fn test_playback_category() {
        assert_eq!(AudioError::EmptyBuffer.category(), "playback");
        assert!(!AudioError::NothingToReplay.is_decode());
    }
}
