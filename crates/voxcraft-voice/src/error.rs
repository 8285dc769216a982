//! Error types for voice profiles and capture.

use thiserror::Error;
use voxcraft_audio::{AudioError, CodedError};

/// Result type for voice operations.
pub type VoiceResult<T> = Result<T, VoiceError>;

/// Failure reported by a capture device when it is opened.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeviceError {
    /// The user or OS refused microphone access.
    #[error("microphone permission denied")]
    PermissionDenied,
    /// No input device is present.
    #[error("no microphone found")]
    NotFound,
    /// The device is held by another session.
    #[error("microphone is in use")]
    Busy,
}

/// Errors that can occur while capturing samples or managing voice profiles.
#[derive(Debug, Error)]
pub enum VoiceError {
    /// Microphone access was refused.
    #[error("microphone access denied: {message}")]
    PermissionDenied {
        /// Reason reported by the device.
        message: String,
    },

    /// There is no microphone to record from.
    #[error("no microphone available")]
    NoDevice,

    /// A recording is already in progress.
    #[error("microphone is busy: a recording is already in progress")]
    ResourceBusy,

    /// `stop()` without a recording in progress.
    #[error("no recording in progress")]
    NotRecording,

    /// Captured chunks could not be turned into a sample.
    #[error("failed to finalize recording: {message}")]
    Finalize {
        /// What went wrong.
        message: String,
    },

    /// Profile name missing or blank.
    #[error("voice profile name must not be empty")]
    EmptyProfileName,

    /// Profile committed with no training samples.
    #[error("voice profile needs at least one training sample")]
    NoSamples,

    /// Sample index out of range.
    #[error("no training sample at index {index}")]
    UnknownSample {
        /// The requested index.
        index: usize,
    },

    /// A registry needs at least one system voice to resolve clones.
    #[error("system voice catalog is empty")]
    EmptyCatalog,

    /// Underlying audio failure.
    #[error(transparent)]
    Audio(#[from] AudioError),
}

impl VoiceError {
    /// Creates a finalize error.
    pub fn finalize(message: impl Into<String>) -> Self {
        Self::Finalize {
            message: message.into(),
        }
    }

    /// True for errors that reject a profile commit.
    pub fn is_profile_creation(&self) -> bool {
        matches!(self, VoiceError::EmptyProfileName | VoiceError::NoSamples)
    }
}

impl From<DeviceError> for VoiceError {
    fn from(err: DeviceError) -> Self {
        match err {
            DeviceError::PermissionDenied => VoiceError::PermissionDenied {
                message: err.to_string(),
            },
            DeviceError::NotFound => VoiceError::NoDevice,
            DeviceError::Busy => VoiceError::ResourceBusy,
        }
    }
}

impl CodedError for VoiceError {
    fn code(&self) -> &'static str {
        match self {
            VoiceError::PermissionDenied { .. } => "VOICE_001",
            VoiceError::NoDevice => "VOICE_002",
            VoiceError::ResourceBusy => "VOICE_003",
            VoiceError::NotRecording => "VOICE_004",
            VoiceError::Finalize { .. } => "VOICE_005",
            VoiceError::EmptyProfileName => "VOICE_006",
            VoiceError::NoSamples => "VOICE_007",
            VoiceError::UnknownSample { .. } => "VOICE_008",
            VoiceError::EmptyCatalog => "VOICE_009",
            VoiceError::Audio(inner) => inner.code(),
        }
    }

    fn category(&self) -> &'static str {
        match self {
            VoiceError::PermissionDenied { .. } | VoiceError::NoDevice => "permission",
            VoiceError::ResourceBusy => "busy",
            VoiceError::NotRecording | VoiceError::Finalize { .. } => "capture",
            VoiceError::EmptyProfileName
            | VoiceError::NoSamples
            | VoiceError::UnknownSample { .. }
            | VoiceError::EmptyCatalog => "profile",
            VoiceError::Audio(inner) => inner.category(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_device_error_mapping() {
        assert!(matches!(
            VoiceError::from(DeviceError::PermissionDenied),
            VoiceError::PermissionDenied { .. }
        ));
        assert!(matches!(VoiceError::from(DeviceError::NotFound), VoiceError::NoDevice));
        assert!(matches!(VoiceError::from(DeviceError::Busy), VoiceError::ResourceBusy));
    }

    #[test]
    fn test_profile_creation_family() {
        assert!(VoiceError::EmptyProfileName.is_profile_creation());
        assert!(VoiceError::NoSamples.is_profile_creation());
        assert!(!VoiceError::ResourceBusy.is_profile_creation());
    }

    #[test]
    fn test_audio_errors_keep_their_code() {
        let err = VoiceError::from(AudioError::EmptyBuffer);
        assert_eq!(err.code(), "AUDIO_006");
        assert_eq!(err.category(), "playback");
    }

    #[test]
    fn test_permission_category() {
        assert_eq!(VoiceError::NoDevice.category(), "permission");
        assert_eq!(VoiceError::ResourceBusy.code(), "VOICE_003");
    }
}
