//! Machine-readable JSON envelopes for `--json` output.

use serde::Serialize;
use voxcraft_audio::CodedError;

/// One error entry in a JSON envelope.
#[derive(Debug, Clone, Serialize)]
pub struct JsonError {
    /// Stable error code ("AUDIO_001", "CLI_IO", ...).
    pub code: String,
    /// Human-readable message.
    pub message: String,
    /// File the error refers to, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

impl JsonError {
    /// Creates an error entry.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            file: None,
        }
    }

    /// Builds an entry from a library error.
    pub fn from_coded<E: CodedError>(err: &E) -> Self {
        Self::new(err.code(), err.message())
    }

    /// Attaches a file path.
    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }
}

/// CLI-level error codes for failures outside the libraries.
pub mod error_codes {
    /// File could not be read or written.
    pub const IO: &str = "CLI_IO";
}

/// Envelope wrapping a command result.
#[derive(Debug, Serialize)]
pub struct JsonOutput<T: Serialize> {
    /// Whether the command succeeded.
    pub success: bool,
    /// Result payload on success.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<T>,
    /// Errors on failure.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<JsonError>,
}

impl<T: Serialize> JsonOutput<T> {
    /// Successful envelope.
    pub fn success(result: T) -> Self {
        Self {
            success: true,
            result: Some(result),
            errors: Vec::new(),
        }
    }

    /// Failed envelope.
    pub fn failure(errors: Vec<JsonError>) -> Self {
        Self {
            success: false,
            result: None,
            errors,
        }
    }

    /// Prints as pretty JSON on stdout.
    pub fn print(&self) -> anyhow::Result<()> {
        println!("{}", serde_json::to_string_pretty(self)?);
        Ok(())
    }
}
