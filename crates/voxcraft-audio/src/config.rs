//! Pipeline configuration.
//!
//! Configuration is a small JSON document; every field has a default so an
//! empty object (or no file at all) yields the standard 24 kHz mono pipeline.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::AudioResult;
use crate::format::AudioFormat;

/// Default simulated training delay in milliseconds.
pub const DEFAULT_TRAINING_DELAY_MS: u64 = 1500;

/// Settings for the audio pipeline and voice capture.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PipelineConfig {
    /// Format of synthesis output.
    pub synthesis: AudioFormat,
    /// Format of microphone captures.
    pub capture: AudioFormat,
    /// Artificial delay of the simulated voice trainer.
    pub training_delay_ms: u64,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            synthesis: AudioFormat::synthesis(),
            capture: AudioFormat::synthesis(),
            training_delay_ms: DEFAULT_TRAINING_DELAY_MS,
        }
    }
}

impl PipelineConfig {
    /// Parses and validates a JSON document.
    pub fn from_json(json: &str) -> AudioResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a JSON file.
    pub fn load(path: &Path) -> AudioResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Checks both formats.
    pub fn validate(&self) -> AudioResult<()> {
        self.synthesis.validate()?;
        self.capture.validate()
    }

    /// Serializes to pretty JSON.
    pub fn to_json_pretty(&self) -> AudioResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
