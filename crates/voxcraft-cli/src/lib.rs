//! voxcraft CLI library.
//!
//! Offline tooling over the audio pipeline: turning synthesis payloads into
//! WAV assets, inspecting stored assets, re-quantizing uploads and resolving
//! cloned voice names.

pub mod commands;
pub mod logging;

use std::path::Path;

use anyhow::{Context, Result};
use voxcraft_audio::PipelineConfig;

/// Loads the pipeline config from `path`, or the defaults when absent.
pub fn load_config(path: Option<&str>) -> Result<PipelineConfig> {
    match path {
        Some(path) => {
            let config = PipelineConfig::load(Path::new(path))
                .with_context(|| format!("Failed to load config: {}", path))?;
            tracing::debug!(path, ?config, "loaded config");
            Ok(config)
        }
        None => Ok(PipelineConfig::default()),
    }
}
