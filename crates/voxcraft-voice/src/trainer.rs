//! Simulated voice-training collaborator.
//!
//! Real voice cloning is out of scope. The trainer accepts the captured
//! samples, waits a fixed delay so the UI can show progress, and succeeds.

use std::time::Duration;

use voxcraft_audio::PipelineConfig;

use crate::error::VoiceResult;
use crate::session::TrainingSample;

/// Summary of a (simulated) training run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainingReport {
    /// Number of samples submitted.
    pub samples: usize,
    /// Total bytes submitted.
    pub total_bytes: usize,
    /// Time spent "training".
    pub duration: Duration,
}

/// Trainer that always succeeds after a fixed delay.
#[derive(Debug, Clone, Copy)]
pub struct SimulatedTrainer {
    delay: Duration,
}

impl SimulatedTrainer {
    /// Trainer with the given delay.
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// Trainer using `training_delay_ms` from the config.
    pub fn from_config(config: &PipelineConfig) -> Self {
        Self::new(Duration::from_millis(config.training_delay_ms))
    }

    /// Configured delay.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// "Trains" on the samples.
    pub async fn train(&self, samples: &[TrainingSample]) -> VoiceResult<TrainingReport> {
        let total_bytes: usize = samples.iter().map(|s| s.data.len()).sum();
        tracing::info!(samples = samples.len(), total_bytes, "training started");

        tokio::time::sleep(self.delay).await;

        tracing::info!("training finished");
        Ok(TrainingReport {
            samples: samples.len(),
            total_bytes,
            duration: self.delay,
        })
    }
}
