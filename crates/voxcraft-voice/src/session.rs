//! Training samples and the profile-composition session.

use chrono::{DateTime, Utc};

use crate::capture::{CaptureDevice, CaptureRecorder, ChunkFinalizer, WavFinalizer};
use crate::catalog::VoiceProfile;
use crate::error::{VoiceError, VoiceResult};
use crate::registry::VoiceRegistry;

/// How a training sample was obtained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SampleSource {
    /// Recorded from the microphone for the given number of seconds.
    Microphone {
        /// Elapsed recording time.
        seconds: u32,
    },
    /// Uploaded as a ready-made file.
    Upload {
        /// Original file name.
        file_name: String,
    },
}

/// An opaque captured-audio blob.
#[derive(Debug, Clone)]
pub struct TrainingSample {
    /// Container bytes (WAV for recordings, anything for uploads).
    pub data: Vec<u8>,
    /// Origin of the blob.
    pub source: SampleSource,
    /// Capture or upload time.
    pub captured_at: DateTime<Utc>,
}

impl TrainingSample {
    /// A finished microphone recording.
    pub fn recorded(data: Vec<u8>, seconds: u32) -> Self {
        Self {
            data,
            source: SampleSource::Microphone { seconds },
            captured_at: Utc::now(),
        }
    }

    /// An uploaded file.
    pub fn uploaded(file_name: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            data,
            source: SampleSource::Upload {
                file_name: file_name.into(),
            },
            captured_at: Utc::now(),
        }
    }

    /// Human-readable label for sample lists.
    pub fn label(&self) -> String {
        match &self.source {
            SampleSource::Microphone { seconds } => format!("Recording ({}s)", seconds),
            SampleSource::Upload { file_name } => file_name.clone(),
        }
    }
}

/// Composes a cloned voice: records or uploads samples, then commits.
///
/// Samples live only as long as the session. Committing registers a profile
/// and drops them; only the profile metadata survives.
pub struct CloneSession<D: CaptureDevice, F: ChunkFinalizer = WavFinalizer> {
    recorder: CaptureRecorder<D, F>,
    samples: Vec<TrainingSample>,
}

impl<D: CaptureDevice, F: ChunkFinalizer> CloneSession<D, F> {
    /// Starts an empty session around a recorder.
    pub fn new(recorder: CaptureRecorder<D, F>) -> Self {
        Self {
            recorder,
            samples: Vec::new(),
        }
    }

    /// Begins a microphone recording.
    pub fn start_recording(&mut self) -> VoiceResult<()> {
        self.recorder.start()
    }

    /// Ends the recording and appends the finished sample.
    pub fn stop_recording(&mut self) -> VoiceResult<&TrainingSample> {
        let sample = self.recorder.stop()?;
        Ok(self.push(sample))
    }

    /// Appends an uploaded file, bypassing the recorder.
    pub fn add_upload(&mut self, file_name: impl Into<String>, data: Vec<u8>) -> &TrainingSample {
        self.push(TrainingSample::uploaded(file_name, data))
    }

    /// Removes a sample by position.
    pub fn remove_sample(&mut self, index: usize) -> VoiceResult<TrainingSample> {
        if index >= self.samples.len() {
            return Err(VoiceError::UnknownSample { index });
        }
        Ok(self.samples.remove(index))
    }

    /// Samples collected so far, oldest first.
    pub fn samples(&self) -> &[TrainingSample] {
        &self.samples
    }

    /// The recorder.
    pub fn recorder(&self) -> &CaptureRecorder<D, F> {
        &self.recorder
    }

    /// Mutable access to the recorder (chunk delivery, ticks).
    pub fn recorder_mut(&mut self) -> &mut CaptureRecorder<D, F> {
        &mut self.recorder
    }

    /// Registers the profile and discards the samples.
    ///
    /// A recording still in progress is cancelled first and does not count
    /// as a sample. On error nothing is discarded so the user can fix the
    /// name or add samples and retry.
    pub fn commit(&mut self, name: &str, registry: &mut VoiceRegistry) -> VoiceResult<VoiceProfile> {
        self.recorder.cancel();
        let profile = registry.create_profile(name, &self.samples)?;
        self.samples.clear();
        Ok(profile)
    }

    /// Abandons the session: cancels any recording and drops all samples.
    pub fn cancel(&mut self) {
        self.recorder.cancel();
        self.samples.clear();
    }

    fn push(&mut self, sample: TrainingSample) -> &TrainingSample {
        tracing::debug!(label = %sample.label(), bytes = sample.data.len(), "sample added");
        self.samples.push(sample);
        &self.samples[self.samples.len() - 1]
    }
}
