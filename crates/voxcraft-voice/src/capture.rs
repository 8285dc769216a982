//! Microphone capture as an explicit state machine.
//!
//! ```text
//!          start()                 stop()
//!   Idle ───────────► Recording ───────────► Idle  (+ one finished sample)
//!    ▲  open() failed      │ push_chunk(), tick()
//!    └─────────────────────┘ cancel()
//! ```
//!
//! The device is exclusive. It is opened by `start()` and closed on every
//! path out of `Recording`: `stop()` (even when finalization fails),
//! `cancel()`, and dropping the recorder.

use voxcraft_audio::{encode_wav, AudioFormat, RawAudio};

use crate::error::{DeviceError, VoiceError, VoiceResult};
use crate::session::TrainingSample;

/// Exclusive audio input hardware.
pub trait CaptureDevice {
    /// Acquires the device. May prompt for permission.
    fn open(&mut self) -> Result<(), DeviceError>;

    /// Releases the device. Must be safe to call when not open.
    fn close(&mut self);
}

/// Turns the chunks buffered during a recording into one container blob.
pub trait ChunkFinalizer {
    /// Builds the finished blob.
    fn finalize(&self, chunks: &[Vec<u8>]) -> VoiceResult<Vec<u8>>;
}

/// Concatenates PCM16 chunks and wraps them in a WAV container.
#[derive(Debug, Clone, Copy)]
pub struct WavFinalizer {
    format: AudioFormat,
}

impl WavFinalizer {
    /// Finalizer for chunks captured in `format`.
    pub fn new(format: AudioFormat) -> Self {
        Self { format }
    }
}

impl Default for WavFinalizer {
    fn default() -> Self {
        Self::new(AudioFormat::synthesis())
    }
}

impl ChunkFinalizer for WavFinalizer {
    fn finalize(&self, chunks: &[Vec<u8>]) -> VoiceResult<Vec<u8>> {
        let pcm = chunks.concat();
        let raw = RawAudio::new(pcm, self.format)?;
        if raw.frame_count() == 0 {
            return Err(VoiceError::finalize("no audio was captured"));
        }
        Ok(encode_wav(raw.bytes(), &raw.format()))
    }
}

/// Visible recorder state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecorderStatus {
    /// Not recording; the device is released.
    Idle,
    /// Recording; the device is held.
    Recording,
}

/// Transient state of one recording.
#[derive(Debug, Default)]
struct RecordingSession {
    elapsed_seconds: u32,
    chunks: Vec<Vec<u8>>,
}

/// Microphone recorder.
pub struct CaptureRecorder<D: CaptureDevice, F: ChunkFinalizer = WavFinalizer> {
    device: D,
    finalizer: F,
    session: Option<RecordingSession>,
}

impl<D: CaptureDevice> CaptureRecorder<D> {
    /// Recorder producing WAV samples in `format`.
    pub fn new(device: D, format: AudioFormat) -> Self {
        Self::with_finalizer(device, WavFinalizer::new(format))
    }
}

impl<D: CaptureDevice, F: ChunkFinalizer> CaptureRecorder<D, F> {
    /// Recorder with a custom finalizer.
    pub fn with_finalizer(device: D, finalizer: F) -> Self {
        Self {
            device,
            finalizer,
            session: None,
        }
    }

    /// Current state.
    pub fn status(&self) -> RecorderStatus {
        match self.session {
            Some(_) => RecorderStatus::Recording,
            None => RecorderStatus::Idle,
        }
    }

    /// True while recording.
    pub fn is_recording(&self) -> bool {
        self.session.is_some()
    }

    /// Seconds counted by `tick()` during the current recording.
    pub fn elapsed_seconds(&self) -> u32 {
        self.session.as_ref().map_or(0, |s| s.elapsed_seconds)
    }

    /// Number of chunks buffered so far.
    pub fn buffered_chunks(&self) -> usize {
        self.session.as_ref().map_or(0, |s| s.chunks.len())
    }

    /// `Idle -> Recording`.
    ///
    /// # Errors
    /// `ResourceBusy` if already recording (the running recording is left
    /// untouched); `PermissionDenied` or `NoDevice` if the device cannot be
    /// opened, in which case the recorder stays idle.
    pub fn start(&mut self) -> VoiceResult<()> {
        if self.session.is_some() {
            tracing::warn!("rejected start: recording already in progress");
            return Err(VoiceError::ResourceBusy);
        }

        if let Err(e) = self.device.open() {
            tracing::warn!(error = %e, "could not open capture device");
            return Err(e.into());
        }

        tracing::debug!("recording started");
        self.session = Some(RecordingSession::default());
        Ok(())
    }

    /// Buffers a chunk of captured data. Ignored unless recording.
    pub fn push_chunk(&mut self, chunk: Vec<u8>) -> bool {
        match &mut self.session {
            Some(session) if !chunk.is_empty() => {
                session.chunks.push(chunk);
                true
            }
            _ => false,
        }
    }

    /// Advances the elapsed-time counter by one second. Ignored unless recording.
    pub fn tick(&mut self) -> u32 {
        match &mut self.session {
            Some(session) => {
                session.elapsed_seconds += 1;
                session.elapsed_seconds
            }
            None => 0,
        }
    }

    /// `Recording -> Idle`, producing one finished sample.
    ///
    /// The device is released before this returns, whether or not
    /// finalization succeeds.
    ///
    /// # Errors
    /// `NotRecording` when idle; the finalizer's error if the buffered data
    /// cannot be finalized (the buffered data is discarded).
    pub fn stop(&mut self) -> VoiceResult<TrainingSample> {
        let session = self.session.take().ok_or(VoiceError::NotRecording)?;

        let finalized = self.finalizer.finalize(&session.chunks);
        self.device.close();

        match finalized {
            Ok(data) => {
                tracing::debug!(
                    seconds = session.elapsed_seconds,
                    bytes = data.len(),
                    "recording finished"
                );
                Ok(TrainingSample::recorded(data, session.elapsed_seconds))
            }
            Err(e) => {
                tracing::warn!(error = %e, "recording discarded");
                Err(e)
            }
        }
    }

    /// Abandons the current recording, if any, and releases the device.
    pub fn cancel(&mut self) {
        if self.session.take().is_some() {
            tracing::debug!("recording cancelled");
            self.device.close();
        }
    }

    /// The underlying device.
    pub fn device(&self) -> &D {
        &self.device
    }
}

impl<D: CaptureDevice, F: ChunkFinalizer> Drop for CaptureRecorder<D, F> {
    fn drop(&mut self) {
        self.cancel();
    }
}
