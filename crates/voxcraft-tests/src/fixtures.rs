//! Synthetic audio and fake collaborators.

use std::cell::RefCell;
use std::collections::BTreeSet;
use std::f32::consts::TAU;
use std::rc::Rc;
use std::sync::Arc;

use voxcraft_audio::{
    encode_base64, samples_to_pcm16, AudioPlatform, AudioResult, AudioSource, PlayableBuffer,
    SourceId, SYNTHESIS_SAMPLE_RATE,
};
use voxcraft_voice::{CaptureDevice, DeviceError};

/// Mono PCM16 sine wave at `freq` Hz.
pub fn sine_pcm16(freq: f32, frames: usize, sample_rate: u32) -> Vec<u8> {
    let samples: Vec<f32> = (0..frames)
        .map(|i| 0.5 * (TAU * freq * i as f32 / sample_rate as f32).sin())
        .collect();
    samples_to_pcm16(&samples)
}

/// Base64 payload of `seconds` of a 440 Hz tone at the synthesis rate.
pub fn synthesis_payload(seconds: u32) -> String {
    let frames = (SYNTHESIS_SAMPLE_RATE * seconds) as usize;
    encode_base64(&sine_pcm16(440.0, frames, SYNTHESIS_SAMPLE_RATE))
}

/// What a [`FakePlatform`] observed.
#[derive(Debug, Default)]
pub struct OutputLog {
    /// Sources started and not yet stopped.
    pub audible: BTreeSet<SourceId>,
    /// Largest number of simultaneously audible sources.
    pub max_audible: usize,
    /// Every source id in creation order.
    pub created: Vec<SourceId>,
    /// Frame count of each created source's buffer.
    pub frames: Vec<usize>,
}

/// Audio output double that records which sources are audible.
#[derive(Debug, Clone, Default)]
pub struct FakePlatform {
    log: Rc<RefCell<OutputLog>>,
}

impl FakePlatform {
    /// Creates a platform with an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Shared handle to the log.
    pub fn log(&self) -> Rc<RefCell<OutputLog>> {
        Rc::clone(&self.log)
    }
}

/// Source produced by [`FakePlatform`].
#[derive(Debug)]
pub struct FakeSource {
    id: SourceId,
    log: Rc<RefCell<OutputLog>>,
}

impl AudioSource for FakeSource {
    fn start(&mut self) -> AudioResult<()> {
        let mut log = self.log.borrow_mut();
        log.audible.insert(self.id);
        log.max_audible = log.max_audible.max(log.audible.len());
        Ok(())
    }

    fn stop(&mut self) -> AudioResult<()> {
        self.log.borrow_mut().audible.remove(&self.id);
        Ok(())
    }
}

impl AudioPlatform for FakePlatform {
    type Source = FakeSource;

    fn create_source(&mut self, buffer: Arc<PlayableBuffer>, id: SourceId) -> AudioResult<FakeSource> {
        let mut log = self.log.borrow_mut();
        log.created.push(id);
        log.frames.push(buffer.frame_count());
        Ok(FakeSource {
            id,
            log: Rc::clone(&self.log),
        })
    }
}

/// Microphone double with a scripted `open` result.
#[derive(Debug, Default)]
pub struct FakeMic {
    /// Error returned by the next `open`, if any.
    pub fail_with: Option<DeviceError>,
    /// Whether the device is currently open.
    pub is_open: bool,
    /// Number of successful opens.
    pub opens: usize,
}

impl FakeMic {
    /// A microphone that opens successfully.
    pub fn new() -> Self {
        Self::default()
    }

    /// A microphone whose `open` fails with `error`.
    pub fn failing(error: DeviceError) -> Self {
        Self {
            fail_with: Some(error),
            ..Self::default()
        }
    }
}

impl CaptureDevice for FakeMic {
    fn open(&mut self) -> Result<(), DeviceError> {
        if let Some(error) = self.fail_with.take() {
            return Err(error);
        }
        self.is_open = true;
        self.opens += 1;
        Ok(())
    }

    fn close(&mut self) {
        self.is_open = false;
    }
}
