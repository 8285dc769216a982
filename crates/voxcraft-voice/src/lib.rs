//! voxcraft voice profiles
//!
//! Voice identities for speech synthesis and the capture flow that creates
//! user-declared ("cloned") voices.
//!
//! # Resolution
//!
//! There is no acoustic cloning. A cloned profile is spoken by the system
//! voice its display name hashes to (see [`resolver`]), which makes the
//! mapping stable across sessions without storing it.
//!
//! # Capture
//!
//! [`CaptureRecorder`] is an explicit `Idle`/`Recording` state machine over an
//! exclusive [`CaptureDevice`]. A [`CloneSession`] collects recordings and
//! uploads into one sample list and commits them to a [`VoiceRegistry`].
//! [`RecordingClock`] drives the recorder's elapsed-seconds counter from a
//! tokio interval.
//!
//! ```
//! use voxcraft_voice::{TrainingSample, VoiceRegistry};
//!
//! let mut registry = VoiceRegistry::new();
//! let sample = TrainingSample::uploaded("take1.wav", vec![0; 64]);
//! let profile = registry.create_profile("Ava", &[sample]).unwrap();
//! assert_eq!(registry.resolve(&profile), "Puck");
//! ```

pub mod capture;
pub mod catalog;
pub mod clock;
pub mod error;
pub mod registry;
pub mod resolver;
pub mod session;
pub mod trainer;

pub use capture::{CaptureDevice, CaptureRecorder, ChunkFinalizer, RecorderStatus, WavFinalizer};
pub use catalog::{system_catalog, VoiceCategory, VoiceProfile, SYSTEM_VOICES};
pub use clock::RecordingClock;
pub use error::{DeviceError, VoiceError, VoiceResult};
pub use registry::VoiceRegistry;
pub use resolver::{name_hash, resolve, resolve_index};
pub use session::{CloneSession, SampleSource, TrainingSample};
pub use trainer::{SimulatedTrainer, TrainingReport};
