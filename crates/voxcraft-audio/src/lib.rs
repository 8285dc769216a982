//! voxcraft audio pipeline
//!
//! Turns a speech-synthesis service's base64 PCM stream into a playable,
//! persistable and re-exportable audio asset.
//!
//! # Data flow
//!
//! ```text
//! base64 ──codec──► PCM16 bytes ──pcm──► PlayableBuffer ──► PlaybackController
//!                        │
//!                        └──wav──► WAV container ──codec──► data URI ──► storage
//! ```
//!
//! Uploaded files take a side entrance: an [`UploadDecoder`] produces a
//! buffer, which is re-quantized to mono PCM16 and from then on treated like
//! synthesis output.
//!
//! # Determinism
//!
//! Encoding is byte-exact: the WAV payload is the PCM input copied verbatim,
//! and the header depends only on the format and payload length. Decoding and
//! re-quantization use fixed scale factors (`/32768` in, `*32768` or `*32767`
//! out), matching assets produced by earlier versions of the pipeline.
//!
//! # Example
//!
//! ```
//! use voxcraft_audio::{AudioClip, AudioFormat};
//!
//! let clip = AudioClip::from_base64("AAD/fw==", AudioFormat::synthesis()).unwrap();
//! assert_eq!(clip.playable().frame_count(), 2);
//! assert_eq!(clip.to_wav().file_size(), 48);
//! ```

pub mod clip;
pub mod codec;
pub mod config;
pub mod error;
pub mod format;
pub mod pcm;
pub mod playback;
pub mod upload;
pub mod wav;

// Re-export main types at crate root
pub use clip::AudioClip;
pub use codec::{decode_base64, encode_base64, parse_data_uri, wav_data_uri};
pub use config::PipelineConfig;
pub use error::{AudioError, AudioResult, CodedError};
pub use format::{AudioFormat, SYNTHESIS_CHANNELS, SYNTHESIS_SAMPLE_RATE};
pub use pcm::{decode_pcm, decode_synthesis_pcm, samples_to_pcm16, PlayableBuffer, RawAudio};
pub use playback::{AudioPlatform, AudioSource, PlaybackController, SourceId};
pub use upload::{HoundDecoder, UploadDecoder};
pub use wav::{encode_synthesis_wav, encode_wav, extract_pcm_data, WavExport};
