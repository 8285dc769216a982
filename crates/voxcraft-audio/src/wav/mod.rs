//! Deterministic RIFF/WAVE container encoding and parsing.
//!
//! Encoding writes the canonical 44-byte header followed by the PCM payload
//! copied verbatim; nothing is re-quantized and no metadata chunks are added,
//! so equal payloads always produce equal files.

mod export;
mod reader;
mod writer;


pub use export::WavExport;
pub use reader::{decode_wav, extract_pcm_data, read_wav_header, WavInfo};
pub use writer::{encode_synthesis_wav, encode_wav, write_wav, WAV_HEADER_LEN};
