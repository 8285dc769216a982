//! Core WAV writing.

use std::io::{self, Write};

use crate::format::AudioFormat;

/// Size of the canonical PCM WAV header.
pub const WAV_HEADER_LEN: usize = 44;

/// Writes a complete WAV file to a writer.
///
/// # Arguments
/// * `writer` - Output writer
/// * `format` - Sample rate and channel count for the `fmt ` chunk
/// * `pcm_data` - Raw PCM16 payload, written unchanged
pub fn write_wav<W: Write>(writer: &mut W, format: &AudioFormat, pcm_data: &[u8]) -> io::Result<()> {
    writer.write_all(&header(format, pcm_data.len()))?;
    writer.write_all(pcm_data)
}

/// Encodes PCM16 bytes into a WAV container of exactly `44 + pcm_data.len()` bytes.
///
/// Never fails: any payload length is accepted, including zero and odd lengths.
pub fn encode_wav(pcm_data: &[u8], format: &AudioFormat) -> Vec<u8> {
    let mut buffer = Vec::with_capacity(WAV_HEADER_LEN + pcm_data.len());
    buffer.extend_from_slice(&header(format, pcm_data.len()));
    buffer.extend_from_slice(pcm_data);
    buffer
}

/// Encodes synthesis output (24 kHz mono).
pub fn encode_synthesis_wav(pcm_data: &[u8]) -> Vec<u8> {
    encode_wav(pcm_data, &AudioFormat::synthesis())
}

fn header(format: &AudioFormat, data_len: usize) -> [u8; WAV_HEADER_LEN] {
    let data_size = data_len as u32;
    let block_align = format.channels.wrapping_mul(2);

    let mut header = [0u8; WAV_HEADER_LEN];
    let mut pos = 0;
    let mut put = |bytes: &[u8]| {
        header[pos..pos + bytes.len()].copy_from_slice(bytes);
        pos += bytes.len();
    };

    // RIFF header
    put(b"RIFF");
    put(&data_size.wrapping_add(36).to_le_bytes());
    put(b"WAVE");

    // fmt chunk
    put(b"fmt ");
    put(&16u32.to_le_bytes());
    put(&1u16.to_le_bytes()); // PCM
    put(&format.channels.to_le_bytes());
    put(&format.sample_rate.to_le_bytes());
    put(&format.byte_rate().to_le_bytes());
    put(&block_align.to_le_bytes());
    put(&16u16.to_le_bytes());

    // data chunk
    put(b"data");
    put(&data_size.to_le_bytes());

    header
}
