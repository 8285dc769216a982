//! Decoding of user-uploaded audio files.
//!
//! Uploads may use any container or codec. Decoding them is delegated to an
//! [`UploadDecoder`]; the result is then re-quantized to mono PCM16 and treated
//! exactly like synthesis output.

use std::io::Cursor;

use crate::error::{AudioError, AudioResult};
use crate::pcm::PlayableBuffer;

/// Generic audio-file decoding capability.
pub trait UploadDecoder {
    /// Decodes a complete file into a playable buffer.
    fn decode(&self, bytes: &[u8]) -> AudioResult<PlayableBuffer>;
}

/// WAV decoder backed by `hound`.
///
/// Handles 8/16/24/32-bit integer PCM and 32-bit float.
#[derive(Debug, Default, Clone, Copy)]
pub struct HoundDecoder;

impl UploadDecoder for HoundDecoder {
    fn decode(&self, bytes: &[u8]) -> AudioResult<PlayableBuffer> {
        let reader = hound::WavReader::new(Cursor::new(bytes))
            .map_err(|e| AudioError::invalid_wav(e.to_string()))?;
        let spec = reader.spec();
        if spec.channels == 0 {
            return Err(AudioError::InvalidChannels { channels: 0 });
        }

        let interleaved: Vec<f32> = match spec.sample_format {
            hound::SampleFormat::Int => {
                if !(1..=32).contains(&spec.bits_per_sample) {
                    return Err(AudioError::invalid_wav(format!(
                        "unsupported bit depth: {}",
                        spec.bits_per_sample
                    )));
                }
                let max_val = (1i64 << (spec.bits_per_sample - 1)) as f32;
                reader
                    .into_samples::<i32>()
                    .map(|s| s.map(|v| v as f32 / max_val))
                    .collect::<Result<_, _>>()
                    .map_err(|e| AudioError::invalid_wav(e.to_string()))?
            }
            hound::SampleFormat::Float => reader
                .into_samples::<f32>()
                .collect::<Result<_, _>>()
                .map_err(|e| AudioError::invalid_wav(e.to_string()))?,
        };

        let channels = spec.channels as usize;
        let frames = interleaved.len() / channels;
        let mut data: Vec<Vec<f32>> = (0..channels).map(|_| Vec::with_capacity(frames)).collect();
        for frame in interleaved.chunks_exact(channels) {
            for (channel, &sample) in data.iter_mut().zip(frame) {
                channel.push(sample);
            }
        }

        tracing::debug!(
            sample_rate = spec.sample_rate,
            channels,
            frames,
            "decoded uploaded WAV"
        );
        PlayableBuffer::from_channels(data, spec.sample_rate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::AudioFormat;
    use crate::pcm::pcm16_values;
    use crate::wav::encode_wav;
    use pretty_assertions::assert_eq;

    fn float_wav(channels: u16, samples: &[f32]) -> Vec<u8> {
        let spec = hound::WavSpec {
            channels,
            sample_rate: 48000,
            bits_per_sample: 32,
            sample_format: hound::SampleFormat::Float,
        };
        let mut cursor = Cursor::new(Vec::new());
        {
            let mut writer = hound::WavWriter::new(&mut cursor, spec).unwrap();
            for &s in samples {
                writer.write_sample(s).unwrap();
            }
            writer.finalize().unwrap();
        }
        cursor.into_inner()
    }

    #[test]
    fn test_decode_pcm16_wav() {
        let values: Vec<i16> = vec![0, 16384, -16384, i16::MIN];
        let pcm: Vec<u8> = values.iter().flat_map(|v| v.to_le_bytes()).collect();
        let wav = encode_wav(&pcm, &AudioFormat::synthesis());

        let buffer = HoundDecoder.decode(&wav).unwrap();
        assert_eq!(buffer.sample_rate(), 24000);
        assert_eq!(buffer.channel(0).unwrap(), &[0.0, 0.5, -0.5, -1.0]);
        assert_eq!(pcm16_values(&buffer.to_mono_pcm16()), vec![0, 16383, -16384, -32768]);
    }

    #[test]
    fn test_decode_float_stereo_keeps_first_channel() {
        let wav = float_wav(2, &[0.25, -0.75, 1.5, 0.0]);
        let buffer = HoundDecoder.decode(&wav).unwrap();

        assert_eq!(buffer.num_channels(), 2);
        assert_eq!(buffer.frame_count(), 2);
        assert_eq!(buffer.channel(1).unwrap(), &[-0.75, 0.0]);
        // 1.5 clamps to full scale on re-quantization.
        assert_eq!(pcm16_values(&buffer.to_mono_pcm16()), vec![8191, 32767]);
    }

    #[test]
    fn test_decode_rejects_garbage() {
        let err = HoundDecoder.decode(b"definitely not audio").unwrap_err();
        assert!(err.is_decode());
    }
}
