//! Inspect command implementation
//!
//! Prints the header fields of a stored WAV asset.

use anyhow::{Context, Result};
use colored::Colorize;
use serde::Serialize;
use std::fs;
use std::process::ExitCode;

use voxcraft_audio::extract_pcm_data;
use voxcraft_audio::wav::{read_wav_header, WavInfo};

use super::json_output::{JsonError, JsonOutput};

/// Result payload for `inspect --json`.
#[derive(Debug, Serialize)]
pub struct InspectResult {
    /// Inspected file.
    pub file: String,
    /// Parsed header.
    #[serde(flatten)]
    pub info: WavInfo,
    /// Whether the payload is 16-bit integer PCM.
    pub is_pcm16: bool,
    /// Duration in seconds.
    pub duration_seconds: f64,
    /// BLAKE3 hash of the data chunk.
    pub pcm_hash: String,
}

/// Run the inspect command
pub fn run(input: &str, json_output: bool) -> Result<ExitCode> {
    let data = fs::read(input).with_context(|| format!("Failed to read WAV: {}", input))?;

    let info = match read_wav_header(&data) {
        Ok(info) => info,
        Err(e) if json_output => {
            let output: JsonOutput<InspectResult> =
                JsonOutput::failure(vec![JsonError::from_coded(&e).with_file(input)]);
            output.print()?;
            return Ok(ExitCode::from(1));
        }
        Err(e) => return Err(e).with_context(|| format!("Not a WAV file: {}", input)),
    };

    let pcm = extract_pcm_data(&data).unwrap_or_default();
    let result = InspectResult {
        file: input.to_string(),
        is_pcm16: info.is_pcm16(),
        duration_seconds: info.duration_seconds(),
        pcm_hash: blake3::hash(pcm).to_hex().to_string(),
        info,
    };

    if json_output {
        JsonOutput::success(result).print()?;
    } else {
        print_human(&result);
    }

    Ok(ExitCode::SUCCESS)
}

fn print_human(result: &InspectResult) {
    let info = &result.info;
    println!("{} {}", "WAV:".cyan().bold(), result.file);
    println!(
        "  {} {}{}",
        "Encoding:".dimmed(),
        info.audio_format,
        if result.is_pcm16 {
            " (PCM16)".green().to_string()
        } else {
            " (not PCM16)".yellow().to_string()
        }
    );
    println!("  {} {}", "Channels:".dimmed(), info.channels);
    println!("  {} {} Hz", "Sample rate:".dimmed(), info.sample_rate);
    println!("  {} {}", "Byte rate:".dimmed(), info.byte_rate);
    println!("  {} {}", "Block align:".dimmed(), info.block_align);
    println!("  {} {}", "Bits:".dimmed(), info.bits_per_sample);
    println!(
        "  {} {} bytes, {} frames ({:.3}s)",
        "Data:".dimmed(),
        info.data_len,
        info.frame_count(),
        result.duration_seconds
    );
    println!("  {} {}", "PCM hash:".dimmed(), &result.pcm_hash[..16]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;
    use voxcraft_audio::encode_synthesis_wav;

    #[test]
    fn test_inspect_valid_wav() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("a.wav");
        fs::write(&path, encode_synthesis_wav(&[0u8; 480])).unwrap();

        let code = run(path.to_str().unwrap(), true).unwrap();
        assert_eq!(code, ExitCode::SUCCESS);
        let code = run(path.to_str().unwrap(), false).unwrap();
        assert_eq!(code, ExitCode::SUCCESS);
    }

    #[test]
    fn test_inspect_garbage() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("a.wav");
        fs::write(&path, b"definitely not riff").unwrap();

        assert_eq!(run(path.to_str().unwrap(), true).unwrap(), ExitCode::from(1));
        assert!(run(path.to_str().unwrap(), false).is_err());
    }
}
