//! Export command implementation
//!
//! Turns a base64 synthesis payload (raw PCM16, no header) into a WAV asset
//! or a `data:audio/wav;base64,` URI.

use anyhow::{Context, Result};
use colored::Colorize;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use voxcraft_audio::{AudioClip, AudioFormat, WavExport};

use super::json_output::{error_codes, JsonError, JsonOutput};

/// Result payload for `export --json`.
#[derive(Debug, Serialize)]
pub struct ExportResult {
    /// Written WAV path, if a file was written.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    /// Data URI, if requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_uri: Option<String>,
    /// Payload format.
    pub format: AudioFormat,
    /// Frames in the payload.
    pub frame_count: usize,
    /// Duration in seconds.
    pub duration_seconds: f64,
    /// WAV size in bytes.
    pub file_size: usize,
    /// BLAKE3 hash of the PCM payload.
    pub pcm_hash: String,
}

/// Run the export command
///
/// # Arguments
/// * `input` - File holding the base64 payload
/// * `output` - WAV path (default: input with a `.wav` extension)
/// * `data_uri` - Print a data URI instead of writing a file
/// * `format` - Payload format (from config)
/// * `json_output` - Whether to output machine-readable JSON
pub fn run(
    input: &str,
    output: Option<&str>,
    data_uri: bool,
    format: AudioFormat,
    json_output: bool,
) -> Result<ExitCode> {
    let payload =
        fs::read_to_string(input).with_context(|| format!("Failed to read payload: {}", input))?;

    let clip = match AudioClip::from_base64(&payload, format) {
        Ok(clip) => clip,
        Err(e) if json_output => {
            let output: JsonOutput<ExportResult> =
                JsonOutput::failure(vec![JsonError::from_coded(&e).with_file(input)]);
            output.print()?;
            return Ok(ExitCode::from(1));
        }
        Err(e) => return Err(e).with_context(|| format!("Invalid payload: {}", input)),
    };
    let export = clip.to_wav();

    let written = if data_uri {
        None
    } else {
        let path = output_path(input, output);
        if let Err(e) = fs::write(&path, &export.wav_data) {
            if json_output {
                let error = JsonError::new(error_codes::IO, e.to_string())
                    .with_file(path.display().to_string());
                JsonOutput::<ExportResult>::failure(vec![error]).print()?;
                return Ok(ExitCode::from(1));
            }
            return Err(e).with_context(|| format!("Failed to write WAV: {}", path.display()));
        }
        Some(path)
    };

    let result = export_result(&export, written.as_deref(), data_uri);
    if json_output {
        JsonOutput::success(result).print()?;
    } else {
        print_human(&result);
    }

    Ok(ExitCode::SUCCESS)
}

fn output_path(input: &str, output: Option<&str>) -> PathBuf {
    match output {
        Some(path) => PathBuf::from(path),
        None => Path::new(input).with_extension("wav"),
    }
}

fn export_result(export: &WavExport, written: Option<&Path>, data_uri: bool) -> ExportResult {
    ExportResult {
        output: written.map(|p| p.display().to_string()),
        data_uri: data_uri.then(|| export.to_data_uri()),
        format: export.format,
        frame_count: export.frame_count,
        duration_seconds: export.duration_seconds(),
        file_size: export.file_size(),
        pcm_hash: export.pcm_hash.clone(),
    }
}

fn print_human(result: &ExportResult) {
    if let Some(uri) = &result.data_uri {
        println!("{}", uri);
        return;
    }

    println!("{}", "Exported WAV".green().bold());
    if let Some(path) = &result.output {
        println!("  {} {}", "Output:".dimmed(), path);
    }
    println!(
        "  {} {} Hz, {} ch",
        "Format:".dimmed(),
        result.format.sample_rate,
        result.format.channels
    );
    println!(
        "  {} {} ({:.3}s)",
        "Frames:".dimmed(),
        result.frame_count,
        result.duration_seconds
    );
    println!("  {} {} bytes", "Size:".dimmed(), result.file_size);
    println!("  {} {}", "PCM hash:".dimmed(), &result.pcm_hash[..16]);
}
