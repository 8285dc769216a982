//! Requantize command implementation
//!
//! Decodes an uploaded WAV of any supported bit depth and rewrites it as
//! mono PCM16 at its original sample rate.

use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;
use std::process::ExitCode;

use voxcraft_audio::{AudioClip, HoundDecoder};

/// Run the requantize command
pub fn run(input: &str, output: &str) -> Result<ExitCode> {
    let data = fs::read(input).with_context(|| format!("Failed to read upload: {}", input))?;
    let clip = AudioClip::from_upload(&data, &HoundDecoder)
        .with_context(|| format!("Failed to decode upload: {}", input))?;

    let export = clip.to_wav();
    fs::write(output, &export.wav_data)
        .with_context(|| format!("Failed to write WAV: {}", output))?;

    println!("{}", "Requantized to mono PCM16".green().bold());
    println!("  {} {}", "Input:".dimmed(), input);
    println!("  {} {}", "Output:".dimmed(), output);
    println!(
        "  {} {} Hz, {} frames ({:.3}s)",
        "Audio:".dimmed(),
        export.format.sample_rate,
        export.frame_count,
        export.duration_seconds()
    );

    Ok(ExitCode::SUCCESS)
}
