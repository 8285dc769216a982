//! Voices command implementation

use anyhow::Result;
use colored::Colorize;
use std::process::ExitCode;

use voxcraft_voice::VoiceRegistry;

use super::json_output::JsonOutput;

/// Run the voices command: lists the system catalog in resolution order.
pub fn run(json_output: bool) -> Result<ExitCode> {
    let registry = VoiceRegistry::new();

    if json_output {
        JsonOutput::success(registry.system_voices()).print()?;
        return Ok(ExitCode::SUCCESS);
    }

    println!("{}", "System voices:".cyan().bold());
    for (index, voice) in registry.system_voices().iter().enumerate() {
        println!(
            "  {} {:<8} {}",
            format!("[{}]", index).dimmed(),
            voice.id.bold(),
            voice.tags.join(", ").dimmed()
        );
    }

    Ok(ExitCode::SUCCESS)
}
