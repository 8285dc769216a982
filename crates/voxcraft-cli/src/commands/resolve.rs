//! Resolve command implementation
//!
//! Shows which system voice a cloned profile with the given name speaks with.

use anyhow::{Context, Result};
use colored::Colorize;
use serde::Serialize;
use std::process::ExitCode;

use voxcraft_voice::{name_hash, VoiceRegistry, VoiceResult};

use super::json_output::{JsonError, JsonOutput};

/// Result payload for `resolve --json`.
#[derive(Debug, PartialEq, Serialize)]
pub struct ResolveResult {
    /// Display name, trimmed.
    pub name: String,
    /// 32-bit name hash.
    pub hash: i32,
    /// Catalog index.
    pub index: usize,
    /// Resolved system voice id.
    pub voice: String,
}

/// Resolves `name` against the built-in catalog.
///
/// Blank names fail with `EmptyProfileName`, as they do on profile creation.
pub fn resolve_name(name: &str) -> VoiceResult<ResolveResult> {
    let registry = VoiceRegistry::new();
    let voice = registry.resolve_name(name)?;
    let name = name.trim();
    let index = registry
        .system_voices()
        .iter()
        .position(|v| v.id == voice)
        .unwrap_or(0);

    Ok(ResolveResult {
        name: name.to_string(),
        hash: name_hash(name),
        index,
        voice: voice.to_string(),
    })
}

/// Run the resolve command
pub fn run(name: &str, json_output: bool) -> Result<ExitCode> {
    let result = match resolve_name(name) {
        Ok(result) => result,
        Err(e) if json_output => {
            JsonOutput::<ResolveResult>::failure(vec![JsonError::from_coded(&e)]).print()?;
            return Ok(ExitCode::from(1));
        }
        Err(e) => return Err(e).with_context(|| format!("Cannot resolve {:?}", name)),
    };

    if json_output {
        JsonOutput::success(result).print()?;
    } else {
        println!(
            "{} {} {}",
            format!("{:?}", result.name).bold(),
            "->".dimmed(),
            result.voice.green().bold()
        );
        println!(
            "  {} {} (index {})",
            "hash:".dimmed(),
            result.hash,
            result.index
        );
    }

    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use voxcraft_voice::VoiceError;

    #[test]
    fn test_resolve_known_names() {
        assert_eq!(
            resolve_name("James Personal Voice").unwrap(),
            ResolveResult {
                name: "James Personal Voice".to_string(),
                hash: -2138891826,
                index: 1,
                voice: "Charon".to_string(),
            }
        );
        assert_eq!(resolve_name("Ava").unwrap().voice, "Puck");
        assert_eq!(resolve_name("My Voice").unwrap().index, 4);
    }

    #[test]
    fn test_resolve_trims_like_profile_creation() {
        let padded = resolve_name(" Ava ").unwrap();
        assert_eq!(padded, resolve_name("Ava").unwrap());
        assert_eq!(padded.name, "Ava");
        assert_eq!(padded.voice, "Puck");
    }

    #[test]
    fn test_resolve_blank_name_rejected() {
        for name in ["", "   ", "\t\n"] {
            assert!(matches!(
                resolve_name(name).unwrap_err(),
                VoiceError::EmptyProfileName
            ));
        }
        assert_eq!(run(" ", true).unwrap(), ExitCode::from(1));
        assert!(run("", false).is_err());
    }
}
