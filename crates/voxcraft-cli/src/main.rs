//! voxcraft CLI - offline tools for the speech audio pipeline
//!
//! Exports synthesis payloads as WAV assets, inspects stored assets,
//! re-quantizes uploads and shows how cloned voice names resolve.

use clap::{Parser, Subcommand};
use std::process::ExitCode;

use voxcraft_cli::{commands, load_config, logging};

/// voxcraft - speech audio pipeline tools
#[derive(Parser)]
#[command(name = "voxcraft")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Pipeline config file (JSON)
    #[arg(long, global = true)]
    config: Option<String>,

    /// Enable debug logging (overridden by VOXCRAFT_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a base64 PCM16 synthesis payload into a WAV file
    Export {
        /// File holding the base64 payload
        #[arg(short, long)]
        input: String,

        /// Output WAV path (default: input with .wav extension)
        #[arg(short, long)]
        output: Option<String>,

        /// Print a data:audio/wav URI instead of writing a file
        #[arg(long)]
        data_uri: bool,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Print the header of a WAV file
    Inspect {
        /// WAV file to inspect
        #[arg(short, long)]
        input: String,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Rewrite an uploaded WAV as mono PCM16
    Requantize {
        /// Uploaded WAV file
        #[arg(short, long)]
        input: String,

        /// Output WAV path
        #[arg(short, long)]
        output: String,
    },

    /// List the system voice catalog
    Voices {
        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Show which system voice a cloned voice name resolves to
    Resolve {
        /// Cloned voice display name
        #[arg(short, long)]
        name: String,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = load_config(cli.config.as_deref()).and_then(|config| match cli.command {
        Commands::Export {
            input,
            output,
            data_uri,
            json,
        } => commands::export::run(&input, output.as_deref(), data_uri, config.synthesis, json),
        Commands::Inspect { input, json } => commands::inspect::run(&input, json),
        Commands::Requantize { input, output } => commands::requantize::run(&input, &output),
        Commands::Voices { json } => commands::voices::run(json),
        Commands::Resolve { name, json } => commands::resolve::run(&name, json),
    });

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_export() {
        let cli = Cli::try_parse_from([
            "voxcraft", "export", "--input", "speech.b64", "--output", "speech.wav",
        ])
        .unwrap();
        match cli.command {
            Commands::Export {
                input,
                output,
                data_uri,
                json,
            } => {
                assert_eq!(input, "speech.b64");
                assert_eq!(output.as_deref(), Some("speech.wav"));
                assert!(!data_uri);
                assert!(!json);
            }
            _ => panic!("expected export command"),
        }
    }

    #[test]
    fn test_cli_parses_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "voxcraft",
            "inspect",
            "-i",
            "a.wav",
            "--config",
            "voxcraft.json",
            "--verbose",
        ])
        .unwrap();
        assert_eq!(cli.config.as_deref(), Some("voxcraft.json"));
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Inspect { .. }));
    }

    #[test]
    fn test_cli_parses_resolve() {
        let cli = Cli::try_parse_from(["voxcraft", "resolve", "--name", "Grandma Rose", "--json"])
            .unwrap();
        match cli.command {
            Commands::Resolve { name, json } => {
                assert_eq!(name, "Grandma Rose");
                assert!(json);
            }
            _ => panic!("expected resolve command"),
        }
    }

    #[test]
    fn test_cli_requires_output_for_requantize() {
        let err = Cli::try_parse_from(["voxcraft", "requantize", "--input", "a.wav"])
            .err()
            .unwrap();
        assert!(err.to_string().contains("--output"));
    }
}
