//! wavclip CLI - inspect and decode PCM WAV files
//!
//! This binary wraps the decoder library for quick checks of WAV assets
//! before they are handed to an audio engine.

use clap::{Parser, Subcommand};
use std::process::ExitCode;

use wavclip_cli::commands;
use wavclip_cli::logging::{self, Verbosity};

/// wavclip - PCM WAV decoder
#[derive(Parser)]
#[command(name = "wavclip")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Log decoder progress at info level
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Log parsed header fields at debug level
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the header fields and data chunk location of a WAV file
    Inspect {
        /// Path to the WAV file
        input: String,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Decode a WAV file and report frame count, duration and levels
    Decode {
        /// Path to the WAV file
        input: String,

        /// Buffer name (default: file name without extension)
        #[arg(short, long)]
        name: Option<String>,

        /// Leading frames to skip after decoding
        #[arg(long, default_value_t = 0)]
        offset_samples: usize,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(Verbosity::from_flags(cli.verbose, cli.debug));

    let result = match cli.command {
        Commands::Inspect { input, json } => commands::inspect::run(&input, json),
        Commands::Decode {
            input,
            name,
            offset_samples,
            json,
        } => commands::decode::run(&input, name.as_deref(), offset_samples, json),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
