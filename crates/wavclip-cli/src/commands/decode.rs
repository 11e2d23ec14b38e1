//! Decode command implementation
//!
//! Decodes a WAV file to normalized samples, applies the start offset and
//! reports frame count, duration, levels and the sample hash.

use anyhow::{Context, Result};
use colored::Colorize;
use std::process::ExitCode;

use wavclip_decoder::{load_from_file, BufferSummary, LoadOptions};

use super::json_output::{DecodeOutput, DecodeReport, JsonError, JsonWarning};
use super::reporting;

/// Run the decode command
///
/// # Arguments
/// * `input` - Path to the WAV file
/// * `name` - Buffer label (defaults to the file stem)
/// * `offset_samples` - Leading frames to drop after decoding
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 on success, 1 on error
pub fn run(
    input: &str,
    name: Option<&str>,
    offset_samples: usize,
    json_output: bool,
) -> Result<ExitCode> {
    let mut options = LoadOptions::default().with_offset_samples(offset_samples);
    if let Some(name) = name {
        options = options.with_name(name);
    }

    if json_output {
        run_json(input, &options)
    } else {
        run_human(input, &options)
    }
}

fn run_human(input: &str, options: &LoadOptions) -> Result<ExitCode> {
    let decoded =
        load_from_file(input, options).with_context(|| format!("Failed to decode {}", input))?;

    println!("{} {}", "Decoded:".cyan().bold(), input);
    println!(
        "  {} {} {} ({})",
        "Format:".dimmed(),
        decoded.format.bit_depth,
        decoded.format.format_tag.name(),
        decoded.format.format_tag.code()
    );
    print_summary(&decoded.buffer.summary(), options.offset_samples);
    reporting::print_advisories(&decoded.advisories);

    Ok(ExitCode::SUCCESS)
}

fn run_json(input: &str, options: &LoadOptions) -> Result<ExitCode> {
    let output = match load_from_file(input, options) {
        Ok(decoded) => DecodeOutput::success(
            DecodeReport::new(&decoded, options.offset_samples),
            decoded.advisories.iter().map(JsonWarning::from).collect(),
        ),
        Err(e) => DecodeOutput::failure(vec![JsonError::from(&e).with_file(input)]),
    };
    let success = output.success;
    reporting::emit_json(&output, success)
}

fn print_summary(summary: &BufferSummary, offset_samples: usize) {
    println!("  {} {}", "Name:".dimmed(), summary.name);
    println!("  {} {}", "Channels:".dimmed(), summary.channels);
    println!("  {} {} Hz", "Sample rate:".dimmed(), summary.sample_rate);
    if offset_samples > 0 {
        println!("  {} {} frames", "Skipped:".dimmed(), offset_samples);
    }
    println!("  {} {}", "Frames:".dimmed(), summary.frame_count);
    println!("  {} {:.3} s", "Duration:".dimmed(), summary.duration_seconds);
    println!("  {} {:.6}", "Peak:".dimmed(), summary.peak);
    println!("  {} {:.6}", "RMS:".dimmed(), summary.rms);
    println!("  {} {}", "Sample hash:".dimmed(), &summary.sample_hash[..16]);
}
