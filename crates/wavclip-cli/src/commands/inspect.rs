//! Inspect command implementation
//!
//! Parses a WAV header without decoding samples and prints the format fields,
//! the data chunk location and any advisories.

use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;
use std::process::ExitCode;

use wavclip_decoder::{parse_header, ParsedHeader};

use super::json_output::{error_codes, HeaderReport, InspectOutput, JsonError, JsonWarning};
use super::reporting;

/// Run the inspect command
///
/// # Arguments
/// * `input` - Path to the WAV file
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 on success, 1 on error
pub fn run(input: &str, json_output: bool) -> Result<ExitCode> {
    if json_output {
        run_json(input)
    } else {
        run_human(input)
    }
}

fn run_human(input: &str) -> Result<ExitCode> {
    let bytes = fs::read(input).with_context(|| format!("Failed to read file: {}", input))?;
    let header = parse_header(&bytes).with_context(|| format!("Failed to parse {}", input))?;

    println!("{} {}", "Inspecting:".cyan().bold(), input);
    print_header(&header);
    reporting::print_advisories(&header.advisories);

    Ok(ExitCode::SUCCESS)
}

fn run_json(input: &str) -> Result<ExitCode> {
    let bytes = match fs::read(input) {
        Ok(bytes) => bytes,
        Err(e) => {
            let error = JsonError::new(error_codes::FILE_READ, format!("Failed to read file: {}", e))
                .with_file(input);
            return reporting::emit_json(&InspectOutput::failure(vec![error]), false);
        }
    };

    let output = match parse_header(&bytes) {
        Ok(header) => InspectOutput::success(
            HeaderReport::new(&header.format, header.data.offset, header.data.declared_size),
            header.advisories.iter().map(JsonWarning::from).collect(),
        ),
        Err(e) => InspectOutput::failure(vec![JsonError::from(&e).with_file(input)]),
    };
    let success = output.success;
    reporting::emit_json(&output, success)
}

fn print_header(header: &ParsedHeader) {
    let format = &header.format;
    let tag_name = if format.format_tag.name().is_empty() {
        "unknown".dimmed().to_string()
    } else {
        format.format_tag.name().to_string()
    };

    println!(
        "  {} {} ({})",
        "Format:".dimmed(),
        tag_name,
        format.format_tag.code()
    );
    println!("  {} {}", "Channels:".dimmed(), format.channel_count);
    println!("  {} {} Hz", "Sample rate:".dimmed(), format.sample_rate);
    println!("  {} {}", "Bit depth:".dimmed(), format.bit_depth);
    println!(
        "  {} {} bytes",
        "fmt chunk:".dimmed(),
        format.format_subchunk_size
    );
    println!(
        "  {} {} bytes at offset {}",
        "data chunk:".dimmed(),
        header.data.declared_size,
        header.data.samples_start()
    );
}
