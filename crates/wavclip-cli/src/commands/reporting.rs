use anyhow::Result;
use colored::Colorize;
use serde::Serialize;
use std::process::ExitCode;

use wavclip_decoder::Advisory;

/// Print advisories as yellow warnings. Prints nothing when there are none.
pub(crate) fn print_advisories(advisories: &[Advisory]) {
    if advisories.is_empty() {
        return;
    }
    println!("\n{}", "Warnings:".yellow().bold());
    for advisory in advisories {
        println!("  {} [{}] {}", "!".yellow(), advisory.code(), advisory);
    }
}

/// Print a JSON document to stdout and map success to an exit code.
pub(crate) fn emit_json<T: Serialize>(output: &T, success: bool) -> Result<ExitCode> {
    println!("{}", serde_json::to_string_pretty(output)?);
    Ok(if success {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    })
}
