//! JSON output types for machine-readable CLI output.
//!
//! These back the `--json` flag on `inspect` and `decode`.

use serde::{Deserialize, Serialize};
use wavclip_decoder::{Advisory, BufferSummary, DecodeError, Decoded, FormatDescriptor, LoadError};

/// Error codes for CLI-level failures. Decoder failures pass their own
/// codes through (`WAV_xxx`, `SRC_xxx`).
pub mod error_codes {
    /// File could not be read
    pub const FILE_READ: &str = "CLI_001";
}

/// A structured error in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonError {
    /// Stable error code (e.g., "WAV_001", "CLI_001")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Source file path (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

impl JsonError {
    /// Creates a new error with code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            file: None,
        }
    }

    /// Sets the file path for this error.
    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }
}

impl From<&DecodeError> for JsonError {
    fn from(err: &DecodeError) -> Self {
        JsonError::new(err.code(), err.to_string())
    }
}

impl From<&LoadError> for JsonError {
    fn from(err: &LoadError) -> Self {
        JsonError::new(err.code(), err.to_string())
    }
}

/// A structured warning in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonWarning {
    /// Stable warning code (e.g., "WAV_W001")
    pub code: String,
    /// Human-readable warning message
    pub message: String,
}

impl From<&Advisory> for JsonWarning {
    fn from(advisory: &Advisory) -> Self {
        Self {
            code: advisory.code().to_string(),
            message: advisory.to_string(),
        }
    }
}

/// Header fields as reported by `inspect`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HeaderReport {
    /// Raw format tag code
    pub format_tag: u16,
    /// Format tag name (empty for unknown codes)
    pub format_name: String,
    /// Whether the decoder handles this tag natively
    pub format_supported: bool,
    /// Number of channels
    pub channels: u16,
    /// Sample rate in Hz
    pub sample_rate: u32,
    /// Bits per sample
    pub bits_per_sample: u16,
    /// fmt chunk body length in bytes
    pub fmt_chunk_size: u32,
    /// Offset of the data size field
    pub data_offset: usize,
    /// Declared data chunk length in bytes
    pub data_size: u32,
}

impl HeaderReport {
    /// Builds a report from parsed header parts.
    pub fn new(format: &FormatDescriptor, data_offset: usize, data_size: u32) -> Self {
        Self {
            format_tag: format.format_tag.code(),
            format_name: format.format_tag.name().to_string(),
            format_supported: format.format_tag.is_supported(),
            channels: format.channel_count,
            sample_rate: format.sample_rate,
            bits_per_sample: format.bit_depth.bits(),
            fmt_chunk_size: format.format_subchunk_size,
            data_offset,
            data_size,
        }
    }
}

/// JSON output for the `inspect` command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InspectOutput {
    /// Whether the header parsed
    pub success: bool,
    /// Errors encountered
    pub errors: Vec<JsonError>,
    /// Advisories raised while parsing
    pub warnings: Vec<JsonWarning>,
    /// Parsed header (on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<HeaderReport>,
}

impl InspectOutput {
    /// Creates a successful inspect output.
    pub fn success(result: HeaderReport, warnings: Vec<JsonWarning>) -> Self {
        Self {
            success: true,
            errors: Vec::new(),
            warnings,
            result: Some(result),
        }
    }

    /// Creates a failed inspect output.
    pub fn failure(errors: Vec<JsonError>) -> Self {
        Self {
            success: false,
            errors,
            warnings: Vec::new(),
            result: None,
        }
    }
}

/// Decode result details.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecodeReport {
    /// Header the samples were decoded with
    pub header: HeaderReport,
    /// Buffer statistics after the offset was applied
    pub buffer: BufferSummary,
    /// Leading frames dropped by `--offset-samples`
    pub offset_samples: usize,
}

impl DecodeReport {
    /// Builds a report from a loader result.
    pub fn new(decoded: &Decoded, offset_samples: usize) -> Self {
        Self {
            header: HeaderReport::new(&decoded.format, decoded.data.offset, decoded.data.declared_size),
            buffer: decoded.buffer.summary(),
            offset_samples,
        }
    }
}

/// JSON output for the `decode` command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecodeOutput {
    /// Whether decoding succeeded
    pub success: bool,
    /// Errors encountered
    pub errors: Vec<JsonError>,
    /// Advisories raised while decoding
    pub warnings: Vec<JsonWarning>,
    /// Decode details (on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<DecodeReport>,
}

impl DecodeOutput {
    /// Creates a successful decode output.
    pub fn success(result: DecodeReport, warnings: Vec<JsonWarning>) -> Self {
        Self {
            success: true,
            errors: Vec::new(),
            warnings,
            result: Some(result),
        }
    }

    /// Creates a failed decode output.
    pub fn failure(errors: Vec<JsonError>) -> Self {
        Self {
            success: false,
            errors,
            warnings: Vec::new(),
            result: None,
        }
    }
}
