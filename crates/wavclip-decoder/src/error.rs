//! Error types for WAV decoding and clip loading.

use thiserror::Error;

/// Result type for decode operations.
pub type DecodeResult<T> = Result<T, DecodeError>;

/// Errors that abort a decode call.
///
/// No partial buffer is ever returned alongside one of these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The buffer is too short for a required field, or a field holds an
    /// impossible value.
    #[error("malformed WAV header at offset {offset}: {reason}")]
    MalformedHeader {
        /// What went wrong.
        reason: String,
        /// Byte offset of the offending field.
        offset: usize,
    },

    /// Bit depth outside {8, 16, 24, 32}.
    #[error("{bit_depth} bit depth is not supported (expected 8, 16, 24 or 32)")]
    UnsupportedBitDepth {
        /// The declared bit depth.
        bit_depth: u16,
    },

    /// The data chunk size is zero, disagrees with the header, or runs past
    /// the end of the buffer.
    #[error("data chunk size mismatch at offset {offset}: expected {expected} bytes, found {actual}")]
    DataSizeMismatch {
        /// Size the chunk claims.
        expected: u64,
        /// Size actually observed.
        actual: u64,
        /// Offset of the data size field.
        offset: usize,
    },
}

impl DecodeError {
    /// Creates a malformed header error for a field that runs past the end
    /// of the buffer.
    pub fn truncated(field: &str, offset: usize, needed: usize, available: usize) -> Self {
        Self::MalformedHeader {
            reason: format!(
                "{} needs {} bytes but the buffer is only {} bytes long",
                field,
                needed,
                available
            ),
            offset,
        }
    }

    /// Creates a malformed header error for a field with an impossible value.
    pub fn malformed(reason: impl Into<String>, offset: usize) -> Self {
        Self::MalformedHeader {
            reason: reason.into(),
            offset,
        }
    }

    /// Stable error code for reporting.
    pub fn code(&self) -> &'static str {
        match self {
            DecodeError::MalformedHeader { .. } => "WAV_001",
            DecodeError::UnsupportedBitDepth { .. } => "WAV_002",
            DecodeError::DataSizeMismatch { .. } => "WAV_003",
        }
    }

    /// Error category for grouping.
    pub fn category(&self) -> &'static str {
        "wav"
    }
}

/// Errors raised while fetching bytes from a source.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The identifier was empty or whitespace.
    #[error("source identifier cannot be empty")]
    EmptyPath,

    /// Nothing exists under the identifier.
    #[error("{id} not found")]
    NotFound {
        /// The identifier that was looked up.
        id: String,
    },

    /// I/O error while reading.
    #[error("failed to read {id}: {source}")]
    Io {
        /// The identifier being read.
        id: String,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
}

impl SourceError {
    /// Stable error code for reporting.
    pub fn code(&self) -> &'static str {
        match self {
            SourceError::EmptyPath => "SRC_001",
            SourceError::NotFound { .. } => "SRC_002",
            SourceError::Io { .. } => "SRC_003",
        }
    }
}

/// Errors from the clip loader: either the bytes could not be fetched or
/// they could not be decoded.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Byte source failure.
    #[error(transparent)]
    Source(#[from] SourceError),

    /// Decoder failure.
    #[error(transparent)]
    Decode(#[from] DecodeError),
}

impl LoadError {
    /// Stable error code of the wrapped error.
    pub fn code(&self) -> &'static str {
        match self {
            LoadError::Source(e) => e.code(),
            LoadError::Decode(e) => e.code(),
        }
    }
}
