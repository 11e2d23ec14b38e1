//! Non-fatal conditions noticed during decoding.

use std::fmt;

use serde::Serialize;

/// A warning attached to a successful decode.
///
/// Real-world files often mis-tag their format or omit container markers;
/// these are reported instead of rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Advisory {
    /// Format tag is neither PCM nor extensible. The payload was decoded as
    /// linear PCM anyway and may be noise.
    UnsupportedFormatTag {
        /// Raw tag code.
        code: u16,
        /// Known name for the code, empty if unknown.
        name: &'static str,
    },
    /// Bytes 0..4 are not `RIFF`.
    MissingRiffMarker,
    /// Bytes 8..12 are not `WAVE`.
    MissingWaveMarker,
    /// The sample count was not a multiple of the channel count; the
    /// trailing samples were dropped.
    PartialFrameDropped {
        /// Number of samples discarded.
        samples: usize,
    },
}

impl Advisory {
    /// Stable warning code for reporting.
    pub fn code(&self) -> &'static str {
        match self {
            Advisory::UnsupportedFormatTag { .. } => "WAV_W001",
            Advisory::MissingRiffMarker => "WAV_W002",
            Advisory::MissingWaveMarker => "WAV_W003",
            Advisory::PartialFrameDropped { .. } => "WAV_W004",
        }
    }
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Advisory::UnsupportedFormatTag { code, name } => write!(
                f,
                "detected format code '{}' {}, but only PCM and WaveFormatExtensible uncompressed formats are supported",
                code, name
            ),
            Advisory::MissingRiffMarker => write!(f, "missing RIFF marker at offset 0"),
            Advisory::MissingWaveMarker => write!(f, "missing WAVE marker at offset 8"),
            Advisory::PartialFrameDropped { samples } => {
                write!(f, "dropped {} trailing samples of an incomplete frame", samples)
            }
        }
    }
}
