//! WAV format metadata types.

use std::fmt;

use crate::error::DecodeError;

/// WAVE format tag from the fmt sub-chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatTag {
    /// Uncompressed linear PCM (1).
    Pcm,
    /// Microsoft ADPCM (2).
    Adpcm,
    /// IEEE float (3).
    IeeeFloat,
    /// mu-law (7).
    MuLaw,
    /// WAVE_FORMAT_EXTENSIBLE (65534). The sub-format GUID is not inspected;
    /// the payload is assumed to be PCM.
    Extensible,
    /// Any other code.
    Unknown(u16),
}

impl FormatTag {
    /// Numeric code for PCM.
    pub const PCM_CODE: u16 = 1;
    /// Numeric code for WAVE_FORMAT_EXTENSIBLE.
    pub const EXTENSIBLE_CODE: u16 = 0xFFFE;

    /// Maps a raw code to a tag.
    pub fn from_code(code: u16) -> Self {
        match code {
            Self::PCM_CODE => FormatTag::Pcm,
            2 => FormatTag::Adpcm,
            3 => FormatTag::IeeeFloat,
            7 => FormatTag::MuLaw,
            Self::EXTENSIBLE_CODE => FormatTag::Extensible,
            other => {
                tracing::debug!(code = other, "unknown wav format code");
                FormatTag::Unknown(other)
            }
        }
    }

    /// Raw numeric code.
    pub fn code(&self) -> u16 {
        match self {
            FormatTag::Pcm => Self::PCM_CODE,
            FormatTag::Adpcm => 2,
            FormatTag::IeeeFloat => 3,
            FormatTag::MuLaw => 7,
            FormatTag::Extensible => Self::EXTENSIBLE_CODE,
            FormatTag::Unknown(code) => *code,
        }
    }

    /// Display name; empty for unknown codes.
    pub fn name(&self) -> &'static str {
        match self {
            FormatTag::Pcm => "PCM",
            FormatTag::Adpcm => "ADPCM",
            FormatTag::IeeeFloat => "IEEE",
            FormatTag::MuLaw => "mu-law",
            FormatTag::Extensible => "WaveFormatExtensible",
            FormatTag::Unknown(_) => "",
        }
    }

    /// True for the tags this decoder handles: PCM and extensible.
    pub fn is_supported(&self) -> bool {
        matches!(self, FormatTag::Pcm | FormatTag::Extensible)
    }
}

impl fmt::Display for FormatTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatTag::Unknown(code) => write!(f, "{}", code),
            tag => write!(f, "{} ({})", tag.name(), tag.code()),
        }
    }
}

/// Supported PCM bit depths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BitDepth {
    /// 8-bit unsigned.
    Eight,
    /// 16-bit signed.
    Sixteen,
    /// 24-bit signed.
    TwentyFour,
    /// 32-bit signed.
    ThirtyTwo,
}

impl BitDepth {
    /// Bits per sample.
    pub fn bits(&self) -> u16 {
        match self {
            BitDepth::Eight => 8,
            BitDepth::Sixteen => 16,
            BitDepth::TwentyFour => 24,
            BitDepth::ThirtyTwo => 32,
        }
    }

    /// Bytes per single-channel sample.
    pub fn block_size(&self) -> usize {
        self.bits() as usize / 8
    }
}

impl TryFrom<u16> for BitDepth {
    type Error = DecodeError;

    fn try_from(bits: u16) -> Result<Self, Self::Error> {
        match bits {
            8 => Ok(BitDepth::Eight),
            16 => Ok(BitDepth::Sixteen),
            24 => Ok(BitDepth::TwentyFour),
            32 => Ok(BitDepth::ThirtyTwo),
            bit_depth => Err(DecodeError::UnsupportedBitDepth { bit_depth }),
        }
    }
}

impl fmt::Display for BitDepth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-bit", self.bits())
    }
}

/// Parsed fmt sub-chunk fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatDescriptor {
    /// Format tag.
    pub format_tag: FormatTag,
    /// Number of interleaved channels, at least 1.
    pub channel_count: u16,
    /// Sample rate in Hz, non-zero.
    pub sample_rate: u32,
    /// Bits per sample.
    pub bit_depth: BitDepth,
    /// Byte length of the fmt sub-chunk body.
    pub format_subchunk_size: u32,
}

/// Where the sample data lives in the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DataChunkLocation {
    /// Offset of the data size field; sample bytes begin four bytes later.
    pub offset: usize,
    /// Byte length claimed by the data chunk header.
    pub declared_size: u32,
}

impl DataChunkLocation {
    /// Offset of the first sample byte.
    pub fn samples_start(&self) -> usize {
        self.offset + 4
    }
}
