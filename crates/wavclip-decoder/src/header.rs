//! RIFF/WAVE header parsing.
//!
//! Field positions are fixed except for the data chunk, which follows the
//! variable-length fmt chunk:
//!
//! | Offset | Field | Width |
//! |---|---|---|
//! | 16 | fmt chunk size | 4 |
//! | 20 | format tag | 2 |
//! | 22 | channel count | 2 |
//! | 24 | sample rate | 4 |
//! | 34 | bit depth | 2 |
//! | `16 + 4 + fmt size + 4` | data chunk size | 4 |

use crate::advisory::Advisory;
use crate::error::{DecodeError, DecodeResult};
use crate::format::{BitDepth, DataChunkLocation, FormatDescriptor, FormatTag};
use crate::reader::ByteReader;

/// Smallest buffer that can hold every fixed header field.
pub const MIN_HEADER_LEN: usize = 36;

const FMT_SIZE_OFFSET: usize = 16;
const FORMAT_TAG_OFFSET: usize = 20;
const CHANNELS_OFFSET: usize = 22;
const SAMPLE_RATE_OFFSET: usize = 24;
const BIT_DEPTH_OFFSET: usize = 34;

/// Header parse result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedHeader {
    /// fmt chunk metadata.
    pub format: FormatDescriptor,
    /// Data chunk position and declared size.
    pub data: DataChunkLocation,
    /// Non-fatal conditions.
    pub advisories: Vec<Advisory>,
}

/// Parses the format metadata and locates the data chunk.
///
/// # Arguments
/// * `bytes` - Complete WAV file bytes
///
/// # Returns
/// The parsed header, or an error if a field is out of bounds, holds an
/// impossible value, or the bit depth is unsupported
pub fn parse_header(bytes: &[u8]) -> DecodeResult<ParsedHeader> {
    if bytes.len() < MIN_HEADER_LEN {
        return Err(DecodeError::truncated(
            "fixed WAV header",
            0,
            MIN_HEADER_LEN,
            bytes.len(),
        ));
    }

    let reader = ByteReader::new(bytes);
    let mut advisories = Vec::new();

    if !reader.has_tag(0, b"RIFF") {
        advisories.push(Advisory::MissingRiffMarker);
    }
    if !reader.has_tag(8, b"WAVE") {
        advisories.push(Advisory::MissingWaveMarker);
    }

    let format_subchunk_size = reader.read_u32(FMT_SIZE_OFFSET, "fmt chunk size")?;
    let format_tag = FormatTag::from_code(reader.read_u16(FORMAT_TAG_OFFSET, "format tag")?);
    let channel_count = reader.read_u16(CHANNELS_OFFSET, "channel count")?;
    let sample_rate = reader.read_u32(SAMPLE_RATE_OFFSET, "sample rate")?;
    let bits = reader.read_u16(BIT_DEPTH_OFFSET, "bit depth")?;

    let bit_depth = BitDepth::try_from(bits)?;

    if channel_count == 0 {
        return Err(DecodeError::malformed("channel count is zero", CHANNELS_OFFSET));
    }
    if sample_rate == 0 {
        return Err(DecodeError::malformed("sample rate is zero", SAMPLE_RATE_OFFSET));
    }

    if !format_tag.is_supported() {
        advisories.push(Advisory::UnsupportedFormatTag {
            code: format_tag.code(),
            name: format_tag.name(),
        });
    }

    // fixed header + fmt size field + fmt body + data chunk id
    let data_offset = (FMT_SIZE_OFFSET + 4)
        .checked_add(format_subchunk_size as usize)
        .and_then(|offset| offset.checked_add(4))
        .ok_or_else(|| {
            DecodeError::malformed(
                format!("fmt chunk size {} overflows the buffer", format_subchunk_size),
                FMT_SIZE_OFFSET,
            )
        })?;
    let declared_size = reader.read_u32(data_offset, "data chunk size")?;

    tracing::debug!(
        format_tag = %format_tag,
        channel_count,
        sample_rate,
        bit_depth = bits,
        format_subchunk_size,
        data_offset,
        declared_size,
        "parsed wav header"
    );

    Ok(ParsedHeader {
        format: FormatDescriptor {
            format_tag,
            channel_count,
            sample_rate,
            bit_depth,
            format_subchunk_size,
        },
        data: DataChunkLocation {
            offset: data_offset,
            declared_size,
        },
        advisories,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn header(format_tag: u16, channels: u16, sample_rate: u32, bits: u16, fmt_size: u32) -> Vec<u8> {
        let block_align = channels * (bits / 8).max(1);
        let mut wav = Vec::new();
        wav.extend_from_slice(b"RIFF");
        wav.extend_from_slice(&36u32.to_le_bytes());
        wav.extend_from_slice(b"WAVE");
        wav.extend_from_slice(b"fmt ");
        wav.extend_from_slice(&fmt_size.to_le_bytes());
        wav.extend_from_slice(&format_tag.to_le_bytes());
        wav.extend_from_slice(&channels.to_le_bytes());
        wav.extend_from_slice(&sample_rate.to_le_bytes());
        wav.extend_from_slice(&(sample_rate * block_align as u32).to_le_bytes());
        wav.extend_from_slice(&block_align.to_le_bytes());
        wav.extend_from_slice(&bits.to_le_bytes());
        // pad the fmt body out to fmt_size
        wav.resize(20 + fmt_size as usize, 0);
        wav.extend_from_slice(b"data");
        wav.extend_from_slice(&0u32.to_le_bytes());
        wav
    }

    #[test]
    fn test_parse_pcm_header() {
        let bytes = header(1, 2, 44100, 16, 16);
        let parsed = parse_header(&bytes).unwrap();

        assert_eq!(
            parsed.format,
            FormatDescriptor {
                format_tag: FormatTag::Pcm,
                channel_count: 2,
                sample_rate: 44100,
                bit_depth: BitDepth::Sixteen,
                format_subchunk_size: 16,
            }
        );
        assert_eq!(parsed.data.offset, 40);
        assert_eq!(parsed.data.declared_size, 0);
        assert!(parsed.advisories.is_empty());
    }

    #[test]
    fn test_data_offset_follows_fmt_size() {
        // Extensible headers carry a 40-byte fmt body.
        let bytes = header(0xFFFE, 1, 48000, 24, 40);
        let parsed = parse_header(&bytes).unwrap();
        assert_eq!(parsed.format.format_tag, FormatTag::Extensible);
        assert_eq!(parsed.data.offset, 16 + 4 + 40 + 4);
        assert!(parsed.advisories.is_empty());
    }

    #[test]
    fn test_unknown_tag_is_advisory_not_error() {
        let bytes = header(3, 1, 8000, 32, 16);
        let parsed = parse_header(&bytes).unwrap();
        assert_eq!(
            parsed.advisories,
            vec![Advisory::UnsupportedFormatTag {
                code: 3,
                name: "IEEE",
            }]
        );
    }

    #[test]
    fn test_missing_markers_are_advisories() {
        let mut bytes = header(1, 1, 8000, 8, 16);
        bytes[0..4].copy_from_slice(b"RIFX");
        bytes[8..12].copy_from_slice(b"AVI ");
        let parsed = parse_header(&bytes).unwrap();
        assert_eq!(
            parsed.advisories,
            vec![Advisory::MissingRiffMarker, Advisory::MissingWaveMarker]
        );
    }

    #[test]
    fn test_short_buffer_is_malformed() {
        let bytes = header(1, 1, 8000, 16, 16);
        for len in [0, 20, 35] {
            let err = parse_header(&bytes[..len]).unwrap_err();
            assert!(matches!(err, DecodeError::MalformedHeader { offset: 0, .. }));
        }
    }

    #[test]
    fn test_missing_data_size_is_malformed() {
        let bytes = header(1, 1, 8000, 16, 16);
        let err = parse_header(&bytes[..40]).unwrap_err();
        assert!(matches!(err, DecodeError::MalformedHeader { offset: 40, .. }));
    }

    #[test]
    fn test_bit_depth_12_rejected() {
        let bytes = header(1, 1, 8000, 12, 16);
        assert_eq!(
            parse_header(&bytes),
            Err(DecodeError::UnsupportedBitDepth { bit_depth: 12 })
        );
    }

    #[test]
    fn test_zero_channels_rejected() {
        let bytes = header(1, 0, 8000, 16, 16);
        let err = parse_header(&bytes).unwrap_err();
        assert!(matches!(err, DecodeError::MalformedHeader { offset: 22, .. }));
    }

    #[test]
    fn test_zero_sample_rate_rejected() {
        let bytes = header(1, 1, 0, 16, 16);
        let err = parse_header(&bytes).unwrap_err();
        assert!(matches!(err, DecodeError::MalformedHeader { offset: 24, .. }));
    }

    #[test]
    fn test_huge_fmt_size_is_malformed() {
        let mut bytes = header(1, 1, 8000, 16, 16);
        bytes[16..20].copy_from_slice(&u32::MAX.to_le_bytes());
        assert!(matches!(
            parse_header(&bytes),
            Err(DecodeError::MalformedHeader { .. })
        ));
    }
}
