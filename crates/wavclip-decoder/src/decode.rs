//! Decode entry point.

use crate::advisory::Advisory;
use crate::buffer::DecodedAudioBuffer;
use crate::error::DecodeResult;
use crate::format::{DataChunkLocation, FormatDescriptor};
use crate::header::parse_header;
use crate::sample::{convert_samples, SampleEncoding};

/// Result of a successful decode.
#[derive(Debug, Clone, PartialEq)]
pub struct Decoded {
    /// The decoded samples.
    pub buffer: DecodedAudioBuffer,
    /// Header metadata the buffer was decoded with.
    pub format: FormatDescriptor,
    /// Where the sample data was found.
    pub data: DataChunkLocation,
    /// Non-fatal conditions, in the order they were noticed.
    pub advisories: Vec<Advisory>,
}

impl Decoded {
    /// Returns true if nothing unusual was noticed.
    pub fn is_clean(&self) -> bool {
        self.advisories.is_empty()
    }
}

/// Decodes a complete WAV file held in memory.
///
/// # Arguments
/// * `bytes` - Complete WAV file bytes
/// * `name` - Label attached to the output buffer
///
/// # Returns
/// The decoded buffer with its header metadata and any advisories, or the
/// first fatal error
pub fn decode(bytes: &[u8], name: impl Into<String>) -> DecodeResult<Decoded> {
    let header = parse_header(bytes)?;
    let mut advisories = header.advisories;

    let encoding = SampleEncoding::from(header.format.bit_depth);
    let samples = convert_samples(bytes, header.data, encoding)?;

    let (buffer, dropped) = DecodedAudioBuffer::assemble(
        name.into(),
        header.format.sample_rate,
        header.format.channel_count,
        samples,
    );
    if dropped > 0 {
        advisories.push(Advisory::PartialFrameDropped { samples: dropped });
    }

    for advisory in &advisories {
        tracing::warn!(code = advisory.code(), name = buffer.name(), "{}", advisory);
    }

    tracing::debug!(
        name = buffer.name(),
        frames = buffer.frame_count(),
        channels = buffer.channel_count(),
        "decoded wav"
    );

    Ok(Decoded {
        buffer,
        format: header.format,
        data: header.data,
        advisories,
    })
}
