//! Raw PCM block to normalized float conversion.

use byteorder::{ByteOrder, LittleEndian};

use crate::error::{DecodeError, DecodeResult};
use crate::format::{BitDepth, DataChunkLocation};
use crate::reader::ByteReader;

const U8_HALF_RANGE: f32 = u8::MAX as f32 / 2.0;
const I16_FULL_SCALE: f32 = i16::MAX as f32;
const I32_FULL_SCALE: f32 = i32::MAX as f32;

/// Per-bit-depth decoding rule for one single-channel sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleEncoding {
    /// Unsigned 8-bit, centred on 127.5.
    U8,
    /// Signed 16-bit little-endian.
    I16,
    /// Signed 24-bit little-endian, widened by a left shift of 8.
    I24,
    /// Signed 32-bit little-endian.
    I32,
}

impl SampleEncoding {
    /// Bytes consumed per sample.
    pub fn block_size(&self) -> usize {
        match self {
            SampleEncoding::U8 => 1,
            SampleEncoding::I16 => 2,
            SampleEncoding::I24 => 3,
            SampleEncoding::I32 => 4,
        }
    }

    /// Decodes one block of exactly `block_size()` bytes.
    ///
    /// 16-bit output is not clamped, so `0x8000` yields `-32768 / 32767`.
    pub fn decode_block(&self, block: &[u8]) -> f32 {
        debug_assert_eq!(block.len(), self.block_size());
        match self {
            SampleEncoding::U8 => (block[0] as f32 / U8_HALF_RANGE - 1.0).clamp(-1.0, 1.0),
            SampleEncoding::I16 => LittleEndian::read_i16(block) as f32 / I16_FULL_SCALE,
            SampleEncoding::I24 => {
                let widened = [0, block[0], block[1], block[2]];
                i32::from_le_bytes(widened) as f32 / I32_FULL_SCALE
            }
            SampleEncoding::I32 => LittleEndian::read_i32(block) as f32 / I32_FULL_SCALE,
        }
    }
}

impl From<BitDepth> for SampleEncoding {
    fn from(depth: BitDepth) -> Self {
        match depth {
            BitDepth::Eight => SampleEncoding::U8,
            BitDepth::Sixteen => SampleEncoding::I16,
            BitDepth::TwentyFour => SampleEncoding::I24,
            BitDepth::ThirtyTwo => SampleEncoding::I32,
        }
    }
}

/// Converts the data chunk at `location` into normalized samples.
///
/// The size field at `location.offset` is re-read and cross-checked against
/// `location.declared_size`; sample bytes start four bytes later.
///
/// # Returns
/// `data_size / block_size` samples, or `DataSizeMismatch` if the size is
/// zero, disagrees with the declared size, or runs past the buffer
pub fn convert_samples(
    bytes: &[u8],
    location: DataChunkLocation,
    encoding: SampleEncoding,
) -> DecodeResult<Vec<f32>> {
    let reader = ByteReader::new(bytes);
    let data_size = reader.read_u32(location.offset, "data chunk size")?;

    if data_size == 0 || data_size != location.declared_size {
        return Err(DecodeError::DataSizeMismatch {
            expected: location.declared_size as u64,
            actual: data_size as u64,
            offset: location.offset,
        });
    }

    let start = location.samples_start();
    let available = reader.remaining_from(start);
    if data_size as usize > available {
        return Err(DecodeError::DataSizeMismatch {
            expected: data_size as u64,
            actual: available as u64,
            offset: location.offset,
        });
    }

    let data = reader.slice(start, data_size as usize, "sample data")?;
    let block_size = encoding.block_size();
    let sample_count = data.len() / block_size;

    let samples: Vec<f32> = data
        .chunks_exact(block_size)
        .map(|block| encoding.decode_block(block))
        .collect();

    debug_assert_eq!(samples.len(), sample_count);
    Ok(samples)
}
