//! wavclip PCM WAV decoder
//!
//! Turns a complete RIFF/WAVE file held in memory into an interleaved buffer
//! of `f32` samples normalized to [-1.0, 1.0].
//!
//! # Overview
//!
//! Decoding runs in two stages:
//!
//! - **Header parsing** reads the fmt fields at their fixed offsets and finds
//!   the data chunk behind the variable-length fmt chunk.
//! - **Sample conversion** decodes 8-bit unsigned, 16-bit, 24-bit or 32-bit
//!   signed little-endian PCM.
//!
//! Compressed formats are not decoded. A format tag other than PCM or
//! extensible is reported as an [`Advisory`] and the payload is still
//! decoded as PCM.
//!
//! # Example
//!
//! ```no_run
//! use wavclip_decoder::{decode, load_from_file, LoadOptions};
//!
//! let bytes = std::fs::read("click.wav")?;
//! let decoded = decode(&bytes, "click")?;
//! println!(
//!     "{} Hz, {} channels, {} frames",
//!     decoded.buffer.sample_rate(),
//!     decoded.buffer.channel_count(),
//!     decoded.buffer.frame_count()
//! );
//!
//! let _trimmed = load_from_file("click.wav", &LoadOptions::default().with_offset_samples(64))?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Determinism
//!
//! Decoding is pure: the same bytes always produce bit-identical samples,
//! which [`DecodedAudioBuffer::sample_hash`] makes easy to check.

pub mod advisory;
pub mod buffer;
pub mod decode;
pub mod error;
pub mod format;
pub mod header;
pub mod loader;
pub mod reader;
pub mod sample;
pub mod source;

pub use advisory::Advisory;
pub use buffer::{BufferSummary, DecodedAudioBuffer};
pub use decode::{decode, Decoded};
pub use error::{DecodeError, DecodeResult, LoadError, SourceError};
pub use format::{BitDepth, DataChunkLocation, FormatDescriptor, FormatTag};
pub use header::{parse_header, ParsedHeader, MIN_HEADER_LEN};
pub use loader::{
    load_from_embedded, load_from_file, load_from_memory, load_from_source, LoadOptions,
    DEFAULT_CLIP_NAME,
};
pub use reader::ByteReader;
pub use sample::{convert_samples, SampleEncoding};
pub use source::{ByteSource, EmbeddedSource, FileSource};
