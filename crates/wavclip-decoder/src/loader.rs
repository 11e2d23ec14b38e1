//! Clip loading: fetch bytes, decode, apply the start offset.

use std::path::Path;

use crate::decode::{decode, Decoded};
use crate::error::LoadError;
use crate::source::{ByteSource, EmbeddedSource, FileSource};

/// Name given to clips decoded from memory without an explicit name.
pub const DEFAULT_CLIP_NAME: &str = "wav";

/// Options shared by the load entry points.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadOptions {
    /// Buffer label. Each entry point has its own default.
    pub name: Option<String>,
    /// Leading frames to drop after decoding.
    pub offset_samples: usize,
}

impl LoadOptions {
    /// Sets the buffer label.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the number of leading frames to drop.
    pub fn with_offset_samples(mut self, offset_samples: usize) -> Self {
        self.offset_samples = offset_samples;
        self
    }
}

/// Decodes bytes already in memory. The name defaults to `"wav"`.
pub fn load_from_memory(bytes: &[u8], options: &LoadOptions) -> Result<Decoded, LoadError> {
    let name = options
        .name
        .clone()
        .unwrap_or_else(|| DEFAULT_CLIP_NAME.to_string());
    finish(bytes, name, options.offset_samples)
}

/// Reads and decodes a file. The name defaults to the file stem.
pub fn load_from_file(path: impl AsRef<Path>, options: &LoadOptions) -> Result<Decoded, LoadError> {
    let path = path.as_ref();
    let id = path.to_string_lossy();
    let bytes = FileSource.read(&id)?;
    let name = options.name.clone().unwrap_or_else(|| {
        path.file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| id.to_string())
    });
    finish(&bytes, name, options.offset_samples)
}

/// Reads and decodes an embedded resource. The name defaults to the id.
pub fn load_from_embedded(
    source: &EmbeddedSource,
    id: &str,
    options: &LoadOptions,
) -> Result<Decoded, LoadError> {
    load_from_source(source, id, options)
}

/// Reads and decodes from any source. The name defaults to the id.
pub fn load_from_source<S: ByteSource + ?Sized>(
    source: &S,
    id: &str,
    options: &LoadOptions,
) -> Result<Decoded, LoadError> {
    let bytes = source.read(id)?;
    let name = options.name.clone().unwrap_or_else(|| id.to_string());
    finish(&bytes, name, options.offset_samples)
}

fn finish(bytes: &[u8], name: String, offset_samples: usize) -> Result<Decoded, LoadError> {
    let mut decoded = decode(bytes, name)?;
    if offset_samples > 0 {
        tracing::debug!(offset_samples, name = decoded.buffer.name(), "skipping leading frames");
        decoded.buffer = decoded.buffer.skip_frames(offset_samples);
    }
    Ok(decoded)
}
