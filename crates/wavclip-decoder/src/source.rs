//! Byte sources for the clip loader.

use std::collections::BTreeMap;
use std::io;
use std::path::Path;

use crate::error::SourceError;

/// Produces the bytes of a WAV file given an identifier.
pub trait ByteSource {
    /// Reads the full contents behind `id`.
    fn read(&self, id: &str) -> Result<Vec<u8>, SourceError>;
}

/// Reads files from the local filesystem. Identifiers are paths.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileSource;

impl ByteSource for FileSource {
    fn read(&self, id: &str) -> Result<Vec<u8>, SourceError> {
        if id.trim().is_empty() {
            return Err(SourceError::EmptyPath);
        }

        let path = Path::new(id);
        if !path.is_file() {
            return Err(SourceError::NotFound { id: id.to_string() });
        }

        std::fs::read(path).map_err(|source| match source.kind() {
            io::ErrorKind::NotFound => SourceError::NotFound { id: id.to_string() },
            _ => SourceError::Io {
                id: id.to_string(),
                source,
            },
        })
    }
}

/// Registry of blobs compiled into the binary, usually via `include_bytes!`.
#[derive(Debug, Clone, Default)]
pub struct EmbeddedSource {
    resources: BTreeMap<&'static str, &'static [u8]>,
}

impl EmbeddedSource {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a blob under `id`, replacing any earlier one.
    pub fn with_resource(mut self, id: &'static str, bytes: &'static [u8]) -> Self {
        self.resources.insert(id, bytes);
        self
    }

    /// Registered identifiers in sorted order.
    pub fn ids(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.resources.keys().copied()
    }
}

impl ByteSource for EmbeddedSource {
    fn read(&self, id: &str) -> Result<Vec<u8>, SourceError> {
        if id.trim().is_empty() {
            return Err(SourceError::EmptyPath);
        }
        self.resources
            .get(id)
            .map(|bytes| bytes.to_vec())
            .ok_or_else(|| SourceError::NotFound { id: id.to_string() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static BLOB: &[u8] = b"RIFF";

    #[test]
    fn test_embedded_lookup() {
        let source = EmbeddedSource::new().with_resource("sounds/click.wav", BLOB);
        assert_eq!(source.read("sounds/click.wav").unwrap(), b"RIFF".to_vec());
        assert!(matches!(
            source.read("sounds/missing.wav"),
            Err(SourceError::NotFound { .. })
        ));
        assert_eq!(source.ids().collect::<Vec<_>>(), vec!["sounds/click.wav"]);
    }

    #[test]
    fn test_empty_ids_rejected() {
        assert!(matches!(FileSource.read(""), Err(SourceError::EmptyPath)));
        assert!(matches!(FileSource.read("   "), Err(SourceError::EmptyPath)));
        assert!(matches!(
            EmbeddedSource::new().read(""),
            Err(SourceError::EmptyPath)
        ));
    }

    #[test]
    fn test_missing_file() {
        let err = FileSource.read("/definitely/not/here.wav").unwrap_err();
        assert!(matches!(err, SourceError::NotFound { .. }));
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn test_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.wav");
        std::fs::write(&path, b"abc").unwrap();
        assert_eq!(FileSource.read(path.to_str().unwrap()).unwrap(), b"abc".to_vec());
    }
}
