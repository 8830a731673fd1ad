//! Byte stream type carrying acquired entropy with provenance.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Static description of an entropy provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceInfo {
    /// Human-readable source label.
    pub name: &'static str,
    /// Short description of the underlying process.
    pub detail: &'static str,
    /// True when bytes come from a physical noise process.
    pub is_physical: bool,
    /// True when that physical process is quantum mechanical.
    pub is_quantum: bool,
}

/// A provider attempt that failed before the chain moved on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProviderFailure {
    /// Name of the provider that failed.
    pub provider: &'static str,
    /// Rendered failure reason.
    pub reason: String,
}

/// An immutable block of entropy bytes.
///
/// Owned by the call that requested it and dropped once the
/// variation consuming it has been built.
#[derive(Clone)]
pub struct ByteStream {
    bytes: Vec<u8>,
    source: SourceInfo,
    acquired_at: DateTime<Utc>,
    failures: Vec<ProviderFailure>,
}

impl ByteStream {
    /// Creates a new stream stamped with the current time.
    pub fn new(bytes: Vec<u8>, source: SourceInfo, failures: Vec<ProviderFailure>) -> Self {
        Self {
            bytes,
            source,
            acquired_at: Utc::now(),
            failures,
        }
    }

    /// Returns the raw bytes.
    #[inline]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Returns the number of bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns true if the stream holds no bytes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Returns the source that produced these bytes.
    #[inline]
    pub fn source(&self) -> &SourceInfo {
        &self.source
    }

    /// Returns the human-readable source label.
    #[inline]
    pub fn source_name(&self) -> &'static str {
        self.source.name
    }

    /// Returns true if the bytes came from a physical process.
    #[inline]
    pub fn is_physical(&self) -> bool {
        self.source.is_physical
    }

    /// Returns the acquisition timestamp.
    #[inline]
    pub fn acquired_at(&self) -> DateTime<Utc> {
        self.acquired_at
    }

    /// Returns the provider failures seen before this stream was produced.
    #[inline]
    pub fn failures(&self) -> &[ProviderFailure] {
        &self.failures
    }
}

impl std::fmt::Debug for ByteStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ByteStream")
            .field("source", &self.source.name)
            .field("is_physical", &self.source.is_physical)
            .field("len", &self.bytes.len())
            .field("failures", &self.failures.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_SOURCE: SourceInfo = SourceInfo {
        name: "Test",
        detail: "Scripted bytes",
        is_physical: false,
        is_quantum: false,
    };

    #[test]
    fn test_stream_accessors() {
        let stream = ByteStream::new(vec![1, 2, 3], TEST_SOURCE, Vec::new());

        assert_eq!(stream.len(), 3);
        assert_eq!(stream.bytes(), &[1, 2, 3]);
        assert_eq!(stream.source_name(), "Test");
        assert!(!stream.is_physical());
        assert!(stream.failures().is_empty());
    }

    #[test]
    fn test_debug_hides_bytes() {
        let stream = ByteStream::new(vec![0xAB; 64], TEST_SOURCE, Vec::new());
        let rendered = format!("{:?}", stream);

        assert!(rendered.contains("len: 64"));
        assert!(!rendered.contains("171"));
    }
}
