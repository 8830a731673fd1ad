//! Entropy provider abstraction.
//!
//! Each link in the entropy chain implements [`EntropyProvider`]. A
//! scripted implementation is provided for tests and offline demos.

use super::SourceInfo;
use std::collections::VecDeque;
use thiserror::Error;

/// Errors a single provider attempt can produce.
///
/// None of these reach the caller of the entropy chain; they are
/// recorded and the chain advances to the next provider.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// Request could not be sent or the body could not be read.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    /// Non-success HTTP status.
    #[error("unexpected HTTP status {0}")]
    Status(u16),
    /// The service answered but flagged the request as failed.
    #[error("service reported failure")]
    Rejected,
    /// Payload could not be decoded into bytes.
    #[error("malformed payload: {0}")]
    Malformed(String),
    /// Payload length differs from the request.
    #[error("short read: expected {expected} bytes, got {got}")]
    ShortRead {
        /// Bytes requested.
        expected: usize,
        /// Bytes received.
        got: usize,
    },
    /// No more data to hand out.
    #[error("provider exhausted")]
    Exhausted,
}

/// Trait for entropy provider implementations.
pub trait EntropyProvider: Send {
    /// Returns static information about this provider.
    fn info(&self) -> &SourceInfo;

    /// Fetches exactly `count` bytes.
    fn fetch(&mut self, count: usize) -> Result<Vec<u8>, ProviderError>;
}

/// Checks that a payload holds exactly `count` values.
pub(crate) fn check_length(bytes: Vec<u8>, count: usize) -> Result<Vec<u8>, ProviderError> {
    if bytes.len() != count {
        return Err(ProviderError::ShortRead {
            expected: count,
            got: bytes.len(),
        });
    }
    Ok(bytes)
}

/// Provider that replays queued byte blocks.
///
/// Each `fetch` pops the next block, truncated or cycled to the
/// requested length. Once the queue is empty every fetch fails,
/// which lets tests drive the fallback path.
#[derive(Debug)]
pub struct ScriptedProvider {
    info: SourceInfo,
    blocks: VecDeque<Vec<u8>>,
}

impl ScriptedProvider {
    /// Scripted source label.
    pub const INFO: SourceInfo = SourceInfo {
        name: "Scripted",
        detail: "Replayed byte blocks",
        is_physical: true,
        is_quantum: false,
    };

    /// Creates a provider replaying `blocks` in order.
    pub fn new(blocks: impl IntoIterator<Item = Vec<u8>>) -> Self {
        Self {
            info: Self::INFO,
            blocks: blocks.into_iter().collect(),
        }
    }

    /// Overrides the reported source information.
    pub fn with_info(mut self, info: SourceInfo) -> Self {
        self.info = info;
        self
    }

    /// Returns the number of blocks left to replay.
    pub fn remaining(&self) -> usize {
        self.blocks.len()
    }
}

impl EntropyProvider for ScriptedProvider {
    fn info(&self) -> &SourceInfo {
        &self.info
    }

    fn fetch(&mut self, count: usize) -> Result<Vec<u8>, ProviderError> {
        let block = self.blocks.pop_front().ok_or(ProviderError::Exhausted)?;
        if block.is_empty() {
            return Err(ProviderError::Malformed("empty scripted block".into()));
        }
        Ok(block.iter().copied().cycle().take(count).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_replays_in_order() {
        let mut provider = ScriptedProvider::new([vec![1, 2], vec![3]]);

        assert_eq!(provider.fetch(4).unwrap(), vec![1, 2, 1, 2]);
        assert_eq!(provider.fetch(2).unwrap(), vec![3, 3]);
        assert_eq!(provider.remaining(), 0);
    }

    #[test]
    fn test_scripted_exhausted() {
        let mut provider = ScriptedProvider::new(Vec::<Vec<u8>>::new());
        assert!(matches!(provider.fetch(1), Err(ProviderError::Exhausted)));
    }

    #[test]
    fn test_check_length() {
        assert!(check_length(vec![0; 4], 4).is_ok());
        assert!(matches!(
            check_length(vec![0; 3], 4),
            Err(ProviderError::ShortRead { expected: 4, got: 3 })
        ));
    }
}
