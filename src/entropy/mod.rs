//! Entropy acquisition with graceful degradation.
//!
//! Bytes are requested from a ranked chain of providers:
//!
//! ```text
//! ANU quantum vacuum → Random.org atmospheric → local ChaCha20
//! ```
//!
//! The physical services are best-effort. Their failures are logged and
//! recorded on the returned [`ByteStream`], never returned as errors.

pub mod anu;
mod local;
mod provider;
pub mod random_org;
mod source;
mod stream;

pub use anu::AnuQuantumProvider;
pub use local::LocalCsprng;
pub use provider::{EntropyProvider, ProviderError, ScriptedProvider};
pub use random_org::RandomOrgProvider;
pub use source::{EntropyError, EntropySource, EntropyStats};
pub use stream::{ByteStream, ProviderFailure, SourceInfo};
