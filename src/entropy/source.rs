//! Ordered provider chain with unconditional local fallback.

use super::anu::AnuQuantumProvider;
use super::local::LocalCsprng;
use super::provider::EntropyProvider;
use super::random_org::RandomOrgProvider;
use super::{ByteStream, ProviderFailure};
use crate::config::EntropyConfig;
use reqwest::blocking::Client;
use std::time::Duration;
use thiserror::Error;

/// Errors raised while building an entropy source.
#[derive(Debug, Error)]
pub enum EntropyError {
    /// The HTTP client could not be built.
    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

/// Counters describing how the chain has been served so far.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EntropyStats {
    /// Successful calls to a physical provider.
    pub physical_calls: u64,
    /// Acquisitions served by the local fallback.
    pub fallback_calls: u64,
    /// Individual provider attempts that failed.
    pub provider_failures: u64,
}

/// Entropy source trying physical providers in priority order.
///
/// `acquire` always succeeds: the local CSPRNG is the terminal link
/// and is not part of the fallible provider list.
pub struct EntropySource {
    providers: Vec<Box<dyn EntropyProvider>>,
    fallback: LocalCsprng,
    stats: EntropyStats,
}

impl EntropySource {
    /// Builds the standard chain (ANU, then Random.org) from configuration.
    pub fn from_config(config: &EntropyConfig) -> Result<Self, EntropyError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()?;

        let mut providers: Vec<Box<dyn EntropyProvider>> = Vec::new();
        if config.enable_anu {
            providers.push(Box::new(AnuQuantumProvider::new(
                client.clone(),
                config.anu_endpoint.clone(),
            )));
        }
        if config.enable_random_org {
            providers.push(Box::new(RandomOrgProvider::new(
                client,
                config.random_org_endpoint.clone(),
            )));
        }

        Ok(Self::with_providers(providers))
    }

    /// Builds a chain with no physical providers.
    pub fn local_only() -> Self {
        Self::with_providers(Vec::new())
    }

    /// Builds a chain from an explicit provider list.
    pub fn with_providers(providers: Vec<Box<dyn EntropyProvider>>) -> Self {
        Self {
            providers,
            fallback: LocalCsprng::from_os_entropy(),
            stats: EntropyStats::default(),
        }
    }

    /// Acquires `count` bytes from the first provider that succeeds.
    pub fn acquire(&mut self, count: usize) -> ByteStream {
        let mut failures = Vec::new();

        for provider in self.providers.iter_mut() {
            let info = provider.info().clone();
            match provider.fetch(count) {
                Ok(bytes) => {
                    self.stats.physical_calls += 1;
                    self.fallback.absorb(&bytes);
                    tracing::debug!(
                        provider = info.name,
                        bytes = bytes.len(),
                        "Acquired entropy"
                    );
                    return ByteStream::new(bytes, info, failures);
                }
                Err(e) => {
                    self.stats.provider_failures += 1;
                    tracing::warn!(
                        provider = info.name,
                        reason = %e,
                        "Entropy provider unavailable"
                    );
                    failures.push(ProviderFailure {
                        provider: info.name,
                        reason: e.to_string(),
                    });
                }
            }
        }

        if !self.providers.is_empty() {
            tracing::warn!(
                failed = failures.len(),
                "All physical providers failed, using local CSPRNG"
            );
        }

        self.stats.fallback_calls += 1;
        ByteStream::new(self.fallback.generate(count), LocalCsprng::INFO, failures)
    }

    /// Returns the chain counters.
    pub fn stats(&self) -> EntropyStats {
        self.stats
    }

    /// Returns the number of physical providers in the chain.
    pub fn provider_count(&self) -> usize {
        self.providers.len()
    }
}

impl Default for EntropySource {
    fn default() -> Self {
        Self::local_only()
    }
}
