//! Local ChaCha20 CSPRNG, the terminal link of the entropy chain.
//!
//! # Absorbing Physical Entropy
//!
//! Whenever a physical provider succeeds, its bytes are mixed into the
//! fallback's seed material with BLAKE3:
//!
//! ```text
//! new_seed = BLAKE3(domain || counter || old_seed || physical_bytes)
//! ```
//!
//! The OS seed is never replaced, only supplemented, so a hostile or
//! broken remote service cannot make fallback output predictable.

use super::SourceInfo;
use blake3::Hasher;
use rand_chacha::ChaCha20Rng;
use rand_core::{OsRng, RngCore, SeedableRng};

/// Domain separator for absorb operations.
const ABSORB_DOMAIN: &[u8] = b"quantum-prompt-absorb-v1";

/// Cryptographically secure local provider.
pub struct LocalCsprng {
    inner: ChaCha20Rng,
    /// Retained seed material, not the ChaCha internal state.
    seed_material: [u8; 32],
    absorb_count: u64,
    bytes_generated: u64,
}

impl LocalCsprng {
    /// Provenance reported for fallback bytes.
    pub const INFO: SourceInfo = SourceInfo {
        name: "Secure Random",
        detail: "Cryptographic pseudorandom (fallback)",
        is_physical: false,
        is_quantum: false,
    };

    /// Creates a generator seeded from the OS entropy source.
    pub fn from_os_entropy() -> Self {
        let mut seed_material = [0u8; 32];
        OsRng.fill_bytes(&mut seed_material);
        Self::from_seed_material(seed_material)
    }

    fn from_seed_material(seed_material: [u8; 32]) -> Self {
        Self {
            inner: ChaCha20Rng::from_seed(seed_material),
            seed_material,
            absorb_count: 0,
            bytes_generated: 0,
        }
    }

    #[cfg(test)]
    pub(crate) fn from_seed_for_testing(seed: [u8; 32]) -> Self {
        Self::from_seed_material(seed)
    }

    /// Mixes externally acquired bytes into the seed material.
    pub fn absorb(&mut self, bytes: &[u8]) {
        if bytes.is_empty() {
            return;
        }

        let mut hasher = Hasher::new();
        hasher.update(ABSORB_DOMAIN);
        hasher.update(&self.absorb_count.to_le_bytes());
        hasher.update(&self.seed_material);
        hasher.update(bytes);

        self.seed_material = *hasher.finalize().as_bytes();
        self.inner = ChaCha20Rng::from_seed(self.seed_material);
        self.absorb_count += 1;

        tracing::trace!(
            absorb_count = self.absorb_count,
            bytes = bytes.len(),
            "Fallback CSPRNG absorbed physical entropy"
        );
    }

    /// Returns the number of absorb operations performed.
    pub fn absorb_count(&self) -> u64 {
        self.absorb_count
    }

    /// Returns the total bytes handed out.
    pub fn bytes_generated(&self) -> u64 {
        self.bytes_generated
    }

    /// Generates `count` uniformly distributed bytes.
    pub fn generate(&mut self, count: usize) -> Vec<u8> {
        let mut out = vec![0u8; count];
        self.inner.fill_bytes(&mut out);
        self.bytes_generated += count as u64;
        out
    }
}

impl Default for LocalCsprng {
    fn default() -> Self {
        Self::from_os_entropy()
    }
}
