//! Technique stacking.
//!
//! A simpler alternative to the approach generator: one to three
//! catalog techniques are chosen per variation and their templates are
//! nested around the prompt. Anti-repetition here uses bounded
//! resampling (see [`selector`]), never the approach pool.

mod catalog;
pub mod selector;

pub use catalog::{apply_all, Technique};
pub use selector::{Selection, TechniqueSelector, MIN_STACK_BLOCK};

use crate::config::GenerationConfig;
use crate::entropy::{EntropySource, EntropyStats};
use crate::variation::{validate_request, GenerateError, Provenance};
use serde::Serialize;

/// One stacked-technique variation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StackedVariation {
    /// 1-based position within the generation call.
    pub id: usize,
    /// Prompt with every template applied.
    pub prompt: String,
    /// Techniques in application order.
    pub techniques: Vec<Technique>,
    /// Display names matching `techniques`.
    pub technique_names: Vec<&'static str>,
    /// True if the combination repeats an earlier one in this call.
    pub duplicate: bool,
    /// Where the selection bytes came from.
    pub provenance: Provenance,
}

impl StackedVariation {
    /// Technique descriptions in application order.
    pub fn descriptions(&self) -> Vec<&'static str> {
        self.techniques.iter().map(|t| t.description()).collect()
    }
}

/// Generates technique-stacked variations.
pub struct TechniqueStacker {
    entropy: EntropySource,
    block_size: usize,
    max_variations: usize,
}

impl TechniqueStacker {
    /// Creates a stacker with the given block size and variation limit.
    pub fn new(entropy: EntropySource, config: &GenerationConfig) -> Self {
        Self {
            entropy,
            block_size: config.stack_block_size.max(MIN_STACK_BLOCK),
            max_variations: config.max_variations,
        }
    }

    /// Creates a stacker with default generation settings.
    pub fn with_entropy(entropy: EntropySource) -> Self {
        Self::new(entropy, &GenerationConfig::default())
    }

    /// Generates `count` variations of `base_prompt`.
    ///
    /// Combinations avoid repeating within the call until the resampling
    /// bound is hit.
    pub fn generate(
        &mut self,
        base_prompt: &str,
        count: usize,
    ) -> Result<Vec<StackedVariation>, GenerateError> {
        validate_request(base_prompt, count, self.max_variations)?;

        let mut selector = TechniqueSelector::new();
        let mut variations = Vec::with_capacity(count);

        for id in 1..=count {
            let stream = self.entropy.acquire(self.block_size);
            let selection = selector.select(stream.bytes());

            variations.push(StackedVariation {
                id,
                prompt: apply_all(base_prompt, &selection.techniques),
                technique_names: selection
                    .techniques
                    .iter()
                    .map(|t| t.display_name())
                    .collect(),
                techniques: selection.techniques,
                duplicate: selection.duplicate,
                provenance: Provenance::from_stream(&stream),
            });
        }

        tracing::info!(
            variations = variations.len(),
            distinct = selector.used_count(),
            "Generated technique-stacked variations"
        );

        Ok(variations)
    }

    /// Returns the entropy chain counters.
    pub fn entropy_stats(&self) -> EntropyStats {
        self.entropy.stats()
    }
}
