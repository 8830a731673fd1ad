//! Variation generation loop.

use super::approach::MAX_BYTE_BUDGET;
use super::cursor::{ByteCursor, CursorError};
use super::pool::ApproachPool;
use super::record::{Provenance, VariationRecord};
use crate::config::GenerationConfig;
use crate::entropy::{EntropySource, EntropyStats};
use thiserror::Error;

/// Errors surfaced to callers of a generator.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// Prompt is empty after trimming.
    #[error("prompt is empty")]
    EmptyPrompt,
    /// Zero variations requested.
    #[error("variation count must be at least 1")]
    ZeroVariations,
    /// More variations requested than the configured limit.
    #[error("requested {requested} variations, limit is {limit}")]
    TooManyVariations {
        /// Count asked for.
        requested: usize,
        /// Configured maximum.
        limit: usize,
    },
    /// A block ran out before rendering finished.
    #[error("entropy block too small: {0}")]
    Render(#[from] CursorError),
}

/// Rejects a request before any entropy is consumed.
pub fn validate_request(prompt: &str, count: usize, limit: usize) -> Result<(), GenerateError> {
    if prompt.trim().is_empty() {
        return Err(GenerateError::EmptyPrompt);
    }
    if count == 0 {
        return Err(GenerateError::ZeroVariations);
    }
    if count > limit {
        return Err(GenerateError::TooManyVariations {
            requested: count,
            limit,
        });
    }
    Ok(())
}

/// Generates approach-based prompt variations.
///
/// Each variation draws one entropy block: the first byte selects an
/// approach from the pool, the rest parametrize its template. Calls are
/// independent; the pool lives only for the duration of `generate`.
pub struct VariationGenerator {
    entropy: EntropySource,
    block_size: usize,
    max_variations: usize,
}

impl VariationGenerator {
    /// Creates a generator with the given block size and variation limit.
    pub fn new(entropy: EntropySource, config: &GenerationConfig) -> Self {
        Self {
            entropy,
            block_size: config.block_size.max(MAX_BYTE_BUDGET + 1),
            max_variations: config.max_variations,
        }
    }

    /// Creates a generator with default generation settings.
    pub fn with_entropy(entropy: EntropySource) -> Self {
        Self::new(entropy, &GenerationConfig::default())
    }

    /// Generates `count` variations of `base_prompt`.
    pub fn generate(
        &mut self,
        base_prompt: &str,
        count: usize,
    ) -> Result<Vec<VariationRecord>, GenerateError> {
        validate_request(base_prompt, count, self.max_variations)?;

        let mut pool = ApproachPool::new();
        let mut records = Vec::with_capacity(count);

        for id in 1..=count {
            let stream = self.entropy.acquire(self.block_size);
            let (&selector, rest) = stream
                .bytes()
                .split_first()
                .ok_or(CursorError::Exhausted { offset: 0 })?;

            let approach = pool.draw(selector);
            let rendered = approach.render(base_prompt, &mut ByteCursor::new(rest))?;

            records.push(VariationRecord {
                id,
                prompt: rendered.text,
                approach,
                approach_name: approach.display_name(),
                parameters: rendered.parameters,
                description: rendered.description,
                provenance: Provenance::from_stream(&stream),
            });
        }

        tracing::info!(
            variations = records.len(),
            physical = records.iter().filter(|r| r.provenance.is_physical).count(),
            "Generated prompt variations"
        );

        Ok(records)
    }

    /// Returns the entropy chain counters.
    pub fn entropy_stats(&self) -> EntropyStats {
        self.entropy.stats()
    }

    /// Largest count accepted by [`generate`](Self::generate).
    pub fn max_variations(&self) -> usize {
        self.max_variations
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entropy::ScriptedProvider;
    use crate::variation::{Approach, ParamValue};

    fn scripted(blocks: Vec<Vec<u8>>) -> VariationGenerator {
        let source = EntropySource::with_providers(vec![Box::new(ScriptedProvider::new(blocks))]);
        VariationGenerator::with_entropy(source)
    }

    #[test]
    fn test_rejects_invalid_input_before_entropy() {
        let mut generator = scripted(vec![vec![0; 100]]);

        assert!(matches!(
            generator.generate("   ", 3),
            Err(GenerateError::EmptyPrompt)
        ));
        assert!(matches!(
            generator.generate("prompt", 0),
            Err(GenerateError::ZeroVariations)
        ));
        assert!(matches!(
            generator.generate("prompt", 11),
            Err(GenerateError::TooManyVariations { requested: 11, limit: 10 })
        ));
        assert_eq!(generator.entropy_stats(), EntropyStats::default());
    }

    #[test]
    fn test_reference_scenario() {
        let mut block = vec![0, 200, 10, 230, 5, 3, 7, 1];
        block.resize(100, 0);
        let mut generator = scripted(vec![block]);

        let records = generator.generate("Explain quantum computing", 1).unwrap();
        let record = &records[0];

        assert_eq!(record.id, 1);
        assert_eq!(record.approach, Approach::CalibratedParameters);
        assert_eq!(record.approach_name, "Calibrated Parameters");
        assert!(record.prompt.contains("Explain quantum computing"));
        assert!(record.prompt.contains("Technical depth: 78.4% (highly technical)"));
        assert!(record
            .prompt
            .contains("Creativity: 3.9% (low creativity, conventional)"));
        assert_eq!(record.parameters["role"], ParamValue::from("an investigative journalist"));
        assert_eq!(record.parameters["tone"], ParamValue::from("urgent"));
        assert_eq!(record.parameters["thinking_style"], ParamValue::from("systems"));
        assert_eq!(record.provenance.source, "Scripted");
        assert!(record.provenance.is_physical);
    }

    #[test]
    fn test_each_approach_once_per_cycle() {
        let blocks = (0..5).map(|i| vec![i * 37; 100]).collect();
        let mut generator = scripted(blocks);

        let records = generator.generate("Summarize the news", 5).unwrap();
        let mut approaches: Vec<_> = records.iter().map(|r| r.approach).collect();
        approaches.sort();
        approaches.dedup();

        assert_eq!(approaches.len(), 5);
        assert_eq!(
            records.iter().map(|r| r.id).collect::<Vec<_>>(),
            vec![1, 2, 3, 4, 5]
        );
    }

    #[test]
    fn test_fallback_only_is_not_physical() {
        let mut generator = VariationGenerator::with_entropy(EntropySource::local_only());
        let records = generator.generate("Write a haiku", 10).unwrap();

        assert_eq!(records.len(), 10);
        assert!(records.iter().all(|r| !r.provenance.is_physical));
        assert!(records.iter().all(|r| r.prompt.contains("Write a haiku")));
        assert_eq!(generator.entropy_stats().fallback_calls, 10);
    }

    #[test]
    fn test_provider_outage_mid_call_degrades() {
        let mut generator = scripted(vec![vec![1; 100]]);
        let records = generator.generate("Describe rain", 3).unwrap();

        assert!(records[0].provenance.is_physical);
        assert!(!records[1].provenance.is_physical);
        assert_eq!(records[1].provenance.fallback_reasons.len(), 1);
        assert_eq!(generator.entropy_stats().physical_calls, 1);
    }
}
