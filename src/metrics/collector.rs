//! Metrics collection and registry.

use crate::entropy::EntropyStats;
use crate::variation::{Approach, VariationRecord};
use prometheus::{Encoder, IntCounter, IntCounterVec, Opts, Registry, TextEncoder};
use std::collections::BTreeMap;
use thiserror::Error;

/// Errors that can occur during metrics operations.
#[derive(Debug, Error)]
pub enum MetricsError {
    /// Registration or encoding failed.
    #[error("prometheus error: {0}")]
    Prometheus(#[from] prometheus::Error),
}

/// Cumulative session totals used to update the registry.
#[derive(Debug, Clone, Default)]
pub struct MetricsSnapshot {
    /// Generation calls completed.
    pub generations: u64,
    /// Variations produced across all calls.
    pub variations: u64,
    /// Successful physical provider calls.
    pub physical_calls: u64,
    /// Acquisitions served by the local fallback.
    pub fallback_calls: u64,
    /// Failed provider attempts.
    pub provider_failures: u64,
    /// Selections per approach.
    pub approaches: BTreeMap<Approach, u64>,
}

impl MetricsSnapshot {
    /// Builds a snapshot from entropy counters and generated records.
    pub fn from_session(
        generations: u64,
        stats: EntropyStats,
        records: &[VariationRecord],
    ) -> Self {
        let mut approaches = BTreeMap::new();
        for record in records {
            *approaches.entry(record.approach).or_insert(0) += 1;
        }

        Self {
            generations,
            variations: records.len() as u64,
            physical_calls: stats.physical_calls,
            fallback_calls: stats.fallback_calls,
            provider_failures: stats.provider_failures,
            approaches,
        }
    }
}

/// Prometheus metrics registry for the optimizer.
pub struct MetricsRegistry {
    registry: Registry,

    generations_total: IntCounter,
    variations_total: IntCounter,

    // Entropy chain
    physical_calls_total: IntCounter,
    fallback_calls_total: IntCounter,
    provider_failures_total: IntCounter,

    approach_selected_total: IntCounterVec,
}

impl MetricsRegistry {
    /// Creates a new registry with all metrics registered.
    pub fn new() -> Result<Self, MetricsError> {
        let registry = Registry::new();

        let generations_total = IntCounter::new(
            "quantum_prompt_generations_total",
            "Total generation calls completed",
        )?;
        let variations_total = IntCounter::new(
            "quantum_prompt_variations_total",
            "Total prompt variations produced",
        )?;
        let physical_calls_total = IntCounter::new(
            "quantum_prompt_physical_calls_total",
            "Successful calls to physical entropy providers",
        )?;
        let fallback_calls_total = IntCounter::new(
            "quantum_prompt_fallback_calls_total",
            "Entropy acquisitions served by the local CSPRNG",
        )?;
        let provider_failures_total = IntCounter::new(
            "quantum_prompt_provider_failures_total",
            "Failed entropy provider attempts",
        )?;
        let approach_selected_total = IntCounterVec::new(
            Opts::new(
                "quantum_prompt_approach_selected_total",
                "Variations produced per approach",
            ),
            &["approach"],
        )?;

        registry.register(Box::new(generations_total.clone()))?;
        registry.register(Box::new(variations_total.clone()))?;
        registry.register(Box::new(physical_calls_total.clone()))?;
        registry.register(Box::new(fallback_calls_total.clone()))?;
        registry.register(Box::new(provider_failures_total.clone()))?;
        registry.register(Box::new(approach_selected_total.clone()))?;

        Ok(Self {
            registry,
            generations_total,
            variations_total,
            physical_calls_total,
            fallback_calls_total,
            provider_failures_total,
            approach_selected_total,
        })
    }

    /// Updates all metrics from a cumulative snapshot.
    pub fn update(&self, snapshot: &MetricsSnapshot) {
        advance(&self.generations_total, snapshot.generations);
        advance(&self.variations_total, snapshot.variations);
        advance(&self.physical_calls_total, snapshot.physical_calls);
        advance(&self.fallback_calls_total, snapshot.fallback_calls);
        advance(&self.provider_failures_total, snapshot.provider_failures);

        for (approach, count) in &snapshot.approaches {
            let counter = self.approach_selected_total.with_label_values(&[approach.id()]);
            advance(&counter, *count);
        }
    }

    /// Returns the underlying Prometheus registry.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Encodes all metrics in Prometheus text format.
    pub fn encode(&self) -> Result<String, MetricsError> {
        let encoder = TextEncoder::new();
        let metric_families = self.registry.gather();
        let mut buffer = Vec::new();
        encoder.encode(&metric_families, &mut buffer)?;
        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }
}

/// Counters only move forward: increment by the difference.
fn advance(counter: &IntCounter, total: u64) {
    let current = counter.get();
    if total > current {
        counter.inc_by(total - current);
    }
}
