//! Prometheus metrics for generation and entropy sourcing.
//!
//! # Metrics Exposed
//!
//! - `quantum_prompt_generations_total` - Generation calls completed
//! - `quantum_prompt_variations_total` - Variations produced
//! - `quantum_prompt_physical_calls_total` - Successful physical provider calls
//! - `quantum_prompt_fallback_calls_total` - Acquisitions served by the local CSPRNG
//! - `quantum_prompt_provider_failures_total` - Failed provider attempts
//! - `quantum_prompt_approach_selected_total{approach}` - Variations per approach
//!
//! # Example
//!
//! ```no_run
//! use quantum_prompt::entropy::EntropySource;
//! use quantum_prompt::metrics::{MetricsRegistry, MetricsSnapshot};
//! use quantum_prompt::variation::VariationGenerator;
//!
//! let mut generator = VariationGenerator::with_entropy(EntropySource::local_only());
//! let records = generator.generate("Explain entropy", 3).unwrap();
//!
//! let registry = MetricsRegistry::new().expect("Failed to create registry");
//! registry.update(&MetricsSnapshot::from_session(1, generator.entropy_stats(), &records));
//! println!("{}", registry.encode().unwrap());
//! ```

mod collector;

pub use collector::{MetricsError, MetricsRegistry, MetricsSnapshot};
