//! Quantum Prompt Optimizer Library
//!
//! Turns one prompt into several alternative prompts, each reshaped by an
//! optimization approach whose parameters are read from an external
//! entropy stream. Repeated runs on the same input rarely agree.
//!
//! # Architecture
//!
//! ```text
//! caller → VariationGenerator → EntropySource (one block per variation)
//!               ↓                  ANU → Random.org → local ChaCha20
//!          ApproachPool + Approach::render → VariationRecord
//! ```
//!
//! # Design Principles
//!
//! - **Never blocked by entropy**: physical providers are best-effort, the
//!   local CSPRNG always answers
//! - **Provenance, not warnings**: fallback is reported as data on each record
//! - **Pure rendering**: identical bytes always give identical text
//! - **Not seedable**: output is intentionally non-reproducible across runs
//!
//! # Example
//!
//! ```no_run
//! use quantum_prompt::{config::FileConfig, EntropySource, VariationGenerator};
//!
//! let config = FileConfig::default();
//! let entropy = EntropySource::from_config(&config.entropy).unwrap();
//! let mut generator = VariationGenerator::new(entropy, &config.generation);
//!
//! for record in generator.generate("Explain quantum computing", 5).unwrap() {
//!     println!("{} [{}]\n{}", record.approach_name, record.provenance.source, record.prompt);
//! }
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![deny(unsafe_code)]

pub mod config;
pub mod entropy;
pub mod export;
pub mod metrics;
pub mod techniques;
pub mod variation;

// Re-export commonly used types at crate root
pub use config::FileConfig;
pub use entropy::{ByteStream, EntropySource, EntropyStats};
pub use techniques::{StackedVariation, TechniqueStacker};
pub use variation::{Approach, GenerateError, VariationGenerator, VariationRecord};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
