//! Variation output records.

use super::Approach;
use crate::entropy::{ByteStream, ProviderFailure};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// A resolved parameter value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ParamValue {
    /// Vocabulary entry or filled template.
    Text(String),
    /// Whole-number target such as a word count.
    Integer(u32),
    /// Percentage in `[0, 100]`.
    Percent(f64),
    /// Several entries in pick order.
    List(Vec<String>),
}

impl ParamValue {
    /// Builds a percentage from a normalized level.
    pub fn percent(level: f64) -> Self {
        Self::Percent(level * 100.0)
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Integer(n) => write!(f, "{n}"),
            Self::Percent(p) => write!(f, "{p:.1}%"),
            Self::List(items) => f.write_str(&items.join(", ")),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<u32> for ParamValue {
    fn from(n: u32) -> Self {
        Self::Integer(n)
    }
}

impl From<Vec<String>> for ParamValue {
    fn from(items: Vec<String>) -> Self {
        Self::List(items)
    }
}

/// Parameter name to resolved value, ordered by name.
pub type Parameters = BTreeMap<String, ParamValue>;

/// Output of one approach rendering routine.
#[derive(Debug, Clone, PartialEq)]
pub struct Rendered {
    /// Final prompt text.
    pub text: String,
    /// Every resolved parameter.
    pub parameters: Parameters,
    /// One-line summary of the resolved parameters.
    pub description: String,
}

/// Where the entropy behind a record came from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Provenance {
    /// Provider name.
    pub source: &'static str,
    /// Physical process or generator behind the provider.
    pub detail: &'static str,
    /// True unless the local fallback served the block.
    pub is_physical: bool,
    /// True for quantum measurement sources.
    pub is_quantum: bool,
    /// When the block was acquired.
    pub acquired_at: DateTime<Utc>,
    /// Providers that failed before `source` answered.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fallback_reasons: Vec<ProviderFailure>,
}

impl Provenance {
    /// Copies the source description of `stream`.
    pub fn from_stream(stream: &ByteStream) -> Self {
        let source = stream.source();
        Self {
            source: source.name,
            detail: source.detail,
            is_physical: source.is_physical,
            is_quantum: source.is_quantum,
            acquired_at: stream.acquired_at(),
            fallback_reasons: stream.failures().to_vec(),
        }
    }

    /// Short badge describing the entropy quality.
    pub fn badge(&self) -> &'static str {
        match (self.is_quantum, self.is_physical) {
            (true, _) => "TRUE Quantum Random",
            (false, true) => "Physical Random",
            (false, false) => "Fallback Pseudorandom",
        }
    }
}

/// One generated prompt variation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VariationRecord {
    /// 1-based position within the generation call.
    pub id: usize,
    /// Transformed prompt.
    pub prompt: String,
    /// Approach that rendered the prompt.
    pub approach: Approach,
    /// Display name of `approach`.
    pub approach_name: &'static str,
    /// Resolved parameters.
    pub parameters: Parameters,
    /// One-line summary of the parameters.
    pub description: String,
    /// Where the entropy came from.
    pub provenance: Provenance,
}
