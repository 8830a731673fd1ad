//! The fixed set of optimization approaches.

use super::cursor::{ByteCursor, CursorError};
use super::record::Rendered;
use super::strategies::{blueprint, calibrated, constraints, fusion, multi_parameter};
use serde::Serialize;
use std::fmt;

/// A named rendering strategy.
///
/// Declaration order is significant: selection indexes into [`Approach::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Approach {
    /// Role, style and tone plus four banded levels.
    CalibratedParameters,
    /// Two to four filled constraint templates.
    CreativeConstraints,
    /// Word targets, abstraction, depth and focus aspects.
    MultiParameterOptimization,
    /// Two distinct domains bridged by a connection.
    CrossDomainFusion,
    /// Structure, rhythm, architecture and transitions.
    StructuralBlueprint,
}

impl Approach {
    /// Every approach in selection order.
    pub const ALL: [Approach; 5] = [
        Approach::CalibratedParameters,
        Approach::CreativeConstraints,
        Approach::MultiParameterOptimization,
        Approach::CrossDomainFusion,
        Approach::StructuralBlueprint,
    ];

    /// Stable identifier.
    pub fn id(self) -> &'static str {
        match self {
            Self::CalibratedParameters => "calibrated-parameters",
            Self::CreativeConstraints => "creative-constraints",
            Self::MultiParameterOptimization => "multi-parameter-optimization",
            Self::CrossDomainFusion => "cross-domain-fusion",
            Self::StructuralBlueprint => "structural-blueprint",
        }
    }

    /// Human-readable name.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::CalibratedParameters => "Calibrated Parameters",
            Self::CreativeConstraints => "Creative Constraints",
            Self::MultiParameterOptimization => "Multi-Parameter Optimization",
            Self::CrossDomainFusion => "Cross-Domain Fusion",
            Self::StructuralBlueprint => "Structural Blueprint",
        }
    }

    /// Bytes consumed by this approach's rendering routine.
    pub const fn byte_budget(self) -> usize {
        match self {
            Self::CalibratedParameters => calibrated::BYTE_BUDGET,
            Self::CreativeConstraints => constraints::BYTE_BUDGET,
            Self::MultiParameterOptimization => multi_parameter::BYTE_BUDGET,
            Self::CrossDomainFusion => fusion::BYTE_BUDGET,
            Self::StructuralBlueprint => blueprint::BYTE_BUDGET,
        }
    }

    /// Renders `prompt` using bytes from the front of `cursor`.
    pub fn render(self, prompt: &str, cursor: &mut ByteCursor<'_>) -> Result<Rendered, CursorError> {
        match self {
            Self::CalibratedParameters => calibrated::render(prompt, cursor),
            Self::CreativeConstraints => constraints::render(prompt, cursor),
            Self::MultiParameterOptimization => multi_parameter::render(prompt, cursor),
            Self::CrossDomainFusion => fusion::render(prompt, cursor),
            Self::StructuralBlueprint => blueprint::render(prompt, cursor),
        }
    }
}

impl fmt::Display for Approach {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Largest byte budget across all approaches.
pub const MAX_BYTE_BUDGET: usize = {
    let mut max = 0;
    let mut i = 0;
    while i < Approach::ALL.len() {
        let budget = Approach::ALL[i].byte_budget();
        if budget > max {
            max = budget;
        }
        i += 1;
    }
    max
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_unique_and_serialized() {
        let mut ids: Vec<_> = Approach::ALL.iter().map(|a| a.id()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), Approach::ALL.len());

        for approach in Approach::ALL {
            let json = serde_json::to_value(approach).unwrap();
            assert_eq!(json, serde_json::json!(approach.id()));
        }
    }

    #[test]
    fn test_max_budget() {
        assert_eq!(MAX_BYTE_BUDGET, 11);
    }

    #[test]
    fn test_each_approach_consumes_its_budget() {
        let bytes: Vec<u8> = (0..=255).collect();
        for approach in Approach::ALL {
            let mut cursor = ByteCursor::new(&bytes);
            let rendered = approach.render("base prompt", &mut cursor).unwrap();

            assert_eq!(cursor.consumed(), approach.byte_budget(), "{approach}");
            assert!(rendered.text.contains("base prompt"));
            assert!(!rendered.description.is_empty());
        }
    }
}
