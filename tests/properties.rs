//! Property tests for the variation generator.

use proptest::prelude::*;
use quantum_prompt::entropy::{EntropySource, ScriptedProvider};
use quantum_prompt::variation::vocabulary::{
    Scale, ABSTRACTION, CREATIVITY, DEPTH_VARIATION, DETAIL, ENERGY, FORMALITY,
    METAPHOR_DENSITY, TECHNICAL,
};
use quantum_prompt::variation::{
    Approach, ByteCursor, ParamValue, VariationGenerator, MAX_BYTE_BUDGET,
};
use std::collections::HashSet;

/// Level-backed parameters and the scale their band is drawn from.
const BANDED: &[(Approach, &str, Scale)] = &[
    (Approach::CalibratedParameters, "technical_level", TECHNICAL),
    (Approach::CalibratedParameters, "creativity_level", CREATIVITY),
    (Approach::CalibratedParameters, "detail_level", DETAIL),
    (Approach::CalibratedParameters, "formality_level", FORMALITY),
    (Approach::MultiParameterOptimization, "abstraction_level", ABSTRACTION),
    (Approach::MultiParameterOptimization, "depth_variation", DEPTH_VARIATION),
    (Approach::CrossDomainFusion, "metaphor_density", METAPHOR_DENSITY),
    (Approach::StructuralBlueprint, "energy", ENERGY),
];

fn prompt_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z ?]{0,40}"
}

fn block_strategy() -> impl Strategy<Value = Vec<u8>> {
    proptest::collection::vec(any::<u8>(), MAX_BYTE_BUDGET..=MAX_BYTE_BUDGET)
}

fn scripted_generator(blocks: Vec<Vec<u8>>) -> VariationGenerator {
    let source = EntropySource::with_providers(vec![Box::new(ScriptedProvider::new(blocks))]);
    VariationGenerator::with_entropy(source)
}

proptest! {
    #[test]
    fn generate_returns_requested_count(prompt in prompt_strategy(), count in 1usize..=10) {
        let mut generator = VariationGenerator::with_entropy(EntropySource::local_only());
        let records = generator.generate(&prompt, count).unwrap();

        prop_assert_eq!(records.len(), count);
        for (i, record) in records.iter().enumerate() {
            prop_assert_eq!(record.id, i + 1);
            prop_assert!(record.prompt.contains(prompt.as_str()));
            prop_assert!(!record.provenance.is_physical);
        }
    }

    #[test]
    fn percentages_in_range_and_bands_consistent(bytes in block_strategy()) {
        for approach in Approach::ALL {
            let rendered = approach.render("prompt", &mut ByteCursor::new(&bytes)).unwrap();

            for value in rendered.parameters.values() {
                if let ParamValue::Percent(p) = value {
                    prop_assert!((0.0..=100.0).contains(p));
                }
            }

            for (_, key, scale) in BANDED.iter().filter(|(a, _, _)| *a == approach) {
                let Some(ParamValue::Percent(p)) = rendered.parameters.get(*key) else {
                    return Err(TestCaseError::fail(format!("{key} missing")));
                };
                let expected = format!("{:.1}% ({})", p, scale.band(p / 100.0));
                prop_assert!(rendered.text.contains(&expected), "{} not in text", expected);
            }
        }
    }

    #[test]
    fn rendering_is_pure(bytes in block_strategy(), prompt in prompt_strategy()) {
        for approach in Approach::ALL {
            let first = approach.render(&prompt, &mut ByteCursor::new(&bytes)).unwrap();
            let second = approach.render(&prompt, &mut ByteCursor::new(&bytes)).unwrap();
            prop_assert_eq!(first, second);
        }
    }

    #[test]
    fn fusion_domains_distinct(bytes in block_strategy()) {
        let rendered = Approach::CrossDomainFusion
            .render("prompt", &mut ByteCursor::new(&bytes))
            .unwrap();

        let Some(ParamValue::List(domains)) = rendered.parameters.get("domains") else {
            return Err(TestCaseError::fail("domains missing"));
        };
        prop_assert_eq!(domains.len(), 2);
        prop_assert_ne!(&domains[0], &domains[1]);
    }

    #[test]
    fn approaches_cycle_before_repeating(selectors in proptest::collection::vec(any::<u8>(), 10)) {
        let blocks = selectors.iter().map(|&s| {
            let mut block = vec![s];
            block.extend(std::iter::repeat(s.wrapping_mul(31)).take(99));
            block
        }).collect();
        let mut generator = scripted_generator(blocks);
        let records = generator.generate("prompt", 10).unwrap();

        for cycle in records.chunks(Approach::ALL.len()) {
            let distinct: HashSet<_> = cycle.iter().map(|r| r.approach).collect();
            prop_assert_eq!(distinct.len(), cycle.len());
        }
        prop_assert!(records.iter().all(|r| r.provenance.is_physical));
    }
}
