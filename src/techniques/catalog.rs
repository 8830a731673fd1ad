//! Prompt-engineering technique catalog.

use serde::Serialize;

/// A single wrapping technique.
///
/// Declaration order is the selection order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Technique {
    /// Think step by step.
    StepByStep,
    /// Answer as a domain expert.
    ExpertRole,
    /// Ask for concrete examples.
    Examples,
    /// Ask for headers and bullet points.
    Structured,
    /// Ask for the reasoning behind conclusions.
    Reasoning,
    /// Weigh advantages against disadvantages.
    ProsCons,
    /// Explain simply first, then in depth.
    Eli5,
    /// Ask for practical next steps.
    Actionable,
    /// Question assumptions and counterarguments.
    Critical,
    /// Keep the answer brief.
    Concise,
}

impl Technique {
    /// Every technique in declaration order.
    pub const ALL: [Technique; 10] = [
        Technique::StepByStep,
        Technique::ExpertRole,
        Technique::Examples,
        Technique::Structured,
        Technique::Reasoning,
        Technique::ProsCons,
        Technique::Eli5,
        Technique::Actionable,
        Technique::Critical,
        Technique::Concise,
    ];

    /// Human-readable name.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::StepByStep => "Step-by-Step Thinking",
            Self::ExpertRole => "Expert Perspective",
            Self::Examples => "With Examples",
            Self::Structured => "Structured Format",
            Self::Reasoning => "Show Reasoning",
            Self::ProsCons => "Balanced Analysis",
            Self::Eli5 => "Simple Then Deep",
            Self::Actionable => "Actionable Advice",
            Self::Critical => "Critical Analysis",
            Self::Concise => "Concise Response",
        }
    }

    /// Wrapping template with a `{prompt}` placeholder.
    pub fn template(self) -> &'static str {
        match self {
            Self::StepByStep => "Let's think through this step-by-step:\n\n{prompt}",
            Self::ExpertRole => {
                "As an expert in this domain, provide a comprehensive answer:\n\n{prompt}"
            }
            Self::Examples => {
                "{prompt}\n\nPlease include specific examples to illustrate your points."
            }
            Self::Structured => {
                "{prompt}\n\nOrganize your response with:\n• Clear headings\n• Bullet points for key ideas\n• A summary at the end"
            }
            Self::Reasoning => {
                "{prompt}\n\nExplain your reasoning and thought process throughout your answer."
            }
            Self::ProsCons => {
                "{prompt}\n\nProvide a balanced view including:\n- Pros/Benefits\n- Cons/Limitations\n- Overall recommendation"
            }
            Self::Eli5 => {
                "{prompt}\n\nFirst explain in simple terms (ELI5), then provide a more detailed technical explanation."
            }
            Self::Actionable => {
                "{prompt}\n\nFocus on practical, actionable advice with clear next steps."
            }
            Self::Critical => {
                "{prompt}\n\nApply critical thinking: question assumptions, consider alternatives, and note limitations."
            }
            Self::Concise => {
                "{prompt}\n\nBe concise but comprehensive. Avoid unnecessary details while covering all important points."
            }
        }
    }

    /// One-line summary of what the technique adds.
    pub fn description(self) -> &'static str {
        match self {
            Self::StepByStep => "Encourages systematic reasoning",
            Self::ExpertRole => "Invokes domain expertise",
            Self::Examples => "Adds concrete examples",
            Self::Structured => "Improves readability",
            Self::Reasoning => "Makes logic transparent",
            Self::ProsCons => "Ensures balanced perspective",
            Self::Eli5 => "Accessible to all levels",
            Self::Actionable => "Emphasizes practicality",
            Self::Critical => "Deeper analytical thinking",
            Self::Concise => "Efficient communication",
        }
    }

    /// Wraps `prompt` in this technique's template.
    pub fn apply(self, prompt: &str) -> String {
        self.template().replace("{prompt}", prompt)
    }
}

/// Applies techniques in order, each wrapping the previous result.
pub fn apply_all(base_prompt: &str, techniques: &[Technique]) -> String {
    techniques
        .iter()
        .fold(base_prompt.to_string(), |acc, technique| technique.apply(&acc))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_templates_keep_prompt() {
        for technique in Technique::ALL {
            assert!(technique.apply("PROMPT").contains("PROMPT"), "{technique:?}");
        }
    }

    #[test]
    fn test_apply_all_nests_in_order() {
        let result = apply_all(
            "Explain machine learning",
            &[Technique::StepByStep, Technique::ExpertRole, Technique::Examples],
        );

        assert_eq!(
            result,
            "As an expert in this domain, provide a comprehensive answer:\n\n\
             Let's think through this step-by-step:\n\n\
             Explain machine learning\n\n\
             Please include specific examples to illustrate your points."
        );
    }

    #[test]
    fn test_apply_none_is_identity() {
        assert_eq!(apply_all("p", &[]), "p");
    }
}
