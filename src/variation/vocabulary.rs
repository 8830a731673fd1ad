//! Static vocabulary tables.
//!
//! Selection is by modulo index, so the order of every list is part of
//! the output contract. Lists are append-only: changing or reordering an
//! existing entry requires bumping [`VOCABULARY_VERSION`].

/// Snapshot version of all tables in this module.
pub const VOCABULARY_VERSION: u32 = 1;

/// Levels strictly above this fall in the high band.
pub const HIGH_THRESHOLD: f64 = 0.7;

/// Levels strictly above this (and not high) fall in the middle band.
pub const MID_THRESHOLD: f64 = 0.3;

/// Three-band qualitative scale for a normalized level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scale {
    /// Label above [`HIGH_THRESHOLD`].
    pub high: &'static str,
    /// Label above [`MID_THRESHOLD`].
    pub mid: &'static str,
    /// Label at or below [`MID_THRESHOLD`].
    pub low: &'static str,
}

impl Scale {
    /// Returns the band label for `level`.
    pub fn band(&self, level: f64) -> &'static str {
        if level > HIGH_THRESHOLD {
            self.high
        } else if level > MID_THRESHOLD {
            self.mid
        } else {
            self.low
        }
    }
}

/// Technical depth of the answer.
pub const TECHNICAL: Scale = Scale {
    high: "highly technical",
    mid: "moderately technical",
    low: "simplified, non-technical",
};

/// Creative latitude.
pub const CREATIVITY: Scale = Scale {
    high: "highly creative",
    mid: "moderately creative",
    low: "low creativity, conventional",
};

/// Amount of detail.
pub const DETAIL: Scale = Scale {
    high: "highly detailed",
    mid: "moderately detailed",
    low: "concise, high-level",
};

/// Register of the language.
pub const FORMALITY: Scale = Scale {
    high: "highly formal",
    mid: "moderately formal",
    low: "casual, conversational",
};

/// Concrete versus abstract treatment.
pub const ABSTRACTION: Scale = Scale {
    high: "highly abstract",
    mid: "moderately abstract",
    low: "concrete and grounded",
};

/// How much depth varies across sections.
pub const DEPTH_VARIATION: Scale = Scale {
    high: "highly varied depth",
    mid: "moderately varied depth",
    low: "uniform depth",
};

/// Density of metaphor in a fusion.
pub const METAPHOR_DENSITY: Scale = Scale {
    high: "highly metaphorical",
    mid: "moderately metaphorical",
    low: "literal, minimal metaphor",
};

/// Pace and intensity of a blueprint.
pub const ENERGY: Scale = Scale {
    high: "highly energetic",
    mid: "moderately energetic",
    low: "calm and measured",
};

/// Personas the answer is written as.
pub const ROLES: &[&str] = &[
    "a seasoned research scientist",
    "a patient university lecturer",
    "a pragmatic senior engineer",
    "an investigative journalist",
    "a systems architect",
    "a science communicator",
    "a management consultant",
    "a philosopher of science",
    "a product designer",
    "a technical writer",
    "a startup founder",
    "a historian of ideas",
];

/// Reasoning styles, completed as "{style} thinking".
pub const THINKING_STYLES: &[&str] = &[
    "first-principles",
    "systems",
    "analogical",
    "critical",
    "lateral",
    "Socratic",
    "probabilistic",
    "design",
];

/// Tones of voice.
pub const TONES: &[&str] = &[
    "authoritative",
    "warm and encouraging",
    "playful",
    "matter-of-fact",
    "enthusiastic",
    "skeptical",
    "reflective",
    "urgent",
    "conversational",
    "precise and neutral",
];

/// Fields used for analogies and fusion.
pub const DOMAINS: &[&str] = &[
    "biology",
    "architecture",
    "music theory",
    "economics",
    "game design",
    "thermodynamics",
    "cooking",
    "military strategy",
    "ecology",
    "linguistics",
    "urban planning",
    "improvisational theatre",
    "mycology",
    "sports coaching",
];

/// Angles a response can focus on.
pub const ASPECTS: &[&str] = &[
    "practical applications",
    "historical context",
    "common misconceptions",
    "underlying mechanisms",
    "ethical implications",
    "future developments",
    "trade-offs",
    "edge cases",
    "key terminology",
    "real-world case studies",
];

/// Target readers.
pub const AUDIENCES: &[&str] = &[
    "a curious twelve-year-old",
    "a busy executive",
    "a skeptical expert",
    "a first-year university student",
    "a non-native English speaker",
    "a retired engineer",
    "a policy maker",
    "a hands-on hobbyist",
];

/// Emotional colorings.
pub const EMOTIONS: &[&str] = &[
    "wonder",
    "urgency",
    "calm confidence",
    "playful curiosity",
    "quiet awe",
    "optimism",
    "healthy skepticism",
];

/// Output forms.
pub const FORMATS: &[&str] = &[
    "a short dialogue",
    "a numbered checklist",
    "a comparison table",
    "a worked example",
    "a one-sentence summary",
    "a thought experiment",
    "a FAQ section",
    "an analogy",
];

/// A constraint phrase filled from one category table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConstraintTemplate {
    /// Parameter category the fill value comes from.
    pub category: &'static str,
    /// Phrase with a `{value}` placeholder.
    pub pattern: &'static str,
    /// Candidate fill values.
    pub values: &'static [&'static str],
}

impl ConstraintTemplate {
    /// Renders the phrase with `value` substituted.
    pub fn fill(&self, value: &str) -> String {
        self.pattern.replace("{value}", value)
    }
}

/// Constraint phrases in category order.
pub const CONSTRAINT_TEMPLATES: &[ConstraintTemplate] = &[
    ConstraintTemplate {
        category: "domain",
        pattern: "Draw at least one insight from {value}",
        values: DOMAINS,
    },
    ConstraintTemplate {
        category: "audience",
        pattern: "Write so that it lands with {value}",
        values: AUDIENCES,
    },
    ConstraintTemplate {
        category: "emotion",
        pattern: "Let the response evoke a sense of {value}",
        values: EMOTIONS,
    },
    ConstraintTemplate {
        category: "aspect",
        pattern: "Give special weight to {value}",
        values: ASPECTS,
    },
    ConstraintTemplate {
        category: "format",
        pattern: "Include {value} somewhere in the response",
        values: FORMATS,
    },
    ConstraintTemplate {
        category: "tone",
        pattern: "Keep the voice {value} throughout",
        values: TONES,
    },
];

/// Connection sentences with `{a}` and `{b}` placeholders.
pub const CONNECTION_TYPES: &[&str] = &[
    "Map the core structures of {a} onto {b} and explain what the mapping reveals.",
    "Use a principle from {a} to solve a problem that arises in {b}.",
    "Treat {a} and {b} as two lenses on the same pattern and name that pattern.",
    "Show where the analogy between {a} and {b} holds and exactly where it breaks.",
    "Borrow the vocabulary of {a} to describe the dynamics of {b}.",
    "Let a tension in {a} illuminate a hidden assumption in {b}.",
];

/// Ways of combining two domains.
pub const FUSION_APPROACHES: &[&str] = &[
    "structural analogy",
    "conceptual blending",
    "metaphorical bridge",
    "shared first principles",
    "contrast and synthesis",
    "narrative weaving",
];

/// Organizing principles for multi-parameter output.
pub const STRUCTURE_STYLES: &[&str] = &[
    "progressive deepening",
    "problem then solution",
    "question-driven",
    "layered summary then detail",
    "compare and contrast",
    "chronological",
];

/// Overall shapes for a blueprint.
pub const STRUCTURES: &[&str] = &[
    "inverted pyramid: conclusion first, then supporting detail",
    "hero's journey: challenge, struggle, insight, return",
    "spiral: revisit the core idea at increasing depth",
    "three-act: setup, confrontation, resolution",
    "modular: self-contained sections readable in any order",
    "dialectic: thesis, antithesis, synthesis",
    "zoom: start wide, focus on one detail, pull back out",
];

/// Pacing patterns.
pub const RHYTHMS: &[&str] = &[
    "short punchy sentences alternating with one long reflective one",
    "steady, even cadence",
    "building momentum toward each section's end",
    "call and response between question and answer",
    "staccato lists broken by flowing paragraphs",
    "slow opening, brisk middle, slow close",
];

/// Argument architectures.
pub const ARCHITECTURES: &[&str] = &[
    "hub and spoke around a central concept",
    "linear chain of dependent ideas",
    "nested hierarchy from general to specific",
    "matrix of two crossing dimensions",
    "network of cross-referenced nodes",
    "timeline",
];

/// Transition styles between sections.
pub const TRANSITIONS: &[&str] = &[
    "explicit signposts",
    "rhetorical questions",
    "callbacks to earlier points",
    "contrast pivots",
    "cause-and-effect bridges",
    "seamless, almost invisible",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_thresholds() {
        assert_eq!(TECHNICAL.band(0.71), "highly technical");
        assert_eq!(TECHNICAL.band(0.7), "moderately technical");
        assert_eq!(TECHNICAL.band(0.31), "moderately technical");
        assert_eq!(TECHNICAL.band(0.3), "simplified, non-technical");
        assert_eq!(TECHNICAL.band(0.0), "simplified, non-technical");
    }

    #[test]
    fn test_tables_non_empty() {
        for table in [
            ROLES,
            THINKING_STYLES,
            TONES,
            DOMAINS,
            ASPECTS,
            AUDIENCES,
            EMOTIONS,
            FORMATS,
            CONNECTION_TYPES,
            FUSION_APPROACHES,
            STRUCTURE_STYLES,
            STRUCTURES,
            RHYTHMS,
            ARCHITECTURES,
            TRANSITIONS,
        ] {
            assert!(!table.is_empty());
        }
        assert!(CONSTRAINT_TEMPLATES.iter().all(|t| !t.values.is_empty()));
    }

    #[test]
    fn test_templates_have_placeholders() {
        assert!(CONSTRAINT_TEMPLATES
            .iter()
            .all(|t| t.pattern.contains("{value}")));
        assert!(CONNECTION_TYPES
            .iter()
            .all(|c| c.contains("{a}") && c.contains("{b}")));
    }

    #[test]
    fn test_pinned_snapshot() {
        assert_eq!(VOCABULARY_VERSION, 1);
        assert_eq!(ROLES[5], "a science communicator");
        assert_eq!(TONES[6], "reflective");
        assert_eq!(THINKING_STYLES[7], "design");
        assert_eq!(DOMAINS.len(), 14);
    }
}
