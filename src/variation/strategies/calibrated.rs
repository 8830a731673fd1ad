//! Calibrated parameters: role, thinking style, tone and four intensity levels.

use crate::variation::cursor::{ByteCursor, CursorError};
use crate::variation::record::{ParamValue, Parameters, Rendered};
use crate::variation::vocabulary::{
    Scale, CREATIVITY, DETAIL, FORMALITY, ROLES, TECHNICAL, THINKING_STYLES, TONES,
};

/// Three picks and four levels.
pub const BYTE_BUDGET: usize = 7;

/// Intensity dimensions in byte order.
const DIMENSIONS: [(&str, &str, Scale); 4] = [
    ("technical_level", "Technical depth", TECHNICAL),
    ("creativity_level", "Creativity", CREATIVITY),
    ("detail_level", "Detail", DETAIL),
    ("formality_level", "Formality", FORMALITY),
];

/// Frames `prompt` with a role, thinking style, tone and banded levels.
pub fn render(prompt: &str, cursor: &mut ByteCursor<'_>) -> Result<Rendered, CursorError> {
    let mut levels = [0.0; DIMENSIONS.len()];
    for level in levels.iter_mut() {
        *level = cursor.level()?;
    }
    let role = cursor.pick(ROLES)?;
    let tone = cursor.pick(TONES)?;
    let style = cursor.pick(THINKING_STYLES)?;

    let mut parameters = Parameters::new();
    let mut block = String::new();
    for ((key, label, scale), level) in DIMENSIONS.iter().zip(levels) {
        let value = ParamValue::percent(level);
        block.push_str(&format!("- {label}: {value} ({})\n", scale.band(level)));
        parameters.insert((*key).to_string(), value);
    }
    parameters.insert("role".into(), role.into());
    parameters.insert("tone".into(), tone.into());
    parameters.insert("thinking_style".into(), style.into());

    let text = format!(
        "You are {role}, approaching this with {style} thinking.\n\n\
         Response calibration:\n{block}\n\
         Tone: {tone}\n\n\
         {prompt}"
    );

    Ok(Rendered {
        text,
        parameters,
        description: format!("{role} using {style} thinking in a {tone} tone"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_block() {
        let bytes = [200, 10, 230, 5, 3, 7, 2];
        let mut cursor = ByteCursor::new(&bytes);
        let rendered = render("Explain quantum computing", &mut cursor).unwrap();

        assert_eq!(cursor.consumed(), BYTE_BUDGET);
        assert!(rendered.text.contains("Technical depth: 78.4% (highly technical)"));
        assert!(rendered
            .text
            .contains("Creativity: 3.9% (low creativity, conventional)"));
        assert!(rendered.text.contains("Detail: 90.2% (highly detailed)"));
        assert!(rendered.text.contains("Formality: 2.0% (casual, conversational)"));
        assert!(rendered.text.starts_with(
            "You are an investigative journalist, approaching this with analogical thinking."
        ));
        assert!(rendered.text.contains("Tone: urgent"));
        assert!(rendered.text.ends_with("Explain quantum computing"));
        assert_eq!(
            rendered.parameters["role"],
            ParamValue::from("an investigative journalist")
        );
    }

    #[test]
    fn test_insufficient_bytes() {
        let mut cursor = ByteCursor::new(&[1, 2, 3]);
        assert!(render("p", &mut cursor).is_err());
    }
}
