//! Structural blueprint: shape, rhythm and flow of the response.

use crate::variation::cursor::{ByteCursor, CursorError};
use crate::variation::record::{ParamValue, Parameters, Rendered};
use crate::variation::vocabulary::{ARCHITECTURES, ENERGY, RHYTHMS, STRUCTURES, TRANSITIONS};

/// Four picks and one level.
pub const BYTE_BUDGET: usize = 5;

/// Appends a structural blueprint to `prompt`.
pub fn render(prompt: &str, cursor: &mut ByteCursor<'_>) -> Result<Rendered, CursorError> {
    let structure = cursor.pick(STRUCTURES)?;
    let rhythm = cursor.pick(RHYTHMS)?;
    let architecture = cursor.pick(ARCHITECTURES)?;
    let transition = cursor.pick(TRANSITIONS)?;
    let energy = cursor.level()?;
    let energy_value = ParamValue::percent(energy);

    let text = format!(
        "{prompt}\n\n\
         Structural blueprint:\n\
         - Structure: {structure}\n\
         - Rhythm: {rhythm}\n\
         - Information architecture: {architecture}\n\
         - Transitions: {transition}\n\
         - Energy: {energy_value} ({})\n\n\
         Follow this blueprint so the shape of the response carries meaning alongside its content.",
        ENERGY.band(energy),
    );

    let mut parameters = Parameters::new();
    parameters.insert("structure".into(), structure.into());
    parameters.insert("rhythm".into(), rhythm.into());
    parameters.insert("architecture".into(), architecture.into());
    parameters.insert("transition".into(), transition.into());
    parameters.insert("energy".into(), energy_value);

    let short = structure.split(':').next().unwrap_or(structure);
    Ok(Rendered {
        text,
        parameters,
        description: format!("{short} structure, {architecture}"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blueprint_block() {
        let bytes = [2, 1, 5, 3, 250];
        let mut cursor = ByteCursor::new(&bytes);
        let rendered = render("Describe a city at night", &mut cursor).unwrap();

        assert_eq!(cursor.consumed(), BYTE_BUDGET);
        assert!(rendered.text.starts_with("Describe a city at night\n\nStructural blueprint:"));
        assert!(rendered.text.contains("- Rhythm: steady, even cadence\n"));
        assert!(rendered.text.contains("- Information architecture: timeline\n"));
        assert!(rendered.text.contains("- Transitions: contrast pivots\n"));
        assert!(rendered.text.contains("- Energy: 98.0% (highly energetic)"));
        assert_eq!(rendered.description, "spiral structure, timeline");
    }
}
