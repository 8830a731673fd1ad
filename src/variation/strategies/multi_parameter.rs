//! Multi-parameter optimization: numeric targets plus focus areas.

use crate::variation::cursor::{ByteCursor, CursorError};
use crate::variation::record::{ParamValue, Parameters, Rendered};
use crate::variation::vocabulary::{ABSTRACTION, ASPECTS, DEPTH_VARIATION, STRUCTURE_STYLES};

const MAX_FOCUS: u32 = 3;

/// Eight scalar parameters plus the reserved focus slots.
pub const BYTE_BUDGET: usize = 8 + MAX_FOCUS as usize;

/// Appends numeric targets and focus aspects to `prompt`.
pub fn render(prompt: &str, cursor: &mut ByteCursor<'_>) -> Result<Rendered, CursorError> {
    let word_count = cursor.linear(100, 4)?;
    let examples = cursor.range(1, 5)?;
    let perspectives = cursor.range(1, 4)?;
    let abstraction = cursor.level()?;
    let confidence = cursor.range(50, 99)?;
    let depth = cursor.level()?;
    let structure = cursor.pick(STRUCTURE_STYLES)?;

    let focus_count = cursor.range(1, MAX_FOCUS)? as usize;
    let mut taken = Vec::with_capacity(MAX_FOCUS as usize);
    for _ in 0..MAX_FOCUS {
        let idx = cursor.pick_distinct(ASPECTS.len(), &taken)?;
        taken.push(idx);
    }
    let focus: Vec<String> = taken[..focus_count]
        .iter()
        .map(|&idx| ASPECTS[idx].to_string())
        .collect();

    let abstraction_value = ParamValue::percent(abstraction);
    let depth_value = ParamValue::percent(depth);
    let text = format!(
        "{prompt}\n\n\
         Optimization parameters:\n\
         - Target length: ~{word_count} words\n\
         - Examples to include: {examples}\n\
         - Perspectives to consider: {perspectives}\n\
         - Abstraction level: {abstraction_value} ({})\n\
         - Confidence threshold: only state claims you hold with at least {confidence}% confidence\n\
         - Depth variation: {depth_value} ({})\n\
         - Structure: {structure}\n\n\
         Focus areas: {}",
        ABSTRACTION.band(abstraction),
        DEPTH_VARIATION.band(depth),
        focus.join(", "),
    );

    let mut parameters = Parameters::new();
    parameters.insert("word_count".into(), word_count.into());
    parameters.insert("examples".into(), examples.into());
    parameters.insert("perspectives".into(), perspectives.into());
    parameters.insert("abstraction_level".into(), abstraction_value);
    parameters.insert(
        "confidence_threshold".into(),
        ParamValue::Percent(f64::from(confidence)),
    );
    parameters.insert("depth_variation".into(), depth_value);
    parameters.insert("structure_style".into(), structure.into());
    parameters.insert("focus_areas".into(), ParamValue::List(focus));

    Ok(Rendered {
        text,
        parameters,
        description: format!(
            "~{word_count} words, {examples} examples, {perspectives} perspectives, {structure}"
        ),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_conversions() {
        let bytes = [255, 7, 4, 0, 10, 255, 1, 2, 0, 0, 5];
        let mut cursor = ByteCursor::new(&bytes);
        let rendered = render("Plan a garden", &mut cursor).unwrap();

        assert_eq!(cursor.consumed(), BYTE_BUDGET);
        assert_eq!(rendered.parameters["word_count"], ParamValue::Integer(1120));
        assert_eq!(rendered.parameters["examples"], ParamValue::Integer(3));
        assert_eq!(rendered.parameters["perspectives"], ParamValue::Integer(1));
        assert_eq!(
            rendered.parameters["confidence_threshold"],
            ParamValue::Percent(60.0)
        );
        assert!(rendered.text.contains("Abstraction level: 0.0% (concrete and grounded)"));
        assert!(rendered.text.contains("Depth variation: 100.0% (highly varied depth)"));
        assert!(rendered.text.contains("Structure: problem then solution"));
    }

    #[test]
    fn test_focus_areas_distinct() {
        let bytes = [0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0];
        let mut cursor = ByteCursor::new(&bytes);
        let rendered = render("p", &mut cursor).unwrap();

        assert_eq!(
            rendered.parameters["focus_areas"],
            ParamValue::List(vec![
                "practical applications".into(),
                "historical context".into(),
                "common misconceptions".into(),
            ])
        );
        assert!(rendered.text.ends_with(
            "Focus areas: practical applications, historical context, common misconceptions"
        ));
    }
}
