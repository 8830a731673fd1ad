//! Creative constraints: two to four filled constraint phrases.

use crate::variation::cursor::{ByteCursor, CursorError};
use crate::variation::record::{ParamValue, Parameters, Rendered};
use crate::variation::vocabulary::CONSTRAINT_TEMPLATES;

const MIN_CONSTRAINTS: u32 = 2;
const MAX_CONSTRAINTS: u32 = 4;

/// Count byte plus a (template, value) pair for every possible slot.
pub const BYTE_BUDGET: usize = 1 + 2 * MAX_CONSTRAINTS as usize;

/// Appends filled constraint phrases to `prompt`.
pub fn render(prompt: &str, cursor: &mut ByteCursor<'_>) -> Result<Rendered, CursorError> {
    let count = cursor.range(MIN_CONSTRAINTS, MAX_CONSTRAINTS)? as usize;

    let mut taken = Vec::with_capacity(count);
    let mut phrases = Vec::with_capacity(count);
    let mut categories = Vec::with_capacity(count);
    for slot in 0..MAX_CONSTRAINTS as usize {
        if slot >= count {
            // Unused slots are still consumed so the budget stays fixed.
            cursor.skip(2)?;
            continue;
        }
        let idx = cursor.pick_distinct(CONSTRAINT_TEMPLATES.len(), &taken)?;
        taken.push(idx);

        let template = &CONSTRAINT_TEMPLATES[idx];
        let value = cursor.pick(template.values)?;
        phrases.push(template.fill(value));
        categories.push(template.category.to_string());
    }

    let bullets: String = phrases.iter().map(|p| format!("• {p}\n")).collect();
    let text = format!(
        "{prompt}\n\n\
         Creative constraints:\n{bullets}\n\
         Let these constraints jointly shape your response; each one should be visible in the result."
    );

    let mut parameters = Parameters::new();
    parameters.insert("constraint_count".into(), ParamValue::Integer(count as u32));
    parameters.insert("constraints".into(), ParamValue::List(phrases));
    parameters.insert("constraint_categories".into(), ParamValue::List(categories.clone()));

    Ok(Rendered {
        text,
        parameters,
        description: format!("{count} creative constraints ({})", categories.join(", ")),
    })
}
