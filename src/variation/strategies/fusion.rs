//! Cross-domain fusion of two distinct domains.

use crate::variation::cursor::{ByteCursor, CursorError};
use crate::variation::record::{ParamValue, Parameters, Rendered};
use crate::variation::vocabulary::{CONNECTION_TYPES, DOMAINS, FUSION_APPROACHES, METAPHOR_DENSITY};

/// Two domains, connection, fusion approach and density.
pub const BYTE_BUDGET: usize = 5;

/// Rewrites `prompt` as a blend of two distinct domains.
pub fn render(prompt: &str, cursor: &mut ByteCursor<'_>) -> Result<Rendered, CursorError> {
    let first = cursor.index(DOMAINS.len())?;
    let second = cursor.pick_distinct(DOMAINS.len(), &[first])?;
    let (domain_a, domain_b) = (DOMAINS[first], DOMAINS[second]);

    let connection = cursor
        .pick(CONNECTION_TYPES)?
        .replace("{a}", domain_a)
        .replace("{b}", domain_b);
    let approach = cursor.pick(FUSION_APPROACHES)?;
    let density = cursor.level()?;
    let density_value = ParamValue::percent(density);

    let text = format!(
        "{prompt}\n\n\
         Approach this by fusing two unrelated domains: {domain_a} and {domain_b}.\n\
         {connection}\n\
         Fusion approach: {approach}\n\
         Metaphor density: {density_value} ({})",
        METAPHOR_DENSITY.band(density),
    );

    let mut parameters = Parameters::new();
    parameters.insert(
        "domains".into(),
        ParamValue::List(vec![domain_a.to_string(), domain_b.to_string()]),
    );
    parameters.insert("connection".into(), connection.into());
    parameters.insert("fusion_approach".into(), approach.into());
    parameters.insert("metaphor_density".into(), density_value);

    Ok(Rendered {
        text,
        parameters,
        description: format!("{domain_a} × {domain_b} via {approach}"),
    })
}
