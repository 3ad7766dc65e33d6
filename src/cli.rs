use crate::conversion::{self, format_result, CONVERSIONS};
use crate::error::CliError;

// One line per rule, position first so it can be passed back to --rule
pub fn rule_lines() -> Vec<String> {
    CONVERSIONS
        .iter()
        .enumerate()
        .map(|(i, rule)| format!("{}. {} (x {})", i + 1, rule.label, rule.factor))
        .collect()
}

/// Converts `value` headlessly.
///
/// With a rule key only that rule's formatted result is returned, otherwise
/// one `<label>: <result>` line per rule in display order.
pub fn conversion_lines(value: &str, rule_key: Option<&str>) -> Result<Vec<String>, CliError> {
    match rule_key {
        Some(key) => {
            let rule = conversion::find_rule(key)
                .ok_or_else(|| CliError::UnknownRule(key.to_string()))?;
            Ok(vec![format_result(rule.apply(value)?)])
        }
        None => CONVERSIONS
            .iter()
            .map(|rule| -> Result<String, CliError> {
                Ok(format!("{}: {}", rule.label, format_result(rule.apply(value)?)))
            })
            .collect(),
    }
}
