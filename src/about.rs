use crate::conversion::CONVERSIONS;

pub fn about() -> Vec<String> {
    let mut lines = vec![
        "Converts a length given in kilometers into miles, yards, feet, \
        inches, meters or centimeters.".to_string(),
        "Type a value using '.' as the decimal separator and press one of the \
        conversion buttons.".to_string(),
        "\n".to_string(),
    ];
    for rule in CONVERSIONS.iter() {
        lines.push(format!("{}: x {}", rule.label, rule.factor));
    }
    lines.push("\n".to_string());
    lines.push("Results are shown with three decimal places.".to_string());
    lines
}
