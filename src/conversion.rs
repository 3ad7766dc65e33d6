use crate::error::{ConversionError, InvalidReason};
use log::debug;

// A single "km -> unit" button: what it says and what it multiplies by
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConversionRule {
    pub label: &'static str,
    pub factor: f32,
}

impl ConversionRule {
    /// Target unit name, i.e. the part of the label after `-> `.
    pub fn unit(&self) -> &'static str {
        match self.label.split_once("->") {
            Some((_, unit)) => unit.trim(),
            None => self.label,
        }
    }

    pub fn apply(&self, raw_text: &str) -> ConversionResult {
        convert(raw_text, self.factor)
    }
}

// Display order matters, the UI lays these out as two rows of three.
pub static CONVERSIONS: [ConversionRule; 6] = [
    ConversionRule { label: "km -> miles", factor: 0.621 },
    ConversionRule { label: "km -> yard", factor: 1093.61 },
    ConversionRule { label: "km -> foot", factor: 3280.83 },
    ConversionRule { label: "km -> inch", factor: 39370.07 },
    ConversionRule { label: "km -> meter", factor: 1000.0 },
    ConversionRule { label: "km -> cm", factor: 100000.0 },
];

pub const RESULT_DECIMALS: usize = 3;

pub type ConversionResult = Result<f32, ConversionError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    Valid,
    Invalid(ConversionError),
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid)
    }
}

/// Parses a kilometer value typed by the user.
///
/// Surrounding whitespace is ignored and `.` is the only accepted decimal
/// separator. Anything `f32::from_str` accepts after trimming is a number,
/// which includes signs, exponents (`1e3`), `inf` and `NaN`.
///
/// # Errors
/// `InvalidNumericInput` with `Empty` for blank text, `DecimalComma` when the
/// text looks like a comma-separated decimal, `Malformed` otherwise.
pub fn parse_kilometers(raw_text: &str) -> Result<f32, ConversionError> {
    let text = raw_text.trim();
    if text.is_empty() {
        return Err(InvalidReason::Empty.into());
    }

    match text.parse::<f32>() {
        Ok(value) => Ok(value),
        Err(_) => {
            // "1,5" parses once the comma is a dot
            if text.contains(',') && text.replacen(',', ".", 1).parse::<f32>().is_ok() {
                Err(InvalidReason::DecimalComma(text.to_string()).into())
            } else {
                Err(InvalidReason::Malformed(text.to_string()).into())
            }
        }
    }
}

pub fn validate(raw_text: &str) -> ValidationResult {
    match parse_kilometers(raw_text) {
        Ok(_) => ValidationResult::Valid,
        Err(e) => ValidationResult::Invalid(e),
    }
}

/// Converts `raw_text` kilometers using `factor`. The product is returned
/// unrounded; see [`format_result`] for display.
pub fn convert(raw_text: &str, factor: f32) -> ConversionResult {
    let km = parse_kilometers(raw_text)?;
    let value = km * factor;
    debug!("convert: {} km * {} = {}", km, factor, value);
    Ok(value)
}

pub fn format_result(value: f32) -> String {
    format!("{:.*}", RESULT_DECIMALS, value)
}

/// Looks a rule up by 1-based position, full label or unit name.
/// Label and unit matching ignore case.
pub fn find_rule(key: &str) -> Option<&'static ConversionRule> {
    let key = key.trim();
    if let Ok(position) = key.parse::<usize>() {
        return position.checked_sub(1).and_then(|i| CONVERSIONS.get(i));
    }
    CONVERSIONS.iter().find(|rule| {
        rule.label.eq_ignore_ascii_case(key) || rule.unit().eq_ignore_ascii_case(key)
    })
}
