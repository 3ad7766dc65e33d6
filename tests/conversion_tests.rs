use length_converter::conversion::{
    convert, find_rule, format_result, parse_kilometers, validate, ValidationResult, CONVERSIONS,
};
use length_converter::error::{ConversionError, InvalidReason};

fn rule(label: &str) -> &'static length_converter::ConversionRule {
    CONVERSIONS
        .iter()
        .find(|r| r.label == label)
        .expect("rule exists")
}

#[test]
fn test_conversion_table() {
    // Six rules in fixed display order
    let labels: Vec<&str> = CONVERSIONS.iter().map(|r| r.label).collect();
    assert_eq!(
        labels,
        vec!["km -> miles", "km -> yard", "km -> foot", "km -> inch", "km -> meter", "km -> cm"]
    );

    let factors: Vec<f32> = CONVERSIONS.iter().map(|r| r.factor).collect();
    assert_eq!(factors, vec![0.621, 1093.61, 3280.83, 39370.07, 1000.0, 100000.0]);
}

#[test]
fn test_rule_unit_names() {
    let units: Vec<&str> = CONVERSIONS.iter().map(|r| r.unit()).collect();
    assert_eq!(units, vec!["miles", "yard", "foot", "inch", "meter", "cm"]);
}

#[test]
fn test_scenarios() {
    // 1 km -> miles
    let miles = convert("1", rule("km -> miles").factor).unwrap();
    assert_eq!(format_result(miles), "0.621");

    // 1 km -> meter
    let meters = convert("1", rule("km -> meter").factor).unwrap();
    assert_eq!(format_result(meters), "1000.000");

    // 2.5 km -> cm
    let cm = convert("2.5", rule("km -> cm").factor).unwrap();
    assert_eq!(format_result(cm), "250000.000");

    // 1 km -> yard, three decimals even with f32 noise
    let yards = convert("1", rule("km -> yard").factor).unwrap();
    assert_eq!(format_result(yards), "1093.610");
}

#[test]
fn test_convert_is_parse_times_factor() {
    for text in ["0", "1", "2.5", "-3.75", "0.001", "12345.678", "1e3"] {
        let km: f32 = text.parse().unwrap();
        for r in CONVERSIONS.iter() {
            let value = convert(text, r.factor).unwrap();
            assert_eq!(value, km * r.factor, "{} with {}", text, r.label);
        }
    }
}

#[test]
fn test_convert_is_idempotent() {
    for r in CONVERSIONS.iter() {
        assert_eq!(convert("4.2", r.factor), convert("4.2", r.factor));
        assert_eq!(convert("abc", r.factor), convert("abc", r.factor));
    }
}

#[test]
fn test_negative_values() {
    let meters = convert("-2", 1000.0).unwrap();
    assert_eq!(format_result(meters), "-2000.000");
}

#[test]
fn test_invalid_input_rejected_for_every_rule() {
    for text in ["", "   ", "abc", "1.2.3", "12km", "--1", "1,5"] {
        assert!(!validate(text).is_valid(), "{:?} should be invalid", text);
        for r in CONVERSIONS.iter() {
            assert!(convert(text, r.factor).is_err(), "{:?} with {}", text, r.label);
        }
    }
}

#[test]
fn test_empty_input_is_not_zero() {
    assert_eq!(
        parse_kilometers(""),
        Err(ConversionError::InvalidNumericInput(InvalidReason::Empty))
    );
    assert_eq!(
        validate("  "),
        ValidationResult::Invalid(ConversionError::InvalidNumericInput(InvalidReason::Empty))
    );
}

#[test]
fn test_error_reasons() {
    let err = parse_kilometers("abc").unwrap_err();
    assert_eq!(err.reason(), &InvalidReason::Malformed("abc".to_string()));
    assert_eq!(err.to_string(), "Invalid input: \"abc\" is not a number");

    let err = parse_kilometers("1,5").unwrap_err();
    assert_eq!(err.reason(), &InvalidReason::DecimalComma("1,5".to_string()));

    // Two commas is just malformed
    let err = parse_kilometers("1,2,3").unwrap_err();
    assert_eq!(err.reason(), &InvalidReason::Malformed("1,2,3".to_string()));

    assert_eq!(
        parse_kilometers("").unwrap_err().to_string(),
        "Invalid input: nothing entered"
    );
}

#[test]
fn test_accepted_number_forms() {
    assert_eq!(parse_kilometers(" 3 "), Ok(3.0));
    assert_eq!(parse_kilometers(".5"), Ok(0.5));
    assert_eq!(parse_kilometers("1."), Ok(1.0));
    assert_eq!(parse_kilometers("+2"), Ok(2.0));
    assert_eq!(parse_kilometers("1e3"), Ok(1000.0));
}

#[test]
fn test_extreme_magnitudes_unguarded() {
    let value = convert("1e38", 100000.0).unwrap();
    assert!(value.is_infinite());
    assert_eq!(format_result(value), "inf");

    let value = convert("inf", 1000.0).unwrap();
    assert_eq!(format_result(value), "inf");

    let value = convert("NaN", 1000.0).unwrap();
    assert!(value.is_nan());
    assert_eq!(format_result(value), "NaN");
}

#[test]
fn test_format_result_three_decimals() {
    assert_eq!(format_result(0.0), "0.000");
    assert_eq!(format_result(1.23456), "1.235");
    assert_eq!(format_result(-0.5), "-0.500");
    assert_eq!(format_result(42.0), "42.000");
}

#[test]
fn test_find_rule() {
    assert_eq!(find_rule("1").map(|r| r.label), Some("km -> miles"));
    assert_eq!(find_rule("6").map(|r| r.label), Some("km -> cm"));
    assert_eq!(find_rule("0"), None);
    assert_eq!(find_rule("7"), None);

    assert_eq!(find_rule("meter").map(|r| r.factor), Some(1000.0));
    assert_eq!(find_rule("INCH").map(|r| r.label), Some("km -> inch"));
    assert_eq!(find_rule("km -> foot").map(|r| r.unit()), Some("foot"));
    assert_eq!(find_rule("parsec"), None);
}
