use safe_numbers::{
    float_compare, safe_parse_float, safe_parse_float_with, safe_parse_int_with, AcceptParsed,
    NumberKind, NumericValue, PreserveText, SafeNumberError, UnsafePolicy,
};

fn number(n: f64) -> Result<NumericValue, SafeNumberError> {
    Ok(NumericValue::Number(n))
}

// ---------------------------------------------------------------------------
// default handler
// ---------------------------------------------------------------------------

#[test]
fn round_tripping_text_decodes_directly() {
    assert_eq!(safe_parse_float("3.45"), number(3.45));
    assert_eq!(safe_parse_float("1234.5"), number(1234.5));
    assert_eq!(safe_parse_float("-1234.5"), number(-1234.5));
    assert_eq!(safe_parse_float("0.100"), number(0.1));
    assert_eq!(safe_parse_float("0.000"), number(0.0));
    assert_eq!(safe_parse_float("0"), number(0.0));
    assert_eq!(safe_parse_float("100"), number(100.0));
    assert_eq!(safe_parse_float("123.456"), number(123.456));
    assert_eq!(safe_parse_float("0.05"), number(0.05));
    assert_eq!(safe_parse_float("9007199254740991"), number(9007199254740991.0));
}

#[test]
fn nan_and_infinities_are_safe() {
    assert!(safe_parse_float("").unwrap().is_nan());
    assert!(safe_parse_float("abc").unwrap().is_nan());
    assert!(safe_parse_float("NaN").unwrap().is_nan());
    assert_eq!(safe_parse_float("Infinity"), number(f64::INFINITY));
    assert_eq!(safe_parse_float("+Infinity"), number(f64::INFINITY));
    assert_eq!(safe_parse_float("-Infinity"), number(f64::NEG_INFINITY));
}

#[test]
fn lost_significance_raises() {
    let err = safe_parse_float("0.000000000001").unwrap_err();
    assert_eq!(
        err,
        SafeNumberError::Unsafe {
            kind: NumberKind::Float,
            text: "0.000000000001".into(),
            parsed: 1e-12,
        }
    );
    assert!(err.to_string().starts_with("unsafe float parse \"0.000000000001\""));

    for text in [
        "0.00000000000000000001",
        "9007199254740993",
        "12345678901234567890",
        "0.1234567890123456789",
    ] {
        assert!(
            matches!(
                safe_parse_float(text),
                Err(SafeNumberError::Unsafe {
                    kind: NumberKind::Float,
                    ..
                })
            ),
            "expected {text:?} to raise"
        );
    }
}

// ---------------------------------------------------------------------------
// injected handlers
// ---------------------------------------------------------------------------

#[test]
fn preserve_text_returns_wire_text() {
    assert_eq!(safe_parse_float_with("1234.5", &PreserveText), number(1234.5));
    assert_eq!(
        safe_parse_float_with("9007199254740993", &PreserveText),
        Ok(NumericValue::Text("9007199254740993".into()))
    );
    assert_eq!(
        safe_parse_float_with("0.000000000001", &PreserveText),
        Ok(NumericValue::Text("0.000000000001".into()))
    );
}

#[test]
fn accept_parsed_returns_lossy_value() {
    assert_eq!(
        safe_parse_float_with("0.00000000000000000001", &AcceptParsed),
        number(0.00000000000000000001)
    );
    assert_eq!(
        safe_parse_float_with("9007199254740993", &AcceptParsed),
        number(9007199254740992.0)
    );
}

#[test]
fn policy_handlers() {
    let text = UnsafePolicy::Text.handler(NumberKind::Float);
    assert_eq!(
        safe_parse_float_with("12345678901234567890", &text),
        Ok(NumericValue::Text("12345678901234567890".into()))
    );
    let raise = UnsafePolicy::Raise.handler(NumberKind::Float);
    assert!(safe_parse_float_with("12345678901234567890", &raise).is_err());
}

// ---------------------------------------------------------------------------
// verification happens after parsing
// ---------------------------------------------------------------------------

#[test]
fn representable_values_past_two_pow_53_pass() {
    // The integer decoder rejects these by magnitude, the float decoder only
    // sees that the parsed double re-renders to the same digits.
    assert_eq!(
        safe_parse_float("9007199254740994"),
        number(9007199254740994.0)
    );
    assert_eq!(
        safe_parse_float("18014398509481988"),
        number(18014398509481988.0)
    );
    assert!(safe_parse_int_with("9007199254740994", &safe_numbers::DEFAULT_UNSAFE_INT).is_err());
}

#[test]
fn neighbour_collapsing_during_parse_is_caught_only_by_rendering() {
    assert!(float_compare(9007199254740992.0, "9007199254740992"));
    assert!(!float_compare(9007199254740992.0, "9007199254740993"));
    assert!(safe_parse_float("9007199254740992").is_ok());
    assert!(safe_parse_float("9007199254740993").is_err());
}

#[test]
fn every_digit_counts_towards_precision() {
    // Leading zeros widen the rendering, trailing zeros are trimmed away.
    assert!(float_compare(0.1, "0.1"));
    assert!(float_compare(0.1, "0.10000"));
    assert!(float_compare(0.001, "0.001"));
    assert!(!float_compare(0.1, "0.1000000000000000000"));
}

#[test]
fn decoding_twice_is_identical() {
    for text in ["1234.5", "0.000000000001", "", "Infinity", "9007199254740993"] {
        let first = safe_parse_float_with(text, &PreserveText).unwrap();
        let second = safe_parse_float_with(text, &PreserveText).unwrap();
        assert_eq!(format!("{first:?}"), format!("{second:?}"));
    }
}

#[test]
fn texts_longer_than_one_hundred_digits_are_still_judged() {
    let trailing_zeros = format!("1.{}", "0".repeat(150));
    assert_eq!(safe_parse_float(&trailing_zeros), number(1.0));

    let tiny = format!("0.{}1", "0".repeat(120));
    assert!(matches!(
        safe_parse_float(&tiny),
        Err(SafeNumberError::Unsafe {
            kind: NumberKind::Float,
            ..
        })
    ));
    assert_eq!(
        safe_parse_float_with(&tiny, &PreserveText),
        Ok(NumericValue::Text(tiny.clone()))
    );

    // Overflows to infinity, which is never delegated.
    assert_eq!(safe_parse_float(&"9".repeat(5000)), number(f64::INFINITY));
}
