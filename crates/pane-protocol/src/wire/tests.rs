//! Tests for the wire value model and the big-integer codec.

use super::*;
use proptest::prelude::*;

fn round_trip(value: &WireValue) -> WireValue {
    decode(&encode(value)).unwrap()
}

#[test]
fn big_integer_travels_as_bare_digits() {
    let value = WireValue::integer(12_345_678_901_234_567u64);
    assert!(matches!(value, WireValue::BigInt(_)));
    assert_eq!(encode(&value), "12345678901234567");
}

#[test]
fn bare_big_integer_is_restored() {
    let value = decode(r#"{"id":12345678901234567890}"#).unwrap();
    assert_eq!(
        value.get("id"),
        Some(&WireValue::BigInt("12345678901234567890".parse().unwrap()))
    );
}

#[test]
fn integer_beyond_u64_survives_the_text_form() {
    let text = r#"[123456789012345678901234567890]"#;
    let value = decode(text).unwrap();
    assert_eq!(encode(&value), text);
}

#[test]
fn integer_beyond_u64_fails_typed_decode() {
    let value = decode("123456789012345678901234567890").unwrap();
    let err = from_wire::<u64>(value).unwrap_err();
    assert!(matches!(
        err,
        ProtocolViolation::Encoding(EncodingFailure::IntegerOutOfRange(_))
    ));
}

#[test]
fn threshold_boundary() {
    let below = WireValue::integer(SAFE_INTEGER_LIMIT - 1);
    let at = WireValue::integer(SAFE_INTEGER_LIMIT);
    assert!(matches!(below, WireValue::Number(_)));
    assert!(matches!(at, WireValue::BigInt(_)));
    assert_eq!(encode(&below), "999999999999999");
    assert_eq!(encode(&at), "1000000000000000");
    assert_eq!(round_trip(&below), below);
    assert_eq!(round_trip(&at), at);
}

#[test]
fn sixteen_digit_integer_is_tagged() {
    let value = WireValue::integer(9_007_199_254_740_993u64);
    assert!(matches!(value, WireValue::BigInt(_)));
    assert_eq!(encode(&value), "9007199254740993");
    assert_eq!(round_trip(&value), value);

    let decoded = decode(r#"{"id":9007199254740993}"#).unwrap();
    assert_eq!(
        decoded.get("id"),
        Some(&WireValue::BigInt(BigInt::from(9_007_199_254_740_993u64)))
    );
}

#[test]
fn negative_big_integer() {
    let value = WireValue::integer(-12_345_678_901_234_567i64);
    assert_eq!(encode(&value), "-12345678901234567");
    assert_eq!(round_trip(&value), value);
}

#[test]
fn small_integers_carry_no_sentinel() {
    for n in [0i64, 1, -1, 42, 123_456_789_012_345, -999_999_999_999_999] {
        let text = encode(&WireValue::integer(n));
        assert_eq!(text, n.to_string());
        assert!(!text.contains(SENTINEL));
    }
}

#[test]
fn numeric_looking_strings_round_trip_unchanged() {
    for s in [
        "1234",
        "123456789012345",
        "123456789012345n",
        "1234567890123456",
        "1234567890123456n",
        "12345678901234567",
        "-12345678901234567",
    ] {
        let value = WireValue::String(s.to_string());
        assert_eq!(round_trip(&value), value, "string {s:?}");
    }
}

#[test]
fn tag_like_string_is_escaped_not_promoted() {
    let value = WireValue::String("12345678901234567n".into());
    let text = encode(&value);
    assert_eq!(text, r#""12345678901234567nn""#);
    assert_eq!(decode(&text).unwrap(), value);

    let doubled = WireValue::String("12345678901234567nn".into());
    assert_eq!(round_trip(&doubled), doubled);
}

#[test]
fn tag_like_object_key_round_trips() {
    let value = WireValue::object([("12345678901234567n", WireValue::Bool(true))]);
    assert_eq!(round_trip(&value), value);
}

#[test]
fn digits_inside_strings_are_not_rewritten() {
    let value = WireValue::String(r#"x":12345678901234567,"y"#.into());
    assert_eq!(round_trip(&value), value);

    let quoted = WireValue::String(r#"say "12345678901234567n""#.into());
    assert_eq!(round_trip(&quoted), quoted);
}

#[test]
fn long_floats_are_not_tagged() {
    let value = WireValue::Number(serde_json::Number::from_f64(1.234_567_890_123_456_7e30).unwrap());
    let text = encode(&value);
    assert!(!text.contains('"'));
    assert_eq!(round_trip(&value), value);
}

#[test]
fn oversized_plain_number_is_tagged_anyway() {
    let value = WireValue::Number(serde_json::Number::from(u64::MAX));
    assert_eq!(encode(&value), u64::MAX.to_string());
    assert_eq!(round_trip(&value), WireValue::integer(u64::MAX));
}

#[test]
fn unterminated_string_is_malformed() {
    let err = decode(r#"{"a":"12345678901234567"#).unwrap_err();
    assert!(matches!(err, EncodingFailure::Malformed { offset: 5, .. }));
}

#[test]
fn stray_sentinel_is_malformed() {
    assert!(matches!(
        decode("12345678901234567n"),
        Err(EncodingFailure::Malformed { .. })
    ));
}

#[test]
fn invalid_json_is_malformed() {
    assert!(decode(r#"{"a":}"#).is_err());
    assert!(decode("").is_err());
    assert!(decode("000000000000000000012").is_err());
}

#[test]
fn typed_u64_round_trip() {
    #[derive(Debug, PartialEq, serde::Serialize, serde::Deserialize)]
    struct Touch {
        id: u64,
        phase: String,
    }
    let touch = Touch {
        id: u64::MAX,
        phase: "started".into(),
    };
    let text = to_text(&touch).unwrap();
    assert_eq!(text, format!(r#"{{"id":{},"phase":"started"}}"#, u64::MAX));
    let back: Touch = from_text(&text).unwrap();
    assert_eq!(back, touch);
}

#[test]
fn from_serde_value_promotes_large_numbers() {
    let wire = WireValue::from(serde_json::json!({ "small": 5, "large": 18_000_000_000_000_000u64 }));
    assert!(matches!(wire.get("small"), Some(WireValue::Number(_))));
    assert!(matches!(wire.get("large"), Some(WireValue::BigInt(_))));
}

#[test]
fn display_is_wire_text() {
    let value = WireValue::object([("id", WireValue::integer(SAFE_INTEGER_LIMIT))]);
    assert_eq!(value.to_string(), r#"{"id":1000000000000000}"#);
}

proptest! {
    #[test]
    fn any_integer_round_trips(n in any::<i128>()) {
        let value = WireValue::integer(n);
        let text = encode(&value);
        prop_assert_eq!(&text, &n.to_string());
        prop_assert_eq!(decode(&text).unwrap(), value);
    }

    #[test]
    fn small_integers_stay_plain_numbers(n in -999_999_999_999_999i64..=999_999_999_999_999i64) {
        let decoded = decode(&encode(&WireValue::integer(n))).unwrap();
        prop_assert_eq!(decoded, WireValue::Number(n.into()));
    }

    #[test]
    fn any_string_round_trips(s in any::<String>()) {
        let value = WireValue::String(s);
        prop_assert_eq!(round_trip(&value), value);
    }

    #[test]
    fn flat_objects_round_trip(entries in proptest::collection::btree_map("[a-z0-9]{0,20}n{0,2}", any::<i64>(), 0..8)) {
        let value = WireValue::Object(
            entries.into_iter().map(|(k, v)| (k, WireValue::integer(v))).collect(),
        );
        prop_assert_eq!(round_trip(&value), value);
    }
}
