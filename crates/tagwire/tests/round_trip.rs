// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com
//
// Round-trip coverage: decode(encode(v)) == v across the full value domain,
// including type extremes and seeded random values.

use tagwire::{Decoder, Encoder, Value};

fn round_trip(value: &Value) {
    let mut enc = Encoder::new();
    enc.write(value).expect("encode value");

    let mut dec = Decoder::new(enc.bytes()).expect("decoder over encoded bytes");
    let decoded = dec.read().expect("decode value");
    assert_eq!(&decoded, value, "round-trip mismatch");
    assert!(dec.is_eof(), "decode must consume every encoded byte");
}

#[test]
fn round_trip_boolean() {
    round_trip(&Value::Bool(true));
    round_trip(&Value::Bool(false));
}

#[test]
fn round_trip_byte_extremes() {
    for b in [i8::MIN, -1, 0, 1, i8::MAX] {
        round_trip(&Value::Byte(b));
    }
}

#[test]
fn round_trip_short_extremes() {
    for s in [i16::MIN, -256, -1, 0, 255, i16::MAX] {
        round_trip(&Value::Short(s));
    }
}

#[test]
fn round_trip_integer_extremes() {
    for i in [i32::MIN, -65536, -1, 0, 305419896, i32::MAX] {
        round_trip(&Value::Int(i));
    }
}

#[test]
fn round_trip_long_extremes() {
    for l in [i64::MIN, -1, 0, 1311768467284833366, i64::MAX] {
        round_trip(&Value::Long(l));
    }
}

#[test]
fn round_trip_float_extremes() {
    for f in [
        f32::MIN,
        f32::MAX,
        f32::MIN_POSITIVE,
        f32::EPSILON,
        f32::INFINITY,
        f32::NEG_INFINITY,
        -0.0,
        0.0,
        std::f32::consts::PI,
    ] {
        round_trip(&Value::Float(f));
    }
}

#[test]
fn round_trip_float_nan_preserves_bits() {
    // NaN != NaN, so compare the bit pattern instead of the value.
    let mut enc = Encoder::new();
    enc.write(&Value::Float(f32::NAN)).expect("encode nan");
    let mut dec = Decoder::new(enc.bytes()).expect("decoder");
    match dec.read().expect("decode nan") {
        Value::Float(f) => assert_eq!(f.to_bits(), f32::NAN.to_bits()),
        other => panic!("expected float, got {:?}", other),
    }
}

#[test]
fn round_trip_double_extremes() {
    for d in [
        f64::MIN,
        f64::MAX,
        f64::MIN_POSITIVE,
        f64::EPSILON,
        f64::INFINITY,
        f64::NEG_INFINITY,
        -0.0,
        0.0,
        std::f64::consts::E,
    ] {
        round_trip(&Value::Double(d));
    }
}

#[test]
fn round_trip_character_domain_edges() {
    for c in ['\u{0000}', 'A', '\u{00E9}', '\u{4E2D}', '\u{FFFF}'] {
        round_trip(&Value::Char(c));
    }
}

#[test]
fn round_trip_strings() {
    for s in ["", "hi", "serializeString", "caf\u{00E9}", "\u{4E2D}\u{6587}", "\u{1F600}"] {
        round_trip(&Value::from(s));
    }
}

#[test]
fn round_trip_optionals() {
    round_trip(&Value::from(None));
    round_trip(&Value::from(Some(Value::Int(15))));
    round_trip(&Value::from(Some(Value::from("nested string"))));
    round_trip(&Value::from(Some(Value::from(Some(Value::from(Some(
        Value::Double(-2.5),
    )))))));
}

/// Random value in the encodable domain. Optionals recurse with a depth
/// limit so generation terminates.
fn random_value(depth: u32) -> Value {
    let pick = if depth == 0 {
        fastrand::u8(0..9)
    } else {
        fastrand::u8(0..10)
    };
    match pick {
        0 => Value::Bool(fastrand::bool()),
        1 => Value::Byte(fastrand::i8(..)),
        2 => Value::Short(fastrand::i16(..)),
        3 => Value::Int(fastrand::i32(..)),
        4 => Value::Long(fastrand::i64(..)),
        // NaN bit patterns are excluded here; NaN round-trips are covered
        // bit-exactly by a dedicated test (NaN != NaN under PartialEq).
        5 => Value::Float(loop {
            let f = f32::from_bits(fastrand::u32(..));
            if !f.is_nan() {
                break f;
            }
        }),
        6 => Value::Double(loop {
            let d = f64::from_bits(fastrand::u64(..));
            if !d.is_nan() {
                break d;
            }
        }),
        7 => Value::Char(fastrand::char('\u{0000}'..='\u{FFFF}')),
        8 => {
            let len = fastrand::usize(0..10);
            let s: String = (0..len)
                .map(|_| fastrand::char('\u{0000}'..='\u{FFFF}'))
                .collect();
            Value::String(s)
        }
        _ => {
            if fastrand::bool() {
                Value::Optional(Some(Box::new(random_value(depth - 1))))
            } else {
                Value::Optional(None)
            }
        }
    }
}

#[test]
fn round_trip_random_values() {
    fastrand::seed(0x7A67_0001);
    for _ in 0..500 {
        round_trip(&random_value(3));
    }
}

#[test]
fn round_trip_random_sequences_share_one_buffer() {
    fastrand::seed(0x7A67_0002);
    let values: Vec<Value> = (0..50).map(|_| random_value(2)).collect();

    let mut enc = Encoder::new();
    for v in &values {
        enc.write(v).expect("encode value");
    }

    let mut dec = Decoder::new(enc.bytes()).expect("decoder");
    for v in &values {
        assert_eq!(&dec.read().expect("decode value"), v);
    }
    assert!(dec.is_eof());
}
