//! Property-based round-trip tests.
//!
//! Generates random value trees and checks that serialization and parsing
//! are inverses, that the indented form is stable under re-parsing, and that
//! compact output agrees with `serde_json` as an independent oracle.
//!
//! Two generators: `arb_value` allows arbitrary strings (including raw
//! control characters, which this crate passes through verbatim), and
//! `arb_clean_value` restricts strings to printable ASCII for the
//! differential properties, since strict JSON parsers reject unescaped
//! control characters.

use indexmap::IndexMap;
use jsontree::{parse, serialize, IndentationPolicy, Value};
use proptest::prelude::*;
use proptest::strategy::BoxedStrategy;

fn arb_key() -> impl Strategy<Value = String> {
    "[a-zA-Z_][a-zA-Z0-9_]{0,12}"
}

fn arb_finite_float() -> impl Strategy<Value = f64> {
    any::<f64>().prop_filter("finite floats only", |f| f.is_finite())
}

fn arb_value_with_strings(strings: BoxedStrategy<String>) -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::Int),
        arb_finite_float().prop_map(Value::Float),
        strings.prop_map(Value::String),
    ];
    leaf.prop_recursive(4, 48, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Value::Array),
            prop::collection::vec((arb_key(), inner), 0..6).prop_map(|entries| {
                // Collecting through the map deduplicates repeated keys.
                let mut object = IndexMap::new();
                for (key, value) in entries {
                    object.insert(key, value);
                }
                Value::Object(object)
            }),
        ]
    })
}

fn arb_value() -> impl Strategy<Value = Value> {
    arb_value_with_strings(any::<String>().boxed())
}

fn arb_clean_value() -> impl Strategy<Value = Value> {
    arb_value_with_strings("[ -~]{0,24}".boxed())
}

proptest! {
    #[test]
    fn compact_roundtrip(value in arb_value()) {
        let text = serialize(&value, None);
        prop_assert_eq!(parse(&text).unwrap(), value);
    }

    #[test]
    fn indented_roundtrip(value in arb_value()) {
        let text = serialize(&value, Some(IndentationPolicy::default()));
        prop_assert_eq!(parse(&text).unwrap(), value);
    }

    #[test]
    fn indented_serialization_is_idempotent(value in arb_value()) {
        let policy = IndentationPolicy::new("  ", " ", "\n");
        let once = serialize(&value, Some(policy.clone()));
        let twice = serialize(&parse(&once).unwrap(), Some(policy));
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn compact_output_agrees_with_serde_json(value in arb_clean_value()) {
        let text = serialize(&value, None);
        let oracle: serde_json::Value = serde_json::from_str(&text).unwrap();
        prop_assert_eq!(Value::from(oracle), value);
    }

    #[test]
    fn serde_json_output_reparses(value in arb_clean_value()) {
        let text = serde_json::to_string(&value).unwrap();
        prop_assert_eq!(parse(&text).unwrap(), value);
    }

    #[test]
    fn integers_roundtrip_exactly(i in any::<i64>()) {
        prop_assert_eq!(parse(&i.to_string()).unwrap(), Value::Int(i));
    }

    #[test]
    fn floats_roundtrip_exactly(f in arb_finite_float()) {
        let text = serialize(&Value::Float(f), None);
        prop_assert_eq!(parse(&text).unwrap(), Value::Float(f));
    }
}
