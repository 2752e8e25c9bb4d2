// File: crates/sheet-export/tests/cell.rs
// Purpose: Cell classification under forced and inferred types, and text escaping.

use proptest::prelude::*;
use sheet_export::cell::{escape_text, format_number, parse_strict, to_fixed};
use sheet_export::{type_cell, Cell, FieldValue, TypeHint};

#[test]
fn forced_string_keeps_leading_zeros() {
    let c = type_cell(&"007".into(), Some(TypeHint::String));
    assert_eq!(c, Cell::String("007".to_string()));
    assert_eq!(c.ss_type(), "String");
}

#[test]
fn forced_string_formats_numbers() {
    assert_eq!(type_cell(&FieldValue::Number(12.5), Some(TypeHint::String)), Cell::String("12.5".into()));
    assert_eq!(type_cell(&FieldValue::Null, Some(TypeHint::String)), Cell::String(String::new()));
}

#[test]
fn inferred_numeric_text_becomes_number() {
    assert_eq!(type_cell(&"3.14".into(), None), Cell::Number(3.14));
    assert_eq!(type_cell(&"  42 ".into(), None), Cell::Number(42.0));
    assert_eq!(type_cell(&"1e3".into(), None), Cell::Number(1000.0));
    assert_eq!(type_cell(&FieldValue::Number(-2.0), None), Cell::Number(-2.0));
}

#[test]
fn inferred_non_numeric_stays_text() {
    assert_eq!(type_cell(&"abc".into(), None), Cell::String("abc".into()));
    assert_eq!(type_cell(&"".into(), None), Cell::String(String::new()));
    assert_eq!(type_cell(&"   ".into(), None), Cell::String("   ".into()));
    assert_eq!(type_cell(&"NaN".into(), None), Cell::String("NaN".into()));
    assert_eq!(type_cell(&"inf".into(), None), Cell::String("inf".into()));
    assert_eq!(type_cell(&"2024-01-02 10:00:00".into(), None), Cell::String("2024-01-02 10:00:00".into()));
    assert_eq!(type_cell(&FieldValue::Null, None), Cell::String(String::new()));
}

#[test]
fn non_finite_number_degrades_to_text() {
    assert_eq!(type_cell(&FieldValue::Number(f64::NAN), None), Cell::String("NaN".into()));
}

#[test]
fn forced_number_falls_back_to_zero() {
    assert_eq!(type_cell(&"abc".into(), Some(TypeHint::Number)), Cell::Number(0.0));
    assert_eq!(type_cell(&FieldValue::Number(f64::INFINITY), Some(TypeHint::Number)), Cell::Number(0.0));
    assert_eq!(type_cell(&FieldValue::Null, Some(TypeHint::Number)), Cell::Number(0.0));
    assert_eq!(type_cell(&" 8.5".into(), Some(TypeHint::Number)), Cell::Number(8.5));
}

#[test]
fn escaping_covers_all_five_specials() {
    assert_eq!(escape_text("<A&B>"), "&lt;A&amp;B&gt;");
    assert_eq!(escape_text(r#"a"b'c"#), "a&quot;b&apos;c");
    assert_eq!(escape_text("plain"), "plain");
}

#[test]
fn number_text_is_shortest_and_unsigned_zero() {
    assert_eq!(format_number(3.0), "3");
    assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
    assert_eq!(format_number(-0.0), "0");
    assert_eq!(Cell::Number(1.25).data_text(), "1.25");
}

#[test]
fn to_fixed_matches_decimal_halves_only() {
    assert_eq!(to_fixed(0.0625, 3), "0.063");
    assert_eq!(to_fixed(0.125, 2), "0.13");
    // not exactly representable, stored below the half
    assert_eq!(to_fixed(1.005, 2), "1.00");
    assert_eq!(to_fixed(2.0, 3), "2.000");
    assert_eq!(to_fixed(-0.0004, 3), "-0.000");
}

#[test]
fn field_values_deserialize_untagged() {
    let v: Vec<FieldValue> = serde_json::from_str(r#"[1.5, "x", null]"#).unwrap();
    assert_eq!(v, [FieldValue::Number(1.5), FieldValue::Text("x".into()), FieldValue::Null]);
}

proptest! {
    #[test]
    fn typing_always_yields_one_of_two_kinds(s in ".*", hint in prop::option::of(prop_oneof![Just(TypeHint::String), Just(TypeHint::Number)])) {
        let c = type_cell(&FieldValue::Text(s.clone()), hint);
        match (hint, &c) {
            (Some(TypeHint::String), Cell::String(t)) => prop_assert_eq!(t, &s),
            (Some(TypeHint::Number), Cell::Number(n)) => prop_assert!(n.is_finite()),
            (None, Cell::Number(n)) => prop_assert_eq!(Some(*n), parse_strict(&s)),
            (None, Cell::String(t)) => { prop_assert_eq!(t, &s); prop_assert!(parse_strict(&s).is_none()); }
            other => prop_assert!(false, "unexpected {:?}", other),
        }
    }

    #[test]
    fn finite_numbers_survive_text_round_trip(n in -1.0e12f64..1.0e12) {
        let text = format_number(n);
        prop_assert_eq!(type_cell(&FieldValue::Text(text), None), Cell::Number(n));
    }
}
