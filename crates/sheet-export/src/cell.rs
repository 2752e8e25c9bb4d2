// File: crates/sheet-export/src/cell.rs
// Summary: Two-kind cell typing (Number / String) for raw record values.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// Raw value of a record field as delivered by the backend.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Number(f64),
    Text(String),
    #[default]
    Null,
}

impl FieldValue {
    pub fn is_null(&self) -> bool { matches!(self, FieldValue::Null) }

    /// Display text; `Null` is empty.
    pub fn to_text(&self) -> Cow<'_, str> {
        match self {
            FieldValue::Number(n) => Cow::Owned(format_number(*n)),
            FieldValue::Text(s) => Cow::Borrowed(s),
            FieldValue::Null => Cow::Borrowed(""),
        }
    }

    /// Lenient numeric coercion: numbers pass through, text is parsed strictly,
    /// empty text and `Null` count as zero. `None` when the result is not finite.
    pub fn coerce_number(&self) -> Option<f64> {
        match self {
            FieldValue::Number(n) => Some(*n).filter(|n| n.is_finite()),
            FieldValue::Text(s) if s.trim().is_empty() => Some(0.0),
            FieldValue::Text(s) => parse_strict(s),
            FieldValue::Null => Some(0.0),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self { FieldValue::Text(s.to_string()) }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self { FieldValue::Text(s) }
}

impl From<f64> for FieldValue {
    fn from(n: f64) -> Self { FieldValue::Number(n) }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(v: Option<T>) -> Self { v.map_or(FieldValue::Null, Into::into) }
}

/// Forced cell type.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TypeHint {
    String,
    Number,
}

/// A typed spreadsheet cell. Text is stored unescaped.
#[derive(Clone, Debug, PartialEq)]
pub enum Cell {
    Number(f64),
    String(String),
}

impl Cell {
    pub fn empty() -> Self { Cell::String(String::new()) }

    /// Value of the `ss:Type` attribute.
    pub fn ss_type(&self) -> &'static str {
        match self {
            Cell::Number(_) => "Number",
            Cell::String(_) => "String",
        }
    }

    /// Content of the `Data` element, before escaping.
    pub fn data_text(&self) -> Cow<'_, str> {
        match self {
            Cell::Number(n) => Cow::Owned(format_number(*n)),
            Cell::String(s) => Cow::Borrowed(s),
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self { Cell::Number(n) => Some(*n), Cell::String(_) => None }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self { Cell::String(s) => Some(s), Cell::Number(_) => None }
    }
}

/// Classify `value` into a cell. Never fails:
/// - `String` keeps the text verbatim (no numeric coercion);
/// - `Number` coerces, and anything unparseable becomes `0` (lossy by contract);
/// - no hint yields a number for finite numerics and numeric text, otherwise text.
pub fn type_cell(value: &FieldValue, hint: Option<TypeHint>) -> Cell {
    match hint {
        Some(TypeHint::String) => Cell::String(value.to_text().into_owned()),
        Some(TypeHint::Number) => Cell::Number(value.coerce_number().unwrap_or(0.0)),
        None => match value {
            FieldValue::Number(n) if n.is_finite() => Cell::Number(*n),
            FieldValue::Text(s) => match parse_strict(s) {
                Some(n) => Cell::Number(n),
                None => Cell::String(s.clone()),
            },
            other => Cell::String(other.to_text().into_owned()),
        },
    }
}

/// Trim, then parse as a finite `f64`. Empty text is not a number.
pub fn parse_strict(s: &str) -> Option<f64> {
    let t = s.trim();
    if t.is_empty() {
        return None;
    }
    t.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Shortest round-trip decimal; negative zero prints as `0`.
pub fn format_number(n: f64) -> String {
    if n == 0.0 { "0".to_string() } else { n.to_string() }
}

/// Fixed-point text with `digits` decimals. Exact halfway values round away
/// from zero (`0.25` -> `0.3`); negative zero prints unsigned.
pub fn to_fixed(v: f64, digits: usize) -> String {
    if v == 0.0 || !v.is_finite() {
        return if v.is_finite() { format!("{:.*}", digits, 0.0) } else { v.to_string() };
    }
    let mut mag = v.abs();
    if is_halfway(mag, digits) {
        // one ulp up lands strictly above the tie
        mag = f64::from_bits(mag.to_bits() + 1);
    }
    let body = format!("{:.*}", digits, mag);
    if v < 0.0 { format!("-{body}") } else { body }
}

/// `mag` (positive, finite) lies exactly halfway between two `digits`-decimal
/// neighbours iff `mag * 2 * 10^digits` is an odd integer. With
/// `mag = m * 2^e` and `m` odd, `m * 5^digits` is odd, so that holds exactly
/// when `e == -(digits + 1)`.
fn is_halfway(mag: f64, digits: usize) -> bool {
    let bits = mag.to_bits();
    let biased = ((bits >> 52) & 0x7ff) as i64;
    let fraction = bits & ((1u64 << 52) - 1);
    let (mantissa, exp) = if biased == 0 {
        (fraction, -1074)
    } else {
        (fraction | (1u64 << 52), biased - 1075)
    };
    if mantissa == 0 {
        return false;
    }
    exp + i64::from(mantissa.trailing_zeros()) == -(digits as i64 + 1)
}

/// Escape `& < > " '` as XML entity references.
pub fn escape_text(s: &str) -> Cow<'_, str> {
    quick_xml::escape::escape(s)
}
