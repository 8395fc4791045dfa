//! Loose comparison and truthiness over attribute values.
//!
//! Payloads come straight from the API layer, so the same identifier can show
//! up as `7` in one response and `"7"` in another. Ownership and admin checks
//! compare by value across those representations instead of by JSON type.

use serde_json::Value;

/// Numeric view of a scalar: integers stay exact, everything else is `f64`.
#[derive(Debug, Clone, Copy)]
enum Numeric {
    Signed(i64),
    Unsigned(u64),
    Float(f64),
}

impl Numeric {
    fn from_number(number: &serde_json::Number) -> Option<Self> {
        if let Some(n) = number.as_i64() {
            Some(Self::Signed(n))
        } else if let Some(n) = number.as_u64() {
            Some(Self::Unsigned(n))
        } else {
            number.as_f64().map(Self::Float)
        }
    }

    fn from_text(text: &str) -> Option<Self> {
        if let Ok(n) = text.parse::<i64>() {
            Some(Self::Signed(n))
        } else if let Ok(n) = text.parse::<u64>() {
            Some(Self::Unsigned(n))
        } else {
            text.parse::<f64>().ok().filter(|n| !n.is_nan()).map(Self::Float)
        }
    }

    #[allow(clippy::cast_precision_loss)]
    fn as_f64(self) -> f64 {
        match self {
            Self::Signed(n) => n as f64,
            Self::Unsigned(n) => n as f64,
            Self::Float(n) => n,
        }
    }

    fn same(self, other: Self) -> bool {
        match (self, other) {
            (Self::Signed(a), Self::Signed(b)) => a == b,
            (Self::Unsigned(a), Self::Unsigned(b)) => a == b,
            // Only negatives fit in i64 but not u64, so these never overlap.
            (Self::Signed(_), Self::Unsigned(_)) | (Self::Unsigned(_), Self::Signed(_)) => false,
            (Self::Float(a), other) | (other, Self::Float(a)) => match exact_integer(a) {
                Some(whole) if !matches!(other, Self::Float(_)) => whole.same(other),
                _ => a == other.as_f64(),
            },
        }
    }
}

/// Integer view of a whole float, if it is inside the i64/u64 range.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
fn exact_integer(value: f64) -> Option<Numeric> {
    if value.fract() != 0.0 {
        None
    } else if value >= 0.0 && value < u64::MAX as f64 {
        let n = value as u64;
        Some(i64::try_from(n).map_or(Numeric::Unsigned(n), Numeric::Signed))
    } else if value < 0.0 && value >= i64::MIN as f64 {
        Some(Numeric::Signed(value as i64))
    } else {
        None
    }
}

/// Numeric view of a scalar value, if it has one.
///
/// Empty or whitespace-only strings have no numeric view, so `""` never
/// matches `0`.
fn as_number(value: &Value) -> Option<Numeric> {
    match value {
        Value::Number(number) => Numeric::from_number(number),
        Value::Bool(flag) => Some(Numeric::Signed(i64::from(*flag))),
        Value::String(text) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                None
            } else {
                Numeric::from_text(trimmed)
            }
        }
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Value equality that treats a number and its string form as equal.
///
/// `null` never equals anything, including another `null`; arrays and objects
/// never compare equal either.
#[must_use]
pub fn loose_eq(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Null, _) | (_, Value::Null) => false,
        (Value::Array(_) | Value::Object(_), _) | (_, Value::Array(_) | Value::Object(_)) => false,
        (Value::String(a), Value::String(b)) => a == b,
        (Value::Bool(a), Value::Bool(b)) => a == b,
        _ => match (as_number(left), as_number(right)) {
            (Some(a), Some(b)) => a.same(b),
            _ => false,
        },
    }
}

/// Boolean coercion: `null`, `false`, `0`, `""` are false; everything else is true.
#[must_use]
pub fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0 && !n.is_nan()),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Short type label used in error messages.
#[must_use]
pub fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
