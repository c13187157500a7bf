//! Native-style conversions of a resolved JSON value.
//!
//! Text is parsed the way `str::parse` does it and its errors pass through
//! untouched. Structured values and null do not convert to numbers.

use serde_json::Value;

use crate::error::{CursorError, Result};
use crate::lookup::type_name;

/// The value as `f64` if it is a JSON number, otherwise NaN.
pub fn number(val: &Value) -> f64 {
    match val {
        Value::Number(n) => n.as_f64().unwrap_or(f64::NAN),
        _ => f64::NAN,
    }
}

/// Convert to `i64`. Floats truncate toward zero.
pub fn to_i64(val: &Value) -> Result<i64> {
    match val {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                return Ok(i);
            }
            if let Some(u) = n.as_u64() {
                return i64::try_from(u).map_err(|_| CursorError::OutOfRange(n.to_string()));
            }
            float_to_i64(n.as_f64().unwrap_or(f64::NAN))
        }
        Value::Bool(b) => Ok(i64::from(*b)),
        Value::String(s) => Ok(s.trim().parse::<i64>()?),
        other => Err(not_a_number(other)),
    }
}

/// Convert to `f64`.
pub fn to_f64(val: &Value) -> Result<f64> {
    match val {
        Value::Number(n) => n
            .as_f64()
            .ok_or_else(|| CursorError::OutOfRange(n.to_string())),
        Value::Bool(b) => Ok(if *b { 1.0 } else { 0.0 }),
        Value::String(s) => Ok(s.trim().parse::<f64>()?),
        other => Err(not_a_number(other)),
    }
}

/// Convert to text: strings as-is, everything else as compact JSON.
pub fn to_text(val: &Value) -> String {
    match val {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn float_to_i64(f: f64) -> Result<i64> {
    // i64::MAX is not representable as f64; 2^63 is the first value past it.
    const LIMIT: f64 = 9_223_372_036_854_775_808.0;
    if !f.is_finite() || f >= LIMIT || f < -LIMIT {
        return Err(CursorError::OutOfRange(f.to_string()));
    }
    Ok(f.trunc() as i64)
}

fn not_a_number(val: &Value) -> CursorError {
    CursorError::Type {
        expected: "number, boolean or numeric string",
        found: type_name(val),
    }
}
