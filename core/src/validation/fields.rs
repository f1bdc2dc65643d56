use crate::prelude::{CoreError, CoreResult};
use serde_json::Value;
use std::ops::RangeInclusive;

pub fn float_from_str(field: &str, raw: &str) -> CoreResult<f64> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| CoreError::MalformedValue(field.into()))
}

pub fn integer_from_str(field: &str, raw: &str) -> CoreResult<i64> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| CoreError::MalformedValue(field.into()))
}

/// Accepts a JSON number or a numeric string.
pub fn float_from_json(field: &str, value: &Value) -> CoreResult<f64> {
    match value {
        Value::Number(number) => number
            .as_f64()
            .ok_or_else(|| CoreError::MalformedValue(field.into())),
        Value::String(raw) => float_from_str(field, raw),
        _ => Err(CoreError::MalformedValue(field.into())),
    }
}

/// Accepts a JSON integer, an integral float, or an integer string.
pub fn integer_from_json(field: &str, value: &Value) -> CoreResult<i64> {
    match value {
        Value::Number(number) => {
            if let Some(integer) = number.as_i64() {
                return Ok(integer);
            }
            match number.as_f64() {
                Some(float) if float.fract() == 0.0 && float.abs() < i64::MAX as f64 => {
                    Ok(float as i64)
                }
                _ => Err(CoreError::MalformedValue(field.into())),
            }
        }
        Value::String(raw) => integer_from_str(field, raw),
        _ => Err(CoreError::MalformedValue(field.into())),
    }
}

pub fn check_range(field: &str, value: f64, range: RangeInclusive<f64>) -> CoreResult<f64> {
    if range.contains(&value) {
        Ok(value)
    } else {
        Err(CoreError::OutOfRange(field.into()))
    }
}
