//! Primitive transformers
//!
//! Each constructor returns a required transformer; call
//! [`Transformer::optional`] for the optional mode.

use super::Transformer;
use crate::error::TransformError;
use crate::rgb::Rgb;
use crate::Result;
use chrono::{DateTime, Utc};
use serde_json::Value;

/// Required-mode wrapper: absent input is a missing field, present input is coerced
fn required<T: 'static>(coerce: fn(&Value) -> Result<T>) -> Transformer<T> {
    Transformer::new(move |value| match value {
        Some(v) => coerce(v),
        None => Err(TransformError::missing()),
    })
}

/// Strings. Numbers are accepted and rendered as decimal text.
pub fn string() -> Transformer<String> {
    required(coerce_string)
}

/// Finite numbers, from a JSON number or a numeric string
pub fn number() -> Transformer<f64> {
    required(coerce_number)
}

/// Whole numbers that fit `i64`, from a JSON number or a numeric string
pub fn integer() -> Transformer<i64> {
    required(coerce_integer)
}

/// `true`/`false`, as JSON booleans or their string encodings. No truthiness.
pub fn boolean() -> Transformer<bool> {
    required(coerce_boolean)
}

/// Seconds since the Unix epoch, as a non-negative integer
pub fn date() -> Transformer<DateTime<Utc>> {
    required(coerce_date)
}

/// Colors in any known RGB format, normalized to `#rrggbb`
pub fn rgb() -> Transformer<Rgb> {
    required(coerce_rgb)
}

fn coerce_string(value: &Value) -> Result<String> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(TransformError::type_mismatch("string", other)),
    }
}

fn parse_finite(s: &str) -> Option<f64> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    s.parse::<f64>().ok().filter(|n| n.is_finite())
}

fn coerce_number(value: &Value) -> Result<f64> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => parse_finite(s),
        _ => None,
    };
    parsed.ok_or_else(|| TransformError::type_mismatch("number", value))
}

/// Whole f64 within i64 range
fn f64_to_i64(n: f64) -> Option<i64> {
    // i64::MAX as f64 rounds up to 2^63, hence the strict bound
    if n.fract() == 0.0 && n >= i64::MIN as f64 && n < i64::MAX as f64 {
        Some(n as i64)
    } else {
        None
    }
}

fn coerce_integer(value: &Value) -> Result<i64> {
    let parsed = match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().and_then(f64_to_i64)),
        Value::String(s) => {
            let trimmed = s.trim();
            trimmed
                .parse::<i64>()
                .ok()
                .or_else(|| parse_finite(trimmed).and_then(f64_to_i64))
        }
        _ => None,
    };
    parsed.ok_or_else(|| TransformError::type_mismatch("integer", value))
}

fn coerce_boolean(value: &Value) -> Result<bool> {
    match value {
        Value::Bool(b) => Ok(*b),
        Value::String(s) if s == "true" => Ok(true),
        Value::String(s) if s == "false" => Ok(false),
        other => Err(TransformError::type_mismatch("boolean", other)),
    }
}

fn coerce_date(value: &Value) -> Result<DateTime<Utc>> {
    let mismatch = || TransformError::type_mismatch("unix timestamp in seconds", value);
    let secs = coerce_integer(value).map_err(|_| mismatch())?;
    if secs < 0 {
        return Err(mismatch());
    }
    DateTime::from_timestamp(secs, 0).ok_or_else(mismatch)
}

fn coerce_rgb(value: &Value) -> Result<Rgb> {
    match value {
        Value::String(s) => s
            .parse()
            .map_err(|_| TransformError::type_mismatch("rgb color", value)),
        other => Err(TransformError::type_mismatch("rgb color", other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use serde_json::json;

    fn is_mismatch<T: core::fmt::Debug>(result: Result<T>) -> bool {
        matches!(
            result.unwrap_err().kind(),
            ErrorKind::TypeMismatch { .. }
        )
    }

    #[test]
    fn test_string() {
        assert_eq!(string().parse(&json!("abc")).unwrap(), "abc");
        assert_eq!(string().parse(&json!("")).unwrap(), "");
        assert_eq!(string().parse(&json!(42)).unwrap(), "42");
        assert!(is_mismatch(string().parse(&json!(true))));
        assert!(is_mismatch(string().parse(&json!(null))));
        assert!(is_mismatch(string().parse(&json!({}))));
    }

    #[test]
    fn test_number() {
        assert_eq!(number().parse(&json!("42")).unwrap(), 42.0);
        assert_eq!(number().parse(&json!(" 1.5 ")).unwrap(), 1.5);
        assert_eq!(number().parse(&json!(-3)).unwrap(), -3.0);
        assert!(is_mismatch(number().parse(&json!("abc"))));
        assert!(is_mismatch(number().parse(&json!(""))));
        assert!(is_mismatch(number().parse(&json!("NaN"))));
        assert!(is_mismatch(number().parse(&json!("inf"))));
        assert!(is_mismatch(number().parse(&json!(false))));
    }

    #[test]
    fn test_integer() {
        assert_eq!(integer().parse(&json!("42")).unwrap(), 42);
        assert_eq!(integer().parse(&json!(279058397)).unwrap(), 279058397);
        assert_eq!(integer().parse(&json!("7.0")).unwrap(), 7);
        assert_eq!(
            integer().parse(&json!("9223372036854775807")).unwrap(),
            i64::MAX
        );
        assert!(is_mismatch(integer().parse(&json!("1.5"))));
        assert!(is_mismatch(integer().parse(&json!(1.5))));
        assert!(is_mismatch(integer().parse(&json!("1e30"))));
    }

    #[test]
    fn test_boolean_is_strict() {
        assert!(boolean().parse(&json!("true")).unwrap());
        assert!(!boolean().parse(&json!("false")).unwrap());
        assert!(boolean().parse(&json!(true)).unwrap());
        assert!(is_mismatch(boolean().parse(&json!("yes"))));
        assert!(is_mismatch(boolean().parse(&json!("TRUE"))));
        assert!(is_mismatch(boolean().parse(&json!(1))));
        assert!(is_mismatch(boolean().parse(&json!(""))));
    }

    #[test]
    fn test_date() {
        let one = date().parse(&json!(1)).unwrap();
        assert_eq!(one.timestamp(), 1);
        assert_eq!(one.timestamp_subsec_nanos(), 0);
        assert_eq!(date().parse(&json!("1")).unwrap(), one);
        assert_eq!(date().parse(&json!(0)).unwrap(), DateTime::<Utc>::UNIX_EPOCH);
        assert!(is_mismatch(date().parse(&json!(-1))));
        assert!(is_mismatch(date().parse(&json!("1.5"))));
        assert!(is_mismatch(date().parse(&json!("yesterday"))));
        assert!(is_mismatch(date().parse(&json!(i64::MAX))));
    }

    #[test]
    fn test_rgb() {
        assert_eq!(rgb().parse(&json!("#000")).unwrap().to_string(), "#000000");
        assert!(is_mismatch(rgb().parse(&json!("nope"))));
        assert!(is_mismatch(rgb().parse(&json!(0))));
    }

    #[test]
    fn test_optional_does_not_coerce_absent() {
        assert_eq!(boolean().optional().transform(None).unwrap(), None);
        assert_eq!(date().optional().transform(None).unwrap(), None);
        assert!(is_mismatch(boolean().optional().parse(&json!("yes"))));
    }
}
