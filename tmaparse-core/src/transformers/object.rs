//! Object transformer builder
//!
//! A field error is prefixed with the failing target field only. The
//! object's type name is not added to the path: paths are rooted at the
//! outermost named generator instead (`LaunchParams.initData.user.id`), so
//! a nested record reads as a chain of field names. The type name still
//! appears as the `expected` structure of `MalformedInput` errors.

use super::Transformer;
use crate::error::{describe, TransformError};
use crate::schema::{FromRecord, Schema};
use crate::Result;
use core::marker::PhantomData;
use serde_json::{Map, Value};
use std::borrow::Cow;

/// Read a JSON object, decoding it first if it arrives JSON-encoded in a string
pub(crate) fn decode_object<'a>(
    value: &'a Value,
    expected: &str,
) -> Result<Cow<'a, Map<String, Value>>> {
    match value {
        Value::Object(map) => Ok(Cow::Borrowed(map)),
        Value::String(raw) => match serde_json::from_str::<Value>(raw) {
            Ok(Value::Object(map)) => Ok(Cow::Owned(map)),
            Ok(other) => Err(TransformError::malformed(
                expected,
                format!("decoded JSON is {}", describe(&other)),
            )),
            Err(e) => Err(TransformError::malformed(
                expected,
                format!("invalid JSON: {e}"),
            )),
        },
        other => Err(TransformError::malformed(
            expected,
            format!("got {}", describe(other)),
        )),
    }
}

fn transform_object<T: FromRecord>(schema: &Schema, value: &Value) -> Result<T> {
    let map = decode_object(value, schema.type_name())?;
    let record = schema.collect(|key| map.get(key).map(Cow::Borrowed))?;
    T::from_record(record)
}

/// Builder returned by [`object`]; pick the required or optional mode
#[derive(Debug, Clone)]
pub struct ObjectBuilder<T> {
    schema: Schema,
    _record: PhantomData<fn() -> T>,
}

impl<T: FromRecord + 'static> ObjectBuilder<T> {
    /// The value must be present and an object
    pub fn required(self) -> Transformer<T> {
        let schema = self.schema;
        Transformer::new(move |value| match value {
            Some(v) => transform_object(&schema, v),
            None => Err(TransformError::missing()),
        })
    }

    /// Absent and `null` values yield `None`, including a JSON-encoded
    /// `null` (`user=null` in a query string)
    pub fn optional(self) -> Transformer<Option<T>> {
        let schema = self.schema;
        Transformer::new(move |value| match value {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(raw)) if raw.trim() == "null" => Ok(None),
            Some(v) => transform_object(&schema, v).map(Some),
        })
    }
}

/// Compose a schema into a transformer over key/value objects.
///
/// Each entry's value is looked up by its source key and handed to the
/// entry's transformer; the first failure aborts with the target field
/// prefixed to its path.
pub fn object<T: FromRecord + 'static>(schema: Schema) -> ObjectBuilder<T> {
    ObjectBuilder {
        schema,
        _record: PhantomData,
    }
}
