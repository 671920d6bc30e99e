//! Search-params transformer builder

use super::Transformer;
use crate::error::TransformError;
use crate::input::SearchParams;
use crate::schema::{FromRecord, Schema};
use serde_json::Value;
use std::borrow::Cow;

/// Compose a schema into a transformer over flat parameter collections.
///
/// The input may be a query string or an object of wire-encoded values (see
/// [`SearchParams::from_value`]). Each entry's first value is handed to the
/// entry's transformer as a string; field transformers are the same ones
/// used with [`object`](super::object).
pub fn search_params<T: FromRecord + 'static>(schema: Schema) -> Transformer<T> {
    Transformer::new(move |value| {
        let value = value.ok_or_else(TransformError::missing)?;
        let params = SearchParams::from_value(value, schema.type_name())?;
        let record = schema.collect(|key| {
            params
                .get(key)
                .map(|raw| Cow::Owned(Value::String(raw.to_owned())))
        })?;
        T::from_record(record)
    })
}
