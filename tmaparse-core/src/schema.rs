//! Field schemas: target field -> (source wire key, transformer)

use crate::casing::camel_to_snake;
use crate::error::TransformError;
use crate::transformers::Transformer;
use crate::Result;
use core::any::Any;
use core::fmt;
use serde_json::Value;
use std::borrow::Cow;
use std::collections::HashSet;
use std::sync::Arc;

#[cfg(feature = "logging")]
use tracing::{debug, trace};

type ErasedValue = Box<dyn Any + Send>;
type ErasedFn = dyn Fn(Option<&Value>) -> Result<ErasedValue> + Send + Sync;

fn erase<T: Send + 'static>(transformer: Transformer<T>) -> Arc<ErasedFn> {
    let f = move |value: Option<&Value>| -> Result<ErasedValue> {
        transformer
            .transform(value)
            .map(|v| Box::new(v) as ErasedValue)
    };
    Arc::new(f)
}

/// One schema entry
#[derive(Clone)]
pub struct FieldEntry {
    target: &'static str,
    source: String,
    transform: Arc<ErasedFn>,
}

impl FieldEntry {
    /// camelCase name of the field in the parsed record
    pub fn target_field(&self) -> &'static str {
        self.target
    }

    /// Key of the field in the wire input
    pub fn source_key(&self) -> &str {
        &self.source
    }
}

impl fmt::Debug for FieldEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldEntry")
            .field("target", &self.target)
            .field("source", &self.source)
            .finish_non_exhaustive()
    }
}

/// An immutable, ordered field schema.
///
/// Declaration order is iteration order, and decides which field's error is
/// reported first.
#[derive(Debug, Clone)]
pub struct Schema {
    type_name: &'static str,
    entries: Arc<[FieldEntry]>,
}

impl Schema {
    /// Start building a schema for records named `type_name`
    pub fn builder(type_name: &'static str) -> SchemaBuilder {
        SchemaBuilder {
            type_name,
            fields: Vec::new(),
        }
    }

    /// Record type name, used in malformed-input errors
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// All entries in iteration order
    pub fn entries(&self) -> &[FieldEntry] {
        &self.entries
    }

    /// Entry for a target field
    pub fn field(&self, target: &str) -> Option<&FieldEntry> {
        self.entries.iter().find(|e| e.target == target)
    }

    /// Run every entry against values found by `lookup(source_key)`.
    ///
    /// Fail-fast: the first failing entry aborts, with its target field
    /// prefixed to the error path.
    pub(crate) fn collect<'v, F>(&self, mut lookup: F) -> Result<Record>
    where
        F: FnMut(&str) -> Option<Cow<'v, Value>>,
    {
        let mut values = Vec::with_capacity(self.entries.len());
        for entry in self.entries.iter() {
            let raw = lookup(&entry.source);

            #[cfg(feature = "logging")]
            trace!(
                "{}.{} <- {:?} (present: {})",
                self.type_name,
                entry.target,
                entry.source,
                raw.is_some()
            );

            match (entry.transform)(raw.as_deref()) {
                Ok(value) => values.push((entry.target, value)),
                Err(e) => {
                    #[cfg(feature = "logging")]
                    debug!("{}.{} rejected: {}", self.type_name, entry.target, e.kind());

                    return Err(e.in_field(entry.target));
                }
            }
        }
        Ok(Record {
            type_name: self.type_name,
            values,
        })
    }
}

/// Pure builder for [`Schema`]. Nothing is shared with the caller; `build`
/// returns a fresh immutable schema.
pub struct SchemaBuilder {
    type_name: &'static str,
    fields: Vec<(&'static str, Option<String>, Arc<ErasedFn>)>,
}

impl SchemaBuilder {
    /// Add a field whose wire key is the snake_case form of `target`
    pub fn field<T: Send + 'static>(
        mut self,
        target: &'static str,
        transformer: Transformer<T>,
    ) -> Self {
        self.fields.push((target, None, erase(transformer)));
        self
    }

    /// Add a field read from an explicit wire key
    pub fn field_from<T: Send + 'static>(
        mut self,
        target: &'static str,
        source: impl Into<String>,
        transformer: Transformer<T>,
    ) -> Self {
        self.fields.push((target, Some(source.into()), erase(transformer)));
        self
    }

    /// Derive missing source keys (camelCase -> snake_case) and freeze the
    /// schema. Fails if a target field is declared twice.
    pub fn build(self) -> Result<Schema> {
        let mut seen = HashSet::with_capacity(self.fields.len());
        let mut entries = Vec::with_capacity(self.fields.len());
        for (target, source, transform) in self.fields {
            if !seen.insert(target) {
                return Err(TransformError::invalid_schema(format!(
                    "{} declares field {:?} more than once",
                    self.type_name, target
                )));
            }
            entries.push(FieldEntry {
                target,
                source: source.unwrap_or_else(|| camel_to_snake(target)),
                transform,
            });
        }
        Ok(Schema {
            type_name: self.type_name,
            entries: entries.into(),
        })
    }
}

/// Successfully transformed field values of one record, keyed by target field
pub struct Record {
    type_name: &'static str,
    values: Vec<(&'static str, ErasedValue)>,
}

impl Record {
    /// Record type name
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Number of fields still held
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if every field has been taken
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Move a field's value out, typed.
    ///
    /// `T` must be the output type of the field's transformer (`Option<_>`
    /// for optional fields). A mismatch is a schema error, not an input error.
    pub fn take<T: 'static>(&mut self, field: &str) -> Result<T> {
        let pos = self
            .values
            .iter()
            .position(|(name, _)| *name == field)
            .ok_or_else(|| {
                TransformError::invalid_schema(format!(
                    "{} has no field {:?}",
                    self.type_name, field
                ))
            })?;
        let (_, value) = self.values.swap_remove(pos);
        value.downcast::<T>().map(|v| *v).map_err(|_| {
            TransformError::invalid_schema(format!(
                "{}.{} is not a {}",
                self.type_name,
                field,
                core::any::type_name::<T>()
            ))
        })
    }
}

impl fmt::Debug for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Record")
            .field("type_name", &self.type_name)
            .field("fields", &self.values.iter().map(|(n, _)| *n).collect::<Vec<_>>())
            .finish()
    }
}

/// Types assembled from a transformed [`Record`]
pub trait FromRecord: Sized {
    /// Build the typed value, taking every declared field
    fn from_record(record: Record) -> Result<Self>;
}
