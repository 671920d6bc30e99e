//! Transformers: pure functions turning untyped wire values into typed values
//!
//! - `primitives`: string, number, integer, boolean, date and rgb converters
//! - `object`: records read from JSON objects
//! - `search_params`: records read from flat parameter collections
//! - `generator`: named, lazily built transformers

use crate::Result;
use core::fmt;
use serde_json::Value;
use std::sync::Arc;

pub mod generator;
pub mod object;
pub mod primitives;
pub mod search_params;

pub use generator::{create_transformer_gen, TransformerGen};
pub use object::{object, ObjectBuilder};
pub use primitives::{boolean, date, integer, number, rgb, string};
pub use search_params::search_params;

/// Signature shared by all transformers. `None` means the source key is absent.
pub type TransformFn<T> = dyn Fn(Option<&Value>) -> Result<T> + Send + Sync;

/// A shareable, stateless `value -> T` converter.
///
/// Cloning is cheap; all clones share the same function.
pub struct Transformer<T> {
    inner: Arc<TransformFn<T>>,
}

impl<T: 'static> Transformer<T> {
    /// Wrap a conversion function
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(Option<&Value>) -> Result<T> + Send + Sync + 'static,
    {
        Self { inner: Arc::new(f) }
    }

    /// Apply to a possibly absent value
    pub fn transform(&self, value: Option<&Value>) -> Result<T> {
        (self.inner)(value)
    }

    /// Apply to a present value
    pub fn parse(&self, value: &Value) -> Result<T> {
        self.transform(Some(value))
    }

    /// Optional mode: an absent value yields `None` without invoking the
    /// conversion. Present values are still validated.
    pub fn optional(self) -> Transformer<Option<T>> {
        Transformer::new(move |value| match value {
            None => Ok(None),
            Some(v) => self.parse(v).map(Some),
        })
    }

    /// Post-process a successful result
    pub fn map<U: 'static, F>(self, f: F) -> Transformer<U>
    where
        F: Fn(T) -> U + Send + Sync + 'static,
    {
        Transformer::new(move |value| self.transform(value).map(&f))
    }
}

impl<T> Clone for Transformer<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> fmt::Debug for Transformer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transformer")
            .field("output", &core::any::type_name::<T>())
            .finish()
    }
}
