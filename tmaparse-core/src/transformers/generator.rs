//! Named transformer generators
//!
//! A generator pairs a name with a factory that builds and applies a
//! composite transformer. The factory runs on every call: nothing is cached,
//! so a generator holds no state between calls. Errors leaving a generator
//! are rooted at its name, which gives nested records paths such as
//! `LaunchParams.initData.user.id`.

use super::Transformer;
use crate::error::TransformError;
use crate::input::Input;
use crate::Result;
use core::fmt;
use serde_json::Value;
use std::sync::Arc;

#[cfg(feature = "logging")]
use tracing::debug;

type Factory<T> = dyn Fn(&Value) -> Result<T> + Send + Sync;

/// A named, lazily constructed transformer
pub struct TransformerGen<T> {
    name: &'static str,
    factory: Arc<Factory<T>>,
}

/// Create a generator named `name`.
///
/// `factory` receives the inbound value, builds whatever schema it needs and
/// returns the parsed result. Any error it returns, including schema
/// construction errors, is rooted at `name`.
pub fn create_transformer_gen<T, F>(name: &'static str, factory: F) -> TransformerGen<T>
where
    F: Fn(&Value) -> Result<T> + Send + Sync + 'static,
{
    TransformerGen {
        name,
        factory: Arc::new(factory),
    }
}

impl<T: 'static> TransformerGen<T> {
    /// Generator name
    pub fn name(&self) -> &'static str {
        self.name
    }

    fn run(name: &'static str, factory: &Factory<T>, value: &Value) -> Result<T> {
        #[cfg(feature = "logging")]
        debug!("{}: building transformer", name);

        factory(value).map_err(|e| {
            #[cfg(feature = "logging")]
            debug!("{}: rejected input: {}", name, e);

            e.rooted_at(name)
        })
    }

    /// Required mode: an absent value fails with a missing field error
    pub fn required(&self) -> Transformer<T> {
        let name = self.name;
        let factory = Arc::clone(&self.factory);
        Transformer::new(move |value| match value {
            Some(v) => Self::run(name, factory.as_ref(), v),
            None => Err(TransformError::missing().rooted_at(name)),
        })
    }

    /// Optional mode: an absent value yields `None`
    pub fn optional(&self) -> Transformer<Option<T>> {
        let name = self.name;
        let factory = Arc::clone(&self.factory);
        Transformer::new(move |value| match value {
            Some(v) => Self::run(name, factory.as_ref(), v).map(Some),
            None => Ok(None),
        })
    }

    /// Parse a complete top-level input
    pub fn parse(&self, input: impl Into<Input>) -> Result<T> {
        let input: Input = input.into();
        let value = input.into_value();
        Self::run(self.name, self.factory.as_ref(), &value)
    }
}

impl<T> Clone for TransformerGen<T> {
    fn clone(&self) -> Self {
        Self {
            name: self.name,
            factory: Arc::clone(&self.factory),
        }
    }
}

impl<T> fmt::Debug for TransformerGen<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransformerGen")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}
