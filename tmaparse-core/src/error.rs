//! Error types for transformer operations

use core::fmt;
use serde_json::Value;

/// Longest string excerpt quoted back in a type mismatch message
const MAX_EXCERPT_CHARS: usize = 32;

/// What went wrong while transforming a value
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ErrorKind {
    /// Value is present but of the wrong primitive kind
    #[error("type mismatch: expected {expected}, got {found}")]
    TypeMismatch {
        /// The kind the transformer accepts.
        expected: &'static str,
        /// Short description of the value actually found.
        found: String,
    },

    /// A required field's source key is absent
    #[error("missing required field")]
    MissingRequiredField,

    /// Value is not a recognizable object or parameter collection
    #[error("malformed input: expected {expected}, {reason}")]
    MalformedInput {
        /// The structure the transformer expected.
        expected: String,
        /// Why the value could not be read as that structure.
        reason: String,
    },

    /// Schema could not be constructed
    #[error("invalid schema: {0}")]
    InvalidSchema(String),
}

impl ErrorKind {
    /// Stable machine-readable label for this kind
    pub const fn code(&self) -> &'static str {
        match self {
            ErrorKind::TypeMismatch { .. } => "type-mismatch",
            ErrorKind::MissingRequiredField => "missing-required-field",
            ErrorKind::MalformedInput { .. } => "malformed-input",
            ErrorKind::InvalidSchema(_) => "invalid-schema",
        }
    }
}

/// Location of a failure: the outermost named transformer followed by field names.
///
/// Rendered dot-separated, e.g. `InitData.user.id`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldPath {
    root: Option<String>,
    fields: Vec<String>,
}

impl FieldPath {
    /// Name of the outermost named transformer, if any
    pub fn root(&self) -> Option<&str> {
        self.root.as_deref()
    }

    /// Field names from the outermost record down to the failing field
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// True when the failure happened on the input value itself
    pub fn is_empty(&self) -> bool {
        self.root.is_none() && self.fields.is_empty()
    }

    /// Iterate all segments, root first
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.root
            .as_deref()
            .into_iter()
            .chain(self.fields.iter().map(String::as_str))
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("value");
        }
        for (i, segment) in self.segments().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            f.write_str(segment)?;
        }
        Ok(())
    }
}

/// A failed transformation, annotated with where it happened
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{path}: {kind}")]
pub struct TransformError {
    path: FieldPath,
    kind: ErrorKind,
}

impl TransformError {
    /// Create an error at the current (empty) path
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            path: FieldPath::default(),
            kind,
        }
    }

    /// Value of the wrong kind
    pub fn type_mismatch(expected: &'static str, found: &Value) -> Self {
        Self::new(ErrorKind::TypeMismatch {
            expected,
            found: describe(found),
        })
    }

    /// Required value is absent
    pub fn missing() -> Self {
        Self::new(ErrorKind::MissingRequiredField)
    }

    /// Value is not the expected structure
    pub fn malformed(expected: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::new(ErrorKind::MalformedInput {
            expected: expected.into(),
            reason: reason.into(),
        })
    }

    /// Schema construction failed
    pub fn invalid_schema(reason: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidSchema(reason.into()))
    }

    /// The kind of failure
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// Where the failure happened
    pub fn path(&self) -> &FieldPath {
        &self.path
    }

    /// Prefix the path with the field the error surfaced through
    pub fn in_field(mut self, field: impl Into<String>) -> Self {
        self.path.fields.insert(0, field.into());
        self
    }

    /// Root the path at a named transformer. Outer names replace inner ones
    /// as the error unwinds, so the outermost name wins.
    pub fn rooted_at(mut self, name: impl Into<String>) -> Self {
        self.path.root = Some(name.into());
        self
    }
}

/// Short human description of a JSON value for error messages
pub(crate) fn describe(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => format!("boolean {b}"),
        Value::Number(n) => format!("number {n}"),
        Value::String(s) => {
            if s.chars().count() > MAX_EXCERPT_CHARS {
                let excerpt: String = s.chars().take(MAX_EXCERPT_CHARS).collect();
                format!("string {excerpt:?}...")
            } else {
                format!("string {s:?}")
            }
        }
        Value::Array(_) => "array".to_string(),
        Value::Object(_) => "object".to_string(),
    }
}
