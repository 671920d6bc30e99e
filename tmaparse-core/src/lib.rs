//! # tmaparse Core
//!
//! Schema-driven parsing and validation of Telegram Mini Apps launch data.
//!
//! ## Modules
//!
//! - `error`: Error kinds and field paths
//! - `casing`: camelCase / snake_case key conversion
//! - `input`: Search-parameter collections and top-level input forms
//! - `rgb`: Color normalization
//! - `schema`: Field descriptors, schemas and records
//! - `transformers`: Primitive, object, search-params and generator transformers
//! - `domain`: Init data, launch parameters and theme parameters
//!
//! ## Example
//!
//! ```
//! let init = tmaparse_core::init_data::parse("auth_date=1716922846&hash=abc").unwrap();
//! assert_eq!(init.hash, "abc");
//! assert_eq!(init.auth_date.timestamp(), 1716922846);
//! ```

#![warn(missing_docs)]

pub mod casing;
pub mod domain;
pub mod error;
pub mod input;
pub mod rgb;
pub mod schema;
pub mod transformers;

// Re-export commonly used types
pub use domain::{init_data, launch_params, theme_params};
pub use domain::{Chat, InitData, LaunchParams, ThemeParams, User};
pub use error::{ErrorKind, FieldPath, TransformError};
pub use input::{Input, SearchParams};
pub use rgb::Rgb;
pub use schema::{FieldEntry, FromRecord, Record, Schema, SchemaBuilder};
pub use transformers::{create_transformer_gen, Transformer, TransformerGen};

/// Result type alias for tmaparse operations
pub type Result<T> = core::result::Result<T, TransformError>;
