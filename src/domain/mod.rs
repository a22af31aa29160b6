//! Core types: field schemas, generated documents and the value-provider port.

pub mod document;
pub mod error;
pub mod field;
pub mod provider;
pub mod validator;

pub use document::Document;
pub use error::PayloadError;
pub use field::{FieldDef, FieldKind, ResolvedKind};
pub use provider::ValueProvider;
pub use validator::{SchemaValidationError, SchemaValidator};
