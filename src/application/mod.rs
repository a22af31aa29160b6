//! Use cases: evaluating schemas and encoding the resulting documents.

pub mod evaluator;
pub mod serializer;

pub use evaluator::{evaluate, generate, generate_reader, Evaluator, DEFAULT_MAX_DEPTH};
pub use serializer::{serialize, wrap_as_readable, PayloadReader};
