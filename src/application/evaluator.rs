//! Schema evaluation: turns a list of [`FieldDef`]s into a [`Document`].

use crate::adapters::fake_provider::FakeValueProvider;
use crate::application::serializer::{serialize, wrap_as_readable, PayloadReader};
use crate::domain::document::Document;
use crate::domain::error::PayloadError;
use crate::domain::field::{FieldDef, ResolvedKind};
use crate::domain::provider::ValueProvider;
use crate::domain::validator::SchemaValidator;
use serde_json::Value;
use tracing::{trace, warn};

/// Default limit on object-list nesting.
pub const DEFAULT_MAX_DEPTH: usize = 32;

/// Object lists grow past this many items without pre-allocation.
const LIST_PREALLOC_LIMIT: usize = 1024;

/// Evaluates schemas against a [`ValueProvider`].
///
/// Each call to [`Evaluator::evaluate`] draws fresh values, so evaluating the
/// same schema twice normally yields two different documents. Fields are
/// visited in schema order; a later field with the same name replaces an
/// earlier one unless strict naming is enabled.
pub struct Evaluator<P = FakeValueProvider> {
    provider: P,
    max_depth: usize,
    strict_names: bool,
}

impl Default for Evaluator<FakeValueProvider> {
    fn default() -> Self {
        Self::new(FakeValueProvider::thread())
    }
}

impl<P: ValueProvider> Evaluator<P> {
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            max_depth: DEFAULT_MAX_DEPTH,
            strict_names: false,
        }
    }

    /// Maximum number of nested schema levels, the top level counting as one.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Reject schemas with duplicate or missing names and inverted ranges
    /// instead of silently evaluating them.
    pub fn with_strict_names(mut self, strict_names: bool) -> Self {
        self.strict_names = strict_names;
        self
    }

    pub fn provider_mut(&mut self) -> &mut P {
        &mut self.provider
    }

    pub fn evaluate(&mut self, fields: &[FieldDef]) -> Result<Document, PayloadError> {
        if self.strict_names {
            SchemaValidator::validate(fields).map_err(|errors| {
                PayloadError::InvalidSchema(errors.iter().map(ToString::to_string).collect())
            })?;
        }

        self.evaluate_level(fields, 1)
    }

    /// Evaluate `fields` `count` times; every document draws its own values.
    pub fn evaluate_many(&mut self, fields: &[FieldDef], count: usize) -> Result<Vec<Document>, PayloadError> {
        (0..count).map(|_| self.evaluate(fields)).collect()
    }

    /// Evaluate and serialize to indented JSON.
    pub fn generate(&mut self, fields: &[FieldDef]) -> Result<Vec<u8>, PayloadError> {
        let document = self.evaluate(fields)?;
        serialize(&document)
    }

    pub fn generate_reader(&mut self, fields: &[FieldDef]) -> Result<PayloadReader, PayloadError> {
        Ok(wrap_as_readable(self.generate(fields)?))
    }

    fn evaluate_level(&mut self, fields: &[FieldDef], depth: usize) -> Result<Document, PayloadError> {
        if depth > self.max_depth {
            warn!(depth, max = self.max_depth, "Schema nesting limit reached");
            return Err(PayloadError::DepthExceeded {
                depth,
                max: self.max_depth,
            });
        }

        let mut document = Document::new();

        for field in fields {
            let value = match field.resolved_kind() {
                ResolvedKind::Uuid => Value::String(self.provider.uuid()),
                ResolvedKind::Float => {
                    let (min, max) = field.float_bounds();
                    Value::from(self.provider.float_in_range(min, max))
                }
                ResolvedKind::FixedChar => Value::String(self.provider.letters(field.fixed_length())),
                ResolvedKind::String => Value::String(self.provider.from_directive(&field.fake_query)),
                ResolvedKind::Int => {
                    let (min, max) = field.number_range();
                    Value::from(self.provider.int_in_range(min, max))
                }
                ResolvedKind::Bool => Value::Bool(self.provider.boolean()),
                ResolvedKind::Static => field.static_value.clone().unwrap_or(Value::Null),
                ResolvedKind::ObjectList => {
                    let (min, max) = field.list_range();
                    let count = self.provider.int_in_range(min, max).max(0) as usize;
                    trace!(field = %field.name, count, depth, "Evaluating object list");

                    let mut items = Vec::with_capacity(count.min(LIST_PREALLOC_LIMIT));
                    for _ in 0..count {
                        let item = self.evaluate_level(&field.children, depth + 1)?;
                        items.push(item.into_value());
                    }
                    Value::Array(items)
                }
                ResolvedKind::Omitted => continue,
            };

            document.insert(field.name.clone(), value);
        }

        Ok(document)
    }
}

/// Evaluate `fields` with a thread-local random provider.
pub fn evaluate(fields: &[FieldDef]) -> Result<Document, PayloadError> {
    Evaluator::<FakeValueProvider>::default().evaluate(fields)
}

/// Evaluate `fields` and serialize the result.
pub fn generate(fields: &[FieldDef]) -> Result<Vec<u8>, PayloadError> {
    Evaluator::<FakeValueProvider>::default().generate(fields)
}

pub fn generate_reader(fields: &[FieldDef]) -> Result<PayloadReader, PayloadError> {
    Evaluator::<FakeValueProvider>::default().generate_reader(fields)
}
