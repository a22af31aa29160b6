//! Field descriptors: the typed, recursive schema a test author writes to
//! describe the shape of a generated payload.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Default bounds for `Int` and `Float` fields.
pub const DEFAULT_NUMBER_RANGE: (i64, i64) = (0, 100);

/// Default cardinality bounds for `ObjectList` fields.
pub const DEFAULT_LIST_RANGE: (i64, i64) = (1, 3);

/// Default length for `FixedChar` fields.
pub const DEFAULT_FIXED_CHAR_LENGTH: usize = 3;

/// Value-generation strategy for a single field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    /// Generated from the field's `fake_query` directive
    String,
    Int,
    Float,
    Bool,
    Uuid,
    /// Copies `static_value` verbatim
    Static,
    /// A list of nested documents built from `children`
    #[serde(alias = "objectList")]
    ObjectList,
    /// Letters-only string of a fixed length
    #[serde(alias = "fixedChar")]
    FixedChar,
    /// No explicit kind; resolved from `static_value` or `fake_query`
    #[default]
    Unspecified,
}

/// One entry of a schema.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FieldDef {
    pub name: String,
    #[serde(default, alias = "type")]
    pub kind: FieldKind,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub fake_query: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub static_value: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub int_range: Option<(i64, i64)>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub float_range: Option<(f64, f64)>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<i64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<FieldDef>,
}

/// The kind a descriptor is actually evaluated as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolvedKind {
    String,
    Int,
    Float,
    Bool,
    Uuid,
    Static,
    ObjectList,
    FixedChar,
    /// Nothing to generate; the field is left out of the document
    Omitted,
}

impl FieldDef {
    /// Create a descriptor with the given name and kind and no other settings.
    pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            kind,
            ..Default::default()
        }
    }

    pub fn string(name: impl Into<String>, fake_query: impl Into<String>) -> Self {
        Self::new(name, FieldKind::String).with_fake_query(fake_query)
    }

    pub fn int(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Int)
    }

    pub fn float(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Float)
    }

    pub fn bool(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Bool)
    }

    pub fn uuid(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Uuid)
    }

    pub fn fixed_char(name: impl Into<String>, length: i64) -> Self {
        Self {
            length: Some(length),
            ..Self::new(name, FieldKind::FixedChar)
        }
    }

    pub fn static_value(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::new(name, FieldKind::Static).with_static(value)
    }

    pub fn object_list(name: impl Into<String>, children: Vec<FieldDef>) -> Self {
        Self {
            children,
            ..Self::new(name, FieldKind::ObjectList)
        }
    }

    pub fn with_fake_query(mut self, fake_query: impl Into<String>) -> Self {
        self.fake_query = fake_query.into();
        self
    }

    pub fn with_static(mut self, value: impl Into<Value>) -> Self {
        self.static_value = Some(value.into());
        self
    }

    /// Bounds for `Int` values, or the item count of an `ObjectList`.
    pub fn with_int_range(mut self, min: i64, max: i64) -> Self {
        self.int_range = Some((min, max));
        self
    }

    pub fn with_float_range(mut self, min: f64, max: f64) -> Self {
        self.float_range = Some((min, max));
        self
    }

    pub fn with_length(mut self, length: i64) -> Self {
        self.length = Some(length);
        self
    }

    /// Decide how this descriptor is evaluated.
    ///
    /// An `Unspecified` descriptor becomes `Static` when it carries a static
    /// value, `String` when it carries a directive, and is omitted otherwise.
    pub fn resolved_kind(&self) -> ResolvedKind {
        match self.kind {
            FieldKind::String => ResolvedKind::String,
            FieldKind::Int => ResolvedKind::Int,
            FieldKind::Float => ResolvedKind::Float,
            FieldKind::Bool => ResolvedKind::Bool,
            FieldKind::Uuid => ResolvedKind::Uuid,
            FieldKind::Static => ResolvedKind::Static,
            FieldKind::ObjectList => ResolvedKind::ObjectList,
            FieldKind::FixedChar => ResolvedKind::FixedChar,
            FieldKind::Unspecified if self.static_value.is_some() => ResolvedKind::Static,
            FieldKind::Unspecified if !self.fake_query.is_empty() => ResolvedKind::String,
            FieldKind::Unspecified => ResolvedKind::Omitted,
        }
    }

    /// Integer bounds, falling back to `[0, 100]`.
    pub fn number_range(&self) -> (i64, i64) {
        self.int_range.unwrap_or(DEFAULT_NUMBER_RANGE)
    }

    /// Float bounds, falling back to `[0, 100]`.
    pub fn float_bounds(&self) -> (f64, f64) {
        self.float_range.unwrap_or((
            DEFAULT_NUMBER_RANGE.0 as f64,
            DEFAULT_NUMBER_RANGE.1 as f64,
        ))
    }

    /// List cardinality bounds, falling back to `[1, 3]`.
    pub fn list_range(&self) -> (i64, i64) {
        self.int_range.unwrap_or(DEFAULT_LIST_RANGE)
    }

    /// Length for `FixedChar`; non-positive or missing lengths become 3.
    pub fn fixed_length(&self) -> usize {
        match self.length {
            Some(length) if length > 0 => length as usize,
            _ => DEFAULT_FIXED_CHAR_LENGTH,
        }
    }
}
