use std::collections::HashSet;
use thiserror::Error;

use crate::domain::field::{FieldDef, ResolvedKind};

#[derive(Debug, Error, PartialEq)]
pub enum SchemaValidationError {
    #[error("Missing field name at {0}")]
    MissingName(String),

    #[error("Duplicate field name: {0}")]
    Duplicate(String),

    #[error("Invalid range for {field}: {reason}")]
    InvalidRange { field: String, reason: String },

    #[error("Object list {0} has no children")]
    EmptyChildren(String),
}

/// Optional strict checks on a schema.
///
/// The evaluator itself accepts anything (duplicates are last-write-wins);
/// this is only run when strict naming is switched on.
pub struct SchemaValidator;

impl SchemaValidator {
    pub fn validate(fields: &[FieldDef]) -> Result<(), Vec<SchemaValidationError>> {
        let mut errors = Vec::new();
        Self::validate_level(fields, "", &mut errors);

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    fn validate_level(fields: &[FieldDef], prefix: &str, errors: &mut Vec<SchemaValidationError>) {
        let mut seen = HashSet::new();

        for (index, field) in fields.iter().enumerate() {
            let path = if field.name.is_empty() {
                format!("{}[{}]", prefix, index)
            } else {
                format!("{}{}", prefix, field.name)
            };

            if field.name.is_empty() {
                errors.push(SchemaValidationError::MissingName(path.clone()));
            } else if !seen.insert(field.name.as_str()) {
                errors.push(SchemaValidationError::Duplicate(path.clone()));
            }

            match field.resolved_kind() {
                ResolvedKind::Int | ResolvedKind::ObjectList => {
                    if let Some((min, max)) = field.int_range {
                        if min > max {
                            errors.push(SchemaValidationError::InvalidRange {
                                field: path.clone(),
                                reason: format!("min {} is greater than max {}", min, max),
                            });
                        }
                    }
                }
                ResolvedKind::Float => {
                    if let Some((min, max)) = field.float_range {
                        if !min.is_finite() || !max.is_finite() {
                            errors.push(SchemaValidationError::InvalidRange {
                                field: path.clone(),
                                reason: "bounds must be finite".to_string(),
                            });
                        } else if min > max {
                            errors.push(SchemaValidationError::InvalidRange {
                                field: path.clone(),
                                reason: format!("min {} is greater than max {}", min, max),
                            });
                        }
                    }
                }
                _ => {}
            }

            if field.resolved_kind() == ResolvedKind::ObjectList {
                if field.children.is_empty() {
                    errors.push(SchemaValidationError::EmptyChildren(path.clone()));
                }
                Self::validate_level(&field.children, &format!("{}[*].", path), errors);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_schema() {
        let fields = vec![
            FieldDef::uuid("id"),
            FieldDef::int("age").with_int_range(18, 30),
            FieldDef::object_list("items", vec![FieldDef::int("x")]),
        ];
        assert!(SchemaValidator::validate(&fields).is_ok());
    }

    #[test]
    fn test_duplicate_names() {
        let fields = vec![FieldDef::int("age"), FieldDef::bool("age")];
        let errors = SchemaValidator::validate(&fields).unwrap_err();
        assert_eq!(errors, vec![SchemaValidationError::Duplicate("age".to_string())]);
    }

    #[test]
    fn test_same_name_at_different_levels_is_fine() {
        let fields = vec![
            FieldDef::int("x"),
            FieldDef::object_list("items", vec![FieldDef::int("x")]),
        ];
        assert!(SchemaValidator::validate(&fields).is_ok());
    }

    #[test]
    fn test_nested_errors_carry_path() {
        let fields = vec![FieldDef::object_list(
            "items",
            vec![FieldDef::int("x").with_int_range(5, 1)],
        )];
        let errors = SchemaValidator::validate(&fields).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].to_string().contains("items[*].x"));
    }

    #[test]
    fn test_float_range_must_be_finite() {
        let fields = vec![FieldDef::float("price").with_float_range(0.0, f64::INFINITY)];
        let errors = SchemaValidator::validate(&fields).unwrap_err();
        assert!(matches!(errors[0], SchemaValidationError::InvalidRange { .. }));
    }

    #[test]
    fn test_missing_name_and_empty_children() {
        let fields = vec![FieldDef::int(""), FieldDef::object_list("items", vec![])];
        let errors = SchemaValidator::validate(&fields).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0], SchemaValidationError::MissingName("[0]".to_string()));
        assert_eq!(errors[1], SchemaValidationError::EmptyChildren("items".to_string()));
    }
}
