use thiserror::Error;

use crate::config::Settings;

/// Levels accepted by the `log_level` setting.
pub const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error", "off"];

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
}

pub struct ConfigValidator;

impl ConfigValidator {
    pub fn validate(settings: &Settings) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if settings.generator.max_depth == 0 {
            errors.push(ValidationError::InvalidValue {
                field: "generator.max_depth".to_string(),
                reason: "Maximum depth must be at least 1".to_string(),
            });
        }

        if settings.log_level.is_empty() {
            errors.push(ValidationError::MissingField("log_level".to_string()));
        } else if !LOG_LEVELS.contains(&settings.log_level.to_ascii_lowercase().as_str()) {
            errors.push(ValidationError::InvalidValue {
                field: "log_level".to_string(),
                reason: format!(
                    "'{}' is not one of {}",
                    settings.log_level,
                    LOG_LEVELS.join(", ")
                ),
            });
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_are_valid() {
        assert!(ConfigValidator::validate(&Settings::default()).is_ok());
    }

    #[test]
    fn test_zero_depth_rejected() {
        let mut settings = Settings::default();
        settings.generator.max_depth = 0;

        let errors = ConfigValidator::validate(&settings).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].to_string().contains("generator.max_depth"));
    }

    #[test]
    fn test_log_level_checked() {
        let mut settings = Settings::default();
        settings.log_level = "WARN".to_string();
        assert!(ConfigValidator::validate(&settings).is_ok());

        settings.log_level = "loud".to_string();
        let errors = ConfigValidator::validate(&settings).unwrap_err();
        assert!(errors[0].to_string().contains("'loud'"));

        settings.log_level = String::new();
        let errors = ConfigValidator::validate(&settings).unwrap_err();
        assert!(matches!(errors[0], ValidationError::MissingField(_)));
    }
}
