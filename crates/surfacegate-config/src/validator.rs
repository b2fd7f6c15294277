//! Configuration validation.

use surfacegate_protocols::{FlagMetadata, Surface};

use crate::error::ConfigError;
use crate::schema::Config;

const LOG_LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];

/// Validation result.
#[derive(Debug, Default)]
pub struct ValidationResult {
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn add_warning(&mut self, warning: ValidationWarning) {
        self.warnings.push(warning);
    }

    /// Convert the first error, if any, into a `ConfigError`.
    pub fn into_result(self) -> Result<Vec<ValidationWarning>, ConfigError> {
        match self.errors.into_iter().next() {
            Some(err) => Err(ConfigError::InvalidValue {
                field: err.path,
                message: err.message,
            }),
            None => Ok(self.warnings),
        }
    }
}

/// A validation error.
#[derive(Debug)]
pub struct ValidationError {
    pub path: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// A validation warning.
#[derive(Debug)]
pub struct ValidationWarning {
    pub path: String,
    pub message: String,
}

impl ValidationWarning {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate the configuration.
    pub fn validate(config: &Config) -> ValidationResult {
        let mut result = ValidationResult::default();

        Self::validate_storage(config, &mut result);
        Self::validate_logging(config, &mut result);
        Self::validate_flags(config, &mut result);
        Self::validate_surface_keys(config, &mut result);

        result
    }

    fn validate_storage(config: &Config, result: &mut ValidationResult) {
        if config.storage.path.trim().is_empty() {
            result.add_error(ValidationError::new(
                "storage.path",
                "Storage path cannot be empty",
            ));
        }
    }

    fn validate_logging(config: &Config, result: &mut ValidationResult) {
        // Full directives like "surfacegate_core=debug" are left to EnvFilter.
        let level = config.logging.level.as_str();
        if !level.contains('=') && !LOG_LEVELS.contains(&level) {
            result.add_error(ValidationError::new(
                "logging.level",
                format!("Unknown log level '{}', valid values: {:?}", level, LOG_LEVELS),
            ));
        }
    }

    fn validate_flags(config: &Config, result: &mut ValidationResult) {
        for (name, flag) in &config.flags {
            if !name.starts_with("dc-cv-") {
                result.add_warning(ValidationWarning::new(
                    format!("flags.{}", name),
                    "Flag name does not use the dc-cv- prefix and will never be queried",
                ));
            }

            // Malformed metadata is allowed; the engine treats it as empty.
            if let Some(raw) = &flag.metadata {
                let tracked = name.contains("implicit-default-viewership");
                if tracked && FlagMetadata::parse(raw).is_err() {
                    result.add_warning(ValidationWarning::new(
                        format!("flags.{}.metadata", name),
                        "Metadata is not valid JSON and will be treated as empty",
                    ));
                }
            }
        }
    }

    fn validate_surface_keys(config: &Config, result: &mut ValidationResult) {
        let sections = [
            ("default_handler", config.default_handler.keys()),
            ("host.add_on_default", config.host.add_on_default.keys()),
        ];
        for (section, keys) in sections {
            for key in keys {
                if key.parse::<Surface>().is_err() {
                    result.add_warning(ValidationWarning::new(
                        format!("{}.{}", section, key),
                        format!("Unknown surface '{}' is ignored", key),
                    ));
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "validator_tests.rs"]
mod tests;
