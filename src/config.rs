//! Engine configuration
//!
//! Handles:
//! - The validator list handed to the engine (id + attribute map per entry)
//! - Typed attribute access for validator `init` hooks
//!
//! Configuration *file* loading belongs to the excluded front-end layers;
//! this module only defines the in-memory objects those layers produce.

use std::collections::HashMap;

use regex::Regex;

use crate::error::ConfigurationError;

/// Engine configuration: a language selector plus an ordered list of
/// validator configurations. Registration order is the order findings are
/// reported in within each phase.
#[derive(Debug, Clone, Default)]
pub struct Configuration {
    language: String,
    validators: Vec<ValidatorConfig>,
}

impl Configuration {
    pub fn new(language: &str) -> Self {
        Self {
            language: language.to_string(),
            validators: Vec::new(),
        }
    }

    /// Append a validator configuration.
    pub fn add_validator(mut self, config: ValidatorConfig) -> Self {
        self.validators.push(config);
        self
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn validator_configs(&self) -> &[ValidatorConfig] {
        &self.validators
    }
}

/// Configuration for a single validator: its identifier and attribute map.
#[derive(Debug, Clone)]
pub struct ValidatorConfig {
    name: String,
    attributes: HashMap<String, String>,
}

impl ValidatorConfig {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            attributes: HashMap::new(),
        }
    }

    pub fn with_attribute(mut self, key: &str, value: &str) -> Self {
        self.attributes.insert(key.to_string(), value.to_string());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Integer attribute with a default. A present but unparsable value is a
    /// configuration error, not a silent fallback.
    pub fn get_int(&self, key: &str, default: i64) -> Result<i64, ConfigurationError> {
        match self.attributes.get(key) {
            None => Ok(default),
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| self.malformed(key, raw, "expected an integer")),
        }
    }

    /// String attribute with a default.
    pub fn get_string(&self, key: &str, default: &str) -> String {
        self.attributes
            .get(key)
            .cloned()
            .unwrap_or_else(|| default.to_string())
    }

    /// Required string attribute; absence is a configuration error.
    pub fn require_string(&self, key: &str) -> Result<&str, ConfigurationError> {
        self.attributes
            .get(key)
            .map(String::as_str)
            .ok_or_else(|| ConfigurationError::MissingAttribute {
                validator: self.name.clone(),
                key: key.to_string(),
            })
    }

    /// Comma-separated list attribute; empty when absent.
    pub fn get_string_list(&self, key: &str) -> Vec<String> {
        match self.attributes.get(key) {
            None => Vec::new(),
            Some(raw) => raw
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
        }
    }

    /// Regular-expression attribute; a malformed pattern is a configuration
    /// error.
    pub fn get_pattern(&self, key: &str) -> Result<Option<Regex>, ConfigurationError> {
        match self.attributes.get(key) {
            None => Ok(None),
            Some(raw) => Regex::new(raw)
                .map(Some)
                .map_err(|e| self.malformed(key, raw, &e.to_string())),
        }
    }

    fn malformed(&self, key: &str, value: &str, reason: &str) -> ConfigurationError {
        ConfigurationError::MalformedAttribute {
            validator: self.name.clone(),
            key: key.to_string(),
            value: value.to_string(),
            reason: reason.to_string(),
        }
    }
}
