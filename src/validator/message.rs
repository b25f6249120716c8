//! Message catalog
//!
//! Locale-keyed finding message templates, keyed by validator identifier and
//! argument arity, embedded as TOML resources. Positional `{}` slots are
//! interpolated in order.

use std::collections::HashMap;
use std::fmt;

use crate::error::ConfigurationError;

/// Parsed message templates for one locale.
#[derive(Debug, Clone)]
pub struct MessageCatalog {
    locale: String,
    // validator id -> arity -> template
    templates: HashMap<String, HashMap<usize, String>>,
}

impl MessageCatalog {
    /// Load the embedded catalog for a locale. Locales without their own
    /// catalog fall back to English.
    pub fn load(locale: &str) -> Result<Self, ConfigurationError> {
        let embedded = match locale {
            "en" => include_str!("../../resources/messages/en.toml"),
            other => {
                log::debug!("no message catalog for locale \"{other}\", falling back to \"en\"");
                include_str!("../../resources/messages/en.toml")
            }
        };
        let raw: HashMap<String, HashMap<String, String>> =
            toml::from_str(embedded).map_err(|e| ConfigurationError::BadResource {
                resource: format!("messages/{locale}.toml"),
                reason: e.to_string(),
            })?;

        let mut templates = HashMap::new();
        for (validator, by_arity) in raw {
            let mut parsed = HashMap::new();
            for (arity, template) in by_arity {
                let arity: usize =
                    arity
                        .parse()
                        .map_err(|_| ConfigurationError::BadResource {
                            resource: format!("messages/{locale}.toml"),
                            reason: format!(
                                "non-numeric arity key \"{arity}\" under [{validator}]"
                            ),
                        })?;
                parsed.insert(arity, template);
            }
            templates.insert(validator, parsed);
        }
        Ok(Self {
            locale: locale.to_string(),
            templates,
        })
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Whether any template exists for a validator identifier. Checked once
    /// at engine startup for every configured validator.
    pub fn contains(&self, validator: &str) -> bool {
        self.templates.contains_key(validator)
    }

    /// Register a template, e.g. alongside a custom validator.
    pub fn insert(&mut self, validator: &str, arity: usize, template: &str) {
        self.templates
            .entry(validator.to_string())
            .or_default()
            .insert(arity, template.to_string());
    }

    /// Interpolate the template for `validator` with `args.len()` positional
    /// arguments.
    pub fn format(
        &self,
        validator: &str,
        args: &[&dyn fmt::Display],
    ) -> Result<String, ConfigurationError> {
        let by_arity = self
            .templates
            .get(validator)
            .ok_or_else(|| ConfigurationError::MissingMessageTemplate(validator.to_string()))?;
        let template =
            by_arity
                .get(&args.len())
                .ok_or_else(|| ConfigurationError::MissingMessageArity {
                    validator: validator.to_string(),
                    arity: args.len(),
                })?;
        Ok(interpolate(template, args))
    }
}

/// Replace each `{}` slot with the next positional argument.
fn interpolate(template: &str, args: &[&dyn fmt::Display]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    let mut args = args.iter();
    while let Some(idx) = rest.find("{}") {
        out.push_str(&rest[..idx]);
        if let Some(arg) = args.next() {
            out.push_str(&arg.to_string());
        }
        rest = &rest[idx + 2..];
    }
    out.push_str(rest);
    out
}
