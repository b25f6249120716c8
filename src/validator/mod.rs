//! Validator plugin contract
//!
//! A validator is a rule checker operating over exactly one level of the
//! document tree. Its granularity and its optional pre-processing capability
//! are declared as data at registration time; the engine never inspects
//! instance types at runtime.

pub mod message;
pub mod registry;
pub mod section;
pub mod sentence;

use std::fmt;
use std::sync::Arc;

use serde::Serialize;

use crate::config::ValidatorConfig;
use crate::model::{Document, Section, Sentence};
use crate::symbol::SymbolTable;

pub use message::MessageCatalog;
pub use registry::{ValidatorHandle, ValidatorRegistry, ValidatorSpec};

/// The document level a validator operates over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Granularity {
    Document,
    Section,
    Sentence,
}

/// One rule violation. Produced by a validator, stamped with the originating
/// document's file name by the engine, never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    /// Identifier of the validator that produced the finding.
    pub validator: String,
    pub message: String,
    /// Attached by the engine; validators are context-free and do not know
    /// their file.
    pub file_name: Option<String>,
    /// Source position of the offending sentence, when one is attached.
    pub line: Option<usize>,
    /// Content of the offending sentence, when one is attached.
    pub sentence: Option<String>,
}

impl Finding {
    pub fn new(validator: &str, message: &str) -> Self {
        Self {
            validator: validator.to_string(),
            message: message.to_string(),
            file_name: None,
            line: None,
            sentence: None,
        }
    }

    /// Attach the offending sentence and its position.
    pub fn with_sentence(mut self, sentence: &Sentence) -> Self {
        self.line = Some(sentence.position);
        self.sentence = Some(sentence.content.clone());
        self
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.file_name, self.line) {
            (Some(file), Some(line)) => write!(f, "{file}:{line}: "),
            (Some(file), None) => write!(f, "{file}: "),
            (None, Some(line)) => write!(f, "{line}: "),
            (None, None) => Ok(()),
        }?;
        write!(f, "{}: {}", self.validator, self.message)
    }
}

/// A rule over one whole document.
pub trait DocumentValidator {
    fn validate(&self, document: &Document) -> Vec<Finding>;
}

/// A rule over one section.
pub trait SectionValidator {
    fn validate(&self, section: &Section) -> Vec<Finding>;
}

/// A rule over one sentence.
///
/// `preprocess` is only invoked for validators registered with the
/// pre-processing capability; the default is a no-op. The pre-processing
/// sub-pass runs over the whole collection before any `validate` call, so
/// validators reading `Sentence::tokens` always see pre-processed sentences.
pub trait SentenceValidator {
    fn preprocess(&self, _sentence: &mut Sentence) {}

    fn validate(&self, sentence: &Sentence) -> Vec<Finding>;
}

/// Everything a validator constructor gets to work with: its own attribute
/// map, the shared language symbol table, and the message catalog.
pub struct ValidatorContext {
    pub config: ValidatorConfig,
    pub symbols: Arc<SymbolTable>,
    pub messages: Arc<MessageCatalog>,
}

impl ValidatorContext {
    /// Finding-construction helper bound to a validator identifier.
    pub fn reporter(&self, validator: &str) -> Reporter {
        Reporter {
            validator: validator.to_string(),
            messages: Arc::clone(&self.messages),
        }
    }
}

/// Shared finding-construction helper: interpolates the locale-keyed message
/// template for its validator (keyed by identifier and argument arity) with
/// positional arguments.
#[derive(Clone)]
pub struct Reporter {
    validator: String,
    messages: Arc<MessageCatalog>,
}

impl Reporter {
    /// Build a finding without an attached sentence.
    pub fn finding(&self, args: &[&dyn fmt::Display]) -> Finding {
        Finding::new(&self.validator, &self.message(args))
    }

    /// Build a finding attached to the offending sentence.
    pub fn finding_for(&self, sentence: &Sentence, args: &[&dyn fmt::Display]) -> Finding {
        self.finding(args).with_sentence(sentence)
    }

    fn message(&self, args: &[&dyn fmt::Display]) -> String {
        match self.messages.format(&self.validator, args) {
            Ok(message) => message,
            Err(e) => {
                // Startup validation catches unknown identifiers; an arity
                // miss can only surface here. Fail loudly, never blank.
                log::error!("message template lookup failed: {e}");
                format!(
                    "missing message template for \"{}\" with {} arguments",
                    self.validator,
                    args.len()
                )
            }
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finding_display() {
        let mut finding = Finding::new("SentenceLength", "too long");
        finding.file_name = Some("doc.txt".to_string());
        finding.line = Some(12);
        assert_eq!(finding.to_string(), "doc.txt:12: SentenceLength: too long");
    }

    #[test]
    fn test_finding_with_sentence() {
        let sentence = Sentence::new("short.", 7);
        let finding = Finding::new("Test", "msg").with_sentence(&sentence);
        assert_eq!(finding.line, Some(7));
        assert_eq!(finding.sentence.as_deref(), Some("short."));
        assert_eq!(finding.file_name, None);
    }

    #[test]
    fn test_finding_serializes() {
        let finding = Finding::new("Test", "msg");
        let json = serde_json::to_string(&finding).unwrap();
        assert!(json.contains("\"validator\":\"Test\""));
    }
}
