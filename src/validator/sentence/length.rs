//! Sentence length rule.

use crate::error::ConfigurationError;
use crate::model::Sentence;
use crate::validator::{Finding, Reporter, SentenceValidator, ValidatorContext};

const DEFAULT_MAX_LENGTH: i64 = 30;

/// Flags sentences longer than `max_len` characters.
pub struct SentenceLength {
    max_length: usize,
    reporter: Reporter,
}

impl SentenceLength {
    pub fn new(context: &ValidatorContext) -> Result<Self, ConfigurationError> {
        let max_length = context.config.get_int("max_len", DEFAULT_MAX_LENGTH)?.max(0) as usize;
        Ok(Self {
            max_length,
            reporter: context.reporter("SentenceLength"),
        })
    }
}

impl SentenceValidator for SentenceLength {
    fn validate(&self, sentence: &Sentence) -> Vec<Finding> {
        let length = sentence.content.chars().count();
        if length > self.max_length {
            vec![
                self.reporter
                    .finding_for(sentence, &[&length, &self.max_length]),
            ]
        } else {
            Vec::new()
        }
    }
}
