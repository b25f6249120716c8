//! Sentence-start spacing rule.

use crate::error::ConfigurationError;
use crate::model::Sentence;
use crate::validator::{Finding, Reporter, SentenceValidator, ValidatorContext};

/// Flags sentences, other than the first of their sequence, that do not start
/// with a space. Sentence splitters that keep the inter-sentence space on the
/// following sentence rely on this to catch missing separators.
pub struct SpaceBeginningOfSentence {
    reporter: Reporter,
}

impl SpaceBeginningOfSentence {
    pub fn new(context: &ValidatorContext) -> Result<Self, ConfigurationError> {
        Ok(Self {
            reporter: context.reporter("SpaceBeginningOfSentence"),
        })
    }
}

impl SentenceValidator for SpaceBeginningOfSentence {
    fn validate(&self, sentence: &Sentence) -> Vec<Finding> {
        if !sentence.is_first_sentence
            && !sentence.content.is_empty()
            && !sentence.content.starts_with(' ')
        {
            vec![self.reporter.finding_for(sentence, &[])]
        } else {
            Vec::new()
        }
    }
}
