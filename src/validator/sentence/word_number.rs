//! Word count rule.

use crate::error::ConfigurationError;
use crate::model::Sentence;
use crate::validator::{Finding, Reporter, SentenceValidator, ValidatorContext};

const DEFAULT_MAX_WORDS: i64 = 30;

/// Flags sentences with more than `max_num` words.
///
/// The pre-processing sub-pass attaches the token sequence to each sentence;
/// validation reads it back. Splitting on whitespace is the black-box
/// tokenization the engine ships with; language-aware tokenizers live in the
/// excluded parser layer.
pub struct WordNumber {
    max_words: usize,
    reporter: Reporter,
}

impl WordNumber {
    pub fn new(context: &ValidatorContext) -> Result<Self, ConfigurationError> {
        let max_words = context.config.get_int("max_num", DEFAULT_MAX_WORDS)?.max(0) as usize;
        Ok(Self {
            max_words,
            reporter: context.reporter("WordNumber"),
        })
    }
}

impl SentenceValidator for WordNumber {
    fn preprocess(&self, sentence: &mut Sentence) {
        // Overwrite rather than append so repeated runs stay idempotent.
        sentence.tokens = sentence
            .content
            .split_whitespace()
            .map(str::to_string)
            .collect();
    }

    fn validate(&self, sentence: &Sentence) -> Vec<Finding> {
        let count = sentence.tokens.len();
        if count > self.max_words {
            vec![
                self.reporter
                    .finding_for(sentence, &[&count, &self.max_words]),
            ]
        } else {
            Vec::new()
        }
    }
}
