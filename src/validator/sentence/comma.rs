//! Comma count rule.

use crate::error::ConfigurationError;
use crate::model::Sentence;
use crate::validator::{Finding, Reporter, SentenceValidator, ValidatorContext};

const DEFAULT_MAX_COMMAS: i64 = 3;

/// Flags sentences with more than `max_num` commas. The comma character comes
/// from the language symbol table.
pub struct CommaNumber {
    max_commas: usize,
    comma: String,
    reporter: Reporter,
}

impl CommaNumber {
    pub fn new(context: &ValidatorContext) -> Result<Self, ConfigurationError> {
        let max_commas = context.config.get_int("max_num", DEFAULT_MAX_COMMAS)?.max(0) as usize;
        let comma = context
            .symbols
            .get("COMMA")
            .map(|symbol| symbol.value.clone())
            .unwrap_or_else(|| ",".to_string());
        Ok(Self {
            max_commas,
            comma,
            reporter: context.reporter("CommaNumber"),
        })
    }
}

impl SentenceValidator for CommaNumber {
    fn validate(&self, sentence: &Sentence) -> Vec<Finding> {
        let count = sentence.content.matches(&self.comma).count();
        if count > self.max_commas {
            vec![
                self.reporter
                    .finding_for(sentence, &[&count, &self.max_commas]),
            ]
        } else {
            Vec::new()
        }
    }
}
