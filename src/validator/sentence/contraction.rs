//! Contraction consistency rule.

use std::cell::Cell;

use crate::error::ConfigurationError;
use crate::model::Sentence;
use crate::validator::{Finding, Reporter, SentenceValidator, ValidatorContext};

/// Flags contractions in documents that mostly avoid them.
///
/// The pre-processing sub-pass counts sentences with and without
/// contractions across the whole collection; validation then flags a
/// contraction sentence only when plain sentences are in the majority. When
/// the input is written in a contracted style throughout, contractions are
/// taken as intentional and left alone.
pub struct Contraction {
    with_contraction: Cell<usize>,
    without_contraction: Cell<usize>,
    reporter: Reporter,
}

impl Contraction {
    pub fn new(context: &ValidatorContext) -> Result<Self, ConfigurationError> {
        Ok(Self {
            with_contraction: Cell::new(0),
            without_contraction: Cell::new(0),
            reporter: context.reporter("Contraction"),
        })
    }
}

impl SentenceValidator for Contraction {
    fn preprocess(&self, sentence: &mut Sentence) {
        if find_contraction(&sentence.content).is_some() {
            self.with_contraction.set(self.with_contraction.get() + 1);
        } else {
            self.without_contraction
                .set(self.without_contraction.get() + 1);
        }
    }

    fn validate(&self, sentence: &Sentence) -> Vec<Finding> {
        if self.with_contraction.get() > self.without_contraction.get() {
            return Vec::new();
        }
        match find_contraction(&sentence.content) {
            Some(word) => vec![self.reporter.finding_for(sentence, &[&word])],
            None => Vec::new(),
        }
    }
}

/// Find the first word containing an inner apostrophe, e.g. `he's`.
fn find_contraction(content: &str) -> Option<&str> {
    content.split_whitespace().find(|word| {
        word.char_indices().any(|(idx, c)| {
            c == '\''
                && word[..idx].chars().next_back().is_some_and(char::is_alphabetic)
                && word[idx + 1..].chars().next().is_some_and(char::is_alphabetic)
        })
    })
}
