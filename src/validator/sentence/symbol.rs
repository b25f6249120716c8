//! Symbol-table driven rules: invalid symbols and symbol spacing.

use std::sync::Arc;

use crate::error::ConfigurationError;
use crate::model::Sentence;
use crate::symbol::{Symbol, SymbolTable};
use crate::validator::{Finding, Reporter, SentenceValidator, ValidatorContext};

/// Flags occurrences of symbols listed as invalid for the language.
pub struct InvalidSymbol {
    symbols: Arc<SymbolTable>,
    reporter: Reporter,
}

impl InvalidSymbol {
    pub fn new(context: &ValidatorContext) -> Result<Self, ConfigurationError> {
        Ok(Self {
            symbols: Arc::clone(&context.symbols),
            reporter: context.reporter("InvalidSymbol"),
        })
    }
}

impl SentenceValidator for InvalidSymbol {
    fn validate(&self, sentence: &Sentence) -> Vec<Finding> {
        let mut findings = Vec::new();
        for symbol in self.symbols.iter() {
            // At most one finding per symbol name.
            if let Some(invalid) = symbol
                .invalid_symbols
                .iter()
                .find(|invalid| sentence.content.contains(invalid.as_str()))
            {
                findings.push(self.reporter.finding_for(sentence, &[invalid]));
            }
        }
        findings
    }
}

/// Flags symbols that are missing a required space before or after them.
pub struct SymbolWithSpace {
    symbols: Arc<SymbolTable>,
    reporter: Reporter,
}

impl SymbolWithSpace {
    pub fn new(context: &ValidatorContext) -> Result<Self, ConfigurationError> {
        Ok(Self {
            symbols: Arc::clone(&context.symbols),
            reporter: context.reporter("SymbolWithSpace"),
        })
    }

    fn check_symbol(&self, sentence: &Sentence, symbol: &Symbol) -> Option<Finding> {
        if !symbol.needs_before_space && !symbol.needs_after_space {
            return None;
        }
        let content = &sentence.content;
        let position = content.find(&symbol.value)?;

        if position > 0 && symbol.needs_before_space {
            let before = content[..position].chars().next_back();
            if before.is_some_and(|c| !c.is_whitespace()) {
                return Some(
                    self.reporter
                        .finding_for(sentence, &[&symbol.value, &"before"]),
                );
            }
        }
        let after_start = position + symbol.value.len();
        if after_start < content.len() && symbol.needs_after_space {
            let after = content[after_start..].chars().next();
            if after.is_some_and(|c| !c.is_whitespace()) {
                return Some(
                    self.reporter
                        .finding_for(sentence, &[&symbol.value, &"after"]),
                );
            }
        }
        None
    }
}

impl SentenceValidator for SymbolWithSpace {
    fn validate(&self, sentence: &Sentence) -> Vec<Finding> {
        self.symbols
            .iter()
            .filter_map(|symbol| self.check_symbol(sentence, symbol))
            .collect()
    }
}
