//! Built-in section-granularity validators.

use crate::error::ConfigurationError;
use crate::model::Section;
use crate::validator::{Finding, Reporter, SectionValidator, ValidatorContext};

const DEFAULT_MAX_SECTION_CHARS: i64 = 1000;
const DEFAULT_MAX_PARAGRAPHS: i64 = 5;

/// Flags sections whose paragraph text exceeds `max_num` characters.
pub struct SectionLength {
    max_chars: usize,
    reporter: Reporter,
}

impl SectionLength {
    pub fn new(context: &ValidatorContext) -> Result<Self, ConfigurationError> {
        let max_chars = context
            .config
            .get_int("max_num", DEFAULT_MAX_SECTION_CHARS)?
            .max(0) as usize;
        Ok(Self {
            max_chars,
            reporter: context.reporter("SectionLength"),
        })
    }
}

impl SectionValidator for SectionLength {
    fn validate(&self, section: &Section) -> Vec<Finding> {
        let length: usize = section
            .paragraphs
            .iter()
            .flat_map(|paragraph| &paragraph.sentences)
            .map(|sentence| sentence.content.chars().count())
            .sum();
        if length > self.max_chars {
            vec![self.reporter.finding(&[&length, &self.max_chars])]
        } else {
            Vec::new()
        }
    }
}

/// Flags sections with more than `max_num` paragraphs.
pub struct ParagraphNumber {
    max_paragraphs: usize,
    reporter: Reporter,
}

impl ParagraphNumber {
    pub fn new(context: &ValidatorContext) -> Result<Self, ConfigurationError> {
        let max_paragraphs = context
            .config
            .get_int("max_num", DEFAULT_MAX_PARAGRAPHS)?
            .max(0) as usize;
        Ok(Self {
            max_paragraphs,
            reporter: context.reporter("ParagraphNumber"),
        })
    }
}

impl SectionValidator for ParagraphNumber {
    fn validate(&self, section: &Section) -> Vec<Finding> {
        let count = section.paragraphs.len();
        if count > self.max_paragraphs {
            vec![self.reporter.finding(&[&count, &self.max_paragraphs])]
        } else {
            Vec::new()
        }
    }
}
