//! Validation engine
//!
//! Orchestrates three ordered passes over a [`DocumentCollection`]:
//! document phase, section phase, then the two sentence sub-passes
//! (mutating pre-processing across the whole collection, followed by
//! read-only validation). Findings are returned as an ordered list and
//! forwarded, best-effort, to the attached sink.

use crate::config::Configuration;
use crate::error::ConfigurationError;
use crate::model::{Document, DocumentCollection, Section, Sentence};
use crate::sink::{FindingSink, NullSink};
use crate::validator::registry::{SentenceEntry, ValidatorSet};
use crate::validator::{Finding, ValidatorRegistry};

/// The validation engine. Construction performs all fatal startup checks;
/// a `Checker` that exists is fully configured.
pub struct Checker {
    validators: ValidatorSet,
    sink: Box<dyn FindingSink>,
}

impl std::fmt::Debug for Checker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Checker").finish_non_exhaustive()
    }
}

impl Checker {
    /// Build an engine over the built-in validator registry, with a no-op
    /// sink.
    pub fn new(configuration: &Configuration) -> Result<Self, ConfigurationError> {
        Self::with_registry(configuration, &ValidatorRegistry::builtin())
    }

    /// Build an engine over a caller-supplied registry.
    pub fn with_registry(
        configuration: &Configuration,
        registry: &ValidatorRegistry,
    ) -> Result<Self, ConfigurationError> {
        let validators = registry.instantiate(configuration)?;
        Ok(Self {
            validators,
            sink: Box::new(NullSink),
        })
    }

    /// Replace the finding sink. The sink is advisory; the list returned by
    /// [`check`](Self::check) is the single source of truth.
    pub fn set_sink(&mut self, sink: Box<dyn FindingSink>) {
        self.sink = sink;
    }

    /// Validate a document collection and return the ordered finding list.
    ///
    /// The collection is borrowed mutably only for the pre-processing
    /// sub-pass (token attachment); validation itself reads it. Output order
    /// is deterministic: document-phase findings (document order), then
    /// section-phase findings (document, then section order), then
    /// sentence-phase findings in traversal order — paragraphs, section
    /// header, list blocks — with validator registration order outer and
    /// sentence order inner within each sequence.
    ///
    /// A panic inside a validator aborts the run; faulty rules are
    /// programming errors and are not isolated.
    pub fn check(&mut self, collection: &mut DocumentCollection) -> Vec<Finding> {
        let mut findings = Vec::new();
        self.sink.on_header();
        self.run_document_phase(collection, &mut findings);
        self.run_section_phase(collection, &mut findings);
        // Pre-processing must finish for the whole collection before any
        // validator reads sentence tokens.
        self.run_preprocess_pass(collection);
        self.run_sentence_phase(collection, &mut findings);
        self.sink.on_footer();
        log::debug!("check finished with {} findings", findings.len());
        findings
    }

    fn run_document_phase(&mut self, collection: &DocumentCollection, findings: &mut Vec<Finding>) {
        for document in collection {
            for validator in &self.validators.document {
                for finding in validator.validate(document) {
                    emit(self.sink.as_mut(), findings, finding, &document.file_name);
                }
            }
        }
    }

    fn run_section_phase(&mut self, collection: &DocumentCollection, findings: &mut Vec<Finding>) {
        for document in collection {
            for section in &document.sections {
                for validator in &self.validators.section {
                    for finding in validator.validate(section) {
                        emit(self.sink.as_mut(), findings, finding, &document.file_name);
                    }
                }
            }
        }
    }

    fn run_preprocess_pass(&self, collection: &mut DocumentCollection) {
        for document in &mut collection.documents {
            for section in &mut document.sections {
                preprocess_section(&self.validators.sentence, section);
            }
        }
    }

    fn run_sentence_phase(&mut self, collection: &DocumentCollection, findings: &mut Vec<Finding>) {
        for document in collection {
            for section in &document.sections {
                self.validate_section_sentences(document, section, findings);
            }
        }
    }

    /// Fixed traversal order: paragraphs, then the section header, then list
    /// blocks element by element.
    fn validate_section_sentences(
        &mut self,
        document: &Document,
        section: &Section,
        findings: &mut Vec<Finding>,
    ) {
        let validators = &self.validators.sentence;
        let sink = self.sink.as_mut();
        for paragraph in &section.paragraphs {
            validate_sequence(
                validators,
                &paragraph.sentences,
                sink,
                findings,
                &document.file_name,
            );
        }
        validate_sequence(
            validators,
            &section.headers,
            sink,
            findings,
            &document.file_name,
        );
        for block in &section.list_blocks {
            for element in &block.elements {
                validate_sequence(
                    validators,
                    &element.sentences,
                    sink,
                    findings,
                    &document.file_name,
                );
            }
        }
    }
}

/// Same traversal as validation, restricted to validators that declared the
/// pre-processing capability.
fn preprocess_section(validators: &[SentenceEntry], section: &mut Section) {
    for paragraph in &mut section.paragraphs {
        preprocess_sequence(validators, &mut paragraph.sentences);
    }
    preprocess_sequence(validators, &mut section.headers);
    for block in &mut section.list_blocks {
        for element in &mut block.elements {
            preprocess_sequence(validators, &mut element.sentences);
        }
    }
}

fn preprocess_sequence(validators: &[SentenceEntry], sentences: &mut [Sentence]) {
    for entry in validators.iter().filter(|entry| entry.preprocesses) {
        for sentence in sentences.iter_mut() {
            entry.validator.preprocess(sentence);
        }
    }
}

fn validate_sequence(
    validators: &[SentenceEntry],
    sentences: &[Sentence],
    sink: &mut dyn FindingSink,
    findings: &mut Vec<Finding>,
    file_name: &str,
) {
    for entry in validators {
        for sentence in sentences {
            for finding in entry.validator.validate(sentence) {
                emit(sink, findings, finding, file_name);
            }
        }
    }
}

/// Stamp the originating file, forward to the sink, and record the finding.
/// Sink failures are logged and never touch the recorded list.
fn emit(
    sink: &mut dyn FindingSink,
    findings: &mut Vec<Finding>,
    mut finding: Finding,
    file_name: &str,
) {
    finding.file_name = Some(file_name.to_string());
    if let Err(e) = sink.on_finding(&finding) {
        log::error!("failed to deliver finding to sink: {e}; skipping delivery");
    }
    findings.push(finding);
}
