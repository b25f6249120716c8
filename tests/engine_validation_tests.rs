//! Integration tests for the three-phase validation engine: phase ordering,
//! determinism, file stamping, and sink fault isolation.

use std::cell::RefCell;
use std::rc::Rc;

use prose_lint::{
    Checker, Configuration, ConfigurationError, Document, DocumentBuilder, DocumentCollection,
    DocumentValidator, Finding, FindingSink, Section, SectionValidator, Sentence,
    SentenceValidator, SinkError, ValidatorConfig, ValidatorRegistry, ValidatorSpec,
};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// doc1 with paragraphs, a header, and a list; doc2 with a single paragraph.
fn sample_collection() -> DocumentCollection {
    let mut builder = DocumentBuilder::new();
    builder
        .add_document("doc1")
        .add_section(1)
        .unwrap()
        .add_section_header("header1")
        .unwrap()
        .add_paragraph()
        .unwrap()
        .add_sentence("p1s1", 1)
        .unwrap()
        .add_sentence("p1s2", 2)
        .unwrap()
        .add_paragraph()
        .unwrap()
        .add_sentence("p2s1", 3)
        .unwrap()
        .add_list_block()
        .unwrap()
        .add_list_element(0, "item1")
        .unwrap()
        .add_list_element(0, "item2")
        .unwrap();
    builder
        .add_document("doc2")
        .add_section(1)
        .unwrap()
        .add_paragraph()
        .unwrap()
        .add_sentence("d2s1", 1)
        .unwrap();
    builder.build()
}

struct MarkDocument;
impl DocumentValidator for MarkDocument {
    fn validate(&self, document: &Document) -> Vec<Finding> {
        vec![Finding::new(
            "MarkDocument",
            &format!("doc:{}", document.file_name),
        )]
    }
}

struct MarkSection;
impl SectionValidator for MarkSection {
    fn validate(&self, section: &Section) -> Vec<Finding> {
        vec![Finding::new(
            "MarkSection",
            &format!("section:level{}", section.level),
        )]
    }
}

struct EchoSentence(&'static str);
impl SentenceValidator for EchoSentence {
    fn validate(&self, sentence: &Sentence) -> Vec<Finding> {
        vec![Finding::new(
            self.0,
            &format!("{}:{}", self.0, sentence.content),
        )]
    }
}

fn marker_registry() -> ValidatorRegistry {
    let mut registry = ValidatorRegistry::builtin();
    registry.register("MarkDocument", ValidatorSpec::document(|_| Ok(MarkDocument)));
    registry.register("MarkSection", ValidatorSpec::section(|_| Ok(MarkSection)));
    registry.register(
        "EchoA",
        ValidatorSpec::sentence(|_| Ok(EchoSentence("EchoA"))),
    );
    registry.register(
        "EchoB",
        ValidatorSpec::sentence(|_| Ok(EchoSentence("EchoB"))),
    );
    for id in ["MarkDocument", "MarkSection", "EchoA", "EchoB"] {
        registry.register_template(id, 0, "marker");
    }
    registry
}

fn marker_configuration() -> Configuration {
    Configuration::new("en")
        .add_validator(ValidatorConfig::new("MarkDocument"))
        .add_validator(ValidatorConfig::new("MarkSection"))
        .add_validator(ValidatorConfig::new("EchoA"))
        .add_validator(ValidatorConfig::new("EchoB"))
}

#[test]
fn test_phase_and_traversal_order() {
    init_logging();
    let mut checker = Checker::with_registry(&marker_configuration(), &marker_registry()).unwrap();
    let mut collection = sample_collection();
    let messages: Vec<String> = checker
        .check(&mut collection)
        .into_iter()
        .map(|f| f.message)
        .collect();

    let expected = vec![
        // Document phase, document order.
        "doc:doc1",
        "doc:doc2",
        // Section phase, document then section order.
        "section:level1",
        "section:level1",
        // Sentence phase, doc1: paragraphs, then header, then list elements;
        // validator registration order outer, sentence order inner.
        "EchoA:p1s1",
        "EchoA:p1s2",
        "EchoB:p1s1",
        "EchoB:p1s2",
        "EchoA:p2s1",
        "EchoB:p2s1",
        "EchoA:header1",
        "EchoB:header1",
        "EchoA:item1",
        "EchoB:item1",
        "EchoA:item2",
        "EchoB:item2",
        // Sentence phase, doc2.
        "EchoA:d2s1",
        "EchoB:d2s1",
    ];
    assert_eq!(messages, expected);
}

#[test]
fn test_file_names_follow_phases() {
    init_logging();
    let mut checker = Checker::with_registry(&marker_configuration(), &marker_registry()).unwrap();
    let mut collection = sample_collection();
    let findings = checker.check(&mut collection);
    assert!(findings.iter().all(|f| f.file_name.is_some()));
    assert_eq!(findings[0].file_name.as_deref(), Some("doc1"));
    assert_eq!(findings[1].file_name.as_deref(), Some("doc2"));
    let last = findings.last().unwrap();
    assert_eq!(last.file_name.as_deref(), Some("doc2"));
}

#[test]
fn test_check_twice_is_deterministic() {
    init_logging();
    let configuration = Configuration::new("en")
        .add_validator(ValidatorConfig::new("SentenceLength").with_attribute("max_len", "3"))
        .add_validator(ValidatorConfig::new("WordNumber").with_attribute("max_num", "1"))
        .add_validator(ValidatorConfig::new("Contraction"));
    let mut checker = Checker::new(&configuration).unwrap();
    let mut collection = sample_collection();

    let first = checker.check(&mut collection);
    let second = checker.check(&mut collection);
    assert!(!first.is_empty());
    assert_eq!(first, second);
}

#[test]
fn test_unknown_validator_rejected_at_construction() {
    init_logging();
    let configuration =
        Configuration::new("en").add_validator(ValidatorConfig::new("NotRegistered"));
    let err = Checker::new(&configuration).unwrap_err();
    assert!(matches!(err, ConfigurationError::UnknownValidator(_)));
}

#[test]
fn test_sentence_length_boundary() {
    init_logging();
    let configuration =
        Configuration::new("en").add_validator(ValidatorConfig::new("SentenceLength"));
    let mut checker = Checker::new(&configuration).unwrap();

    let mut builder = DocumentBuilder::new();
    builder
        .add_document("boundary")
        .add_section(0)
        .unwrap()
        .add_paragraph()
        .unwrap()
        .add_sentence(&"x".repeat(30), 1)
        .unwrap()
        .add_sentence(&"x".repeat(31), 2)
        .unwrap();
    let mut collection = builder.build();

    let findings = checker.check(&mut collection);
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].line, Some(2));
}

#[test]
fn test_symbol_with_space_example() {
    init_logging();
    let configuration =
        Configuration::new("en").add_validator(ValidatorConfig::new("SymbolWithSpace"));
    let mut checker = Checker::new(&configuration).unwrap();

    let mut builder = DocumentBuilder::new();
    builder
        .add_document("spacing")
        .add_section(0)
        .unwrap()
        .add_paragraph()
        .unwrap()
        .add_sentence("hello(world)", 1)
        .unwrap()
        .add_sentence("hello (world)", 2)
        .unwrap();
    let mut collection = builder.build();

    let findings = checker.check(&mut collection);
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].line, Some(1));
}

/// Fails delivery of the nth finding; records what it did deliver.
struct FlakySink {
    delivered: Rc<RefCell<Vec<String>>>,
    fail_on: usize,
    seen: usize,
}

impl FindingSink for FlakySink {
    fn on_finding(&mut self, finding: &Finding) -> Result<(), SinkError> {
        self.seen += 1;
        if self.seen == self.fail_on {
            return Err(SinkError::Other("transient sink outage".to_string()));
        }
        self.delivered.borrow_mut().push(finding.message.clone());
        Ok(())
    }
}

#[test]
fn test_sink_failure_does_not_lose_findings() {
    init_logging();
    let mut checker = Checker::with_registry(&marker_configuration(), &marker_registry()).unwrap();
    let delivered = Rc::new(RefCell::new(Vec::new()));
    checker.set_sink(Box::new(FlakySink {
        delivered: Rc::clone(&delivered),
        fail_on: 2,
        seen: 0,
    }));

    let mut collection = sample_collection();
    let findings = checker.check(&mut collection);

    // The failed delivery is skipped, later deliveries continue, and the
    // returned list is complete.
    assert_eq!(findings.len(), 18);
    assert_eq!(delivered.borrow().len(), 17);
    assert_eq!(delivered.borrow()[0], "doc:doc1");
    assert_eq!(delivered.borrow()[1], "section:level1");
}

/// Reads tokens attached by a pre-processing validator registered later in
/// the configuration: the pre-processing sub-pass must complete for the whole
/// collection before validation starts.
struct TokenCount;
impl SentenceValidator for TokenCount {
    fn validate(&self, sentence: &Sentence) -> Vec<Finding> {
        vec![Finding::new(
            "TokenCount",
            &format!("tokens:{}", sentence.tokens.len()),
        )]
    }
}

#[test]
fn test_preprocessing_completes_before_validation() {
    init_logging();
    let mut registry = ValidatorRegistry::builtin();
    registry.register("TokenCount", ValidatorSpec::sentence(|_| Ok(TokenCount)));
    registry.register_template("TokenCount", 0, "marker");

    // TokenCount is registered before WordNumber, whose preprocess attaches
    // the tokens TokenCount reads.
    let configuration = Configuration::new("en")
        .add_validator(ValidatorConfig::new("TokenCount"))
        .add_validator(ValidatorConfig::new("WordNumber"));
    let mut checker = Checker::with_registry(&configuration, &registry).unwrap();

    let mut builder = DocumentBuilder::new();
    builder
        .add_document("doc")
        .add_section(0)
        .unwrap()
        .add_paragraph()
        .unwrap()
        .add_sentence("this is a foobar.", 1)
        .unwrap();
    let mut collection = builder.build();

    let findings = checker.check(&mut collection);
    assert_eq!(findings[0].message, "tokens:4");
}
