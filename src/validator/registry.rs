//! Validator registry
//!
//! Maps validator identifiers to constructors. Granularity and the optional
//! pre-processing capability are declared here, as data, when a validator is
//! registered; instantiation resolves each configured identifier, runs the
//! constructor against its attribute map, and fails with a
//! [`ConfigurationError`] before the engine ever starts when anything is off.

use std::collections::HashMap;
use std::sync::Arc;

use crate::config::Configuration;
use crate::error::ConfigurationError;
use crate::symbol;
use crate::validator::section::{ParagraphNumber, SectionLength};
use crate::validator::sentence::{
    CommaNumber, Contraction, InvalidSymbol, SentenceLength, SpaceBeginningOfSentence,
    SymbolWithSpace, WordNumber,
};
use crate::validator::{
    DocumentValidator, Granularity, MessageCatalog, SectionValidator, SentenceValidator,
    ValidatorContext,
};

/// An instantiated validator, tagged with its granularity by construction.
pub enum ValidatorHandle {
    Document(Box<dyn DocumentValidator>),
    Section(Box<dyn SectionValidator>),
    Sentence(Box<dyn SentenceValidator>),
}

impl ValidatorHandle {
    fn granularity(&self) -> Granularity {
        match self {
            Self::Document(_) => Granularity::Document,
            Self::Section(_) => Granularity::Section,
            Self::Sentence(_) => Granularity::Sentence,
        }
    }
}

type Constructor =
    Box<dyn Fn(&ValidatorContext) -> Result<ValidatorHandle, ConfigurationError> + Send + Sync>;

/// Registration record: the single granularity a validator operates over,
/// whether it also runs in the pre-processing sub-pass, and its constructor.
pub struct ValidatorSpec {
    granularity: Granularity,
    preprocesses: bool,
    constructor: Constructor,
}

impl ValidatorSpec {
    /// Raw registration. The declared granularity must match what the
    /// constructor produces; `instantiate` verifies it.
    pub fn new(
        granularity: Granularity,
        preprocesses: bool,
        constructor: impl Fn(&ValidatorContext) -> Result<ValidatorHandle, ConfigurationError>
        + Send
        + Sync
        + 'static,
    ) -> Self {
        Self {
            granularity,
            preprocesses,
            constructor: Box::new(constructor),
        }
    }

    pub fn document<V, F>(constructor: F) -> Self
    where
        V: DocumentValidator + 'static,
        F: Fn(&ValidatorContext) -> Result<V, ConfigurationError> + Send + Sync + 'static,
    {
        Self::new(Granularity::Document, false, move |ctx| {
            Ok(ValidatorHandle::Document(Box::new(constructor(ctx)?)))
        })
    }

    pub fn section<V, F>(constructor: F) -> Self
    where
        V: SectionValidator + 'static,
        F: Fn(&ValidatorContext) -> Result<V, ConfigurationError> + Send + Sync + 'static,
    {
        Self::new(Granularity::Section, false, move |ctx| {
            Ok(ValidatorHandle::Section(Box::new(constructor(ctx)?)))
        })
    }

    pub fn sentence<V, F>(constructor: F) -> Self
    where
        V: SentenceValidator + 'static,
        F: Fn(&ValidatorContext) -> Result<V, ConfigurationError> + Send + Sync + 'static,
    {
        Self::new(Granularity::Sentence, false, move |ctx| {
            Ok(ValidatorHandle::Sentence(Box::new(constructor(ctx)?)))
        })
    }

    /// A sentence validator that also runs in the pre-processing sub-pass.
    pub fn sentence_with_preprocess<V, F>(constructor: F) -> Self
    where
        V: SentenceValidator + 'static,
        F: Fn(&ValidatorContext) -> Result<V, ConfigurationError> + Send + Sync + 'static,
    {
        Self::new(Granularity::Sentence, true, move |ctx| {
            Ok(ValidatorHandle::Sentence(Box::new(constructor(ctx)?)))
        })
    }
}

/// A sentence validator plus its precomputed pre-processing flag; the engine
/// consults the flag, never the instance type.
pub(crate) struct SentenceEntry {
    pub(crate) validator: Box<dyn SentenceValidator>,
    pub(crate) preprocesses: bool,
}

/// The instantiated validator set, split by granularity, each list in
/// registration order.
pub(crate) struct ValidatorSet {
    pub(crate) document: Vec<Box<dyn DocumentValidator>>,
    pub(crate) section: Vec<Box<dyn SectionValidator>>,
    pub(crate) sentence: Vec<SentenceEntry>,
}

impl std::fmt::Debug for ValidatorSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ValidatorSet")
            .field("document", &self.document.len())
            .field("section", &self.section.len())
            .field("sentence", &self.sentence.len())
            .finish()
    }
}

/// Identifier → registration record.
pub struct ValidatorRegistry {
    specs: HashMap<String, ValidatorSpec>,
    extra_templates: Vec<(String, usize, String)>,
}

impl Default for ValidatorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ValidatorRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self {
            specs: HashMap::new(),
            extra_templates: Vec::new(),
        }
    }

    /// A registry with every shipped validator registered.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.register(
            "SentenceLength",
            ValidatorSpec::sentence(SentenceLength::new),
        );
        registry.register("InvalidSymbol", ValidatorSpec::sentence(InvalidSymbol::new));
        registry.register(
            "SymbolWithSpace",
            ValidatorSpec::sentence(SymbolWithSpace::new),
        );
        registry.register(
            "SpaceBeginningOfSentence",
            ValidatorSpec::sentence(SpaceBeginningOfSentence::new),
        );
        registry.register("CommaNumber", ValidatorSpec::sentence(CommaNumber::new));
        registry.register(
            "Contraction",
            ValidatorSpec::sentence_with_preprocess(Contraction::new),
        );
        registry.register(
            "WordNumber",
            ValidatorSpec::sentence_with_preprocess(WordNumber::new),
        );
        registry.register("SectionLength", ValidatorSpec::section(SectionLength::new));
        registry.register(
            "ParagraphNumber",
            ValidatorSpec::section(ParagraphNumber::new),
        );
        registry
    }

    /// Register (or replace) a validator under an identifier.
    pub fn register(&mut self, id: &str, spec: ValidatorSpec) {
        self.specs.insert(id.to_string(), spec);
    }

    /// Register a message template for a custom validator; applied on top of
    /// the locale catalog at instantiation time.
    pub fn register_template(&mut self, validator: &str, arity: usize, template: &str) {
        self.extra_templates
            .push((validator.to_string(), arity, template.to_string()));
    }

    /// Resolve and construct every configured validator. Any failure here is
    /// fatal: the caller gets no partial validator set.
    pub(crate) fn instantiate(
        &self,
        configuration: &Configuration,
    ) -> Result<ValidatorSet, ConfigurationError> {
        let symbols = symbol::table_for(configuration.language())?;
        let mut catalog = MessageCatalog::load(configuration.language())?;
        for (validator, arity, template) in &self.extra_templates {
            catalog.insert(validator, *arity, template);
        }
        let messages = Arc::new(catalog);

        let mut set = ValidatorSet {
            document: Vec::new(),
            section: Vec::new(),
            sentence: Vec::new(),
        };
        for config in configuration.validator_configs() {
            let id = config.name();
            let spec = self
                .specs
                .get(id)
                .ok_or_else(|| ConfigurationError::UnknownValidator(id.to_string()))?;
            if !messages.contains(id) {
                return Err(ConfigurationError::MissingMessageTemplate(id.to_string()));
            }
            let context = ValidatorContext {
                config: config.clone(),
                symbols: Arc::clone(&symbols),
                messages: Arc::clone(&messages),
            };
            let handle = (spec.constructor)(&context)?;
            if handle.granularity() != spec.granularity {
                return Err(ConfigurationError::GranularityMismatch {
                    name: id.to_string(),
                    declared: spec.granularity,
                    actual: handle.granularity(),
                });
            }
            match handle {
                ValidatorHandle::Document(validator) => set.document.push(validator),
                ValidatorHandle::Section(validator) => set.section.push(validator),
                ValidatorHandle::Sentence(validator) => set.sentence.push(SentenceEntry {
                    validator,
                    preprocesses: spec.preprocesses,
                }),
            }
        }
        Ok(set)
    }
}
