//! Error taxonomy for the validation engine.
//!
//! Three families, with different propagation policies:
//! - [`BuilderStateError`]: fatal, raised while constructing the document model.
//! - [`ConfigurationError`]: fatal, raised during engine startup. No partial
//!   engine is ever handed back to the caller.
//! - [`SinkError`]: recoverable. The engine logs it and keeps going; the
//!   in-memory finding list is never affected.

use thiserror::Error;

use crate::validator::Granularity;

/// The document builder was driven out of its construction grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BuilderStateError {
    #[error("cannot add a section: no document has been started")]
    SectionWithoutDocument,
    #[error("cannot add a section header: no section has been started")]
    HeaderWithoutSection,
    #[error("cannot add a paragraph: no section has been started")]
    ParagraphWithoutSection,
    #[error("cannot add a sentence: no paragraph has been started")]
    SentenceWithoutParagraph,
    #[error("cannot add a list block: no section has been started")]
    ListBlockWithoutSection,
    #[error("cannot add a list element: no list block has been started")]
    ListElementWithoutBlock,
}

/// A problem in the validator configuration, detected at startup.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("unknown validator \"{0}\"")]
    UnknownValidator(String),

    #[error(
        "validator \"{name}\" is registered with {declared:?} granularity \
         but constructed a {actual:?} instance"
    )]
    GranularityMismatch {
        name: String,
        declared: Granularity,
        actual: Granularity,
    },

    #[error("validator \"{validator}\" requires attribute \"{key}\"")]
    MissingAttribute { validator: String, key: String },

    #[error(
        "validator \"{validator}\": attribute \"{key}\" has malformed value \
         \"{value}\": {reason}"
    )]
    MalformedAttribute {
        validator: String,
        key: String,
        value: String,
        reason: String,
    },

    #[error("unsupported language \"{0}\"")]
    UnknownLanguage(String),

    #[error("malformed embedded resource \"{resource}\": {reason}")]
    BadResource { resource: String, reason: String },

    #[error("no message template registered for validator \"{0}\"")]
    MissingMessageTemplate(String),

    #[error("no message template for validator \"{validator}\" taking {arity} arguments")]
    MissingMessageArity { validator: String, arity: usize },
}

/// A reporting-sink failure. Never aborts a run.
#[derive(Debug, Error)]
pub enum SinkError {
    #[error("sink I/O failure: {0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Other(String),
}
