//! prose-lint
//!
//! Document model and multi-granularity validation engine for inspecting
//! natural-language documents against configurable style and grammar rules.
//!
//! This library provides:
//! - A hierarchical document model (collection → document → section →
//!   paragraph/list → sentence) with an ordering-enforcing builder
//! - A validator registry with registration-time granularity and
//!   pre-processing declarations
//! - A three-phase validation engine producing an order-deterministic
//!   finding list
//! - Fault-tolerant finding sinks (plain text, JSON, no-op)
//!
//! Text parsing, sentence segmentation, and configuration-file loading are
//! owned by front-end layers; this crate consumes a built
//! [`DocumentCollection`] and a [`Configuration`] and returns findings.

pub mod config;
pub mod engine;
pub mod error;
pub mod model;
pub mod sink;
pub mod symbol;
pub mod validator;

// Re-exports for a clean public API
pub use config::{Configuration, ValidatorConfig};
pub use engine::Checker;
pub use error::{BuilderStateError, ConfigurationError, SinkError};
pub use model::{
    Document, DocumentBuilder, DocumentCollection, ListBlock, ListElement, Paragraph, Section,
    Sentence,
};
pub use sink::{FindingSink, JsonSink, NullSink, PlainTextSink};
pub use symbol::{Symbol, SymbolTable};
pub use validator::{
    DocumentValidator, Finding, Granularity, MessageCatalog, Reporter, SectionValidator,
    SentenceValidator, ValidatorContext, ValidatorHandle, ValidatorRegistry, ValidatorSpec,
};
