//! Document model
//!
//! The hierarchical representation of parsed input:
//! collection → document → section → paragraph/list → sentence.
//! Built once per run through [`DocumentBuilder`], read-only afterwards.

pub mod builder;
pub mod document;

pub use builder::DocumentBuilder;
pub use document::{
    Document, DocumentCollection, ListBlock, ListElement, Paragraph, Section, Sentence,
};
