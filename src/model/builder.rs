//! Document builder
//!
//! Stateful constructor for [`DocumentCollection`]. The builder tracks the
//! deepest open context in an explicit state enum; every operation checks the
//! state it requires in one place and fails with [`BuilderStateError`] when
//! the required ancestor has not been started. `build()` consumes the builder,
//! so no mutator can run after the collection has been produced.

use crate::error::BuilderStateError;
use crate::model::document::{
    Document, DocumentCollection, ListBlock, ListElement, Paragraph, Section, Sentence,
};

/// Deepest context that has been started so far.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BuilderState {
    Empty,
    Document,
    Section,
    Paragraph,
    ListBlock,
}

impl BuilderState {
    /// True once a section has been started and not closed by a new document.
    fn in_section(self) -> bool {
        matches!(self, Self::Section | Self::Paragraph | Self::ListBlock)
    }
}

/// Stateful constructor enforcing the hierarchy ordering grammar.
#[derive(Debug)]
pub struct DocumentBuilder {
    documents: Vec<Document>,
    state: BuilderState,
}

impl Default for DocumentBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentBuilder {
    pub fn new() -> Self {
        Self {
            documents: Vec::new(),
            state: BuilderState::Empty,
        }
    }

    /// Start a new document. Closes any open section, paragraph, or list.
    pub fn add_document(&mut self, file_name: &str) -> &mut Self {
        self.documents.push(Document {
            file_name: file_name.to_string(),
            sections: Vec::new(),
        });
        self.state = BuilderState::Document;
        self
    }

    /// Start a new section in the current document.
    pub fn add_section(&mut self, level: usize) -> Result<&mut Self, BuilderStateError> {
        if self.state == BuilderState::Empty {
            return Err(BuilderStateError::SectionWithoutDocument);
        }
        self.current_document().sections.push(Section::new(level));
        self.state = BuilderState::Section;
        Ok(self)
    }

    /// Append a header sentence to the current section.
    pub fn add_section_header(&mut self, content: &str) -> Result<&mut Self, BuilderStateError> {
        if !self.state.in_section() {
            return Err(BuilderStateError::HeaderWithoutSection);
        }
        let headers = &mut self.current_section().headers;
        push_sentence(headers, Sentence::new(content, 0));
        Ok(self)
    }

    /// Start a new paragraph in the current section.
    pub fn add_paragraph(&mut self) -> Result<&mut Self, BuilderStateError> {
        if !self.state.in_section() {
            return Err(BuilderStateError::ParagraphWithoutSection);
        }
        self.current_section().paragraphs.push(Paragraph::default());
        self.state = BuilderState::Paragraph;
        Ok(self)
    }

    /// Append a sentence to the current paragraph.
    pub fn add_sentence(
        &mut self,
        content: &str,
        position: usize,
    ) -> Result<&mut Self, BuilderStateError> {
        if self.state != BuilderState::Paragraph {
            return Err(BuilderStateError::SentenceWithoutParagraph);
        }
        let paragraph = self
            .current_section()
            .paragraphs
            .last_mut()
            .expect("paragraph state implies an open paragraph");
        push_sentence(&mut paragraph.sentences, Sentence::new(content, position));
        Ok(self)
    }

    /// Start a new list block in the current section.
    pub fn add_list_block(&mut self) -> Result<&mut Self, BuilderStateError> {
        if !self.state.in_section() {
            return Err(BuilderStateError::ListBlockWithoutSection);
        }
        self.current_section().list_blocks.push(ListBlock::default());
        self.state = BuilderState::ListBlock;
        Ok(self)
    }

    /// Append an element to the current list block.
    pub fn add_list_element(
        &mut self,
        level: usize,
        content: &str,
    ) -> Result<&mut Self, BuilderStateError> {
        if self.state != BuilderState::ListBlock {
            return Err(BuilderStateError::ListElementWithoutBlock);
        }
        let block = self
            .current_section()
            .list_blocks
            .last_mut()
            .expect("list block state implies an open block");
        let mut element = ListElement {
            level,
            sentences: Vec::new(),
        };
        push_sentence(&mut element.sentences, Sentence::new(content, 0));
        block.elements.push(element);
        Ok(self)
    }

    /// Finish construction. The builder is consumed; the returned collection
    /// is read-only for the rest of its lifetime (the engine's pre-processing
    /// pass being the one scoped exception).
    pub fn build(self) -> DocumentCollection {
        DocumentCollection {
            documents: self.documents,
        }
    }

    fn current_document(&mut self) -> &mut Document {
        self.documents
            .last_mut()
            .expect("non-empty state implies an open document")
    }

    fn current_section(&mut self) -> &mut Section {
        self.current_document()
            .sections
            .last_mut()
            .expect("section state implies an open section")
    }
}

/// Append a sentence, marking the sequence head.
fn push_sentence(sequence: &mut Vec<Sentence>, mut sentence: Sentence) {
    sentence.is_first_sentence = sequence.is_empty();
    sequence.push(sentence);
}
