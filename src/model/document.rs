//! Document tree types
//!
//! Plain data representation of a parsed document batch. No validation logic
//! here; construction ordering is enforced by [`crate::model::DocumentBuilder`].

/// One sentence of input text.
///
/// `tokens` is empty at construction time and is filled by the engine's
/// pre-processing sub-pass before any validator reads it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentence {
    /// Sentence text.
    pub content: String,
    /// Source position (line number) reported by the parser.
    pub position: usize,
    /// True for the sentence at index 0 of its paragraph, header, or list
    /// element; false for every later sentence in that sequence.
    pub is_first_sentence: bool,
    /// Token sequence attached by the pre-processing sub-pass.
    pub tokens: Vec<String>,
}

impl Sentence {
    pub fn new(content: &str, position: usize) -> Self {
        Self {
            content: content.to_string(),
            position,
            is_first_sentence: false,
            tokens: Vec::new(),
        }
    }
}

/// A block of prose: an ordered run of sentences.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Paragraph {
    pub sentences: Vec<Sentence>,
}

/// One item of an itemized or numbered list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListElement {
    /// Nesting depth of the item.
    pub level: usize,
    pub sentences: Vec<Sentence>,
}

/// An itemized or numbered list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListBlock {
    pub elements: Vec<ListElement>,
}

/// A heading-delimited region of a document.
///
/// Sections form a flat list tagged with a heading level; there are no
/// parent/child links between sections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    /// Heading depth.
    pub level: usize,
    /// Header sentences.
    pub headers: Vec<Sentence>,
    pub paragraphs: Vec<Paragraph>,
    pub list_blocks: Vec<ListBlock>,
}

impl Section {
    pub(crate) fn new(level: usize) -> Self {
        Self {
            level,
            headers: Vec::new(),
            paragraphs: Vec::new(),
            list_blocks: Vec::new(),
        }
    }
}

/// One input file or unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub file_name: String,
    pub sections: Vec<Section>,
}

/// The whole input batch, in insertion order.
///
/// Insertion order is significant for reporting; document names need not be
/// unique.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentCollection {
    pub documents: Vec<Document>,
}

impl DocumentCollection {
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Document> {
        self.documents.iter()
    }
}

impl<'a> IntoIterator for &'a DocumentCollection {
    type Item = &'a Document;
    type IntoIter = std::slice::Iter<'a, Document>;

    fn into_iter(self) -> Self::IntoIter {
        self.documents.iter()
    }
}
