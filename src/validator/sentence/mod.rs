//! Built-in sentence-granularity validators.

pub mod comma;
pub mod contraction;
pub mod length;
pub mod spacing;
pub mod symbol;
pub mod word_number;

pub use comma::CommaNumber;
pub use contraction::Contraction;
pub use length::SentenceLength;
pub use spacing::SpaceBeginningOfSentence;
pub use symbol::{InvalidSymbol, SymbolWithSpace};
pub use word_number::WordNumber;
