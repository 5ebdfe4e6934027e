//! Domain layer: pure text-processing passes and their strategies
//!
//! Everything in this layer is synchronous and stateless; each pass is a
//! pure function of the normalized text plus immutable configuration
//! compiled once at pipeline construction.

pub mod acu;
pub(crate) mod anaphora;
pub(crate) mod annotate;
pub mod cloze;
pub mod cursor;
pub mod lexicon;
pub mod normalize;
pub mod prompt;
pub(crate) mod relation;
pub mod script;
pub mod segment;
pub mod types;

pub use cloze::ClozeVersion;
pub use lexicon::{default_lexicon, Lexicon, LexiconError};
pub use normalize::{nfkc, NormalizedText};
pub use script::ScriptFamily;
pub use segment::Genre;
pub use types::{
    AcuUnit, ClozeItem, ClozeKind, PronounResolution, SentenceInfo, Span, SpanItem, SpanTag,
    SvoTriple,
};
