//! Text-to-span annotation and cloze exercise generation
//!
//! `spanmark-core` is the text-processing heart of a language-learning
//! system: given raw sentence or paragraph text in English, Chinese,
//! Japanese, or Korean it locates linguistically meaningful spans
//! (discourse connectives, time expressions, pronoun/antecedent candidates,
//! subject-verb-object triples) with exact character offsets into the
//! NFKC-normalized text, and selects a non-overlapping subset of spans to
//! blank out for cloze exercises under a target density.
//!
//! A second pipeline handles "minimal comprehensible units" (ACU): the
//! crate builds the prompts sent to an external text-generation
//! collaborator, then validates the star-marked sentence it returns and
//! parses it back into units with absolute offsets. The crate itself
//! performs no I/O; every function is pure with respect to its inputs.
//!
//! # Example
//!
//! ```rust
//! use spanmark_core::{Annotator, ClozeVersion};
//!
//! let annotator = Annotator::with_language("en").unwrap();
//!
//! let annotation = annotator.annotate(
//!     "The launch was delayed because the weather turned bad.",
//! );
//! assert!(annotation.spans.iter().any(|s| s.surface == "because"));
//!
//! let blanks = annotator.cloze(
//!     "The launch was delayed because the weather turned bad.",
//!     ClozeVersion::Short,
//! );
//! assert!(!blanks.is_empty());
//! ```
//!
//! # ACU round trip
//!
//! ```rust
//! use spanmark_core::acu;
//!
//! let original = "Hello,world!";
//! let marked = "Hello*,*world*!";
//! assert!(acu::validate_marked(original, marked));
//! let units = acu::parse_units(marked, 0, 1);
//! assert_eq!(units.len(), 2);
//! ```

pub mod api;
pub mod domain;

pub use api::{Annotation, Annotator, Config, ConfigBuilder, Error, Language, Result};
pub use domain::acu;
pub use domain::prompt;
pub use domain::{
    default_lexicon, nfkc, AcuUnit, ClozeItem, ClozeKind, ClozeVersion, Genre, Lexicon,
    LexiconError, NormalizedText, PronounResolution, ScriptFamily, SentenceInfo, Span, SpanItem,
    SpanTag, SvoTriple,
};
