//! Core data model for the annotation pipeline
//!
//! All offsets in this module are 0-based character offsets (Unicode scalar
//! values) into NFKC-normalized text. Every value is produced fresh per
//! invocation and never mutated afterwards.

use serde::{Deserialize, Serialize};

/// Half-open character interval `[start, end)` into normalized text
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub struct Span {
    /// Offset of the first character
    pub start: usize,
    /// Offset one past the last character
    pub end: usize,
}

impl Span {
    /// Create a span; `start` must precede `end`
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start < end, "span must be non-empty: [{start}, {end})");
        Self { start, end }
    }

    /// Number of characters covered
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Whether the span covers no characters
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Whether two spans share at least one character position
    pub fn overlaps(&self, other: &Span) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// Tag for a pass-1 span
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpanTag {
    /// Discourse connective from the lexicon
    Connective,
    /// Time expression matched by a lexicon pattern
    Time,
}

impl SpanTag {
    /// Stable lowercase label, used as the cloze hint text
    pub fn label(&self) -> &'static str {
        match self {
            SpanTag::Connective => "connective",
            SpanTag::Time => "time",
        }
    }
}

/// A tagged span found by the span annotator (pass 1)
///
/// Invariant: `text[span] == surface` for the normalized text the item was
/// produced from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpanItem {
    /// Location in the normalized text
    pub span: Span,
    /// Which lexicon section produced the match
    pub tag: SpanTag,
    /// Exact matched text
    pub surface: String,
}

/// A pronoun occurrence with antecedent candidates (pass 2)
///
/// Candidates are independently recomputed offsets into the original text,
/// ordered by position within the trailing sentence window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PronounResolution {
    /// The pronoun occurrence
    pub pronoun: Span,
    /// Up to three most recent noun-like candidates, window-ordered
    pub antecedents: Vec<Span>,
}

/// A shallow subject-verb-object triple within one sentence (pass 3)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SvoTriple {
    /// Subject span, first in document order
    pub subject: Span,
    /// Verb span, after the subject
    pub verb: Span,
    /// Object span, after the verb
    pub object: Span,
}

/// Origin of a cloze candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClozeKind {
    /// Blank over a discourse connective
    Connective,
    /// Blank over a time expression
    Time,
    /// Blank over a multi-word / multi-character run
    Collocation,
}

/// A selected fill-in-the-blank item
///
/// Invariant at selection time: `text[start..end] == answer`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClozeItem {
    /// Start character offset of the blank
    pub start: usize,
    /// End character offset (exclusive)
    pub end: usize,
    /// The hidden text the learner must supply
    pub answer: String,
    /// Hint label shown with the blank
    pub hint: String,
    /// Candidate origin
    pub kind: ClozeKind,
}

impl ClozeItem {
    pub(crate) fn span(&self) -> Span {
        Span {
            start: self.start,
            end: self.end,
        }
    }
}

/// One sentence with its absolute position in the document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentenceInfo {
    /// Trimmed sentence text
    pub text: String,
    /// 1-based sentence id within the document
    pub sid: usize,
    /// Character offset of the sentence's first character in the document
    pub abs_start: usize,
}

/// A minimal comprehensible unit parsed from a star-marked sentence
///
/// Units of one sentence are non-overlapping and monotonically increasing;
/// together with the skipped filler fragments they reconstruct the star-free
/// marked sentence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcuUnit {
    /// The fragment text
    pub text: String,
    /// Absolute start character offset in the document
    pub start: usize,
    /// Absolute end character offset (exclusive)
    pub end: usize,
    /// 1-based id of the sentence the unit belongs to
    pub sid: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_overlap() {
        let a = Span::new(0, 5);
        let b = Span::new(4, 8);
        let c = Span::new(5, 9);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
        assert!(!a.overlaps(&c));
        assert!(!c.overlaps(&a));
    }

    #[test]
    fn test_span_len() {
        assert_eq!(Span::new(3, 7).len(), 4);
        assert!(!Span::new(3, 7).is_empty());
    }

    #[test]
    fn test_tag_labels() {
        assert_eq!(SpanTag::Connective.label(), "connective");
        assert_eq!(SpanTag::Time.label(), "time");
    }

    #[test]
    fn test_span_item_serialization() {
        let item = SpanItem {
            span: Span::new(0, 7),
            tag: SpanTag::Connective,
            surface: "because".to_string(),
        };
        let json = serde_json::to_string(&item).unwrap();
        assert!(json.contains("\"connective\""));
        let back: SpanItem = serde_json::from_str(&json).unwrap();
        assert_eq!(back, item);
    }
}
