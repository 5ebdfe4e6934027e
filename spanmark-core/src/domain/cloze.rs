//! Cloze selector: non-overlapping blanks under a target density
//!
//! The candidate pool is pass-1 spans plus freshly scanned collocation runs.
//! Candidates are walked in start order and accepted greedily; overlapping
//! or stale candidates are skipped. Running out of candidates before the
//! blank budget is graceful degradation, not an error.

use tracing::debug;

use super::annotate;
use super::lexicon::CompiledLexicon;
use super::normalize::NormalizedText;
use super::script::ScriptMatcher;
use super::types::{ClozeItem, ClozeKind, Span, SpanTag};

/// Exercise length variant, fixing the target blank density
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClozeVersion {
    /// 6% of the text hidden
    #[default]
    Short,
    /// 12% of the text hidden
    Long,
}

impl ClozeVersion {
    /// Target fraction of characters to blank out
    pub fn target_ratio(&self) -> f64 {
        match self {
            ClozeVersion::Short => 0.06,
            ClozeVersion::Long => 0.12,
        }
    }
}

/// Blank budget for a text of `char_len` characters
///
/// The divisor approximates the average blank length in characters.
pub(crate) fn max_blank_count(char_len: usize, version: ClozeVersion) -> usize {
    let budget = (char_len as f64 * version.target_ratio() / 4.0).floor() as usize;
    budget.max(3)
}

pub(crate) fn select_blanks(
    text: &NormalizedText,
    lexicon: &CompiledLexicon,
    matcher: &ScriptMatcher,
    version: ClozeVersion,
) -> Vec<ClozeItem> {
    let mut candidates = Vec::new();

    // First priority: pass-1 connective and time spans.
    for item in annotate::find_spans(text, lexicon) {
        let kind = match item.tag {
            SpanTag::Connective => ClozeKind::Connective,
            SpanTag::Time => ClozeKind::Time,
        };
        candidates.push(ClozeItem {
            start: item.span.start,
            end: item.span.end,
            answer: item.surface,
            hint: item.tag.label().to_string(),
            kind,
        });
    }

    // Second priority: collocation runs.
    for (byte_start, byte_end) in matcher.collocation_candidates(text.as_str()) {
        let span = Span::new(text.byte_to_char(byte_start), text.byte_to_char(byte_end));
        candidates.push(ClozeItem {
            start: span.start,
            end: span.end,
            answer: text.slice(span).to_string(),
            hint: matcher.collocation_hint().to_string(),
            kind: ClozeKind::Collocation,
        });
    }

    // Stable sort keeps lexicon-derived candidates ahead of collocations
    // that start at the same offset.
    candidates.sort_by_key(|c| c.start);

    let max_blanks = max_blank_count(text.char_len(), version);
    let mut chosen: Vec<ClozeItem> = Vec::new();
    for candidate in candidates {
        if chosen.len() >= max_blanks {
            break;
        }
        if chosen.iter().any(|c| c.span().overlaps(&candidate.span())) {
            continue;
        }
        // Staleness guard: the recorded answer must still match the text.
        if text.slice_range(candidate.start, candidate.end) != candidate.answer {
            continue;
        }
        chosen.push(candidate);
    }

    debug!(
        selected = chosen.len(),
        budget = max_blanks,
        "cloze selection complete"
    );
    chosen
}
