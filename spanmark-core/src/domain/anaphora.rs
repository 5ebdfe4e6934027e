//! Anaphora resolver (pass 2): pronouns and antecedent candidates
//!
//! For every pronoun occurrence, a window of the current sentence plus up to
//! two preceding sentences is scanned for noun-like tokens; the last three
//! (most recent evidence) become antecedent candidates. Candidates are
//! computed per sentence against each sentence's known absolute start, so
//! window offsets are exact regardless of how sentences are separated in the
//! source document.

use tracing::debug;

use super::lexicon::CompiledLexicon;
use super::normalize::{char_offset, NormalizedText};
use super::script::ScriptMatcher;
use super::segment::SentenceSegmenter;
use super::types::{PronounResolution, SentenceInfo, Span};

/// Preceding sentences included in the antecedent window
const WINDOW_SENTENCES: usize = 2;
/// Most-recent candidates kept per pronoun
const MAX_ANTECEDENTS: usize = 3;

pub(crate) fn resolve_pronouns(
    text: &NormalizedText,
    lexicon: &CompiledLexicon,
    matcher: &ScriptMatcher,
    segmenter: &SentenceSegmenter,
) -> Vec<PronounResolution> {
    let sentences = segmenter.split_punctuation(text);
    let mut resolutions = Vec::new();

    for (index, sentence) in sentences.iter().enumerate() {
        for (_, pronoun) in &lexicon.pronouns {
            for (byte_start, byte_end) in pronoun.find_iter(&sentence.text) {
                let start = sentence.abs_start + char_offset(&sentence.text, byte_start);
                let end = sentence.abs_start + char_offset(&sentence.text, byte_end);
                resolutions.push(PronounResolution {
                    pronoun: Span::new(start, end),
                    antecedents: window_candidates(&sentences, index, matcher),
                });
            }
        }
    }

    debug!(pronouns = resolutions.len(), "anaphora resolution complete");
    resolutions
}

/// Noun-like token spans in the trailing window, keeping only the last few
fn window_candidates(
    sentences: &[SentenceInfo],
    index: usize,
    matcher: &ScriptMatcher,
) -> Vec<Span> {
    let window_start = index.saturating_sub(WINDOW_SENTENCES);
    let mut candidates = Vec::new();
    for sentence in &sentences[window_start..=index] {
        for (byte_start, byte_end) in matcher.noun_tokens(&sentence.text) {
            let start = sentence.abs_start + char_offset(&sentence.text, byte_start);
            let end = sentence.abs_start + char_offset(&sentence.text, byte_end);
            candidates.push(Span::new(start, end));
        }
    }
    let keep_from = candidates.len().saturating_sub(MAX_ANTECEDENTS);
    candidates.split_off(keep_from)
}
