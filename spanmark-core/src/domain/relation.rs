//! Relation extractor (pass 3): shallow subject-verb-object triples
//!
//! One bounded pattern search per sentence, at most one triple kept. Span
//! offsets come straight from the regex capture groups, so a captured piece
//! recurring earlier in the sentence cannot be misbound.

use tracing::debug;

use super::normalize::{char_offset, NormalizedText};
use super::script::ScriptMatcher;
use super::segment::SentenceSegmenter;
use super::types::{Span, SvoTriple};

pub(crate) fn extract_triples(
    text: &NormalizedText,
    matcher: &ScriptMatcher,
    segmenter: &SentenceSegmenter,
) -> Vec<SvoTriple> {
    let sentences = segmenter.split_punctuation(text);
    let mut triples = Vec::new();

    for sentence in &sentences {
        if let Some([subject, verb, object]) = matcher.svo_captures(&sentence.text) {
            let to_span = |(byte_start, byte_end): (usize, usize)| {
                Span::new(
                    sentence.abs_start + char_offset(&sentence.text, byte_start),
                    sentence.abs_start + char_offset(&sentence.text, byte_end),
                )
            };
            triples.push(SvoTriple {
                subject: to_span(subject),
                verb: to_span(verb),
                object: to_span(object),
            });
        }
    }

    debug!(triples = triples.len(), "relation extraction complete");
    triples
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Language;
    use crate::domain::script::ScriptFamily;

    fn extract(text: &str, lang: Language, family: ScriptFamily) -> (NormalizedText, Vec<SvoTriple>) {
        let normalized = NormalizedText::new(text);
        let matcher = ScriptMatcher::for_family(family);
        let segmenter = SentenceSegmenter::new(lang);
        let triples = extract_triples(&normalized, &matcher, &segmenter);
        (normalized, triples)
    }

    #[test]
    fn test_english_triple_order() {
        let (text, triples) =
            extract("The storm delayed the flight.", Language::English, ScriptFamily::Latin);
        assert_eq!(triples.len(), 1);
        let t = &triples[0];
        assert!(t.subject.end <= t.verb.start);
        assert!(t.verb.end <= t.object.start);
        assert_eq!(text.slice(t.verb), "delayed");
    }

    #[test]
    fn test_repeated_token_binds_to_capture_position() {
        // "the" appears before the verb and as the object determiner; the
        // object span must point at the post-verb occurrence.
        let (text, triples) =
            extract("The plan was the problem.", Language::English, ScriptFamily::Latin);
        assert_eq!(triples.len(), 1);
        let t = &triples[0];
        assert_eq!(text.slice(t.verb), "was");
        assert!(t.object.start > t.verb.end);
    }

    #[test]
    fn test_at_most_one_triple_per_sentence() {
        let (_, triples) = extract(
            "The cat chased the mouse and the dog chased the cat.",
            Language::English,
            ScriptFamily::Latin,
        );
        assert_eq!(triples.len(), 1);
    }

    #[test]
    fn test_chinese_triple() {
        let (text, triples) =
            extract("这个政策导致物价上涨。", Language::Chinese, ScriptFamily::Cjk);
        assert_eq!(triples.len(), 1);
        assert_eq!(text.slice(triples[0].verb), "导致");
    }

    #[test]
    fn test_sentence_without_relation_yields_nothing() {
        let (_, triples) = extract("Ouch!", Language::English, ScriptFamily::Latin);
        assert!(triples.is_empty());
        let (_, none) = extract("", Language::English, ScriptFamily::Latin);
        assert!(none.is_empty());
    }

    #[test]
    fn test_triples_in_multiple_sentences() {
        let (_, triples) = extract(
            "The firm hired ten people. The market was strong.",
            Language::English,
            ScriptFamily::Latin,
        );
        assert_eq!(triples.len(), 2);
    }
}
