//! Span annotator (pass 1): connective and time-expression spans
//!
//! Matches are reported in discovery order per lexicon entry, not globally
//! sorted or deduplicated; spans from independent entries may overlap.
//! Consumers that need disjoint spans (the cloze selector) enforce that
//! themselves.

use tracing::debug;

use super::lexicon::CompiledLexicon;
use super::normalize::NormalizedText;
use super::types::{Span, SpanItem, SpanTag};

pub(crate) fn find_spans(text: &NormalizedText, lexicon: &CompiledLexicon) -> Vec<SpanItem> {
    let mut items = Vec::new();

    for (_, matcher) in &lexicon.connectives {
        for (byte_start, byte_end) in matcher.find_iter(text.as_str()) {
            let span = Span::new(text.byte_to_char(byte_start), text.byte_to_char(byte_end));
            items.push(SpanItem {
                span,
                tag: SpanTag::Connective,
                surface: text.slice(span).to_string(),
            });
        }
    }

    for (_, pattern) in &lexicon.time {
        for m in pattern.find_iter(text.as_str()) {
            // Permissive caller patterns can produce empty matches; an empty
            // span carries no surface and is dropped.
            if m.start() == m.end() {
                continue;
            }
            let span = Span::new(text.byte_to_char(m.start()), text.byte_to_char(m.end()));
            items.push(SpanItem {
                span,
                tag: SpanTag::Time,
                surface: text.slice(span).to_string(),
            });
        }
    }

    debug!(spans = items.len(), "span annotation complete");
    items
}
