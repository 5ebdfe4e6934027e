//! ACU validation and parsing
//!
//! A star-marked sentence comes back from the external text generator; the
//! validator decides whether the markup is usable (a `false` result means
//! the caller should retry or fall back, never an error), and the parser
//! turns a validated sentence into minimal comprehensible units with
//! absolute character offsets.

use std::sync::OnceLock;

use regex::Regex;

use super::cursor::Cursor;
use super::types::AcuUnit;

/// Punctuation that never forms a unit on its own (CJK and Latin variants)
const PUNCTUATION: &str = "，。！？、；：:\u{201C}\u{201D}\u{2018}\u{2019}（）【】.,!?;'\"()[]";

fn speaker_prefix_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^[A-Za-z][:：]\s*").expect("built-in speaker prefix pattern is valid")
    })
}

fn speaker_tag_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^[A-Za-z][:：]\s*$").expect("built-in speaker tag pattern is valid")
    })
}

/// Strip a leading single-letter speaker prefix (`A:`, `b：`) if present
pub fn strip_speaker_prefix(sentence: &str) -> &str {
    match speaker_prefix_re().find(sentence) {
        Some(m) => &sentence[m.end()..],
        None => sentence,
    }
}

/// Whether a star-marked candidate is valid markup for the original sentence
///
/// Valid means: no leading or trailing `*`, no `**`, and removing every `*`
/// reproduces the original exactly (with the speaker prefix stripped from
/// both sides first for dialogue sentences).
pub fn validate_marked(original: &str, marked: &str) -> bool {
    if marked.starts_with('*') || marked.ends_with('*') {
        return false;
    }
    if marked.contains("**") {
        return false;
    }

    let (original, marked) = if speaker_prefix_re().is_match(original) {
        (strip_speaker_prefix(original), strip_speaker_prefix(marked))
    } else {
        (original, marked)
    };

    marked.replace('*', "") == original
}

/// Parse a validated star-marked sentence into units
///
/// `sentence_abs_start` is the character offset of the sentence's first
/// character in the document; `sid` is its 1-based sentence id. The cursor
/// advances by every fragment's length whether or not the fragment is kept,
/// so dropped filler never desynchronizes later offsets.
pub fn parse_units(marked: &str, sentence_abs_start: usize, sid: usize) -> Vec<AcuUnit> {
    let mut units = Vec::new();
    let mut cursor = Cursor::at(sentence_abs_start);

    for fragment in marked.split('*') {
        let len = fragment.chars().count();
        if len == 0 {
            continue;
        }
        let start = cursor.pos();
        cursor.advance(len);
        if should_skip(fragment) {
            continue;
        }
        units.push(AcuUnit {
            text: fragment.to_string(),
            start,
            end: start + len,
            sid,
        });
    }

    units
}

/// Fragments that are pure filler: whitespace, punctuation, speaker tags
fn should_skip(fragment: &str) -> bool {
    fragment
        .chars()
        .all(|c| c.is_whitespace() || PUNCTUATION.contains(c))
        || speaker_tag_re().is_match(fragment)
}
