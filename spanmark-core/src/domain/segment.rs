//! Sentence segmentation with absolute character offsets
//!
//! Two modes: punctuation-rule splitting on language terminator runs, and
//! dialogue splitting on lines or speaker markers. Both record the trimmed
//! sentence text together with the absolute offset of its first character,
//! tracked by a monotonic [`Cursor`].

use regex::Regex;
use tracing::trace;

use crate::api::Language;

use super::cursor::Cursor;
use super::normalize::NormalizedText;
use super::types::SentenceInfo;

/// Document genre, steering segmentation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Genre {
    /// Ordinary prose, split on sentence-final punctuation
    #[default]
    Narrative,
    /// Speaker-labelled lines, split per line or speaker turn
    Dialogue,
}

impl Genre {
    /// Map an optional free-form genre tag to a known genre
    pub fn from_tag(tag: Option<&str>) -> Self {
        match tag {
            Some(t) if t.eq_ignore_ascii_case("dialogue") => Genre::Dialogue,
            _ => Genre::Narrative,
        }
    }
}

/// Per-language sentence segmenter
#[derive(Debug)]
pub(crate) struct SentenceSegmenter {
    terminators: &'static [char],
    /// English-style: a terminator only closes a sentence before whitespace
    /// or end of text, so "e.g" style internal periods survive.
    needs_following_whitespace: bool,
    dialogue_marker: Regex,
    speaker_turn: Regex,
}

impl SentenceSegmenter {
    pub(crate) fn new(language: Language) -> Self {
        // Terminator sets live in NFKC space: normalization folds the
        // fullwidth ！？；． to ASCII before segmentation, while 。 stays.
        let (terminators, needs_following_whitespace): (&'static [char], bool) = match language {
            Language::Chinese => (&['。', '.', '!', '?', ';'], false),
            Language::Japanese | Language::Korean => (&['。', '.', '!', '?'], false),
            Language::English => (&['.', '!', '?'], true),
        };
        Self {
            terminators,
            needs_following_whitespace,
            // A speaker label at line start, or an inline A:/B: turn marker.
            dialogue_marker: Regex::new(r"(?m)^\s*[A-Za-z][:：]\s|\s[ABab][:：]")
                .expect("built-in dialogue marker pattern is valid"),
            speaker_turn: Regex::new(r"[ABab][:：]\s*")
                .expect("built-in speaker turn pattern is valid"),
        }
    }

    /// Segment a document according to its genre
    ///
    /// Dialogue splitting also engages when the text carries speaker markers
    /// even if the caller did not tag it as dialogue.
    pub(crate) fn segment(&self, text: &NormalizedText, genre: Genre) -> Vec<SentenceInfo> {
        if text.as_str().trim().is_empty() {
            return Vec::new();
        }
        if genre == Genre::Dialogue || self.dialogue_marker.is_match(text.as_str()) {
            self.split_dialogue(text)
        } else {
            self.split_punctuation(text)
        }
    }

    /// Punctuation-rule splitting, used directly by the annotation passes
    pub(crate) fn split_punctuation(&self, text: &NormalizedText) -> Vec<SentenceInfo> {
        let chars: Vec<char> = text.as_str().chars().collect();
        let n = chars.len();
        let mut sentences = Vec::new();
        let mut cursor = Cursor::new();
        let mut segment_start = 0usize;
        let mut i = 0usize;

        while i < n {
            if self.terminators.contains(&chars[i]) {
                let mut run_end = i + 1;
                while run_end < n && self.terminators.contains(&chars[run_end]) {
                    run_end += 1;
                }
                let closes_sentence = !self.needs_following_whitespace
                    || run_end >= n
                    || chars[run_end].is_whitespace();
                if closes_sentence {
                    self.push_trimmed(text, &chars, segment_start, run_end, &mut cursor, &mut sentences);
                    segment_start = run_end;
                }
                i = run_end;
            } else {
                i += 1;
            }
        }
        // Dangling fragment after the last delimiter.
        if segment_start < n {
            self.push_trimmed(text, &chars, segment_start, n, &mut cursor, &mut sentences);
        }
        trace!(sentences = sentences.len(), "punctuation segmentation");
        sentences
    }

    fn push_trimmed(
        &self,
        text: &NormalizedText,
        chars: &[char],
        mut from: usize,
        mut to: usize,
        cursor: &mut Cursor,
        sentences: &mut Vec<SentenceInfo>,
    ) {
        while from < to && chars[from].is_whitespace() {
            from += 1;
        }
        while to > from && chars[to - 1].is_whitespace() {
            to -= 1;
        }
        if from >= to {
            return;
        }
        cursor.advance_to(from);
        sentences.push(SentenceInfo {
            text: text.slice_range(from, to).to_string(),
            sid: sentences.len() + 1,
            abs_start: from,
        });
    }

    fn split_dialogue(&self, text: &NormalizedText) -> Vec<SentenceInfo> {
        if text.as_str().contains('\n') {
            self.split_lines(text)
        } else {
            self.split_speaker_turns(text)
        }
    }

    /// One sentence per non-empty trimmed line
    fn split_lines(&self, text: &NormalizedText) -> Vec<SentenceInfo> {
        let mut sentences = Vec::new();
        let mut cursor = Cursor::new();
        for line in text.as_str().split('\n') {
            let line_chars = line.chars().count();
            let trimmed = line.trim();
            if !trimmed.is_empty() {
                let leading = line.chars().take_while(|c| c.is_whitespace()).count();
                sentences.push(SentenceInfo {
                    text: trimmed.to_string(),
                    sid: sentences.len() + 1,
                    abs_start: cursor.pos() + leading,
                });
            }
            // Trimmed length plus leading padding plus the consumed '\n'.
            cursor.advance(line_chars + 1);
        }
        sentences
    }

    /// Line-less dialogue: split at each speaker turn marker
    fn split_speaker_turns(&self, text: &NormalizedText) -> Vec<SentenceInfo> {
        let turn_starts: Vec<usize> = self
            .speaker_turn
            .find_iter(text.as_str())
            .map(|m| text.byte_to_char(m.start()))
            .collect();

        let mut sentences = Vec::new();
        if turn_starts.is_empty() {
            // Dialogue-looking text without A:/B: turns becomes a single
            // trimmed sentence.
            let chars: Vec<char> = text.as_str().chars().collect();
            let mut cursor = Cursor::new();
            self.push_trimmed(text, &chars, 0, chars.len(), &mut cursor, &mut sentences);
            return sentences;
        }

        let mut cursor = Cursor::new();
        for (k, &start) in turn_starts.iter().enumerate() {
            let end = turn_starts
                .get(k + 1)
                .copied()
                .unwrap_or_else(|| text.char_len());
            let raw = text.slice_range(start, end);
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                continue;
            }
            let leading = raw.chars().take_while(|c| c.is_whitespace()).count();
            cursor.advance_to(start + leading);
            sentences.push(SentenceInfo {
                text: trimmed.to_string(),
                sid: sentences.len() + 1,
                abs_start: start + leading,
            });
        }
        sentences
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segment(lang: Language, text: &str, genre: Genre) -> Vec<SentenceInfo> {
        let normalized = NormalizedText::new(text);
        SentenceSegmenter::new(lang).segment(&normalized, genre)
    }

    #[test]
    fn test_empty_input_yields_empty_list() {
        assert!(segment(Language::English, "", Genre::Narrative).is_empty());
        assert!(segment(Language::Chinese, "   \n  ", Genre::Narrative).is_empty());
    }

    #[test]
    fn test_english_two_sentences() {
        let out = segment(
            Language::English,
            "The weather turned bad. The launch was moved!",
            Genre::Narrative,
        );
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].text, "The weather turned bad.");
        assert_eq!(out[0].sid, 1);
        assert_eq!(out[0].abs_start, 0);
        assert_eq!(out[1].text, "The launch was moved!");
        assert_eq!(out[1].sid, 2);
        assert_eq!(out[1].abs_start, 24);
    }

    #[test]
    fn test_english_terminator_needs_whitespace() {
        // The internal period of "3.5" does not close a sentence.
        let out = segment(Language::English, "It rose by 3.5 percent. Good.", Genre::Narrative);
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].text, "It rose by 3.5 percent.");
    }

    #[test]
    fn test_chinese_terminators_and_runs() {
        // Sentence text is a slice of the normalized document, so the
        // fullwidth ！？ come back as ASCII.
        let out = segment(Language::Chinese, "今天下雨。！明天放晴？", Genre::Narrative);
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].text, "今天下雨。!");
        assert_eq!(out[1].text, "明天放晴?");
        assert_eq!(out[1].abs_start, 6);
    }

    #[test]
    fn test_chinese_fullwidth_question_closes_sentence() {
        let out = segment(Language::Chinese, "你吃饭了吗？我吃过了。", Genre::Narrative);
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].text, "你吃饭了吗?");
        assert_eq!(out[1].abs_start, 6);
    }

    #[test]
    fn test_japanese_fullwidth_question_and_exclamation() {
        let out = segment(Language::Japanese, "行きますか？はい！", Genre::Narrative);
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].text, "行きますか?");
        assert_eq!(out[1].text, "はい!");
    }

    #[test]
    fn test_chinese_semicolon_splits() {
        let out = segment(Language::Chinese, "先到先得；卖完为止。", Genre::Narrative);
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn test_japanese_dangling_fragment() {
        let out = segment(Language::Japanese, "雨が降った。でも行く", Genre::Narrative);
        assert_eq!(out.len(), 2);
        assert_eq!(out[1].text, "でも行く");
    }

    #[test]
    fn test_dialogue_lines() {
        let text = "A: 你好\n\nB: 你好，请问有什么可以帮您？\nA: 我想买咖啡\n";
        let out = segment(Language::Chinese, text, Genre::Dialogue);
        let nonempty_lines = text.lines().filter(|l| !l.trim().is_empty()).count();
        assert_eq!(out.len(), nonempty_lines);
        assert_eq!(out[0].text, "A: 你好");
        assert_eq!(out[0].abs_start, 0);
        assert_eq!(out[1].abs_start, 7);
        assert_eq!(out[2].sid, 3);
    }

    #[test]
    fn test_dialogue_auto_detected_without_genre() {
        let out = segment(Language::English, "A: Hi there\nB: Hello!", Genre::Narrative);
        assert_eq!(out.len(), 2);
        assert_eq!(out[1].text, "B: Hello!");
        assert_eq!(out[1].abs_start, 12);
    }

    #[test]
    fn test_dialogue_without_newlines_splits_on_turns() {
        let out = segment(Language::English, "A: How much? B: Ten dollars.", Genre::Dialogue);
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].text, "A: How much?");
        assert_eq!(out[1].text, "B: Ten dollars.");
        assert_eq!(out[1].abs_start, 13);
    }

    #[test]
    fn test_sentence_offsets_match_document_slices() {
        let text = "  One two three. Four five!  ";
        let normalized = NormalizedText::new(text);
        let out = SentenceSegmenter::new(Language::English).segment(&normalized, Genre::Narrative);
        for s in &out {
            let slice = normalized.slice_range(s.abs_start, s.abs_start + s.text.chars().count());
            assert_eq!(slice, s.text);
        }
    }
}
