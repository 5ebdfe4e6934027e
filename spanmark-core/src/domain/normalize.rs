//! NFKC normalization and byte/character offset bookkeeping
//!
//! The public data model speaks in character offsets, but the `regex` crate
//! reports byte offsets. `NormalizedText` owns the normalized string together
//! with a char-index table so each pass can convert match positions exactly
//! instead of re-counting from the start of the document.

use unicode_normalization::UnicodeNormalization;

use super::types::Span;

/// Apply NFKC normalization. Idempotent: `nfkc(nfkc(x)) == nfkc(x)`.
pub fn nfkc(text: &str) -> String {
    text.nfkc().collect()
}

/// NFKC-normalized text with a byte-to-char conversion table
#[derive(Debug, Clone)]
pub struct NormalizedText {
    text: String,
    /// Byte offset of each character, with a trailing sentinel at `text.len()`
    char_starts: Vec<usize>,
}

impl NormalizedText {
    /// Normalize raw input and index it
    pub fn new(raw: &str) -> Self {
        Self::from_normalized(nfkc(raw))
    }

    /// Index a string that is already NFKC-normalized
    pub(crate) fn from_normalized(text: String) -> Self {
        let mut char_starts: Vec<usize> = text.char_indices().map(|(b, _)| b).collect();
        char_starts.push(text.len());
        Self { text, char_starts }
    }

    /// The normalized text
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Length in characters
    pub fn char_len(&self) -> usize {
        self.char_starts.len() - 1
    }

    /// Convert a byte offset (on a character boundary) to a character offset
    pub fn byte_to_char(&self, byte: usize) -> usize {
        match self.char_starts.binary_search(&byte) {
            Ok(i) => i,
            // Mid-character byte offsets floor to the containing character.
            Err(i) => i - 1,
        }
    }

    /// Convert a character offset to its byte offset
    pub fn char_to_byte(&self, ch: usize) -> usize {
        self.char_starts[ch]
    }

    /// Slice by character offsets
    pub fn slice_range(&self, start: usize, end: usize) -> &str {
        &self.text[self.char_starts[start]..self.char_starts[end]]
    }

    /// Slice by span
    pub fn slice(&self, span: Span) -> &str {
        self.slice_range(span.start, span.end)
    }
}

/// Character offset of a byte position within an arbitrary string slice
///
/// Used when a pass matches inside a single sentence and only needs the
/// sentence-relative character offset.
pub(crate) fn char_offset(s: &str, byte: usize) -> usize {
    s[..byte].chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nfkc_idempotent() {
        let samples = ["Ｈｅｌｌｏ：ｗｏｒｌｄ", "①②③", "café", "１２時"];
        for s in samples {
            let once = nfkc(s);
            assert_eq!(nfkc(&once), once);
        }
    }

    #[test]
    fn test_nfkc_fullwidth() {
        assert_eq!(nfkc("Ａ："), "A:");
        assert_eq!(nfkc("１２"), "12");
    }

    #[test]
    fn test_byte_char_roundtrip() {
        let t = NormalizedText::new("ab漢字cd");
        assert_eq!(t.char_len(), 6);
        for i in 0..=t.char_len() {
            assert_eq!(t.byte_to_char(t.char_to_byte(i)), i);
        }
    }

    #[test]
    fn test_slice_multibyte() {
        let t = NormalizedText::new("他说：你好。");
        assert_eq!(t.slice_range(0, 2), "他说");
        assert_eq!(t.slice(Span::new(3, 5)), "你好");
    }

    #[test]
    fn test_char_offset_helper() {
        let s = "漢字abc";
        let byte = s.find('a').unwrap();
        assert_eq!(char_offset(s, byte), 2);
    }
}
