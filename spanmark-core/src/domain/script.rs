//! Script-family matching strategy
//!
//! Every pass needs script-sensitive matching: Latin scripts match on word
//! boundaries and case-insensitively, CJK scripts match literal substrings
//! and token runs of contiguous characters. The strategy is selected once at
//! pipeline construction; the passes themselves contain no language
//! branching.

use regex::Regex;

/// Broad script family a language belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptFamily {
    /// Word-boundary tokenization, case-insensitive literal matching
    Latin,
    /// Contiguous character runs, exact substring matching
    Cjk,
}

/// Compiled matcher for one lexicon literal
#[derive(Debug, Clone)]
pub(crate) enum LiteralMatcher {
    /// Latin: case-insensitive match on word boundaries
    Word(Regex),
    /// CJK: the literal substring, everywhere it occurs
    Substring(String),
}

impl LiteralMatcher {
    /// All match positions as byte ranges, in discovery order
    pub(crate) fn find_iter(&self, text: &str) -> Vec<(usize, usize)> {
        match self {
            LiteralMatcher::Word(re) => re.find_iter(text).map(|m| (m.start(), m.end())).collect(),
            LiteralMatcher::Substring(needle) => text
                .match_indices(needle.as_str())
                .map(|(i, _)| (i, i + needle.len()))
                .collect(),
        }
    }
}

/// Script-level matching machinery, compiled once per pipeline
#[derive(Debug)]
pub(crate) struct ScriptMatcher {
    family: ScriptFamily,
    noun_token: Regex,
    collocation: Regex,
    svo: Regex,
}

impl ScriptMatcher {
    pub(crate) fn for_family(family: ScriptFamily) -> Self {
        let (noun_token, collocation, svo) = match family {
            ScriptFamily::Latin => (
                // Capitalized word, or a run of 3+ lowercase letters.
                r"\b[A-Z][a-z]+|\b[a-z]{3,}\b",
                // 2-3 consecutive words; combined length filtered below.
                r"\b[A-Za-z]+(?:\s+[A-Za-z]+){1,2}\b",
                // Subject token, bounded filler, auxiliary/copula or
                // inflected verb, bounded filler, object token.
                r"\b([A-Za-z][A-Za-z\-']+)\b[^.!?]{0,40}?\b(is|are|was|were|be|become|makes|made|has|have|do|does|did|[a-z]+s|[a-z]+ed|[a-z]+ing)\b[^.!?]{0,40}?\b([A-Za-z][A-Za-z\-']+)\b",
            ),
            ScriptFamily::Cjk => (
                // Runs of 2+ Han/kana/Hangul characters.
                r"[\p{Han}\p{Hiragana}\p{Katakana}\p{Hangul}]{2,}",
                r"\p{Han}{2,4}",
                // Subject run, short filler, closed copula/verb set, filler,
                // object run. Terminator characters never appear as filler.
                r"([\p{L}\p{N}]{2,})[^。！？；]{0,12}?(是|为|成为|属于|包含|导致|表示|决定|促进|提供|采用)[^。！？；]{0,12}?([\p{L}\p{N}]{2,})",
            ),
        };
        Self {
            family,
            noun_token: Regex::new(noun_token).expect("built-in noun token pattern is valid"),
            collocation: Regex::new(collocation).expect("built-in collocation pattern is valid"),
            svo: Regex::new(svo).expect("built-in SVO pattern is valid"),
        }
    }

    /// Compile a lexicon literal according to the script family
    pub(crate) fn compile_literal(&self, word: &str) -> LiteralMatcher {
        match self.family {
            ScriptFamily::Latin => {
                let pattern = format!(r"(?i)\b{}\b", regex::escape(word));
                LiteralMatcher::Word(
                    Regex::new(&pattern).expect("escaped literal is a valid pattern"),
                )
            }
            ScriptFamily::Cjk => LiteralMatcher::Substring(word.to_string()),
        }
    }

    /// Noun-like token byte ranges within one sentence, in order
    pub(crate) fn noun_tokens(&self, sentence: &str) -> Vec<(usize, usize)> {
        self.noun_token
            .find_iter(sentence)
            .map(|m| (m.start(), m.end()))
            .collect()
    }

    /// Collocation candidate byte ranges, already length-filtered
    pub(crate) fn collocation_candidates(&self, text: &str) -> Vec<(usize, usize)> {
        self.collocation
            .find_iter(text)
            .filter(|m| match self.family {
                // The run quantifier already bounds CJK candidates at 2-4.
                ScriptFamily::Latin => m.as_str().chars().count() >= 6,
                ScriptFamily::Cjk => true,
            })
            .map(|m| (m.start(), m.end()))
            .collect()
    }

    /// Hint label used for collocation cloze candidates
    pub(crate) fn collocation_hint(&self) -> &'static str {
        match self.family {
            ScriptFamily::Latin => "collocation",
            ScriptFamily::Cjk => "phrase",
        }
    }

    /// First subject/verb/object capture in a sentence, as byte ranges
    pub(crate) fn svo_captures(&self, sentence: &str) -> Option<[(usize, usize); 3]> {
        let caps = self.svo.captures(sentence)?;
        match (caps.get(1), caps.get(2), caps.get(3)) {
            (Some(s), Some(v), Some(o)) => Some([
                (s.start(), s.end()),
                (v.start(), v.end()),
                (o.start(), o.end()),
            ]),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latin_literal_is_case_insensitive_and_bounded() {
        let matcher = ScriptMatcher::for_family(ScriptFamily::Latin);
        let lit = matcher.compile_literal("because");
        let hits = lit.find_iter("Because of rain. And becauseof is no word.");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0], (0, 7));
    }

    #[test]
    fn test_cjk_literal_matches_everywhere() {
        let matcher = ScriptMatcher::for_family(ScriptFamily::Cjk);
        let lit = matcher.compile_literal("因为");
        let hits = lit.find_iter("因为下雨，因为风大。");
        assert_eq!(hits.len(), 2);
    }

    #[test]
    fn test_latin_noun_tokens() {
        let matcher = ScriptMatcher::for_family(ScriptFamily::Latin);
        let tokens = matcher.noun_tokens("Alice met the manager at HQ");
        let words: Vec<&str> = tokens
            .iter()
            .map(|&(s, e)| &"Alice met the manager at HQ"[s..e])
            .collect();
        assert!(words.contains(&"Alice"));
        assert!(words.contains(&"manager"));
        // 2-letter lowercase words are not noun-like.
        assert!(!words.contains(&"at"));
    }

    #[test]
    fn test_cjk_noun_tokens_include_hangul() {
        let matcher = ScriptMatcher::for_family(ScriptFamily::Cjk);
        assert!(!matcher.noun_tokens("학생이 책을 읽는다").is_empty());
        assert!(!matcher.noun_tokens("彼女は学生です").is_empty());
    }

    #[test]
    fn test_latin_collocation_length_filter() {
        let matcher = ScriptMatcher::for_family(ScriptFamily::Latin);
        let text = "go on it of at up";
        // Every 2-3 word window here is under 6 characters... except those
        // spanning three words with spaces counted.
        for (s, e) in matcher.collocation_candidates(text) {
            assert!(text[s..e].chars().count() >= 6);
        }
    }

    #[test]
    fn test_cjk_collocation_bounds() {
        let matcher = ScriptMatcher::for_family(ScriptFamily::Cjk);
        for (s, e) in matcher.collocation_candidates("这个商品的价格很高") {
            let len = "这个商品的价格很高"[s..e].chars().count();
            assert!((2..=4).contains(&len));
        }
    }

    #[test]
    fn test_latin_svo() {
        let matcher = ScriptMatcher::for_family(ScriptFamily::Latin);
        let sentence = "The committee approved the proposal";
        let [s, v, o] = matcher.svo_captures(sentence).unwrap();
        assert_eq!(&sentence[s.0..s.1], "The");
        assert_eq!(&sentence[v.0..v.1], "approved");
        assert_eq!(&sentence[o.0..o.1], "the");
    }

    #[test]
    fn test_cjk_svo() {
        let matcher = ScriptMatcher::for_family(ScriptFamily::Cjk);
        let sentence = "这个决定导致项目延期";
        let [_, v, _] = matcher.svo_captures(sentence).unwrap();
        assert_eq!(&sentence[v.0..v.1], "导致");
    }

    #[test]
    fn test_svo_no_match() {
        let matcher = ScriptMatcher::for_family(ScriptFamily::Latin);
        assert!(matcher.svo_captures("Ouch").is_none());
    }
}
