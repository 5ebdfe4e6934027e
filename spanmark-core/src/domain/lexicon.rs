//! Lexicon configuration and fail-fast compilation
//!
//! The lexicon is an explicit immutable configuration object: per language,
//! literal connective words, time-expression patterns, and literal pronoun
//! words. Embedded per-language defaults ship with the crate; callers (and
//! tests) may substitute their own. A malformed time pattern is a
//! configuration error surfaced at load time, never during a text scan.

use std::collections::HashMap;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::api::Language;

use super::script::{LiteralMatcher, ScriptMatcher};

/// Lexicon loading or compilation error
#[derive(Debug, Error)]
pub enum LexiconError {
    /// A time-expression pattern failed to compile
    #[error("invalid time pattern '{pattern}': {source}")]
    InvalidTimePattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// The lexicon file/TOML could not be parsed
    #[error("failed to parse lexicon: {0}")]
    Parse(String),
}

/// Static per-language lexical resources, as supplied by the caller
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Lexicon {
    /// Literal discourse connective words
    #[serde(default)]
    pub connectives: Vec<String>,
    /// Time-expression patterns (regex syntax)
    #[serde(default)]
    pub time: Vec<String>,
    /// Literal pronoun words
    #[serde(default)]
    pub pronouns: Vec<String>,
}

impl Lexicon {
    /// Parse a lexicon from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, LexiconError> {
        toml::from_str(content).map_err(|e| LexiconError::Parse(e.to_string()))
    }
}

static DEFAULT_LEXICONS: OnceLock<HashMap<&'static str, Lexicon>> = OnceLock::new();

fn load_embedded_lexicons() -> HashMap<&'static str, Lexicon> {
    let embedded = [
        ("en", include_str!("../../configs/lexicons/english.toml")),
        ("zh", include_str!("../../configs/lexicons/chinese.toml")),
        ("ja", include_str!("../../configs/lexicons/japanese.toml")),
        ("ko", include_str!("../../configs/lexicons/korean.toml")),
    ];
    embedded
        .into_iter()
        .map(|(code, content)| {
            let lexicon = Lexicon::from_toml_str(content)
                .unwrap_or_else(|e| panic!("embedded {code} lexicon is invalid: {e}"));
            (code, lexicon)
        })
        .collect()
}

/// The embedded default lexicon for a language
pub fn default_lexicon(language: Language) -> &'static Lexicon {
    let lexicons = DEFAULT_LEXICONS.get_or_init(load_embedded_lexicons);
    &lexicons[language.code()]
}

/// A lexicon compiled against a script strategy
///
/// Entries keep their original order; pass 1 reports matches in discovery
/// order per entry.
#[derive(Debug)]
pub(crate) struct CompiledLexicon {
    pub(crate) connectives: Vec<(String, LiteralMatcher)>,
    pub(crate) time: Vec<(String, Regex)>,
    pub(crate) pronouns: Vec<(String, LiteralMatcher)>,
}

impl CompiledLexicon {
    pub(crate) fn compile(
        lexicon: &Lexicon,
        matcher: &ScriptMatcher,
    ) -> Result<Self, LexiconError> {
        let connectives = lexicon
            .connectives
            .iter()
            .map(|w| (w.clone(), matcher.compile_literal(w)))
            .collect();
        let pronouns = lexicon
            .pronouns
            .iter()
            .map(|w| (w.clone(), matcher.compile_literal(w)))
            .collect();
        let time = lexicon
            .time
            .iter()
            .map(|p| {
                Regex::new(p)
                    .map(|re| (p.clone(), re))
                    .map_err(|source| LexiconError::InvalidTimePattern {
                        pattern: p.clone(),
                        source,
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            connectives,
            time,
            pronouns,
        })
    }
}
