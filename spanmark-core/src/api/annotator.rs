//! Main annotation pipeline facade

use tracing::debug;

use crate::api::{Config, Error, Language};
use crate::domain::anaphora;
use crate::domain::annotate;
use crate::domain::cloze::{self, ClozeVersion};
use crate::domain::lexicon::{default_lexicon, CompiledLexicon};
use crate::domain::normalize::NormalizedText;
use crate::domain::relation;
use crate::domain::script::ScriptMatcher;
use crate::domain::segment::{Genre, SentenceSegmenter};
use crate::domain::types::{ClozeItem, PronounResolution, SentenceInfo, SpanItem, SvoTriple};

/// Result of running all three annotation passes over one document
///
/// `text` is the NFKC-normalized document every span offset points into.
#[derive(Debug, Clone)]
pub struct Annotation {
    /// The normalized text the spans index into
    pub text: String,
    /// Pass 1: connective and time-expression spans
    pub spans: Vec<SpanItem>,
    /// Pass 2: pronoun occurrences with antecedent candidates
    pub pronouns: Vec<PronounResolution>,
    /// Pass 3: shallow subject-verb-object triples
    pub triples: Vec<SvoTriple>,
}

/// Text annotation pipeline with strategies fixed at construction
///
/// The annotator is stateless with respect to the documents it processes;
/// one instance can be shared freely across calls.
pub struct Annotator {
    language: Language,
    genre: Genre,
    lexicon: CompiledLexicon,
    matcher: ScriptMatcher,
    segmenter: SentenceSegmenter,
}

impl Annotator {
    /// Create an annotator with the default configuration (English)
    pub fn new() -> Self {
        Self::with_config(Config::default()).expect("default configuration is valid")
    }

    /// Create an annotator with custom configuration
    pub fn with_config(config: Config) -> Result<Self, Error> {
        let language = config.language;
        let matcher = ScriptMatcher::for_family(language.script_family());
        let lexicon = match &config.lexicon {
            Some(custom) => CompiledLexicon::compile(custom, &matcher)?,
            None => CompiledLexicon::compile(default_lexicon(language), &matcher)?,
        };
        debug!(%language, genre = ?config.genre, "annotator constructed");
        Ok(Self {
            language,
            genre: config.genre,
            lexicon,
            matcher,
            segmenter: SentenceSegmenter::new(language),
        })
    }

    /// Create an annotator for a specific language code
    pub fn with_language(code: &str) -> Result<Self, Error> {
        Self::with_config(Config::builder().language(code).build()?)
    }

    /// The configured language
    pub fn language(&self) -> Language {
        self.language
    }

    /// Normalize and segment a document into sentences
    pub fn segment(&self, text: &str) -> Vec<SentenceInfo> {
        let normalized = NormalizedText::new(text);
        self.segmenter.segment(&normalized, self.genre)
    }

    /// Run all three annotation passes over one normalization of the text
    pub fn annotate(&self, text: &str) -> Annotation {
        let normalized = NormalizedText::new(text);
        let spans = annotate::find_spans(&normalized, &self.lexicon);
        let pronouns =
            anaphora::resolve_pronouns(&normalized, &self.lexicon, &self.matcher, &self.segmenter);
        let triples = relation::extract_triples(&normalized, &self.matcher, &self.segmenter);
        Annotation {
            text: normalized.as_str().to_string(),
            spans,
            pronouns,
            triples,
        }
    }

    /// Select cloze blanks for the text under the version's target density
    pub fn cloze(&self, text: &str, version: ClozeVersion) -> Vec<ClozeItem> {
        let normalized = NormalizedText::new(text);
        cloze::select_blanks(&normalized, &self.lexicon, &self.matcher, version)
    }
}

impl Default for Annotator {
    fn default() -> Self {
        Self::new()
    }
}
