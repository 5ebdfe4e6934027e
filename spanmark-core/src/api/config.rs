//! Configuration API for the annotation pipeline

use crate::api::{Error, Language};
use crate::domain::lexicon::Lexicon;
use crate::domain::segment::Genre;

/// Pipeline configuration
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub(crate) language: Language,
    pub(crate) genre: Genre,
    /// Custom lexicon; `None` selects the embedded default for the language
    pub(crate) lexicon: Option<Lexicon>,
}

impl Config {
    /// Create a configuration builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// The configured language
    pub fn language(&self) -> Language {
        self.language
    }

    /// The configured genre
    pub fn genre(&self) -> Genre {
        self.genre
    }
}

/// Fluent builder for configuration
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    language: Option<String>,
    genre: Genre,
    lexicon: Option<Lexicon>,
}

impl ConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the language by code
    pub fn language(mut self, code: impl Into<String>) -> Self {
        self.language = Some(code.into());
        self
    }

    /// Set the document genre
    pub fn genre(mut self, genre: Genre) -> Self {
        self.genre = genre;
        self
    }

    /// Substitute a custom lexicon for the embedded default
    pub fn lexicon(mut self, lexicon: Lexicon) -> Self {
        self.lexicon = Some(lexicon);
        self
    }

    /// Build the configuration, validating the language code
    pub fn build(self) -> Result<Config, Error> {
        let language = match self.language {
            Some(code) => {
                Language::try_from_code(&code).ok_or(Error::InvalidLanguage(code))?
            }
            None => Language::default(),
        };
        Ok(Config {
            language,
            genre: self.genre,
            lexicon: self.lexicon,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let config = Config::builder().build().unwrap();
        assert_eq!(config.language(), Language::English);
        assert_eq!(config.genre(), Genre::Narrative);
        assert!(config.lexicon.is_none());
    }

    #[test]
    fn test_builder_language_code() {
        let config = Config::builder().language("zh").build().unwrap();
        assert_eq!(config.language(), Language::Chinese);
    }

    #[test]
    fn test_builder_rejects_unknown_language() {
        let err = Config::builder().language("tlh").build().unwrap_err();
        assert!(matches!(err, Error::InvalidLanguage(_)));
    }

    #[test]
    fn test_builder_custom_lexicon_and_genre() {
        let lexicon = Lexicon {
            connectives: vec!["but".to_string()],
            time: vec![],
            pronouns: vec![],
        };
        let config = Config::builder()
            .language("en")
            .genre(Genre::Dialogue)
            .lexicon(lexicon.clone())
            .build()
            .unwrap();
        assert_eq!(config.genre(), Genre::Dialogue);
        assert_eq!(config.lexicon, Some(lexicon));
    }
}
