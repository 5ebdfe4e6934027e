//! Language type for the API

use std::fmt;

use crate::domain::script::ScriptFamily;

/// Supported languages for the annotation pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    /// English, with Latin word-boundary rules
    #[default]
    English,
    /// Simplified Chinese
    Chinese,
    /// Japanese
    Japanese,
    /// Korean
    Korean,
}

impl Language {
    /// Create a Language from a language code, defaulting to English
    pub fn from_code(code: &str) -> Self {
        Self::try_from_code(code).unwrap_or_default()
    }

    /// Create a Language from a language code, rejecting unknown codes
    pub fn try_from_code(code: &str) -> Option<Self> {
        match code.to_lowercase().as_str() {
            "en" | "eng" | "english" => Some(Language::English),
            "zh" | "zho" | "chi" | "chinese" => Some(Language::Chinese),
            "ja" | "jpn" | "japanese" => Some(Language::Japanese),
            "ko" | "kor" | "korean" => Some(Language::Korean),
            _ => None,
        }
    }

    /// Get the language code
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Chinese => "zh",
            Language::Japanese => "ja",
            Language::Korean => "ko",
        }
    }

    /// Get the full language name
    pub fn name(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Chinese => "Chinese",
            Language::Japanese => "Japanese",
            Language::Korean => "Korean",
        }
    }

    /// The script family the language's matching rules belong to
    pub fn script_family(&self) -> ScriptFamily {
        match self {
            Language::English => ScriptFamily::Latin,
            Language::Chinese | Language::Japanese | Language::Korean => ScriptFamily::Cjk,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code() {
        assert_eq!(Language::from_code("ZH"), Language::Chinese);
        assert_eq!(Language::from_code("japanese"), Language::Japanese);
        // Unknown codes fall back to English.
        assert_eq!(Language::from_code("xx"), Language::English);
        assert_eq!(Language::try_from_code("xx"), None);
    }

    #[test]
    fn test_script_families() {
        assert_eq!(Language::English.script_family(), ScriptFamily::Latin);
        assert_eq!(Language::Korean.script_family(), ScriptFamily::Cjk);
    }

    #[test]
    fn test_display() {
        assert_eq!(Language::Chinese.to_string(), "Chinese");
        assert_eq!(Language::Chinese.code(), "zh");
    }
}
