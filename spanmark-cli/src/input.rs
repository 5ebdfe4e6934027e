//! Input reading utilities

use anyhow::{Context, Result};
use std::io::Read;
use std::path::Path;

use spanmark_core::Lexicon;

/// Read a file as UTF-8 text
pub fn read_text(path: &Path) -> Result<String> {
    std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))
}

/// Read the text to process: a file when given, stdin otherwise
pub fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => read_text(path),
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read from stdin")?;
            Ok(buffer)
        }
    }
}

/// Load a lexicon from a TOML file
pub fn read_lexicon(path: &Path) -> Result<Lexicon> {
    let content = read_text(path)?;
    Lexicon::from_toml_str(&content)
        .with_context(|| format!("Failed to parse lexicon: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_read_text_success() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("sample.txt");
        fs::write(&file_path, "因为下雨，比赛取消了。").unwrap();

        let content = read_text(&file_path).unwrap();
        assert_eq!(content, "因为下雨，比赛取消了。");
    }

    #[test]
    fn test_read_text_nonexistent() {
        let result = read_text(Path::new("/nonexistent/input.txt"));
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Failed to read file"));
    }

    #[test]
    fn test_read_lexicon_success() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("lex.toml");
        fs::write(&file_path, "connectives = [\"dock\"]\n").unwrap();

        let lexicon = read_lexicon(&file_path).unwrap();
        assert_eq!(lexicon.connectives, vec!["dock".to_string()]);
        assert!(lexicon.time.is_empty());
    }

    #[test]
    fn test_read_lexicon_malformed() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("bad.toml");
        fs::write(&file_path, "connectives = 3").unwrap();

        let result = read_lexicon(&file_path);
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Failed to parse lexicon"));
    }
}
