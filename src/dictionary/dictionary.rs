use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::ScrabbleError;

/// The set of playable words, loaded once at game start and queried by
/// exact membership for the rest of the session.
#[derive(Debug, Clone)]
pub struct Dictionary {
    words: HashSet<String>,
}

impl Dictionary {
    /// Loads a newline-delimited word file, one word per line. Lines are
    /// trimmed and uppercased, empty lines are skipped. A missing file or
    /// an empty word set is a fatal setup error: with no dictionary every
    /// multi-letter word would be rejected, so the game cannot start.
    pub fn from_file<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let reader = BufReader::new(file);

        let mut words = HashSet::new();
        for line in reader.lines() {
            let line = line?;
            let word = line.trim();
            if !word.is_empty() {
                words.insert(word.to_uppercase());
            }
        }

        if words.is_empty() {
            return Err(ScrabbleError::Dictionary(format!(
                "word file {} contains no words",
                path.display()
            )));
        }

        log::info!("loaded {} words from {}", words.len(), path.display());
        Ok(Dictionary { words })
    }

    /// Builds a dictionary from words already in memory. Mostly for tests;
    /// emptiness is the caller's concern here.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Dictionary {
            words: words
                .into_iter()
                .map(|word| word.as_ref().trim().to_uppercase())
                .collect(),
        }
    }

    /// Case-insensitive exact membership test.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_uppercase())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use std::io::Write;

    #[test]
    fn test_membership_is_case_insensitive() {
        let dictionary = Dictionary::from_words(["cat", "Dog"]);
        assert!(dictionary.contains("CAT"));
        assert!(dictionary.contains("cat"));
        assert!(dictionary.contains("dog"));
        assert!(!dictionary.contains("bird"));
    }

    #[test]
    fn test_from_file_trims_and_skips_blank_lines() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "cat").expect("write");
        writeln!(file).expect("write");
        writeln!(file, "  dog  ").expect("write");
        writeln!(file, "BIRD").expect("write");

        let dictionary = Dictionary::from_file(file.path()).expect("dictionary loads");
        assert_eq!(
            dictionary.len(),
            3,
            "Blank lines should not become dictionary entries."
        );
        assert!(dictionary.contains("dog"));
        assert!(dictionary.contains("bird"));
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        let result = Dictionary::from_file("definitely/not/a/word/file.txt");
        assert_matches!(result, Err(ScrabbleError::Io(_)));
    }

    #[test]
    fn test_empty_file_is_a_setup_error() {
        let file = tempfile::NamedTempFile::new().expect("temp file");
        let result = Dictionary::from_file(file.path());
        assert_matches!(result, Err(ScrabbleError::Dictionary(_)));
    }
}
