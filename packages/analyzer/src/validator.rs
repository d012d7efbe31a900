//! Input validation for contract text.

use crate::error::{AnalyzerError, Result};

/// Count words by whitespace splitting.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Contract text that passed validation.
///
/// Trimmed, non-empty and within the word ceiling it was validated against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractText {
    text: String,
    word_count: usize,
}

impl ContractText {
    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn word_count(&self) -> usize {
        self.word_count
    }
}

impl AsRef<str> for ContractText {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

/// Rejects empty and over-long contracts before any model call.
#[derive(Debug, Clone, Copy)]
pub struct InputValidator {
    max_words: usize,
}

impl InputValidator {
    pub fn new(max_words: usize) -> Self {
        Self { max_words }
    }

    pub fn max_words(&self) -> usize {
        self.max_words
    }

    /// Validate raw contract text.
    ///
    /// # Errors
    /// * [`AnalyzerError::EmptyInput`] if the trimmed text is empty
    /// * [`AnalyzerError::WordLimitExceeded`] if the word count exceeds the ceiling
    pub fn validate(&self, raw: &str) -> Result<ContractText> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(AnalyzerError::EmptyInput);
        }

        let count = word_count(trimmed);
        if count > self.max_words {
            return Err(AnalyzerError::WordLimitExceeded {
                count,
                limit: self.max_words,
            });
        }

        Ok(ContractText {
            text: trimmed.to_string(),
            word_count: count,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(n: usize) -> String {
        vec!["word"; n].join(" ")
    }

    #[test]
    fn test_empty_and_whitespace_rejected() {
        let validator = InputValidator::new(5000);
        assert!(matches!(validator.validate(""), Err(AnalyzerError::EmptyInput)));
        assert!(matches!(
            validator.validate("   \n\t  "),
            Err(AnalyzerError::EmptyInput)
        ));
    }

    #[test]
    fn test_word_limit_boundary() {
        let validator = InputValidator::new(5000);

        let ok = validator.validate(&words(5000)).expect("5000 words is allowed");
        assert_eq!(ok.word_count(), 5000);

        match validator.validate(&words(5001)) {
            Err(AnalyzerError::WordLimitExceeded { count, limit }) => {
                assert_eq!(count, 5001);
                assert_eq!(limit, 5000);
            }
            other => panic!("expected WordLimitExceeded, got {other:?}"),
        }
    }

    #[test]
    fn test_text_is_trimmed() {
        let validator = InputValidator::new(10);
        let text = validator.validate("\n  Party A pays Party B.  \n").expect("valid");
        assert_eq!(text.as_str(), "Party A pays Party B.");
        assert_eq!(text.word_count(), 5);
    }

    #[test]
    fn test_word_count_mixed_whitespace() {
        assert_eq!(word_count("a\tb\nc   d"), 4);
        assert_eq!(word_count(""), 0);
    }
}
