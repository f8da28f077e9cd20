use url::Url;

use crate::error::TrainerError;

/// One word together with the image that represents it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct VocabularyEntry {
    word: String,
    url: String,
}

impl VocabularyEntry {
    /// Creates an entry, rejecting an empty word or a malformed image URL.
    pub fn new(word: impl Into<String>, url: impl Into<String>) -> Result<Self, TrainerError> {
        let entry = Self::unchecked(word, url);
        if !check_word(&entry.word) {
            return Err(TrainerError::InvalidEntry(
                "word must not be empty".to_string(),
            ));
        }
        if !check_url(&entry.url) {
            return Err(TrainerError::InvalidEntry(format!(
                "url is not well-formed: {}",
                entry.url
            )));
        }
        return Ok(entry);
    }

    /// Creates an entry without validating it.
    ///
    /// Used for bulk imports (word list files, saved state) where invalid entries are
    /// filtered later by [`crate::Trainer::set_entries`]. Surrounding whitespace is
    /// trimmed from both fields.
    pub fn unchecked(word: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            word: trimmed(word.into()),
            url: trimmed(url.into()),
        }
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn is_valid(&self) -> bool {
        check_word(&self.word) && check_url(&self.url)
    }
}

fn trimmed(value: String) -> String {
    let trimmed = value.trim();
    if trimmed.len() == value.len() {
        return value;
    }
    trimmed.to_string()
}

/// A word is valid if something other than whitespace is left after trimming.
pub fn check_word(word: &str) -> bool {
    !word.trim().is_empty()
}

/// A URL is valid if it parses and names a host, e.g. `https://example.com/dog.png`.
pub fn check_url(url: &str) -> bool {
    match Url::parse(url) {
        Ok(parsed) => parsed.has_host(),
        Err(_) => false,
    }
}
