//! Guest name rules.
//!
//! A valid name is two or more words made only of letters. Input is brought to
//! Unicode NFC first, so precomposed and decomposed accents are the same name.
//! Runs of whitespace collapse to one space; the lower-cased result is the
//! de-duplication key.

use std::sync::LazyLock;

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

use super::error::DomainError;

#[allow(clippy::expect_used)]
static NAME_WORDS: LazyLock<Regex> = LazyLock::new(|| {
    // every word starts with a letter; combining marks only follow letters
    Regex::new(r"^\p{L}[\p{L}\p{M}]*(?:\s+\p{L}[\p{L}\p{M}]*)*$").expect("valid name regex")
});

/// A name that passed every format rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidName {
    display: String,
    normalized: String,
}

impl ValidName {
    /// Apply the name rules in order: emptiness, character class, word count,
    /// then length.
    ///
    /// # Errors
    /// [`DomainError::EmptyName`] for blank input, [`DomainError::InvalidFormat`]
    /// for everything else that fails.
    pub fn parse(raw: &str, max_len: usize) -> Result<Self, DomainError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(DomainError::EmptyName);
        }

        let composed: String = trimmed.nfc().collect();
        if !NAME_WORDS.is_match(&composed) {
            return Err(DomainError::invalid_format(
                "only letters and spaces are allowed",
            ));
        }

        let display = collapse_whitespace(&composed);
        if !display.contains(' ') {
            return Err(DomainError::invalid_format(
                "first and last name are required",
            ));
        }

        let len = display.chars().count();
        if len > max_len {
            return Err(DomainError::invalid_format(format!(
                "name is {len} characters long (max: {max_len})"
            )));
        }

        let normalized = lowercase_nfc(&display);
        Ok(Self {
            display,
            normalized,
        })
    }

    #[must_use]
    pub fn display(&self) -> &str {
        &self.display
    }

    #[must_use]
    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    #[must_use]
    pub fn into_parts(self) -> (String, String) {
        (self.display, self.normalized)
    }
}

/// Replace every whitespace run with a single space and drop leading and
/// trailing whitespace.
#[must_use]
pub fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// De-duplication key of a name. Idempotent.
#[must_use]
pub fn normalize_name(s: &str) -> String {
    let composed: String = s.nfc().collect();
    lowercase_nfc(&collapse_whitespace(&composed))
}

// Lower-casing can emit combining marks (e.g. for U+0130), so recompose.
fn lowercase_nfc(s: &str) -> String {
    s.to_lowercase().nfc().collect()
}
