use crate::analysis::StringAnalysis;
use crate::error::FilterError;
use serde::{Deserialize, Serialize};

/// Property criteria for selecting analyzed strings. Absent criteria match
/// everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StringFilter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_palindrome: Option<bool>,

    /// Inclusive lower bound on `length`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<usize>,

    /// Inclusive upper bound on `length`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub word_count: Option<usize>,

    /// Matched case-insensitively against the frequency map.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contains_character: Option<char>,
}

impl StringFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_palindrome(mut self, is_palindrome: bool) -> Self {
        self.is_palindrome = Some(is_palindrome);
        self
    }

    pub fn with_min_length(mut self, min_length: usize) -> Self {
        self.min_length = Some(min_length);
        self
    }

    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = Some(max_length);
        self
    }

    pub fn with_word_count(mut self, word_count: usize) -> Self {
        self.word_count = Some(word_count);
        self
    }

    pub fn with_character(mut self, ch: char) -> Self {
        self.contains_character = Some(ch);
        self
    }

    /// True when no criterion is set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Reject filters that can never match.
    pub fn validate(&self) -> Result<(), FilterError> {
        match (self.min_length, self.max_length) {
            (Some(min), Some(max)) if min > max => Err(FilterError::LengthRange { min, max }),
            _ => Ok(()),
        }
    }

    /// Returns `true` if `analysis` satisfies every criterion that is set.
    pub fn matches(&self, analysis: &StringAnalysis) -> bool {
        if self
            .is_palindrome
            .is_some_and(|want| analysis.is_palindrome != want)
        {
            return false;
        }
        if self.min_length.is_some_and(|min| analysis.length < min) {
            return false;
        }
        if self.max_length.is_some_and(|max| analysis.length > max) {
            return false;
        }
        if self
            .word_count
            .is_some_and(|count| analysis.word_count != count)
        {
            return false;
        }
        match self.contains_character {
            Some(ch) => contains_ignoring_case(analysis, ch),
            None => true,
        }
    }
}

fn contains_ignoring_case(analysis: &StringAnalysis, ch: char) -> bool {
    analysis.frequency.contains_key(&ch)
        || ch.to_lowercase().any(|c| analysis.frequency.contains_key(&c))
        || ch.to_uppercase().any(|c| analysis.frequency.contains_key(&c))
}
