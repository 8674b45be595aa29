use crate::error::AnalyzeError;
use crate::hash::sha256_hex;
use crate::palindrome::is_palindrome;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Per-character occurrence counts, ordered by character so that two
/// analyses of the same input serialize to identical bytes.
pub type FrequencyMap = BTreeMap<char, usize>;

/// The computed properties of one input string.
///
/// Invariants (upheld by [`analyze`]):
/// - `unique_characters == frequency.len()`
/// - every count in `frequency` is at least 1 and the counts sum to `length`
/// - `hash` depends only on `value`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StringAnalysis {
    /// The original input.
    pub value: String,
    /// Number of characters (Unicode scalar values).
    pub length: usize,
    /// See [`crate::palindrome`] for the normalization policy.
    pub is_palindrome: bool,
    /// Number of distinct characters.
    pub unique_characters: usize,
    /// Number of whitespace-separated words.
    pub word_count: usize,
    /// Lowercase hex SHA-256 digest of `value`.
    pub hash: String,
    /// Occurrences of each character in `value`.
    pub frequency: FrequencyMap,
}

/// Analyze `value`. Total over all strings, including the empty one.
pub fn analyze(value: &str) -> StringAnalysis {
    let frequency = character_frequency(value);
    StringAnalysis {
        value: value.to_owned(),
        length: length(value),
        is_palindrome: is_palindrome(value),
        unique_characters: frequency.len(),
        word_count: word_count(value),
        hash: sha256_hex(value),
        frequency,
    }
}

/// Analyze an untyped JSON value, rejecting anything that is not a string.
pub fn analyze_json(value: &serde_json::Value) -> Result<StringAnalysis, AnalyzeError> {
    match value {
        serde_json::Value::String(s) => Ok(analyze(s)),
        other => Err(AnalyzeError::InvalidInput(json_type_name(other))),
    }
}

/// Number of characters in `value`.
pub fn length(value: &str) -> usize {
    value.chars().count()
}

/// Number of distinct characters in `value`.
pub fn unique_characters(value: &str) -> usize {
    value.chars().collect::<BTreeSet<_>>().len()
}

/// Number of whitespace-separated words; zero for blank input.
pub fn word_count(value: &str) -> usize {
    value.split_whitespace().count()
}

/// Count each character of `value`, scanning left to right.
pub fn character_frequency(value: &str) -> FrequencyMap {
    let mut frequency = FrequencyMap::new();
    for ch in value.chars() {
        *frequency.entry(ch).or_insert(0) += 1;
    }
    frequency
}

fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
