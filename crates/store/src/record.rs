use analyzer::{FrequencyMap, StringAnalysis};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A persisted analysis, keyed by `id` (the SHA-256 of `value`).
///
/// This is also the JSON shape served over HTTP:
///
/// ```json
/// {
///   "id": "…sha256…",
///   "value": "racecar",
///   "properties": {
///     "length": 7,
///     "is_palindrome": true,
///     "unique_characters": 4,
///     "word_count": 1,
///     "sha256_hash": "…sha256…",
///     "character_frequency_map": { "a": 2, "c": 2, "e": 1, "r": 2 }
///   },
///   "created_at": "2025-01-01T00:00:00Z"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StringRecord {
    pub id: String,
    pub value: String,
    pub properties: StringProperties,
    pub created_at: DateTime<Utc>,
}

/// The computed properties of a record, without the value itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StringProperties {
    pub length: usize,
    pub is_palindrome: bool,
    pub unique_characters: usize,
    pub word_count: usize,
    pub sha256_hash: String,
    pub character_frequency_map: FrequencyMap,
}

impl StringRecord {
    /// Build a record from a fresh analysis.
    pub fn new(analysis: StringAnalysis, created_at: DateTime<Utc>) -> Self {
        let StringAnalysis {
            value,
            length,
            is_palindrome,
            unique_characters,
            word_count,
            hash,
            frequency,
        } = analysis;

        Self {
            id: hash.clone(),
            value,
            properties: StringProperties {
                length,
                is_palindrome,
                unique_characters,
                word_count,
                sha256_hash: hash,
                character_frequency_map: frequency,
            },
            created_at,
        }
    }

    /// Reconstruct the analysis this record was built from.
    pub fn analysis(&self) -> StringAnalysis {
        StringAnalysis {
            value: self.value.clone(),
            length: self.properties.length,
            is_palindrome: self.properties.is_palindrome,
            unique_characters: self.properties.unique_characters,
            word_count: self.properties.word_count,
            hash: self.properties.sha256_hash.clone(),
            frequency: self.properties.character_frequency_map.clone(),
        }
    }
}
