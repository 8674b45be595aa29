//! Workspace umbrella crate for the string analyzer.
//!
//! Re-exports the pure analysis API from `analyzer` and the persistence API
//! from `store`, so embedders can analyze and persist strings without running
//! the HTTP server:
//!
//! ```
//! use string_analyzer::{analyze, BackendConfig, StringStore};
//!
//! let analysis = analyze("taco cat");
//! assert!(analysis.is_palindrome);
//!
//! let store = StringStore::open(&BackendConfig::in_memory()).unwrap();
//! let record = store.create("taco cat").unwrap();
//! assert_eq!(record.analysis(), analysis);
//! ```

pub use analyzer::{
    AnalyzeError, FilterError, FrequencyMap, NaturalLanguageError, StringAnalysis, StringFilter,
    analyze, analyze_json, character_frequency, is_palindrome, length, parse_natural_language,
    sha256_hex, unique_characters, word_count,
};
#[cfg(feature = "redb")]
pub use store::RedbBackend;
pub use store::{
    BackendConfig, InMemoryBackend, StorageBackend, StoreError, StringProperties, StringRecord,
    StringStore,
};

