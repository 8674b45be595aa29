//! # String Analysis
//!
//! Pure, stateless computations over a single input string. The central
//! entry point is [`analyze`], which produces a [`StringAnalysis`] record:
//!
//! - **length**: number of Unicode scalar values
//! - **is_palindrome**: case-insensitive, whitespace-insensitive comparison
//!   (see [`palindrome`])
//! - **unique_characters**: number of distinct characters
//! - **word_count**: number of whitespace-separated words
//! - **hash**: SHA-256 of the UTF-8 bytes, lowercase hex
//! - **frequency**: per-character occurrence counts
//!
//! On top of the analysis this crate provides [`StringFilter`] for property
//! based selection and [`parse_natural_language`] for turning plain-English
//! queries like `"single word palindromic strings"` into a filter.
//!
//! ## Example
//!
//! ```
//! use analyzer::analyze;
//!
//! let analysis = analyze("racecar");
//! assert!(analysis.is_palindrome);
//! assert_eq!(analysis.length, 7);
//! assert_eq!(analysis.unique_characters, 4);
//! assert_eq!(analysis.frequency[&'r'], 2);
//! ```
//!
//! Every function here is total over `&str`; the only failure mode is
//! [`analyze_json`] being handed a JSON value that is not a string.

mod analysis;
mod error;
mod filter;
pub mod hash;
mod natural;
pub mod palindrome;

pub use analysis::{
    analyze, analyze_json, character_frequency, length, unique_characters, word_count,
    FrequencyMap, StringAnalysis,
};
pub use error::{AnalyzeError, FilterError, NaturalLanguageError};
pub use filter::StringFilter;
pub use hash::sha256_hex;
pub use natural::parse_natural_language;
pub use palindrome::is_palindrome;
