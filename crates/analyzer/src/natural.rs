//! Plain-English query parsing.
//!
//! Recognized phrases (matched on the lowercased, trimmed query):
//!
//! | Phrase                                       | Filter                        |
//! |----------------------------------------------|-------------------------------|
//! | `single word`, `one word`, `one-word`        | `word_count = 1`              |
//! | `palindrome`, `palindromic`                  | `is_palindrome = true`        |
//! | `longer than N`                              | `min_length = N + 1`          |
//! | `at least N`, `>= N`, `greater than or equal to N` | `min_length = N`        |
//! | `shorter than N`                             | `max_length = N - 1` (min 0)  |
//! | `contain(s/ing) [the] letter X`              | `contains_character = X`      |
//! | `containing X` (X a lone letter)             | `contains_character = X`      |
//! | `first vowel`                                | `contains_character = 'a'`, `is_palindrome = true` |

use crate::error::NaturalLanguageError;
use crate::filter::StringFilter;
use once_cell::sync::Lazy;
use regex::Regex;

static SINGLE_WORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(?:single|one)[ -]?word\b").expect("valid regex"));
static LONGER_THAN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"longer than (\d+)").expect("valid regex"));
static AT_LEAST: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:at least|>=|greater than or equal to) (\d+)").expect("valid regex")
});
static SHORTER_THAN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"shorter than (\d+)").expect("valid regex"));
static LETTER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"contain(?:ing|s)? (?:the )?letter ([a-z])\b").expect("valid regex")
});
static CONTAINING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"containing ([a-z])\b").expect("valid regex"));

/// Translate a plain-English query into a [`StringFilter`].
///
/// Fails with [`NaturalLanguageError::Unrecognized`] when no phrase matched
/// and [`NaturalLanguageError::Conflicting`] when the parsed criteria cannot
/// be satisfied together.
///
/// ```
/// use analyzer::parse_natural_language;
///
/// let filter = parse_natural_language("all single word palindromic strings").unwrap();
/// assert_eq!(filter.word_count, Some(1));
/// assert_eq!(filter.is_palindrome, Some(true));
/// ```
pub fn parse_natural_language(query: &str) -> Result<StringFilter, NaturalLanguageError> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return Err(NaturalLanguageError::Empty);
    }

    let mut filter = StringFilter::new();

    if SINGLE_WORD.is_match(&query) {
        filter.word_count = Some(1);
    }

    let first_vowel = query.contains("first vowel");

    if first_vowel || query.contains("palindrom") {
        filter.is_palindrome = Some(true);
    }

    if let Some(n) = capture_number(&LONGER_THAN, &query) {
        filter.min_length = Some(n.saturating_add(1));
    }

    if let Some(n) = capture_number(&AT_LEAST, &query) {
        filter.min_length = Some(n);
    }

    if let Some(n) = capture_number(&SHORTER_THAN, &query) {
        filter.max_length = Some(n.saturating_sub(1));
    }

    filter.contains_character = capture_letter(&LETTER, &query)
        .or_else(|| capture_letter(&CONTAINING, &query))
        .or_else(|| first_vowel.then_some('a'));

    if filter.is_empty() {
        return Err(NaturalLanguageError::Unrecognized);
    }

    filter
        .validate()
        .map_err(NaturalLanguageError::Conflicting)?;

    Ok(filter)
}

fn capture_number(pattern: &Regex, query: &str) -> Option<usize> {
    pattern
        .captures(query)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

fn capture_letter(pattern: &Regex, query: &str) -> Option<char> {
    pattern
        .captures(query)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().chars().next())
}
